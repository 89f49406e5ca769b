//! Author selection abstraction.

/// Chooses which profile authors a newly composed post.
///
/// Implementations receive the number of available profiles and return an
/// index into the profile set. Out-of-range indices are wrapped by the
/// caller, so a chooser never needs to know the profiles themselves.
///
/// # Example
///
/// ```
/// use chirp::traits::AuthorChooser;
///
/// struct AlwaysFirst;
///
/// impl AuthorChooser for AlwaysFirst {
///     fn choose(&mut self, _count: usize) -> usize {
///         0
///     }
/// }
///
/// assert_eq!(AlwaysFirst.choose(4), 0);
/// ```
pub trait AuthorChooser: Send {
    /// Return an index in `0..count`. Only called with `count > 0`.
    fn choose(&mut self, count: usize) -> usize;
}
