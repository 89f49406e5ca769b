//! Deterministic author chooser for tests.

use crate::traits::AuthorChooser;

/// Author chooser that replays a fixed sequence of indices.
///
/// The sequence repeats once exhausted. Indices are reduced modulo the
/// profile count, so `FixedChooser::always(7)` is valid for any set.
///
/// # Example
///
/// ```
/// use chirp::adapters::mock::FixedChooser;
/// use chirp::traits::AuthorChooser;
///
/// let mut chooser = FixedChooser::cycle(vec![1, 2]);
/// assert_eq!(chooser.choose(4), 1);
/// assert_eq!(chooser.choose(4), 2);
/// assert_eq!(chooser.choose(4), 1);
/// ```
#[derive(Debug, Clone)]
pub struct FixedChooser {
    picks: Vec<usize>,
    cursor: usize,
    /// Number of times `choose` was called
    calls: usize,
}

impl FixedChooser {
    /// Always pick `index`.
    pub fn always(index: usize) -> Self {
        Self::cycle(vec![index])
    }

    /// Pick each index in turn, starting over at the end.
    pub fn cycle(picks: Vec<usize>) -> Self {
        let picks = if picks.is_empty() { vec![0] } else { picks };
        Self {
            picks,
            cursor: 0,
            calls: 0,
        }
    }

    pub fn calls(&self) -> usize {
        self.calls
    }
}

impl AuthorChooser for FixedChooser {
    fn choose(&mut self, count: usize) -> usize {
        self.calls += 1;
        let pick = self.picks[self.cursor % self.picks.len()];
        self.cursor += 1;
        if count == 0 {
            0
        } else {
            pick % count
        }
    }
}
