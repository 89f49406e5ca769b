//! Identifier allocation abstraction.

/// Allocates identifiers for posts and replies.
///
/// Posts and replies share one sequence; the only requirement is that no
/// value is handed out twice within a session.
pub trait IdGenerator: Send {
    fn next_id(&mut self) -> u64;
}
