//! Random author selection.

use rand::Rng;

use crate::traits::AuthorChooser;

/// Picks an author uniformly at random from the profile set.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomAuthorChooser;

impl RandomAuthorChooser {
    pub fn new() -> Self {
        Self
    }
}

impl AuthorChooser for RandomAuthorChooser {
    fn choose(&mut self, count: usize) -> usize {
        if count == 0 {
            return 0;
        }
        rand::thread_rng().gen_range(0..count)
    }
}
