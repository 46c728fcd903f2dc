use std::collections::HashSet;

use crate::objects::body::BodyId;

/// Unordered body pairs already handled during the current tick.
#[derive(Debug, Clone, Default)]
pub struct FramePairs {
    pairs: HashSet<(BodyId, BodyId)>,
}

fn key(a: BodyId, b: BodyId) -> (BodyId, BodyId) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

impl FramePairs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the pair. Returns `false` if it was already recorded this tick.
    pub fn mark(&mut self, a: BodyId, b: BodyId) -> bool {
        self.pairs.insert(key(a, b))
    }

    pub fn clear(&mut self) {
        self.pairs.clear();
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}
