pub const REVEAL_THRESHOLD: f64 = 0.08;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -40px 0px";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealAction {
    Reveal,
    Ignore,
}

/// One-shot reveal bookkeeping for a fixed set of tracked elements, addressed
/// by their position in the initial query result.
#[derive(Clone, Debug, Default)]
pub struct RevealTracker {
    revealed: Vec<bool>,
}

impl RevealTracker {
    pub fn new(len: usize) -> Self {
        Self {
            revealed: vec![false; len],
        }
    }

    pub fn on_intersection(&mut self, index: usize, is_intersecting: bool) -> RevealAction {
        if !is_intersecting {
            return RevealAction::Ignore;
        }
        let Some(flag) = self.revealed.get_mut(index) else {
            return RevealAction::Ignore;
        };
        if *flag {
            return RevealAction::Ignore;
        }
        *flag = true;
        RevealAction::Reveal
    }
}
