pub const RATING_BAR_DELAY_MS: u32 = 400;
pub const COLLAPSED_WIDTH: &str = "0";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum RatingBarAnimation {
    #[default]
    Idle,
    Collapsed {
        width: String,
    },
    Restored,
}

impl RatingBarAnimation {
    /// Captures the current inline width and returns the width to paint
    /// first. Only the first call starts the sequence.
    pub fn collapse(&mut self, current_width: &str) -> Option<&'static str> {
        if *self != RatingBarAnimation::Idle {
            return None;
        }
        *self = RatingBarAnimation::Collapsed {
            width: current_width.to_string(),
        };
        Some(COLLAPSED_WIDTH)
    }

    pub fn restore(&mut self) -> Option<String> {
        match std::mem::replace(self, RatingBarAnimation::Restored) {
            RatingBarAnimation::Collapsed { width } => Some(width),
            previous => {
                *self = previous;
                None
            }
        }
    }

    pub fn is_finished(&self) -> bool {
        *self == RatingBarAnimation::Restored
    }
}
