pub const MESSAGE_DISMISS_DELAY_MS: u32 = 5000;
pub const MESSAGE_REMOVE_DELAY_MS: u32 = 400;

pub const MESSAGE_FADE_TRANSITION: &str = "opacity 0.4s ease, transform 0.4s ease";
pub const MESSAGE_FADE_OPACITY: &str = "0";
pub const MESSAGE_FADE_TRANSFORM: &str = "translateX(20px)";

pub const MESSAGE_FADE_STYLE: [(&str, &str); 3] = [
    ("transition", MESSAGE_FADE_TRANSITION),
    ("opacity", MESSAGE_FADE_OPACITY),
    ("transform", MESSAGE_FADE_TRANSFORM),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MessageSchedule {
    pub dismiss_after_ms: u32,
    pub remove_after_ms: u32,
}

impl Default for MessageSchedule {
    fn default() -> Self {
        Self {
            dismiss_after_ms: MESSAGE_DISMISS_DELAY_MS,
            remove_after_ms: MESSAGE_REMOVE_DELAY_MS,
        }
    }
}
