pub mod config;
pub mod cursor;
pub mod markers;
pub mod message;
pub mod nav;
pub mod rating;
pub mod reveal;

pub use config::{ConfigError, PageConfig};
pub use cursor::{CursorEvent, CursorPatch, CursorState};
pub use message::MessageSchedule;
pub use nav::{aria_expanded_value, nav_is_scrolled};
pub use rating::RatingBarAnimation;
pub use reveal::{RevealAction, RevealTracker};
