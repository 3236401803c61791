pub const NAV_SCROLL_THRESHOLD_PX: f64 = 30.0;

/// The nav carries the scrolled class only once the page has moved past the
/// threshold; an offset exactly on the threshold still counts as "top".
pub fn nav_is_scrolled(scroll_y: f64, threshold_px: f64) -> bool {
    scroll_y > threshold_px
}

pub fn aria_expanded_value(open: bool) -> &'static str {
    if open {
        "true"
    } else {
        "false"
    }
}

