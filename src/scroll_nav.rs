use cinemawords_core::markers::{NAV_ID, SCROLLED_CLASS};
use cinemawords_core::nav_is_scrolled;
use gloo::events::{EventListener, EventListenerOptions, EventListenerPhase};
use web_sys::{Document, Element, Window};

use crate::dom;

pub(crate) struct ScrollNav {
    _listener: EventListener,
}

pub(crate) fn install(
    window: &Window,
    document: &Document,
    threshold_px: f64,
) -> Option<ScrollNav> {
    let nav = dom::by_id(document, NAV_ID)?;
    sync(window, &nav, threshold_px);
    let window_for_scroll = window.clone();
    let listener = EventListener::new_with_options(
        window,
        "scroll",
        EventListenerOptions {
            phase: EventListenerPhase::Bubble,
            passive: true,
        },
        move |_event| {
            sync(&window_for_scroll, &nav, threshold_px);
        },
    );
    Some(ScrollNav {
        _listener: listener,
    })
}

fn sync(window: &Window, nav: &Element, threshold_px: f64) {
    let scroll_y = window.scroll_y().unwrap_or(0.0);
    let _ = nav
        .class_list()
        .toggle_with_force(SCROLLED_CLASS, nav_is_scrolled(scroll_y, threshold_px));
}
