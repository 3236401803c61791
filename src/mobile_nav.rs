use cinemawords_core::markers::{ARIA_EXPANDED, BURGER_ID, MOBILE_NAV_ID, OPEN_CLASS};
use cinemawords_core::aria_expanded_value;
use gloo::events::EventListener;
use web_sys::Document;

use crate::dom;

pub(crate) struct MobileNav {
    _listener: EventListener,
}

pub(crate) fn install(document: &Document) -> Option<MobileNav> {
    let burger = dom::by_id(document, BURGER_ID)?;
    let panel = dom::by_id(document, MOBILE_NAV_ID)?;
    let burger_for_click = burger.clone();
    let listener = EventListener::new(&burger, "click", move |_event| {
        let classes = panel.class_list();
        let _ = classes.toggle(OPEN_CLASS);
        let open = classes.contains(OPEN_CLASS);
        let _ = burger_for_click.set_attribute(ARIA_EXPANDED, aria_expanded_value(open));
    });
    Some(MobileNav {
        _listener: listener,
    })
}
