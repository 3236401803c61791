use std::cell::RefCell;
use std::rc::Rc;

use cinemawords_core::cursor::CURSOR_STYLE;
use cinemawords_core::markers::{FINE_POINTER_QUERY, INTERACTIVE_SELECTOR};
use cinemawords_core::{CursorEvent, CursorState};
use gloo::events::EventListener;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Event, MouseEvent, Window};

use crate::dom;

pub(crate) struct CustomCursor {
    #[cfg_attr(not(test), allow(dead_code))]
    element: Element,
    #[cfg_attr(not(test), allow(dead_code))]
    state: Rc<RefCell<CursorState>>,
    _listeners: Vec<EventListener>,
}

#[cfg(test)]
impl CustomCursor {
    fn element(&self) -> &Element {
        &self.element
    }

    fn position(&self) -> (i32, i32) {
        let state = self.state.borrow();
        (state.x, state.y)
    }
}

pub(crate) fn has_fine_pointer(window: &Window) -> bool {
    window
        .match_media(FINE_POINTER_QUERY)
        .ok()
        .flatten()
        .map(|query| query.matches())
        .unwrap_or(false)
}

pub(crate) fn install(
    window: &Window,
    document: &Document,
) -> Result<Option<CustomCursor>, JsValue> {
    install_with_pointer(has_fine_pointer(window), document)
}

pub(crate) fn install_with_pointer(
    fine_pointer: bool,
    document: &Document,
) -> Result<Option<CustomCursor>, JsValue> {
    if !fine_pointer {
        return Ok(None);
    }
    attach(document).map(Some)
}

/// Creates the tracking dot and wires it to the document's mouse events and
/// to every interactive element present right now.
pub(crate) fn attach(document: &Document) -> Result<CustomCursor, JsValue> {
    let Some(body) = document.body() else {
        return Err(JsValue::from_str("document has no body"));
    };
    let element = document.create_element("div")?;
    element.set_attribute("style", CURSOR_STYLE)?;
    body.append_child(&element)?;

    let state = Rc::new(RefCell::new(CursorState::default()));
    let mut listeners = Vec::new();

    let (cursor, cursor_state) = (element.clone(), Rc::clone(&state));
    listeners.push(EventListener::new(document, "mousemove", move |event: &Event| {
        let Some(event) = event.dyn_ref::<MouseEvent>() else {
            return;
        };
        apply(
            &cursor,
            &cursor_state,
            CursorEvent::Move {
                x: event.client_x(),
                y: event.client_y(),
            },
        );
    }));

    for (kind, cursor_event) in [
        ("mousedown", CursorEvent::Press),
        ("mouseup", CursorEvent::Release),
    ] {
        let (cursor, cursor_state) = (element.clone(), Rc::clone(&state));
        listeners.push(EventListener::new(document, kind, move |_event| {
            apply(&cursor, &cursor_state, cursor_event);
        }));
    }

    for target in dom::query_all(document, INTERACTIVE_SELECTOR) {
        for (kind, cursor_event) in [
            ("mouseenter", CursorEvent::EnterInteractive),
            ("mouseleave", CursorEvent::LeaveInteractive),
        ] {
            let (cursor, cursor_state) = (element.clone(), Rc::clone(&state));
            listeners.push(EventListener::new(&target, kind, move |_event| {
                apply(&cursor, &cursor_state, cursor_event);
            }));
        }
    }

    Ok(CustomCursor {
        element,
        state,
        _listeners: listeners,
    })
}

fn apply(cursor: &Element, state: &RefCell<CursorState>, event: CursorEvent) {
    let patch = state.borrow_mut().apply(event);
    for (property, value) in patch.properties() {
        let _ = dom::set_style(cursor, property, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::fixture;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn body_children(document: &Document) -> u32 {
        document.body().expect("body").child_element_count()
    }

    #[wasm_bindgen_test]
    fn coarse_pointer_gets_no_cursor() {
        let document = dom::document().expect("document");
        let before = body_children(&document);
        let installed = install_with_pointer(false, &document).expect("no error");
        assert!(installed.is_none());
        assert_eq!(body_children(&document), before);
    }

    #[wasm_bindgen_test]
    fn fine_pointer_appends_one_cursor() {
        let document = dom::document().expect("document");
        let before = body_children(&document);
        let cursor = install_with_pointer(true, &document)
            .expect("no error")
            .expect("cursor");
        assert_eq!(body_children(&document), before + 1);
        let dot = cursor.element().clone();
        drop(cursor);
        dot.remove();
        assert_eq!(body_children(&document), before);
    }

    #[wasm_bindgen_test]
    fn tracks_pointer_and_hides_over_links() {
        let root = fixture::mount(r##"<a href="#" id="cursor-link">link</a>"##);
        let document = dom::document().expect("document");
        let cursor = attach(&document).expect("cursor");
        let dot = cursor.element().clone();
        assert_eq!(dom::style_value(&dot, "position"), "fixed");

        fixture::dispatch_mouse(&document, "mousemove", 140, 60);
        assert_eq!(dom::style_value(&dot, "left"), "140px");
        assert_eq!(dom::style_value(&dot, "top"), "60px");
        assert_eq!(cursor.position(), (140, 60));

        fixture::dispatch_mouse(&document, "mousedown", 140, 60);
        assert_eq!(dom::style_value(&dot, "opacity"), "0.4");
        assert_eq!(
            dom::style_value(&dot, "transform"),
            "translate(-50%, -50%) scale(2)"
        );
        fixture::dispatch_mouse(&document, "mouseup", 140, 60);
        assert_eq!(dom::style_value(&dot, "opacity"), "1");

        let link = dom::by_id(&document, "cursor-link").expect("link");
        fixture::dispatch_mouse(&link, "mouseenter", 0, 0);
        assert_eq!(dom::style_value(&dot, "opacity"), "0");
        fixture::dispatch_mouse(&link, "mouseleave", 0, 0);
        assert_eq!(dom::style_value(&dot, "opacity"), "1");

        drop(cursor);
        dot.remove();
        root.remove();
    }
}
