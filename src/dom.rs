use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CssStyleDeclaration, Document, Element, HtmlElement, SvgElement, Window};

pub(crate) fn window() -> Option<Window> {
    web_sys::window()
}

pub(crate) fn document() -> Option<Document> {
    window()?.document()
}

pub(crate) fn by_id(document: &Document, id: &str) -> Option<Element> {
    document.get_element_by_id(id)
}

pub(crate) fn query(document: &Document, selector: &str) -> Option<Element> {
    document.query_selector(selector).ok().flatten()
}

pub(crate) fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|index| list.item(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub(crate) fn html(element: &Element) -> Option<&HtmlElement> {
    element.dyn_ref::<HtmlElement>()
}

/// Inline style of an HTML or SVG element; other element kinds have none.
pub(crate) fn inline_style(element: &Element) -> Option<CssStyleDeclaration> {
    if let Some(html) = html(element) {
        return Some(html.style());
    }
    element.dyn_ref::<SvgElement>().map(SvgElement::style)
}

pub(crate) fn set_style(element: &Element, property: &str, value: &str) -> Result<(), JsValue> {
    let Some(style) = inline_style(element) else {
        return Ok(());
    };
    style.set_property(property, value)
}

pub(crate) fn style_value(element: &Element, property: &str) -> String {
    inline_style(element)
        .and_then(|style| style.get_property_value(property).ok())
        .unwrap_or_default()
}

#[cfg(test)]
pub(crate) mod fixture {
    use super::*;

    /// Mounts `markup` in a fresh container under `body` and returns the
    /// container; callers remove it when done.
    pub(crate) fn mount(markup: &str) -> Element {
        let document = document().expect("document");
        let root = document.create_element("div").expect("fixture root");
        root.set_inner_html(markup);
        document
            .body()
            .expect("body")
            .append_child(&root)
            .expect("append fixture");
        root
    }

    pub(crate) fn click(element: &Element) {
        if let Some(html) = html(element) {
            html.click();
        }
    }

    pub(crate) fn dispatch_mouse(target: &web_sys::EventTarget, kind: &str, x: i32, y: i32) {
        let init = web_sys::MouseEventInit::new();
        init.set_client_x(x);
        init.set_client_y(y);
        let event =
            web_sys::MouseEvent::new_with_mouse_event_init_dict(kind, &init).expect("mouse event");
        target.dispatch_event(&event).expect("dispatch");
    }
}
