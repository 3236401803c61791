use cinemawords_core::markers::HERO_HEADLINE_SELECTOR;
use wasm_bindgen::JsValue;
use web_sys::Document;

use crate::dom;

/// The hero headline is shown immediately instead of waiting on a reveal.
pub(crate) fn install(document: &Document) -> Result<bool, JsValue> {
    let Some(headline) = dom::query(document, HERO_HEADLINE_SELECTOR) else {
        return Ok(false);
    };
    dom::set_style(&headline, "opacity", "1")?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::fixture;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn forces_full_opacity() {
        let root = fixture::mount(r#"<h1 class="hero__headline reveal" style="opacity: 0"></h1>"#);
        let document = dom::document().expect("document");
        assert_eq!(install(&document), Ok(true));
        let headline = dom::query(&document, HERO_HEADLINE_SELECTOR).expect("headline");
        assert_eq!(dom::style_value(&headline, "opacity"), "1");
        root.remove();
    }
}
