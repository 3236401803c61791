use cinemawords_core::markers::CONFIG_ELEMENT_ID;
use cinemawords_core::PageConfig;
use gloo::console;
use web_sys::Document;

use crate::dom;

/// Reads the optional `<script type="application/json">` settings block.
/// A missing block means stock values; a broken one is reported and ignored.
pub(crate) fn load_page_config(document: &Document) -> PageConfig {
    let Some(element) = dom::by_id(document, CONFIG_ELEMENT_ID) else {
        return PageConfig::default();
    };
    let raw = element.text_content().unwrap_or_default();
    if raw.trim().is_empty() {
        return PageConfig::default();
    }
    match PageConfig::from_json(&raw) {
        Ok(config) => config,
        Err(err) => {
            console::warn!(format!("config: {err}; using defaults"));
            PageConfig::default()
        }
    }
}
