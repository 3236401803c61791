use std::cell::RefCell;

use cinemawords_core::PageConfig;
use gloo::console;

use crate::cursor::{self, CustomCursor};
use crate::mobile_nav::{self, MobileNav};
use crate::rating_bar::{self, RatingBar};
use crate::reveal::{self, Reveal};
use crate::scroll_nav::{self, ScrollNav};
use crate::{dom, hero, messages, page_config};

/// Everything that has to stay alive for the page lifetime. Dropping a field
/// detaches its listeners or cancels its pending frame/timer.
#[derive(Default)]
pub(crate) struct Page {
    pub(crate) scroll_nav: Option<ScrollNav>,
    pub(crate) mobile_nav: Option<MobileNav>,
    pub(crate) reveal: Option<Reveal>,
    pub(crate) rating_bar: Option<RatingBar>,
    pub(crate) cursor: Option<CustomCursor>,
    pub(crate) messages: usize,
}

thread_local! {
    static PAGE: RefCell<Option<Page>> = RefCell::new(None);
}

pub(crate) fn install() {
    let installed = PAGE.with(|slot| slot.borrow().is_some());
    if installed {
        return;
    }
    let Some(window) = dom::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };
    let config = page_config::load_page_config(&document);
    let page = install_with(&window, &document, &config);
    console::log!(format!(
        "page: installed (nav {}, menu {}, reveal {}, rating {}, cursor {}, messages {})",
        page.scroll_nav.is_some(),
        page.mobile_nav.is_some(),
        page.reveal.is_some(),
        page.rating_bar.is_some(),
        page.cursor.is_some(),
        page.messages,
    ));
    PAGE.with(|slot| {
        *slot.borrow_mut() = Some(page);
    });
}

pub(crate) fn install_with(
    window: &web_sys::Window,
    document: &web_sys::Document,
    config: &PageConfig,
) -> Page {
    let mut page = Page {
        scroll_nav: scroll_nav::install(window, document, config.nav_scroll_threshold_px),
        mobile_nav: mobile_nav::install(document),
        ..Page::default()
    };
    match reveal::install(document, config) {
        Ok(reveal) => page.reveal = reveal,
        Err(err) => console::warn!("page: reveal observer unavailable", err),
    }
    page.rating_bar = rating_bar::install(document, config.rating_bar_delay_ms);
    if let Err(err) = hero::install(document) {
        console::warn!("page: hero headline override failed", err);
    }
    if config.custom_cursor {
        match cursor::install(window, document) {
            Ok(cursor) => page.cursor = cursor,
            Err(err) => console::warn!("page: custom cursor unavailable", err),
        }
    }
    page.messages = messages::install(document, config.message_schedule());
    page
}
