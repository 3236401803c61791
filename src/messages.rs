use cinemawords_core::markers::MESSAGE_SELECTOR;
use cinemawords_core::message::MESSAGE_FADE_STYLE;
use cinemawords_core::MessageSchedule;
use gloo::timers::callback::Timeout;
use web_sys::{Document, Element};

use crate::dom;

/// Schedules fade-out and removal for every message present at load. The
/// timers are detached and never cancelled.
pub(crate) fn install(document: &Document, schedule: MessageSchedule) -> usize {
    let messages = dom::query_all(document, MESSAGE_SELECTOR);
    let count = messages.len();
    for message in messages {
        Timeout::new(schedule.dismiss_after_ms, move || {
            fade_out(&message);
            Timeout::new(schedule.remove_after_ms, move || {
                message.remove();
            })
            .forget();
        })
        .forget();
    }
    count
}

fn fade_out(message: &Element) {
    for (property, value) in MESSAGE_FADE_STYLE {
        let _ = dom::set_style(message, property, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::fixture;
    use gloo::timers::future::TimeoutFuture;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test(async)]
    async fn fades_then_removes() {
        let root = fixture::mount(
            r#"<div class="message" id="msg-a">Saved</div><svg class="message" id="msg-b"></svg>"#,
        );
        let document = dom::document().expect("document");
        let schedule = MessageSchedule {
            dismiss_after_ms: 100,
            remove_after_ms: 100,
        };
        assert_eq!(install(&document, schedule), 2);

        TimeoutFuture::new(40).await;
        let message = dom::by_id(&document, "msg-a").expect("still present");
        assert_eq!(dom::style_value(&message, "opacity"), "");

        TimeoutFuture::new(110).await;
        assert_eq!(dom::style_value(&message, "opacity"), "0");
        assert_eq!(dom::style_value(&message, "transform"), "translateX(20px)");
        assert!(message.is_connected());
        let svg_message = dom::by_id(&document, "msg-b").expect("svg still present");
        assert_eq!(dom::style_value(&svg_message, "opacity"), "0");

        TimeoutFuture::new(150).await;
        assert!(dom::by_id(&document, "msg-a").is_none());
        assert!(dom::by_id(&document, "msg-b").is_none());

        root.remove();
    }
}
