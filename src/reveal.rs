use std::cell::RefCell;
use std::rc::Rc;

use cinemawords_core::markers::{REVEAL_SELECTOR, VISIBLE_CLASS};
use cinemawords_core::{PageConfig, RevealAction, RevealTracker};
use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};

use crate::dom;

pub(crate) struct Reveal {
    #[cfg_attr(not(test), allow(dead_code))]
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Reveal {
    #[cfg(test)]
    fn disconnect(&self) {
        self.observer.disconnect();
    }
}

pub(crate) fn install(document: &Document, config: &PageConfig) -> Result<Option<Reveal>, JsValue> {
    let targets = dom::query_all(document, REVEAL_SELECTOR);
    if targets.is_empty() {
        return Ok(None);
    }
    let tracker = Rc::new(RefCell::new(RevealTracker::new(targets.len())));
    let targets = Rc::new(targets);

    let tracked = Rc::clone(&targets);
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                let Some(index) = tracked.iter().position(|el| *el == target) else {
                    continue;
                };
                let action = tracker
                    .borrow_mut()
                    .on_intersection(index, entry.is_intersecting());
                if action == RevealAction::Reveal {
                    reveal(&target);
                    observer.unobserve(&target);
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(config.reveal_threshold));
    options.set_root_margin(&config.reveal_root_margin);
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    for target in targets.iter() {
        observer.observe(target);
    }
    Ok(Some(Reveal {
        observer,
        _callback: callback,
    }))
}

fn reveal(target: &Element) {
    let _ = target.class_list().add_1(VISIBLE_CLASS);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::fixture;
    use gloo::timers::future::TimeoutFuture;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test(async)]
    async fn reveals_once_then_stops_observing() {
        let root = fixture::mount(
            r#"<div class="reveal" id="reveal-top" style="position: fixed; top: 0; left: 0; width: 200px; height: 200px"></div>
<div class="reveal" id="reveal-far" style="position: absolute; top: 20000px; height: 50px"></div>"#,
        );
        let document = dom::document().expect("document");
        let handle = install(&document, &PageConfig::default())
            .expect("observer")
            .expect("reveal targets");

        TimeoutFuture::new(200).await;
        let top = dom::by_id(&document, "reveal-top").expect("top");
        let far = dom::by_id(&document, "reveal-far").expect("far");
        assert!(top.class_list().contains(VISIBLE_CLASS));
        assert!(!far.class_list().contains(VISIBLE_CLASS));

        // Unobserved after the first reveal, so the class is not re-applied.
        let _ = top.class_list().remove_1(VISIBLE_CLASS);
        let _ = dom::set_style(&top, "top", "10px");
        TimeoutFuture::new(200).await;
        assert!(!top.class_list().contains(VISIBLE_CLASS));

        handle.disconnect();
        root.remove();
    }

    #[wasm_bindgen_test]
    fn skipped_without_targets() {
        let document = dom::document().expect("document");
        let installed = install(&document, &PageConfig::default()).expect("no error");
        assert!(installed.is_none());
    }
}
