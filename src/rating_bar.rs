use std::cell::RefCell;
use std::rc::Rc;

use cinemawords_core::markers::RATING_FILL_SELECTOR;
use cinemawords_core::RatingBarAnimation;
use gloo::render::{request_animation_frame, AnimationFrame};
use gloo::timers::callback::Timeout;
use web_sys::{Document, Element};

use crate::dom;

struct RatingBarState {
    fill: Element,
    animation: RefCell<RatingBarAnimation>,
    frame: RefCell<Option<AnimationFrame>>,
}

pub(crate) struct RatingBar {
    #[cfg_attr(not(test), allow(dead_code))]
    state: Rc<RatingBarState>,
    _timer: Timeout,
}

impl RatingBar {
    #[cfg(test)]
    fn is_finished(&self) -> bool {
        self.state.animation.borrow().is_finished()
    }
}

/// Re-runs the fill's width transition once: collapse to zero after the
/// delay, then restore the inline width two frames later so the collapsed
/// state has painted.
pub(crate) fn install(document: &Document, delay_ms: u32) -> Option<RatingBar> {
    let fill = dom::query(document, RATING_FILL_SELECTOR)?;
    let state = Rc::new(RatingBarState {
        fill,
        animation: RefCell::new(RatingBarAnimation::default()),
        frame: RefCell::new(None),
    });
    let timer_state = Rc::clone(&state);
    let timer = Timeout::new(delay_ms, move || {
        collapse(&timer_state);
    });
    Some(RatingBar {
        state,
        _timer: timer,
    })
}

fn collapse(state: &Rc<RatingBarState>) {
    let width = dom::style_value(&state.fill, "width");
    let Some(collapsed) = state.animation.borrow_mut().collapse(&width) else {
        return;
    };
    let _ = dom::set_style(&state.fill, "width", collapsed);
    let outer = Rc::clone(state);
    let handle = request_animation_frame(move |_| {
        outer.frame.borrow_mut().take();
        let inner = Rc::clone(&outer);
        let handle = request_animation_frame(move |_| {
            inner.frame.borrow_mut().take();
            restore(&inner);
        });
        *outer.frame.borrow_mut() = Some(handle);
    });
    *state.frame.borrow_mut() = Some(handle);
}

fn restore(state: &RatingBarState) {
    let Some(width) = state.animation.borrow_mut().restore() else {
        return;
    };
    let _ = dom::set_style(&state.fill, "width", &width);
}
