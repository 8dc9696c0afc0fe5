use std::{cell::RefCell, rc::Rc};

use dioxus::prelude::*;
use gloo_timers::callback::Interval;
use js_sys::Array;
use tracing::debug;
use wasm_bindgen::{JsCast, JsValue, closure::Closure};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use showcase_common::nav::HeaderVariant;

// a listener registered on the global window
//
// the listener is removed when the value is dropped, so holding one inside a component hook ties
// the subscription to that component's lifetime
pub struct WindowListener {
    event: &'static str,
    callback: Closure<dyn FnMut()>,
}

impl WindowListener {
    pub fn subscribe(event: &'static str, handler: impl FnMut() + 'static) -> Option<Self> {
        let window = web_sys::window()?;
        let callback = Closure::<dyn FnMut()>::new(handler);

        window
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .ok()?;

        debug!("subscribed to window {event} events");
        Some(WindowListener { event, callback })
    }
}

impl Drop for WindowListener {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            let _ = window.remove_event_listener_with_callback(
                self.event,
                self.callback.as_ref().unchecked_ref(),
            );
        }
        debug!("unsubscribed from window {} events", self.event);
    }
}

// share of an element that has to be on screen before it is revealed
pub const REVEAL_THRESHOLD: f64 = 0.1;

// one-shot intersection observer on a single element
//
// the first time the element crosses the threshold the observer disconnects itself and runs
// `on_visible`; dropping the value disconnects it as well
pub struct RevealObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl RevealObserver {
    pub fn observe(element: &Element, on_visible: impl FnOnce() + 'static) -> Option<Self> {
        let mut on_visible = Some(on_visible);

        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, observer: IntersectionObserver| {
                let intersecting = entries
                    .iter()
                    .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                    .any(|entry| entry.is_intersecting());

                if intersecting {
                    observer.disconnect();
                    if let Some(on_visible) = on_visible.take() {
                        on_visible();
                    }
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));

        let observer = IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            &options,
        )
        .ok()?;
        observer.observe(element);

        Some(RevealObserver {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

// visibility flag for an element that should animate in when it first scrolls into view
//
// `watch` is meant for the element's onmounted handler; the flag never goes back to false
#[derive(Clone)]
pub struct RevealState {
    visible: Signal<bool>,
    observer: Rc<RefCell<Option<RevealObserver>>>,
}

impl RevealState {
    pub fn is_visible(&self) -> bool {
        *self.visible.read()
    }

    pub fn watch(&self, element: &Element) {
        if *self.visible.peek() {
            return;
        }

        let mut visible = self.visible;
        match RevealObserver::observe(element, move || visible.set(true)) {
            Some(observer) => {
                self.observer.borrow_mut().replace(observer);
            }
            None => {
                // no observer support, show the element straight away
                debug!("intersection observer unavailable, revealing immediately");
                let mut visible = self.visible;
                visible.set(true);
            }
        }
    }
}

pub fn use_reveal() -> RevealState {
    let visible = use_signal(|| false);
    let observer = use_hook(|| Rc::new(RefCell::new(None::<RevealObserver>)));

    use_drop({
        let observer = observer.clone();
        move || {
            observer.borrow_mut().take();
        }
    });

    RevealState { visible, observer }
}

pub fn scroll_offset() -> f64 {
    web_sys::window()
        .and_then(|window| window.scroll_y().ok())
        .unwrap_or(0.0)
}

// header variant that follows the window scroll position
//
// recomputed on every scroll event; the signal is only written when the variant flips
pub fn use_header_variant() -> Signal<HeaderVariant> {
    let mut variant = use_signal(|| HeaderVariant::for_scroll(scroll_offset()));

    let subscription = use_hook(|| {
        let listener = WindowListener::subscribe("scroll", move || {
            let next = HeaderVariant::for_scroll(scroll_offset());
            if *variant.peek() != next {
                variant.set(next);
            }
        });
        Rc::new(RefCell::new(listener))
    });

    use_drop(move || {
        subscription.borrow_mut().take();
    });

    variant
}

// recurring timer owned by the calling component; cancelled when the component is torn down
pub fn use_interval(period_ms: u32, on_tick: impl FnMut() + 'static) {
    let handle = use_hook(|| Rc::new(RefCell::new(Some(Interval::new(period_ms, on_tick)))));

    use_drop(move || {
        if let Some(interval) = handle.borrow_mut().take() {
            interval.cancel();
            debug!("cancelled {period_ms}ms interval");
        }
    });
}
