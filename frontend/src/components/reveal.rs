//! Scroll-triggered fade-in for every element marked `data-reveal`.

use std::cell::RefCell;
use std::rc::Rc;

use common::ui::reveal::{RevealTracker, Sighting, REVEAL_THRESHOLD};
use gloo_timers::callback::Timeout;
use js_sys::Array;
use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

pub const REVEAL_ATTR: &str = "data-reveal";
const KEY_ATTR: &str = "data-reveal-key";
const VISIBLE_CLASS: &str = "visible";
const ROOT_MARGIN: &str = "0px 0px -100px 0px";

struct Shared {
    tracker: RevealTracker,
    elements: Vec<Element>,
    pending: Vec<Timeout>,
}

/// Owns the observer; dropping it disconnects and cancels pending reveals.
pub struct RevealObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
    shared: Rc<RefCell<Shared>>,
}

impl RevealObserver {
    /// Starts observing the `[data-reveal]` elements of the document that are
    /// not visible yet. Call again after a re-render adds targets; dropping
    /// the previous observer is enough to hand over.
    pub fn attach() -> Option<Self> {
        let document = web_sys::window()?.document()?;
        let nodes = document
            .query_selector_all(&format!("[{}]", REVEAL_ATTR))
            .ok()?;

        let mut elements = Vec::with_capacity(nodes.length() as usize);
        for i in 0..nodes.length() {
            if let Some(element) = nodes.item(i).and_then(|n| n.dyn_into::<Element>().ok()) {
                if !awaiting_reveal(&element.class_name()) {
                    continue;
                }
                let _ = element.set_attribute(KEY_ATTR, &elements.len().to_string());
                elements.push(element);
            }
        }

        let shared = Rc::new(RefCell::new(Shared {
            tracker: RevealTracker::new(),
            elements,
            pending: Vec::new(),
        }));

        let state = Rc::clone(&shared);
        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, observer: IntersectionObserver| {
                on_intersect(&state, &entries, &observer);
            },
        );

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
        init.set_root_margin(ROOT_MARGIN);
        let observer =
            match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
                Ok(observer) => observer,
                Err(e) => {
                    warn!("IntersectionObserver unavailable: {:?}", e);
                    reveal_all(&shared.borrow().elements);
                    return None;
                }
            };

        for element in &shared.borrow().elements {
            observer.observe(element);
        }
        debug!("observing {} reveal targets", shared.borrow().elements.len());

        Some(Self {
            observer,
            _callback: callback,
            shared,
        })
    }
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
        self.shared.borrow_mut().pending.clear();
    }
}

fn on_intersect(shared: &Rc<RefCell<Shared>>, entries: &Array, observer: &IntersectionObserver) {
    let sightings: Vec<Sighting> = entries
        .iter()
        .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
        .filter_map(|entry| {
            let key = entry.target().get_attribute(KEY_ATTR)?.parse().ok()?;
            Some(Sighting {
                key,
                intersecting: entry.is_intersecting(),
                ratio: entry.intersection_ratio(),
            })
        })
        .collect();

    let mut state = shared.borrow_mut();
    for (key, delay) in state.tracker.observe(&sightings) {
        let Some(element) = state.elements.get(key).cloned() else {
            continue;
        };
        observer.unobserve(&element);
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        let timeout = Timeout::new(millis, move || {
            let _ = element.class_list().add_1(VISIBLE_CLASS);
        });
        state.pending.push(timeout);
    }
}

fn reveal_all(elements: &[Element]) {
    for element in elements {
        let _ = element.class_list().add_1(VISIBLE_CLASS);
    }
}

/// Whether an element with this `class` attribute still has to fade in.
fn awaiting_reveal(class_name: &str) -> bool {
    !class_name.split_whitespace().any(|c| c == VISIBLE_CLASS)
}
