use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::animation::{self, Preset, Viewport};

/// Decides when an observed element flips between its poses.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealGate {
    viewport: Viewport,
    revealed: bool,
}

impl RevealGate {
    // Observers report ratios like 0.29999 for a 0.3 threshold.
    const SLACK: f64 = 1e-3;

    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            revealed: false,
        }
    }

    pub fn revealed(&self) -> bool {
        self.revealed
    }

    /// Feeds one intersection ratio. Returns the new visibility when it
    /// changed; a `once` gate never changes again after revealing.
    pub fn observe(&mut self, ratio: f64) -> Option<bool> {
        if self.revealed && self.viewport.once {
            return None;
        }
        let visible = ratio + Self::SLACK >= self.viewport.amount;
        if visible == self.revealed {
            return None;
        }
        self.revealed = visible;
        Some(visible)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Trigger {
    /// Animate right after the first render.
    Mount,
    /// Animate when enough of the element scrolls into view.
    InView,
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or(animation::FADE_IN)]
    pub preset: Preset,
    #[prop_or(Trigger::InView)]
    pub trigger: Trigger,
    #[prop_or_default]
    pub delay: f32,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

struct Observation {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Drop for Observation {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

fn observe(element: &Element, viewport: Viewport, on_change: Callback<bool>) -> Option<Observation> {
    let mut gate = RevealGate::new(viewport);
    let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
        let ratio = entries
            .iter()
            .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
            .map(|entry| entry.intersection_ratio())
            .fold(0.0, f64::max);
        if let Some(visible) = gate.observe(ratio) {
            on_change.emit(visible);
            if visible && viewport.once {
                observer.disconnect();
            }
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let mut options = IntersectionObserverInit::new();
    options.threshold(&JsValue::from_f64(viewport.amount));
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options).ok()?;
    observer.observe(element);

    Some(Observation {
        observer,
        _callback: callback,
    })
}

/// Wraps its children in a block that animates from the preset's initial
/// pose to its resting pose, at most once per mount.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let shown = use_state(|| false);

    {
        let node = node.clone();
        let shown = shown.clone();
        let trigger = props.trigger;
        use_effect_with_deps(
            move |_| {
                let mut observation = None;
                match trigger {
                    Trigger::Mount => {
                        // Next task, so the hidden pose gets painted first.
                        Timeout::new(0, move || shown.set(true)).forget();
                    }
                    Trigger::InView => match node.cast::<Element>() {
                        Some(element) => {
                            let on_change = Callback::from(move |visible: bool| shown.set(visible));
                            observation = observe(&element, animation::VIEWPORT, on_change.clone());
                            if observation.is_none() {
                                on_change.emit(true);
                            }
                        }
                        None => shown.set(true),
                    },
                }
                move || drop(observation)
            },
            (),
        );
    }

    html! {
        <div ref={node} class={props.class.clone()} style={props.preset.style(*shown, props.delay)}>
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn once_gate_reveals_a_single_time() {
        let mut gate = RevealGate::new(animation::VIEWPORT);
        assert_eq!(gate.observe(0.1), None);
        assert_eq!(gate.observe(0.2999), Some(true));
        assert_eq!(gate.observe(0.0), None);
        assert_eq!(gate.observe(1.0), None);
        assert!(gate.revealed());
    }

    #[test]
    fn repeating_gate_follows_visibility() {
        let mut gate = RevealGate::new(Viewport {
            once: false,
            amount: 0.5,
        });
        assert_eq!(gate.observe(0.6), Some(true));
        assert_eq!(gate.observe(0.7), None);
        assert_eq!(gate.observe(0.2), Some(false));
        assert!(!gate.revealed());
    }
}
