//! Per-widget registry of DOM event listeners.
//!
//! Each listener is filed under a logical name ("start", "move", "prev", ...)
//! so a widget can detach exactly its own handlers without touching anything
//! else bound to the same window or element. Dropping the registry detaches
//! everything still attached.

use std::collections::HashMap;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, Event, EventTarget};

struct Listener {
    target: EventTarget,
    event_type: &'static str,
    capture: bool,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    fn remove(&self) {
        let _ = self.target.remove_event_listener_with_callback_and_bool(
            self.event_type,
            self.callback.as_ref().unchecked_ref(),
            self.capture,
        );
    }
}

#[derive(Default)]
pub struct Listeners {
    entries: HashMap<&'static str, Vec<Listener>>,
}

impl Listeners {
    /// Bind `callback` to `event_type` on `target` under `name`. Listeners
    /// are non-passive so move handlers can cancel scrolling.
    pub fn attach(
        &mut self,
        name: &'static str,
        target: &EventTarget,
        event_type: &'static str,
        capture: bool,
        callback: impl FnMut(Event) + 'static,
    ) -> Result<(), JsValue> {
        let callback = Closure::<dyn FnMut(Event)>::new(callback);
        let options = AddEventListenerOptions::new();
        options.set_passive(false);
        options.set_capture(capture);
        target.add_event_listener_with_callback_and_add_event_listener_options(
            event_type,
            callback.as_ref().unchecked_ref(),
            &options,
        )?;
        self.entries.entry(name).or_default().push(Listener {
            target: target.clone(),
            event_type,
            capture,
            callback,
        });
        Ok(())
    }

    /// Remove every listener filed under `name`.
    pub fn detach(&mut self, name: &str) {
        if let Some(listeners) = self.entries.remove(name) {
            for listener in &listeners {
                listener.remove();
            }
        }
    }

    pub fn detach_all(&mut self) {
        for (_, listeners) in self.entries.drain() {
            for listener in &listeners {
                listener.remove();
            }
        }
    }
}

impl Drop for Listeners {
    fn drop(&mut self) {
        self.detach_all();
    }
}
