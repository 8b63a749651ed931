//! Pointer input helpers shared by every carousel on the page.
//!
//! The device kind is probed once per widget and then fixed: touch-capable
//! browsers get `touchstart/touchmove/touchend`, everything else gets the
//! mouse trio. Either way the widget sees one start/move/end contract and a
//! single screen coordinate along its axis.

use wasm_bindgen::JsCast;
use web_sys::{Event, MouseEvent, TouchEvent};
use roto_core::Axis;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputSource {
    Touch,
    Mouse,
}

/// DOM event types for one input source.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EventNames {
    pub start: &'static str,
    pub moved: &'static str,
    pub end: &'static str,
}

impl InputSource {
    /// Touch when the document can create a `TouchEvent`. Any failure while
    /// probing counts as a mouse device.
    pub fn detect() -> InputSource {
        let can_touch = web_sys::window()
            .and_then(|w| w.document())
            .map(|doc| doc.create_event("TouchEvent").is_ok())
            .unwrap_or(false);
        if can_touch { InputSource::Touch } else { InputSource::Mouse }
    }

    pub fn names(self) -> EventNames {
        match self {
            InputSource::Touch => EventNames {
                start: "touchstart",
                moved: "touchmove",
                end: "touchend",
            },
            InputSource::Mouse => EventNames {
                start: "mousedown",
                moved: "mousemove",
                end: "mouseup",
            },
        }
    }

    /// Screen coordinate of the pointer along `axis`. For touch input this
    /// is the first active touch; `None` once all fingers have lifted.
    pub fn coordinate(self, ev: &Event, axis: &Axis) -> Option<f64> {
        match self {
            InputSource::Touch => {
                let touch = ev.dyn_ref::<TouchEvent>()?.touches().get(0)?;
                Some(axis.pick(touch.screen_x(), touch.screen_y()) as f64)
            }
            InputSource::Mouse => {
                let mouse = ev.dyn_ref::<MouseEvent>()?;
                Some(axis.pick(mouse.screen_x(), mouse.screen_y()) as f64)
            }
        }
    }
}
