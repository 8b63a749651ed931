//! Browser binding for the roto carousel.
//!
//! Three ways in: the `<Carousel>` leptos component, the `roto` / `roto_all`
//! exports for plain pages, and `mount_demo` for a self-contained example.

pub mod components;
pub mod dom;
pub mod input;
pub mod listeners;
pub mod widget;

use wasm_bindgen::prelude::*;
use roto_core::{Options, Step};
use crate::widget::Widget;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
}

#[wasm_bindgen]
pub fn mount_demo() {
    leptos::mount::mount_to_body(components::app::App);
}

/// Handle returned to JavaScript. Freeing it detaches the carousel.
#[wasm_bindgen]
pub struct RotoHandle {
    widget: Widget,
}

#[wasm_bindgen]
impl RotoHandle {
    pub fn id(&self) -> String {
        self.widget.id()
    }

    pub fn prev(&self) -> bool {
        self.widget.step(Step::Prev)
    }

    pub fn next(&self) -> bool {
        self.widget.step(Step::Next)
    }

    pub fn offset(&self) -> f64 {
        self.widget.offset()
    }

    /// Whether the "previous" control is currently enabled.
    #[wasm_bindgen(js_name = canPrev)]
    pub fn can_prev(&self) -> bool {
        self.widget.buttons().prev
    }

    #[wasm_bindgen(js_name = canNext)]
    pub fn can_next(&self) -> bool {
        self.widget.buttons().next
    }

    #[wasm_bindgen(js_name = isStatic)]
    pub fn is_static(&self) -> bool {
        self.widget.is_static()
    }

    /// Effective options after defaults and easing fallbacks, as JSON.
    pub fn options(&self) -> String {
        serde_json::to_string(&self.widget.options()).unwrap_or_default()
    }
}

fn parse_options(json: Option<String>) -> Option<Options> {
    match json.as_deref().map(str::trim) {
        None | Some("") => Some(Options::default()),
        Some(json) => match Options::from_json(json) {
            Ok(options) => Some(options),
            Err(e) => {
                log::error!("Invalid carousel options: {}", e);
                None
            }
        },
    }
}

/// Attach a carousel to `container`. `options` is an optional JSON object.
#[wasm_bindgen]
pub fn roto(container: web_sys::HtmlElement, options: Option<String>) -> Option<RotoHandle> {
    let options = parse_options(options)?;
    match Widget::attach(container, options) {
        Ok(widget) => widget.map(|widget| RotoHandle { widget }),
        Err(e) => {
            log::error!("Failed to attach carousel: {:?}", e);
            None
        }
    }
}

/// Attach an independent carousel to every element matching `selector`.
#[wasm_bindgen]
pub fn roto_all(selector: &str, options: Option<String>) -> js_sys::Array {
    let handles = js_sys::Array::new();
    let Some(options) = parse_options(options) else { return handles };
    match Widget::attach_all(selector, &options) {
        Ok(widgets) => {
            for widget in widgets {
                handles.push(&JsValue::from(RotoHandle { widget }));
            }
        }
        Err(e) => log::error!("Failed to attach carousels to {:?}: {:?}", selector, e),
    }
    handles
}
