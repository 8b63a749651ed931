//! Reading sizes from, and writing styles to, the carousel's elements.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, NodeList};
use roto_core::{Axis, ItemBox, Measurements};

// ── Parsing ───────────────────────────────────────────────────────────────────

/// Parse a computed CSS length such as `"12.5px"`. Anything unparseable
/// (`"auto"`, empty) counts as zero.
pub fn parse_px(value: &str) -> f64 {
    value
        .trim()
        .trim_end_matches("px")
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

fn computed_px(el: &Element, property: &str) -> f64 {
    web_sys::window()
        .and_then(|w| w.get_computed_style(el).ok().flatten())
        .and_then(|style| style.get_property_value(property).ok())
        .map(|v| parse_px(&v))
        .unwrap_or(0.0)
}

// ── Collecting elements ───────────────────────────────────────────────────────

pub fn html_elements(nodes: &NodeList) -> Vec<HtmlElement> {
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|n| n.dyn_into::<HtmlElement>().ok())
        .collect()
}

/// Controls matching `selector` inside `container`. When nothing matches and
/// the stock selector is in use, fall back to the element with id
/// `fallback_id` anywhere in the document.
pub fn find_buttons(
    container: &HtmlElement,
    selector: Option<&str>,
    fallback_id: Option<String>,
) -> Vec<HtmlElement> {
    let Some(selector) = selector.filter(|s| !s.is_empty()) else {
        return Vec::new();
    };
    let found = match container.query_selector_all(selector) {
        Ok(nodes) => html_elements(&nodes),
        Err(e) => {
            log::warn!("Bad button selector {:?}: {:?}", selector, e);
            Vec::new()
        }
    };
    if !found.is_empty() {
        return found;
    }
    fallback_id
        .and_then(|id| web_sys::window()?.document()?.get_element_by_id(&id))
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .into_iter()
        .collect()
}

// ── Measuring ─────────────────────────────────────────────────────────────────

/// Content-box extent of the container along `axis`.
pub fn inner_measure(container: &HtmlElement, axis: &Axis) -> f64 {
    let client = axis.pick(container.client_width(), container.client_height()) as f64;
    let padding = computed_px(container, axis.padding_start) + computed_px(container, axis.padding_end);
    (client - padding).max(0.0)
}

/// Border-box extent plus both margins along `axis`.
pub fn outer_extent(item: &HtmlElement, axis: &Axis) -> f64 {
    let rect = item.get_bounding_client_rect();
    let size = axis.pick(rect.width(), rect.height());
    size + computed_px(item, axis.margin_start) + computed_px(item, axis.margin_end)
}

/// Start of the item's margin box relative to the list.
pub fn item_position(item: &HtmlElement, axis: &Axis) -> f64 {
    let offset = axis.pick(item.offset_left(), item.offset_top()) as f64;
    offset - computed_px(item, axis.margin_start)
}

pub fn measure(container: &HtmlElement, items: &[HtmlElement], axis: &Axis) -> Measurements {
    Measurements {
        container: inner_measure(container, axis),
        items: items
            .iter()
            .map(|item| ItemBox {
                position: item_position(item, axis),
                outer_extent: outer_extent(item, axis),
            })
            .collect(),
    }
}

// ── Styling ───────────────────────────────────────────────────────────────────

fn set_styles(el: &HtmlElement, styles: &[(&str, &str)]) -> Result<(), JsValue> {
    let style = el.style();
    for (property, value) in styles {
        style.set_property(property, value)?;
    }
    Ok(())
}

/// Styles every carousel needs regardless of page CSS: a clipping container,
/// an unwrapped relatively positioned list, and floated block items.
pub fn apply_layout_styles(
    container: &HtmlElement,
    list: &HtmlElement,
    items: &[HtmlElement],
) -> Result<(), JsValue> {
    set_styles(container, &[("overflow", "hidden"), ("position", "relative")])?;
    set_styles(
        list,
        &[
            ("position", "relative"),
            ("white-space", "nowrap"),
            ("padding", "0"),
            ("margin", "0"),
        ],
    )?;
    for item in items {
        set_styles(item, &[("display", "block"), ("float", "left"), ("list-style", "none")])?;
    }
    Ok(())
}

pub fn set_offset(list: &HtmlElement, axis: &Axis, offset: f64) -> Result<(), JsValue> {
    list.style().set_property(axis.offset_name, &format!("{offset}px"))
}

pub fn set_extent(list: &HtmlElement, axis: &Axis, extent: f64) -> Result<(), JsValue> {
    list.style().set_property(axis.measure, &format!("{extent}px"))
}

pub fn set_disabled(buttons: &[HtmlElement], disabled: bool) -> Result<(), JsValue> {
    for button in buttons {
        if disabled {
            button.set_attribute("disabled", "disabled")?;
        } else {
            button.remove_attribute("disabled")?;
        }
    }
    Ok(())
}

pub fn hide(buttons: &[HtmlElement]) -> Result<(), JsValue> {
    for button in buttons {
        button.style().set_property("display", "none")?;
    }
    Ok(())
}

/// True if the event target sits inside a link.
pub fn targets_link(target: Option<web_sys::EventTarget>) -> bool {
    target
        .and_then(|t| t.dyn_into::<Element>().ok())
        .and_then(|el| el.closest("a").ok().flatten())
        .is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_px() {
        assert_eq!(parse_px("12px"), 12.0);
        assert_eq!(parse_px(" 7.25px "), 7.25);
        assert_eq!(parse_px("0"), 0.0);
        assert_eq!(parse_px("-4px"), -4.0);
    }

    #[test]
    fn test_parse_px_garbage_is_zero() {
        assert_eq!(parse_px("auto"), 0.0);
        assert_eq!(parse_px(""), 0.0);
        assert_eq!(parse_px("NaNpx"), 0.0);
    }
}
