//! Extents, bounds and button rules for one carousel.
//!
//! Offsets are measured along the active axis in CSS pixels. The list rests
//! at `MAX_OFFSET` (0) and scrolls toward negative values; `min_offset` is
//! the point where the last item's trailing edge meets the container's.

use crate::axis::Axis;

/// Rest position of the list.
pub const MAX_OFFSET: f64 = 0.0;

/// Position and outer extent (margins included) of one item along the axis,
/// relative to the list.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ItemBox {
    pub position: f64,
    pub outer_extent: f64,
}

/// Raw sizes read from the page.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Measurements {
    /// Inner extent of the container (padding excluded).
    pub container: f64,
    pub items: Vec<ItemBox>,
}

/// Whether each navigation control should be enabled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ButtonState {
    pub prev: bool,
    pub next: bool,
}

/// Which way a button steps the list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    Prev,
    Next,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Geometry {
    pub container_measure: f64,
    pub content_measure: f64,
    pub max_offset: f64,
    pub min_offset: f64,
    /// Committed offset; only changes at gesture and animation boundaries.
    pub current_offset: f64,
    pub item_positions: Vec<f64>,
}

/// Total content extent. Horizontal lists sum each item's rounded-up outer
/// width; vertical lists stack naturally, so the last item's far edge is
/// the total.
pub fn content_measure(axis: &Axis, items: &[ItemBox]) -> f64 {
    if axis.is_horizontal() {
        items.iter().map(|item| item.outer_extent.ceil()).sum()
    } else {
        items
            .last()
            .map(|last| (last.position + last.outer_extent).round())
            .unwrap_or(0.0)
    }
}

impl Geometry {
    pub fn measure(axis: &Axis, measurements: &Measurements) -> Geometry {
        let mut geometry = Geometry {
            container_measure: 0.0,
            content_measure: 0.0,
            max_offset: MAX_OFFSET,
            min_offset: MAX_OFFSET,
            current_offset: MAX_OFFSET,
            item_positions: Vec::new(),
        };
        geometry.remeasure(axis, measurements);
        geometry
    }

    /// Refresh extents and bounds. The committed offset is left where it is.
    pub fn remeasure(&mut self, axis: &Axis, measurements: &Measurements) {
        self.container_measure = measurements.container.ceil();
        self.content_measure = content_measure(axis, &measurements.items);
        self.item_positions = measurements.items.iter().map(|i| i.position).collect();
        self.min_offset = (-(self.content_measure - self.container_measure).ceil()).min(self.max_offset);
    }

    /// Content fits inside the container; nothing to scroll.
    pub fn fits(&self) -> bool {
        self.content_measure <= self.container_measure
    }

    /// Width to pin on a horizontal list, with headroom for fractional
    /// computed item widths so the last item never wraps.
    pub fn pinned_list_extent(&self) -> f64 {
        self.content_measure + (self.content_measure / 100.0).ceil()
    }

    pub fn is_out_of_bounds(&self, offset: f64) -> bool {
        offset > self.max_offset || offset < self.min_offset
    }

    pub fn clamp(&self, offset: f64) -> f64 {
        offset.clamp(self.min_offset, self.max_offset)
    }

    /// Clamp a live drag position, allowing `pull` pixels of overscroll.
    pub fn clamp_drag(&self, offset: f64, pull: f64) -> f64 {
        offset.clamp(self.min_offset - pull, self.max_offset + pull)
    }

    pub fn buttons(&self) -> ButtonState {
        ButtonState {
            prev: self.current_offset < self.max_offset,
            next: self.content_measure > self.container_measure - self.current_offset,
        }
    }

    /// Position of the last item (in document order) whose negated start
    /// has not crossed below `threshold`. Falls back to the first item.
    pub fn nearest_item(&self, threshold: f64) -> Option<f64> {
        let mut nearest = *self.item_positions.first()?;
        for &position in &self.item_positions {
            if -position.ceil() < threshold {
                break;
            }
            nearest = position;
        }
        Some(nearest)
    }

    /// Offset a button step should animate to: the chosen item's start
    /// aligned with the container's leading edge, kept within bounds.
    pub fn shift_target(&self, step: Step) -> f64 {
        let threshold = match step {
            Step::Prev => self.current_offset + self.container_measure,
            Step::Next => self.current_offset - self.container_measure,
        };
        match self.nearest_item(threshold) {
            Some(position) => self.clamp(-position.ceil()),
            None => self.current_offset,
        }
    }
}
