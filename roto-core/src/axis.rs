/// Names and selectors for the axis a carousel scrolls along.
///
/// Exactly one of the two descriptors is active per widget; everything that
/// reads a size, writes an offset or picks a pointer coordinate goes through it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Axis {
    /// CSS size property: `width` or `height`.
    pub measure: &'static str,
    /// CSS offset property written while scrolling: `left` or `top`.
    pub offset_name: &'static str,
    /// Leading and trailing margin properties, used for outer extents.
    pub margin_start: &'static str,
    pub margin_end: &'static str,
    pub padding_start: &'static str,
    pub padding_end: &'static str,
    pub coord: Coord,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Coord {
    X,
    Y,
}

impl Axis {
    pub const HORIZONTAL: Axis = Axis {
        measure: "width",
        offset_name: "left",
        margin_start: "margin-left",
        margin_end: "margin-right",
        padding_start: "padding-left",
        padding_end: "padding-right",
        coord: Coord::X,
    };

    pub const VERTICAL: Axis = Axis {
        measure: "height",
        offset_name: "top",
        margin_start: "margin-top",
        margin_end: "margin-bottom",
        padding_start: "padding-top",
        padding_end: "padding-bottom",
        coord: Coord::Y,
    };

    pub fn is_horizontal(&self) -> bool {
        self.coord == Coord::X
    }

    /// Select the component of an (x, y) pair that lies on this axis.
    pub fn pick<T>(&self, x: T, y: T) -> T {
        match self.coord {
            Coord::X => x,
            Coord::Y => y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pick_follows_axis() {
        assert_eq!(Axis::HORIZONTAL.pick(3, 7), 3);
        assert_eq!(Axis::VERTICAL.pick(3, 7), 7);
    }

    #[test]
    fn test_property_names() {
        assert_eq!(Axis::HORIZONTAL.offset_name, "left");
        assert_eq!(Axis::VERTICAL.offset_name, "top");
        assert!(Axis::HORIZONTAL.is_horizontal());
        assert!(!Axis::VERTICAL.is_horizontal());
    }
}
