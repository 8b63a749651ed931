//! Platform-independent core of the roto carousel: configuration, axis
//! descriptors, geometry and button rules, easing curves, pointer speed
//! sampling and the gesture/animation state machine.

pub mod axis;
pub mod controller;
pub mod easing;
pub mod geometry;
pub mod options;
pub mod sampler;
pub mod tween;

pub use axis::{Axis, Coord};
pub use controller::{Controller, Frame, Phase};
pub use easing::Easing;
pub use geometry::{ButtonState, Geometry, ItemBox, Measurements, Step, MAX_OFFSET};
pub use options::{Direction, Options, LINK_RESTORE_DELAY_MS};
pub use sampler::{PointerSpeed, SpeedSampler};
pub use tween::Tween;
