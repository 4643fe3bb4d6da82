//! The floor-plan subsystem: layout tables, the drawing-surface seam and the
//! renderer that draws one floor with an optional highlighted room.

pub mod layout;
pub mod recording;
pub mod render;
pub mod surface;

pub use layout::{Floor, LocationId, UnknownFloor};
pub use recording::{DrawOp, RecordingSurface};
pub use render::{CANVAS_HEIGHT, CANVAS_WIDTH, render};
pub use surface::{Canvas2d, DrawSurface};
