//! Event schedule browser with an interactive floor plano for the school
//! expo. The `floorplan` module is the deterministic drawing core; `model`
//! holds the embedded programme data; `components` is the Yew UI on top.

pub mod components;
pub mod floorplan;
pub mod model;
pub mod util;
