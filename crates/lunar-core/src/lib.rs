//! Coordinate mapping and view-transform engine for the lunar viewer.
//!
//! Platform-free: the web and native front-ends feed pointer, resize and
//! selection events into a [`ViewController`] (or a [`ViewSet`] holding one
//! per view) and read back what to draw.

pub mod camera;
pub mod constants;
pub mod controller;
pub mod error;
pub mod geo;
pub mod graticule;
pub mod overlay;
pub mod picking;
pub mod session;
pub mod transform;

pub use camera::*;
pub use constants::*;
pub use controller::*;
pub use error::LunarError;
pub use geo::*;
pub use graticule::*;
pub use overlay::*;
pub use picking::*;
pub use session::*;
pub use transform::*;
