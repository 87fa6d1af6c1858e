//! Core data model for Lookout.
//!
//! These types represent the classification pipeline:
//! light marks, light colors, headings, sightings, and the horizon.

mod heading;
mod horizon;
mod light;
mod sighting;

pub use heading::Heading;
pub use horizon::{DEGREES, Horizon, HorizonError};
pub use light::LightColor;
pub use sighting::Sighting;
