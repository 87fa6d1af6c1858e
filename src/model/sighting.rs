//! Sighting: the raw light marks recorded for one vessel.

use super::{Heading, LightColor};

/// The ordered raw light-mark codes recorded for a single sighting.
///
/// The marks are kept as written down; nothing is validated at
/// construction. The heading is derived on demand and never cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sighting {
    marks: Vec<String>,
}

impl Sighting {
    pub fn new(marks: Vec<String>) -> Self {
        Self { marks }
    }

    /// Derive the heading from the recorded marks.
    ///
    /// Every mark must parse for classification to proceed: a single
    /// unrecognized mark makes the whole sighting `Unknown`, rather
    /// than classifying whatever did parse. A sighting with no marks
    /// falls through to the classifier's empty set, also `Unknown`.
    pub fn heading(&self) -> Heading {
        let lights: Option<Vec<LightColor>> = self
            .marks
            .iter()
            .map(|mark| LightColor::parse(mark))
            .collect();

        match lights {
            Some(lights) => Heading::classify(lights),
            None => Heading::Unknown,
        }
    }
}
