//! Horizon: the full circular record of light marks around the observer.

use serde::Deserialize;

/// Number of slots in a horizon, one per degree.
pub const DEGREES: usize = 360;

/// Errors that can occur constructing a horizon.
#[derive(Debug, thiserror::Error)]
pub enum HorizonError {
    #[error("horizon must have exactly 360 slots, got {0}")]
    WrongLength(usize),
}

/// The 360-slot circular record of light-mark observations.
///
/// Slot `i` holds the raw marks seen at degree `i`; an empty slot means
/// no vessel there. Read-only once constructed. Deserializes from a
/// plain array of 360 arrays of mark strings.
#[derive(Debug, Clone, Deserialize)]
#[serde(try_from = "Vec<Vec<String>>")]
pub struct Horizon {
    slots: Vec<Vec<String>>,
}

impl Horizon {
    /// Build a horizon from its slot contents.
    ///
    /// Exactly [`DEGREES`] slots are required; the window arithmetic in
    /// [`crate::watch`] assumes a full circle.
    pub fn new(slots: Vec<Vec<String>>) -> Result<Self, HorizonError> {
        if slots.len() == DEGREES {
            Ok(Self { slots })
        } else {
            Err(HorizonError::WrongLength(slots.len()))
        }
    }

    /// The raw marks at a degree, taken modulo 360 so any integer is a
    /// valid position.
    pub fn slot(&self, degree: i32) -> &[String] {
        let index = degree.rem_euclid(DEGREES as i32) as usize;
        &self.slots[index]
    }
}

impl TryFrom<Vec<Vec<String>>> for Horizon {
    type Error = HorizonError;

    fn try_from(slots: Vec<Vec<String>>) -> Result<Self, Self::Error> {
        Self::new(slots)
    }
}
