//! Headings and the light-combination rules that derive them.

use super::LightColor;

/// The inferred direction of travel of an observed vessel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Heading {
    /// Red and green lights together: the vessel faces the observer.
    Towards,

    /// A lone white light: the stern, moving away.
    Away,

    /// A lone red light: the port side, crossing left.
    Left,

    /// A lone green light: the starboard side, crossing right.
    Right,

    /// Any other combination — the lights don't resolve to a heading.
    Unknown,
}

impl Heading {
    /// Derive a heading from the set of observed light colors.
    ///
    /// Set semantics: duplicates collapse and order is irrelevant.
    /// Only four combinations resolve; everything else, including the
    /// empty set and any set mixing white with a colored light, is
    /// `Unknown`.
    pub fn classify(lights: impl IntoIterator<Item = LightColor>) -> Self {
        let (mut red, mut green, mut white) = (false, false, false);
        for light in lights {
            match light {
                LightColor::Red => red = true,
                LightColor::Green => green = true,
                LightColor::White => white = true,
            }
        }

        match (red, green, white) {
            (true, true, false) => Self::Towards,
            (false, false, true) => Self::Away,
            (true, false, false) => Self::Left,
            (false, true, false) => Self::Right,
            _ => Self::Unknown,
        }
    }
}
