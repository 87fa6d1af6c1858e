//! Light colors and the parsing of raw light marks.

/// A navigation-light color observed on a vessel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightColor {
    Green,
    Red,
    White,
}

impl LightColor {
    /// Parse a raw light-mark code into a color.
    ///
    /// Matching is case-insensitive on exactly one of `r`, `g`, or `w`.
    /// Anything else — empty strings, multi-character codes, digits,
    /// unrelated letters — is not recognized and yields `None`.
    pub fn parse(code: &str) -> Option<Self> {
        match code {
            "r" | "R" => Some(Self::Red),
            "g" | "G" => Some(Self::Green),
            "w" | "W" => Some(Self::White),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_lowercase_codes() {
        assert_eq!(LightColor::parse("r"), Some(LightColor::Red));
        assert_eq!(LightColor::parse("g"), Some(LightColor::Green));
        assert_eq!(LightColor::parse("w"), Some(LightColor::White));
    }

    #[test]
    fn parsing_is_case_insensitive() {
        assert_eq!(LightColor::parse("R"), LightColor::parse("r"));
        assert_eq!(LightColor::parse("G"), LightColor::parse("g"));
        assert_eq!(LightColor::parse("W"), LightColor::parse("w"));
    }

    #[test]
    fn rejects_unrecognized_codes() {
        assert_eq!(LightColor::parse(""), None);
        assert_eq!(LightColor::parse("235"), None);
        assert_eq!(LightColor::parse("sa24r"), None);
        assert_eq!(LightColor::parse("rg"), None);
        assert_eq!(LightColor::parse("x"), None);
    }
}
