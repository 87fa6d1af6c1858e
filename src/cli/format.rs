//! Output formatting for CLI display.

use crate::model::Heading;

/// Format a heading for human-readable display.
pub(super) fn format_heading(heading: Heading) -> &'static str {
    match heading {
        Heading::Towards => "towards",
        Heading::Away => "away",
        Heading::Left => "left",
        Heading::Right => "right",
        Heading::Unknown => "unknown",
    }
}

/// Format a window as `center° ±half°` for messages.
pub(super) fn format_window(center: i32, angle: i32) -> String {
    format!("{center}° ±{}°", angle.max(0) / 2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headings_render_lowercase() {
        assert_eq!(format_heading(Heading::Towards), "towards");
        assert_eq!(format_heading(Heading::Unknown), "unknown");
    }

    #[test]
    fn windows_render_with_half_width() {
        assert_eq!(format_window(15, 60), "15° ±30°");
        assert_eq!(format_window(0, 31), "0° ±15°");
    }
}
