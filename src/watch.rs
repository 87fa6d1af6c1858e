//! Keeping watch: counting vessels through an angular window.
//!
//! A window is never stored — it is derived from a center degree and an
//! angular width, inclusive on both ends, and wraps through zero when it
//! straddles north. These are the only operations with any looping or
//! search logic; everything below them is a pure per-slot function.

use crate::model::{DEGREES, Heading, Horizon, Sighting};

/// Count the vessels inside the window whose heading satisfies the
/// predicate.
///
/// `center` may be any integer and is normalized modulo 360. `angle` is
/// lenient: negative widths act as zero, and widths of 360 or more
/// degenerate to the whole horizon. Empty slots hold no vessel and are
/// skipped without classification.
pub fn count_vessels(
    horizon: &Horizon,
    center: i32,
    angle: i32,
    matches: impl Fn(Heading) -> bool,
) -> usize {
    window_degrees(center, angle)
        .filter(|&degree| {
            let marks = horizon.slot(degree);
            if marks.is_empty() {
                return false;
            }
            matches(Sighting::new(marks.to_vec()).heading())
        })
        .count()
}

/// Find the window center with the most vessels, headings ignored.
///
/// Scans every center in ascending order `0..=359`, so ties go to the
/// smallest center. Callers rely on that choice being deterministic.
pub fn most_vessels(horizon: &Horizon, angle: i32) -> i32 {
    let mut best_center = 0;
    let mut best_count = 0;

    for center in 0..DEGREES as i32 {
        let count = count_vessels(horizon, center, angle, |_| true);
        if count > best_count {
            best_center = center;
            best_count = count;
        }
    }

    best_center
}

/// The degrees covered by a window, in order from its start.
///
/// `start = center - angle/2` and `end = center + angle/2` with
/// truncating division, both taken modulo 360; when `start > end` the
/// window wraps: `[start, 359]` then `[0, end]`.
fn window_degrees(center: i32, angle: i32) -> impl Iterator<Item = i32> {
    let degrees = DEGREES as i32;
    let angle = angle.max(0);

    let (start, len) = if angle >= degrees {
        (0, degrees)
    } else {
        let half = angle / 2;
        let start = (center - half).rem_euclid(degrees);
        let end = (center + half).rem_euclid(degrees);
        (start, (end - start).rem_euclid(degrees) + 1)
    };

    (0..len).map(move |step| (start + step) % degrees)
}
