//! The built-in drill horizon used by `lookout check` and as the
//! default when no horizon file is given.
//!
//! Thirty-three vessels spread around the circle, with a cluster just
//! past north. A few sightings carry deliberately odd marks — mixed
//! case, a white light alongside a colored one, a garbled code — so
//! every heading, including `Unknown`, appears in the drill.

use crate::model::{DEGREES, Horizon};

/// Degree and recorded marks for every vessel in the drill.
const DRILL_SIGHTINGS: &[(usize, &[&str])] = &[
    (0, &["r", "g"]),
    (3, &["w"]),
    (5, &["g"]),
    (14, &["r"]),
    (19, &["g", "r"]),
    (21, &["w"]),
    (26, &["r"]),
    (35, &["g"]),
    (42, &["R", "G"]),
    (47, &["w"]),
    (55, &["g"]),
    (67, &["r", "w"]),
    (74, &["r"]),
    (78, &["w"]),
    (82, &["g"]),
    (95, &["r", "g"]),
    (137, &["w"]),
    (145, &["r"]),
    (172, &["g"]),
    (182, &["W"]),
    (198, &["r", "g", "w"]),
    (207, &["g"]),
    (212, &["r"]),
    (229, &["w"]),
    (231, &["r", "g"]),
    (246, &["g"]),
    (259, &["w"]),
    (263, &["r"]),
    (301, &["g", "w"]),
    (328, &["r", "g"]),
    (346, &["w"]),
    (358, &["x", "g"]),
    (359, &["g", "r"]),
];

/// Build the drill horizon.
pub fn drill_horizon() -> Horizon {
    let mut slots = vec![Vec::new(); DEGREES];
    for &(degree, marks) in DRILL_SIGHTINGS {
        slots[degree] = marks.iter().map(ToString::to_string).collect();
    }
    Horizon::new(slots).expect("drill fixture covers all 360 degrees")
}
