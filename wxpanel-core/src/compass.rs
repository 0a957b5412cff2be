//! Sixteen-point compass labels.
//!
//! The sectors are not a uniform 22.5 degrees: the lower bounds alternate
//! between 22 and 23 degree steps, and the table is kept literally.

/// `(lower bound, label)`, sorted; each sector runs up to the next bound.
const SECTORS: [(f64, &str); 16] = [
    (0.0, "North"),
    (22.0, "North NE"),
    (45.0, "North East"),
    (67.0, "East NE"),
    (90.0, "East"),
    (112.0, "East SE"),
    (135.0, "South East"),
    (157.0, "South SE"),
    (180.0, "South"),
    (202.0, "South SW"),
    (225.0, "South West"),
    (247.0, "West SW"),
    (270.0, "West"),
    (292.0, "West NW"),
    (315.0, "North West"),
    (337.0, "North NW"),
];

/// Upper bound of the last sector.
const NORTH_NW_END: f64 = 359.0;

/// Label for a wind bearing in degrees.
///
/// `[359, 360)` wraps back to "North". Bearings outside `[0, 360)` and
/// non-finite values have no label.
pub fn bearing_to_compass(deg: f64) -> Option<&'static str> {
    if !(0.0..360.0).contains(&deg) {
        return None;
    }
    if deg >= NORTH_NW_END {
        return Some(SECTORS[0].1);
    }

    let idx = SECTORS.partition_point(|&(lower, _)| lower <= deg);
    // deg >= 0 so at least the first sector qualifies.
    SECTORS.get(idx.checked_sub(1)?).map(|&(_, label)| label)
}
