//! Sixteen-point compass rose lookups.

const POINTS: [&str; 16] = [
    "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE", "S", "SSW", "SW", "WSW", "W", "WNW", "NW",
    "NNW",
];

const SECTOR_DEG: f64 = 360.0 / 16.0;

/// Compass point for a bearing in degrees. Any finite bearing is accepted and
/// wrapped; non-finite input yields an empty string.
pub fn degree_to_direction(degrees: f64) -> &'static str {
    if !degrees.is_finite() {
        return "";
    }
    let sector = ((degrees.rem_euclid(360.0) + SECTOR_DEG / 2.0) / SECTOR_DEG) as usize;
    POINTS[sector % POINTS.len()]
}

/// Bearing in degrees for a compass point such as `"SSW"`. Case-insensitive.
pub fn direction_to_degree(direction: &str) -> Option<f64> {
    let direction = direction.trim();
    POINTS
        .iter()
        .position(|p| p.eq_ignore_ascii_case(direction))
        .map(|i| i as f64 * SECTOR_DEG)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cardinal_points() {
        assert_eq!(degree_to_direction(0.0), "N");
        assert_eq!(degree_to_direction(90.0), "E");
        assert_eq!(degree_to_direction(180.0), "S");
        assert_eq!(degree_to_direction(270.0), "W");
    }

    #[test]
    fn sector_edges_and_wrapping() {
        assert_eq!(degree_to_direction(11.24), "N");
        assert_eq!(degree_to_direction(11.25), "NNE");
        assert_eq!(degree_to_direction(359.0), "N");
        assert_eq!(degree_to_direction(-90.0), "W");
        assert_eq!(degree_to_direction(200.0), "SSW");
        assert_eq!(degree_to_direction(f64::NAN), "");
    }

    #[test]
    fn names_to_degrees() {
        assert_eq!(direction_to_degree("SE"), Some(135.0));
        assert_eq!(direction_to_degree("ssw"), Some(202.5));
        assert_eq!(direction_to_degree(" N "), Some(0.0));
        assert_eq!(direction_to_degree("MM"), None);
    }
}
