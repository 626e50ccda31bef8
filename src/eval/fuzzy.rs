//! Fuzzy membership functions.
//!
//! Each function maps a raw game quantity onto `[0.0, 1.0]` so the
//! evaluator can blend unlike quantities (points, cells, move counts) with
//! simple weights. All of them saturate: past the configured maximum the
//! membership stops changing, which keeps one runaway factor from drowning
//! the others.

/// Closeness to a target: 1.0 on top of it, 0.0 at `max_distance` or
/// beyond.
///
/// `distance` is `None` when there is no target at all, which counts as
/// "infinitely far" and scores 0.0.
#[must_use]
pub fn distance_score(distance: Option<u32>, max_distance: u32) -> f64 {
    let Some(distance) = distance else {
        return 0.0;
    };
    let normalized = (f64::from(distance) / f64::from(max_distance)).min(1.0);
    1.0 - normalized
}

/// Freedom of movement: 0.0 trapped, 1.0 at `max_moves` or more options.
#[must_use]
pub fn mobility_score(moves: usize, max_moves: usize) -> f64 {
    (moves as f64 / max_moves as f64).min(1.0)
}

/// Score lead mapped onto `[0, 1]`: 0.5 level, 1.0 ahead by `max_margin`
/// or more, 0.0 behind by the same.
#[must_use]
pub fn score_margin(margin: i32, max_margin: i32) -> f64 {
    let normalized = (f64::from(margin) / f64::from(max_margin)).clamp(-1.0, 1.0);
    (normalized + 1.0) / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-12
    }

    #[test]
    fn test_distance_score_endpoints() {
        assert!(approx(distance_score(Some(0), 8), 1.0));
        assert!(approx(distance_score(Some(4), 8), 0.5));
        assert!(approx(distance_score(Some(8), 8), 0.0));
    }

    #[test]
    fn test_distance_score_saturates() {
        assert!(approx(distance_score(Some(20), 8), 0.0));
    }

    #[test]
    fn test_distance_score_no_target() {
        assert!(approx(distance_score(None, 8), 0.0));
    }

    #[test]
    fn test_mobility_score() {
        assert!(approx(mobility_score(0, 4), 0.0));
        assert!(approx(mobility_score(1, 4), 0.25));
        assert!(approx(mobility_score(3, 4), 0.75));
        assert!(approx(mobility_score(4, 4), 1.0));
        assert!(approx(mobility_score(7, 4), 1.0));
    }

    #[test]
    fn test_score_margin_centered_at_half() {
        assert!(approx(score_margin(0, 20), 0.5));
        assert!(approx(score_margin(10, 20), 0.75));
        assert!(approx(score_margin(-10, 20), 0.25));
    }

    #[test]
    fn test_score_margin_clamps() {
        assert!(approx(score_margin(20, 20), 1.0));
        assert!(approx(score_margin(55, 20), 1.0));
        assert!(approx(score_margin(-20, 20), 0.0));
        assert!(approx(score_margin(-55, 20), 0.0));
    }
}
