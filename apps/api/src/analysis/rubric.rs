//! Weighted scoring rubric and label bands.

use crate::models::analysis::MatchLabel;

/// A rubric component: one 0 to 100 sub-score derived from the overlap base.
pub type SubScore = fn(f64) -> f64;

/// Ordered rubric of (weight, sub-score) pairs. Weights sum to 1.0.
///
/// Every component currently mirrors the overlap base score, so the weighted
/// sum collapses to the base. The table itself is the contract: a future
/// component with its own signal slots in here without changing aggregation.
pub const RUBRIC: &[(f64, SubScore)] = &[
    (0.35, searchability),
    (0.25, hard_skills),
    (0.15, soft_skills),
    (0.10, role_alignment),
    (0.10, recruiter_signal),
    (0.05, formatting),
];

fn searchability(base: f64) -> f64 {
    base
}

fn hard_skills(base: f64) -> f64 {
    base
}

fn soft_skills(base: f64) -> f64 {
    base
}

fn role_alignment(base: f64) -> f64 {
    base
}

fn recruiter_signal(base: f64) -> f64 {
    base
}

fn formatting(base: f64) -> f64 {
    base
}

/// Folds the rubric over `base` and clamps to 0 to 100.
///
/// Ties round to even (`round_ties_even`), the same mode used when the base
/// score is computed from the overlap ratio.
pub fn aggregate(base: f64) -> u32 {
    let weighted: f64 = RUBRIC.iter().map(|(weight, sub)| weight * sub(base)).sum();
    (weighted.round_ties_even() as i64).clamp(0, 100) as u32
}

/// Maps a final score to its band. Lower bounds are inclusive.
pub fn label_for(score: u32) -> MatchLabel {
    match score {
        s if s >= 80 => MatchLabel::High,
        s if s >= 55 => MatchLabel::Medium,
        _ => MatchLabel::Low,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weights_sum_to_one() {
        let total: f64 = RUBRIC.iter().map(|(w, _)| w).sum();
        assert!((total - 1.0).abs() < 1e-9, "weights sum to {total}");
    }

    #[test]
    fn test_rubric_has_six_components() {
        assert_eq!(RUBRIC.len(), 6);
    }

    #[test]
    fn test_aggregate_collapses_to_base() {
        for base in [0.0, 1.0, 33.0, 50.0, 67.0, 99.0, 100.0] {
            assert_eq!(aggregate(base), base as u32, "base {base}");
        }
    }

    #[test]
    fn test_aggregate_clamps_out_of_range_components() {
        assert_eq!(aggregate(250.0), 100);
        assert_eq!(aggregate(-40.0), 0);
    }

    #[test]
    fn test_label_band_lower_bounds_inclusive() {
        assert_eq!(label_for(0), MatchLabel::Low);
        assert_eq!(label_for(54), MatchLabel::Low);
        assert_eq!(label_for(55), MatchLabel::Medium);
        assert_eq!(label_for(79), MatchLabel::Medium);
        assert_eq!(label_for(80), MatchLabel::High);
        assert_eq!(label_for(100), MatchLabel::High);
    }
}
