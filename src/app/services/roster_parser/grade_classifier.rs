//! Score to grade category mapping

use crate::app::models::GradeCategory;
use crate::constants::grade_thresholds;

/// Classify a numeric score into its grade band
///
/// Total over all inputs: each band's lower bound is inclusive.
pub fn classify(score: f64) -> GradeCategory {
    if score < grade_thresholds::PASS {
        GradeCategory::Suspenso
    } else if score < grade_thresholds::GOOD {
        GradeCategory::Aprobado
    } else if score < grade_thresholds::EXCELLENT {
        GradeCategory::Notable
    } else {
        GradeCategory::Sobresaliente
    }
}
