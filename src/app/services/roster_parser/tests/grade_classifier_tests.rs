//! Tests for score classification

use crate::app::models::GradeCategory;
use crate::app::services::roster_parser::classify;

#[test]
fn test_band_boundaries_inclusive_on_lower_bound() {
    assert_eq!(classify(4.99), GradeCategory::Suspenso);
    assert_eq!(classify(5.0), GradeCategory::Aprobado);
    assert_eq!(classify(6.99), GradeCategory::Aprobado);
    assert_eq!(classify(7.0), GradeCategory::Notable);
    assert_eq!(classify(8.99), GradeCategory::Notable);
    assert_eq!(classify(9.0), GradeCategory::Sobresaliente);
}

#[test]
fn test_out_of_range_scores_still_classified() {
    assert_eq!(classify(-3.0), GradeCategory::Suspenso);
    assert_eq!(classify(0.0), GradeCategory::Suspenso);
    assert_eq!(classify(10.0), GradeCategory::Sobresaliente);
    assert_eq!(classify(150.0), GradeCategory::Sobresaliente);
}

#[test]
fn test_bands_are_contiguous_and_ordered() {
    // Walking upwards in small steps never moves to a lower band
    let mut previous = classify(-1.0);
    let mut seen = vec![previous];
    let mut score = -1.0;
    while score <= 11.0 {
        let category = classify(score);
        assert!(category >= previous, "band decreased at score {}", score);
        if category != previous {
            seen.push(category);
        }
        previous = category;
        score += 0.01;
    }

    assert_eq!(seen, GradeCategory::all_values().to_vec());
}
