use bloodcheck_core::{ReferenceInterval, StatusCategory};
use bloodcheck_panel::classify;

fn interval(min: f64, max: f64) -> ReferenceInterval {
    ReferenceInterval { min, max }
}

#[test]
fn values_on_the_bounds_are_normal() {
    let range = interval(4.0, 10.0);

    let at_min = classify("4", range);
    assert_eq!(at_min.category, StatusCategory::Normal);
    assert_eq!(at_min.label, "within range");

    let at_max = classify("10", range);
    assert_eq!(at_max.category, StatusCategory::Normal);
    assert_eq!(at_max.label, "within range");
}

#[test]
fn values_outside_the_bounds_are_flagged() {
    let range = interval(4.5, 6.0);

    let low = classify("4.49", range);
    assert_eq!(low.category, StatusCategory::Low);
    assert_eq!(low.label, "too low");

    let high = classify("6.01", range);
    assert_eq!(high.category, StatusCategory::High);
    assert_eq!(high.label, "too high");
}

#[test]
fn empty_input_counts_as_provisionally_normal() {
    let result = classify("", interval(0.0, 1.0));
    assert_eq!(result.category, StatusCategory::Normal);
    assert_eq!(result.label, "value missing");
}

#[test]
fn unparseable_input_is_not_a_number() {
    for raw in ["abc", "12,5", "   ", "NaN", "1.2.3"] {
        let result = classify(raw, interval(0.0, 100.0));
        assert_eq!(result.category, StatusCategory::Normal, "đầu vào: {raw:?}");
        assert_eq!(result.label, "not a number", "đầu vào: {raw:?}");
    }
}

#[test]
fn surrounding_whitespace_is_trimmed_before_parsing() {
    let result = classify(" 12 ", interval(4.0, 10.0));
    assert_eq!(result.category, StatusCategory::High);
    assert_eq!(result.label, "too high");
}

#[test]
fn parsed_infinities_compare_like_any_number() {
    let high = classify("inf", interval(0.0, 100.0));
    assert_eq!(high.category, StatusCategory::High);
    assert_eq!(high.label, "too high");

    let low = classify("-inf", interval(0.0, 100.0));
    assert_eq!(low.category, StatusCategory::Low);
    assert_eq!(low.label, "too low");
}

#[test]
fn negative_values_classify_against_signed_bounds() {
    let range = interval(-2.0, 2.0);
    assert_eq!(classify("-2", range).category, StatusCategory::Normal);
    assert_eq!(classify("-2.5", range).category, StatusCategory::Low);
}
