//! Blood panel evaluation: classify entered values against reference
//! intervals, aggregate per-category counts and build the export report.

use std::collections::HashMap;

use bloodcheck_core::{
    AggregateCounts, AnalyteStatus, ClassificationResult, Evaluation, Profile, ReferenceInterval,
    ReportDocument, ReportRow, SexCategory, StatusCategory, ViewState,
};
use chrono::Utc;

mod catalog;

pub use catalog::ReferenceCatalog;

// The fixed label set shown next to each classified value.
const LABEL_MISSING: &str = "value missing";
const LABEL_NOT_A_NUMBER: &str = "not a number";
const LABEL_TOO_LOW: &str = "too low";
const LABEL_TOO_HIGH: &str = "too high";
const LABEL_IN_RANGE: &str = "within range";

// Placeholder printed in the report when no value was entered.
const VALUE_PLACEHOLDER: &str = "–";

/// Classify one raw input against a closed reference interval.
///
/// Absent or unparseable input degrades to `Normal` on purpose: an empty
/// form field must never look clinically abnormal. Values exactly on a
/// bound count as within range.
pub fn classify(raw: &str, interval: ReferenceInterval) -> ClassificationResult {
    if raw.is_empty() {
        return ClassificationResult {
            category: StatusCategory::Normal,
            label: LABEL_MISSING.to_string(),
        };
    }

    let Ok(numeric) = raw.trim().parse::<f64>() else {
        return ClassificationResult {
            category: StatusCategory::Normal,
            label: LABEL_NOT_A_NUMBER.to_string(),
        };
    };

    // Rust's float parser accepts the literal "NaN"; treat it like any
    // other non-numeric entry instead of letting it slip through the
    // comparisons below as within range.
    if numeric.is_nan() {
        return ClassificationResult {
            category: StatusCategory::Normal,
            label: LABEL_NOT_A_NUMBER.to_string(),
        };
    }

    if numeric < interval.min {
        return ClassificationResult {
            category: StatusCategory::Low,
            label: LABEL_TOO_LOW.to_string(),
        };
    }

    if numeric > interval.max {
        return ClassificationResult {
            category: StatusCategory::High,
            label: LABEL_TOO_HIGH.to_string(),
        };
    }

    ClassificationResult {
        category: StatusCategory::Normal,
        label: LABEL_IN_RANGE.to_string(),
    }
}

/// Evaluate every analyte of a profile against the entered values.
///
/// Iteration order is the profile's definition order, which consumers rely
/// on for rendering and export. Missing keys count as empty input; keys
/// that do not belong to the profile are ignored. The whole result is
/// recomputed from scratch on every call.
pub fn evaluate(
    profile: &Profile,
    sex: SexCategory,
    values: &HashMap<String, String>,
) -> Evaluation {
    let mut counts = AggregateCounts::default();
    let mut statuses = Vec::with_capacity(profile.analytes.len());

    for analyte in &profile.analytes {
        let interval = analyte.reference.interval_for(sex);
        let raw = values.get(&analyte.key).map(String::as_str).unwrap_or_default();
        let result = classify(raw, interval);
        counts.record(result.category);
        statuses.push(AnalyteStatus {
            key: analyte.key.clone(),
            result,
        });
    }

    Evaluation { statuses, counts }
}

/// Evaluate the profile currently selected in a view state.
pub fn evaluate_view(catalog: &ReferenceCatalog, view: &ViewState) -> Evaluation {
    evaluate(catalog.profile(view.profile), view.sex, &view.values)
}

/// Build the export report for the current view state.
///
/// Re-runs the evaluation so the document always reflects the values as
/// entered, then lays the content out in the fixed export order: header,
/// one row per analyte in profile order, aggregate summary.
pub fn build_report(catalog: &ReferenceCatalog, view: &ViewState) -> ReportDocument {
    let profile = catalog.profile(view.profile);
    let evaluation = evaluate(profile, view.sex, &view.values);

    let rows = profile
        .analytes
        .iter()
        .zip(evaluation.rows())
        .map(|(analyte, status)| ReportRow {
            name: analyte.name.clone(),
            unit: analyte.unit.clone(),
            value: match view.value_of(&analyte.key) {
                "" => VALUE_PLACEHOLDER.to_string(),
                raw => raw.to_string(),
            },
            status_label: status.result.label.clone(),
            reference: analyte.reference.interval_for(view.sex),
        })
        .collect();

    ReportDocument {
        title: "BloodCheck – Analysis".to_string(),
        generated_at: Utc::now(),
        profile_label: profile.label.clone(),
        sex_label: view.sex.display_label().to_string(),
        rows,
        summary: evaluation.counts,
    }
}

/// Render the report as plain text, one field per line in export order.
pub fn render_report_text(report: &ReportDocument) -> String {
    let mut lines = Vec::new();

    lines.push(report.title.clone());
    lines.push(format!(
        "Date: {}",
        report.generated_at.format("%d.%m.%Y, %H:%M:%S")
    ));
    lines.push(format!("Profile: {}", report.profile_label));
    lines.push(format!("Sex: {}", report.sex_label));
    lines.push(String::new());
    lines.push("Results:".to_string());

    for row in &report.rows {
        lines.push(format!(
            "{}: {} {} ({})",
            row.name, row.value, row.unit, row.status_label
        ));
        lines.push(format!(
            "Reference: {}",
            format_reference(row.reference, &row.unit)
        ));
    }

    lines.push(String::new());
    lines.push("Summary:".to_string());
    lines.push(format!("Too low: {}", report.summary.low));
    lines.push(format!("Normal: {}", report.summary.normal));
    lines.push(format!("Too high: {}", report.summary.high));

    lines.join("\n")
}

/// Format an interval as `min – max unit` for row hints and report lines.
pub fn format_reference(interval: ReferenceInterval, unit: &str) -> String {
    format!(
        "{} – {} {}",
        format_bound(interval.min),
        format_bound(interval.max),
        unit
    )
}

fn format_bound(value: f64) -> String {
    if value.fract().abs() < f64::EPSILON {
        format!("{value:.0}")
    } else if (value * 10.0).fract().abs() < f64::EPSILON {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}
