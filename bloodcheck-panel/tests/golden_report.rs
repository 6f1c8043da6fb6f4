use std::fs;

use bloodcheck_core::{ProfileId, SexCategory, ViewState};
use bloodcheck_panel::{build_report, render_report_text, ReferenceCatalog};
use serde_json::Value;

fn fixture_path(name: &str) -> String {
    format!("{}/tests/data/{name}", env!("CARGO_MANIFEST_DIR"))
}

fn sample_view() -> ViewState {
    let mut view = ViewState::new(ProfileId::Basic, SexCategory::Male);
    view.set_value("wbc", "12");
    view.set_value("rbc", "4.2");
    view.set_value("hkt", "45");
    view.set_value("plt", "abc");
    view
}

#[test]
fn basic_report_matches_golden() {
    let catalog = ReferenceCatalog::standard();
    let report = build_report(&catalog, &sample_view());

    let mut actual = serde_json::to_value(report).expect("Không serialize được báo cáo");
    normalize_dynamic_fields(&mut actual);

    let expected = fs::read_to_string(fixture_path("basic_male_report.json"))
        .expect("Không đọc được golden report");

    let mut expected_value: Value = serde_json::from_str(&expected).expect("Golden không hợp lệ");
    normalize_dynamic_fields(&mut expected_value);

    assert_eq!(actual, expected_value);
}

#[test]
fn report_text_lists_fields_in_export_order() {
    let catalog = ReferenceCatalog::standard();
    let report = build_report(&catalog, &sample_view());
    let text = render_report_text(&report);
    let lines: Vec<&str> = text.split('\n').collect();

    assert_eq!(lines.len(), 21);
    assert_eq!(lines[0], "BloodCheck – Analysis");
    assert!(lines[1].starts_with("Date: "));
    assert_eq!(lines[2], "Profile: Small blood count");
    assert_eq!(lines[3], "Sex: Male");
    assert_eq!(lines[4], "");
    assert_eq!(lines[5], "Results:");
    assert_eq!(lines[6], "Leukocytes (WBC): 12 G/L (too high)");
    assert_eq!(lines[7], "Reference: 4 – 10 G/L");
    assert_eq!(lines[8], "Erythrocytes (RBC): 4.2 T/L (too low)");
    assert_eq!(lines[9], "Reference: 4.5 – 6 T/L");
    assert_eq!(lines[10], "Hemoglobin (HB): – g/dL (value missing)");
    assert_eq!(lines[11], "Reference: 14 – 18 g/dL");
    assert_eq!(lines[12], "Hematocrit (HCT): 45 % (within range)");
    assert_eq!(lines[13], "Reference: 40 – 54 %");
    assert_eq!(lines[14], "Platelets (PLT): abc G/L (not a number)");
    assert_eq!(lines[15], "Reference: 150 – 400 G/L");
    assert_eq!(lines[16], "");
    assert_eq!(lines[17], "Summary:");
    assert_eq!(lines[18], "Too low: 1");
    assert_eq!(lines[19], "Normal: 3");
    assert_eq!(lines[20], "Too high: 1");
}

fn normalize_dynamic_fields(value: &mut Value) {
    if let Some(obj) = value.as_object_mut() {
        if obj.contains_key("generated_at") {
            obj.insert(
                "generated_at".to_string(),
                Value::String("__DYNAMIC_TIMESTAMP__".to_string()),
            );
        }
    }
}
