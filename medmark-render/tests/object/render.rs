//! Structured object → markdown, and the full object → HTML path the results page uses.

use medmark_render::{
    object_to_html, object_to_markdown, FormatRegistry, HtmlOptions, OutputKind, RenderOptions,
};
use serde_json::{json, Value};

#[test]
fn test_empty_inputs() {
    assert_eq!(object_to_markdown(&json!({})), "");
    assert_eq!(object_to_markdown(&Value::Null), "");
    assert_eq!(object_to_markdown(None), "");
}

#[test]
fn test_patient_name() {
    assert_eq!(
        object_to_markdown(&json!({"patient_name": "Jane Doe"})),
        "**Patient Name:** Jane Doe\n\n"
    );
}

#[test]
fn test_empty_string_is_omitted() {
    let markdown = object_to_markdown(&json!({"empty": "", "present": "x"}));
    assert!(!markdown.contains("Empty"));
    assert_eq!(markdown, "**Present:** x\n\n");
}

#[test]
fn test_tags() {
    let markdown = object_to_markdown(&json!({"tags": ["a", "b"]}));
    assert!(markdown.starts_with("**Tags:**"));
    assert!(markdown.contains("\n* a\n"));
    assert!(markdown.contains("\n* b\n"));
}

#[test]
fn test_test_result_parameters() {
    let value: Value = serde_json::from_str(
        r#"{
            "test_name": "Thyroid Panel",
            "sample_type": "serum",
            "fasting_required": false,
            "parameters": [
                {"name": "TSH", "value": 2.1, "unit": "mIU/L"},
                {"name": "Free T4", "value": 1.2, "unit": "ng/dL"}
            ],
            "reviewed_by": {"doctor_name": "Dr. Rao", "signed_at": null},
            "comments": ""
        }"#,
    )
    .unwrap();

    assert_eq!(
        object_to_markdown(&value),
        "**Test Name:** Thyroid Panel\n\n\
         **Sample Type:** serum\n\n\
         **Fasting Required:** false\n\n\
         **Parameters:**\n\
         * name: TSH, value: 2.1, unit: mIU/L\n\
         * name: Free T4, value: 1.2, unit: ng/dL\n\n\
         **Reviewed By:**\n\
         **Doctor Name:** Dr. Rao\n\n\n"
    );
}

#[test]
fn test_object_to_html_pipes_through_markdown() {
    let value = json!({"diagnosis": "Mild anemia"});
    assert_eq!(
        object_to_html(&value, &HtmlOptions::default()),
        "<p><strong>Diagnosis:</strong> Mild anemia</p><p></p>"
    );
}

#[test]
fn test_registry_object_conversion() {
    let registry = FormatRegistry::default();
    let markdown = registry
        .convert(
            r#"{"blood_type": "O+"}"#,
            "object",
            OutputKind::Markdown,
            &RenderOptions::default(),
        )
        .unwrap();
    assert_eq!(markdown, "**Blood Type:** O+\n\n");
}

#[test]
fn test_registry_results_conversion_flags_ranges() {
    let registry = FormatRegistry::default();
    let markdown = registry
        .convert(
            r#"{"test_name": "Glucose", "parameters": [
                {"name": "Fasting glucose", "value": 131, "unit": "mg/dL",
                 "reference_range": {"min": 70, "max": 99}}
            ]}"#,
            "results",
            OutputKind::Markdown,
            &RenderOptions::default(),
        )
        .unwrap();
    assert!(markdown.contains("range: 70 - 99, status: high"));
}
