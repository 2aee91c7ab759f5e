//! Pathology test results
//!
//! A report is a named test with measured parameters. Parameters that carry a reference range
//! are flagged low/normal/high, then the report is rendered through the structured object
//! renderer so it reads like any other labelled record.

use crate::error::FormatError;
use crate::format::{Format, OutputKind, RenderOptions};
use crate::formats::markdown::markdown_to_html_with;
use crate::formats::object::object_to_markdown;
use serde::Deserialize;
use serde_json::{Map, Value};

/// Where a measured value falls relative to its reference range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeStatus {
    Low,
    Normal,
    High,
}

impl RangeStatus {
    pub fn name(self) -> &'static str {
        match self {
            RangeStatus::Low => "low",
            RangeStatus::Normal => "normal",
            RangeStatus::High => "high",
        }
    }
}

/// Expected bounds for a parameter. Either bound may be open.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ReferenceRange {
    #[serde(default)]
    pub min: Option<f64>,
    #[serde(default)]
    pub max: Option<f64>,
    /// Unit the bounds are expressed in, appended to the description.
    #[serde(default)]
    pub unit: Option<String>,
}

impl ReferenceRange {
    pub fn status(&self, value: f64) -> RangeStatus {
        match (self.min, self.max) {
            (Some(min), _) if value < min => RangeStatus::Low,
            (_, Some(max)) if value > max => RangeStatus::High,
            _ => RangeStatus::Normal,
        }
    }

    /// `12 - 16`, `>= 12` or `<= 16`, followed by the unit if any; `None` when both bounds
    /// are open.
    pub fn describe(&self) -> Option<String> {
        let bounds = match (self.min, self.max) {
            (Some(min), Some(max)) => format!("{} - {}", bound(min), bound(max)),
            (Some(min), None) => format!(">= {}", bound(min)),
            (None, Some(max)) => format!("<= {}", bound(max)),
            (None, None) => return None,
        };
        match self.unit.as_deref() {
            Some(unit) if !unit.is_empty() => Some(format!("{bounds} {unit}")),
            _ => Some(bounds),
        }
    }
}

fn bound(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{value:.0}")
    } else {
        value.to_string()
    }
}

/// One measured parameter of a test
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TestParameter {
    pub name: String,
    pub value: Value,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default, alias = "referenceRange")]
    pub reference_range: Option<ReferenceRange>,
}

impl TestParameter {
    /// The value as a number, if it is one or is a string holding one.
    pub fn numeric_value(&self) -> Option<f64> {
        match &self.value {
            Value::Number(number) => number.as_f64(),
            Value::String(text) => text.trim().parse().ok(),
            _ => None,
        }
    }

    /// `None` when there is no range or the value is not numeric.
    pub fn status(&self) -> Option<RangeStatus> {
        let range = self.reference_range.as_ref()?;
        Some(range.status(self.numeric_value()?))
    }

    fn to_object(&self) -> Map<String, Value> {
        let mut fields = Map::new();
        fields.insert("name".to_string(), Value::String(self.name.clone()));
        fields.insert("value".to_string(), self.value.clone());
        if let Some(unit) = &self.unit {
            fields.insert("unit".to_string(), Value::String(unit.clone()));
        }
        if let Some(range) = self.reference_range.as_ref().and_then(ReferenceRange::describe) {
            fields.insert("range".to_string(), Value::String(range));
        }
        if let Some(status) = self.status() {
            fields.insert("status".to_string(), Value::String(status.name().to_string()));
        }
        fields
    }
}

/// A test with its measured parameters
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TestReport {
    #[serde(alias = "testName")]
    pub test_name: String,
    #[serde(default)]
    pub parameters: Vec<TestParameter>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl TestReport {
    /// The report as a structured object, with range and status filled in per parameter.
    pub fn to_object(&self) -> Value {
        let mut fields = Map::new();
        fields.insert("test_name".to_string(), Value::String(self.test_name.clone()));
        let parameters = self
            .parameters
            .iter()
            .map(|parameter| Value::Object(parameter.to_object()))
            .collect();
        fields.insert("parameters".to_string(), Value::Array(parameters));
        if let Some(notes) = &self.notes {
            fields.insert("notes".to_string(), Value::String(notes.clone()));
        }
        Value::Object(fields)
    }

    pub fn to_markdown(&self) -> String {
        object_to_markdown(&self.to_object())
    }

    /// Parameters outside their reference range.
    pub fn abnormal(&self) -> impl Iterator<Item = &TestParameter> {
        self.parameters.iter().filter(|parameter| {
            matches!(
                parameter.status(),
                Some(RangeStatus::Low | RangeStatus::High)
            )
        })
    }
}

/// Format implementation for test reports (JSON)
pub struct ResultsFormat;

impl Format for ResultsFormat {
    fn name(&self) -> &str {
        "results"
    }

    fn description(&self) -> &str {
        "Pathology test report with reference-range flags"
    }

    fn file_extensions(&self) -> &[&str] {
        &["results.json"]
    }

    fn targets(&self) -> &[OutputKind] {
        &[OutputKind::Markdown, OutputKind::Html]
    }

    fn convert(
        &self,
        source: &str,
        target: OutputKind,
        options: &RenderOptions,
    ) -> Result<String, FormatError> {
        if !self.supports(target) {
            return Err(self.unsupported_target(target));
        }
        let report: TestReport =
            serde_json::from_str(source).map_err(|e| FormatError::ParseError(e.to_string()))?;
        let markdown = report.to_markdown();
        match target {
            OutputKind::Html => Ok(markdown_to_html_with(markdown.as_str(), &options.html)),
            _ => Ok(markdown),
        }
    }
}
