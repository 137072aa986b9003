//! Request validation
//!
//! [`SimulationRequest`] is the wire shape of a calculation request. Every
//! field is optional at the type level so that a missing required field is
//! reported as a validation error alongside the others, rather than as a
//! deserialization failure.
//!
//! Ranges (the canonical input domain):
//!
//! | field | rule |
//! |---|---|
//! | `sector` | required, one of the nine sector ids |
//! | `employees` | required, integer 1..=10000 |
//! | `processes` | required, integer 1..=50 |
//! | `timePerTask` | required, 0.1..=24 |
//! | `hourlyCost` | optional, 10..=500 |
//! | `currentAutomation` | optional, integer 0..=100 |
//! | `targetAutomation` | optional, integer 0..=100 |
//! | `maturity` | optional, `low` / `medium` / `high` |

use roi_domain::{DomainError, Maturity, Sector, SimulationInput};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use validator::{Validate, ValidationError, ValidationErrors};

/// Calculation request body
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SimulationRequest {
    #[validate(
        required(message = "sector is required"),
        custom(function = "validate_sector")
    )]
    pub sector: Option<String>,

    #[validate(
        required(message = "employees is required"),
        range(min = 1.0, max = 10000.0, message = "employees must be between 1 and 10000"),
        custom(function = "validate_integer")
    )]
    pub employees: Option<f64>,

    #[validate(
        required(message = "processes is required"),
        range(min = 1.0, max = 50.0, message = "processes must be between 1 and 50"),
        custom(function = "validate_integer")
    )]
    pub processes: Option<f64>,

    #[validate(
        required(message = "timePerTask is required"),
        range(min = 0.1, max = 24.0, message = "timePerTask must be between 0.1 and 24")
    )]
    pub time_per_task: Option<f64>,

    #[validate(range(min = 10.0, max = 500.0, message = "hourlyCost must be between 10 and 500"))]
    pub hourly_cost: Option<f64>,

    #[validate(
        range(min = 0.0, max = 100.0, message = "currentAutomation must be between 0 and 100"),
        custom(function = "validate_integer")
    )]
    pub current_automation: Option<f64>,

    #[validate(
        range(min = 0.0, max = 100.0, message = "targetAutomation must be between 0 and 100"),
        custom(function = "validate_integer")
    )]
    pub target_automation: Option<f64>,

    #[validate(custom(function = "validate_maturity"))]
    pub maturity: Option<String>,
}

/// Struct field name and wire name of every request field, in report order
const FIELDS: [(&str, &str); 8] = [
    ("sector", "sector"),
    ("employees", "employees"),
    ("processes", "processes"),
    ("time_per_task", "timePerTask"),
    ("hourly_cost", "hourlyCost"),
    ("current_automation", "currentAutomation"),
    ("target_automation", "targetAutomation"),
    ("maturity", "maturity"),
];

/// One rejected request field
///
/// Serialized as `{type, value, msg, path, location}`, the shape browser
/// clients of the simulator already parse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldError {
    #[serde(rename = "type")]
    pub kind: String,
    pub value: serde_json::Value,
    pub msg: String,
    pub path: String,
    pub location: String,
}

impl FieldError {
    pub fn new(path: impl Into<String>, msg: impl Into<String>, value: serde_json::Value) -> Self {
        Self {
            kind: "field".to_string(),
            value,
            msg: msg.into(),
            path: path.into(),
            location: "body".to_string(),
        }
    }
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.path, self.msg)
    }
}

impl SimulationRequest {
    /// Validate every field, returning one error per rejected field.
    pub fn check(&self) -> Result<(), Vec<FieldError>> {
        match self.validate() {
            Ok(()) => Ok(()),
            Err(errors) => Err(self.field_errors(&errors)),
        }
    }

    fn field_errors(&self, errors: &ValidationErrors) -> Vec<FieldError> {
        let by_field = errors.field_errors();
        let wire = serde_json::to_value(self).unwrap_or(serde_json::Value::Null);

        FIELDS
            .iter()
            .filter_map(|(field, path)| {
                let first = by_field.get(*field)?.first()?;
                let msg = first
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| "Invalid value".to_string());
                let value = wire
                    .get(*path)
                    .map(echoed_value)
                    .unwrap_or(serde_json::Value::Null);
                Some(FieldError::new(*path, msg, value))
            })
            .collect()
    }

    /// Convert into a domain input.
    ///
    /// Meant to be called after [`check`](Self::check); values that would
    /// have failed validation are reported as [`DomainError`]s here too.
    pub fn to_input(&self) -> Result<SimulationInput, DomainError> {
        let sector: Sector = self
            .sector
            .as_deref()
            .ok_or_else(|| DomainError::invalid_domain("sector", "is required"))?
            .parse()?;
        let employees = required_whole("employees", self.employees, 1, 10_000)?;
        let processes = required_whole("processes", self.processes, 1, 50)?;
        let time_per_task = self
            .time_per_task
            .ok_or_else(|| DomainError::invalid_domain("timePerTask", "is required"))?;

        let mut input = SimulationInput::new(sector, employees, processes, time_per_task);
        if let Some(cost) = self.hourly_cost {
            input = input.with_hourly_cost(cost);
        }
        if let Some(value) = self.current_automation {
            input = input.with_current_automation(percent("currentAutomation", value)?);
        }
        if let Some(value) = self.target_automation {
            input = input.with_target_automation(percent("targetAutomation", value)?);
        }
        if let Some(maturity) = self.maturity.as_deref() {
            input = input.with_maturity(maturity.parse()?);
        }
        Ok(input)
    }
}

fn required_whole(
    field: &'static str,
    value: Option<f64>,
    min: u32,
    max: u32,
) -> Result<u32, DomainError> {
    let value = value.ok_or_else(|| DomainError::invalid_domain(field, "is required"))?;
    if !is_integer(value) || value < f64::from(min) || value > f64::from(max) {
        return Err(DomainError::invalid_domain(
            field,
            format!("must be an integer between {min} and {max}, got {value}"),
        ));
    }
    Ok(value as u32)
}

fn percent(field: &'static str, value: f64) -> Result<u8, DomainError> {
    if !is_integer(value) || !(0.0..=100.0).contains(&value) {
        return Err(DomainError::invalid_domain(
            field,
            format!("must be an integer between 0 and 100, got {value}"),
        ));
    }
    Ok(value as u8)
}

/// Whole numbers are echoed back as JSON integers, as the client sent them.
fn echoed_value(value: &serde_json::Value) -> serde_json::Value {
    match value.as_f64() {
        Some(n) if is_integer(n) && n.abs() <= i64::MAX as f64 => serde_json::Value::from(n as i64),
        _ => value.clone(),
    }
}

fn is_integer(value: f64) -> bool {
    value.is_finite() && value.fract() == 0.0
}

fn rejection(code: &'static str, message: String) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::Owned(message));
    error
}

fn validate_integer(value: f64) -> Result<(), ValidationError> {
    if is_integer(value) {
        Ok(())
    } else {
        Err(rejection("integer", format!("{value} is not an integer")))
    }
}

fn validate_sector(value: &str) -> Result<(), ValidationError> {
    value.parse::<Sector>().map(|_| ()).map_err(|_| {
        let valid: Vec<_> = Sector::ALL.iter().map(Sector::as_str).collect();
        rejection(
            "sector",
            format!("sector must be one of: {}", valid.join(", ")),
        )
    })
}

fn validate_maturity(value: &str) -> Result<(), ValidationError> {
    value
        .parse::<Maturity>()
        .map(|_| ())
        .map_err(|_| rejection("maturity", "maturity must be one of: low, medium, high".to_string()))
}
