//! Declarative request validation.
//!
//! Request DTOs implement [`Validate`] and describe their constraints with
//! the rule helpers below. The [`ValidatedJson`] extractor decodes the JSON
//! body and runs validation before the handler body ever executes, so a
//! handler receiving a `ValidatedJson<T>` can rely on the payload being well
//! formed. Violation messages follow the `field '<name>' is <problem>`
//! format and are reported one per failing field.

use axum::{
    extract::{FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;

use crate::server::error::AppError;

/// Declarative field validation for request payloads.
///
/// Returns the list of violation messages; an empty list means the payload
/// is valid.
pub trait Validate {
    fn validate(&self) -> Vec<String>;
}

/// Fails when the value is empty or whitespace-only.
pub fn required(field: &str, value: &str, out: &mut Vec<String>) {
    if value.trim().is_empty() {
        out.push(format!("field '{}' is required", field));
    }
}

/// Fails when a non-empty value is shorter than `min` characters.
/// Emptiness is `required`'s concern, so the two rules never double-report.
pub fn min_len(field: &str, value: &str, min: usize, out: &mut Vec<String>) {
    let trimmed = value.trim();
    if !trimmed.is_empty() && trimmed.chars().count() < min {
        out.push(format!("field '{}' is too short", field));
    }
}

/// Fails when a non-empty value is not a plausible email address.
pub fn email(field: &str, value: &str, out: &mut Vec<String>) {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return;
    }
    let well_formed = matches!(trimmed.split_once('@'), Some((local, domain))
        if !local.is_empty() && domain.contains('.') && !domain.starts_with('.'));
    if !well_formed {
        out.push(format!("field '{}' is not valid", field));
    }
}

/// Fails when the value is not one of the allowed variants.
pub fn one_of(field: &str, value: &str, allowed: &[&str], out: &mut Vec<String>) {
    if !allowed.contains(&value) {
        out.push(format!("field '{}' is not valid", field));
    }
}

/// Fails when the value is zero or negative.
pub fn positive(field: &str, value: i64, out: &mut Vec<String>) {
    if value <= 0 {
        out.push(format!("field '{}' is not valid", field));
    }
}

/// Fails when the value falls outside the inclusive range.
pub fn in_range(field: &str, value: f64, min: f64, max: f64, out: &mut Vec<String>) {
    if !(min..=max).contains(&value) {
        out.push(format!("field '{}' is not valid", field));
    }
}

/// JSON extractor that rejects malformed bodies with a generic 400 and runs
/// declarative validation before handing the value to the handler.
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|_| AppError::BadRequest("invalid request format".to_string()))?;

        let violations = value.validate();
        if !violations.is_empty() {
            return Err(AppError::Validation(violations));
        }

        Ok(Self(value))
    }
}
