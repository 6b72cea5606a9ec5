//! Contact-form inquiry endpoints.
//!
//! Anyone may submit an inquiry; reading them back requires admin access.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use meridian_core::InquiryId;
use meridian_store::{Inquiry, NewInquiry, Store};

use crate::auth::AdminAccess;
use crate::error::ApiError;
use crate::state::GatewayState;

const MAX_NAME_CHARS: usize = 100;
const MAX_EMAIL_CHARS: usize = 254;
const MAX_OPTIONAL_CHARS: usize = 200;
const MAX_MESSAGE_CHARS: usize = 5000;

// =============================================================================
// Response Types
// =============================================================================

/// Response for inquiry list.
#[derive(Debug, Serialize)]
pub struct ListInquiriesResponse {
    /// Inquiries, newest first.
    pub inquiries: Vec<Inquiry>,
}

// =============================================================================
// Handlers
// =============================================================================

/// Submit the contact form.
///
/// # Errors
///
/// Returns `BadRequest` if the body is not valid JSON or a field fails
/// validation.
pub async fn create_inquiry<S>(
    State(state): State<Arc<GatewayState<S>>>,
    payload: Result<Json<NewInquiry>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError>
where
    S: Store + 'static,
{
    let Json(payload) = payload?;
    let payload = normalize(payload)?;

    let inquiry = state.store.create_inquiry(payload);

    tracing::info!(
        inquiry_id = %inquiry.id,
        service_interest = ?inquiry.contact.service_interest,
        "Inquiry received"
    );

    Ok((StatusCode::CREATED, Json(inquiry)))
}

/// List all inquiries, newest first.
///
/// # Errors
///
/// Returns an error if admin access is denied.
pub async fn list_inquiries<S>(
    State(state): State<Arc<GatewayState<S>>>,
    _admin: AdminAccess,
) -> Result<impl IntoResponse, ApiError>
where
    S: Store + 'static,
{
    let inquiries = state.store.get_inquiries();

    Ok(Json(ListInquiriesResponse { inquiries }))
}

/// Get a single inquiry.
///
/// # Errors
///
/// Returns `NotFound` for any integer that names no inquiry and
/// `BadRequest` if the path segment is not an integer.
pub async fn get_inquiry<S>(
    State(state): State<Arc<GatewayState<S>>>,
    _admin: AdminAccess,
    Path(inquiry_id): Path<String>,
) -> Result<impl IntoResponse, ApiError>
where
    S: Store + 'static,
{
    let id = parse_inquiry_id(&inquiry_id)?;

    state
        .store
        .get_inquiry(id)
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("inquiry {inquiry_id}")))
}

// =============================================================================
// Helpers
// =============================================================================

/// Parse an inquiry ID from a path segment.
fn parse_inquiry_id(s: &str) -> Result<InquiryId, ApiError> {
    s.parse().map_err(|err: meridian_core::IdError| {
        if err.is_out_of_range() {
            ApiError::NotFound(format!("inquiry {s}"))
        } else {
            ApiError::BadRequest(format!("invalid inquiry ID: {s}"))
        }
    })
}

/// Trim every field, drop blank optional fields and enforce the form's rules.
fn normalize(payload: NewInquiry) -> Result<NewInquiry, ApiError> {
    let inquiry = NewInquiry {
        first_name: required("firstName", &payload.first_name, MAX_NAME_CHARS)?,
        last_name: required("lastName", &payload.last_name, MAX_NAME_CHARS)?,
        email: required("email", &payload.email, MAX_EMAIL_CHARS)?,
        phone: optional("phone", payload.phone.as_deref())?,
        company: optional("company", payload.company.as_deref())?,
        company_size: optional("companySize", payload.company_size.as_deref())?,
        service_interest: optional("serviceInterest", payload.service_interest.as_deref())?,
        message: required("message", &payload.message, MAX_MESSAGE_CHARS)?,
    };

    if !is_plausible_email(&inquiry.email) {
        return Err(ApiError::BadRequest(
            "email must be a valid email address".to_string(),
        ));
    }

    Ok(inquiry)
}

fn required(field: &str, value: &str, max_chars: usize) -> Result<String, ApiError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ApiError::BadRequest(format!("{field} is required")));
    }
    check_length(field, value, max_chars)?;
    Ok(value.to_string())
}

fn optional(field: &str, value: Option<&str>) -> Result<Option<String>, ApiError> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => {
            check_length(field, v, MAX_OPTIONAL_CHARS)?;
            Ok(Some(v.to_string()))
        }
        _ => Ok(None),
    }
}

fn check_length(field: &str, value: &str, max_chars: usize) -> Result<(), ApiError> {
    if value.chars().count() > max_chars {
        return Err(ApiError::BadRequest(format!(
            "{field} must be at most {max_chars} characters"
        )));
    }
    Ok(())
}

fn is_plausible_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !email.chars().any(char::is_whitespace)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload() -> NewInquiry {
        NewInquiry {
            first_name: "  Jane ".to_string(),
            last_name: "Smith".to_string(),
            email: "jane@example.com".to_string(),
            phone: Some(String::new()),
            company: Some(" Globex ".to_string()),
            company_size: None,
            service_interest: Some("   ".to_string()),
            message: "We are hiring 20 people next quarter.".to_string(),
        }
    }

    #[test]
    fn normalize_trims_and_drops_blank_optionals() {
        let inquiry = normalize(payload()).unwrap();

        assert_eq!(inquiry.first_name, "Jane");
        assert_eq!(inquiry.company.as_deref(), Some("Globex"));
        assert!(inquiry.phone.is_none());
        assert!(inquiry.service_interest.is_none());
    }

    #[test]
    fn missing_required_field() {
        let mut p = payload();
        p.message = " ".to_string();

        let err = normalize(p).unwrap_err();
        assert_eq!(err.to_string(), "bad request: message is required");
    }

    #[test]
    fn overlong_field() {
        let mut p = payload();
        p.last_name = "x".repeat(MAX_NAME_CHARS + 1);

        assert!(matches!(normalize(p), Err(ApiError::BadRequest(_))));
    }

    #[test]
    fn email_shapes() {
        assert!(is_plausible_email("a@b.co"));
        assert!(!is_plausible_email("no-at-sign.com"));
        assert!(!is_plausible_email("@example.com"));
        assert!(!is_plausible_email("a@localhost"));
        assert!(!is_plausible_email("a@@example.com"));
        assert!(!is_plausible_email("a b@example.com"));
        assert!(!is_plausible_email("a@example."));
    }

    #[test]
    fn inquiry_id_parsing() {
        assert_eq!(parse_inquiry_id("3").unwrap().get(), 3);
        assert!(matches!(parse_inquiry_id("0"), Err(ApiError::NotFound(_))));
        assert!(matches!(parse_inquiry_id("-1"), Err(ApiError::NotFound(_))));
        assert!(matches!(parse_inquiry_id("abc"), Err(ApiError::BadRequest(_))));
    }
}
