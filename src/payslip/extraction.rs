//! Normalization of machine-extracted payslip data.
//!
//! Payslip images are read by an external vision model that is asked to reply
//! with JSON in the shape of [`PayslipForm`]. Its reply is untrusted: it may be
//! wrapped in a Markdown code fence, omit sections, or put the wrong kind of
//! value in a field. [`normalize_extraction`] accepts missing fields but
//! rejects wrongly-typed ones, naming the offending field.

use serde_json::Value;
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::PayslipData;

use super::form::{PayslipForm, kind_of};

/// Parses a vision model reply into canonical payslip data.
///
/// # Errors
///
/// Returns [`EngineError::PayslipFormat`] if the reply is not a JSON object,
/// or if any present field holds the wrong kind of value. `field` is the
/// dotted path of the offending field, or `$` for the reply as a whole.
///
/// # Examples
///
/// ```
/// use nz_leave_pay::payslip::normalize_extraction;
/// use rust_decimal::Decimal;
///
/// let reply = "```json\n{\"ytdEarnings\": {\"total\": \"12,000\"}}\n```";
/// let data = normalize_extraction(reply).unwrap();
/// assert_eq!(data.ytd_earnings.total, Decimal::from(12000));
///
/// assert!(normalize_extraction("I could not read this payslip").is_err());
/// ```
pub fn normalize_extraction(content: &str) -> EngineResult<PayslipData> {
    let json = strip_code_fence(content);

    let value: Value = serde_json::from_str(json).map_err(|e| EngineError::PayslipFormat {
        field: "$".to_string(),
        message: format!("not valid JSON: {}", e),
    })?;

    if !value.is_object() {
        return Err(EngineError::PayslipFormat {
            field: "$".to_string(),
            message: format!("expected an object, found {}", kind_of(&value)),
        });
    }

    let form: PayslipForm =
        serde_path_to_error::deserialize(value).map_err(|e| EngineError::PayslipFormat {
            field: e.path().to_string(),
            message: e.inner().to_string(),
        })?;
    debug!("Extracted payslip normalized");

    Ok(PayslipData::from(&form))
}

/// Removes a surrounding Markdown code fence, with or without a language tag.
fn strip_code_fence(content: &str) -> &str {
    let trimmed = content.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };

    // Drop the language tag line
    let body = match rest.find('\n') {
        Some(newline) => &rest[newline + 1..],
        None => rest,
    };

    body.trim_end().strip_suffix("```").unwrap_or(body).trim()
}
