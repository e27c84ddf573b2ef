//! Request types for the leave pay compliance API.
//!
//! This module defines the JSON request structures for the `/analyse` and
//! `/payslip/normalise` endpoints.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::payslip::PayslipForm;

/// Request body for the `/analyse` endpoint.
///
/// The payslip is given in the same all-text shape as the entry form, so a
/// half-completed form can be submitted as it stands.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisRequest {
    /// The payslip as entered.
    pub payslip: PayslipForm,
    /// Date the year-to-date averages are measured to. Defaults to today.
    #[serde(default)]
    pub as_of: Option<NaiveDate>,
}

/// Request body for the `/payslip/normalise` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NormaliseRequest {
    /// The raw reply from the payslip-reading model.
    pub content: String,
}
