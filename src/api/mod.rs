//! HTTP API module for the leave pay compliance engine.
//!
//! This module provides the REST API endpoints:
//!
//! - `POST /analyse` analyses a payslip entered in the form shape
//! - `POST /payslip/normalise` turns a payslip-reading model's reply into
//!   canonical payslip data

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{AnalysisRequest, NormaliseRequest};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
