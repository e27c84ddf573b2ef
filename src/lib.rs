//! Leave and holiday pay compliance engine for New Zealand
//!
//! This crate checks whether leave shown on a payslip was paid at least at
//! the rate the Holidays Act 2003 requires: the greater of Ordinary Weekly
//! Pay and Average Weekly Earnings for annual leave, and the greater of
//! Relevant Daily Pay and Average Daily Pay for BAPS leave.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod payslip;
