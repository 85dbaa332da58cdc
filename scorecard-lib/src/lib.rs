#![doc(hidden)]
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core library for scorecard
//!
//! This library holds all functionality for the scorecard tool, which fills HTML
//! report templates with the results of an assessment.
//!
//! # Module Organization
//!
//! - [`commands`]: Command-line interface and orchestration
//! - [`render`]: Report data model and template rendering

pub type Result<T, E = ohno::AppError> = core::result::Result<T, E>;

#[cfg(any(debug_assertions, test))]
pub mod commands;
#[cfg(not(any(debug_assertions, test)))]
mod commands;

pub mod render;

pub use crate::commands::{Host, run};
