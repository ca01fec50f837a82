//! KPI Engine for affiliate operations
//!
//! This crate scores employee KPIs from sales, commission and attendance figures,
//! ranks employees by their blended score, and splits calendar months into the
//! five commission periods (M1 to M5) used to attribute commission records.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod telemetry;
