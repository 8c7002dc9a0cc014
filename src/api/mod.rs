//! YNAB service access
//!
//! A thin blocking client over the handful of endpoints the tool uses: the
//! budget list, category groups, month summaries, and per-category month
//! updates.

pub mod client;
pub mod types;

pub use client::{ClientContext, MonthUpdater, YnabClient, DEFAULT_API_URL};
