//! Display formatting for terminal output

pub mod allocation;
pub mod category;

pub use allocation::{
    format_allocation, format_status, format_sync_report, format_unknown_categories,
};
pub use category::format_category_budget;
