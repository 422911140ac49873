//! HTTP request handlers.
//!
//! Every handler follows the same shape: decode the request (JSON through
//! `ValidatedJson`, multipart parsed explicitly), check identity through
//! `AuthGuard`, delegate to one service call, and map the outcome onto the
//! response envelope. Status-code mapping for error cases lives in the
//! error module, not here.

pub mod access_log;
pub mod account;
pub mod auth;
pub mod candidate;
pub mod document;
pub mod employee;
pub mod investment;
pub mod kpi;
pub mod notification;
pub mod salary;
pub mod task;
pub mod telemetry;
pub mod vacancy;
pub mod vacation;

#[cfg(test)]
mod test;

use serde::Deserialize;

#[derive(Deserialize)]
pub struct PaginationParams {
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_entries")]
    pub entries: u64,
}

fn default_entries() -> u64 {
    10
}

/// Pages are capped so a single request cannot drag the whole table.
pub fn per_page(entries: u64) -> u64 {
    entries.clamp(1, 100)
}

pub fn total_pages(total: u64, per_page: u64) -> u64 {
    if per_page > 0 {
        (total as f64 / per_page as f64).ceil() as u64
    } else {
        0
    }
}
