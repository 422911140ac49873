//! API data-transfer objects.
//!
//! Plain serde types exchanged over the wire. Conversion to and from domain
//! models happens at the controller boundary; nothing in here touches the
//! database or business logic.

pub mod access_log;
pub mod account;
pub mod api;
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
