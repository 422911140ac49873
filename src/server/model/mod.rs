//! Server-side domain models and parameter types.
//!
//! Operation parameters are converted from request DTOs at the controller
//! boundary and consumed by repositories; entity models are converted to
//! response DTOs here as well. Domain rules that are pure data logic
//! (candidate status transitions, vacation request states) also live here.

pub mod access_log;
pub mod account;
pub mod candidate;
pub mod document;
pub mod employee;
pub mod investment;
pub mod kpi;
pub mod notification;
pub mod salary;
pub mod telemetry;
pub mod vacancy;
pub mod vacation;
