//! Business-logic orchestration between controllers and the data layer.

pub mod access_log;
pub mod account;
pub mod admin;
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
