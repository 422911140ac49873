//! Database repository layer for all domain entities.
//!
//! One repository struct per domain area, each exposing the narrow set of
//! operations its handlers need. Repositories work with SeaORM entity models
//! and return `DbErr`; translation to HTTP concerns happens above them.

pub mod access_log;
pub mod account;
pub mod candidate;
pub mod document;
pub mod employee;
pub mod investment;
pub mod kpi;
pub mod measurement;
pub mod notification;
pub mod salary;
pub mod task;
pub mod vacancy;
pub mod vacation;

#[cfg(test)]
mod test;
