//! Entity factories with sensible defaults for tests.

pub mod account;
pub mod candidate;
pub mod employee;
pub mod helpers;
pub mod kpi;
pub mod vacancy;
