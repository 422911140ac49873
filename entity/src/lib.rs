pub mod prelude;

pub mod access_log;
pub mod account;
pub mod candidate;
pub mod document;
pub mod employee;
pub mod investment;
pub mod kpi;
pub mod kpi_score;
pub mod measurement;
pub mod notification;
pub mod salary;
pub mod vacancy;
pub mod vacation_balance;
pub mod vacation_request;
