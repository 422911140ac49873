mod access_log;
mod account;
mod candidate;
mod document;
mod employee;
mod investment;
mod kpi;
mod measurement;
mod notification;
mod salary;
mod task;
mod vacancy;
mod vacation;
