pub use super::access_log::Entity as AccessLog;
pub use super::account::Entity as Account;
pub use super::candidate::Entity as Candidate;
pub use super::document::Entity as Document;
pub use super::employee::Entity as Employee;
pub use super::investment::Entity as Investment;
pub use super::kpi::Entity as Kpi;
pub use super::kpi_score::Entity as KpiScore;
pub use super::measurement::Entity as Measurement;
pub use super::notification::Entity as Notification;
pub use super::salary::Entity as Salary;
pub use super::vacancy::Entity as Vacancy;
pub use super::vacation_balance::Entity as VacationBalance;
pub use super::vacation_request::Entity as VacationRequest;
