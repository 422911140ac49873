use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        access_log, account, auth, candidate, document, employee, investment, kpi, notification,
        salary, task, telemetry, vacancy, vacation,
    },
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(tags(
    (name = "employee", description = "Employee management"),
    (name = "vacancy", description = "Vacancy management"),
    (name = "candidate", description = "Candidate hiring pipeline"),
    (name = "telemetry", description = "Reservoir sensor telemetry"),
))]
struct ApiDoc;

pub fn router() -> Router<AppState> {
    let (api_router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(employee::get_employees, employee::add_employee))
        .routes(routes!(
            employee::get_employee_by_id,
            employee::update_employee,
            employee::delete_employee
        ))
        .routes(routes!(employee::get_employee_profile))
        .routes(routes!(vacancy::get_vacancies, vacancy::add_vacancy))
        .routes(routes!(
            vacancy::get_vacancy_by_id,
            vacancy::update_vacancy,
            vacancy::delete_vacancy
        ))
        .routes(routes!(vacancy::close_vacancy))
        .routes(routes!(candidate::add_candidate))
        .routes(routes!(
            candidate::get_candidate_by_id,
            candidate::update_candidate,
            candidate::delete_candidate
        ))
        .routes(routes!(candidate::get_candidates_by_vacancy))
        .routes(routes!(candidate::change_candidate_status))
        .routes(routes!(
            telemetry::ingest_measurement,
            telemetry::get_measurements
        ))
        .routes(routes!(telemetry::ingest_andijan_measurement))
        .split_for_parts();

    api_router
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/auth/user", get(auth::get_user))
        .route(
            "/api/accounts",
            post(account::add_account).get(account::get_accounts),
        )
        .route(
            "/api/employees/{id}/documents",
            post(document::upload_document).get(document::get_documents_by_employee),
        )
        .route("/api/documents/{id}", delete(document::delete_document))
        .route(
            "/api/employees/{id}/salary",
            post(salary::set_salary).get(salary::get_current_salary),
        )
        .route(
            "/api/employees/{id}/salary/history",
            get(salary::get_salary_history),
        )
        .route("/api/kpis", post(kpi::add_kpi).get(kpi::get_kpis))
        .route(
            "/api/kpis/{id}",
            get(kpi::get_kpi_by_id)
                .put(kpi::update_kpi)
                .delete(kpi::delete_kpi),
        )
        .route(
            "/api/employees/{id}/scores",
            post(kpi::record_kpi_score).get(kpi::get_kpi_scores),
        )
        .route(
            "/api/notifications",
            post(notification::broadcast_notification).get(notification::get_notifications),
        )
        .route(
            "/api/notifications/unread",
            get(notification::get_unread_count),
        )
        .route(
            "/api/notifications/read-all",
            put(notification::mark_all_notifications_read),
        )
        .route(
            "/api/notifications/{id}/read",
            put(notification::mark_notification_read),
        )
        .route(
            "/api/employees/{id}/vacation",
            put(vacation::set_vacation_balance),
        )
        .route(
            "/api/employees/{id}/vacation/requests",
            get(vacation::get_vacation_requests),
        )
        .route(
            "/api/employees/{id}/vacation/{year}",
            get(vacation::get_vacation_balance),
        )
        .route(
            "/api/vacation/requests",
            post(vacation::add_vacation_request),
        )
        .route(
            "/api/vacation/requests/{id}/approve",
            post(vacation::approve_vacation_request),
        )
        .route(
            "/api/vacation/requests/{id}/reject",
            post(vacation::reject_vacation_request),
        )
        .route("/api/tasks", get(task::get_tasks))
        .route("/api/access/logs", post(access_log::add_access_log))
        .route("/api/access/presence", get(access_log::get_presence))
        .route(
            "/api/employees/{id}/access-logs",
            get(access_log::get_access_logs),
        )
        .route(
            "/api/investments",
            post(investment::add_investment).get(investment::get_investments),
        )
        .route(
            "/api/investments/{id}",
            get(investment::get_investment_by_id)
                .put(investment::update_investment)
                .delete(investment::delete_investment),
        )
        .route(
            "/api/investments/{id}/report",
            get(investment::get_investment_report),
        )
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", api))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
