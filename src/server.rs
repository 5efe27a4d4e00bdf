use actix_web::http::StatusCode;
use actix_web::middleware::Logger;
use actix_web::{web, App, HttpResponse, HttpServer, Responder};
use log::{error, info};

use crate::config::Settings;
use crate::domain::solve::solve_report;
use crate::domain::solver::Solver;
use crate::error::SolveError;
use crate::models::{ApiError, ApiSolution, SolveData};

/// Shared across workers; backends hold no per-solve state
pub struct AppState {
    pub solver: Box<dyn Solver>,
}

fn status_for(e: &SolveError) -> StatusCode {
    match e {
        SolveError::ShapeMismatch(_) | SolveError::InvalidPayload(_) => StatusCode::BAD_REQUEST,
        SolveError::SolveFailed { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        SolveError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        SolveError::BackendInternal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn error_response(e: &SolveError) -> HttpResponse {
    HttpResponse::build(status_for(e)).json(ApiError::from(e))
}

// ---------- Route handlers ----------

/// POST /solve
pub async fn solve(state: web::Data<AppState>, req: web::Json<SolveData>) -> HttpResponse {
    let data = req.into_inner();
    let worker_state = state.clone();

    // Each request builds its own model; the solve blocks, so keep it off the worker
    let result = web::block(move || {
        solve_report(worker_state.solver.as_ref(), &data.a, &data.b)
    })
    .await;

    match result {
        Ok(Ok(report)) => HttpResponse::Ok().json(ApiSolution::from(report)),
        Ok(Err(e)) => {
            info!("solve rejected: {}", e);
            error_response(&e)
        }
        Err(e) => {
            error!("solver thread failed: {}", e);
            error_response(&SolveError::BackendInternal(e.to_string()))
        }
    }
}

/// GET /health
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().body("OK")
}

/// GET /
pub async fn index(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "solver": state.solver.name(),
    }))
}

/// Register routes and the JSON extractor config
pub fn configure(json_limit: usize) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg: &mut web::ServiceConfig| {
        cfg.app_data(
            web::JsonConfig::default()
                .limit(json_limit)
                .error_handler(|err, _| {
                    let err_string = err.to_string();
                    actix_web::error::InternalError::from_response(
                        err,
                        HttpResponse::BadRequest().json(ApiError {
                            error: err_string,
                            kind: "invalid_payload".to_string(),
                        }),
                    )
                    .into()
                }),
        )
        .route("/", web::get().to(index))
        .route("/solve", web::post().to(solve))
        .route("/health", web::get().to(health_check));
    }
}

// ---------- Server bootstrap ----------

pub async fn run(settings: Settings, solver: Box<dyn Solver>) -> std::io::Result<()> {
    let port = settings.port;
    let json_limit = settings.json_limit;
    let state = web::Data::new(AppState { solver });

    info!(
        "Starting server on http://127.0.0.1:{} with {} backend",
        port,
        state.solver.name()
    );
    HttpServer::new(move || {
        App::new()
            .wrap(sentry_actix::Sentry::new())
            .wrap(Logger::default())
            .app_data(state.clone())
            .configure(configure(json_limit))
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::solvers::MicrolpSolver;
    use actix_web::test;

    fn state() -> web::Data<AppState> {
        web::Data::new(AppState {
            solver: Box::new(MicrolpSolver::new()),
        })
    }

    #[actix_web::test]
    async fn test_solve_returns_solution_and_objective() {
        let app = test::init_service(
            App::new()
                .app_data(state())
                .configure(configure(1024 * 1024)),
        )
        .await;
        let req = test::TestRequest::post()
            .uri("/solve")
            .set_json(serde_json::json!({"A": [[1.0, 0.0], [0.0, 1.0]], "b": [0.5, 0.5]}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: ApiSolution = test::read_body_json(resp).await;
        assert_eq!(body.solution.len(), 2);
        assert!((body.objective - 1.0).abs() < 1e-6);
        assert_eq!(body.solver, "microlp");
    }

    #[actix_web::test]
    async fn test_solve_infeasible_is_unprocessable() {
        let app = test::init_service(
            App::new()
                .app_data(state())
                .configure(configure(1024 * 1024)),
        )
        .await;
        let req = test::TestRequest::post()
            .uri("/solve")
            .set_json(serde_json::json!({"A": [[-1.0]], "b": [-2.0]}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let body: ApiError = test::read_body_json(resp).await;
        assert_eq!(body.kind, "solve_failed");
    }

    #[actix_web::test]
    async fn test_solve_ragged_matrix_is_bad_request() {
        let app = test::init_service(
            App::new()
                .app_data(state())
                .configure(configure(1024 * 1024)),
        )
        .await;
        let req = test::TestRequest::post()
            .uri("/solve")
            .set_json(serde_json::json!({"A": [[1.0, 1.0], [1.0]], "b": [1.0, 1.0]}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: ApiError = test::read_body_json(resp).await;
        assert_eq!(body.kind, "shape_mismatch");
    }

    #[actix_web::test]
    async fn test_index_names_backend() {
        let app = test::init_service(
            App::new()
                .app_data(state())
                .configure(configure(1024)),
        )
        .await;
        let req = test::TestRequest::get().uri("/").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["solver"], "microlp");
    }
}
