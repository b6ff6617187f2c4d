use axum::routing::post;
use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use super::handlers::accounts::{
    company_signin, individual_signin, register_company, register_individual,
};
use super::handlers::job_offers;
use super::handlers::probes::{healthz, home, livez};
use super::middlewares::cors::cors_layer;
use super::state::AppState;
use crate::conf::settings;

pub fn build_routes(state: AppState) -> Router {
    routes(state).layer(cors_layer(&settings.cors_origin))
}

pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/individuals", post(register_individual))
        .route("/companies", post(register_company))
        .route("/IndividualsSignin", post(individual_signin))
        .route("/CompanySignin", post(company_signin))
        .route("/jobOffers", post(job_offers::create))
        .route("/ListjobOffers", get(job_offers::list))
        .route("/healthz", get(healthz))
        .route("/livez", get(livez))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
