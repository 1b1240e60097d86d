use axum::{
    Router,
    extract::{Json, Query},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Serialize;
use std::net::SocketAddr;
use tokio::net::TcpListener;

use crate::core::{
    BasketProjection, FunFund, GoalCategory, GoalPlan, KittySettlement, PayoffRecommendation,
    RunwayEstimate, SimpleSavingsPlan, TaxComparisonResult, as_percent,
    compare_tax_regimes_with, estimate_break_runway, plan_goal_funding, plan_simple_savings,
    project_basket, project_inflated_price, recommend_loan_payoff, settle_kitty_round,
    split_fun_fund,
};

pub mod payload;

pub use payload::{
    BasketPayload, FunFundPayload, GoalPayload, InflationPayload, KittyPayload, LoanPayload,
    RequestError, RunwayPayload, SavingsPayload, TaxPayload,
};

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InflationResponse {
    pub present_price: f64,
    pub years: u32,
    pub annual_rate_percent: f64,
    pub future_price: f64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BasketResponse {
    pub years: u32,
    pub annual_rate_percent: f64,
    pub items: Vec<BasketProjection>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalResponse {
    pub category: GoalCategory,
    pub label: &'static str,
    pub present_cost: f64,
    pub years_to_goal: u32,
    pub inflation_percent: f64,
    pub annual_return_percent: f64,
    #[serde(flatten)]
    pub plan: GoalPlan,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingsResponse {
    pub plan: Option<SimpleSavingsPlan>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanResponse {
    pub recommendation: Option<PayoffRecommendation>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalCategoryResponse {
    pub category: GoalCategory,
    pub label: &'static str,
    pub inflation_percent: f64,
}

pub fn tax_response(payload: TaxPayload) -> Result<TaxComparisonResult, RequestError> {
    let (profile, rules) = payload::build_tax_request(payload)?;
    Ok(compare_tax_regimes_with(&profile, &rules))
}

pub fn inflation_response(payload: InflationPayload) -> Result<InflationResponse, RequestError> {
    let (present_price, years, rate) = payload::build_inflation_request(payload)?;
    Ok(InflationResponse {
        present_price,
        years,
        annual_rate_percent: as_percent(rate),
        future_price: project_inflated_price(present_price, years, rate),
    })
}

pub fn basket_response(payload: BasketPayload) -> Result<BasketResponse, RequestError> {
    let (years, rate) = payload::build_basket_request(payload)?;
    Ok(BasketResponse {
        years,
        annual_rate_percent: as_percent(rate),
        items: project_basket(years, rate),
    })
}

pub fn goal_response(payload: GoalPayload) -> Result<GoalResponse, RequestError> {
    let (category, profile) = payload::build_goal_request(payload)?;
    Ok(GoalResponse {
        category,
        label: category.label(),
        present_cost: profile.present_cost,
        years_to_goal: profile.years_to_goal,
        inflation_percent: as_percent(profile.annual_inflation_rate),
        annual_return_percent: as_percent(profile.assumed_annual_return_rate),
        plan: plan_goal_funding(&profile),
    })
}

pub fn savings_response(payload: SavingsPayload) -> Result<SavingsResponse, RequestError> {
    let (cost, years) = payload::build_savings_request(payload)?;
    Ok(SavingsResponse {
        plan: plan_simple_savings(cost, years),
    })
}

pub fn loan_response(payload: LoanPayload) -> Result<LoanResponse, RequestError> {
    let pair = payload::build_loan_request(payload)?;
    Ok(LoanResponse {
        recommendation: recommend_loan_payoff(&pair),
    })
}

pub fn runway_response(payload: RunwayPayload) -> Result<RunwayEstimate, RequestError> {
    let plan = payload::build_runway_request(payload)?;
    Ok(estimate_break_runway(&plan))
}

pub fn fun_fund_response(payload: FunFundPayload) -> Result<FunFund, RequestError> {
    Ok(split_fun_fund(&payload::build_fun_fund_request(payload)))
}

pub fn kitty_response(payload: KittyPayload) -> Result<KittySettlement, RequestError> {
    let round = payload::build_kitty_request(payload)?;
    settle_kitty_round(&round).ok_or(RequestError::EmptyKittyGroup)
}

pub fn goal_categories() -> Vec<GoalCategoryResponse> {
    GoalCategory::ALL
        .iter()
        .map(|&category| GoalCategoryResponse {
            category,
            label: category.label(),
            inflation_percent: as_percent(category.inflation_rate()),
        })
        .collect()
}

pub fn router() -> Router {
    Router::new()
        .route("/api/tax", get(tax_get_handler).post(tax_post_handler))
        .route(
            "/api/inflation",
            get(inflation_get_handler).post(inflation_post_handler),
        )
        .route(
            "/api/basket",
            get(basket_get_handler).post(basket_post_handler),
        )
        .route("/api/goal", get(goal_get_handler).post(goal_post_handler))
        .route("/api/goal-categories", get(goal_categories_handler))
        .route(
            "/api/savings",
            get(savings_get_handler).post(savings_post_handler),
        )
        .route("/api/loan", get(loan_get_handler).post(loan_post_handler))
        .route(
            "/api/runway",
            get(runway_get_handler).post(runway_post_handler),
        )
        .route(
            "/api/fun-fund",
            get(fun_fund_get_handler).post(fun_fund_post_handler),
        )
        .route("/api/kitty", post(kitty_post_handler))
        .fallback(not_found_handler)
}

pub async fn run_http_server(addr: SocketAddr) -> std::io::Result<()> {
    let listener = TcpListener::bind(addr).await?;
    log::info!("PaisaPop HTTP API listening on http://{addr}");
    log::info!("Local access: http://127.0.0.1:{}/api/tax", addr.port());

    axum::serve(listener, router()).await
}

async fn not_found_handler() -> Response {
    error_response(StatusCode::NOT_FOUND, "Not found")
}

async fn tax_get_handler(Query(payload): Query<TaxPayload>) -> Response {
    respond("tax", tax_response(payload))
}

async fn tax_post_handler(Json(payload): Json<TaxPayload>) -> Response {
    respond("tax", tax_response(payload))
}

async fn inflation_get_handler(Query(payload): Query<InflationPayload>) -> Response {
    respond("inflation", inflation_response(payload))
}

async fn inflation_post_handler(Json(payload): Json<InflationPayload>) -> Response {
    respond("inflation", inflation_response(payload))
}

async fn basket_get_handler(Query(payload): Query<BasketPayload>) -> Response {
    respond("basket", basket_response(payload))
}

async fn basket_post_handler(Json(payload): Json<BasketPayload>) -> Response {
    respond("basket", basket_response(payload))
}

async fn goal_get_handler(Query(payload): Query<GoalPayload>) -> Response {
    respond("goal", goal_response(payload))
}

async fn goal_post_handler(Json(payload): Json<GoalPayload>) -> Response {
    respond("goal", goal_response(payload))
}

async fn goal_categories_handler() -> Response {
    json_response(StatusCode::OK, goal_categories())
}

async fn savings_get_handler(Query(payload): Query<SavingsPayload>) -> Response {
    respond("savings", savings_response(payload))
}

async fn savings_post_handler(Json(payload): Json<SavingsPayload>) -> Response {
    respond("savings", savings_response(payload))
}

async fn loan_get_handler(Query(payload): Query<LoanPayload>) -> Response {
    respond("loan", loan_response(payload))
}

async fn loan_post_handler(Json(payload): Json<LoanPayload>) -> Response {
    respond("loan", loan_response(payload))
}

async fn runway_get_handler(Query(payload): Query<RunwayPayload>) -> Response {
    respond("runway", runway_response(payload))
}

async fn runway_post_handler(Json(payload): Json<RunwayPayload>) -> Response {
    respond("runway", runway_response(payload))
}

async fn fun_fund_get_handler(Query(payload): Query<FunFundPayload>) -> Response {
    respond("fun-fund", fun_fund_response(payload))
}

async fn fun_fund_post_handler(Json(payload): Json<FunFundPayload>) -> Response {
    respond("fun-fund", fun_fund_response(payload))
}

async fn kitty_post_handler(Json(payload): Json<KittyPayload>) -> Response {
    respond("kitty", kitty_response(payload))
}

fn respond<T: Serialize>(route: &str, result: Result<T, RequestError>) -> Response {
    match result {
        Ok(body) => {
            log::debug!("{route}: ok");
            json_response(StatusCode::OK, body)
        }
        Err(err) => {
            log::warn!("{route}: rejected request: {err}");
            error_response(StatusCode::BAD_REQUEST, &err.to_string())
        }
    }
}

fn with_cache_control<R: IntoResponse>(response: R) -> Response {
    let mut response = response.into_response();
    response
        .headers_mut()
        .insert(header::CACHE_CONTROL, HeaderValue::from_static("no-store"));
    response
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    with_cache_control((status, Json(body)))
}

fn error_response(status: StatusCode, msg: &str) -> Response {
    json_response(
        status,
        ErrorResponse {
            error: msg.to_string(),
        },
    )
}
