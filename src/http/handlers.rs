//! Handlers HTTP.
//!
//! Les pages HTML rattrapent les erreurs de saisie et réaffichent le
//! formulaire ; l'API JSON les renvoie sous forme d'[`ApiError`](super::error::ApiError).

use askama::Template;
use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Redirect, Response},
    Json,
};

use super::dto::{
    HealthResponse, RotationQuery, RotationResponse, ScheduleQuery, ScheduleResponse, SelectQuery,
};
use super::error::AppError;
use super::state::AppState;
use crate::io::{non_blank, parse_config, parse_days, parse_item_count};
use crate::model::RotationConfig;
use crate::page::{self, FormValues, RotationPage, STYLES};
use crate::rotation::ValidationError;
use crate::tz::parse_timezone;

pub type HandlerResult<T> = Result<Json<T>, AppError>;

const DEFAULT_SCHEDULE_DAYS: u32 = 7;

/// GET /health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// GET /styles.css
pub async fn styles() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css; charset=utf-8")], STYLES)
}

/// GET /
pub async fn home() -> Result<Html<String>, AppError> {
    Ok(Html(page::home().render()?))
}

/// GET /{items}?tz=&start=&start_item=
///
/// Sans `tz`, renvoie une page qui détecte le fuseau côté client puis recharge.
pub async fn rotation_page(
    State(state): State<AppState>,
    Path(items): Path<String>,
    Query(q): Query<RotationQuery>,
) -> Result<Response, AppError> {
    let start = non_blank(q.start.as_deref());
    let start_item = non_blank(q.start_item.as_deref());
    let form = FormValues::prefilled(&items, start, start_item);

    let Some(tz) = non_blank(q.tz.as_deref()) else {
        return match parse_item_count(&items) {
            Ok(n) => {
                let html = page::detect_timezone(n, start, start_item).render()?;
                Ok(Html(html).into_response())
            }
            Err(err) => invalid_input(err, form),
        };
    };

    let resolved = parse_config(&items, start, start_item, &state.defaults)
        .and_then(|config| parse_timezone(tz).map(|tz| (config, tz)));
    match resolved {
        Ok((config, tz)) => {
            let rotation = state.calculator.active(&config, tz);
            let html = RotationPage::new(&rotation, form).render()?;
            Ok(Html(html).into_response())
        }
        Err(err) => invalid_input(err, form),
    }
}

/// GET /select?items=&tz=&start=&start_item=
///
/// Cible du formulaire : valide puis redirige vers `/{items}?tz=...`.
pub async fn select(
    State(state): State<AppState>,
    Query(q): Query<SelectQuery>,
) -> Result<Response, AppError> {
    let items = non_blank(q.items.as_deref()).unwrap_or("1");
    let start = non_blank(q.start.as_deref());
    let start_item = non_blank(q.start_item.as_deref());
    let form = FormValues::prefilled(items, start, start_item);

    let config = match parse_config(items, start, start_item, &state.defaults) {
        Ok(config) => config,
        Err(err) => return invalid_input(err, form),
    };

    let Some(tz) = non_blank(q.tz.as_deref()) else {
        let html = page::detect_timezone(config.item_count(), start, start_item).render()?;
        return Ok(Html(html).into_response());
    };

    if let Err(err) = parse_timezone(tz) {
        return invalid_input(err, form);
    }

    let target = page::rotation_url(config.item_count(), tz, start, start_item);
    Ok(Redirect::to(&target).into_response())
}

/// GET /api/{items}?tz=&start=&start_item=
pub async fn api_rotation(
    State(state): State<AppState>,
    Path(items): Path<String>,
    Query(q): Query<RotationQuery>,
) -> HandlerResult<RotationResponse> {
    let (config, tz) = resolve(&state, &items, q.tz, q.start, q.start_item)?;
    let rotation = state.calculator.active(&config, tz);
    Ok(Json(RotationResponse::from(&rotation)))
}

/// GET /api/{items}/schedule?tz=&start=&start_item=&days=
pub async fn api_schedule(
    State(state): State<AppState>,
    Path(items): Path<String>,
    Query(q): Query<ScheduleQuery>,
) -> HandlerResult<ScheduleResponse> {
    let days = parse_days(q.days.as_deref(), DEFAULT_SCHEDULE_DAYS)?;
    let (config, tz) = resolve(&state, &items, q.tz, q.start, q.start_item)?;
    let entries = state.calculator.upcoming(&config, tz, days)?;
    Ok(Json(ScheduleResponse {
        timezone: tz.name().to_string(),
        entries,
    }))
}

fn resolve(
    state: &AppState,
    items: &str,
    tz: Option<String>,
    start: Option<String>,
    start_item: Option<String>,
) -> Result<(RotationConfig, chrono_tz::Tz), AppError> {
    let tz = non_blank(tz.as_deref())
        .ok_or_else(|| AppError::BadRequest("missing tz query parameter".to_string()))?;
    let config = parse_config(
        items,
        non_blank(start.as_deref()),
        non_blank(start_item.as_deref()),
        &state.defaults,
    )?;
    Ok((config, parse_timezone(tz)?))
}

fn invalid_input(err: ValidationError, form: FormValues) -> Result<Response, AppError> {
    tracing::warn!(error = %err, "rejected rotation input");
    let html = page::error(err.to_string(), form).render()?;
    Ok((StatusCode::BAD_REQUEST, Html(html)).into_response())
}
