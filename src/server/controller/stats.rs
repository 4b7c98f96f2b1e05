use axum::{extract::State, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::{DataDto, ErrorDto},
        stats::{AgentStatsDto, DashboardStatsDto, OverviewStatsDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::stats::StatsService,
        state::AppState,
    },
};

/// Tag for grouping statistics endpoints in OpenAPI documentation
pub static STATS_TAG: &str = "stats";

/// Site-wide statistics.
///
/// # Access Control
/// - `Admin` - Only admins can view site statistics
///
/// # Returns
/// - `200 OK` - Counts, breakdowns, recent activity, monthly trends and prices
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Caller is not an admin
#[utoipa::path(
    get,
    path = "/api/stats",
    tag = STATS_TAG,
    responses(
        (status = 200, description = "Site statistics", body = DataDto<OverviewStatsDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn overview_stats(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let stats = StatsService::new(&state.db).overview().await?;

    Ok(Json(DataDto::new(stats.into_dto())))
}

/// Statistics over the caller's own listings.
///
/// # Access Control
/// - `Agent` - Agents and admins
#[utoipa::path(
    get,
    path = "/api/stats/agent",
    tag = STATS_TAG,
    responses(
        (status = 200, description = "Agent statistics", body = DataDto<AgentStatsDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an agent or admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn agent_stats(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let agent = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Agent])
        .await?;

    let stats = StatsService::new(&state.db).agent(&agent).await?;

    Ok(Json(DataDto::new(stats.into_dto())))
}

/// Dashboard summary, site-wide for admins and per agent otherwise.
#[utoipa::path(
    get,
    path = "/api/stats/dashboard",
    tag = STATS_TAG,
    responses(
        (status = 200, description = "Dashboard statistics", body = DataDto<DashboardStatsDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an agent or admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn dashboard_stats(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Agent])
        .await?;

    let stats = StatsService::new(&state.db).dashboard(&actor).await?;

    Ok(Json(DataDto::new(stats.into_dto())))
}
