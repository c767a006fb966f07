// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use axum::{
    Json, Router,
    extract::{Path, Query, State as AxumState},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post},
};
use clap::Parser;
use qotd_api::{
    AddMemberRequest, ApiError, ApplyRotationRequest, ApplyRotationResponse, AssignMemberRequest,
    AssignMemberResponse, AssignmentActionRequest, AssignmentActionResponse, AuditTimelineResponse,
    DashboardResponse, ListAssignmentsRequest, ListAssignmentsResponse, ListMembersRequest,
    ListMembersResponse, MemberAgendaResponse, MemberWriteResponse, NotificationService,
    PreviewRotationRequest, PreviewRotationResponse, ReconcileOverdueRequest,
    ReconcileOverdueResponse, StatsResponse, TracingNotifier, add_member, apply_rotation,
    assign_member, complete_assignment, get_audit_timeline, get_dashboard, get_member_agenda,
    get_stats, list_assignments, list_members, mark_assignment_missed, preview_rotation,
    reconcile_overdue, remove_assignment, remove_member,
};
use qotd_audit::{Actor, Cause};
use qotd_domain::{OverduePolicy, parse_iso_date};
use qotd_persistence::Persistence;
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::sync::Arc;
use time::{Date, OffsetDateTime};
use tokio::sync::Mutex;
use tracing::{debug, error, info, warn};

/// QOTD Server - HTTP server for the QOTD duty scheduler
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses in-memory database.
    #[arg(short, long)]
    database: Option<PathBuf>,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// Address to bind the server to
    #[arg(short, long, default_value_t = IpAddr::V4(Ipv4Addr::LOCALHOST))]
    bind: IpAddr,

    /// JSON file with members to register at start-up (`[{"id", "name", "role"}]`).
    /// Members that already exist are left alone.
    #[arg(long)]
    seed_members: Option<PathBuf>,
}

/// Application state shared across handlers.
///
/// This contains the persistence layer wrapped in a Mutex to allow
/// safe concurrent access.
#[derive(Clone)]
struct AppState {
    /// The persistence layer for members, assignments, and audit events.
    persistence: Arc<Mutex<Persistence>>,
    /// Where new-assignment notices go.
    notifier: Arc<dyn NotificationService>,
}

/// Who is making a change, and why.
///
/// Identity is recorded in the audit trail as given. Missing fields fall back
/// to generic values.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
struct RequestOrigin {
    /// The actor ID performing this action.
    actor_id: Option<String>,
    /// The type of actor.
    actor_type: Option<String>,
    /// The cause ID for this action.
    cause_id: Option<String>,
    /// The cause description.
    cause_description: Option<String>,
}

impl RequestOrigin {
    fn into_actor_and_cause(self, action: &str) -> (Actor, Cause) {
        let actor: Actor = Actor::new(
            self.actor_id.unwrap_or_else(|| String::from("anonymous")),
            self.actor_type.unwrap_or_else(|| String::from("admin")),
        );
        let cause: Cause = Cause::new(
            self.cause_id.unwrap_or_else(|| String::from("http-request")),
            self.cause_description
                .unwrap_or_else(|| format!("{action} via HTTP")),
        );
        (actor, cause)
    }
}

/// API request for registering a member.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct AddMemberApiRequest {
    /// The member identifier.
    id: String,
    /// The member's display name.
    name: String,
    /// `junior` or `senior`.
    role: String,
    #[serde(flatten)]
    origin: RequestOrigin,
}

/// API request for assigning a member to a date.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
struct AssignMemberApiRequest {
    /// The duty date (ISO 8601).
    date: String,
    /// The member to assign.
    member_id: String,
    #[serde(flatten)]
    origin: RequestOrigin,
}

/// API request for previewing a rotation.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
struct PreviewRotationApiRequest {
    year: i32,
    /// The 1-based month number.
    month: u8,
    member_ids: Vec<String>,
    #[serde(default)]
    limit: Option<usize>,
}

/// API request for scheduling a rotation.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
struct ApplyRotationApiRequest {
    year: i32,
    /// The 1-based month number.
    month: u8,
    member_ids: Vec<String>,
    #[serde(flatten)]
    origin: RequestOrigin,
}

/// API request for resolving overdue assignments.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
struct ReconcileApiRequest {
    #[serde(default)]
    policy: OverduePolicy,
    /// Overrides the reference date (ISO 8601).
    #[serde(default)]
    today: Option<String>,
    #[serde(flatten)]
    origin: RequestOrigin,
}

/// Query parameters carrying an optional reference date.
#[derive(Debug, Clone, Default, Deserialize)]
struct TodayQuery {
    today: Option<String>,
}

/// Query parameters for GET `/assignments`.
#[derive(Debug, Clone, Default, Deserialize)]
struct ListAssignmentsQuery {
    year: Option<i32>,
    month: Option<u8>,
    today: Option<String>,
}

/// Query parameters for GET `/members`.
#[derive(Debug, Clone, Default, Deserialize)]
struct ListMembersQuery {
    search: Option<String>,
    role: Option<String>,
}

/// A member entry in the `--seed-members` file.
#[derive(Debug, Clone, Deserialize)]
struct SeedMember {
    id: String,
    name: String,
    role: String,
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
#[derive(Debug)]
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        let status: StatusCode = match err {
            ApiError::DomainRuleViolation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            ApiError::ResourceNotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Conflict { .. } => StatusCode::CONFLICT,
            ApiError::Internal { .. } => {
                error!(error = %err, "Internal error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

/// Resolves the reference date, defaulting to today's UTC date.
fn resolve_today(today: Option<&str>) -> Result<Date, HttpError> {
    today.map_or_else(
        || Ok(OffsetDateTime::now_utc().date()),
        |value| {
            parse_iso_date(value).map_err(|e| HttpError {
                status: StatusCode::BAD_REQUEST,
                message: e.to_string(),
            })
        },
    )
}

/// Handler for GET `/members` endpoint.
async fn handle_list_members(
    AxumState(app_state): AxumState<AppState>,
    Query(query): Query<ListMembersQuery>,
) -> Result<Json<ListMembersResponse>, HttpError> {
    debug!(search = ?query.search, role = ?query.role, "Handling list_members request");

    let request: ListMembersRequest = ListMembersRequest {
        search: query.search,
        role: query.role,
    };
    let mut persistence = app_state.persistence.lock().await;
    let response: ListMembersResponse = list_members(&mut persistence, &request)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for POST `/members` endpoint.
async fn handle_add_member(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<AddMemberApiRequest>,
) -> Result<Json<MemberWriteResponse>, HttpError> {
    info!(member_id = %req.id, "Handling add_member request");

    let (actor, cause) = req.origin.into_actor_and_cause("Add member");
    let request: AddMemberRequest = AddMemberRequest {
        id: req.id,
        name: req.name,
        role: req.role,
    };

    let mut persistence = app_state.persistence.lock().await;
    let response: MemberWriteResponse = add_member(&mut persistence, &request, actor, cause)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for DELETE `/members/{id}` endpoint.
async fn handle_remove_member(
    AxumState(app_state): AxumState<AppState>,
    Path(member_id): Path<String>,
    Query(origin): Query<RequestOrigin>,
) -> Result<Json<MemberWriteResponse>, HttpError> {
    info!(member_id = %member_id, "Handling remove_member request");

    let (actor, cause) = origin.into_actor_and_cause("Remove member");
    let mut persistence = app_state.persistence.lock().await;
    let response: MemberWriteResponse = remove_member(&mut persistence, &member_id, actor, cause)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for GET `/members/{id}/agenda` endpoint.
async fn handle_get_member_agenda(
    AxumState(app_state): AxumState<AppState>,
    Path(member_id): Path<String>,
    Query(query): Query<TodayQuery>,
) -> Result<Json<MemberAgendaResponse>, HttpError> {
    let today: Date = resolve_today(query.today.as_deref())?;
    debug!(member_id = %member_id, %today, "Handling get_member_agenda request");

    let mut persistence = app_state.persistence.lock().await;
    let response: MemberAgendaResponse = get_member_agenda(&mut persistence, &member_id, today)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for GET `/assignments` endpoint.
async fn handle_list_assignments(
    AxumState(app_state): AxumState<AppState>,
    Query(query): Query<ListAssignmentsQuery>,
) -> Result<Json<ListAssignmentsResponse>, HttpError> {
    let today: Date = resolve_today(query.today.as_deref())?;
    debug!(year = ?query.year, month = ?query.month, "Handling list_assignments request");

    let request: ListAssignmentsRequest = ListAssignmentsRequest {
        year: query.year,
        month: query.month,
    };
    let mut persistence = app_state.persistence.lock().await;
    let response: ListAssignmentsResponse = list_assignments(&mut persistence, &request, today)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for POST `/assignments` endpoint.
async fn handle_assign_member(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<AssignMemberApiRequest>,
) -> Result<Json<AssignMemberResponse>, HttpError> {
    info!(date = %req.date, member_id = %req.member_id, "Handling assign_member request");

    let (actor, cause) = req.origin.into_actor_and_cause("Assign member");
    let request: AssignMemberRequest = AssignMemberRequest {
        date: req.date,
        member_id: req.member_id,
    };

    let mut persistence = app_state.persistence.lock().await;
    let response: AssignMemberResponse = assign_member(
        &mut persistence,
        app_state.notifier.as_ref(),
        &request,
        actor,
        cause,
    )?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for POST `/assignments/{id}/complete` endpoint.
async fn handle_complete_assignment(
    AxumState(app_state): AxumState<AppState>,
    Path(assignment_id): Path<String>,
    Query(origin): Query<RequestOrigin>,
) -> Result<Json<AssignmentActionResponse>, HttpError> {
    info!(assignment_id = %assignment_id, "Handling complete_assignment request");

    let (actor, cause) = origin.into_actor_and_cause("Complete assignment");
    let request: AssignmentActionRequest = AssignmentActionRequest { assignment_id };
    let mut persistence = app_state.persistence.lock().await;
    let response: AssignmentActionResponse =
        complete_assignment(&mut persistence, &request, actor, cause)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for POST `/assignments/{id}/missed` endpoint.
async fn handle_mark_assignment_missed(
    AxumState(app_state): AxumState<AppState>,
    Path(assignment_id): Path<String>,
    Query(origin): Query<RequestOrigin>,
) -> Result<Json<AssignmentActionResponse>, HttpError> {
    info!(assignment_id = %assignment_id, "Handling mark_assignment_missed request");

    let (actor, cause) = origin.into_actor_and_cause("Mark assignment missed");
    let request: AssignmentActionRequest = AssignmentActionRequest { assignment_id };
    let mut persistence = app_state.persistence.lock().await;
    let response: AssignmentActionResponse =
        mark_assignment_missed(&mut persistence, &request, actor, cause)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for DELETE `/assignments/{id}` endpoint.
async fn handle_remove_assignment(
    AxumState(app_state): AxumState<AppState>,
    Path(assignment_id): Path<String>,
    Query(origin): Query<RequestOrigin>,
) -> Result<Json<AssignmentActionResponse>, HttpError> {
    info!(assignment_id = %assignment_id, "Handling remove_assignment request");

    let (actor, cause) = origin.into_actor_and_cause("Remove assignment");
    let request: AssignmentActionRequest = AssignmentActionRequest { assignment_id };
    let mut persistence = app_state.persistence.lock().await;
    let response: AssignmentActionResponse =
        remove_assignment(&mut persistence, &request, actor, cause)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for POST `/assignments/reconcile` endpoint.
async fn handle_reconcile_overdue(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<ReconcileApiRequest>,
) -> Result<Json<ReconcileOverdueResponse>, HttpError> {
    let today: Date = resolve_today(req.today.as_deref())?;
    info!(policy = ?req.policy, %today, "Handling reconcile_overdue request");

    let (actor, cause) = req.origin.into_actor_and_cause("Reconcile overdue assignments");
    let request: ReconcileOverdueRequest = ReconcileOverdueRequest {
        today,
        policy: req.policy,
    };
    let mut persistence = app_state.persistence.lock().await;
    let response: ReconcileOverdueResponse =
        reconcile_overdue(&mut persistence, &request, actor, cause)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for POST `/rotations/preview` endpoint.
async fn handle_preview_rotation(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<PreviewRotationApiRequest>,
) -> Result<Json<PreviewRotationResponse>, HttpError> {
    debug!(year = req.year, month = req.month, "Handling preview_rotation request");

    let request: PreviewRotationRequest = PreviewRotationRequest {
        year: req.year,
        month: req.month,
        member_ids: req.member_ids,
        limit: req.limit,
    };
    let mut persistence = app_state.persistence.lock().await;
    let response: PreviewRotationResponse = preview_rotation(&mut persistence, &request)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for POST `/rotations` endpoint.
async fn handle_apply_rotation(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<ApplyRotationApiRequest>,
) -> Result<Json<ApplyRotationResponse>, HttpError> {
    info!(
        year = req.year,
        month = req.month,
        members = req.member_ids.len(),
        "Handling apply_rotation request"
    );

    let (actor, cause) = req.origin.into_actor_and_cause("Apply rotation");
    let request: ApplyRotationRequest = ApplyRotationRequest {
        year: req.year,
        month: req.month,
        member_ids: req.member_ids,
    };
    let mut persistence = app_state.persistence.lock().await;
    let response: ApplyRotationResponse = apply_rotation(
        &mut persistence,
        app_state.notifier.as_ref(),
        &request,
        actor,
        cause,
    )?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for GET `/stats` endpoint.
async fn handle_get_stats(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<StatsResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response: StatsResponse = get_stats(&mut persistence)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for GET `/dashboard` endpoint.
async fn handle_get_dashboard(
    AxumState(app_state): AxumState<AppState>,
    Query(query): Query<TodayQuery>,
) -> Result<Json<DashboardResponse>, HttpError> {
    let today: Date = resolve_today(query.today.as_deref())?;

    let mut persistence = app_state.persistence.lock().await;
    let response: DashboardResponse = get_dashboard(&mut persistence, today)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for GET `/audit/timeline` endpoint.
async fn handle_get_audit_timeline(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<AuditTimelineResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response: AuditTimelineResponse = get_audit_timeline(&mut persistence)?;
    drop(persistence);

    Ok(Json(response))
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/members", get(handle_list_members).post(handle_add_member))
        .route("/members/{id}", delete(handle_remove_member))
        .route("/members/{id}/agenda", get(handle_get_member_agenda))
        .route(
            "/assignments",
            get(handle_list_assignments).post(handle_assign_member),
        )
        .route("/assignments/reconcile", post(handle_reconcile_overdue))
        .route("/assignments/{id}", delete(handle_remove_assignment))
        .route(
            "/assignments/{id}/complete",
            post(handle_complete_assignment),
        )
        .route(
            "/assignments/{id}/missed",
            post(handle_mark_assignment_missed),
        )
        .route("/rotations/preview", post(handle_preview_rotation))
        .route("/rotations", post(handle_apply_rotation))
        .route("/stats", get(handle_get_stats))
        .route("/dashboard", get(handle_get_dashboard))
        .route("/audit/timeline", get(handle_get_audit_timeline))
        .with_state(app_state)
}

/// Registers the members listed in a seed file.
///
/// Members whose id is already registered are skipped. Returns the number of
/// members added.
fn seed_members(
    persistence: &mut Persistence,
    path: &std::path::Path,
) -> Result<usize, Box<dyn std::error::Error>> {
    let contents: String = std::fs::read_to_string(path)?;
    let seeds: Vec<SeedMember> = serde_json::from_str(&contents)?;

    let mut added: usize = 0;
    for seed in seeds {
        let request: AddMemberRequest = AddMemberRequest {
            id: seed.id,
            name: seed.name,
            role: seed.role,
        };
        let cause: Cause = Cause::new(
            String::from("startup-seed"),
            format!("Seeded from {}", path.display()),
        );
        match add_member(persistence, &request, Actor::system(), cause) {
            Ok(_) => added += 1,
            Err(ApiError::DomainRuleViolation { .. }) => {
                debug!(member_id = %request.id, "Seed member already registered");
            }
            Err(e) => return Err(Box::new(e)),
        }
    }
    Ok(added)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing QOTD Server");

    // Initialize persistence (in-memory or file-based based on CLI argument)
    let mut persistence: Persistence = if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path.display());
        Persistence::new_with_file(db_path)?
    } else {
        warn!("Using in-memory database; data is lost on shutdown");
        Persistence::new_in_memory()?
    };

    if let Some(seed_path) = &args.seed_members {
        let added: usize = seed_members(&mut persistence, seed_path)?;
        info!(added, path = %seed_path.display(), "Seeded members");
    }

    let app_state: AppState = AppState {
        persistence: Arc::new(Mutex::new(persistence)),
        notifier: Arc::new(TracingNotifier),
    };

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: SocketAddr = SocketAddr::new(args.bind, args.port);
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
