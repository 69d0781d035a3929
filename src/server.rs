use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    extract::{FromRequest, Path, Query, Request, State},
    http::{
        header::{InvalidHeaderValue, CONTENT_TYPE},
        HeaderValue, Method, StatusCode,
    },
    response::{IntoResponse, Response},
    routing::{get, post},
    Form, Json, Router,
};
use derive_more::From;
use serde::{de::DeserializeOwned, Deserialize};
use time::OffsetDateTime;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};
use tracing::{error, info};

use crate::{api, config, db, query, validate::ValidationError};

pub fn app(
    config: &config::Http,
    db_client: db::Client,
) -> Result<Router, InvalidHeaderValue> {
    let origins = config
        .cors
        .allowed_origins
        .iter()
        .map(|origin| origin.parse::<HeaderValue>())
        .collect::<Result<Vec<_>, _>>()?;
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE])
        .allow_origin(AllowOrigin::list(origins));

    let api_routes = Router::new()
        .route("/ping", get(ping).fallback(api_not_found))
        .route("/login", post(login).fallback(api_not_found))
        .route(
            "/tickets",
            get(list_tickets)
                .post(add_ticket)
                .fallback(api_not_found),
        )
        .route(
            "/tickets/search",
            get(search_tickets).fallback(api_not_found),
        )
        .route("/tickets/:id", get(get_ticket).fallback(api_not_found))
        .fallback(api_not_found);

    let mut router = Router::new().nest("/api", api_routes);
    if let Some(dir) = &config.public_dir {
        router = router.fallback_service(
            ServeDir::new(dir).fallback(ServeFile::new(dir.join("index.html"))),
        );
    }

    Ok(router
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(AppState { db_client })))
}

type SharedAppState = Arc<AppState>;

struct AppState {
    db_client: db::Client,
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (
        status,
        Json(api::Error {
            error: message.to_string(),
        }),
    )
        .into_response()
}

async fn ping() -> Json<api::Ping> {
    Json(api::Ping {
        success: true,
        message: "API is working!".to_string(),
    })
}

async fn api_not_found() -> Response {
    error_response(StatusCode::NOT_FOUND, "API endpoint not found")
}

// Other content types read as an empty body.
struct JsonOrForm<T>(T);

#[async_trait]
impl<T> FromRequest<SharedAppState> for JsonOrForm<T>
where
    T: DeserializeOwned + Default + Send + 'static,
{
    type Rejection = Response;

    async fn from_request(
        req: Request,
        state: &SharedAppState,
    ) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_ascii_lowercase();

        if content_type.starts_with("application/json") {
            let Json(body) = Json::<T>::from_request(req, state)
                .await
                .map_err(|_| invalid_body())?;
            Ok(Self(body))
        } else if content_type.starts_with("application/x-www-form-urlencoded")
        {
            let Form(body) = Form::<T>::from_request(req, state)
                .await
                .map_err(|_| invalid_body())?;
            Ok(Self(body))
        } else {
            Ok(Self(T::default()))
        }
    }
}

fn invalid_body() -> Response {
    error_response(StatusCode::BAD_REQUEST, "Invalid request body")
}

async fn login(
    JsonOrForm(credentials): JsonOrForm<api::user::Credentials>,
) -> Result<Json<api::User>, LoginError> {
    let user =
        api::user::login_user(&credentials).ok_or(LoginError::MissingFields)?;
    info!(username = %user.username, "simulated login");
    Ok(Json(user))
}

#[derive(Debug)]
pub enum LoginError {
    MissingFields,
}

impl IntoResponse for LoginError {
    fn into_response(self) -> Response {
        match self {
            Self::MissingFields => error_response(
                StatusCode::BAD_REQUEST,
                "Username and password are required.",
            ),
        }
    }
}

#[derive(Deserialize)]
struct ListTicketsInput {
    sort: Option<String>,
}

async fn list_tickets(
    State(state): State<SharedAppState>,
    Query(ListTicketsInput { sort }): Query<ListTicketsInput>,
) -> Result<Json<Vec<api::Ticket>>, ListTicketsError> {
    let tickets = state.db_client.list().await?;

    Ok(Json(match sort.as_deref() {
        Some(key) => query::sort_by(&tickets, key),
        None => tickets,
    }))
}

#[derive(Debug, From)]
pub enum ListTicketsError {
    #[from]
    DbError(db::Error),
}

impl IntoResponse for ListTicketsError {
    fn into_response(self) -> Response {
        match self {
            Self::DbError(e) => storage_failure(&e),
        }
    }
}

#[derive(Deserialize)]
struct SearchTicketsInput {
    query: Option<String>,
}

async fn search_tickets(
    State(state): State<SharedAppState>,
    Query(SearchTicketsInput { query }): Query<SearchTicketsInput>,
) -> Result<Json<Vec<api::Ticket>>, SearchTicketsError> {
    use SearchTicketsError as E;

    let query = query.filter(|q| !q.is_empty()).ok_or(E::QueryRequired)?;
    let tickets = state.db_client.list().await?;

    Ok(Json(query::search(&tickets, &query)))
}

#[derive(Debug, From)]
pub enum SearchTicketsError {
    #[from]
    DbError(db::Error),
    QueryRequired,
}

impl IntoResponse for SearchTicketsError {
    fn into_response(self) -> Response {
        match self {
            Self::QueryRequired => error_response(
                StatusCode::BAD_REQUEST,
                "Search query is required",
            ),
            Self::DbError(e) => storage_failure(&e),
        }
    }
}

async fn get_ticket(
    State(state): State<SharedAppState>,
    Path(id): Path<String>,
) -> Result<Json<api::Ticket>, GetTicketError> {
    use GetTicketError as E;

    let ticket = state
        .db_client
        .find(&api::ticket::Id::from(id))
        .await?
        .ok_or(E::TicketNotFound)?;

    Ok(Json(ticket))
}

#[derive(Debug, From)]
pub enum GetTicketError {
    #[from]
    DbError(db::Error),
    TicketNotFound,
}

impl IntoResponse for GetTicketError {
    fn into_response(self) -> Response {
        match self {
            Self::TicketNotFound => {
                error_response(StatusCode::NOT_FOUND, "Ticket not found")
            }
            Self::DbError(e) => storage_failure(&e),
        }
    }
}

async fn add_ticket(
    State(state): State<SharedAppState>,
    JsonOrForm(input): JsonOrForm<api::ticket::TicketInput>,
) -> Result<(StatusCode, Json<api::Ticket>), AddTicketError> {
    use AddTicketError as E;

    let ticket = db::Ticket::create(&input, OffsetDateTime::now_utc())
        .map_err(E::InvalidTicket)?;

    state.db_client.append(&ticket).await?;
    info!(
        id = %ticket.id,
        ticket_type = ticket.ticket_type.as_str(),
        "ticket created"
    );

    Ok((StatusCode::CREATED, Json(ticket)))
}

#[derive(Debug, From)]
pub enum AddTicketError {
    #[from]
    DbError(db::Error),
    InvalidTicket(Vec<ValidationError>),
}

impl IntoResponse for AddTicketError {
    fn into_response(self) -> Response {
        match self {
            Self::InvalidTicket(errors) => {
                info!(?errors, "ticket rejected");
                (
                    StatusCode::BAD_REQUEST,
                    Json(api::ValidationErrors {
                        errors: errors
                            .iter()
                            .map(ToString::to_string)
                            .collect(),
                    }),
                )
                    .into_response()
            }
            Self::DbError(e) => storage_failure(&e),
        }
    }
}

fn storage_failure(e: &db::Error) -> Response {
    error!("ticket storage failed: {e}");
    error_response(StatusCode::INTERNAL_SERVER_ERROR, "Server error")
}
