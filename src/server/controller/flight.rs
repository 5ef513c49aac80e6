use axum::{
    body::Bytes,
    extract::{FromRequest, Multipart, Query, Request, State},
    http::{header, StatusCode, Uri},
    response::IntoResponse,
    Form, Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::{api::FlightLogResponseDto, flight_log::FlightLogDto},
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::flight_log::{Attachment, FlightLogSubmission},
        service::{attachment::SCREENSHOT_FIELD, flight_log::FlightLogService},
        state::AppState,
    },
};

const FLIGHT_LOGGED_MESSAGE: &str = "Flight logged!";

#[derive(Deserialize)]
pub struct ChartsQuery {
    pub icao: Option<String>,
}

/// Flight log submission extracted from a JSON, urlencoded or multipart body.
///
/// Only presence of the required fields is checked. The `screenshot` part of a multipart
/// body is read only when attachments are enabled; otherwise it is skipped unbuffered.
pub struct FlightLogRequest(pub FlightLogSubmission);

impl FromRequest<AppState> for FlightLogRequest {
    type Rejection = AppError;

    async fn from_request(req: Request, state: &AppState) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_ascii_lowercase();

        let submission = if content_type.starts_with("multipart/form-data") {
            let multipart = Multipart::from_request(req, state)
                .await
                .map_err(|e| AppError::BadRequest(e.body_text()))?;
            let (dto, attachment) = read_multipart(multipart, state.attachments.enabled).await?;

            FlightLogSubmission::from_text_fields(dto, attachment)?
        } else if content_type.starts_with("application/x-www-form-urlencoded") {
            let Form(dto) = Form::<FlightLogDto>::from_request(req, state)
                .await
                .map_err(|e| AppError::BadRequest(e.body_text()))?;

            FlightLogSubmission::from_text_fields(dto, None)?
        } else {
            // JSON, or no body at all, which is reported as the first missing field.
            let body = Bytes::from_request(req, state)
                .await
                .map_err(|e| AppError::BadRequest(e.body_text()))?;

            FlightLogSubmission::from_dto(parse_json(&body)?, None)?
        };

        Ok(Self(submission))
    }
}

fn parse_json(body: &[u8]) -> Result<FlightLogDto, AppError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(FlightLogDto::default());
    }

    serde_json::from_slice(body)
        .map_err(|e| AppError::BadRequest(format!("Invalid JSON body: {}", e)))
}

async fn read_multipart(
    mut multipart: Multipart,
    accept_attachments: bool,
) -> Result<(FlightLogDto, Option<Attachment>), AppError> {
    let mut dto = FlightLogDto::default();
    let mut attachment = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.body_text()))?
    {
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };

        if name == SCREENSHOT_FIELD {
            if accept_attachments {
                let file_name = field.file_name().map(str::to_string);
                let content_type = field.content_type().map(str::to_string);
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(e.body_text()))?;

                attachment = Some(Attachment {
                    file_name,
                    content_type,
                    bytes,
                });
            }
            continue;
        }

        let slot = match name.as_str() {
            "callsign" => &mut dto.callsign,
            "aircraft" => &mut dto.aircraft,
            "origin" | "from" | "departure" => &mut dto.origin,
            "destination" | "to" | "arrival" => &mut dto.destination,
            "remarks" => &mut dto.remarks,
            "altitude" => {
                let value = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(e.body_text()))?;
                dto.altitude = Some(serde_json::Value::String(value));
                continue;
            }
            _ => continue,
        };

        *slot = Some(
            field
                .text()
                .await
                .map_err(|e| AppError::BadRequest(e.body_text()))?,
        );
    }

    Ok((dto, attachment))
}

/// POST /api/log - Log a flight
///
/// # Authentication
/// Requires user to be logged in; checked before the body is read
///
/// # Returns
/// - `200 OK`: `{success: true, message: "Flight logged!"}`
/// - `400 Bad Request`: `{success: false, message: "<field> required"}`
/// - `500 Internal Server Error`: `{success: false, message: "Failed to log flight"}`
pub async fn log_flight(
    State(state): State<AppState>,
    session: Session,
    request: Request,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&session).require().await?;

    let FlightLogRequest(submission) = FlightLogRequest::from_request(request, &state).await?;

    FlightLogService::new(&state.upstream, &state.attachments)
        .log(submission)
        .await?;

    Ok((
        StatusCode::OK,
        Json(FlightLogResponseDto {
            success: true,
            message: FLIGHT_LOGGED_MESSAGE.to_string(),
        }),
    ))
}

/// GET /api/stats - Relay upstream statistics
///
/// # Returns
/// - `200 OK`: Upstream body, byte for byte
/// - `500 Internal Server Error`: `{error: "Failed to fetch stats"}`
pub async fn get_stats(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&session).require().await?;

    Ok(state.upstream.statistics().await?)
}

/// GET /api/flights - Relay the most recent flights
///
/// # Returns
/// - `200 OK`: Upstream body, byte for byte
/// - `500 Internal Server Error`: `{error: "Failed to fetch flights"}`
pub async fn get_recent_flights(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&session).require().await?;

    Ok(state.upstream.recent_flights().await?)
}

/// GET /api/charts?icao= - Relay chart uploads for an airport
///
/// The query is parsed after the session check, so anonymous requests are always redirected.
///
/// # Returns
/// - `200 OK`: Upstream body, byte for byte
/// - `400 Bad Request`: `{error: "ICAO required"}`, without calling upstream
/// - `500 Internal Server Error`: `{error: "Failed to fetch charts"}`
pub async fn get_charts(
    State(state): State<AppState>,
    session: Session,
    uri: Uri,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&session).require().await?;

    let Query(query) = Query::<ChartsQuery>::try_from_uri(&uri)
        .map_err(|e| AppError::BadRequest(e.body_text()))?;

    let Some(icao) = query.icao.filter(|icao| !icao.trim().is_empty()) else {
        return Err(AppError::BadRequest("ICAO required".to_string()));
    };

    Ok(state.upstream.charts(&icao).await?)
}
