//! Flight log submission domain model.
//!
//! `FlightLogSubmission` is the validated form of `FlightLogDto`: every required field is
//! present. Nothing beyond presence is checked; values reach the upstream exactly as the
//! dashboard sent them.

use axum::body::Bytes;
use serde::Serialize;

use crate::{model::flight_log::FlightLogDto, server::error::AppError};

/// Flight log entry forwarded to the upstream create endpoint.
///
/// Serializes to the upstream's field names (`from`/`to`). The screenshot is never part of
/// the upstream body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlightLogSubmission {
    pub callsign: String,
    pub aircraft: String,
    #[serde(rename = "from")]
    pub origin: String,
    #[serde(rename = "to")]
    pub destination: String,
    pub altitude: serde_json::Value,
    pub remarks: String,
    #[serde(skip)]
    pub attachment: Option<Attachment>,
}

/// Screenshot uploaded alongside a flight log.
#[derive(Debug, Clone, PartialEq)]
pub struct Attachment {
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub bytes: Bytes,
}

impl FlightLogSubmission {
    /// Converts the submitted DTO, checking only that required fields are present.
    ///
    /// Remarks default to an empty string. Altitude is forwarded exactly as given; only null
    /// and the empty string count as missing.
    ///
    /// # Arguments
    /// - `dto` - Fields as extracted from the request body
    /// - `attachment` - Screenshot part, if one was accepted
    ///
    /// # Returns
    /// - `Ok(FlightLogSubmission)` - All required fields present
    /// - `Err(AppError::InvalidSubmission)` - Message names the first missing field
    pub fn from_dto(dto: FlightLogDto, attachment: Option<Attachment>) -> Result<Self, AppError> {
        Ok(Self {
            callsign: require("callsign", dto.callsign)?,
            aircraft: require("aircraft", dto.aircraft)?,
            origin: require("origin", dto.origin)?,
            destination: require("destination", dto.destination)?,
            altitude: dto
                .altitude
                .filter(is_present)
                .ok_or_else(|| missing("altitude"))?,
            remarks: dto.remarks.unwrap_or_default(),
            attachment,
        })
    }

    /// Converts a DTO whose values all arrived as text (urlencoded or multipart bodies).
    ///
    /// Same as `from_dto`, except that an altitude written as a plain integer, e.g. `35000`,
    /// is sent upstream as a JSON number. Anything else, including `035000` or ` 35000`, stays
    /// the string the user typed.
    pub fn from_text_fields(
        mut dto: FlightLogDto,
        attachment: Option<Attachment>,
    ) -> Result<Self, AppError> {
        dto.altitude = dto.altitude.map(integer_from_text);
        Self::from_dto(dto, attachment)
    }
}

fn require(field: &str, value: Option<String>) -> Result<String, AppError> {
    value
        .filter(|value| !value.is_empty())
        .ok_or_else(|| missing(field))
}

fn missing(field: &str) -> AppError {
    AppError::InvalidSubmission(format!("{} required", field))
}

fn is_present(value: &serde_json::Value) -> bool {
    match value {
        serde_json::Value::Null => false,
        serde_json::Value::String(raw) => !raw.is_empty(),
        _ => true,
    }
}

fn integer_from_text(value: serde_json::Value) -> serde_json::Value {
    if let serde_json::Value::String(raw) = &value {
        match raw.parse::<i64>() {
            Ok(feet) if feet.to_string() == *raw => return serde_json::Value::from(feet),
            _ => {}
        }
    }

    value
}
