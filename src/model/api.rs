use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
pub struct ErrorDto {
    pub error: String,
}

/// Envelope returned by the flight log submission route.
#[derive(Serialize, Deserialize)]
pub struct FlightLogResponseDto {
    pub success: bool,
    pub message: String,
}
