//! Flight log submission fixtures.

use serde_json::{json, Value};

/// Default callsign used by flight log fixtures.
pub const DEFAULT_CALLSIGN: &str = "DLH400";

/// Default aircraft type used by flight log fixtures.
pub const DEFAULT_AIRCRAFT: &str = "A320";

/// Default departure airport.
pub const DEFAULT_DEPARTURE: &str = "EDDF";

/// Default arrival airport.
pub const DEFAULT_ARRIVAL: &str = "EDDM";

/// Default cruise altitude in feet.
pub const DEFAULT_ALTITUDE: i64 = 35000;

/// Creates the JSON body of a flight log submission using `departure`/`arrival` field names.
///
/// # Default Values
/// - callsign: `"DLH400"`
/// - aircraft: `"A320"`
/// - departure: `"EDDF"`
/// - arrival: `"EDDM"`
/// - altitude: `35000`
/// - remarks: `""`
pub fn json() -> Value {
    json!({
        "callsign": DEFAULT_CALLSIGN,
        "aircraft": DEFAULT_AIRCRAFT,
        "departure": DEFAULT_DEPARTURE,
        "arrival": DEFAULT_ARRIVAL,
        "altitude": DEFAULT_ALTITUDE,
        "remarks": "",
    })
}

/// The body the proxy is expected to forward upstream for `json()`.
pub fn expected_upstream_body() -> Value {
    json!({
        "callsign": DEFAULT_CALLSIGN,
        "aircraft": DEFAULT_AIRCRAFT,
        "from": DEFAULT_DEPARTURE,
        "to": DEFAULT_ARRIVAL,
        "altitude": DEFAULT_ALTITUDE,
        "remarks": "",
    })
}

/// Builds a `multipart/form-data` body for a flight log submission.
///
/// Text fields use the `from`/`to` names of the dashboard form. When `screenshot` is given it
/// is attached as a `screenshot` file part named `screenshot.png`.
///
/// # Arguments
/// - `boundary` - Multipart boundary, without leading dashes
/// - `screenshot` - Optional file bytes
///
/// # Returns
/// - `Vec<u8>` - Encoded body, ready to send with
///   `Content-Type: multipart/form-data; boundary=<boundary>`
pub fn multipart(boundary: &str, screenshot: Option<&[u8]>) -> Vec<u8> {
    let altitude = DEFAULT_ALTITUDE.to_string();
    let fields = [
        ("callsign", DEFAULT_CALLSIGN),
        ("aircraft", DEFAULT_AIRCRAFT),
        ("from", DEFAULT_DEPARTURE),
        ("to", DEFAULT_ARRIVAL),
        ("altitude", altitude.as_str()),
        ("remarks", "smooth ride"),
    ];

    let mut body = Vec::new();
    for (name, value) in fields {
        body.extend_from_slice(
            format!(
                "--{boundary}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
    }

    if let Some(bytes) = screenshot {
        body.extend_from_slice(
            format!(
                "--{boundary}\r\nContent-Disposition: form-data; name=\"screenshot\"; filename=\"screenshot.png\"\r\nContent-Type: image/png\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(bytes);
        body.extend_from_slice(b"\r\n");
    }

    body.extend_from_slice(format!("--{boundary}--\r\n").as_bytes());
    body
}
