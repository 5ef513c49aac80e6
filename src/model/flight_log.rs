use serde::Deserialize;

/// Flight log fields as submitted by the dashboard.
///
/// Every field is optional here so a missing field can be reported by name instead of as a
/// generic deserialization failure. Origin and destination accept the field names used by
/// each dashboard revision.
#[derive(Deserialize, Default, Clone, Debug)]
pub struct FlightLogDto {
    pub callsign: Option<String>,
    pub aircraft: Option<String>,
    #[serde(alias = "from", alias = "departure")]
    pub origin: Option<String>,
    #[serde(alias = "to", alias = "arrival")]
    pub destination: Option<String>,
    /// Feet. Kept as raw JSON so numbers and numeric strings both pass through untouched.
    pub altitude: Option<serde_json::Value>,
    pub remarks: Option<String>,
}
