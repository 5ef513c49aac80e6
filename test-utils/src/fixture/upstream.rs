//! Canned upstream response bodies.
//!
//! Bodies keep irregular whitespace on purpose so tests can tell a byte-for-byte relay from a
//! parse-and-reserialize round trip.

/// Body returned for a created flight log entry.
pub const CREATED_BODY: &str = r#"{"id":1}"#;

/// Body returned by the statistics endpoint.
pub const STATS_BODY: &str = r#"{"totalFlights": 42,  "hours":  118.5}"#;

/// Body returned by the recent flights endpoint.
pub const RECENT_FLIGHTS_BODY: &str =
    r#"[ {"callsign":"DLH400","from":"EDDF","to":"EDDM"} ,{"callsign":"BAW12","from":"EGLL","to":"KJFK"}]"#;

/// Body returned by the chart uploads endpoint.
pub const CHARTS_BODY: &str = r#"{"icao":"EDDF", "charts":[{"name":"ILS 25R"}]}"#;
