use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use serde_json::json;
use test_utils::{builder::TestBuilder, fixture, upstream::MockResponse};

use crate::server::test_support::{self, body_bytes, body_json, location, TestApp};
