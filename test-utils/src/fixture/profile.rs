//! Identity provider profile fixtures.

use serde_json::{json, Value};

/// Discord user id of the default profile.
pub const DEFAULT_USER_ID: &str = "80351110224678912";

/// Username of the default profile.
pub const DEFAULT_USERNAME: &str = "nelly";

/// Creates a Discord `/users/@me` profile as returned for the `identify` scope.
pub fn discord_user() -> Value {
    json!({
        "id": DEFAULT_USER_ID,
        "username": DEFAULT_USERNAME,
        "global_name": "Nelly",
        "avatar": "8342729096ea3675442027381ff50dfe",
        "discriminator": "0",
    })
}
