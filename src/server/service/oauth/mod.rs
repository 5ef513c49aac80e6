//! OAuth2 login with Discord

use crate::server::state::OAuth2Client;

pub mod exchange;
pub mod login;

pub struct DiscordAuthService<'a> {
    pub oauth_client: &'a OAuth2Client,
}

impl<'a> DiscordAuthService<'a> {
    pub fn new(oauth_client: &'a OAuth2Client) -> Self {
        Self { oauth_client }
    }
}
