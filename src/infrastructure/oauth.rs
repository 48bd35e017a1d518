//! Google OAuth: client secrets, the stored token, refresh and code exchange

use crate::error::{MeetingsError, Result};
use chrono::{DateTime, Duration, Utc};
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

pub const CALENDAR_READONLY_SCOPE: &str = "https://www.googleapis.com/auth/calendar.readonly";
pub const DEFAULT_AUTH_URI: &str = "https://accounts.google.com/o/oauth2/auth";
pub const DEFAULT_TOKEN_URI: &str = "https://oauth2.googleapis.com/token";

/// Redirect used by installed apps; the code shows up in the browser's address bar
pub const DEFAULT_REDIRECT_URI: &str = "http://localhost";

// Refresh tokens this close to expiry
const EXPIRY_MARGIN_SECS: i64 = 60;

fn default_token_uri() -> String {
    DEFAULT_TOKEN_URI.to_string()
}

fn default_auth_uri() -> String {
    DEFAULT_AUTH_URI.to_string()
}

/// OAuth client as downloaded from the Google Cloud console
#[derive(Debug, Clone, Deserialize)]
pub struct ClientSecrets {
    pub client_id: String,
    pub client_secret: String,
    #[serde(default = "default_auth_uri")]
    pub auth_uri: String,
    #[serde(default = "default_token_uri")]
    pub token_uri: String,
    #[serde(default)]
    pub redirect_uris: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct ClientSecretsFile {
    installed: Option<ClientSecrets>,
    web: Option<ClientSecrets>,
}

impl ClientSecrets {
    /// Load a credentials.json file with an `installed` or `web` section
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            MeetingsError::Authentication(format!(
                "Cannot read client secrets {}: {}",
                path.display(),
                e
            ))
        })?;
        Self::parse(&contents)
    }

    pub fn parse(contents: &str) -> Result<Self> {
        let file: ClientSecretsFile = serde_json::from_str(contents).map_err(|e| {
            MeetingsError::Authentication(format!("Invalid client secrets file: {}", e))
        })?;
        file.installed.or(file.web).ok_or_else(|| {
            MeetingsError::Authentication(
                "Client secrets file has neither an 'installed' nor a 'web' section".to_string(),
            )
        })
    }

    pub fn redirect_uri(&self) -> &str {
        self.redirect_uris
            .first()
            .map(String::as_str)
            .unwrap_or(DEFAULT_REDIRECT_URI)
    }

    /// Consent page URL requesting offline, read-only calendar access
    pub fn authorization_url(&self) -> String {
        format!(
            "{}?client_id={}&redirect_uri={}&response_type=code&scope={}&access_type=offline&prompt=consent",
            self.auth_uri,
            urlencoding::encode(&self.client_id),
            urlencoding::encode(self.redirect_uri()),
            urlencoding::encode(CALENDAR_READONLY_SCOPE)
        )
    }
}

/// Authorized-user token file, compatible with the JSON Google's client libraries write
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredToken {
    pub token: Option<String>,
    pub refresh_token: Option<String>,
    #[serde(default = "default_token_uri")]
    pub token_uri: String,
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
    #[serde(default)]
    pub scopes: Vec<String>,
    pub expiry: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    expires_in: Option<i64>,
    refresh_token: Option<String>,
    scope: Option<String>,
}

impl StoredToken {
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                MeetingsError::Authentication(format!(
                    "No token file at {}",
                    path.display()
                ))
            } else {
                MeetingsError::Io(e)
            }
        })?;
        serde_json::from_str(&contents).map_err(|e| {
            MeetingsError::Authentication(format!(
                "Invalid token file {}: {}",
                path.display(),
                e
            ))
        })
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    /// An access token is usable if present and not about to expire.
    /// A token without an expiry is trusted as-is.
    pub fn is_valid(&self, now: DateTime<Utc>) -> bool {
        match (&self.token, self.expiry) {
            (None, _) => false,
            (Some(_), None) => true,
            (Some(_), Some(expiry)) => expiry > now + Duration::seconds(EXPIRY_MARGIN_SECS),
        }
    }

    /// Trade the refresh token for a fresh access token
    pub fn refresh(&mut self, client: &Client) -> Result<()> {
        let refresh_token = self.refresh_token.clone().ok_or_else(|| {
            MeetingsError::Authentication(
                "Token expired and no refresh token is stored".to_string(),
            )
        })?;
        let client_id = self.client_id.clone().ok_or_else(|| {
            MeetingsError::Authentication("Token file is missing client_id".to_string())
        })?;
        let client_secret = self.client_secret.clone().unwrap_or_default();

        info!(token_uri = %self.token_uri, "refreshing access token");
        let params = [
            ("client_id", client_id.as_str()),
            ("client_secret", client_secret.as_str()),
            ("refresh_token", refresh_token.as_str()),
            ("grant_type", "refresh_token"),
        ];
        let response = post_token_request(client, &self.token_uri, &params)?;
        self.apply(response, Utc::now());
        Ok(())
    }

    /// Exchange an authorization code for the first token
    pub fn exchange_code(client: &Client, secrets: &ClientSecrets, code: &str) -> Result<Self> {
        let params = [
            ("client_id", secrets.client_id.as_str()),
            ("client_secret", secrets.client_secret.as_str()),
            ("code", code),
            ("redirect_uri", secrets.redirect_uri()),
            ("grant_type", "authorization_code"),
        ];
        let response = post_token_request(client, &secrets.token_uri, &params)?;
        if response.refresh_token.is_none() {
            return Err(MeetingsError::Authentication(
                "No refresh token in response".to_string(),
            ));
        }

        let mut token = StoredToken {
            token: None,
            refresh_token: None,
            token_uri: secrets.token_uri.clone(),
            client_id: Some(secrets.client_id.clone()),
            client_secret: Some(secrets.client_secret.clone()),
            scopes: vec![CALENDAR_READONLY_SCOPE.to_string()],
            expiry: None,
        };
        token.apply(response, Utc::now());
        Ok(token)
    }

    fn apply(&mut self, response: TokenResponse, now: DateTime<Utc>) {
        self.token = Some(response.access_token);
        self.expiry = response.expires_in.map(|secs| now + Duration::seconds(secs));
        if let Some(refresh_token) = response.refresh_token {
            self.refresh_token = Some(refresh_token);
        }
        if let Some(scope) = response.scope {
            self.scopes = scope.split_whitespace().map(str::to_string).collect();
        }
    }
}

fn post_token_request(
    client: &Client,
    token_uri: &str,
    params: &[(&str, &str)],
) -> Result<TokenResponse> {
    let response = client.post(token_uri).form(params).send()?;
    let status = response.status();
    if !status.is_success() {
        let body = response.text().unwrap_or_default();
        return Err(MeetingsError::Authentication(format!(
            "Token endpoint returned {}: {}",
            status, body
        )));
    }
    debug!(%status, "token endpoint responded");
    Ok(response.json()?)
}

/// Load the token file, refreshing and saving it when the access token has expired.
/// Returns a usable access token.
pub fn access_token(client: &Client, token_path: &Path) -> Result<String> {
    let mut token = StoredToken::load(token_path)?;

    if !token.is_valid(Utc::now()) {
        token.refresh(client)?;
        token.save(token_path)?;
    }

    token
        .token
        .ok_or_else(|| MeetingsError::Authentication("Token file has no access token".to_string()))
}
