//! Authorize calendar access use case

use crate::error::{MeetingsError, Result};
use crate::infrastructure::{ClientSecrets, Config, MeetingsHome, StoredToken};
use reqwest::blocking::Client;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing::info;

/// Pull the authorization code out of what the user pasted: either the bare code
/// or the full redirect URL containing `code=...`.
pub fn extract_code(input: &str) -> Option<String> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    let query = match input.split_once('?') {
        Some((_, query)) => query,
        None if input.contains("code=") => input,
        None => return Some(input.to_string()),
    };

    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == "code")
        .and_then(|(_, value)| urlencoding::decode(value).ok())
        .map(|code| code.into_owned())
        .filter(|code| !code.is_empty())
}

/// Runs the installed-app OAuth flow and stores the resulting token
pub struct AuthorizeService {
    home: MeetingsHome,
    config: Config,
    client: Client,
}

impl AuthorizeService {
    pub fn new(home: MeetingsHome, config: Config, client: Client) -> Self {
        AuthorizeService {
            home,
            config,
            client,
        }
    }

    /// Print the consent URL, read the code from `input`, exchange it and save the token.
    /// Returns the token file path.
    pub fn execute<R: BufRead, W: Write>(&self, input: &mut R, output: &mut W) -> Result<PathBuf> {
        let secrets = ClientSecrets::load(&self.home.credentials_path(&self.config))?;

        writeln!(
            output,
            "Open the following URL in your browser and authorize access:\n\n{}\n",
            secrets.authorization_url()
        )?;
        write!(
            output,
            "Paste the authorization code (or the full redirect URL): "
        )?;
        output.flush()?;

        let mut line = String::new();
        input.read_line(&mut line)?;
        let code = extract_code(&line).ok_or_else(|| {
            MeetingsError::Authentication("No authorization code entered".to_string())
        })?;

        let token = StoredToken::exchange_code(&self.client, &secrets, &code)?;
        let token_path = self.home.token_path(&self.config);
        token.save(&token_path)?;
        info!(path = %token_path.display(), "saved calendar token");

        Ok(token_path)
    }
}
