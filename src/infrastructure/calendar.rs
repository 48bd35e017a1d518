//! Event sources: where the day's meetings come from

use crate::domain::EventRecord;
use crate::error::{MeetingsError, Result};
use crate::infrastructure::oauth;
use chrono::{DateTime, SecondsFormat, Utc};
use reqwest::blocking::Client;
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

/// Provider of calendar events for a time window
pub trait EventSource {
    /// List events starting inside `[day_start, day_end]`, ordered by start time
    fn list_events(
        &self,
        calendar_id: &str,
        day_start: DateTime<Utc>,
        day_end: DateTime<Utc>,
    ) -> Result<Vec<EventRecord>>;
}

#[derive(Debug, Deserialize)]
struct EventsPage {
    #[serde(default)]
    items: Vec<EventRecord>,
    #[serde(rename = "nextPageToken")]
    next_page_token: Option<String>,
}

/// Google Calendar v3 events API
#[derive(Debug, Clone)]
pub struct GoogleCalendar {
    client: Client,
    api_base_url: String,
    access_token: String,
}

impl GoogleCalendar {
    pub fn new(client: Client, api_base_url: &str, access_token: String) -> Self {
        GoogleCalendar {
            client,
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
            access_token,
        }
    }

    /// Load (and refresh if needed) the stored token, then build a client
    pub fn connect(api_base_url: &str, token_path: &Path) -> Result<Self> {
        let client = Client::new();
        let access_token = oauth::access_token(&client, token_path)?;
        Ok(Self::new(client, api_base_url, access_token))
    }

    fn events_url(&self, calendar_id: &str) -> String {
        format!(
            "{}/calendars/{}/events",
            self.api_base_url,
            urlencoding::encode(calendar_id)
        )
    }

    fn fetch_page(
        &self,
        url: &str,
        time_min: &str,
        time_max: &str,
        page_token: Option<&str>,
    ) -> Result<EventsPage> {
        let mut query = vec![
            ("timeMin", time_min),
            ("timeMax", time_max),
            ("singleEvents", "true"),
            ("orderBy", "startTime"),
        ];
        if let Some(token) = page_token {
            query.push(("pageToken", token));
        }

        let response = self
            .client
            .get(url)
            .bearer_auth(&self.access_token)
            .query(&query)
            .send()?;

        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN
        {
            return Err(MeetingsError::Authentication(format!(
                "Calendar API rejected the access token ({})",
                status
            )));
        }
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(MeetingsError::Calendar(format!(
                "Listing events failed with {}: {}",
                status, body
            )));
        }

        Ok(response.json()?)
    }
}

impl EventSource for GoogleCalendar {
    fn list_events(
        &self,
        calendar_id: &str,
        day_start: DateTime<Utc>,
        day_end: DateTime<Utc>,
    ) -> Result<Vec<EventRecord>> {
        let url = self.events_url(calendar_id);
        let time_min = day_start.to_rfc3339_opts(SecondsFormat::Micros, true);
        let time_max = day_end.to_rfc3339_opts(SecondsFormat::Micros, true);

        let mut events = Vec::new();
        let mut page_token: Option<String> = None;
        loop {
            let page = self.fetch_page(&url, &time_min, &time_max, page_token.as_deref())?;
            debug!(calendar_id, count = page.items.len(), "fetched events page");
            events.extend(page.items);

            match page.next_page_token {
                Some(token) if !token.is_empty() => page_token = Some(token),
                _ => break,
            }
        }

        Ok(events)
    }
}
