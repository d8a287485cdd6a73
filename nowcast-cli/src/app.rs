//! Interactive session state and rendering.
//!
//! The session owns the single "result slot": whatever the most recent
//! fetch produced, success or failure. The startup location fetch and
//! prompt submissions both write it with no coordination beyond the
//! mutex, so whichever finishes last wins.

use std::sync::Arc;

use inquire::{InquireError, Text};
use parking_lot::Mutex;
use tracing::error;

use nowcast_core::{LocationSource, QueryTarget, WeatherApiClient, WeatherReport};

/// The single current outcome shown to the user. A new fetch replaces it
/// unconditionally, so at most one of the error banner and the result
/// panel is ever visible.
#[derive(Debug, Clone, Default)]
pub enum ResultSlot {
    #[default]
    Empty,
    Report(WeatherReport),
    Error(String),
}

#[derive(Debug, Clone)]
pub struct Session {
    client: WeatherApiClient,
    slot: Arc<Mutex<ResultSlot>>,
}

impl Session {
    pub fn new(client: WeatherApiClient) -> Self {
        Self { client, slot: Arc::new(Mutex::new(ResultSlot::Empty)) }
    }

    /// Run the interactive session: fire the one-time location fetch in
    /// the background and prompt for city names until the user cancels
    /// with Esc or Ctrl-C.
    pub async fn run(self, source: impl LocationSource + 'static) -> anyhow::Result<()> {
        let background = self.clone();
        tokio::spawn(async move {
            background.locate(&source).await;
            background.render();
        });

        let mut last_entry = String::new();
        loop {
            let entry = Text::new("City:").with_initial_value(&last_entry).prompt();

            match entry {
                Ok(input) => {
                    last_entry = input.clone();
                    self.submit(&input).await;
                    self.render();
                }
                Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => {
                    return Ok(());
                }
                Err(err) => return Err(err.into()),
            }
        }
    }

    /// Fetch by the location source's coordinates. Called at most once
    /// per session, at startup.
    pub async fn locate(&self, source: &dyn LocationSource) {
        match source.current_position().await {
            Ok((latitude, longitude)) => {
                self.fetch(QueryTarget::Coordinates { latitude, longitude }).await;
            }
            Err(err) => {
                error!("Error getting location: {err}");
                self.set_error("Error fetching location".to_string());
            }
        }
    }

    /// Handle one form submission: validate the input, then fetch.
    /// Empty input never reaches the network.
    pub async fn submit(&self, input: &str) {
        match QueryTarget::from_city_input(input) {
            Ok(target) => self.fetch(target).await,
            Err(err) => self.set_error(err.to_string()),
        }
    }

    async fn fetch(&self, target: QueryTarget) {
        match self.client.current(&target).await {
            Ok(report) => *self.slot.lock() = ResultSlot::Report(report),
            Err(err) => self.set_error(err.to_string()),
        }
    }

    fn set_error(&self, message: String) {
        error!("{message}");
        *self.slot.lock() = ResultSlot::Error(message);
    }

    pub fn snapshot(&self) -> ResultSlot {
        self.slot.lock().clone()
    }

    /// Print the current slot: the error banner, the weather panel, or
    /// nothing at all.
    pub fn render(&self) {
        match self.snapshot() {
            ResultSlot::Empty => {}
            ResultSlot::Error(message) => println!("{message}"),
            ResultSlot::Report(report) => {
                println!("{}, {}", report.location_name, report.country);
                println!("{}", report.condition);
                println!("{}", display_icon_url(&report.icon_url));
                println!("{}°C", report.temperature_c);
            }
        }
    }
}

/// The provider hands out protocol-relative icon references; complete
/// them so the printed URL is directly usable.
fn display_icon_url(icon_url: &str) -> String {
    if let Some(rest) = icon_url.strip_prefix("//") {
        format!("https://{rest}")
    } else {
        icon_url.to_string()
    }
}
