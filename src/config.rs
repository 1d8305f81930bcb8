//! Site configuration, embedded from `site.json` at build time.

use serde::Deserialize;
use thiserror::Error;

const EMBEDDED: &str = include_str!("../site.json");

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("site.json is malformed: {0}")]
    Parse(#[from] serde_json::Error),
}

/// One line of the event details block ("Date", "Venue", ...).
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Detail {
    pub label: String,
    pub value: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct SiteConfig {
    pub event_name: String,
    pub tagline: String,
    pub about: Vec<String>,
    pub details: Vec<Detail>,
    /// Duration of the event in hours, shown as a home page counter.
    pub hours: u32,

    /// Frame clock rate.
    pub ticks_per_sec: u32,
    /// Simulated registration round trip.
    pub submit_delay_ticks: u32,
    /// Lifetime of a notification.
    pub notice_ticks: u32,
    pub typewriter_ticks_per_char: u32,
    pub counter_ticks: u32,
    pub hero_cycle_ticks: u32,

    /// Scroll offset (rows) after which the nav bar is drawn elevated.
    pub nav_elevate_after: u16,
    /// Scroll offset (rows) after which scrolling down hides the nav bar.
    pub nav_hide_after: u16,

    /// `log` level name for the browser console.
    pub log_level: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            event_name: "Hackathon".into(),
            tagline: "Build. Break. Innovate.".into(),
            about: Vec::new(),
            details: Vec::new(),
            hours: 24,
            ticks_per_sec: 10,
            submit_delay_ticks: 20,
            notice_ticks: 50,
            typewriter_ticks_per_char: 1,
            counter_ticks: 20,
            hero_cycle_ticks: 100,
            nav_elevate_after: 3,
            nav_hide_after: 6,
            log_level: "info".into(),
        }
    }
}

impl SiteConfig {
    pub fn parse(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// The embedded configuration, or defaults if it fails to parse.
    pub fn load() -> Self {
        match Self::parse(EMBEDDED) {
            Ok(c) => c,
            Err(e) => {
                log::warn!("{e}; using defaults");
                Self::default()
            }
        }
    }

    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}
