//! Home page state: hero animations driven by the tick counter.

/// Hero background palettes, cycled in order.
pub const PALETTE_COUNT: usize = 4;

/// A headline number that counts up from zero when the page loads.
#[derive(Clone, Debug, PartialEq)]
pub struct Counter {
    pub label: &'static str,
    pub target: u32,
}

pub struct HomeState {
    pub elapsed_ticks: u64,
    pub title: String,
    pub tagline: String,
    pub about: Vec<String>,
    pub details: Vec<(String, String)>,
    pub counters: Vec<Counter>,

    pub ticks_per_char: u32,
    pub counter_ticks: u32,
    pub hero_cycle_ticks: u32,
}

impl HomeState {
    pub fn new(title: &str, tagline: &str) -> Self {
        Self {
            elapsed_ticks: 0,
            title: title.to_string(),
            tagline: tagline.to_string(),
            about: Vec::new(),
            details: Vec::new(),
            counters: Vec::new(),
            ticks_per_char: 1,
            counter_ticks: 20,
            hero_cycle_ticks: 100,
        }
    }
}
