//! Home page: hero, headline counters, about text and event details.

pub mod actions;
pub mod logic;
pub mod render;
pub mod state;

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::Frame;

use crate::input::{ClickState, InputEvent};
use crate::pages::{Page, PageChoice, Response, SiteContext};

use actions::*;
use state::{Counter, HomeState};

pub struct HomePage {
    pub state: HomeState,
}

impl HomePage {
    pub fn new(ctx: &SiteContext) -> Self {
        let cfg = &ctx.config;
        let mut state = HomeState::new(&cfg.event_name, &cfg.tagline);
        state.about = cfg.about.clone();
        state.details = cfg
            .details
            .iter()
            .map(|d| (d.label.clone(), d.value.clone()))
            .collect();
        state.counters = vec![
            Counter {
                label: "Problem Statements",
                target: ctx.catalog.len() as u32,
            },
            Counter {
                label: "Tracks",
                target: ctx.catalog.categories().count() as u32,
            },
            Counter {
                label: "Hours",
                target: cfg.hours,
            },
        ];
        state.ticks_per_char = cfg.typewriter_ticks_per_char;
        state.counter_ticks = cfg.counter_ticks;
        state.hero_cycle_ticks = cfg.hero_cycle_ticks;
        Self { state }
    }
}

impl Page for HomePage {
    fn handle_input(&mut self, event: &InputEvent) -> Response {
        match event {
            InputEvent::Key('b') | InputEvent::Click(GO_PROBLEMS) => {
                Response::Navigate(PageChoice::Problems)
            }
            InputEvent::Key('r') | InputEvent::Click(GO_REGISTER) => {
                Response::Navigate(PageChoice::Register)
            }
            _ => Response::Ignored,
        }
    }

    fn tick(&mut self, delta_ticks: u32) {
        logic::tick(&mut self.state, delta_ticks);
    }

    fn render(&self, f: &mut Frame, area: Rect, click_state: &Rc<RefCell<ClickState>>) {
        render::render(&self.state, f, area, click_state);
    }

    fn help(&self) -> &'static str {
        "[B] Problems  [R] Register  [1-3] Pages"
    }
}
