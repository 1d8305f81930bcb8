//! Register page: the team registration form.
//!
//! Constructing the page consumes a pending handoff from the problems page,
//! so a statement chosen there arrives pre-selected here.

pub mod actions;
pub mod logic;
pub mod render;
pub mod state;
pub mod validate;

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::Frame;

use crate::catalog::Catalog;
use crate::handoff;
use crate::input::{ClickState, InputEvent};
use crate::pages::{Page, Response, SiteContext};
use crate::selector::SelectorController;

use actions::*;
use state::{Focus, RegisterState};

pub struct RegisterPage {
    pub state: RegisterState,
    catalog: Catalog,
}

impl RegisterPage {
    pub fn new(ctx: &SiteContext) -> Self {
        let mut state = RegisterState::new(
            &ctx.catalog,
            ctx.config.submit_delay_ticks,
            ctx.config.notice_ticks,
        );
        let controller = SelectorController::new(&ctx.catalog);
        if handoff::apply_on_load(ctx.storage.as_ref(), &controller, &mut state.selector) {
            log::debug!("register: form opened with a handed-off statement");
        }
        Self {
            state,
            catalog: ctx.catalog,
        }
    }

    fn activate(&mut self) -> Response {
        match logic::focused(&self.state) {
            Some(Focus::Submit) => {
                logic::submit(&mut self.state);
            }
            Some(Focus::Text(_) | Focus::Member(_)) => logic::move_focus(&mut self.state, 1),
            Some(_) => {
                logic::cycle_select(&mut self.state, &self.catalog, true);
            }
            None => logic::move_focus(&mut self.state, 1),
        }
        Response::Handled
    }

    fn handle_click(&mut self, id: u16) -> Response {
        if id == NOTICE_CLOSE {
            self.state.notices.dismiss_latest();
            return Response::Handled;
        }
        let Some(index) = id.checked_sub(FIELD_BASE) else {
            return Response::Ignored;
        };
        let index = index as usize;
        if self.state.focus == Some(index) {
            return self.activate();
        }
        if !logic::set_focus(&mut self.state, index) {
            return Response::Ignored;
        }
        // A tap on the button submits right away.
        if logic::focused(&self.state) == Some(Focus::Submit) {
            logic::submit(&mut self.state);
        }
        Response::Handled
    }
}

impl Page for RegisterPage {
    fn handle_input(&mut self, event: &InputEvent) -> Response {
        match event {
            InputEvent::Click(id) => return self.handle_click(*id),
            InputEvent::Esc => {
                if !self.state.notices.dismiss_latest() {
                    if self.state.focus.is_none() {
                        return Response::Ignored;
                    }
                    self.state.focus = None;
                }
            }
            InputEvent::Tab | InputEvent::Down => logic::move_focus(&mut self.state, 1),
            InputEvent::Up => logic::move_focus(&mut self.state, -1),
            InputEvent::Enter => return self.activate(),
            InputEvent::Left => {
                if !logic::cycle_select(&mut self.state, &self.catalog, false) {
                    return Response::Ignored;
                }
            }
            InputEvent::Right => {
                if !logic::cycle_select(&mut self.state, &self.catalog, true) {
                    return Response::Ignored;
                }
            }
            InputEvent::Backspace => {
                if !logic::backspace(&mut self.state) {
                    return Response::Ignored;
                }
            }
            InputEvent::Key(c) => {
                if !logic::type_char(&mut self.state, *c) {
                    return Response::Ignored;
                }
            }
        }
        Response::Handled
    }

    fn tick(&mut self, delta_ticks: u32) {
        logic::tick(&mut self.state, &self.catalog, delta_ticks);
    }

    fn render(&self, f: &mut Frame, area: Rect, click_state: &Rc<RefCell<ClickState>>) {
        render::render(&self.state, f, area, click_state);
    }

    fn scroll_offset(&self) -> u16 {
        self.state.scroll.min(u16::MAX as usize) as u16
    }

    fn wants_text(&self) -> bool {
        logic::is_editing_text(&self.state)
    }

    fn help(&self) -> &'static str {
        match logic::focused(&self.state) {
            Some(Focus::Text(_) | Focus::Member(_)) => "Type to edit  [Tab/↑↓] Field  [Esc] Done",
            Some(Focus::Submit) => "[Enter] Register  [↑↓] Field  [Esc] Done",
            Some(_) => "[←→] Change  [Tab/↑↓] Field  [Esc] Done",
            None => "[Tab] Start  [1-3] Pages",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::handoff::{HandoffRecord, KEY_CATEGORY};
    use crate::storage::{MemoryStorage, SharedStorage};
    use super::state::TextField;

    fn ctx(storage: Rc<MemoryStorage>) -> SiteContext {
        SiteContext {
            catalog: Catalog::builtin(),
            storage,
            config: Rc::new(SiteConfig::default()),
        }
    }

    #[test]
    fn load_consumes_handoff() {
        let storage = Rc::new(MemoryStorage::new());
        handoff::publish(
            storage.as_ref(),
            &HandoffRecord {
                problem_id: "SW-014".into(),
                problem_name: "Student Grievance Redressal Portal".into(),
                category: "software".into(),
            },
        );
        let page = RegisterPage::new(&ctx(storage.clone()));
        assert_eq!(page.state.selector.category.value(), "software");
        assert_eq!(page.state.selector.problem_statement.value(), "SW-014");
        assert_eq!(page.state.selector.problem_id, "SW-014");
        assert_eq!(storage.len(), 0);
    }

    #[test]
    fn load_without_handoff_starts_blank() {
        let storage = Rc::new(MemoryStorage::new());
        storage.set_item(KEY_CATEGORY, "software").unwrap();
        let page = RegisterPage::new(&ctx(storage.clone()));
        assert_eq!(page.state.selector.category.value(), "");
        assert_eq!(page.state.selector.problem_id, "");
        assert_eq!(storage.len(), 1);
    }

    #[test]
    fn text_keys_only_captured_while_editing() {
        let mut page = RegisterPage::new(&ctx(Rc::new(MemoryStorage::new())));
        assert_eq!(page.handle_input(&InputEvent::Key('2')), Response::Ignored);
        page.handle_input(&InputEvent::Tab);
        assert!(page.wants_text());
        assert_eq!(page.handle_input(&InputEvent::Key('2')), Response::Handled);
        assert_eq!(page.state.text(TextField::TeamName), "2");
        page.handle_input(&InputEvent::Esc);
        assert!(!page.wants_text());
    }

    #[test]
    fn clicking_a_field_focuses_then_cycles() {
        let mut page = RegisterPage::new(&ctx(Rc::new(MemoryStorage::new())));
        // Year is the seventh focusable entry.
        page.handle_input(&InputEvent::Click(FIELD_BASE + 6));
        assert_eq!(logic::focused(&page.state), Some(Focus::Year));
        assert_eq!(page.state.year.value(), "");
        page.handle_input(&InputEvent::Click(FIELD_BASE + 6));
        assert_eq!(page.state.year.value(), "1");
    }

    #[test]
    fn tapping_submit_on_empty_form_raises_error_notice() {
        let mut page = RegisterPage::new(&ctx(Rc::new(MemoryStorage::new())));
        page.handle_input(&InputEvent::Click(FIELD_BASE + 10));
        assert_eq!(page.state.notices.len(), 1);
        page.handle_input(&InputEvent::Click(NOTICE_CLOSE));
        assert!(page.state.notices.is_empty());
    }

    #[test]
    fn esc_dismisses_notice_before_focus() {
        let mut page = RegisterPage::new(&ctx(Rc::new(MemoryStorage::new())));
        page.handle_input(&InputEvent::Up);
        page.handle_input(&InputEvent::Enter);
        assert_eq!(page.state.notices.len(), 1);
        page.handle_input(&InputEvent::Esc);
        assert!(page.state.notices.is_empty());
        assert!(page.state.focus.is_some());
        page.handle_input(&InputEvent::Esc);
        assert!(page.state.focus.is_none());
        assert_eq!(page.handle_input(&InputEvent::Esc), Response::Ignored);
    }
}
