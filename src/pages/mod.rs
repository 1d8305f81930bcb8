//! Page trait and page construction.

pub mod home;
pub mod problems;
pub mod register;

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::Frame;

use crate::catalog::Catalog;
use crate::config::SiteConfig;
use crate::input::{ClickState, InputEvent};
use crate::storage::SharedStorage;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageChoice {
    Home,
    Problems,
    Register,
}

/// What a page did with an input event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Response {
    Ignored,
    Handled,
    Navigate(PageChoice),
}

/// Trait that every page implements.
pub trait Page {
    fn handle_input(&mut self, event: &InputEvent) -> Response;

    /// Advance timers by `delta_ticks`.
    fn tick(&mut self, delta_ticks: u32);

    fn render(&self, f: &mut Frame, area: Rect, click_state: &Rc<RefCell<ClickState>>);

    /// Rows scrolled past the top, fed to the nav bar.
    fn scroll_offset(&self) -> u16 {
        0
    }

    /// True while a text input has focus; printable keys then belong to
    /// the page, not to the site-wide shortcuts.
    fn wants_text(&self) -> bool {
        false
    }

    /// Key hints for the footer.
    fn help(&self) -> &'static str;
}

/// Everything a page may depend on. Cheap to clone.
#[derive(Clone)]
pub struct SiteContext {
    pub catalog: Catalog,
    pub storage: Rc<dyn SharedStorage>,
    pub config: Rc<SiteConfig>,
}

/// Build a page. Constructing a page is its "load": the register page
/// consumes a pending handoff here.
pub fn create_page(choice: PageChoice, ctx: &SiteContext) -> Box<dyn Page> {
    match choice {
        PageChoice::Home => Box::new(home::HomePage::new(ctx)),
        PageChoice::Problems => Box::new(problems::ProblemsPage::new(ctx)),
        PageChoice::Register => Box::new(register::RegisterPage::new(ctx)),
    }
}
