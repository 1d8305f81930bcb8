//! Top-level site state: the current page, the nav bar and the shortcuts
//! that work on every page.

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratzilla::ratatui::style::{Color, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{Block, Borders, Paragraph};
use ratzilla::ratatui::Frame;

use crate::input::{is_narrow_layout, ClickState, InputEvent};
use crate::nav::{self, NavState, NAV_MENU};
use crate::pages::{create_page, Page, PageChoice, Response, SiteContext};

pub struct App {
    ctx: SiteContext,
    pub current: PageChoice,
    page: Box<dyn Page>,
    pub nav: NavState,
}

impl App {
    pub fn new(ctx: SiteContext) -> Self {
        let nav = NavState::new(ctx.config.nav_elevate_after, ctx.config.nav_hide_after);
        let page = create_page(PageChoice::Home, &ctx);
        Self {
            ctx,
            current: PageChoice::Home,
            page,
            nav,
        }
    }

    /// Open `choice`. Following a link to the page already shown only
    /// closes the menu.
    pub fn navigate(&mut self, choice: PageChoice) {
        self.nav.close_menu();
        if choice == self.current {
            return;
        }
        log::info!("nav: {:?} -> {:?}", self.current, choice);
        self.page = create_page(choice, &self.ctx);
        self.current = choice;
        self.nav.reset_scroll();
    }

    pub fn handle_input(&mut self, event: InputEvent) {
        if let InputEvent::Click(id) = event {
            if id == NAV_MENU {
                self.nav.toggle_menu();
                return;
            }
            if let Some(choice) = nav::link_target(id) {
                self.navigate(choice);
                return;
            }
        }

        match self.page.handle_input(&event) {
            Response::Navigate(choice) => self.navigate(choice),
            Response::Handled => {}
            Response::Ignored => self.handle_shortcut(&event),
        }
        self.nav.on_scroll(self.page.scroll_offset());
    }

    fn handle_shortcut(&mut self, event: &InputEvent) {
        if self.page.wants_text() {
            return;
        }
        match event {
            InputEvent::Key('1') => self.navigate(PageChoice::Home),
            InputEvent::Key('2') => self.navigate(PageChoice::Problems),
            InputEvent::Key('3') => self.navigate(PageChoice::Register),
            InputEvent::Key('m') => self.nav.toggle_menu(),
            InputEvent::Esc => self.nav.close_menu(),
            _ => {}
        }
    }

    pub fn tick(&mut self, delta_ticks: u32) {
        if delta_ticks == 0 {
            return;
        }
        self.page.tick(delta_ticks);
        self.nav.on_scroll(self.page.scroll_offset());
    }

    pub fn render(&self, f: &mut Frame, click_state: &Rc<RefCell<ClickState>>) {
        let size = f.area();
        {
            let mut cs = click_state.borrow_mut();
            cs.terminal_cols = size.width;
            cs.terminal_rows = size.height;
            cs.clear_targets();
        }

        let narrow = is_narrow_layout(size.width);
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(self.nav.height()),
                Constraint::Min(5),
                Constraint::Length(3),
            ])
            .split(size);

        nav::render_bar(
            f,
            chunks[0],
            &self.nav,
            self.current,
            &self.ctx.config.event_name,
            narrow,
            &mut click_state.borrow_mut(),
        );

        self.page.render(f, chunks[1], click_state);

        // Drawn last so its targets win over the page underneath.
        if self.nav.menu_open {
            nav::render_menu(f, chunks[1], self.current, &mut click_state.borrow_mut());
        }

        let help = Paragraph::new(Line::from(Span::styled(
            self.page.help(),
            Style::default().fg(Color::DarkGray),
        )))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .alignment(Alignment::Center);
        f.render_widget(help, chunks[2]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::config::SiteConfig;
    use crate::nav::{NAV_PROBLEMS, NAV_REGISTER};
    use crate::pages::problems::actions::CARD_BASE;
    use crate::storage::{MemoryStorage, SharedStorage};
    use ratzilla::ratatui::backend::TestBackend;
    use ratzilla::ratatui::Terminal;

    fn app() -> (App, Rc<MemoryStorage>) {
        let storage = Rc::new(MemoryStorage::new());
        let ctx = SiteContext {
            catalog: Catalog::builtin(),
            storage: storage.clone(),
            config: Rc::new(SiteConfig::default()),
        };
        (App::new(ctx), storage)
    }

    #[test]
    fn number_keys_switch_pages() {
        let (mut app, _) = app();
        app.handle_input(InputEvent::Key('2'));
        assert_eq!(app.current, PageChoice::Problems);
        app.handle_input(InputEvent::Key('3'));
        assert_eq!(app.current, PageChoice::Register);
        app.handle_input(InputEvent::Key('1'));
        assert_eq!(app.current, PageChoice::Home);
    }

    #[test]
    fn nav_links_navigate_and_close_menu() {
        let (mut app, _) = app();
        app.handle_input(InputEvent::Click(NAV_MENU));
        assert!(app.nav.menu_open);
        app.handle_input(InputEvent::Click(NAV_REGISTER));
        assert_eq!(app.current, PageChoice::Register);
        assert!(!app.nav.menu_open);
    }

    #[test]
    fn browse_choose_register_consumes_handoff() {
        let (mut app, storage) = app();
        app.handle_input(InputEvent::Click(NAV_PROBLEMS));
        app.handle_input(InputEvent::Click(CARD_BASE + 8));
        // The register page was built right away and took the record.
        assert_eq!(app.current, PageChoice::Register);
        assert_eq!(storage.len(), 0);
    }

    #[test]
    fn typing_in_a_form_does_not_trigger_shortcuts() {
        let (mut app, _) = app();
        app.handle_input(InputEvent::Key('3'));
        app.handle_input(InputEvent::Tab);
        app.handle_input(InputEvent::Key('1'));
        app.handle_input(InputEvent::Key('m'));
        assert_eq!(app.current, PageChoice::Register);
        assert!(!app.nav.menu_open);
    }

    #[test]
    fn render_registers_targets_at_both_widths() {
        for width in [40u16, 100] {
            let (mut app, _) = app();
            app.handle_input(InputEvent::Key('2'));
            let click_state = Rc::new(RefCell::new(ClickState::new()));
            let mut terminal = Terminal::new(TestBackend::new(width, 30)).unwrap();
            terminal.draw(|f| app.render(f, &click_state)).unwrap();

            let cs = click_state.borrow();
            assert_eq!(cs.terminal_cols, width);
            assert!(cs.targets.iter().any(|t| t.action_id >= CARD_BASE));
        }
    }

    #[test]
    fn open_menu_wins_hit_test() {
        let (mut app, _) = app();
        app.handle_input(InputEvent::Key('m'));
        let click_state = Rc::new(RefCell::new(ClickState::new()));
        let mut terminal = Terminal::new(TestBackend::new(40, 30)).unwrap();
        terminal.draw(|f| app.render(f, &click_state)).unwrap();

        // First menu entry sits one row below the dropdown border.
        let cs = click_state.borrow();
        assert_eq!(cs.hit_test(2, 4), Some(crate::nav::NAV_HOME));
    }
}
