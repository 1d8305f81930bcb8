mod app;
mod catalog;
mod config;
mod handoff;
mod input;
mod nav;
mod notice;
mod pages;
mod selector;
mod storage;
mod time;
mod widgets;

use std::{cell::RefCell, io, rc::Rc};

use ratzilla::event::{KeyCode, MouseButton, MouseEventKind};
use ratzilla::ratatui::Terminal;
use ratzilla::{DomBackend, WebRenderer};

use app::App;
use catalog::Catalog;
use config::SiteConfig;
use input::{pixel_to_cell, ClickState, InputEvent};
use pages::SiteContext;
use time::SiteClock;

/// Convert a pointer position to a grid cell using the grid container's
/// bounding rect.
fn dom_pixel_to_cell(mouse_x: u32, mouse_y: u32, cs: &ClickState) -> Option<(u16, u16)> {
    let window = web_sys::window()?;
    let document = window.document()?;

    // DomBackend creates a <div> as the grid container inside <body>.
    let grid = document.query_selector("body > div").ok()??;
    let rect = grid.get_bounding_client_rect();

    let col = pixel_to_cell(mouse_x as f64 - rect.left(), rect.width(), cs.terminal_cols)?;
    let row = pixel_to_cell(mouse_y as f64 - rect.top(), rect.height(), cs.terminal_rows)?;
    log::trace!("click: pixel=({mouse_x},{mouse_y}) cell=({col},{row})");
    Some((col, row))
}

fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or_else(js_sys::Date::now)
}

fn map_key(code: &KeyCode) -> Option<InputEvent> {
    Some(match code {
        KeyCode::Char(c) => InputEvent::Key(*c),
        KeyCode::Up => InputEvent::Up,
        KeyCode::Down => InputEvent::Down,
        KeyCode::Left => InputEvent::Left,
        KeyCode::Right => InputEvent::Right,
        KeyCode::Tab => InputEvent::Tab,
        KeyCode::Backspace => InputEvent::Backspace,
        KeyCode::Enter => InputEvent::Enter,
        KeyCode::Esc => InputEvent::Esc,
        _ => return None,
    })
}

fn main() -> io::Result<()> {
    console_error_panic_hook::set_once();
    // Install at the most verbose level, then narrow to the configured one.
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("logger: {e}").into());
    }

    let config = Rc::new(SiteConfig::load());
    log::set_max_level(config.log_level().to_level_filter());
    log::info!("{} starting", config.event_name);

    let ctx = SiteContext {
        catalog: Catalog::builtin(),
        storage: storage::default_storage(),
        config: Rc::clone(&config),
    };
    let app = Rc::new(RefCell::new(App::new(ctx)));
    let click_state = Rc::new(RefCell::new(ClickState::new()));
    let backend = DomBackend::new()?;
    let terminal = Terminal::new(backend)?;

    // Mouse/touch click handler
    terminal.on_mouse_event({
        let app = app.clone();
        let click_state = click_state.clone();
        move |mouse_event| {
            if mouse_event.event != MouseEventKind::Pressed
                || mouse_event.button != MouseButton::Left
            {
                return;
            }

            let action = {
                let cs = click_state.borrow();
                if cs.terminal_rows == 0 || cs.terminal_cols == 0 {
                    return;
                }
                dom_pixel_to_cell(mouse_event.x, mouse_event.y, &cs)
                    .and_then(|(col, row)| cs.hit_test(col, row))
            };

            if let Some(id) = action {
                app.borrow_mut().handle_input(InputEvent::Click(id));
            }
        }
    });

    // Keyboard handler
    terminal.on_key_event({
        let app = app.clone();
        move |key_event| {
            if let Some(event) = map_key(&key_event.code) {
                app.borrow_mut().handle_input(event);
            }
        }
    });

    let mut clock = SiteClock::new(config.ticks_per_sec);
    terminal.draw_web(move |f| {
        let ticks = clock.update(now_ms());
        let mut app = app.borrow_mut();
        app.tick(ticks);
        app.render(f, &click_state);
    });

    Ok(())
}
