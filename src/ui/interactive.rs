use std::{io::Stdout, panic, thread};

use crate::config::Config;
use crate::io::browser::Opener;
use crate::io::clipboard;
use crate::split::Split;
use crate::ui::tui_events::{self, Effects, Flow};
use crate::ui::{tui_render, tui_state};
use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

/// Terminal picker over the chunk URLs. Returns once the user quits.
pub fn pick_urls(
    split: &Split,
    config: &Config,
    opener: &dyn Opener,
) -> Result<()> {
    // Setup panic hook to restore terminal state on panic
    let default_hook = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        restore_terminal();
        default_hook(info);
    }));

    let mut state = tui_state::PickerState::new(split);

    enable_raw_mode()?;
    let mut terminal = setup_or_restore(enter_terminal, restore_terminal)?;

    let mut fx = Effects {
        opener,
        delay: config.open_delay,
        sleep: thread::sleep,
        copy: |url: &str| clipboard::copy_to_clipboard(url, false),
    };
    let result = (|| -> Result<()> {
        loop {
            terminal.draw(|f| tui_render::render(f, &mut state))?;

            let evt = event::read()?;
            let Some(msg) = tui_events::handle_event(&mut state, evt) else {
                continue;
            };
            if msg == tui_events::PickerMsg::OpenAll {
                // Staggered opening blocks, so show progress first
                state.status = format!("opening {} URLs...", state.rows.len());
                terminal.draw(|f| tui_render::render(f, &mut state))?;
            }
            if tui_events::apply(msg, &mut state, &mut fx)? == Flow::Quit {
                return Ok(());
            }
        }
    })();

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    result
}

fn enter_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(std::io::stdout());
    Ok(Terminal::new(backend)?)
}

fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(std::io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
}

/// Run `setup`; if it fails, run `restore` before handing back the error.
fn setup_or_restore<T>(
    setup: impl FnOnce() -> Result<T>,
    restore: impl FnOnce(),
) -> Result<T> {
    setup().inspect_err(|_| restore())
}
