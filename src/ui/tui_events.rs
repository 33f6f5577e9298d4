use crate::io::browser::{Opener, open_staggered};
use crate::ui::tui_state::PickerState;
use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;

/// Actions the event loop must carry out on the picker's behalf
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerMsg {
    Quit,
    Open(usize),
    OpenAll,
    Copy(usize),
}

/// Apply navigation keys to `state`; return a message for anything with side effects.
pub fn handle_event(
    state: &mut PickerState,
    evt: Event,
) -> Option<PickerMsg> {
    let Event::Key(key) = evt else {
        return None;
    };
    if key.kind != KeyEventKind::Press {
        return None;
    }
    handle_key(state, key)
}

/// Key handling behind `handle_event`, usable without a terminal event.
pub fn handle_key(
    state: &mut PickerState,
    key: KeyEvent,
) -> Option<PickerMsg> {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(PickerMsg::Quit)
        }
        KeyCode::Char('q') | KeyCode::Esc => Some(PickerMsg::Quit),
        KeyCode::Up | KeyCode::Char('k') => {
            state.move_up();
            None
        }
        KeyCode::Down | KeyCode::Char('j') => {
            state.move_down();
            None
        }
        KeyCode::Home => {
            state.move_first();
            None
        }
        KeyCode::End => {
            state.move_last();
            None
        }
        KeyCode::Enter if !state.rows.is_empty() => Some(PickerMsg::Open(state.selected_idx)),
        KeyCode::Char('a') if !state.rows.is_empty() => Some(PickerMsg::OpenAll),
        KeyCode::Char('c') if !state.rows.is_empty() => Some(PickerMsg::Copy(state.selected_idx)),
        _ => None,
    }
}

/// Whether the event loop keeps running after a message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Side effects the picker delegates to the outside world.
pub struct Effects<'a, S, C> {
    pub opener: &'a dyn Opener,
    pub delay: Duration,
    pub sleep: S,
    pub copy: C,
}

/// Carry out `msg` against `state`, marking exactly the rows that opened.
pub fn apply<S, C>(
    msg: PickerMsg,
    state: &mut PickerState,
    fx: &mut Effects<'_, S, C>,
) -> Result<Flow>
where
    S: FnMut(Duration),
    C: FnMut(&str) -> Result<()>,
{
    match msg {
        PickerMsg::Quit => return Ok(Flow::Quit),
        PickerMsg::Open(idx) => {
            let Some(url) = state.url(idx).map(str::to_owned) else {
                return Ok(Flow::Continue);
            };
            match fx.opener.open(&url) {
                Ok(()) => {
                    state.mark_opened(idx);
                    state.status = format!("opened CSV {}", idx + 1);
                }
                Err(e) => state.status = format!("could not open CSV {}: {e:#}", idx + 1),
            }
        }
        PickerMsg::OpenAll => {
            let urls: Vec<String> = state.rows.iter().map(|r| r.url.clone()).collect();
            let refs: Vec<&str> = urls.iter().map(String::as_str).collect();
            let opened = open_staggered(fx.opener, &refs, fx.delay, &mut fx.sleep);
            for &idx in &opened {
                state.mark_opened(idx);
            }
            state.status = format!("opened {} of {} URLs", opened.len(), urls.len());
        }
        PickerMsg::Copy(idx) => {
            if let Some(url) = state.url(idx).map(str::to_owned) {
                (fx.copy)(&url)?;
                state.status = format!("copied CSV {}", idx + 1);
            }
        }
    }
    Ok(Flow::Continue)
}
