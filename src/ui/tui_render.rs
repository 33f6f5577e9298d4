use crate::ui::tui_state::{PickerState, adjust_scroll_and_slice};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

/// Renders the picker given the current state, updating scroll offsets.
pub fn render(
    frame: &mut Frame,
    state: &mut PickerState,
) {
    // Layout: summary bar (3 lines), list area, then help bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(3),
        ])
        .split(frame.area());

    let summary = format!(
        "{} ids -> {} URLs (up to {} each), {} opened",
        state.total,
        state.rows.len(),
        state.chunk_size,
        state.opened_count()
    );
    let header = Paragraph::new(state.status.as_str())
        .block(Block::default().borders(Borders::ALL).title(summary));
    frame.render_widget(header, chunks[0]);

    let area = chunks[1];
    let max_lines = area.height.saturating_sub(2) as usize;
    let (offset, end) = adjust_scroll_and_slice(
        &mut state.selected_idx,
        &mut state.scroll_offset,
        max_lines,
        state.rows.len(),
    );

    let items: Vec<ListItem> = state.rows[offset..end]
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let mark = if row.opened { "[x]" } else { "[ ]" };
            ListItem::new(Line::from(vec![
                Span::styled(mark, Style::default().fg(Color::Yellow)),
                Span::raw(format!(" CSV {} ({} ids) ", offset + i + 1, row.ids)),
                Span::styled(row.url.clone(), Style::default().fg(Color::Cyan)),
            ]))
        })
        .collect();

    let mut list_state = ListState::default();
    list_state.select(Some(state.selected_idx.saturating_sub(offset)));
    let widget = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Export URLs"))
        .highlight_style(Style::default().bg(Color::Blue));
    frame.render_stateful_widget(widget, area, &mut list_state);

    let help_text = vec![
        Span::styled("↑/↓: Navigate  ", Style::default().fg(Color::Yellow)),
        Span::styled("Enter: Open  ", Style::default().fg(Color::Yellow)),
        Span::styled("a: Open all  ", Style::default().fg(Color::Yellow)),
        Span::styled("c: Copy  ", Style::default().fg(Color::Yellow)),
        Span::styled("q: Quit", Style::default().fg(Color::Yellow)),
    ];
    let help_bar =
        Paragraph::new(Line::from(help_text)).block(Block::default().borders(Borders::ALL));
    frame.render_widget(help_bar, chunks[2]);
}
