use crate::split::Split;

/// One row of the picker: a chunk URL and whether it was opened already
#[derive(Debug, Clone)]
pub struct Row {
    pub url: String,
    pub ids: usize,
    pub opened: bool,
}

/// Shared UI state for the chunk URL picker
pub struct PickerState {
    pub rows: Vec<Row>,
    pub total: usize,
    pub chunk_size: usize,
    pub selected_idx: usize,
    pub scroll_offset: usize,
    pub status: String,
}

impl PickerState {
    pub fn new(split: &Split) -> Self {
        let rows = split
            .chunks
            .iter()
            .map(|c| Row {
                url: c.url.clone(),
                ids: c.ids,
                opened: false,
            })
            .collect();
        PickerState {
            rows,
            total: split.total,
            chunk_size: split.chunk_size,
            selected_idx: 0,
            scroll_offset: 0,
            status: String::new(),
        }
    }

    pub fn move_up(&mut self) {
        self.selected_idx = self.selected_idx.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        if self.selected_idx + 1 < self.rows.len() {
            self.selected_idx += 1;
        }
    }

    pub fn move_first(&mut self) {
        self.selected_idx = 0;
    }

    pub fn move_last(&mut self) {
        self.selected_idx = self.rows.len().saturating_sub(1);
    }

    pub fn url(
        &self,
        idx: usize,
    ) -> Option<&str> {
        self.rows.get(idx).map(|r| r.url.as_str())
    }

    pub fn mark_opened(
        &mut self,
        idx: usize,
    ) {
        if let Some(row) = self.rows.get_mut(idx) {
            row.opened = true;
        }
    }

    pub fn opened_count(&self) -> usize {
        self.rows.iter().filter(|r| r.opened).count()
    }
}

/// Adjust scroll offset and compute visible range
pub fn adjust_scroll_and_slice(
    selected_idx: &mut usize,
    scroll_offset: &mut usize,
    max_lines: usize,
    data_len: usize,
) -> (usize, usize) {
    if *selected_idx < *scroll_offset {
        *scroll_offset = *selected_idx;
    } else if *selected_idx >= *scroll_offset + max_lines {
        *scroll_offset = selected_idx.saturating_sub(max_lines).saturating_add(1);
    }
    let end_idx = (*scroll_offset + max_lines).min(data_len);
    (*scroll_offset, end_idx)
}
