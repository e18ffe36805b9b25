use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::Line,
    widgets::{Block, Clear, List, ListState, StatefulWidget, Widget},
};

use crate::styles::{dropdown::ITEM_DEFAULT_STYLE, global::SELECTED_ITEM_STYLE};

#[derive(Default)]
pub struct DropDown<'a> {
    block: Block<'a>,
}

/// Items of a drop-down list. While the list is open the highlight moves
/// freely; only [`DropDownState::confirm`] changes the committed item.
pub struct DropDownState {
    items: Vec<String>,
    is_opened: bool,
    committed: usize,
    list_state: ListState,
}

impl<'a> DropDown<'a> {
    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = block;
        self
    }
}

impl StatefulWidget for DropDown<'_> {
    type State = DropDownState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        if state.is_opened {
            self.render_opened(area, buf, state);
        } else {
            self.render_closed(area, buf, state);
        }
    }
}

impl DropDown<'_> {
    /// The list grows downwards from `area` over whatever is below it, as far
    /// as the buffer allows.
    fn render_opened(self, area: Rect, buf: &mut Buffer, state: &mut DropDownState) {
        let room = buf.area().bottom().saturating_sub(area.y);
        let wanted = u16::try_from(state.items.len() + 2).unwrap_or(u16::MAX);
        let list_area = Rect {
            height: u16::min(wanted, room),
            ..area
        };
        let inner_list_area = self.block.inner(list_area);
        let list = List::new(state.items.iter().map(String::as_str))
            .style(ITEM_DEFAULT_STYLE)
            .highlight_style(SELECTED_ITEM_STYLE);
        Clear.render(list_area, buf);
        self.block.render(list_area, buf);
        StatefulWidget::render(list, inner_list_area, buf, &mut state.list_state);
    }

    fn render_closed(self, area: Rect, buf: &mut Buffer, state: &DropDownState) {
        let [text_area, symbol_area] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(2)])
                .areas(self.block.inner(area));
        self.block.render(area, buf);
        Line::from(state.selected().unwrap_or_default())
            .style(ITEM_DEFAULT_STYLE)
            .render(text_area, buf);
        Line::from("▼ ")
            .style(ITEM_DEFAULT_STYLE)
            .render(symbol_area, buf);
    }
}

impl DropDownState {
    pub fn new(items: Vec<String>) -> Self {
        DropDownState {
            items,
            is_opened: false,
            committed: 0,
            list_state: ListState::default(),
        }
    }

    /// The committed item.
    pub fn selected(&self) -> Option<&str> {
        self.items.get(self.committed).map(String::as_str)
    }

    pub fn selected_index(&self) -> usize {
        self.committed
    }

    pub fn highlighted_index(&self) -> Option<usize> {
        self.list_state.selected()
    }

    pub fn is_opened(&self) -> bool {
        self.is_opened
    }

    pub fn open(&mut self) {
        self.is_opened = true;
        self.list_state.select(Some(self.committed));
    }

    /// Closes the list without changing the committed item.
    pub fn close(&mut self) {
        self.is_opened = false;
    }

    /// Commits the highlighted item and closes the list.
    pub fn confirm(&mut self) {
        if let Some(idx) = self.list_state.selected() {
            self.committed = idx;
        }
        self.close();
    }

    pub fn down(&mut self) {
        let last = self.items.len().saturating_sub(1);
        let next = self.list_state.selected().map_or(0, |i| usize::min(i + 1, last));
        self.list_state.select(Some(next));
    }

    pub fn up(&mut self) {
        let prev = self.list_state.selected().map_or(0, |i| i.saturating_sub(1));
        self.list_state.select(Some(prev));
    }

    /// Commits `idx`, clamped to the last item.
    pub fn select(&mut self, idx: usize) {
        let idx = usize::min(idx, self.items.len().saturating_sub(1));
        self.committed = idx;
        self.list_state.select(Some(idx));
    }
}
