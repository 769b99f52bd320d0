//! Suggestion dropdown rendering
//!
//! Draws the dropdown directly below the input field and reports where the
//! rows landed so mouse clicks can be mapped back to suggestions.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};
use unicode_width::UnicodeWidthStr;

use super::highlight::highlight_segments;
use super::suggest_state::SuggestState;
use crate::search::City;
use crate::widgets::popup;

// Dropdown display constants
pub const MAX_VISIBLE_SUGGESTIONS: usize = 10;
const MIN_POPUP_WIDTH: usize = 20;
const POPUP_BORDER: u16 = 2;
const POPUP_OFFSET_X: u16 = 1;
/// "► " or "  " in front of every row
const MARKER_WIDTH: usize = 2;
const COUNTRY_SPACING: usize = 2;
const NO_RESULTS_TEXT: &str = "No Results";

/// Where the dropdown was drawn
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PopupLayout {
    pub area: Rect,
    /// Index of the suggestion shown on the first row
    pub first_index: usize,
    /// Number of suggestion rows drawn
    pub rows: u16,
}

impl PopupLayout {
    /// Suggestion index under a screen position, if any
    pub fn item_at(&self, column: u16, row: u16) -> Option<usize> {
        let inner_left = self.area.x + 1;
        let inner_right = self.area.right().saturating_sub(1);
        let first_row = self.area.y + 1;

        if column < inner_left || column >= inner_right {
            return None;
        }
        if row < first_row || row >= first_row + self.rows {
            return None;
        }
        Some(self.first_index + (row - first_row) as usize)
    }
}

/// First visible index so the focused row stays on screen
pub fn scroll_offset(focus: Option<usize>, len: usize) -> usize {
    match focus {
        Some(i) if len > MAX_VISIBLE_SUGGESTIONS && i >= MAX_VISIBLE_SUGGESTIONS => {
            i + 1 - MAX_VISIBLE_SUGGESTIONS
        }
        _ => 0,
    }
}

fn row_width(city: &City) -> usize {
    let country = city
        .country
        .as_deref()
        .map(|c| COUNTRY_SPACING + c.width())
        .unwrap_or(0);
    MARKER_WIDTH + city.name.width() + country
}

/// Render the dropdown below the input field
///
/// Returns `None` when nothing was drawn.
pub fn render_popup(
    state: &SuggestState,
    frame: &mut Frame,
    input_area: Rect,
) -> Option<PopupLayout> {
    if !state.is_visible() {
        return None;
    }

    let items = state.items();
    let first_index = scroll_offset(state.focus(), items.len());
    let visible: Vec<(usize, &City)> = items
        .iter()
        .enumerate()
        .skip(first_index)
        .take(MAX_VISIBLE_SUGGESTIONS)
        .collect();

    let row_count = visible.len().max(1);
    let content_width = visible
        .iter()
        .map(|(_, city)| row_width(city))
        .max()
        .unwrap_or(MARKER_WIDTH + NO_RESULTS_TEXT.len())
        .max(MIN_POPUP_WIDTH);

    let popup_area = popup::popup_below_anchor(
        input_area,
        frame.area(),
        u16::try_from(content_width)
            .unwrap_or(u16::MAX)
            .saturating_add(POPUP_BORDER),
        row_count as u16 + POPUP_BORDER,
        POPUP_OFFSET_X,
    );
    if popup_area.height <= POPUP_BORDER || popup_area.width <= POPUP_BORDER {
        return None;
    }

    let list_items: Vec<ListItem> = if state.is_no_results() {
        vec![ListItem::new(Line::from(Span::styled(
            format!("  {}", NO_RESULTS_TEXT),
            Style::default()
                .fg(Color::DarkGray)
                .bg(Color::Black)
                .add_modifier(Modifier::ITALIC),
        )))]
    } else {
        visible
            .iter()
            .map(|(i, city)| {
                let focused = state.focus() == Some(*i);
                ListItem::new(suggestion_line(city, state.query(), focused, content_width))
            })
            .collect()
    };

    // Clear the background area to prevent transparency
    popup::clear_area(frame, popup_area);

    let list = List::new(list_items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .style(Style::default().bg(Color::Black)),
    );
    frame.render_widget(list, popup_area);

    let drawn_rows = (popup_area.height - POPUP_BORDER).min(visible.len() as u16);
    Some(PopupLayout {
        area: popup_area,
        first_index,
        rows: drawn_rows,
    })
}

/// One dropdown row with the matched part of the name in bold
fn suggestion_line(city: &City, query: &str, focused: bool, width: usize) -> Line<'static> {
    let (base, country_style, marker) = if focused {
        let base = Style::default().fg(Color::Black).bg(Color::Cyan);
        (base, base, "► ")
    } else {
        (
            Style::default().fg(Color::White).bg(Color::Black),
            Style::default().fg(Color::DarkGray).bg(Color::Black),
            "  ",
        )
    };

    let mut spans = vec![Span::styled(marker, base)];
    spans.extend(highlight_segments(&city.name, query).into_iter().map(|segment| {
        let style = if segment.matched {
            base.add_modifier(Modifier::BOLD)
        } else {
            base
        };
        Span::styled(segment.text.to_string(), style)
    }));

    if let Some(country) = &city.country {
        spans.push(Span::styled(
            format!("{}{}", " ".repeat(COUNTRY_SPACING), country),
            country_style,
        ));
    }

    // Pad so the focused background spans the whole row
    let padding = width.saturating_sub(row_width(city));
    if padding > 0 {
        spans.push(Span::styled(" ".repeat(padding), base));
    }

    Line::from(spans)
}

#[cfg(test)]
#[path = "suggest_render_tests.rs"]
mod suggest_render_tests;
