//! Helpers shared by the screen renderers.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::theme::{COLOR_DIM, COLOR_FOCUS, COLOR_INPUT};
use crate::state::FormField;
use crate::view::{UiAction, ViewDocument};

/// Marker drawn in front of the focused control.
pub const FOCUS_MARKER: &str = "▸ ";
pub const BLANK_MARKER: &str = "  ";

/// Lines for the body of a screen, plus where the focused control landed
/// so the body can scroll to keep it visible.
#[derive(Debug, Default)]
pub struct Body {
    pub lines: Vec<Line<'static>>,
    pub focus_line: Option<usize>,
}

impl Body {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, line: Line<'static>) {
        self.lines.push(line);
    }

    pub fn blank(&mut self) {
        self.lines.push(Line::default());
    }

    /// Push a line holding a control, recording it if it has focus.
    pub fn push_control(&mut self, line: Line<'static>, focused: bool) {
        if focused {
            self.focus_line = Some(self.lines.len());
        }
        self.lines.push(line);
    }

    /// First line to draw so the focused line fits in `height` rows.
    pub fn scroll_for(&self, height: u16) -> u16 {
        let height = height as usize;
        match self.focus_line {
            Some(line) if height > 0 && line >= height => (line + 1 - height) as u16,
            _ => 0,
        }
    }
}

/// Shorthand for the document's focus test.
pub fn focused(document: &ViewDocument, action: &UiAction) -> bool {
    document.is_focused(action)
}

/// Whether the `n`th control matching `predicate` has focus.
///
/// Links can repeat a URL, so they are matched by position instead.
pub fn nth_focused(document: &ViewDocument, predicate: impl Fn(&UiAction) -> bool, n: usize) -> bool {
    document
        .controls
        .iter()
        .enumerate()
        .filter(|(_, c)| predicate(&c.action))
        .nth(n)
        .map(|(i, _)| document.focus == Some(i))
        .unwrap_or(false)
}

/// Style of a button-like control.
pub fn control_style(focused: bool) -> Style {
    if focused {
        Style::default()
            .fg(COLOR_FOCUS)
            .add_modifier(Modifier::BOLD | Modifier::REVERSED)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    }
}

/// A button: `[ label ]`.
pub fn button(label: &str, focused: bool) -> Line<'static> {
    Line::from(vec![
        marker(focused),
        Span::styled(format!("[ {} ]", label), control_style(focused)),
    ])
}

pub fn marker(focused: bool) -> Span<'static> {
    if focused {
        Span::styled(FOCUS_MARKER, Style::default().fg(COLOR_FOCUS))
    } else {
        Span::raw(BLANK_MARKER)
    }
}

/// A text input showing its value, or its placeholder while empty.
///
/// Secret fields are masked. The focused input shows a trailing cursor.
pub fn input_line(field: FormField, value: &str, focused: bool) -> Line<'static> {
    let shown = if field.is_secret() {
        mask(value)
    } else {
        value.to_string()
    };

    let mut spans = vec![marker(focused)];
    if shown.is_empty() {
        spans.push(Span::styled(
            field.placeholder().to_string(),
            Style::default().fg(COLOR_DIM).add_modifier(Modifier::ITALIC),
        ));
    } else {
        spans.push(Span::styled(shown, Style::default().fg(COLOR_INPUT)));
    }
    if focused {
        spans.push(Span::styled("▏", Style::default().fg(COLOR_FOCUS)));
    }
    Line::from(spans)
}

/// One bullet per character.
pub fn mask(value: &str) -> String {
    "•".repeat(value.chars().count())
}

/// Truncate to at most `max_width` terminal columns, ending with `...`
/// when cut.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    let target = max_width.saturating_sub(3);
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > target {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push_str("...");
    out
}

/// A rect of at most `width` x `height`, centered in `area`.
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
