//! Single-line label/value tile used on the home view.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub struct StatusTile<'a> {
    pub label: &'a str,
    pub value: String,
    pub label_style: Style,
    pub value_style: Style,
}

impl<'a> StatusTile<'a> {
    /// Label on the left, value pushed to the right edge. Values wider than
    /// the tile follow the label after one space.
    pub fn line(&self, width: u16) -> Line<'static> {
        let used = self.label.chars().count() + self.value.chars().count();
        let gap = (width as usize).saturating_sub(used).max(1);
        Line::from(vec![
            Span::styled(self.label.to_string(), self.label_style),
            Span::raw(" ".repeat(gap)),
            Span::styled(self.value.clone(), self.value_style),
        ])
    }

    pub fn render(&self, f: &mut Frame<'_>, area: Rect) {
        let inner_width = area.width.saturating_sub(2);
        let tile = Paragraph::new(self.line(inner_width)).block(Block::default().borders(Borders::ALL));
        f.render_widget(tile, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tile(value: &str) -> StatusTile<'static> {
        StatusTile {
            label: "Clients",
            value: value.to_string(),
            label_style: Style::default(),
            value_style: Style::default(),
        }
    }

    #[test]
    fn test_value_is_right_aligned() {
        let line = tile("3 loaded").line(20);
        assert_eq!(line.width(), 20);
        assert_eq!(line.spans[1].content.len(), 20 - 7 - 8);
    }

    #[test]
    fn test_narrow_tile_keeps_one_space() {
        let line = tile("http://localhost:5000/api").line(10);
        assert_eq!(line.spans[1].content, " ");
    }
}
