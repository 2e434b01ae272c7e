//! Item card shown beside the catalog list.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// One labelled row of the card. Muted rows carry fallback values such as
/// "No launch date" or the placeholder thumbnail.
pub struct CardRow {
    pub label: &'static str,
    pub value: String,
    pub muted: bool,
}

impl CardRow {
    pub fn new(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
            muted: false,
        }
    }

    pub fn muted(mut self, muted: bool) -> Self {
        self.muted = muted;
        self
    }
}

pub struct ItemCard<'a> {
    pub heading: &'a str,
    pub rows: Vec<CardRow>,
    pub label_style: Style,
    pub value_style: Style,
    pub muted_style: Style,
}

impl<'a> ItemCard<'a> {
    pub fn render(&self, f: &mut Frame<'_>, area: Rect) {
        let mut lines = vec![
            Line::from(Span::styled(
                self.heading.to_string(),
                self.value_style.add_modifier(Modifier::BOLD),
            )),
            Line::default(),
        ];
        lines.extend(self.rows.iter().map(|row| {
            let value_style = if row.muted {
                self.muted_style
            } else {
                self.value_style
            };
            Line::from(vec![
                Span::styled(format!("{:<10}", row.label), self.label_style),
                Span::styled(row.value.clone(), value_style),
            ])
        }));

        let card = Paragraph::new(lines)
            .block(Block::default().title("Details").borders(Borders::ALL))
            .wrap(Wrap { trim: false });
        f.render_widget(card, area);
    }
}
