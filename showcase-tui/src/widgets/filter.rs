//! Filter bar widget: the search box followed by the selectors.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

#[derive(Debug, Clone)]
pub struct FilterField {
    pub label: String,
    pub value: String,
    /// Shown dimmed when `value` is empty.
    pub placeholder: Option<String>,
    pub focused: bool,
}

pub struct FilterBar<'a> {
    pub title: &'a str,
    pub fields: &'a [FilterField],
    pub focused_style: Style,
    pub normal_style: Style,
    pub placeholder_style: Style,
}

impl<'a> FilterBar<'a> {
    pub fn render(&self, f: &mut Frame<'_>, area: Rect) {
        let mut spans: Vec<Span> = Vec::new();
        for (index, field) in self.fields.iter().enumerate() {
            if index > 0 {
                spans.push(Span::raw(" | "));
            }
            let style = if field.focused {
                self.focused_style
            } else {
                self.normal_style
            };
            spans.push(Span::styled(format!("{}: ", field.label), style));
            match (&field.placeholder, field.value.is_empty()) {
                (Some(placeholder), true) => {
                    spans.push(Span::styled(placeholder.clone(), self.placeholder_style))
                }
                _ => spans.push(Span::styled(field.value.clone(), style)),
            }
        }

        let paragraph = Paragraph::new(Line::from(spans))
            .block(Block::default().title(self.title).borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }
}
