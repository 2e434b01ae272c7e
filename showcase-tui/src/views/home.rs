//! Home view: catalog index and reference-data status.

use crate::nav::View;
use crate::state::App;
use crate::widgets::StatusTile;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use showcase_core::{CatalogKind, ReferenceKind};

pub fn render(f: &mut Frame<'_>, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    let lines: Vec<Line> = CatalogKind::all()
        .iter()
        .map(|kind| {
            let view = View::from_catalog(*kind);
            let spec = app.config.catalog_spec(*kind);
            Line::from(vec![
                Span::styled(
                    format!(" {}  ", view.index() + 1),
                    Style::default().fg(app.theme.primary),
                ),
                Span::styled(spec.title, Style::default().fg(app.theme.text)),
                Span::styled(
                    format!("  {} per page", spec.limit),
                    Style::default().fg(app.theme.text_dim),
                ),
            ])
        })
        .collect();
    let index = Paragraph::new(lines).block(Block::default().title("Catalogs").borders(Borders::ALL));
    f.render_widget(index, chunks[0]);

    let mut constraints: Vec<Constraint> = ReferenceKind::all()
        .iter()
        .map(|_| Constraint::Length(3))
        .collect();
    constraints.push(Constraint::Length(3));
    constraints.push(Constraint::Min(0));
    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(chunks[1]);

    for (slot, kind) in ReferenceKind::all().iter().enumerate() {
        let (status, color) = if app.reference.is_loaded(*kind) {
            (
                format!("{} loaded", app.reference.entries(*kind).len()),
                app.theme.success,
            )
        } else {
            ("loading...".to_string(), app.theme.info)
        };
        StatusTile {
            label: reference_title(*kind),
            value: status,
            label_style: Style::default().fg(app.theme.text),
            value_style: Style::default().fg(color),
        }
        .render(f, right[slot]);
    }

    StatusTile {
        label: "API",
        value: app.config.api_base_url.clone(),
        label_style: Style::default().fg(app.theme.text),
        value_style: Style::default().fg(app.theme.text_dim),
    }
    .render(f, right[ReferenceKind::all().len()]);
}

fn reference_title(kind: ReferenceKind) -> &'static str {
    match kind {
        ReferenceKind::Clients => "Clients",
        ReferenceKind::Technologies => "Technologies",
    }
}
