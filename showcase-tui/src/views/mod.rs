//! View rendering dispatch.

pub mod catalog;
pub mod home;

use crate::keys::InputMode;
use crate::nav::View;
use crate::state::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

pub const HEADER_HEIGHT: u16 = 3;
pub const FOOTER_HEIGHT: u16 = 2;

/// Rows left for catalog items in a terminal `height` rows tall.
pub fn list_viewport_height(height: u16) -> usize {
    height.saturating_sub(HEADER_HEIGHT + FOOTER_HEIGHT + catalog::FILTER_BAR_HEIGHT + 2) as usize
}

pub fn render_view(f: &mut Frame<'_>, app: &App) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(FOOTER_HEIGHT),
        ])
        .split(f.size());

    render_header(f, app, layout[0]);

    match app.active_view {
        View::Home => home::render(f, app, layout[1]),
        _ => catalog::render(f, app, layout[1]),
    }

    render_footer(f, app, layout[2]);

    if app.show_help {
        render_help(f, app);
    }
}

fn render_header(f: &mut Frame<'_>, app: &App, area: Rect) {
    let tabs: Vec<Span> = View::all()
        .iter()
        .enumerate()
        .flat_map(|(index, view)| {
            let style = if *view == app.active_view {
                Style::default()
                    .fg(app.theme.primary)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(app.theme.text_dim)
            };
            [
                Span::styled(format!(" {} {} ", index + 1, view.title()), style),
                Span::raw("|"),
            ]
        })
        .collect();

    let header = Paragraph::new(Line::from(tabs)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(app.theme.border))
            .title(Span::styled("SHOWCASE", Style::default().fg(app.theme.primary))),
    );
    f.render_widget(header, area);
}

fn render_footer(f: &mut Frame<'_>, app: &App, area: Rect) {
    let help = match (app.input_mode, app.active_view) {
        (InputMode::Search, _) => "type to search • Backspace delete • Enter keep • Esc revert",
        (InputMode::Normal, View::Home) => "1-6 open catalog • Tab switch view • ? help • q quit",
        (InputMode::Normal, _) => {
            "j/k move • / search • f focus filter • h/l change filter • x clear • Ctrl-r reload • q quit"
        }
    };
    let footer = Paragraph::new(help)
        .block(Block::default().borders(Borders::TOP))
        .style(Style::default().fg(app.theme.text_dim));
    f.render_widget(footer, area);
}

fn render_help(f: &mut Frame<'_>, app: &App) {
    let area = centered(f.size(), 60, 14);
    let lines = vec![
        Line::from("Tab / Shift-Tab   next / previous view"),
        Line::from("1-6               jump to view"),
        Line::from("j / k, arrows     move selection"),
        Line::from("Space / PgDn      page down"),
        Line::from("/                 search"),
        Line::from("f / F             focus next / previous filter"),
        Line::from("h / l             previous / next filter option"),
        Line::from("x                 reset focused filter"),
        Line::from("Ctrl-r            reload catalog"),
        Line::from("q                 quit"),
    ];
    let popup = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title("Keybindings")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.theme.border_focus)),
        );
    f.render_widget(Clear, area);
    f.render_widget(popup, area);
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewport_height_accounts_for_chrome() {
        assert_eq!(list_viewport_height(40), 40 - 3 - 2 - 3 - 2);
        assert_eq!(list_viewport_height(5), 0);
    }

    #[test]
    fn test_centered_fits_inside_area() {
        let rect = centered(Rect::new(0, 0, 20, 10), 60, 14);
        assert_eq!(rect, Rect::new(0, 0, 20, 10));
        let rect = centered(Rect::new(0, 0, 100, 40), 60, 14);
        assert_eq!(rect, Rect::new(20, 13, 60, 14));
    }
}
