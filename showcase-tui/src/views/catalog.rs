//! Catalog list view: filter bar, item list with the sentinel row, and the
//! detail panel for the selected item.

use crate::keys::InputMode;
use crate::state::{App, CatalogState};
use crate::theme::{indicator_color, kind_color};
use crate::widgets::{CardRow, FilterBar, FilterField, ItemCard};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};
use showcase_core::{
    format_date_dmy, CatalogSpec, Item, ListIndicator, PagedList, PLACEHOLDER_PATH,
};

pub const FILTER_BAR_HEIGHT: u16 = 3;

/// Card date in `DD/MM/YYYY`, or the catalog's "no date" label.
pub fn item_date(item: &Item, spec: &CatalogSpec) -> String {
    item.date(spec.date_field)
        .and_then(format_date_dmy)
        .unwrap_or_else(|| spec.date_field.missing_label().to_string())
}

/// Text of the sentinel row below the list.
pub fn indicator_text<I>(list: &PagedList<I>) -> String {
    let noun = list.spec().noun;
    match list.indicator() {
        ListIndicator::Loading if list.filters().page() <= 1 => format!("Loading {}...", noun),
        ListIndicator::Loading => format!("Loading more {}...", noun),
        ListIndicator::EndOfResults => format!("No more {} to load", noun),
        ListIndicator::Empty => format!("No {} available", noun),
        ListIndicator::None => String::new(),
    }
}

pub fn render(f: &mut Frame<'_>, app: &App, area: Rect) {
    let Some(state) = app.catalog.as_ref() else {
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(FILTER_BAR_HEIGHT), Constraint::Min(0)])
        .split(area);

    render_filters(f, app, state, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    render_list(f, app, state, body[0]);
    render_detail(f, app, state, body[1]);
}

fn render_filters(f: &mut Frame<'_>, app: &App, state: &CatalogState, area: Rect) {
    let spec = state.list.spec();
    let searching = app.input_mode == InputMode::Search;

    let mut fields = vec![FilterField {
        label: "Search".to_string(),
        value: if searching {
            format!("{}_", state.search_input)
        } else {
            state.search_input.clone()
        },
        placeholder: Some(spec.search_placeholder.to_string()),
        focused: searching,
    }];
    fields.extend(spec.selectors.iter().enumerate().map(|(index, selector)| FilterField {
        label: selector.category.to_string(),
        value: app.selected_label(selector),
        placeholder: None,
        focused: !searching && index == state.focus,
    }));

    let bar = FilterBar {
        title: spec.title,
        fields: &fields,
        focused_style: Style::default()
            .fg(app.theme.primary)
            .add_modifier(Modifier::BOLD),
        normal_style: Style::default().fg(app.theme.text),
        placeholder_style: Style::default().fg(app.theme.text_muted),
    };
    bar.render(f, area);
}

fn render_list(f: &mut Frame<'_>, app: &App, state: &CatalogState, area: Rect) {
    let spec = state.list.spec();
    let items = state.list.items();
    let height = app.viewport_height;
    let end = (state.offset + height).min(items.len());

    let mut rows: Vec<ListItem> = items
        .get(state.offset..end)
        .unwrap_or(&[])
        .iter()
        .map(|item| {
            let mut spans = vec![
                Span::styled(item.title.clone(), Style::default().fg(app.theme.text)),
                Span::raw("  "),
                Span::styled(item_date(item, spec), Style::default().fg(app.theme.text_dim)),
            ];
            if let Some(kind) = item.kind.as_deref() {
                spans.push(Span::raw("  "));
                spans.push(Span::styled(
                    format!("[{}]", kind),
                    Style::default().fg(kind_color(kind, &app.theme)),
                ));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    if items.len() >= state.offset && items.len() < state.offset + height {
        let indicator = state.list.indicator();
        rows.push(ListItem::new(Span::styled(
            indicator_text(&state.list),
            Style::default().fg(indicator_color(indicator, &app.theme)),
        )));
    }

    let mut list_state = ListState::default();
    list_state.select(
        state
            .selected
            .filter(|selected| *selected >= state.offset && *selected < end)
            .map(|selected| selected - state.offset),
    );

    let title = format!(
        "{} ({} of {})",
        spec.title,
        items.len(),
        state.list.total()
    );
    let list = List::new(rows)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.theme.border)),
        )
        .highlight_style(
            Style::default()
                .bg(app.theme.bg_highlight)
                .fg(app.theme.primary),
        );
    f.render_stateful_widget(list, area, &mut list_state);
}

fn render_detail(f: &mut Frame<'_>, app: &App, state: &CatalogState, area: Rect) {
    let Some(item) = state.selected_item() else {
        let hint = Paragraph::new("Select an item to see its details.")
            .style(Style::default().fg(app.theme.text_dim))
            .block(Block::default().title("Details").borders(Borders::ALL));
        f.render_widget(hint, area);
        return;
    };

    let spec = state.list.spec();
    let thumbnail = app.thumbnail_url(item);
    let mut rows = Vec::new();
    if let Some(id) = &item.id {
        rows.push(CardRow::new("ID", id.to_string()));
    }
    if let Some(kind) = &item.kind {
        rows.push(CardRow::new("Type", kind.clone()));
    }
    let date = item.date(spec.date_field).and_then(format_date_dmy);
    let undated = date.is_none();
    let date = date.unwrap_or_else(|| spec.date_field.missing_label().to_string());
    rows.push(CardRow::new("Date", date).muted(undated));
    let placeholder = thumbnail == PLACEHOLDER_PATH;
    rows.push(CardRow::new("Thumbnail", thumbnail).muted(placeholder));
    if let Some(file) = &item.file_public_url {
        rows.push(CardRow::new("File", file.clone()));
    }

    let card = ItemCard {
        heading: &item.title,
        rows,
        label_style: Style::default().fg(app.theme.secondary),
        value_style: Style::default().fg(app.theme.text),
        muted_style: Style::default().fg(app.theme.text_muted),
    };
    card.render(f, area);
}
