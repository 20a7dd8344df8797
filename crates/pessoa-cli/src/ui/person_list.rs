//! Person list pane — left panel.

use ratatui::{
  Frame,
  layout::Rect,
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use crate::app::App;

/// Render the person list into `area`.
pub fn draw(f: &mut Frame, area: Rect, app: &App) {
  let filtered = app.filtered_people();
  let total = app.page.as_ref().map(|p| p.total_items).unwrap_or(0);

  // Title with counts; the server total when filters hide nothing.
  let title = if filtered.len() == total {
    format!(" Pessoas ({total}) ")
  } else {
    format!(" Pessoas ({}/{total}) ", filtered.len())
  };

  let block = Block::default()
    .title(title)
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::DarkGray));

  let mut inner_area = block.inner(area);
  f.render_widget(block, area);

  // Search bar at the top of the inner area when active or non-empty.
  if app.search_active || !app.search.is_empty() {
    let search_area = Rect {
      height: 1,
      ..inner_area
    };
    inner_area.y += 1;
    inner_area.height = inner_area.height.saturating_sub(1);

    let text = if app.search_active {
      format!("/{}_", app.search)
    } else {
      format!("/{}", app.search)
    };
    f.render_widget(
      Paragraph::new(text).style(Style::default().fg(Color::Yellow)),
      search_area,
    );
  }

  // Filter bar below the search when active or carrying values.
  if app.filter_active || !app.filters.is_empty() {
    let filter_area = Rect {
      y: inner_area.y,
      height: 1,
      ..inner_area
    };
    inner_area.y += 1;
    inner_area.height = inner_area.height.saturating_sub(1);
    draw_filter_bar(f, filter_area, app);
  }

  let items: Vec<ListItem> = filtered
    .iter()
    .enumerate()
    .map(|(i, person)| {
      let is_cursor = i == app.list_cursor;
      let style = if is_cursor {
        Style::default()
          .bg(Color::Blue)
          .fg(Color::White)
          .add_modifier(Modifier::BOLD)
      } else {
        Style::default()
      };

      let nome = if person.nome.is_empty() {
        "—"
      } else {
        person.nome.as_str()
      };

      ListItem::new(Line::from(vec![
        Span::styled(format!("{nome:<24} "), style),
        Span::styled(person.cpf.clone(), style.fg(Color::Gray)),
      ]))
    })
    .collect();

  if items.is_empty() {
    let msg = if app.page.is_none() {
      "Carregando…"
    } else {
      "Nenhuma pessoa encontrada."
    };
    f.render_widget(
      Paragraph::new(msg).style(Style::default().fg(Color::Gray)),
      inner_area,
    );
    return;
  }

  let mut state = ListState::default();
  state.select(Some(app.list_cursor.min(items.len() - 1)));

  f.render_stateful_widget(
    List::new(items)
      .highlight_style(
        Style::default()
          .bg(Color::Blue)
          .fg(Color::White)
          .add_modifier(Modifier::BOLD),
      )
      .highlight_symbol(""),
    inner_area,
    &mut state,
  );
}

fn draw_filter_bar(f: &mut Frame, area: Rect, app: &App) {
  let focused = |i: usize| app.filter_active && app.filter_focus == i;
  let seg_style = |i: usize| {
    if focused(i) {
      Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
      Style::default().fg(Color::Gray)
    }
  };

  let sexo = app
    .filters
    .sexo
    .map(|s| s.to_string())
    .unwrap_or_else(|| "todos".into());

  let line = Line::from(vec![
    Span::styled(format!("sexo:{sexo}"), seg_style(0)),
    Span::raw("  "),
    Span::styled(
      format!("naturalidade:{}", app.filters.naturalidade),
      seg_style(1),
    ),
    Span::raw("  "),
    Span::styled(
      format!("nacionalidade:{}", app.filters.nacionalidade),
      seg_style(2),
    ),
  ]);
  f.render_widget(Paragraph::new(line), area);
}
