//! TUI rendering — orchestrates all panes.

pub mod login;
pub mod person_detail;
pub mod person_form;
pub mod person_list;

use chrono::Local;
use ratatui::{
  Frame,
  layout::{Constraint, Direction, Layout, Rect},
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Borders, Clear, Paragraph},
};

use crate::app::{App, Screen};

// ─── Root draw ────────────────────────────────────────────────────────────────

/// Main draw function called each frame.
pub fn draw(f: &mut Frame, app: &App) {
  let area = f.area();

  if app.screen == Screen::Login {
    login::draw(f, area, app);
    return;
  }

  // Vertical stack: header, body, status bar.
  let rows = Layout::default()
    .direction(Direction::Vertical)
    .constraints([
      Constraint::Length(1), // header
      Constraint::Min(0),    // body
      Constraint::Length(1), // status bar
    ])
    .split(area);

  draw_header(f, rows[0]);
  draw_body(f, rows[1], app);
  draw_status(f, rows[2], app);

  // Modals render on top of the list/detail body.
  match app.screen {
    Screen::PersonForm => person_form::draw(f, rows[1], app),
    Screen::ConfirmDelete => draw_confirm_modal(f, rows[1], app),
    _ => {}
  }
}

// ─── Header ───────────────────────────────────────────────────────────────────

fn draw_header(f: &mut Frame, area: Rect) {
  let date = Local::now().format("%Y-%m-%d").to_string();

  let left = Span::styled(
    " pessoa  [/] buscar  [n] nova  [q] sair",
    Style::default()
      .fg(Color::White)
      .add_modifier(Modifier::BOLD),
  );
  let right = Span::styled(format!("{date} "), Style::default().fg(Color::Gray));

  let left_width = left.content.len() as u16;
  let right_width = right.content.len() as u16;
  let pad = area
    .width
    .saturating_sub(left_width)
    .saturating_sub(right_width);

  let line = Line::from(vec![left, Span::raw(" ".repeat(pad as usize)), right]);

  let block = Block::default().style(Style::default().bg(Color::DarkGray));
  let inner = block.inner(area);
  f.render_widget(block, area);
  f.render_widget(Paragraph::new(line), inner);
}

// ─── Body ─────────────────────────────────────────────────────────────────────

fn draw_body(f: &mut Frame, area: Rect, app: &App) {
  // Split into left list pane (40%) and right detail pane (60%).
  let cols = Layout::default()
    .direction(Direction::Horizontal)
    .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
    .split(area);

  person_list::draw(f, cols[0], app);

  // Right pane: the opened detail, else a preview of the cursor row.
  let preview;
  let person = match &app.detail {
    Some(p) => Some(p),
    None => {
      preview = app.cursor_person().cloned();
      preview.as_ref()
    }
  };
  person_detail::draw(f, cols[1], app, person);
}

// ─── Confirm-delete modal ─────────────────────────────────────────────────────

fn draw_confirm_modal(f: &mut Frame, area: Rect, app: &App) {
  let Some(person) = &app.deleting else {
    return;
  };

  let modal = centered_rect(area, 50, 7);
  f.render_widget(Clear, modal);

  let block = Block::default()
    .title(" Remover pessoa ")
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::Red));
  let inner = block.inner(modal);
  f.render_widget(block, modal);

  let lines = vec![
    Line::from(""),
    Line::from(Span::raw(format!(
      "Remover o registro de {}?",
      person.nome
    ))),
    Line::from(Span::styled(
      "Esta ação não pode ser desfeita.",
      Style::default().fg(Color::Gray),
    )),
    Line::from(""),
    Line::from(Span::styled(
      "[s] remover   [n]/Esc cancelar",
      Style::default().fg(Color::Yellow),
    )),
  ];
  f.render_widget(Paragraph::new(lines), inner);
}

/// A `width`% wide, `height`-row rect centered in `area`.
pub(crate) fn centered_rect(area: Rect, width_pct: u16, height: u16) -> Rect {
  let width = area.width * width_pct / 100;
  let x = area.x + (area.width.saturating_sub(width)) / 2;
  let y = area.y + (area.height.saturating_sub(height)) / 2;
  Rect {
    x,
    y,
    width,
    height: height.min(area.height),
  }
}

// ─── Status bar ───────────────────────────────────────────────────────────────

fn draw_status(f: &mut Frame, area: Rect, app: &App) {
  let (mode_label, hints) = match app.screen {
    Screen::Login => ("LOGIN", "Enter entrar  Tab alternar campo  Esc sair"),
    Screen::PersonList if app.search_active => {
      ("BUSCA", "Digite para buscar  Esc limpar  Enter aplicar")
    }
    Screen::PersonList if app.filter_active => (
      "FILTRO",
      "Tab próximo campo  Espaço alterna sexo  Esc fechar",
    ),
    Screen::PersonList => (
      "LISTA",
      "↑↓/jk navegar  / buscar  f filtrar  n nova  e editar  d remover  r atualizar  L sair da sessão  q sair",
    ),
    Screen::PersonDetail => (
      "DETALHE",
      "e editar  d remover  [ ] anterior/próximo  Esc voltar  q sair",
    ),
    Screen::PersonForm => (
      "FORMULÁRIO",
      "Tab próximo campo  Espaço alterna sexo  Enter salvar  Esc cancelar",
    ),
    Screen::ConfirmDelete => ("CONFIRMAR", "s remover  n cancelar"),
  };

  let status = if app.status_msg.is_empty() {
    hints.to_string()
  } else {
    app.status_msg.clone()
  };

  let mode_span = Span::styled(
    format!(" {mode_label} "),
    Style::default()
      .fg(Color::Black)
      .bg(Color::Cyan)
      .add_modifier(Modifier::BOLD),
  );
  let hint_span = Span::styled(format!("  {status}"), Style::default().fg(Color::Gray));

  let line = Line::from(vec![mode_span, hint_span]);
  f.render_widget(
    Paragraph::new(line).style(Style::default().bg(Color::Black)),
    area,
  );
}
