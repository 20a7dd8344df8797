//! Login screen — full-screen credential prompt.

use ratatui::{
  Frame,
  layout::Rect,
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Borders, Paragraph},
};

use crate::app::App;
use crate::ui::centered_rect;

pub fn draw(f: &mut Frame, area: Rect, app: &App) {
  let modal = centered_rect(area, 40, 10);

  let block = Block::default()
    .title(" pessoa — login ")
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::Cyan));
  let inner = block.inner(modal);
  f.render_widget(block, modal);

  let field = |label: &str, value: String, focused: bool| {
    let marker = if focused { "▸ " } else { "  " };
    let style = if focused {
      Style::default().add_modifier(Modifier::BOLD)
    } else {
      Style::default()
    };
    let cursor = if focused { "_" } else { "" };
    Line::from(vec![
      Span::styled(format!("{marker}{label:<8}"), style),
      Span::raw(format!("{value}{cursor}")),
    ])
  };

  let masked = "•".repeat(app.login.password.chars().count());

  let mut lines = vec![
    Line::from(""),
    field("Usuário", app.login.username.clone(), app.login.focus == 0),
    field("Senha", masked, app.login.focus == 1),
    Line::from(""),
  ];

  if app.login.busy {
    lines.push(Line::from(Span::styled(
      "  Entrando…",
      Style::default().fg(Color::Gray),
    )));
  } else if let Some(error) = &app.login.error {
    lines.push(Line::from(Span::styled(
      format!("  {error}"),
      Style::default().fg(Color::Red),
    )));
  } else {
    lines.push(Line::from(Span::styled(
      "  Enter para entrar",
      Style::default().fg(Color::Gray),
    )));
  }

  f.render_widget(Paragraph::new(lines), inner);
}
