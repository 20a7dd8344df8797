//! Create/edit form — modal over the list.

use pessoa_core::Field;
use ratatui::{
  Frame,
  layout::Rect,
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Borders, Clear, Paragraph},
};

use crate::app::{App, FormState};
use crate::ui::centered_rect;

pub fn draw(f: &mut Frame, area: Rect, app: &App) {
  // One row per field plus room for inline errors and the footer.
  let height = (FormState::FIELDS.len() as u16 + 6).min(area.height);
  let modal = centered_rect(area, 70, height);
  f.render_widget(Clear, modal);

  let title = if app.form.editing_id.is_some() {
    " Editar Pessoa "
  } else {
    " Cadastrar Nova Pessoa "
  };
  let block = Block::default()
    .title(title)
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::Cyan));
  let inner = block.inner(modal);
  f.render_widget(block, modal);

  let mut lines: Vec<Line> = Vec::new();

  for (i, field) in FormState::FIELDS.iter().enumerate() {
    let focused = i == app.form.focus;
    let marker = if focused { "▸ " } else { "  " };
    let label_style = if focused {
      Style::default().add_modifier(Modifier::BOLD)
    } else {
      Style::default()
    };

    let required = matches!(
      field,
      Field::Nome | Field::Cpf | Field::DataNascimento | Field::Sexo
    );
    let label = if required {
      format!("{}*", field.label())
    } else {
      field.label().to_string()
    };

    let value = app.form.value(*field);
    let cursor = if focused && *field != Field::Sexo {
      "_"
    } else {
      ""
    };

    let mut spans = vec![
      Span::styled(format!("{marker}{label:<20}"), label_style),
      Span::raw(format!("{value}{cursor}")),
    ];

    // Inline error for this field, if validation failed.
    if let Some(errors) = &app.form.errors
      && let Some(msg) = errors.get(*field)
    {
      spans.push(Span::styled(
        format!("  {msg}"),
        Style::default().fg(Color::Red),
      ));
    }

    lines.push(Line::from(spans));
  }

  lines.push(Line::from(""));
  lines.push(Line::from(Span::styled(
    "  Campos com * são obrigatórios. Espaço alterna o sexo.",
    Style::default().fg(Color::Gray),
  )));
  lines.push(Line::from(Span::styled(
    "  Enter salvar   Esc cancelar",
    Style::default().fg(Color::Yellow),
  )));

  f.render_widget(Paragraph::new(lines), inner);
}
