//! Person detail pane — right panel.

use pessoa_core::Person;
use ratatui::{
  Frame,
  layout::Rect,
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Borders, Paragraph},
};

use crate::app::{App, Screen};

/// Render the detail pane into `area`. `person` is the opened record or the
/// cursor preview; `None` when the list is empty.
pub fn draw(f: &mut Frame, area: Rect, app: &App, person: Option<&Person>) {
  let focused = app.screen == Screen::PersonDetail;

  let title = person
    .map(|p| format!(" {} ", p.nome))
    .unwrap_or_else(|| " Detalhe ".into());

  let block = Block::default()
    .title(title)
    .borders(Borders::ALL)
    .border_style(Style::default().fg(if focused {
      Color::Cyan
    } else {
      Color::DarkGray
    }));
  let inner = block.inner(area);
  f.render_widget(block, area);

  let Some(person) = person else {
    f.render_widget(
      Paragraph::new("Selecione uma pessoa e pressione Enter.")
        .style(Style::default().fg(Color::Gray)),
      inner,
    );
    return;
  };

  let row = |label: &str, value: String| {
    Line::from(vec![
      Span::styled(
        format!("{label:<18}"),
        Style::default()
          .fg(Color::Cyan)
          .add_modifier(Modifier::BOLD),
      ),
      Span::raw(value),
    ])
  };
  let opt = |value: &Option<String>| value.clone().unwrap_or_else(|| "—".into());

  let lines = vec![
    row("CPF", person.cpf.clone()),
    row("Nascimento", person.data_nascimento.clone()),
    row(
      "Sexo",
      person
        .sexo
        .map(|s| s.to_string())
        .unwrap_or_else(|| "—".into()),
    ),
    row("Email", opt(&person.email)),
    row("Naturalidade", opt(&person.naturalidade)),
    row("Nacionalidade", opt(&person.nacionalidade)),
    row("Endereço", opt(&person.endereco)),
    Line::from(""),
    Line::from(Span::styled(
      format!(
        "cadastro {}   atualização {}",
        blank_dash(&person.data_cadastro),
        blank_dash(&person.data_atualizacao)
      ),
      Style::default().fg(Color::Gray),
    )),
  ];

  f.render_widget(Paragraph::new(lines), inner);
}

fn blank_dash(s: &str) -> &str {
  if s.is_empty() { "—" } else { s }
}
