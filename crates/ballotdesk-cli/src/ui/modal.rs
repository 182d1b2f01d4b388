//! Modal overlays — entity forms and the delete confirmation.

use ratatui::{
  Frame,
  layout::Rect,
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Borders, Clear, Paragraph},
};

use crate::{
  app::PendingDelete,
  forms::{EntityForm, FieldKind},
};

pub fn draw_form(f: &mut Frame, form: &EntityForm) {
  let height = form.fields.len() as u16 * 2 + 5;
  let area = centered_rect(60, height, f.area());

  f.render_widget(Clear, area);
  let block = Block::default()
    .title(format!(" {} ", form.title()))
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::Cyan));
  let inner = block.inner(area);
  f.render_widget(block, area);

  let mut lines: Vec<Line> = Vec::new();
  for (i, field) in form.fields.iter().enumerate() {
    let focused = i == form.focus;

    let label = Span::styled(
      format!("{:<18}", field.label),
      Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD),
    );

    let value = match &field.kind {
      FieldKind::Text(text) => {
        if focused {
          Span::styled(format!("{text}_"), Style::default().fg(Color::White))
        } else {
          Span::raw(text.clone())
        }
      }
      FieldKind::Select { options, chosen } => {
        match chosen.and_then(|c| options.get(c)) {
          Some(option) => {
            if focused {
              Span::styled(
                format!("◂ {} ▸", option.label),
                Style::default().fg(Color::White),
              )
            } else {
              Span::raw(option.label.clone())
            }
          }
          None => Span::styled(
            format!("-- Select {} --", field.label),
            Style::default().fg(Color::DarkGray),
          ),
        }
      }
    };

    lines.push(Line::from(vec![label, value]));
    lines.push(Line::from(""));
  }

  if let Some(error) = &form.error {
    lines.push(Line::from(Span::styled(
      error.clone(),
      Style::default().fg(Color::Red),
    )));
  }

  f.render_widget(Paragraph::new(lines), inner);
}

pub fn draw_confirm(f: &mut Frame, pending: &PendingDelete) {
  let area = centered_rect(50, 5, f.area());

  f.render_widget(Clear, area);
  let block = Block::default()
    .title(" Confirm Delete ")
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::Red));
  let inner = block.inner(area);
  f.render_widget(block, area);

  let lines = vec![
    Line::from(format!(
      "Are you sure you want to delete this {}?",
      pending.entity.noun()
    )),
    Line::from(""),
    Line::from(vec![
      Span::styled("[y]", Style::default().fg(Color::Red)),
      Span::raw(" delete    "),
      Span::styled("[n]", Style::default().fg(Color::Green)),
      Span::raw(" cancel"),
    ]),
  ];

  f.render_widget(Paragraph::new(lines), inner);
}

fn centered_rect(percent_x: u16, height: u16, r: Rect) -> Rect {
  let width = (r.width * percent_x / 100).max(20).min(r.width);
  let height = height.min(r.height);
  Rect {
    x: r.x + (r.width - width) / 2,
    y: r.y + (r.height - height) / 2,
    width,
    height,
  }
}
