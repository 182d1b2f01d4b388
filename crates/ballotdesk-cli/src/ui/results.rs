//! Results tab — vote records beside the vote-distribution chart.
//!
//! The distribution is the console's one client-side aggregation:
//! per-candidate counts from the snapshot, in first-encounter order,
//! rebuilt from scratch every frame.

use ratatui::{
  Frame,
  layout::{Constraint, Direction, Layout, Rect},
  style::{Color, Style},
  text::Line,
  widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
};

use crate::app::App;

use super::tables;

pub fn draw(f: &mut Frame, area: Rect, app: &App) {
  let cols = Layout::default()
    .direction(Direction::Horizontal)
    .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
    .split(area);

  tables::draw_votes(f, cols[0], app);
  draw_distribution(f, cols[1], app);
}

fn draw_distribution(f: &mut Frame, area: Rect, app: &App) {
  let counts = app.snapshot.vote_counts();

  let block = Block::default()
    .title(" Vote Distribution by Candidate ")
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::DarkGray));

  if counts.is_empty() {
    let inner = block.inner(area);
    f.render_widget(block, area);
    f.render_widget(
      Paragraph::new("No votes cast.")
        .style(Style::default().fg(Color::DarkGray)),
      inner,
    );
    return;
  }

  let bars: Vec<Bar> = counts
    .iter()
    .map(|(name, count)| {
      Bar::default()
        .label(Line::from(name.clone()))
        .value(*count)
        .style(Style::default().fg(Color::Magenta))
    })
    .collect();

  let chart = BarChart::default()
    .block(block)
    .data(BarGroup::default().bars(&bars))
    .bar_width(10)
    .bar_gap(1)
    .value_style(Style::default().fg(Color::White).bg(Color::Magenta));
  f.render_widget(chart, area);
}
