//! Dashboard — entity totals and the candidates-by-party chart.
//!
//! Everything shown here comes precomputed from `GET /api/dashboard`;
//! the chart is rebuilt from the payload every frame, so nothing
//! survives a tab switch.

use ballotdesk_core::query::{ChartData, DashboardStats};
use ratatui::{
  Frame,
  layout::{Alignment, Constraint, Direction, Layout, Rect},
  style::{Color, Modifier, Style},
  text::Line,
  widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
};

use crate::app::App;

/// Bar series from the backend payload. Labels and values are zipped
/// positionally; negative counts never occur but clamp to zero anyway.
pub fn chart_series(data: &ChartData) -> Vec<(String, u64)> {
  data
    .labels
    .iter()
    .cloned()
    .zip(data.values.iter().map(|v| (*v).max(0) as u64))
    .collect()
}

pub fn draw(f: &mut Frame, area: Rect, app: &App) {
  let Some(stats) = &app.dashboard else {
    let block = Block::default()
      .title(" Dashboard ")
      .borders(Borders::ALL)
      .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    f.render_widget(block, area);
    f.render_widget(
      Paragraph::new("Dashboard not loaded.")
        .style(Style::default().fg(Color::DarkGray)),
      inner,
    );
    return;
  };

  let rows = Layout::default()
    .direction(Direction::Vertical)
    .constraints([Constraint::Length(5), Constraint::Min(0)])
    .split(area);

  draw_totals(f, rows[0], stats);
  draw_chart(f, rows[1], stats);
}

fn draw_totals(f: &mut Frame, area: Rect, stats: &DashboardStats) {
  let tiles = [
    ("Total Parties", stats.total_parties),
    ("Total Candidates", stats.total_candidates),
    ("Total Voters", stats.total_voters),
    ("Total Elections", stats.total_elections),
  ];

  let cols = Layout::default()
    .direction(Direction::Horizontal)
    .constraints([Constraint::Fill(1); 4])
    .split(area);

  for (i, (label, value)) in tiles.iter().enumerate() {
    let block = Block::default()
      .title(format!(" {label} "))
      .borders(Borders::ALL)
      .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(cols[i]);
    f.render_widget(block, cols[i]);
    f.render_widget(
      Paragraph::new(value.to_string())
        .alignment(Alignment::Center)
        .style(
          Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
        ),
      inner,
    );
  }
}

fn draw_chart(f: &mut Frame, area: Rect, stats: &DashboardStats) {
  let series = chart_series(&stats.chart_data);

  let block = Block::default()
    .title(" Candidates by Party ")
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::DarkGray));

  if series.is_empty() {
    let inner = block.inner(area);
    f.render_widget(block, area);
    f.render_widget(
      Paragraph::new("No party data.")
        .style(Style::default().fg(Color::DarkGray)),
      inner,
    );
    return;
  }

  let bars: Vec<Bar> = series
    .iter()
    .map(|(label, value)| {
      Bar::default()
        .label(Line::from(label.clone()))
        .value(*value)
        .style(Style::default().fg(Color::Cyan))
    })
    .collect();

  let chart = BarChart::default()
    .block(block)
    .data(BarGroup::default().bars(&bars))
    .bar_width(12)
    .bar_gap(2)
    .value_style(Style::default().fg(Color::White).bg(Color::Cyan));
  f.render_widget(chart, area);
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn chart_series_zips_labels_and_values() {
    let data = ChartData {
      labels: vec!["BJP".into(), "AAP".into()],
      values: vec![3, 1],
    };
    assert_eq!(
      chart_series(&data),
      vec![("BJP".to_string(), 3), ("AAP".to_string(), 1)]
    );
  }

  #[test]
  fn chart_series_is_stable_across_rebuilds() {
    let data = ChartData {
      labels: vec!["BJP".into()],
      values: vec![3],
    };
    assert_eq!(chart_series(&data), chart_series(&data));
  }
}
