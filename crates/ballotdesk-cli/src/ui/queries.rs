//! Query panel — six fixed analytical reports.
//!
//! Each report has its own response shape and template; the rows here
//! only map named fields to text. Rendering the same decoded report
//! twice yields identical rows.

use ballotdesk_core::query::{QueryKind, QueryReport};
use ratatui::{
  Frame,
  layout::{Constraint, Direction, Layout, Rect},
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Borders, Paragraph},
};

use crate::app::App;

/// How a report row should be highlighted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
  Plain,
  Good,
  Poor,
}

/// Text rows for a decoded report, template per shape.
pub fn report_rows(report: &QueryReport) -> Vec<(String, Tone)> {
  match report {
    QueryReport::PartyMostVotes(r) => vec![(
      format!("Result: {} with {} votes", r.party, r.count),
      Tone::Plain,
    )],

    QueryReport::VoterChange(r) => match &r.error {
      Some(error) => vec![(error.clone(), Tone::Plain)],
      None => {
        let int = |v: Option<i64>| {
          v.map(|n| n.to_string()).unwrap_or_else(|| "N/A".to_string())
        };
        let pct = |v: Option<f64>| {
          v.map(|n| n.to_string()).unwrap_or_else(|| "N/A".to_string())
        };
        vec![
          (format!("2010 Voters: {}", int(r.voters_2010)), Tone::Plain),
          (format!("2015 Voters: {}", int(r.voters_2015)), Tone::Plain),
          (format!("Change: {}%", pct(r.change_percent)), Tone::Plain),
        ]
      }
    },

    QueryReport::AuthorityHistory(r) => r
      .authorities
      .iter()
      .map(|a| {
        (
          format!("{}: {}", a.name, a.years.as_deref().unwrap_or("No records")),
          Tone::Plain,
        )
      })
      .collect(),

    QueryReport::NonVoterCitizens(r) => {
      let names: Vec<&str> =
        r.non_voters.iter().map(|c| c.name.as_str()).collect();
      vec![
        (
          format!("Total Non-Voters: {}", r.non_voters.len()),
          Tone::Plain,
        ),
        (
          format!(
            "Names: {}",
            if names.is_empty() {
              "None".to_string()
            } else {
              names.join(", ")
            }
          ),
          Tone::Plain,
        ),
      ]
    }

    // Ranks are positional; the backend already ordered the rows.
    QueryReport::TopCandidates(r) => r
      .top_candidates
      .iter()
      .enumerate()
      .map(|(i, c)| {
        (
          format!("{}. {} ({} votes)", i + 1, c.name, c.vote_count),
          Tone::Plain,
        )
      })
      .collect(),

    QueryReport::Turnout(r) => r
      .turnout
      .iter()
      .map(|t| {
        (
          format!(
            "Election {}: expected {}, actual {}, turnout {}%",
            t.id, t.expected, t.actual, t.turnout
          ),
          if t.turnout > 50.0 { Tone::Good } else { Tone::Poor },
        )
      })
      .collect(),
  }
}

pub fn draw(f: &mut Frame, area: Rect, app: &App) {
  let rows = Layout::default()
    .direction(Direction::Vertical)
    .constraints([Constraint::Length(8), Constraint::Min(0)])
    .split(area);

  draw_menu(f, rows[0]);
  draw_result(f, rows[1], app);
}

fn draw_menu(f: &mut Frame, area: Rect) {
  let block = Block::default()
    .title(" Analytical Reports ")
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::DarkGray));
  let inner = block.inner(area);
  f.render_widget(block, area);

  let lines: Vec<Line> = QueryKind::ALL
    .iter()
    .map(|kind| {
      Line::from(vec![
        Span::styled(
          format!(" [{}] ", kind.number()),
          Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
        ),
        Span::raw(kind.title()),
      ])
    })
    .collect();

  f.render_widget(Paragraph::new(lines), inner);
}

fn draw_result(f: &mut Frame, area: Rect, app: &App) {
  let Some(report) = &app.query else {
    let block = Block::default()
      .title(" Result ")
      .borders(Borders::ALL)
      .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    f.render_widget(block, area);
    f.render_widget(
      Paragraph::new("Press 1-6 to run a report.")
        .style(Style::default().fg(Color::DarkGray)),
      inner,
    );
    return;
  };

  let block = Block::default()
    .title(format!(" {} ", report.kind().title()))
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::DarkGray));
  let inner = block.inner(area);
  f.render_widget(block, area);

  let lines: Vec<Line> = report_rows(report)
    .into_iter()
    .map(|(text, tone)| {
      let style = match tone {
        Tone::Plain => Style::default(),
        Tone::Good => Style::default().fg(Color::Green),
        Tone::Poor => Style::default().fg(Color::Red),
      };
      Line::from(Span::styled(text, style))
    })
    .collect();

  f.render_widget(Paragraph::new(lines), inner);
}

#[cfg(test)]
mod tests {
  use ballotdesk_core::query::{
    NonVoterCitizens, RankedCandidate, TopCandidates, Turnout, TurnoutRow,
    VoterChange,
  };

  use super::*;

  #[test]
  fn top_candidates_rank_by_position_without_resorting() {
    let report = QueryReport::TopCandidates(TopCandidates {
      top_candidates: vec![
        RankedCandidate { name: "A".into(), vote_count: 10 },
        RankedCandidate { name: "B".into(), vote_count: 7 },
      ],
    });
    let rows = report_rows(&report);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].0, "1. A (10 votes)");
    assert_eq!(rows[1].0, "2. B (7 votes)");
  }

  #[test]
  fn voter_change_error_body_renders_the_error_alone() {
    let report = QueryReport::VoterChange(VoterChange {
      error: Some("Data not available".into()),
      voters_2010: None,
      voters_2015: None,
      change_percent: None,
    });
    assert_eq!(
      report_rows(&report),
      vec![("Data not available".to_string(), Tone::Plain)]
    );
  }

  #[test]
  fn turnout_highlights_the_fifty_percent_threshold() {
    let report = QueryReport::Turnout(Turnout {
      turnout: vec![
        TurnoutRow { id: 101, expected: 1000, actual: 600, turnout: 60.0 },
        TurnoutRow { id: 102, expected: 1000, actual: 500, turnout: 50.0 },
      ],
    });
    let rows = report_rows(&report);
    assert_eq!(rows[0].1, Tone::Good);
    assert_eq!(rows[1].1, Tone::Poor);
  }

  #[test]
  fn empty_non_voter_list_renders_none() {
    let report = QueryReport::NonVoterCitizens(NonVoterCitizens {
      non_voters: Vec::new(),
    });
    let rows = report_rows(&report);
    assert_eq!(rows[0].0, "Total Non-Voters: 0");
    assert_eq!(rows[1].0, "Names: None");
  }

  #[test]
  fn rendering_twice_is_idempotent() {
    let report = QueryReport::TopCandidates(TopCandidates {
      top_candidates: vec![RankedCandidate { name: "A".into(), vote_count: 10 }],
    });
    assert_eq!(report_rows(&report), report_rows(&report));
  }
}
