//! Voting tab — the three-step cast-a-vote flow.

use ballotdesk_core::{entity::Candidate, snapshot::Snapshot};
use ratatui::{
  Frame,
  layout::{Constraint, Direction, Layout, Rect},
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use crate::{
  app::App,
  voting::VotingFocus,
};

/// Ballot line for one candidate, with party and symbol.
pub fn candidate_line(snapshot: &Snapshot, candidate: &Candidate) -> String {
  let party = snapshot.party(candidate.party_id);
  format!(
    "{} - {} ({})",
    candidate.name,
    party.map(|p| p.name.as_str()).unwrap_or("Unknown"),
    party.map(|p| p.symbol.as_str()).unwrap_or(""),
  )
}

pub fn draw(f: &mut Frame, area: Rect, app: &App) {
  let cols = Layout::default()
    .direction(Direction::Horizontal)
    .constraints([
      Constraint::Percentage(30),
      Constraint::Percentage(40),
      Constraint::Percentage(30),
    ])
    .split(area);

  draw_elections(f, cols[0], app);
  draw_candidates(f, cols[1], app);
  draw_voters(f, cols[2], app);
}

fn pane_block(title: &str, focused: bool) -> Block<'_> {
  let border = if focused {
    Style::default().fg(Color::Cyan)
  } else {
    Style::default().fg(Color::DarkGray)
  };
  Block::default()
    .title(format!(" {title} "))
    .borders(Borders::ALL)
    .border_style(border)
}

fn selectable_item(label: String, selected: bool) -> ListItem<'static> {
  if selected {
    ListItem::new(Line::from(vec![
      Span::styled("✓ ", Style::default().fg(Color::Green)),
      Span::styled(
        label,
        Style::default()
          .fg(Color::Green)
          .add_modifier(Modifier::BOLD),
      ),
    ]))
  } else {
    ListItem::new(Line::from(vec![Span::raw("  "), Span::raw(label)]))
  }
}

fn render_list(
  f: &mut Frame,
  area: Rect,
  block: Block<'_>,
  items: Vec<ListItem<'static>>,
  cursor: usize,
) {
  let len = items.len();
  let mut state = ListState::default();
  state.select(if len == 0 { None } else { Some(cursor.min(len - 1)) });

  f.render_stateful_widget(
    List::new(items)
      .block(block)
      .highlight_style(Style::default().bg(Color::Blue).fg(Color::White)),
    area,
    &mut state,
  );
}

fn draw_elections(f: &mut Frame, area: Rect, app: &App) {
  let block = pane_block(
    "1. Select Election",
    app.voting.focus == VotingFocus::Elections,
  );

  let items: Vec<ListItem> = app
    .snapshot
    .elections
    .iter()
    .map(|e| {
      selectable_item(
        format!("Election {} ({})", e.id, e.result_date),
        app.voting.election == Some(e.id),
      )
    })
    .collect();

  render_list(f, area, block, items, app.voting.election_cursor);
}

fn draw_candidates(f: &mut Frame, area: Rect, app: &App) {
  let block = pane_block(
    "2. Select Candidate",
    app.voting.focus == VotingFocus::Candidates,
  );

  let Some(election_id) = app.voting.election else {
    let inner = block.inner(area);
    f.render_widget(block, area);
    f.render_widget(
      Paragraph::new("Select an election first.")
        .style(Style::default().fg(Color::DarkGray)),
      inner,
    );
    return;
  };

  let ballot = app.snapshot.candidates_for_election(election_id);
  if ballot.is_empty() {
    let inner = block.inner(area);
    f.render_widget(block, area);
    f.render_widget(
      Paragraph::new("No candidates available for this election.")
        .style(Style::default().fg(Color::DarkGray)),
      inner,
    );
    return;
  }

  let items: Vec<ListItem> = ballot
    .iter()
    .map(|c| {
      selectable_item(
        candidate_line(&app.snapshot, c),
        app.voting.candidate == Some(c.id),
      )
    })
    .collect();

  render_list(f, area, block, items, app.voting.candidate_cursor);
}

fn draw_voters(f: &mut Frame, area: Rect, app: &App) {
  let block =
    pane_block("3. Select Voter", app.voting.focus == VotingFocus::Voters);

  let items: Vec<ListItem> = app
    .snapshot
    .voters
    .iter()
    .map(|v| {
      selectable_item(
        format!("{} (ID: {})", v.name, v.id),
        app.voting.voter == Some(v.id),
      )
    })
    .collect();

  render_list(f, area, block, items, app.voting.voter_cursor);
}

#[cfg(test)]
mod tests {
  use ballotdesk_core::entity::Party;

  use super::*;

  #[test]
  fn candidate_line_includes_party_and_symbol() {
    let snapshot = Snapshot {
      parties: vec![Party {
        id: 4,
        name: "AAP".into(),
        symbol: "Broom".into(),
        candidate_count: 0,
      }],
      ..Snapshot::default()
    };
    let candidate = Candidate {
      id: 1,
      name: "Bhargavi".into(),
      party_id: 4,
      election_id: 103,
      party_name: None,
    };
    assert_eq!(
      candidate_line(&snapshot, &candidate),
      "Bhargavi - AAP (Broom)"
    );
  }

  #[test]
  fn candidate_line_tolerates_a_dangling_party() {
    let candidate = Candidate {
      id: 1,
      name: "Bhargavi".into(),
      party_id: 99,
      election_id: 103,
      party_name: None,
    };
    assert_eq!(
      candidate_line(&Snapshot::default(), &candidate),
      "Bhargavi - Unknown ()"
    );
  }
}
