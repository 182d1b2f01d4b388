//! Entity tables — one per CRUD tab.
//!
//! Row construction is pure (snapshot in, cells out); the draw
//! functions only lay the rows into widgets. Rows keep the backend's
//! order, never a client-side sort.

use ballotdesk_core::{
  entity::{Candidate, Election, Party, Vote, Voter},
  snapshot::Snapshot,
};
use ratatui::{
  Frame,
  layout::{Constraint, Rect},
  style::{Color, Modifier, Style},
  widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
};

use crate::app::{App, Tab};

// ─── Cells ────────────────────────────────────────────────────────────────────

pub fn party_cells(party: &Party) -> [String; 4] {
  [
    party.id.to_string(),
    party.name.clone(),
    party.symbol.clone(),
    format!("{} Candidates", party.candidate_count),
  ]
}

pub fn candidate_cells(snapshot: &Snapshot, candidate: &Candidate) -> [String; 4] {
  [
    candidate.id.to_string(),
    candidate.name.clone(),
    candidate
      .party_name
      .clone()
      .unwrap_or_else(|| snapshot.party_name(candidate.party_id).to_string()),
    format!("Election {}", candidate.election_id),
  ]
}

pub fn voter_cells(voter: &Voter) -> [String; 5] {
  [
    voter.id.to_string(),
    voter.name.clone(),
    voter.sex.to_string(),
    voter.authority_id.to_string(),
    voter.aadhaar.to_string(),
  ]
}

pub fn election_cells(snapshot: &Snapshot, election: &Election) -> [String; 6] {
  [
    election.id.to_string(),
    election.voters.to_string(),
    election.participants.to_string(),
    election.result_date.clone(),
    format!("{} years", election.ruling),
    election
      .authority_name
      .clone()
      .unwrap_or_else(|| snapshot.authority_name(election.authority_id).to_string()),
  ]
}

pub fn vote_cells(snapshot: &Snapshot, vote: &Vote) -> [String; 5] {
  [
    vote.id.to_string(),
    vote
      .candidate_name
      .clone()
      .unwrap_or_else(|| snapshot.candidate_name(vote.candidate_id).to_string()),
    vote.date.clone(),
    format!("Election {}", vote.election_id),
    vote
      .voter_name
      .clone()
      .unwrap_or_else(|| snapshot.voter_name(vote.voter_id).to_string()),
  ]
}

// ─── Draw ─────────────────────────────────────────────────────────────────────

/// Render the active CRUD tab's table.
pub fn draw(f: &mut Frame, area: Rect, app: &App) {
  match app.tab {
    Tab::Parties => {
      let rows: Vec<Vec<String>> = app
        .filtered_parties()
        .iter()
        .map(|p| party_cells(p).to_vec())
        .collect();
      let total = app.snapshot.parties.len();
      draw_table(
        f,
        area,
        app,
        "Parties",
        total,
        &["ID", "Name", "Symbol", "Candidates"],
        rows,
      );
    }
    Tab::Candidates => {
      let rows: Vec<Vec<String>> = app
        .filtered_candidates()
        .iter()
        .map(|c| candidate_cells(&app.snapshot, c).to_vec())
        .collect();
      let total = app.snapshot.candidates.len();
      draw_table(
        f,
        area,
        app,
        "Candidates",
        total,
        &["ID", "Name", "Party", "Election"],
        rows,
      );
    }
    Tab::Voters => {
      let rows: Vec<Vec<String>> = app
        .filtered_voters()
        .iter()
        .map(|v| voter_cells(v).to_vec())
        .collect();
      let total = app.snapshot.voters.len();
      draw_table(
        f,
        area,
        app,
        "Voters",
        total,
        &["ID", "Name", "Sex", "Authority", "Aadhaar"],
        rows,
      );
    }
    Tab::Elections => {
      let rows: Vec<Vec<String>> = app
        .filtered_elections()
        .iter()
        .map(|e| election_cells(&app.snapshot, e).to_vec())
        .collect();
      let total = app.snapshot.elections.len();
      draw_table(
        f,
        area,
        app,
        "Elections",
        total,
        &[
          "ID",
          "Expected Voters",
          "Participants",
          "Result Date",
          "Ruling",
          "Authority",
        ],
        rows,
      );
    }
    _ => {}
  }
}

/// Render the vote-records table (results tab, left pane).
pub fn draw_votes(f: &mut Frame, area: Rect, app: &App) {
  let rows: Vec<Vec<String>> = app
    .filtered_votes()
    .iter()
    .map(|v| vote_cells(&app.snapshot, v).to_vec())
    .collect();
  let total = app.snapshot.votes.len();
  draw_table(
    f,
    area,
    app,
    "Vote Records",
    total,
    &["ID", "Candidate", "Date", "Election", "Voter"],
    rows,
  );
}

fn draw_table(
  f: &mut Frame,
  area: Rect,
  app: &App,
  name: &str,
  total: usize,
  headers: &[&str],
  rows: Vec<Vec<String>>,
) {
  let shown = rows.len();
  let title = if shown == total {
    format!(" {name} ({total}) ")
  } else {
    format!(" {name} ({shown}/{total}) ")
  };

  let block = Block::default()
    .title(title)
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::DarkGray));

  let mut inner = block.inner(area);
  f.render_widget(block, area);

  // Filter bar at the bottom of the inner area while a filter is set.
  if (app.filter_active || !app.filter.is_empty()) && inner.height > 2 {
    let filter_area = Rect {
      x:      inner.x,
      y:      inner.y + inner.height - 1,
      width:  inner.width,
      height: 1,
    };
    inner.height = inner.height.saturating_sub(1);

    let filter_text = if app.filter_active {
      format!("/{}_", app.filter)
    } else {
      format!("/{}", app.filter)
    };
    f.render_widget(
      Paragraph::new(filter_text).style(Style::default().fg(Color::Yellow)),
      filter_area,
    );
  }

  let header = Row::new(headers.iter().map(|h| Cell::from(*h))).style(
    Style::default()
      .fg(Color::Cyan)
      .add_modifier(Modifier::BOLD),
  );
  let body: Vec<Row> = rows.into_iter().map(Row::new).collect();
  let widths = vec![Constraint::Fill(1); headers.len()];

  let table = Table::new(body, widths).header(header).row_highlight_style(
    Style::default()
      .bg(Color::Blue)
      .fg(Color::White)
      .add_modifier(Modifier::BOLD),
  );

  let mut state = TableState::default();
  state.select(if shown == 0 {
    None
  } else {
    Some(app.cursor.min(shown - 1))
  });

  f.render_stateful_widget(table, inner, &mut state);
}

#[cfg(test)]
mod tests {
  use ballotdesk_core::entity::Sex;

  use super::*;

  #[test]
  fn vote_cells_fall_back_to_snapshot_lookups() {
    let snapshot = Snapshot {
      candidates: vec![Candidate {
        id: 7,
        name: "Vikram".into(),
        party_id: 1,
        election_id: 101,
        party_name: None,
      }],
      voters: vec![Voter {
        id: 20,
        name: "Mothra".into(),
        sex: Sex::F,
        authority_id: 10,
        aadhaar: 1893,
      }],
      ..Snapshot::default()
    };
    let vote = Vote {
      id: 120,
      candidate_id: 7,
      date: "2005-01-26".into(),
      election_id: 107,
      voter_id: 20,
      candidate_name: None,
      voter_name: None,
    };
    assert_eq!(
      vote_cells(&snapshot, &vote),
      [
        "120".to_string(),
        "Vikram".to_string(),
        "2005-01-26".to_string(),
        "Election 107".to_string(),
        "Mothra".to_string(),
      ]
    );
  }

  #[test]
  fn vote_cells_show_unknown_for_dangling_references() {
    let vote = Vote {
      id: 1,
      candidate_id: 42,
      date: "2020-01-26".into(),
      election_id: 101,
      voter_id: 43,
      candidate_name: None,
      voter_name: None,
    };
    let cells = vote_cells(&Snapshot::default(), &vote);
    assert_eq!(cells[1], "Unknown");
    assert_eq!(cells[4], "Unknown");
  }

  #[test]
  fn embedded_names_win_over_lookups() {
    let snapshot = Snapshot::default();
    let candidate = Candidate {
      id: 5,
      name: "Guru".into(),
      party_id: 3,
      election_id: 101,
      party_name: Some("Congress".into()),
    };
    assert_eq!(candidate_cells(&snapshot, &candidate)[2], "Congress");
  }

  #[test]
  fn election_cells_format_ruling_and_counts() {
    let election = Election {
      id: 101,
      voters: 1000,
      participants: 6,
      result_date: "2019-03-22".into(),
      ruling: "5".into(),
      authority_id: 10,
      authority_name: Some("IEC".into()),
    };
    let cells = election_cells(&Snapshot::default(), &election);
    assert_eq!(cells[4], "5 years");
    assert_eq!(cells[5], "IEC");
  }
}
