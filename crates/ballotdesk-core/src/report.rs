//! Client-side generation of the downloadable results report.
//!
//! The report aggregates the already-loaded elections, votes, and
//! candidates; it never talks to the backend. Output is a JSON object
//! keyed `"Election {id}"` in backend election order.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::{
  Result,
  entity::Election,
  snapshot::Snapshot,
};

/// Per-election section of the results report.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ElectionSummary {
  pub total_votes: usize,
  /// Candidate name → votes received, in the order each candidate
  /// first appears among the election's votes.
  pub candidate_votes: Map<String, Value>,
  /// `"{name} with {n} votes"`, or `"No votes cast"`.
  pub winner: String,
}

/// Build the full report document.
pub fn results_report(snapshot: &Snapshot) -> Result<Map<String, Value>> {
  let mut report = Map::new();
  for election in &snapshot.elections {
    let summary = election_summary(snapshot, election);
    report.insert(
      format!("Election {}", election.id),
      serde_json::to_value(&summary)?,
    );
  }
  Ok(report)
}

/// Pretty-print a report document for writing to disk.
pub fn to_json_string(report: &Map<String, Value>) -> Result<String> {
  Ok(serde_json::to_string_pretty(report)?)
}

fn election_summary(snapshot: &Snapshot, election: &Election) -> ElectionSummary {
  let mut tally: Vec<(String, u64)> = Vec::new();
  let mut total = 0usize;

  for vote in snapshot.votes.iter().filter(|v| v.election_id == election.id) {
    total += 1;
    // Votes whose candidate no longer resolves count toward the total
    // but are left out of the per-candidate breakdown.
    let Some(candidate) =
      snapshot.candidates.iter().find(|c| c.id == vote.candidate_id)
    else {
      continue;
    };
    match tally.iter_mut().find(|(n, _)| *n == candidate.name) {
      Some((_, count)) => *count += 1,
      None => tally.push((candidate.name.clone(), 1)),
    }
  }

  // Strict `>` keeps the earliest-encountered candidate on ties.
  let mut winner: Option<&(String, u64)> = None;
  for entry in &tally {
    if winner.map(|(_, best)| entry.1 > *best).unwrap_or(true) {
      winner = Some(entry);
    }
  }

  ElectionSummary {
    total_votes: total,
    candidate_votes: tally
      .iter()
      .map(|(name, count)| (name.clone(), Value::from(*count)))
      .collect(),
    winner: match winner {
      Some((name, count)) => format!("{name} with {count} votes"),
      None => "No votes cast".to_string(),
    },
  }
}

#[cfg(test)]
mod tests {
  use crate::entity::{Candidate, Vote};

  use super::*;

  fn election(id: i64) -> Election {
    Election {
      id,
      voters: 1000,
      participants: 2,
      result_date: "2019-03-22".into(),
      ruling: "5".into(),
      authority_id: 10,
      authority_name: None,
    }
  }

  fn candidate(id: i64, name: &str) -> Candidate {
    Candidate {
      id,
      name: name.into(),
      party_id: 1,
      election_id: 101,
      party_name: None,
    }
  }

  fn vote(id: i64, candidate_id: i64, election_id: i64) -> Vote {
    Vote {
      id,
      candidate_id,
      date: "2020-01-26".into(),
      election_id,
      voter_id: 1,
      candidate_name: None,
      voter_name: None,
    }
  }

  #[test]
  fn election_without_votes_reports_no_winner() {
    let snapshot = Snapshot {
      elections: vec![election(101)],
      ..Snapshot::default()
    };
    let report = results_report(&snapshot).expect("report");
    let section = &report["Election 101"];
    assert_eq!(section["totalVotes"], 0);
    assert_eq!(section["winner"], "No votes cast");
    assert!(
      section["candidateVotes"]
        .as_object()
        .expect("candidate map")
        .is_empty()
    );
  }

  #[test]
  fn winner_is_the_top_count_with_vote_total() {
    let snapshot = Snapshot {
      elections: vec![election(101)],
      candidates: vec![candidate(1, "Ram"), candidate(2, "Sita")],
      votes: vec![vote(11, 1, 101), vote(12, 2, 101), vote(13, 2, 101)],
      ..Snapshot::default()
    };
    let report = results_report(&snapshot).expect("report");
    let section = &report["Election 101"];
    assert_eq!(section["totalVotes"], 3);
    assert_eq!(section["winner"], "Sita with 2 votes");
    assert_eq!(section["candidateVotes"]["Ram"], 1);
    assert_eq!(section["candidateVotes"]["Sita"], 2);
  }

  #[test]
  fn ties_resolve_to_the_earliest_encountered_candidate() {
    let snapshot = Snapshot {
      elections: vec![election(101)],
      candidates: vec![candidate(1, "Ram"), candidate(2, "Sita")],
      votes: vec![vote(11, 2, 101), vote(12, 1, 101)],
      ..Snapshot::default()
    };
    let report = results_report(&snapshot).expect("report");
    assert_eq!(report["Election 101"]["winner"], "Sita with 1 votes");
  }

  #[test]
  fn unresolvable_candidates_count_toward_the_total_only() {
    let snapshot = Snapshot {
      elections: vec![election(101)],
      candidates: vec![candidate(1, "Ram")],
      votes: vec![vote(11, 1, 101), vote(12, 42, 101)],
      ..Snapshot::default()
    };
    let report = results_report(&snapshot).expect("report");
    let section = &report["Election 101"];
    assert_eq!(section["totalVotes"], 2);
    assert_eq!(
      section["candidateVotes"].as_object().expect("candidate map").len(),
      1
    );
    assert_eq!(section["winner"], "Ram with 1 votes");
  }

  #[test]
  fn report_keys_follow_backend_election_order() {
    let snapshot = Snapshot {
      elections: vec![election(105), election(101)],
      ..Snapshot::default()
    };
    let report = results_report(&snapshot).expect("report");
    let keys: Vec<&String> = report.keys().collect();
    assert_eq!(keys, ["Election 105", "Election 101"]);
  }

  #[test]
  fn votes_in_other_elections_are_ignored() {
    let snapshot = Snapshot {
      elections: vec![election(101)],
      candidates: vec![candidate(1, "Ram")],
      votes: vec![vote(11, 1, 101), vote(12, 1, 102)],
      ..Snapshot::default()
    };
    let report = results_report(&snapshot).expect("report");
    assert_eq!(report["Election 101"]["totalVotes"], 1);
  }
}
