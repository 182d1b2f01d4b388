//! The in-memory data snapshot the console renders from.
//!
//! A [`Snapshot`] is built wholesale from the six backend collections
//! and swapped in atomically by its owner; a failed reload never
//! leaves a half-updated mixture behind. Collections keep exactly the
//! backend's row order; the console does not sort.

use crate::entity::{Authority, Candidate, Election, Party, Vote, Voter};

/// Sentinel shown when an id does not resolve to a row.
pub const UNKNOWN: &str = "Unknown";

#[derive(Debug, Clone, Default)]
pub struct Snapshot {
  pub parties:     Vec<Party>,
  pub candidates:  Vec<Candidate>,
  pub voters:      Vec<Voter>,
  pub elections:   Vec<Election>,
  pub votes:       Vec<Vote>,
  pub authorities: Vec<Authority>,
}

impl Snapshot {
  // ── Lookups ───────────────────────────────────────────────────────────────
  //
  // Linear scans; collections are small and reloaded wholesale, so no
  // index is kept. Missing ids resolve to the sentinel, never a panic.

  pub fn party(&self, id: i64) -> Option<&Party> {
    self.parties.iter().find(|p| p.id == id)
  }

  pub fn party_name(&self, id: i64) -> &str {
    self.party(id).map(|p| p.name.as_str()).unwrap_or(UNKNOWN)
  }

  pub fn candidate_name(&self, id: i64) -> &str {
    self
      .candidates
      .iter()
      .find(|c| c.id == id)
      .map(|c| c.name.as_str())
      .unwrap_or(UNKNOWN)
  }

  pub fn voter_name(&self, id: i64) -> &str {
    self
      .voters
      .iter()
      .find(|v| v.id == id)
      .map(|v| v.name.as_str())
      .unwrap_or(UNKNOWN)
  }

  pub fn authority_name(&self, id: i64) -> &str {
    self
      .authorities
      .iter()
      .find(|a| a.id == id)
      .map(|a| a.name.as_str())
      .unwrap_or(UNKNOWN)
  }

  // ── Derived views ─────────────────────────────────────────────────────────

  /// Candidates standing in `election_id`, in backend order. Drives
  /// the ballot list on the voting screen.
  pub fn candidates_for_election(&self, election_id: i64) -> Vec<&Candidate> {
    self
      .candidates
      .iter()
      .filter(|c| c.election_id == election_id)
      .collect()
  }

  /// Votes received per candidate display name, in the order each
  /// candidate first appears in the vote list. Prefers the name the
  /// backend embedded on the vote row, falling back to a lookup.
  ///
  /// This is the one aggregation computed client-side; everything else
  /// comes precomputed from the backend.
  pub fn vote_counts(&self) -> Vec<(String, u64)> {
    let mut counts: Vec<(String, u64)> = Vec::new();
    for vote in &self.votes {
      let name = vote
        .candidate_name
        .as_deref()
        .unwrap_or_else(|| self.candidate_name(vote.candidate_id));
      match counts.iter_mut().find(|(n, _)| n.as_str() == name) {
        Some((_, count)) => *count += 1,
        None => counts.push((name.to_string(), 1)),
      }
    }
    counts
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn candidate(id: i64, name: &str, election_id: i64) -> Candidate {
    Candidate {
      id,
      name: name.into(),
      party_id: 1,
      election_id,
      party_name: None,
    }
  }

  fn vote(id: i64, candidate_id: i64, embedded: Option<&str>) -> Vote {
    Vote {
      id,
      candidate_id,
      date: "2020-01-26".into(),
      election_id: 101,
      voter_id: 1,
      candidate_name: embedded.map(Into::into),
      voter_name: None,
    }
  }

  #[test]
  fn lookups_return_sentinel_on_absent_id() {
    let snapshot = Snapshot::default();
    assert_eq!(snapshot.party_name(99), UNKNOWN);
    assert_eq!(snapshot.candidate_name(99), UNKNOWN);
    assert_eq!(snapshot.voter_name(99), UNKNOWN);
    assert_eq!(snapshot.authority_name(99), UNKNOWN);
  }

  #[test]
  fn lookups_resolve_present_ids() {
    let snapshot = Snapshot {
      parties: vec![Party {
        id:     4,
        name:   "AAP".into(),
        symbol: "Broom".into(),
        candidate_count: 0,
      }],
      ..Snapshot::default()
    };
    assert_eq!(snapshot.party_name(4), "AAP");
  }

  #[test]
  fn candidates_for_election_filters_by_equality() {
    let snapshot = Snapshot {
      candidates: vec![
        candidate(1, "Bhargavi", 103),
        candidate(2, "Sakshi", 105),
        candidate(3, "Shivanjali", 103),
      ],
      ..Snapshot::default()
    };
    let ballot = snapshot.candidates_for_election(103);
    let names: Vec<&str> = ballot.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["Bhargavi", "Shivanjali"]);
    assert!(snapshot.candidates_for_election(999).is_empty());
  }

  #[test]
  fn vote_counts_keep_first_encounter_order() {
    let snapshot = Snapshot {
      candidates: vec![candidate(1, "Ram", 101), candidate(2, "Sita", 101)],
      votes: vec![
        vote(11, 2, None),
        vote(12, 1, None),
        vote(13, 2, None),
        vote(14, 2, None),
      ],
      ..Snapshot::default()
    };
    assert_eq!(
      snapshot.vote_counts(),
      vec![("Sita".to_string(), 3), ("Ram".to_string(), 1)]
    );
  }

  #[test]
  fn vote_counts_prefer_embedded_name_and_fall_back() {
    let snapshot = Snapshot {
      candidates: vec![candidate(1, "Ram", 101)],
      votes: vec![vote(11, 1, Some("Ram (embedded)")), vote(12, 1, None), vote(13, 9, None)],
      ..Snapshot::default()
    };
    assert_eq!(
      snapshot.vote_counts(),
      vec![
        ("Ram (embedded)".to_string(), 1),
        ("Ram".to_string(), 1),
        (UNKNOWN.to_string(), 1),
      ]
    );
  }
}
