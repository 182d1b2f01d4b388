//! Entity read shapes, exactly as the backend serves them.
//!
//! List endpoints embed denormalized display names where the backend
//! joins them in (`party_name`, `authority_name`, …). The lookup
//! helpers on [`crate::snapshot::Snapshot`] are the fallback for
//! payloads that omit them.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A registered political party.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Party {
  pub id:     i64,
  pub name:   String,
  pub symbol: String,
  /// Derived by the backend (candidates grouped per party); zero when
  /// the payload omits it.
  #[serde(default)]
  pub candidate_count: u32,
}

/// A candidate standing in one election for one party.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
  pub id:          i64,
  pub name:        String,
  pub party_id:    i64,
  pub election_id: i64,
  #[serde(default)]
  pub party_name:  Option<String>,
}

/// Voter sex as the backend stores it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sex {
  M,
  F,
}

impl fmt::Display for Sex {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Sex::M => write!(f, "Male"),
      Sex::F => write!(f, "Female"),
    }
  }
}

/// A registered voter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Voter {
  pub id:           i64,
  pub name:         String,
  pub sex:          Sex,
  pub authority_id: i64,
  /// National id number, unique per voter.
  pub aadhaar:      i64,
}

/// An election cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Election {
  pub id:           i64,
  /// Expected voter count.
  pub voters:       i64,
  pub participants: i64,
  pub result_date:  String,
  /// The winner's term in years; the backend stores text.
  pub ruling:       String,
  pub authority_id: i64,
  #[serde(default)]
  pub authority_name: Option<String>,
}

/// A single cast vote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vote {
  pub id:           i64,
  pub candidate_id: i64,
  pub date:         String,
  pub election_id:  i64,
  pub voter_id:     i64,
  #[serde(default)]
  pub candidate_name: Option<String>,
  #[serde(default)]
  pub voter_name:     Option<String>,
}

/// An administrative body overseeing elections and voters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Authority {
  pub id:          i64,
  pub name:        String,
  pub chief:       String,
  pub experience:  String,
  pub established: String,
}
