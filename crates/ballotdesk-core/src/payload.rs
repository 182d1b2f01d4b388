//! Write payloads sent to the backend.
//!
//! The backend reads camelCase request bodies even though it serves
//! snake_case rows (`party_id` is read, `partyId` is written). These
//! shapes reproduce that translation exactly; the backend depends on
//! it.

use serde::{Deserialize, Serialize};

use crate::entity::Sex;

/// Body for `POST`/`PUT /api/parties`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewParty {
  pub name:   String,
  pub symbol: String,
}

/// Body for `POST`/`PUT /api/candidates`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCandidate {
  pub name:        String,
  pub party_id:    i64,
  pub election_id: i64,
}

/// Body for `POST`/`PUT /api/voters`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewVoter {
  pub name:         String,
  pub sex:          Sex,
  pub authority_id: i64,
  pub aadhaar:      i64,
}

/// Body for `POST`/`PUT /api/elections`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewElection {
  pub voters:       i64,
  pub participants: i64,
  pub result_date:  String,
  pub ruling:       String,
  pub authority_id: i64,
}

/// Body for `POST /api/votes`. Votes are never updated, only created
/// and deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewVote {
  pub candidate_id: i64,
  pub date:         String,
  pub election_id:  i64,
  pub voter_id:     i64,
}

/// Backend response to a successful create.
#[derive(Debug, Clone, Deserialize)]
pub struct Created {
  pub id: i64,
  #[serde(default)]
  pub message: String,
}

/// Backend response to a successful update or delete.
#[derive(Debug, Clone, Deserialize)]
pub struct Ack {
  #[serde(default)]
  pub message: String,
}
