//! Read models for the dashboard and the six fixed analytical reports.
//!
//! All numeric computation behind these shapes runs server-side; the
//! console only maps named fields to rows. Each report is independent
//! and idempotent: decoding the same body twice yields the same view.

use serde::Deserialize;

use crate::{Error, Result};

// ─── Dashboard ────────────────────────────────────────────────────────────────

/// `GET /api/dashboard`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
  pub total_parties:    i64,
  pub total_candidates: i64,
  pub total_voters:     i64,
  pub total_elections:  i64,
  pub chart_data:       ChartData,
}

/// Candidates-by-party series for the dashboard chart.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChartData {
  pub labels: Vec<String>,
  pub values: Vec<i64>,
}

// ─── Query selection ──────────────────────────────────────────────────────────

/// The six fixed analytical reports, by backend query number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryKind {
  PartyMostVotes,
  VoterChange,
  AuthorityHistory,
  NonVoterCitizens,
  TopCandidates,
  Turnout,
}

impl QueryKind {
  pub const ALL: [QueryKind; 6] = [
    QueryKind::PartyMostVotes,
    QueryKind::VoterChange,
    QueryKind::AuthorityHistory,
    QueryKind::NonVoterCitizens,
    QueryKind::TopCandidates,
    QueryKind::Turnout,
  ];

  pub fn from_number(n: u8) -> Result<Self> {
    match n {
      1 => Ok(QueryKind::PartyMostVotes),
      2 => Ok(QueryKind::VoterChange),
      3 => Ok(QueryKind::AuthorityHistory),
      4 => Ok(QueryKind::NonVoterCitizens),
      5 => Ok(QueryKind::TopCandidates),
      6 => Ok(QueryKind::Turnout),
      other => Err(Error::UnknownQuery(other)),
    }
  }

  pub fn number(self) -> u8 {
    match self {
      QueryKind::PartyMostVotes => 1,
      QueryKind::VoterChange => 2,
      QueryKind::AuthorityHistory => 3,
      QueryKind::NonVoterCitizens => 4,
      QueryKind::TopCandidates => 5,
      QueryKind::Turnout => 6,
    }
  }

  /// Panel heading for the report.
  pub fn title(self) -> &'static str {
    match self {
      QueryKind::PartyMostVotes => "Query 1: Party with Most Votes (After 1989)",
      QueryKind::VoterChange => "Query 2: Voter Change % (2010-2015)",
      QueryKind::AuthorityHistory => "Query 3: Election Authority History",
      QueryKind::NonVoterCitizens => "Query 4: Citizens Who Are Not Voters",
      QueryKind::TopCandidates => "Query 5: Top 3 Candidates by Votes",
      QueryKind::Turnout => "Query 6: Voter Turnout by Election",
    }
  }
}

// ─── Response shapes ──────────────────────────────────────────────────────────

/// `GET /api/query/1`.
#[derive(Debug, Clone, Deserialize)]
pub struct PartyMostVotes {
  pub party: String,
  pub count: i64,
}

/// `GET /api/query/2`. The backend reports `error` instead of numbers
/// when either year has no vote data.
#[derive(Debug, Clone, Deserialize)]
pub struct VoterChange {
  #[serde(default)]
  pub error: Option<String>,
  #[serde(default)]
  pub voters_2010: Option<i64>,
  #[serde(default)]
  pub voters_2015: Option<i64>,
  #[serde(default)]
  pub change_percent: Option<f64>,
}

/// One row of `GET /api/query/3`.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthorityYears {
  pub name: String,
  /// Comma-joined active years; absent when the authority has none.
  #[serde(default)]
  pub years: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthorityHistory {
  pub authorities: Vec<AuthorityYears>,
}

/// One row of `GET /api/query/4`.
#[derive(Debug, Clone, Deserialize)]
pub struct NonVoterCitizen {
  pub name:    String,
  pub aadhaar: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NonVoterCitizens {
  pub non_voters: Vec<NonVoterCitizen>,
}

/// One row of `GET /api/query/5`. Rows arrive ranked; the console
/// assigns ranks by position and never re-sorts.
#[derive(Debug, Clone, Deserialize)]
pub struct RankedCandidate {
  pub name:       String,
  pub vote_count: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TopCandidates {
  pub top_candidates: Vec<RankedCandidate>,
}

/// One row of `GET /api/query/6`.
#[derive(Debug, Clone, Deserialize)]
pub struct TurnoutRow {
  pub id:       i64,
  pub expected: i64,
  pub actual:   i64,
  /// Percentage, rounded server-side.
  pub turnout:  f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Turnout {
  pub turnout: Vec<TurnoutRow>,
}

/// A decoded report, one variant per query number.
#[derive(Debug, Clone)]
pub enum QueryReport {
  PartyMostVotes(PartyMostVotes),
  VoterChange(VoterChange),
  AuthorityHistory(AuthorityHistory),
  NonVoterCitizens(NonVoterCitizens),
  TopCandidates(TopCandidates),
  Turnout(Turnout),
}

impl QueryReport {
  pub fn kind(&self) -> QueryKind {
    match self {
      QueryReport::PartyMostVotes(_) => QueryKind::PartyMostVotes,
      QueryReport::VoterChange(_) => QueryKind::VoterChange,
      QueryReport::AuthorityHistory(_) => QueryKind::AuthorityHistory,
      QueryReport::NonVoterCitizens(_) => QueryKind::NonVoterCitizens,
      QueryReport::TopCandidates(_) => QueryKind::TopCandidates,
      QueryReport::Turnout(_) => QueryKind::Turnout,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn query_numbers_round_trip() {
    for kind in QueryKind::ALL {
      assert_eq!(
        QueryKind::from_number(kind.number()).expect("valid number"),
        kind
      );
    }
    assert!(QueryKind::from_number(0).is_err());
    assert!(QueryKind::from_number(7).is_err());
  }

  #[test]
  fn dashboard_decodes_camel_case_totals() {
    let stats: DashboardStats = serde_json::from_str(
      r#"{"totalParties":5,"totalCandidates":10,"totalVoters":8,
          "totalElections":9,
          "chartData":{"labels":["BJP","AAP"],"values":[3,3]}}"#,
    )
    .expect("dashboard body");
    assert_eq!(stats.total_parties, 5);
    assert_eq!(stats.chart_data.labels, ["BJP", "AAP"]);
    assert_eq!(stats.chart_data.values, [3, 3]);
  }

  #[test]
  fn voter_change_decodes_both_shapes() {
    let ok: VoterChange = serde_json::from_str(
      r#"{"voters_2010":7000,"voters_2015":9500,"change_percent":35.71}"#,
    )
    .expect("numeric body");
    assert!(ok.error.is_none());
    assert_eq!(ok.voters_2010, Some(7000));
    assert_eq!(ok.change_percent, Some(35.71));

    let missing: VoterChange =
      serde_json::from_str(r#"{"error":"Data not available"}"#)
        .expect("error body");
    assert_eq!(missing.error.as_deref(), Some("Data not available"));
    assert!(missing.voters_2010.is_none());
  }

  #[test]
  fn authority_history_tolerates_missing_years() {
    let history: AuthorityHistory = serde_json::from_str(
      r#"{"authorities":[{"name":"IEC","years":"2000,2020"},{"name":"AEC","years":null}]}"#,
    )
    .expect("history body");
    assert_eq!(history.authorities[0].years.as_deref(), Some("2000,2020"));
    assert!(history.authorities[1].years.is_none());
  }

  #[test]
  fn top_candidates_keep_backend_order() {
    let top: TopCandidates = serde_json::from_str(
      r#"{"top_candidates":[{"name":"A","vote_count":10},{"name":"B","vote_count":7}]}"#,
    )
    .expect("top body");
    let names: Vec<&str> =
      top.top_candidates.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["A", "B"]);
  }
}
