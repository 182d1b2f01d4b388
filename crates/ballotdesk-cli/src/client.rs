//! Async HTTP client wrapping the election-records JSON API.

use ballotdesk_core::{
  entity::{Authority, Candidate, Election, Party, Vote, Voter},
  payload::{Ack, Created, NewCandidate, NewElection, NewParty, NewVote, NewVoter},
  query::{DashboardStats, QueryKind, QueryReport},
  snapshot::Snapshot,
};
use reqwest::{Client, Method, StatusCode};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use tracing::{debug, warn};

/// Failure modes of one API call. Every request is a single attempt
/// (no retries, no client-imposed timeout) reported to the caller.
#[derive(Debug, thiserror::Error)]
pub enum RequestError {
  /// The transport failed, or a success body did not decode.
  #[error("{0}")]
  Transport(#[from] reqwest::Error),

  /// The backend answered non-2xx with a structured message.
  #[error("{message}")]
  Backend {
    status:  StatusCode,
    message: String,
  },
}

/// Shape of the backend's non-2xx bodies.
#[derive(Deserialize)]
struct ErrorBody {
  #[serde(default)]
  error: Option<String>,
}

/// Connection settings for the backend.
#[derive(Debug, Clone)]
pub struct ApiConfig {
  pub base_url: String,
}

/// Async client for the ballotdesk REST backend.
///
/// Cheap to clone — the inner [`reqwest::Client`] is `Arc`-based.
#[derive(Clone)]
pub struct ApiClient {
  client: Client,
  config: ApiConfig,
}

impl ApiClient {
  pub fn new(config: ApiConfig) -> Result<Self, RequestError> {
    let client = Client::builder().build()?;
    Ok(Self { client, config })
  }

  fn url(&self, path: &str) -> String {
    format!(
      "{}/api{}",
      self.config.base_url.trim_end_matches('/'),
      path
    )
  }

  /// Single-attempt JSON request. Non-2xx responses are normalized
  /// into [`RequestError::Backend`] using the body's `error` field,
  /// with a generic message when the body carries none.
  async fn request<T: DeserializeOwned>(
    &self,
    method: Method,
    path: &str,
    body: Option<&impl Serialize>,
  ) -> Result<T, RequestError> {
    let url = self.url(path);
    debug!(%method, %url, "api request");

    let mut req = self.client.request(method.clone(), url.as_str());
    if let Some(body) = body {
      req = req.json(body);
    }

    let resp = req.send().await?;
    let status = resp.status();
    if !status.is_success() {
      let message = resp
        .json::<ErrorBody>()
        .await
        .ok()
        .and_then(|b| b.error)
        .unwrap_or_else(|| "Request failed".to_string());
      warn!(%method, %url, %status, %message, "backend error");
      return Err(RequestError::Backend { status, message });
    }

    Ok(resp.json().await?)
  }

  async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, RequestError> {
    self.request(Method::GET, path, None::<&()>).await
  }

  // ── Collections ───────────────────────────────────────────────────────────

  /// `GET /api/parties`
  pub async fn list_parties(&self) -> Result<Vec<Party>, RequestError> {
    self.get("/parties").await
  }

  /// `GET /api/candidates`
  pub async fn list_candidates(&self) -> Result<Vec<Candidate>, RequestError> {
    self.get("/candidates").await
  }

  /// `GET /api/voters`
  pub async fn list_voters(&self) -> Result<Vec<Voter>, RequestError> {
    self.get("/voters").await
  }

  /// `GET /api/elections`
  pub async fn list_elections(&self) -> Result<Vec<Election>, RequestError> {
    self.get("/elections").await
  }

  /// `GET /api/votes`
  pub async fn list_votes(&self) -> Result<Vec<Vote>, RequestError> {
    self.get("/votes").await
  }

  /// `GET /api/authorities`
  pub async fn list_authorities(&self) -> Result<Vec<Authority>, RequestError> {
    self.get("/authorities").await
  }

  /// Fetch all six collections as one snapshot. The first failure
  /// aborts the remaining fetches and the caller keeps whatever
  /// snapshot it already had; nothing is half-applied.
  pub async fn fetch_snapshot(&self) -> Result<Snapshot, RequestError> {
    Ok(Snapshot {
      parties:     self.list_parties().await?,
      candidates:  self.list_candidates().await?,
      voters:      self.list_voters().await?,
      elections:   self.list_elections().await?,
      votes:       self.list_votes().await?,
      authorities: self.list_authorities().await?,
    })
  }

  // ── Writes ────────────────────────────────────────────────────────────────

  pub async fn create_party(&self, body: &NewParty) -> Result<Created, RequestError> {
    self.request(Method::POST, "/parties", Some(body)).await
  }

  pub async fn update_party(&self, id: i64, body: &NewParty) -> Result<Ack, RequestError> {
    self.request(Method::PUT, &format!("/parties/{id}"), Some(body)).await
  }

  pub async fn delete_party(&self, id: i64) -> Result<Ack, RequestError> {
    self.request(Method::DELETE, &format!("/parties/{id}"), None::<&()>).await
  }

  pub async fn create_candidate(&self, body: &NewCandidate) -> Result<Created, RequestError> {
    self.request(Method::POST, "/candidates", Some(body)).await
  }

  pub async fn update_candidate(&self, id: i64, body: &NewCandidate) -> Result<Ack, RequestError> {
    self.request(Method::PUT, &format!("/candidates/{id}"), Some(body)).await
  }

  pub async fn delete_candidate(&self, id: i64) -> Result<Ack, RequestError> {
    self.request(Method::DELETE, &format!("/candidates/{id}"), None::<&()>).await
  }

  pub async fn create_voter(&self, body: &NewVoter) -> Result<Created, RequestError> {
    self.request(Method::POST, "/voters", Some(body)).await
  }

  pub async fn update_voter(&self, id: i64, body: &NewVoter) -> Result<Ack, RequestError> {
    self.request(Method::PUT, &format!("/voters/{id}"), Some(body)).await
  }

  pub async fn delete_voter(&self, id: i64) -> Result<Ack, RequestError> {
    self.request(Method::DELETE, &format!("/voters/{id}"), None::<&()>).await
  }

  pub async fn create_election(&self, body: &NewElection) -> Result<Created, RequestError> {
    self.request(Method::POST, "/elections", Some(body)).await
  }

  pub async fn update_election(&self, id: i64, body: &NewElection) -> Result<Ack, RequestError> {
    self.request(Method::PUT, &format!("/elections/{id}"), Some(body)).await
  }

  pub async fn delete_election(&self, id: i64) -> Result<Ack, RequestError> {
    self.request(Method::DELETE, &format!("/elections/{id}"), None::<&()>).await
  }

  pub async fn create_vote(&self, body: &NewVote) -> Result<Created, RequestError> {
    self.request(Method::POST, "/votes", Some(body)).await
  }

  pub async fn delete_vote(&self, id: i64) -> Result<Ack, RequestError> {
    self.request(Method::DELETE, &format!("/votes/{id}"), None::<&()>).await
  }

  // ── Reports ───────────────────────────────────────────────────────────────

  /// `GET /api/dashboard`
  pub async fn dashboard(&self) -> Result<DashboardStats, RequestError> {
    self.get("/dashboard").await
  }

  /// `GET /api/query/:n`, decoded into the report shape for `kind`.
  pub async fn run_query(&self, kind: QueryKind) -> Result<QueryReport, RequestError> {
    let path = format!("/query/{}", kind.number());
    Ok(match kind {
      QueryKind::PartyMostVotes => {
        QueryReport::PartyMostVotes(self.get(&path).await?)
      }
      QueryKind::VoterChange => QueryReport::VoterChange(self.get(&path).await?),
      QueryKind::AuthorityHistory => {
        QueryReport::AuthorityHistory(self.get(&path).await?)
      }
      QueryKind::NonVoterCitizens => {
        QueryReport::NonVoterCitizens(self.get(&path).await?)
      }
      QueryKind::TopCandidates => {
        QueryReport::TopCandidates(self.get(&path).await?)
      }
      QueryKind::Turnout => QueryReport::Turnout(self.get(&path).await?),
    })
  }

  /// `GET /api/export/:type`: the raw table payload, written to disk
  /// verbatim by the caller.
  pub async fn export(&self, table: &str) -> Result<serde_json::Value, RequestError> {
    self.get(&format!("/export/{table}")).await
  }
}
