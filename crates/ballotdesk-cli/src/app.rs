//! Application state machine and event dispatcher.

use std::{
  sync::Arc,
  time::{Duration, Instant},
};

use ballotdesk_core::{
  entity::{Candidate, Election, Party, Vote, Voter},
  query::{DashboardStats, QueryKind, QueryReport},
  snapshot::Snapshot,
};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use fuzzy_matcher::{FuzzyMatcher, skim::SkimMatcherV2};
use tracing::{info, warn};

use crate::{
  client::ApiClient,
  export,
  forms::{EntityForm, FormEntity, FormMode, FormPayload},
  ui,
  voting::{VotingFocus, VotingState},
};

/// How long a transient alert stays visible.
pub const ALERT_TTL: Duration = Duration::from_secs(3);

// ─── Tabs ─────────────────────────────────────────────────────────────────────

/// The eight console tabs; exactly one is visible at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
  Dashboard,
  Parties,
  Candidates,
  Voters,
  Elections,
  Results,
  Voting,
  Queries,
}

impl Tab {
  pub const ALL: [Tab; 8] = [
    Tab::Dashboard,
    Tab::Parties,
    Tab::Candidates,
    Tab::Voters,
    Tab::Elections,
    Tab::Results,
    Tab::Voting,
    Tab::Queries,
  ];

  pub fn title(self) -> &'static str {
    match self {
      Tab::Dashboard => "Dashboard",
      Tab::Parties => "Parties",
      Tab::Candidates => "Candidates",
      Tab::Voters => "Voters",
      Tab::Elections => "Elections",
      Tab::Results => "Results",
      Tab::Voting => "Voting",
      Tab::Queries => "Queries",
    }
  }

  pub fn next(self) -> Self {
    let i = Self::ALL.iter().position(|t| *t == self).unwrap_or(0);
    Self::ALL[(i + 1) % Self::ALL.len()]
  }

  pub fn prev(self) -> Self {
    let i = Self::ALL.iter().position(|t| *t == self).unwrap_or(0);
    Self::ALL[(i + Self::ALL.len() - 1) % Self::ALL.len()]
  }

  /// Backend export type for the tab's table, where it has one.
  pub fn export_table(self) -> Option<&'static str> {
    match self {
      Tab::Parties => Some("parties"),
      Tab::Candidates => Some("candidates"),
      Tab::Voters => Some("voters"),
      Tab::Elections => Some("elections"),
      Tab::Results => Some("votes"),
      _ => None,
    }
  }
}

// ─── Alerts ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
  Success,
  Danger,
}

/// Transient status message, auto-dismissed after [`ALERT_TTL`].
#[derive(Debug, Clone)]
pub struct Alert {
  pub message: String,
  pub kind:    AlertKind,
  expires_at:  Instant,
}

/// Pending delete confirmation shown before the DELETE call.
#[derive(Debug, Clone, Copy)]
pub struct PendingDelete {
  pub entity: FormEntity,
  pub id:     i64,
}

// ─── App ──────────────────────────────────────────────────────────────────────

/// Top-level application state. Owns the one data snapshot; renderers
/// borrow it, never mutate it.
pub struct App {
  pub tab: Tab,

  /// Immutable data snapshot, replaced wholesale on reload.
  pub snapshot:  Snapshot,
  pub dashboard: Option<DashboardStats>,
  pub query:     Option<QueryReport>,

  /// The open modal form, if any.
  pub form:    Option<EntityForm>,
  /// Delete awaiting y/n confirmation, if any.
  pub confirm: Option<PendingDelete>,
  pub voting:  VotingState,

  pub alert: Option<Alert>,

  /// Filter line over the active tab's table.
  pub filter:        String,
  pub filter_active: bool,
  /// Cursor within the active tab's filtered rows.
  pub cursor: usize,

  pub client: Arc<ApiClient>,
}

impl App {
  pub fn new(client: ApiClient) -> Self {
    Self {
      tab: Tab::Dashboard,
      snapshot: Snapshot::default(),
      dashboard: None,
      query: None,
      form: None,
      confirm: None,
      voting: VotingState::default(),
      alert: None,
      filter: String::new(),
      filter_active: false,
      cursor: 0,
      client: Arc::new(client),
    }
  }

  // ── Alerts ────────────────────────────────────────────────────────────────

  pub fn alert_success(&mut self, message: impl Into<String>) {
    self.set_alert(message.into(), AlertKind::Success);
  }

  pub fn alert_danger(&mut self, message: impl Into<String>) {
    self.set_alert(message.into(), AlertKind::Danger);
  }

  fn set_alert(&mut self, message: String, kind: AlertKind) {
    self.alert = Some(Alert {
      message,
      kind,
      expires_at: Instant::now() + ALERT_TTL,
    });
  }

  /// Drop the alert once its display window has passed. Called on
  /// every tick of the event loop.
  pub fn tick(&mut self) {
    if self
      .alert
      .as_ref()
      .is_some_and(|a| Instant::now() >= a.expires_at)
    {
      self.alert = None;
    }
  }

  // ── Data loading ──────────────────────────────────────────────────────────

  /// Replace the snapshot wholesale. On failure the previous snapshot
  /// stays in place and the error surfaces as an alert, so callers
  /// never render a half-refreshed mixture.
  pub async fn reload_snapshot(&mut self) {
    match self.client.fetch_snapshot().await {
      Ok(snapshot) => {
        info!(
          parties = snapshot.parties.len(),
          votes = snapshot.votes.len(),
          "snapshot reloaded"
        );
        self.snapshot = snapshot;
        let len = self.visible_len();
        if self.cursor >= len {
          self.cursor = len.saturating_sub(1);
        }
      }
      Err(e) => {
        warn!(error = %e, "snapshot reload failed");
        self.alert_danger(e.to_string());
      }
    }
  }

  pub async fn load_dashboard(&mut self) {
    match self.client.dashboard().await {
      Ok(stats) => self.dashboard = Some(stats),
      Err(e) => {
        warn!(error = %e, "dashboard load failed");
        self.alert_danger(e.to_string());
      }
    }
  }

  /// Switch to `tab` and run its loader. Every switch re-fetches;
  /// nothing is cached as "already rendered".
  pub async fn open_tab(&mut self, tab: Tab) {
    self.tab = tab;
    self.filter.clear();
    self.filter_active = false;
    self.cursor = 0;
    match tab {
      Tab::Dashboard => self.load_dashboard().await,
      Tab::Parties
      | Tab::Candidates
      | Tab::Voters
      | Tab::Elections
      | Tab::Results => self.reload_snapshot().await,
      Tab::Voting => {
        self.reload_snapshot().await;
        self.voting.clear();
      }
      // Reports run on demand via the 1-6 keys.
      Tab::Queries => {}
    }
  }

  // ── Filtered views ────────────────────────────────────────────────────────

  fn filtered<'a, T>(
    &self,
    items: &'a [T],
    text: impl Fn(&T) -> String,
  ) -> Vec<&'a T> {
    if self.filter.is_empty() {
      return items.iter().collect();
    }
    let matcher = SkimMatcherV2::default();
    items
      .iter()
      .filter(|&item| matcher.fuzzy_match(&text(item), &self.filter).is_some())
      .collect()
  }

  pub fn filtered_parties(&self) -> Vec<&Party> {
    self.filtered(&self.snapshot.parties, |p| {
      ui::tables::party_cells(p).join(" ")
    })
  }

  pub fn filtered_candidates(&self) -> Vec<&Candidate> {
    self.filtered(&self.snapshot.candidates, |c| {
      ui::tables::candidate_cells(&self.snapshot, c).join(" ")
    })
  }

  pub fn filtered_voters(&self) -> Vec<&Voter> {
    self.filtered(&self.snapshot.voters, |v| {
      ui::tables::voter_cells(v).join(" ")
    })
  }

  pub fn filtered_elections(&self) -> Vec<&Election> {
    self.filtered(&self.snapshot.elections, |e| {
      ui::tables::election_cells(&self.snapshot, e).join(" ")
    })
  }

  pub fn filtered_votes(&self) -> Vec<&Vote> {
    self.filtered(&self.snapshot.votes, |v| {
      ui::tables::vote_cells(&self.snapshot, v).join(" ")
    })
  }

  /// Row count of the active tab's filtered table.
  pub fn visible_len(&self) -> usize {
    match self.tab {
      Tab::Parties => self.filtered_parties().len(),
      Tab::Candidates => self.filtered_candidates().len(),
      Tab::Voters => self.filtered_voters().len(),
      Tab::Elections => self.filtered_elections().len(),
      Tab::Results => self.filtered_votes().len(),
      _ => 0,
    }
  }

  // ── Key handling ──────────────────────────────────────────────────────────

  /// Process a key event. Returns `false` to quit.
  pub async fn handle_key(&mut self, key: KeyEvent) -> bool {
    // Global: Ctrl-C quits from anywhere.
    if key.modifiers.contains(KeyModifiers::CONTROL)
      && key.code == KeyCode::Char('c')
    {
      return false;
    }

    // Overlays swallow input while open.
    if self.form.is_some() {
      self.handle_form_key(key).await;
      return true;
    }
    if self.confirm.is_some() {
      self.handle_confirm_key(key).await;
      return true;
    }
    if self.filter_active {
      self.handle_filter_key(key);
      return true;
    }

    match key.code {
      KeyCode::Char('q') => return false,
      KeyCode::Tab => {
        let next = self.tab.next();
        self.open_tab(next).await;
        return true;
      }
      KeyCode::BackTab => {
        let prev = self.tab.prev();
        self.open_tab(prev).await;
        return true;
      }
      _ => {}
    }

    match self.tab {
      Tab::Dashboard => {}
      Tab::Parties
      | Tab::Candidates
      | Tab::Voters
      | Tab::Elections
      | Tab::Results => self.handle_table_key(key).await,
      Tab::Voting => self.handle_voting_key(key).await,
      Tab::Queries => {
        if let KeyCode::Char(c @ '1'..='6') = key.code {
          self.run_query(c as u8 - b'0').await;
        }
      }
    }
    true
  }

  async fn handle_table_key(&mut self, key: KeyEvent) {
    match key.code {
      KeyCode::Down | KeyCode::Char('j') => {
        let len = self.visible_len();
        if len > 0 && self.cursor + 1 < len {
          self.cursor += 1;
        }
      }
      KeyCode::Up | KeyCode::Char('k') => {
        if self.cursor > 0 {
          self.cursor -= 1;
        }
      }
      KeyCode::Char('/') => {
        self.filter_active = true;
        self.filter.clear();
        self.cursor = 0;
      }
      KeyCode::Char('a') => self.open_add(),
      KeyCode::Char('e') => self.open_edit(),
      KeyCode::Char('d') => self.request_delete(),
      KeyCode::Char('x') => self.export_current().await,
      KeyCode::Char('g') if self.tab == Tab::Results => self.generate_report(),
      _ => {}
    }
  }

  fn handle_filter_key(&mut self, key: KeyEvent) {
    match key.code {
      KeyCode::Esc => {
        self.filter_active = false;
        self.filter.clear();
        self.cursor = 0;
      }
      KeyCode::Enter => {
        self.filter_active = false;
        self.cursor = 0;
      }
      KeyCode::Backspace => {
        self.filter.pop();
        self.cursor = 0;
      }
      KeyCode::Char(c) => {
        self.filter.push(c);
        self.cursor = 0;
      }
      _ => {}
    }
  }

  async fn handle_form_key(&mut self, key: KeyEvent) {
    match key.code {
      KeyCode::Enter => self.submit_form().await,
      KeyCode::Esc => self.form = None,
      code => {
        let Some(form) = self.form.as_mut() else { return };
        match code {
          KeyCode::Tab | KeyCode::Down => form.focus_next(),
          KeyCode::BackTab | KeyCode::Up => form.focus_prev(),
          KeyCode::Left => form.cycle(-1),
          KeyCode::Right => form.cycle(1),
          KeyCode::Backspace => form.backspace(),
          KeyCode::Char(c) => form.input(c),
          _ => {}
        }
      }
    }
  }

  async fn handle_confirm_key(&mut self, key: KeyEvent) {
    match key.code {
      KeyCode::Char('y') | KeyCode::Char('Y') => {
        if let Some(pending) = self.confirm.take() {
          self.delete_entity(pending).await;
        }
      }
      KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
        self.confirm = None;
      }
      _ => {}
    }
  }

  async fn handle_voting_key(&mut self, key: KeyEvent) {
    match key.code {
      KeyCode::Right | KeyCode::Char('l') => {
        self.voting.focus = self.voting.focus.next();
      }
      KeyCode::Left | KeyCode::Char('h') => {
        self.voting.focus = self.voting.focus.prev();
      }
      KeyCode::Down | KeyCode::Char('j') => self.voting_move(1),
      KeyCode::Up | KeyCode::Char('k') => self.voting_move(-1),
      KeyCode::Char(' ') | KeyCode::Enter => self.voting_select(),
      KeyCode::Char('s') => self.submit_vote().await,
      _ => {}
    }
  }

  // ── Forms ─────────────────────────────────────────────────────────────────

  fn open_add(&mut self) {
    let form = match self.tab {
      Tab::Parties => EntityForm::add_party(),
      Tab::Candidates => EntityForm::add_candidate(&self.snapshot),
      Tab::Voters => EntityForm::add_voter(&self.snapshot),
      Tab::Elections => EntityForm::add_election(&self.snapshot),
      Tab::Results => EntityForm::add_vote(&self.snapshot, &export::today()),
      _ => return,
    };
    self.form = Some(form);
  }

  fn open_edit(&mut self) {
    let form = match self.tab {
      Tab::Parties => self
        .filtered_parties()
        .get(self.cursor)
        .map(|p| EntityForm::edit_party(p)),
      Tab::Candidates => self
        .filtered_candidates()
        .get(self.cursor)
        .map(|c| EntityForm::edit_candidate(&self.snapshot, c)),
      Tab::Voters => self
        .filtered_voters()
        .get(self.cursor)
        .map(|v| EntityForm::edit_voter(&self.snapshot, v)),
      Tab::Elections => self
        .filtered_elections()
        .get(self.cursor)
        .map(|e| EntityForm::edit_election(&self.snapshot, e)),
      // Votes are add-only.
      _ => None,
    };
    if form.is_some() {
      self.form = form;
    }
  }

  async fn submit_form(&mut self) {
    let Some(form) = self.form.as_ref() else { return };
    let entity = form.entity;
    let mode = form.mode;
    let marshalled = form.marshal();

    let payload = match marshalled {
      Ok(payload) => payload,
      Err(message) => {
        if let Some(form) = self.form.as_mut() {
          form.error = Some(message);
        }
        return;
      }
    };

    let result = match (&payload, mode) {
      (FormPayload::Party(body), FormMode::Adding) => {
        self.client.create_party(body).await.map(|_| ())
      }
      (FormPayload::Party(body), FormMode::Editing(id)) => {
        self.client.update_party(id, body).await.map(|_| ())
      }
      (FormPayload::Candidate(body), FormMode::Adding) => {
        self.client.create_candidate(body).await.map(|_| ())
      }
      (FormPayload::Candidate(body), FormMode::Editing(id)) => {
        self.client.update_candidate(id, body).await.map(|_| ())
      }
      (FormPayload::Voter(body), FormMode::Adding) => {
        self.client.create_voter(body).await.map(|_| ())
      }
      (FormPayload::Voter(body), FormMode::Editing(id)) => {
        self.client.update_voter(id, body).await.map(|_| ())
      }
      (FormPayload::Election(body), FormMode::Adding) => {
        self.client.create_election(body).await.map(|_| ())
      }
      (FormPayload::Election(body), FormMode::Editing(id)) => {
        self.client.update_election(id, body).await.map(|_| ())
      }
      // Vote records are add-only regardless of mode.
      (FormPayload::Vote(body), _) => {
        self.client.create_vote(body).await.map(|_| ())
      }
    };

    match result {
      Ok(()) => {
        info!(entity = entity.noun(), "write succeeded");
        self.form = None;
        self.alert_success(success_message(entity, mode));
        self.reload_snapshot().await;
        if entity != FormEntity::Vote {
          self.load_dashboard().await;
        }
      }
      Err(e) => {
        if let Some(form) = self.form.as_mut() {
          form.error = Some(e.to_string());
        }
      }
    }
  }

  // ── Deletes ───────────────────────────────────────────────────────────────

  fn request_delete(&mut self) {
    let entity = match self.tab {
      Tab::Parties => FormEntity::Party,
      Tab::Candidates => FormEntity::Candidate,
      Tab::Voters => FormEntity::Voter,
      Tab::Elections => FormEntity::Election,
      Tab::Results => FormEntity::Vote,
      _ => return,
    };
    let id = match self.tab {
      Tab::Parties => self.filtered_parties().get(self.cursor).map(|p| p.id),
      Tab::Candidates => {
        self.filtered_candidates().get(self.cursor).map(|c| c.id)
      }
      Tab::Voters => self.filtered_voters().get(self.cursor).map(|v| v.id),
      Tab::Elections => self.filtered_elections().get(self.cursor).map(|e| e.id),
      Tab::Results => self.filtered_votes().get(self.cursor).map(|v| v.id),
      _ => None,
    };
    if let Some(id) = id {
      self.confirm = Some(PendingDelete { entity, id });
    }
  }

  async fn delete_entity(&mut self, pending: PendingDelete) {
    let result = match pending.entity {
      FormEntity::Party => self
        .client
        .delete_party(pending.id)
        .await
        .map(|_| "Party deleted successfully!"),
      FormEntity::Candidate => self
        .client
        .delete_candidate(pending.id)
        .await
        .map(|_| "Candidate deleted successfully!"),
      FormEntity::Voter => self
        .client
        .delete_voter(pending.id)
        .await
        .map(|_| "Voter deleted successfully!"),
      FormEntity::Election => self
        .client
        .delete_election(pending.id)
        .await
        .map(|_| "Election deleted successfully!"),
      FormEntity::Vote => self
        .client
        .delete_vote(pending.id)
        .await
        .map(|_| "Vote deleted successfully!"),
    };

    match result {
      Ok(message) => {
        info!(entity = pending.entity.noun(), id = pending.id, "deleted");
        // Delete notices always use the danger styling.
        self.alert_danger(message);
        self.reload_snapshot().await;
        if pending.entity != FormEntity::Vote {
          self.load_dashboard().await;
        }
      }
      Err(e) => self.alert_danger(e.to_string()),
    }
  }

  // ── Voting ────────────────────────────────────────────────────────────────

  fn voting_move(&mut self, delta: isize) {
    let len = match self.voting.focus {
      VotingFocus::Elections => self.snapshot.elections.len(),
      VotingFocus::Candidates => self
        .voting
        .election
        .map(|id| self.snapshot.candidates_for_election(id).len())
        .unwrap_or(0),
      VotingFocus::Voters => self.snapshot.voters.len(),
    };
    if len == 0 {
      return;
    }
    let cursor = match self.voting.focus {
      VotingFocus::Elections => &mut self.voting.election_cursor,
      VotingFocus::Candidates => &mut self.voting.candidate_cursor,
      VotingFocus::Voters => &mut self.voting.voter_cursor,
    };
    let next = (*cursor as isize + delta).clamp(0, len as isize - 1);
    *cursor = next as usize;
  }

  fn voting_select(&mut self) {
    match self.voting.focus {
      VotingFocus::Elections => {
        let id = self
          .snapshot
          .elections
          .get(self.voting.election_cursor)
          .map(|e| e.id);
        if let Some(id) = id {
          self.voting.choose_election(id);
        }
      }
      VotingFocus::Candidates => {
        let Some(election_id) = self.voting.election else { return };
        let id = self
          .snapshot
          .candidates_for_election(election_id)
          .get(self.voting.candidate_cursor)
          .map(|c| c.id);
        if let Some(id) = id {
          self.voting.candidate = Some(id);
        }
      }
      VotingFocus::Voters => {
        let id = self
          .snapshot
          .voters
          .get(self.voting.voter_cursor)
          .map(|v| v.id);
        if let Some(id) = id {
          self.voting.voter = Some(id);
        }
      }
    }
  }

  async fn submit_vote(&mut self) {
    match self.voting.marshal(&export::today()) {
      Ok(vote) => match self.client.create_vote(&vote).await {
        Ok(_) => {
          info!(
            election = vote.election_id,
            candidate = vote.candidate_id,
            "vote cast"
          );
          self.alert_success("Vote cast successfully! 🗳️");
          self.voting.clear();
          self.reload_snapshot().await;
        }
        Err(e) => self.alert_danger(e.to_string()),
      },
      Err(message) => self.alert_danger(message),
    }
  }

  // ── Reports & export ──────────────────────────────────────────────────────

  async fn run_query(&mut self, n: u8) {
    let kind = match QueryKind::from_number(n) {
      Ok(kind) => kind,
      Err(e) => {
        self.alert_danger(e.to_string());
        return;
      }
    };
    match self.client.run_query(kind).await {
      Ok(report) => self.query = Some(report),
      Err(e) => {
        self.query = None;
        self.alert_danger(format!("Error executing query: {e}"));
      }
    }
  }

  async fn export_current(&mut self) {
    let Some(table) = self.tab.export_table() else { return };
    match self.client.export(table).await {
      Ok(data) => match export::write_export(table, &data) {
        Ok(path) => self.alert_success(format!("Exported to {}", path.display())),
        Err(e) => self.alert_danger(e.to_string()),
      },
      Err(e) => {
        warn!(table, error = %e, "export failed");
        self.alert_danger(e.to_string());
      }
    }
  }

  fn generate_report(&mut self) {
    match export::write_results_report(&self.snapshot) {
      Ok(_) => self.alert_success("Results report generated and downloaded!"),
      Err(e) => self.alert_danger(e.to_string()),
    }
  }
}

fn success_message(entity: FormEntity, mode: FormMode) -> &'static str {
  match (entity, mode) {
    (FormEntity::Party, FormMode::Adding) => "Party added successfully!",
    (FormEntity::Party, FormMode::Editing(_)) => "Party updated successfully!",
    (FormEntity::Candidate, FormMode::Adding) => "Candidate added successfully!",
    (FormEntity::Candidate, FormMode::Editing(_)) => {
      "Candidate updated successfully!"
    }
    (FormEntity::Voter, FormMode::Adding) => "Voter registered successfully!",
    (FormEntity::Voter, FormMode::Editing(_)) => "Voter updated successfully!",
    (FormEntity::Election, FormMode::Adding) => "Election created successfully!",
    (FormEntity::Election, FormMode::Editing(_)) => {
      "Election updated successfully!"
    }
    (FormEntity::Vote, _) => "Vote record added successfully!",
  }
}

#[cfg(test)]
mod tests {
  use ballotdesk_core::entity::Party;

  use crate::client::ApiConfig;

  use super::*;

  fn app() -> App {
    let client = ApiClient::new(ApiConfig {
      // Nothing listens here; requests fail fast in tests.
      base_url: "http://127.0.0.1:1".to_string(),
    })
    .expect("client");
    App::new(client)
  }

  fn parties() -> Vec<Party> {
    vec![
      Party { id: 1, name: "BJP".into(), symbol: "Lotus".into(), candidate_count: 2 },
      Party { id: 3, name: "Congress".into(), symbol: "Hand".into(), candidate_count: 1 },
      Party { id: 4, name: "AAP".into(), symbol: "Broom".into(), candidate_count: 0 },
    ]
  }

  #[test]
  fn tab_cycle_visits_every_panel_once() {
    let mut tab = Tab::Dashboard;
    let mut seen = Vec::new();
    for _ in 0..Tab::ALL.len() {
      seen.push(tab);
      tab = tab.next();
    }
    assert_eq!(tab, Tab::Dashboard);
    assert_eq!(seen, Tab::ALL);
    assert_eq!(Tab::Dashboard.prev(), Tab::Queries);
  }

  #[test]
  fn export_tables_cover_the_five_collections() {
    assert_eq!(Tab::Parties.export_table(), Some("parties"));
    assert_eq!(Tab::Results.export_table(), Some("votes"));
    assert_eq!(Tab::Dashboard.export_table(), None);
    assert_eq!(Tab::Queries.export_table(), None);
  }

  #[test]
  fn empty_filter_shows_every_row() {
    let mut app = app();
    app.snapshot.parties = parties();
    app.tab = Tab::Parties;
    assert_eq!(app.filtered_parties().len(), 3);
    assert_eq!(app.visible_len(), 3);
  }

  #[test]
  fn filter_narrows_rows_by_cell_text() {
    let mut app = app();
    app.snapshot.parties = parties();
    app.tab = Tab::Parties;
    app.filter = "congress".to_string();
    let visible = app.filtered_parties();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].name, "Congress");
  }

  #[test]
  fn alert_survives_an_immediate_tick_only() {
    let mut app = app();
    app.alert_success("saved");
    app.tick();
    assert!(app.alert.is_some());

    // Force expiry and confirm the next tick clears it.
    if let Some(alert) = app.alert.as_mut() {
      alert.expires_at = Instant::now() - Duration::from_millis(1);
    }
    app.tick();
    assert!(app.alert.is_none());
  }

  #[tokio::test]
  async fn failed_reload_keeps_the_previous_snapshot() {
    let mut app = app();
    app.snapshot.parties = parties();

    app.reload_snapshot().await;

    assert_eq!(app.snapshot.parties.len(), 3, "stale snapshot must survive");
    assert!(app.alert.is_some(), "failure surfaces as an alert");
  }

  #[tokio::test]
  async fn vote_submit_with_missing_selection_fails_locally() {
    let mut app = app();
    app.voting.election = Some(101);
    app.voting.voter = Some(2);
    // No candidate chosen: rejected before any request.
    app.submit_vote().await;
    let alert = app.alert.as_ref().expect("validation alert");
    assert_eq!(alert.kind, AlertKind::Danger);
    assert_eq!(alert.message, "Please select election, voter, and candidate!");
  }
}
