//! Modal form state for entity create and update.
//!
//! Each open dialog is one [`EntityForm`] value owning its own mode,
//! field list, focus cursor, and inline error; there is no shared
//! modal singleton. Submitting marshals the fields into the typed
//! write payload, and the POST/PUT choice is keyed on the mode alone.

use ballotdesk_core::{
  entity::{Candidate, Election, Party, Sex, Voter},
  payload::{NewCandidate, NewElection, NewParty, NewVote, NewVoter},
  snapshot::Snapshot,
};

// ─── Field model ──────────────────────────────────────────────────────────────

/// Whether a form creates a new row or updates an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
  Adding,
  Editing(i64),
}

/// Which entity a form (or pending delete) targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormEntity {
  Party,
  Candidate,
  Voter,
  Election,
  Vote,
}

impl FormEntity {
  /// Lower-case noun for confirmation prompts.
  pub fn noun(self) -> &'static str {
    match self {
      FormEntity::Party => "party",
      FormEntity::Candidate => "candidate",
      FormEntity::Voter => "voter",
      FormEntity::Election => "election",
      FormEntity::Vote => "vote",
    }
  }
}

/// One selectable option in a select field.
#[derive(Debug, Clone)]
pub struct SelectOption {
  /// Value submitted to the backend (an id, or a sex code).
  pub value: String,
  pub label: String,
}

#[derive(Debug, Clone)]
pub enum FieldKind {
  Text(String),
  Select {
    options: Vec<SelectOption>,
    chosen:  Option<usize>,
  },
}

#[derive(Debug, Clone)]
pub struct Field {
  pub label: &'static str,
  pub kind:  FieldKind,
}

fn text(label: &'static str, value: impl Into<String>) -> Field {
  Field {
    label,
    kind: FieldKind::Text(value.into()),
  }
}

fn select(
  label: &'static str,
  options: Vec<SelectOption>,
  current: Option<&str>,
) -> Field {
  let chosen =
    current.and_then(|value| options.iter().position(|o| o.value == value));
  Field {
    label,
    kind: FieldKind::Select { options, chosen },
  }
}

// ─── Option lists ─────────────────────────────────────────────────────────────

fn party_options(snapshot: &Snapshot) -> Vec<SelectOption> {
  snapshot
    .parties
    .iter()
    .map(|p| SelectOption {
      value: p.id.to_string(),
      label: p.name.clone(),
    })
    .collect()
}

fn election_options(snapshot: &Snapshot) -> Vec<SelectOption> {
  snapshot
    .elections
    .iter()
    .map(|e| SelectOption {
      value: e.id.to_string(),
      label: format!("Election {} ({})", e.id, e.result_date),
    })
    .collect()
}

fn authority_options(snapshot: &Snapshot) -> Vec<SelectOption> {
  snapshot
    .authorities
    .iter()
    .map(|a| SelectOption {
      value: a.id.to_string(),
      label: format!("{} ({})", a.name, a.chief),
    })
    .collect()
}

fn voter_options(snapshot: &Snapshot) -> Vec<SelectOption> {
  snapshot
    .voters
    .iter()
    .map(|v| SelectOption {
      value: v.id.to_string(),
      label: format!("{} (ID: {})", v.name, v.id),
    })
    .collect()
}

fn candidate_options(snapshot: &Snapshot) -> Vec<SelectOption> {
  snapshot
    .candidates
    .iter()
    .map(|c| SelectOption {
      value: c.id.to_string(),
      label: format!("{} ({})", c.name, snapshot.party_name(c.party_id)),
    })
    .collect()
}

fn sex_options() -> Vec<SelectOption> {
  vec![
    SelectOption { value: "M".into(), label: "Male".into() },
    SelectOption { value: "F".into(), label: "Female".into() },
  ]
}

// ─── Form ─────────────────────────────────────────────────────────────────────

/// A modal dialog holding its own state, one instance per open form.
#[derive(Debug, Clone)]
pub struct EntityForm {
  pub entity: FormEntity,
  pub mode:   FormMode,
  pub fields: Vec<Field>,
  pub focus:  usize,
  /// Inline error pinned under the fields until the next submit.
  pub error:  Option<String>,
}

impl EntityForm {
  fn new(entity: FormEntity, mode: FormMode, fields: Vec<Field>) -> Self {
    Self { entity, mode, fields, focus: 0, error: None }
  }

  // ── Constructors ──────────────────────────────────────────────────────────

  pub fn add_party() -> Self {
    Self::new(
      FormEntity::Party,
      FormMode::Adding,
      vec![text("Name", ""), text("Symbol", "")],
    )
  }

  pub fn edit_party(party: &Party) -> Self {
    Self::new(
      FormEntity::Party,
      FormMode::Editing(party.id),
      vec![
        text("Name", party.name.clone()),
        text("Symbol", party.symbol.clone()),
      ],
    )
  }

  pub fn add_candidate(snapshot: &Snapshot) -> Self {
    Self::new(
      FormEntity::Candidate,
      FormMode::Adding,
      vec![
        text("Name", ""),
        select("Party", party_options(snapshot), None),
        select("Election", election_options(snapshot), None),
      ],
    )
  }

  pub fn edit_candidate(snapshot: &Snapshot, candidate: &Candidate) -> Self {
    Self::new(
      FormEntity::Candidate,
      FormMode::Editing(candidate.id),
      vec![
        text("Name", candidate.name.clone()),
        select(
          "Party",
          party_options(snapshot),
          Some(&candidate.party_id.to_string()),
        ),
        select(
          "Election",
          election_options(snapshot),
          Some(&candidate.election_id.to_string()),
        ),
      ],
    )
  }

  pub fn add_voter(snapshot: &Snapshot) -> Self {
    Self::new(
      FormEntity::Voter,
      FormMode::Adding,
      vec![
        text("Name", ""),
        select("Sex", sex_options(), None),
        select("Authority", authority_options(snapshot), None),
        text("Aadhaar", ""),
      ],
    )
  }

  pub fn edit_voter(snapshot: &Snapshot, voter: &Voter) -> Self {
    let sex = match voter.sex {
      Sex::M => "M",
      Sex::F => "F",
    };
    Self::new(
      FormEntity::Voter,
      FormMode::Editing(voter.id),
      vec![
        text("Name", voter.name.clone()),
        select("Sex", sex_options(), Some(sex)),
        select(
          "Authority",
          authority_options(snapshot),
          Some(&voter.authority_id.to_string()),
        ),
        text("Aadhaar", voter.aadhaar.to_string()),
      ],
    )
  }

  pub fn add_election(snapshot: &Snapshot) -> Self {
    Self::new(
      FormEntity::Election,
      FormMode::Adding,
      vec![
        text("Expected Voters", ""),
        text("Participants", ""),
        text("Result Date", ""),
        text("Ruling (years)", ""),
        select("Authority", authority_options(snapshot), None),
      ],
    )
  }

  pub fn edit_election(snapshot: &Snapshot, election: &Election) -> Self {
    Self::new(
      FormEntity::Election,
      FormMode::Editing(election.id),
      vec![
        text("Expected Voters", election.voters.to_string()),
        text("Participants", election.participants.to_string()),
        text("Result Date", election.result_date.clone()),
        text("Ruling (years)", election.ruling.clone()),
        select(
          "Authority",
          authority_options(snapshot),
          Some(&election.authority_id.to_string()),
        ),
      ],
    )
  }

  /// Vote records are add-only; `today` pre-fills the date field.
  pub fn add_vote(snapshot: &Snapshot, today: &str) -> Self {
    Self::new(
      FormEntity::Vote,
      FormMode::Adding,
      vec![
        select("Candidate", candidate_options(snapshot), None),
        text("Date", today),
        select("Election", election_options(snapshot), None),
        select("Voter", voter_options(snapshot), None),
      ],
    )
  }

  // ── Display ───────────────────────────────────────────────────────────────

  pub fn title(&self) -> &'static str {
    match (self.entity, self.mode) {
      (FormEntity::Party, FormMode::Adding) => "Add New Party",
      (FormEntity::Party, FormMode::Editing(_)) => "Edit Party",
      (FormEntity::Candidate, FormMode::Adding) => "Add New Candidate",
      (FormEntity::Candidate, FormMode::Editing(_)) => "Edit Candidate",
      (FormEntity::Voter, FormMode::Adding) => "Register New Voter",
      (FormEntity::Voter, FormMode::Editing(_)) => "Edit Voter",
      (FormEntity::Election, FormMode::Adding) => "Create New Election",
      (FormEntity::Election, FormMode::Editing(_)) => "Edit Election",
      (FormEntity::Vote, _) => "Add Vote Record",
    }
  }

  // ── Editing ───────────────────────────────────────────────────────────────

  pub fn focus_next(&mut self) {
    if !self.fields.is_empty() {
      self.focus = (self.focus + 1) % self.fields.len();
    }
  }

  pub fn focus_prev(&mut self) {
    if !self.fields.is_empty() {
      self.focus = self.focus.checked_sub(1).unwrap_or(self.fields.len() - 1);
    }
  }

  /// Append a character to the focused text field.
  pub fn input(&mut self, c: char) {
    if let Some(Field { kind: FieldKind::Text(value), .. }) =
      self.fields.get_mut(self.focus)
    {
      value.push(c);
    }
  }

  pub fn backspace(&mut self) {
    if let Some(Field { kind: FieldKind::Text(value), .. }) =
      self.fields.get_mut(self.focus)
    {
      value.pop();
    }
  }

  /// Step the focused select field through its options.
  pub fn cycle(&mut self, delta: isize) {
    if let Some(Field { kind: FieldKind::Select { options, chosen }, .. }) =
      self.fields.get_mut(self.focus)
    {
      if options.is_empty() {
        return;
      }
      let len = options.len() as isize;
      let current = chosen.map(|i| i as isize).unwrap_or(-1);
      let next = (current + delta).rem_euclid(len);
      *chosen = Some(next as usize);
    }
  }

  // ── Marshalling ───────────────────────────────────────────────────────────

  /// Read the fields into a typed payload. Text fields must be
  /// non-empty, numeric fields must parse as integers, and selects
  /// must have a choice; failures surface as a local validation error
  /// and no request is made.
  pub fn marshal(&self) -> Result<FormPayload, String> {
    match self.entity {
      FormEntity::Party => Ok(FormPayload::Party(NewParty {
        name:   self.required_text(0)?,
        symbol: self.required_text(1)?,
      })),
      FormEntity::Candidate => Ok(FormPayload::Candidate(NewCandidate {
        name:        self.required_text(0)?,
        party_id:    self.select_id(1)?,
        election_id: self.select_id(2)?,
      })),
      FormEntity::Voter => Ok(FormPayload::Voter(NewVoter {
        name:         self.required_text(0)?,
        sex:          self.select_sex(1)?,
        authority_id: self.select_id(2)?,
        aadhaar:      self.int_text(3)?,
      })),
      FormEntity::Election => Ok(FormPayload::Election(NewElection {
        voters:       self.int_text(0)?,
        participants: self.int_text(1)?,
        result_date:  self.required_text(2)?,
        ruling:       self.required_text(3)?,
        authority_id: self.select_id(4)?,
      })),
      FormEntity::Vote => Ok(FormPayload::Vote(NewVote {
        candidate_id: self.select_id(0)?,
        date:         self.required_text(1)?,
        election_id:  self.select_id(2)?,
        voter_id:     self.select_id(3)?,
      })),
    }
  }

  fn field(&self, index: usize) -> Result<&Field, String> {
    self.fields.get(index).ok_or_else(|| "Missing field".to_string())
  }

  fn required_text(&self, index: usize) -> Result<String, String> {
    let field = self.field(index)?;
    match &field.kind {
      FieldKind::Text(value) if !value.trim().is_empty() => {
        Ok(value.trim().to_string())
      }
      FieldKind::Text(_) => Err(format!("{} is required", field.label)),
      FieldKind::Select { .. } => Err(format!("{} is required", field.label)),
    }
  }

  fn int_text(&self, index: usize) -> Result<i64, String> {
    let field = self.field(index)?;
    let raw = self.required_text(index)?;
    raw
      .parse::<i64>()
      .map_err(|_| format!("{} must be a number", field.label))
  }

  fn selected(&self, index: usize) -> Result<&SelectOption, String> {
    let field = self.field(index)?;
    match &field.kind {
      FieldKind::Select { options, chosen } => chosen
        .and_then(|i| options.get(i))
        .ok_or_else(|| format!("Please select a {}", field.label.to_lowercase())),
      FieldKind::Text(_) => Err(format!("Please select a {}", field.label)),
    }
  }

  fn select_id(&self, index: usize) -> Result<i64, String> {
    let field = self.field(index)?;
    self
      .selected(index)?
      .value
      .parse::<i64>()
      .map_err(|_| format!("{} must be a number", field.label))
  }

  fn select_sex(&self, index: usize) -> Result<Sex, String> {
    match self.selected(index)?.value.as_str() {
      "M" => Ok(Sex::M),
      "F" => Ok(Sex::F),
      other => Err(format!("Unknown sex code: {other}")),
    }
  }
}

/// A marshalled write, ready for the API client.
#[derive(Debug, Clone, PartialEq)]
pub enum FormPayload {
  Party(NewParty),
  Candidate(NewCandidate),
  Voter(NewVoter),
  Election(NewElection),
  Vote(NewVote),
}

#[cfg(test)]
mod tests {
  use ballotdesk_core::entity::{Authority, Party};

  use super::*;

  fn snapshot() -> Snapshot {
    Snapshot {
      parties: vec![
        Party { id: 1, name: "BJP".into(), symbol: "Lotus".into(), candidate_count: 0 },
        Party { id: 4, name: "AAP".into(), symbol: "Broom".into(), candidate_count: 0 },
      ],
      candidates: vec![Candidate {
        id: 7,
        name: "Vikram".into(),
        party_id: 1,
        election_id: 101,
        party_name: None,
      }],
      voters: vec![Voter {
        id: 2,
        name: "Ram".into(),
        sex: Sex::M,
        authority_id: 20,
        aadhaar: 1734,
      }],
      elections: vec![Election {
        id: 101,
        voters: 1000,
        participants: 6,
        result_date: "2019-03-22".into(),
        ruling: "5".into(),
        authority_id: 10,
        authority_name: None,
      }],
      votes: Vec::new(),
      authorities: vec![
        Authority {
          id: 10,
          name: "IEC".into(),
          chief: "Birla".into(),
          experience: "Y".into(),
          established: "1998-08-15".into(),
        },
        Authority {
          id: 20,
          name: "ECI".into(),
          chief: "Kumar".into(),
          experience: "Y".into(),
          established: "1950-01-25".into(),
        },
      ],
    }
  }

  fn type_into(form: &mut EntityForm, index: usize, value: &str) {
    form.focus = index;
    for c in value.chars() {
      form.input(c);
    }
  }

  #[test]
  fn add_party_marshals_to_create_payload() {
    let mut form = EntityForm::add_party();
    type_into(&mut form, 0, "Liberty Party");
    type_into(&mut form, 1, "L");

    assert_eq!(form.mode, FormMode::Adding);
    assert_eq!(
      form.marshal().expect("party payload"),
      FormPayload::Party(NewParty {
        name:   "Liberty Party".into(),
        symbol: "L".into(),
      })
    );
  }

  #[test]
  fn edit_candidate_preselects_current_references() {
    let snapshot = snapshot();
    let form = EntityForm::edit_candidate(&snapshot, &snapshot.candidates[0]);

    assert_eq!(form.mode, FormMode::Editing(7));
    assert_eq!(
      form.marshal().expect("candidate payload"),
      FormPayload::Candidate(NewCandidate {
        name:        "Vikram".into(),
        party_id:    1,
        election_id: 101,
      })
    );
  }

  #[test]
  fn unselected_reference_is_a_local_error() {
    let mut form = EntityForm::add_candidate(&snapshot());
    type_into(&mut form, 0, "Guru");

    let err = form.marshal().expect_err("missing party");
    assert_eq!(err, "Please select a party");
  }

  #[test]
  fn non_numeric_aadhaar_is_a_local_error() {
    let snapshot = snapshot();
    let mut form = EntityForm::add_voter(&snapshot);
    type_into(&mut form, 0, "Sita");
    form.focus = 1;
    form.cycle(1); // Male
    form.cycle(1); // Female
    form.focus = 2;
    form.cycle(1);
    type_into(&mut form, 3, "12ab");

    let err = form.marshal().expect_err("bad aadhaar");
    assert_eq!(err, "Aadhaar must be a number");
  }

  #[test]
  fn voter_form_round_trips_sex_selection() {
    let snapshot = snapshot();
    let form = EntityForm::edit_voter(&snapshot, &snapshot.voters[0]);
    match form.marshal().expect("voter payload") {
      FormPayload::Voter(body) => {
        assert_eq!(body.sex, Sex::M);
        assert_eq!(body.authority_id, 20);
        assert_eq!(body.aadhaar, 1734);
      }
      other => panic!("expected voter payload, got {other:?}"),
    }
  }

  #[test]
  fn vote_form_prefills_today() {
    let form = EntityForm::add_vote(&snapshot(), "2026-08-07");
    match &form.fields[1].kind {
      FieldKind::Text(value) => assert_eq!(value, "2026-08-07"),
      other => panic!("expected text date field, got {other:?}"),
    }
    assert_eq!(form.title(), "Add Vote Record");
  }

  #[test]
  fn cycle_wraps_and_skips_nothing() {
    let mut form = EntityForm::add_voter(&snapshot());
    form.focus = 1; // sex select, two options
    form.cycle(1);
    form.cycle(1);
    form.cycle(1);
    match &form.fields[1].kind {
      FieldKind::Select { chosen, .. } => assert_eq!(*chosen, Some(0)),
      other => panic!("expected select, got {other:?}"),
    }
    form.cycle(-1);
    match &form.fields[1].kind {
      FieldKind::Select { chosen, .. } => assert_eq!(*chosen, Some(1)),
      other => panic!("expected select, got {other:?}"),
    }
  }

  #[test]
  fn focus_wraps_both_directions() {
    let mut form = EntityForm::add_party();
    assert_eq!(form.focus, 0);
    form.focus_prev();
    assert_eq!(form.focus, 1);
    form.focus_next();
    assert_eq!(form.focus, 0);
  }
}
