//! The three-step vote-casting flow.
//!
//! Election → candidate (filtered to that election) → voter. The
//! submit marshals only when all three are chosen; anything missing is
//! a local validation failure and no request is constructed.

use ballotdesk_core::payload::NewVote;

/// Which pane of the voting screen has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VotingFocus {
  #[default]
  Elections,
  Candidates,
  Voters,
}

impl VotingFocus {
  pub fn next(self) -> Self {
    match self {
      VotingFocus::Elections => VotingFocus::Candidates,
      VotingFocus::Candidates => VotingFocus::Voters,
      VotingFocus::Voters => VotingFocus::Elections,
    }
  }

  pub fn prev(self) -> Self {
    match self {
      VotingFocus::Elections => VotingFocus::Voters,
      VotingFocus::Candidates => VotingFocus::Elections,
      VotingFocus::Voters => VotingFocus::Candidates,
    }
  }
}

/// Selection state for the voting interface.
#[derive(Debug, Clone, Default)]
pub struct VotingState {
  pub focus: VotingFocus,

  pub election:  Option<i64>,
  pub candidate: Option<i64>,
  pub voter:     Option<i64>,

  pub election_cursor:  usize,
  pub candidate_cursor: usize,
  pub voter_cursor:     usize,
}

impl VotingState {
  /// Reset every selection and cursor, as after a successful cast.
  pub fn clear(&mut self) {
    *self = Self::default();
  }

  /// Choosing a different election invalidates the candidate choice:
  /// the ballot list is filtered to the chosen election.
  pub fn choose_election(&mut self, id: i64) {
    if self.election != Some(id) {
      self.candidate = None;
      self.candidate_cursor = 0;
    }
    self.election = Some(id);
  }

  /// Marshal the three selections into a vote dated `today`. Fails
  /// locally when any selection is missing.
  pub fn marshal(&self, today: &str) -> Result<NewVote, &'static str> {
    let (Some(election_id), Some(voter_id), Some(candidate_id)) =
      (self.election, self.voter, self.candidate)
    else {
      return Err("Please select election, voter, and candidate!");
    };
    Ok(NewVote {
      candidate_id,
      date: today.to_string(),
      election_id,
      voter_id,
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn marshal_requires_all_three_selections() {
    let mut state = VotingState::default();
    assert!(state.marshal("2026-08-07").is_err());

    state.choose_election(101);
    assert!(state.marshal("2026-08-07").is_err());

    state.candidate = Some(7);
    assert!(state.marshal("2026-08-07").is_err());

    state.voter = Some(2);
    let vote = state.marshal("2026-08-07").expect("complete selection");
    assert_eq!(vote.election_id, 101);
    assert_eq!(vote.candidate_id, 7);
    assert_eq!(vote.voter_id, 2);
    assert_eq!(vote.date, "2026-08-07");
  }

  #[test]
  fn switching_election_clears_the_candidate() {
    let mut state = VotingState::default();
    state.choose_election(101);
    state.candidate = Some(7);
    state.candidate_cursor = 3;

    state.choose_election(102);
    assert_eq!(state.candidate, None);
    assert_eq!(state.candidate_cursor, 0);

    // Re-choosing the same election keeps the ballot selection.
    state.candidate = Some(9);
    state.choose_election(102);
    assert_eq!(state.candidate, Some(9));
  }

  #[test]
  fn clear_resets_everything() {
    let mut state = VotingState {
      focus: VotingFocus::Voters,
      election: Some(101),
      candidate: Some(7),
      voter: Some(2),
      election_cursor: 1,
      candidate_cursor: 2,
      voter_cursor: 3,
    };
    state.clear();
    assert_eq!(state.focus, VotingFocus::Elections);
    assert!(state.election.is_none());
    assert!(state.candidate.is_none());
    assert!(state.voter.is_none());
  }

  #[test]
  fn focus_cycles_through_all_panes() {
    let mut focus = VotingFocus::Elections;
    focus = focus.next();
    assert_eq!(focus, VotingFocus::Candidates);
    focus = focus.next();
    assert_eq!(focus, VotingFocus::Voters);
    focus = focus.next();
    assert_eq!(focus, VotingFocus::Elections);
    assert_eq!(VotingFocus::Elections.prev(), VotingFocus::Voters);
  }
}
