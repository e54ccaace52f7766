//! Rock/paper/scissors tie-break for the starting player.
//!
//! Entered when both revealed goal tops have the same rank. Each round
//! collects one choice per seat; a choice may be changed freely until the
//! other seat has chosen too. A drawn round is reset (new `round_id`); a
//! decisive one hands the first turn to the winner.

use serde::{Deserialize, Serialize};

use crate::core::error::ActionError;
use crate::core::player::{PlayerId, Seat};

/// A rock/paper/scissors hand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RpsChoice {
    Rock,
    Paper,
    Scissors,
}

impl RpsChoice {
    /// Does `self` beat `other`?
    #[must_use]
    pub const fn beats(self, other: RpsChoice) -> bool {
        matches!(
            (self, other),
            (RpsChoice::Rock, RpsChoice::Scissors)
                | (RpsChoice::Scissors, RpsChoice::Paper)
                | (RpsChoice::Paper, RpsChoice::Rock)
        )
    }
}

/// Outcome of a completed round, from the seats' point of view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundResult {
    Draw,
    P1Wins,
    P2Wins,
}

impl RoundResult {
    /// Resolve a round given the first and second seat's choices.
    ///
    /// ```
    /// use skipbo_engine::session::{RoundResult, RpsChoice};
    ///
    /// assert_eq!(RoundResult::resolve(RpsChoice::Rock, RpsChoice::Scissors), RoundResult::P1Wins);
    /// assert_eq!(RoundResult::resolve(RpsChoice::Paper, RpsChoice::Paper), RoundResult::Draw);
    /// ```
    #[must_use]
    pub const fn resolve(first: RpsChoice, second: RpsChoice) -> Self {
        if first.beats(second) {
            RoundResult::P1Wins
        } else if second.beats(first) {
            RoundResult::P2Wins
        } else {
            RoundResult::Draw
        }
    }

    /// Winning seat, `None` for a draw.
    #[must_use]
    pub const fn winner(self) -> Option<Seat> {
        match self {
            RoundResult::Draw => None,
            RoundResult::P1Wins => Some(Seat::First),
            RoundResult::P2Wins => Some(Seat::Second),
        }
    }
}

/// What a submitted choice led to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundStatus {
    /// Waiting for the other seat.
    Continue,
    /// Both seats have chosen.
    Resolved(RoundResult),
}

/// State of the tie-break while the session is resolving a tie.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TieBreakState {
    player1: PlayerId,
    player2: PlayerId,
    choice1: Option<RpsChoice>,
    choice2: Option<RpsChoice>,
    last_result: Option<RoundResult>,
    round_id: u32,
}

impl TieBreakState {
    #[must_use]
    pub fn new(player1: PlayerId, player2: PlayerId) -> Self {
        Self {
            player1,
            player2,
            choice1: None,
            choice2: None,
            last_result: None,
            round_id: 0,
        }
    }

    /// Record `seat`'s choice and resolve the round once both are in.
    pub fn choose(&mut self, seat: Seat, choice: RpsChoice) -> Result<RoundStatus, ActionError> {
        if self.last_result.is_some() {
            return Err(ActionError::RoundAlreadyResolved(self.round_id));
        }

        match seat {
            Seat::First => self.choice1 = Some(choice),
            Seat::Second => self.choice2 = Some(choice),
        }

        match (self.choice1, self.choice2) {
            (Some(first), Some(second)) => {
                let result = RoundResult::resolve(first, second);
                self.last_result = Some(result);
                Ok(RoundStatus::Resolved(result))
            }
            _ => Ok(RoundStatus::Continue),
        }
    }

    /// Start a fresh round.
    pub fn reset(&mut self) {
        self.choice1 = None;
        self.choice2 = None;
        self.last_result = None;
        self.round_id += 1;
    }

    /// Seat that won the last round, if it was decisive.
    #[must_use]
    pub fn winner(&self) -> Option<Seat> {
        self.last_result.and_then(RoundResult::winner)
    }

    #[must_use]
    pub fn player(&self, seat: Seat) -> &PlayerId {
        match seat {
            Seat::First => &self.player1,
            Seat::Second => &self.player2,
        }
    }

    #[must_use]
    pub fn choice(&self, seat: Seat) -> Option<RpsChoice> {
        match seat {
            Seat::First => self.choice1,
            Seat::Second => self.choice2,
        }
    }

    #[must_use]
    pub fn last_result(&self) -> Option<RoundResult> {
        self.last_result
    }

    #[must_use]
    pub fn round_id(&self) -> u32 {
        self.round_id
    }
}
