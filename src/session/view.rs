//! Per-viewer projection of a session.
//!
//! This is the only representation that ever leaves the engine. The
//! opponent's hand is reduced to its size, only the top of the opponent's
//! goal pile is revealed, and the opponent's tie-break choice stays hidden
//! until the round resolves.

use serde::{Serialize, Serializer};

use super::player::PlayerState;
use super::tie_break::{RoundResult, RpsChoice, TieBreakState};
use crate::cards::Card;
use crate::core::game_id::GameId;
use crate::core::player::{PlayerId, Seat};

/// Coarse session status as seen by clients.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Waiting,
    ResolvingTie,
    Playing,
    Finished,
}

/// Everything one viewer may see.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameView {
    pub game_id: GameId,
    pub status: Status,
    pub current_player_id: Option<PlayerId>,
    pub shared_piles: Vec<Vec<Card>>,
    pub me: PlayerView,
    /// `None` until a second player has joined.
    pub opponent: Option<PlayerView>,
    pub draw_pile_count: usize,
    pub piles_to_recycle_count: usize,
    pub winner_id: Option<PlayerId>,
    pub tie_break: Option<TieBreakView>,
}

/// One player's containers. `None` entries are face-down cards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerView {
    pub id: PlayerId,
    pub name: String,
    pub hand: Vec<Option<Card>>,
    pub goal_pile: Vec<Option<Card>>,
    pub goal_remaining: usize,
    pub discards: Vec<Vec<Card>>,
}

impl PlayerView {
    /// The owner's own view: nothing hidden.
    pub(crate) fn revealed(player: &PlayerState) -> Self {
        Self {
            id: player.id().clone(),
            name: player.name().to_string(),
            hand: player.hand().iter().copied().map(Some).collect(),
            goal_pile: player.goal_pile().iter().copied().map(Some).collect(),
            goal_remaining: player.goal_remaining(),
            discards: player.discards().to_vec(),
        }
    }

    /// The opponent's view: hand hidden, goal pile hidden below the top.
    pub(crate) fn redacted(player: &PlayerState) -> Self {
        let goal = player.goal_pile();
        let top = goal.len().checked_sub(1);
        Self {
            id: player.id().clone(),
            name: player.name().to_string(),
            hand: vec![None; player.hand().len()],
            goal_pile: goal
                .iter()
                .enumerate()
                .map(|(i, card)| (Some(i) == top).then_some(*card))
                .collect(),
            goal_remaining: player.goal_remaining(),
            discards: player.discards().to_vec(),
        }
    }
}

/// A tie-break choice as one viewer sees it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChoiceView {
    /// Nothing chosen yet. Serialized as `null`.
    Unset,
    /// The opponent has chosen but the round is unresolved. Serialized as `"hidden"`.
    Hidden,
    Revealed(RpsChoice),
}

impl Serialize for ChoiceView {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ChoiceView::Unset => serializer.serialize_none(),
            ChoiceView::Hidden => serializer.serialize_str("hidden"),
            ChoiceView::Revealed(choice) => choice.serialize(serializer),
        }
    }
}

/// Tie-break state as one viewer sees it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TieBreakView {
    pub player1_id: PlayerId,
    pub player2_id: PlayerId,
    pub choice1: ChoiceView,
    pub choice2: ChoiceView,
    pub last_round_result: Option<RoundResult>,
    pub round_id: u32,
}

impl TieBreakView {
    pub(crate) fn for_viewer(tie: &TieBreakState, viewer: Seat) -> Self {
        let resolved = tie.last_result().is_some();
        let project = |seat: Seat| match tie.choice(seat) {
            None => ChoiceView::Unset,
            Some(choice) if seat == viewer || resolved => ChoiceView::Revealed(choice),
            Some(_) => ChoiceView::Hidden,
        };

        Self {
            player1_id: tie.player(Seat::First).clone(),
            player2_id: tie.player(Seat::Second).clone(),
            choice1: project(Seat::First),
            choice2: project(Seat::Second),
            last_round_result: tie.last_result(),
            round_id: tie.round_id(),
        }
    }
}
