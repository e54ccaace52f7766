//! Starting-player tie-break: equal goal tops go to rock/paper/scissors.

use skipbo_engine::core::GameRng;
use skipbo_engine::session::ChoiceView;
use skipbo_engine::{
    ActionError, CardId, DrawPile, GameId, PlayerId, RoundResult, RoundStatus, RpsChoice, Seat,
    Session, SessionConfig, Status,
};

/// Both goal tops rank 5 (ids 4 and 16), so setup always ties.
fn tied() -> Session {
    let mut cards = DrawPile::generate();
    let mut top = Vec::new();
    for raw in [4u16, 16] {
        let pos = cards.iter().position(|c| c.id() == CardId::new(raw)).unwrap();
        top.push(cards.remove(pos));
    }
    cards.extend(top.into_iter().rev());

    let config = SessionConfig::new().with_goal_pile_size(1);
    let mut s = Session::with_draw_pile(
        GameId::from("game_tie0001"),
        PlayerId::new("ann"),
        "Ann",
        config,
        DrawPile::stacked(cards, GameRng::new(3)),
    )
    .unwrap();
    s.join(PlayerId::new("bob"), "Bob").unwrap();
    s
}

fn ann() -> PlayerId {
    PlayerId::new("ann")
}

fn bob() -> PlayerId {
    PlayerId::new("bob")
}

#[test]
fn test_draw_then_decisive_round() {
    let mut s = tied();
    assert_eq!(s.status(), Status::ResolvingTie);

    assert_eq!(s.play_rps(&ann(), RpsChoice::Rock), Ok(RoundStatus::Continue));
    assert_eq!(
        s.play_rps(&bob(), RpsChoice::Rock),
        Ok(RoundStatus::Resolved(RoundResult::Draw))
    );
    // Still tied until the round is reset.
    assert_eq!(s.finalize_rps(), Err(ActionError::NoRoundWinner));
    assert_eq!(s.play_rps(&ann(), RpsChoice::Paper), Err(ActionError::RoundAlreadyResolved(0)));

    s.reset_rps_round().unwrap();
    assert_eq!(s.tie_break().unwrap().round_id(), 1);

    s.play_rps(&bob(), RpsChoice::Rock).unwrap();
    assert_eq!(
        s.play_rps(&ann(), RpsChoice::Paper),
        Ok(RoundStatus::Resolved(RoundResult::P1Wins))
    );

    assert_eq!(s.finalize_rps(), Ok(Seat::First));
    assert_eq!(s.status(), Status::Playing);
    assert_eq!(s.current_player(), Some(&ann()));
    assert!(s.tie_break().is_none());
    assert_eq!(s.player(Seat::First).unwrap().hand().len(), 5);
    assert!(s.player(Seat::Second).unwrap().hand().is_empty());
}

#[test]
fn test_second_seat_can_win() {
    let mut s = tied();
    s.play_rps(&ann(), RpsChoice::Scissors).unwrap();
    s.play_rps(&bob(), RpsChoice::Rock).unwrap();

    assert_eq!(s.finalize_rps(), Ok(Seat::Second));
    assert_eq!(s.current_player(), Some(&bob()));
}

#[test]
fn test_stale_follow_ups_fail_harmlessly() {
    let mut s = tied();
    s.play_rps(&ann(), RpsChoice::Paper).unwrap();
    s.play_rps(&bob(), RpsChoice::Rock).unwrap();
    s.finalize_rps().unwrap();
    let before = s.game_state(&ann()).unwrap();

    assert_eq!(s.finalize_rps(), Err(ActionError::NoTieBreak));
    assert_eq!(s.reset_rps_round(), Err(ActionError::NoTieBreak));
    assert_eq!(s.play_rps(&bob(), RpsChoice::Rock), Err(ActionError::NoTieBreak));
    assert_eq!(s.game_state(&ann()).unwrap(), before);
}

#[test]
fn test_unknown_player_cannot_choose() {
    let mut s = tied();
    assert_eq!(
        s.play_rps(&PlayerId::new("eve"), RpsChoice::Rock),
        Err(ActionError::UnknownPlayer(PlayerId::new("eve")))
    );
}

#[test]
fn test_choices_hidden_from_opponent() {
    let mut s = tied();
    s.play_rps(&ann(), RpsChoice::Rock).unwrap();

    let bobs = s.game_state(&bob()).unwrap();
    let tie = bobs.tie_break.unwrap();
    assert_eq!(tie.player1_id, ann());
    assert_eq!(tie.player2_id, bob());
    assert_eq!(tie.choice1, ChoiceView::Hidden);
    assert_eq!(tie.choice2, ChoiceView::Unset);
    assert_eq!(tie.last_round_result, None);
    assert_eq!(bobs.current_player_id, None);

    let json = serde_json::to_value(s.game_state(&bob()).unwrap()).unwrap();
    assert_eq!(json["tieBreak"]["choice1"], "hidden");
    assert_eq!(json["status"], "resolving_tie");

    s.play_rps(&bob(), RpsChoice::Scissors).unwrap();
    let tie = s.game_state(&bob()).unwrap().tie_break.unwrap();
    assert_eq!(tie.choice1, ChoiceView::Revealed(RpsChoice::Rock));
    assert_eq!(tie.last_round_result, Some(RoundResult::P1Wins));
}

#[test]
fn test_moves_blocked_during_tie() {
    let mut s = tied();
    assert_eq!(
        s.discard(&ann(), &skipbo_engine::Discard::new(CardId::new(0), 0)),
        Err(ActionError::NotPlaying)
    );
}
