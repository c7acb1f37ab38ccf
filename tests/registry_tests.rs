//! Registry tests: the fixed engine line-up, enum dispatch, mismatch
//! detection, and a full driver-style session against each engine.

use turnwise::{AnyGame, AnyMove, AnyState, GameError, GameSet, Nim, TicTacToe, Winner};

fn seeded_set() -> GameSet {
    GameSet::with_games(vec![
        AnyGame::TicTacToe(TicTacToe::builder().seed(11).build()),
        AnyGame::Nim(Nim::builder().seed(11).build()),
    ])
}

// =============================================================================
// Line-up
// =============================================================================

#[test]
fn test_standard_set_is_fixed_and_ordered() {
    let set = GameSet::standard();
    assert_eq!(set.len(), 2);
    assert!(!set.is_empty());

    let names: Vec<_> = set.games().iter().map(|game| game.name()).collect();
    assert_eq!(names, vec!["tictactoe", "Nim"]);

    for game in set.games() {
        assert!(!game.name().is_empty());
        assert!(!game.description().is_empty());
    }
}

#[test]
fn test_find_resolves_exact_names_only() {
    let set = GameSet::standard();
    assert!(set.find("Nim").is_some());
    assert!(set.find("tictactoe").is_some());
    assert!(set.find("nim").is_none());
    assert!(set.find("chess").is_none());
}

// =============================================================================
// Dispatch and Mismatch
// =============================================================================

#[tokio::test]
async fn test_states_route_to_their_engine() {
    let set = seeded_set();
    for game in set.games() {
        let state = game.initial_state().await;
        assert!(!game.is_terminal(&state).await.unwrap());
        assert!(!game.legal_moves(&state).await.unwrap().is_empty());
        assert!(!game.format_state(&state).await.unwrap().is_empty());
        assert_eq!(game.winner(&state).await.unwrap(), None);
    }
}

#[tokio::test]
async fn test_foreign_state_is_a_contract_violation() {
    let set = seeded_set();
    let ttt = set.find("tictactoe").unwrap();
    let nim = set.find("Nim").unwrap();

    let nim_state = nim.initial_state().await;
    assert_eq!(
        ttt.is_terminal(&nim_state).await,
        Err(GameError::GameMismatch {
            expected: "tictactoe",
            got: "Nim",
        })
    );
    assert!(ttt.generate_best_move(&nim_state).await.is_err());

    let ttt_move = ttt.parse_move("4").await.unwrap();
    // Right state, wrong move: still rejected.
    assert_eq!(
        nim.add_move(&nim_state, &ttt_move).await,
        Err(GameError::GameMismatch {
            expected: "Nim",
            got: "tictactoe",
        })
    );
}

#[tokio::test]
async fn test_parse_move_routes_to_the_selected_game() {
    let set = seeded_set();
    let ttt = set.find("tictactoe").unwrap();
    let nim = set.find("Nim").unwrap();

    assert!(matches!(
        ttt.parse_move("4").await,
        Some(AnyMove::TicTacToe(_))
    ));
    assert!(matches!(nim.parse_move("2 3").await, Some(AnyMove::Nim(_))));
    // "4" alone is not a Nim move, "2 3" is not a cell index.
    assert_eq!(nim.parse_move("4").await, None);
    assert_eq!(ttt.parse_move("2 3").await, None);
    assert_eq!(ttt.parse_move("abc").await, None);
    assert_eq!(nim.parse_move("abc").await, None);
}

// =============================================================================
// Driver Loop
// =============================================================================

/// The sequence the external driver performs each round: parse the user's
/// text, check membership in the legal set, apply, check terminality,
/// interleave one engine move, check terminality again.
async fn play_session(game: &AnyGame) -> Winner {
    let mut state = game.initial_state().await;

    for _round in 0..32 {
        let legal = game.legal_moves(&state).await.unwrap();

        // "User" picks the first legal move, round-tripped through its
        // text form exactly as a real session would.
        let typed = legal[0].to_string();
        let parsed = game.parse_move(&typed).await.unwrap();
        assert!(legal.contains(&parsed));

        state = game.add_move(&state, &parsed).await.unwrap();
        if game.is_terminal(&state).await.unwrap() {
            break;
        }

        let reply = game.generate_best_move(&state).await.unwrap();
        state = game.add_move(&state, &reply).await.unwrap();
        if game.is_terminal(&state).await.unwrap() {
            break;
        }
    }

    game.winner(&state).await.unwrap().expect("session finished")
}

#[tokio::test]
async fn test_full_session_against_each_engine_terminates() {
    let set = seeded_set();

    for game in set.games() {
        let winner = play_session(game).await;
        // A first-move-anywhere player never beats either solver.
        assert_ne!(winner, Winner::Human, "{} lost to a naive player", game.name());
    }
}

// =============================================================================
// Session Persistence
// =============================================================================

#[tokio::test]
async fn test_states_survive_serde_round_trips() {
    // The driver persists the current state between messages; opaque
    // values must round-trip without the driver understanding them.
    let set = seeded_set();
    for game in set.games() {
        let state = game.initial_state().await;
        let mv = game.generate_best_move(&state).await.unwrap();
        let state = game.add_move(&state, &mv).await.unwrap();

        let json = serde_json::to_string(&state).unwrap();
        let restored: AnyState = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, state);

        let mv_json = serde_json::to_string(&mv).unwrap();
        let mv_restored: AnyMove = serde_json::from_str(&mv_json).unwrap();
        assert_eq!(mv_restored, mv);
    }
}
