//! Nim engine tests through the async contract.

use turnwise::{Game, GameError, Nim, NimMove, NimState, Winner};

// =============================================================================
// Contract Surface
// =============================================================================

#[tokio::test]
async fn test_identity_is_stable_and_non_empty() {
    let nim = Nim::builder().seed(1).build();
    assert_eq!(nim.name(), "Nim");
    assert!(!nim.description().is_empty());
}

#[tokio::test]
async fn test_initial_state_is_standard() {
    let nim = Nim::builder().seed(1).build();
    let state = nim.initial_state().await;
    assert_eq!(state.piles(), &[1, 3, 5, 7]);
    assert!(!nim.is_terminal(&state).await);
    assert_eq!(nim.winner(&state).await, None);
}

#[tokio::test]
async fn test_legal_moves_empty_exactly_on_terminal() {
    let nim = Nim::builder().seed(1).build();

    let live = NimState::new([0, 1, 0, 0]);
    assert!(!nim.is_terminal(&live).await);
    assert_eq!(nim.legal_moves(&live).await.len(), 1);

    let done = NimState::new([0, 0, 0, 0]);
    assert!(nim.is_terminal(&done).await);
    assert!(nim.legal_moves(&done).await.is_empty());
}

#[tokio::test]
async fn test_add_move_is_pure() {
    let nim = Nim::builder().seed(1).build();
    let state = nim.initial_state().await;
    let mv = NimMove { pile: 2, take: 4 };

    let next = nim.add_move(&state, &mv).await.unwrap();
    assert_eq!(next.piles(), &[1, 3, 1, 7]);

    // The original stays valid and usable after the call.
    assert_eq!(state.piles(), &[1, 3, 5, 7]);
    assert_eq!(nim.legal_moves(&state).await.len(), 16);
}

#[tokio::test]
async fn test_add_move_rejects_illegal_moves() {
    let nim = Nim::builder().seed(1).build();
    let state = nim.initial_state().await;

    let out_of_range = NimMove { pile: 7, take: 1 };
    assert!(matches!(
        nim.add_move(&state, &out_of_range).await,
        Err(GameError::PileOutOfRange { pile: 7, .. })
    ));

    let oversized = NimMove { pile: 0, take: 5 };
    assert!(matches!(
        nim.add_move(&state, &oversized).await,
        Err(GameError::InvalidTake { .. })
    ));
}

// =============================================================================
// Parsing
// =============================================================================

#[tokio::test]
async fn test_parse_move_accepts_pile_take() {
    let nim = Nim::builder().seed(1).build();
    assert_eq!(
        nim.parse_move("3 7").await,
        Some(NimMove { pile: 3, take: 7 })
    );
}

#[tokio::test]
async fn test_parse_move_rejects_malformed_text() {
    let nim = Nim::builder().seed(1).build();
    for text in ["abc", "", "1", "1 2 3", "one two", "4 1", "0 0", "-1 2"] {
        assert_eq!(nim.parse_move(text).await, None, "accepted {text:?}");
    }
}

#[tokio::test]
async fn test_move_text_round_trip() {
    let nim = Nim::builder().seed(1).build();
    let state = nim.initial_state().await;
    for mv in nim.legal_moves(&state).await {
        let reparsed = nim.parse_move(&mv.to_string()).await;
        assert_eq!(reparsed, Some(mv));
    }
}

// =============================================================================
// Optimal Play
// =============================================================================

#[tokio::test]
async fn test_best_move_restores_zero_nim_sum() {
    let nim = Nim::builder().seed(1).build();

    // Every reachable state with a nonzero nim-sum must get zeroed.
    for piles in [
        [1, 3, 5, 0],
        [1, 0, 5, 7],
        [1, 1, 1, 0],
        [0, 0, 0, 7],
        [1, 2, 5, 7],
    ] {
        let state = NimState::new(piles);
        assert_ne!(state.nim_sum(), 0, "fixture {piles:?} must be nonzero");
        let mv = nim.generate_best_move(&state).await.unwrap();
        let next = nim.add_move(&state, &mv).await.unwrap();
        assert_eq!(next.nim_sum(), 0, "from {piles:?} played {mv}");
    }
}

#[tokio::test]
async fn test_opening_scenario() {
    // Start (1,3,5,7); the human removes all 7 from pile 3. The position
    // (1,3,5,0) has nim-sum 7, and the unique lowest-index zeroing move
    // removes 3 from pile 2, giving (1,3,2,0).
    let nim = Nim::builder().seed(1).build();
    let state = nim.initial_state().await;

    let human = nim.parse_move("3 7").await.unwrap();
    assert!(nim.legal_moves(&state).await.contains(&human));
    let state = nim.add_move(&state, &human).await.unwrap();
    assert_eq!(state.piles(), &[1, 3, 5, 0]);
    assert_eq!(state.nim_sum(), 7);

    let reply = nim.generate_best_move(&state).await.unwrap();
    assert_eq!(reply, NimMove { pile: 2, take: 3 });
    let state = nim.add_move(&state, &reply).await.unwrap();
    assert_eq!(state.piles(), &[1, 3, 2, 0]);
    assert_eq!(state.nim_sum(), 0);
}

#[tokio::test]
async fn test_best_move_on_terminal_state_fails() {
    let nim = Nim::builder().seed(1).build();
    let done = NimState::new([0, 0, 0, 0]);
    assert_eq!(
        nim.generate_best_move(&done).await,
        Err(GameError::TerminalState)
    );
}

#[tokio::test]
async fn test_engine_wins_from_lost_opening() {
    // (1,3,5,7) has nim-sum zero: whoever moves first loses to optimal
    // play. Let the "human" greedily empty the largest pile each round;
    // the engine must win every time.
    let nim = Nim::builder().seed(42).build();
    let mut state = nim.initial_state().await;

    loop {
        // Human: take the whole largest pile.
        let (pile, &count) = state
            .piles()
            .iter()
            .enumerate()
            .max_by_key(|&(_, &count)| count)
            .unwrap();
        state = nim
            .add_move(&state, &NimMove { pile, take: count })
            .await
            .unwrap();
        if nim.is_terminal(&state).await {
            break;
        }

        let reply = nim.generate_best_move(&state).await.unwrap();
        state = nim.add_move(&state, &reply).await.unwrap();
        if nim.is_terminal(&state).await {
            break;
        }
    }

    assert_eq!(nim.winner(&state).await, Some(Winner::Bot));
}

// =============================================================================
// Winner Attribution
// =============================================================================

#[tokio::test]
async fn test_last_mover_wins() {
    let nim = Nim::builder().piles([2, 0, 0, 0]).seed(1).build();
    let state = nim.initial_state().await;

    // The human takes the last stones: human wins, score +1.
    let done = nim
        .add_move(&state, &NimMove { pile: 0, take: 2 })
        .await
        .unwrap();
    assert!(nim.is_terminal(&done).await);
    assert_eq!(nim.winner(&done).await, Some(Winner::Human));
    assert_eq!(nim.winner(&done).await.unwrap().score(), 1);
}

// =============================================================================
// Rendering
// =============================================================================

#[tokio::test]
async fn test_format_state_lists_piles() {
    let nim = Nim::builder().seed(1).build();
    let state = nim.initial_state().await;
    let rendered = nim.format_state(&state).await;

    assert_eq!(rendered.lines().count(), 4);
    assert!(rendered.contains("Pile 0: ● (1)"));
    assert!(rendered.contains("Pile 3: ●●●●●●● (7)"));
    // Pure function of the state: repeated calls agree.
    assert_eq!(rendered, nim.format_state(&state).await);
}
