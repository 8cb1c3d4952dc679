//! Session tests - whole games driven through the public command surface

use tetrogrid::core::{Board, GameSession, LockEvent, Phase, ScriptedRng};
use tetrogrid::types::{Color, GameAction, Level, PieceKind, SPAWN_X, SPAWN_Y};

/// Soft-drop until the active piece locks
fn drop_until_lock(session: &mut GameSession<ScriptedRng>) -> LockEvent {
    for _ in 0..40 {
        session.soft_drop();
        if let Some(event) = session.take_last_event() {
            return event;
        }
    }
    panic!("piece never locked");
}

#[test]
fn test_i_piece_falls_to_floor_and_locks() {
    let mut session = GameSession::with_rng(ScriptedRng::repeat(1));
    let active = session.active().unwrap();
    assert_eq!(active.shape.kind, PieceKind::I);
    assert_eq!((active.x, active.y), (SPAWN_X, SPAWN_Y));

    for step in 1..=16 {
        assert!(session.tick());
        assert_eq!(session.active().unwrap().y, step);
    }
    assert!(session.take_last_event().is_none());

    // 17th tick cannot move, so the piece locks and the next one spawns
    assert!(session.tick());
    let event = session.take_last_event().unwrap();
    assert_eq!(event.rows_cleared, 0);
    assert!(!event.game_over);

    for y in 16..20 {
        assert_eq!(session.board().get(4, y), Some(Some(Color::Cyan)));
    }
    assert_eq!(session.active().unwrap().y, SPAWN_Y);
    assert_eq!(session.score(), 0);
}

#[test]
fn test_single_row_clear_scores_100() {
    let mut board = Board::new();
    board.fill_row_except(19, Color::Red, &[4]);

    let mut session = GameSession::with_board(board, ScriptedRng::repeat(1));
    let event = drop_until_lock(&mut session);

    assert_eq!(event.rows_cleared, 1);
    assert_eq!(event.points, 100);
    assert!(!event.interval_changed);
    assert_eq!(session.score(), 100);

    // Remaining three I cells shifted down by one
    assert_eq!(session.board().get(0, 19), Some(None));
    for y in 17..20 {
        assert_eq!(session.board().get(4, y), Some(Some(Color::Cyan)));
    }
    assert_eq!(session.board().get(4, 16), Some(None));
}

#[test]
fn test_reaching_1000_speeds_up() {
    let mut board = Board::new();
    for y in 10..20 {
        board.fill_row_except(y, Color::Green, &[4]);
    }
    let mut session = GameSession::with_board(board, ScriptedRng::repeat(1));

    let first = drop_until_lock(&mut session);
    assert_eq!(first.rows_cleared, 4);
    assert_eq!(session.score(), 400);
    assert_eq!(session.fall_interval_ms(), 600);

    let second = drop_until_lock(&mut session);
    assert_eq!(second.rows_cleared, 4);
    assert_eq!(session.score(), 800);
    assert!(!second.interval_changed);

    let third = drop_until_lock(&mut session);
    assert_eq!(third.rows_cleared, 2);
    assert!(third.interval_changed);
    assert_eq!(session.score(), 1000);
    assert_eq!(session.fall_interval_ms(), 300);
    assert_eq!(session.level(), Level::JokesAreOver);
}

#[test]
fn test_stacking_ends_the_game_and_restart_recovers() {
    let mut session = GameSession::with_rng(ScriptedRng::repeat(0));

    let mut locks = 0;
    while !session.game_over() {
        let event = drop_until_lock(&mut session);
        locks += 1;
        assert_eq!(event.game_over, session.game_over());
    }
    // Ten O pieces fill columns 4-5 from floor to ceiling
    assert_eq!(locks, 10);
    assert_eq!(session.phase(), Phase::GameOver);
    assert!(session.active().is_none());

    let frozen = session.snapshot();
    assert!(!session.tick());
    assert!(!session.move_left());
    assert!(!session.rotate());
    assert!(!session.toggle_pause());
    assert_eq!(session.snapshot(), frozen);

    assert!(session.apply_action(GameAction::Restart));
    assert_eq!(session.phase(), Phase::Falling);
    assert!(session.board().is_clear());
    assert_eq!(session.score(), 0);
    assert!(session.active().is_some());
}

#[test]
fn test_pause_freezes_piece() {
    let mut session = GameSession::new(7);
    session.tick();
    let before = session.active();

    assert!(session.apply_action(GameAction::Pause));
    assert!(session.paused());
    assert!(!session.tick());
    assert!(!session.apply_action(GameAction::MoveLeft));
    assert!(!session.apply_action(GameAction::SoftDrop));
    assert_eq!(session.active(), before);
    assert!(!session.snapshot().playable());

    assert!(session.apply_action(GameAction::Pause));
    assert!(!session.paused());
    assert!(session.tick());
}

#[test]
fn test_walls_stop_horizontal_moves() {
    // T piece is three wide, spawned at x = 4
    let mut session = GameSession::with_rng(ScriptedRng::repeat(6));

    let mut lefts = 0;
    while session.move_left() {
        lefts += 1;
    }
    assert_eq!(lefts, 4);
    assert_eq!(session.active().unwrap().x, 0);

    let mut rights = 0;
    while session.move_right() {
        rights += 1;
    }
    assert_eq!(rights, 7);
    assert_eq!(session.active().unwrap().x, 7);
}

#[test]
fn test_same_seed_same_game() {
    let mut a = GameSession::new(2024);
    let mut b = GameSession::new(2024);

    for _ in 0..200 {
        a.tick();
        b.tick();
        assert_eq!(a.snapshot(), b.snapshot());
    }
}

#[test]
fn test_next_piece_becomes_active() {
    let mut session = GameSession::with_rng(ScriptedRng::new([1, 6, 0]));
    assert_eq!(session.active().unwrap().shape.kind, PieceKind::I);
    assert_eq!(session.next_piece().kind, PieceKind::T);

    drop_until_lock(&mut session);
    assert_eq!(session.active().unwrap().shape.kind, PieceKind::T);
    assert_eq!(session.next_piece().kind, PieceKind::O);
}

#[test]
fn test_score_is_always_a_multiple_of_100() {
    let mut session = GameSession::new(99);
    for i in 0..5_000u32 {
        if i % 3 == 0 {
            session.move_left();
        } else if i % 5 == 0 {
            session.rotate();
        }
        session.tick();
        assert_eq!(session.score() % 100, 0);
        if session.game_over() {
            session.restart();
        }
    }
}
