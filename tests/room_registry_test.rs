//! Tests for room isolation, seating and turn enforcement.

use fox_and_hounds::{
    GameSnapshot, Input, InputError, Move, Piece, Position, RoomError, RoomRegistry, Side,
};
use std::sync::Arc;
use std::thread;

fn p(row: i8, col: i8) -> Position {
    Position::new(row, col)
}

fn seated_room(registry: &RoomRegistry) -> String {
    let id = registry.create_room();
    registry.join_room(&id, "alice".to_string()).unwrap();
    registry.join_room(&id, "bob".to_string()).unwrap();
    id
}

#[test]
fn test_fresh_room_matches_start() {
    let registry = RoomRegistry::new();
    let id = registry.create_room();
    let snapshot = registry.snapshot(&id).unwrap();

    assert_eq!(snapshot.fox, p(7, 2));
    assert_eq!(snapshot.hounds, [p(0, 1), p(0, 3), p(0, 5), p(0, 7)]);
    assert_eq!(snapshot.turn, Side::Fox);
    assert_eq!(snapshot.selection, None);
    assert!(!snapshot.terminal);
    assert_eq!(snapshot.winner, None);
    assert!(registry.get_room(&id).unwrap().roster().is_empty());
}

#[test]
fn test_join_order() {
    let registry = RoomRegistry::new();
    let id = registry.create_room();

    assert_eq!(registry.join_room(&id, "alice".to_string()), Ok(Side::Fox));
    assert_eq!(registry.join_room(&id, "bob".to_string()), Ok(Side::Hounds));
    assert_eq!(
        registry.join_room(&id, "carol".to_string()),
        Err(RoomError::RoomFull(id.clone()))
    );

    let room = registry.get_room(&id).unwrap();
    assert_eq!(room.roster().fox().as_deref(), Some("alice"));
    assert_eq!(room.roster().hounds().as_deref(), Some("bob"));
    assert_eq!(room.role_of("bob"), vec![Side::Hounds]);
    assert!(room.role_of("carol").is_empty());
}

#[test]
fn test_unknown_room() {
    let registry = RoomRegistry::new();
    let missing = "no-such-room".to_string();

    assert_eq!(
        registry.join_room(&missing, "alice".to_string()),
        Err(RoomError::NotFound(missing.clone()))
    );
    assert!(matches!(registry.get_room(&missing), Err(RoomError::NotFound(_))));
    assert!(matches!(registry.snapshot(&missing), Err(RoomError::NotFound(_))));
    assert!(matches!(registry.reset_room(&missing), Err(RoomError::NotFound(_))));
    assert!(matches!(
        registry.submit_move(&missing, Side::Fox, 7, 2),
        Err(RoomError::NotFound(_))
    ));
}

#[test]
fn test_room_ids_are_unique() {
    let registry = RoomRegistry::new();
    let a = registry.create_room();
    let b = registry.create_room();
    assert_ne!(a, b);

    let mut ids = registry.list_rooms();
    ids.sort();
    let mut expected = vec![a, b];
    expected.sort();
    assert_eq!(ids, expected);
    assert_eq!(registry.len(), 2);
}

#[test]
fn test_opening_exchange() {
    let registry = RoomRegistry::new();
    let id = seated_room(&registry);

    let snapshot = registry.submit_move(&id, Side::Fox, 7, 2).unwrap();
    assert_eq!(snapshot.selection.map(|s| s.piece), Some(Piece::Fox));
    assert_eq!(snapshot.turn, Side::Fox);

    let snapshot = registry.submit_move(&id, Side::Fox, 6, 1).unwrap();
    assert_eq!(snapshot.fox, p(6, 1));
    assert_eq!(snapshot.turn, Side::Hounds);

    registry.submit_move(&id, Side::Hounds, 0, 1).unwrap();
    let snapshot = registry.submit_move(&id, Side::Hounds, 1, 2).unwrap();
    assert_eq!(snapshot.hounds[0], p(1, 2));
    assert_eq!(snapshot.turn, Side::Fox);
}

#[test]
fn test_out_of_turn_is_rejected() {
    let registry = RoomRegistry::new();
    let id = seated_room(&registry);

    let before = registry.snapshot(&id).unwrap();
    assert_eq!(
        registry.submit_move(&id, Side::Hounds, 0, 1),
        Err(RoomError::NotYourTurn { expected: Side::Fox })
    );
    assert_eq!(registry.snapshot(&id).unwrap(), before);
}

#[test]
fn test_malformed_coordinates_are_rejected() {
    let registry = RoomRegistry::new();
    let id = seated_room(&registry);
    registry.submit_move(&id, Side::Fox, 7, 2).unwrap();

    let before = registry.snapshot(&id).unwrap();
    assert_eq!(
        registry.submit_move(&id, Side::Fox, 9, -3),
        Err(RoomError::InvalidInput(InputError::OutOfRange { row: 9, col: -3 }))
    );
    // The held fox is still held: bad input is not a move attempt.
    assert_eq!(registry.snapshot(&id).unwrap(), before);
}

#[test]
fn test_illegal_move_clears_selection() {
    let registry = RoomRegistry::new();
    let id = seated_room(&registry);

    registry.submit_move(&id, Side::Fox, 7, 2).unwrap();
    let snapshot = registry.submit_move(&id, Side::Fox, 5, 2).unwrap();
    assert_eq!(snapshot.selection, None);
    assert_eq!(snapshot.turn, Side::Fox);
    assert_eq!(snapshot.fox, p(7, 2));
}

#[test]
fn test_reset_is_open_to_either_side() {
    let registry = RoomRegistry::new();
    let id = seated_room(&registry);
    registry.submit_move(&id, Side::Fox, 7, 2).unwrap();
    registry.submit_move(&id, Side::Fox, 6, 3).unwrap();

    // Fox reset while it is the hounds' turn.
    let snapshot = registry
        .submit_input(&id, Side::Fox, Input::Reset)
        .unwrap();
    assert_eq!(snapshot.fox, p(7, 2));
    assert_eq!(snapshot.turn, Side::Fox);

    registry.submit_move(&id, Side::Fox, 7, 2).unwrap();
    let snapshot = registry.reset_room(&id).unwrap();
    assert_eq!(snapshot.selection, None);

    // Players keep their seats.
    assert_eq!(registry.get_room(&id).unwrap().roster().len(), 2);
}

#[test]
fn test_play_move_for_automated_player() {
    let registry = RoomRegistry::new();
    let id = seated_room(&registry);

    let room = registry.get_room(&id).unwrap();
    let mv = room.game().state().legal_moves()[0];
    let snapshot = registry.play_move(&id, Side::Fox, mv).unwrap();
    assert_eq!(snapshot.fox, mv.to);
    assert_eq!(snapshot.turn, Side::Hounds);

    // A stale selection is put back before the move is played.
    registry.submit_move(&id, Side::Hounds, 0, 7).unwrap();
    let mv = Move::new(Piece::Hound(0), p(0, 1), p(1, 2));
    let snapshot = registry.play_move(&id, Side::Hounds, mv).unwrap();
    assert_eq!(snapshot.hounds, [p(1, 2), p(0, 3), p(0, 5), p(0, 7)]);
    assert_eq!(snapshot.turn, Side::Fox);

    assert_eq!(
        registry.play_move(&id, Side::Hounds, Move::new(Piece::Hound(1), p(0, 3), p(1, 4))),
        Err(RoomError::NotYourTurn { expected: Side::Fox })
    );
}

#[test]
fn test_play_move_rejects_piece_not_on_its_square() {
    let registry = RoomRegistry::new();
    let id = seated_room(&registry);

    // Fox names a square where a hound stands.
    assert_eq!(
        registry.play_move(&id, Side::Fox, Move::new(Piece::Fox, p(0, 1), p(1, 2))),
        Err(RoomError::PieceMismatch { piece: Piece::Fox, at: p(0, 1) })
    );
    // Fox names an empty square.
    assert_eq!(
        registry.play_move(&id, Side::Fox, Move::new(Piece::Fox, p(4, 3), p(3, 4))),
        Err(RoomError::PieceMismatch { piece: Piece::Fox, at: p(4, 3) })
    );
    // Fox side names a hound.
    assert_eq!(
        registry.play_move(&id, Side::Fox, Move::new(Piece::Hound(0), p(0, 1), p(1, 2))),
        Err(RoomError::PieceMismatch { piece: Piece::Hound(0), at: p(0, 1) })
    );

    registry
        .play_move(&id, Side::Fox, Move::new(Piece::Fox, p(7, 2), p(6, 1)))
        .unwrap();
    let before = registry.snapshot(&id).unwrap();

    // Hound 3 named, but hound 0 stands on (0,1).
    assert_eq!(
        registry.play_move(&id, Side::Hounds, Move::new(Piece::Hound(3), p(0, 1), p(1, 2))),
        Err(RoomError::PieceMismatch { piece: Piece::Hound(3), at: p(0, 1) })
    );
    // No hound has index 9.
    assert_eq!(
        registry.play_move(&id, Side::Hounds, Move::new(Piece::Hound(9), p(0, 3), p(1, 4))),
        Err(RoomError::PieceMismatch { piece: Piece::Hound(9), at: p(0, 3) })
    );
    assert_eq!(registry.snapshot(&id).unwrap(), before);
}

#[test]
fn test_copied_room_does_not_change_registry() {
    let registry = RoomRegistry::new();
    let id = registry.create_room();
    let copy = registry.get_room(&id).unwrap();
    assert_eq!(copy.id(), &id);
    assert_eq!(registry.join_room(&id, "alice".to_string()), Ok(Side::Fox));
    assert!(copy.roster().is_empty());
    assert_eq!(registry.get_room(&id).unwrap().roster().len(), 1);
}

#[test]
fn test_local_room_holds_both_sides() {
    let registry = RoomRegistry::new();
    let id = registry.create_local_room("desk".to_string());
    let room = registry.get_room(&id).unwrap();

    assert_eq!(room.role_of("desk"), vec![Side::Fox, Side::Hounds]);
    assert_eq!(
        registry.join_room(&id, "intruder".to_string()),
        Err(RoomError::RoomFull(id.clone()))
    );
}

#[test]
fn test_finished_room_stays_queryable_and_frozen() {
    let registry = RoomRegistry::new();
    let id = seated_room(&registry);

    // Walk the fox up the board while the far-right hound zigzags down,
    // leaving (0,7) open.
    let fox_path = [(7, 2), (6, 3), (5, 4), (4, 3), (3, 4), (2, 5), (1, 6), (0, 7)];
    let hound_path = [(0, 7), (1, 6), (2, 7), (3, 6), (4, 7), (5, 6), (6, 7)];
    for step in 0..fox_path.len() - 1 {
        let (r, c) = fox_path[step];
        let (nr, nc) = fox_path[step + 1];
        registry.submit_move(&id, Side::Fox, r, c).unwrap();
        let snapshot = registry.submit_move(&id, Side::Fox, nr, nc).unwrap();
        if snapshot.terminal {
            break;
        }
        let (r, c) = hound_path[step];
        let (nr, nc) = hound_path[step + 1];
        registry.submit_move(&id, Side::Hounds, r, c).unwrap();
        registry.submit_move(&id, Side::Hounds, nr, nc).unwrap();
    }

    let finished = registry.snapshot(&id).unwrap();
    assert!(finished.terminal);
    assert_eq!(finished.winner, Some(Side::Fox));
    assert_eq!(finished.fox, p(0, 7));

    // Input from either side is a no-op once the game is over.
    assert_eq!(registry.submit_move(&id, Side::Fox, 0, 7).unwrap(), finished);
    assert_eq!(registry.submit_move(&id, Side::Hounds, 6, 7).unwrap(), finished);

    let snapshot = registry.reset_room(&id).unwrap();
    assert!(!snapshot.terminal);
}

#[test]
fn test_rooms_are_isolated() {
    let registry = RoomRegistry::new();
    let a = seated_room(&registry);
    let b = seated_room(&registry);

    registry.submit_move(&a, Side::Fox, 7, 2).unwrap();
    registry.submit_move(&a, Side::Fox, 6, 1).unwrap();

    let untouched = registry.snapshot(&b).unwrap();
    assert_eq!(untouched.fox, p(7, 2));
    assert_eq!(untouched.turn, Side::Fox);
}

#[test]
fn test_parallel_games_in_separate_rooms() {
    let registry = Arc::new(RoomRegistry::new());
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let registry = Arc::clone(&registry);
            thread::spawn(move || {
                let id = seated_room(&registry);
                for _ in 0..20 {
                    registry.submit_move(&id, Side::Fox, 7, 2).unwrap();
                    registry.submit_move(&id, Side::Fox, 6, 1).unwrap();
                    registry.reset_room(&id).unwrap();
                }
                registry.snapshot(&id).unwrap()
            })
        })
        .collect();

    for handle in handles {
        let snapshot = handle.join().unwrap();
        assert_eq!(snapshot.fox, p(7, 2));
        assert_eq!(snapshot.turn, Side::Fox);
    }
    assert_eq!(registry.len(), 8);
}

#[test]
fn test_racing_moves_in_one_room_serialize() {
    let registry = RoomRegistry::new();
    let id = seated_room(&registry);
    registry.submit_move(&id, Side::Fox, 7, 2).unwrap();

    // Two submissions race to complete the fox's move. Exactly one wins;
    // the other runs against the updated turn and is rejected.
    let results: Vec<Result<GameSnapshot, RoomError>> = thread::scope(|scope| {
        let first = scope.spawn(|| registry.submit_move(&id, Side::Fox, 6, 1));
        let second = scope.spawn(|| registry.submit_move(&id, Side::Fox, 6, 3));
        vec![first.join().unwrap(), second.join().unwrap()]
    });

    let accepted = results
        .iter()
        .filter(|r| matches!(r, Ok(s) if s.turn == Side::Hounds))
        .count();
    let rejected = results
        .iter()
        .filter(|r| matches!(r, Err(RoomError::NotYourTurn { expected: Side::Hounds })))
        .count();
    assert_eq!((accepted, rejected), (1, 1));
    assert_eq!(registry.snapshot(&id).unwrap().turn, Side::Hounds);
}

#[test]
fn test_snapshot_serializes_without_identities() {
    let registry = RoomRegistry::new();
    let id = seated_room(&registry);
    let snapshot = registry.snapshot(&id).unwrap();

    let json = serde_json::to_value(&snapshot).unwrap();
    assert_eq!(json["turn"], "fox");
    assert_eq!(json["fox"]["row"], 7);
    assert_eq!(json["terminal"], false);
    assert!(!json.to_string().contains("alice"));

    let back: GameSnapshot = serde_json::from_value(json).unwrap();
    assert_eq!(back, snapshot);
}
