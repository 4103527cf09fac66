use super::*;

fn place(side: Color, pieces: &[(i8, i8, Occupant)]) -> Position {
    let mut pos = Position::empty(side);
    for &(row, col, occ) in pieces {
        pos.set(Coord::new(row, col), occ);
    }
    pos
}

#[test]
fn test_startpos_move_count() {
    let moves = legal_moves(&Position::startpos());
    assert_eq!(moves.len(), 7);
    assert!(moves.iter().all(|m| !m.is_capture()));
}

#[test]
fn test_capture_is_forced() {
    let pos = place(
        Color::Red,
        &[
            (2, 1, Occupant::RedPawn),
            (3, 2, Occupant::BlackPawn),
            (2, 5, Occupant::RedPawn),
        ],
    );
    let moves = legal_moves(&pos);
    assert_eq!(moves.len(), 1);
    assert_eq!(moves[0].path, vec![Coord::new(2, 1), Coord::new(4, 3)]);
    assert_eq!(moves[0].captured, vec![Coord::new(3, 2)]);
    assert!(has_capture(&pos));
}

#[test]
fn test_multi_jump_is_one_move() {
    let pos = place(
        Color::Red,
        &[
            (1, 2, Occupant::RedPawn),
            (2, 3, Occupant::BlackPawn),
            (4, 5, Occupant::BlackPawn),
        ],
    );
    let moves = legal_moves(&pos);
    assert_eq!(moves.len(), 1);
    assert_eq!(
        moves[0].path,
        vec![Coord::new(1, 2), Coord::new(3, 4), Coord::new(5, 6)]
    );
    assert_eq!(moves[0].captured, vec![Coord::new(2, 3), Coord::new(4, 5)]);

    let next = pos.apply(&moves[0]);
    assert_eq!(next.piece_count(), 1);
    assert_eq!(next.piece_at(Coord::new(5, 6)), Occupant::RedPawn);
}

#[test]
fn test_promotion_ends_jump_sequence() {
    let pos = place(
        Color::Red,
        &[
            (5, 2, Occupant::RedPawn),
            (6, 3, Occupant::BlackPawn),
            (6, 5, Occupant::BlackPawn),
        ],
    );
    let moves = legal_moves(&pos);
    assert_eq!(moves.len(), 1);
    assert_eq!(moves[0].path, vec![Coord::new(5, 2), Coord::new(7, 4)]);

    let next = pos.apply(&moves[0]);
    assert_eq!(next.piece_at(Coord::new(7, 4)), Occupant::RedKing);
    assert_eq!(next.piece_at(Coord::new(6, 5)), Occupant::BlackPawn);
}

#[test]
fn test_king_moves_both_ways() {
    let pos = place(Color::Red, &[(4, 3, Occupant::RedKing)]);
    assert_eq!(legal_moves(&pos).len(), 4);

    let pawn = place(Color::Red, &[(4, 3, Occupant::RedPawn)]);
    let moves = legal_moves(&pawn);
    assert_eq!(moves.len(), 2);
    assert!(moves.iter().all(|m| m.to().row == 5));
}

#[test]
fn test_blocked_side_has_no_moves() {
    // Black man in the corner, both its squares covered and unjumpable.
    let pos = place(
        Color::Black,
        &[
            (7, 0, Occupant::BlackPawn),
            (6, 1, Occupant::RedPawn),
            (5, 2, Occupant::RedPawn),
        ],
    );
    assert!(legal_moves(&pos).is_empty());
}

#[test]
fn test_move_display() {
    let mv = Move::step(Coord::new(2, 1), Coord::new(3, 0));
    assert_eq!(mv.to_string(), "(2,1)->(3,0)");
}
