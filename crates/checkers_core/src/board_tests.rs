use super::*;

#[test]
fn test_startpos_layout() {
    let pos = Position::startpos();
    assert_eq!(pos.piece_count(), 24);
    assert_eq!(pos.side_to_move, Color::Red);
    assert_eq!(pos.piece_at(Coord::new(0, 1)), Occupant::RedPawn);
    assert_eq!(pos.piece_at(Coord::new(7, 0)), Occupant::BlackPawn);
    assert_eq!(pos.piece_at(Coord::new(3, 0)), Occupant::Empty);
    assert!(pos.pieces().all(|(c, _)| c.is_playable()));
}

#[test]
fn test_diagram_round_trip() {
    let pos = Position::startpos();
    let parsed = Position::from_diagram(&pos.to_diagram(), Color::Red).unwrap();
    assert_eq!(parsed, pos);
}

#[test]
fn test_diagram_errors() {
    assert_eq!(
        Position::from_diagram("........", Color::Red),
        Err(ParseError::RowCount(1))
    );

    let short_row = "........\n".repeat(7) + ".......";
    assert_eq!(
        Position::from_diagram(&short_row, Color::Red),
        Err(ParseError::RowLength { row: 7, len: 7 })
    );

    let bad_symbol = "x.......\n".to_string() + &"........\n".repeat(7);
    assert_eq!(
        Position::from_diagram(&bad_symbol, Color::Red),
        Err(ParseError::UnknownSymbol {
            row: 0,
            col: 0,
            symbol: 'x'
        })
    );

    let light_square = "r.......\n".to_string() + &"........\n".repeat(7);
    assert_eq!(
        Position::from_diagram(&light_square, Color::Red),
        Err(ParseError::UnplayableSquare { row: 0, col: 0 })
    );
}

#[test]
fn test_apply_does_not_mutate_receiver() {
    let pos = Position::startpos();
    let before = pos.clone();
    let mv = Move::step(Coord::new(2, 1), Coord::new(3, 0));
    let next = pos.apply(&mv);

    assert_eq!(pos, before);
    assert_eq!(next.piece_at(Coord::new(3, 0)), Occupant::RedPawn);
    assert_eq!(next.piece_at(Coord::new(2, 1)), Occupant::Empty);
    assert_eq!(next.side_to_move, Color::Black);
    assert_eq!(next.turns_since_last_capture, 1);
}

#[test]
fn test_apply_capture_resets_counter_and_promotes() {
    let pos = Position::from_diagram(
        "
        ........
        ..r.....
        ...b....
        ........
        ........
        ........
        ........
        ........
        ",
        Color::Black,
    )
    .unwrap()
    .with_turns_since_last_capture(12);
    let jump = Move {
        path: vec![Coord::new(2, 3), Coord::new(0, 1)],
        captured: vec![Coord::new(1, 2)],
    };
    let next = pos.apply(&jump);
    assert_eq!(next.turns_since_last_capture, 0);
    assert_eq!(next.piece_at(Coord::new(1, 2)), Occupant::Empty);
    assert_eq!(next.piece_at(Coord::new(0, 1)), Occupant::BlackKing);
}

#[test]
fn test_mirrored_swaps_sides() {
    let pos = Position::startpos();
    let m = pos.mirrored();
    assert_eq!(m.side_to_move, Color::Black);
    assert_eq!(m.piece_count(), pos.piece_count());
    assert_eq!(m.piece_at(Coord::new(7, 6)), Occupant::BlackPawn);
    assert_eq!(m.piece_at(Coord::new(0, 1)), Occupant::RedPawn);
    assert_eq!(m.mirrored(), pos);
}
