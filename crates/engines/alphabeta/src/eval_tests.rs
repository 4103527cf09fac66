use super::*;
use checkers_core::{Position, MAX_TURNS_NO_CAPTURE};

fn eval(pos: &Position, agent: Color) -> Score {
    CheckersEvaluator::new(agent).evaluate(pos)
}

/// Black to move, its only man boxed into the corner.
fn black_blocked() -> Position {
    Position::from_diagram(
        "
        ........
        ........
        ........
        ........
        ........
        ..r.....
        .r......
        b.......
        ",
        Color::Black,
    )
    .unwrap()
}

fn mixed() -> Position {
    Position::from_diagram(
        "
        ........
        ..B.....
        .r......
        ........
        ........
        ..r.....
        ...b....
        ........
        ",
        Color::Red,
    )
    .unwrap()
}

#[test]
fn test_terminal_scores_are_sentinels() {
    let pos = black_blocked();
    assert_eq!(eval(&pos, Color::Red), INFINITY);
    assert_eq!(eval(&pos, Color::Black), -INFINITY);
}

#[test]
fn test_no_progress_draw_scores_zero() {
    let pos = mixed().with_turns_since_last_capture(MAX_TURNS_NO_CAPTURE);
    assert_eq!(eval(&pos, Color::Red), 0.0);
    assert_eq!(eval(&pos, Color::Black), 0.0);
}

#[test]
fn test_terminal_check_precedes_draw() {
    let pos = black_blocked().with_turns_since_last_capture(MAX_TURNS_NO_CAPTURE);
    assert_eq!(eval(&pos, Color::Red), INFINITY);
}

#[test]
fn test_material_and_advancement() {
    // Red: home man +5, advanced man +7. Black: home man -5, king -10.
    let pos = mixed();
    assert_eq!(eval(&pos, Color::Red), (5.0 + 7.0 - 5.0 - 10.0) / 4.0);
    assert_eq!(eval(&pos, Color::Black), (-5.0 - 7.0 + 5.0 + 10.0) / 4.0);
}

#[test]
fn test_advanced_men_outweigh_home_men() {
    let home = Position::from_diagram(
        "
        ........
        ........
        .r......
        ........
        ........
        ......b.
        ........
        ........
        ",
        Color::Red,
    )
    .unwrap();
    let advanced = Position::from_diagram(
        "
        ........
        ........
        ........
        ........
        .r......
        ......b.
        ........
        ........
        ",
        Color::Red,
    )
    .unwrap();
    assert!(eval(&advanced, Color::Red) > eval(&home, Color::Red));
}

#[test]
fn test_color_symmetry() {
    let mut positions = vec![Position::startpos(), mixed()];
    let mut pos = Position::startpos();
    for _ in 0..6 {
        let moves = checkers_core::legal_moves(&pos);
        pos = pos.apply(&moves[moves.len() / 2]);
        positions.push(pos.clone());
    }

    for pos in &positions {
        let red = eval(pos, Color::Red);
        assert!((red + eval(pos, Color::Black)).abs() < 1e-12);
        assert!((red - eval(&pos.mirrored(), Color::Black)).abs() < 1e-12);
    }
}

#[test]
fn test_heuristic_stays_inside_sentinels() {
    let pos = Position::startpos();
    let s = eval(&pos, Color::Red);
    assert!(s > -10.0 - 1e-9 && s < 10.0 + 1e-9);
    assert_eq!(s, 0.0);
}
