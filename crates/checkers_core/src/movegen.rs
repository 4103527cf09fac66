use crate::{board::Position, types::*};

const KING_DIRS: [(i8, i8); 4] = [(1, -1), (1, 1), (-1, -1), (-1, 1)];

/// Generate all legal moves for the side to move.
///
/// Captures are forced: when any jump exists only jump sequences are returned.
/// Order is row-major by origin square, then by direction.
pub fn legal_moves(pos: &Position) -> Vec<Move> {
    let mut out = Vec::with_capacity(16);
    legal_moves_into(pos, &mut out);
    out
}

/// Generate all legal moves into the provided buffer, reusing it across calls.
pub fn legal_moves_into(pos: &Position, out: &mut Vec<Move>) {
    out.clear();
    let mover = pos.side_to_move;

    let own: Vec<(Coord, Occupant)> = pos
        .pieces()
        .filter(|(_, occ)| occ.color() == Some(mover))
        .collect();

    let mut scratch = pos.clone();
    for &(from, occ) in &own {
        let mut path = vec![from];
        let mut captured = Vec::new();
        scratch.set(from, Occupant::Empty);
        extend_jumps(&mut scratch, occ, &mut path, &mut captured, out);
        scratch.set(from, occ);
    }
    if !out.is_empty() {
        return;
    }

    for &(from, occ) in &own {
        for &(dr, dc) in directions(occ) {
            if let Some(to) = from.offset(dr, dc) {
                if pos.piece_at(to).is_empty() {
                    out.push(Move::step(from, to));
                }
            }
        }
    }
}

/// True if the side to move has at least one capture available.
pub fn has_capture(pos: &Position) -> bool {
    legal_moves(pos).first().is_some_and(Move::is_capture)
}

fn directions(occ: Occupant) -> &'static [(i8, i8)] {
    match occ {
        Occupant::RedKing | Occupant::BlackKing => &KING_DIRS,
        Occupant::RedPawn => &KING_DIRS[..2],
        Occupant::BlackPawn => &KING_DIRS[2..],
        Occupant::Empty => &[],
    }
}

/// Depth-first walk over jump sequences starting at the last square of `path`.
///
/// The moving piece is lifted off `board` by the caller. Captured pieces stay
/// on the board until the turn ends but cannot be jumped twice.
fn extend_jumps(
    board: &mut Position,
    occ: Occupant,
    path: &mut Vec<Coord>,
    captured: &mut Vec<Coord>,
    out: &mut Vec<Move>,
) {
    let Some(color) = occ.color() else {
        return;
    };
    let at = path[path.len() - 1];
    let mut extended = false;

    for &(dr, dc) in directions(occ) {
        let (Some(over), Some(land)) = (at.offset(dr, dc), at.offset(2 * dr, 2 * dc)) else {
            continue;
        };
        if board.piece_at(over).color() != Some(color.other())
            || captured.contains(&over)
            || !board.piece_at(land).is_empty()
        {
            continue;
        }

        extended = true;
        path.push(land);
        captured.push(over);

        if !occ.is_king() && land.row == color.promotion_row() {
            // Promotion ends the turn.
            out.push(Move {
                path: path.clone(),
                captured: captured.clone(),
            });
        } else {
            extend_jumps(board, occ, path, captured, out);
        }

        captured.pop();
        path.pop();
    }

    if !extended && !captured.is_empty() {
        out.push(Move {
            path: path.clone(),
            captured: captured.clone(),
        });
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
