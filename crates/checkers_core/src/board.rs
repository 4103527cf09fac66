use crate::error::ParseError;
use crate::types::*;

const SQUARES: usize = (BOARD_SIZE as usize) * (BOARD_SIZE as usize);

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    pub board: [Occupant; SQUARES],
    pub side_to_move: Color,
    pub turns_since_last_capture: u32,
}

impl Position {
    /// An empty board with `side_to_move` to play.
    pub fn empty(side_to_move: Color) -> Self {
        Self {
            board: [Occupant::Empty; SQUARES],
            side_to_move,
            turns_since_last_capture: 0,
        }
    }

    /// Standard opening setup: red on rows 0-2, black on rows 5-7, red to move.
    pub fn startpos() -> Self {
        let mut p = Position::empty(Color::Red);
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let c = Coord::new(row, col);
                if !c.is_playable() {
                    continue;
                }
                if row < 3 {
                    p.set(c, Occupant::RedPawn);
                } else if row >= BOARD_SIZE - 3 {
                    p.set(c, Occupant::BlackPawn);
                }
            }
        }
        p
    }

    /// Builds a position from an 8-row diagram (`.`, `r`, `b`, `R`, `B`).
    ///
    /// Row 0 is the first line. Whitespace inside a line and blank lines are
    /// ignored, so diagrams can be indented in test sources.
    pub fn from_diagram(diagram: &str, side_to_move: Color) -> Result<Self, ParseError> {
        let rows: Vec<Vec<char>> = diagram
            .lines()
            .map(|l| l.chars().filter(|c| !c.is_whitespace()).collect::<Vec<_>>())
            .filter(|r| !r.is_empty())
            .collect();
        if rows.len() != BOARD_SIZE as usize {
            return Err(ParseError::RowCount(rows.len()));
        }

        let mut p = Position::empty(side_to_move);
        for (row, squares) in rows.iter().enumerate() {
            if squares.len() != BOARD_SIZE as usize {
                return Err(ParseError::RowLength {
                    row,
                    len: squares.len(),
                });
            }
            for (col, &symbol) in squares.iter().enumerate() {
                let occ = Occupant::from_symbol(symbol)
                    .ok_or(ParseError::UnknownSymbol { row, col, symbol })?;
                let c = Coord::new(row as i8, col as i8);
                if !occ.is_empty() && !c.is_playable() {
                    return Err(ParseError::UnplayableSquare { row, col });
                }
                p.set(c, occ);
            }
        }
        Ok(p)
    }

    pub fn with_turns_since_last_capture(mut self, turns: u32) -> Self {
        self.turns_since_last_capture = turns;
        self
    }

    #[inline]
    pub fn piece_at(&self, c: Coord) -> Occupant {
        self.board[c.idx()]
    }

    #[inline]
    pub fn set(&mut self, c: Coord, occ: Occupant) {
        self.board[c.idx()] = occ;
    }

    /// Every occupied square in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Coord, Occupant)> + '_ {
        self.board.iter().enumerate().filter_map(|(i, &occ)| {
            (!occ.is_empty()).then(|| {
                let c = Coord::new((i / BOARD_SIZE as usize) as i8, (i % BOARD_SIZE as usize) as i8);
                (c, occ)
            })
        })
    }

    pub fn piece_count(&self) -> usize {
        self.board.iter().filter(|o| !o.is_empty()).count()
    }

    pub fn is_no_progress_draw(&self) -> bool {
        self.turns_since_last_capture >= MAX_TURNS_NO_CAPTURE
    }

    /// Plays `mv` on a copy of this position. `mv` must come from the move
    /// generator for this position.
    pub fn apply(&self, mv: &Move) -> Position {
        let mut next = self.clone();
        let mover = self.piece_at(mv.from());
        next.set(mv.from(), Occupant::Empty);
        for &c in &mv.captured {
            next.set(c, Occupant::Empty);
        }

        let to = mv.to();
        let placed = match mover.color() {
            Some(color) if !mover.is_king() && to.row == color.promotion_row() => {
                Occupant::king(color)
            }
            _ => mover,
        };
        next.set(to, placed);

        next.side_to_move = self.side_to_move.other();
        next.turns_since_last_capture = if mv.is_capture() {
            0
        } else {
            self.turns_since_last_capture + 1
        };
        next
    }

    /// The same game seen from the other side: board rotated half a turn,
    /// colors swapped, side to move swapped.
    pub fn mirrored(&self) -> Position {
        let mut m = Position::empty(self.side_to_move.other());
        for (c, occ) in self.pieces() {
            m.set(c.mirrored(), occ.swap_color());
        }
        m.turns_since_last_capture = self.turns_since_last_capture;
        m
    }

    pub fn to_diagram(&self) -> String {
        let mut s = String::with_capacity(SQUARES + BOARD_SIZE as usize);
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                s.push(self.piece_at(Coord::new(row, col)).symbol());
            }
            s.push('\n');
        }
        s
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::startpos()
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
