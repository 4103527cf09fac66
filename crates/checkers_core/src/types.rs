use std::fmt;

/// Board side length. Playable squares are the dark ones, `(row + col)` odd.
pub const BOARD_SIZE: i8 = 8;

/// Number of consecutive turns without a capture after which the game is drawn.
pub const MAX_TURNS_NO_CAPTURE: u32 = 50;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Black,
}

impl Color {
    pub fn other(self) -> Color {
        match self {
            Color::Red => Color::Black,
            Color::Black => Color::Red,
        }
    }

    /// Row delta of a forward step for this side's men.
    pub fn forward(self) -> i8 {
        match self {
            Color::Red => 1,
            Color::Black => -1,
        }
    }

    /// The row on which this side's men are promoted.
    pub fn promotion_row(self) -> i8 {
        match self {
            Color::Red => BOARD_SIZE - 1,
            Color::Black => 0,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Red => write!(f, "red"),
            Color::Black => write!(f, "black"),
        }
    }
}

/// What sits on a square. The set is closed: these five values are all there is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Occupant {
    Empty,
    RedPawn,
    BlackPawn,
    RedKing,
    BlackKing,
}

impl Occupant {
    pub fn pawn(color: Color) -> Self {
        match color {
            Color::Red => Occupant::RedPawn,
            Color::Black => Occupant::BlackPawn,
        }
    }

    pub fn king(color: Color) -> Self {
        match color {
            Color::Red => Occupant::RedKing,
            Color::Black => Occupant::BlackKing,
        }
    }

    pub fn color(self) -> Option<Color> {
        match self {
            Occupant::Empty => None,
            Occupant::RedPawn | Occupant::RedKing => Some(Color::Red),
            Occupant::BlackPawn | Occupant::BlackKing => Some(Color::Black),
        }
    }

    pub fn is_king(self) -> bool {
        matches!(self, Occupant::RedKing | Occupant::BlackKing)
    }

    pub fn is_empty(self) -> bool {
        self == Occupant::Empty
    }

    /// Diagram symbol: `.`, `r`, `b`, `R`, `B`.
    pub fn symbol(self) -> char {
        match self {
            Occupant::Empty => '.',
            Occupant::RedPawn => 'r',
            Occupant::BlackPawn => 'b',
            Occupant::RedKing => 'R',
            Occupant::BlackKing => 'B',
        }
    }

    pub fn from_symbol(c: char) -> Option<Self> {
        match c {
            '.' => Some(Occupant::Empty),
            'r' => Some(Occupant::RedPawn),
            'b' => Some(Occupant::BlackPawn),
            'R' => Some(Occupant::RedKing),
            'B' => Some(Occupant::BlackKing),
            _ => None,
        }
    }

    /// Same piece kind, other side.
    pub fn swap_color(self) -> Self {
        match self {
            Occupant::Empty => Occupant::Empty,
            Occupant::RedPawn => Occupant::BlackPawn,
            Occupant::BlackPawn => Occupant::RedPawn,
            Occupant::RedKing => Occupant::BlackKing,
            Occupant::BlackKing => Occupant::RedKing,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub row: i8,
    pub col: i8,
}

impl Coord {
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Coord> {
        let c = Coord::new(self.row + d_row, self.col + d_col);
        c.on_board().then_some(c)
    }

    pub fn on_board(self) -> bool {
        (0..BOARD_SIZE).contains(&self.row) && (0..BOARD_SIZE).contains(&self.col)
    }

    pub fn is_playable(self) -> bool {
        self.on_board() && (self.row + self.col) % 2 == 1
    }

    pub fn idx(self) -> usize {
        (self.row as usize) * (BOARD_SIZE as usize) + self.col as usize
    }

    /// The square seen from the other side of the board.
    pub fn mirrored(self) -> Coord {
        Coord::new(BOARD_SIZE - 1 - self.row, BOARD_SIZE - 1 - self.col)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

/// One complete turn: a simple step, or a full jump sequence.
///
/// `path[0]` is the origin square, every later entry is a landing square.
/// Moves come from the move generator only.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    pub path: Vec<Coord>,
    pub captured: Vec<Coord>,
}

impl Move {
    pub fn step(from: Coord, to: Coord) -> Self {
        Self {
            path: vec![from, to],
            captured: Vec::new(),
        }
    }

    pub fn from(&self) -> Coord {
        self.path[0]
    }

    pub fn to(&self) -> Coord {
        self.path[self.path.len() - 1]
    }

    pub fn is_capture(&self) -> bool {
        !self.captured.is_empty()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, c) in self.path.iter().enumerate() {
            if i > 0 {
                write!(f, "->")?;
            }
            write!(f, "{c}")?;
        }
        Ok(())
    }
}
