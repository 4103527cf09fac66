use thiserror::Error;

/// Errors raised while reading a board diagram.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("expected 8 board rows, found {0}")]
    RowCount(usize),
    #[error("row {row} has {len} squares, expected 8")]
    RowLength { row: usize, len: usize },
    #[error("unknown symbol '{symbol}' at ({row},{col})")]
    UnknownSymbol { row: usize, col: usize, symbol: char },
    #[error("piece on non-playable square ({row},{col})")]
    UnplayableSquare { row: usize, col: usize },
}
