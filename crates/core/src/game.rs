use std::{
    fmt::{Display, Formatter},
    ops::{Index, IndexMut},
    str::FromStr,
};

use anyhow::{anyhow, bail, Result};

use crate::notation;

pub type CoordTyp = u8;
pub type CoordOffsetTyp = i8;

pub const BOARD_SIZE: CoordTyp = 8;

pub(crate) type BoardData = [[Option<Piece>; BOARD_SIZE as usize]; BOARD_SIZE as usize];

/// An 8x8 grid of cells, each empty or holding one piece. Holds no turn,
/// castling, or history state; whose turn it is belongs to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    cells: BoardData,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
}

impl Color {
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row offset a pawn of this color advances by. Row 0 is Black's back
    /// rank, so White pawns move toward decreasing rows.
    pub const fn forward(self) -> CoordOffsetTyp {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    pub const fn pawn_start_row(self) -> CoordTyp {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }

    pub const fn promotion_row(self) -> CoordTyp {
        match self {
            Color::White => 0,
            Color::Black => BOARD_SIZE - 1,
        }
    }
}

impl Piece {
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Self { kind, color }
    }

    pub fn from_char(c: char) -> Option<Self> {
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };

        let kind = match c.to_ascii_uppercase() {
            'K' => PieceKind::King,
            'Q' => PieceKind::Queen,
            'R' => PieceKind::Rook,
            'B' => PieceKind::Bishop,
            'N' => PieceKind::Knight,
            'P' => PieceKind::Pawn,
            _ => return None,
        };

        Some(Self { kind, color })
    }

    pub fn to_char(self) -> char {
        let c = match self.kind {
            PieceKind::King => 'K',
            PieceKind::Queen => 'Q',
            PieceKind::Rook => 'R',
            PieceKind::Bishop => 'B',
            PieceKind::Knight => 'N',
            PieceKind::Pawn => 'P',
        };

        match self.color {
            Color::White => c,
            Color::Black => c.to_ascii_lowercase(),
        }
    }
}

impl Display for Piece {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl Board {
    /// Standard starting arrangement, top row (row 0) first.
    pub const INITIAL_PLACEMENT: &'static str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

    /// Parses a piece-placement string: eight `/`-separated rows, top row
    /// first, piece letters for occupied cells and digits for runs of
    /// empty cells.
    pub fn from_placement(s: &str) -> Result<Board> {
        let (rest, rows) =
            notation::placement(s).map_err(|e| anyhow!("invalid placement {s:?}: {e:?}"))?;

        if !rest.is_empty() {
            bail!("trailing input in placement {s:?}: {rest:?}");
        }

        if rows.len() != BOARD_SIZE as usize {
            bail!("expected {BOARD_SIZE} rows in placement, got {}", rows.len());
        }

        let mut cells: BoardData = Default::default();
        for (row, parsed) in cells.iter_mut().zip(&rows) {
            *row = parsed
                .as_slice()
                .try_into()
                .map_err(|_| anyhow!("expected {BOARD_SIZE} cells per row, got {}", parsed.len()))?;
        }

        Ok(Self { cells })
    }

    pub fn to_placement(&self) -> String {
        (0..BOARD_SIZE)
            .map(|row| {
                let mut row_str = String::new();

                let mut consecutive_empty = 0;
                for col in 0..BOARD_SIZE {
                    let square = Square::new(row, col);

                    match self[square] {
                        None => consecutive_empty += 1,
                        Some(piece) => {
                            if consecutive_empty > 0 {
                                row_str.push_str(&consecutive_empty.to_string());
                                consecutive_empty = 0;
                            }

                            row_str.push(piece.to_char());
                        }
                    }
                }

                if consecutive_empty > 0 {
                    row_str.push_str(&consecutive_empty.to_string());
                }

                row_str
            })
            .collect::<Vec<_>>()
            .join("/")
    }

    /// `None` if the square is empty, else the occupant's color.
    pub fn color_at(&self, square: Square) -> Option<Color> {
        self[square].map(|p| p.color)
    }

    /// False for an empty square, true iff the occupant's color differs
    /// from `color`.
    pub fn is_enemy_at(&self, square: Square, color: Color) -> bool {
        self[square].is_some_and(|p| p.color != color)
    }

    /// Applies a move, returning the resulting board along with the moved
    /// piece and the captured piece, if any. The input board is left
    /// untouched. A pawn arriving on its color's promotion row is
    /// rewritten to a queen in place.
    ///
    /// Performs no legality checking; the move is expected to come from
    /// the generator. Panics if the source square is empty.
    pub fn apply_move(&self, m: Move) -> (Board, Piece, Option<Piece>) {
        let moved = self[m.from].expect("no piece on the move's source square");
        let captured = self[m.to];

        let mut next = self.clone();
        next[m.to] = Some(moved);
        next[m.from] = None;

        if moved.kind == PieceKind::Pawn && m.to.row == moved.color.promotion_row() {
            next[m.to] = Some(Piece::new(PieceKind::Queen, moved.color));
        }

        (next, moved, captured)
    }
}

impl Index<Square> for Board {
    type Output = Option<Piece>;

    fn index(&self, index: Square) -> &Self::Output {
        &self.cells[index.row as usize][index.col as usize]
    }
}

impl IndexMut<Square> for Board {
    fn index_mut(&mut self, index: Square) -> &mut Self::Output {
        &mut self.cells[index.row as usize][index.col as usize]
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::from_placement(Self::INITIAL_PLACEMENT).unwrap()
    }
}

/// A board coordinate. Row 0 is the top edge (Black's back rank), row 7
/// the bottom (White's); this axis is fixed and never flipped per player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Square {
    pub row: CoordTyp,
    pub col: CoordTyp,
}

impl Square {
    pub const fn new(row: CoordTyp, col: CoordTyp) -> Self {
        Self { row, col }
    }

    pub const fn is_valid(&self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }

    pub fn add_offset(&self, offset: (CoordOffsetTyp, CoordOffsetTyp)) -> Option<Self> {
        let s = Self {
            row: self.row.checked_add_signed(offset.0)?,
            col: self.col.checked_add_signed(offset.1)?,
        };

        if !s.is_valid() {
            return None;
        }

        Some(s)
    }
}

impl Display for Square {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", (b'a' + self.col) as char, BOARD_SIZE - self.row)
    }
}

impl FromStr for Square {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut chars = s.chars();
        let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
            bail!("invalid square: {s:?}");
        };

        let col = match file {
            'a'..='h' => file as CoordTyp - b'a',
            _ => bail!("invalid file: {file}"),
        };
        let row = match rank.to_digit(10) {
            Some(rank @ 1..=8) => BOARD_SIZE - rank as CoordTyp,
            _ => bail!("invalid rank: {rank}"),
        };

        Ok(Self { row, col })
    }
}

/// A source and destination square. Capture and promotion are derived
/// from board contents when the move is applied, never tagged here.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    pub const fn new(from: Square, to: Square) -> Self {
        Self { from, to }
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

impl FromStr for Move {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.len() != 4 {
            bail!("invalid move: {s:?}");
        }

        Ok(Move {
            from: Square::from_str(&s[0..2])?,
            to: Square::from_str(&s[2..4])?,
        })
    }
}
