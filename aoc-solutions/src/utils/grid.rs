//! Rectangular byte grids and compass directions

use aoc_solver::ParseError;

/// `(row, col)` position inside a [`Grid`]
pub type Pos = (usize, usize);

/// One of the four compass directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// `(row, col)` offset of one step
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::North => (-1, 0),
            Direction::East => (0, 1),
            Direction::South => (1, 0),
            Direction::West => (0, -1),
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }

    /// Dense index in `0..4`, in the order of [`Direction::ALL`]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn is_vertical(self) -> bool {
        matches!(self, Direction::North | Direction::South)
    }
}

/// Rectangular grid of ASCII cells stored row-major
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<u8>,
}

impl Grid {
    /// Parse non-empty lines of equal length into a grid
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let rows: Vec<&[u8]> = input
            .lines()
            .map(str::trim_end)
            .filter(|line| !line.is_empty())
            .map(str::as_bytes)
            .collect();

        let width = rows
            .first()
            .map(|row| row.len())
            .ok_or_else(|| ParseError::MissingData("empty grid".to_string()))?;

        if let Some(row) = rows.iter().position(|row| row.len() != width) {
            return Err(ParseError::InvalidFormat(format!(
                "row {} has length {}, expected {}",
                row + 1,
                rows[row].len(),
                width
            )));
        }

        Ok(Self {
            width,
            height: rows.len(),
            cells: rows.concat(),
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Cell at `pos`; panics when out of bounds
    pub fn at(&self, (row, col): Pos) -> u8 {
        self.cells[row * self.width + col]
    }

    pub fn set(&mut self, (row, col): Pos, value: u8) {
        self.cells[row * self.width + col] = value;
    }

    pub fn row(&self, row: usize) -> &[u8] {
        &self.cells[row * self.width..(row + 1) * self.width]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.cells.chunks(self.width)
    }

    /// Every position with its cell, row by row
    pub fn cells(&self) -> impl Iterator<Item = (Pos, u8)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, &c)| ((i / self.width, i % self.width), c))
    }

    /// First position holding `value`
    pub fn find(&self, value: u8) -> Option<Pos> {
        self.cells
            .iter()
            .position(|&c| c == value)
            .map(|i| (i / self.width, i % self.width))
    }

    /// Neighbouring position one step towards `dir`, if inside the grid
    pub fn step(&self, (row, col): Pos, dir: Direction) -> Option<Pos> {
        let (dr, dc) = dir.delta();
        let row = row.checked_add_signed(dr)?;
        let col = col.checked_add_signed(dc)?;
        (row < self.height && col < self.width).then_some((row, col))
    }

    /// Flat index of `pos`, handy for visited arrays
    pub fn index(&self, (row, col): Pos) -> usize {
        row * self.width + col
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}
