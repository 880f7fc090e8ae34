//! Seat-layout cellular automaton.
//!
//! A [`Grid`] evolves one generation at a time under a [`Policy`] until a
//! previously seen layout comes back. Floor never changes, empty seats fill
//! up when nothing around them is occupied, and occupied seats empty out
//! when too many neighbours are occupied.

use std::collections::HashSet;
use std::fmt;

use thiserror::Error;

/// One cell of the seat layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Seat {
    Floor,
    Empty,
    Occupied,
}

impl Seat {
    /// Parse one layout character: `.`, `L` or `#`
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '.' => Some(Seat::Floor),
            'L' => Some(Seat::Empty),
            '#' => Some(Seat::Occupied),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Seat::Floor => '.',
            Seat::Empty => 'L',
            Seat::Occupied => '#',
        }
    }
}

/// The eight compass directions, as (row, column) steps
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    NorthWest,
    North,
    NorthEast,
    West,
    East,
    SouthWest,
    South,
    SouthEast,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::NorthWest,
        Direction::North,
        Direction::NorthEast,
        Direction::West,
        Direction::East,
        Direction::SouthWest,
        Direction::South,
        Direction::SouthEast,
    ];

    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::NorthWest => (-1, -1),
            Direction::North => (-1, 0),
            Direction::NorthEast => (-1, 1),
            Direction::West => (0, -1),
            Direction::East => (0, 1),
            Direction::SouthWest => (1, -1),
            Direction::South => (1, 0),
            Direction::SouthEast => (1, 1),
        }
    }
}

/// How a seat decides which neighbours it looks at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Policy {
    /// Only the eight immediately adjacent cells count; off-grid is empty.
    Adjacency,
    /// The first seat visible in each direction counts, looking past floor.
    Visibility,
}

impl Policy {
    /// Occupied neighbour count at which an occupied seat empties
    pub fn threshold(self) -> usize {
        match self {
            Policy::Adjacency => 4,
            Policy::Visibility => 5,
        }
    }

    /// Whether the seat this policy sees from `(row, col)` towards `direction` is occupied
    pub fn probe(self, direction: Direction, (row, col): (usize, usize), grid: &Grid) -> bool {
        let delta = direction.delta();
        let mut position = grid.offset((row, col), delta);
        match self {
            Policy::Adjacency => position.is_some_and(|p| grid.get(p) == Seat::Occupied),
            Policy::Visibility => {
                while let Some(p) = position {
                    match grid.get(p) {
                        Seat::Floor => position = grid.offset(p, delta),
                        seat => return seat == Seat::Occupied,
                    }
                }
                false
            }
        }
    }

    /// Number of occupied seats seen from `position`
    pub fn occupied_around(self, position: (usize, usize), grid: &Grid) -> usize {
        Direction::ALL
            .iter()
            .filter(|&&direction| self.probe(direction, position, grid))
            .count()
    }
}

/// A row whose length differs from the first row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("row has {len} cells, expected {width}")]
pub struct RaggedRow {
    /// 0-based index of the offending row
    pub row: usize,
    pub len: usize,
    pub width: usize,
}

/// Rectangular seat layout, stored row-major.
///
/// Equality and hashing cover the cells and the width, so two grids compare
/// equal exactly when they describe the same layout.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    cells: Vec<Seat>,
    width: usize,
}

impl Grid {
    /// Build a grid from rows of equal length, rejecting the first ragged row.
    pub fn from_rows(rows: Vec<Vec<Seat>>) -> Result<Self, RaggedRow> {
        let width = rows.first().map_or(0, Vec::len);
        if let Some((row, cells)) = rows.iter().enumerate().find(|(_, cells)| cells.len() != width) {
            return Err(RaggedRow {
                row,
                len: cells.len(),
                width,
            });
        }
        Ok(Self {
            cells: rows.into_iter().flatten().collect(),
            width,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        if self.width == 0 {
            0
        } else {
            self.cells.len() / self.width
        }
    }

    /// Cell at `(row, col)`; the position must be inside the grid.
    pub fn get(&self, (row, col): (usize, usize)) -> Seat {
        self.cells[row * self.width + col]
    }

    /// Step from `(row, col)` by `delta`, or `None` when that leaves the grid
    fn offset(&self, (row, col): (usize, usize), (dr, dc): (isize, isize)) -> Option<(usize, usize)> {
        let row = row.checked_add_signed(dr)?;
        let col = col.checked_add_signed(dc)?;
        (row < self.height() && col < self.width).then_some((row, col))
    }

    /// Iterate over `((row, col), seat)` in row-major order
    pub fn cells(&self) -> impl Iterator<Item = ((usize, usize), Seat)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, &seat)| ((i / self.width, i % self.width), seat))
    }

    pub fn count(&self, seat: Seat) -> usize {
        self.cells.iter().filter(|&&s| s == seat).count()
    }

    pub fn occupied(&self) -> usize {
        self.count(Seat::Occupied)
    }

    /// Next generation; every cell reads only from `self`.
    pub fn step(&self, policy: Policy) -> Grid {
        let cells = self
            .cells()
            .map(|(position, seat)| match seat {
                Seat::Floor => Seat::Floor,
                Seat::Empty if policy.occupied_around(position, self) == 0 => Seat::Occupied,
                Seat::Occupied if policy.occupied_around(position, self) >= policy.threshold() => {
                    Seat::Empty
                }
                seat => seat,
            })
            .collect();

        Grid {
            cells,
            width: self.width,
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.chunks(self.width.max(1)).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for seat in row {
                write!(f, "{}", seat.as_char())?;
            }
        }
        Ok(())
    }
}

/// Run generations until a layout repeats and return that layout.
///
/// Every generation, including the starting one, is remembered, so an
/// oscillation of any period stops the loop as well as a true fixed point.
#[tracing::instrument(level = "debug", skip(grid), fields(width = grid.width(), height = grid.height()))]
pub fn settle(grid: Grid, policy: Policy) -> Grid {
    let mut seen = HashSet::new();
    let mut current = grid;
    let mut generation = 0usize;

    loop {
        tracing::trace!(generation, "\n{}", current);
        let next = current.step(policy);
        seen.insert(current);
        generation += 1;
        if seen.contains(&next) {
            tracing::debug!(generations = generation, "layout repeated");
            return next;
        }
        current = next;
    }
}

/// Occupied seat count once the layout stops changing under `policy`
pub fn stabilize(grid: Grid, policy: Policy) -> usize {
    settle(grid, policy).occupied()
}
