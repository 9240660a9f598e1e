//! Static maze grid
//!
//! The maze is a rectangle of square cells. Continuous positions map to a cell by
//! flooring each coordinate by the cell size; anything outside the rectangle is
//! treated as solid wall.

use std::fmt;

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Contents of one maze cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    Wall,
    /// Walkable, carries nothing
    Open,
    /// Walkable, carries a regular dot
    Pellet,
    /// Walkable, carries a power pellet
    PowerPellet,
}

impl Cell {
    pub fn is_wall(self) -> bool {
        self == Cell::Wall
    }
}

/// Error raised when a maze layout cannot be parsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Layout contained no rows
    Empty,
    /// A row's width differs from the first row's
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// Character with no cell meaning
    UnknownTile { row: usize, col: usize, tile: char },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::Empty => write!(f, "maze layout has no rows"),
            GridError::RaggedRow {
                row,
                expected,
                found,
            } => write!(
                f,
                "maze row {} has width {} (expected {})",
                row, found, expected
            ),
            GridError::UnknownTile { row, col, tile } => {
                write!(f, "unknown tile {:?} at row {}, col {}", tile, row, col)
            }
        }
    }
}

impl std::error::Error for GridError {}

/// The canonical 20x20 maze: 1 = wall, 0 = dot, 2 = power pellet
const CLASSIC_MAP: [[u8; 20]; 20] = [
    [1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
    [1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1],
    [1, 0, 1, 1, 0, 1, 0, 1, 1, 1, 1, 1, 1, 0, 1, 0, 1, 1, 0, 1],
    [1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 1],
    [1, 0, 1, 0, 1, 1, 1, 0, 1, 1, 1, 1, 0, 1, 1, 1, 0, 1, 0, 1],
    [1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1],
    [1, 2, 1, 0, 1, 0, 1, 1, 1, 0, 0, 1, 1, 1, 0, 1, 0, 1, 0, 1],
    [1, 0, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 1, 0, 1],
    [1, 0, 1, 0, 1, 0, 1, 1, 1, 1, 1, 1, 1, 1, 0, 1, 0, 1, 0, 1],
    [1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1],
    [1, 0, 1, 1, 1, 0, 1, 1, 0, 2, 2, 0, 1, 1, 0, 1, 1, 1, 0, 1],
    [1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 1],
    [1, 0, 1, 1, 1, 0, 1, 0, 1, 1, 1, 1, 0, 1, 0, 1, 1, 1, 0, 1],
    [1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 2, 0, 1],
    [1, 1, 1, 0, 1, 1, 1, 0, 1, 1, 1, 1, 0, 1, 1, 1, 0, 1, 1, 1],
    [1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1],
    [1, 0, 1, 1, 1, 1, 1, 0, 1, 1, 1, 1, 0, 1, 1, 1, 1, 1, 0, 1],
    [1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1],
    [1, 0, 1, 1, 1, 1, 1, 1, 1, 0, 0, 1, 1, 1, 1, 1, 1, 1, 0, 1],
    [1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
];

/// Immutable maze of square cells
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    /// Row-major cells
    cells: Vec<Cell>,
    width: usize,
    height: usize,
    cell_size: f32,
}

impl Grid {
    /// The canonical maze
    pub fn classic(cell_size: f32) -> Self {
        let cells = CLASSIC_MAP
            .iter()
            .flat_map(|row| row.iter())
            .map(|code| match code {
                1 => Cell::Wall,
                2 => Cell::PowerPellet,
                _ => Cell::Pellet,
            })
            .collect();

        Self {
            cells,
            width: CLASSIC_MAP[0].len(),
            height: CLASSIC_MAP.len(),
            cell_size,
        }
    }

    /// Parse an ASCII layout
    ///
    /// `#` wall, `.` dot, `o` power pellet, space open floor. Blank lines are
    /// skipped; every remaining row must have the same width.
    pub fn parse(layout: &str, cell_size: f32) -> Result<Self, GridError> {
        let mut cells = Vec::new();
        let mut width = None;
        let mut height = 0;

        for line in layout.lines().map(|l| l.trim_end_matches('\r')) {
            if line.is_empty() {
                continue;
            }
            let row = height;
            let mut found = 0;
            for (col, tile) in line.chars().enumerate() {
                let cell = match tile {
                    '#' => Cell::Wall,
                    '.' => Cell::Pellet,
                    'o' => Cell::PowerPellet,
                    ' ' => Cell::Open,
                    _ => return Err(GridError::UnknownTile { row, col, tile }),
                };
                cells.push(cell);
                found += 1;
            }

            let expected = *width.get_or_insert(found);
            if found != expected {
                return Err(GridError::RaggedRow {
                    row,
                    expected,
                    found,
                });
            }
            height += 1;
        }

        match width {
            Some(width) if width > 0 => Ok(Self {
                cells,
                width,
                height,
                cell_size,
            }),
            _ => Err(GridError::Empty),
        }
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.height
    }

    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    /// Maze extent in pixels
    pub fn pixel_size(&self) -> Vec2 {
        Vec2::new(
            self.width as f32 * self.cell_size,
            self.height as f32 * self.cell_size,
        )
    }

    /// Cell at (col, row), `None` outside the maze
    pub fn cell_at(&self, col: usize, row: usize) -> Option<Cell> {
        if col >= self.width || row >= self.height {
            return None;
        }
        self.cells.get(row * self.width + col).copied()
    }

    /// (col, row) of the cell containing a continuous point
    ///
    /// Returns `None` for points outside the maze and for non-finite coordinates.
    pub fn cell_index(&self, x: f32, y: f32) -> Option<(usize, usize)> {
        if !x.is_finite() || !y.is_finite() {
            return None;
        }
        let col = (x / self.cell_size).floor();
        let row = (y / self.cell_size).floor();
        if col < 0.0 || row < 0.0 || col >= self.width as f32 || row >= self.height as f32 {
            return None;
        }
        Some((col as usize, row as usize))
    }

    /// Whether the point (x, y) lies in a wall cell or outside the maze
    ///
    /// This samples a single point. `buffer` is accepted so callers can pass the
    /// actor radius they are probing for, but it does not widen the sample;
    /// callers offset the probe point themselves.
    pub fn is_wall(&self, x: f32, y: f32, _buffer: f32) -> bool {
        match self.cell_index(x, y) {
            Some((col, row)) => self.cell_at(col, row).is_none_or(Cell::is_wall),
            None => true,
        }
    }

    /// [`Grid::is_wall`] for a vector position
    #[inline]
    pub fn is_wall_at(&self, point: Vec2, buffer: f32) -> bool {
        self.is_wall(point.x, point.y, buffer)
    }

    /// Pixel center of cell (col, row)
    pub fn cell_center(&self, col: usize, row: usize) -> Vec2 {
        Vec2::new(
            (col as f32 + 0.5) * self.cell_size,
            (row as f32 + 0.5) * self.cell_size,
        )
    }

    /// Top-left pixel corner of cell (col, row)
    pub fn cell_origin(&self, col: usize, row: usize) -> Vec2 {
        Vec2::new(col as f32 * self.cell_size, row as f32 * self.cell_size)
    }

    /// Iterate all cells as (col, row, cell), row-major
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, cell)| (i % self.width, i / self.width, *cell))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_classic_dimensions_and_power_pellets() {
        let grid = Grid::classic(20.0);
        assert_eq!(grid.width(), 20);
        assert_eq!(grid.height(), 20);
        assert_eq!(grid.pixel_size(), Vec2::new(400.0, 400.0));

        let power: Vec<_> = grid
            .cells()
            .filter(|(_, _, c)| *c == Cell::PowerPellet)
            .map(|(col, row, _)| (col, row))
            .collect();
        assert_eq!(power, vec![(1, 6), (9, 10), (10, 10), (17, 13)]);
    }

    #[test]
    fn test_is_wall_uses_floor_of_coordinate() {
        let grid = Grid::classic(20.0);
        // Cell (1, 1) is open, cell (0, 1) is the border wall
        assert!(!grid.is_wall(30.0, 30.0, 0.0));
        assert!(!grid.is_wall(20.0, 20.0, 0.0));
        assert!(grid.is_wall(19.99, 30.0, 0.0));
        // (5, 1) is an interior wall
        assert!(grid.is_wall(110.0, 30.0, 0.0));
    }

    #[test]
    fn test_buffer_does_not_change_sample() {
        let grid = Grid::classic(20.0);
        // 1px from the border wall, a large buffer still reports open floor
        assert!(!grid.is_wall(21.0, 30.0, 15.0));
    }

    #[test]
    fn test_non_finite_is_wall() {
        let grid = Grid::classic(20.0);
        assert!(grid.is_wall(f32::NAN, 30.0, 0.0));
        assert!(grid.is_wall(30.0, f32::INFINITY, 0.0));
    }

    #[test]
    fn test_parse_layout() {
        let grid = Grid::parse("#####\n#.o #\n#####\n", 10.0).unwrap();
        assert_eq!(grid.width(), 5);
        assert_eq!(grid.height(), 3);
        assert_eq!(grid.cell_at(1, 1), Some(Cell::Pellet));
        assert_eq!(grid.cell_at(2, 1), Some(Cell::PowerPellet));
        assert_eq!(grid.cell_at(3, 1), Some(Cell::Open));
        assert_eq!(grid.cell_at(5, 1), None);
        assert_eq!(grid.cell_center(1, 1), Vec2::new(15.0, 15.0));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(Grid::parse("", 20.0), Err(GridError::Empty));
        assert_eq!(
            Grid::parse("###\n##\n", 20.0),
            Err(GridError::RaggedRow {
                row: 1,
                expected: 3,
                found: 2
            })
        );
        assert_eq!(
            Grid::parse("#x#", 20.0),
            Err(GridError::UnknownTile {
                row: 0,
                col: 1,
                tile: 'x'
            })
        );
    }

    proptest! {
        #[test]
        fn prop_outside_grid_is_wall(
            x in -10_000.0f32..10_000.0,
            y in -10_000.0f32..10_000.0,
        ) {
            let grid = Grid::classic(20.0);
            let size = grid.pixel_size();
            prop_assume!(x < 0.0 || y < 0.0 || x >= size.x || y >= size.y);
            prop_assert!(grid.is_wall(x, y, 0.0));
        }

        #[test]
        fn prop_in_bounds_matches_cell(
            x in 0.0f32..400.0,
            y in 0.0f32..400.0,
            buffer in 0.0f32..20.0,
        ) {
            let grid = Grid::classic(20.0);
            let (col, row) = grid.cell_index(x, y).unwrap();
            let cell = grid.cell_at(col, row).unwrap();
            prop_assert_eq!(grid.is_wall(x, y, buffer), cell.is_wall());
        }
    }
}
