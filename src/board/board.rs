use super::piece::Piece;
use super::point::Point;

/// Snapshot of the visual 8x8 grid, row-major, as handed over by the
/// engine's true-state export.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Board([[Piece; 8]; 8]);

impl Board {
    pub fn at(&self, point: Point) -> Piece {
        self.0[point.y as usize][point.x as usize]
    }

    pub fn cells(&self) -> impl Iterator<Item = (Point, Piece)> + '_ {
        (0..8u8).flat_map(move |y| {
            (0..8u8).map(move |x| {
                let point = Point::new(x, y);
                (point, self.at(point))
            })
        })
    }
}

/// wire isomorphism over the engine's 8x8 signed cell grid
impl TryFrom<[[i8; 8]; 8]> for Board {
    type Error = &'static str;
    fn try_from(grid: [[i8; 8]; 8]) -> Result<Self, Self::Error> {
        let mut cells = [[Piece::Empty; 8]; 8];
        for (y, row) in grid.iter().enumerate() {
            for (x, n) in row.iter().enumerate() {
                cells[y][x] = Piece::try_from(*n)?;
            }
        }
        Ok(Self(cells))
    }
}
impl From<&Board> for [[i8; 8]; 8] {
    fn from(board: &Board) -> Self {
        let mut grid = [[0i8; 8]; 8];
        for (point, piece) in board.cells() {
            grid[point.y as usize][point.x as usize] = i8::from(piece);
        }
        grid
    }
}
