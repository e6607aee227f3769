use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Generated truth grid: mine placement plus the adjacency count of every safe cell.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Minefield {
    cells: Array2<Truth>,
    mine_count: CellCount,
}

impl Minefield {
    /// Builds the truth grid from a mine mask, counting mines around every safe cell.
    pub fn from_mine_mask(mine_mask: &Array2<bool>) -> Self {
        let cells = Array2::from_shape_fn(mine_mask.dim(), |(row, col)| {
            if mine_mask[(row, col)] {
                return Truth::Mine;
            }
            let coords = (row as Coord, col as Coord);
            let count = mine_mask
                .iter_neighbors(coords)
                .filter(|&pos| mine_mask[pos.to_nd_index()])
                .count();
            Truth::Count(count as u8)
        });
        let mine_count = mine_mask.iter().filter(|&&is_mine| is_mine).count() as CellCount;

        Self { cells, mine_count }
    }

    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        if size.0 == 0 || size.1 == 0 {
            return Err(GameError::InvalidSize);
        }

        let mut mine_mask: Array2<bool> = Array2::default(size.to_nd_index());
        for &coords in mine_coords {
            if coords.0 >= size.0 || coords.1 >= size.1 {
                return Err(GameError::InvalidCoords);
            }
            mine_mask[coords.to_nd_index()] = true;
        }

        Ok(Self::from_mine_mask(&mine_mask))
    }

    /// Config describing this field. Not checked against the safe-start limit, preset layouts may exceed it.
    pub fn game_config(&self) -> GameConfig {
        GameConfig::new_unchecked(self.size(), self.mine_count)
    }

    pub fn size(&self) -> Coord2 {
        let (rows, cols) = self.cells.dim();
        (rows as Coord, cols as Coord)
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn safe_cell_count(&self) -> CellCount {
        mult(self.size().0, self.size().1) - self.mine_count
    }

    pub fn contains_mine(&self, coords: Coord2) -> bool {
        self[coords].is_mine()
    }

    pub fn cells(&self) -> &Array2<Truth> {
        &self.cells
    }
}

impl Index<Coord2> for Minefield {
    type Output = Truth;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_adjacent_mines_at_edges_and_corners() {
        let field = Minefield::from_mine_coords((3, 3), &[(0, 0), (2, 2)]).unwrap();

        assert_eq!(field[(0, 0)], Truth::Mine);
        assert_eq!(field[(1, 1)], Truth::Count(2));
        assert_eq!(field[(0, 2)], Truth::Count(0));
        assert_eq!(field[(0, 1)], Truth::Count(1));
        assert_eq!(field[(2, 1)], Truth::Count(1));
        assert_eq!(field.mine_count(), 2);
        assert_eq!(field.safe_cell_count(), 7);
    }

    #[test]
    fn surrounded_cell_counts_eight() {
        let ring = [(0, 0), (0, 1), (0, 2), (1, 0), (1, 2), (2, 0), (2, 1), (2, 2)];
        let field = Minefield::from_mine_coords((3, 3), &ring).unwrap();

        assert_eq!(field[(1, 1)], Truth::Count(8));
    }

    #[test]
    fn rejects_out_of_bounds_mines() {
        assert_eq!(
            Minefield::from_mine_coords((3, 3), &[(3, 0)]),
            Err(GameError::InvalidCoords)
        );
        assert_eq!(
            Minefield::from_mine_coords((0, 3), &[]),
            Err(GameError::InvalidSize)
        );
    }
}
