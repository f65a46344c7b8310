//! Activity heat map used to prune far-away cells from the search

use super::Pos;

/// Per-cell count of occupied Chebyshev neighbours.
///
/// Every stone placement bumps its (up to) eight neighbours and every removal
/// decrements them again, so the two operations are exact inverses. Counts are
/// kept for occupied cells too; whether a cell is searchable is decided by
/// [`Board::is_candidate`](super::Board::is_candidate), which also requires the
/// cell to be empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeatMap {
    size: usize,
    counts: Vec<u8>,
}

impl HeatMap {
    /// Create a zeroed heat map for a `size x size` board
    pub fn new(size: usize) -> Self {
        Self {
            size,
            counts: vec![0; size * size],
        }
    }

    #[inline]
    fn index(&self, pos: Pos) -> usize {
        pos.row as usize * self.size + pos.col as usize
    }

    /// Heat at a position
    #[inline]
    pub fn get(&self, pos: Pos) -> u8 {
        self.counts[self.index(pos)]
    }

    /// Account for a stone placed at `pos`
    pub fn on_place(&mut self, pos: Pos) {
        for idx in self.neighbours(pos) {
            self.counts[idx] += 1;
        }
    }

    /// Account for a stone removed from `pos`
    pub fn on_remove(&mut self, pos: Pos) {
        for idx in self.neighbours(pos) {
            debug_assert!(self.counts[idx] > 0, "heat underflow next to {pos}");
            self.counts[idx] -= 1;
        }
    }

    /// Reset every count to zero
    pub fn clear(&mut self) {
        self.counts.fill(0);
    }

    /// Indices of the in-bounds cells within distance 1, excluding `pos` itself
    fn neighbours(&self, pos: Pos) -> impl Iterator<Item = usize> {
        let size = self.size as i32;
        let (row, col) = (i32::from(pos.row), i32::from(pos.col));
        (-1..=1)
            .flat_map(move |dr| (-1..=1).map(move |dc| (row + dr, col + dc)))
            .filter(move |&(r, c)| {
                (r, c) != (row, col) && r >= 0 && r < size && c >= 0 && c < size
            })
            .map(move |(r, c)| (r * size + c) as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_heats_neighbours() {
        let mut heat = HeatMap::new(15);
        heat.on_place(Pos::new(7, 7));

        for r in 6..=8u8 {
            for c in 6..=8u8 {
                let expected = if (r, c) == (7, 7) { 0 } else { 1 };
                assert_eq!(heat.get(Pos::new(r, c)), expected, "heat at ({r}, {c})");
            }
        }
        assert_eq!(heat.get(Pos::new(5, 7)), 0);
    }

    #[test]
    fn test_corner_stays_in_bounds() {
        let mut heat = HeatMap::new(15);
        heat.on_place(Pos::new(0, 0));

        assert_eq!(heat.get(Pos::new(0, 1)), 1);
        assert_eq!(heat.get(Pos::new(1, 0)), 1);
        assert_eq!(heat.get(Pos::new(1, 1)), 1);
        assert_eq!(heat.counts.iter().map(|&c| u32::from(c)).sum::<u32>(), 3);
    }

    #[test]
    fn test_overlapping_stones_accumulate() {
        let mut heat = HeatMap::new(15);
        heat.on_place(Pos::new(7, 7));
        heat.on_place(Pos::new(7, 9));

        assert_eq!(heat.get(Pos::new(7, 8)), 2);
        assert_eq!(heat.get(Pos::new(6, 8)), 2);
        assert_eq!(heat.get(Pos::new(6, 6)), 1);
    }

    #[test]
    fn test_remove_is_exact_inverse() {
        let mut heat = HeatMap::new(15);
        heat.on_place(Pos::new(3, 3));
        let before = heat.clone();

        heat.on_place(Pos::new(4, 4));
        heat.on_remove(Pos::new(4, 4));

        assert_eq!(heat, before);
    }
}
