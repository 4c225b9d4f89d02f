/// Dense row-major storage addressed by `(x, y)`.
///
/// Used both for the maze's two edge arrays and for the per-call scratch
/// buffers of the algorithms (visited marks, walk states, edge tallies).
#[derive(Debug, Clone, PartialEq)]
pub struct Grid<T> {
    pub data: Box<[T]>,
    width: usize,
    height: usize,
}

impl<T: Clone> Grid<T> {
    pub fn new(width: usize, height: usize, value: T) -> Self {
        let data = vec![value; width * height].into_boxed_slice();
        Grid {
            data,
            width,
            height,
        }
    }

    /// Overwrites every slot with `value`.
    pub fn fill(&mut self, value: T) {
        self.data.iter_mut().for_each(|slot| *slot = value.clone());
    }

    /// Iterates `((x, y), value)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = ((usize, usize), T)> + '_ {
        self.data
            .iter()
            .enumerate()
            .map(|(idx, value)| ((idx % self.width, idx / self.width), value.clone()))
    }
}

impl<T> Grid<T> {
    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    fn ravel_index(&self, x: usize, y: usize) -> usize {
        assert!(
            x < self.width && y < self.height,
            "coordinate ({x}, {y}) is out of bounds for a {}x{} grid",
            self.width,
            self.height
        );
        y * self.width + x
    }
}

impl<T> std::ops::Index<(usize, usize)> for Grid<T> {
    type Output = T;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        &self.data[self.ravel_index(index.0, index.1)]
    }
}

impl<T> std::ops::IndexMut<(usize, usize)> for Grid<T> {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output {
        let idx = self.ravel_index(index.0, index.1);
        &mut self.data[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_indexing() {
        let mut grid = Grid::new(3, 2, 0u8);
        grid[(2, 1)] = 7;
        assert_eq!(grid[(2, 1)], 7);
        assert_eq!(grid.data[5], 7);
    }

    #[test]
    fn test_iter_yields_coordinates() {
        let mut grid = Grid::new(2, 2, false);
        grid[(1, 0)] = true;
        let set = grid.iter().filter(|&(_, v)| v).map(|(c, _)| c).collect::<Vec<_>>();
        assert_eq!(set, vec![(1, 0)]);
    }

    #[test]
    #[should_panic]
    fn test_out_of_bounds_panics() {
        let grid = Grid::new(3, 3, 0u8);
        let _ = grid[(3, 0)];
    }

    #[test]
    fn test_empty_grid() {
        let grid = Grid::new(0, 4, 0u8);
        assert_eq!(grid.iter().count(), 0);
    }
}
