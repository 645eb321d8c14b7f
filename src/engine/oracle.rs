use super::{
    coord_set::CoordinateSet,
    neighbors::count_live_neighbors,
    rule::{Fate, decide_fate},
    torus::ToroidalGrid,
};

/// Computes the next generation by evaluating every cell of the grid
///
/// This is the naive O(area) evaluation of the same rule [`LifeEngine`] uses.
/// It exists to check the incremental engine against, and as a baseline for
/// benchmarks.
///
/// [`LifeEngine`]: super::LifeEngine
pub fn full_scan_step(grid: &ToroidalGrid, live: &CoordinateSet) -> CoordinateSet {
    grid.cells()
        .filter(|&pos| {
            let alive = live.contains(pos);
            match decide_fate(alive, count_live_neighbors(grid, pos, live)) {
                Fate::Birth => true,
                Fate::Death => false,
                Fate::Stay => alive,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Pos2;

    #[test]
    fn blinker_flips() {
        let grid = ToroidalGrid::new(5, 5).unwrap();
        let live: CoordinateSet = [(1, 0), (1, 1), (1, 2)].into_iter().map(Pos2::from).collect();

        let next = full_scan_step(&grid, &live);

        let expected: CoordinateSet = [(0, 1), (1, 1), (2, 1)].into_iter().map(Pos2::from).collect();
        assert_eq!(next, expected);
    }
}
