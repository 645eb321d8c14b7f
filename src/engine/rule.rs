/// What happens to a cell in the next generation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fate {
    Stay,
    Death,
    Birth,
}

/// Number of distinct neighbor counts, `0..=8`
const COUNTS: usize = 9;

/// Lookup table for the B3/S23 ruleset, indexed by `[alive][neighbors]`
const FATES: [[Fate; COUNTS]; 2] = generate_fates();

const fn generate_fates() -> [[Fate; COUNTS]; 2] {
    let mut table = [[Fate::Stay; COUNTS]; 2];
    let mut n = 0;
    while n < COUNTS {
        // dead cells
        if n == 3 {
            table[0][n] = Fate::Birth;
        }
        // live cells
        if n < 2 || n > 3 {
            table[1][n] = Fate::Death;
        }
        n += 1;
    }
    table
}

/// Decides the fate of a cell from its current state and live neighbor count
#[inline]
pub fn decide_fate(alive: bool, neighbors: u8) -> Fate {
    debug_assert!(neighbors <= 8, "neighbor count out of range");
    FATES[alive as usize][neighbors as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rules_match_conway_life() {
        assert_eq!(decide_fate(true, 2), Fate::Stay);
        assert_eq!(decide_fate(true, 3), Fate::Stay);
        assert_eq!(decide_fate(false, 3), Fate::Birth);

        assert_eq!(decide_fate(true, 0), Fate::Death);
        assert_eq!(decide_fate(true, 1), Fate::Death);
        assert_eq!(decide_fate(true, 4), Fate::Death);
        assert_eq!(decide_fate(true, 8), Fate::Death);
        assert_eq!(decide_fate(false, 2), Fate::Stay);
        assert_eq!(decide_fate(false, 4), Fate::Stay);
    }

    #[test]
    fn only_three_births() {
        let births = (0..=8).filter(|&n| decide_fate(false, n) == Fate::Birth);

        assert_eq!(births.collect::<Vec<_>>(), vec![3]);
    }
}
