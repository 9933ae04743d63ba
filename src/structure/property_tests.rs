//! Property tests for the league pyramid

use proptest::prelude::*;

use crate::structure::{LeagueStructure, Position};

/// Any position inside a doubling pyramid of `divisions` divisions
fn position_strategy(divisions: u32) -> impl Strategy<Value = Position> {
    (1..=divisions).prop_flat_map(|division| {
        (Just(division), 1..=(1u32 << (division - 1)))
            .prop_map(|(division, league)| Position::new(division, league))
    })
}

proptest! {
    /// Every generated position is accepted by the standard pyramid
    #[test]
    fn prop_generated_positions_are_valid(position in position_strategy(8)) {
        let structure = LeagueStructure::standard();
        prop_assert_eq!(structure.validate(position), Ok(position));
    }

    /// Promotion never leaves the pyramid
    #[test]
    fn prop_promotion_stays_valid(position in position_strategy(8)) {
        let structure = LeagueStructure::standard();
        match position.promoted() {
            Some(up) => {
                prop_assert!(structure.contains(up));
                prop_assert_eq!(up.division, position.division - 1);
            }
            None => prop_assert_eq!(position, Position::new(1, 1)),
        }
    }

    /// Repeated promotion always ends at the top league
    #[test]
    fn prop_promotion_chain_reaches_top(position in position_strategy(8)) {
        let mut current = position;
        let mut steps = 0;
        while let Some(up) = current.promoted() {
            current = up;
            steps += 1;
        }
        prop_assert_eq!(current, Position::new(1, 1));
        prop_assert_eq!(steps, position.division - 1);
    }

    /// Leagues past the division's count are rejected
    #[test]
    fn prop_league_overflow_rejected(division in 1u32..=8, excess in 1u32..100) {
        let structure = LeagueStructure::standard();
        let count = structure.league_count(division).unwrap();
        prop_assert!(structure.validate(Position::new(division, count + excess)).is_err());
    }
}
