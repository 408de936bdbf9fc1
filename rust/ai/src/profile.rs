use railbird_engine::table::Difficulty;

/// Per-tier tendencies for postflop play. Rates are probabilities in `0..=1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DifficultyProfile {
    /// Chance of an unforced fold when facing a bet
    pub fold_rate: f64,
    /// Base chance of raising a made hand
    pub raise_rate: f64,
    /// Chance of betting with nothing
    pub bluff_rate: f64,
    /// Chance of a loose call that the thresholds would reject
    pub mistake_rate: f64,
    /// Largest raise increment, in big blinds
    pub raise_multiplier: u32,
    /// Added to pot odds to get the strength needed to call
    pub call_margin: f64,
}

impl DifficultyProfile {
    pub fn for_difficulty(difficulty: Difficulty) -> Self {
        match difficulty {
            Difficulty::Easy => Self {
                fold_rate: 0.12,
                raise_rate: 0.08,
                bluff_rate: 0.0,
                mistake_rate: 0.25,
                raise_multiplier: 2,
                call_margin: 0.10,
            },
            Difficulty::Medium => Self {
                fold_rate: 0.07,
                raise_rate: 0.15,
                bluff_rate: 0.05,
                mistake_rate: 0.12,
                raise_multiplier: 3,
                call_margin: 0.05,
            },
            Difficulty::Hard => Self {
                fold_rate: 0.04,
                raise_rate: 0.22,
                bluff_rate: 0.10,
                mistake_rate: 0.05,
                raise_multiplier: 4,
                call_margin: 0.0,
            },
        }
    }
}
