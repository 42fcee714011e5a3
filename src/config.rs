use anyhow::{Context, Result};
use draughts_core::Side;
use draughts_engine::{DraughtsAI, Level};

const WHITE_LEVEL_VAR: &str = "DRAUGHTS_WHITE_LEVEL";
const BLACK_LEVEL_VAR: &str = "DRAUGHTS_BLACK_LEVEL";
const SEED_VAR: &str = "DRAUGHTS_SEED";
const MAX_PLIES_VAR: &str = "DRAUGHTS_MAX_PLIES";

const DEFAULT_MAX_PLIES: usize = 200;

/// Self-play settings read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverConfig {
    pub white: Level,
    pub black: Level,
    pub seed: Option<u64>,
    /// No draw rule exists, so two kings could otherwise shuffle forever.
    pub max_plies: usize,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            white: Level::Minimax,
            black: Level::Greedy,
            seed: None,
            max_plies: DEFAULT_MAX_PLIES,
        }
    }
}

impl DriverConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();
        if let Some(value) = lookup(WHITE_LEVEL_VAR) {
            config.white = value.parse().with_context(|| format!("invalid {WHITE_LEVEL_VAR}"))?;
        }
        if let Some(value) = lookup(BLACK_LEVEL_VAR) {
            config.black = value.parse().with_context(|| format!("invalid {BLACK_LEVEL_VAR}"))?;
        }
        if let Some(value) = lookup(SEED_VAR) {
            let seed = value
                .trim()
                .parse()
                .with_context(|| format!("invalid {SEED_VAR}: {value:?}"))?;
            config.seed = Some(seed);
        }
        if let Some(value) = lookup(MAX_PLIES_VAR) {
            config.max_plies = value
                .trim()
                .parse()
                .with_context(|| format!("invalid {MAX_PLIES_VAR}: {value:?}"))?;
        }
        Ok(config)
    }

    pub fn ai(&self, side: Side) -> DraughtsAI {
        let level = match side {
            Side::White => self.white,
            Side::Black => self.black,
        };
        match self.seed {
            Some(seed) => DraughtsAI::with_seed(level, seed),
            None => DraughtsAI::new(level),
        }
    }
}
