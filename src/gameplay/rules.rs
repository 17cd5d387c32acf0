use serde::Deserialize;

/// minimum opening-bet convention
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub enum MinBetRule {
    #[default]
    BigBlind,
    OneChip,
}

/// betting structure knobs that are not part of the public state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BettingRules {
    pub min_bet_rule: MinBetRule,
}
