use super::action::Action;
use super::legal::LegalActionSummary;
use super::state::PublicState;
use crate::Chips;
use crate::AMOUNT_EPSILON;

/// Sizing menu for turning a legal continuum into candidate actions.
///
/// Pot fractions are taken of the *current* pot for opening bets and of
/// the *post-call* pot for raises: a raise target is the size the pot
/// would reach, which is how pot-limit players think about raise sizing.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscretizationConfig {
    pub pot_fracs: Vec<f64>,
    pub include_min: bool,
    pub include_pot_raise: bool,
    pub include_all_in: bool,
}

impl Default for DiscretizationConfig {
    fn default() -> Self {
        Self {
            pot_fracs: vec![0.33, 0.5, 0.75, 1.0],
            include_min: true,
            include_pot_raise: true,
            include_all_in: true,
        }
    }
}

fn clamp(x: Chips, lo: Chips, hi: Chips) -> Chips {
    x.min(hi).max(lo)
}

/// Expand legal bounds into an ordered candidate list. First-inserted
/// order is preserved and no two entries share a variant and an amount
/// within the dedup tolerance.
pub fn discretize_actions(
    state: &PublicState,
    legal: &LegalActionSummary,
    config: &DiscretizationConfig,
) -> Vec<Action> {
    fn push(out: &mut Vec<Action>, action: Action) {
        if !out.iter().any(|a| a.redundant(&action)) {
            out.push(action);
        }
    }
    let mut out: Vec<Action> = Vec::new();
    let pot_now = state.pot_total();

    if let Some(bounds) = legal.bet_bounds {
        let (lo, hi) = (bounds.min_to, bounds.max_to);
        if config.include_min {
            push(&mut out, Action::Bet(lo));
        }
        for f in config.pot_fracs.iter() {
            push(&mut out, Action::Bet(clamp(f * pot_now, lo, hi)));
        }
        if config.include_all_in && hi > lo + AMOUNT_EPSILON {
            push(&mut out, Action::Shove(hi));
        }
    }
    if let Some(bounds) = legal.raise_bounds {
        let (lo, hi) = (bounds.min_to, bounds.max_to);
        let max_bet = state.current_bet_to_call();
        let pot_after = state.pot_after_call(state.player_to_act);
        if config.include_min {
            push(&mut out, Action::Raise(lo));
        }
        if config.include_pot_raise {
            push(&mut out, Action::Raise(clamp(max_bet + pot_after, lo, hi)));
        }
        for f in config.pot_fracs.iter() {
            push(&mut out, Action::Raise(clamp(max_bet + f * pot_after, lo, hi)));
        }
        if config.include_all_in && hi > lo + AMOUNT_EPSILON {
            push(&mut out, Action::Shove(hi));
        }
    }
    out
}
