use crate::gameplay::action::Action;
use crate::gameplay::legal::LegalActionSummary;
use crate::gameplay::state::PublicState;
use crate::Probability;
use crate::Utility;
use crate::CALL_PROB_CEILING;
use crate::CALL_PROB_FLOOR;
use crate::FOLD_PENALTY;
use crate::SIZE_RATIO_CAP;

/// A scoring strategy assigning one utility per candidate action, from
/// the point of view of the player to act. Implementations are pure;
/// the regret matcher treats the resulting vector as fixed.
pub trait UtilityModel {
    fn utilities(
        &self,
        state: &PublicState,
        legal: &LegalActionSummary,
        actions: &[Action],
    ) -> Vec<Utility>;
}

/// Chip-accounting heuristic used off the river: every action scores its
/// immediate outlay and nothing else. Opponent response and showdown
/// equity are modeled only on the river.
#[derive(Debug, Clone, Copy)]
pub struct ImmediateOutlay {
    pub fold_penalty: Utility,
}

impl Default for ImmediateOutlay {
    fn default() -> Self {
        Self {
            fold_penalty: FOLD_PENALTY,
        }
    }
}

impl UtilityModel for ImmediateOutlay {
    fn utilities(
        &self,
        state: &PublicState,
        legal: &LegalActionSummary,
        actions: &[Action],
    ) -> Vec<Utility> {
        let me_on_street = state.contributed_this_street(state.player_to_act);
        actions
            .iter()
            .map(|action| match action {
                Action::Check => 0.0,
                Action::Fold => self.fold_penalty,
                Action::Call(_) => -legal.call_amount,
                Action::Bet(to) | Action::Raise(to) | Action::Shove(to) => {
                    -(to - me_on_street).max(0.0)
                }
            })
            .collect()
    }
}

/// external knobs of the river model
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiverEvalConfig {
    /// estimated showdown win probability when called
    pub win_prob: Probability,
    /// slope of the opponent fold/call response to bet size
    pub call_k: f64,
}

impl Default for RiverEvalConfig {
    fn default() -> Self {
        Self {
            win_prob: 0.5,
            call_k: 0.5,
        }
    }
}

/// River fold-equity heuristic, heads-up only: the opponent calls with a
/// probability that falls linearly in the bet size as a fraction of the
/// pot, and a called showdown resolves by `win_prob`.
#[derive(Debug, Clone, Copy)]
pub struct RiverFoldEquity {
    pub win_prob: Probability,
    pub call_k: f64,
    pub fold_penalty: Utility,
}

impl From<RiverEvalConfig> for RiverFoldEquity {
    fn from(config: RiverEvalConfig) -> Self {
        Self {
            win_prob: config.win_prob,
            call_k: config.call_k,
            fold_penalty: FOLD_PENALTY,
        }
    }
}

impl RiverFoldEquity {
    /// linear response curve, with the size ratio capped to keep the
    /// probability off degenerate extremes
    fn call_prob(&self, to_amount: f64, pot_now: f64) -> Probability {
        let frac = (to_amount / pot_now.max(1e-9)).clamp(0.0, SIZE_RATIO_CAP);
        (1.0 - self.call_k * frac).clamp(CALL_PROB_FLOOR, CALL_PROB_CEILING)
    }
}

impl UtilityModel for RiverFoldEquity {
    fn utilities(
        &self,
        state: &PublicState,
        legal: &LegalActionSummary,
        actions: &[Action],
    ) -> Vec<Utility> {
        let p = state.player_to_act;
        let pot_now = state.pot_total();
        let me_on = state.contributed_this_street(p);
        // heads-up: the opponent is player 1 - p, contributing nothing
        // if the state is not actually two-handed
        let opp_on = match 1usize.checked_sub(p) {
            Some(q) => state.contributed_this_street(q),
            None => 0.0,
        };
        let w = self.win_prob;
        actions
            .iter()
            .map(|action| match action {
                Action::Check => 0.0,
                Action::Fold => self.fold_penalty,
                Action::Call(_) => {
                    let pay = legal.call_amount;
                    -pay + w * (pot_now + pay)
                }
                Action::Bet(to) => {
                    let call = self.call_prob(*to, pot_now);
                    let fold = 1.0 - call;
                    fold * pot_now + call * (-to + w * (pot_now + 2.0 * to))
                }
                Action::Raise(to) | Action::Shove(to) => {
                    let pay = (to - me_on).max(0.0);
                    let opp_call = (to - opp_on).max(0.0);
                    let call = self.call_prob(*to, pot_now);
                    let fold = 1.0 - call;
                    fold * (pot_now + pay) + call * (-pay + w * (pot_now + pay + opp_call))
                }
            })
            .collect()
    }
}
