use super::action::Action;
use super::rules::BettingRules;
use super::rules::MinBetRule;
use super::state::PublicState;
use crate::Chips;
use crate::AMOUNT_EPSILON;
use crate::NOISE_EPSILON;
use serde::Serialize;

/// inclusive range of legal bet/raise targets ("to" amounts)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RaiseBounds {
    pub min_to: Chips,
    pub max_to: Chips,
}

/// Everything the player to act may legally do, derived from the state.
///
/// `bet_bounds` is present only when opening the betting; `raise_bounds`
/// only when facing a live bet; never both. Absent bounds mean that
/// action class is unavailable (short stack, capped pot), not an error.
/// `suggestions` is a small built-in sizing list kept for callers that
/// do not run the discretizer.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct LegalActionSummary {
    pub can_check: bool,
    pub can_fold: bool,
    pub call_amount: Chips,
    #[serde(rename = "bet", skip_serializing_if = "Option::is_none")]
    pub bet_bounds: Option<RaiseBounds>,
    #[serde(rename = "raise", skip_serializing_if = "Option::is_none")]
    pub raise_bounds: Option<RaiseBounds>,
    pub suggestions: Vec<Action>,
}

/// the minimum raise increment: the last voluntary raise on this street,
/// or the big blind when there has been none
pub fn min_raise_size(state: &PublicState) -> Chips {
    if state.last_raise_size > 0.0 {
        state.last_raise_size
    } else {
        state.bb
    }
}

fn clamp(x: Chips, lo: Chips, hi: Chips) -> Chips {
    x.min(hi).max(lo)
}

/// Compute pot-limit legality for the player to act. Pure function of
/// the state; never fails.
pub fn compute_legal_actions(state: &PublicState, rules: &BettingRules) -> LegalActionSummary {
    let mut out = LegalActionSummary::default();
    let p = state.player_to_act;
    let atc = state.amount_to_call(p);
    let max_bet = state.current_bet_to_call();
    let me_on_street = state.contributed_this_street(p);
    let my_stack = state.stack(p);
    let pot_now = state.pot_total();

    let facing_bet = atc > 0.0 && max_bet > me_on_street + NOISE_EPSILON;
    out.can_check = !facing_bet;
    out.can_fold = facing_bet && my_stack > 0.0;
    out.call_amount = atc.min(my_stack);

    if !facing_bet {
        // opening bet: floor per rule, pot-limit cap at the pot itself
        let base_min = match rules.min_bet_rule {
            MinBetRule::BigBlind => state.bb,
            MinBetRule::OneChip => 1.0,
        };
        let min_to = base_min.max(0.0).min(my_stack);
        let max_to = pot_now.min(my_stack);
        if max_to >= min_to + AMOUNT_EPSILON {
            out.bet_bounds = Some(RaiseBounds { min_to, max_to });
            let half = clamp(0.5 * pot_now, min_to, max_to);
            let most = clamp(0.75 * pot_now, min_to, max_to);
            let full = clamp(pot_now, min_to, max_to);
            out.suggestions.push(Action::Bet(half));
            if (most - half).abs() > AMOUNT_EPSILON {
                out.suggestions.push(Action::Bet(most));
            }
            if (full - most).abs() > AMOUNT_EPSILON {
                out.suggestions.push(Action::Bet(full));
            }
            if max_to > full + AMOUNT_EPSILON {
                out.suggestions.push(Action::Shove(max_to));
            }
        }
    } else {
        // raise: min increment above the bet, raise-over-call capped by
        // the post-call pot and by the remaining stack
        let min_to = (max_bet + min_raise_size(state)).max(max_bet);
        let over_call_cap = state.pot_after_call(p).min((my_stack - atc).max(0.0));
        let max_to = max_bet + over_call_cap;
        if max_to >= min_to + AMOUNT_EPSILON {
            out.raise_bounds = Some(RaiseBounds { min_to, max_to });
            out.suggestions.push(Action::Raise(min_to));
            let pot_raise_to = clamp(max_bet + state.pot_after_call(p), min_to, max_to);
            if (pot_raise_to - min_to).abs() > AMOUNT_EPSILON {
                out.suggestions.push(Action::Raise(pot_raise_to));
            }
            if (max_to - pot_raise_to).abs() > AMOUNT_EPSILON {
                out.suggestions.push(Action::Shove(max_to));
            }
        }
    }

    out
}
