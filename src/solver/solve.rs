use super::cfr::cfr_onestep;
use super::cfr::CfrConfig;
use super::eval::ImmediateOutlay;
use super::eval::RiverEvalConfig;
use super::eval::RiverFoldEquity;
use super::eval::UtilityModel;
use crate::cards::street::Street;
use crate::gameplay::action::Action;
use crate::gameplay::discretize::discretize_actions;
use crate::gameplay::discretize::DiscretizationConfig;
use crate::gameplay::legal::compute_legal_actions;
use crate::gameplay::legal::LegalActionSummary;
use crate::gameplay::rules::BettingRules;
use crate::gameplay::state::PublicState;
use crate::Probability;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SolveConfig {
    pub rules: BettingRules,
    pub discretization: DiscretizationConfig,
    /// regret-matching iterations; 0 solves to the uniform strategy
    pub cfr_iters: usize,
    pub river: RiverEvalConfig,
}

/// index-aligned solve output: `probabilities[i]` belongs to `actions[i]`
#[derive(Debug, Clone, PartialEq)]
pub struct SolveResult {
    pub legal: LegalActionSummary,
    pub actions: Vec<Action>,
    pub probabilities: Vec<Probability>,
}

/// full ordered action list: fold (when legal) and exactly one of
/// check/call, then the discretized aggression
fn action_list(legal: &LegalActionSummary, discrete: Vec<Action>) -> Vec<Action> {
    let mut out = Vec::with_capacity(discrete.len() + 2);
    if legal.can_check {
        out.push(Action::Check);
    } else {
        if legal.can_fold {
            out.push(Action::Fold);
        }
        out.push(Action::Call(legal.call_amount));
    }
    out.extend(discrete);
    out
}

/// Evaluate one decision node end to end: legality, discretization,
/// utility scoring, regret matching. Returns empty probabilities for a
/// degenerate empty action list rather than failing.
pub fn solve_one(state: &PublicState, config: &SolveConfig) -> SolveResult {
    let legal = compute_legal_actions(state, &config.rules);
    let discrete = discretize_actions(state, &legal, &config.discretization);
    let actions = action_list(&legal, discrete);
    if actions.is_empty() {
        return SolveResult {
            legal,
            actions,
            probabilities: Vec::new(),
        };
    }

    let probabilities = if config.cfr_iters > 0 {
        let river = RiverFoldEquity::from(config.river);
        let chips = ImmediateOutlay::default();
        let model: &dyn UtilityModel = match state.street {
            Street::Rive => &river,
            _ => &chips,
        };
        let utilities = model.utilities(state, &legal, &actions);
        let cfr = CfrConfig {
            iters: config.cfr_iters,
        };
        cfr_onestep(&utilities, &cfr).strategy
    } else {
        vec![1.0 / actions.len() as Probability; actions.len()]
    };

    log::debug!(
        "solved {} with {} actions over {} iterations",
        state,
        actions.len(),
        config.cfr_iters,
    );
    SolveResult {
        legal,
        actions,
        probabilities,
    }
}
