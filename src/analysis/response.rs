use crate::gameplay::legal::LegalActionSummary;
use crate::solver::solve::SolveResult;
use crate::Chips;
use crate::Probability;
use serde::Serialize;

/// one action of the solved strategy, index-aligned with the solve
#[derive(Debug, Serialize)]
pub struct Entry {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub amount: Chips,
    pub prob: Probability,
}

/// Wire form of a solve: the legal summary plus the strategy. The array
/// key predates the solver and is kept for backward compatibility even
/// though the probabilities need not be uniform anymore.
#[derive(Debug, Serialize)]
pub struct Response {
    pub legal: LegalActionSummary,
    #[serde(rename = "uniform_actions")]
    pub actions: Vec<Entry>,
}

impl From<SolveResult> for Response {
    fn from(result: SolveResult) -> Self {
        let actions = result
            .actions
            .iter()
            .zip(result.probabilities.iter())
            .map(|(action, prob)| Entry {
                kind: action.label(),
                amount: action.amount(),
                prob: *prob,
            })
            .collect();
        Self {
            legal: result.legal,
            actions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::solve_spot_json;
    use crate::cards::street::Street;
    use crate::gameplay::state::PublicState;
    use crate::solver::solve::solve_one;
    use crate::solver::solve::SolveConfig;

    fn open_flop() -> PublicState {
        PublicState {
            num_players: 2,
            street: Street::Flop,
            stacks: vec![100.0, 100.0],
            committed_total: vec![5.0, 5.0],
            committed_on_street: vec![0.0, 0.0],
            ..PublicState::default()
        }
    }

    #[test]
    fn response_shape_matches_the_wire_contract() {
        let result = solve_one(&open_flop(), &SolveConfig::default());
        let json = serde_json::to_value(Response::from(result)).unwrap();
        assert!(json["legal"]["can_check"].as_bool().unwrap());
        assert!(json["legal"]["bet"]["min_to"].is_number());
        assert!(json["legal"].get("raise").is_none());
        assert!(json["legal"]["suggestions"].is_array());
        let actions = json["uniform_actions"].as_array().unwrap();
        assert!(!actions.is_empty());
        for entry in actions {
            assert!(entry["type"].is_string());
            assert!(entry["amount"].is_number());
            assert!(entry["prob"].is_number());
        }
    }

    #[test]
    fn probabilities_on_the_wire_sum_to_one() {
        let spot = r#"{
            "street": "flop",
            "stacks": [100, 100],
            "committed_total": [5, 5],
            "committed_on_street": [0, 0],
            "solver": {"iters": 100}
        }"#;
        let json: serde_json::Value =
            serde_json::from_str(&solve_spot_json(spot).unwrap()).unwrap();
        let total: f64 = json["uniform_actions"]
            .as_array()
            .unwrap()
            .iter()
            .map(|entry| entry["prob"].as_f64().unwrap())
            .sum();
        assert!((total - 1.0).abs() < 1e-6);
    }
}
