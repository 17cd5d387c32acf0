use crate::cards::card::Card;
use crate::cards::street::Street;
use crate::gameplay::discretize::DiscretizationConfig;
use crate::gameplay::rules::MinBetRule;
use crate::gameplay::state::PublicState;
use crate::solver::eval::RiverEvalConfig;
use crate::solver::solve::SolveConfig;
use crate::Chips;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SpotError {
    #[error("malformed spot json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unknown street \"{0}\"")]
    Street(String),
    #[error(
        "player arrays disagree: {stacks} stacks, {total} committed_total, {street} committed_on_street"
    )]
    Lengths {
        stacks: usize,
        total: usize,
        street: usize,
    },
    #[error("at least two players required, found {0}")]
    Players(usize),
    #[error("board card index out of range: {0}")]
    Card(i64),
}

/// Wire form of a spot description. Every field is optional with the
/// documented default; validity is checked after deserialization.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Spot {
    street: Option<String>,
    sb: Option<Chips>,
    bb: Option<Chips>,
    ante: Option<Chips>,
    to_act: Option<usize>,
    button: Option<usize>,
    last_raise_size: Option<Chips>,
    stacks: Vec<Chips>,
    committed_total: Vec<Chips>,
    committed_on_street: Vec<Chips>,
    board: Vec<i64>,
    min_bet_rule: Option<MinBetRule>,
    discretization: Option<DiscretizationSpot>,
    solver: Option<SolverSpot>,
}

/// partial override of the discretization menu
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct DiscretizationSpot {
    pot_fracs: Option<Vec<f64>>,
    include_min: Option<bool>,
    include_pot_raise: Option<bool>,
    include_all_in: Option<bool>,
}

/// partial override of the solver knobs
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SolverSpot {
    iters: Option<usize>,
    win_prob: Option<f64>,
    call_k: Option<f64>,
}

/// Parse a spot description into a state and a solve configuration.
/// Missing fields take their defaults silently; disagreeing player
/// arrays, fewer than two players, unknown streets and out-of-range
/// cards are invalid.
pub fn parse_spot(input: &str) -> Result<(PublicState, SolveConfig), SpotError> {
    let spot: Spot = serde_json::from_str(input)?;

    let street = match spot.street.as_deref() {
        None => Street::Pref,
        Some(name) => name.parse().map_err(SpotError::Street)?,
    };
    let num_players = spot.stacks.len();
    if num_players < 2 {
        return Err(SpotError::Players(num_players));
    }
    if spot.committed_total.len() != num_players || spot.committed_on_street.len() != num_players {
        return Err(SpotError::Lengths {
            stacks: num_players,
            total: spot.committed_total.len(),
            street: spot.committed_on_street.len(),
        });
    }
    let board = spot
        .board
        .iter()
        .map(|&i| match u8::try_from(i) {
            Ok(n) if n < 52 => Ok(Card::from(n)),
            _ => Err(SpotError::Card(i)),
        })
        .collect::<Result<Vec<Card>, SpotError>>()?;

    let state = PublicState {
        num_players,
        player_to_act: spot.to_act.unwrap_or(0),
        button: spot.button.unwrap_or(0),
        street,
        board,
        sb: spot.sb.unwrap_or(1.0),
        bb: spot.bb.unwrap_or(2.0),
        ante: spot.ante.unwrap_or(0.0),
        stacks: spot.stacks,
        committed_total: spot.committed_total,
        committed_on_street: spot.committed_on_street,
        last_raise_size: spot.last_raise_size.unwrap_or(0.0),
    };

    let mut config = SolveConfig::default();
    if let Some(rule) = spot.min_bet_rule {
        config.rules.min_bet_rule = rule;
    }
    if let Some(disc) = spot.discretization {
        let defaults = DiscretizationConfig::default();
        config.discretization = DiscretizationConfig {
            pot_fracs: disc.pot_fracs.unwrap_or(defaults.pot_fracs),
            include_min: disc.include_min.unwrap_or(defaults.include_min),
            include_pot_raise: disc.include_pot_raise.unwrap_or(defaults.include_pot_raise),
            include_all_in: disc.include_all_in.unwrap_or(defaults.include_all_in),
        };
    }
    if let Some(solver) = spot.solver {
        let defaults = RiverEvalConfig::default();
        config.cfr_iters = solver.iters.unwrap_or(0);
        config.river = RiverEvalConfig {
            win_prob: solver.win_prob.unwrap_or(defaults.win_prob),
            call_k: solver.call_k.unwrap_or(defaults.call_k),
        };
    }
    Ok((state, config))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_fill_missing_fields() {
        let (state, config) = parse_spot(
            r#"{"stacks":[100,100],"committed_total":[1,2],"committed_on_street":[1,2]}"#,
        )
        .unwrap();
        assert_eq!(state.street, Street::Pref);
        assert_eq!(state.sb, 1.0);
        assert_eq!(state.bb, 2.0);
        assert_eq!(state.ante, 0.0);
        assert_eq!(state.player_to_act, 0);
        assert_eq!(state.button, 0);
        assert_eq!(state.last_raise_size, 0.0);
        assert_eq!(state.num_players, 2);
        assert!(state.board.is_empty());
        assert_eq!(config.cfr_iters, 0);
        assert_eq!(config.rules.min_bet_rule, MinBetRule::BigBlind);
    }

    #[test]
    fn full_spot_round_trips() {
        let (state, config) = parse_spot(
            r#"{
                "street": "river",
                "sb": 0.5, "bb": 1.0, "ante": 0.1,
                "to_act": 1, "button": 1,
                "last_raise_size": 4.0,
                "stacks": [95, 91],
                "committed_total": [5, 9],
                "committed_on_street": [0, 4],
                "board": [0, 13, 26, 39, 51],
                "min_bet_rule": "OneChip",
                "discretization": {"pot_fracs": [0.5], "include_all_in": false},
                "solver": {"iters": 200, "win_prob": 0.7}
            }"#,
        )
        .unwrap();
        assert_eq!(state.street, Street::Rive);
        assert_eq!(state.player_to_act, 1);
        assert_eq!(state.board.len(), 5);
        assert_eq!(state.board[4], Card::from(51u8));
        assert_eq!(config.rules.min_bet_rule, MinBetRule::OneChip);
        assert_eq!(config.discretization.pot_fracs, vec![0.5]);
        assert!(!config.discretization.include_all_in);
        assert!(config.discretization.include_min); // untouched default
        assert_eq!(config.cfr_iters, 200);
        assert_eq!(config.river.win_prob, 0.7);
        assert_eq!(config.river.call_k, 0.5); // untouched default
    }

    #[test]
    fn disagreeing_lengths_are_invalid() {
        let err = parse_spot(
            r#"{"stacks":[100,100],"committed_total":[1],"committed_on_street":[1,2]}"#,
        )
        .unwrap_err();
        assert!(matches!(err, SpotError::Lengths { total: 1, .. }));
    }

    #[test]
    fn lone_player_is_invalid() {
        let err = parse_spot(
            r#"{"stacks":[100],"committed_total":[1],"committed_on_street":[1]}"#,
        )
        .unwrap_err();
        assert!(matches!(err, SpotError::Players(1)));
    }

    #[test]
    fn unknown_street_is_invalid() {
        let err = parse_spot(
            r#"{"street":"showdown","stacks":[100,100],"committed_total":[1,2],"committed_on_street":[1,2]}"#,
        )
        .unwrap_err();
        assert!(matches!(err, SpotError::Street(_)));
    }

    #[test]
    fn out_of_range_board_card_is_invalid() {
        let err = parse_spot(
            r#"{"stacks":[100,100],"committed_total":[1,2],"committed_on_street":[1,2],"board":[52]}"#,
        )
        .unwrap_err();
        assert!(matches!(err, SpotError::Card(52)));
    }
}
