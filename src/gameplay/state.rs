use crate::cards::card::Card;
use crate::cards::street::Street;
use crate::Chips;

/// Public betting state at a single decision point.
///
/// Constructed once per request, consumed read-only by the whole solve
/// pipeline, and discarded with the response. All chip amounts are
/// running totals: `committed_total` across the hand (antes included by
/// the state builder), `committed_on_street` within the current street.
/// The immutable methods expose the pot arithmetic everything downstream
/// is derived from.
#[derive(Debug, Clone, PartialEq)]
pub struct PublicState {
    pub num_players: usize,
    pub player_to_act: usize,
    pub button: usize,
    pub street: Street,
    pub board: Vec<Card>,
    pub sb: Chips,
    pub bb: Chips,
    pub ante: Chips,
    pub stacks: Vec<Chips>,
    pub committed_total: Vec<Chips>,
    pub committed_on_street: Vec<Chips>,
    /// size of the last voluntary raise on this street, 0 if none
    pub last_raise_size: Chips,
}

impl Default for PublicState {
    fn default() -> Self {
        Self {
            num_players: 0,
            player_to_act: 0,
            button: 0,
            street: Street::Pref,
            board: Vec::new(),
            sb: 1.0,
            bb: 2.0,
            ante: 0.0,
            stacks: Vec::new(),
            committed_total: Vec::new(),
            committed_on_street: Vec::new(),
            last_raise_size: 0.0,
        }
    }
}

impl PublicState {
    /// chips in the middle, uncalled bets included
    pub fn pot_total(&self) -> Chips {
        self.committed_total.iter().sum()
    }
    /// largest commitment on the current street
    pub fn current_bet_to_call(&self) -> Chips {
        self.committed_on_street.iter().fold(0.0, |a, &b| a.max(b))
    }
    pub fn contributed_this_street(&self, player: usize) -> Chips {
        self.committed_on_street.get(player).copied().unwrap_or(0.0)
    }
    pub fn amount_to_call(&self, player: usize) -> Chips {
        (self.current_bet_to_call() - self.contributed_this_street(player)).max(0.0)
    }
    /// the pot as it would stand immediately after `player` calls
    pub fn pot_after_call(&self, player: usize) -> Chips {
        self.pot_total() + self.amount_to_call(player)
    }
    pub fn stack(&self, player: usize) -> Chips {
        self.stacks.get(player).copied().unwrap_or(0.0)
    }
}

impl std::fmt::Display for PublicState {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "@ {:>6} {} btn {} act {}",
            self.pot_total(),
            self.street,
            self.button,
            self.player_to_act,
        )?;
        for (stack, spent) in self.stacks.iter().zip(self.committed_on_street.iter()) {
            write!(f, " {}/{}", stack, spent)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn heads_up() -> PublicState {
        PublicState {
            num_players: 2,
            street: Street::Flop,
            stacks: vec![100.0, 100.0],
            committed_total: vec![5.0, 9.0],
            committed_on_street: vec![0.0, 4.0],
            ..PublicState::default()
        }
    }

    #[test]
    fn pot_is_sum_of_commitments() {
        let state = heads_up();
        assert_eq!(
            state.pot_total(),
            state.committed_total.iter().sum::<f64>()
        );
        assert_eq!(state.pot_total(), 14.0);
    }

    #[test]
    fn to_call_is_clamped_shortfall() {
        let state = heads_up();
        assert_eq!(state.current_bet_to_call(), 4.0);
        assert_eq!(state.amount_to_call(0), 4.0);
        assert_eq!(state.amount_to_call(1), 0.0);
        assert_eq!(state.pot_after_call(0), 18.0);
    }

    #[test]
    fn out_of_range_player_contributes_nothing() {
        let state = heads_up();
        assert_eq!(state.contributed_this_street(7), 0.0);
        assert_eq!(state.stack(7), 0.0);
        assert_eq!(state.amount_to_call(7), 4.0);
    }
}
