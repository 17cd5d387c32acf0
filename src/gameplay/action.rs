use crate::Chips;
use crate::AMOUNT_EPSILON;

/// A betting action. Bet, Raise and Shove carry the target "to" amount,
/// the new total committed on this street; Call carries the amount paid
/// by the caller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    Fold,
    Check,
    Call(Chips),
    Bet(Chips),
    Raise(Chips),
    Shove(Chips),
}

impl Action {
    pub fn amount(&self) -> Chips {
        match self {
            Self::Fold | Self::Check => 0.0,
            Self::Call(x) | Self::Bet(x) | Self::Raise(x) | Self::Shove(x) => *x,
        }
    }
    pub fn label(&self) -> &'static str {
        match self {
            Self::Fold => "fold",
            Self::Check => "check",
            Self::Call(_) => "call",
            Self::Bet(_) => "bet",
            Self::Raise(_) => "raise",
            Self::Shove(_) => "allin",
        }
    }
    /// same variant with an amount difference below the dedup tolerance
    pub fn redundant(&self, other: &Self) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
            && (self.amount() - other.amount()).abs() < AMOUNT_EPSILON
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Fold => write!(f, "FOLD"),
            Self::Check => write!(f, "CHECK"),
            Self::Call(amount) => write!(f, "CALL  {}", amount),
            Self::Bet(amount) => write!(f, "BET   {}", amount),
            Self::Raise(amount) => write!(f, "RAISE {}", amount),
            Self::Shove(amount) => write!(f, "SHOVE {}", amount),
        }
    }
}

impl serde::Serialize for Action {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut s = serializer.serialize_struct("Action", 2)?;
        s.serialize_field("type", self.label())?;
        s.serialize_field("amount", &self.amount())?;
        s.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redundancy_is_per_variant() {
        assert!(Action::Bet(10.0).redundant(&Action::Bet(10.0 + 1e-12)));
        assert!(!Action::Bet(10.0).redundant(&Action::Raise(10.0)));
        assert!(!Action::Bet(10.0).redundant(&Action::Bet(10.1)));
    }

    #[test]
    fn serializes_type_and_amount() {
        let json = serde_json::to_value(Action::Shove(25.0)).unwrap();
        assert_eq!(json["type"], "allin");
        assert_eq!(json["amount"], 25.0);
    }
}
