use super::rank::Rank;
use super::suit::Suit;

/// one of 52 cards, indexed 0..52 with rank = index % 13, suit = index / 13
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Card(u8);

impl Card {
    pub fn rank(&self) -> Rank {
        Rank::from(self.0 % 13)
    }
    pub fn suit(&self) -> Suit {
        Suit::from(self.0 / 13)
    }
    pub fn index(&self) -> u8 {
        self.0
    }
}

impl From<u8> for Card {
    fn from(n: u8) -> Self {
        assert!(n < 52, "card out of bounds");
        Self(n)
    }
}

impl From<(Rank, Suit)> for Card {
    fn from((rank, suit): (Rank, Suit)) -> Self {
        Self(u8::from(suit) * 13 + u8::from(rank))
    }
}

impl From<Card> for u8 {
    fn from(c: Card) -> Self {
        c.0
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.rank(), self.suit())
    }
}

impl crate::Arbitrary for Card {
    fn random() -> Self {
        use rand::Rng;
        Self(rand::thread_rng().gen_range(0..52))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rank_suit_decomposition() {
        let card = Card::from(30u8);
        assert_eq!(u8::from(card.rank()), 4);
        assert_eq!(u8::from(card.suit()), 2);
        assert_eq!(Card::from((card.rank(), card.suit())), card);
    }

    #[test]
    fn display_round_trip() {
        assert_eq!(Card::from(12u8).to_string(), "Ac");
        assert_eq!(Card::from(13u8).to_string(), "2d");
        assert_eq!(Card::from(51u8).to_string(), "As");
    }
}
