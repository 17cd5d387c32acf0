/// one of 13 ranks, 0 = Deuce through 12 = Ace
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Rank(u8);

impl Rank {
    const CHARS: [char; 13] = [
        '2', '3', '4', '5', '6', '7', '8', '9', 'T', 'J', 'Q', 'K', 'A',
    ];
}

impl From<u8> for Rank {
    fn from(n: u8) -> Self {
        assert!(n < 13, "rank out of bounds");
        Self(n)
    }
}

impl From<Rank> for u8 {
    fn from(r: Rank) -> Self {
        r.0
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", Self::CHARS[self.0 as usize])
    }
}
