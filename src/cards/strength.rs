use super::card::Card;

/// the 9 hand categories, weakest to strongest. discriminants are the
/// category bits of the packed comparison key.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Ranking {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOAK = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOAK = 7,
    StraightFlush = 8,
}

impl From<u8> for Ranking {
    fn from(n: u8) -> Self {
        match n {
            0 => Self::HighCard,
            1 => Self::OnePair,
            2 => Self::TwoPair,
            3 => Self::ThreeOAK,
            4 => Self::Straight,
            5 => Self::Flush,
            6 => Self::FullHouse,
            7 => Self::FourOAK,
            8 => Self::StraightFlush,
            _ => panic!("no other rankings"),
        }
    }
}

impl std::fmt::Display for Ranking {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::HighCard => write!(f, "High Card"),
            Self::OnePair => write!(f, "One Pair"),
            Self::TwoPair => write!(f, "Two Pair"),
            Self::ThreeOAK => write!(f, "Three Of A Kind"),
            Self::Straight => write!(f, "Straight"),
            Self::Flush => write!(f, "Flush"),
            Self::FullHouse => write!(f, "Full House"),
            Self::FourOAK => write!(f, "Four Of A Kind"),
            Self::StraightFlush => write!(f, "Straight Flush"),
        }
    }
}

/// a 5-card showdown strength packed into a single totally ordered key.
///
/// bits 60..64 hold the category. below that sit five 12-bit fields with
/// the comparison ranks in descending significance: the primary group
/// rank repeated per card count, then kickers descending. equal-category
/// comparison therefore degrades to kicker comparison and the u64 order
/// is the hand order.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Strength(u64);

impl Strength {
    pub fn ranking(&self) -> Ranking {
        Ranking::from((self.0 >> 60) as u8)
    }

    /// best 5-card strength using exactly 2 of 4 hole cards and exactly
    /// 3 of 5 board cards: C(4,2) x C(5,3) = 60 candidate hands.
    pub fn plo_river(hole: &[Card; 4], board: &[Card; 5]) -> Self {
        let mut best = Self(0);
        for i in 0..4 {
            for j in i + 1..4 {
                for a in 0..5 {
                    for b in a + 1..5 {
                        for c in b + 1..5 {
                            let hand = [hole[i], hole[j], board[a], board[b], board[c]];
                            best = best.max(Self::from(hand));
                        }
                    }
                }
            }
        }
        best
    }

    fn pack(ranking: Ranking, ranks: [u8; 5]) -> Self {
        let mut key = (ranking as u64) << 60;
        for (i, rank) in ranks.iter().enumerate() {
            key |= (*rank as u64) << (48 - 12 * i);
        }
        Self(key)
    }
}

impl From<Strength> for u64 {
    fn from(s: Strength) -> Self {
        s.0
    }
}

impl From<[Card; 5]> for Strength {
    fn from(cards: [Card; 5]) -> Self {
        let mut rank_counts = [0u8; 13];
        let mut suit_counts = [0u8; 4];
        let mut mask = 0u16;
        for card in cards.iter() {
            let r = u8::from(card.rank()) as usize;
            let s = u8::from(card.suit()) as usize;
            rank_counts[r] += 1;
            suit_counts[s] += 1;
            mask |= 1 << r;
        }
        let flush = suit_counts.iter().any(|&n| n == 5);
        let straight = straight_high(mask);

        // ranks present, highest first, repeated per count
        let mut desc = [0u8; 5];
        let mut n = 0;
        for r in (0..13u8).rev() {
            for _ in 0..rank_counts[r as usize] {
                desc[n] = r;
                n += 1;
            }
        }

        let mut quad = None;
        let mut trip = None;
        let mut pairs = [None, None];
        for r in (0..13u8).rev() {
            match rank_counts[r as usize] {
                4 => quad = Some(r),
                3 => trip = Some(r),
                2 => match pairs {
                    [None, _] => pairs[0] = Some(r),
                    [_, None] => pairs[1] = Some(r),
                    _ => unreachable!("three pairs in five cards"),
                },
                _ => continue,
            }
        }

        // fixed category precedence, first match wins
        if let (Some(hi), true) = (straight, flush) {
            return Self::pack(Ranking::StraightFlush, runs(hi));
        }
        if let Some(q) = quad {
            let kicker = kickers::<1>(&desc, &[q]);
            return Self::pack(Ranking::FourOAK, [q, q, q, q, kicker[0]]);
        }
        if let (Some(t), Some(p)) = (trip, pairs[0]) {
            return Self::pack(Ranking::FullHouse, [t, t, t, p, p]);
        }
        if flush {
            return Self::pack(Ranking::Flush, desc);
        }
        if let Some(hi) = straight {
            return Self::pack(Ranking::Straight, runs(hi));
        }
        if let Some(t) = trip {
            let k = kickers::<2>(&desc, &[t]);
            return Self::pack(Ranking::ThreeOAK, [t, t, t, k[0], k[1]]);
        }
        if let (Some(p1), Some(p2)) = (pairs[0], pairs[1]) {
            let k = kickers::<1>(&desc, &[p1, p2]);
            return Self::pack(Ranking::TwoPair, [p1, p1, p2, p2, k[0]]);
        }
        if let Some(p) = pairs[0] {
            let k = kickers::<3>(&desc, &[p]);
            return Self::pack(Ranking::OnePair, [p, p, k[0], k[1], k[2]]);
        }
        Self::pack(Ranking::HighCard, desc)
    }
}

impl std::fmt::Display for Strength {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.ranking())
    }
}

/// highest rank of any 5-run in a 13-bit rank presence mask.
/// the wheel A-2-3-4-5 counts as a straight with high rank Five.
fn straight_high(mask: u16) -> Option<u8> {
    const WHEEL: u16 = (1 << 12) | 0b1111;
    if mask & WHEEL == WHEEL {
        return Some(3);
    }
    (4..13u8).rev().find(|hi| {
        let need = 0b11111 << (hi - 4);
        mask & need == need
    })
}

/// the straight's comparison tuple, wheel represented as 5-4-3-2-A
fn runs(hi: u8) -> [u8; 5] {
    if hi == 3 {
        [3, 2, 1, 0, 12]
    } else {
        [hi, hi - 1, hi - 2, hi - 3, hi - 4]
    }
}

/// the N highest ranks in `desc` excluding the grouped ranks
fn kickers<const N: usize>(desc: &[u8; 5], grouped: &[u8]) -> [u8; N] {
    let mut out = [0u8; N];
    let mut n = 0;
    for r in desc.iter().filter(|r| !grouped.contains(r)) {
        out[n] = *r;
        n += 1;
        if n == N {
            break;
        }
    }
    out
}

/// sign of the showdown comparison between two 4-card holdings on a
/// 5-card board, as a total order. invariant to hole and board order.
pub fn compare_plo_river(a: &[Card; 4], b: &[Card; 4], board: &[Card; 5]) -> std::cmp::Ordering {
    Strength::plo_river(a, board).cmp(&Strength::plo_river(b, board))
}
