use std::collections::BTreeMap;

/// One concrete nucleotide. Anything outside this set is not a valid base.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Base {
    A,
    C,
    G,
    T,
}

impl Base {
    pub const ALL: [Self; 4] = [Self::A, Self::C, Self::G, Self::T];

    pub fn from_ascii(byte: u8) -> Option<Self> {
        match byte {
            b'A' => Some(Self::A),
            b'C' => Some(Self::C),
            b'G' => Some(Self::G),
            b'T' => Some(Self::T),
            _ => None,
        }
    }

    pub fn to_ascii(self) -> u8 {
        match self {
            Self::A => b'A',
            Self::C => b'C',
            Self::G => b'G',
            Self::T => b'T',
        }
    }

    fn bit(self) -> u8 {
        1 << self as u8
    }
}

/// Set of concrete bases, stored as a four-bit mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BaseSet(u8);

impl BaseSet {
    pub fn from_bases(bases: &[Base]) -> Self {
        let mut mask = 0;
        for base in bases {
            mask |= base.bit();
        }
        Self(mask)
    }

    pub fn contains(self, base: Base) -> bool {
        self.0 & base.bit() != 0
    }

    pub fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn iter(self) -> impl Iterator<Item = Base> {
        Base::ALL.into_iter().filter(move |base| self.contains(*base))
    }
}

/// One IUPAC nucleotide code: a concrete base or a degenerate code standing
/// for a fixed set of bases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Symbol {
    A,
    C,
    G,
    T,
    R,
    Y,
    M,
    K,
    W,
    S,
    B,
    D,
    H,
    V,
    N,
}

impl Symbol {
    pub const ALL: [Self; 15] = [
        Self::A,
        Self::C,
        Self::G,
        Self::T,
        Self::R,
        Self::Y,
        Self::M,
        Self::K,
        Self::W,
        Self::S,
        Self::B,
        Self::D,
        Self::H,
        Self::V,
        Self::N,
    ];

    pub fn from_ascii(byte: u8) -> Option<Self> {
        match byte {
            b'A' => Some(Self::A),
            b'C' => Some(Self::C),
            b'G' => Some(Self::G),
            b'T' => Some(Self::T),
            b'R' => Some(Self::R),
            b'Y' => Some(Self::Y),
            b'M' => Some(Self::M),
            b'K' => Some(Self::K),
            b'W' => Some(Self::W),
            b'S' => Some(Self::S),
            b'B' => Some(Self::B),
            b'D' => Some(Self::D),
            b'H' => Some(Self::H),
            b'V' => Some(Self::V),
            b'N' => Some(Self::N),
            _ => None,
        }
    }
}

/// The IUPAC nucleotide code table, mapping each symbol to the set of
/// concrete bases it stands for.
///
/// Constructed once and used read-only afterwards. Every other component
/// consults this table instead of hardcoding base membership.
pub struct Alphabet {
    allowed: BTreeMap<Symbol, BaseSet>,
}

impl Alphabet {
    pub fn new() -> Self {
        use Base::*;

        let mut allowed = BTreeMap::new();

        // Standard bases.
        allowed.insert(Symbol::A, BaseSet::from_bases(&[A]));
        allowed.insert(Symbol::C, BaseSet::from_bases(&[C]));
        allowed.insert(Symbol::G, BaseSet::from_bases(&[G]));
        allowed.insert(Symbol::T, BaseSet::from_bases(&[T]));

        // Degenerate bases.
        allowed.insert(Symbol::R, BaseSet::from_bases(&[A, G])); // purine
        allowed.insert(Symbol::Y, BaseSet::from_bases(&[C, T])); // pyrimidine
        allowed.insert(Symbol::M, BaseSet::from_bases(&[A, C])); // amino
        allowed.insert(Symbol::K, BaseSet::from_bases(&[G, T])); // keto
        allowed.insert(Symbol::W, BaseSet::from_bases(&[A, T])); // weak
        allowed.insert(Symbol::S, BaseSet::from_bases(&[C, G])); // strong
        allowed.insert(Symbol::B, BaseSet::from_bases(&[C, G, T])); // not A
        allowed.insert(Symbol::D, BaseSet::from_bases(&[A, G, T])); // not C
        allowed.insert(Symbol::H, BaseSet::from_bases(&[A, C, T])); // not G
        allowed.insert(Symbol::V, BaseSet::from_bases(&[A, C, G])); // not T
        allowed.insert(Symbol::N, BaseSet::from_bases(&[A, C, G, T])); // any

        Self { allowed }
    }

    /// The set of concrete bases the given character may match, or `None` if
    /// the character is not a recognised IUPAC code.
    pub fn allowed_bases(&self, symbol: u8) -> Option<BaseSet> {
        Symbol::from_ascii(symbol).and_then(|symbol| self.allowed.get(&symbol).copied())
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_symbol_has_a_non_empty_base_set() {
        let alphabet = Alphabet::new();

        for symbol in b"ACGTRYMKWSBDHVN" {
            let bases = alphabet.allowed_bases(*symbol).unwrap();
            assert!(!bases.is_empty(), "symbol {} has no bases", *symbol as char);
        }
    }

    #[test]
    fn concrete_symbols_map_to_themselves() {
        let alphabet = Alphabet::new();

        for base in Base::ALL {
            let bases = alphabet.allowed_bases(base.to_ascii()).unwrap();
            assert_eq!(bases.len(), 1);
            assert!(bases.contains(base));
        }
    }

    #[test]
    fn any_base_symbol_maps_to_all_four_bases() {
        let alphabet = Alphabet::new();
        let bases = alphabet.allowed_bases(b'N').unwrap();

        assert_eq!(bases.len(), 4);
        for base in Base::ALL {
            assert!(bases.contains(base));
        }
    }

    #[test]
    fn unrecognised_characters_are_rejected() {
        let alphabet = Alphabet::new();

        assert!(alphabet.allowed_bases(b'U').is_none());
        assert!(alphabet.allowed_bases(b'X').is_none());
        assert!(alphabet.allowed_bases(b'a').is_none());
        assert!(alphabet.allowed_bases(b' ').is_none());
        assert!(alphabet.allowed_bases(0).is_none());
    }

    #[test]
    fn base_set_intersection_and_iteration() {
        let purine = BaseSet::from_bases(&[Base::A, Base::G]);
        let pyrimidine = BaseSet::from_bases(&[Base::C, Base::T]);
        let amino = BaseSet::from_bases(&[Base::A, Base::C]);

        assert!(!purine.intersects(pyrimidine));
        assert!(purine.intersects(amino));
        assert!(pyrimidine.intersects(amino));

        assert_eq!(purine.iter().collect::<Vec<_>>(), vec![Base::A, Base::G]);
        assert!(BaseSet::default().is_empty());
    }
}
