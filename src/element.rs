use serde::{Deserialize, Serialize};

/// Placeholder character standing in for `Cl` after normalization.
pub const CHLORINE_PLACEHOLDER: char = 'L';
/// Placeholder character standing in for `Br` after normalization.
pub const BROMINE_PLACEHOLDER: char = 'R';

/// The restricted organic alphabet understood by the parser.
///
/// The discriminant is the atom-type code stored in a
/// [`Molecule`](crate::Molecule). Aromatic and aliphatic spellings of an
/// element share one code; aromaticity lives in the bond orders, not here.
/// [`Element::H`] never comes out of the parser itself, it is the placeholder
/// used by the hydrogen completer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum Element {
    C = 0,
    N = 1,
    O = 2,
    S = 3,
    P = 4,
    F = 5,
    Cl = 6,
    Br = 7,
    I = 8,
    H = 9,
}

impl Element {
    pub const HEAVY: [Element; 9] = [
        Element::C,
        Element::N,
        Element::O,
        Element::S,
        Element::P,
        Element::F,
        Element::Cl,
        Element::Br,
        Element::I,
    ];

    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::C),
            1 => Some(Self::N),
            2 => Some(Self::O),
            3 => Some(Self::S),
            4 => Some(Self::P),
            5 => Some(Self::F),
            6 => Some(Self::Cl),
            7 => Some(Self::Br),
            8 => Some(Self::I),
            9 => Some(Self::H),
            _ => None,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Self::C => "C",
            Self::N => "N",
            Self::O => "O",
            Self::S => "S",
            Self::P => "P",
            Self::F => "F",
            Self::Cl => "Cl",
            Self::Br => "Br",
            Self::I => "I",
            Self::H => "H",
        }
    }

    pub fn atomic_num(self) -> u8 {
        match self {
            Self::H => 1,
            Self::C => 6,
            Self::N => 7,
            Self::O => 8,
            Self::F => 9,
            Self::P => 15,
            Self::S => 16,
            Self::Cl => 17,
            Self::Br => 35,
            Self::I => 53,
        }
    }

    /// Maps a single normalized atom character to its element.
    ///
    /// Accepts the aliphatic symbols, the aromatic lowercase forms `c n o s p`,
    /// and the two-letter placeholders `L` (Cl) and `R` (Br).
    pub fn from_symbol_char(ch: char) -> Option<Self> {
        match ch {
            'C' | 'c' => Some(Self::C),
            'N' | 'n' => Some(Self::N),
            'O' | 'o' => Some(Self::O),
            'S' | 's' => Some(Self::S),
            'P' | 'p' => Some(Self::P),
            'F' => Some(Self::F),
            CHLORINE_PLACEHOLDER => Some(Self::Cl),
            BROMINE_PLACEHOLDER => Some(Self::Br),
            'I' => Some(Self::I),
            _ => None,
        }
    }

    /// Parses a written element symbol (`"Cl"`, `"c"`, `"N"` …) as found
    /// inside a bracket atom. Returns the element and whether the spelling was
    /// aromatic.
    pub fn from_symbol(text: &str) -> Option<(Self, bool)> {
        match text {
            "Cl" => Some((Self::Cl, false)),
            "Br" => Some((Self::Br, false)),
            _ => {
                let mut chars = text.chars();
                let ch = chars.next()?;
                if chars.next().is_some() || ch == CHLORINE_PLACEHOLDER || ch == BROMINE_PLACEHOLDER
                {
                    return None;
                }
                Self::from_symbol_char(ch).map(|e| (e, is_aromatic_char(ch)))
            }
        }
    }

    /// The single character this element is written as in the normalized
    /// atom stream.
    pub fn normalized_char(self, aromatic: bool) -> char {
        let ch = match self {
            Self::Cl => return CHLORINE_PLACEHOLDER,
            Self::Br => return BROMINE_PLACEHOLDER,
            other => other.symbol().as_bytes()[0] as char,
        };
        if aromatic && can_be_aromatic(self) {
            ch.to_ascii_lowercase()
        } else {
            ch
        }
    }

    pub fn is_heavy(self) -> bool {
        self != Self::H
    }

    /// Carbon, nitrogen and oxygen: the only elements allowed to take part in
    /// a delocalized system.
    pub fn is_conjugation_capable(self) -> bool {
        matches!(self, Self::C | Self::N | Self::O)
    }
}

impl std::fmt::Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

pub fn is_atom_char(ch: char) -> bool {
    Element::from_symbol_char(ch).is_some()
}

pub fn is_aromatic_char(ch: char) -> bool {
    matches!(ch, 'c' | 'n' | 'o' | 's' | 'p')
}

fn can_be_aromatic(element: Element) -> bool {
    matches!(
        element,
        Element::C | Element::N | Element::O | Element::S | Element::P
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip() {
        for e in Element::HEAVY.iter().copied().chain([Element::H]) {
            assert_eq!(Element::from_code(e.code()), Some(e));
        }
        assert_eq!(Element::from_code(10), None);
    }

    #[test]
    fn aromatic_and_aliphatic_share_a_code() {
        assert_eq!(Element::from_symbol_char('c'), Some(Element::C));
        assert_eq!(Element::from_symbol_char('C'), Some(Element::C));
        assert_eq!(Element::from_symbol_char('n').unwrap().code(), 1);
        assert_eq!(Element::from_symbol_char('p').unwrap().code(), 4);
    }

    #[test]
    fn placeholders() {
        assert_eq!(Element::from_symbol_char('L'), Some(Element::Cl));
        assert_eq!(Element::from_symbol_char('R'), Some(Element::Br));
        assert_eq!(Element::Cl.normalized_char(false), 'L');
        assert_eq!(Element::Br.normalized_char(true), 'R');
    }

    #[test]
    fn bracket_symbols() {
        assert_eq!(Element::from_symbol("Cl"), Some((Element::Cl, false)));
        assert_eq!(Element::from_symbol("n"), Some((Element::N, true)));
        assert_eq!(Element::from_symbol("N"), Some((Element::N, false)));
        assert_eq!(Element::from_symbol("Na"), None);
        assert_eq!(Element::from_symbol("L"), None);
        assert_eq!(Element::from_symbol("H"), None);
    }

    #[test]
    fn unsupported_chars() {
        assert!(!is_atom_char('B'));
        assert!(!is_atom_char('f'));
        assert!(!is_atom_char('='));
        assert!(!is_atom_char('1'));
    }

    #[test]
    fn atomic_numbers() {
        assert_eq!(Element::C.atomic_num(), 6);
        assert_eq!(Element::Br.atomic_num(), 35);
        assert_eq!(Element::H.atomic_num(), 1);
    }

    #[test]
    fn display() {
        assert_eq!(Element::Cl.to_string(), "Cl");
        assert_eq!(Element::H.to_string(), "H");
    }
}
