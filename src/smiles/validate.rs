use crate::element::Element;
use crate::smiles::error::SmilesError;
use crate::smiles::normalize::bracket_element;
use crate::smiles::ring::MAX_RING_DIGIT;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Prev {
    Start,
    Atom,
    Bond { pos: usize, ch: char },
    Open,
    Close,
    Ring,
}

/// Checks a notation string against the grammar the resolvers understand.
///
/// Positions in the returned error are character offsets into the trimmed
/// input. Ring labels may each be used for one ring only, since a reused
/// label would be resolved as a single set of atoms.
pub fn validate(smiles: &str) -> Result<(), SmilesError> {
    let chars: Vec<char> = smiles.trim().chars().collect();
    if chars.is_empty() {
        return Err(SmilesError::EmptyInput);
    }

    let mut prev = Prev::Start;
    let mut atoms = 0usize;
    let mut parens: Vec<usize> = Vec::new();
    // Per label: anchor atom of the open occurrence, and whether it was used.
    let mut open_rings: [Option<usize>; 10] = [None; 10];
    let mut used_rings = [false; 10];
    let mut i = 0;

    while i < chars.len() {
        let ch = chars[i];
        match ch {
            '[' => {
                let end = chars[i..]
                    .iter()
                    .position(|&c| c == ']')
                    .map(|off| i + off)
                    .ok_or(SmilesError::UnclosedBracket { pos: i })?;
                let inner: String = chars[i + 1..end].iter().collect();
                if bracket_element(&inner).is_none() {
                    return Err(SmilesError::UnsupportedBracketAtom {
                        pos: i,
                        text: format!("[{inner}]"),
                    });
                }
                atoms += 1;
                prev = Prev::Atom;
                i = end + 1;
                continue;
            }
            'B' | 'C' if matches!(chars.get(i + 1), Some(&('r' | 'l'))) => {
                let two: String = chars[i..i + 2].iter().collect();
                if Element::from_symbol(&two).is_none() {
                    return Err(SmilesError::UnexpectedChar { pos: i + 1, ch: chars[i + 1] });
                }
                atoms += 1;
                prev = Prev::Atom;
                i += 2;
                continue;
            }
            '=' | '#' => {
                if atoms == 0 || matches!(prev, Prev::Bond { .. }) {
                    return Err(SmilesError::DanglingBond { pos: i, ch });
                }
                prev = Prev::Bond { pos: i, ch };
            }
            '(' => match prev {
                Prev::Atom | Prev::Ring | Prev::Close => {
                    parens.push(i);
                    prev = Prev::Open;
                }
                Prev::Bond { pos, ch } => return Err(SmilesError::DanglingBond { pos, ch }),
                Prev::Start | Prev::Open => return Err(SmilesError::UnexpectedChar { pos: i, ch }),
            },
            ')' => match prev {
                Prev::Bond { pos, ch } => return Err(SmilesError::DanglingBond { pos, ch }),
                Prev::Open => return Err(SmilesError::UnexpectedChar { pos: i, ch }),
                _ => {
                    parens.pop().ok_or(SmilesError::UnmatchedParen { pos: i })?;
                    prev = Prev::Close;
                }
            },
            '0'..='9' => {
                match prev {
                    Prev::Atom | Prev::Ring => {}
                    Prev::Bond { pos, ch } => return Err(SmilesError::RingBondOrder { pos, ch }),
                    _ => return Err(SmilesError::UnexpectedChar { pos: i, ch }),
                }
                let digit = ch as u8 - b'0';
                if digit == 0 || digit > MAX_RING_DIGIT {
                    return Err(SmilesError::UnresolvedRingDigit { digit, pos: i });
                }
                let slot = usize::from(digit);
                let anchor = atoms - 1;
                match open_rings[slot].take() {
                    Some(start) if start == anchor => {
                        return Err(SmilesError::UnexpectedChar { pos: i, ch });
                    }
                    Some(_) => {}
                    None if used_rings[slot] => {
                        return Err(SmilesError::RingDigitReused { digit });
                    }
                    None => {
                        open_rings[slot] = Some(anchor);
                        used_rings[slot] = true;
                    }
                }
                prev = Prev::Ring;
            }
            '/' | '\\' => {}
            _ => {
                if Element::from_symbol(&ch.to_string()).is_none() {
                    return Err(SmilesError::UnexpectedChar { pos: i, ch });
                }
                atoms += 1;
                prev = Prev::Atom;
            }
        }
        i += 1;
    }

    if let Prev::Bond { pos, ch } = prev {
        return Err(SmilesError::DanglingBond { pos, ch });
    }
    if let Some(&pos) = parens.last() {
        return Err(SmilesError::UnmatchedParen { pos });
    }
    if let Some(digit) = (1..=MAX_RING_DIGIT).find(|&d| open_rings[usize::from(d)].is_some()) {
        return Err(SmilesError::UnclosedRing { digit });
    }
    if atoms == 0 {
        return Err(SmilesError::EmptyInput);
    }
    Ok(())
}
