use crate::element::{is_aromatic_char, is_atom_char, Element};

/// Filler written over atom characters in the topology stream.
pub const TOPOLOGY_FILLER: char = '0';

/// The two aligned streams derived from a notation string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalized {
    /// Normalized notation: two-letter halogens collapsed to their
    /// placeholders, bracket atoms reduced to bare symbols, directional bonds
    /// removed.
    pub text: String,
    /// Atom characters only, one per heavy atom, in written order.
    pub atoms: String,
    /// Same length as `text`. Atom characters replaced by
    /// [`TOPOLOGY_FILLER`], everything else kept verbatim.
    pub topology: String,
}

impl Normalized {
    pub fn atom_count(&self) -> usize {
        self.atoms.chars().count()
    }

    pub fn elements(&self) -> Vec<Element> {
        self.atoms
            .chars()
            .filter_map(Element::from_symbol_char)
            .collect()
    }

    /// Per heavy atom, whether it was written in lowercase.
    pub fn aromatic_flags(&self) -> Vec<bool> {
        self.atoms.chars().map(is_aromatic_char).collect()
    }
}

/// Rewrites a notation string into its atom and topology streams.
///
/// `Br` and `Cl` become single placeholder characters, stereocenter and other
/// bracket atoms of the organic subset (`[C@@H]`, `[nH]`, `[NH4+]`, `[13C]`)
/// collapse to their bare symbol with the aromatic case kept, and the
/// directional bond markers `/` and `\` are dropped. Bracket atoms outside the
/// subset are dropped entirely; the input is assumed well formed.
pub fn normalize(smiles: &str) -> Normalized {
    let chars: Vec<char> = smiles.trim().chars().collect();
    let mut text = String::with_capacity(chars.len());
    let mut i = 0;

    while i < chars.len() {
        match chars[i] {
            '[' => {
                let end = chars[i..]
                    .iter()
                    .position(|&c| c == ']')
                    .map_or(chars.len(), |off| i + off);
                let inner: String = chars[(i + 1).min(end)..end].iter().collect();
                match bracket_element(&inner) {
                    Some((element, aromatic)) => text.push(element.normalized_char(aromatic)),
                    None => log::trace!("dropping unsupported bracket atom [{inner}]"),
                }
                i = end + 1;
            }
            'B' if chars.get(i + 1) == Some(&'r') => {
                text.push(Element::Br.normalized_char(false));
                i += 2;
            }
            'C' if chars.get(i + 1) == Some(&'l') => {
                text.push(Element::Cl.normalized_char(false));
                i += 2;
            }
            '/' | '\\' => {
                i += 1;
            }
            ch => {
                text.push(ch);
                i += 1;
            }
        }
    }

    let atoms: String = text.chars().filter(|&c| is_atom_char(c)).collect();
    let topology: String = text
        .chars()
        .map(|c| if is_atom_char(c) { TOPOLOGY_FILLER } else { c })
        .collect();

    Normalized {
        text,
        atoms,
        topology,
    }
}

/// Element written inside a bracket atom, skipping a leading isotope and
/// ignoring chirality, hydrogen count, charge and atom class.
pub(crate) fn bracket_element(inner: &str) -> Option<(Element, bool)> {
    let symbol = inner.trim_start_matches(|c: char| c.is_ascii_digit());
    let two: String = symbol.chars().take(2).collect();
    if let Some(found) = Element::from_symbol(&two) {
        return Some(found);
    }
    let one: String = symbol.chars().take(1).collect();
    if symbol.chars().nth(1).is_some_and(|c| c.is_ascii_lowercase()) {
        // Two-letter symbol outside the subset, e.g. `Na` or `Se`.
        return None;
    }
    Element::from_symbol(&one)
}
