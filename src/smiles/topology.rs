use crate::element::is_atom_char;
use crate::smiles::normalize::Normalized;

/// A bond marker, branch delimiter or ring digit, tied to the heavy atom
/// written immediately before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TopologyMark {
    pub ch: char,
    /// Position in the topology stream.
    pub pos: usize,
    /// Index of the preceding heavy atom.
    pub anchor: usize,
}

/// Every topology mark of one molecule, in written order.
///
/// Rebuilt for each parse and dropped once the resolvers have run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TopologyMap {
    marks: Vec<TopologyMark>,
}

impl TopologyMap {
    pub fn build(normalized: &Normalized) -> Self {
        // The filler character is also a digit, so atoms are told apart by
        // the aligned normalized text rather than by the filler itself.
        let is_atom: Vec<bool> = normalized.text.chars().map(is_atom_char).collect();
        let topology: Vec<char> = normalized.topology.chars().collect();

        // Pass 1: number of atoms written up to and including each position.
        let mut atoms_through = Vec::with_capacity(topology.len());
        let mut seen = 0usize;
        for &atom in &is_atom {
            if atom {
                seen += 1;
            }
            atoms_through.push(seen);
        }

        // Pass 2: anchor every mark to the atom before it.
        let mut marks = Vec::new();
        for (pos, &ch) in topology.iter().enumerate() {
            if is_atom[pos] {
                continue;
            }
            match atoms_through[pos].checked_sub(1) {
                Some(anchor) => marks.push(TopologyMark { ch, pos, anchor }),
                None => log::trace!("ignoring '{ch}' at {pos}: no preceding atom"),
            }
        }

        Self { marks }
    }

    pub fn marks(&self) -> &[TopologyMark] {
        &self.marks
    }

    pub fn iter(&self) -> impl Iterator<Item = &TopologyMark> + '_ {
        self.marks.iter()
    }

    /// Anchors of every mark written as `ch`, in written order.
    pub fn anchors_of(&self, ch: char) -> impl Iterator<Item = usize> + '_ {
        self.marks
            .iter()
            .filter(move |m| m.ch == ch)
            .map(|m| m.anchor)
    }

    pub fn contains(&self, ch: char) -> bool {
        self.marks.iter().any(|m| m.ch == ch)
    }

    pub fn len(&self) -> usize {
        self.marks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::smiles::normalize::normalize;

    fn anchors(smiles: &str) -> Vec<(char, usize)> {
        TopologyMap::build(&normalize(smiles))
            .iter()
            .map(|m| (m.ch, m.anchor))
            .collect()
    }

    #[test]
    fn no_marks_in_plain_chain() {
        assert!(TopologyMap::build(&normalize("CCCC")).is_empty());
    }

    #[test]
    fn double_bond_anchor() {
        assert_eq!(anchors("CC=C"), vec![('=', 1)]);
    }

    #[test]
    fn consecutive_marks_share_an_anchor() {
        assert_eq!(anchors("CC(=O)O"), vec![('(', 1), ('=', 1), (')', 2)]);
    }

    #[test]
    fn ring_digits() {
        assert_eq!(anchors("C1CCCCC1"), vec![('1', 0), ('1', 5)]);
    }

    #[test]
    fn placeholders_count_as_one_atom() {
        assert_eq!(anchors("ClC(Br)=C"), vec![('(', 1), (')', 2), ('=', 2)]);
    }

    #[test]
    fn positions_are_in_normalized_text() {
        let map = TopologyMap::build(&normalize("C[C@H](O)C"));
        let pos: Vec<usize> = map.iter().map(|m| m.pos).collect();
        assert_eq!(pos, vec![2, 4]);
    }

    #[test]
    fn zero_digit_is_a_mark() {
        assert_eq!(anchors("C0CC0"), vec![('0', 0), ('0', 2)]);
    }

    #[test]
    fn leading_mark_is_ignored() {
        assert_eq!(anchors("(C)C"), vec![(')', 0)]);
    }

    #[test]
    fn marks_and_lookup() {
        let map = TopologyMap::build(&normalize("CC(C)=O"));
        let chars: String = map.marks().iter().map(|m| m.ch).collect();
        assert_eq!(chars, "()=");
        assert!(map.contains('='));
        assert!(!map.contains('#'));
        assert!(!map.contains('1'));
    }
}
