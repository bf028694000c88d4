use crate::bond::SINGLE;
use crate::mol::Molecule;
use crate::smiles::topology::TopologyMap;

/// Highest ring label that is resolved. Higher digits still occupy a
/// topology position but never close a ring.
pub const MAX_RING_DIGIT: u8 = 6;

pub fn ring_digit_char(digit: u8) -> char {
    char::from(b'0' + digit)
}

/// Atoms carrying ring label `digit`, sorted.
pub fn ring_atoms(topology: &TopologyMap, digit: u8) -> Vec<usize> {
    let mut atoms: Vec<usize> = topology.anchors_of(ring_digit_char(digit)).collect();
    atoms.sort_unstable();
    atoms
}

/// Closes rings between atoms sharing a label.
///
/// Every pair of atoms carrying the same label is joined by a single bond, so
/// a label used more than twice connects all of its atoms pairwise instead of
/// pairing occurrences in written order. A ring bond never replaces a bond
/// that is already present. Labels absent from the molecule are skipped.
pub fn resolve_rings(mut mol: Molecule, topology: &TopologyMap) -> Molecule {
    for digit in 1..=MAX_RING_DIGIT {
        let atoms = ring_atoms(topology, digit);
        if atoms.is_empty() {
            continue;
        }
        log::trace!("ring {digit}: atoms {atoms:?}");

        for (k, &a) in atoms.iter().enumerate() {
            for &b in &atoms[k + 1..] {
                if a == b || mol.bonds().has_bond(a, b) {
                    continue;
                }
                mol.bonds_mut().set_order(a, b, SINGLE);
            }
        }
    }
    mol
}
