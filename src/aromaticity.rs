use crate::bond::AROMATIC_INCREMENT;
use crate::mol::Molecule;

/// Raises every existing bond between two aromatic atoms by half a bond
/// order, so a single bond written between lowercase atoms becomes `1.5`.
///
/// Only bonds already present are touched; two aromatic atoms with no bond
/// between them stay unbonded.
pub fn apply_aromatic_bonds(mut mol: Molecule, aromatic: &[bool]) -> Molecule {
    let aromatic_atoms: Vec<usize> = (0..mol.atom_count())
        .filter(|&i| aromatic.get(i).copied().unwrap_or(false))
        .collect();

    for (k, &a) in aromatic_atoms.iter().enumerate() {
        for &b in &aromatic_atoms[k + 1..] {
            let order = mol.bond_order(a, b);
            if order > 0.0 {
                mol.bonds_mut().set_order(a, b, order + AROMATIC_INCREMENT);
            }
        }
    }
    mol
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::Element;

    #[test]
    fn boosts_bonded_pairs_only() {
        let mut mol = Molecule::chain(vec![Element::C; 3]);
        mol.bonds_mut().set_order(0, 2, 0.0);
        let mol = apply_aromatic_bonds(mol, &[true, true, true]);
        assert_eq!(mol.bond_order(0, 1), 1.5);
        assert_eq!(mol.bond_order(1, 2), 1.5);
        assert_eq!(mol.bond_order(0, 2), 0.0);
    }

    #[test]
    fn needs_both_ends_aromatic() {
        let mol = Molecule::chain(vec![Element::C; 3]);
        let mol = apply_aromatic_bonds(mol, &[false, true, true]);
        assert_eq!(mol.bond_order(0, 1), 1.0);
        assert_eq!(mol.bond_order(1, 2), 1.5);
    }

    #[test]
    fn explicit_double_bond_between_aromatic_atoms() {
        let mut mol = Molecule::chain(vec![Element::C; 2]);
        mol.bonds_mut().set_order(0, 1, 2.0);
        let mol = apply_aromatic_bonds(mol, &[true, true]);
        assert_eq!(mol.bond_order(0, 1), 2.5);
    }

    #[test]
    fn short_flag_slice_means_not_aromatic() {
        let mol = Molecule::chain(vec![Element::C; 3]);
        let mol = apply_aromatic_bonds(mol, &[true, true]);
        assert_eq!(mol.bond_order(0, 1), 1.5);
        assert_eq!(mol.bond_order(1, 2), 1.0);
    }
}
