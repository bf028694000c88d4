use serde::{Deserialize, Serialize};

use crate::bond::{DOUBLE, SINGLE, TRIPLE};
use crate::mol::Molecule;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Hybridization {
    SP,
    SP2,
    #[default]
    SP3,
}

/// Hybridization read off the resolved bond orders of one atom.
///
/// A triple bond, or two double bonds on the same atom, gives SP. Any other
/// bond above single order, including aromatic and delocalized bonds, gives
/// SP2. Everything else is SP3.
pub fn assign_hybridization_atom(mol: &Molecule, idx: usize) -> Hybridization {
    let mut doubles = 0;
    let mut multiple = false;

    for nb in mol.neighbors(idx) {
        let order = mol.bond_order(idx, nb);
        if order >= TRIPLE {
            return Hybridization::SP;
        }
        if order >= DOUBLE {
            doubles += 1;
        }
        if order > SINGLE {
            multiple = true;
        }
    }

    match (doubles, multiple) {
        (2.., _) => Hybridization::SP,
        (_, true) => Hybridization::SP2,
        _ => Hybridization::SP3,
    }
}

pub fn assign_hybridization(mol: &Molecule) -> Vec<Hybridization> {
    (0..mol.atom_count())
        .map(|idx| assign_hybridization_atom(mol, idx))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::smiles::parse_smiles;
    use super::Hybridization::*;

    fn hyb(smiles: &str) -> Vec<Hybridization> {
        assign_hybridization(&parse_smiles(smiles))
    }

    #[test]
    fn methane_sp3() {
        assert_eq!(hyb("C"), vec![SP3]);
    }

    #[test]
    fn ethane_sp3() {
        assert_eq!(hyb("CC"), vec![SP3, SP3]);
    }

    #[test]
    fn ethene_sp2() {
        assert_eq!(hyb("C=C"), vec![SP2, SP2]);
    }

    #[test]
    fn acetylene_sp() {
        assert_eq!(hyb("C#C"), vec![SP, SP]);
    }

    #[test]
    fn allene_center_sp() {
        assert_eq!(hyb("C=C=C"), vec![SP2, SP, SP2]);
    }

    #[test]
    fn benzene_sp2() {
        let h = hyb("c1ccccc1");
        assert_eq!(h.len(), 6);
        assert!(h.iter().all(|&x| x == SP2));
    }

    #[test]
    fn toluene_methyl_sp3() {
        let h = hyb("Cc1ccccc1");
        assert_eq!(h[0], SP3);
        assert!(h[1..].iter().all(|&x| x == SP2));
    }

    #[test]
    fn acetaldehyde() {
        assert_eq!(hyb("CC=O"), vec![SP3, SP2, SP2]);
    }

    #[test]
    fn acetic_acid() {
        assert_eq!(hyb("CC(=O)O"), vec![SP3, SP2, SP2, SP3]);
    }

    #[test]
    fn acetonitrile() {
        assert_eq!(hyb("CC#N"), vec![SP3, SP, SP]);
    }

    #[test]
    fn butadiene_stays_sp2_after_averaging() {
        assert_eq!(hyb("C=CC=C"), vec![SP2; 4]);
    }
}
