use crate::bond::{BondMatrix, SINGLE};
use crate::element::Element;
use crate::mol::Molecule;
use crate::typing::{AtomType, AtomTyper};

/// Largest number of hydrogens a single atom can receive.
pub const MAX_IMPLICIT_HYDROGENS: u8 = 4;

/// Number of implicit hydrogens for one typed heavy atom.
///
/// | element | hybridization | heavy neighbors | H |
/// |---------|---------------|-----------------|---|
/// | C       | SP3           | 0 / 1 / 2 / 3   | 4 / 3 / 2 / 1 |
/// | C       | SP2           | 1 / 2           | 2 / 1 |
/// | C       | SP            | 1               | 1 |
/// | N, P    | SP3           | 0 / 1 / 2       | 3 / 2 / 1 |
/// | N, P    | SP2           | 1               | 1 |
/// | O, S    | SP3           | any             | 1 |
///
/// Every other combination, including all halogens, gets none.
pub fn implicit_hydrogens(ty: &AtomType) -> u8 {
    use crate::element::Element::*;
    use crate::hybridization::Hybridization::*;

    match (ty.element, ty.hybridization, ty.heavy_neighbors) {
        (C, SP3, 0) => 4,
        (C, SP3, 1) => 3,
        (C, SP3, 2) => 2,
        (C, SP3, 3) => 1,
        (C, SP2, 1) => 2,
        (C, SP2, 2) => 1,
        (C, SP, 1) => 1,
        (N | P, SP3, 0) => 3,
        (N | P, SP3, 1) => 2,
        (N | P, SP3, 2) => 1,
        (N | P, SP2, 1) => 1,
        (O | S, SP3, _) => 1,
        _ => 0,
    }
}

/// Returns a new molecule with implicit hydrogens appended.
///
/// `types` holds one entry per atom of `mol`. Hydrogens are appended grouped
/// by how many their parent receives (all single-H parents in atom order,
/// then the two-H parents, and so on), each singly bonded to its parent and
/// to nothing else. The heavy-atom block of the bond matrix is kept as is and
/// the result is symmetric.
pub fn add_hydrogens(mol: &Molecule, types: &[AtomType]) -> Molecule {
    let n = mol.atom_count();
    let counts: Vec<u8> = (0..n)
        .map(|idx| types.get(idx).map_or(0, implicit_hydrogens))
        .collect();

    let mut parents = Vec::new();
    for k in 1..=MAX_IMPLICIT_HYDROGENS {
        for (idx, _) in counts.iter().enumerate().filter(|&(_, &c)| c == k) {
            parents.extend(std::iter::repeat(idx).take(usize::from(k)));
        }
    }

    let mut heavy = mol.bonds().clone();
    heavy.symmetrize();
    let mut bonds: BondMatrix = heavy.extended(parents.len());

    let mut atoms = mol.atoms().to_vec();
    for (offset, &parent) in parents.iter().enumerate() {
        atoms.push(Element::H);
        bonds.set_order(parent, n + offset, SINGLE);
    }

    log::debug!("added {} hydrogens to {} heavy atoms", parents.len(), n);
    Molecule::from_parts(atoms, bonds)
}

/// Types `mol` with `typer` and adds its implicit hydrogens.
pub fn add_hydrogens_with<T: AtomTyper + ?Sized>(mol: &Molecule, typer: &T) -> Molecule {
    let types = typer.type_atoms(mol);
    add_hydrogens(mol, &types)
}
