use petgraph::graph::{NodeIndex, UnGraph};
use serde::{Deserialize, Serialize};

use crate::bond::{BondMatrix, ShapeError};
use crate::element::Element;

/// A molecular graph as an ordered atom list plus a bond-order matrix.
///
/// Row and column `i` of [`bonds`](Molecule::bonds) belong to `atoms[i]`.
/// Heavy atoms come first in notation order; hydrogens, when present, are
/// appended after them by [`add_hydrogens`](crate::add_hydrogens).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawMolecule")]
pub struct Molecule {
    atoms: Vec<Element>,
    bonds: BondMatrix,
}

#[derive(Deserialize)]
struct RawMolecule {
    atoms: Vec<Element>,
    bonds: BondMatrix,
}

impl TryFrom<RawMolecule> for Molecule {
    type Error = ShapeError;

    fn try_from(raw: RawMolecule) -> Result<Self, Self::Error> {
        Self::try_from_parts(raw.atoms, raw.bonds)
    }
}

impl Molecule {
    /// Atoms joined in written order by single bonds, before any branch,
    /// ring or bond-order correction.
    pub fn chain(atoms: Vec<Element>) -> Self {
        let bonds = BondMatrix::chain(atoms.len());
        Self { atoms, bonds }
    }

    /// Panics if the matrix does not match the atom count.
    pub fn from_parts(atoms: Vec<Element>, bonds: BondMatrix) -> Self {
        assert_eq!(
            atoms.len(),
            bonds.len(),
            "bond matrix must have one row per atom"
        );
        Self { atoms, bonds }
    }

    pub fn try_from_parts(atoms: Vec<Element>, bonds: BondMatrix) -> Result<Self, ShapeError> {
        if atoms.len() != bonds.len() {
            return Err(ShapeError::AtomCount {
                atoms: atoms.len(),
                size: bonds.len(),
            });
        }
        Ok(Self { atoms, bonds })
    }

    pub fn into_parts(self) -> (Vec<Element>, BondMatrix) {
        (self.atoms, self.bonds)
    }

    pub fn atoms(&self) -> &[Element] {
        &self.atoms
    }

    pub fn atom(&self, idx: usize) -> Element {
        self.atoms[idx]
    }

    pub fn atom_codes(&self) -> Vec<u8> {
        self.atoms.iter().map(|e| e.code()).collect()
    }

    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    pub fn heavy_atom_count(&self) -> usize {
        self.atoms.iter().filter(|e| e.is_heavy()).count()
    }

    pub fn hydrogen_count(&self) -> usize {
        self.atom_count() - self.heavy_atom_count()
    }

    pub fn bonds(&self) -> &BondMatrix {
        &self.bonds
    }

    pub fn bonds_mut(&mut self) -> &mut BondMatrix {
        &mut self.bonds
    }

    pub fn bond_order(&self, a: usize, b: usize) -> f64 {
        self.bonds.order(a, b)
    }

    pub fn bond_count(&self) -> usize {
        self.bonds.bond_count()
    }

    pub fn neighbors(&self, idx: usize) -> impl Iterator<Item = usize> + '_ {
        self.bonds.neighbors(idx)
    }

    /// Number of bonded neighbors that are not hydrogen.
    pub fn heavy_degree(&self, idx: usize) -> usize {
        self.neighbors(idx)
            .filter(|&j| self.atoms[j].is_heavy())
            .count()
    }

    pub fn is_symmetric(&self) -> bool {
        self.bonds.is_symmetric()
    }

    pub fn symmetrize(&mut self) {
        self.bonds.symmetrize();
    }

    /// Exports the molecule as a `petgraph` graph. Node `i` is atom `i`; each
    /// nonzero bond becomes one undirected edge weighted by its order.
    pub fn to_graph(&self) -> UnGraph<Element, f64> {
        let mut graph = UnGraph::with_capacity(self.atom_count(), self.bond_count());
        for &atom in &self.atoms {
            graph.add_node(atom);
        }
        for (i, j, order) in self.bonds.bonds() {
            graph.add_edge(NodeIndex::new(i), NodeIndex::new(j), order);
        }
        graph
    }
}

impl Default for Molecule {
    fn default() -> Self {
        Self::chain(Vec::new())
    }
}
