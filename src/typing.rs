use serde::{Deserialize, Serialize};

use crate::element::Element;
use crate::hybridization::{assign_hybridization, Hybridization};
use crate::mol::Molecule;

/// What the hydrogen completer needs to know about one heavy atom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AtomType {
    pub element: Element,
    pub hybridization: Hybridization,
    pub heavy_neighbors: u8,
}

impl AtomType {
    pub fn new(element: Element, hybridization: Hybridization, heavy_neighbors: u8) -> Self {
        Self {
            element,
            hybridization,
            heavy_neighbors,
        }
    }
}

/// Classifies every atom of a heavy-atom molecule.
///
/// The result is used as given: one entry per atom, in atom order.
pub trait AtomTyper {
    fn type_atoms(&self, mol: &Molecule) -> Vec<AtomType>;
}

impl<F> AtomTyper for F
where
    F: Fn(&Molecule) -> Vec<AtomType>,
{
    fn type_atoms(&self, mol: &Molecule) -> Vec<AtomType> {
        self(mol)
    }
}

/// Types atoms from the resolved bond orders alone, see
/// [`assign_hybridization`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BondOrderTyper;

impl AtomTyper for BondOrderTyper {
    fn type_atoms(&self, mol: &Molecule) -> Vec<AtomType> {
        assign_hybridization(mol)
            .into_iter()
            .enumerate()
            .map(|(idx, hybridization)| AtomType {
                element: mol.atom(idx),
                hybridization,
                heavy_neighbors: u8::try_from(mol.heavy_degree(idx)).unwrap_or(u8::MAX),
            })
            .collect()
    }
}
