pub mod aromaticity;
pub mod bond;
pub mod conjugation;
pub mod element;
pub mod hybridization;
pub mod hydrogen;
pub mod mol;
pub mod smiles;
pub mod typing;

pub use bond::{BondMatrix, ShapeError};
pub use element::Element;
pub use hybridization::{assign_hybridization, Hybridization};
pub use hydrogen::{add_hydrogens, add_hydrogens_with, implicit_hydrogens};
pub use mol::Molecule;
pub use smiles::{
    from_smiles, normalize, parse_smiles, parse_smiles_with, ParseOptions, SmilesError,
};
pub use typing::{AtomType, AtomTyper, BondOrderTyper};
