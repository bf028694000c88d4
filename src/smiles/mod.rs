//! Restricted SMILES front end.
//!
//! A string goes through the normalizer, becomes a linear chain, and is then
//! corrected in a fixed order: explicit bond orders, branches, ring closures,
//! aromatic bonds and conjugated systems.

mod bond_order;
mod branch;
mod chain;
pub mod error;
mod normalize;
mod options;
mod ring;
mod topology;
mod validate;

use crate::aromaticity::apply_aromatic_bonds;
use crate::conjugation::delocalize;
use crate::hydrogen::add_hydrogens_with;
use crate::mol::Molecule;
use crate::typing::BondOrderTyper;

pub use branch::BranchPair;
pub use error::SmilesError;
pub use normalize::{normalize, Normalized, TOPOLOGY_FILLER};
pub use options::ParseOptions;
pub use ring::MAX_RING_DIGIT;
pub use topology::{TopologyMap, TopologyMark};
pub use validate::validate;

/// Parses a heavy-atom molecule with the default options.
///
/// The input is trusted: nothing is validated, and a string outside the
/// supported grammar yields an unspecified (but memory safe) molecule. Use
/// [`parse_smiles_with`] and [`ParseOptions::validating`] for untrusted input.
pub fn parse_smiles(smiles: &str) -> Molecule {
    resolve(smiles, &ParseOptions::default())
}

pub fn parse_smiles_with(smiles: &str, opts: &ParseOptions) -> Result<Molecule, SmilesError> {
    if opts.validate {
        validate(smiles)?;
    }
    Ok(resolve(smiles, opts))
}

/// Validates, parses and completes hydrogens with [`BondOrderTyper`].
pub fn from_smiles(smiles: &str) -> Result<Molecule, SmilesError> {
    let mol = parse_smiles_with(smiles, &ParseOptions::validating())?;
    Ok(add_hydrogens_with(&mol, &BondOrderTyper))
}

fn resolve(smiles: &str, opts: &ParseOptions) -> Molecule {
    let normalized = normalize(smiles);
    let aromatic = normalized.aromatic_flags();

    let (mol, topology) = chain::build_chain(&normalized);
    let mol = bond_order::resolve_bond_orders(mol, &topology);
    let mol = branch::resolve_branches(mol, &topology);
    let mut mol = ring::resolve_rings(mol, &topology);

    if opts.aromaticity {
        mol = apply_aromatic_bonds(mol, &aromatic);
    }
    if opts.conjugation {
        mol = delocalize(mol, &aromatic, opts.min_conjugated_size);
    }
    mol.symmetrize();

    log::debug!(
        "parsed {:?}: {} atoms, {} bonds",
        smiles,
        mol.atom_count(),
        mol.bond_count()
    );
    mol
}
