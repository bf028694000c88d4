use crate::mol::Molecule;
use crate::smiles::normalize::Normalized;
use crate::smiles::topology::TopologyMap;

/// Builds the default molecule for a normalized string: every heavy atom in
/// written order, each one singly bonded to the next. Also returns the
/// topology marks the later resolvers correct this chain with.
pub fn build_chain(normalized: &Normalized) -> (Molecule, TopologyMap) {
    let mol = Molecule::chain(normalized.elements());
    let topology = TopologyMap::build(normalized);
    log::trace!(
        "chain of {} atoms with {} topology marks",
        mol.atom_count(),
        topology.len()
    );
    (mol, topology)
}
