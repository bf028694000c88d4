use crate::bond::{DOUBLE, TRIPLE};
use crate::mol::Molecule;
use crate::smiles::topology::TopologyMap;

/// Applies explicit `=` and `#` markers to the bond following their anchor.
///
/// Runs before branches and rings are resolved, so those stages move the
/// corrected order rather than the default single bond.
pub fn resolve_bond_orders(mut mol: Molecule, topology: &TopologyMap) -> Molecule {
    let n = mol.atom_count();
    for mark in topology.iter() {
        let order = match mark.ch {
            '=' => DOUBLE,
            '#' => TRIPLE,
            _ => continue,
        };
        if mark.anchor + 1 >= n {
            log::trace!("bond '{}' at {} has no atom after it", mark.ch, mark.pos);
            continue;
        }
        mol.bonds_mut().set_order(mark.anchor, mark.anchor + 1, order);
    }
    mol
}
