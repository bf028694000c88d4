use crate::mol::Molecule;
use crate::smiles::topology::TopologyMap;

/// A closed branch: the atom the branch hangs from, and the last atom
/// written before its closing parenthesis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BranchPair {
    pub left: usize,
    pub right: usize,
}

/// Matches parentheses with a stack of open anchors, in closing order.
///
/// An unmatched `)` is skipped; unmatched `(` are left open.
pub fn branch_pairs(topology: &TopologyMap) -> Vec<BranchPair> {
    let mut stack: Vec<usize> = Vec::new();
    let mut pairs = Vec::new();

    for mark in topology.iter() {
        match mark.ch {
            '(' => stack.push(mark.anchor),
            ')' => match stack.pop() {
                Some(left) => pairs.push(BranchPair {
                    left,
                    right: mark.anchor,
                }),
                None => log::trace!("unmatched ')' at {}", mark.pos),
            },
            _ => {}
        }
    }

    pairs
}

/// Points sibling branches at their shared backbone atom.
///
/// A branch opened directly after another one closed (`C(A)(B)`) gets the
/// last atom of the previous branch as its anchor. Every such `(earlier,
/// later)` match is collected first and then rewritten in order, so a run of
/// siblings inherits the corrected anchor transitively and an enclosing
/// branch that closes at the same atom has the final say.
pub fn correct_sibling_anchors(pairs: &mut [BranchPair]) {
    let overlaps: Vec<(usize, usize)> = (0..pairs.len())
        .flat_map(|i| (0..pairs.len()).map(move |j| (i, j)))
        .filter(|&(i, j)| pairs[j].left == pairs[i].right)
        .collect();

    for (i, j) in overlaps {
        pairs[j].left = pairs[i].left;
    }
}

/// Moves the bond after each closing parenthesis back to the branch point.
///
/// For every branch the chain bond `right → right + 1` is cut and the atom
/// after the branch is bonded to `left` instead, with whatever order the cut
/// bond carried. A branch ending the string has nothing to reattach and is
/// dropped, and of several branches closing at the same atom only the
/// outermost one reattaches.
pub fn resolve_branches(mut mol: Molecule, topology: &TopologyMap) -> Molecule {
    let n = mol.atom_count();
    let mut pairs: Vec<BranchPair> = branch_pairs(topology)
        .into_iter()
        .filter(|p| p.right + 1 < n)
        .collect();

    correct_sibling_anchors(&mut pairs);

    let mut rewire: Vec<BranchPair> = Vec::with_capacity(pairs.len());
    for pair in pairs.iter().rev() {
        if !rewire.iter().any(|p| p.right == pair.right) {
            rewire.push(*pair);
        }
    }
    rewire.reverse();
    log::trace!("branch rewiring: {rewire:?}");

    let moved: Vec<f64> = rewire
        .iter()
        .map(|p| mol.bond_order(p.right, p.right + 1))
        .collect();

    let bonds = mol.bonds_mut();
    for p in &rewire {
        bonds.set_order(p.right, p.right + 1, 0.0);
    }
    for (p, &order) in rewire.iter().zip(&moved) {
        bonds.set_order(p.left, p.right + 1, order);
    }

    mol
}
