use std::collections::VecDeque;

use petgraph::graph::{NodeIndex, UnGraph};

use crate::bond::DOUBLE;
use crate::mol::Molecule;

/// Smallest group of atoms treated as a conjugated system. A lone double
/// bond has two atoms and is left alone.
pub const MIN_CONJUGATED_SIZE: usize = 3;

/// Atoms that can take part in a conjugated system: those carrying a bond of
/// order exactly two, plus the aromatic ones, limited to C, N and O.
pub fn conjugation_candidates(mol: &Molecule, aromatic: &[bool]) -> Vec<usize> {
    (0..mol.atom_count())
        .filter(|&i| {
            let has_double = mol.neighbors(i).any(|j| mol.bond_order(i, j) == DOUBLE);
            let is_aromatic = aromatic.get(i).copied().unwrap_or(false);
            (has_double || is_aromatic) && mol.atom(i).is_conjugation_capable()
        })
        .collect()
}

/// Connected groups of candidate atoms, each sorted, in order of their
/// lowest atom. Groups smaller than `min_size` are dropped.
pub fn find_conjugated_systems(
    mol: &Molecule,
    aromatic: &[bool],
    min_size: usize,
) -> Vec<Vec<usize>> {
    let candidates = conjugation_candidates(mol, aromatic);

    let mut graph: UnGraph<usize, f64> = UnGraph::default();
    let nodes: Vec<NodeIndex> = candidates.iter().map(|&a| graph.add_node(a)).collect();
    for (k, &a) in candidates.iter().enumerate() {
        for (l, &b) in candidates.iter().enumerate().skip(k + 1) {
            let order = mol.bond_order(a, b);
            if order > 0.0 {
                graph.add_edge(nodes[k], nodes[l], order);
            }
        }
    }

    let mut visited = vec![false; graph.node_count()];
    let mut systems = Vec::new();

    for start in graph.node_indices() {
        if visited[start.index()] {
            continue;
        }
        visited[start.index()] = true;
        let mut queue = VecDeque::new();
        queue.push_back(start);
        let mut system = Vec::new();

        while let Some(cur) = queue.pop_front() {
            system.push(graph[cur]);
            for nb in graph.neighbors(cur) {
                if !visited[nb.index()] {
                    visited[nb.index()] = true;
                    queue.push_back(nb);
                }
            }
        }

        if system.len() >= min_size {
            system.sort_unstable();
            systems.push(system);
        }
    }

    systems
}

/// Mean order over the bonds inside `system`, or `None` if it has none.
pub fn mean_bond_order(mol: &Molecule, system: &[usize]) -> Option<f64> {
    let mut total = 0.0;
    let mut count = 0usize;
    for (k, &a) in system.iter().enumerate() {
        for &b in &system[k + 1..] {
            let order = mol.bond_order(a, b);
            if order > 0.0 {
                total += order;
                count += 1;
            }
        }
    }
    (count > 0).then(|| total / count as f64)
}

/// Spreads bond order evenly over every conjugated system: each bond inside
/// a system is overwritten with the system's mean bond order.
pub fn delocalize(mut mol: Molecule, aromatic: &[bool], min_size: usize) -> Molecule {
    let systems = find_conjugated_systems(&mol, aromatic, min_size);

    for system in &systems {
        let Some(mean) = mean_bond_order(&mol, system) else {
            continue;
        };
        log::trace!("conjugated system {system:?}: mean bond order {mean:.4}");

        for (k, &a) in system.iter().enumerate() {
            for &b in &system[k + 1..] {
                if mol.bonds().has_bond(a, b) {
                    mol.bonds_mut().set_order(a, b, mean);
                }
            }
        }
    }
    mol
}
