use crate::circuit::CircuitDefinition;
use ahash::AHashMap;
use std::collections::BTreeSet;

/// Kahn's algorithm: in-degree counting with ties broken by ascending node
/// id, so the order is deterministic for any given circuit. Assumes the
/// circuit already passed cycle validation; nodes on a cycle would simply
/// never become ready.
pub(super) fn topological_order(circuit: &CircuitDefinition) -> Vec<&str> {
    let mut in_degree: AHashMap<&str, usize> = circuit
        .nodes
        .iter()
        .map(|n| (n.id.as_str(), 0))
        .collect();
    let mut successors: AHashMap<&str, Vec<&str>> = AHashMap::new();

    for edge in &circuit.edges {
        if !in_degree.contains_key(edge.source.as_str()) {
            continue;
        }
        if let Some(degree) = in_degree.get_mut(edge.target.as_str()) {
            *degree += 1;
            successors
                .entry(edge.source.as_str())
                .or_default()
                .push(edge.target.as_str());
        }
    }

    let mut ready: BTreeSet<&str> = in_degree
        .iter()
        .filter(|(_, degree)| **degree == 0)
        .map(|(id, _)| *id)
        .collect();

    let mut order = Vec::with_capacity(circuit.nodes.len());
    while let Some(node) = ready.pop_first() {
        order.push(node);
        let Some(succs) = successors.get(node) else {
            continue;
        };
        for &succ in succs {
            if let Some(degree) = in_degree.get_mut(succ) {
                *degree -= 1;
                if *degree == 0 {
                    ready.insert(succ);
                }
            }
        }
    }

    order
}
