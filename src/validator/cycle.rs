use crate::circuit::CircuitDefinition;
use ahash::AHashMap;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Mark {
    Unvisited,
    InProgress,
    Done,
}

/// DFS with recursion-stack coloring. Returns the node ids forming the
/// first cycle found, or `None` when the circuit is acyclic. Roots and
/// successors are visited in ascending id order so the reported cycle is
/// deterministic.
pub(super) fn find_cycle(circuit: &CircuitDefinition) -> Option<Vec<String>> {
    let mut successors: AHashMap<&str, Vec<&str>> = AHashMap::new();
    for node in &circuit.nodes {
        successors.entry(node.id.as_str()).or_default();
    }
    for edge in &circuit.edges {
        // Dangling edges are reported by the endpoint check; skip them here.
        if successors.contains_key(edge.target.as_str()) {
            if let Some(succ) = successors.get_mut(edge.source.as_str()) {
                succ.push(edge.target.as_str());
            }
        }
    }
    for succ in successors.values_mut() {
        succ.sort_unstable();
        succ.dedup();
    }

    let mut roots: Vec<&str> = circuit.nodes.iter().map(|n| n.id.as_str()).collect();
    roots.sort_unstable();

    let mut finder = CycleFinder {
        successors,
        marks: AHashMap::new(),
        stack: Vec::new(),
    };
    roots.into_iter().find_map(|root| finder.visit(root))
}

struct CycleFinder<'a> {
    successors: AHashMap<&'a str, Vec<&'a str>>,
    marks: AHashMap<&'a str, Mark>,
    stack: Vec<&'a str>,
}

impl<'a> CycleFinder<'a> {
    fn visit(&mut self, node: &'a str) -> Option<Vec<String>> {
        match self.marks.get(node).copied().unwrap_or(Mark::Unvisited) {
            Mark::Done => return None,
            Mark::InProgress => {
                // Back edge: the cycle is the stack suffix starting at `node`.
                let start = self.stack.iter().position(|n| *n == node).unwrap_or(0);
                return Some(self.stack[start..].iter().map(|n| n.to_string()).collect());
            }
            Mark::Unvisited => {}
        }

        self.marks.insert(node, Mark::InProgress);
        self.stack.push(node);

        let succs = self.successors.get(node).cloned().unwrap_or_default();
        for succ in succs {
            if let Some(cycle) = self.visit(succ) {
                return Some(cycle);
            }
        }

        self.stack.pop();
        self.marks.insert(node, Mark::Done);
        None
    }
}
