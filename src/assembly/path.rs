use std::collections::{HashMap, HashSet};

use tracing::warn;

use crate::core::types::{Arc, Chain};

/// Chains recovered from an arc list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reorganized {
    /// One chain per start node, in start-node discovery order
    pub chains: Vec<Chain>,

    /// Nodes touched by some arc but reachable from no start node
    /// (every node of their component has a predecessor), ascending
    pub orphaned: Vec<usize>,
}

/// Split an arc list into ordered chains.
///
/// Start nodes are the nodes touched by an arc that never appear as a
/// destination, taken in the order they first appear in `arcs` (source
/// before destination). Each chain follows successor links from its start
/// node until there is no successor or a node repeats. Each source is
/// expected to have at most one outgoing arc; if it has several, the last
/// one listed wins.
#[must_use]
pub fn reorganize(arcs: &[Arc]) -> Reorganized {
    let mut successor: HashMap<usize, Arc> = HashMap::with_capacity(arcs.len());
    let mut destinations: HashSet<usize> = HashSet::with_capacity(arcs.len());
    let mut discovered: Vec<usize> = Vec::with_capacity(arcs.len() * 2);
    let mut seen: HashSet<usize> = HashSet::with_capacity(arcs.len() * 2);

    for arc in arcs {
        successor.insert(arc.source, *arc);
        destinations.insert(arc.destination);
        for node in [arc.source, arc.destination] {
            if seen.insert(node) {
                discovered.push(node);
            }
        }
    }

    let mut covered: HashSet<usize> = HashSet::with_capacity(seen.len());
    let mut chains = Vec::new();

    for &start in discovered.iter().filter(|n| !destinations.contains(*n)) {
        let mut walked = HashSet::new();
        let mut chain = Vec::new();
        let mut current = start;
        walked.insert(current);

        while let Some(arc) = successor.get(&current) {
            chain.push(*arc);
            current = arc.destination;
            if !walked.insert(current) {
                break;
            }
        }

        covered.extend(walked);
        chains.push(Chain::new(chain));
    }

    let mut orphaned: Vec<usize> = discovered
        .into_iter()
        .filter(|n| !covered.contains(n))
        .collect();
    orphaned.sort_unstable();

    if !orphaned.is_empty() {
        warn!(
            count = orphaned.len(),
            nodes = ?orphaned,
            "Reads in a cycle with no start node were left out of every chain"
        );
    }

    Reorganized { chains, orphaned }
}
