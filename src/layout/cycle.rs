/// Successor links of the accepted arcs, used to reject cycle-closing edges
#[derive(Debug, Clone)]
pub struct CycleDetector {
    successor: Vec<Option<usize>>,
}

impl CycleDetector {
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self {
            successor: vec![None; size],
        }
    }

    /// Record an accepted arc
    pub fn link(&mut self, source: usize, destination: usize) {
        self.successor[source] = Some(destination);
    }

    #[must_use]
    pub fn successor(&self, node: usize) -> Option<usize> {
        self.successor[node]
    }

    /// Would adding `source -> destination` close a cycle?
    ///
    /// True if the reverse arc is already accepted, or if `source` can be
    /// reached from `destination` by following successor links. The walk
    /// stops at the first revisited node.
    #[must_use]
    pub fn closes_cycle(&self, source: usize, destination: usize) -> bool {
        if source == destination || self.successor[destination] == Some(source) {
            return true;
        }

        let mut visited = vec![false; self.successor.len()];
        let mut current = destination;
        visited[current] = true;

        while let Some(next) = self.successor[current] {
            if next == source {
                return true;
            }
            if visited[next] {
                return false;
            }
            visited[next] = true;
            current = next;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reverse_arc_closes_cycle() {
        let mut d = CycleDetector::new(3);
        d.link(0, 1);
        assert!(d.closes_cycle(1, 0));
        assert!(!d.closes_cycle(1, 2));
    }

    #[test]
    fn test_transitive_cycle() {
        let mut d = CycleDetector::new(4);
        d.link(0, 1);
        d.link(1, 2);
        d.link(2, 3);
        assert!(d.closes_cycle(3, 0));
        assert!(d.closes_cycle(3, 1));
        assert!(!d.closes_cycle(0, 3));
        assert_eq!(d.successor(3), None);
    }

    #[test]
    fn test_disjoint_paths_do_not_cycle() {
        let mut d = CycleDetector::new(4);
        d.link(0, 1);
        d.link(2, 3);
        assert!(!d.closes_cycle(1, 2));
        assert!(!d.closes_cycle(3, 0));
    }

    #[test]
    fn test_walk_terminates_on_existing_loop() {
        // Not reachable through the greedy engine, but the walk must stop
        let mut d = CycleDetector::new(4);
        d.link(1, 2);
        d.link(2, 1);
        assert!(!d.closes_cycle(0, 1));
    }
}
