use serde::{Deserialize, Serialize};

/// Directed layout edge: `destination` follows `source`, sharing `weight` symbols
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Arc {
    pub source: usize,
    pub destination: usize,
    pub weight: usize,
}

impl Arc {
    #[must_use]
    pub fn new(source: usize, destination: usize, weight: usize) -> Self {
        Self {
            source,
            destination,
            weight,
        }
    }
}

impl std::fmt::Display for Arc {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {} ({})", self.source, self.destination, self.weight)
    }
}

/// Ordered arcs forming one simple path; one chain becomes one contig
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chain {
    pub arcs: Vec<Arc>,
}

impl Chain {
    #[must_use]
    pub fn new(arcs: Vec<Arc>) -> Self {
        Self { arcs }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.arcs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.arcs.is_empty()
    }

    /// Read indices visited by the chain, in path order
    #[must_use]
    pub fn nodes(&self) -> Vec<usize> {
        let Some(first) = self.arcs.first() else {
            return Vec::new();
        };
        std::iter::once(first.source)
            .chain(self.arcs.iter().map(|a| a.destination))
            .collect()
    }

    /// Sum of overlap weights along the chain
    #[must_use]
    pub fn total_weight(&self) -> usize {
        self.arcs.iter().map(|a| a.weight).sum()
    }
}

/// Which layout strategy to run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum LayoutKind {
    /// Degree- and cycle-aware greedy selection of the best remaining overlap
    #[default]
    Greedy,
    /// Reduction to an approximate asymmetric traveling-salesman tour
    Tsp,
}

impl std::fmt::Display for LayoutKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Greedy => write!(f, "greedy"),
            Self::Tsp => write!(f, "tsp"),
        }
    }
}
