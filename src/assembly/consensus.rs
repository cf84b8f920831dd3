use crate::core::contig::Contig;
use crate::core::read::Read;
use crate::core::types::Chain;

/// Merge the reads of one chain into a contig.
///
/// The first source read is copied whole; every arc then appends its
/// destination read minus the `weight` symbols it shares with its
/// predecessor. An empty chain gives an empty contig.
#[must_use]
pub fn build_consensus(reads: &[Read], chain: &Chain) -> Contig {
    let Some(first) = chain.arcs.first() else {
        return Contig::new(Vec::new(), Vec::new());
    };

    let capacity = reads[first.source].len()
        + chain
            .arcs
            .iter()
            .map(|a| reads[a.destination].len().saturating_sub(a.weight))
            .sum::<usize>();

    let mut sequence = Vec::with_capacity(capacity);
    sequence.extend_from_slice(&reads[first.source].sequence);
    for arc in &chain.arcs {
        let destination = &reads[arc.destination].sequence;
        sequence.extend_from_slice(destination.get(arc.weight..).unwrap_or_default());
    }

    Contig::new(sequence, chain.nodes())
}

/// One contig per chain, in chain order
#[must_use]
pub fn build_contigs(reads: &[Read], chains: &[Chain]) -> Vec<Contig> {
    chains
        .iter()
        .map(|chain| build_consensus(reads, chain))
        .collect()
}
