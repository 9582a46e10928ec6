use stheno_fuzz::{Corpus, CoverageMap};

/// One-line instruction and codehash counts.
pub fn render_coverage(coverage: &CoverageMap) -> String {
    format!(
        "Unique instructions: {} \nUnique codehashes: {}",
        coverage.points(),
        coverage.codehashes()
    )
}

/// One-line corpus size.
pub fn render_corpus(corpus: &Corpus) -> String {
    format!("Corpus size: {}", corpus.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::B256;
    use stheno_fuzz::CorpusEntry;

    #[test]
    fn coverage_counts() {
        let mut coverage = CoverageMap::default();
        coverage.hit(B256::with_last_byte(1), 0);
        coverage.hit(B256::with_last_byte(1), 2);
        coverage.hit(B256::with_last_byte(2), 0);

        assert_eq!(
            render_coverage(&coverage),
            "Unique instructions: 3 \nUnique codehashes: 2"
        );
    }

    #[test]
    fn corpus_count() {
        let mut corpus = Corpus::default();
        corpus.push(CorpusEntry { priority: 1, tx_seq: vec![] });

        assert_eq!(render_corpus(&corpus), "Corpus size: 1");
    }
}
