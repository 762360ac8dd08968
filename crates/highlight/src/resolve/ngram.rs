use super::{Edge, MatchQuery, Matcher, Tier};

/// Looks up every `n`-word run of the edge window in the index.
///
/// The start edge takes the earliest hit. The end edge takes the latest hit
/// and shifts it to the run's last word.
#[derive(Debug, Clone, Copy)]
pub struct NgramMatcher {
    n: usize,
    tier: Tier,
}

impl NgramMatcher {
    pub fn trigram() -> Self {
        Self {
            n: 3,
            tier: Tier::Trigram,
        }
    }

    pub fn bigram() -> Self {
        Self {
            n: 2,
            tier: Tier::Bigram,
        }
    }
}

impl Matcher for NgramMatcher {
    fn tier(&self) -> Tier {
        self.tier
    }

    fn locate(&self, query: &MatchQuery<'_>) -> Option<usize> {
        let hits = query
            .window()
            .windows(self.n)
            .flat_map(|gram| query.index.positions(gram).iter().copied());

        match query.edge {
            Edge::Start => hits.min(),
            Edge::End => hits.max().map(|pos| pos + self.n - 1),
        }
    }
}
