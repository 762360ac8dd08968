use super::{Edge, MatchQuery, Matcher, Tier};

/// Words this short or shorter are too common to anchor on.
pub const UNIGRAM_MIN_CHARS: usize = 4;
/// Content words probed from each edge of the segment.
pub const UNIGRAM_PROBE_WORDS: usize = 3;

/// Single-word fallback, tolerant of small spelling drift.
///
/// A probe word with no exact occurrence matches every transcript word whose
/// [`word_similarity`] reaches `similarity_threshold`.
#[derive(Debug, Clone, Copy)]
pub struct UnigramMatcher {
    similarity_threshold: f64,
}

impl UnigramMatcher {
    pub fn new(similarity_threshold: f64) -> Self {
        Self {
            similarity_threshold,
        }
    }

    fn occurrences(&self, query: &MatchQuery<'_>, word: &str) -> Vec<usize> {
        let exact = query.index.positions(&[word.to_owned()]);
        if !exact.is_empty() {
            return exact.to_vec();
        }

        query
            .index
            .vocabulary()
            .filter(|(candidate, _)| word_similarity(word, candidate) >= self.similarity_threshold)
            .flat_map(|(_, positions)| positions.iter().copied())
            .collect()
    }
}

impl Matcher for UnigramMatcher {
    fn tier(&self) -> Tier {
        Tier::Unigram
    }

    fn locate(&self, query: &MatchQuery<'_>) -> Option<usize> {
        let content = query
            .tokens
            .iter()
            .filter(|w| w.chars().count() >= UNIGRAM_MIN_CHARS);

        match query.edge {
            Edge::Start => content
                .take(UNIGRAM_PROBE_WORDS)
                .flat_map(|w| self.occurrences(query, w))
                .min(),
            Edge::End => {
                let last = query.index.len().checked_sub(1)?;
                content
                    .rev()
                    .take(UNIGRAM_PROBE_WORDS)
                    .find_map(|w| self.occurrences(query, w).into_iter().max())
                    .map(|pos| (pos + 1).min(last))
            }
        }
    }
}

/// Normalized Levenshtein similarity in `[0, 1]`. Letter order counts, so
/// anagrams like `there` and `three` stay apart.
pub fn word_similarity(a: &str, b: &str) -> f64 {
    strsim::normalized_levenshtein(a, b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolve::tests::index_of;
    use crate::text::tokenize;

    const TRANSCRIPT: &str = "so the market crashed and then everyone panicked about money";

    fn locate(threshold: f64, segment: &str, edge: Edge) -> Option<usize> {
        let index = index_of(TRANSCRIPT);
        let tokens = tokenize(segment);
        UnigramMatcher::new(threshold).locate(&MatchQuery {
            index: &index,
            tokens: &tokens,
            edge,
            anchor: None,
        })
    }

    #[test]
    fn start_takes_smallest_position_among_probe_words() {
        assert_eq!(locate(0.8, "everyone says market was bad", Edge::Start), Some(2));
    }

    #[test]
    fn short_words_are_ignored() {
        // "the" and "and" exist in the transcript but are too short to probe.
        assert_eq!(locate(0.8, "the and the and", Edge::Start), None);
    }

    #[test]
    fn only_the_first_three_content_words_are_probed() {
        assert_eq!(locate(1.0, "lots more words here market", Edge::Start), None);
    }

    #[test]
    fn end_prefers_the_last_word_with_hits() {
        // "money" is the final transcript word, so the step past it is clamped.
        assert_eq!(locate(0.8, "market went down losing money", Edge::End), Some(9));
        // Without an occurrence of the last word, fall back to the previous one.
        assert_eq!(locate(0.8, "market crashed totally", Edge::End), Some(4));
    }

    #[test]
    fn misspelling_matches_above_threshold() {
        // One dropped letter out of eight: 7 / 8.
        assert_eq!(locate(0.8, "people panickd over it", Edge::Start), Some(7));
        assert_eq!(locate(0.9, "people panickd over it", Edge::Start), None);
    }

    #[test]
    fn anagrams_are_not_occurrences() {
        let index = index_of(
            "we counted three boxes then listen carefully to the note before leaving home",
        );
        let tokens = tokenize("there silent tone");

        for edge in [Edge::Start, Edge::End] {
            let found = UnigramMatcher::new(0.8).locate(&MatchQuery {
                index: &index,
                tokens: &tokens,
                edge,
                anchor: Some(0),
            });
            assert_eq!(found, None);
        }
    }

    #[test]
    fn similarity_respects_letter_order() {
        assert_eq!(word_similarity("market", "market"), 1.0);
        assert!(word_similarity("there", "three") < 0.8);
        assert!(word_similarity("silent", "listen") < 0.8);
        assert!(word_similarity("tone", "note") < 0.8);
        assert!((word_similarity("panicked", "panickd") - 0.875).abs() < 1e-9);
    }
}
