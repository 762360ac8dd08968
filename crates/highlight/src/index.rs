use std::collections::HashMap;

use clipfarm_transcript::Transcript;

use crate::text::normalize;

/// Longest n-gram the index keeps.
pub const MAX_GRAM: usize = 3;

type GramMap = HashMap<Box<[String]>, Vec<usize>>;

#[derive(Debug, Clone, PartialEq)]
pub struct IndexedWord {
    /// Word as transcribed.
    pub text: String,
    /// Normalized form used as the lookup key.
    pub key: String,
    pub start_time: f64,
    pub end_time: f64,
}

/// Immutable n-gram lookup over a transcript's pronunciation words.
///
/// For each n in `1..=MAX_GRAM`, maps a tuple of normalized words to every
/// position where that tuple begins, in ascending order. Positions index into
/// the pronunciation-only word sequence. Build once per transcript and share
/// by reference; nothing mutates it afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct TranscriptIndex {
    words: Vec<IndexedWord>,
    grams: [GramMap; MAX_GRAM],
}

impl TranscriptIndex {
    pub fn build(transcript: &Transcript) -> Self {
        let words: Vec<IndexedWord> = transcript
            .words()
            .iter()
            .map(|w| IndexedWord {
                key: normalize(&w.text),
                text: w.text.clone(),
                start_time: w.start_time,
                end_time: w.end_time,
            })
            .collect();

        let keys: Vec<String> = words.iter().map(|w| w.key.clone()).collect();
        let mut grams: [GramMap; MAX_GRAM] = Default::default();

        for (slot, map) in grams.iter_mut().enumerate() {
            for (pos, window) in keys.windows(slot + 1).enumerate() {
                map.entry(window.into()).or_default().push(pos);
            }
        }

        Self { words, grams }
    }

    /// Start positions of `gram`, ascending. Empty for unknown grams or
    /// lengths outside `1..=MAX_GRAM`.
    pub fn positions(&self, gram: &[String]) -> &[usize] {
        match gram.len() {
            n @ 1..=MAX_GRAM => self.grams[n - 1]
                .get(gram)
                .map(Vec::as_slice)
                .unwrap_or_default(),
            _ => &[],
        }
    }

    /// Distinct normalized words and their positions.
    pub fn vocabulary(&self) -> impl Iterator<Item = (&str, &[usize])> {
        self.grams[0]
            .iter()
            .filter_map(|(gram, positions)| Some((gram.first()?.as_str(), positions.as_slice())))
    }

    pub fn words(&self) -> &[IndexedWord] {
        &self.words
    }

    pub fn word(&self, pos: usize) -> Option<&IndexedWord> {
        self.words.get(pos)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Transcript text of the inclusive span, as transcribed. Empty unless
    /// both ends are valid positions.
    pub fn span_text(&self, start: usize, end: usize) -> String {
        self.words
            .get(start..=end)
            .unwrap_or_default()
            .iter()
            .map(|w| w.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clipfarm_transcript::WordItem;
    use quickcheck::Arbitrary;

    fn gram(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    fn sample() -> Transcript {
        Transcript::new(vec![
            WordItem::word("The", 0.0, 0.5),
            WordItem::word("cat", 0.5, 1.0),
            WordItem::punctuation(","),
            WordItem::word("the", 1.0, 1.5),
            WordItem::word("cat", 1.5, 2.0),
            WordItem::word("sat", 2.0, 2.5),
            WordItem::punctuation("."),
        ])
        .unwrap()
    }

    #[test]
    fn positions_skip_punctuation_and_ignore_case() {
        let index = TranscriptIndex::build(&sample());

        assert_eq!(index.len(), 5);
        assert_eq!(index.positions(&gram(&["the"])), &[0, 2]);
        assert_eq!(index.positions(&gram(&["the", "cat"])), &[0, 2]);
        assert_eq!(index.positions(&gram(&["cat", "the"])), &[1]);
        assert_eq!(index.positions(&gram(&["the", "cat", "sat"])), &[2]);
        assert_eq!(index.positions(&gram(&["sat"])), &[4]);
    }

    #[test]
    fn unknown_and_oversized_grams_are_empty() {
        let index = TranscriptIndex::build(&sample());

        assert!(index.positions(&gram(&["dog"])).is_empty());
        assert!(index.positions(&gram(&[])).is_empty());
        assert!(index.positions(&gram(&["the", "cat", "the", "cat"])).is_empty());
    }

    #[test]
    fn vocabulary_lists_distinct_words() {
        let index = TranscriptIndex::build(&sample());
        let mut vocab: Vec<_> = index.vocabulary().map(|(w, p)| (w, p.len())).collect();
        vocab.sort();

        assert_eq!(vocab, vec![("cat", 2), ("sat", 1), ("the", 2)]);
    }

    #[test]
    fn span_text_keeps_original_spelling() {
        let index = TranscriptIndex::build(&sample());

        assert_eq!(index.span_text(0, 2), "The cat the");
        assert_eq!(index.span_text(3, 3), "cat");
        assert_eq!(index.span_text(3, 9), "");
    }

    #[test]
    fn empty_transcript_builds_empty_index() {
        let index = TranscriptIndex::build(&Transcript::new(vec![]).unwrap());

        assert!(index.is_empty());
        assert!(index.positions(&gram(&["anything"])).is_empty());
    }

    #[derive(Debug, Clone)]
    struct SmallVocabTranscript(Vec<String>);

    impl quickcheck::Arbitrary for SmallVocabTranscript {
        fn arbitrary(g: &mut quickcheck::Gen) -> Self {
            let vocab = ["a", "b", "c", "Dog", "dog.", "run"];
            let len = usize::arbitrary(g) % 40;
            SmallVocabTranscript(
                (0..len)
                    .map(|_| g.choose(&vocab).unwrap().to_string())
                    .collect(),
            )
        }
    }

    fn transcript_of(words: &[String]) -> Transcript {
        Transcript::from_timed_words(
            words
                .iter()
                .enumerate()
                .map(|(i, w)| (w.clone(), i as f64, i as f64 + 1.0)),
        )
        .unwrap()
    }

    #[quickcheck_macros::quickcheck]
    fn prop_build_is_idempotent(words: SmallVocabTranscript) -> bool {
        let transcript = transcript_of(&words.0);
        TranscriptIndex::build(&transcript) == TranscriptIndex::build(&transcript)
    }

    #[quickcheck_macros::quickcheck]
    fn prop_every_position_starts_its_gram(words: SmallVocabTranscript) -> bool {
        let index = TranscriptIndex::build(&transcript_of(&words.0));
        let keys: Vec<String> = index.words().iter().map(|w| w.key.clone()).collect();

        (1..=MAX_GRAM).all(|n| {
            keys.windows(n).all(|window| {
                let positions = index.positions(window);
                positions.windows(2).all(|p| p[0] < p[1])
                    && positions.iter().all(|&p| keys[p..p + n] == *window)
            })
        })
    }
}
