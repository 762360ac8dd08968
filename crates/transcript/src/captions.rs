//! SRT caption rendering.
//!
//! Cues are cut at sentence ends or after [`MAX_WORDS_PER_CAPTION`] words,
//! whichever comes first.

use crate::types::{SpokenWord, Transcript};

pub const MAX_WORDS_PER_CAPTION: usize = 10;

const SENTENCE_END: [char; 3] = ['.', '!', '?'];

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Caption {
    /// 1-based cue number.
    pub index: usize,
    pub start_time: f64,
    pub end_time: f64,
    pub text: String,
}

pub fn build_captions(transcript: &Transcript) -> Vec<Caption> {
    build_captions_with_limit(transcript, MAX_WORDS_PER_CAPTION)
}

pub fn build_captions_with_limit(transcript: &Transcript, max_words: usize) -> Vec<Caption> {
    let max_words = max_words.max(1);
    let words = transcript.words();
    let mut captions = Vec::new();
    let mut pending: Vec<&SpokenWord> = Vec::new();

    for (i, word) in words.iter().enumerate() {
        pending.push(word);

        let is_last = i + 1 == words.len();
        if pending.len() >= max_words || ends_sentence(word) || is_last {
            captions.push(cue(captions.len() + 1, &pending));
            pending.clear();
        }
    }

    captions
}

fn ends_sentence(word: &SpokenWord) -> bool {
    word.punctuated().trim_end().ends_with(SENTENCE_END)
}

fn cue(index: usize, words: &[&SpokenWord]) -> Caption {
    let text = words
        .iter()
        .map(|w| w.punctuated())
        .collect::<Vec<_>>()
        .join(" ");

    Caption {
        index,
        start_time: words.first().map(|w| w.start_time).unwrap_or_default(),
        end_time: words.last().map(|w| w.end_time).unwrap_or_default(),
        text,
    }
}

pub fn render_srt(captions: &[Caption]) -> String {
    captions
        .iter()
        .map(|c| {
            format!(
                "{}\n{} --> {}\n{}\n",
                c.index,
                format_srt_time(c.start_time),
                format_srt_time(c.end_time),
                c.text
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// `HH:MM:SS,mmm`, rounded to the nearest millisecond. Negative input clamps to zero.
pub fn format_srt_time(seconds: f64) -> String {
    let total_ms = (seconds.max(0.0) * 1000.0).round() as u64;
    let ms = total_ms % 1000;
    let total_secs = total_ms / 1000;
    let (hours, rest) = (total_secs / 3600, total_secs % 3600);
    let (minutes, secs) = (rest / 60, rest % 60);

    format!("{hours:02}:{minutes:02}:{secs:02},{ms:03}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::WordItem;

    fn numbered(count: usize) -> Transcript {
        Transcript::from_timed_words(
            (0..count).map(|i| (format!("w{i}"), i as f64, i as f64 + 0.5)),
        )
        .unwrap()
    }

    #[test]
    fn srt_time_format() {
        assert_eq!(format_srt_time(0.0), "00:00:00,000");
        assert_eq!(format_srt_time(1.2), "00:00:01,200");
        assert_eq!(format_srt_time(4.35), "00:00:04,350");
        assert_eq!(format_srt_time(3723.5), "01:02:03,500");
        assert_eq!(format_srt_time(-1.0), "00:00:00,000");
    }

    #[test]
    fn splits_after_ten_words() {
        let captions = build_captions(&numbered(23));

        assert_eq!(captions.len(), 3);
        assert_eq!(captions[0].text.split(' ').count(), 10);
        assert_eq!(captions[1].start_time, 10.0);
        assert_eq!(captions[1].end_time, 19.5);
        assert_eq!(captions[2].index, 3);
        assert_eq!(captions[2].text, "w20 w21 w22");
    }

    #[test]
    fn sentence_end_closes_a_cue() {
        let transcript = Transcript::new(vec![
            WordItem::word("Stop", 0.0, 0.3),
            WordItem::punctuation("."),
            WordItem::word("Go", 0.5, 0.7),
            WordItem::word("now", 0.8, 1.0),
            WordItem::punctuation("!"),
        ])
        .unwrap();

        let captions = build_captions(&transcript);

        assert_eq!(captions.len(), 2);
        assert_eq!(captions[0].text, "Stop.");
        assert_eq!(captions[0].end_time, 0.3);
        assert_eq!(captions[1].text, "Go now!");
    }

    #[test]
    fn renders_srt_blocks() {
        let transcript = Transcript::new(vec![
            WordItem::word("Hello", 0.0, 0.4),
            WordItem::punctuation("."),
            WordItem::word("Bye", 61.0, 61.25),
        ])
        .unwrap();

        let srt = render_srt(&build_captions(&transcript));

        assert_eq!(
            srt,
            "1\n00:00:00,000 --> 00:00:00,400\nHello.\n\n2\n00:01:01,000 --> 00:01:01,250\nBye\n"
        );
    }

    #[test]
    fn empty_transcript_has_no_captions() {
        let transcript = Transcript::new(vec![]).unwrap();
        assert!(build_captions(&transcript).is_empty());
        assert_eq!(render_srt(&[]), "");
    }

    #[quickcheck_macros::quickcheck]
    fn prop_every_word_lands_in_exactly_one_cue(count: u8, limit: u8) -> bool {
        let transcript = numbered(count as usize);
        let captions = build_captions_with_limit(&transcript, limit as usize);

        let covered: usize = captions.iter().map(|c| c.text.split(' ').count()).sum();
        covered == transcript.len()
            && captions
                .iter()
                .all(|c| c.text.split(' ').count() <= (limit as usize).max(1))
    }
}
