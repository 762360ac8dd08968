use super::{Edge, MatchQuery, Matcher, Tier};

/// Last resort for the end edge: the word starting closest to
/// `anchor start + target_duration`. Never places a start.
#[derive(Debug, Clone, Copy)]
pub struct TimeEstimateMatcher {
    target_duration: f64,
}

impl TimeEstimateMatcher {
    pub fn new(target_duration: f64) -> Self {
        Self { target_duration }
    }
}

impl Matcher for TimeEstimateMatcher {
    fn tier(&self) -> Tier {
        Tier::TimeEstimate
    }

    fn locate(&self, query: &MatchQuery<'_>) -> Option<usize> {
        if query.edge != Edge::End {
            return None;
        }
        let anchor = query.anchor?;
        let words = query.index.words();
        let target = words.get(anchor)?.start_time + self.target_duration;

        let mut best: Option<(usize, f64)> = None;
        for (pos, word) in words.iter().enumerate().skip(anchor) {
            let distance = (word.start_time - target).abs();
            if best.is_none_or(|(_, d)| distance < d) {
                best = Some((pos, distance));
            }
        }
        best.map(|(pos, _)| pos)
    }
}
