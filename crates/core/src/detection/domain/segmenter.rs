use super::segment::Segment;

/// Converts a speech probability curve into speech segments with a single
/// fixed threshold.
///
/// Entry into speech requires `p > threshold`; exit happens on
/// `p <= threshold`. A probability exactly at the threshold is not speech.
/// No smoothing, minimum duration or merging is applied.
pub struct Segmenter {
    threshold: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum State {
    Silence,
    Speech { start: usize },
}

impl Segmenter {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    /// Scan `probabilities` once and return the ordered, non-overlapping
    /// speech segments. A segment still open at the end of the curve is
    /// closed at `probabilities.len()`.
    pub fn segment(&self, probabilities: &[f32]) -> Vec<Segment> {
        let mut segments = Vec::new();
        let mut state = State::Silence;

        for (i, &p) in probabilities.iter().enumerate() {
            let speech = f64::from(p) > self.threshold;
            state = match (state, speech) {
                (State::Silence, true) => State::Speech { start: i },
                (State::Speech { start }, false) => {
                    segments.push(Segment::new(start, i));
                    State::Silence
                }
                (unchanged, _) => unchanged,
            };
        }

        if let State::Speech { start } = state {
            segments.push(Segment::new(start, probabilities.len()));
        }

        segments
    }
}
