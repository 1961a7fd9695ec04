use super::waveform::Waveform;
use crate::shared::error::VadError;

/// Prepares a decoded waveform for the speech model: rate check,
/// channel collapse and peak normalization.
pub struct Preprocessor {
    expected_rate: u32,
}

impl Preprocessor {
    pub fn new(expected_rate: u32) -> Self {
        Self { expected_rate }
    }

    /// Validate and transform `waveform` in place.
    ///
    /// Fails with `SampleRateMismatch` without touching the samples when the
    /// waveform's rate differs from the expected one.
    pub fn preprocess(&self, mut waveform: Waveform) -> Result<Waveform, VadError> {
        if waveform.sample_rate() != self.expected_rate {
            return Err(VadError::SampleRateMismatch {
                actual: waveform.sample_rate(),
                expected: self.expected_rate,
            });
        }

        waveform.downmix_to_mono();

        let peak = waveform.peak();
        if peak > 1.0 {
            for sample in waveform.samples_mut() {
                *sample /= peak;
            }
        }

        Ok(waveform)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;

    #[test]
    fn test_rate_mismatch_fails_with_both_rates() {
        let pre = Preprocessor::new(16000);
        let err = pre
            .preprocess(Waveform::mono(vec![0.5; 8], 8000))
            .unwrap_err();
        match err {
            VadError::SampleRateMismatch { actual, expected } => {
                assert_eq!(actual, 8000);
                assert_eq!(expected, 16000);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[rstest]
    #[case::quiet(vec![0.1, -0.2, 0.3])]
    #[case::exactly_full_scale(vec![1.0, -1.0, 0.25])]
    #[case::empty(vec![])]
    fn test_normalization_is_noop_at_or_below_unity(#[case] samples: Vec<f32>) {
        let pre = Preprocessor::new(16000);
        let out = pre
            .preprocess(Waveform::mono(samples.clone(), 16000))
            .unwrap();
        assert_eq!(out.samples(), &samples[..]);
    }

    #[test]
    fn test_peak_normalization_scales_into_unit_range() {
        let pre = Preprocessor::new(16000);
        let out = pre
            .preprocess(Waveform::mono(vec![2.0, -4.0, 1.0], 16000))
            .unwrap();
        assert_relative_eq!(out.samples()[0], 0.5);
        assert_relative_eq!(out.samples()[1], -1.0);
        assert_relative_eq!(out.samples()[2], 0.25);
    }

    #[test]
    fn test_silent_waveform_is_unchanged() {
        let pre = Preprocessor::new(16000);
        let out = pre
            .preprocess(Waveform::mono(vec![0.0; 1600], 16000))
            .unwrap();
        assert!(out.samples().iter().all(|s| *s == 0.0));
        assert_eq!(out.samples().len(), 1600);
    }

    #[test]
    fn test_stereo_is_averaged_before_normalization() {
        let pre = Preprocessor::new(16000);
        // frames: (4, 2) -> 3, (-1, -1) -> -1, (0.5, 0.5) -> 0.5
        let out = pre
            .preprocess(Waveform::new(
                vec![4.0, 2.0, -1.0, -1.0, 0.5, 0.5],
                16000,
                2,
            ))
            .unwrap();
        assert_eq!(out.channels(), 1);
        assert_eq!(out.samples().len(), 3);
        assert_relative_eq!(out.samples()[0], 1.0);
        assert_relative_eq!(out.samples()[1], -1.0 / 3.0);
        assert_relative_eq!(out.samples()[2], 0.5 / 3.0);
    }

    #[test]
    fn test_output_within_unit_range() {
        let pre = Preprocessor::new(16000);
        let samples: Vec<f32> = (0..1000).map(|i| (i as f32 * 0.37).sin() * 7.5).collect();
        let out = pre.preprocess(Waveform::mono(samples, 16000)).unwrap();
        assert!(out.samples().iter().all(|s| (-1.0..=1.0).contains(s)));
    }
}
