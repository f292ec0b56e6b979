//! Morse tone synthesis.
//!
//! Renders an [`EncodedText`] into a flat sample buffer with PARIS-standard
//! timing: one dot lasts `1.2 / wpm` seconds and a dash three times that.
//! Every tone is followed by one dot of silence; a letter boundary adds two
//! more dots on top of that gap and a word boundary six more. Gaps are
//! composed (always 1 dot, plus extras at boundaries) rather than measured
//! as a single 3- or 7-dot quantity from tone end; output durations depend
//! on that accounting, so it must not be "corrected".
//!
//! Synthesis is deterministic: identical inputs yield byte-identical
//! buffers.

use crate::encoder::EncodedText;
use crate::error::{CwError, CwResult};
use crate::wav::AudioSpec;

const TWO_PI: f64 = 2.0 * std::f64::consts::PI;

/// Dot duration in seconds for a keying speed, per the PARIS standard.
pub fn dot_duration(wpm: u32) -> f64 {
    1.2 / wpm as f64
}

/// Synthesizes an encoded text into amplitude samples in `[-1.0, 1.0]`.
///
/// The buffer starts with one dash-duration of leading silence; an empty
/// input yields only that padding. Fails with
/// [`CwError::InvalidWpm`] / [`CwError::InvalidFrequency`] before any
/// samples are produced when the parameters are non-positive.
pub fn synthesize(
    text: &EncodedText,
    wpm: u32,
    freq_hz: f64,
    spec: &AudioSpec,
) -> CwResult<Vec<f32>> {
    if wpm == 0 {
        return Err(CwError::InvalidWpm { wpm });
    }
    if !freq_hz.is_finite() || freq_hz <= 0.0 {
        return Err(CwError::InvalidFrequency { freq: freq_hz });
    }

    let sample_rate = spec.sample_rate as f64;
    let dot = dot_duration(wpm);
    let dash = 3.0 * dot;

    let mut samples = Vec::new();

    // Leading padding before the first tone.
    push_silence(&mut samples, sample_rate, dash);

    for (i, word) in text.words().iter().enumerate() {
        for c in word.as_str().chars() {
            match c {
                '.' => {
                    push_tone(&mut samples, sample_rate, freq_hz, dot);
                    push_silence(&mut samples, sample_rate, dot);
                }
                '-' => {
                    push_tone(&mut samples, sample_rate, freq_hz, dash);
                    push_silence(&mut samples, sample_rate, dot);
                }
                // Letter boundary: two extra dots on top of the gap the
                // preceding symbol already appended.
                ' ' => push_silence(&mut samples, sample_rate, 2.0 * dot),
                // EncodedWord only ever holds '.', '-' and ' '.
                _ => {}
            }
        }
        if i + 1 != text.len() {
            push_silence(&mut samples, sample_rate, 6.0 * dot);
        }
    }

    Ok(samples)
}

/// Appends `floor(sample_rate * duration)` sine samples at `freq_hz`.
fn push_tone(samples: &mut Vec<f32>, sample_rate: f64, freq_hz: f64, duration: f64) {
    let total = (sample_rate * duration) as usize;
    samples.reserve(total);
    for i in 0..total {
        let t = i as f64 / sample_rate;
        samples.push((TWO_PI * freq_hz * t).sin() as f32);
    }
}

/// Appends `floor(sample_rate * duration)` zero samples.
fn push_silence(samples: &mut Vec<f32>, sample_rate: f64, duration: f64) {
    let total = (sample_rate * duration) as usize;
    samples.resize(samples.len() + total, 0.0);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::encode;
    use pretty_assertions::assert_eq;

    const SPEC: AudioSpec = AudioSpec::pcm8k();

    /// Samples for `duration` seconds at the canonical 8 kHz rate.
    fn ticks(duration: f64) -> usize {
        (SPEC.sample_rate as f64 * duration) as usize
    }

    #[test]
    fn test_dot_duration_formula() {
        assert_eq!(dot_duration(10), 0.12);
        assert_eq!(dot_duration(20), 0.06);
    }

    #[test]
    fn test_single_letter_e_length() {
        // "E" at 10 wpm: leading pad (dash) + dot tone + dot gap, and no
        // word-boundary silence since it is the only word.
        let samples = synthesize(&encode("E"), 10, 750.0, &SPEC).unwrap();
        assert_eq!(samples.len(), ticks(0.36) + ticks(0.12) + ticks(0.12));
    }

    #[test]
    fn test_sos_scenario_decomposition() {
        // pad + (dot+gap)*3 + letter + (dash+gap)*3 + letter + (dot+gap)*3
        let samples = synthesize(&encode("SOS"), 10, 600.0, &SPEC).unwrap();
        let dot = ticks(0.12);
        let dash = ticks(0.36);
        let expected = dash            // leading pad
            + 3 * (dot + dot)          // "..."
            + 2 * dot                  // S|O boundary
            + 3 * (dash + dot)         // "---"
            + 2 * dot                  // O|S boundary
            + 3 * (dot + dot);         // "..."
        assert_eq!(samples.len(), expected);
        assert_eq!(expected, 29760);
    }

    #[test]
    fn test_word_gap_between_words_only() {
        let one = synthesize(&encode("E"), 10, 750.0, &SPEC).unwrap();
        let two = synthesize(&encode("E E"), 10, 750.0, &SPEC).unwrap();
        // Second word adds a 6-dot word gap plus its own tone and gap, but
        // no trailing word gap of its own.
        assert_eq!(two.len(), 2 * one.len() - ticks(0.36) + ticks(6.0 * 0.12));
    }

    #[test]
    fn test_combinatorial_sample_count() {
        // Expected count computed independently from symbol/marker/word
        // tallies of the encoded form. Each silence chunk is floored on its
        // own, exactly as the synthesizer appends it.
        let text = encode("cq de k7$ab");
        let wpm = 17;
        let d = dot_duration(wpm);
        let (dot, dash) = (ticks(d), ticks(3.0 * d));

        let mut expected = dash; // leading pad
        for word in text.words() {
            for c in word.as_str().chars() {
                expected += match c {
                    '.' => dot + dot,
                    '-' => dash + dot,
                    _ => ticks(2.0 * d),
                };
            }
        }
        expected += (text.len() - 1) * ticks(6.0 * d);

        let samples = synthesize(&text, wpm, 440.0, &SPEC).unwrap();
        assert_eq!(samples.len(), expected);
    }

    #[test]
    fn test_empty_text_is_padding_only() {
        let samples = synthesize(&encode(""), 10, 750.0, &SPEC).unwrap();
        assert_eq!(samples.len(), ticks(0.36));
        assert!(samples.iter().all(|&s| s == 0.0));
    }

    #[test]
    fn test_all_unsupported_word_is_silent() {
        let samples = synthesize(&encode("###"), 10, 750.0, &SPEC).unwrap();
        // Pad plus two positional letter-boundary markers, all silence.
        assert_eq!(samples.len(), ticks(0.36) + 2 * ticks(2.0 * 0.12));
        assert!(samples.iter().all(|&s| s == 0.0));
    }

    #[test]
    fn test_amplitude_bound() {
        let samples = synthesize(&encode("PARIS paris 599?"), 25, 1234.5, &SPEC).unwrap();
        assert!(samples.iter().all(|&s| (-1.0..=1.0).contains(&s)));
    }

    #[test]
    fn test_tone_phase_starts_at_zero() {
        let samples = synthesize(&encode("T"), 10, 600.0, &SPEC).unwrap();
        let tone_start = ticks(0.36);
        assert_eq!(samples[tone_start], 0.0);
        // 600 Hz at 8 kHz: second sample is sin(2*pi*600/8000), audibly on.
        assert!(samples[tone_start + 1] > 0.4);
    }

    #[test]
    fn test_determinism() {
        let text = encode("hello world");
        let a = synthesize(&text, 12, 700.0, &SPEC).unwrap();
        let b = synthesize(&text, 12, 700.0, &SPEC).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_zero_wpm_rejected() {
        let err = synthesize(&encode("sos"), 0, 750.0, &SPEC).unwrap_err();
        assert!(matches!(err, CwError::InvalidWpm { wpm: 0 }));
    }

    #[test]
    fn test_negative_frequency_rejected() {
        let err = synthesize(&encode("sos"), 10, -5.0, &SPEC).unwrap_err();
        assert!(matches!(err, CwError::InvalidFrequency { .. }));
    }

    #[test]
    fn test_nan_frequency_rejected() {
        let err = synthesize(&encode("sos"), 10, f64::NAN, &SPEC).unwrap_err();
        assert!(matches!(err, CwError::InvalidFrequency { .. }));
    }
}
