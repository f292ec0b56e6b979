//! End-to-end generation entry point.

use crate::encoder::{encode, EncodedText};
use crate::error::CwResult;
use crate::synth::synthesize;
use crate::wav::{AudioSpec, WavResult};

/// Result of a full text-to-WAV generation run.
#[derive(Debug)]
pub struct GenerateResult {
    /// The serialized WAV output.
    pub wav: WavResult,
    /// The intermediate Morse encoding of the input text.
    pub encoded: EncodedText,
}

/// Runs the whole pipeline in memory: encode, synthesize, serialize.
///
/// Callers that need a file on disk follow up with
/// [`crate::wav::write_file`] on the synthesized samples, or simply write
/// `result.wav.wav_data`.
pub fn generate(text: &str, wpm: u32, freq_hz: f64, spec: &AudioSpec) -> CwResult<GenerateResult> {
    let encoded = encode(text);
    let samples = synthesize(&encoded, wpm, freq_hz, spec)?;
    let wav = WavResult::from_mono(&samples, spec);

    Ok(GenerateResult { wav, encoded })
}
