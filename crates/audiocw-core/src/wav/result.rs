//! WAV generation result type.

use super::format::AudioSpec;
use super::writer::{samples_to_pcm16, write_wav_to_vec};

/// Result of serializing a sample buffer to WAV bytes in memory.
#[derive(Debug)]
pub struct WavResult {
    /// Complete WAV file bytes.
    pub wav_data: Vec<u8>,
    /// BLAKE3 hash of the PCM payload only (determinism checks).
    pub pcm_hash: String,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Number of samples.
    pub num_samples: usize,
}

impl WavResult {
    /// Creates a WavResult from mono samples.
    pub fn from_mono(samples: &[f32], spec: &AudioSpec) -> Self {
        let pcm = samples_to_pcm16(samples);
        let pcm_hash = blake3::hash(&pcm).to_hex().to_string();
        let wav_data = write_wav_to_vec(spec, &pcm);

        Self {
            wav_data,
            pcm_hash,
            sample_rate: spec.sample_rate,
            num_samples: samples.len(),
        }
    }

    /// Returns the audio duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.num_samples as f64 / self.sample_rate as f64
    }
}
