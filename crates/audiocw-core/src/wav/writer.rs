//! Core WAV writing and PCM conversion functions.

use std::io::{self, Write};

use super::format::AudioSpec;

/// Writes a complete WAV file to a writer.
///
/// Emits the RIFF header, a 16-byte PCM `fmt ` chunk built from `spec`,
/// and a `data` chunk holding `pcm_data`.
pub fn write_wav<W: Write>(writer: &mut W, spec: &AudioSpec, pcm_data: &[u8]) -> io::Result<()> {
    let data_size = pcm_data.len() as u32;
    let file_size = 36 + data_size; // Total file size minus 8 bytes for RIFF header

    // RIFF header
    writer.write_all(b"RIFF")?;
    writer.write_all(&file_size.to_le_bytes())?;
    writer.write_all(b"WAVE")?;

    // fmt chunk
    writer.write_all(b"fmt ")?;
    writer.write_all(&16u32.to_le_bytes())?; // Chunk size (16 for PCM)
    writer.write_all(&1u16.to_le_bytes())?; // Audio format (1 = PCM)
    writer.write_all(&spec.channels.to_le_bytes())?;
    writer.write_all(&spec.sample_rate.to_le_bytes())?;
    writer.write_all(&spec.byte_rate().to_le_bytes())?;
    writer.write_all(&spec.block_align().to_le_bytes())?;
    writer.write_all(&spec.bits_per_sample.to_le_bytes())?;

    // data chunk
    writer.write_all(b"data")?;
    writer.write_all(&data_size.to_le_bytes())?;
    writer.write_all(pcm_data)?;

    Ok(())
}

/// Writes a WAV file to a byte vector.
pub fn write_wav_to_vec(spec: &AudioSpec, pcm_data: &[u8]) -> Vec<u8> {
    let mut buffer = Vec::with_capacity(44 + pcm_data.len());
    write_wav(&mut buffer, spec, pcm_data).expect("writing to Vec should not fail");
    buffer
}

/// Converts f32 samples to 16-bit PCM bytes.
///
/// Samples are expected to be in range [-1.0, 1.0]. Values outside this
/// range are clipped before scaling so they cannot wrap around.
pub fn samples_to_pcm16(samples: &[f32]) -> Vec<u8> {
    let mut pcm = Vec::with_capacity(samples.len() * 2);

    for &sample in samples {
        // Clip to [-1, 1]
        let clipped = sample.clamp(-1.0, 1.0);
        // Convert to 16-bit signed integer
        let pcm_value = (clipped * 32767.0).round() as i16;
        pcm.extend_from_slice(&pcm_value.to_le_bytes());
    }

    pcm
}
