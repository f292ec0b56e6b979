//! PCM payload extraction and hashing.
//!
//! The writer always emits a canonical RIFF layout (44-byte header, single
//! `data` chunk), but extraction still walks the chunk list so files with
//! extra chunks from other tools can be compared too.

/// Extracts the PCM payload from a WAV byte stream.
///
/// Returns `None` unless the stream is RIFF/WAVE with a complete `data`
/// chunk.
pub fn extract_pcm_data(wav_data: &[u8]) -> Option<&[u8]> {
    if wav_data.len() < 44 || &wav_data[0..4] != b"RIFF" || &wav_data[8..12] != b"WAVE" {
        return None;
    }

    let mut pos = 12;
    while pos + 8 <= wav_data.len() {
        let id = &wav_data[pos..pos + 4];
        let size = u32::from_le_bytes(wav_data[pos + 4..pos + 8].try_into().ok()?) as usize;
        let body = pos + 8;

        if id == b"data" {
            return wav_data.get(body..body + size);
        }

        // Chunks are padded to even length.
        pos = body + size + (size % 2);
    }

    None
}

/// BLAKE3 hash of a WAV stream's PCM payload, if the stream is well formed.
pub fn compute_pcm_hash(wav_data: &[u8]) -> Option<String> {
    extract_pcm_data(wav_data).map(|pcm| blake3::hash(pcm).to_hex().to_string())
}
