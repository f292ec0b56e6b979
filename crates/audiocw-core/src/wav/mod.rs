//! Deterministic WAV file writer.
//!
//! Serializes a sample buffer into an uncompressed 16-bit PCM WAV byte
//! stream with no timestamps or variable metadata, so identical samples
//! always produce identical files. The BLAKE3 hash of the PCM payload is
//! exposed for determinism checks.

mod commit;
mod format;
mod pcm;
mod result;
mod writer;


// Re-export public API
pub use commit::write_file;
pub use format::AudioSpec;
pub use pcm::{compute_pcm_hash, extract_pcm_data};
pub use result::WavResult;
pub use writer::{samples_to_pcm16, write_wav, write_wav_to_vec};
