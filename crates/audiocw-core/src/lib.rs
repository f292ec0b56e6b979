//! AudioCW core
//!
//! Converts text into an audible International Morse Code waveform and
//! serializes it as a mono 16-bit PCM WAV file.
//!
//! # Overview
//!
//! The pipeline has three stages, composed in strict order:
//!
//! 1. [`encode()`] maps each word of the input through the Morse code
//!    table, producing dot/dash strings with letter-boundary markers.
//!    Unsupported characters are silently skipped.
//! 2. [`synthesize()`] renders those strings into amplitude samples with
//!    PARIS-standard timing (`dot = 1.2 / wpm` seconds, dash three times
//!    that) at a caller-supplied tone frequency.
//! 3. The [`wav`] module serializes the sample buffer into a WAV byte
//!    stream and commits it to a file sink.
//!
//! # Determinism
//!
//! Encoding and synthesis are pure functions of their inputs, and the WAV
//! writer emits no timestamps or variable metadata, so identical inputs
//! produce byte-identical files. [`WavResult`] carries a BLAKE3 hash of
//! the PCM payload for cheap equality checks.
//!
//! # Example
//!
//! ```no_run
//! use audiocw_core::{encode, synthesize, wav, AudioSpec};
//!
//! # fn main() -> audiocw_core::CwResult<()> {
//! let spec = AudioSpec::pcm8k();
//! let text = encode("CQ CQ DE N0CALL");
//! let samples = synthesize(&text, 10, 750.0, &spec)?;
//! wav::write_file(&samples, &spec, "cq.wav".as_ref())?;
//! # Ok(())
//! # }
//! ```
//!
//! # Crate Structure
//!
//! - [`morse`] - International Morse Code table
//! - [`encoder`] - Text to dot/dash encoding
//! - [`synth`] - Tone and silence synthesis with Morse timing
//! - [`wav`] - Deterministic WAV serialization and sink commit
//! - [`generate()`] - In-memory end-to-end entry point

pub mod encoder;
pub mod error;
pub mod generate;
pub mod morse;
pub mod synth;
pub mod wav;

// Re-export main types at crate root
pub use encoder::{encode, EncodedText, EncodedWord};
pub use error::{CwError, CwResult};
pub use generate::{generate, GenerateResult};
pub use morse::MorseSymbol;
pub use synth::synthesize;
pub use wav::{AudioSpec, WavResult};
