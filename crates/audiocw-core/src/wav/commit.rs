//! Committing a sample buffer to a file sink.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::{CwError, CwResult};

use super::format::AudioSpec;
use super::writer::{samples_to_pcm16, write_wav_to_vec};

/// Serializes `samples` as a WAV file and commits it to `sink`.
///
/// The complete header-plus-payload byte stream is assembled in memory
/// before the sink is opened, so a successful return means the whole file
/// was handed to the OS in one write. An open failure is reported as
/// [`CwError::SinkUnavailable`] with no other side effects; the file
/// handle is dropped on every exit path.
pub fn write_file(samples: &[f32], spec: &AudioSpec, sink: &Path) -> CwResult<()> {
    let wav_data = write_wav_to_vec(spec, &samples_to_pcm16(samples));

    let mut file = File::create(sink).map_err(|source| CwError::SinkUnavailable {
        path: sink.to_path_buf(),
        source,
    })?;
    file.write_all(&wav_data)?;

    Ok(())
}
