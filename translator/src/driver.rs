//! The file-level pipeline: read the input, translate it, write the result
//! into the output directory under the input's base name.

use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use crate::error::TranslateError;
use crate::{translate, Direction, OutputFormat};

/// The fixed output directory, created on demand.
pub const BUILD_DIR: &str = "build";

/// Translates `input` into [`BUILD_DIR`] and returns the output path.
pub fn translate_file(
    input: &Path,
    direction: Direction,
    format: OutputFormat,
) -> Result<PathBuf, TranslateError> {
    translate_file_to(input, Path::new(BUILD_DIR), direction, format)
}

/// Like [`translate_file`], but with an explicit output directory.
///
/// The whole input is read before any output is created, so a failed read
/// leaves no partial output file behind.
pub fn translate_file_to(
    input: &Path,
    out_dir: &Path,
    direction: Direction,
    format: OutputFormat,
) -> Result<PathBuf, TranslateError> {
    let mut file = File::open(input).map_err(|source| TranslateError::InputOpen {
        path: input.to_path_buf(),
        source,
    })?;

    let mut source_text = String::new();
    file.read_to_string(&mut source_text)
        .map_err(|source| TranslateError::InputRead {
            path: input.to_path_buf(),
            source,
        })?;

    let output = translate(&source_text, direction, format);

    fs::create_dir_all(out_dir).map_err(|source| TranslateError::OutputOpen {
        path: out_dir.to_path_buf(),
        source,
    })?;

    let name = input.file_name().unwrap_or_else(|| input.as_os_str());
    let out_path = out_dir.join(name);
    let mut out_file = File::create(&out_path).map_err(|source| TranslateError::OutputOpen {
        path: out_path.clone(),
        source,
    })?;
    out_file
        .write_all(output.as_bytes())
        .map_err(|source| TranslateError::OutputWrite {
            path: out_path.clone(),
            source,
        })?;

    Ok(out_path)
}
