//! File handling behind the `ocr-grouping` binary: one JSON file of
//! detections in, one [`ImageAnnotation`] out per file.

use std::{
    collections::HashSet,
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use anyhow::Context;
use tracing::instrument;

use crate::{Detection, ImageAnnotation, LayoutGrouper};

const ANNOTATION_SUFFIX: &str = "annotation.json";

/// `dir/<stem>.annotation.json`. The extra suffix keeps results apart from
/// the `<stem>.json` detection files they were made from.
pub fn output_path(dir: &Path, input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "unknown".to_string());
    dir.join(format!("{stem}.{ANNOTATION_SUFFIX}"))
}

pub fn read_detections(path: &Path) -> anyhow::Result<Vec<Detection>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read detections from {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse detections in {}", path.display()))
}

/// Never fails: read, parse and grouping errors end up in the annotation.
pub fn annotate(grouper: &LayoutGrouper, path: &Path) -> ImageAnnotation {
    let filename = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "unknown".to_string());

    let transcript = read_detections(path)
        .and_then(|detections| grouper.group(detections).map_err(anyhow::Error::from));
    match transcript {
        Ok(transcript) => ImageAnnotation::success(filename, transcript),
        Err(err) => {
            log::warn!("{filename}: {err:#}");
            ImageAnnotation::failure(filename, format!("{err:#}"))
        }
    }
}

/// Annotates every file in order, carrying on past failed files.
///
/// With `output_dir`, each annotation is written to [`output_path`]; an
/// output that would land on one of the inputs is not written and the file
/// is reported as failed instead. Without it, transcripts go to `out`,
/// headed by the filename when there is more than one file.
///
/// Only failures to create or write the output directory are returned as
/// errors.
#[instrument(skip_all, fields(files = files.len()))]
pub fn run(
    grouper: &LayoutGrouper,
    files: &[PathBuf],
    output_dir: Option<&Path>,
    out: &mut impl Write,
) -> anyhow::Result<Vec<ImageAnnotation>> {
    if let Some(dir) = output_dir {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create output directory {}", dir.display()))?;
    }
    let inputs = files
        .iter()
        .filter_map(|path| fs::canonicalize(path).ok())
        .collect::<HashSet<_>>();

    let mut annotations = Vec::with_capacity(files.len());
    let mut printed = 0;
    for path in files {
        let mut annotation = annotate(grouper, path);
        match output_dir {
            Some(dir) => {
                let out_path = output_path(dir, path);
                let clobbers_input = fs::canonicalize(&out_path)
                    .map(|resolved| inputs.contains(&resolved))
                    .unwrap_or(false);
                if clobbers_input {
                    log::warn!("Not overwriting input file {}", out_path.display());
                    annotation = ImageAnnotation::failure(
                        annotation.filename,
                        format!("output {} would overwrite an input file", out_path.display()),
                    );
                } else {
                    let json = serde_json::to_string_pretty(&annotation)?;
                    fs::write(&out_path, json)
                        .with_context(|| format!("Failed to write {}", out_path.display()))?;
                    log::info!("Wrote {}", out_path.display());
                }
            }
            None => {
                if let Some(transcript) = &annotation.simplified_text {
                    if files.len() > 1 {
                        if printed > 0 {
                            writeln!(out)?;
                        }
                        writeln!(out, "==> {} <==", annotation.filename)?;
                    }
                    writeln!(out, "{}", transcript.raw_text)?;
                    printed += 1;
                }
            }
        }
        if let Some(error) = &annotation.error {
            eprintln!("{}: {error}", annotation.filename);
        }
        annotations.push(annotation);
    }

    Ok(annotations)
}
