use std::fs;
use std::path::{Path, PathBuf};

use phrase_clip_rs::{write_srt, CaptionRenderer, CaptionWindow, ClipPlan};

/// Files written for one planned clip.
pub struct ClipArtifacts {
    pub srt_path: PathBuf,
    pub caption_path: Option<PathBuf>,
}

/// Write the clip's word-level SRT and, when a renderer is given, its caption script.
///
/// The SRT keeps absolute timeline times; the caption script is relative to the clip start.
pub fn write_clip_artifacts(
    out_dir: &Path,
    stem: &str,
    plan: &ClipPlan,
    windows: &[CaptionWindow],
    renderer: Option<&CaptionRenderer>,
) -> Result<ClipArtifacts, String> {
    fs::create_dir_all(out_dir).map_err(|err| {
        format!(
            "Failed to create clip output directory '{}': {err}",
            out_dir.display()
        )
    })?;

    let srt_path = out_dir.join(format!("{stem}.srt"));
    write_text(&srt_path, &write_srt(&plan.words))?;

    let caption_path = match renderer {
        Some(renderer) => {
            let path = out_dir.join(format!("{stem}.{}", renderer.file_extension()));
            write_text(&path, &renderer.render(windows, plan.duration_ms()))?;
            Some(path)
        }
        None => None,
    };

    Ok(ClipArtifacts {
        srt_path,
        caption_path,
    })
}

fn write_text(path: &Path, contents: &str) -> Result<(), String> {
    fs::write(path, contents)
        .map_err(|err| format!("Failed to write '{}': {err}", path.display()))
}
