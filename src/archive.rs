use crate::context::Context;
use crate::excludes::ExcludeList;
use crate::result::Result;
use crate::utils;
use crate::validate::REQUIRED_DIRS;
use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

/// Fallback output name, used only if the readme stem lacks the `_readme`
/// suffix the validator already checked for.
const DEFAULT_OUTPUT_NAME: &str = "package.zip";

/// Derive the archive name from the readme file name:
/// `Smith_J_m2_readme.txt` becomes `Smith_J_m2.zip`.
pub fn derive_output_name(readme: &Path) -> PathBuf {
    readme
        .file_stem()
        .and_then(|stem| stem.to_str())
        .and_then(|stem| stem.strip_suffix("_readme"))
        .map(|base| PathBuf::from(format!("{base}.zip")))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_NAME))
}

/// Package the validated project into a deflate-compressed zip archive.
///
/// The archive holds the readme plus every regular file under the required
/// directories, minus anything the exclusion list matches (the readme gets
/// no special treatment). Entries are written in sorted relative-path order
/// so the archive content is reproducible. Returns the number of files
/// written.
///
/// On any error the partially written archive is removed before the error
/// propagates, so a failed run never leaves a truncated zip behind.
pub fn package(
    ctx: &Context,
    readme: &Path,
    output: &Path,
    excludes: &ExcludeList,
) -> Result<usize> {
    let result = write_zip(ctx, readme, output, excludes);
    if result.is_err() {
        let _ = fs::remove_file(output);
    }
    result
}

fn write_zip(
    ctx: &Context,
    readme: &Path,
    output: &Path,
    excludes: &ExcludeList,
) -> Result<usize> {
    let files = collect_files(ctx, readme)?;

    let file = File::create(output)?;
    let mut zip = ZipWriter::new(file);
    let options = SimpleFileOptions::default()
        .compression_method(zip::CompressionMethod::Deflated)
        .unix_permissions(0o644);

    let mut count = 0;
    for rel in &files {
        if excludes.is_excluded(rel) {
            if ctx.verbose {
                println!("  [excluded] {}", rel.display());
            }
            continue;
        }

        if ctx.verbose {
            println!("  [included] {}", rel.display());
        }

        zip.start_file(utils::to_posix_string(rel), options)?;
        let mut f = File::open(ctx.project_root.join(rel))?;
        let mut buffer = Vec::new();
        f.read_to_end(&mut buffer)?;
        zip.write_all(&buffer)?;
        count += 1;
    }

    zip.finish()?;
    Ok(count)
}

/// Collect candidate files as paths relative to the project root: the
/// readme, then everything under each required directory. Sorted so entry
/// order does not depend on filesystem traversal order.
fn collect_files(ctx: &Context, readme: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    if let Ok(rel) = readme.strip_prefix(&ctx.project_root) {
        files.push(rel.to_path_buf());
    }

    for dir in REQUIRED_DIRS {
        for entry in WalkDir::new(ctx.project_root.join(dir)) {
            let entry = entry.map_err(std::io::Error::from)?;
            if entry.file_type().is_file() {
                let rel = entry.path().strip_prefix(&ctx.project_root).unwrap();
                files.push(rel.to_path_buf());
            }
        }
    }

    files.sort();
    Ok(files)
}
