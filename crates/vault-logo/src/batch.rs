//! Writes the fixed set of logo files.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{ExtendedColorType, ImageEncoder, RgbaImage};

use crate::logo::compose_logo;

/// One output file: path relative to the project directory, and its pixel size.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct OutputSpec {
    pub path: &'static str,
    pub size: u32,
}

impl OutputSpec {
    pub const fn new(path: &'static str, size: u32) -> Self {
        Self { path, size }
    }
}

/// Every icon the app ships.
pub const OUTPUTS: [OutputSpec; 4] = [
    OutputSpec::new("web/icons/Icon-512.png", 512),
    OutputSpec::new("web/icons/Icon-192.png", 192),
    OutputSpec::new("web/favicon.png", 32),
    OutputSpec::new("assets/icon.png", 512),
];

/// Directory the [`OUTPUTS`] paths are relative to: the workspace root this
/// binary was built from, independent of the working directory it runs in.
pub fn project_root() -> &'static Path {
    let manifest = Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest.ancestors().nth(2).unwrap_or(manifest)
}

/// A file that has been written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedLogo {
    pub spec: OutputSpec,
    pub path: PathBuf,
}

/// Encodes `image` as an RGBA8 PNG at `path`, overwriting any existing file.
///
/// Uses the slowest zlib level with adaptive row filters for the smallest
/// lossless output.
pub fn write_png(path: &Path, image: &RgbaImage) -> anyhow::Result<()> {
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    let mut out = BufWriter::new(file);

    PngEncoder::new_with_quality(&mut out, CompressionType::Best, FilterType::Adaptive)
        .write_image(image.as_raw(), image.width(), image.height(), ExtendedColorType::Rgba8)
        .with_context(|| format!("encoding {}", path.display()))?;

    out.flush().with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

/// Renders and writes every entry of `specs` under `root`, in order.
///
/// Parent directories are created as needed. The first failure stops the
/// batch; files already written are left in place. `on_written` is called
/// after each file lands on disk.
pub fn generate(
    root: &Path,
    specs: &[OutputSpec],
    mut on_written: impl FnMut(&GeneratedLogo),
) -> anyhow::Result<Vec<GeneratedLogo>> {
    let mut written = Vec::with_capacity(specs.len());

    for &spec in specs {
        let path = root.join(spec.path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating directory {}", parent.display()))?;
        }

        let image = compose_logo(spec.size)
            .with_context(|| format!("rendering {}px logo for {}", spec.size, spec.path))?;
        write_png(&path, &image)?;
        log::debug!("wrote {} ({}x{})", path.display(), spec.size, spec.size);

        let logo = GeneratedLogo { spec, path };
        on_written(&logo);
        written.push(logo);
    }

    Ok(written)
}

/// Writes the fixed [`OUTPUTS`] table under `root`.
pub fn generate_all(
    root: &Path,
    on_written: impl FnMut(&GeneratedLogo),
) -> anyhow::Result<Vec<GeneratedLogo>> {
    generate(root, &OUTPUTS, on_written)
}
