//! Tesseract subprocess adapter. Behind the `tesseract` feature.

use std::path::{Path, PathBuf};
use std::process::Command;

use image::GrayImage;

use crate::error::{Error, Result};
use crate::ocr::{OcrEngine, OcrOptions};

/// Environment variable overriding the tesseract binary location.
const TESSERACT_ENV: &str = "HANTEXT_TESSERACT";

/// Where to find the tesseract binary and its language data.
///
/// Resolution precedence for the binary: the `HANTEXT_TESSERACT` environment
/// variable, then each configured candidate in order, then the platform
/// defaults, then a bare `tesseract` resolved via `PATH`.
#[derive(Debug, Clone)]
pub struct TesseractConfig {
    /// Candidate binary paths checked before the platform defaults.
    pub binary_candidates: Vec<PathBuf>,

    /// Directory containing `*.traineddata` files. Exported as
    /// `TESSDATA_PREFIX` to the child process only, never to this process.
    pub tessdata_dir: Option<PathBuf>,
}

impl TesseractConfig {
    /// Create a config with no extra candidates.
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepend a candidate binary path.
    pub fn with_binary(mut self, path: impl Into<PathBuf>) -> Self {
        self.binary_candidates.insert(0, path.into());
        self
    }

    /// Set the language data directory.
    pub fn with_tessdata_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.tessdata_dir = Some(dir.into());
        self
    }

    fn default_candidates() -> Vec<PathBuf> {
        let mut candidates: Vec<PathBuf> = Vec::new();
        if cfg!(target_os = "windows") {
            candidates.push(PathBuf::from(r"C:\Program Files\Tesseract-OCR\tesseract.exe"));
            candidates.push(PathBuf::from(
                r"C:\Program Files (x86)\Tesseract-OCR\tesseract.exe",
            ));
        } else if cfg!(target_os = "macos") {
            candidates.push(PathBuf::from("/opt/homebrew/bin/tesseract"));
            candidates.push(PathBuf::from("/usr/local/bin/tesseract"));
        }
        candidates.push(PathBuf::from("tesseract"));
        candidates
    }
}

impl Default for TesseractConfig {
    fn default() -> Self {
        Self {
            binary_candidates: Vec::new(),
            tessdata_dir: None,
        }
    }
}

/// An [`OcrEngine`] that shells out to the tesseract binary.
///
/// The page image is handed over as a PNG in a temporary directory and the
/// recognized text read back from stdout.
pub struct TesseractEngine {
    binary: PathBuf,
    tessdata_dir: Option<PathBuf>,
}

impl TesseractEngine {
    /// Locate tesseract with the default configuration.
    pub fn new() -> Result<Self> {
        Self::with_config(TesseractConfig::default())
    }

    /// Locate tesseract per the given configuration.
    ///
    /// The binary is probed with `--version` so a missing installation is a
    /// fatal [`Error::Configuration`] before any page is processed.
    pub fn with_config(config: TesseractConfig) -> Result<Self> {
        let mut candidates: Vec<PathBuf> = Vec::new();
        if let Ok(path) = std::env::var(TESSERACT_ENV) {
            candidates.push(PathBuf::from(path));
        }
        candidates.extend(config.binary_candidates.iter().cloned());
        candidates.extend(TesseractConfig::default_candidates());

        let binary = candidates
            .into_iter()
            .find(|candidate| probe(candidate))
            .ok_or_else(|| {
                Error::Configuration(
                    "tesseract binary not found; install tesseract or set HANTEXT_TESSERACT"
                        .to_string(),
                )
            })?;

        log::info!("using tesseract at {}", binary.display());

        Ok(Self {
            binary,
            tessdata_dir: config.tessdata_dir,
        })
    }

    /// Path of the binary this engine invokes.
    pub fn binary(&self) -> &Path {
        &self.binary
    }
}

impl OcrEngine for TesseractEngine {
    fn recognize(&self, image: &GrayImage, options: &OcrOptions) -> Result<String> {
        let dir = tempfile::tempdir()?;
        let input = dir.path().join("page.png");
        image
            .save(&input)
            .map_err(|e| Error::Image(format!("failed to encode page image: {e}")))?;

        let mut command = Command::new(&self.binary);
        command
            .arg(&input)
            .arg("stdout")
            .arg("-l")
            .arg(&options.language)
            .arg("--psm")
            .arg(options.page_seg_mode.to_string())
            .arg("--oem")
            .arg(options.engine_mode.to_string());
        if options.preserve_spaces {
            command.arg("-c").arg("preserve_interword_spaces=1");
        }
        if let Some(tessdata) = &self.tessdata_dir {
            command.env("TESSDATA_PREFIX", tessdata);
        }

        let output = command
            .output()
            .map_err(|e| Error::Recognition(format!("failed to run tesseract: {e}")))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::Recognition(format!(
                "tesseract exited with {}: {}",
                output.status,
                stderr.trim()
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

fn probe(binary: &Path) -> bool {
    Command::new(binary)
        .arg("--version")
        .output()
        .map(|output| output.status.success())
        .unwrap_or(false)
}
