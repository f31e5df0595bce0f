//! Writes rendered signatures to disk for manual installation.
//!
//! Files land in a plain directory, loose or bundled in one zip archive;
//! moving them into the mail client's
//! signature folder is left to the user.

use std::{
    fs,
    io::{self, Seek, Write},
    path::{Path, PathBuf},
};

use thiserror::Error;
use tracing::{info, warn};
use zip::{CompressionMethod, ZipWriter, result::ZipError, write::SimpleFileOptions};

use crate::application::render::{RenderedSignature, SignatureFormat};

pub const DEFAULT_BASE_NAME: &str = "AtlasCopco";

/// How exported files are named.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExportNaming {
    /// `AtlasCopco.htm`, `AtlasCopco.rtf`, `AtlasCopco.txt`.
    #[default]
    Fixed,
    /// `AtlasCopco(<email>).htm` and so on, for keeping several signatures side by side.
    PerEmail,
}

impl ExportNaming {
    pub fn as_str(self) -> &'static str {
        match self {
            ExportNaming::Fixed => "fixed",
            ExportNaming::PerEmail => "per_email",
        }
    }

    pub fn base_name(self, email: &str) -> String {
        match self {
            ExportNaming::Fixed => DEFAULT_BASE_NAME.to_string(),
            ExportNaming::PerEmail => {
                format!("{DEFAULT_BASE_NAME}({})", sanitize_file_segment(email.trim()))
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOptions {
    pub directory: PathBuf,
    pub naming: ExportNaming,
    /// Also create the empty `<base>_files/` folder Outlook keeps next to signatures.
    pub files_dir: bool,
    /// Bundle everything into a single `<base>.zip` instead of loose files.
    pub archive: bool,
}

impl ExportOptions {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            naming: ExportNaming::Fixed,
            files_dir: false,
            archive: false,
        }
    }
}

/// One signature document, on disk or inside the archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedFile {
    pub format: SignatureFormat,
    pub path: PathBuf,
    pub bytes: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportReport {
    pub base_name: String,
    /// Documents written. Paths are entry names when `archive` is set.
    pub files: Vec<ExportedFile>,
    pub files_dir: Option<PathBuf>,
    pub archive: Option<PathBuf>,
}

impl ExportReport {
    /// Everything created on disk.
    pub fn paths(&self) -> Box<dyn Iterator<Item = &Path> + '_> {
        match self.archive.as_deref() {
            Some(archive) => Box::new(std::iter::once(archive)),
            None => Box::new(
                self.files
                    .iter()
                    .map(|file| file.path.as_path())
                    .chain(self.files_dir.as_deref()),
            ),
        }
    }
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to create directory `{}`: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write `{}`: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write archive `{}`: {source}", path.display())]
    Archive {
        path: PathBuf,
        #[source]
        source: ZipError,
    },
}

/// Write the three variants named after `base_name` into `options.directory`,
/// either as loose files or bundled in `<base_name>.zip`.
///
/// Existing files with the same names are replaced.
pub fn export_signature(
    rendered: &RenderedSignature,
    base_name: &str,
    options: &ExportOptions,
) -> Result<ExportReport, ExportError> {
    let directory = options.directory.as_path();
    create_dir(directory)?;

    let report = if options.archive {
        write_archive(rendered, base_name, directory)?
    } else {
        write_files(rendered, base_name, directory, options.files_dir)?
    };

    info!(
        target = "acsignature::export",
        directory = %directory.display(),
        base_name,
        files = report.files.len(),
        archive = report.archive.is_some(),
        "Signature exported"
    );

    Ok(report)
}

fn write_files(
    rendered: &RenderedSignature,
    base_name: &str,
    directory: &Path,
    with_files_dir: bool,
) -> Result<ExportReport, ExportError> {
    let mut files = Vec::with_capacity(SignatureFormat::ALL.len());
    for format in SignatureFormat::ALL {
        let path = directory.join(file_name(base_name, format));
        let contents = rendered.get(format);

        warn_if_replacing(&path);
        fs::write(&path, contents).map_err(|source| ExportError::Write {
            path: path.clone(),
            source,
        })?;

        files.push(ExportedFile {
            format,
            path,
            bytes: contents.len(),
        });
    }

    let files_dir = if with_files_dir {
        let path = directory.join(files_dir_name(base_name));
        create_dir(&path)?;
        Some(path)
    } else {
        None
    };

    Ok(ExportReport {
        base_name: base_name.to_string(),
        files,
        files_dir,
        archive: None,
    })
}

/// The archive always carries the `_files/` entry, matching what Outlook
/// keeps in its signature folder.
fn write_archive(
    rendered: &RenderedSignature,
    base_name: &str,
    directory: &Path,
) -> Result<ExportReport, ExportError> {
    let path = directory.join(format!("{base_name}.zip"));
    warn_if_replacing(&path);

    let file = fs::File::create(&path).map_err(|source| ExportError::Write {
        path: path.clone(),
        source,
    })?;

    let files = fill_archive(ZipWriter::new(file), rendered, base_name).map_err(|source| {
        ExportError::Archive {
            path: path.clone(),
            source,
        }
    })?;

    Ok(ExportReport {
        base_name: base_name.to_string(),
        files,
        files_dir: Some(PathBuf::from(files_dir_name(base_name))),
        archive: Some(path),
    })
}

fn fill_archive<W: Write + Seek>(
    mut archive: ZipWriter<W>,
    rendered: &RenderedSignature,
    base_name: &str,
) -> Result<Vec<ExportedFile>, ZipError> {
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    let mut files = Vec::with_capacity(SignatureFormat::ALL.len());
    for format in SignatureFormat::ALL {
        let name = file_name(base_name, format);
        let contents = rendered.get(format);
        archive.start_file(name.as_str(), options)?;
        archive.write_all(contents.as_bytes())?;
        files.push(ExportedFile {
            format,
            path: PathBuf::from(name),
            bytes: contents.len(),
        });
    }
    archive.add_directory(files_dir_name(base_name), options)?;
    archive.finish()?;

    Ok(files)
}

fn file_name(base_name: &str, format: SignatureFormat) -> String {
    format!("{base_name}.{}", format.extension())
}

fn files_dir_name(base_name: &str) -> String {
    format!("{base_name}_files")
}

fn warn_if_replacing(path: &Path) {
    if path.exists() {
        warn!(
            target = "acsignature::export",
            path = %path.display(),
            "Replacing existing signature file"
        );
    }
}

/// Replace every character outside `[A-Za-z0-9@._+-]` with `_`.
pub fn sanitize_file_segment(value: &str) -> String {
    value
        .chars()
        .map(|ch| match ch {
            'a'..='z' | 'A'..='Z' | '0'..='9' | '@' | '.' | '_' | '+' | '-' => ch,
            _ => '_',
        })
        .collect()
}

fn create_dir(path: &Path) -> Result<(), ExportError> {
    fs::create_dir_all(path).map_err(|source| ExportError::CreateDir {
        path: path.to_path_buf(),
        source,
    })
}
