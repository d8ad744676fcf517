//! Document assembly and README generation.
//!
//! Stage 3 of the mkdoc pipeline, and the entry point that drives the other
//! two. For every configured category, in order:
//!
//! ```text
//! scan <category>/  →  load each descriptor  →  normalize name  →  merge
//! ```
//!
//! Once every category is merged, the template is loaded and rendered with the
//! finished [`DocumentModel`], and the result replaces the output file.
//!
//! ## Fail-Fast
//!
//! Items are processed one at a time and the first error aborts the run. The
//! output file is written exactly once, after every descriptor has loaded and
//! the template has rendered, so a failed run leaves any existing README
//! untouched. The write itself goes through a temporary file in the output
//! directory that is renamed into place.
//!
//! ## Duplicate Names
//!
//! Two item directories that normalize to the same name (`01_intro`,
//! `02_intro`) collide. The one discovered later wins; its entry keeps the
//! position of the first, and the report records the replacement.

use crate::config::{ConfigError, GeneratorConfig};
use crate::descriptor::{self, DescriptorError};
use crate::render::{ReadmeTemplate, RenderError};
use crate::scan::{self, ScanError};
use crate::types::DocumentModel;
use std::collections::HashMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
    #[error("Scan error: {0}")]
    Scan(#[from] ScanError),
    #[error("Descriptor error: {0}")]
    Descriptor(#[from] DescriptorError),
    #[error("Template error: {0}")]
    Render(#[from] RenderError),
    #[error("IO error writing {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Coarse classification of a [`GenerateError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A category root, descriptor, or template does not exist.
    NotFound,
    /// A file exists but could not be read, or the output could not be written.
    Io,
    /// A descriptor, template, or config file is malformed, or rendering failed.
    Parse,
    /// Config values are invalid.
    Config,
}

impl GenerateError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            GenerateError::Config(ConfigError::Io { .. }) => ErrorKind::Io,
            GenerateError::Config(ConfigError::Toml(_)) => ErrorKind::Parse,
            GenerateError::Config(ConfigError::Validation(_)) => ErrorKind::Config,
            GenerateError::Scan(ScanError::CategoryNotFound { .. }) => ErrorKind::NotFound,
            GenerateError::Scan(_) => ErrorKind::Io,
            GenerateError::Descriptor(DescriptorError::NotFound { .. }) => ErrorKind::NotFound,
            GenerateError::Descriptor(DescriptorError::Io { .. }) => ErrorKind::Io,
            GenerateError::Descriptor(DescriptorError::Parse { .. }) => ErrorKind::Parse,
            GenerateError::Render(RenderError::NotFound(_)) => ErrorKind::NotFound,
            GenerateError::Render(RenderError::Io { .. }) => ErrorKind::Io,
            GenerateError::Render(RenderError::Parse { .. } | RenderError::Render { .. }) => {
                ErrorKind::Parse
            }
            GenerateError::Write { .. } => ErrorKind::Io,
        }
    }
}

/// One item merged into the document model.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedItem {
    pub raw_name: String,
    pub canonical_name: String,
    /// Relative to the project root.
    pub descriptor_path: PathBuf,
    /// Raw name of an earlier item this one overwrote.
    pub replaces: Option<String>,
}

/// Items merged for one category, in discovery order.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryReport {
    pub category: String,
    pub items: Vec<LoadedItem>,
}

/// The assembled model plus a record of how it was built.
#[derive(Debug)]
pub struct Assembly {
    pub model: DocumentModel,
    pub categories: Vec<CategoryReport>,
}

/// Result of a successful [`generate`] run.
#[derive(Debug)]
pub struct GenerateReport {
    pub categories: Vec<CategoryReport>,
    pub template: PathBuf,
    pub output: PathBuf,
    pub bytes_written: usize,
}

/// Scan, load, and merge every configured category into a document model.
pub fn assemble(root: &Path, config: &GeneratorConfig) -> Result<Assembly, GenerateError> {
    let mut model = DocumentModel::new();
    let mut categories = Vec::with_capacity(config.categories.len());

    for category in &config.categories {
        let items = scan::scan_category(root, category, &config.descriptor_extension)?;
        model.add_category(category);

        let mut loaded = Vec::with_capacity(items.len());
        let mut owners: HashMap<String, String> = HashMap::new();
        for item in items {
            let descriptor = descriptor::load_descriptor(root, &item)?;
            model.insert(category, &item.canonical_name, descriptor);
            let replaces = owners.insert(item.canonical_name.clone(), item.raw_name.clone());
            loaded.push(LoadedItem {
                raw_name: item.raw_name,
                canonical_name: item.canonical_name,
                descriptor_path: item.descriptor_path,
                replaces,
            });
        }

        categories.push(CategoryReport {
            category: category.clone(),
            items: loaded,
        });
    }

    Ok(Assembly { model, categories })
}

/// Assemble the model and compile the template without rendering or writing.
pub fn check(root: &Path, config: &GeneratorConfig) -> Result<Assembly, GenerateError> {
    let assembly = assemble(root, config)?;
    ReadmeTemplate::load(&root.join(&config.template))?;
    Ok(assembly)
}

/// Run the full pipeline and replace the output file with the rendered README.
pub fn generate(root: &Path, config: &GeneratorConfig) -> Result<GenerateReport, GenerateError> {
    config.validate()?;
    let Assembly { model, categories } = assemble(root, config)?;

    let template = ReadmeTemplate::load(&root.join(&config.template))?;
    let readme = template.render(&config.context_key, &model)?;

    let output_path = root.join(&config.output);
    write_output(&output_path, readme.as_bytes())?;

    Ok(GenerateReport {
        categories,
        template: config.template.clone(),
        output: config.output.clone(),
        bytes_written: readme.len(),
    })
}

/// Replace `path` with `contents` via a sibling temporary file.
///
/// An existing file keeps its permissions.
fn write_output(path: &Path, contents: &[u8]) -> Result<(), GenerateError> {
    let write_err = |source: std::io::Error| GenerateError::Write {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir).map_err(write_err)?;
    tmp.write_all(contents).map_err(write_err)?;
    tmp.as_file().sync_all().map_err(write_err)?;

    match fs::metadata(path) {
        Ok(existing) => tmp
            .as_file()
            .set_permissions(existing.permissions())
            .map_err(write_err)?,
        Err(_) => set_default_permissions(tmp.as_file()).map_err(write_err)?,
    }

    tmp.persist(path).map_err(|e| write_err(e.error))?;
    Ok(())
}

#[cfg(unix)]
fn set_default_permissions(file: &fs::File) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    file.set_permissions(fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn set_default_permissions(_file: &fs::File) -> std::io::Result<()> {
    Ok(())
}
