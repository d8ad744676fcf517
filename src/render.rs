//! Handlebars template rendering.
//!
//! The template is read from disk, compiled once, and rendered with a single
//! top-level binding: the whole [`DocumentModel`] under the configured context
//! key. Rendering follows Handlebars defaults: `{{ }}` HTML-escapes, `{{{ }}}`
//! emits raw text, and missing fields render as empty.
//!
//! ```handlebars
//! {{#each docObjects.feature}}
//! ## {{this.title}}
//! {{/each}}
//! ```

use crate::types::DocumentModel;
use handlebars::Handlebars;
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;

const TEMPLATE_NAME: &str = "readme";

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Template not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error reading template {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Template parse error in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: handlebars::TemplateError,
    },
    #[error("Template render error in {path}: {source}")]
    Render {
        path: PathBuf,
        #[source]
        source: handlebars::RenderError,
    },
}

/// A compiled README template.
#[derive(Debug)]
pub struct ReadmeTemplate {
    handlebars: Handlebars<'static>,
    path: PathBuf,
}

impl ReadmeTemplate {
    /// Compile template source. `path` is only used in error messages.
    pub fn compile(source: &str, path: &Path) -> Result<Self, RenderError> {
        let mut handlebars = Handlebars::new();
        handlebars
            .register_template_string(TEMPLATE_NAME, source)
            .map_err(|source| RenderError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(Self {
            handlebars,
            path: path.to_path_buf(),
        })
    }

    /// Read and compile the template at `path`.
    pub fn load(path: &Path) -> Result<Self, RenderError> {
        let source = fs::read_to_string(path).map_err(|source| {
            if source.kind() == ErrorKind::NotFound {
                RenderError::NotFound(path.to_path_buf())
            } else {
                RenderError::Io {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;
        Self::compile(&source, path)
    }

    /// Render with `model` bound to `context_key`.
    pub fn render(&self, context_key: &str, model: &DocumentModel) -> Result<String, RenderError> {
        let context = HashMap::from([(context_key, model)]);
        self.handlebars
            .render(TEMPLATE_NAME, &context)
            .map_err(|source| RenderError::Render {
                path: self.path.clone(),
                source,
            })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
