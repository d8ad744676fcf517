//! Descriptor loading.
//!
//! Stage 2 of the mkdoc pipeline. Reads one item's YAML descriptor and parses
//! it into a JSON-compatible [`Descriptor`] value. The content is opaque: no
//! schema is enforced beyond "must parse", and mapping keys keep the order
//! they were written in.

use crate::types::{Descriptor, Item};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DescriptorError {
    #[error("Descriptor for {category} '{item}' not found: {path}")]
    NotFound {
        category: String,
        item: String,
        path: PathBuf,
    },
    #[error("IO error reading descriptor for {category} '{item}' at {path}: {source}")]
    Io {
        category: String,
        item: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("YAML parse error in descriptor for {category} '{item}' at {path}: {source}")]
    Parse {
        category: String,
        item: String,
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Parse descriptor text. Text with no YAML document (empty, or only
/// comments) parses to `null`.
pub fn parse_descriptor(text: &str) -> Result<Descriptor, serde_yaml::Error> {
    if serde_yaml::Deserializer::from_str(text).next().is_none() {
        return Ok(Descriptor::Null);
    }
    serde_yaml::from_str(text)
}

/// Read and parse the descriptor of `item`, resolving its path against `root`.
pub fn load_descriptor(root: &Path, item: &Item) -> Result<Descriptor, DescriptorError> {
    let path = root.join(&item.descriptor_path);
    let text = fs::read_to_string(&path).map_err(|source| {
        if source.kind() == ErrorKind::NotFound {
            DescriptorError::NotFound {
                category: item.category.clone(),
                item: item.raw_name.clone(),
                path: path.clone(),
            }
        } else {
            DescriptorError::Io {
                category: item.category.clone(),
                item: item.raw_name.clone(),
                path: path.clone(),
                source,
            }
        }
    })?;
    parse_descriptor(&text).map_err(|source| DescriptorError::Parse {
        category: item.category.clone(),
        item: item.raw_name.clone(),
        path,
        source,
    })
}
