//! Category directory scanning.
//!
//! Stage 1 of the mkdoc pipeline. Lists the entries directly under each
//! category root and turns them into [`Item`]s:
//!
//! ```text
//! project/
//! ├── feature/                     # Category root
//! │   ├── 01_intro/                # Item "intro"
//! │   │   └── feature.yaml
//! │   └── 02_usage/                # Item "usage"
//! │       └── feature.yaml
//! └── flavour/
//!     └── minimal/                 # Item "minimal" (no sort prefix)
//!         └── flavour.yaml
//! ```
//!
//! ## Ordering
//!
//! Entries come back sorted by file name, byte-wise. That is the discovery
//! order the document model preserves, and it is what makes sort prefixes
//! like `01_` meaningful.
//!
//! ## No Type Filtering
//!
//! Every entry is an item, files included. A stray `feature/notes.txt` becomes
//! an item whose descriptor lookup (`feature/notes.txt/feature.yaml`) fails in
//! the load stage, so the mistake is reported rather than silently ignored.

use crate::naming;
use crate::types::Item;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Category '{category}' not found: {path}")]
    CategoryNotFound { category: String, path: PathBuf },
    #[error("Category '{category}' is not a directory: {path}")]
    NotADirectory { category: String, path: PathBuf },
    #[error("IO error listing {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Error walking {path}: {source}")]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },
}

/// List the raw names of all entries directly under `<root>/<category>`.
pub fn list_item_names(root: &Path, category: &str) -> Result<Vec<String>, ScanError> {
    let category_root = root.join(category);
    match fs::metadata(&category_root) {
        Ok(meta) if meta.is_dir() => {}
        Ok(_) => {
            return Err(ScanError::NotADirectory {
                category: category.to_string(),
                path: category_root,
            });
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(ScanError::CategoryNotFound {
                category: category.to_string(),
                path: category_root,
            });
        }
        Err(source) => {
            return Err(ScanError::Io {
                path: category_root,
                source,
            });
        }
    }

    let mut names = Vec::new();
    for entry in WalkDir::new(&category_root)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|source| ScanError::Walk {
            path: category_root.clone(),
            source,
        })?;
        names.push(entry.file_name().to_string_lossy().into_owned());
    }
    Ok(names)
}

/// Scan one category into items, in discovery order.
pub fn scan_category(
    root: &Path,
    category: &str,
    descriptor_extension: &str,
) -> Result<Vec<Item>, ScanError> {
    let items = list_item_names(root, category)?
        .into_iter()
        .map(|raw_name| Item {
            category: category.to_string(),
            canonical_name: naming::canonical_name(&raw_name),
            descriptor_path: descriptor_path(category, &raw_name, descriptor_extension),
            raw_name,
        })
        .collect();
    Ok(items)
}

/// `<category>/<raw_name>/<category>.<ext>`, relative to the project root.
pub fn descriptor_path(category: &str, raw_name: &str, extension: &str) -> PathBuf {
    Path::new(category)
        .join(raw_name)
        .join(format!("{category}.{extension}"))
}
