//! Shared test utilities for the mkdoc test suite.
//!
//! Provides project builders and lookups over assembly reports.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = setup_fixtures();
//! write_descriptor(tmp.path(), "feature", "04_extra", "title: Extra\n");
//!
//! let assembly = assemble(tmp.path(), &GeneratorConfig::default()).unwrap();
//! let extra = find_loaded_item(&assembly.categories, "feature", "04_extra");
//! assert_eq!(extra.canonical_name, "extra");
//! ```

use std::fs;
use std::path::Path;
use tempfile::TempDir;

use crate::generate::{CategoryReport, LoadedItem};

// =========================================================================
// Fixture setup
// =========================================================================

/// Copy `fixtures/project/` to a temp directory and return it.
///
/// Tests get an isolated copy they can mutate without affecting other tests
/// or the source fixtures.
pub fn setup_fixtures() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/project");
    copy_dir_recursive(&fixtures, tmp.path()).unwrap();
    tmp
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<()> {
    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            fs::create_dir_all(&dst_path)?;
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            fs::copy(&src_path, &dst_path)?;
        }
    }
    Ok(())
}

/// Write `<root>/<category>/<raw_name>/<category>.yaml`, creating directories.
pub fn write_descriptor(root: &Path, category: &str, raw_name: &str, content: &str) {
    let dir = root.join(category).join(raw_name);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join(format!("{category}.yaml")), content).unwrap();
}

/// Write the default template file.
pub fn write_template(root: &Path, content: &str) {
    fs::write(root.join("README.md.handlebars"), content).unwrap();
}

/// Read the default output file.
pub fn read_output(root: &Path) -> String {
    fs::read_to_string(root.join("README.md")).unwrap()
}

// =========================================================================
// Report lookups — panics with a clear message on miss
// =========================================================================

fn find_category<'a>(categories: &'a [CategoryReport], category: &str) -> &'a CategoryReport {
    categories
        .iter()
        .find(|c| c.category == category)
        .unwrap_or_else(|| {
            let names = category_names(categories);
            panic!("category '{category}' not found. Available: {names:?}")
        })
}

/// Find a loaded item by raw name. Panics if not found.
pub fn find_loaded_item<'a>(
    categories: &'a [CategoryReport],
    category: &str,
    raw_name: &str,
) -> &'a LoadedItem {
    let report = find_category(categories, category);
    report
        .items
        .iter()
        .find(|i| i.raw_name == raw_name)
        .unwrap_or_else(|| {
            let names: Vec<&str> = report.items.iter().map(|i| i.raw_name.as_str()).collect();
            panic!("item '{raw_name}' not found in '{category}'. Available: {names:?}")
        })
}

// =========================================================================
// Bulk extractors
// =========================================================================

/// All category names in report order.
pub fn category_names(categories: &[CategoryReport]) -> Vec<&str> {
    categories.iter().map(|c| c.category.as_str()).collect()
}

/// Raw item names of one category in discovery order.
pub fn raw_names<'a>(categories: &'a [CategoryReport], category: &str) -> Vec<&'a str> {
    find_category(categories, category)
        .items
        .iter()
        .map(|i| i.raw_name.as_str())
        .collect()
}
