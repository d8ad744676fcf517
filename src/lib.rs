//! # mkdoc
//!
//! Builds a project's README from small YAML descriptors kept next to the
//! things they describe. Each category directory holds one subdirectory per
//! item, each item holds one descriptor, and a Handlebars template turns the
//! lot into `README.md`.
//!
//! # Architecture: Linear Pipeline
//!
//! ```text
//! 1. Scan      feature/, flavour/          →  items (discovery order)
//! 2. Load      <cat>/<item>/<cat>.yaml     →  descriptors
//! 3. Generate  items + descriptors         →  document model  →  README.md
//! ```
//!
//! Categories are processed in configured order and items one at a time, so
//! the document model's order is fully determined by the file names on disk.
//! Any failure aborts the run before the output is touched.
//!
//! The document model the template sees is two levels deep, category then
//! canonical item name:
//!
//! ```text
//! docObjects.feature.intro.title   ← feature/01_intro/feature.yaml: title
//! ```
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Stage 1 — lists category roots into items |
//! | [`descriptor`] | Stage 2 — reads and parses YAML descriptors |
//! | [`generate`] | Stage 3 — assembles the model, renders, writes the output |
//! | [`render`] | Handlebars template loading and rendering |
//! | [`naming`] | `<prefix>_<name>` sort-prefix parser |
//! | [`config`] | `mkdoc.toml` loading, merging, and validation |
//! | [`types`] | `Item` and `DocumentModel`, shared between stages |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Runtime Templates
//!
//! The template belongs to the project being documented, not to this tool, so
//! it is loaded and compiled at runtime with Handlebars. Template authors get
//! the standard helpers (`each`, `if`, `unless`, `with`, `lookup`) and
//! `@key`/`@first`/`@last` inside `each`.
//!
//! ## Opaque Descriptors
//!
//! Descriptors are parsed into plain JSON values and passed through untouched.
//! The generator never interprets descriptor fields; what a feature or flavour
//! looks like is a contract between the descriptor authors and the template.
//!
//! ## Sort Prefixes
//!
//! Item directories can be named `01_intro`, `02_usage` to control their order.
//! The prefix up to the first underscore is stripped before the name reaches
//! the template; see [`naming::parse_item_name`].

pub mod config;
pub mod descriptor;
pub mod generate;
pub mod naming;
pub mod output;
pub mod render;
pub mod scan;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
