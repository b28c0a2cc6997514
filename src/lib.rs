//! # Task Prompts
//!
//! A static catalog of natural-language task prompts keyed by task type,
//! with random selection of one variant per draw. Built for task-generation
//! pipelines that pair a prompt with other task assets and only need
//! "give me a prompt for this task type" to always succeed.
//!
//! The catalog is compiled into the process image as literal data. Lookups
//! never fail: a task type without its own entry resolves to the
//! [`FALLBACK_TASK_TYPE`] (`"default"`) entry, which the built-in table
//! always provides.
//!
//! ## Core APIs
//!
//! ### Select one prompt
//!
//! ```rust
//! use task_prompts::{list_prompts, select_prompt};
//!
//! let prompt = select_prompt("default", None);
//! assert!(list_prompts("default").iter().any(|v| v == prompt));
//!
//! // Unknown task types fall back instead of failing
//! let prompt = select_prompt("no_such_task", None);
//! assert!(list_prompts("default").iter().any(|v| v == prompt));
//! ```
//!
//! ### List every variant
//!
//! ```rust
//! use task_prompts::list_prompts;
//!
//! let variants = list_prompts("default");
//! assert_eq!(variants.len(), 4);
//! assert_eq!(list_prompts("unknown"), variants);
//! ```
//!
//! ### Custom catalogs
//!
//! Catalogs beyond the built-in table are assembled once and validated at
//! construction: the fallback entry must exist and no variant list may be
//! empty.
//!
//! ```rust
//! use task_prompts::{CatalogError, PromptCatalog};
//!
//! let catalog = PromptCatalog::from_entries([
//!     ("default", vec!["Draw a circle.", "Draw a square."]),
//!     ("gravity", vec!["Drop a ball and show the bounce."]),
//! ]).unwrap();
//!
//! let prompt = catalog.select("gravity", None);
//! assert_eq!(prompt, "Drop a ball and show the bounce.");
//!
//! let err = PromptCatalog::from_entries([("gravity", vec!["..."])]).unwrap_err();
//! assert_eq!(err, CatalogError::MissingFallback);
//! ```
//!
//! ### Deterministic draws
//!
//! The random source is injectable, so tests can seed the draw without
//! touching the catalog:
//!
//! ```rust
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use task_prompts::PromptCatalog;
//!
//! let catalog = PromptCatalog::new();
//! let mut rng = StdRng::seed_from_u64(42);
//! let first = catalog.select_with(&mut rng, "default", None).to_string();
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! assert_eq!(catalog.select_with(&mut rng, "default", None), first);
//! ```
//!
//! ## Task data
//!
//! Both selection accessors take an optional [`TaskData`] payload. It is
//! accepted for forward compatibility with templated prompts and is never
//! read; passing `Some` and `None` draw from the identical candidate set.
//!
//! ## Concurrency
//!
//! The catalog is read-only shared data and both accessors are synchronous
//! constant-time reads; concurrent callers need no coordination. The
//! process-global draw uses a thread-local generator.

pub mod catalog;
pub mod errors;

// Re-exports for convenience
pub use catalog::{PromptCatalog, TaskData, DEFAULT_PROMPTS, FALLBACK_TASK_TYPE};
pub use errors::{CatalogError, CatalogResult};

use std::sync::LazyLock;

/// Shared catalog backing the crate-level accessors
static CATALOG: LazyLock<PromptCatalog> = LazyLock::new(PromptCatalog::new);

/// Select a random prompt for the given task type from the built-in catalog
///
/// Unknown task types draw from the `"default"` entry. The prompt is
/// returned verbatim; `task_data` is accepted and not read.
pub fn select_prompt(task_type: &str, task_data: Option<&TaskData>) -> &'static str {
    CATALOG.select(task_type, task_data)
}

/// All prompt variants for the given task type from the built-in catalog
///
/// Same fallback resolution as [`select_prompt`]. Returns an immutable
/// view in stored order.
pub fn list_prompts(task_type: &str) -> &'static [String] {
    CATALOG.variants(task_type)
}
