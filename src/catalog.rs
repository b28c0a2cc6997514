//! Task Prompt Catalog
//!
//! Maps task-type identifiers to lists of candidate prompt strings and
//! resolves a task type to prompt text. Resolution never fails: a task
//! type without its own entry falls back to [`FALLBACK_TASK_TYPE`].
//!
//! The built-in table ships the color-mixing animation prompts; custom
//! catalogs are assembled with [`PromptCatalog::from_entries`] and are
//! validated once, at construction.

use std::collections::HashMap;

use rand::seq::IndexedRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::errors::{CatalogError, CatalogResult};

/// Opaque task payload accepted by the selection accessors.
///
/// Reserved for templated prompts; the catalog never reads it. Callers
/// that have no payload pass `None`.
pub type TaskData = serde_json::Value;

/// Task type used when a requested key has no entry of its own
pub const FALLBACK_TASK_TYPE: &str = "default";

/// Built-in prompt table: task type to candidate prompt variants
pub static DEFAULT_PROMPTS: &[(&str, &[&str])] = &[(
    "default",
    &[
        "Two circular balls with different colors are positioned at different locations. \
         Animate the balls moving toward each other at the same speed until they completely \
         merge as one. When the balls overlap, the overlapping region should display the \
         additive color mixture of their original colors. The animation should stop after \
         the two balls completely merge into a single ball at the midpoint between their \
         initial positions.",
        "Two colored circular balls start at different positions. They move toward each \
         other at equal speeds until they fully overlap and merge into one. The overlapping \
         region during movement and the final merged ball should show the additive color \
         mixture of the two original ball colors. Stop the animation when the balls have \
         completely merged at the midpoint.",
        "Animate two circular balls with distinct colors moving toward each other at the \
         same velocity. The balls should continue moving until they completely merge as \
         one ball. During overlap and in the final merged state, use additive color mixing \
         to combine the original colors. The animation stops when both balls have fully \
         merged at the midpoint between their starting positions.",
        "Two balls of different colors are placed at separate locations. Show them moving \
         toward each other at identical speeds. When they overlap, the overlapping area \
         should display the additive mixture of their colors. Continue the animation until \
         the balls completely merge into a single ball at the midpoint, then stop.",
    ],
)];

/// Catalog of prompt variants keyed by task type
///
/// Immutable once built. Both constructors guarantee the invariants that
/// make lookups total: the fallback entry exists and every variant list
/// is non-empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromptCatalog {
    prompts: HashMap<String, Vec<String>>,
}

impl PromptCatalog {
    /// Create a catalog holding the built-in prompt table
    pub fn new() -> Self {
        let prompts = DEFAULT_PROMPTS
            .iter()
            .map(|(task_type, variants)| {
                (
                    (*task_type).to_string(),
                    variants.iter().map(|v| (*v).to_string()).collect(),
                )
            })
            .collect();
        Self { prompts }
    }

    /// Build a catalog from custom `(task type, variants)` entries
    ///
    /// Fails fast on a misconfigured table: the fallback task type must
    /// be present and no variant list may be empty.
    ///
    /// # Examples
    /// ```
    /// use task_prompts::PromptCatalog;
    ///
    /// let catalog = PromptCatalog::from_entries([
    ///     ("default", vec!["Draw a circle.", "Draw a square."]),
    ///     ("physics", vec!["Drop a ball and show the bounce."]),
    /// ]).unwrap();
    /// assert!(catalog.contains("physics"));
    /// ```
    pub fn from_entries<I, K, V>(entries: I) -> CatalogResult<Self>
    where
        I: IntoIterator<Item = (K, Vec<V>)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut prompts: HashMap<String, Vec<String>> = HashMap::new();
        for (task_type, variants) in entries {
            let task_type = task_type.into();
            let variants: Vec<String> = variants.into_iter().map(Into::into).collect();
            if variants.is_empty() {
                return Err(CatalogError::EmptyVariants { task_type });
            }
            prompts.insert(task_type, variants);
        }
        if !prompts.contains_key(FALLBACK_TASK_TYPE) {
            return Err(CatalogError::MissingFallback);
        }
        Ok(Self { prompts })
    }

    /// Select one prompt uniformly at random for the given task type
    ///
    /// Unknown task types draw from the fallback entry, so this always
    /// returns a prompt. The string is returned verbatim; no templating
    /// is applied and `task_data` is not read.
    pub fn select(&self, task_type: &str, task_data: Option<&TaskData>) -> &str {
        self.select_with(&mut rand::rng(), task_type, task_data)
    }

    /// Select one prompt using a caller-supplied random source
    ///
    /// Same resolution and draw as [`select`](Self::select), but against
    /// `rng`, so callers that need reproducibility can pass a seeded
    /// generator.
    ///
    /// # Examples
    /// ```
    /// use rand::rngs::StdRng;
    /// use rand::SeedableRng;
    /// use task_prompts::PromptCatalog;
    ///
    /// let catalog = PromptCatalog::new();
    /// let mut a = StdRng::seed_from_u64(17);
    /// let mut b = StdRng::seed_from_u64(17);
    /// assert_eq!(
    ///     catalog.select_with(&mut a, "default", None),
    ///     catalog.select_with(&mut b, "default", None),
    /// );
    /// ```
    pub fn select_with<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        task_type: &str,
        _task_data: Option<&TaskData>,
    ) -> &str {
        self.variants(task_type)
            .choose(rng)
            .expect("catalog entries hold at least one variant")
    }

    /// All prompt variants for the given task type, in stored order
    ///
    /// Unknown task types resolve to the fallback entry. The returned
    /// slice is a view into the catalog; it cannot be used to mutate it.
    pub fn variants(&self, task_type: &str) -> &[String] {
        match self.prompts.get(task_type) {
            Some(variants) => variants,
            None => &self.prompts[FALLBACK_TASK_TYPE],
        }
    }

    /// Check whether a task type has its own entry (no fallback applied)
    pub fn contains(&self, task_type: &str) -> bool {
        self.prompts.contains_key(task_type)
    }

    /// All task types with an entry in the catalog, sorted
    pub fn task_types(&self) -> Vec<&str> {
        let mut types: Vec<&str> = self.prompts.keys().map(String::as_str).collect();
        types.sort_unstable();
        types
    }

    /// Number of task types in the catalog
    pub fn len(&self) -> usize {
        self.prompts.len()
    }

    /// Whether the catalog has no entries
    pub fn is_empty(&self) -> bool {
        self.prompts.is_empty()
    }
}

impl Default for PromptCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_table_shape() {
        let catalog = PromptCatalog::new();
        assert!(catalog.contains(FALLBACK_TASK_TYPE));
        assert_eq!(catalog.variants(FALLBACK_TASK_TYPE).len(), 4);
        assert!(catalog
            .variants(FALLBACK_TASK_TYPE)
            .iter()
            .all(|v| !v.is_empty()));
    }

    #[test]
    fn test_unknown_task_type_falls_back() {
        let catalog = PromptCatalog::new();
        assert_eq!(
            catalog.variants("nonexistent"),
            catalog.variants(FALLBACK_TASK_TYPE)
        );
    }

    #[test]
    fn test_selection_is_a_member() {
        let catalog = PromptCatalog::new();
        let prompt = catalog.select("default", None);
        assert!(catalog
            .variants("default")
            .iter()
            .any(|v| v == prompt));
    }

    #[test]
    fn test_from_entries_rejects_missing_fallback() {
        let result = PromptCatalog::from_entries([("physics", vec!["Drop a ball."])]);
        assert_eq!(result.unwrap_err(), CatalogError::MissingFallback);
    }

    #[test]
    fn test_from_entries_rejects_empty_variants() {
        let result = PromptCatalog::from_entries([
            ("default", vec!["Draw a circle."]),
            ("physics", Vec::<&str>::new()),
        ]);
        assert_eq!(
            result.unwrap_err(),
            CatalogError::EmptyVariants {
                task_type: "physics".to_string()
            }
        );
    }

    #[test]
    fn test_custom_catalog_resolution() {
        let catalog = PromptCatalog::from_entries([
            ("default", vec!["A", "B"]),
            ("physics", vec!["C"]),
        ])
        .unwrap();
        assert_eq!(catalog.variants("physics"), ["C"]);
        assert_eq!(catalog.variants("unknown"), ["A", "B"]);
        assert_eq!(catalog.task_types(), ["default", "physics"]);
        assert_eq!(catalog.len(), 2);
        assert!(!catalog.is_empty());
    }

    #[test]
    fn test_catalog_serializes() {
        let catalog = PromptCatalog::from_entries([("default", vec!["A"])]).unwrap();
        let json = serde_json::to_string(&catalog).unwrap();
        assert!(json.contains("default"));
        assert!(json.contains("\"A\""));
    }
}
