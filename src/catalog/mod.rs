//! Context catalog — the fixed taxonomy of judgment-deferral patterns.
//!
//! Records are assembled once, validated, and never mutated. The
//! process-wide instance lives behind [`Catalog::builtin`]; it is safe to
//! read from any number of sessions without locking.
//!
//! Invariants checked at construction:
//! - keys are unique
//! - every entry has at least one example, and `deep_dive == examples[0]`
//! - every entry has exactly five stages, `stage1`..`stage5`, in order

mod data;
pub mod error;

use std::collections::HashSet;
use std::sync::LazyLock;

use serde::Serialize;
use tracing::debug;

pub use error::{CatalogError, CatalogResult};

/// Number of interpretation stages every context type carries.
pub const STAGE_COUNT: usize = 5;

/// One step of the stage-by-stage reading of a deep-dive sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Stage {
    pub label: &'static str,
    pub text: &'static str,
}

/// A single context type record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContextType {
    /// Stable identifier used for selection and lookup.
    pub key: &'static str,
    /// Short name shown in the selector.
    pub label: &'static str,
    pub description: &'static str,
    /// The example singled out for interpretation. Always `examples[0]`.
    pub deep_dive: &'static str,
    pub examples: &'static [&'static str],
    /// Ordered: later stages presuppose earlier ones.
    pub interpretation: &'static [Stage],
    pub note: &'static str,
}

impl ContextType {
    fn validate(&self) -> CatalogResult<()> {
        let first = self
            .examples
            .first()
            .ok_or_else(|| CatalogError::NoExamples(self.key.into()))?;
        if *first != self.deep_dive {
            return Err(CatalogError::DeepDiveMismatch {
                key: self.key.into(),
            });
        }

        if self.interpretation.len() != STAGE_COUNT {
            return Err(CatalogError::StageCount {
                key: self.key.into(),
                found: self.interpretation.len(),
            });
        }
        for (i, stage) in self.interpretation.iter().enumerate() {
            let position = i + 1;
            if stage.label != format!("stage{position}") {
                return Err(CatalogError::StageOrder {
                    key: self.key.into(),
                    position,
                    label: stage.label.into(),
                });
            }
        }
        Ok(())
    }
}

/// Ordered, validated collection of context types.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<ContextType>,
}

static BUILTIN: LazyLock<CatalogResult<Catalog>> = LazyLock::new(|| {
    let catalog = Catalog::new(data::entries());
    if let Ok(c) = &catalog {
        debug!(entries = c.len(), "built-in catalog ready");
    }
    catalog
});

impl Catalog {
    /// Build a catalog, checking every record invariant.
    pub fn new(entries: Vec<ContextType>) -> CatalogResult<Self> {
        if entries.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::new();
        for entry in &entries {
            if !seen.insert(entry.key) {
                return Err(CatalogError::DuplicateKey(entry.key.into()));
            }
            entry.validate()?;
        }

        Ok(Self { entries })
    }

    /// The embedded catalog, built on first access.
    pub fn builtin() -> CatalogResult<&'static Catalog> {
        BUILTIN.as_ref().map_err(Clone::clone)
    }

    /// Keys in definition order.
    pub fn keys(&self) -> Vec<&'static str> {
        self.entries.iter().map(|e| e.key).collect()
    }

    /// Look up a context type by key.
    pub fn get(&self, key: &str) -> CatalogResult<&ContextType> {
        self.entries
            .iter()
            .find(|e| e.key == key)
            .ok_or_else(|| CatalogError::NotFound(key.into()))
    }

    /// Index of `key` in definition order.
    pub fn position(&self, key: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.key == key)
    }

    /// The default selection. Construction guarantees at least one entry.
    pub fn first(&self) -> &ContextType {
        &self.entries[0]
    }

    pub fn entries(&self) -> &[ContextType] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(key: &'static str) -> ContextType {
        ContextType {
            key,
            label: "label",
            description: "description",
            deep_dive: "a",
            examples: &["a", "b"],
            interpretation: &[
                Stage { label: "stage1", text: "1" },
                Stage { label: "stage2", text: "2" },
                Stage { label: "stage3", text: "3" },
                Stage { label: "stage4", text: "4" },
                Stage { label: "stage5", text: "5" },
            ],
            note: "note",
        }
    }

    #[test]
    fn builtin_catalog_is_valid() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.len(), 3);
        assert!(!catalog.is_empty());
    }

    #[test]
    fn keys_follow_definition_order() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(
            catalog.keys(),
            vec!["position_dependent", "implicit_rule", "responsibility_shift"]
        );
        assert_eq!(catalog.first().key, "position_dependent");
    }

    #[test]
    fn deep_dive_is_first_example_for_every_key() {
        let catalog = Catalog::builtin().unwrap();
        for key in catalog.keys() {
            let ctx = catalog.get(key).unwrap();
            assert_eq!(ctx.examples.first(), Some(&ctx.deep_dive), "{key}");
            assert_eq!(ctx.examples.len(), 5, "{key}");
        }
    }

    #[test]
    fn five_stages_in_stable_order() {
        let catalog = Catalog::builtin().unwrap();
        for key in catalog.keys() {
            let first: Vec<_> = catalog.get(key).unwrap().interpretation.to_vec();
            let again: Vec<_> = catalog.get(key).unwrap().interpretation.to_vec();
            assert_eq!(first.len(), STAGE_COUNT);
            assert_eq!(first, again);
            let labels: Vec<_> = first.iter().map(|s| s.label).collect();
            assert_eq!(labels, ["stage1", "stage2", "stage3", "stage4", "stage5"]);
        }
    }

    #[test]
    fn get_unknown_key_is_not_found() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(
            catalog.get("nope").unwrap_err(),
            CatalogError::NotFound("nope".into())
        );
        assert_eq!(catalog.position("nope"), None);
        assert_eq!(catalog.position("implicit_rule"), Some(1));
    }

    #[test]
    fn empty_catalog_rejected() {
        assert_eq!(Catalog::new(vec![]).unwrap_err(), CatalogError::Empty);
    }

    #[test]
    fn duplicate_key_rejected() {
        let err = Catalog::new(vec![sample("x"), sample("y"), sample("x")]).unwrap_err();
        assert_eq!(err, CatalogError::DuplicateKey("x".into()));
    }

    #[test]
    fn empty_examples_rejected() {
        let mut ctx = sample("x");
        ctx.examples = &[];
        let err = Catalog::new(vec![ctx]).unwrap_err();
        assert_eq!(err, CatalogError::NoExamples("x".into()));
    }

    #[test]
    fn deep_dive_mismatch_rejected() {
        let mut ctx = sample("x");
        ctx.deep_dive = "b";
        let err = Catalog::new(vec![ctx]).unwrap_err();
        assert!(matches!(err, CatalogError::DeepDiveMismatch { .. }));
    }

    #[test]
    fn wrong_stage_count_rejected() {
        let mut ctx = sample("x");
        ctx.interpretation = &[Stage { label: "stage1", text: "1" }];
        let err = Catalog::new(vec![ctx]).unwrap_err();
        assert_eq!(
            err,
            CatalogError::StageCount {
                key: "x".into(),
                found: 1
            }
        );
    }

    #[test]
    fn shuffled_stages_rejected() {
        let mut ctx = sample("x");
        ctx.interpretation = &[
            Stage { label: "stage2", text: "2" },
            Stage { label: "stage1", text: "1" },
            Stage { label: "stage3", text: "3" },
            Stage { label: "stage4", text: "4" },
            Stage { label: "stage5", text: "5" },
        ];
        let err = Catalog::new(vec![ctx]).unwrap_err();
        assert!(matches!(err, CatalogError::StageOrder { position: 1, .. }));
    }

    #[test]
    fn serializes_to_json() {
        let catalog = Catalog::builtin().unwrap();
        let json = serde_json::to_value(catalog.entries()).unwrap();
        assert_eq!(json[2]["key"], "responsibility_shift");
        assert_eq!(json[1]["interpretation"][2]["label"], "stage3");
    }
}
