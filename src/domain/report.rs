// ============================================================
// Layer 3 — Evaluation Report
// ============================================================
// The outcome of evaluating the model catalogue: one score per
// model family, in catalogue order.
//
// Order matters. Model selection is "highest R² wins,
// first-seen wins on ties", and "first-seen" is defined by
// catalogue declaration order — so the report is a Vec of
// entries, not a map.

use serde::{Deserialize, Serialize};

/// One model family's held-out R² score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelScore {
    /// Catalogue name of the model family
    pub name: String,

    /// Coefficient of determination on the held-out test set.
    /// Range (−∞, 1.0]; 1.0 is a perfect fit.
    pub r2: f64,
}

/// Per-family scores, one entry per catalogue family, in
/// catalogue order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EvaluationReport {
    pub entries: Vec<ModelScore>,
}

impl EvaluationReport {
    pub fn new(entries: Vec<ModelScore>) -> Self {
        Self { entries }
    }

    /// The best-scoring entry. Strict `>` comparison, so the FIRST
    /// maximal entry in catalogue order wins on ties.
    pub fn best(&self) -> Option<&ModelScore> {
        let mut best: Option<&ModelScore> = None;
        for entry in &self.entries {
            match best {
                Some(b) if entry.r2 > b.r2 => best = Some(entry),
                None => best = Some(entry),
                _ => {}
            }
        }
        best
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
