//! Default Catalog Seeding
//!
//! Replays the server's defaults catalog as add requests, strictly one
//! after the other so the backend assigns ids in catalog order. The first
//! failed add aborts the run; items acknowledged before it stay added.

use crate::api::{ListApi, NetworkError};
use crate::models::{Draft, Item};

/// Per-draft result of a seeding run.
#[derive(Debug, Clone, PartialEq)]
pub enum SeedOutcome {
    Added(Item),
    Failed { draft: Draft, reason: NetworkError },
}

/// Aggregated outcomes of one seeding run, in submission order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeedReport {
    pub outcomes: Vec<SeedOutcome>,
}

impl SeedReport {
    /// True when every draft of the catalog was acknowledged.
    pub fn fully_seeded(&self) -> bool {
        self.outcomes
            .iter()
            .all(|outcome| matches!(outcome, SeedOutcome::Added(_)))
    }

    /// Number of items the server acknowledged before any abort.
    pub fn added(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|outcome| matches!(outcome, SeedOutcome::Added(_)))
            .count()
    }
}

/// Fetch the defaults catalog and replay it in order.
///
/// `Err` means the catalog itself could not be fetched and nothing was
/// submitted. An `Ok` report may still end in a `Failed` outcome; drafts
/// after it were never sent, and nothing already added is rolled back.
pub async fn seed_defaults<A: ListApi>(api: &A) -> Result<SeedReport, NetworkError> {
    let catalog = api.fetch_defaults().await?;

    let mut report = SeedReport::default();
    for draft in catalog {
        match api.add_item(&draft).await {
            Ok(item) => report.outcomes.push(SeedOutcome::Added(item)),
            Err(reason) => {
                report.outcomes.push(SeedOutcome::Failed { draft, reason });
                break;
            }
        }
    }
    Ok(report)
}
