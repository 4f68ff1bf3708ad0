use tracing::{debug, info, warn};

use crate::bridges::analyze;
use crate::error::{Error, Result};
use crate::types::Edge;

/// How a bridge reduction ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReductionOutcome {
    /// The component count reached the target.
    Reached,
    /// No bridge was left before the target was reached.
    TargetUnreachable,
}

/// Result of [`reduce_to_target`].
#[derive(Clone, Debug)]
pub struct Reduction {
    /// Graph left after all deletions, in the original edge order.
    pub edges: Vec<Edge>,
    /// Deleted bridges, in deletion order.
    pub deleted: Vec<Edge>,
    /// Component count of `edges`.
    pub bcc_count: usize,
    pub target: usize,
    pub outcome: ReductionOutcome,
}

impl Reduction {
    pub fn reached(&self) -> bool {
        self.outcome == ReductionOutcome::Reached
    }

    /// Turns a [`ReductionOutcome::TargetUnreachable`] outcome into an error.
    pub fn into_result(self) -> Result<Reduction> {
        match self.outcome {
            ReductionOutcome::Reached => Ok(self),
            ReductionOutcome::TargetUnreachable => Err(Error::TargetUnreachable {
                target: self.target,
                reached: self.bcc_count,
            }),
        }
    }
}

/// Deletes bridges until the graph on `1..=n` has at least `target` biconnected
/// components.
///
/// Every round analyzes the current graph and removes the first reported bridge,
/// together with any copy of it in the other orientation. The loop stops as soon
/// as the count reaches `target`, or when no bridge is left; the latter is
/// reported as [`ReductionOutcome::TargetUnreachable`] along with the edges
/// deleted so far. Every round removes an edge, so the loop ends after at most
/// `edges.len()` rounds.
pub fn reduce_to_target(n: usize, edges: &[Edge], target: usize) -> Result<Reduction> {
    let mut current = edges.to_vec();
    let mut deleted = Vec::new();

    loop {
        let analysis = analyze(n, &current)?;
        debug!(
            bridges = analysis.bridges.len(),
            bcc_count = analysis.bcc_count,
            target,
            "reduction round"
        );

        if analysis.bcc_count >= target {
            info!(deleted = deleted.len(), bcc_count = analysis.bcc_count, "target reached");
            return Ok(Reduction {
                edges: current,
                deleted,
                bcc_count: analysis.bcc_count,
                target,
                outcome: ReductionOutcome::Reached,
            });
        }

        let Some(&(u, v)) = analysis.bridges.first() else {
            warn!(
                deleted = deleted.len(),
                bcc_count = analysis.bcc_count,
                target,
                "no bridges left to delete"
            );
            return Ok(Reduction {
                edges: current,
                deleted,
                bcc_count: analysis.bcc_count,
                target,
                outcome: ReductionOutcome::TargetUnreachable,
            });
        };

        current.retain(|&e| e != (u, v) && e != (v, u));
        debug!(u, v, "deleted bridge");
        deleted.push((u, v));
    }
}
