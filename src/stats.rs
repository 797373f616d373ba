//! Per-run summary statistics.
//!
//! Collected while a trace is replayed; the CLI can log them or write them
//! out as JSON.

use serde::Serialize;

use crate::flow::FlowRegistry;
use crate::sched::Emission;

/// What one flow received over the run.
#[derive(Debug, Clone, Serialize)]
pub struct FlowStats {
    pub key: String,
    pub priority: usize,
    /// Weight after the last overwrite.
    pub weight: u64,
    /// The flow's virtual time at the end of ingest.
    pub last_finish: f64,
    pub packets: u64,
    pub bytes: u64,
}

/// Whole-run counters.
#[derive(Debug, Clone, Serialize)]
pub struct RunStats {
    pub flows: usize,
    pub accepted_pkts: usize,
    pub skipped_lines: u64,
    pub dispatched_pkts: u64,
    pub total_bytes: u64,
    /// Simulated clock after the last emission.
    pub makespan: u64,
    pub per_flow: Vec<FlowStats>,
}

impl RunStats {
    pub(crate) fn from_ingest(registry: &FlowRegistry, accepted: usize, skipped: u64) -> Self {
        RunStats {
            flows: registry.len(),
            accepted_pkts: accepted,
            skipped_lines: skipped,
            dispatched_pkts: 0,
            total_bytes: 0,
            makespan: 0,
            per_flow: registry
                .iter()
                .map(|f| FlowStats {
                    key: f.key.as_str().to_string(),
                    priority: f.priority,
                    weight: f.weight,
                    last_finish: f.last_finish,
                    packets: 0,
                    bytes: 0,
                })
                .collect(),
        }
    }

    pub(crate) fn record_emission(&mut self, em: &Emission) {
        self.dispatched_pkts += 1;
        self.total_bytes = self.total_bytes.saturating_add(em.length);
        if let Some(fs) = self.per_flow.get_mut(em.priority) {
            fs.packets += 1;
            fs.bytes = fs.bytes.saturating_add(em.length);
        }
    }
}
