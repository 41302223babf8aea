use std::time::Duration;

use tracing::trace;

/// Store operations, grouped by how slow the mock backend made them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Read,
    CreateJob,
    Upload,
    Analyze,
    Apply,
    StatusUpdate,
    ProfileUpdate,
}

impl Operation {
    pub fn delay(&self) -> Duration {
        let millis = match self {
            Operation::Read | Operation::CreateJob => 800,
            Operation::Upload => 1500,
            Operation::Analyze | Operation::Apply => 1000,
            Operation::StatusUpdate | Operation::ProfileUpdate => 500,
        };
        Duration::from_millis(millis)
    }
}

/// Sleeps before each store operation when enabled. Never holds a lock.
#[derive(Debug, Clone, Copy)]
pub struct SimulatedLatency {
    enabled: bool,
}

impl SimulatedLatency {
    pub fn new(enabled: bool) -> Self {
        SimulatedLatency { enabled }
    }

    pub fn disabled() -> Self {
        SimulatedLatency { enabled: false }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub async fn wait(&self, op: Operation) {
        if !self.enabled {
            return;
        }
        let delay = op.delay();
        trace!(?op, ?delay, "simulating backend latency");
        tokio::time::sleep(delay).await;
    }
}
