use crate::ast::NodeKind;
use crate::config::trace::TEARDOWN_TARGET;
use crate::stats::NodeStats;
use log::Level;

/// Receives one call per node as a tree is torn down.
pub trait TeardownTrace {
    fn released(&mut self, kind: NodeKind, depth: usize);
}

/// Discards every notification.
pub struct SilentTrace;

impl TeardownTrace for SilentTrace {
    fn released(&mut self, _kind: NodeKind, _depth: usize) {}
}

/// Emits `Deleting <node>` through the `log` facade.
pub struct LogTrace {
    level: Level,
}

impl LogTrace {
    pub fn new(level: Level) -> Self {
        Self { level }
    }
}

impl TeardownTrace for LogTrace {
    fn released(&mut self, kind: NodeKind, depth: usize) {
        log::log!(target: TEARDOWN_TARGET, self.level, "Deleting {} (depth {})", kind, depth);
    }
}

/// Records the released nodes, in order, for later inspection.
#[derive(Debug, Default)]
pub struct TeardownCounter {
    stats: NodeStats,
    order: Vec<NodeKind>,
}

impl TeardownCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stats(&self) -> &NodeStats {
        &self.stats
    }

    pub fn order(&self) -> &[NodeKind] {
        &self.order
    }

    pub fn total(&self) -> usize {
        self.order.len()
    }
}

impl TeardownTrace for TeardownCounter {
    fn released(&mut self, kind: NodeKind, _depth: usize) {
        self.stats.record(kind);
        self.order.push(kind);
    }
}
