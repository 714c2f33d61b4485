/// Monotonic synchronization pass index.
///
/// One pass is one complete recompute applied to both views. Events are
/// stamped with the pass they belong to, so a trace can be cut into
/// per-pass slices after the fact. It is intentionally small and pure so
/// it can be recorded and replayed.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SyncPass {
    /// 0-based pass index.
    pub index: u64,
}

impl SyncPass {
    pub fn new(index: u64) -> Self {
        Self { index }
    }

    pub fn next(self) -> Self {
        Self::new(self.index + 1)
    }
}
