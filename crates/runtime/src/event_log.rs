use crate::pass::SyncPass;

/// One structured entry in the session trace.
///
/// For now this is a kind tag plus structured text; as the surface
/// stabilizes this can become a stable, serializable event enum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncEvent {
    pub pass_index: u64,
    pub kind: &'static str,
    pub detail: String,
}

/// In-memory trace of session activity, in emission order.
#[derive(Debug, Default)]
pub struct EventLog {
    events: Vec<SyncEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn emit(&mut self, pass: SyncPass, kind: &'static str, detail: impl Into<String>) {
        self.events.push(SyncEvent {
            pass_index: pass.index,
            kind,
            detail: detail.into(),
        });
    }

    pub fn events(&self) -> &[SyncEvent] {
        &self.events
    }

    /// Entries of one kind, in emission order.
    pub fn of_kind<'a>(&'a self, kind: &'a str) -> impl Iterator<Item = &'a SyncEvent> {
        self.events.iter().filter(move |e| e.kind == kind)
    }

    pub fn drain(&mut self) -> Vec<SyncEvent> {
        std::mem::take(&mut self.events)
    }
}
