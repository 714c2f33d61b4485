//! Hover highlighting across coordinated views.
//!
//! At most one region key is highlighted at a time. Entering stores the
//! current stroke of every element that shares the key; leaving restores
//! exactly those stored styles. Nothing is ever read back from rendered
//! output.

use serde::{Deserialize, Serialize};

use crate::record::RegionKey;
use crate::style::StrokeStyle;

/// Which coordinated view an element lives in.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewKind {
    Map,
    Chart,
}

/// One region's representation in one view.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ElementRef {
    pub view: ViewKind,
    pub key: RegionKey,
}

impl ElementRef {
    pub fn new(view: ViewKind, key: impl Into<RegionKey>) -> Self {
        Self {
            view,
            key: key.into(),
        }
    }
}

/// Stroke instruction for the renderer.
///
/// `Emphasize` marks an element selected; the renderer is expected to
/// also raise it above its siblings in draw order. `Restore` puts back a
/// previously stored stroke verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum HighlightOp {
    Emphasize {
        element: ElementRef,
        stroke: StrokeStyle,
    },
    Restore {
        element: ElementRef,
        stroke: StrokeStyle,
    },
}

/// The currently hovered region, if any, with the styles to restore.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HighlightState {
    active: Option<ActiveHighlight>,
}

#[derive(Debug, Clone, PartialEq)]
struct ActiveHighlight {
    key: RegionKey,
    saved: Vec<(ElementRef, StrokeStyle)>,
}

impl HighlightState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_key(&self) -> Option<&RegionKey> {
        self.active.as_ref().map(|a| &a.key)
    }

    /// Begin highlighting `key`.
    ///
    /// `baseline` is the current stroke of every element sharing the key;
    /// it is stored for later restoration. Returns the renderer ops.
    ///
    /// Ordering contract:
    /// - restore ops for a previously active key come first, so the two
    ///   keys are never emphasized at the same time;
    /// - emphasize ops follow in `baseline` order.
    ///
    /// Re-entering the already-active key is a no-op, keeping the stored
    /// pre-highlight styles intact.
    pub fn enter(
        &mut self,
        key: impl Into<RegionKey>,
        baseline: Vec<(ElementRef, StrokeStyle)>,
        emphasis: StrokeStyle,
    ) -> Vec<HighlightOp> {
        let key = key.into();
        if self.active.as_ref().is_some_and(|a| a.key == key) {
            return Vec::new();
        }

        let mut ops = self.restore_ops();
        ops.extend(baseline.iter().map(|(element, _)| HighlightOp::Emphasize {
            element: element.clone(),
            stroke: emphasis,
        }));
        self.active = Some(ActiveHighlight { key, saved: baseline });
        ops
    }

    /// End highlighting `key`.
    ///
    /// Guards against stale leaves: if `key` is not the active highlight
    /// (out-of-order pointer events), nothing changes and no ops are
    /// emitted.
    pub fn leave(&mut self, key: &RegionKey) -> Vec<HighlightOp> {
        if !self.active.as_ref().is_some_and(|a| &a.key == key) {
            return Vec::new();
        }
        self.restore_ops()
    }

    /// Drop any active highlight without emitting ops.
    ///
    /// Used when a full view rebuild re-specifies every style anyway and
    /// the stored baselines no longer apply.
    pub fn reset(&mut self) {
        self.active = None;
    }

    fn restore_ops(&mut self) -> Vec<HighlightOp> {
        let Some(prev) = self.active.take() else {
            return Vec::new();
        };
        prev.saved
            .into_iter()
            .map(|(element, stroke)| HighlightOp::Restore { element, stroke })
            .collect()
    }
}
