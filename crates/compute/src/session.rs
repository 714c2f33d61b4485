//! The single-writer session behind both views.
//!
//! Every user interaction lands here, runs to completion, and leaves
//! the session in a state the next interaction can build on. View
//! bundles only ever come out of a successful recompute, so the map
//! and the chart cannot drift apart.

use catalog::{AttributeCatalog, AttributeId};
use layers::{HIGHLIGHT_STROKE, InfoLabel, base_stroke};
use runtime::{ChangeQueue, EventLog, SyncPass};
use scene::{
    Dataset, ElementRef, HighlightOp, HighlightState, JoinReport, Record, RegionFeature,
    RegionKey, Role, SelectionState, StrokeStyle, ViewKind,
};
use serde::{Deserialize, Serialize};

use crate::engine::{ViewSyncEngine, ViewUpdate};
use crate::error::ComputeError;

/// What a hover transition asks the UI to do.
///
/// `ops` restore and emphasize strokes in order; `label` is the info
/// label to show (already cleared when `None`). The cursor position is
/// echoed back so the UI can place the label against its own measured
/// width.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoverUpdate {
    pub ops: Vec<HighlightOp>,
    pub label: Option<InfoLabel>,
    pub cursor_px: (f64, f64),
}

/// Owns the dataset, the expressed selection and the highlight, and
/// serializes every transition against them.
///
/// Ordering contract:
/// - transitions run one at a time to completion, single writer;
/// - a successful attribute change or flush performs exactly one
///   recompute and logs exactly one `recompute` event;
/// - a rejected change leaves selection, views and pass untouched;
/// - a recompute failure keeps the selection so the caller can retry,
///   and the previous bundle remains the one on screen.
#[derive(Debug)]
pub struct DashboardSession {
    catalog: AttributeCatalog,
    dataset: Dataset,
    engine: ViewSyncEngine,
    selection: SelectionState,
    highlight: HighlightState,
    queued: ChangeQueue<Role, AttributeId>,
    log: EventLog,
    pass: SyncPass,
}

impl DashboardSession {
    /// Join the two inputs and stand up the session.
    ///
    /// The join itself never fails; its outcome is described by the
    /// returned report. Callers pull the first bundle with
    /// [`DashboardSession::refresh`].
    pub fn load(
        catalog: AttributeCatalog,
        features: Vec<RegionFeature>,
        records: Vec<Record>,
        selection: SelectionState,
        engine: ViewSyncEngine,
    ) -> (Self, JoinReport) {
        let (dataset, report) = Dataset::assemble(features, records, &catalog);
        let mut log = EventLog::new();
        log.emit(
            SyncPass::default(),
            "load",
            format!(
                "{} matched, {} features unmatched, {} records unmatched",
                report.matched_features,
                report.unmatched_features.len(),
                report.unmatched_records.len(),
            ),
        );
        let session = Self {
            catalog,
            dataset,
            engine,
            selection,
            highlight: HighlightState::new(),
            queued: ChangeQueue::new(),
            log,
            pass: SyncPass::default(),
        };
        (session, report)
    }

    pub fn catalog(&self) -> &AttributeCatalog {
        &self.catalog
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn engine(&self) -> &ViewSyncEngine {
        &self.engine
    }

    pub fn pass(&self) -> SyncPass {
        self.pass
    }

    pub fn log(&self) -> &EventLog {
        &self.log
    }

    pub fn active_highlight(&self) -> Option<&RegionKey> {
        self.highlight.active_key()
    }

    /// Recompute the bundle for the current selection without changing
    /// anything else. Used for the first render after load.
    pub fn refresh(&mut self) -> Result<ViewUpdate, ComputeError> {
        self.recompute_views("refresh")
    }

    /// Rebind one role and recompute.
    ///
    /// An attribute outside the catalog is rejected with the selection
    /// untouched and no recompute. A successful rebind recomputes
    /// exactly once.
    pub fn attribute_selected(
        &mut self,
        role: Role,
        id: AttributeId,
    ) -> Result<ViewUpdate, ComputeError> {
        let detail = format!("{role} -> {id}");
        if let Err(err) = self.selection.set_attribute(&self.catalog, role, id) {
            self.log.emit(self.pass, "attribute_rejected", err.to_string());
            return Err(err.into());
        }
        self.log.emit(self.pass, "attribute", detail);
        self.recompute_views("attribute change")
    }

    /// Stage a role change without recomputing. A later change to the
    /// same role supersedes the earlier one; the superseded binding is
    /// returned.
    pub fn queue_attribute(&mut self, role: Role, id: AttributeId) -> Option<AttributeId> {
        self.queued.queue(role, id)
    }

    /// Apply all staged changes and recompute once.
    ///
    /// Changes apply in role order (x, y, color), last staged binding
    /// per role. Rejected bindings are logged and skipped. `Ok(None)`
    /// means nothing was staged or nothing applied; otherwise a single
    /// recompute covers every applied change.
    pub fn flush_changes(&mut self) -> Result<Option<ViewUpdate>, ComputeError> {
        let drained = self.queued.drain();
        if drained.is_empty() {
            return Ok(None);
        }
        let mut applied = 0usize;
        for (role, id) in drained {
            let detail = format!("{role} -> {id}");
            match self.selection.set_attribute(&self.catalog, role, id) {
                Ok(()) => {
                    self.log.emit(self.pass, "attribute", detail);
                    applied += 1;
                }
                Err(err) => {
                    self.log.emit(self.pass, "attribute_rejected", err.to_string());
                }
            }
        }
        if applied == 0 {
            return Ok(None);
        }
        self.recompute_views("flush").map(Some)
    }

    /// Move the highlight to `key` and build its info label.
    ///
    /// Ops restore the previously highlighted elements before
    /// emphasizing the new ones. Re-entering the active key is a no-op.
    /// A key present in neither view returns an empty update and leaves
    /// the active highlight alone.
    pub fn hover_enter(&mut self, key: impl Into<RegionKey>, cursor_px: (f64, f64)) -> HoverUpdate {
        let key = key.into();
        let baseline = self.baseline_for(&key);
        if baseline.is_empty() {
            return HoverUpdate {
                ops: Vec::new(),
                label: None,
                cursor_px,
            };
        }
        let ops = self.highlight.enter(key.clone(), baseline, HIGHLIGHT_STROKE);
        if !ops.is_empty() {
            self.log.emit(self.pass, "hover_enter", key.as_str());
        }
        let label = self.info_label_for(&key);
        HoverUpdate {
            ops,
            label,
            cursor_px,
        }
    }

    /// Drop the highlight if `key` is still the active one. A stale
    /// leave (the highlight already moved on) restores nothing.
    pub fn hover_leave(&mut self, key: &RegionKey) -> Vec<HighlightOp> {
        let ops = self.highlight.leave(key);
        if !ops.is_empty() {
            self.log.emit(self.pass, "hover_leave", key.as_str());
        }
        ops
    }

    /// Base strokes for the elements that actually exist under `key`,
    /// map region first, then chart bubble.
    fn baseline_for(&self, key: &RegionKey) -> Vec<(ElementRef, StrokeStyle)> {
        let mut baseline = Vec::new();
        if self.dataset.features().iter().any(|f| &f.key == key) {
            baseline.push((
                ElementRef::new(ViewKind::Map, key.clone()),
                base_stroke(ViewKind::Map),
            ));
        }
        if self.dataset.records().iter().any(|r| &r.key == key) {
            baseline.push((
                ElementRef::new(ViewKind::Chart, key.clone()),
                base_stroke(ViewKind::Chart),
            ));
        }
        baseline
    }

    fn info_label_for(&self, key: &RegionKey) -> Option<InfoLabel> {
        let def = self.catalog.get(self.selection.color())?;
        let feature = self.dataset.features().iter().find(|f| &f.key == key);
        let record = self.dataset.records().iter().find(|r| &r.key == key);
        let name = feature
            .and_then(|f| f.name.clone())
            .or_else(|| record.and_then(|r| r.name.clone()));
        let value = match (feature, record) {
            (Some(f), _) => f.value(&def.id),
            (None, Some(r)) => r.value(&def.id),
            (None, None) => return None,
        };
        Some(InfoLabel::new(key.clone(), name, def, value))
    }

    /// The one place a new pass begins. Advances the pass counter and
    /// resets the highlight only when the engine succeeds; a failure
    /// leaves the previous bundle current.
    fn recompute_views(&mut self, reason: &'static str) -> Result<ViewUpdate, ComputeError> {
        match self.engine.recompute(&self.dataset, &self.selection) {
            Ok(update) => {
                self.pass = self.pass.next();
                self.highlight.reset();
                self.log.emit(self.pass, "recompute", reason);
                Ok(update)
            }
            Err(err) => {
                self.log.emit(self.pass, "recompute_failed", err.to_string());
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::DashboardSession;
    use crate::engine::ViewSyncEngine;
    use crate::error::ComputeError;
    use catalog::{AttributeId, energy};
    use layers::{BUBBLE_BASE_STROKE, HIGHLIGHT_STROKE, MAP_BASE_STROKE};
    use pretty_assertions::assert_eq;
    use scene::{
        ElementRef, HighlightOp, Record, RegionFeature, RegionKey, Role, SelectionError,
        SelectionState, ViewKind,
    };
    use serde_json::Value;

    fn session() -> DashboardSession {
        let features = vec![
            RegionFeature::new("MI", Some("Michigan".to_string()), Value::Null),
            RegionFeature::new("IL", Some("Illinois".to_string()), Value::Null),
            RegionFeature::new("WI", Some("Wisconsin".to_string()), Value::Null),
        ];
        let records = vec![
            Record::new("MI", Some("Michigan".to_string()))
                .with_value("coal_twh", 45.0)
                .with_value("gas_twh", 30.0)
                .with_value("cents_kwh", 16.1)
                .with_value("tot_twh", 116.0),
            Record::new("IL", Some("Illinois".to_string()))
                .with_value("coal_twh", 18.0)
                .with_value("gas_twh", 10.0)
                .with_value("cents_kwh", 13.1)
                .with_value("tot_twh", 185.0),
            Record::new("WI", Some("Wisconsin".to_string()))
                .with_value("coal_twh", 24.0)
                .with_value("gas_twh", 20.0)
                .with_value("cents_kwh", 14.6)
                .with_value("tot_twh", 62.0),
        ];
        let catalog = energy::catalog();
        let roles = energy::default_roles();
        let selection = SelectionState::new(&catalog, roles.x, roles.y, roles.color).unwrap();
        let (session, report) = DashboardSession::load(
            catalog,
            features,
            records,
            selection,
            ViewSyncEngine::default(),
        );
        assert!(report.is_clean());
        session
    }

    fn recompute_count(session: &DashboardSession) -> usize {
        session.log().of_kind("recompute").count()
    }

    #[test]
    fn refresh_produces_the_first_bundle_and_one_recompute_event() {
        let mut session = session();
        assert_eq!(recompute_count(&session), 0);

        let update = session.refresh().unwrap();
        assert_eq!(update.selection, *session.selection());
        assert_eq!(recompute_count(&session), 1);
        assert_eq!(session.pass().index, 1);
    }

    #[test]
    fn rejected_attribute_leaves_everything_untouched() {
        let mut session = session();
        session.refresh().unwrap();
        let before = session.selection().clone();

        let err = session
            .attribute_selected(Role::Color, AttributeId::new("bogus_attr"))
            .unwrap_err();

        assert_eq!(
            err,
            ComputeError::Selection(SelectionError::UnknownAttribute {
                role: Role::Color,
                id: AttributeId::new("bogus_attr"),
            }),
        );
        assert_eq!(*session.selection(), before);
        assert_eq!(session.selection().color(), &AttributeId::new("gas_twh"));
        assert_eq!(recompute_count(&session), 1);
        assert_eq!(session.log().of_kind("attribute_rejected").count(), 1);
        assert_eq!(session.pass().index, 1);
    }

    #[test]
    fn successful_attribute_change_recomputes_exactly_once() {
        let mut session = session();
        session.refresh().unwrap();

        let update = session
            .attribute_selected(Role::Color, AttributeId::new("cents_kwh"))
            .unwrap();

        assert_eq!(update.selection.color(), &AttributeId::new("cents_kwh"));
        assert_eq!(update.choropleth.attribute, AttributeId::new("cents_kwh"));
        assert_eq!(recompute_count(&session), 2);
        assert_eq!(session.pass().index, 2);
    }

    #[test]
    fn failed_recompute_keeps_the_selection_for_retry() {
        let mut session = session();
        session.refresh().unwrap();

        // wind_twh is in the catalog but carries no values here.
        let err = session
            .attribute_selected(Role::Color, AttributeId::new("wind_twh"))
            .unwrap_err();
        assert!(matches!(err, ComputeError::Scale { .. }));
        assert_eq!(session.selection().color(), &AttributeId::new("wind_twh"));
        assert_eq!(recompute_count(&session), 1);
        assert_eq!(session.log().of_kind("recompute_failed").count(), 1);
        assert_eq!(session.pass().index, 1);

        // Rebinding the role recovers without any manual reset.
        let update = session
            .attribute_selected(Role::Color, AttributeId::new("gas_twh"))
            .unwrap();
        assert_eq!(update.selection.color(), &AttributeId::new("gas_twh"));
        assert_eq!(recompute_count(&session), 2);
    }

    #[test]
    fn queued_changes_coalesce_into_one_recompute() {
        let mut session = session();
        session.refresh().unwrap();

        session.queue_attribute(Role::X, AttributeId::new("tot_twh"));
        let superseded =
            session.queue_attribute(Role::Color, AttributeId::new("cents_kwh"));
        assert_eq!(superseded, None);
        let superseded =
            session.queue_attribute(Role::Color, AttributeId::new("coal_twh"));
        assert_eq!(superseded, Some(AttributeId::new("cents_kwh")));

        let update = session.flush_changes().unwrap().unwrap();

        assert_eq!(update.selection.x(), &AttributeId::new("tot_twh"));
        assert_eq!(update.selection.color(), &AttributeId::new("coal_twh"));
        assert_eq!(recompute_count(&session), 2);
    }

    #[test]
    fn empty_flush_is_a_no_op() {
        let mut session = session();
        session.refresh().unwrap();

        assert_eq!(session.flush_changes().unwrap(), None);
        assert_eq!(recompute_count(&session), 1);
    }

    #[test]
    fn flush_skips_rejected_bindings_and_applies_the_rest() {
        let mut session = session();
        session.refresh().unwrap();

        session.queue_attribute(Role::X, AttributeId::new("bogus_attr"));
        session.queue_attribute(Role::Y, AttributeId::new("tot_twh"));

        let update = session.flush_changes().unwrap().unwrap();

        assert_eq!(update.selection.x(), &AttributeId::new("cents_kwh"));
        assert_eq!(update.selection.y(), &AttributeId::new("tot_twh"));
        assert_eq!(session.log().of_kind("attribute_rejected").count(), 1);
        assert_eq!(recompute_count(&session), 2);
    }

    #[test]
    fn hover_moves_from_mi_to_il_with_restores_first() {
        let mut session = session();
        session.refresh().unwrap();

        let enter = session.hover_enter("MI", (400.0, 300.0));
        assert_eq!(
            enter.ops,
            vec![
                HighlightOp::Emphasize {
                    element: ElementRef::new(ViewKind::Map, "MI"),
                    stroke: HIGHLIGHT_STROKE,
                },
                HighlightOp::Emphasize {
                    element: ElementRef::new(ViewKind::Chart, "MI"),
                    stroke: HIGHLIGHT_STROKE,
                },
            ],
        );

        let moved = session.hover_enter("IL", (410.0, 300.0));
        assert_eq!(
            moved.ops,
            vec![
                HighlightOp::Restore {
                    element: ElementRef::new(ViewKind::Map, "MI"),
                    stroke: MAP_BASE_STROKE,
                },
                HighlightOp::Restore {
                    element: ElementRef::new(ViewKind::Chart, "MI"),
                    stroke: BUBBLE_BASE_STROKE,
                },
                HighlightOp::Emphasize {
                    element: ElementRef::new(ViewKind::Map, "IL"),
                    stroke: HIGHLIGHT_STROKE,
                },
                HighlightOp::Emphasize {
                    element: ElementRef::new(ViewKind::Chart, "IL"),
                    stroke: HIGHLIGHT_STROKE,
                },
            ],
        );
        assert_eq!(session.active_highlight(), Some(&RegionKey::new("IL")));
    }

    #[test]
    fn reentering_the_active_key_is_a_no_op() {
        let mut session = session();
        session.refresh().unwrap();

        session.hover_enter("MI", (400.0, 300.0));
        let again = session.hover_enter("MI", (405.0, 300.0));
        assert_eq!(again.ops, Vec::new());
        assert_eq!(session.log().of_kind("hover_enter").count(), 1);
    }

    #[test]
    fn stale_leave_restores_nothing() {
        let mut session = session();
        session.refresh().unwrap();

        session.hover_enter("MI", (400.0, 300.0));
        session.hover_enter("IL", (410.0, 300.0));

        let ops = session.hover_leave(&RegionKey::new("MI"));
        assert_eq!(ops, Vec::new());
        assert_eq!(session.active_highlight(), Some(&RegionKey::new("IL")));

        let ops = session.hover_leave(&RegionKey::new("IL"));
        assert_eq!(ops.len(), 2);
        assert_eq!(session.active_highlight(), None);
    }

    #[test]
    fn hover_label_reads_the_color_attribute() {
        let mut session = session();
        session.refresh().unwrap();

        let enter = session.hover_enter("MI", (400.0, 300.0));
        let label = enter.label.unwrap();
        assert_eq!(label.key, RegionKey::new("MI"));
        assert_eq!(label.name.as_deref(), Some("Michigan"));
        assert_eq!(label.attribute, AttributeId::new("gas_twh"));
        assert_eq!(label.attribute_label, "Natural gas generation");
        assert_eq!(label.unit, "TWh");
        assert_eq!(label.value, Some(30.0));
        assert_eq!(enter.cursor_px, (400.0, 300.0));
    }

    #[test]
    fn unknown_key_leaves_the_highlight_alone() {
        let mut session = session();
        session.refresh().unwrap();

        session.hover_enter("MI", (400.0, 300.0));
        let unknown = session.hover_enter("ZZ", (500.0, 300.0));
        assert_eq!(unknown.ops, Vec::new());
        assert_eq!(unknown.label, None);
        assert_eq!(session.active_highlight(), Some(&RegionKey::new("MI")));
    }

    #[test]
    fn recompute_clears_the_active_highlight() {
        let mut session = session();
        session.refresh().unwrap();

        session.hover_enter("MI", (400.0, 300.0));
        session
            .attribute_selected(Role::Color, AttributeId::new("cents_kwh"))
            .unwrap();
        assert_eq!(session.active_highlight(), None);
    }
}
