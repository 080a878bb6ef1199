//! The save protocol.
//!
//! `save` is the only suspending action; the editor stays interactive while
//! it waits on the gateway. The `saving` flag prevents overlapping calls: a
//! save requested while one is in flight is deferred and merged into a
//! follow-up save, issued only if the collection actually changed during the
//! flight. A save over a collection unchanged since the last successful save
//! is skipped outright. Failure never rolls back in-memory edits.

use chrono::Utc;

use tableplan_core::error::PersistenceError;

use crate::persistence::{PersistenceGateway, PlanDocument};

use super::EditorState;

impl EditorState {
    /// Whether a save is currently in flight.
    pub fn is_saving(&self) -> bool {
        self.saving
    }

    /// Whether the collection has changed since the last successful save
    /// (always true before the first one).
    pub fn is_modified(&self) -> bool {
        self.last_saved_revision != Some(self.revision)
    }

    /// The current collection as a persistable document.
    pub fn document(&self) -> PlanDocument {
        PlanDocument {
            plan_id: self.plan_id,
            name: self.plan_name.clone(),
            saved_at: Utc::now(),
            tables: self
                .tables
                .draw_order()
                .into_iter()
                .filter_map(|id| self.tables.get(id).cloned())
                .collect(),
        }
    }

    /// Starts a save. Returns the document to hand to the gateway, or `None`
    /// when the request was deferred (one already in flight) or skipped
    /// (nothing changed since the last successful save).
    pub fn begin_save(&mut self) -> Option<PlanDocument> {
        if self.saving {
            self.save_requested = true;
            tracing::debug!("save deferred: one already in flight");
            return None;
        }
        if self.last_saved_revision == Some(self.revision) {
            tracing::debug!("save skipped: plan unchanged");
            return None;
        }
        self.saving = true;
        self.in_flight_revision = self.revision;
        tracing::info!(revision = self.revision, "save started");
        Some(self.document())
    }

    /// Completes an in-flight save with the gateway's result. Returns a
    /// follow-up document when a save was requested mid-flight and the
    /// collection has changed since the in-flight snapshot; the saving flag
    /// stays raised for that follow-up.
    pub fn complete_save(
        &mut self,
        result: &Result<(), PersistenceError>,
    ) -> Option<PlanDocument> {
        match result {
            Ok(()) => {
                self.last_saved_revision = Some(self.in_flight_revision);
                if self.save_requested && self.revision != self.in_flight_revision {
                    self.save_requested = false;
                    self.in_flight_revision = self.revision;
                    tracing::info!(revision = self.revision, "follow-up save started");
                    return Some(self.document());
                }
                self.save_requested = false;
                self.saving = false;
                tracing::info!("save finished");
                None
            }
            Err(err) => {
                // Recoverable: edits stay, the caller reports and retries.
                self.saving = false;
                self.save_requested = false;
                tracing::warn!(error = %err, "save failed; in-memory plan retained");
                None
            }
        }
    }

    /// Saves the plan through the gateway, driving the begin/complete
    /// protocol until no follow-up is pending.
    pub async fn save<G: PersistenceGateway>(
        &mut self,
        gateway: &G,
    ) -> Result<(), PersistenceError> {
        let Some(mut doc) = self.begin_save() else {
            return Ok(());
        };
        loop {
            let result = gateway.save_plan(&doc).await;
            match self.complete_save(&result) {
                Some(next) => doc = next,
                None => return result,
            }
        }
    }
}
