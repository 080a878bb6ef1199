//! Durable persistence of the floor plan.
//!
//! The editor only ever calls [`PersistenceGateway::save_plan`] from the
//! explicit Save action; everything else is in-memory. A failed save is
//! recoverable: the in-memory collection is never rolled back.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use tableplan_core::error::PersistenceError;
use tableplan_core::model::Table;

/// The serialized form of a floor plan: what the gateway stores and what the
/// ordering subsystem reads back. Seats are derived and deliberately absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanDocument {
    /// Floor-plan identifier supplied by the host shell.
    pub plan_id: Uuid,
    pub name: String,
    pub saved_at: DateTime<Utc>,
    pub tables: Vec<Table>,
}

/// Durable storage for plan documents.
pub trait PersistenceGateway {
    fn save_plan(
        &self,
        doc: &PlanDocument,
    ) -> impl std::future::Future<Output = Result<(), PersistenceError>> + Send;
}

/// Gateway that writes the plan document as pretty-printed JSON to a single
/// file. Suitable for desktop hosts; server hosts bring their own gateway.
#[derive(Debug, Clone)]
pub struct JsonFileGateway {
    path: std::path::PathBuf,
}

impl JsonFileGateway {
    pub fn new(path: impl Into<std::path::PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    /// Reads a previously saved plan document back.
    pub async fn load_plan(&self) -> Result<PlanDocument, PersistenceError> {
        let bytes = tokio::fs::read(&self.path).await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

impl PersistenceGateway for JsonFileGateway {
    async fn save_plan(&self, doc: &PlanDocument) -> Result<(), PersistenceError> {
        let bytes = serde_json::to_vec_pretty(doc)?;
        tokio::fs::write(&self.path, bytes).await?;
        tracing::info!(path = %self.path.display(), tables = doc.tables.len(), "plan saved");
        Ok(())
    }
}
