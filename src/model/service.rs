use serde::{Deserialize, Serialize};

use crate::framework::{CollectionRecord, RecordId};

/// A service the workshop offers (e.g., oil change).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub id: RecordId,
    #[serde(rename = "descripcion")]
    pub description: String,
    #[serde(rename = "precio")]
    pub price: f64,
    /// Soft-delete flag; the backend may omit it for active records.
    #[serde(rename = "activo", default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

/// Payload for adding a new service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceDraft {
    #[serde(rename = "descripcion")]
    pub description: String,
    #[serde(rename = "precio")]
    pub price: f64,
}

/// Field-level update payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServicePatch {
    #[serde(rename = "descripcion", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "precio", skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(rename = "activo", skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

impl CollectionRecord for Service {
    type Draft = ServiceDraft;
    type Patch = ServicePatch;

    fn id(&self) -> RecordId {
        self.id
    }

    fn is_active(&self) -> bool {
        self.active.unwrap_or(true)
    }
}
