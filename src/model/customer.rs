use serde::{Deserialize, Serialize};

use crate::framework::{CollectionRecord, RecordId};

/// A workshop customer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: RecordId,
    #[serde(rename = "nombre")]
    pub name: String,
    pub dni: String,
    #[serde(rename = "telefono")]
    pub phone: String,
    /// Soft-delete flag; the backend may omit it for active records.
    #[serde(rename = "activo", default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

/// Payload for registering a new customer. The backend assigns the id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerDraft {
    #[serde(rename = "nombre")]
    pub name: String,
    pub dni: String,
    #[serde(rename = "telefono")]
    pub phone: String,
}

/// Field-level update payload; absent fields are left untouched by the backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomerPatch {
    #[serde(rename = "nombre", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dni: Option<String>,
    #[serde(rename = "telefono", skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(rename = "activo", skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

impl CollectionRecord for Customer {
    type Draft = CustomerDraft;
    type Patch = CustomerPatch;

    fn id(&self) -> RecordId {
        self.id
    }

    fn is_active(&self) -> bool {
        self.active.unwrap_or(true)
    }
}
