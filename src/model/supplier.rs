use serde::{Deserialize, Serialize};

use crate::framework::{CollectionRecord, RecordId};

/// A parts supplier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Supplier {
    pub id: RecordId,
    #[serde(rename = "razonSocial")]
    pub business_name: String,
    pub ruc: String,
    #[serde(rename = "telefono")]
    pub phone: String,
    /// Soft-delete flag; the backend may omit it for active records.
    #[serde(rename = "activo", default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

/// Payload for registering a new supplier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupplierDraft {
    #[serde(rename = "razonSocial")]
    pub business_name: String,
    pub ruc: String,
    #[serde(rename = "telefono")]
    pub phone: String,
}

/// Field-level update payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SupplierPatch {
    #[serde(rename = "razonSocial", skip_serializing_if = "Option::is_none")]
    pub business_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ruc: Option<String>,
    #[serde(rename = "telefono", skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(rename = "activo", skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

impl CollectionRecord for Supplier {
    type Draft = SupplierDraft;
    type Patch = SupplierPatch;

    fn id(&self) -> RecordId {
        self.id
    }

    fn is_active(&self) -> bool {
        self.active.unwrap_or(true)
    }
}
