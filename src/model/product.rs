use serde::{Deserialize, Serialize};

use crate::framework::{CollectionRecord, RecordId};

/// A product in the workshop inventory.
///
/// Holds a foreign reference to its [`Supplier`](crate::model::Supplier) via
/// `supplier_id`; the backend may additionally embed a denormalized snapshot of
/// that supplier for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: RecordId,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "precio")]
    pub price: f64,
    pub stock: u32,
    #[serde(rename = "proveedorId")]
    pub supplier_id: RecordId,
    /// Soft-delete flag; the backend may omit it for active records.
    #[serde(rename = "activo", default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    /// Denormalized snapshot of the referenced supplier, when embedded.
    #[serde(rename = "proveedor", default, skip_serializing_if = "Option::is_none")]
    pub supplier: Option<SupplierSummary>,
}

/// The supplier snapshot the backend embeds in product responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupplierSummary {
    pub id: RecordId,
    #[serde(rename = "razonSocial")]
    pub business_name: String,
    pub ruc: String,
    #[serde(rename = "telefono")]
    pub phone: String,
    #[serde(rename = "activo")]
    pub active: bool,
}

/// Payload for adding a new product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDraft {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "precio")]
    pub price: f64,
    pub stock: u32,
    #[serde(rename = "proveedorId")]
    pub supplier_id: RecordId,
}

/// Field-level update payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductPatch {
    #[serde(rename = "nombre", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "precio", skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock: Option<u32>,
    #[serde(rename = "proveedorId", skip_serializing_if = "Option::is_none")]
    pub supplier_id: Option<RecordId>,
    #[serde(rename = "activo", skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

impl CollectionRecord for Product {
    type Draft = ProductDraft;
    type Patch = ProductPatch;

    fn id(&self) -> RecordId {
        self.id
    }

    fn is_active(&self) -> bool {
        self.active.unwrap_or(true)
    }
}
