//! Purchase order headers and their line items, as supplied by the upstream data source.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::common::{deserialize_amount, label_or_not_available, parse_calendar_date, Identifiable};

/// Purchase order header. Read-only for the aggregation engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Purchase {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_date: Option<String>,
    #[serde(
        rename = "buyer_nome",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub buyer_name: Option<String>,
}

impl Purchase {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    pub fn with_created_date(mut self, created_date: impl Into<String>) -> Self {
        self.created_date = Some(created_date.into());
        self
    }

    pub fn with_buyer(mut self, buyer_name: impl Into<String>) -> Self {
        self.buyer_name = Some(buyer_name.into());
        self
    }

    /// Calendar date of the creation timestamp, if present and parseable.
    pub fn created_on(&self) -> Option<NaiveDate> {
        self.created_date.as_deref().and_then(parse_calendar_date)
    }

    /// Buyer bucket label; absent or blank names map to `"N/A"`.
    pub fn buyer_label(&self) -> &str {
        label_or_not_available(self.buyer_name.as_deref())
    }
}

impl Identifiable for Purchase {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Line item belonging to a [`Purchase`] through `purchase_id`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PurchaseItem {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub purchase_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supplier_id: Option<String>,
    #[serde(
        rename = "supplier_nome",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub supplier_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub material_id: Option<String>,
    #[serde(
        rename = "preco_total",
        default,
        deserialize_with = "deserialize_amount",
        skip_serializing_if = "Option::is_none"
    )]
    pub total_price: Option<f64>,
    #[serde(
        rename = "saving_reais",
        default,
        deserialize_with = "deserialize_amount",
        skip_serializing_if = "Option::is_none"
    )]
    pub saving: Option<f64>,
}

impl PurchaseItem {
    pub fn new(id: impl Into<String>, purchase_id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            purchase_id: purchase_id.into(),
            ..Self::default()
        }
    }

    pub fn with_supplier(mut self, supplier_id: impl Into<String>, name: impl Into<String>) -> Self {
        self.supplier_id = Some(supplier_id.into());
        self.supplier_name = Some(name.into());
        self
    }

    pub fn with_material(mut self, material_id: impl Into<String>) -> Self {
        self.material_id = Some(material_id.into());
        self
    }

    pub fn with_amounts(mut self, total_price: f64, saving: f64) -> Self {
        self.total_price = Some(total_price);
        self.saving = Some(saving);
        self
    }

    /// Total price, with absent and non-finite values read as 0.
    pub fn price_or_zero(&self) -> f64 {
        finite_or_zero(self.total_price)
    }

    /// Saving amount, with absent and non-finite values read as 0.
    pub fn saving_or_zero(&self) -> f64 {
        finite_or_zero(self.saving)
    }

    /// Key used for distinct supplier counting.
    ///
    /// The supplier identifier wins; without one, a non-blank supplier name
    /// stands in. Items with neither are an unknown supplier.
    pub fn supplier_key(&self) -> Option<SupplierKey<'_>> {
        if let Some(id) = self.supplier_id.as_deref().filter(|id| !id.is_empty()) {
            return Some(SupplierKey::Id(id));
        }
        self.supplier_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(SupplierKey::Name)
    }

    /// Supplier bucket label; absent or blank names map to `"N/A"`.
    pub fn supplier_label(&self) -> &str {
        label_or_not_available(self.supplier_name.as_deref())
    }
}

/// Distinct-supplier key. Identifiers and names never collide with each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SupplierKey<'a> {
    Id(&'a str),
    Name(&'a str),
}

fn finite_or_zero(amount: Option<f64>) -> f64 {
    amount.filter(|value| value.is_finite()).unwrap_or(0.0)
}

impl Identifiable for PurchaseItem {
    fn id(&self) -> &str {
        &self.id
    }
}
