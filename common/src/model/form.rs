//! Form state for the promotion editor.
//!
//! `FormState` is the single source of truth for what the edit form shows.
//! The UI writes keystrokes into it through [`FormState::set`] and renders from
//! it; the dispatcher encodes request bodies from it and decodes server records
//! back into it. All values are kept as the strings the inputs display.

use serde::{Deserialize, Serialize};

use super::promotion::{form_value, Promotion, PromotionPayload};

/// Literal stored in the availability select when the record is available.
pub const AVAILABLE_TRUE: &str = "true";
/// Literal stored in the availability select when the record is not available.
pub const AVAILABLE_FALSE: &str = "false";

/// One input of the promotion form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Id,
    ProductId,
    Category,
    Available,
    Discount,
}

impl Field {
    /// The fields the user edits; the identifier is only filled by the server.
    pub const EDITABLE: [Field; 4] = [
        Field::ProductId,
        Field::Category,
        Field::Available,
        Field::Discount,
    ];

    /// DOM id of the input bound to this field.
    pub fn element_id(self) -> &'static str {
        match self {
            Field::Id => "promotion_id",
            Field::ProductId => "promotion_productid",
            Field::Category => "promotion_category",
            Field::Available => "promotion_available",
            Field::Discount => "promotion_discount",
        }
    }

    /// Human readable label shown next to the input.
    pub fn label(self) -> &'static str {
        match self {
            Field::Id => "ID",
            Field::ProductId => "Product ID",
            Field::Category => "Category",
            Field::Available => "Available",
            Field::Discount => "Discount",
        }
    }
}

/// Snapshot of the promotion form.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct FormState {
    pub id: String,
    pub productid: String,
    pub category: String,
    /// `"true"`, `"false"`, or empty when nothing is selected.
    pub available: String,
    pub discount: String,
}

impl FormState {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Id => &self.id,
            Field::ProductId => &self.productid,
            Field::Category => &self.category,
            Field::Available => &self.available,
            Field::Discount => &self.discount,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Id => self.id = value,
            Field::ProductId => self.productid = value,
            Field::Category => self.category = value,
            Field::Available => self.available = value,
            Field::Discount => self.discount = value,
        }
    }

    /// Availability as the request bodies and filters see it: only the exact
    /// literal `"true"` counts.
    pub fn is_available(&self) -> bool {
        self.available == AVAILABLE_TRUE
    }

    /// Overwrites every field, identifier included, with a server record.
    pub fn decode_into_form(&mut self, record: &Promotion) {
        self.id = record.id.to_string();
        self.productid = record.productid.clone();
        self.category = record.category.clone();
        self.available = if record.is_available() {
            AVAILABLE_TRUE.to_string()
        } else {
            AVAILABLE_FALSE.to_string()
        };
        self.discount = form_value(&record.discount);
    }

    /// Builds the create/update body from the editable fields.
    pub fn encode_from_form(&self) -> PromotionPayload {
        PromotionPayload {
            productid: self.productid.clone(),
            category: self.category.clone(),
            available: self.is_available(),
            discount: self.discount.clone(),
        }
    }

    /// Empties the editable fields. The identifier is left as it is.
    pub fn clear_form(&mut self) {
        for field in Field::EDITABLE {
            self.set(field, String::new());
        }
    }

    /// Empties the whole form, identifier included.
    pub fn clear_all(&mut self) {
        self.id.clear();
        self.clear_form();
    }
}
