//! Search filter serialization.
//!
//! Builds the query string for `GET /promotions?...` from the sparse set of
//! filters the form currently holds. Only filters with a value are sent, in
//! the fixed order `productid`, `category`, `available`, `discount`.
//!
//! Two behaviors are intentional and covered by tests:
//! - availability is only sent when it is `true`; an unchecked or `false`
//!   selection never filters the search.
//! - values are written verbatim, without percent-encoding.

use crate::model::form::FormState;

/// Filters a search may carry. Availability is already resolved to a boolean.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchFilters {
    pub productid: String,
    pub category: String,
    pub available: bool,
    pub discount: String,
}

impl SearchFilters {
    pub fn from_form(form: &FormState) -> Self {
        Self {
            productid: form.productid.clone(),
            category: form.category.clone(),
            available: form.is_available(),
            discount: form.discount.clone(),
        }
    }

    /// Serializes the present filters as `key=value` pairs joined by `&`,
    /// without a leading `?`. Returns an empty string when nothing is set.
    pub fn to_query_string(&self) -> String {
        let available = if self.available { "true" } else { "" };
        let terms = [
            ("productid", self.productid.as_str()),
            ("category", self.category.as_str()),
            ("available", available),
            ("discount", self.discount.as_str()),
        ];

        let mut query = String::new();
        for (key, value) in terms {
            if value.is_empty() {
                continue;
            }
            if !query.is_empty() {
                query.push('&');
            }
            query.push_str(key);
            query.push('=');
            query.push_str(value);
        }
        query
    }
}
