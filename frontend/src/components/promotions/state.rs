//! Component state for the promotions console.

use common::dispatch::PromotionPage;
use common::model::form::Field;
use web_sys::HtmlSelectElement;
use yew::NodeRef;

use crate::api::GlooTransport;

/// State container for the `PromotionsComponent`.
///
/// Fields are `pub` because they are accessed by the `view` and `update` modules.
pub struct PromotionsComponent {
    /// Form values, last search results and the status line.
    pub page: PromotionPage,

    /// Transport every remote action is sent through; cloned into each request task.
    pub transport: GlooTransport,

    /// Availability `<select>`; its value is pushed from form state after each render.
    pub available_ref: NodeRef,
}

impl PromotionsComponent {
    pub fn new(api_base: &str) -> Self {
        Self {
            page: PromotionPage::new(),
            transport: GlooTransport::new(api_base),
            available_ref: NodeRef::default(),
        }
    }

    /// Sets the select's live value from form state. `selected` attributes
    /// stop applying once the user has picked an option.
    pub fn sync_available_select(&self) {
        if let Some(select) = self.available_ref.cast::<HtmlSelectElement>() {
            select.set_value(self.page.form.get(Field::Available));
        }
    }
}
