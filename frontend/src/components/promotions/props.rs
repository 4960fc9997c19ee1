//! Properties for the `PromotionsComponent`.

use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct PromotionsProps {
    /// Origin prepended to every API path.
    ///
    /// Empty (the default) sends requests to the origin that served the page.
    /// Read once when the component is created.
    #[prop_or_default]
    pub api_base: AttrValue,
}
