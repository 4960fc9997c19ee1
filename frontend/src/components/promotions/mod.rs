//! Promotions console: root module wiring the Yew `Component` implementation
//! with submodules for state, update logic and view rendering.
//!
//! The component owns a `PromotionPage` from `common` and does not keep any
//! state in the DOM: inputs are controlled, buttons dispatch `Msg::Trigger`,
//! and network completions come back as `Msg::Completed`.

use yew::prelude::*;

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::PromotionsProps;
pub use state::PromotionsComponent;

impl Component for PromotionsComponent {
    type Message = Msg;
    type Properties = PromotionsProps;

    fn create(ctx: &Context<Self>) -> Self {
        PromotionsComponent::new(&ctx.props().api_base)
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, _ctx: &Context<Self>, _first_render: bool) {
        self.sync_available_select();
    }
}
