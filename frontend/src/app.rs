use crate::components::promotions::PromotionsComponent;
use crate::config::API_BASE;
use yew::{html, Component, Context, Html};

pub struct App;

impl Component for App {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div class="container">
                <h1>{"Promotions"}</h1>
                <PromotionsComponent api_base={API_BASE} />
            </div>
        }
    }
}
