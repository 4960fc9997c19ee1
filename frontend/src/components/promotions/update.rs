//! Update function for the promotions console.
//!
//! Elm-style: receives the component state, the `Context` and a `Msg`, mutates
//! the state and returns whether the view should re-render.
//!
//! A triggered action is turned into a request by `PromotionPage::begin` and
//! sent from a spawned task; its completion comes back as `Msg::Completed`.
//! Requests are not serialized against each other, so when two overlap the
//! one that completes last decides what the form shows.

use common::dispatch::perform;
use log::info;
use yew::platform::spawn_local;
use yew::prelude::*;

use super::messages::Msg;
use super::state::PromotionsComponent;

pub fn update(
    component: &mut PromotionsComponent,
    ctx: &Context<PromotionsComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::EditField(field, value) => {
            component.page.form.set(field, value);
            true
        }
        Msg::Trigger(action) => match component.page.begin(action) {
            Some(pending) => {
                let transport = component.transport.clone();
                let link = ctx.link().clone();
                spawn_local(async move {
                    let completion = perform(&transport, pending).await;
                    link.send_message(Msg::Completed(completion));
                });
                false
            }
            None => {
                info!("{} applied locally", action);
                true
            }
        },
        Msg::Completed(completion) => {
            component.page.complete(completion);
            true
        }
    }
}
