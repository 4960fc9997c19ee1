//! View rendering for the promotions console.
//!
//! Layout, top to bottom: the status line (`#flash_message`), the edit form,
//! the action buttons and the search results (`#search_results`). Every input
//! is controlled by `PromotionPage::form`, so re-rendering after a completion
//! is enough to reflect decoded or cleared fields.

use common::dispatch::Action;
use common::model::form::{Field, AVAILABLE_FALSE, AVAILABLE_TRUE};
use common::model::results::{SearchResults, RESULT_COLUMNS};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::html::Scope;
use yew::prelude::*;

use super::messages::Msg;
use super::state::PromotionsComponent;

/// Main view function. Renders status line, form, toolbar and results.
pub fn view(component: &PromotionsComponent, ctx: &Context<PromotionsComponent>) -> Html {
    let link = ctx.link();

    html! {
        <div class="promotions-root">
            <div id="flash_message" class="flash-message">
                { component.page.status.clone() }
            </div>
            <form class="promotion-form" onsubmit={Callback::from(|e: SubmitEvent| e.prevent_default())}>
                { text_input(component, link, Field::Id) }
                { text_input(component, link, Field::ProductId) }
                { text_input(component, link, Field::Category) }
                { availability_select(component, link) }
                { text_input(component, link, Field::Discount) }
            </form>
            { build_toolbar(link) }
            <div id="search_results">
                { build_results(component.page.results.as_ref()) }
            </div>
        </div>
    }
}

/// Labelled text input bound to `field`.
fn text_input(
    component: &PromotionsComponent,
    link: &Scope<PromotionsComponent>,
    field: Field,
) -> Html {
    let value = component.page.form.get(field).to_string();
    let oninput = link.callback(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::EditField(field, input.value())
    });

    html! {
        <div class="form-group">
            <label for={field.element_id()}>{ field.label() }{":"}</label>
            <input type="text" class="form-control" id={field.element_id()} {value} {oninput} />
        </div>
    }
}

/// The availability select. An empty value (after a clear) shows the hidden
/// placeholder option instead of pretending a choice was made. The `selected`
/// attributes only cover the first render; `rendered` keeps the live value in
/// step afterwards.
fn availability_select(component: &PromotionsComponent, link: &Scope<PromotionsComponent>) -> Html {
    let current = component.page.form.get(Field::Available);
    let onchange = link.callback(|e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        Msg::EditField(Field::Available, select.value())
    });

    html! {
        <div class="form-group">
            <label for={Field::Available.element_id()}>{ Field::Available.label() }{":"}</label>
            <select
                class="form-control"
                id={Field::Available.element_id()}
                ref={component.available_ref.clone()}
                {onchange}
            >
                <option value="" disabled={true} hidden={true} selected={current.is_empty()}></option>
                <option value={AVAILABLE_TRUE} selected={current == AVAILABLE_TRUE}>{"True"}</option>
                <option value={AVAILABLE_FALSE} selected={current == AVAILABLE_FALSE}>{"False"}</option>
            </select>
        </div>
    }
}

fn build_toolbar(link: &Scope<PromotionsComponent>) -> Html {
    html! {
        <div class="btn-toolbar">
            {
                for Action::ALL.into_iter().map(|action| html! {
                    <button
                        type="button"
                        class="btn"
                        id={action.button_id()}
                        onclick={link.callback(move |_: MouseEvent| Msg::Trigger(action))}
                    >
                        { action.label() }
                    </button>
                })
            }
        </div>
    }
}

/// Results table: fixed header plus one row per record, in response order.
/// Nothing is rendered before the first successful search.
fn build_results(results: Option<&SearchResults>) -> Html {
    let Some(results) = results else {
        return html! {};
    };

    html! {
        <table class="table-striped">
            <thead>
                <tr>
                    { for RESULT_COLUMNS.iter().map(|title| html! { <th style="width:20%">{ *title }</th> }) }
                </tr>
            </thead>
            <tbody>
                {
                    for results.rows.iter().map(|row| html! {
                        <tr>
                            { for row.iter().map(|cell| html! { <td>{ cell.clone() }</td> }) }
                        </tr>
                    })
                }
            </tbody>
        </table>
    }
}
