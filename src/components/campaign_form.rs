use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::hooks::use_campaign;

#[function_component(CampaignForm)]
pub fn campaign_form() -> Html {
    let campaign = use_campaign();

    let on_input = {
        let edit = campaign.edit.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            edit.emit(input.value());
        })
    };

    let on_submit = {
        let submit = campaign.submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            submit.emit(());
        })
    };

    let state = &campaign.state;

    html! {
        <div class="dashboard">
            <h2>{"Multi-Account Campaign"}</h2>
            <p>{"Enter the Master Google Sheet ID to start the full campaign across all accounts."}</p>
            <form class="campaign-form" onsubmit={on_submit}>
                <input
                    type="text"
                    value={state.master_sheet_id.clone()}
                    oninput={on_input}
                    placeholder="Enter Master Google Sheet ID"
                    required=true
                />
                <button type="submit">{"Start Full Campaign"}</button>
            </form>
            if !state.status.is_empty() {
                <p class={state.status_class()} aria-busy={state.in_flight.to_string()}>
                    {state.status.clone()}
                </p>
            }
        </div>
    }
}
