use yew::prelude::*;

use crate::models::{CampaignAction, CampaignState, CampaignStatus};
use crate::services::ApiClient;

pub struct UseCampaignHandle {
    pub state: UseReducerHandle<CampaignState>,
    pub edit: Callback<String>,
    pub submit: Callback<()>,
}

#[hook]
pub fn use_campaign() -> UseCampaignHandle {
    let state = use_reducer(CampaignState::default);
    // Tickets are handed out synchronously so two quick submits never share one.
    let next_ticket = use_mut_ref(|| 0u64);

    let edit = {
        let dispatcher = state.dispatcher();
        Callback::from(move |value: String| dispatcher.dispatch(CampaignAction::Edit(value)))
    };

    let submit = {
        let state = state.clone();
        let next_ticket = next_ticket.clone();
        let client = ApiClient::new();
        Callback::from(move |_| {
            let master_sheet_id = state.master_sheet_id.clone();
            // `required` on the input already blocks this in the browser
            if master_sheet_id.is_empty() {
                return;
            }

            let ticket = {
                let mut counter = next_ticket.borrow_mut();
                *counter += 1;
                *counter
            };
            let dispatcher = state.dispatcher();
            dispatcher.dispatch(CampaignAction::Submitted { ticket });

            let client = client.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let status = CampaignStatus::from_result(client.start_multi_campaign(&master_sheet_id).await);
                dispatcher.dispatch(CampaignAction::Settled { ticket, status });
            });
        })
    };

    UseCampaignHandle { state, edit, submit }
}
