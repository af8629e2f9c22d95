use yew::prelude::*;

use crate::services::ApiClient;

/// Raw Markdown of the instructions document; `None` until the fetch lands.
/// Fetched once per mount.
#[hook]
pub fn use_instructions() -> UseStateHandle<Option<String>> {
    let document = use_state(|| None::<String>);

    {
        let document = document.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match ApiClient::new().fetch_instructions().await {
                    Ok(text) => {
                        log::info!("📖 Instructions loaded ({} bytes)", text.len());
                        document.set(Some(text));
                    }
                    Err(e) => log::error!("❌ Error loading instructions: {}", e),
                }
            });
            || ()
        });
    }

    document
}
