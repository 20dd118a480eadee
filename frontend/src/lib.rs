use gloo_storage::{LocalStorage, Storage};
use log::{debug, error, info};
use wasm_bindgen::prelude::*;
use yew::prelude::*;

pub mod bootstrap;
pub mod components;
pub mod config;
pub mod cookies;
pub mod pages {
    pub mod dashboard;
}

use config::Config;
use pages::dashboard::Dashboard;

#[function_component(App)]
fn app() -> Html {
    debug!("App component rendering");
    let model = use_state(bootstrap::initial_model);

    // One-shot after mount: probe cookie support and restore the
    // persisted opt-out preference
    {
        let model = model.clone();
        use_effect_with((), move |_| {
            let allows_cookies = cookies::probe_browser();
            let has_opted_out =
                LocalStorage::get::<bool>(Config::optout_storage_key()).unwrap_or(false);
            info!("Cookie support probe: {}", allows_cookies);

            let mut next = (*model).clone();
            next.allows_cookies = allows_cookies;
            next.has_opted_out = has_opted_out;
            model.set(next);
            || ()
        });
    }

    let on_optout = {
        let model = model.clone();
        Callback::from(move |next_state: bool| {
            if let Err(e) = LocalStorage::set(Config::optout_storage_key(), next_state) {
                error!("Failed to persist opt-out preference: {}", e);
            }
            let mut next = (*model).clone();
            next.has_opted_out = next_state;
            model.set(next);
        })
    };

    let on_purge = {
        let model = model.clone();
        Callback::from(move |_| {
            info!("Deleting local usage data");
            let mut next = (*model).clone();
            next.purge_usage_data();
            model.set(next);
        })
    };

    let (href, query) = bootstrap::current_location();
    let account_id = (*model)
        .account
        .as_ref()
        .map(|account| account.account_id.clone());

    html! {
        <div class="app-container">
            <main class="flex-1">
                <Dashboard
                    model={(*model).clone()}
                    account_id={account_id}
                    href={href}
                    query={query}
                    on_optout={on_optout}
                    on_purge={on_purge}
                />
            </main>
        </div>
    }
}

#[wasm_bindgen]
pub fn run_app() -> Result<(), JsValue> {
    // Initialize logging
    wasm_logger::init(wasm_logger::Config::new(log::Level::Debug));

    // Set up panic hook
    console_error_panic_hook::set_once();

    info!("Mounting statistics dashboard");
    yew::Renderer::<App>::new().render();
    info!("Application mounted");

    Ok(())
}

// Entry point called by the bundler
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    run_app()
}
