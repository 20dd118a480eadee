use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ConsentControlsProps {
    pub has_opted_out: bool,
    /// Emits the next opt-out state, i.e. the inverse of the current one
    pub on_optout: Callback<bool>,
    pub on_purge: Callback<()>,
}

#[function_component(ConsentControls)]
pub fn consent_controls(props: &ConsentControlsProps) -> Html {
    let handle_optout = {
        let on_optout = props.on_optout.clone();
        let has_opted_out = props.has_opted_out;
        Callback::from(move |_| on_optout.emit(!has_opted_out))
    };

    let handle_purge = {
        let on_purge = props.on_purge.clone();
        Callback::from(move |_| on_purge.emit(()))
    };

    html! {
        <div class="consent-controls">
            <h4>{"Manage your data"}</h4>
            <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                <button class="btn u-full-width" data-role="optout" onclick={handle_optout}>
                    { if props.has_opted_out { "Opt in" } else { "Opt out" } }
                </button>
                <button class="btn u-full-width" data-role="purge" onclick={handle_purge}>
                    {"Delete my data"}
                </button>
            </div>
        </div>
    }
}
