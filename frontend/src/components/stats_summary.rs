use shared::{format_percentage, StatsModel};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StatsSummaryProps {
    pub model: StatsModel,
    pub is_operator: bool,
}

#[function_component(StatsSummary)]
pub fn stats_summary(props: &StatsSummaryProps) -> Html {
    let model = &props.model;
    let (unique_entities, entity_name) = if props.is_operator {
        (model.unique_users, "unique users")
    } else {
        (model.unique_accounts, "unique accounts")
    };

    html! {
        <div class="stats-summary">
            <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                <div class="stat-card">
                    <h4><strong>{unique_entities}</strong>{" "}{entity_name}</h4>
                </div>
                <div class="stat-card">
                    <h4><strong>{model.unique_sessions}</strong>{" unique sessions"}</h4>
                </div>
            </div>
            <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                <div class="stat-card">
                    <h4><strong>{format_percentage(model.bounce_rate)}{"%"}</strong>{" bounce rate"}</h4>
                </div>
                if props.is_operator {
                    <div class="stat-card">
                        <h4><strong>{format_percentage(model.loss)}{"%"}</strong>{" plus"}</h4>
                    </div>
                }
            </div>
        </div>
    }
}
