use shared::{RangeQuery, Resolution};
use std::collections::BTreeMap;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct RangeSelectorProps {
    /// Path the range links navigate to, without a trailing slash
    pub href: String,
    /// Full query string of the current location
    pub query: BTreeMap<String, String>,
}

/// The selectable windows. `None` is the default 7-day window, which
/// carries no query parameters.
fn presets() -> [(&'static str, Option<RangeQuery>); 6] {
    [
        ("last 24 hours", Some(RangeQuery::new("24", Resolution::Hours))),
        ("last 7 days", None),
        ("last 28 days", Some(RangeQuery::new("28", Resolution::Days))),
        ("last 6 weeks", Some(RangeQuery::new("6", Resolution::Weeks))),
        ("last 12 weeks", Some(RangeQuery::new("12", Resolution::Weeks))),
        ("last 6 months", Some(RangeQuery::new("6", Resolution::Months))),
    ]
}

/// Builds the link for one range preset, replacing the range/resolution
/// parameters while keeping every foreign parameter intact.
pub fn range_href(
    href: &str,
    query: &BTreeMap<String, String>,
    preset: Option<&RangeQuery>,
) -> String {
    let mut params: BTreeMap<String, String> = query
        .iter()
        .filter(|(key, _)| key.as_str() != "range" && key.as_str() != "resolution")
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();
    if let Some(preset) = preset {
        if let Some(range) = &preset.range {
            params.insert("range".to_string(), range.clone());
        }
        if let Some(resolution) = &preset.resolution {
            params.insert("resolution".to_string(), resolution.clone());
        }
    }

    let mut url = format!("{}/", href);
    if !params.is_empty() {
        let encoded: Vec<String> = params
            .iter()
            .map(|(key, value)| {
                format!("{}={}", urlencoding::encode(key), urlencoding::encode(value))
            })
            .collect();
        url.push('?');
        url.push_str(&encoded.join("&"));
    }
    url
}

#[function_component(RangeSelector)]
pub fn range_selector(props: &RangeSelectorProps) -> Html {
    let current = RangeQuery::from_query(&props.query);

    html! {
        <div class="range-selector">
            <h4>{"Show data from the:"}</h4>
            <ul>
                {for presets().into_iter().map(|(display, preset)| {
                    let url = range_href(&props.href, &props.query, preset.as_ref());
                    let active = current == preset.unwrap_or_default();
                    let anchor = html! { <a href={url}>{display}</a> };
                    html! {
                        <li>
                            if active {
                                <strong>{anchor}</strong>
                            } else {
                                {anchor}
                            }
                        </li>
                    }
                })}
            </ul>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect()
    }

    #[test]
    fn default_window_drops_range_params() {
        let current = query(&[("range", "24"), ("resolution", "hours")]);
        assert_eq!(range_href("/stats", &current, None), "/stats/");
    }

    #[test]
    fn preset_replaces_current_range() {
        let current = query(&[("range", "24"), ("resolution", "hours")]);
        let preset = RangeQuery::new("6", Resolution::Weeks);
        assert_eq!(
            range_href("/stats", &current, Some(&preset)),
            "/stats/?range=6&resolution=weeks"
        );
    }

    #[test]
    fn foreign_params_survive_the_switch() {
        let current = query(&[("token", "abc 123"), ("range", "24")]);
        let preset = RangeQuery::new("28", Resolution::Days);
        assert_eq!(
            range_href("/stats", &current, Some(&preset)),
            "/stats/?range=28&resolution=days&token=abc%20123"
        );

        // foreign params also keep the default window from being a bare path
        assert_eq!(range_href("/stats", &current, None), "/stats/?token=abc%20123");
    }
}
