use anyhow::{Context, Result};
use log::error;
use shared::StatsModel;
use std::collections::BTreeMap;

use crate::config::Config;

/// Initial state for the app: the embedded state blob when the page
/// carries one, the empty model otherwise.
pub fn initial_model() -> StatsModel {
    match read_embedded_state() {
        Ok(Some(model)) => model,
        Ok(None) => StatsModel::default(),
        Err(e) => {
            error!("Discarding embedded stats state: {:#}", e);
            StatsModel::default()
        }
    }
}

fn read_embedded_state() -> Result<Option<StatsModel>> {
    let document = match web_sys::window().and_then(|window| window.document()) {
        Some(document) => document,
        None => return Ok(None),
    };
    let element = match document.get_element_by_id(Config::stats_data_id()) {
        Some(element) => element,
        None => return Ok(None),
    };
    let text = element.text_content().unwrap_or_default();
    if text.trim().is_empty() {
        return Ok(None);
    }
    let model = serde_json::from_str(&text).with_context(|| {
        format!(
            "element #{} is not a valid state object",
            Config::stats_data_id()
        )
    })?;
    Ok(Some(model))
}

/// Splits a `location.search` string into a map, percent-decoding keys
/// and values.
pub fn parse_query(search: &str) -> BTreeMap<String, String> {
    search
        .trim_start_matches('?')
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| match pair.split_once('=') {
            Some((key, value)) => (decode(key), decode(value)),
            None => (decode(pair), String::new()),
        })
        .collect()
}

fn decode(raw: &str) -> String {
    urlencoding::decode(raw)
        .map(|decoded| decoded.into_owned())
        .unwrap_or_else(|_| raw.to_string())
}

/// Current path (without trailing slash) and query map from the browser.
pub fn current_location() -> (String, BTreeMap<String, String>) {
    let location = match web_sys::window().map(|window| window.location()) {
        Some(location) => location,
        None => return (String::new(), BTreeMap::new()),
    };
    let href = location
        .pathname()
        .unwrap_or_default()
        .trim_end_matches('/')
        .to_string();
    let query = location
        .search()
        .map(|search| parse_query(&search))
        .unwrap_or_default();
    (href, query)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_and_decodes_pairs() {
        let query = parse_query("?range=24&resolution=hours&token=abc%20123");
        assert_eq!(query.get("range").map(String::as_str), Some("24"));
        assert_eq!(query.get("resolution").map(String::as_str), Some("hours"));
        assert_eq!(query.get("token").map(String::as_str), Some("abc 123"));
    }

    #[test]
    fn tolerates_empty_and_flag_style_params() {
        assert!(parse_query("").is_empty());
        assert!(parse_query("?").is_empty());

        let query = parse_query("?debug&range=24");
        assert_eq!(query.get("debug").map(String::as_str), Some(""));
        assert_eq!(query.get("range").map(String::as_str), Some("24"));
    }
}
