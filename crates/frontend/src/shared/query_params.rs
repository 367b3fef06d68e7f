//! URL query string state.
//!
//! Several independent writers (filter mode, table query) share the same
//! query string. Each one only touches the keys it owns, so the writers never
//! clobber each other.

use leptos::prelude::*;
use leptos_router::hooks::use_url;
use std::collections::BTreeMap;
use web_sys::window;

pub type QueryParams = BTreeMap<String, String>;

fn decode_component(raw: &str) -> Option<String> {
    urlencoding::decode(&raw.replace('+', " "))
        .ok()
        .map(|v| v.into_owned())
}

/// Parse `?a=1&b=2` (leading `?` optional) pair by pair. Pairs that do not
/// decode are skipped; a repeated key keeps its first value.
pub fn parse_search(search: &str) -> QueryParams {
    let mut params = QueryParams::new();
    for pair in search.trim_start_matches('?').split('&') {
        if pair.is_empty() {
            continue;
        }
        let (raw_key, raw_value) = pair.split_once('=').unwrap_or((pair, ""));
        let (Some(key), Some(value)) = (decode_component(raw_key), decode_component(raw_value))
        else {
            log::debug!("skipping undecodable query pair {}", pair);
            continue;
        };
        if key.is_empty() {
            continue;
        }
        params.entry(key).or_insert(value);
    }
    params
}

/// Build `?a=1&b=2`, or an empty string when there is nothing to write
pub fn build_search(params: &QueryParams) -> String {
    if params.is_empty() {
        return String::new();
    }
    match serde_qs::to_string(params) {
        Ok(qs) => format!("?{}", qs),
        Err(e) => {
            log::error!("Failed to encode query string: {}", e);
            String::new()
        }
    }
}

/// Replace the owned keys of `current` with `values`. Keys outside `owned`
/// are kept as they are; owned keys missing from `values` are removed.
pub fn merge_owned(current: &QueryParams, owned: &[&str], values: &QueryParams) -> QueryParams {
    let mut merged: QueryParams = current
        .iter()
        .filter(|(k, _)| !owned.contains(&k.as_str()))
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect();
    for (k, v) in values {
        if owned.contains(&k.as_str()) {
            merged.insert(k.clone(), v.clone());
        }
    }
    merged
}

fn current_search() -> String {
    window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}

pub fn read_search_params() -> QueryParams {
    parse_search(&current_search())
}

/// Write the owned keys into the URL via `history.replaceState`
pub fn write_owned_params(owned: &[&str], values: &QueryParams) {
    let current = read_search_params();
    let merged = merge_owned(&current, owned, values);
    if merged == current {
        return;
    }

    let Some(w) = window() else {
        return;
    };
    let location = w.location();
    let path = location.pathname().unwrap_or_default();
    let hash = location.hash().unwrap_or_default();
    let new_url = format!("{}{}{}", path, build_search(&merged), hash);

    match w.history() {
        Ok(history) => {
            if let Err(e) =
                history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&new_url))
            {
                log::error!("replaceState failed: {:?}", e);
            }
        }
        Err(e) => log::error!("history unavailable: {:?}", e),
    }
}

/// Run `handler` with the query of every router navigation, link clicks and
/// back/forward alike. Must be called under a `<Router>`; the effect is
/// disposed with the calling owner.
pub fn on_navigation(handler: impl Fn(&QueryParams) + 'static) {
    let url = use_url();
    Effect::new(move |_| {
        let params = url.with(|u| parse_search(u.search()));
        handler(&params);
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> QueryParams {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_parse_search_strips_question_mark() {
        let parsed = parse_search("?tableFilterMode=expert&page=2");
        assert_eq!(parsed, params(&[("tableFilterMode", "expert"), ("page", "2")]));
        assert!(parse_search("").is_empty());
    }

    #[test]
    fn test_bracket_key_does_not_drop_other_fields() {
        let parsed = parse_search("?tableFilterMode=expert&page=2&utm[src]=mail");
        assert_eq!(parsed.get("tableFilterMode").map(String::as_str), Some("expert"));
        assert_eq!(parsed.get("page").map(String::as_str), Some("2"));
        assert_eq!(parsed.get("utm[src]").map(String::as_str), Some("mail"));

        let merged = merge_owned(&parsed, &["page"], &params(&[("page", "1")]));
        assert_eq!(merged.get("utm[src]").map(String::as_str), Some("mail"));
        assert_eq!(merged.get("tableFilterMode").map(String::as_str), Some("expert"));
    }

    #[test]
    fn test_repeated_key_keeps_first_value() {
        let parsed = parse_search("?tableFilterMode=expert&status=todo&status=done");
        assert_eq!(parsed.get("tableFilterMode").map(String::as_str), Some("expert"));
        assert_eq!(parsed.get("status").map(String::as_str), Some("todo"));
    }

    #[test]
    fn test_undecodable_pair_is_skipped() {
        let parsed = parse_search("?bad=%FF%FE&title=a+b&flag");
        assert_eq!(parsed, params(&[("title", "a b"), ("flag", "")]));
    }

    #[test]
    fn test_build_search_round_trips_json_values() {
        let original = params(&[("sort", r#"[{"id":"title","desc":false}]"#), ("title", "a b")]);
        let search = build_search(&original);
        assert!(search.starts_with('?'));
        assert_eq!(parse_search(&search), original);
        assert_eq!(build_search(&QueryParams::new()), "");
    }

    #[test]
    fn test_merge_owned_keeps_foreign_keys() {
        let current = params(&[("tableFilterMode", "command"), ("page", "3"), ("title", "x")]);
        let values = params(&[("page", "1"), ("tableFilterMode", "expert")]);
        let merged = merge_owned(&current, &["page", "title"], &values);
        assert_eq!(merged, params(&[("tableFilterMode", "command"), ("page", "1")]));
    }
}
