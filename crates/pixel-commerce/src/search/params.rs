//! URL query-parameter codec for the filter state.
//!
//! The browser URL is the single source of truth for the search page: every
//! interaction encodes the new state back into the query string, and the state
//! is re-derived from the URL on mount and on every history navigation, so
//! back/forward and shared links reproduce the exact view.
//!
//! Parameters: `q`, `category`, `subcategory`, `label`, `condition`
//! (comma-joined multi-value), `sortBy`, `page`, `pageSize`,
//! `filterByDiscount`, `minDiscountPrice`, `maxDiscountPrice`.

use std::collections::BTreeSet;

use crate::search::filter::{FacetDimension, FilterState, DEFAULT_PER_PAGE};
use crate::search::query::SortOption;

/// Encode a filter state as a URL query string.
///
/// Defaults are omitted, so an untouched state encodes to an empty string.
/// Selection sets come out comma-joined in their (sorted) iteration order,
/// which keeps encoding deterministic.
pub fn encode_query(state: &FilterState) -> String {
    let mut pairs: Vec<(&str, String)> = Vec::new();

    if !state.term.is_empty() {
        pairs.push(("q", state.term.clone()));
    }

    for dimension in FacetDimension::ALL {
        let selected = state.selection(dimension);
        if !selected.is_empty() {
            pairs.push((dimension.param_name(), join_values(selected)));
        }
    }

    if state.sort != SortOption::Relevance {
        pairs.push(("sortBy", state.sort.as_str().to_string()));
    }
    if state.page != 1 {
        pairs.push(("page", state.page.to_string()));
    }
    if state.per_page != DEFAULT_PER_PAGE {
        pairs.push(("pageSize", state.per_page.to_string()));
    }
    if state.price_filter_enabled {
        pairs.push(("filterByDiscount", "true".to_string()));
        pairs.push(("minDiscountPrice", format_price(state.price_range.0)));
        pairs.push(("maxDiscountPrice", format_price(state.price_range.1)));
    }

    pairs
        .into_iter()
        .map(|(key, value)| format!("{}={}", key, urlencoding::encode(&value)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Decode a URL query string into a filter state.
///
/// Total: malformed numbers fall back to their defaults, unknown keys are
/// ignored, and a missing string decodes to the default state. A leading `?`
/// is tolerated.
pub fn decode_query(query: &str) -> FilterState {
    let mut state = FilterState::default();
    let query = query.strip_prefix('?').unwrap_or(query);

    for pair in query.split('&').filter(|p| !p.is_empty()) {
        let mut parts = pair.splitn(2, '=');
        let key = parts.next().unwrap_or("");
        let raw = parts.next().unwrap_or("");
        let value = urlencoding::decode(raw)
            .map(|v| v.into_owned())
            .unwrap_or_else(|_| raw.to_string());

        match key {
            "q" => state.term = value,
            "category" | "subcategory" | "label" | "condition" => {
                let dimension = match key {
                    "category" => FacetDimension::Category,
                    "subcategory" => FacetDimension::Subcategory,
                    "label" => FacetDimension::Label,
                    _ => FacetDimension::Condition,
                };
                *state.selection_mut(dimension) = split_values(&value);
            }
            "sortBy" => state.sort = SortOption::from_str(&value),
            "page" => state.page = value.parse().unwrap_or(1).max(1),
            "pageSize" => {
                state.per_page = value.parse().unwrap_or(DEFAULT_PER_PAGE).clamp(1, 1000)
            }
            "filterByDiscount" => {
                state.price_filter_enabled = matches!(value.as_str(), "true" | "1")
            }
            "minDiscountPrice" => state.price_range.0 = value.parse().unwrap_or(0.0),
            "maxDiscountPrice" => state.price_range.1 = value.parse().unwrap_or(0.0),
            _ => {}
        }
    }

    state
}

fn join_values(values: &BTreeSet<String>) -> String {
    values.iter().cloned().collect::<Vec<_>>().join(",")
}

fn split_values(value: &str) -> BTreeSet<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(String::from)
        .collect()
}

fn format_price(value: f64) -> String {
    // "100" rather than "100.0" for whole units, matching what the sliders put
    // in the address bar.
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state_encodes_empty() {
        assert_eq!(encode_query(&FilterState::default()), "");
    }

    #[test]
    fn test_round_trip_full_state() {
        let state = FilterState::new("gaming pc")
            .with_category("Computers")
            .with_category("Consoles")
            .with_label("Refurbished")
            .with_condition("Used - Good")
            .with_sort(SortOption::PriceAsc)
            .with_pagination(3, 12)
            .with_price_range(150.0, 999.5);

        let encoded = encode_query(&state);
        let decoded = decode_query(&encoded);
        assert_eq!(decoded, state);
    }

    #[test]
    fn test_encode_multi_value_comma_joined() {
        let state = FilterState::default()
            .with_category("Consoles")
            .with_category("Computers");
        let encoded = encode_query(&state);
        assert_eq!(encoded, "category=Computers%2CConsoles");
    }

    #[test]
    fn test_decode_percent_encoded_term() {
        let state = decode_query("q=play%20station&sortBy=newest");
        assert_eq!(state.term, "play station");
        assert_eq!(state.sort, SortOption::Newest);
    }

    #[test]
    fn test_decode_tolerates_leading_question_mark() {
        let state = decode_query("?q=ssd&page=2");
        assert_eq!(state.term, "ssd");
        assert_eq!(state.page, 2);
    }

    #[test]
    fn test_malformed_numbers_fall_back() {
        let state = decode_query("page=zero&pageSize=-5&minDiscountPrice=abc");
        assert_eq!(state.page, 1);
        assert_eq!(state.per_page, 1); // clamped from -5
        assert_eq!(state.price_range.0, 0.0);
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let state = decode_query("utm_source=mail&q=psu");
        assert_eq!(state.term, "psu");
        assert!(!state.is_filtering());
    }

    #[test]
    fn test_price_filter_params() {
        let state = decode_query("filterByDiscount=true&minDiscountPrice=100&maxDiscountPrice=900");
        assert!(state.price_filter_enabled);
        assert_eq!(state.price_range, (100.0, 900.0));

        let off = decode_query("filterByDiscount=false&minDiscountPrice=100");
        assert!(!off.price_filter_enabled);
    }

    #[test]
    fn test_empty_values_in_list_dropped() {
        let state = decode_query("category=Consoles,,%20,Computers");
        assert_eq!(state.categories.len(), 2);
    }
}
