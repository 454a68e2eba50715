//! Text rendering of the search view for the CLI.

use pixel_commerce::{FacetDimension, FacetGroups, FilterState, SearchPage};

use crate::controller::{SearchView, ViewPhase};

/// Render the facet sidebar: one block per dimension, selected values marked.
pub fn render_facets(facets: &FacetGroups, state: &FilterState) -> String {
    let mut out = String::new();

    for dimension in FacetDimension::ALL {
        let group = facets.group(dimension);
        if group.is_empty() {
            continue;
        }
        out.push_str(&format!("{}\n", title_for(dimension)));
        let selected = state.selection(dimension);
        for facet in group {
            let mark = if selected.contains(&facet.value) {
                "[x]"
            } else {
                "[ ]"
            };
            out.push_str(&format!("  {} {} ({})\n", mark, facet.value, facet.count));
        }
    }

    let bounds = facets.price_bounds;
    out.push_str(&format!("Price\n  {} - {}", bounds.min, bounds.max));
    if state.price_filter_enabled {
        out.push_str(&format!(
            "  (active: {} - {})",
            state.price_range.0, state.price_range.1
        ));
    }
    out.push('\n');
    out
}

/// Render one page of results as rows.
pub fn render_page(page: &SearchPage) -> String {
    let mut out = String::new();
    for item in &page.items {
        let category = item.category.as_deref().unwrap_or("-");
        let condition = item.condition.as_deref().unwrap_or("-");
        out.push_str(&format!(
            "{:<28} {:<12} {:<12} {:>9.2}",
            truncate(&item.name, 28),
            category,
            condition,
            item.discount_price,
        ));
        if item.is_on_sale() {
            out.push_str(&format!("  (was {:.2})", item.price));
        }
        out.push('\n');
    }

    let p = page.pagination;
    out.push_str(&format!(
        "Page {}/{} — {} result{}\n",
        p.page,
        p.total_pages,
        p.total,
        if p.total == 1 { "" } else { "s" }
    ));
    out
}

/// Render the whole view, picking the right phase for the results area.
pub fn render_view(view: &SearchView) -> String {
    let mut out = render_facets(&view.facets, &view.state);
    out.push('\n');

    match &view.phase {
        ViewPhase::Results => out.push_str(&render_page(&view.page)),
        ViewPhase::NoResults {
            suggestions,
            did_you_mean,
        } => {
            out.push_str("No results found.\n");
            if let Some(alt) = did_you_mean {
                out.push_str(&format!("Did you mean: {}?\n", alt));
            }
            if !suggestions.is_empty() {
                out.push_str(&format!("Suggestions: {}\n", suggestions.join(", ")));
            }
        }
        ViewPhase::Error { message } => {
            out.push_str(&format!("Search failed: {}\nRe-run to retry.\n", message));
        }
    }

    out
}

fn title_for(dimension: FacetDimension) -> &'static str {
    match dimension {
        FacetDimension::Category => "Category",
        FacetDimension::Subcategory => "Subcategory",
        FacetDimension::Label => "Label",
        FacetDimension::Condition => "Condition",
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{cut}…")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pixel_commerce::{extract_facets, filter_and_paginate, SearchItem};

    fn view() -> SearchView {
        let items = vec![
            SearchItem::new("1", "PS5").with_category("Consoles").with_prices(499.0, 449.0),
            SearchItem::new("2", "Gaming PC").with_category("Computers").with_prices(1299.0, 1299.0),
        ];
        let state = FilterState::default();
        SearchView {
            facets: extract_facets(&items),
            page: filter_and_paginate(&items, &state),
            state,
            phase: ViewPhase::Results,
        }
    }

    #[test]
    fn test_render_facets_marks_selection() {
        let view = view();
        let state = view.state.clone().with_category("Consoles");
        let rendered = render_facets(&view.facets, &state);

        assert!(rendered.contains("[x] Consoles (1)"));
        assert!(rendered.contains("[ ] Computers (1)"));
        assert!(rendered.contains("449 - 1299"));
    }

    #[test]
    fn test_render_page_counts() {
        let view = view();
        let rendered = render_page(&view.page);
        assert!(rendered.contains("Page 1/1 — 2 results"));
        assert!(rendered.contains("(was 499.00)"));
    }

    #[test]
    fn test_render_no_results() {
        let mut view = view();
        view.phase = ViewPhase::NoResults {
            suggestions: vec!["playstation".to_string()],
            did_you_mean: Some("ps5".to_string()),
        };
        let rendered = render_view(&view);
        assert!(rendered.contains("No results found."));
        assert!(rendered.contains("Did you mean: ps5?"));
        assert!(rendered.contains("Suggestions: playstation"));
    }

    #[test]
    fn test_render_error() {
        let mut view = view();
        view.phase = ViewPhase::Error {
            message: "HTTP 503".to_string(),
        };
        assert!(render_view(&view).contains("Search failed: HTTP 503"));
    }
}
