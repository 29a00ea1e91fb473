use super::*;

fn options() -> Vec<SelectOption> {
    vec![
        SelectOption::new("v1", "Crown Seaways"),
        SelectOption::new("v2", "Pearl Seaways"),
        SelectOption::new("v3", "Aura"),
    ]
}

// =============================================================
// filter_options
// =============================================================

#[test]
fn empty_query_returns_all_options() {
    assert_eq!(filter_options(&options(), ""), options());
    assert_eq!(filter_options(&options(), "   "), options());
}

#[test]
fn filter_matches_substrings_case_insensitively() {
    let filtered = filter_options(&options(), "seaWAYS");
    assert_eq!(filtered.len(), 2);
    assert!(filtered.iter().all(|o| o.label.contains("Seaways")));
}

#[test]
fn filter_with_no_match_returns_empty() {
    assert!(filter_options(&options(), "zzz").is_empty());
}

// =============================================================
// selected_label
// =============================================================

#[test]
fn selected_label_resolves_known_value() {
    assert_eq!(selected_label(&options(), "v2", "Select vessel"), "Pearl Seaways");
}

#[test]
fn selected_label_falls_back_to_placeholder() {
    assert_eq!(selected_label(&options(), "", "Select vessel"), "Select vessel");
    assert_eq!(selected_label(&options(), "missing", "Select vessel"), "Select vessel");
}
