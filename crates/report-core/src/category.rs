//! Category resolution.

/// Fixed category choices offered by the collaborator UI.
pub const STANDARD_CATEGORIES: [&str; 5] =
    ["Exterior", "Interior", "Roof", "Plumbing", "Electrical"];

/// The escape choice that routes to free-text input.
pub const CUSTOM_CATEGORY_OPTION: &str = "Other...";

/// Label used when the escape choice is taken with no free text supplied.
pub const FALLBACK_CATEGORY: &str = "Other";

/// Map a (selected option, free text) pair to the final category label.
///
/// A standard option wins verbatim. The escape option takes the trimmed free
/// text, or the fallback label when the text is blank. Any other selection is
/// treated as free text itself, so the function is total for arbitrary
/// collaborator input and never fails.
pub fn resolve_category(selected: &str, custom: &str, standard: &[&str]) -> String {
    if standard.contains(&selected) {
        return selected.to_string();
    }
    let free_text = if selected == CUSTOM_CATEGORY_OPTION {
        custom
    } else {
        selected
    };
    let trimmed = free_text.trim();
    if trimmed.is_empty() {
        FALLBACK_CATEGORY.to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_option_returned_verbatim() {
        for option in STANDARD_CATEGORIES {
            assert_eq!(resolve_category(option, "", &STANDARD_CATEGORIES), option);
        }
        // Free text is ignored when a standard option is selected.
        assert_eq!(
            resolve_category("Exterior", "Roof Vent", &STANDARD_CATEGORIES),
            "Exterior"
        );
    }

    #[test]
    fn test_escape_option_takes_trimmed_custom_text() {
        assert_eq!(
            resolve_category(CUSTOM_CATEGORY_OPTION, "  Roof Vent  ", &STANDARD_CATEGORIES),
            "Roof Vent"
        );
    }

    #[test]
    fn test_escape_option_with_blank_text_falls_back() {
        assert_eq!(
            resolve_category(CUSTOM_CATEGORY_OPTION, "", &STANDARD_CATEGORIES),
            FALLBACK_CATEGORY
        );
        assert_eq!(
            resolve_category(CUSTOM_CATEGORY_OPTION, "   ", &STANDARD_CATEGORIES),
            FALLBACK_CATEGORY
        );
    }

    #[test]
    fn test_unknown_selection_is_free_text() {
        assert_eq!(
            resolve_category("Pool Deck", "", &STANDARD_CATEGORIES),
            "Pool Deck"
        );
        assert_eq!(resolve_category("", "", &STANDARD_CATEGORIES), FALLBACK_CATEGORY);
    }
}
