//! Page category constants for tab page standardization.
//!
//! Every page rendered inside a tab declares:
//!   - HTML `id` in the format `{entity}--{category}` (e.g. `"a001_message--inbox"`)
//!   - `data-page-category` with one of the constants below
//!
//! The `--` separator keeps the entity name searchable: the id copied from
//! the DOM inspector leads straight to `domain/a001_message/`.

/// Working list of records (inbox, notification feed, FAQ).
pub const PAGE_CAT_LIST: &str = "list";

/// Detail view for a single record.
pub const PAGE_CAT_DETAIL: &str = "detail";

/// System administration page.
pub const PAGE_CAT_SYSTEM: &str = "system";

/// All known category values.
pub const ALL_CATEGORIES: &[&str] = &[PAGE_CAT_LIST, PAGE_CAT_DETAIL, PAGE_CAT_SYSTEM];

/// Validate that a page id matches the `{entity}--{category}` format.
pub fn is_valid_page_id(id: &str) -> bool {
    matches!(id.split_once("--"), Some((entity, rest)) if !entity.is_empty() && !rest.is_empty())
}

/// Return true if the category value is recognised.
pub fn is_known_category(cat: &str) -> bool {
    ALL_CATEGORIES.contains(&cat)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_ids() {
        assert!(is_valid_page_id("a001_message--inbox"));
        assert!(is_valid_page_id("sys_settings--system"));
        assert!(!is_valid_page_id("a001_message"));
        assert!(!is_valid_page_id("--list"));
        assert!(!is_valid_page_id("a001_message--"));
    }

    #[test]
    fn test_known_categories() {
        assert!(is_known_category(PAGE_CAT_LIST));
        assert!(!is_known_category("dashboard"));
    }
}
