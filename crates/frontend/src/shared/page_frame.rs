//! PageFrame: root wrapper for every page rendered inside a tab.
//!
//! Sets two metadata attributes on the root element:
//!   - `id`                  `"{entity}--{category}"`, e.g. `"a001_product--list"`
//!   - `data-page-category`  one of the `PAGE_CAT_*` constants
//!
//! The `--` separator keeps the entity part searchable: the id copied from
//! the DOM inspector leads straight to `domain/a001_product/`.
//!
//! ```rust,ignore
//! view! {
//!     <PageFrame page_id="a002_faq--list" category=PAGE_CAT_LIST>
//!         <div class="page__header">...</div>
//!         <div class="page__content">...</div>
//!     </PageFrame>
//! }
//! ```

use leptos::prelude::*;

/// Table of records with search and pagination.
pub const PAGE_CAT_LIST: &str = "list";

/// Staff and access administration, admin only.
pub const PAGE_CAT_SYSTEM: &str = "system";

/// Free-form page (home screen).
pub const PAGE_CAT_CUSTOM: &str = "custom";

/// CSS class for the page root.
pub fn page_class(category: &str, extra: &str) -> String {
    let base = match category {
        PAGE_CAT_CUSTOM => "page page--custom",
        PAGE_CAT_SYSTEM => "page page--system",
        _ => "page",
    };
    if extra.is_empty() {
        base.to_string()
    } else {
        format!("{base} {extra}")
    }
}

/// Checks the `{entity}--{category}` id format.
pub fn is_valid_page_id(id: &str) -> bool {
    matches!(id.split_once("--"), Some((entity, cat)) if !entity.is_empty() && !cat.is_empty())
}

#[component]
pub fn PageFrame(
    page_id: &'static str,
    /// One of the `PAGE_CAT_*` constants.
    category: &'static str,
    #[prop(optional)] class: &'static str,
    children: Children,
) -> impl IntoView {
    if !is_valid_page_id(page_id) {
        log::warn!("PageFrame: id '{}' is not in entity--category form", page_id);
    }

    view! {
        <div id=page_id class=page_class(category, class) data-page-category=category>
            {children()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_id_format() {
        assert!(is_valid_page_id("a001_product--list"));
        assert!(is_valid_page_id("sys_staff--list"));
        assert!(!is_valid_page_id("a001_product"));
        assert!(!is_valid_page_id("--list"));
        assert!(!is_valid_page_id("a001_product--"));
    }

    #[test]
    fn test_page_class() {
        assert_eq!(page_class(PAGE_CAT_LIST, ""), "page");
        assert_eq!(page_class(PAGE_CAT_SYSTEM, "page--narrow"), "page page--system page--narrow");
    }
}
