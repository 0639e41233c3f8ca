//! Titles, icons and access rules for every tab key.

pub const HOME_TAB: &str = "home";

/// Readable tab title for `key`; empty for unknown keys.
pub fn tab_label_for_key(key: &str) -> &'static str {
    match key {
        HOME_TAB => "Home",
        "a001_product" => "Products",
        "a002_faq" => "FAQ",
        "a003_theme" => "Themes",
        "a004_animation" => "Animations",
        "a005_payroll" => "Payroll",
        "sys_staff" => "Staff",
        _ => "",
    }
}

pub fn tab_icon_for_key(key: &str) -> &'static str {
    match key {
        HOME_TAB => "home",
        "a001_product" => "products",
        "a002_faq" => "faq",
        "a003_theme" => "palette",
        "a004_animation" => "film",
        "a005_payroll" => "wallet",
        "sys_staff" => "users",
        _ => "x",
    }
}

/// Tabs only administrators may open.
pub fn is_admin_only(key: &str) -> bool {
    matches!(key, "a005_payroll" | "sys_staff")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_labelled_tab_has_an_icon() {
        for key in [HOME_TAB, "a001_product", "a002_faq", "a003_theme", "a004_animation", "a005_payroll", "sys_staff"] {
            assert!(!tab_label_for_key(key).is_empty(), "{key}");
            assert_ne!(tab_icon_for_key(key), "x", "{key}");
            assert!(crate::shared::icons::icon_body(tab_icon_for_key(key)).is_some(), "{key}");
        }
        assert_eq!(tab_label_for_key("a024_bi_indicator"), "");
    }

    #[test]
    fn test_admin_only_tabs() {
        assert!(is_admin_only("a005_payroll"));
        assert!(is_admin_only("sys_staff"));
        assert!(!is_admin_only("a001_product"));
    }
}
