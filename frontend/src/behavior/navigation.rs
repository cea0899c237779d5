pub const MOBILE_BREAKPOINT: f64 = 768.0;

/// The mobile menu only exists below the breakpoint, so growing past it
/// forces the panel closed.
pub fn is_desktop_width(width: f64) -> bool {
    width > MOBILE_BREAKPOINT
}

/// Menu toggle transition for the burger button.
pub fn toggled(menu_open: bool) -> bool {
    !menu_open
}

/// Value for the toggle button's aria-expanded attribute.
pub fn aria_expanded(menu_open: bool) -> &'static str {
    if menu_open {
        "true"
    } else {
        "false"
    }
}

/// Final segment of a location path, with the entry document standing
/// in for the site root.
pub fn current_page(pathname: &str) -> &str {
    let segment = pathname.rsplit('/').next().unwrap_or("");
    if segment.is_empty() {
        "index.html"
    } else {
        segment
    }
}

pub fn link_is_active(href: &str, pathname: &str) -> bool {
    current_page(href) == current_page(pathname)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_path_resolves_to_entry_document() {
        assert_eq!(current_page("/"), "index.html");
        assert_eq!(current_page(""), "index.html");
    }

    #[test]
    fn final_segment_names_the_page() {
        assert_eq!(current_page("/about"), "about");
        assert_eq!(current_page("/nested/services"), "services");
    }

    #[test]
    fn exactly_one_nav_link_matches_each_page() {
        let hrefs = ["/", "/about", "/services", "/contact"];
        for pathname in ["/", "/about", "/services", "/contact"] {
            let matching = hrefs
                .iter()
                .filter(|href| link_is_active(href, pathname))
                .count();
            assert_eq!(matching, 1, "pathname={pathname:?}");
        }
    }

    #[test]
    fn root_href_matches_root_pathname() {
        assert!(link_is_active("/", "/"));
        assert!(!link_is_active("/", "/about"));
    }

    #[test]
    fn toggling_twice_restores_the_original_state() {
        for open in [false, true] {
            assert_eq!(toggled(toggled(open)), open);
            assert_eq!(
                aria_expanded(toggled(toggled(open))),
                aria_expanded(open)
            );
        }
    }

    #[test]
    fn aria_expanded_mirrors_the_open_flag() {
        assert_eq!(aria_expanded(true), "true");
        assert_eq!(aria_expanded(false), "false");
    }

    #[test]
    fn breakpoint_is_exclusive() {
        assert!(is_desktop_width(769.0));
        assert!(!is_desktop_width(768.0));
        assert!(!is_desktop_width(500.0));
    }
}
