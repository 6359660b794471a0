//! Static route table.
//!
//! The table is declared once and never changes: no guards, no redirects,
//! no lazy loading. `app.rs` declares the matching `<Route>` elements and
//! the navigation bar renders its links from this table, so the two stay
//! aligned through the [`Page`] variants.

/// Pages reachable through the router.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Test,
    Person,
    World,
    Nation,
    Internation,
    Upload,
}

/// One route: unique name, unique path, page component reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteEntry {
    pub name: &'static str,
    pub path: &'static str,
    pub page: Page,
}

impl RouteEntry {
    /// Human-readable link label derived from the route name.
    pub fn label(&self) -> String {
        let mut chars = self.name.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
            None => String::new(),
        }
    }
}

/// The route table, resolved once at startup.
pub const ROUTES: [RouteEntry; 7] = [
    RouteEntry { name: "home", path: "/", page: Page::Home },
    RouteEntry { name: "test", path: "/test", page: Page::Test },
    RouteEntry { name: "person", path: "/person", page: Page::Person },
    RouteEntry { name: "world", path: "/world", page: Page::World },
    RouteEntry { name: "nation", path: "/nation", page: Page::Nation },
    RouteEntry { name: "internation", path: "/internation", page: Page::Internation },
    RouteEntry { name: "uploadpage", path: "/uploadpage", page: Page::Upload },
];

/// Select the single entry for `path`. Unmatched paths get no entry; the
/// app renders an empty state for them.
pub fn match_path(path: &str) -> Option<&'static RouteEntry> {
    let path = if path.len() > 1 {
        path.trim_end_matches('/')
    } else {
        path
    };
    ROUTES.iter().find(|entry| entry.path == path)
}

/// Look a route up by its unique name.
pub fn by_name(name: &str) -> Option<&'static RouteEntry> {
    ROUTES.iter().find(|entry| entry.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_route_names_are_unique() {
        let names: HashSet<_> = ROUTES.iter().map(|entry| entry.name).collect();
        assert_eq!(names.len(), ROUTES.len());
    }

    #[test]
    fn test_route_paths_are_unique() {
        let paths: HashSet<_> = ROUTES.iter().map(|entry| entry.path).collect();
        assert_eq!(paths.len(), ROUTES.len());
    }

    #[test]
    fn test_match_path_selects_exactly_one_entry() {
        let entry = match_path("/world").expect("world route");
        assert_eq!(entry.name, "world");
        assert_eq!(entry.page, Page::World);
    }

    #[test]
    fn test_match_path_tolerates_trailing_slash() {
        let entry = match_path("/person/").expect("person route");
        assert_eq!(entry.page, Page::Person);
    }

    #[test]
    fn test_root_path_is_home() {
        assert_eq!(match_path("/").map(|entry| entry.page), Some(Page::Home));
    }

    #[test]
    fn test_unknown_path_has_no_entry() {
        assert_eq!(match_path("/missing"), None);
    }

    #[test]
    fn test_lookup_by_name() {
        assert_eq!(by_name("uploadpage").map(|entry| entry.path), Some("/uploadpage"));
        assert_eq!(by_name("nope"), None);
    }
}
