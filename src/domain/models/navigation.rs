/// One entry of the sidebar navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub name: &'static str,
    pub href: &'static str,
    pub icon: &'static str,
}

impl NavItem {
    const fn new(name: &'static str, href: &'static str, icon: &'static str) -> Self {
        Self { name, href, icon }
    }

    /// An entry is active when the current route starts with its path.
    /// `/crops/wheat` keeps "Crop Planning" highlighted.
    pub fn is_active(&self, current_route: &str) -> bool {
        current_route == self.href || current_route.starts_with(self.href)
    }
}

/// Fixed navigation list shared by the mobile and desktop panels
pub const NAVIGATION: [NavItem; 10] = [
    NavItem::new("Dashboard", "/dashboard", "🏠"),
    NavItem::new("Farms", "/farms", "🌾"),
    NavItem::new("Crop Planning", "/crops", "🌱"),
    NavItem::new("Livestock", "/livestock", "🐄"),
    NavItem::new("Inventory", "/inventory", "📦"),
    NavItem::new("Finances", "/finances", "💰"),
    NavItem::new("Weather", "/weather", "🌦️"),
    NavItem::new("Tasks", "/tasks", "✅"),
    NavItem::new("AI Predictions", "/predictions", "🤖"),
    NavItem::new("Settings", "/settings", "⚙️"),
];

/// Entries highlighted for the given route
pub fn active_items(current_route: &str) -> impl Iterator<Item = &'static NavItem> + '_ {
    NAVIGATION.iter().filter(move |item| item.is_active(current_route))
}

/// Look up a navigation entry by its exact path
pub fn find_by_href(href: &str) -> Option<&'static NavItem> {
    NAVIGATION.iter().find(|item| item.href == href)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_has_ten_unique_paths() {
        assert_eq!(NAVIGATION.len(), 10);
        for (i, item) in NAVIGATION.iter().enumerate() {
            assert!(item.href.starts_with('/'));
            assert!(
                NAVIGATION[i + 1..].iter().all(|other| other.href != item.href),
                "duplicate path {}",
                item.href
            );
        }
    }

    #[test]
    fn test_prefix_match_highlights_crop_planning() {
        let active: Vec<_> = active_items("/crops/wheat").map(|i| i.name).collect();
        assert_eq!(active, vec!["Crop Planning"]);
    }

    #[test]
    fn test_exact_match_highlights_only_dashboard() {
        let active: Vec<_> = active_items("/dashboard").map(|i| i.name).collect();
        assert_eq!(active, vec!["Dashboard"]);
    }

    #[test]
    fn test_unknown_route_highlights_nothing() {
        assert_eq!(active_items("/").count(), 0);
        assert_eq!(active_items("/unknown").count(), 0);
    }

    #[test]
    fn test_find_by_href() {
        assert_eq!(find_by_href("/predictions").map(|i| i.name), Some("AI Predictions"));
        assert!(find_by_href("/crops/wheat").is_none());
    }
}
