use erp_auth::has_access;
use erp_types::{Action, NavigationItem, User};

/// Chain of entries from the root down to, and including, the first entry
/// whose href equals `current_path`. Empty when no entry matches.
pub fn find_parents<'a>(tree: &'a [NavigationItem], current_path: &str) -> Vec<&'a NavigationItem> {
    let mut chain = Vec::new();
    for item in tree {
        if walk(item, current_path, &mut chain) {
            return chain;
        }
    }
    chain
}

fn walk<'a>(item: &'a NavigationItem, path: &str, chain: &mut Vec<&'a NavigationItem>) -> bool {
    chain.push(item);

    if item.href.as_deref() == Some(path) {
        return true;
    }

    for child in &item.children {
        if walk(child, path, chain) {
            return true;
        }
    }

    chain.pop();
    false
}

/// Titles of the groups the sidebar should expand for `current_path`
pub fn expanded_titles(tree: &[NavigationItem], current_path: &str) -> Vec<String> {
    find_parents(tree, current_path)
        .into_iter()
        .filter(|item| item.is_group())
        .map(|item| item.title.clone())
        .collect()
}

/// Menu restricted to what `user` may view. Groups that end up empty are dropped.
pub fn visible_menu(tree: &[NavigationItem], user: &User) -> Vec<NavigationItem> {
    tree.iter().filter_map(|item| visible_item(item, user)).collect()
}

fn visible_item(item: &NavigationItem, user: &User) -> Option<NavigationItem> {
    if let Some(module) = &item.module {
        if !has_access(user, module, Action::View) {
            return None;
        }
    }

    if !item.is_group() {
        return Some(item.clone());
    }

    let children = visible_menu(&item.children, user);
    if children.is_empty() {
        return None;
    }

    Some(NavigationItem {
        children,
        ..item.clone()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::default_menu;

    fn titles(items: &[&NavigationItem]) -> Vec<String> {
        items.iter().map(|item| item.title.clone()).collect()
    }

    #[test]
    fn test_find_nested_path() {
        let menu = default_menu();
        let chain = find_parents(&menu, "/roles");
        assert_eq!(
            titles(&chain),
            vec!["System Settings", "Access Control", "Roles & Permissions"]
        );
    }

    #[test]
    fn test_find_top_level_and_missing() {
        let menu = default_menu();
        assert_eq!(titles(&find_parents(&menu, "/dashboard")), vec!["Dashboard"]);
        assert_eq!(
            titles(&find_parents(&menu, "/payroll")),
            vec!["Human Resources", "Payroll"]
        );
        assert!(find_parents(&menu, "/nowhere").is_empty());
        assert!(find_parents(&[], "/roles").is_empty());
    }

    #[test]
    fn test_first_match_wins() {
        let tree = vec![
            NavigationItem::group(
                "A",
                "a",
                vec![NavigationItem::link("Dup", "/dup", "vehicles")],
            ),
            NavigationItem::link("Dup top", "/dup", "vehicles"),
        ];
        assert_eq!(titles(&find_parents(&tree, "/dup")), vec!["A", "Dup"]);
    }

    #[test]
    fn test_expanded_titles() {
        let menu = default_menu();
        assert_eq!(
            expanded_titles(&menu, "/roles"),
            vec!["System Settings", "Access Control"]
        );
        assert!(expanded_titles(&menu, "/dashboard").is_empty());
    }

    #[test]
    fn test_visible_menu() {
        let user = User {
            id: "3".to_string(),
            username: "viewer".to_string(),
            name: String::new(),
            email: String::new(),
            role: String::new(),
            permissions: vec!["vehicles.view".to_string(), "roles.view".to_string()],
            licensed_modules: vec!["vehicles".to_string()],
        };

        let visible = visible_menu(&default_menu(), &user);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].title, "Fleet");
        assert_eq!(visible[0].children[0].title, "Vehicles");
    }
}
