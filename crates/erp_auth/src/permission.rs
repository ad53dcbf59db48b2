use erp_types::{Action, Permission, User};

pub fn has_license(user: &User, module: &str) -> bool {
    user.licensed_modules.iter().any(|m| m == module)
}

pub fn has_permission(user: &User, permission: &str) -> bool {
    user.permissions.iter().any(|p| p == permission)
}

/// A module action is allowed only when the module is licensed AND the
/// `<module>.<action>` permission is granted.
pub fn has_access(user: &User, module: &str, action: Action) -> bool {
    has_license(user, module) && has_permission(user, &Permission::new(module, action))
}

pub fn allowed_actions(user: &User, module: &str) -> Vec<Action> {
    Action::ALL
        .iter()
        .copied()
        .filter(|action| has_access(user, module, *action))
        .collect()
}
