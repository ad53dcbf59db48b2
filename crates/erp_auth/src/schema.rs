use erp_types::{modules, Action, Permission, User};
use password_auth::{generate_hash, verify_password};
use std::sync::{Arc, OnceLock};

/// A directory entry: the public user record plus its password hash.
/// Only `user` ever leaves the directory.
#[derive(Debug, Clone)]
pub struct StoredUser {
    pub user: User,
    pub password_hash: String,
}

impl StoredUser {
    pub fn new(user: User, password: &str) -> Self {
        Self {
            user,
            password_hash: generate_hash(password),
        }
    }

    pub fn verify(&self, password: &str) -> bool {
        verify_password(password, &self.password_hash).is_ok()
    }
}

/// Static list of console users
#[derive(Debug, Clone, Default)]
pub struct UserDirectory {
    users: Vec<StoredUser>,
}

static SEEDED: OnceLock<Arc<UserDirectory>> = OnceLock::new();

fn seed_user(
    id: &str,
    username: &str,
    name: &str,
    role: &str,
    licensed: &[&str],
    permissions: Vec<String>,
) -> User {
    User {
        id: id.to_string(),
        username: username.to_string(),
        name: name.to_string(),
        email: format!("{}@erp.local", username),
        role: role.to_string(),
        permissions,
        licensed_modules: licensed.iter().map(|m| m.to_string()).collect(),
    }
}

impl UserDirectory {
    pub fn new(users: Vec<StoredUser>) -> Self {
        Self { users }
    }

    /// Built-in console accounts. Hashed once per process.
    pub fn seeded() -> Arc<UserDirectory> {
        SEEDED.get_or_init(|| Arc::new(Self::build_seed())).clone()
    }

    fn build_seed() -> Self {
        let admin = seed_user(
            "1",
            "admin",
            "Administrator",
            "admin",
            &modules::ALL,
            Permission::all_for(&modules::ALL),
        );

        let mut manager_permissions = Permission::all_for(&[modules::VEHICLES]);
        manager_permissions.extend([
            Permission::new(modules::DASHBOARD, Action::View),
            Permission::new(modules::PAYROLL, Action::View),
            Permission::new(modules::PAYROLL, Action::Edit),
            Permission::new(modules::BRANCHES, Action::View),
            // granted but not licensed
            Permission::new(modules::COMPANY, Action::View),
        ]);
        let manager = seed_user(
            "2",
            "manager",
            "Operations Manager",
            "manager",
            &[
                modules::DASHBOARD,
                modules::VEHICLES,
                modules::PAYROLL,
                modules::BRANCHES,
            ],
            manager_permissions,
        );

        let viewer = seed_user(
            "3",
            "viewer",
            "Read Only",
            "viewer",
            &[modules::DASHBOARD, modules::VEHICLES],
            vec![
                Permission::new(modules::DASHBOARD, Action::View),
                Permission::new(modules::VEHICLES, Action::View),
            ],
        );

        Self::new(vec![
            StoredUser::new(admin, "123456"),
            StoredUser::new(manager, "manager123"),
            StoredUser::new(viewer, "viewer123"),
        ])
    }

    /// Exact, case-sensitive username lookup
    pub fn find(&self, username: &str) -> Option<&StoredUser> {
        self.users.iter().find(|stored| stored.user.username == username)
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_directory() {
        let directory = UserDirectory::seeded();
        assert_eq!(directory.len(), 3);

        let admin = directory.find("admin").unwrap();
        assert!(admin.verify("123456"));
        assert!(!admin.verify("1234567"));
        assert_eq!(admin.user.licensed_modules.len(), modules::ALL.len());
        assert_eq!(admin.user.permissions.len(), modules::ALL.len() * 4);

        assert!(directory.find("Admin").is_none());
    }

    #[test]
    fn test_seeded_is_shared() {
        let a = UserDirectory::seeded();
        let b = UserDirectory::seeded();
        assert!(Arc::ptr_eq(&a, &b));
    }
}
