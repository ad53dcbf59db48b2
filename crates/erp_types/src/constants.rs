/// Storage key holding the serialized logged-in user
pub const AUTH_USER_KEY: &str = "auth_user";

/// Storage key holding the console accent color
pub const THEME_COLOR_KEY: &str = "theme-color";

/// Module keys of the console's feature areas
pub mod modules {
    pub const DASHBOARD: &str = "dashboard";
    pub const USERS: &str = "users";
    pub const VEHICLES: &str = "vehicles";
    pub const PAYROLL: &str = "payroll";
    pub const COMPANY: &str = "company";
    pub const BRANCHES: &str = "branches";
    pub const ROLES: &str = "roles";
    pub const SETTINGS: &str = "settings";

    pub const ALL: [&str; 8] = [
        DASHBOARD, USERS, VEHICLES, PAYROLL, COMPANY, BRANCHES, ROLES, SETTINGS,
    ];
}
