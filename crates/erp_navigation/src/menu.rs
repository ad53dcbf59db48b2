use erp_types::{modules, NavigationItem};

/// Sidebar menu of the console
pub fn default_menu() -> Vec<NavigationItem> {
    vec![
        NavigationItem::link("Dashboard", "/dashboard", modules::DASHBOARD)
            .with_icon("layout-dashboard"),
        NavigationItem::group(
            "Human Resources",
            "users",
            vec![
                NavigationItem::link("Users", "/users", modules::USERS),
                NavigationItem::link("Payroll", "/payroll", modules::PAYROLL),
            ],
        ),
        NavigationItem::group(
            "Fleet",
            "truck",
            vec![NavigationItem::link("Vehicles", "/vehicles", modules::VEHICLES)],
        ),
        NavigationItem::group(
            "Company",
            "building",
            vec![
                NavigationItem::link("Company Profile", "/company", modules::COMPANY),
                NavigationItem::link("Branches", "/branches", modules::BRANCHES),
            ],
        ),
        NavigationItem::group(
            "System Settings",
            "settings",
            vec![
                NavigationItem::group(
                    "Access Control",
                    "shield",
                    vec![NavigationItem::link(
                        "Roles & Permissions",
                        "/roles",
                        modules::ROLES,
                    )],
                ),
                NavigationItem::link("Appearance", "/settings/appearance", modules::SETTINGS),
            ],
        ),
    ]
}
