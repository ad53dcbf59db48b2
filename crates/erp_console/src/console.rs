use crate::screen::Screen;
use erp_auth::{SessionStore, UserDirectory};
use erp_error::ConsoleError;
use erp_navigation::{default_menu, expanded_titles, visible_menu};
use erp_notify::Toaster;
use erp_records::{
    Branch, CompanyProfile, CompanyProfileStore, PayrollEntry, PayrollStore, RecordStore,
    UserAccount, Vehicle,
};
use erp_settings::ErpConfig;
use erp_storage::{get_storage_system, ClientStorage, ThemeStore};
use erp_types::{modules, Action, NavigationItem, ThemeColor, Toast, User};
use std::sync::Arc;
use tracing::{info, warn};

/// Application shell. Owns the session, the toast store and every screen's records.
pub struct Console {
    pub config: Arc<ErpConfig>,
    session: SessionStore,
    toaster: Toaster,
    themes: ThemeStore,
    menu: Vec<NavigationItem>,
    pub(crate) vehicles: RecordStore<Vehicle>,
    pub(crate) branches: RecordStore<Branch>,
    pub(crate) users: RecordStore<UserAccount>,
    payroll: PayrollStore,
    company: CompanyProfileStore,
}

impl Console {
    pub fn new(config: ErpConfig) -> Result<Self, ConsoleError> {
        let storage = get_storage_system(&config);
        Self::with_storage(config, storage, UserDirectory::seeded())
    }

    pub fn with_storage(
        config: ErpConfig,
        storage: Arc<dyn ClientStorage>,
        directory: Arc<UserDirectory>,
    ) -> Result<Self, ConsoleError> {
        let toaster = Toaster::from_config(&config);
        let latency = config.simulated_latency();
        let themes = ThemeStore::new(storage.clone(), &config.default_theme_color)?;

        info!("Console ready with {} storage", storage.name());

        Ok(Self {
            session: SessionStore::new(storage, directory),
            themes,
            menu: default_menu(),
            vehicles: RecordStore::new(toaster.clone(), latency),
            branches: RecordStore::new(toaster.clone(), latency),
            users: RecordStore::new(toaster.clone(), latency),
            payroll: PayrollStore::new(toaster.clone(), latency),
            company: CompanyProfileStore::new(toaster.clone(), latency),
            toaster,
            config: Arc::new(config),
        })
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    pub fn toaster(&self) -> &Toaster {
        &self.toaster
    }

    pub fn toasts(&self) -> Vec<Toast> {
        self.toaster.toasts()
    }

    pub fn login(&self, username: &str, password: &str) -> Result<Option<User>, ConsoleError> {
        let user = self.session.login(username, password)?;
        match &user {
            Some(user) => {
                self.toaster
                    .success("Welcome", &format!("Signed in as {}", user.name));
            }
            None => {
                self.toaster.error("Login failed", "Invalid username or password");
            }
        }
        Ok(user)
    }

    pub fn logout(&self) -> Result<(), ConsoleError> {
        self.session.logout()?;
        Ok(())
    }

    pub fn current_user(&self) -> Option<User> {
        self.session.current_user()
    }

    pub fn check_access(&self, module: &str, action: Action) -> bool {
        self.session.check_access(module, action)
    }

    fn authorize(&self, module: &str, action: Action) -> Result<(), ConsoleError> {
        if self.session.check_access(module, action) {
            return Ok(());
        }

        warn!("Denied {}.{}", module, action);
        self.toaster.error(
            "Access denied",
            &format!("You are not allowed to {} {}", action, module),
        );
        Err(ConsoleError::Forbidden {
            module: module.to_string(),
            action: action.to_string(),
        })
    }

    /// Sidebar entries the current user may open. Empty when logged out.
    pub fn menu(&self) -> Vec<NavigationItem> {
        match self.current_user() {
            Some(user) => visible_menu(&self.menu, &user),
            None => Vec::new(),
        }
    }

    /// Groups to expand in the sidebar for `path`
    pub fn expanded_groups(&self, path: &str) -> Vec<String> {
        expanded_titles(&self.menu(), path)
    }

    pub fn theme_color(&self) -> ThemeColor {
        self.themes.theme_color()
    }

    pub fn set_theme_color(&self, color: &str) -> Result<ThemeColor, ConsoleError> {
        self.authorize(modules::SETTINGS, Action::Edit)?;

        let color: ThemeColor = match color.parse() {
            Ok(color) => color,
            Err(e) => {
                self.toaster.error("Error", &e.to_string());
                return Err(e.into());
            }
        };

        self.themes.set_theme_color(&color)?;
        self.toaster
            .success("Theme updated", &format!("Accent color set to {}", color));
        Ok(color)
    }

    pub fn list<R: Screen>(&self) -> Result<&[R], ConsoleError> {
        self.authorize(R::MODULE, Action::View)?;
        Ok(R::store(self).list())
    }

    pub async fn add<R: Screen>(&mut self, record: R) -> Result<R, ConsoleError> {
        self.authorize(R::MODULE, Action::Create)?;
        Ok(R::store_mut(self).add(record).await?)
    }

    pub async fn update<R: Screen>(&mut self, record: R) -> Result<R, ConsoleError> {
        self.authorize(R::MODULE, Action::Edit)?;
        Ok(R::store_mut(self).update(record).await?)
    }

    pub async fn delete<R: Screen>(&mut self, id: &str) -> Result<R, ConsoleError> {
        self.authorize(R::MODULE, Action::Delete)?;
        Ok(R::store_mut(self).delete(id).await?)
    }

    pub fn payroll(&self) -> Result<&PayrollStore, ConsoleError> {
        self.authorize(modules::PAYROLL, Action::View)?;
        Ok(&self.payroll)
    }

    pub async fn add_payroll(&mut self, entry: PayrollEntry) -> Result<PayrollEntry, ConsoleError> {
        self.authorize(modules::PAYROLL, Action::Create)?;
        Ok(self.payroll.add(entry).await?)
    }

    pub async fn update_payroll(
        &mut self,
        entry: PayrollEntry,
    ) -> Result<PayrollEntry, ConsoleError> {
        self.authorize(modules::PAYROLL, Action::Edit)?;
        Ok(self.payroll.update(entry).await?)
    }

    pub async fn delete_payroll(&mut self, id: &str) -> Result<PayrollEntry, ConsoleError> {
        self.authorize(modules::PAYROLL, Action::Delete)?;
        Ok(self.payroll.delete(id).await?)
    }

    pub async fn process_payroll(&mut self, id: &str) -> Result<PayrollEntry, ConsoleError> {
        self.authorize(modules::PAYROLL, Action::Edit)?;
        Ok(self.payroll.process(id).await?)
    }

    pub async fn process_all_payroll(&mut self) -> Result<usize, ConsoleError> {
        self.authorize(modules::PAYROLL, Action::Edit)?;
        Ok(self.payroll.process_all().await?)
    }

    pub async fn pay_payroll(&mut self, id: &str) -> Result<PayrollEntry, ConsoleError> {
        self.authorize(modules::PAYROLL, Action::Edit)?;
        Ok(self.payroll.pay(id).await?)
    }

    pub fn company_profile(&self) -> Result<Option<&CompanyProfile>, ConsoleError> {
        self.authorize(modules::COMPANY, Action::View)?;
        Ok(self.company.profile())
    }

    pub async fn save_company_profile(
        &mut self,
        profile: CompanyProfile,
    ) -> Result<CompanyProfile, ConsoleError> {
        self.authorize(modules::COMPANY, Action::Edit)?;
        Ok(self.company.save(profile).await?)
    }
}
