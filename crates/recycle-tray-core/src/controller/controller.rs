use crate::{
    CoreResult,
    autostart::Autostart,
    controller::{
        Flow, MenuCommand, MenuState, Notice, Notifier, RefreshHandle, TrayAppearance, TrayView,
    },
    desktop_icon::DesktopIconVisibility,
    icons::{BinIcon, CommonIcon, DEFAULT_ICON_SET, IconResolver},
    settings::{Settings, SettingsStore},
    shell::{BinStatus, RecycleBin},
};

use std::{cell::Cell, path::PathBuf, sync::Arc};

use tracing::{debug, error, info, instrument, warn};

const BIN_TITLE: &str = "Корзина";
const ERROR_TITLE: &str = "Ошибка";
const AUTOSTART_TITLE: &str = "Автозапуск";
const NOTIFICATIONS_TITLE: &str = "Уведомления";
const ICON_SET_TITLE: &str = "Набор иконок";

/// Everything the controller works with, built once at startup.
pub struct AppContext {
    /// Recycle bin operations.
    pub shell: Arc<dyn RecycleBin>,
    /// Icon lookup.
    pub resolver: IconResolver,
    /// Settings as loaded at startup.
    pub settings: Settings,
    /// Where settings are persisted.
    pub store: SettingsStore,
    /// Launch-at-login switch.
    pub autostart: Autostart,
    /// Desktop icon switch.
    pub desktop_icon: DesktopIconVisibility,
    /// Notification sink.
    pub notifier: Box<dyn Notifier>,
    /// Out-of-schedule refresh trigger.
    pub refresh: Box<dyn RefreshHandle>,
}

enum NoticeIcon {
    None,
    Bin(BinIcon),
    Common(CommonIcon),
}

/// Tray presentation and menu command handling.
///
/// Lives on the UI thread. The only mutable state is the settings and the
/// last status and appearance shown.
pub struct Controller {
    ctx: AppContext,
    icon_sets: Vec<String>,
    last_status: Option<BinStatus>,
    last_appearance: Option<TrayAppearance>,
    query_failing: bool,
    icon_failing: Cell<bool>,
}

impl Controller {
    /// Build a controller, discovering the installed icon themes.
    ///
    /// A selected theme that is no longer installed is replaced in memory by
    /// `default` (or the first theme found).
    #[instrument(skip(ctx))]
    pub fn new(mut ctx: AppContext) -> Self {
        let icon_sets = match ctx.resolver.list_icon_sets() {
            Ok(sets) => sets,
            Err(e) => {
                error!(error = ?e, "Failed to list icon sets");
                Vec::new()
            }
        };

        if !icon_sets.contains(&ctx.settings.icon_set) {
            let fallback = icon_sets
                .iter()
                .find(|s| *s == DEFAULT_ICON_SET)
                .or_else(|| icon_sets.first());

            if let Some(fallback) = fallback {
                warn!(
                    selected = %ctx.settings.icon_set,
                    fallback = %fallback,
                    "Selected icon set is not installed"
                );
                ctx.settings.icon_set = fallback.clone();
            }
        }

        info!(icon_sets = ?icon_sets, selected = %ctx.settings.icon_set, "Controller ready");

        Self {
            ctx,
            icon_sets,
            last_status: None,
            last_appearance: None,
            query_failing: false,
            icon_failing: Cell::new(false),
        }
    }

    /// Current settings.
    pub fn settings(&self) -> &Settings {
        &self.ctx.settings
    }

    /// Appearance before the first status arrives.
    pub fn initial_appearance(&self) -> TrayAppearance {
        TrayAppearance {
            icon: self.bin_icon_path(BinIcon::Empty),
            tooltip: TrayAppearance::tooltip_for(None),
        }
    }

    /// Menu state reflecting settings and the real autostart and desktop icon state.
    pub fn menu_state(&self) -> MenuState {
        MenuState {
            autostart: self.ctx.autostart.is_enabled(),
            show_notifications: self.ctx.settings.show_notifications,
            desktop_icon_visible: self.ctx.desktop_icon.is_visible(),
            icon_set: self.ctx.settings.icon_set.clone(),
            icon_sets: self.icon_sets.clone(),
        }
    }

    /// Ask the poller for a fresh status outside its schedule.
    pub fn request_refresh(&self) {
        self.ctx.refresh.request();
    }

    /// Query the shell on the calling thread and present the result.
    pub fn refresh(&mut self, view: &mut dyn TrayView) {
        let status = self.ctx.shell.query_status();
        self.apply_status(status, view);
    }

    /// Present the result of a status query.
    ///
    /// A failed query shows the full icon with the bare title tooltip and is
    /// only logged. Presenting the same state twice leaves the view untouched.
    pub fn apply_status(&mut self, status: CoreResult<BinStatus>, view: &mut dyn TrayView) {
        match status {
            Ok(status) => {
                if self.query_failing {
                    info!("Recycle bin query recovered");
                }
                self.query_failing = false;
                self.last_status = Some(status);
            }
            Err(e) => {
                if self.query_failing {
                    debug!(error = ?e, "Recycle bin query still failing");
                } else {
                    warn!(error = ?e, "Failed to query recycle bin");
                }
                self.query_failing = true;
                self.last_status = None;
            }
        }

        self.present(view);
    }

    /// Run one menu command.
    #[instrument(skip(self, view))]
    pub fn dispatch(&mut self, command: MenuCommand, view: &mut dyn TrayView) -> Flow {
        match command {
            MenuCommand::OpenBin => self.handle_open_bin(),
            MenuCommand::EmptyBin => self.handle_empty_bin(),
            MenuCommand::SetAutostart(enabled) => self.set_autostart(enabled, view),
            MenuCommand::SetNotifications(enabled) => self.set_notifications(enabled, view),
            MenuCommand::SetDesktopIconVisible(visible) => {
                self.set_desktop_icon_visible(visible, view)
            }
            MenuCommand::SelectIconSet(name) => self.select_icon_set(&name, view),
            MenuCommand::Exit => {
                info!("Exit requested from tray menu");
                return Flow::Exit;
            }
        }

        Flow::Continue
    }

    /// Empty the bin and report the outcome.
    ///
    /// Success and "nothing to delete" are reported as success; any other
    /// code is shown verbatim.
    pub fn handle_empty_bin(&self) {
        match self.ctx.shell.empty() {
            Ok(result) if result.is_success() => {
                info!(code = result.code, "Recycle bin emptied");
                self.notify(
                    BIN_TITLE,
                    "Корзина успешно очищена.".to_string(),
                    NoticeIcon::Bin(BinIcon::Empty),
                );
                self.request_refresh();
            }
            Ok(result) => {
                warn!(code = result.code, "Emptying recycle bin returned an error code");
                self.notify(
                    BIN_TITLE,
                    format!(
                        "Произошла ошибка при очистке корзины. Код ошибки: {}",
                        result.code
                    ),
                    NoticeIcon::Bin(BinIcon::Full),
                );
                self.request_refresh();
            }
            Err(e) => {
                error!(error = ?e, "Failed to empty recycle bin");
                self.notify(
                    ERROR_TITLE,
                    format!("Не удалось очистить корзину: {}", e),
                    NoticeIcon::Bin(BinIcon::Full),
                );
            }
        }
    }

    /// Open the bin folder; failures are notified, never fatal.
    pub fn handle_open_bin(&self) {
        if let Err(e) = self.ctx.shell.open_folder() {
            error!(error = ?e, "Failed to open recycle bin");
            self.notify(
                ERROR_TITLE,
                format!("Не удалось открыть корзину: {}", e),
                NoticeIcon::Bin(BinIcon::Full),
            );
        }
    }

    /// Enable or disable launch at login.
    ///
    /// The menu is resynced afterwards, so a failed toggle shows the real state.
    pub fn set_autostart(&mut self, enabled: bool, view: &mut dyn TrayView) {
        let (message, icon) = if enabled {
            if self.ctx.autostart.enable() {
                ("Автозапуск включен.", CommonIcon::AutostartEnabled)
            } else {
                ("Не удалось включить автозапуск.", CommonIcon::AutostartDisabled)
            }
        } else if self.ctx.autostart.disable() {
            ("Автозапуск отключен.", CommonIcon::AutostartDisabled)
        } else {
            ("Не удалось отключить автозапуск.", CommonIcon::AutostartEnabled)
        };

        self.notify(AUTOSTART_TITLE, message.to_string(), NoticeIcon::Common(icon));
        view.sync_menu(&self.menu_state());
    }

    /// Turn notifications on or off and persist the choice.
    pub fn set_notifications(&mut self, enabled: bool, view: &mut dyn TrayView) {
        self.ctx.settings.show_notifications = enabled;
        self.persist();

        if enabled {
            self.notify(
                NOTIFICATIONS_TITLE,
                "Уведомления включены.".to_string(),
                NoticeIcon::Common(CommonIcon::NotificationsEnabled),
            );
        }

        view.sync_menu(&self.menu_state());
    }

    /// Show or hide the bin icon on the desktop.
    pub fn set_desktop_icon_visible(&mut self, visible: bool, view: &mut dyn TrayView) {
        self.ctx.desktop_icon.set_visible(visible);
        view.sync_menu(&self.menu_state());
    }

    /// Switch icon theme, persist it and redraw the tray icon.
    pub fn select_icon_set(&mut self, name: &str, view: &mut dyn TrayView) {
        if !self.icon_sets.iter().any(|s| s == name) {
            warn!(icon_set = %name, "Ignoring unknown icon set");
            view.sync_menu(&self.menu_state());
            return;
        }

        self.ctx.settings.icon_set = name.to_string();
        self.persist();

        info!(icon_set = %name, "Icon set selected");

        self.present(view);
        self.notify(
            ICON_SET_TITLE,
            format!("Выбран набор иконок: {}", name),
            NoticeIcon::None,
        );
        view.sync_menu(&self.menu_state());
    }

    fn present(&mut self, view: &mut dyn TrayView) {
        let appearance = match self.last_status {
            Some(status) => TrayAppearance {
                icon: self.bin_icon_path(if status.is_empty() {
                    BinIcon::Empty
                } else {
                    BinIcon::Full
                }),
                tooltip: TrayAppearance::tooltip_for(Some(&status)),
            },
            None => TrayAppearance {
                icon: self.bin_icon_path(BinIcon::Full),
                tooltip: TrayAppearance::tooltip_for(None),
            },
        };

        if self.last_appearance.as_ref() == Some(&appearance) {
            return;
        }

        view.show(&appearance);
        self.last_appearance = Some(appearance);
    }

    fn bin_icon_path(&self, icon: BinIcon) -> Option<PathBuf> {
        match self.ctx.resolver.bin_icon(&self.ctx.settings.icon_set, icon) {
            Ok(path) => {
                if self.icon_failing.replace(false) {
                    info!(path = ?path, "Tray icon available again");
                }
                Some(path)
            }
            Err(e) => {
                if self.icon_failing.replace(true) {
                    debug!(error = ?e, "Tray icon still unavailable");
                } else {
                    warn!(error = ?e, "Tray icon unavailable, using blank icon");
                }
                None
            }
        }
    }

    fn notify(&self, title: &str, body: String, icon: NoticeIcon) {
        if !self.ctx.settings.show_notifications {
            debug!(title, body = %body, "Notifications disabled, skipping");
            return;
        }

        let icon = match icon {
            NoticeIcon::None => None,
            NoticeIcon::Bin(icon) => self.bin_icon_path(icon),
            NoticeIcon::Common(icon) => self.ctx.resolver.common_icon(icon).ok(),
        };

        self.ctx.notifier.notify(&Notice {
            title: title.to_string(),
            body,
            icon,
        });
    }

    fn persist(&self) {
        if let Err(e) = self.ctx.store.save(&self.ctx.settings) {
            error!(error = ?e, "Failed to save settings");
        }
    }
}
