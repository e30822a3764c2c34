//! System tray icon and context menu.
//!
//! Owns the `!Send` tray handle on the UI thread and implements the
//! controller's [`TrayView`]. Menu clicks are translated into
//! [`MenuCommand`]s by [`TrayManager::command_for`].

use crate::{AppError, AppResult};

use recycle_tray_core::{MenuCommand, MenuState, TOOLTIP_TITLE, TrayAppearance, TrayView};

use std::{collections::HashMap, panic::Location, path::Path};

use error_location::ErrorLocation;
use tracing::{error, info, instrument, warn};
use tray_icon::{
    Icon, TrayIcon, TrayIconBuilder,
    menu::{CheckMenuItem, Menu, MenuId, MenuItem, PredefinedMenuItem, Submenu},
};

const BLANK_ICON_SIZE: u32 = 16;

#[derive(Debug, Clone)]
enum MenuAction {
    OpenBin,
    EmptyBin,
    Autostart,
    Notifications,
    DesktopIcon,
    IconSet(String),
    Exit,
}

/// System tray icon manager.
pub struct TrayManager {
    tray_icon: TrayIcon,
    autostart_item: CheckMenuItem,
    notifications_item: CheckMenuItem,
    desktop_icon_item: CheckMenuItem,
    icon_set_items: Vec<(String, CheckMenuItem)>,
    actions: HashMap<MenuId, MenuAction>,
}

impl TrayManager {
    /// Build the tray icon and its menu from the initial state.
    #[track_caller]
    #[instrument(skip_all)]
    pub fn new(state: &MenuState, appearance: &TrayAppearance) -> AppResult<Self> {
        let menu = Menu::new();
        let mut actions = HashMap::new();

        let open_item = MenuItem::new("Открыть корзину", true, None);
        let empty_item = MenuItem::new("Очистить корзину", true, None);
        let autostart_item = CheckMenuItem::new("Автозапуск", true, state.autostart, None);
        let notifications_item = CheckMenuItem::new(
            "Показывать уведомления",
            true,
            state.show_notifications,
            None,
        );
        let desktop_icon_item = CheckMenuItem::new(
            "Отображать 🗑️ на рабочем столе",
            true,
            state.desktop_icon_visible,
            None,
        );
        let icon_set_menu = Submenu::new("Выбрать набор иконок", true);
        let exit_item = MenuItem::new("Выход", true, None);

        actions.insert(open_item.id().clone(), MenuAction::OpenBin);
        actions.insert(empty_item.id().clone(), MenuAction::EmptyBin);
        actions.insert(autostart_item.id().clone(), MenuAction::Autostart);
        actions.insert(notifications_item.id().clone(), MenuAction::Notifications);
        actions.insert(desktop_icon_item.id().clone(), MenuAction::DesktopIcon);
        actions.insert(exit_item.id().clone(), MenuAction::Exit);

        let mut icon_set_items = Vec::with_capacity(state.icon_sets.len());
        for name in &state.icon_sets {
            let item = CheckMenuItem::new(name, true, *name == state.icon_set, None);
            icon_set_menu.append(&item).map_err(|e| AppError::TrayInit {
                reason: format!("Failed to add icon set '{}' to menu: {}", name, e),
                location: ErrorLocation::from(Location::caller()),
            })?;
            actions.insert(item.id().clone(), MenuAction::IconSet(name.clone()));
            icon_set_items.push((name.clone(), item));
        }

        menu.append_items(&[
            &open_item,
            &empty_item,
            &PredefinedMenuItem::separator(),
            &autostart_item,
            &notifications_item,
            &desktop_icon_item,
            &icon_set_menu,
            &PredefinedMenuItem::separator(),
            &exit_item,
        ])
        .map_err(|e| AppError::TrayInit {
            reason: format!("Failed to build tray menu: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let tray_icon = TrayIconBuilder::new()
            .with_tooltip(&appearance.tooltip)
            .with_menu(Box::new(menu))
            // Left double-click opens the bin; the menu is right-click only.
            .with_menu_on_left_click(false)
            .with_icon(Self::icon_or_blank(appearance.icon.as_deref())?)
            .build()
            .map_err(|e| AppError::TrayInit {
                reason: format!("Failed to create tray icon: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        info!(icon_sets = state.icon_sets.len(), "System tray icon initialized");

        Ok(Self {
            tray_icon,
            autostart_item,
            notifications_item,
            desktop_icon_item,
            icon_set_items,
            actions,
        })
    }

    /// Translate a clicked menu item into a command.
    ///
    /// Check items have already toggled when the event arrives, so their
    /// current state is the state the user asked for.
    pub fn command_for(&self, id: &MenuId) -> Option<MenuCommand> {
        let command = match self.actions.get(id)? {
            MenuAction::OpenBin => MenuCommand::OpenBin,
            MenuAction::EmptyBin => MenuCommand::EmptyBin,
            MenuAction::Autostart => MenuCommand::SetAutostart(self.autostart_item.is_checked()),
            MenuAction::Notifications => {
                MenuCommand::SetNotifications(self.notifications_item.is_checked())
            }
            MenuAction::DesktopIcon => {
                MenuCommand::SetDesktopIconVisible(self.desktop_icon_item.is_checked())
            }
            MenuAction::IconSet(name) => MenuCommand::SelectIconSet(name.clone()),
            MenuAction::Exit => MenuCommand::Exit,
        };

        Some(command)
    }

    /// Load an `.ico` file into a tray icon.
    #[track_caller]
    fn load_icon(path: &Path) -> AppResult<Icon> {
        let img = image::open(path).map_err(|e| AppError::IconLoad {
            reason: format!("Failed to decode {:?}: {}", path, e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let rgba = img.into_rgba8();
        let (width, height) = (rgba.width(), rgba.height());

        Icon::from_rgba(rgba.into_raw(), width, height).map_err(|e| AppError::IconLoad {
            reason: format!("Failed to create icon from RGBA: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })
    }

    /// Fully transparent placeholder.
    #[track_caller]
    fn blank_icon() -> AppResult<Icon> {
        let pixels = vec![0; (BLANK_ICON_SIZE * BLANK_ICON_SIZE * 4) as usize];

        Icon::from_rgba(pixels, BLANK_ICON_SIZE, BLANK_ICON_SIZE).map_err(|e| AppError::IconLoad {
            reason: format!("Failed to create blank icon: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })
    }

    #[track_caller]
    fn icon_or_blank(path: Option<&Path>) -> AppResult<Icon> {
        match path.map(Self::load_icon) {
            Some(Ok(icon)) => Ok(icon),
            Some(Err(e)) => {
                warn!(error = ?e, "Falling back to blank tray icon");
                Self::blank_icon()
            }
            None => Self::blank_icon(),
        }
    }
}

impl TrayView for TrayManager {
    fn show(&mut self, appearance: &TrayAppearance) {
        match Self::icon_or_blank(appearance.icon.as_deref()) {
            Ok(icon) => {
                if let Err(e) = self.tray_icon.set_icon(Some(icon)) {
                    error!(error = ?e, "Failed to update tray icon");
                }
            }
            Err(e) => error!(error = ?e, "No tray icon available"),
        }

        if let Err(e) = self.tray_icon.set_tooltip(Some(&appearance.tooltip)) {
            error!(error = ?e, "Failed to update tooltip");
            if let Err(e) = self.tray_icon.set_tooltip(Some(TOOLTIP_TITLE)) {
                error!(error = ?e, "Failed to restore fallback tooltip");
            }
        }
    }

    fn sync_menu(&mut self, state: &MenuState) {
        self.autostart_item.set_checked(state.autostart);
        self.notifications_item.set_checked(state.show_notifications);
        self.desktop_icon_item.set_checked(state.desktop_icon_visible);

        for (name, item) in &self.icon_set_items {
            item.set_checked(*name == state.icon_set);
        }
    }
}
