//! Recycle Tray: recycle bin status and controls in the Windows notification area.

// Hide console window on Windows release builds
#![cfg_attr(
    all(target_os = "windows", not(debug_assertions)),
    windows_subsystem = "windows"
)]

mod error;
mod logging;
#[cfg(target_os = "windows")]
mod notifier;
#[cfg(any(target_os = "windows", test))]
mod resources;
#[cfg(test)]
mod tests;
#[cfg(target_os = "windows")]
mod tray_command;
#[cfg(target_os = "windows")]
mod tray_manager;

pub(crate) use error::{AppError, Result as AppResult};

#[cfg(target_os = "windows")]
pub(crate) use {notifier::ToastNotifier, tray_command::TrayCommand, tray_manager::TrayManager};

use tracing::error;
use tracing_appender::non_blocking::WorkerGuard;

/// Application entry point.
fn main() {
    let log_guard = match logging::init() {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("Failed to initialize logging: {}", e);
            None
        }
    };

    run(log_guard);
}

#[cfg(not(target_os = "windows"))]
fn run(log_guard: Option<WorkerGuard>) {
    error!("This application only runs on Windows");
    drop(log_guard);
    std::process::exit(1);
}

#[cfg(target_os = "windows")]
struct Startup {
    controller: recycle_tray_core::Controller,
    poller: recycle_tray_core::StatusPoller,
    tray_manager: TrayManager,
}

/// Build every component the event loop needs; any error here is fatal.
#[cfg(target_os = "windows")]
fn startup() -> AppResult<Startup> {
    use recycle_tray_core::{
        AppContext, Autostart, Controller, DesktopIconVisibility, PowerShellShortcutWriter,
        RegistryDesktopIconFlag, Settings, SettingsStore, StatusPoller, WindowsShell,
    };

    use std::{path::Path, sync::Arc};

    use tracing::warn;

    let exe_dir = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf));
    let dev_root = Path::new(env!("CARGO_MANIFEST_DIR")).join("resources");
    let resolver = resources::verified_resolver(exe_dir.as_deref(), &dev_root)?;

    let store = SettingsStore::user_default()?;
    let settings = store.load().unwrap_or_else(|e| {
        warn!(error = ?e, "Failed to load settings, using defaults");
        Settings::default()
    });

    let autostart = Autostart::for_current_exe(Box::new(PowerShellShortcutWriter::new()))?;

    let shell = Arc::new(WindowsShell::new());
    let poller = StatusPoller::new(shell.clone());

    let controller = Controller::new(AppContext {
        shell,
        resolver,
        settings,
        store,
        autostart,
        desktop_icon: DesktopIconVisibility::new(Box::new(RegistryDesktopIconFlag::new())),
        notifier: Box::new(ToastNotifier),
        refresh: Box::new(poller.refresh_handle()),
    });

    // TrayManager lives on the main thread - TrayIcon is !Send on all platforms.
    let tray_manager =
        TrayManager::new(&controller.menu_state(), &controller.initial_appearance())?;

    Ok(Startup {
        controller,
        poller,
        tray_manager,
    })
}

#[cfg(target_os = "windows")]
fn run(log_guard: Option<WorkerGuard>) {
    use recycle_tray_core::{Flow, MenuCommand};

    use tao::{
        event::Event,
        event_loop::{ControlFlow, EventLoopBuilder},
    };
    use tokio::sync::watch;
    use tracing::info;
    use tray_icon::{MouseButton, TrayIconEvent, menu::MenuEvent};

    let mut log_guard = log_guard;

    info!(version = env!("CARGO_PKG_VERSION"), "Recycle Tray starting");

    let event_loop = EventLoopBuilder::<TrayCommand>::with_user_event().build();

    let Startup {
        mut controller,
        poller,
        tray_manager,
    } = match startup() {
        Ok(startup) => startup,
        Err(e) => {
            error!(error = ?e, "Startup failed");
            drop(log_guard);
            std::process::exit(1);
        }
    };
    let mut tray_manager = Some(tray_manager);

    let menu_proxy = event_loop.create_proxy();
    MenuEvent::set_event_handler(Some(move |event| {
        let _ = menu_proxy.send_event(TrayCommand::Menu(event));
    }));

    let icon_proxy = event_loop.create_proxy();
    TrayIconEvent::set_event_handler(Some(move |event| {
        let _ = icon_proxy.send_event(TrayCommand::TrayIcon(event));
    }));

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let status_proxy = event_loop.create_proxy();

    // Poller runs on its own runtime thread; results come back as user events.
    std::thread::spawn(move || {
        let rt = match tokio::runtime::Runtime::new() {
            Ok(rt) => rt,
            Err(e) => {
                error!("Failed to create tokio runtime: {:?}", e);
                return;
            }
        };

        rt.block_on(poller.run(shutdown_rx, move |result| {
            status_proxy.send_event(TrayCommand::Status(result)).is_ok()
        }));
    });

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;

        let Event::UserEvent(cmd) = event else {
            return;
        };

        let Some(tray) = tray_manager.as_mut() else {
            return;
        };

        let command = match cmd {
            TrayCommand::Status(result) => {
                controller.apply_status(result, tray);
                return;
            }
            TrayCommand::Menu(event) => match tray.command_for(&event.id) {
                Some(command) => command,
                None => return,
            },
            TrayCommand::TrayIcon(TrayIconEvent::DoubleClick {
                button: MouseButton::Left,
                ..
            }) => MenuCommand::OpenBin,
            TrayCommand::TrayIcon(_) => return,
        };

        if controller.dispatch(command, tray) == Flow::Exit {
            let _ = shutdown_tx.send(true);
            // Dropping the tray removes the icon before the process exits.
            drop(tray_manager.take());
            info!("Recycle Tray exiting");
            drop(log_guard.take());
            *control_flow = ControlFlow::ExitWithCode(0);
        }
    });
}
