mod autostart;
mod desktop_icon;
mod settings;
