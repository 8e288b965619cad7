pub mod boot_screen;
pub mod crt_overlay;
pub mod desktop_icons;
pub mod folder_content;
pub mod navbar;
pub mod password_screen;
pub mod status_views;
pub mod workspace_canvas;
