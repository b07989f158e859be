pub mod app_loop;
pub mod frame_input;
pub mod seed;
pub mod ui_render;
pub mod window_config;

pub const APP_NAME: &str = "Virion";
