//! Window configuration for the desktop shell.

use macroquad::window::Conf;

use crate::APP_NAME;

const WINDOW_WIDTH: i32 = 1280;
const WINDOW_HEIGHT: i32 = 720;

pub fn build_window_conf() -> Conf {
    Conf {
        window_title: APP_NAME.to_owned(),
        window_width: WINDOW_WIDTH,
        window_height: WINDOW_HEIGHT,
        high_dpi: true,
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_conf_carries_title_and_size() {
        let conf = build_window_conf();
        assert_eq!(conf.window_title, "Virion");
        assert_eq!(conf.window_width, 1280);
        assert_eq!(conf.window_height, 720);
        assert!(conf.high_dpi);
    }
}
