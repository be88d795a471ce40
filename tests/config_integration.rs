// SPDX-License-Identifier: MPL-2.0
//! Integration tests for loading a style file and driving the engine with it.

use iced_core::{Point, Rectangle, Size};
use std::fs;
use std::time::{Duration, Instant};
use tempfile::tempdir;
use toastline::config::{self, defaults::CONFIG_DIR_ENV, Config};
use toastline::ui::notifications::{Drawn, Manager, Notification, Phase, Renderer, ToastFrame};

struct Anchors(Vec<Point>);

impl Renderer for Anchors {
    fn viewport(&self) -> Rectangle {
        Rectangle::new(Point::ORIGIN, Size::new(800.0, 600.0))
    }

    fn draw(&mut self, frame: &ToastFrame<'_>) -> Drawn {
        self.0.push(frame.anchor);
        Drawn::new(frame.bounds(frame.constrain(Size::new(200.0, 50.0))))
    }

    fn is_hovered(&self, _bounds: Rectangle) -> bool {
        false
    }
}

#[test]
fn style_file_drives_layout_and_timing() {
    let temp_dir = tempdir().expect("failed to create temp dir");
    let path = temp_dir.path().join("toasts.toml");
    fs::write(
        &path,
        r#"
[layout]
padding_x = 40.0
padding_y = 30.0
render_limit = 1

[timing]
fade_in_ms = 0
fade_out_ms = 100
"#,
    )
    .expect("write style file");

    let (config, warning) = config::load_from(Some(&path));
    assert!(warning.is_none());

    let mut manager = Manager::with_style(config.to_style());
    let mut renderer = Anchors(Vec::new());
    let first = manager.send(Notification::info("first").with_duration(Duration::from_secs(1)));
    let second = manager.send(Notification::info("second"));
    let t0 = Instant::now();

    let report = manager.render_frame_at(&mut renderer, t0);
    assert_eq!(report.laid_out, 1);
    assert_eq!(renderer.0, vec![Point::new(760.0, 570.0)]);
    assert_eq!(manager.phase_of(first, t0), Some(Phase::Holding));
    assert_eq!(
        manager.phase_of(first, t0 + Duration::from_millis(1100)),
        Some(Phase::Expired)
    );
    assert_eq!(manager.phase_of(second, t0), Some(Phase::Pending));
}

#[test]
fn environment_directory_is_used_for_save_and_load() {
    let temp_dir = tempdir().expect("failed to create temp dir");
    std::env::set_var(CONFIG_DIR_ENV, temp_dir.path());

    let mut config = Config::default();
    config.layout.padding_between = 4.0;
    config::save(&config).expect("save to env directory");
    assert!(temp_dir.path().join("toasts.toml").exists());

    let (loaded, warning) = config::load();
    std::env::remove_var(CONFIG_DIR_ENV);

    assert!(warning.is_none());
    assert_eq!(loaded, config);
}

#[test]
fn broken_file_warns_and_keeps_defaults() {
    let temp_dir = tempdir().expect("failed to create temp dir");
    let path = temp_dir.path().join("toasts.toml");
    fs::write(&path, "[layout]\npadding_x = \"wide\"\n").expect("write style file");

    let (config, warning) = config::load_from(Some(&path));
    assert_eq!(config, Config::default());
    assert!(warning.is_some());
}
