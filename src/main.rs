// SPDX-License-Identifier: MPL-2.0
//! Headless demo: drives the notification engine with a text renderer on a
//! simulated clock and prints every frame's stacked toasts.

use iced_core::{Point, Rectangle, Size, Vector};
use std::path::PathBuf;
use std::process::ExitCode;
use std::thread;
use std::time::{Duration, Instant};
use toastline::config;
use toastline::diagnostics::DiagnosticsCollector;
use toastline::ui::icons::IconFont;
use toastline::ui::notifications::{
    Drawn, Kind, Manager, Notification, NotificationId, Renderer, ToastFrame,
};

const HELP: &str = "\
toastline: headless toast notification demo

USAGE:
  toastline [OPTIONS]

OPTIONS:
  --frames N        Number of frames to simulate [default: 480]
  --fps F           Simulated frame rate [default: 60]
  --config PATH     Style file to load instead of the default toasts.toml
  --diagnostics     Print the diagnostics report as JSON at the end
  -h, --help        Print this help
";

const DEFAULT_FRAMES: u32 = 480;
const DEFAULT_FPS: u32 = 60;
const VIEWPORT: Size = Size::new(1280.0, 720.0);

struct Args {
    frames: u32,
    fps: u32,
    config: Option<PathBuf>,
    diagnostics: bool,
}

fn parse_args() -> Result<Option<Args>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(None);
    }

    let parsed = Args {
        frames: args
            .opt_value_from_str("--frames")?
            .unwrap_or(DEFAULT_FRAMES),
        fps: args.opt_value_from_str("--fps")?.unwrap_or(DEFAULT_FPS).max(1),
        config: args.opt_value_from_str("--config")?,
        diagnostics: args.contains("--diagnostics"),
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        eprintln!("Warning: unused arguments left: {remaining:?}");
    }
    Ok(Some(parsed))
}

/// Prints each toast as a line of text and sizes it from its text.
struct TextRenderer {
    viewport: Rectangle,
    cursor: Option<Point>,
    icon_size: f32,
}

impl TextRenderer {
    fn new() -> Self {
        Self {
            viewport: Rectangle::new(Point::ORIGIN, VIEWPORT),
            cursor: None,
            icon_size: 0.0,
        }
    }

    /// Rough natural size: a title row plus one row per body line.
    fn measure(&self, frame: &ToastFrame<'_>) -> Size {
        let longest = frame
            .body
            .lines()
            .map(str::len)
            .chain(std::iter::once(frame.title.len()))
            .max()
            .unwrap_or(0);
        let rows = if frame.has_body() {
            1 + frame.body.lines().count()
        } else {
            1
        };
        Size::new(
            longest as f32 * 8.0 + self.icon_size + 40.0,
            rows as f32 * 22.0 + 16.0,
        )
    }
}

impl Renderer for TextRenderer {
    fn viewport(&self) -> Rectangle {
        self.viewport
    }

    fn draw(&mut self, frame: &ToastFrame<'_>) -> Drawn {
        let bounds = frame.bounds(frame.constrain(self.measure(frame)));
        println!(
            "  {:>4} {:<8} {:>7.1},{:>6.1} {:>6.1}x{:<5.1} a={:.2} {}{}",
            frame.id.to_string(),
            format!("{:?}", frame.kind),
            bounds.x,
            bounds.y,
            bounds.width,
            bounds.height,
            frame.opacity,
            frame.title,
            if frame.has_body() {
                format!(": {}", frame.body.replace('\n', " / "))
            } else {
                String::new()
            },
        );
        if frame.has_custom_content() {
            frame.draw_custom_content();
        }
        Drawn::new(bounds)
    }

    fn is_hovered(&self, bounds: Rectangle) -> bool {
        self.cursor.is_some_and(|cursor| bounds.contains(cursor))
    }

    fn register_icon_font(&mut self, font: &IconFont) {
        self.icon_size = font.size;
    }
}

/// Scripted events, keyed by simulated second.
struct Script {
    upload: Option<NotificationId>,
}

impl Script {
    fn run(&mut self, manager: &Manager, renderer: &mut TextRenderer, second: u32) {
        match second {
            0 => {
                for kind in Kind::ALL {
                    manager.send(Notification::new(kind, "").with_content(format!(
                        "A {} notification",
                        kind.default_title().to_lowercase()
                    )));
                }
                self.upload = Some(
                    manager.send(
                        Notification::info("Uploading")
                            .with_content("0%")
                            .infinite()
                            .closable(false),
                    ),
                );

                let sender = manager.sender();
                let worker = thread::spawn(move || {
                    sender.send(Notification::success("Sent from a worker thread"));
                });
                if worker.join().is_err() {
                    eprintln!("Warning: worker thread panicked");
                }
            }
            1 => {
                if let Some(id) = self.upload {
                    manager.change(
                        id,
                        Notification::info("Uploading")
                            .with_content("50%\nalmost there")
                            .infinite()
                            .closable(false),
                    );
                }
                renderer.cursor = Some(Point::new(VIEWPORT.width - 60.0, VIEWPORT.height - 40.0));
            }
            3 => {
                renderer.cursor = None;
                if let Some(id) = self.upload {
                    manager.change(id, Notification::success("Upload complete"));
                    manager.close_after(id, Duration::from_secs(1));
                }
            }
            _ => {}
        }
    }
}

fn main() -> ExitCode {
    let args = match parse_args() {
        Ok(Some(args)) => args,
        Ok(None) => return ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}\n\n{HELP}");
            return ExitCode::FAILURE;
        }
    };

    let (config, warning) = config::load_from(args.config.as_deref());
    if let Some(warning) = warning {
        eprintln!("Warning: {warning}");
    }

    let mut collector = DiagnosticsCollector::default();
    let mut manager = Manager::with_style(config.to_style());
    manager.set_diagnostics(collector.handle());

    let mut renderer = TextRenderer::new();
    manager.add_icons_to_font(&mut renderer, 16.0, Vector::new(0.0, 4.0));

    let frame_time = Duration::from_secs(1) / args.fps;
    let start = Instant::now();
    let mut script = Script { upload: None };

    for frame in 0..args.frames {
        if frame % args.fps == 0 {
            script.run(&manager, &mut renderer, frame / args.fps);
        }

        let elapsed = frame_time * frame;
        println!("frame {frame} (+{} ms)", elapsed.as_millis());
        let report = manager.render_frame_at(&mut renderer, start + elapsed);
        if report.expired > 0 || report.deferred > 0 {
            println!(
                "  expired {}, deferred {}",
                report.expired, report.deferred
            );
        }
        collector.process_pending();
    }

    if args.diagnostics {
        match collector.export_json() {
            Ok(json) => println!("{json}"),
            Err(err) => {
                eprintln!("Error: failed to export diagnostics: {err}");
                return ExitCode::FAILURE;
            }
        }
    }
    ExitCode::SUCCESS
}
