/// Example: Print screen-space vertices for a few frames without a terminal UI
///
/// Usage: cargo run --example print_frames -- [frame-count]
use std::env;
use std::process::ExitCode;

use mt3_terminal::{readout_columns, Scene, SceneConfig};

fn main() -> ExitCode {
    let frames = match env::args().nth(1).map(|arg| arg.parse::<u32>()) {
        None => 5,
        Some(Ok(frames)) => frames,
        Some(Err(err)) => {
            eprintln!("Invalid frame count: {}", err);
            return ExitCode::FAILURE;
        }
    };

    let mut scene = Scene::new(SceneConfig::default());
    println!("cross: {}", readout_columns(scene.readout()));

    for frame in 0..frames {
        scene.advance(None);
        match scene.project() {
            Ok(screen) => {
                let [a, b, c] = screen.vertices;
                println!(
                    "frame {:>3}: ({:.1}, {:.1}) ({:.1}, {:.1}) ({:.1}, {:.1})",
                    frame, a.x, a.y, b.x, b.y, c.x, c.y
                );
            }
            Err(err) => println!("frame {:>3}: skipped ({})", frame, err),
        }
    }

    ExitCode::SUCCESS
}
