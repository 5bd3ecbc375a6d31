//! finger_paint — interactive entry point.

use clap::Parser;
use finger_paint::app::run;
use finger_paint::config::{AppConfig, Cli, InputMode};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "finger_paint=info,stroke_log=info,hand_gesture=warn".into()),
        )
        .init();

    let cfg = AppConfig::from(cli);

    println!();
    println!("╔══════════════════════════════════════════════════════════════╗");
    println!("║            Finger Paint — Gesture Drawing Canvas             ║");
    println!("╚══════════════════════════════════════════════════════════════╝");
    println!();

    match &cfg.input {
        InputMode::Simulation { record: None } =>
            println!("  Mode: mouse/keyboard simulation"),
        InputMode::Simulation { record: Some(p) } =>
            println!("  Mode: mouse/keyboard simulation, recording to {}", p.display()),
        InputMode::Replay { path, .. } =>
            println!("  Mode: replaying {}", path.display()),
    }
    println!("  Canvas: {}×{} @ {} fps   export: {}",
        cfg.size.width, cfg.size.height, cfg.fps, cfg.export_path.display());
    println!();

    run(cfg)
}
