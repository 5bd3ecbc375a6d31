//! gesture_probe — classify a recorded landmark session frame by frame.
//!
//! Reads JSON-lines landmark frames from a file (or stdin) and prints, for
//! every frame, each hand's index-tip pixel position and gesture label.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use hand_gesture::{classify, wire, CaptureSize, Gesture, Thresholds};

#[derive(Parser, Debug)]
#[command(name = "gesture_probe", about = "Print per-frame gesture labels for a landmark recording")]
struct Cli {
    /// JSON-lines recording; `-` or omitted reads stdin
    input: Option<PathBuf>,

    /// Capture width the landmarks are scaled to
    #[arg(long, default_value_t = 1280)]
    width: u32,

    /// Capture height the landmarks are scaled to
    #[arg(long, default_value_t = 720)]
    height: u32,

    /// Only print frames whose labels differ from the previous frame
    #[arg(long)]
    changes: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hand_gesture=warn".into()),
        )
        .with_writer(io::stderr)
        .init();

    let reader: Box<dyn BufRead> = match cli.input.as_deref() {
        None => Box::new(BufReader::new(io::stdin())),
        Some(p) if p.as_os_str() == "-" => Box::new(BufReader::new(io::stdin())),
        Some(p) => Box::new(BufReader::new(
            File::open(p).with_context(|| format!("opening {}", p.display()))?,
        )),
    };

    let size = CaptureSize::new(cli.width, cli.height);
    let thresholds = Thresholds::default();

    println!("  frame  hands  labels");
    println!("  ─────  ─────  ──────────────────────────────────────────");

    let mut previous: Option<Vec<Gesture>> = None;
    let mut counts = [0usize; 3];

    for (n, line) in reader.lines().enumerate() {
        let line = line.context("reading landmark stream")?;
        if line.trim().is_empty() { continue; }

        let hands = wire::read_frame_lenient(&line);
        counts[hands.len().min(2)] += 1;

        let pixels: Vec<_> = hands.iter().map(|h| h.to_pixels(size)).collect();
        let labels: Vec<Gesture> = pixels.iter().map(|p| classify(p, &thresholds)).collect();

        if cli.changes && previous.as_ref() == Some(&labels) { continue; }

        let described: Vec<String> = pixels.iter().zip(labels.iter())
            .map(|(p, g)| {
                let tip = p.index_tip();
                format!("({:>4},{:>4}) {:<10}", tip.x, tip.y, g.as_str())
            })
            .collect();
        println!("  {:>5}  {:>5}  {}", n, hands.len(), described.join("  "));

        previous = Some(labels);
    }

    println!();
    println!("  frames with 0 / 1 / 2 hands: {} / {} / {}", counts[0], counts[1], counts[2]);
    Ok(())
}
