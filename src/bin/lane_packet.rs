//! Lane Packet Tool
//!
//! Inspects raw audio packets and generates test packets.
//!
//! ```text
//! lane-packet inspect <packet_file>
//! lane-packet tone <lane> <freq_hz> <amplitude> <out_file>
//! ```

use anyhow::{bail, Context, Result};
use std::path::Path;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use lane_audio_packet::{
    codec::{inspect, PacketEncoder},
    config::AppConfig,
    constants::*,
    protocol::Frame,
};

fn main() -> Result<()> {
    // Load config before logging so its log level can apply; report the
    // outcome once the subscriber is installed
    let config_path = AppConfig::default_path();
    let loaded = match &config_path {
        Some(path) => AppConfig::load_optional(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => None,
    };
    let from_file = loaded.is_some();
    let config = loaded.unwrap_or_default();

    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| config.log_level.clone()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match (&config_path, from_file) {
        (Some(path), true) => tracing::debug!("Loaded config from {}", path.display()),
        (Some(path), false) => {
            tracing::debug!("No config at {}, using defaults", path.display())
        }
        (None, _) => tracing::debug!("No config directory available, using defaults"),
    }

    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.iter().map(String::as_str).collect::<Vec<_>>().as_slice() {
        ["inspect", file] => run_inspect(Path::new(file)),
        ["tone", lane, freq, amplitude, out] => {
            let freq: f32 = freq.parse().context("invalid frequency")?;
            let amplitude: f32 = amplitude.parse().context("invalid amplitude")?;
            run_tone(&config, lane, freq, amplitude, Path::new(out))
        }
        _ => {
            eprintln!("usage:");
            eprintln!("  lane-packet inspect <packet_file>");
            eprintln!("  lane-packet tone <lane> <freq_hz> <amplitude> <out_file>");
            bail!("invalid arguments");
        }
    }
}

fn run_inspect(path: &Path) -> Result<()> {
    let raw = std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    tracing::debug!("Read {} bytes from {}", raw.len(), path.display());

    let summary = inspect(&raw).with_context(|| format!("{} is not a valid packet", path.display()))?;
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}

fn run_tone(config: &AppConfig, lane: &str, freq: f32, amplitude: f32, out: &Path) -> Result<()> {
    let encoder = PacketEncoder::new(config.codec.clone());
    let step = 2.0 * std::f32::consts::PI * freq / SAMPLE_RATE as f32;
    let frame = Frame::from_fn(|i| (i as f32 * step).sin() * amplitude);

    let packet = encoder.encode(&frame, lane, &[])?;
    std::fs::write(out, &packet).with_context(|| format!("failed to write {}", out.display()))?;

    tracing::info!(
        "Wrote {} byte packet (type 0x{:02x}) for lane {:?} to {}",
        packet.len(),
        packet[0],
        lane,
        out.display()
    );
    Ok(())
}
