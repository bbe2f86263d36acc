//! # VPad Bridge
//!
//! Drive a remote game-streaming session with on-screen virtual gamepads.
//!
//! This binary replays a scripted touch stream through a controller profile
//! and forwards the resulting key/mouse events to the streaming server's
//! control channel. It exists to exercise the engine end to end against a
//! real server without a touchscreen: the same session/dispatch path an
//! embedding UI would use.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

use vpad_bridge::config::Config;
use vpad_bridge::error::VpadError;
use vpad_bridge::input::event::{PointerAction, TouchEvent};
use vpad_bridge::input::panel::ClickPolicy;
use vpad_bridge::profile::{self, ControllerSession, TouchTarget};
use vpad_bridge::transport;

/// Default configuration file path
const CONFIG_PATH: &str = "config/default.toml";

/// One scripted touch sample.
///
/// JSONL, one record per line:
/// `{"t_ms": 120, "pad": 0, "action": "down", "x": 40.0, "y": 144.0}`
/// Records without a `pad` field target the open panel.
#[derive(Debug, Clone, Deserialize)]
struct ReplayRecord {
    /// Milliseconds from replay start.
    t_ms: u64,
    #[serde(default)]
    pad: Option<usize>,
    action: ReplayAction,
    x: f32,
    y: f32,
    #[serde(default = "default_pointers")]
    pointers: u8,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
enum ReplayAction {
    Down,
    Move,
    Up,
}

fn default_pointers() -> u8 {
    1
}

impl ReplayRecord {
    fn target(&self) -> TouchTarget {
        match self.pad {
            Some(index) => TouchTarget::Pad(index),
            None => TouchTarget::Panel,
        }
    }

    fn touch(&self) -> TouchEvent {
        let action = match self.action {
            ReplayAction::Down => PointerAction::Down,
            ReplayAction::Move => PointerAction::Move,
            ReplayAction::Up => PointerAction::Up,
        };
        TouchEvent {
            action,
            x: self.x,
            y: self.y,
            pointer_count: self.pointers,
        }
    }
}

/// Loads a JSONL touch script, preserving record order.
fn load_script(path: &str) -> vpad_bridge::error::Result<Vec<ReplayRecord>> {
    let contents = std::fs::read_to_string(path)?;
    let mut records = Vec::new();
    for (lineno, line) in contents.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let record: ReplayRecord = serde_json::from_str(line).map_err(|e| {
            VpadError::Replay(format!("{path}:{}: {e}", lineno + 1))
        })?;
        records.push(record);
    }
    if records.is_empty() {
        return Err(VpadError::Replay(format!("{path}: script has no records")));
    }
    Ok(records)
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into())
        )
        .init();

    info!("VPad Bridge v{} starting...", env!("CARGO_PKG_VERSION"));

    // Configuration: fall back to defaults when no file is present
    let config = match Config::load(CONFIG_PATH) {
        Ok(config) => config,
        Err(VpadError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
            warn!("no config at {}, using defaults", CONFIG_PATH);
            Config::default()
        }
        Err(e) => return Err(e).context("loading configuration"),
    };

    // Resolve the controller profile per the configured fallback policy
    let profile = if config.profile.fallback_to_default {
        profile::resolve_or_default(&config.profile.default)
    } else {
        profile::resolve(&config.profile.default).context("resolving profile")?
    };
    info!("profile: {} ({})", profile.name, profile.description);

    // Build the live session at the configured view size
    let policy = ClickPolicy {
        max_duration: Duration::from_millis(config.click.detection_time_ms),
        max_dist_sq: config.click.detection_dist_px2,
    };
    let mut session =
        ControllerSession::with_tuning(profile, config.pad.hub_ratio, policy)
            .context("building controller session")?;
    session.layout_default(config.view.width as f32, config.view.height as f32);

    // Touch script
    let records = load_script(&config.replay.script).context("loading touch script")?;
    info!("loaded {} touch records from {}", records.len(), config.replay.script);

    // Control channel
    let protocol: transport::ControlProtocol = config
        .remote
        .protocol
        .parse()
        .context("parsing control protocol")?;
    let mut sender = transport::connect(protocol, &config.remote.host, config.remote.port)
        .await
        .context("connecting control channel")?;
    sender
        .mapper_mut()
        .set_view(config.view.width as f32, config.view.height as f32);
    sender
        .mapper_mut()
        .set_remote(config.remote.screen_width, config.remote.screen_height);

    info!("replaying {} touches; press Ctrl+C to abort", records.len());

    let start = Instant::now();
    let mut touch_count: u64 = 0;
    let mut event_count: u64 = 0;
    let mut last_log_count: u64 = 0;

    // Main replay loop
    for record in &records {
        let due = start + Duration::from_millis(record.t_ms);

        tokio::select! {
            _ = tokio::time::sleep_until(tokio::time::Instant::from_std(due)) => {
                let now = Instant::now();
                let events = session.dispatch(record.target(), &record.touch(), now);
                touch_count += 1;
                for event in &events {
                    match sender.send(event).await {
                        Ok(true) => event_count += 1,
                        Ok(false) => debug!("event skipped: no screen geometry"),
                        Err(e) => {
                            warn!("send failed: {}", e);
                        }
                    }
                }
                if event_count - last_log_count >= config.replay.log_interval_events {
                    info!("replayed {} touches, sent {} events", touch_count, event_count);
                    last_log_count = event_count;
                }
            }

            // Handle Ctrl+C for graceful shutdown
            _ = tokio::signal::ctrl_c() => {
                info!("Received Ctrl+C, shutting down...");
                break;
            }
        }
    }

    sender.flush().await.context("flushing control channel")?;
    info!(
        "replay finished: {} touches in, {} control events out",
        touch_count, event_count
    );

    Ok(())
}
