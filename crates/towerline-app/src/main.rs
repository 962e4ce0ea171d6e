//! Headless Towerline session: starts the game loop, places towers beside the
//! path as cash allows, plays a number of waves, and reports the outcome.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Parser;
use tracing_subscriber::EnvFilter;

use towerline_app::control;
use towerline_app::state::AppState;
use towerline_core::commands::PlayerCommand;
use towerline_core::config::SimConfig;
use towerline_core::enums::SpawnerState;
use towerline_core::types::Point;
use towerline_sim::maps;
use towerline_sim::path::Path;

#[derive(Parser, Debug)]
#[command(name = "towerline", about = "Run a headless tower-defense session")]
struct Args {
    /// JSON file overriding fields of the default config.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Built-in map index.
    #[arg(long, default_value_t = 0)]
    map: usize,

    /// Number of waves to play.
    #[arg(long, default_value_t = 3)]
    waves: u32,

    /// Wall-clock speed multiplier (0.1 to 4.0).
    #[arg(long, default_value_t = 1.0)]
    speed: f64,

    /// Give up after this many wall-clock seconds.
    #[arg(long, default_value_t = 300)]
    max_secs: u64,

    /// Print the final snapshot as JSON on stdout.
    #[arg(long)]
    json: bool,
}

const POLL_INTERVAL: Duration = Duration::from_millis(100);

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let mut config = match &args.config {
        Some(path) => serde_json::from_str::<SimConfig>(&std::fs::read_to_string(path)?)?,
        None => SimConfig::default(),
    };
    config.map_index = args.map;

    let path = maps::build_path(args.map, &config)?;
    let mut sites = tower_sites(&path, &config).into_iter();
    tracing::info!(map = maps::MAPS[args.map].name, waves = args.waves, "starting session");

    let state = AppState::new();
    control::start_simulation(&state, config.clone(), args.speed)?;

    let started = Instant::now();
    let mut requested_wave = 0;
    let mut final_snapshot = None;
    loop {
        std::thread::sleep(POLL_INTERVAL);
        let Some(snap) = control::get_snapshot(&state)? else {
            continue;
        };

        if snap.is_game_over() {
            tracing::warn!(wave = snap.wave, "session lost");
            final_snapshot = Some(snap);
            break;
        }

        let wave_done = snap.wave == requested_wave
            && snap.spawner.state == SpawnerState::Idle
            && snap.enemies.is_empty();
        if wave_done && snap.wave >= args.waves {
            tracing::info!(wave = snap.wave, lives = snap.lives, "all waves cleared");
            final_snapshot = Some(snap);
            break;
        }

        if snap.cash >= config.tower.cost {
            if let Some(site) = sites.next() {
                control::send_command(&state, PlayerCommand::PlaceTower { x: site.x, y: site.y })?;
            }
        }
        if wave_done {
            requested_wave += 1;
            control::send_command(&state, PlayerCommand::StartWave)?;
        }

        if started.elapsed() > Duration::from_secs(args.max_secs) {
            tracing::warn!(max_secs = args.max_secs, "time limit reached");
            final_snapshot = Some(snap);
            break;
        }
    }

    control::stop_simulation(&state)?;

    if let Some(snap) = final_snapshot {
        tracing::info!(
            cash = snap.cash,
            wave = snap.wave,
            lives = snap.lives,
            towers = snap.towers.len(),
            "session finished"
        );
        if args.json {
            println!("{}", serde_json::to_string_pretty(&snap)?);
        }
    }
    Ok(())
}

/// Candidate tower centers just outside the corridor, beside each segment's
/// midpoint, alternating sides. The engine has the final say on each one.
fn tower_sites(path: &Path, config: &SimConfig) -> Vec<Point> {
    let offset = config.corridor_width / 2.0 + config.placement_padding + 16.0;
    let mut sites = Vec::new();
    for (i, seg) in path.points().windows(2).enumerate() {
        let dir = (seg[1] - seg[0]).normalize_or_zero();
        let normal = dir.perp();
        let mid = (seg[0] + seg[1]) * 0.5;
        let side = if i % 2 == 0 { 1.0 } else { -1.0 };
        sites.push(mid + normal * offset * side);
        sites.push(mid - normal * offset * side);
    }
    sites
}
