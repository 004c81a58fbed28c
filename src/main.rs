//! Cosmos entry point
//!
//! Headless host: plays a scripted input tape against the simulation at the
//! configured tick rate, rasterizes each frame into a software framebuffer
//! and prints it to the terminal.
//!
//! Usage: `cosmos [settings.json] [--ticks N] [--quiet]`

use std::thread;

use anyhow::{Context, bail};

use cosmos::platform::{Haptics, InputScript, LogHaptics};
use cosmos::renderer::{Framebuffer, Renderer};
use cosmos::sim::{World, WorldEvent};
use cosmos::{Settings, handle_input};

const DEFAULT_SETTINGS_PATH: &str = "cosmos.json";
const DEFAULT_TICKS: u64 = 200;

struct Args {
    settings_path: String,
    ticks: u64,
    quiet: bool,
}

fn parse_args() -> anyhow::Result<Args> {
    let mut args = Args {
        settings_path: DEFAULT_SETTINGS_PATH.to_string(),
        ticks: DEFAULT_TICKS,
        quiet: false,
    };

    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--ticks" => {
                let value = iter.next().context("--ticks needs a value")?;
                args.ticks = value
                    .parse()
                    .with_context(|| format!("invalid tick count: {value}"))?;
            }
            "--quiet" | "-q" => args.quiet = true,
            flag if flag.starts_with('-') => bail!("unknown flag: {flag}"),
            path => args.settings_path = path.to_string(),
        }
    }
    Ok(args)
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Cosmos (headless) starting...");

    let args = parse_args()?;
    let settings = Settings::load_or_default(&args.settings_path);
    let seed = settings.seed.unwrap_or_else(rand::random);
    let period = settings.tick_period();

    let mut world = World::new(seed);
    let mut renderer = Renderer::new(settings.clone());
    let mut framebuffer = Framebuffer::new();
    let mut haptics = LogHaptics::default();
    let mut script = InputScript::demo(args.ticks);
    let mut kills = 0u32;

    while !world.exit_requested() {
        // Input first, then one tick, then the frame
        for event in script.due(world.ticks()) {
            handle_input(&mut world, event, &mut haptics);
        }

        world.step();

        for event in world.drain_events() {
            match event {
                WorldEvent::EnemyDestroyed { slot } => {
                    kills += 1;
                    log::info!("Enemy {slot} down ({kills} total)");
                }
                WorldEvent::CometPass { slot } => {
                    log::debug!("Comet {slot} passed the ship");
                    if settings.comet_haptics {
                        haptics.vibrate_once();
                    }
                }
                WorldEvent::PulseExpired => log::debug!("Pulse faded"),
            }
        }

        framebuffer.clear();
        renderer.render(&world, &mut framebuffer);
        if !args.quiet {
            // Home the cursor and redraw in place
            print!("\x1b[H\x1b[2J{framebuffer}");
        }

        thread::sleep(period);
    }

    log::info!(
        "Session over after {} ticks (seed {}): {} enemies destroyed, {} haptic pulses",
        world.ticks(),
        world.seed(),
        kills,
        haptics.count
    );
    Ok(())
}
