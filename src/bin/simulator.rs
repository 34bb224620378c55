//! Strays Headless Dungeon Simulator
//!
//! Generates dungeons for a synthetic party and fights every room with the
//! same resolver the game uses, for balance checks.
//!
//! Usage:
//!   cargo run --bin simulator -- [OPTIONS]
//!
//! Options:
//!   --seed N        RNG seed (default: 42)
//!   --runs N        Number of runs with incrementing seeds (default: 1)
//!   --level N       Level of every cat in the party (default: 3)
//!   --party N       Number of cats in the party (default: 3)
//!   --theme NAME    Dungeon theme (default: random per run)
//!   --config FILE   JSON config overriding the built-in tables
//!   --verbose       Per-room logging
//!   --quiet         Only the aggregate summary

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use strays::character::{StatBlock, StatKind};
use strays::combat::{resolve_room, Participant, Party};
use strays::core::config::GameConfig;
use strays::core::random::{pick_uniform, random_int, RandomSource};
use strays::dungeon::{DungeonGenerator, DungeonTheme};
use strays::enemies::base_stat_value;
use strays::Result;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

// ── CLI Configuration ────────────────────────────────────────────────

struct SimConfig {
    seed: u64,
    runs: u32,
    level: u32,
    party: u32,
    theme: Option<String>,
    config_path: Option<String>,
    verbose: bool,
    quiet: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            runs: 1,
            level: 3,
            party: 3,
            theme: None,
            config_path: None,
            verbose: false,
            quiet: false,
        }
    }
}

fn parse_args() -> SimConfig {
    let args: Vec<String> = std::env::args().collect();
    let mut config = SimConfig::default();
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--seed" => {
                i += 1;
                config.seed = arg_value(&args, i).parse().expect("--seed requires a number");
            }
            "--runs" => {
                i += 1;
                config.runs = arg_value(&args, i).parse().expect("--runs requires a number");
            }
            "--level" => {
                i += 1;
                config.level = arg_value(&args, i).parse().expect("--level requires a number");
            }
            "--party" => {
                i += 1;
                config.party = arg_value(&args, i).parse().expect("--party requires a number");
            }
            "--theme" => {
                i += 1;
                config.theme = Some(arg_value(&args, i).to_string());
            }
            "--config" => {
                i += 1;
                config.config_path = Some(arg_value(&args, i).to_string());
            }
            "--verbose" => config.verbose = true,
            "--quiet" => config.quiet = true,
            "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {other}");
                print_usage();
                std::process::exit(1);
            }
        }
        i += 1;
    }
    config
}

fn arg_value(args: &[String], i: usize) -> &str {
    match args.get(i) {
        Some(value) => value.as_str(),
        None => {
            eprintln!("Missing value for {}", args[i - 1]);
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    eprintln!(
        "Strays Headless Dungeon Simulator\n\
         \n\
         Usage: simulator [OPTIONS]\n\
         \n\
         Options:\n\
         \x20 --seed N        RNG seed (default: 42)\n\
         \x20 --runs N        Number of runs with incrementing seeds (default: 1)\n\
         \x20 --level N       Level of every cat in the party (default: 3)\n\
         \x20 --party N       Number of cats in the party (default: 3)\n\
         \x20 --theme NAME    Dungeon theme (default: random per run)\n\
         \x20 --config FILE   JSON config overriding the built-in tables\n\
         \x20 --verbose       Per-room logging\n\
         \x20 --quiet         Only the aggregate summary\n\
         \x20 --help, -h      Show this help"
    );
}

// ── Simulation Statistics ────────────────────────────────────────────

#[derive(Debug, Clone, Default)]
struct RunStats {
    theme: String,
    rooms: usize,
    rooms_cleared: usize,
    completed: bool,
    xp: u64,
    casualties: usize,
    checks_passed: u32,
    checks_total: u32,
    loot: usize,
}

/// A cat with random spread on top of the level baseline.
fn synthetic_cat(id: u64, level: u32, rng: &mut impl RandomSource) -> (StatBlock, Participant) {
    let mut stats = StatBlock::uniform(base_stat_value(level));
    for stat in StatKind::all() {
        stats.add(stat, random_int(0, 3, rng));
    }
    let participant = Participant::from_stats(id, format!("Stray {id}"), level, &stats, u32::MAX);
    (stats, participant)
}

fn run_simulation(
    sim: &SimConfig,
    game: &GameConfig,
    seed: u64,
) -> Result<RunStats> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let (stats, participants): (Vec<StatBlock>, Vec<Participant>) = (1..=sim.party as u64)
        .map(|id| synthetic_cat(id, sim.level, &mut rng))
        .unzip();
    let party = Party::new(participants);

    let theme: &DungeonTheme = match &sim.theme {
        Some(name) => game.theme(name)?,
        None => pick_uniform(&game.themes, &mut rng)?,
    };

    let generator = DungeonGenerator::new(game);
    let mut dungeon = generator.generate(theme, &party.levels(), &mut rng)?;

    let mut run = RunStats {
        theme: theme.name.clone(),
        rooms: dungeon.room_count(),
        ..Default::default()
    };

    loop {
        if let Some(stat) = dungeon
            .current_room()
            .and_then(|r| r.environment_modifier.as_ref())
            .map(|m| m.affected_stat)
        {
            let best = stats.iter().map(|s| s.get(stat)).max().unwrap_or(0);
            if let Some(check) = dungeon.check_current_room(best, &mut rng) {
                run.checks_total += 1;
                if check.passed {
                    run.checks_passed += 1;
                }
            }
        }

        let outcome = resolve_room(&mut dungeon, &party, &mut rng)?;
        if sim.verbose {
            println!(
                "  room {}/{}: {} ({} vs {:.0}, luck {:.2})",
                dungeon.current_depth(),
                run.rooms,
                if outcome.victory { "won" } else { "lost" },
                outcome.enemy_strength,
                outcome.player_strength as f64 * outcome.random_factor,
                outcome.random_factor
            );
        }

        if !outcome.victory {
            run.casualties += outcome.casualties.len();
            break;
        }

        run.rooms_cleared += 1;
        run.xp += outcome.total_xp() as u64;
        run.loot += outcome.loot.len();

        if dungeon.completed {
            run.completed = true;
            break;
        }
        dungeon.advance();
    }

    Ok(run)
}

fn print_summary(run: &RunStats, seed: u64) {
    println!("============================================================");
    println!("  Strays Dungeon Report  (seed={seed})");
    println!("============================================================");
    println!("Theme: {}", run.theme);
    println!(
        "Rooms cleared: {}/{}  {}",
        run.rooms_cleared,
        run.rooms,
        if run.completed { "(completed)" } else { "(retreated)" }
    );
    println!("XP earned: {}", run.xp);
    println!("Loot found: {}", run.loot);
    println!(
        "Hazard checks passed: {}/{}",
        run.checks_passed, run.checks_total
    );
    println!("Casualties: {}", run.casualties);
    println!();
}

fn print_multi_run_summary(all: &[RunStats]) {
    let runs = all.len().max(1) as f64;
    let completed = all.iter().filter(|r| r.completed).count();
    let cleared: usize = all.iter().map(|r| r.rooms_cleared).sum();
    let rooms: usize = all.iter().map(|r| r.rooms).sum();
    let xp: u64 = all.iter().map(|r| r.xp).sum();
    let casualties: usize = all.iter().map(|r| r.casualties).sum();

    println!("============================================================");
    println!("  Aggregate Results ({} runs)", all.len());
    println!("============================================================");
    println!(
        "Win rate: {:.1}% ({completed}/{})",
        completed as f64 / runs * 100.0,
        all.len()
    );
    println!("Rooms cleared: {cleared}/{rooms}");
    println!("Avg XP per run: {:.1}", xp as f64 / runs);
    println!("Casualties: {casualties}");
}

fn main() {
    let sim = parse_args();

    let default_level = if sim.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let game = match &sim.config_path {
        Some(path) => match GameConfig::load(path) {
            Ok(config) => config,
            Err(err) => {
                error!(%err, "could not load config");
                std::process::exit(1);
            }
        },
        None => GameConfig::default(),
    };

    info!(
        seed = sim.seed,
        runs = sim.runs,
        level = sim.level,
        party = sim.party,
        "starting simulation"
    );

    let mut all = Vec::with_capacity(sim.runs as usize);
    for run in 0..sim.runs {
        let seed = sim.seed + run as u64;
        if sim.verbose {
            eprintln!("--- Run {}/{} (seed={seed}) ---", run + 1, sim.runs);
        }
        match run_simulation(&sim, &game, seed) {
            Ok(stats) => {
                if !sim.quiet {
                    print_summary(&stats, seed);
                }
                all.push(stats);
            }
            Err(err) => {
                error!(%err, seed, "run failed");
                std::process::exit(1);
            }
        }
    }

    if all.len() > 1 || sim.quiet {
        print_multi_run_summary(&all);
    }
}
