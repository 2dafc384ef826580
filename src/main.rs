use std::io;
use std::ops::RangeInclusive;

use clap::{Parser, Subcommand, ValueEnum};
use rand::rngs::SmallRng;
use rand::SeedableRng;

use seabattle::{
    coord_to_string, cpu_match, describe_report, init_logging, render_fleet_board, CliGame,
    GameConfig, GameSession, GameStatus, TokioPacer, DEFAULT_COLUMNS, DEFAULT_ROWS,
    DEFAULT_SHIP_COUNT, DEFAULT_SHIP_LENGTH,
};

#[derive(Parser)]
#[command(author, version, about = "Grid-based naval combat against the computer", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum FleetKind {
    /// Lengths 4, 4, 3, 3, 2.
    Standard,
    /// Five ships of length 2.
    Uniform,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the computer on this terminal.
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value_t = DEFAULT_COLUMNS)]
        columns: usize,
        #[arg(long, default_value_t = DEFAULT_ROWS)]
        rows: usize,
        #[arg(long, value_enum, default_value_t = FleetKind::Standard)]
        fleet: FleetKind,
        #[arg(long, value_parser = parse_delay, default_value = "500..2000",
              help = "CPU thinking time in milliseconds, MIN..MAX")]
        delay_ms: RangeInclusive<u64>,
    },
    /// Watch two computer players fight it out.
    Demo {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

fn parse_delay(s: &str) -> Result<RangeInclusive<u64>, String> {
    let (min, max) = match s.split_once("..") {
        Some((a, b)) => (a, b.trim_start_matches('=')),
        None => (s, s),
    };
    let min: u64 = min.trim().parse().map_err(|_| format!("invalid delay '{}'", s))?;
    let max: u64 = max.trim().parse().map_err(|_| format!("invalid delay '{}'", s))?;
    if min > max {
        return Err(format!("delay minimum {} exceeds maximum {}", min, max));
    }
    Ok(min..=max)
}

fn make_rng(seed: Option<u64>) -> SmallRng {
    if let Some(s) = seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            seed,
            columns,
            rows,
            fleet,
            delay_ms,
        } => {
            let config = match fleet {
                FleetKind::Standard => GameConfig::standard(),
                FleetKind::Uniform => GameConfig::uniform(DEFAULT_SHIP_COUNT, DEFAULT_SHIP_LENGTH),
            }
            .with_dimensions(columns, rows)
            .with_cpu_delay_ms(delay_ms);
            config.validate().map_err(|e| anyhow::anyhow!(e))?;

            let mut rng = make_rng(seed);
            let mut session = GameSession::new(config, &mut rng, Box::new(TokioPacer))?;
            let stdin = io::stdin();
            let mut game = CliGame::new(stdin.lock(), io::stdout());
            let status = game.run(&mut session, &mut rng).await?;
            if status == GameStatus::Lost {
                println!("Enemy fleet was:");
                print!("{}", render_fleet_board(session.cpu().ship_board()));
            }
        }
        Commands::Demo { seed } => {
            println!("Starting CPU vs CPU game...");
            let mut rng1 = make_rng(seed);
            let mut rng2 = match seed {
                Some(s) => SmallRng::seed_from_u64(s.wrapping_add(1)),
                None => make_rng(None),
            };
            let config = GameConfig::standard();
            let summary = cpu_match(&config, [&mut rng1, &mut rng2], |shooter, report| {
                println!(
                    "Player {} fires at {}: {}",
                    shooter + 1,
                    coord_to_string(report.target),
                    describe_report(report)
                );
            })?;
            println!(
                "Player {} wins ({} vs {} shots)",
                summary.winner + 1,
                summary.shots[0],
                summary.shots[1]
            );
        }
    }
    Ok(())
}
