use rand::{rngs::SmallRng, SeedableRng};
use seabattle::{cpu_match, init_logging, GameConfig};
use serde_json::json;

fn main() -> anyhow::Result<()> {
    init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <seed1> <seed2>", args[0]);
        std::process::exit(1);
    }
    let seed1: u64 = args[1].parse()?;
    let seed2: u64 = args[2].parse()?;

    let mut rng1 = SmallRng::seed_from_u64(seed1);
    let mut rng2 = SmallRng::seed_from_u64(seed2);

    let summary = cpu_match(&GameConfig::standard(), [&mut rng1, &mut rng2], |_, _| {})?;

    let winner = if summary.winner == 0 { "player1" } else { "player2" };
    let result = json!({
        "player1": {"shots": summary.shots[0]},
        "player2": {"shots": summary.shots[1]},
        "winner": winner,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
