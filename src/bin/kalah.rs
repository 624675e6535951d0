use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, BufRead, Write};

use kalah::{
    GameId, GameService, GameStatus, MemoryGameStore, RandomIds, ServiceConfig, SystemClock,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Play Kalah against a friend in the terminal", long_about = None)]
struct Args {
    /// Seed for game identifiers (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Host used in game URLs (overrides KALAH_HOST)
    #[arg(long)]
    host: Option<String>,

    /// Port used in game URLs (overrides KALAH_PORT)
    #[arg(long)]
    port: Option<u16>,
}

type Service = GameService<MemoryGameStore, RandomIds, SystemClock>;

fn print_game(service: &Service, id: &GameId) -> Result<()> {
    let game = service.game(id)?;
    println!("\n{}\n", game.board);
    match game.status {
        GameStatus::Running => println!("{} to move.", game.next_player),
        GameStatus::Finished => {
            let result = game.result().context("finished game without a result")?;
            println!("Game over: {:?}", result);
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut config = ServiceConfig::from_env()?;
    if let Some(host) = args.host {
        config = config.with_host(host);
    }
    if let Some(port) = args.port {
        config = config.with_port(port);
    }

    let ids = match args.seed {
        Some(seed) => RandomIds::seeded(seed),
        None => RandomIds::new(),
    };
    let service = GameService::new(config, MemoryGameStore::new(), ids, SystemClock);

    let created = service.create_game()?;
    let id = GameId::new(created.id);
    println!("Created game {} ({})", id, service.config().game_url(&id));
    println!("Player One sows from pits 1-6, Player Two from pits 8-13. Ctrl-D quits.");
    print_game(&service, &id)?;

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("pit> ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        let pit: usize = match input.parse() {
            Ok(pit) => pit,
            Err(_) => {
                println!("Enter a pit number, e.g. 3");
                continue;
            }
        };

        match service.make_move(&id, pit) {
            Ok(_) => print_game(&service, &id)?,
            Err(err) => println!("{} ({})", err, err.code()),
        }

        if service.game(&id)?.status == GameStatus::Finished {
            break;
        }
    }

    Ok(())
}
