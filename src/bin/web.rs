//! HTTP front end for human play.
//!
//! Serves the GUI protocol for however many concurrent seats the engine
//! runs; the engine attaches to the same lobby through the library.

use clap::Parser;
use damka::moves::Variant;
use damka::server::House;
use damka::server::Server;
use damka::session::Lobby;

#[derive(Parser)]
#[command(version, about = "HTTP front end for human play")]
struct Args {
    /// game variant the engine was built for
    #[arg(long, default_value = "american")]
    variant: String,
    /// concurrent human seats, matching the engine's game count
    #[arg(long, default_value_t = 1)]
    games: usize,
    /// listen address
    #[arg(long, default_value = "127.0.0.1:8080")]
    bind: String,
}

#[tokio::main]
async fn main() {
    damka::log();
    let args = Args::parse();
    let variant = Variant::try_from(args.variant.as_str()).expect("known variant");
    let house = House {
        lobby: Lobby::new(args.games),
        variant,
    };
    Server::run(house, &args.bind).await.unwrap();
}
