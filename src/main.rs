use anyhow::Context;
use log::info;

use space_battle::cli::args;
use space_battle::services::game::Game;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = args::parse();
    let config = args.config();
    info!("config: {:?}", config);

    let mut game = Game::new(&config);
    let reason = if args.headless {
        let mut stdout = std::io::stdout();
        game.run_headless(args.turns, &mut stdout)
            .context("headless run failed")?
    } else {
        game.run().context("terminal game failed")?
    };

    println!("GOODBYE, CAPTAIN. ({:?})", reason);
    Ok(())
}
