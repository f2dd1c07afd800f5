use lib::cubes::{self, Budget, Game};
use lib::prelude::*;

fn main() -> Result<()> {
    Opts::parse()?;

    let input = lib::input!("d02.txt");
    let games = parse(&input)?;
    log::info!("{}: {} games", input.path(), games.len());

    let budget = Budget::new(12, 13, 14);

    println!("{}", cubes::sum_feasible_ids(&games, &budget));
    println!("{}", cubes::sum_powers(&games));
    Ok(())
}

/// Parse input lines.
fn parse(input: &Input) -> Result<Vec<Game>> {
    let mut games = Vec::new();

    for (n, line) in input.lines() {
        let game = cubes::parse_game(line)
            .with_context(|| anyhow!("{}:{n}: bad game record", input.path()))?;
        games.push(game);
    }

    Ok(games)
}
