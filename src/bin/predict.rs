use std::env;
use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use stanza::renderer::console::Console;
use stanza::renderer::Renderer;
use tracing::{debug, info};

use scorecast::data;
use scorecast::model::{Config, Engine, DEFAULT_MAX_GOALS, DEFAULT_OU_LINE};
use scorecast::print;
use scorecast::rates::Fixture;

#[derive(Debug, clap::Parser, Clone)]
struct Args {
    /// file to source the team ratings from
    #[clap(short = 'r', long, default_value = "ratings.json")]
    ratings: PathBuf,

    /// file to source the league parameters from
    #[clap(short = 'l', long, default_value = "league_params.json")]
    leagues: PathBuf,

    /// home team identifier
    #[clap(long)]
    home: String,

    /// away team identifier
    #[clap(long)]
    away: String,

    /// league identifier
    #[clap(long)]
    league: String,

    /// fixture date; reported back as given, not modelled
    #[clap(long, default_value = "")]
    date: String,

    /// over/under line, e.g. 2.5
    #[clap(long = "ou-line", default_value_t = DEFAULT_OU_LINE)]
    ou_line: f64,

    /// upper goal cutoff per side
    #[clap(long = "max-goals", default_value_t = DEFAULT_MAX_GOALS)]
    max_goals: usize,

    /// emit the raw JSON mapping instead of a table
    #[clap(long)]
    json: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    if env::var("RUST_BACKTRACE").is_err() {
        env::set_var("RUST_BACKTRACE", "full")
    }
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info")
    }
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    debug!("args: {args:?}");

    let ratings = data::load_ratings(&args.ratings, &args.leagues)?;
    let engine = Engine::new(ratings);
    let fixture = Fixture {
        home_team: args.home,
        away_team: args.away,
        league: args.league,
        date: args.date,
    };
    let config = Config {
        ou_line: args.ou_line,
        max_goals: args.max_goals,
    };
    let prediction = engine.predict(&fixture, &config)?;
    info!(
        "'{}' vs '{}' in '{}': λ_home={:.3}, λ_away={:.3}",
        fixture.home_team,
        fixture.away_team,
        fixture.league,
        prediction.lambda_home,
        prediction.lambda_away
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&prediction)?);
    } else {
        let table = print::tabulate_prediction(&prediction);
        println!("{}", Console::default().render(&table));
    }
    Ok(())
}
