use crate::reports;
use clap::Args;
use std::process;
use tracing::error;
use wattsmith::config::Config;
use wattsmith::selector::Selector;
use wattsmith::workout::{Category, Phase, Weekday};

#[derive(Args, Debug, Clone)]
pub struct SelectArgs {
    #[command(flatten)]
    pub config: Config,

    #[arg(short = 'C', long)]
    pub category: Category,

    #[arg(short = 'P', long)]
    pub phase: Phase,

    #[arg(short = 'D', long)]
    pub weekday: Weekday,

    #[arg(short = 's', long)]
    pub stress: f32,

    #[arg(short = 'S', long)]
    pub seed: Option<u64>,

    /// How many ranked candidates to show
    #[arg(long, default_value_t = 5)]
    pub top: usize,

    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn run(args: &SelectArgs, selector: &Selector) {
    let request = selector.request(args.category, args.phase, args.weekday, args.stress);
    let mut tracker = selector.new_tracker();
    let mut rng = match args.seed {
        Some(s) => fastrand::Rng::with_seed(s),
        None => fastrand::Rng::new(),
    };

    if !args.json && args.top > 0 {
        reports::print_ranking(&selector.rank(&request, tracker.snapshot()), args.top);
    }

    match selector.select(&request, &mut tracker, &mut rng) {
        Ok(result) if args.json => match serde_json::to_string_pretty(&result) {
            Ok(s) => println!("{}", s),
            Err(e) => {
                error!("❌ {}", e);
                process::exit(1);
            }
        },
        Ok(result) => reports::print_selection(&result),
        Err(e) => {
            error!("❌ {}", e);
            process::exit(2);
        }
    }
}
