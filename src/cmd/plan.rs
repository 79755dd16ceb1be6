use crate::reports;
use clap::Args;
use std::process;
use tracing::{error, info};
use wattsmith::config::Config;
use wattsmith::plan::{generate_plans, PlanSkeleton};
use wattsmith::selector::Selector;

#[derive(Args, Debug, Clone)]
pub struct PlanArgs {
    #[command(flatten)]
    pub config: Config,

    /// Skeleton file: one athlete object or an array of them
    #[arg(short = 'k', long)]
    pub skeleton: String,

    #[arg(short = 'S', long)]
    pub seed: Option<u64>,

    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn run(args: &PlanArgs, selector: &Selector) {
    let skeletons = PlanSkeleton::load_all(&args.skeleton).unwrap_or_else(|e| {
        error!("❌ Failed to load skeleton '{}': {}", args.skeleton, e);
        process::exit(1);
    });
    info!(
        "🗓️  Generating {} plan(s) from {}",
        skeletons.len(),
        args.skeleton
    );

    let plans = generate_plans(selector, &skeletons, args.seed).unwrap_or_else(|e| {
        error!("❌ Plan generation aborted: {}", e);
        process::exit(1);
    });

    if args.json {
        match serde_json::to_string_pretty(&plans) {
            Ok(s) => println!("{}", s),
            Err(e) => {
                error!("❌ {}", e);
                process::exit(1);
            }
        }
        return;
    }

    for report in &plans {
        reports::print_plan(report);
    }
}
