use crate::reports;
use clap::Args;
use wattsmith::library::Library;

#[derive(Args, Debug, Clone)]
pub struct ValidateArgs {
    /// Only list workouts whose id contains this text
    #[arg(long)]
    pub filter: Option<String>,
}

pub fn run(args: &ValidateArgs, library: &Library) {
    println!("\n🔎 === LIBRARY AUDIT === 🔎");
    match &args.filter {
        Some(filter) => {
            let needle = filter.to_lowercase();
            let hits: Vec<_> = library
                .entries()
                .iter()
                .filter(|w| w.id.to_lowercase().contains(&needle))
                .collect();
            println!(
                "{} of {} workouts match '{}'",
                hits.len(),
                library.len(),
                filter
            );
            for w in hits {
                println!(
                    "  {} ({}, {:.0} min, stress {:.0})",
                    w.id, w.category, w.duration_min, w.stress
                );
            }
        }
        None => reports::print_library_audit(library),
    }
    println!("\n✅ All {} workouts passed validation.", library.len());
}
