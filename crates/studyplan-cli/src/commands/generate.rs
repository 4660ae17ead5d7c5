use std::path::PathBuf;

use clap::Args;
use studyplan_core::output::{print_plan, save_to_file};
use studyplan_core::{Config, Course, EntryOrder, PlanRequest};

#[derive(Args)]
pub struct GenerateArgs {
    /// Course as NAME:UNITS (repeatable)
    #[arg(short, long = "course", value_name = "NAME:UNITS", required = true)]
    courses: Vec<Course>,
    /// Study hours available per day
    #[arg(long, allow_negative_numbers = true)]
    hours: f64,
    /// Number of days in the plan
    #[arg(long)]
    days: u64,
    /// First day of the plan (YYYY-MM-DD)
    #[arg(long)]
    start: String,
    /// Plan file path (defaults to output.filename)
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Do not write the plan file
    #[arg(long)]
    no_file: bool,
    /// Do not print the plan
    #[arg(short, long)]
    quiet: bool,
    /// Seed for the per-day course order
    #[arg(long, conflicts_with = "ordered")]
    seed: Option<u64>,
    /// Keep courses in the given order every day
    #[arg(long)]
    ordered: bool,
    /// Print the plan as JSON instead of text
    #[arg(long)]
    json: bool,
}

impl GenerateArgs {
    fn entry_order(&self, config: &Config) -> EntryOrder {
        if self.ordered {
            EntryOrder::Fixed
        } else if let Some(seed) = self.seed {
            EntryOrder::Shuffled { seed: Some(seed) }
        } else {
            config.entry_order()
        }
    }
}

pub fn run(args: GenerateArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let order = args.entry_order(&config);

    let plan = PlanRequest::new(args.courses, args.hours, args.days, args.start)
        .with_order(order)
        .generate()?;

    if config.output.write_file && !args.no_file {
        let path = args
            .output
            .unwrap_or_else(|| PathBuf::from(&config.output.filename));
        save_to_file(&plan, &path)?;
        eprintln!("Study plan saved to {}", path.display());
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
    } else if config.output.print_console && !args.quiet {
        print_plan(&plan)?;
    }
    Ok(())
}
