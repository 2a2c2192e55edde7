use anyhow::Context;
use clap::Parser;
use pattern_demos::core::factory::{run_demo, run_demo_for};
use pattern_demos::domain::model::Region;
use pattern_demos::utils::logger;
use pattern_demos::{AnyOutput, CliConfig};

#[derive(Parser)]
#[command(name = "vehicle-factory")]
#[command(about = "Builds and starts vehicles from regional factories")]
struct Args {
    #[command(flatten)]
    common: CliConfig,

    /// Only run one region's line-up
    #[arg(long, value_enum)]
    region: Option<Region>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let settings = match args.common.load_settings() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("❌ {}", e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    let log = logger::init_logger(&settings.log_settings())
        .with_context(|| format!("failed to set up logging to {}", settings.log_file))?;

    let mut out = AnyOutput::for_mode(settings.output, &log);
    let result = match args.region {
        Some(region) => run_demo_for(region, &mut out),
        None => run_demo(&mut out),
    };
    result.context("vehicle demo failed")?;

    Ok(())
}
