use anyhow::Context;
use clap::Parser;
use pattern_demos::utils::logger;
use pattern_demos::{
    AnyOutput, CliConfig, CommandLoop, Library, LibraryManager, OutputMode, TextBookDisplay,
};

#[derive(Parser)]
#[command(name = "library-manager")]
#[command(about = "In-memory book library driven by add/remove/show/exit commands")]
struct Args {
    #[command(flatten)]
    common: CliConfig,
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

    tracing::debug!("Library manager settings: {:?}", settings);
    if settings.output == OutputMode::Log {
        tracing::debug!("Messages are logged to {}", log.log_file().display());
    }

    let display = TextBookDisplay::new(AnyOutput::for_mode(settings.output, &log));
    let mut manager = LibraryManager::new(Library::new(), display);
    let mut out = AnyOutput::for_mode(settings.output, &log);

    let stdin = std::io::stdin();
    let mut commands = CommandLoop::new(stdin.lock(), std::io::stdout());
    commands
        .run(&mut manager, &mut out)
        .context("command loop failed")?;

    tracing::debug!("Library manager finished with {} book(s)", manager.store().len());
    Ok(())
}
