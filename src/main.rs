use anyhow::Context;
use testdoc::FixtureConfig;

fn run() -> anyhow::Result<()> {
    let config = FixtureConfig::default();
    testdoc::generate(&config)
        .with_context(|| format!("failed to create {}", config.output_path.display()))?;
    // Only reached once the file is on disk
    println!("{}", testdoc::confirmation_message(&config.output_path));
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(e) = run() {
        eprintln!("testdoc failed: {:#}", e);
        std::process::exit(1);
    }
}
