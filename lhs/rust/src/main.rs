use color_eyre::eyre::Result;
use lhs::{config, demo, telemetry};

fn main() -> Result<()> {
    color_eyre::install()?;

    let config = config::get();
    telemetry::init(config)?;

    let output = demo::run(config.get_inputs())?;
    print!("{output}");

    Ok(())
}
