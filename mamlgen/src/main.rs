//! CLI entrypoint for `mamlgen`.

mod cli;

use clap::Parser;

use mamlgen::error::MamlgenError;
use mamlgen::maml::{self, GeneratorConfig};
use mamlgen::schema;

use crate::cli::Args;

fn main() -> Result<(), MamlgenError> {
    run()
}

fn run() -> Result<(), MamlgenError> {
    init_tracing();
    let args = Args::parse();

    let module = schema::load_module_descriptor(&args.descriptor)?;
    tracing::info!(
        module = %module.name,
        commands = module.commands.len(),
        "loaded module descriptor",
    );

    let config = GeneratorConfig {
        out_dir: args.out_dir,
        grouping: args.grouping.into(),
        command_filter: args.command,
    };
    maml::generate(&module, &config)?;
    Ok(())
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();
}
