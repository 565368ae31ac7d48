mod cli;
mod commands;
mod formatting;
mod settings;

use std::process::ExitCode;

use cli::Commands;
use commands::{run_extract, run_validate};

#[tokio::main]
async fn main() -> ExitCode {
    run().await
}

async fn run() -> ExitCode {
    let args = cli::parse();
    dbe_lib::logging::init(args.verbose);

    match args.command {
        Commands::Extract {
            input,
            input_type,
            node_id,
            no_svg,
            validate,
            format,
            output,
        } => {
            run_extract(
                args.config,
                input,
                input_type,
                node_id,
                no_svg,
                validate,
                format,
                output,
            )
            .await
        }
        Commands::Validate {
            scene,
            blueprint,
            format,
            output,
        } => run_validate(args.config, scene, blueprint, format, output).await,
    }
}
