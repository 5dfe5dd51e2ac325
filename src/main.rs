#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("`jsonschema-draft3` CLI is only available with the `cli` feature");
    std::process::exit(1);
}

#[cfg(feature = "cli")]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    use jsonschema_draft3::{loader, JsonValidator};
    use rayon::prelude::*;
    use std::{path::PathBuf, process};
    use structopt::StructOpt;
    use tracing_subscriber::EnvFilter;

    #[derive(StructOpt)]
    #[structopt(name = "jsonschema-draft3")]
    struct Cli {
        /// A path to a JSON instance (i.e. filename.json) to validate (may be specified multiple times).
        #[structopt(short = "i", long = "instance", parse(from_os_str))]
        instances: Vec<PathBuf>,

        /// The JSON Schema to validate with: a file path or an http(s) URL.
        schema: String,
    }

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = Cli::from_args();
    let validator = JsonValidator::new(loader::from_location(&config.schema)?);

    // Every instance is an independent run; output keeps the command-line order
    let outcomes: Vec<_> = config
        .instances
        .par_iter()
        .map(|path| {
            let outcome = loader::from_path(path).map(|instance| validator.validate(&instance));
            (path.to_string_lossy().into_owned(), outcome)
        })
        .collect();

    let mut success = true;
    for (filename, outcome) in outcomes {
        match outcome {
            Ok(report) if report.is_success() => println!("{} - VALID", filename),
            Ok(report) => {
                success = false;
                println!("{} - INVALID. Errors:", filename);
                for (i, message) in report.messages().iter().enumerate() {
                    println!("{}. {}", i + 1, message);
                }
            }
            Err(error) => {
                success = false;
                println!("{} - INVALID. Errors:", filename);
                println!("1. {}", error);
            }
        }
    }

    if !success {
        process::exit(1);
    }

    Ok(())
}
