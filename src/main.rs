use clap::{CommandFactory, FromArgMatches, Parser};
use image_filter::commands::{CommandTable, Settings, USAGE};
use image_filter::convert::converter::KernelKind;
use std::path::PathBuf;
use std::process::ExitCode;

/// Greyscale images and plain-text pixel grids
///
/// Converts an image to greyscale, dumps a greyscale image to a text grid,
/// filters such a grid, or rebuilds an image from it.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Kernel used by -f
    #[arg(short, long, value_enum, default_value_t = KernelKind::Mean)]
    kernel: KernelKind,
    /// Operation to run: -g, -i, -o or -f
    #[arg(allow_hyphen_values = true, value_name = "OPTION")]
    option: Option<String>,
    /// Image or pixel grid text file
    #[arg(value_name = "INPUT_FILE")]
    input_file: Option<PathBuf>,
    /// Anything after the input file is ignored
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
    ignored: Vec<String>,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let table = CommandTable::new();
    let matches = Cli::command()
        .after_help(format!("Operations:\n{}", table.describe()))
        .get_matches();
    let cli = match Cli::from_arg_matches(&matches) {
        Ok(cli) => cli,
        Err(err) => err.exit(),
    };

    let (option, input_file) = match (cli.option, cli.input_file) {
        (Some(option), Some(input_file)) => (option, input_file),
        _ => {
            println!("{}", USAGE);
            return ExitCode::SUCCESS;
        }
    };

    if !cli.ignored.is_empty() {
        log::debug!("Ignoring extra arguments {:?}", cli.ignored);
    }

    let settings = Settings { kernel: cli.kernel };
    match table.run(&option, &input_file, &settings) {
        Ok(Some(out)) => {
            log::debug!("Finished, output at {}", out.display());
            ExitCode::SUCCESS
        }
        Ok(None) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("image_filter: {}", err);
            ExitCode::FAILURE
        }
    }
}
