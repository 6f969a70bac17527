use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use swatch::commands::check::{run as check, CheckArgs};
use swatch::commands::contrast::{run as contrast, ContrastArgs};
use swatch::commands::generate::{run as generate, GenerateArgs, OutputFormat};
use swatch::config::load_settings;

#[derive(Parser, Debug, Clone)]
#[command(about = "Swatch, accessible color palettes from a description", long_about = None)]
#[command(version, about, long_about = None)]
struct Args {
    #[clap(long, global = true, default_value = "auto")]
    color: Color,

    /// Settings file. Defaults to ./swatch.yaml when present.
    #[clap(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
#[clap(rename_all = "lowercase")]
enum Color {
    Always,
    Auto,
    Never,
}

impl Color {
    fn init(self) {
        // Set a supports-color override based on the variable passed in.
        match self {
            Color::Always => owo_colors::set_override(true),
            Color::Auto => {}
            Color::Never => owo_colors::set_override(false),
        }
    }
}

#[derive(Subcommand, Debug, Clone)]
enum Commands {
    /// Generate a palette for each prompt
    Generate {
        #[arg(required = true)]
        prompts: Vec<String>,
        /// Use a saved response of the remote palette generator
        #[arg(long)]
        remote_response: Option<PathBuf>,
        /// Print CSS custom properties
        #[arg(long, conflicts_with = "json")]
        css: bool,
        /// Print the palette as JSON
        #[arg(long)]
        json: bool,
    },
    /// Check a palette JSON file against WCAG AA
    Check {
        file: PathBuf,
        /// Repair failing colors and print the result
        #[arg(long)]
        fix: bool,
        /// Print the checks as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the contrast ratio of two colors
    Contrast { foreground: String, background: String },
}

fn main() {
    let args = Args::parse();
    args.color.init();

    let mut stdout = std::io::stdout();

    let settings = match load_settings(args.config.as_deref(), std::path::Path::new(".")) {
        Ok(settings) => settings,
        Err(e) => {
            println!("{:?}", e);
            std::process::exit(1);
        }
    };

    let result = match args.command {
        Some(Commands::Generate {
            prompts,
            remote_response,
            css,
            json,
        }) => {
            let format = if css {
                OutputFormat::Css
            } else if json {
                OutputFormat::Json
            } else {
                OutputFormat::Report
            };

            generate(GenerateArgs {
                prompts: &prompts,
                remote_response: remote_response.as_deref(),
                format,
                settings: &settings,
                stdout: &mut stdout,
            })
        }
        Some(Commands::Check { file, fix, json }) => check(CheckArgs {
            file: &file,
            fix,
            json,
            settings: &settings,
            stdout: &mut stdout,
        }),
        Some(Commands::Contrast {
            foreground,
            background,
        }) => contrast(ContrastArgs {
            foreground: &foreground,
            background: &background,
            stdout: &mut stdout,
        }),
        None => {
            Args::command().print_help().unwrap();
            std::process::exit(1);
        }
    };

    if let Err(e) = result {
        println!("{:?}", e);
        std::process::exit(1);
    }
}
