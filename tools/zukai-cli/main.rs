use clap::{Parser, ValueEnum};
use std::fs;
use std::io::{self, Read};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};
use zukai::prelude::*;

/// CLI mirror of `Direction` for clap.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum DirectionCli {
    Tb,
    Bt,
    Lr,
    Rl,
}

impl From<DirectionCli> for Direction {
    fn from(value: DirectionCli) -> Self {
        match value {
            DirectionCli::Tb => Direction::TopToBottom,
            DirectionCli::Bt => Direction::BottomToTop,
            DirectionCli::Lr => Direction::LeftToRight,
            DirectionCli::Rl => Direction::RightToLeft,
        }
    }
}

/// CLI mirror of `Theme` for clap.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum ThemeCli {
    Default,
    Forest,
    Dark,
    Neutral,
}

impl From<ThemeCli> for Theme {
    fn from(value: ThemeCli) -> Self {
        match value {
            ThemeCli::Default => Theme::Default,
            ThemeCli::Forest => Theme::Forest,
            ThemeCli::Dark => Theme::Dark,
            ThemeCli::Neutral => Theme::Neutral,
        }
    }
}

/// Converts YAML DAG definitions into Mermaid flowchart syntax
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the YAML file; reads stdin when omitted or `-`
    input: Option<String>,

    /// Flow direction of the chart
    #[arg(short, long, value_enum, default_value = "tb")]
    direction: DirectionCli,

    /// Mermaid theme to request through an init directive
    #[arg(short, long, value_enum)]
    theme: Option<ThemeCli>,

    /// Write the chart to this file instead of stdout
    #[arg(short, long)]
    output: Option<String>,

    /// Report unresolved references and duplicate node ids; exits non-zero if any are found
    #[arg(long)]
    validate: bool,

    /// Print the parsed registry as JSON instead of the chart
    #[arg(long)]
    dump_registry: bool,

    /// Log at debug level (RUST_LOG takes precedence)
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let input = read_input(cli.input.as_deref())
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to read input: {}", e)));

    if cli.dump_registry || cli.validate {
        let parsed = parse_documents(&input);
        let registry = DagRegistry::from_dags(parsed.dags);

        if cli.dump_registry {
            let json = serde_json::to_string_pretty(&registry).unwrap_or_else(|e| {
                exit_with_error(&format!("Failed to serialize registry: {}", e))
            });
            write_output(cli.output.as_deref(), &json);
        }

        if cli.validate {
            let issues = validate_registry(&registry);
            for issue in &issues {
                eprintln!("  -> {}", issue);
            }
            if !issues.is_empty() {
                exit_with_error(&format!("Validation found {} issue(s)", issues.len()));
            }
            eprintln!("Validation passed: {} DAG(s) checked", registry.len());
        }

        if cli.dump_registry {
            return;
        }
    }

    let mut options = GeneratorOptions::default().with_direction(cli.direction.into());
    if let Some(theme) = cli.theme {
        options = options.with_theme(theme.into());
    }

    let diagram = convert(&input, &options).unwrap_or_else(|e| exit_with_error(&e.to_string()));
    for warning in &diagram.warnings {
        eprintln!("Warning: {}", warning);
    }
    write_output(cli.output.as_deref(), &diagram.code);
}

fn init_logging(verbose: bool) {
    let env_filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::new(if verbose { "debug" } else { "warn" })
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(env_filter)
        .init();
}

fn read_input(path: Option<&str>) -> io::Result<String> {
    match path {
        None | Some("-") => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
        Some(path) => fs::read_to_string(path),
    }
}

fn write_output(path: Option<&str>, content: &str) {
    match path {
        Some(path) => {
            fs::write(path, format!("{}\n", content)).unwrap_or_else(|e| {
                exit_with_error(&format!("Failed to write output file '{}': {}", path, e))
            });
            eprintln!("  -> Wrote output to '{}'", path);
        }
        None => println!("{}", content),
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
