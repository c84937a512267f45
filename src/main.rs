use std::{fs::read_to_string, path::PathBuf, process::ExitCode, time::Instant};

use clap::Parser;
use log::{error, info};
use lox_parser::{
    format_error,
    lexer::lexer::tokenize,
    parser::parser::{parse_with_config, ParserConfig, DEFAULT_MAX_DEPTH},
};

/// Parses a single Lox expression and prints its tree.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// File containing the expression
    #[arg(required_unless_present = "expr", conflicts_with = "expr")]
    file: Option<PathBuf>,

    /// Expression given inline instead of a file
    #[arg(short, long)]
    expr: Option<String>,

    /// Maximum depth of the parsed tree
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Silence all log output
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(err) = stderrlog::new()
        .module(module_path!())
        .module("lox_parser")
        .quiet(cli.quiet)
        .verbosity(cli.verbose as usize + 1)
        .init()
    {
        eprintln!("failed to initialise logging: {}", err);
    }

    let (source, file_name) = match (&cli.expr, &cli.file) {
        (Some(expr), _) => (expr.clone(), String::from("<expr>")),
        (None, Some(path)) => match read_to_string(path) {
            Ok(contents) => (contents, path.to_string_lossy().into_owned()),
            Err(err) => {
                error!("failed to read {}: {}", path.display(), err);
                return ExitCode::FAILURE;
            }
        },
        (None, None) => unreachable!("clap requires a file or --expr"),
    };

    let start = Instant::now();

    let tokens = match tokenize(source.clone(), Some(file_name)) {
        Ok(tokens) => tokens,
        Err(err) => {
            eprint!("{}", format_error(&err, &source));
            return ExitCode::FAILURE;
        }
    };

    info!("Tokenized in {:?}", start.elapsed());

    let parse_start = Instant::now();
    let config = ParserConfig {
        max_depth: cli.max_depth,
    };
    let (_, parsed) = parse_with_config(tokens, config);

    info!("Parsed in {:?}", parse_start.elapsed());

    match parsed {
        Ok(expr) => {
            println!("{}", expr);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprint!("{}", format_error(&err, &source));
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::Cli;

    #[test]
    fn test_cli_accepts_inline_expression() {
        let cli = Cli::try_parse_from(["lox-parser", "-e", "1 + 2", "--max-depth", "8", "-vv"]).unwrap();

        assert_eq!(cli.expr.as_deref(), Some("1 + 2"));
        assert_eq!(cli.max_depth, 8);
        assert_eq!(cli.verbose, 2);
        assert!(cli.file.is_none());
    }

    #[test]
    fn test_cli_requires_input() {
        assert!(Cli::try_parse_from(["lox-parser"]).is_err());
        assert!(Cli::try_parse_from(["lox-parser", "a.lox", "-e", "1"]).is_err());
        assert!(Cli::try_parse_from(["lox-parser", "a.lox"]).is_ok());
    }
}
