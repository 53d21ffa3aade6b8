//! console-markup - preview color-code markup and prefixed log lines

use clap::{Parser, Subcommand};
use console_markup::{ColorCode, Logger, Result, color, console};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "console-markup")]
#[command(about = "Preview color-code markup and prefixed log lines")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Global log prefix (default: "&7[&aLOG&7] ")
    #[arg(long, global = true)]
    log_prefix: Option<String>,

    /// Global warn prefix (default: "&7[&eWARN&7] ")
    #[arg(long, global = true)]
    warn_prefix: Option<String>,

    /// Set both global prefixes
    #[arg(long, global = true, conflicts_with_all = ["log_prefix", "warn_prefix"])]
    prefix: Option<String>,

    /// Local prefix appended after the global one
    #[arg(long, global = true)]
    extend: Option<String>,

    /// Skip the global prefixes
    #[arg(long, global = true)]
    no_global_prefix: bool,

    /// Strip color codes instead of converting them
    #[arg(long, global = true)]
    plain: bool,

    /// Wrap the text in a color (name like "dark_green" or pattern like "&2")
    #[arg(long, global = true)]
    color: Option<String>,
}

#[derive(Subcommand)]
enum Command {
    /// Print text with color codes converted
    Parse { text: String },
    /// Print text as a log line
    Log { text: String },
    /// Print text as a warning line
    Warn { text: String },
    /// List every color code
    Codes,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    if let Some(prefix) = cli.prefix {
        console::set_both_prefixes(Some(prefix));
    }
    if let Some(prefix) = cli.log_prefix {
        console::set_log_prefix(Some(prefix));
    }
    if let Some(prefix) = cli.warn_prefix {
        console::set_warn_prefix(Some(prefix));
    }

    // Checked before any subcommand runs, including `codes`
    let wrap_color = cli.color.as_deref().map(str::parse::<ColorCode>).transpose()?;
    let logger = Logger::new(!cli.no_global_prefix).create_extension(cli.extend.as_deref());
    let wrap = |text: String| match wrap_color {
        Some(code) => format!("{}{text}{}", code.pattern(), ColorCode::Reset.pattern()),
        None => text,
    };
    let render = |line: &str| {
        if cli.plain {
            color::strip(line)
        } else {
            color::parse(line)
        }
    };

    match cli.command {
        Command::Parse { text } => println!("{}", render(&wrap(text))),
        Command::Log { text } => println!("{}", render(&logger.message_as_log(&wrap(text)))),
        Command::Warn { text } => println!("{}", render(&logger.message_as_warn(&wrap(text)))),
        Command::Codes => {
            for code in ColorCode::ALL {
                let line = format!("{}{:<14}&r", code.pattern(), code.name());
                println!("{}  {}", render(&line), code.pattern());
            }
        }
    }

    Ok(())
}
