//! potassium-intellisense CLI
//!
//! Standalone tool an editor integration shells out to for completion and
//! hover data extracted from the Potassium declaration files.
//!
//! # Usage
//!
//! ```bash
//! # List completion items
//! potassium-intellisense completions api.d.lua globals.d.lua
//!
//! # Hover documentation for a word
//! potassium-intellisense hover fire api.d.lua globals.d.lua --format plain
//!
//! # Dump raw symbol records
//! potassium-intellisense symbols api.d.lua globals.d.lua
//!
//! # Write .luarc.json into a workspace
//! potassium-intellisense init ./my-project api.d.lua globals.d.lua
//! ```

use clap::{Parser, Subcommand, ValueEnum};
use potassium_intellisense::{
    hover_symbol, render_completions, DefinitionsIndex, LuarcConfig,
};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "potassium-intellisense")]
#[command(about = "Completion and hover provider for Potassium Lua declaration files")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List completion items from the declaration files
    Completions {
        /// API declaration file (api.d.lua)
        api: PathBuf,

        /// Globals declaration file (globals.d.lua)
        globals: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value = "json")]
        format: ListFormat,

        /// Verbose output (symbol count to stderr)
        #[arg(short, long)]
        verbose: bool,
    },

    /// Show hover documentation for a word
    Hover {
        /// Word to look up
        word: String,

        /// API declaration file (api.d.lua)
        api: PathBuf,

        /// Globals declaration file (globals.d.lua)
        globals: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value = "markdown")]
        format: HoverFormat,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Dump raw symbol records
    Symbols {
        /// API declaration file (api.d.lua)
        api: PathBuf,

        /// Globals declaration file (globals.d.lua)
        globals: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value = "json")]
        format: ListFormat,
    },

    /// Write a .luarc.json into a workspace directory
    Init {
        /// Workspace directory
        workspace: PathBuf,

        /// API declaration file (api.d.lua)
        api: PathBuf,

        /// Globals declaration file (globals.d.lua)
        globals: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ListFormat {
    Json,
    Plain,
}

#[derive(Clone, Copy, ValueEnum)]
enum HoverFormat {
    Markdown,
    Plain,
    Json,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Command::Completions {
            api,
            globals,
            format,
            verbose,
        } => {
            let index = DefinitionsIndex::load(api, globals);
            if verbose {
                eprintln!("{} symbols indexed", index.len());
            }

            let items = render_completions(&index);
            match format {
                ListFormat::Json => println!("{}", serde_json::to_string_pretty(&items)?),
                ListFormat::Plain => {
                    for item in &items {
                        println!(
                            "{:<24} {:<10} {}",
                            item.label,
                            format!("{:?}", item.kind),
                            item.detail
                        );
                    }
                }
            }
        }

        Command::Hover {
            word,
            api,
            globals,
            format,
            verbose,
        } => {
            let index = DefinitionsIndex::load(api, globals);

            match hover_symbol(&index, &word) {
                Some(info) => {
                    let output = match format {
                        HoverFormat::Markdown => info.contents.clone(),
                        HoverFormat::Plain => strip_markdown(&info.contents),
                        HoverFormat::Json => serde_json::to_string_pretty(&info)?,
                    };
                    println!("{}", output);
                }
                None => {
                    if verbose {
                        eprintln!("no symbol named {:?}", word);
                    }
                    // No hover available: no output, success exit
                }
            }
        }

        Command::Symbols {
            api,
            globals,
            format,
        } => {
            let index = DefinitionsIndex::load(api, globals);

            match format {
                ListFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(index.symbols())?)
                }
                ListFormat::Plain => {
                    for symbol in index.symbols() {
                        let doc = symbol.documentation.as_deref().unwrap_or("");
                        println!(
                            "{:<24} {:<10} {:<40} {}",
                            symbol.name,
                            format!("{:?}", symbol.kind),
                            symbol.detail,
                            doc
                        );
                    }
                }
            }
        }

        Command::Init {
            workspace,
            api,
            globals,
        } => {
            let config = LuarcConfig::for_workspace(&[&api, &globals]);
            config.write_or_log(&workspace);
        }
    }

    Ok(())
}

/// Strip markdown formatting for plain terminal output.
fn strip_markdown(md: &str) -> String {
    md.lines()
        .filter(|line| !line.trim_start().starts_with("```"))
        .map(|line| line.replace("**", "").replace('`', ""))
        .collect::<Vec<_>>()
        .join("\n")
}
