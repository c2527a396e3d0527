use std::process::ExitCode;

use clap::{Parser, Subcommand};
use glsl_reflect::{
    literal::{atof_clamp, atoi_clamp},
    TypeTag,
};

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every type tag with its GL value and shape
    Tags,
    /// Lex a numeric literal, printing the clamped fallback on failure
    Literal {
        #[clap(value_parser)]
        text: String,
        /// Lex as a 32-bit integer instead of a float
        #[clap(long)]
        int: bool,
    },
}

fn main() -> ExitCode {
    pretty_env_logger::init();

    let args = Args::parse();

    match args.command {
        Command::Tags => {
            for tag in TypeTag::all().into_iter().filter(|t| *t != TypeTag::Struct) {
                println!(
                    "0x{:04X} {:<32} component {:<14} {}x{}",
                    tag.gl_value(),
                    tag.name(),
                    tag.component_type().name(),
                    tag.column_count(),
                    tag.row_count()
                );
            }
            ExitCode::SUCCESS
        }
        Command::Literal { text, int } => {
            let ok = if int {
                let parsed = atoi_clamp(&text);
                println!("{} {}", if parsed.ok { "ok" } else { "clamped" }, parsed.value);
                parsed.ok
            } else {
                let parsed = atof_clamp(&text);
                println!("{} {:?}", if parsed.ok { "ok" } else { "clamped" }, parsed.value);
                parsed.ok
            };
            if ok {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
    }
}
