use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use cakevm_isa::INSTRUCTION_SET;
use cakevm_opgen::{OpcodeIndex, output};

#[derive(Parser)]
#[command(name = "opgen", about = "Opcode table generator for the cake stack VM")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the opcode header and the dispatch suffix list
    Generate {
        /// File spliced verbatim before the generated tables
        #[arg(long)]
        prologue: PathBuf,
        /// File spliced verbatim after the generated tables
        #[arg(long)]
        epilogue: PathBuf,
        /// Combined header output path
        #[arg(short, long, default_value = "opcodes.h")]
        output: PathBuf,
        /// Suffix list output path
        #[arg(long, default_value = "opcode_suffixes.h")]
        suffixes: PathBuf,
    },
    /// Validate the instruction set and print a summary
    Check,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            prologue,
            epilogue,
            output,
            suffixes,
        } => cmd_generate(&prologue, &epilogue, &output, &suffixes),
        Commands::Check => cmd_check(),
    }
}

fn cmd_generate(prologue: &Path, epilogue: &Path, output_path: &Path, suffix_path: &Path) {
    let prologue = read_fragment(prologue);
    let epilogue = read_fragment(epilogue);

    let artifacts = match output::render(INSTRUCTION_SET, &prologue, &epilogue) {
        Ok(a) => a,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = artifacts.write(output_path, suffix_path) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    log::debug!(
        "generated {} and {}",
        output_path.display(),
        suffix_path.display()
    );
}

fn read_fragment(path: &Path) -> String {
    match output::read_fragment(path) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

fn cmd_check() {
    let index = match OpcodeIndex::build(INSTRUCTION_SET) {
        Ok(index) => index,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    println!("=== cake VM instruction set ===");
    println!("Mnemonics:        {}", INSTRUCTION_SET.len());
    println!("Occupied slots:   {}", index.len());
    println!();
    for insn in index.occupied() {
        println!("  {:>3}  {:<6} arity {}", insn.code, insn.mnemonic, insn.arity);
    }
}
