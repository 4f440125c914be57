pub mod cli;
pub mod codegen;
pub mod config;
pub mod error;
pub mod ident;
pub mod infer;
pub mod model;

use colored::Colorize;

fn main() {
    let command_line_interface = cli::CommandLineInterface::load();
    if let Err(error) = command_line_interface.run() {
        eprintln!("{} {error:#}", "error:".red().bold());
        std::process::exit(1);
    }
}
