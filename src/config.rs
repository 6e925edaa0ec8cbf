use clap::Parser;
use lazy_static::lazy_static;

#[derive(Parser, Debug)]
#[command(author,version,about,long_about=None)]
pub struct Args {
    /// Instruction set description (.json) to compile into decode tables
    #[arg(default_value = "opcodes.json")]
    pub file: String,

    /// Directory in which to write the generated table sources
    #[arg(short, long, default_value = "lib")]
    pub out_dir: String,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

lazy_static! {
    pub static ref ARGS: Args = if cfg!(test) {
        // manually set parameters for running tests
        Args::parse_from(["test", "opcodes.json"])
    } else {
        Args::parse()
    };
}

pub fn init() {}
