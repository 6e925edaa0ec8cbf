//! # An SM83 (Game Boy CPU) decode table generator written in Rust.
//!
//! Compiles the machine-readable description of the SM83 instruction set
//! (conventionally `opcodes.json`) into the two opcode-indexed decode tables
//! consumed by the interpreter core: one for the base opcode space and one
//! for the 0xCB-prefixed space.
//! ```
//! cargo run -- /path/to/opcodes.json
//! ```
//! ...or if you've already built the binary then just...
//! ```
//! sm83tab /path/to/opcodes.json
//! ```
//! ## Options
//! Help for command line options is available using -h or --help.
#[macro_use]
mod macros;
mod classify;
mod config;
mod emit;
mod error;
mod opcodes;
mod table;
use std::collections::HashMap;
use std::result::Result;
use std::{fmt, io};
pub(crate) use {crate::error::*, crate::opcodes::*, crate::table::InstructionTable};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    config::init();
    // generate_tables does all the work
    if let Err(e) = generate_tables(config::ARGS.file.as_str()) {
        println!("{}", e);
        return Err(Box::new(e));
    }
    Ok(())
}
/// generate_tables drives the top level functionality (load, build, emit) of the app
fn generate_tables(filename: &str) -> Result<(), Error> {
    info!("Loading instruction set description {}", filename);
    let desc = OpcodeDescription::read_from_file(filename)?;
    for space in [Space::Unprefixed, Space::CbPrefixed] {
        info!("Building {} decode table", space);
        let table = InstructionTable::build(&desc, space)?;
        table.write_output_file(config::ARGS.out_dir.as_str())?;
    }
    info!("{}", green!("Decode tables complete."));
    Ok(())
}
