//! Rendering of finished decode tables into C source artifacts.
use super::*;
use std::fs::{self, File};
use std::io::prelude::*;
use std::path::{Path, PathBuf};

impl InstructionTable {
    /// Render this table as the C source fragment the interpreter compiles.
    /// Symbol names, struct field order and initializer layout are fixed;
    /// downstream code consumes this output as code, not as data.
    pub fn write_table(&self, f: &mut dyn io::Write) -> Result<(), io::Error> {
        writeln!(f, "#include \"instruction.h\"\n\n")?;
        writeln!(f, "const Instruction {}[0x100] = {{\n", self.space.table_symbol())?;
        for e in self.entries() {
            writeln!(
                f,
                "\t[{}] = {{{}, {}, {}, {}, {}, {}}},",
                e.key, e.opcode, e.param1, e.param2, e.cond, e.cycles, e.key
            )?;
        }
        writeln!(f, "\n}};\n")?;
        Ok(())
    }
    /// Write the complete artifact for this table into `out_dir`, creating
    /// the directory if needed. Each run rewrites the artifact from scratch.
    pub fn write_output_file(&self, out_dir: &str) -> Result<PathBuf, Error> {
        let dir = Path::new(out_dir);
        fs::create_dir_all(dir)?;
        let pb = dir.join(self.space.artifact());
        let mut file = File::create(&pb)?;
        self.write_table(&mut file)?;
        println!("wrote instruction table: {}", pb.display());
        Ok(pb)
    }
}
