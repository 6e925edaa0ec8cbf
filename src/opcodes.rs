//! Loader for the machine-readable SM83 instruction set description.
//!
//! The description carries both opcode spaces under two top-level keys;
//! each space maps a two-hex-digit opcode key ("0x00".."0xFF") to one
//! instruction record. It is loaded once per run and read-only thereafter.
use super::*;
use lazy_static::lazy_static;
use regex::Regex;
use serde::Deserialize;
use std::fs;

#[derive(Debug, Deserialize)]
pub struct OpcodeDescription {
    pub unprefixed: HashMap<String, InstructionRecord>,
    pub cbprefixed: HashMap<String, InstructionRecord>,
}

/// One instruction as described by the resource. The first element of
/// `cycles` is the base (no-branch) cost; alternate costs are not tabulated.
#[derive(Debug, Deserialize)]
pub struct InstructionRecord {
    pub mnemonic: String,
    pub cycles: Vec<u8>,
    #[serde(default)]
    pub operands: Vec<OperandDescriptor>,
}

/// Raw operand metadata. `immediate: false` means the name designates a
/// memory address to dereference rather than a value to use directly.
/// The increment and decrement flags are only present in the json when set.
#[derive(Debug, Default, Deserialize)]
pub struct OperandDescriptor {
    pub name: String,
    #[serde(default)]
    pub immediate: bool,
    #[serde(default)]
    pub increment: bool,
    #[serde(default)]
    pub decrement: bool,
}

impl OpcodeDescription {
    pub fn read_from_file(filename: &str) -> Result<Self, Error> {
        let json = fs::read_to_string(filename).map_err(|e| missing_resource_err!(filename, e))?;
        Self::from_json(json.as_str())
    }
    pub fn from_json(json: &str) -> Result<Self, Error> {
        serde_json::from_str(json)
            .map_err(|e| malformed_err!("instruction set description is not valid: {}", e))
    }
    pub fn space(&self, space: Space) -> &HashMap<String, InstructionRecord> {
        match space {
            Space::Unprefixed => &self.unprefixed,
            Space::CbPrefixed => &self.cbprefixed,
        }
    }
}

/// Selector for one of the two independent opcode numbering domains.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Space {
    Unprefixed,
    CbPrefixed,
}
impl Space {
    /// top-level key of this space within the description
    pub fn key(&self) -> &'static str {
        match self {
            Space::Unprefixed => "unprefixed",
            Space::CbPrefixed => "cbprefixed",
        }
    }
    /// symbol name of the emitted C table
    pub fn table_symbol(&self) -> &'static str {
        match self {
            Space::Unprefixed => "_INSTRUCTION_MAP",
            Space::CbPrefixed => "_CB_INSTRUCTION_MAP",
        }
    }
    /// file name of the emitted C source artifact
    pub fn artifact(&self) -> &'static str {
        match self {
            Space::Unprefixed => "instruction.c",
            Space::CbPrefixed => "cb_instruction.c",
        }
    }
}
impl fmt::Display for Space {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { write!(f, "{}", self.key()) }
}

lazy_static! {
    static ref OPCODE_KEY: Regex = Regex::new(r"(?i)^0x([0-9a-f]{2})$").unwrap();
}

/// Parse a two-hex-digit opcode key ("0x00".."0xFF") into its byte value.
pub fn parse_opcode_key(key: &str) -> Result<u8, Error> {
    let caps = OPCODE_KEY
        .captures(key)
        .ok_or_else(|| malformed_err_op!(key, "opcode key is not a two digit hex literal"))?;
    u8::from_str_radix(&caps[1], 16).map_err(|e| malformed_err_op!(key, "bad opcode key: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opcode_keys() -> Result<(), Error> {
        assert_eq!(parse_opcode_key("0x00")?, 0x00);
        assert_eq!(parse_opcode_key("0xCB")?, 0xcb);
        assert_eq!(parse_opcode_key("0xff")?, 0xff);
        for bad in ["0x100", "12", "0x1", "CB", ""] {
            let e = parse_opcode_key(bad).unwrap_err();
            assert_eq!(e.kind, ErrorKind::MalformedRecord);
        }
        Ok(())
    }

    #[test]
    fn loads_both_spaces() -> Result<(), Error> {
        let desc = OpcodeDescription::from_json(
            r#"{
                "unprefixed": {
                    "0x00": {"mnemonic": "NOP", "bytes": 1, "cycles": [4], "operands": [], "immediate": true}
                },
                "cbprefixed": {
                    "0x37": {
                        "mnemonic": "SWAP", "bytes": 2, "cycles": [8],
                        "operands": [{"name": "A", "immediate": true}], "immediate": true
                    }
                }
            }"#,
        )?;
        assert_eq!(desc.space(Space::Unprefixed).len(), 1);
        let swap = &desc.space(Space::CbPrefixed)["0x37"];
        assert_eq!(swap.mnemonic, "SWAP");
        assert_eq!(swap.cycles, vec![8]);
        assert_eq!(swap.operands.len(), 1);
        assert!(swap.operands[0].immediate);
        assert!(!swap.operands[0].increment);
        Ok(())
    }

    #[test]
    fn rejects_invalid_json() {
        let e = OpcodeDescription::from_json("{ not json").unwrap_err();
        assert_eq!(e.kind, ErrorKind::MalformedRecord);
    }

    #[test]
    fn rejects_missing_file() {
        let e = OpcodeDescription::read_from_file("no_such_opcodes.json").unwrap_err();
        assert_eq!(e.kind, ErrorKind::MissingResource);
    }
}
