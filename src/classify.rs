//! Classification of raw operand metadata into canonical operand tags.
//!
//! Every operand name in the description belongs to one of a handful of
//! closed vocabularies fixed at build time (conditions, registers, immediate
//! classes, bit-index digits, jump targets). Classification is an ordered
//! rule match over those vocabularies; a name outside all of them is a
//! data-integrity error in the description, never a silent default.
use super::*;

/// 8-bit immediate class tokens (n8 = literal, a8 = high-page address, e8 = signed offset)
pub const IMM_8: [&str; 3] = ["n8", "a8", "e8"];
/// 16-bit immediate class tokens (n16 = literal, a16 = address)
pub const IMM_16: [&str; 2] = ["n16", "a16"];
/// bit index digits used by the BIT/RES/SET rows of the prefixed space
pub const BIT_IDX: [&str; 8] = ["0", "1", "2", "3", "4", "5", "6", "7"];
/// RST vectors are spelled as jump targets: "$00", "$08", ...
pub const TGT_MARKER: char = '$';

/// The SM83 register file as named by the description.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[allow(clippy::upper_case_acronyms)]
pub enum Register {
    A,
    B,
    C,
    D,
    E,
    H,
    L,
    AF,
    BC,
    DE,
    HL,
    SP,
}
impl Register {
    // the given string must be uppercase
    pub fn from_name(name: &str) -> Option<Register> {
        match name {
            "A" => Some(Register::A),
            "B" => Some(Register::B),
            "C" => Some(Register::C),
            "D" => Some(Register::D),
            "E" => Some(Register::E),
            "H" => Some(Register::H),
            "L" => Some(Register::L),
            "AF" => Some(Register::AF),
            "BC" => Some(Register::BC),
            "DE" => Some(Register::DE),
            "HL" => Some(Register::HL),
            "SP" => Some(Register::SP),
            _ => None,
        }
    }
    pub fn name(&self) -> &'static str {
        match self {
            Register::A => "A",
            Register::B => "B",
            Register::C => "C",
            Register::D => "D",
            Register::E => "E",
            Register::H => "H",
            Register::L => "L",
            Register::AF => "AF",
            Register::BC => "BC",
            Register::DE => "DE",
            Register::HL => "HL",
            Register::SP => "SP",
        }
    }
}

/// Branch-gating conditions encoded in the opcode. The name "C" always
/// denotes the register, so the carry condition is not part of this
/// vocabulary and never appears in a built table.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[allow(clippy::upper_case_acronyms)]
pub enum Condition {
    None,
    NZ,
    Z,
    NC,
}
impl Condition {
    pub fn from_name(name: &str) -> Option<Condition> {
        match name {
            "NZ" => Some(Condition::NZ),
            "Z" => Some(Condition::Z),
            "NC" => Some(Condition::NC),
            _ => None,
        }
    }
}

/// Post-access step annotation on an indirect register operand ([HL+]/[HL-]).
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Step {
    None,
    Inc,
    Dec,
}

/// Canonical encoding of one operand slot of a decode table entry.
/// Classification only manipulates these variants; the PARA_* symbol text
/// is rendered at the emission boundary.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Param {
    None,
    /// register operand; indirect means the register holds the address of the value
    Reg { reg: Register, indirect: bool, step: Step },
    Imm8,
    Imm16,
    /// stack pointer plus signed 8-bit displacement (the LD HL,SP+e8 shape)
    SpImm8,
    BitIdx,
    Tgt,
}

/// Result of classifying one operand descriptor: either a data operand
/// destined for a param slot, or a condition destined for the condition slot.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Classified {
    Param(Param),
    Cond(Condition),
}

/// Map one operand descriptor to its canonical tag. First matching rule
/// wins; the vocabularies are disjoint, so the order only decides how fast
/// the error path is reached. `key` identifies the opcode for error reports.
pub fn classify(key: &str, od: &OperandDescriptor) -> Result<Classified, Error> {
    if let Some(cond) = Condition::from_name(od.name.as_str()) {
        return Ok(Classified::Cond(cond));
    }
    if let Some(reg) = Register::from_name(od.name.as_str()) {
        // increment takes precedence if a record ever carried both flags
        let step = if od.increment {
            Step::Inc
        } else if od.decrement {
            Step::Dec
        } else {
            Step::None
        };
        return Ok(Classified::Param(Param::Reg { reg, indirect: !od.immediate, step }));
    }
    if IMM_8.contains(&od.name.as_str()) {
        return Ok(Classified::Param(Param::Imm8));
    }
    if IMM_16.contains(&od.name.as_str()) {
        return Ok(Classified::Param(Param::Imm16));
    }
    if BIT_IDX.contains(&od.name.as_str()) {
        return Ok(Classified::Param(Param::BitIdx));
    }
    if od.name.starts_with(TGT_MARKER) {
        return Ok(Classified::Param(Param::Tgt));
    }
    Err(unrecognized_err!(key, od.name))
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Param::None => write!(f, "PARA_NONE"),
            Param::Reg { reg, indirect, step } => {
                write!(f, "PARA_")?;
                if *indirect {
                    write!(f, "MEM_")?;
                }
                write!(f, "REG_{}", reg.name())?;
                match step {
                    Step::Inc => write!(f, "_INC"),
                    Step::Dec => write!(f, "_DEC"),
                    Step::None => Ok(()),
                }
            }
            Param::Imm8 => write!(f, "PARA_IMM_8"),
            Param::Imm16 => write!(f, "PARA_IMM_16"),
            Param::SpImm8 => write!(f, "PARA_SP_IMM_8"),
            Param::BitIdx => write!(f, "PARA_BIT_IDX"),
            Param::Tgt => write!(f, "PARA_TGT"),
        }
    }
}
impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Condition::None => write!(f, "COND_NONE"),
            Condition::NZ => write!(f, "COND_NZ"),
            Condition::Z => write!(f, "COND_Z"),
            Condition::NC => write!(f, "COND_NC"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn operand(name: &str, immediate: bool) -> OperandDescriptor {
        OperandDescriptor { name: String::from(name), immediate, ..Default::default() }
    }

    #[test]
    fn registers_direct_and_indirect() -> Result<(), Error> {
        assert_eq!(
            classify("0x47", &operand("B", true))?,
            Classified::Param(Param::Reg { reg: Register::B, indirect: false, step: Step::None })
        );
        // immediate=false means the register holds an address to dereference
        assert_eq!(
            classify("0x46", &operand("HL", false))?,
            Classified::Param(Param::Reg { reg: Register::HL, indirect: true, step: Step::None })
        );
        assert_eq!(
            classify("0x31", &operand("SP", true))?,
            Classified::Param(Param::Reg { reg: Register::SP, indirect: false, step: Step::None })
        );
        Ok(())
    }

    #[test]
    fn register_step_suffixes() -> Result<(), Error> {
        let mut od = operand("HL", false);
        od.increment = true;
        let inc = classify("0x22", &od)?;
        assert_eq!(
            inc,
            Classified::Param(Param::Reg { reg: Register::HL, indirect: true, step: Step::Inc })
        );
        od.increment = false;
        od.decrement = true;
        assert_eq!(
            classify("0x32", &od)?,
            Classified::Param(Param::Reg { reg: Register::HL, indirect: true, step: Step::Dec })
        );
        // both flags set never occurs in a valid description; increment wins
        od.increment = true;
        assert_eq!(classify("0x22", &od)?, inc);
        Ok(())
    }

    #[test]
    fn conditions_resolve_separately() -> Result<(), Error> {
        assert_eq!(classify("0x20", &operand("NZ", true))?, Classified::Cond(Condition::NZ));
        assert_eq!(classify("0x28", &operand("Z", true))?, Classified::Cond(Condition::Z));
        assert_eq!(classify("0x30", &operand("NC", true))?, Classified::Cond(Condition::NC));
        // "C" is the register, not the carry condition
        assert_eq!(
            classify("0x38", &operand("C", true))?,
            Classified::Param(Param::Reg { reg: Register::C, indirect: false, step: Step::None })
        );
        Ok(())
    }

    #[test]
    fn immediates_bit_indices_and_targets() -> Result<(), Error> {
        assert_eq!(classify("0x06", &operand("n8", true))?, Classified::Param(Param::Imm8));
        assert_eq!(classify("0xE0", &operand("a8", false))?, Classified::Param(Param::Imm8));
        assert_eq!(classify("0x18", &operand("e8", true))?, Classified::Param(Param::Imm8));
        assert_eq!(classify("0x01", &operand("n16", true))?, Classified::Param(Param::Imm16));
        assert_eq!(classify("0x08", &operand("a16", false))?, Classified::Param(Param::Imm16));
        assert_eq!(classify("0x7e", &operand("7", true))?, Classified::Param(Param::BitIdx));
        assert_eq!(classify("0xC7", &operand("$00", true))?, Classified::Param(Param::Tgt));
        assert_eq!(classify("0xFF", &operand("$38", true))?, Classified::Param(Param::Tgt));
        Ok(())
    }

    #[test]
    fn unknown_name_is_an_error() {
        let e = classify("0x27", &operand("XY", true)).unwrap_err();
        assert_eq!(e.kind, ErrorKind::UnrecognizedOperand);
        assert_eq!(e.ctx.as_deref(), Some("0x27"));
        assert!(e.msg.contains("XY"));
    }

    #[test]
    fn tag_rendering() {
        let hl_inc = Param::Reg { reg: Register::HL, indirect: true, step: Step::Inc };
        assert_eq!(hl_inc.to_string(), "PARA_MEM_REG_HL_INC");
        let af = Param::Reg { reg: Register::AF, indirect: false, step: Step::None };
        assert_eq!(af.to_string(), "PARA_REG_AF");
        assert_eq!(Param::None.to_string(), "PARA_NONE");
        assert_eq!(Param::SpImm8.to_string(), "PARA_SP_IMM_8");
        assert_eq!(Condition::None.to_string(), "COND_NONE");
        assert_eq!(Condition::NZ.to_string(), "COND_NZ");
    }
}
