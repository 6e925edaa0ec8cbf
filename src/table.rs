#![allow(dead_code)]
//! Decode table assembly for one opcode space.
use super::*;
use crate::classify::{classify, Classified, Condition, Param, Register, Step};

/// One slot of a decode table. Field order mirrors the C Instruction struct
/// the interpreter compiles against, with the raw opcode key echoed into the
/// last field for traceability.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub key: String,
    pub opcode: String,
    pub param1: Param,
    pub param2: Param,
    pub cond: Condition,
    pub cycles: u8,
}

/// A fixed 256-slot decode table for one opcode space. Slots without a
/// described instruction stay empty and are omitted from the emitted
/// initializer.
#[derive(Debug)]
pub struct InstructionTable {
    pub space: Space,
    slots: Vec<Option<Entry>>,
}

impl InstructionTable {
    /// Build the table for `space` from the loaded description. A malformed
    /// record or unrecognized operand aborts the whole build; a partially
    /// filled table is never returned.
    pub fn build(desc: &OpcodeDescription, space: Space) -> Result<InstructionTable, Error> {
        let records = desc.space(space);
        if records.is_empty() {
            warn!("no instructions described for the {} space", space);
        }
        let mut slots: Vec<Option<Entry>> = (0..0x100).map(|_| None).collect();
        for (key, record) in records {
            let entry = Entry::from_record(key, record)?;
            verbose_println!("{} {} -> {}", space, key, entry.opcode);
            slots[parse_opcode_key(key)? as usize] = Some(entry);
        }
        Ok(InstructionTable { space, slots })
    }
    pub fn entry(&self, op: u8) -> Option<&Entry> { self.slots[op as usize].as_ref() }
    /// defined entries in ascending opcode order
    pub fn entries(&self) -> impl Iterator<Item = &Entry> {
        self.slots.iter().filter_map(|slot| slot.as_ref())
    }
}

impl Entry {
    pub fn from_record(key: &str, record: &InstructionRecord) -> Result<Entry, Error> {
        let mut param1 = Param::None;
        let mut param2 = Param::None;
        let mut cond = Condition::None;
        match record.operands.len() {
            0..=2 => {
                for (slot, od) in record.operands.iter().enumerate() {
                    match classify(key, od)? {
                        // conditions live in their own slot, not in param1/param2
                        Classified::Cond(c) => cond = c,
                        Classified::Param(p) if slot == 0 => param1 = p,
                        Classified::Param(p) => param2 = p,
                    }
                }
            }
            // the lone LD HL,SP+e8 shape; a fixed override rather than a third slot
            3 => {
                param1 = Param::Reg { reg: Register::SP, indirect: false, step: Step::None };
                param2 = Param::SpImm8;
            }
            n => return Err(malformed_err_op!(key, "expected 0-3 operands but found {}", n)),
        }
        let cycles = *record
            .cycles
            .first()
            .ok_or_else(|| malformed_err_op!(key, "cycle count list is empty"))?;
        Ok(Entry {
            key: String::from(key),
            opcode: format!("OP_{}", record.mnemonic.to_ascii_uppercase()),
            param1,
            param2,
            cond,
            cycles,
        })
    }
}
