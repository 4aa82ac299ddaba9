//! The top-level facade a host embeds: owns the register file and
//! memory, and advances state one instruction at a time.

use crate::exec;
use crate::instr::decode::{classify, DecodeError};
use crate::memory::{Memory, Width};
use crate::outcome::Outcome;
use crate::registers::{Cause, RegisterFile};

/// A MIPS32 R6 hart: its register file, its memory, and the `step`
/// driver that ties decode and execution together.
#[derive(Debug, Default)]
pub struct Emulator {
    registers: RegisterFile,
    memory: Memory,
}

impl Emulator {
    /// A fresh emulator over the given memory, with a zeroed register
    /// file and `pc == 0`.
    pub fn new(memory: Memory) -> Self {
        Self {
            registers: RegisterFile::new(),
            memory,
        }
    }

    pub fn registers(&self) -> &RegisterFile {
        &self.registers
    }

    pub fn registers_mut(&mut self) -> &mut RegisterFile {
        &mut self.registers
    }

    pub fn memory(&self) -> &Memory {
        &self.memory
    }

    pub fn memory_mut(&mut self) -> &mut Memory {
        &mut self.memory
    }

    /// Execute one instruction.
    ///
    /// Reads the word at `pc`, advances `pc` past it (to the delay-slot
    /// address), classifies and dispatches the word, then resolves any
    /// branch that was already pending coming into this call — i.e. the
    /// branch scheduled by the *previous* step, whose delay-slot
    /// instruction is the one this call just executed. A branch
    /// scheduled by THIS call is left pending so its delay-slot
    /// instruction gets to run on the next `step()`, and is resolved on
    /// the call after that. Compact branches never go through
    /// `delayed_branch`; they write `pc` directly and take effect with
    /// no intervening step.
    pub fn step(&mut self) -> Outcome {
        let raw = match self.memory.read(self.registers.get_pc(), Width::Word) {
            Ok(word) => word,
            Err(e) => return e.into(),
        };
        self.registers.inc_pc();

        let had_pending_branch = self.registers.branch_pending();

        let outcome = match classify(raw) {
            Ok(family) => exec::dispatch(family, &mut self.registers, &mut self.memory),
            Err(DecodeError::UnrecognizedFunc(_)) | Err(DecodeError::UnrecognizedSpecial3(_)) => {
                self.registers.signal_exception(Cause::ReservedInstruction, raw);
                Outcome::Illegal
            }
            Err(_) => {
                self.registers.signal_exception(Cause::ReservedInstruction, raw);
                Outcome::Illegal
            }
        };

        if had_pending_branch {
            self.registers.update_pc();
        }

        match outcome {
            Outcome::Trap => self.registers.signal_exception(Cause::Trap, raw),
            Outcome::DivByZero => self.registers.signal_exception(Cause::Overflow, raw),
            Outcome::MemUnaligned { is_store: true } => {
                self.registers.signal_exception(Cause::AddressErrorStore, raw)
            }
            Outcome::MemUnaligned { is_store: false } => {
                self.registers.signal_exception(Cause::AddressErrorLoad, raw)
            }
            _ => {}
        }

        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instr::encode;
    use crate::instr::opcodes::*;
    use crate::registers::RegisterName;

    #[test]
    fn add_positive_scenario() {
        let mut mem = Memory::new(16);
        let word = encode::rtype(8, 9, 10, 0, FUNC_ADD);
        mem.store(0, Width::Word, word).unwrap();
        let mut emu = Emulator::new(mem);
        emu.registers_mut().set_unsigned(8, 1);
        emu.registers_mut().set_unsigned(9, 5);
        let outcome = emu.step();
        assert_eq!(outcome, Outcome::Ok);
        assert_eq!(emu.registers().get_unsigned(10), 6);
        assert_eq!(emu.registers().get_pc(), 4);
    }

    #[test]
    fn jal_then_delay_slot_scenario() {
        let mut mem = Memory::with_base(0x10BEEF00, 16);
        let jal = encode::jtype(OP_JAL, 0x003FC);
        let addiu = encode::itype(OP_ADDIU, 0, 8, 777);
        mem.store(0x10BEEF00, Width::Word, jal).unwrap();
        mem.store(0x10BEEF04, Width::Word, addiu).unwrap();
        let mut emu = Emulator::new(mem);
        emu.registers_mut().set_pc(0x10BEEF00);

        emu.step();
        emu.step();

        assert_eq!(emu.registers().get_pc(), 0x10000FF0);
        assert_eq!(emu.registers().get_unsigned(RegisterName::Ra.index()), 0x10BEEF08);
        assert_eq!(emu.registers().get_unsigned(8), 777);
    }

    #[test]
    fn unaligned_lh_leaves_destination_untouched() {
        let mut mem = Memory::new(16);
        let lh = encode::itype(OP_LH, 8, 9, 0);
        mem.store(0, Width::Word, lh).unwrap();
        let mut emu = Emulator::new(mem);
        emu.registers_mut().set_unsigned(8, 1);
        emu.registers_mut().set_unsigned(9, 0xdead_beef);
        let outcome = emu.step();
        assert_eq!(outcome, Outcome::MemUnaligned { is_store: false });
        assert_eq!(emu.registers().get_unsigned(9), 0xdead_beef);
        assert_eq!(emu.registers().cause(), Cause::AddressErrorLoad);
    }

    #[test]
    fn unaligned_sh_records_store_cause() {
        let mut mem = Memory::new(16);
        let sh = encode::itype(OP_SH, 8, 9, 0);
        mem.store(0, Width::Word, sh).unwrap();
        let mut emu = Emulator::new(mem);
        emu.registers_mut().set_unsigned(8, 1);
        let outcome = emu.step();
        assert_eq!(outcome, Outcome::MemUnaligned { is_store: true });
        assert_eq!(emu.registers().cause(), Cause::AddressErrorStore);
    }

    #[test]
    fn div_by_zero_scenario() {
        let mut mem = Memory::new(16);
        let div = encode::rtype(8, 9, 10, SOP_LOW, FUNC_SOP32);
        mem.store(0, Width::Word, div).unwrap();
        let mut emu = Emulator::new(mem);
        emu.registers_mut().set_unsigned(8, 7);
        emu.registers_mut().set_unsigned(9, 0);
        emu.registers_mut().set_unsigned(10, 0x1234);
        let outcome = emu.step();
        assert_eq!(outcome, Outcome::DivByZero);
        assert_eq!(emu.registers().get_unsigned(10), 0x1234);
    }

    #[test]
    fn beqc_compact_branch_has_no_delay_slot() {
        let mut mem = Memory::new(0x2000);
        let beqc = encode::itype(OP_POP10, 8, 9, (-80i16) as u16);
        mem.store(0x1000, Width::Word, beqc).unwrap();
        let mut emu = Emulator::new(mem);
        emu.registers_mut().set_pc(0x1000);
        emu.registers_mut().set_unsigned(8, 0x64);
        emu.registers_mut().set_unsigned(9, 0x64);
        let outcome = emu.step();
        assert_eq!(outcome, Outcome::Ok);
        assert_eq!(emu.registers().get_pc(), 0x1000 - 316);
    }

    #[test]
    fn unrecognized_opcode_is_illegal_and_records_cause() {
        let mut mem = Memory::new(16);
        mem.store(0, Width::Word, 0x3c << 26).unwrap();
        let mut emu = Emulator::new(mem);
        let outcome = emu.step();
        assert_eq!(outcome, Outcome::Illegal);
        assert_eq!(emu.registers().cause(), Cause::ReservedInstruction);
    }
}
