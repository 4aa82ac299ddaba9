//! The general-purpose register file, program counter, and delay-slot
//! bookkeeping for a MIPS32 R6 hart.

use std::fmt;

/// Symbolic names for the 32 general-purpose registers, in index order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterName {
    Zero,
    At,
    V0,
    V1,
    A0,
    A1,
    A2,
    A3,
    T0,
    T1,
    T2,
    T3,
    T4,
    T5,
    T6,
    T7,
    S0,
    S1,
    S2,
    S3,
    S4,
    S5,
    S6,
    S7,
    T8,
    T9,
    K0,
    K1,
    Gp,
    Sp,
    Fp,
    Ra,
}

impl RegisterName {
    /// The register index (0..32) for this name.
    pub fn index(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for RegisterName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Self::Zero => "zero",
            Self::At => "at",
            Self::V0 => "v0",
            Self::V1 => "v1",
            Self::A0 => "a0",
            Self::A1 => "a1",
            Self::A2 => "a2",
            Self::A3 => "a3",
            Self::T0 => "t0",
            Self::T1 => "t1",
            Self::T2 => "t2",
            Self::T3 => "t3",
            Self::T4 => "t4",
            Self::T5 => "t5",
            Self::T6 => "t6",
            Self::T7 => "t7",
            Self::S0 => "s0",
            Self::S1 => "s1",
            Self::S2 => "s2",
            Self::S3 => "s3",
            Self::S4 => "s4",
            Self::S5 => "s5",
            Self::S6 => "s6",
            Self::S7 => "s7",
            Self::T8 => "t8",
            Self::T9 => "t9",
            Self::K0 => "k0",
            Self::K1 => "k1",
            Self::Gp => "gp",
            Self::Sp => "sp",
            Self::Fp => "fp",
            Self::Ra => "ra",
        };
        write!(f, "{name}")
    }
}

/// The coprocessor-0 Cause register's ExcCode field, restricted to the
/// subset of causes this core can raise. `code()` gives the numeric
/// ExcCode MIPS32 assigns to each reason, should a host want to rebuild a
/// real Cause register value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cause {
    /// No exception is currently pending.
    None,
    Interrupt,
    AddressErrorLoad,
    AddressErrorStore,
    ReservedInstruction,
    Breakpoint,
    Trap,
    Overflow,
    FloatingPoint,
}

impl Cause {
    /// The ExcCode MIPS32 assigns to this cause.
    pub fn code(self) -> u32 {
        match self {
            Self::None => 0,
            Self::Interrupt => 0,
            Self::AddressErrorLoad => 4,
            Self::AddressErrorStore => 5,
            Self::ReservedInstruction => 10,
            Self::Breakpoint => 9,
            Self::Trap => 13,
            Self::Overflow => 12,
            Self::FloatingPoint => 15,
        }
    }
}

impl Default for Cause {
    fn default() -> Self {
        Self::None
    }
}

/// The register file of a MIPS32 R6 hart: 32 general-purpose registers,
/// the program counter, the one-slot delayed-branch buffer, and the
/// fault-reporting slots (`cause`, `bad_instr`).
///
/// `R0` (`zero`) always reads as zero: writes to it are discarded rather
/// than rejected, matching the hardware's wired-to-zero register.
#[derive(Debug, Default)]
pub struct RegisterFile {
    registers: [u32; 32],
    pc: u32,
    branch_pending: bool,
    branch_target: u32,
    cause: Cause,
    bad_instr: u32,
}

impl RegisterFile {
    /// A fresh register file: all registers, the pc, and the delay-slot
    /// buffer are zeroed; `cause` is `Cause::None`.
    pub fn new() -> Self {
        Self::default()
    }

    fn index(which: u8) -> usize {
        // Out-of-range indices are masked modulo 32 so the file never
        // indexes out of bounds; callers must not rely on the wraparound.
        (which & 0x1f) as usize
    }

    /// Read register `which`, interpreted as unsigned.
    pub fn get_unsigned(&self, which: u8) -> u32 {
        self.registers[Self::index(which)]
    }

    /// Read register `which`, interpreted as two's-complement signed.
    pub fn get_signed(&self, which: u8) -> i32 {
        self.get_unsigned(which) as i32
    }

    /// Write `value` into register `which`; a write to `R0` is silently
    /// discarded.
    pub fn set_unsigned(&mut self, which: u8, value: u32) {
        let idx = Self::index(which);
        self.registers[idx] = value;
        self.registers[0] = 0;
    }

    /// Write a signed `value` into register `which`; a write to `R0` is
    /// silently discarded.
    pub fn set_signed(&mut self, which: u8, value: i32) {
        self.set_unsigned(which, value as u32);
    }

    /// The current program counter.
    pub fn get_pc(&self) -> u32 {
        self.pc
    }

    /// Overwrite the program counter directly (no delay-slot semantics).
    pub fn set_pc(&mut self, value: u32) {
        self.pc = value;
    }

    /// Advance the program counter by one instruction word.
    pub fn inc_pc(&mut self) {
        self.pc = self.pc.wrapping_add(4);
    }

    /// Schedule a delayed branch to `target`: the instruction in the
    /// delay slot still runs; the branch takes effect on the next
    /// `update_pc()`.
    pub fn delayed_branch(&mut self, target: u32) {
        self.branch_pending = true;
        self.branch_target = target;
    }

    /// Whether a delayed branch is currently pending.
    pub fn branch_pending(&self) -> bool {
        self.branch_pending
    }

    /// Resolve the branch delay slot: `pc += 4`, then, if a branch is
    /// pending, replace `pc` with the scheduled target and clear the
    /// pending flag.
    pub fn update_pc(&mut self) {
        self.inc_pc();
        if self.branch_pending {
            self.pc = self.branch_target;
            self.branch_pending = false;
        }
    }

    /// Record an exception: stores the cause and the offending raw
    /// instruction word for a host to inspect after the fact.
    pub fn signal_exception(&mut self, cause: Cause, raw_instr: u32) {
        self.cause = cause;
        self.bad_instr = raw_instr;
    }

    /// The most recently recorded exception cause.
    pub fn cause(&self) -> Cause {
        self.cause
    }

    /// The raw instruction word recorded by the most recent
    /// `signal_exception` call.
    pub fn bad_instr(&self) -> u32 {
        self.bad_instr
    }

    /// Zero all 32 general-purpose registers. `pc` and the fault slots
    /// are left untouched.
    pub fn zero_all(&mut self) {
        self.registers = [0; 32];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_register_always_reads_zero() {
        let mut regs = RegisterFile::new();
        regs.set_unsigned(0, 0xdead_beef);
        assert_eq!(regs.get_unsigned(0), 0);
    }

    #[test]
    fn write_then_read_round_trips_for_nonzero_registers() {
        let mut regs = RegisterFile::new();
        for n in 1..32u8 {
            let value = 0x1000_0000u32.wrapping_mul(n as u32);
            regs.set_unsigned(n, value);
            assert_eq!(regs.get_unsigned(n), value);
        }
    }

    #[test]
    fn signed_view_matches_twos_complement() {
        let mut regs = RegisterFile::new();
        regs.set_unsigned(4, 0xffff_ffff);
        assert_eq!(regs.get_signed(4), -1);
    }

    #[test]
    fn out_of_range_index_is_masked_not_out_of_bounds() {
        let mut regs = RegisterFile::new();
        regs.set_unsigned(32, 7);
        assert_eq!(regs.get_unsigned(0), 0);
        assert_eq!(regs.get_unsigned(32), regs.get_unsigned(0));
    }

    #[test]
    fn update_pc_without_pending_branch_just_increments() {
        let mut regs = RegisterFile::new();
        regs.set_pc(0x1000);
        regs.update_pc();
        assert_eq!(regs.get_pc(), 0x1004);
    }

    #[test]
    fn update_pc_with_pending_branch_jumps_and_clears_flag() {
        let mut regs = RegisterFile::new();
        regs.set_pc(0x1000);
        regs.delayed_branch(0x2000);
        regs.update_pc();
        assert_eq!(regs.get_pc(), 0x2000);
        assert!(!regs.branch_pending());
    }

    #[test]
    fn signal_exception_records_cause_and_bad_instr() {
        let mut regs = RegisterFile::new();
        regs.signal_exception(Cause::ReservedInstruction, 0xffff_ffff);
        assert_eq!(regs.cause(), Cause::ReservedInstruction);
        assert_eq!(regs.bad_instr(), 0xffff_ffff);
    }

    #[test]
    fn zero_all_clears_registers_but_not_pc_or_cause() {
        let mut regs = RegisterFile::new();
        regs.set_unsigned(5, 42);
        regs.set_pc(0x400);
        regs.signal_exception(Cause::Trap, 1);
        regs.zero_all();
        assert_eq!(regs.get_unsigned(5), 0);
        assert_eq!(regs.get_pc(), 0x400);
        assert_eq!(regs.cause(), Cause::Trap);
    }
}
