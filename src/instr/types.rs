//! Typed field views for each MIPS32 R6 instruction encoding family.
//!
//! Field names follow the MIPS32 R6 ISA reference (`rs`, `rt`, `rd`,
//! `shamt`, `func`, ...) even where a family reuses a bit position for a
//! different purpose (e.g. PC-relative forms write their destination
//! through the `rs` bit position; SPECIAL3 EXT/INS reuse the `rd` and
//! `shamt` positions for `msbd`/`msb` and `lsb`).

/// R-type: `rs`, `rt`, `rd`, `shamt`, `func`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rtype {
    pub rs: u8,
    pub rt: u8,
    pub rd: u8,
    pub shamt: u8,
    pub func: u32,
}

/// I-type: `rs`, `rt`, and a 16-bit immediate/offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Itype {
    pub opcode: u32,
    pub rs: u8,
    pub rt: u8,
    pub imm16: u16,
}

/// J-type: a 26-bit jump target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Jtype {
    pub opcode: u32,
    pub imm26: u32,
}

/// REGIMM: `rs`, a 5-bit sub-opcode, and a 16-bit immediate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegImmType {
    pub rs: u8,
    pub sub_op: u32,
    pub imm16: u16,
}

/// SPECIAL3 BSHFL: `rs`/`rt` sources, `rd` destination, and the 5-bit
/// `extra` selector (`instr[10:6]`) naming the specific shuffle op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Special3BshflType {
    pub rs: u8,
    pub rt: u8,
    pub rd: u8,
    pub extra: u8,
}

/// SPECIAL3 EXT: extract `msbd + 1` bits of `rs` starting at `lsb`, into
/// `rt`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtType {
    pub rs: u8,
    pub rt: u8,
    pub lsb: u8,
    pub msbd: u8,
}

/// SPECIAL3 INS: insert bits `[0, msb-lsb]` of `rs` into `rt` at `lsb`,
/// preserving the other bits of `rt`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InsType {
    pub rs: u8,
    pub rt: u8,
    pub lsb: u8,
    pub msb: u8,
}

/// Which operation a PC-relative type1 encoding names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PcRelKind1 {
    Addiupc,
    Lwpc,
}

/// PC-relative type1 (19-bit immediate): ADDIUPC / LWPC. The destination
/// register sits in the `rs` bit position, per the R6 PCREL encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PcRelType1 {
    pub rd: u8,
    pub kind: PcRelKind1,
    pub imm19: u32,
}

/// Which operation a PC-relative type2 encoding names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PcRelKind2 {
    Auipc,
    Aluipc,
}

/// PC-relative type2 (16-bit immediate): AUIPC / ALUIPC.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PcRelType2 {
    pub rd: u8,
    pub kind: PcRelKind2,
    pub imm16: u16,
}

/// Coprocessor-1 (FPU) R-form fields. Exposed for introspection only:
/// this core never executes an FPU operation (see `exec::fpu`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FpuRType {
    pub fmt: u8,
    pub ft: u8,
    pub fs: u8,
    pub fd: u8,
    pub func: u32,
}

/// Coprocessor-1 (FPU) B-form fields (conditional branch on FP flag).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FpuBType {
    pub fmt: u8,
    pub cc: u8,
    pub imm16: u16,
}

/// Coprocessor-1 (FPU) T-form fields (register transfer to/from GPR).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FpuTType {
    pub fmt: u8,
    pub rt: u8,
    pub fs: u8,
}
