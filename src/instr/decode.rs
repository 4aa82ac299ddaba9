//! Classification of a raw 32-bit word into a MIPS32 R6 encoding family.

use thiserror::Error;

use super::opcodes::*;
use super::types::*;
use crate::fields::{extract_field, func, imm16, imm26, opcode, rd, rs, rt, shamt};

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    #[error("opcode 0x{0:02x} does not name a recognized MIPS32 R6 encoding family")]
    UnrecognizedOpcode(u32),
    #[error("SPECIAL func 0x{0:02x} does not name a recognized R-type operation")]
    UnrecognizedFunc(u32),
    #[error("SPECIAL3 func 0x{0:02x} does not name EXT, INS, or BSHFL")]
    UnrecognizedSpecial3(u32),
    #[error("PC-relative encoding 0x{0:08x} uses a reserved sub-form")]
    ReservedPcRel(u32),
}

/// The encoding family a 32-bit word belongs to, carrying its typed
/// fields. Produced by `classify`; re-derived fresh on every decode
/// (instructions are not cached between steps).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Family {
    R(Rtype),
    RegImm(RegImmType),
    J(Jtype),
    I(Itype),
    /// The reserved `rs == 0` form of the POP66/POP76 primaries (would be
    /// JIC/JIALC in the full R6 ISA; this core does not implement them).
    LongImmI(Itype),
    Special3Bshfl(Special3BshflType),
    Special3Ext(ExtType),
    Special3Ins(InsType),
    PcRelType1(PcRelType1),
    PcRelType2(PcRelType2),
    FpuR(FpuRType),
    FpuB(FpuBType),
    FpuT(FpuTType),
}

/// A decoded instruction word: the raw bits plus its classified family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instruction {
    pub raw: u32,
    pub family: Family,
}

impl Instruction {
    /// Decode `raw`, classifying it into an encoding family.
    pub fn decode(raw: u32) -> Result<Self, DecodeError> {
        Ok(Self {
            raw,
            family: classify(raw)?,
        })
    }
}

fn itype(raw: u32) -> Itype {
    Itype {
        opcode: opcode(raw),
        rs: rs(raw),
        rt: rt(raw),
        imm16: imm16(raw),
    }
}

fn classify_special(raw: u32) -> Result<Family, DecodeError> {
    let f = func(raw);
    let fields = Rtype {
        rs: rs(raw),
        rt: rt(raw),
        rd: rd(raw),
        shamt: shamt(raw),
        func: f,
    };
    match f {
        FUNC_SLL | FUNC_SRL | FUNC_SRA | FUNC_SLLV | FUNC_SRLV | FUNC_SRAV | FUNC_JR
        | FUNC_JALR | FUNC_CLZ | FUNC_CLO | FUNC_SOP30 | FUNC_SOP31 | FUNC_SOP32 | FUNC_SOP33
        | FUNC_ADD | FUNC_ADDU | FUNC_SUB | FUNC_SUBU | FUNC_AND | FUNC_OR | FUNC_XOR
        | FUNC_NOR | FUNC_SLT | FUNC_SLTU | FUNC_SELEQZ | FUNC_SELNEZ | FUNC_TGE | FUNC_TGEU
        | FUNC_TLT | FUNC_TLTU | FUNC_TEQ | FUNC_TNE => Ok(Family::R(fields)),
        other => Err(DecodeError::UnrecognizedFunc(other)),
    }
}

fn classify_special3(raw: u32) -> Result<Family, DecodeError> {
    match func(raw) {
        FUNC_EXT => Ok(Family::Special3Ext(ExtType {
            rs: rs(raw),
            rt: rt(raw),
            lsb: shamt(raw),
            msbd: rd(raw),
        })),
        FUNC_INS => Ok(Family::Special3Ins(InsType {
            rs: rs(raw),
            rt: rt(raw),
            lsb: shamt(raw),
            msb: rd(raw),
        })),
        FUNC_BSHFL => Ok(Family::Special3Bshfl(Special3BshflType {
            rs: rs(raw),
            rt: rt(raw),
            rd: rd(raw),
            extra: shamt(raw),
        })),
        other => Err(DecodeError::UnrecognizedSpecial3(other)),
    }
}

fn classify_pcrel(raw: u32) -> Result<Family, DecodeError> {
    let top2 = extract_field(raw, 20, 19);
    let bit18 = extract_field(raw, 18, 18);
    let bit17 = extract_field(raw, 17, 17);
    let dest = rs(raw);
    match top2 {
        0b00 => Ok(Family::PcRelType1(PcRelType1 {
            rd: dest,
            kind: PcRelKind1::Addiupc,
            imm19: extract_field(raw, 18, 0),
        })),
        0b01 if bit18 == 0 => Ok(Family::PcRelType1(PcRelType1 {
            rd: dest,
            kind: PcRelKind1::Lwpc,
            imm19: extract_field(raw, 18, 0),
        })),
        0b11 if bit18 == 0 => Ok(Family::PcRelType2(PcRelType2 {
            rd: dest,
            kind: PcRelKind2::Auipc,
            imm16: imm16(raw),
        })),
        0b11 if bit17 == 0 => Ok(Family::PcRelType2(PcRelType2 {
            rd: dest,
            kind: PcRelKind2::Aluipc,
            imm16: imm16(raw),
        })),
        _ => Err(DecodeError::ReservedPcRel(raw)),
    }
}

fn classify_fpu(raw: u32) -> Family {
    let fmt = rs(raw) & 0x1f;
    if fmt & 0x10 != 0 {
        Family::FpuR(FpuRType {
            fmt,
            ft: rt(raw),
            fs: rd(raw),
            fd: extract_field(raw, 10, 6) as u8,
            func: func(raw),
        })
    } else if fmt & 0x08 != 0 {
        Family::FpuB(FpuBType {
            fmt,
            cc: extract_field(raw, 20, 18) as u8,
            imm16: imm16(raw),
        })
    } else {
        Family::FpuT(FpuTType {
            fmt,
            rt: rt(raw),
            fs: rd(raw),
        })
    }
}

/// Classify a raw 32-bit word into its MIPS32 R6 encoding family.
///
/// See the module-level bit-layout table: the primary opcode selects a
/// family outright, except for `SPECIAL` (disambiguated by `func`),
/// `SPECIAL3` (disambiguated by `func` into BSHFL/EXT/INS), `PCREL`
/// (disambiguated by `instr[20:19]`), `COP1` (disambiguated by `fmt`),
/// and the two POP66/POP76 primaries (disambiguated by whether `rs ==
/// 0`). An opcode not named here is a reserved/illegal encoding.
pub fn classify(raw: u32) -> Result<Family, DecodeError> {
    let op = opcode(raw);
    if op == OP_SPECIAL {
        return classify_special(raw);
    }
    if op == OP_REGIMM {
        return Ok(Family::RegImm(RegImmType {
            rs: rs(raw),
            sub_op: extract_field(raw, 20, 16),
            imm16: imm16(raw),
        }));
    }
    if J_FAMILY_OPCODES.contains(&op) {
        return Ok(Family::J(Jtype {
            opcode: op,
            imm26: imm26(raw),
        }));
    }
    if op == OP_SPECIAL3 {
        return classify_special3(raw);
    }
    if op == OP_PCREL {
        return classify_pcrel(raw);
    }
    if op == OP_COP1 {
        return Ok(classify_fpu(raw));
    }
    if LONG_IMM_OPCODES.contains(&op) {
        return Ok(if rs(raw) == 0 {
            Family::LongImmI(itype(raw))
        } else {
            Family::I(itype(raw))
        });
    }
    match op {
        OP_BEQ | OP_BNE | OP_POP06 | OP_POP07 | OP_POP10 | OP_ADDIU | OP_SLTI | OP_SLTIU
        | OP_ANDI | OP_ORI | OP_XORI | OP_AUI | OP_POP30 | OP_LB | OP_LH | OP_LW | OP_LBU
        | OP_LHU | OP_SB | OP_SH | OP_SW => Ok(Family::I(itype(raw))),
        other => Err(DecodeError::UnrecognizedOpcode(other)),
    }
}
