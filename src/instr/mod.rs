//! Instruction encoding: field layouts, opcode constants, classification,
//! and construction.

pub mod decode;
pub mod encode;
pub mod opcodes;
pub mod types;

pub use decode::{classify, DecodeError, Family, Instruction};
pub use types::*;

impl std::fmt::Display for Family {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Family::R(r) => write!(f, "R{{rs={},rt={},rd={},shamt={},func=0x{:02x}}}",
                r.rs, r.rt, r.rd, r.shamt, r.func),
            Family::RegImm(r) => write!(f, "RegImm{{rs={},sub_op=0x{:02x},imm16=0x{:04x}}}",
                r.rs, r.sub_op, r.imm16),
            Family::J(j) => write!(f, "J{{opcode=0x{:02x},imm26=0x{:07x}}}", j.opcode, j.imm26),
            Family::I(i) => write!(f, "I{{opcode=0x{:02x},rs={},rt={},imm16=0x{:04x}}}",
                i.opcode, i.rs, i.rt, i.imm16),
            Family::LongImmI(i) => write!(f, "LongImmI{{opcode=0x{:02x},rt={},imm16=0x{:04x}}}",
                i.opcode, i.rt, i.imm16),
            Family::Special3Bshfl(b) => write!(f, "Bshfl{{rt={},rd={},extra=0x{:02x}}}",
                b.rt, b.rd, b.extra),
            Family::Special3Ext(e) => write!(f, "Ext{{rs={},rt={},lsb={},msbd={}}}",
                e.rs, e.rt, e.lsb, e.msbd),
            Family::Special3Ins(i) => write!(f, "Ins{{rs={},rt={},lsb={},msb={}}}",
                i.rs, i.rt, i.lsb, i.msb),
            Family::PcRelType1(p) => write!(f, "PcRelType1{{rd={},kind={:?},imm19=0x{:05x}}}",
                p.rd, p.kind, p.imm19),
            Family::PcRelType2(p) => write!(f, "PcRelType2{{rd={},kind={:?},imm16=0x{:04x}}}",
                p.rd, p.kind, p.imm16),
            Family::FpuR(r) => write!(f, "FpuR{{fmt={},ft={},fs={},fd={}}}", r.fmt, r.ft, r.fs, r.fd),
            Family::FpuB(b) => write!(f, "FpuB{{fmt={},cc={}}}", b.fmt, b.cc),
            Family::FpuT(t) => write!(f, "FpuT{{fmt={},rt={},fs={}}}", t.fmt, t.rt, t.fs),
        }
    }
}
