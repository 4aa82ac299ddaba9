//! Per-family instruction execution, dispatched from `Emulator::step`.

pub mod fpu;
pub mod itype;
pub mod jtype;
pub mod pcrel;
pub mod regimm;
pub mod rtype;
pub mod special3;

use crate::instr::Family;
use crate::memory::Memory;
use crate::outcome::Outcome;
use crate::registers::RegisterFile;

/// Execute one already-classified instruction, mutating `regs` and, for
/// memory-touching families, `mem`.
pub fn dispatch(family: Family, regs: &mut RegisterFile, mem: &mut Memory) -> Outcome {
    match family {
        Family::R(fields) => rtype::handle(fields, regs),
        Family::I(fields) => {
            let outcome = itype::handle(fields, regs);
            if outcome == Outcome::Illegal {
                itype::handle_mem(fields, regs, mem)
            } else {
                outcome
            }
        }
        Family::J(fields) => jtype::handle(fields, regs),
        Family::RegImm(fields) => regimm::handle(fields, regs),
        Family::Special3Bshfl(fields) => special3::handle_bshfl(fields, regs),
        Family::Special3Ext(fields) => special3::handle_ext(fields, regs),
        Family::Special3Ins(fields) => special3::handle_ins(fields, regs),
        Family::PcRelType1(fields) => pcrel::handle_type1(fields, regs, mem),
        Family::PcRelType2(fields) => pcrel::handle_type2(fields, regs),
        Family::LongImmI(_) => Outcome::Illegal,
        Family::FpuR(_) | Family::FpuB(_) | Family::FpuT(_) => fpu::handle(),
    }
}
