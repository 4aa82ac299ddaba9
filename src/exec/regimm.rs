//! REGIMM execution: sign-conditional delay-slotted branches.

use crate::fields::sign_extend16;
use crate::instr::opcodes::*;
use crate::instr::RegImmType;
use crate::outcome::Outcome;
use crate::registers::RegisterFile;

pub fn handle(fields: RegImmType, regs: &mut RegisterFile) -> Outcome {
    let rs = regs.get_signed(fields.rs);
    let target = regs
        .get_pc()
        .wrapping_add(sign_extend16(fields.imm16).wrapping_mul(4));
    match fields.sub_op {
        REGIMM_BLTZ => {
            if rs < 0 {
                regs.delayed_branch(target);
            }
            Outcome::Ok
        }
        REGIMM_BGEZ => {
            if rs >= 0 {
                regs.delayed_branch(target);
            }
            Outcome::Ok
        }
        _ => Outcome::Illegal,
    }
}
