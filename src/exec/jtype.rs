//! J-type execution: absolute jumps and the two compact jump forms.

use crate::fields::sign_extend;
use crate::instr::opcodes::*;
use crate::instr::Jtype;
use crate::outcome::Outcome;
use crate::registers::{RegisterFile, RegisterName};

pub fn handle(fields: Jtype, regs: &mut RegisterFile) -> Outcome {
    match fields.opcode {
        OP_J => {
            let target = (fields.imm26 << 2) | (regs.get_pc() & 0xf000_0000);
            regs.delayed_branch(target);
            Outcome::Ok
        }
        OP_JAL => {
            let target = (fields.imm26 << 2) | (regs.get_pc() & 0xf000_0000);
            let link = regs.get_pc().wrapping_add(4);
            regs.delayed_branch(target);
            regs.set_unsigned(RegisterName::Ra.index(), link);
            Outcome::Ok
        }
        OP_BC => {
            let target = compact_target(regs, fields.imm26);
            regs.set_pc(target);
            Outcome::Ok
        }
        OP_BALC => {
            let target = compact_target(regs, fields.imm26);
            let link = regs.get_pc();
            regs.set_unsigned(RegisterName::Ra.index(), link);
            regs.set_pc(target);
            Outcome::Ok
        }
        _ => Outcome::Illegal,
    }
}

fn compact_target(regs: &RegisterFile, imm26: u32) -> u32 {
    let offset = sign_extend(imm26, 25) << 2;
    regs.get_pc().wrapping_add(offset)
}
