//! I-type execution: immediate arithmetic, delay-slotted and R6 compact
//! branches, and memory loads/stores.

use crate::fields::{sign_extend, sign_extend16, zero_extend16};
use crate::instr::opcodes::*;
use crate::instr::Itype;
use crate::memory::{Memory, Width};
use crate::outcome::Outcome;
use crate::registers::{RegisterFile, RegisterName};

fn link(regs: &mut RegisterFile) {
    let fall_through = regs.get_pc();
    regs.set_unsigned(RegisterName::Ra.index(), fall_through);
}

fn branch_target(regs: &RegisterFile, imm16: u16) -> u32 {
    regs.get_pc().wrapping_add(sign_extend16(imm16).wrapping_mul(4))
}

/// Execute the non-memory I-type operations: immediate arithmetic and
/// every branch family (delay-slotted and R6 compact).
pub fn handle(fields: Itype, regs: &mut RegisterFile) -> Outcome {
    let rs = regs.get_unsigned(fields.rs);
    let rt_val = regs.get_unsigned(fields.rt);
    match fields.opcode {
        OP_ADDIU => {
            regs.set_unsigned(fields.rt, rs.wrapping_add(sign_extend16(fields.imm16)));
            Outcome::Ok
        }
        OP_AUI => {
            regs.set_unsigned(fields.rt, rs.wrapping_add(sign_extend16(fields.imm16) << 16));
            Outcome::Ok
        }
        OP_SLTI => {
            let imm = sign_extend16(fields.imm16) as i32;
            regs.set_unsigned(fields.rt, ((rs as i32) < imm) as u32);
            Outcome::Ok
        }
        OP_SLTIU => {
            regs.set_unsigned(fields.rt, (rs < sign_extend16(fields.imm16)) as u32);
            Outcome::Ok
        }
        OP_ANDI => {
            regs.set_unsigned(fields.rt, rs & zero_extend16(fields.imm16));
            Outcome::Ok
        }
        OP_ORI => {
            regs.set_unsigned(fields.rt, rs | zero_extend16(fields.imm16));
            Outcome::Ok
        }
        OP_XORI => {
            regs.set_unsigned(fields.rt, rs ^ zero_extend16(fields.imm16));
            Outcome::Ok
        }
        OP_BEQ => {
            if rs == rt_val {
                regs.delayed_branch(branch_target(regs, fields.imm16));
            }
            Outcome::Ok
        }
        OP_BNE => {
            if rs != rt_val {
                regs.delayed_branch(branch_target(regs, fields.imm16));
            }
            Outcome::Ok
        }
        OP_POP06 => pop06(fields, regs, rs, rt_val),
        OP_POP07 => pop07(fields, regs, rs, rt_val),
        OP_POP10 => pop10(fields, regs, rs, rt_val),
        OP_POP30 => pop30(fields, regs, rs, rt_val),
        OP_POP66 => pop_zc(fields, regs, rs, true),
        OP_POP76 => pop_zc(fields, regs, rs, false),
        _ => Outcome::Illegal,
    }
}

/// Execute the memory-touching I-type operations: loads and stores.
/// Falls through to `handle` (and its `illegal` default) for anything
/// else, since a given `Itype` only ever belongs to one sub-dispatch.
pub fn handle_mem(fields: Itype, regs: &mut RegisterFile, mem: &mut Memory) -> Outcome {
    let base = regs.get_unsigned(fields.rs);
    let addr = base.wrapping_add(sign_extend16(fields.imm16));
    match fields.opcode {
        OP_LB => match mem.read(addr, Width::Byte) {
            Ok(v) => {
                regs.set_unsigned(fields.rt, sign_extend(v, 7));
                Outcome::Ok
            }
            Err(e) => e.into(),
        },
        OP_LH => match mem.read(addr, Width::Half) {
            Ok(v) => {
                regs.set_unsigned(fields.rt, sign_extend(v, 15));
                Outcome::Ok
            }
            Err(e) => e.into(),
        },
        OP_LW => match mem.read(addr, Width::Word) {
            Ok(v) => {
                regs.set_unsigned(fields.rt, v);
                Outcome::Ok
            }
            Err(e) => e.into(),
        },
        OP_LBU => match mem.read(addr, Width::Byte) {
            Ok(v) => {
                regs.set_unsigned(fields.rt, v);
                Outcome::Ok
            }
            Err(e) => e.into(),
        },
        OP_LHU => match mem.read(addr, Width::Half) {
            Ok(v) => {
                regs.set_unsigned(fields.rt, v);
                Outcome::Ok
            }
            Err(e) => e.into(),
        },
        OP_SB => match mem.store(addr, Width::Byte, regs.get_unsigned(fields.rt)) {
            Ok(()) => Outcome::Ok,
            Err(e) => e.into(),
        },
        OP_SH => match mem.store(addr, Width::Half, regs.get_unsigned(fields.rt)) {
            Ok(()) => Outcome::Ok,
            Err(e) => e.into(),
        },
        OP_SW => match mem.store(addr, Width::Word, regs.get_unsigned(fields.rt)) {
            Ok(()) => Outcome::Ok,
            Err(e) => e.into(),
        },
        _ => handle(fields, regs),
    }
}

fn pop06(fields: Itype, regs: &mut RegisterFile, rs: u32, rt: u32) -> Outcome {
    let target = branch_target(regs, fields.imm16);
    if fields.rt == 0 {
        // BLEZ: delay-slotted, condition rs <= 0.
        if (rs as i32) <= 0 {
            regs.delayed_branch(target);
        }
    } else if fields.rs == 0 {
        // BLEZALC: compact + link, condition rt <= 0.
        link(regs);
        if (rt as i32) <= 0 {
            regs.set_pc(target);
        }
    } else if fields.rs == fields.rt {
        // BGEZALC: compact + link, condition rt >= 0.
        link(regs);
        if (rt as i32) >= 0 {
            regs.set_pc(target);
        }
    } else {
        // BGEUC: compact, condition rs >= rt unsigned.
        if rs >= rt {
            regs.set_pc(target);
        }
    }
    Outcome::Ok
}

fn pop07(fields: Itype, regs: &mut RegisterFile, rs: u32, rt: u32) -> Outcome {
    let target = branch_target(regs, fields.imm16);
    if fields.rt == 0 {
        // BGTZ: delay-slotted, condition rs > 0.
        if (rs as i32) > 0 {
            regs.delayed_branch(target);
        }
    } else if fields.rs == 0 {
        // BGTZALC: compact + link, condition rt > 0.
        link(regs);
        if (rt as i32) > 0 {
            regs.set_pc(target);
        }
    } else if fields.rs == fields.rt {
        // BLTZALC: compact + link, condition rt < 0.
        link(regs);
        if (rt as i32) < 0 {
            regs.set_pc(target);
        }
    } else {
        // BLTUC: compact, condition rs < rt unsigned.
        if rs < rt {
            regs.set_pc(target);
        }
    }
    Outcome::Ok
}

fn pop10(fields: Itype, regs: &mut RegisterFile, rs: u32, rt: u32) -> Outcome {
    let target = branch_target(regs, fields.imm16);
    if fields.rs == 0 && fields.rt != 0 {
        // BEQZALC: compact + link, condition rt == 0.
        link(regs);
        if rt == 0 {
            regs.set_pc(target);
        }
    } else if fields.rs < fields.rt {
        // BEQC: compact, condition rs == rt.
        if rs == rt {
            regs.set_pc(target);
        }
    } else {
        // BOVC: compact, condition signed(rs+rt) overflows.
        if signed_add_overflows(rs, rt) {
            regs.set_pc(target);
        }
    }
    Outcome::Ok
}

fn pop30(fields: Itype, regs: &mut RegisterFile, rs: u32, rt: u32) -> Outcome {
    let target = branch_target(regs, fields.imm16);
    if fields.rs == 0 && fields.rt != 0 {
        // BNEZALC: compact + link, condition rt != 0.
        link(regs);
        if rt != 0 {
            regs.set_pc(target);
        }
    } else if fields.rs < fields.rt {
        // BNEC: compact, condition rs != rt.
        if rs != rt {
            regs.set_pc(target);
        }
    } else {
        // BNVC: compact, condition signed(rs+rt) does not overflow.
        if !signed_add_overflows(rs, rt) {
            regs.set_pc(target);
        }
    }
    Outcome::Ok
}

/// BEQZC (`is_beqzc = true`) / BNEZC, the `rs != 0` form of POP66/POP76.
/// Both take a 21-bit PC-relative offset reconstructed from the `rt` and
/// `imm16` bit positions (`instr[20:0]`), shifted left 2.
fn pop_zc(fields: Itype, regs: &mut RegisterFile, rs: u32, is_beqzc: bool) -> Outcome {
    let imm21 = ((fields.rt as u32) << 16) | (fields.imm16 as u32);
    let offset = sign_extend(imm21, 20);
    let target = regs.get_pc().wrapping_add(offset.wrapping_mul(4));
    let taken = if is_beqzc { rs == 0 } else { rs != 0 };
    if taken {
        regs.set_pc(target);
    }
    Outcome::Ok
}

fn signed_add_overflows(a: u32, b: u32) -> bool {
    (a as i32).checked_add(b as i32).is_none()
}
