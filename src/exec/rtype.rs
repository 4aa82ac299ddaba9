//! SPECIAL (R-type) execution: arithmetic, logical, shift, multiply/divide,
//! jump, select, count, and trap operations.

use crate::instr::opcodes::*;
use crate::instr::Rtype;
use crate::outcome::Outcome;
use crate::registers::RegisterFile;

fn rotr(value: u32, amount: u32) -> u32 {
    value.rotate_right(amount & 0x1f)
}

fn sra(value: u32, amount: u32) -> u32 {
    ((value as i32) >> (amount & 0x1f)) as u32
}

pub fn handle(fields: Rtype, regs: &mut RegisterFile) -> Outcome {
    let rs = regs.get_unsigned(fields.rs);
    let rt = regs.get_unsigned(fields.rt);
    match fields.func {
        FUNC_SLL => {
            regs.set_unsigned(fields.rd, rt << (fields.shamt & 0x1f));
            Outcome::Ok
        }
        FUNC_SRL => {
            let value = if fields.rs & 1 == 1 {
                rotr(rt, fields.shamt as u32)
            } else {
                rt >> (fields.shamt & 0x1f)
            };
            regs.set_unsigned(fields.rd, value);
            Outcome::Ok
        }
        FUNC_SRA => {
            regs.set_unsigned(fields.rd, sra(rt, fields.shamt as u32));
            Outcome::Ok
        }
        FUNC_SLLV => {
            regs.set_unsigned(fields.rd, rt << (rs & 0x1f));
            Outcome::Ok
        }
        FUNC_SRLV => {
            let value = if fields.shamt & 1 == 1 {
                rotr(rt, rs)
            } else {
                rt >> (rs & 0x1f)
            };
            regs.set_unsigned(fields.rd, value);
            Outcome::Ok
        }
        FUNC_SRAV => {
            regs.set_unsigned(fields.rd, sra(rt, rs));
            Outcome::Ok
        }
        FUNC_JR => {
            regs.delayed_branch(rs);
            Outcome::Ok
        }
        FUNC_JALR => {
            let link = regs.get_pc().wrapping_add(4);
            regs.delayed_branch(rs);
            regs.set_unsigned(crate::registers::RegisterName::Ra.index(), link);
            Outcome::Ok
        }
        FUNC_CLZ => {
            regs.set_unsigned(fields.rd, rs.leading_zeros());
            Outcome::Ok
        }
        FUNC_CLO => {
            regs.set_unsigned(fields.rd, (!rs).leading_zeros());
            Outcome::Ok
        }
        FUNC_SOP30 => mul_family(fields, regs, rs as i32, rt as i32, true),
        FUNC_SOP31 => mul_family_unsigned(fields, regs, rs, rt),
        FUNC_SOP32 => div_family(fields, regs, rs as i32, rt as i32),
        FUNC_SOP33 => div_family_unsigned(fields, regs, rs, rt),
        FUNC_ADD | FUNC_ADDU => {
            regs.set_unsigned(fields.rd, rs.wrapping_add(rt));
            Outcome::Ok
        }
        FUNC_SUB | FUNC_SUBU => {
            regs.set_unsigned(fields.rd, rs.wrapping_sub(rt));
            Outcome::Ok
        }
        FUNC_AND => {
            regs.set_unsigned(fields.rd, rs & rt);
            Outcome::Ok
        }
        FUNC_OR => {
            regs.set_unsigned(fields.rd, rs | rt);
            Outcome::Ok
        }
        FUNC_XOR => {
            regs.set_unsigned(fields.rd, rs ^ rt);
            Outcome::Ok
        }
        FUNC_NOR => {
            regs.set_unsigned(fields.rd, !(rs | rt));
            Outcome::Ok
        }
        FUNC_SLT => {
            regs.set_unsigned(fields.rd, ((rs as i32) < (rt as i32)) as u32);
            Outcome::Ok
        }
        FUNC_SLTU => {
            regs.set_unsigned(fields.rd, (rs < rt) as u32);
            Outcome::Ok
        }
        FUNC_SELEQZ => {
            regs.set_unsigned(fields.rd, if rt == 0 { rs } else { 0 });
            Outcome::Ok
        }
        FUNC_SELNEZ => {
            regs.set_unsigned(fields.rd, if rt != 0 { rs } else { 0 });
            Outcome::Ok
        }
        FUNC_TGE => trap_if((rs as i32) >= (rt as i32)),
        FUNC_TGEU => trap_if(rs >= rt),
        FUNC_TLT => trap_if((rs as i32) < (rt as i32)),
        FUNC_TLTU => trap_if(rs < rt),
        FUNC_TEQ => trap_if(rs == rt),
        FUNC_TNE => trap_if(rs != rt),
        _ => Outcome::Illegal,
    }
}

fn trap_if(condition: bool) -> Outcome {
    if condition {
        Outcome::Trap
    } else {
        Outcome::Ok
    }
}

fn mul_family(fields: Rtype, regs: &mut RegisterFile, a: i32, b: i32, _signed: bool) -> Outcome {
    let product = (a as i64) * (b as i64);
    let value = if fields.shamt == SOP_LOW {
        product as u32
    } else {
        (product >> 32) as u32
    };
    regs.set_unsigned(fields.rd, value);
    Outcome::Ok
}

fn mul_family_unsigned(fields: Rtype, regs: &mut RegisterFile, a: u32, b: u32) -> Outcome {
    let product = (a as u64) * (b as u64);
    let value = if fields.shamt == SOP_LOW {
        product as u32
    } else {
        (product >> 32) as u32
    };
    regs.set_unsigned(fields.rd, value);
    Outcome::Ok
}

fn div_family(fields: Rtype, regs: &mut RegisterFile, a: i32, b: i32) -> Outcome {
    if b == 0 {
        return Outcome::DivByZero;
    }
    let value = if fields.shamt == SOP_LOW {
        a.wrapping_div(b) as u32
    } else {
        a.wrapping_rem(b) as u32
    };
    regs.set_unsigned(fields.rd, value);
    Outcome::Ok
}

fn div_family_unsigned(fields: Rtype, regs: &mut RegisterFile, a: u32, b: u32) -> Outcome {
    if b == 0 {
        return Outcome::DivByZero;
    }
    let value = if fields.shamt == SOP_LOW { a / b } else { a % b };
    regs.set_unsigned(fields.rd, value);
    Outcome::Ok
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registers::RegisterName;

    fn fields(rs: u8, rt: u8, rd: u8, shamt: u8, func: u32) -> Rtype {
        Rtype { rs, rt, rd, shamt, func }
    }

    #[test]
    fn add_wraps_like_addu() {
        let mut regs = RegisterFile::new();
        regs.set_unsigned(8, 0xffff_ffff);
        regs.set_unsigned(9, 2);
        let outcome = handle(fields(8, 9, 2, 0, FUNC_ADD), &mut regs);
        assert_eq!(outcome, Outcome::Ok);
        assert_eq!(regs.get_unsigned(2), 1);
    }

    #[test]
    fn srl_rotates_when_rs_lsb_set() {
        let mut regs = RegisterFile::new();
        regs.set_unsigned(9, 0x1);
        let outcome = handle(fields(1, 9, 2, 4, FUNC_SRL), &mut regs);
        assert_eq!(outcome, Outcome::Ok);
        assert_eq!(regs.get_unsigned(2), 0x1000_0000);
    }

    #[test]
    fn sra_sign_extends() {
        let mut regs = RegisterFile::new();
        regs.set_unsigned(9, 0x8000_0000);
        handle(fields(0, 9, 2, 4, FUNC_SRA), &mut regs);
        assert_eq!(regs.get_unsigned(2), 0xf800_0000);
    }

    #[test]
    fn jalr_links_and_schedules_branch() {
        let mut regs = RegisterFile::new();
        regs.set_pc(0x1004);
        regs.set_unsigned(8, 0x2000);
        let outcome = handle(fields(8, 0, 0, 0, FUNC_JALR), &mut regs);
        assert_eq!(outcome, Outcome::Ok);
        assert_eq!(regs.get_unsigned(RegisterName::Ra.index()), 0x1008);
        assert!(regs.branch_pending());
    }

    #[test]
    fn sop32_div_by_zero() {
        let mut regs = RegisterFile::new();
        regs.set_unsigned(8, 7);
        regs.set_unsigned(9, 0);
        let outcome = handle(fields(8, 9, 2, SOP_LOW, FUNC_SOP32), &mut regs);
        assert_eq!(outcome, Outcome::DivByZero);
    }

    #[test]
    fn sop32_div_and_mod() {
        let mut regs = RegisterFile::new();
        regs.set_unsigned(8, 7);
        regs.set_unsigned(9, 2);
        handle(fields(8, 9, 2, SOP_LOW, FUNC_SOP32), &mut regs);
        assert_eq!(regs.get_signed(2), 3);
        handle(fields(8, 9, 3, SOP_HIGH, FUNC_SOP32), &mut regs);
        assert_eq!(regs.get_signed(3), 1);
    }

    #[test]
    fn teq_traps_on_equal() {
        let mut regs = RegisterFile::new();
        regs.set_unsigned(8, 5);
        regs.set_unsigned(9, 5);
        assert_eq!(handle(fields(8, 9, 0, 0, FUNC_TEQ), &mut regs), Outcome::Trap);
    }

    #[test]
    fn unknown_func_is_illegal() {
        let mut regs = RegisterFile::new();
        assert_eq!(handle(fields(0, 0, 0, 0, 0x3f), &mut regs), Outcome::Illegal);
    }
}
