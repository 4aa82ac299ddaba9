//! SPECIAL3 execution: bit-field extract/insert and the BSHFL byte/bit
//! shuffle family.

use crate::fields::{mask, sign_extend};
use crate::instr::opcodes::*;
use crate::instr::{ExtType, InsType, Special3BshflType};
use crate::outcome::Outcome;
use crate::registers::RegisterFile;

fn bitswap_byte(b: u8) -> u8 {
    b.reverse_bits()
}

fn bitswap(value: u32) -> u32 {
    u32::from_le_bytes(value.to_le_bytes().map(bitswap_byte))
}

fn wsbh(value: u32) -> u32 {
    let bytes = value.to_le_bytes();
    u32::from_le_bytes([bytes[1], bytes[0], bytes[3], bytes[2]])
}

fn align(rs_val: u32, rt_val: u32, bp: u8) -> u32 {
    let concat = ((rs_val as u64) << 32) | (rt_val as u64);
    let rotated = concat.rotate_left((bp as u32 & 0x3) * 8);
    rotated as u32
}

pub fn handle_bshfl(fields: Special3BshflType, regs: &mut RegisterFile) -> Outcome {
    let rt_val = regs.get_unsigned(fields.rt);
    if fields.extra & BSHFL_ALIGN_MASK == BSHFL_ALIGN_BASE {
        let rs_val = regs.get_unsigned(fields.rs);
        let bp = fields.extra & 0x3;
        regs.set_unsigned(fields.rd, align(rs_val, rt_val, bp));
        return Outcome::Ok;
    }
    let value = match fields.extra {
        BSHFL_BITSWAP => bitswap(rt_val),
        BSHFL_WSBH => wsbh(rt_val),
        BSHFL_SEB => sign_extend(rt_val & 0xff, 7),
        BSHFL_SEH => sign_extend(rt_val & 0xffff, 15),
        _ => return Outcome::Illegal,
    };
    regs.set_unsigned(fields.rd, value);
    Outcome::Ok
}

fn field_mask(size: u32) -> u32 {
    // `size` can legitimately be 32 (extracting/inserting a full word),
    // and `1u32 << 32` overflows, so that case is special-cased to !0.
    if size >= 32 {
        u32::MAX
    } else {
        mask(size)
    }
}

pub fn handle_ext(fields: ExtType, regs: &mut RegisterFile) -> Outcome {
    let size = fields.msbd as u32 + 1;
    let value = (regs.get_unsigned(fields.rs) >> fields.lsb) & field_mask(size);
    regs.set_unsigned(fields.rt, value);
    Outcome::Ok
}

pub fn handle_ins(fields: InsType, regs: &mut RegisterFile) -> Outcome {
    let size = fields.msb as u32 - fields.lsb as u32 + 1;
    let window = field_mask(size) << fields.lsb;
    let inserted = (regs.get_unsigned(fields.rs) << fields.lsb) & window;
    let preserved = regs.get_unsigned(fields.rt) & !window;
    regs.set_unsigned(fields.rt, preserved | inserted);
    Outcome::Ok
}
