//! PC-relative execution: ADDIUPC/LWPC (19-bit immediate) and
//! AUIPC/ALUIPC (16-bit immediate).

use crate::fields::sign_extend;
use crate::instr::{PcRelKind1, PcRelKind2, PcRelType1, PcRelType2};
use crate::memory::{Memory, Width};
use crate::outcome::Outcome;
use crate::registers::RegisterFile;

pub fn handle_type1(fields: PcRelType1, regs: &mut RegisterFile, mem: &mut Memory) -> Outcome {
    let address = regs
        .get_pc()
        .wrapping_add(sign_extend(fields.imm19, 18) << 2);
    match fields.kind {
        PcRelKind1::Addiupc => {
            regs.set_unsigned(fields.rd, address);
            Outcome::Ok
        }
        PcRelKind1::Lwpc => match mem.read(address, Width::Word) {
            Ok(value) => {
                regs.set_unsigned(fields.rd, value);
                Outcome::Ok
            }
            Err(e) => e.into(),
        },
    }
}

pub fn handle_type2(fields: PcRelType2, regs: &mut RegisterFile) -> Outcome {
    let value = regs.get_pc().wrapping_add((fields.imm16 as i16 as i32 as u32) << 16);
    match fields.kind {
        PcRelKind2::Auipc => {
            regs.set_unsigned(fields.rd, value);
            Outcome::Ok
        }
        PcRelKind2::Aluipc => {
            regs.set_unsigned(fields.rd, value & 0xffff_0000);
            Outcome::Ok
        }
    }
}
