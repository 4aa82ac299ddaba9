//! Black-box end-to-end scenarios against the public `Emulator` API.

use mips32r6emu::instr::encode;
use mips32r6emu::instr::opcodes::*;
use mips32r6emu::memory::Width;
use mips32r6emu::registers::{Cause, RegisterName};
use mips32r6emu::{Emulator, Memory, Outcome};

#[test]
fn add_positive() {
    let mut mem = Memory::new(16);
    mem.store(0, Width::Word, encode::rtype(8, 9, 10, 0, FUNC_ADD))
        .unwrap();
    let mut emu = Emulator::new(mem);
    emu.registers_mut().set_unsigned(8, 1);
    emu.registers_mut().set_unsigned(9, 5);
    assert_eq!(emu.step(), Outcome::Ok);
    assert_eq!(emu.registers().get_unsigned(10), 6);
    assert_eq!(emu.registers().get_pc(), 4);
}

#[test]
fn jal_runs_its_delay_slot_before_branching() {
    let mut mem = Memory::with_base(0x10BEEF00, 16);
    mem.store(0x10BEEF00, Width::Word, encode::jtype(OP_JAL, 0x003FC))
        .unwrap();
    mem.store(0x10BEEF04, Width::Word, encode::itype(OP_ADDIU, 0, 8, 777))
        .unwrap();
    let mut emu = Emulator::new(mem);
    emu.registers_mut().set_pc(0x10BEEF00);

    emu.step();
    emu.step();

    assert_eq!(emu.registers().get_pc(), 0x10000FF0);
    assert_eq!(
        emu.registers().get_unsigned(RegisterName::Ra.index()),
        0x10BEEF08
    );
    assert_eq!(emu.registers().get_unsigned(8), 777);
}

#[test]
fn lw_with_negative_offset() {
    let mut mem = Memory::new(32);
    mem.store(4, Width::Word, 0x8022_2280).unwrap();
    mem.store(0, Width::Word, encode::itype(OP_LW, 8, 9, 0xfff0))
        .unwrap();
    let mut emu = Emulator::new(mem);
    emu.registers_mut().set_unsigned(8, 20);
    assert_eq!(emu.step(), Outcome::Ok);
    assert_eq!(emu.registers().get_unsigned(9), 0x8022_2280);
}

#[test]
fn unaligned_lh_reports_fault_and_leaves_destination_alone() {
    let mut mem = Memory::new(16);
    mem.store(0, Width::Word, encode::itype(OP_LH, 8, 9, 0))
        .unwrap();
    let mut emu = Emulator::new(mem);
    emu.registers_mut().set_unsigned(8, 1);
    emu.registers_mut().set_unsigned(9, 0xdead_beef);
    assert_eq!(emu.step(), Outcome::MemUnaligned { is_store: false });
    assert_eq!(emu.registers().get_unsigned(9), 0xdead_beef);
    assert_eq!(emu.registers().cause(), Cause::AddressErrorLoad);
}

#[test]
fn unaligned_sw_reports_store_fault() {
    let mut mem = Memory::new(16);
    mem.store(0, Width::Word, encode::itype(OP_SW, 8, 9, 1))
        .unwrap();
    let mut emu = Emulator::new(mem);
    assert_eq!(emu.step(), Outcome::MemUnaligned { is_store: true });
    assert_eq!(emu.registers().cause(), Cause::AddressErrorStore);
}

#[test]
fn sop32_div_by_zero() {
    let mut mem = Memory::new(16);
    mem.store(0, Width::Word, encode::rtype(8, 9, 10, SOP_LOW, FUNC_SOP32))
        .unwrap();
    let mut emu = Emulator::new(mem);
    emu.registers_mut().set_unsigned(8, 7);
    emu.registers_mut().set_unsigned(9, 0);
    emu.registers_mut().set_unsigned(10, 0x1234);
    assert_eq!(emu.step(), Outcome::DivByZero);
    assert_eq!(emu.registers().get_unsigned(10), 0x1234);
}

#[test]
fn beqc_compact_branch_moves_pc_with_no_delay_slot() {
    let mut mem = Memory::new(0x2000);
    mem.store(0x1000, Width::Word, encode::itype(OP_POP10, 8, 9, (-80i16) as u16))
        .unwrap();
    let mut emu = Emulator::new(mem);
    emu.registers_mut().set_pc(0x1000);
    emu.registers_mut().set_unsigned(8, 0x64);
    emu.registers_mut().set_unsigned(9, 0x64);
    assert_eq!(emu.step(), Outcome::Ok);
    assert_eq!(emu.registers().get_pc(), 0x1000 - 316);
}

#[test]
fn mmio_short_circuits_a_load() {
    use mips32r6emu::memory::Mmio;

    struct Fixed(u32);
    impl Mmio for Fixed {
        fn try_read(&mut self, addr: u32, _width: Width) -> Option<u32> {
            (addr == 0x100).then_some(self.0)
        }
        fn try_store(&mut self, _addr: u32, _width: Width, _value: u32) -> bool {
            false
        }
    }

    let mem = Memory::new(0x200).with_mmio(Box::new(Fixed(0xcafe_babe)));
    let mut emu = Emulator::new(mem);
    let word = mips32r6emu::instr::encode::itype(OP_LW, 0, 8, 0x100);
    emu.memory_mut().store(0, Width::Word, word).unwrap();
    assert_eq!(emu.step(), Outcome::Ok);
    assert_eq!(emu.registers().get_unsigned(8), 0xcafe_babe);
}

#[test]
fn unrecognized_opcode_is_illegal() {
    let mut mem = Memory::new(16);
    mem.store(0, Width::Word, 0x3c << 26).unwrap();
    let mut emu = Emulator::new(mem);
    assert_eq!(emu.step(), Outcome::Illegal);
    assert_eq!(emu.registers().cause(), Cause::ReservedInstruction);
}

#[test]
fn reserved_special3_func_is_illegal() {
    let mut mem = Memory::new(16);
    mem.store(0, Width::Word, encode::special3(0, 0, 0, 0, 0x3f))
        .unwrap();
    let mut emu = Emulator::new(mem);
    assert_eq!(emu.step(), Outcome::Illegal);
}

#[test]
fn longimm_reserved_form_is_illegal() {
    // POP66 with rs == 0 is the reserved LONGIMM-I form (JIC in full R6).
    let mut mem = Memory::new(16);
    mem.store(0, Width::Word, encode::itype(OP_POP66, 0, 8, 4))
        .unwrap();
    let mut emu = Emulator::new(mem);
    assert_eq!(emu.step(), Outcome::Illegal);
}
