//! Numeric opcode and function-field constants for MIPS32 R6.

// Primary (6-bit) opcodes.
pub const OP_SPECIAL: u32 = 0x00;
pub const OP_REGIMM: u32 = 0x01;
pub const OP_J: u32 = 0x02;
pub const OP_JAL: u32 = 0x03;
pub const OP_BEQ: u32 = 0x04;
pub const OP_BNE: u32 = 0x05;
pub const OP_POP06: u32 = 0x06;
pub const OP_POP07: u32 = 0x07;
pub const OP_POP10: u32 = 0x08;
pub const OP_ADDIU: u32 = 0x09;
pub const OP_SLTI: u32 = 0x0a;
pub const OP_SLTIU: u32 = 0x0b;
pub const OP_ANDI: u32 = 0x0c;
pub const OP_ORI: u32 = 0x0d;
pub const OP_XORI: u32 = 0x0e;
pub const OP_AUI: u32 = 0x0f;
pub const OP_COP1: u32 = 0x11;
pub const OP_POP30: u32 = 0x18;
pub const OP_SPECIAL3: u32 = 0x1f;
pub const OP_LB: u32 = 0x20;
pub const OP_LH: u32 = 0x21;
pub const OP_LW: u32 = 0x23;
pub const OP_LBU: u32 = 0x24;
pub const OP_LHU: u32 = 0x25;
pub const OP_SB: u32 = 0x28;
pub const OP_SH: u32 = 0x29;
pub const OP_SW: u32 = 0x2b;
pub const OP_BC: u32 = 0x32;
/// POP66: rs==0 selects the LONGIMM-I (JIC) family; rs!=0 is BEQZC.
pub const OP_POP66: u32 = 0x36;
pub const OP_BALC: u32 = 0x3a;
pub const OP_PCREL: u32 = 0x3b;
/// POP76: rs==0 selects the LONGIMM-I (JIALC) family; rs!=0 is BNEZC.
pub const OP_POP76: u32 = 0x3e;

/// The closed set of primary opcodes that name a `J` family member
/// (absolute jumps and the two compact jump forms).
pub const J_FAMILY_OPCODES: [u32; 4] = [OP_J, OP_JAL, OP_BC, OP_BALC];

/// The primaries whose `rs == 0` case is the reserved LONGIMM-I form.
pub const LONG_IMM_OPCODES: [u32; 2] = [OP_POP66, OP_POP76];

// SPECIAL (R-type) function-field values.
pub const FUNC_SLL: u32 = 0x00;
pub const FUNC_SRL: u32 = 0x02;
pub const FUNC_SRA: u32 = 0x03;
pub const FUNC_SLLV: u32 = 0x04;
pub const FUNC_SRLV: u32 = 0x06;
pub const FUNC_SRAV: u32 = 0x07;
pub const FUNC_JR: u32 = 0x08;
pub const FUNC_JALR: u32 = 0x09;
pub const FUNC_CLZ: u32 = 0x10;
pub const FUNC_CLO: u32 = 0x11;
pub const FUNC_SOP30: u32 = 0x18;
pub const FUNC_SOP31: u32 = 0x19;
pub const FUNC_SOP32: u32 = 0x1a;
pub const FUNC_SOP33: u32 = 0x1b;
pub const FUNC_ADD: u32 = 0x20;
pub const FUNC_ADDU: u32 = 0x21;
pub const FUNC_SUB: u32 = 0x22;
pub const FUNC_SUBU: u32 = 0x23;
pub const FUNC_AND: u32 = 0x24;
pub const FUNC_OR: u32 = 0x25;
pub const FUNC_XOR: u32 = 0x26;
pub const FUNC_NOR: u32 = 0x27;
pub const FUNC_SLT: u32 = 0x2a;
pub const FUNC_SLTU: u32 = 0x2b;
pub const FUNC_SELEQZ: u32 = 0x35;
pub const FUNC_SELNEZ: u32 = 0x37;
pub const FUNC_TGE: u32 = 0x30;
pub const FUNC_TGEU: u32 = 0x31;
pub const FUNC_TLT: u32 = 0x32;
pub const FUNC_TLTU: u32 = 0x33;
pub const FUNC_TEQ: u32 = 0x34;
pub const FUNC_TNE: u32 = 0x36;

/// SOP shift-amount selectors: bit 1 of `shamt` distinguishes the two
/// operations in each SOP30-33 family (`mul`/`div` vs `muh`/`mod`).
pub const SOP_LOW: u8 = 0x02;
pub const SOP_HIGH: u8 = 0x03;

// SPECIAL3 function-field values.
pub const FUNC_EXT: u32 = 0x00;
pub const FUNC_INS: u32 = 0x04;
pub const FUNC_BSHFL: u32 = 0x20;

// SPECIAL3 BSHFL `extra` (instr[10:6]) selectors.
pub const BSHFL_BITSWAP: u8 = 0x00;
pub const BSHFL_WSBH: u8 = 0x02;
pub const BSHFL_SEB: u8 = 0x10;
pub const BSHFL_SEH: u8 = 0x18;
/// ALIGN occupies the four `extra` codes `0b01000..=0b01011`; `bp` is the
/// low 2 bits.
pub const BSHFL_ALIGN_BASE: u8 = 0x08;
pub const BSHFL_ALIGN_MASK: u8 = 0x1c;

// REGIMM sub-opcode (instr[20:16]) values.
pub const REGIMM_BLTZ: u32 = 0x00;
pub const REGIMM_BGEZ: u32 = 0x01;
