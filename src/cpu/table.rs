/*!
table.rs - The 256-entry opcode table.

Purpose
=======
Maps every opcode byte directly to `{operation, addressing mode, base
cycles}`. The table is a plain `static` array literal indexed by opcode, so
it is fully built at compile time and lookups can never fail.

Dispatch goes through two pure functions keyed by the entry's enum values:
`addressing::apply_addressing_mode` and `execute::apply_operation`.

Illegal opcodes
---------------
Every undocumented opcode maps to `Operation::Illegal` with implied
addressing and the base cycle count the hardware charges. It behaves as a
NOP; no unofficial-opcode side effects are emulated.
*/

/// The twelve addressing modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddrMode {
    Implied,
    Immediate,
    ZeroPage,
    ZeroPageX,
    ZeroPageY,
    Relative,
    Absolute,
    AbsoluteX,
    AbsoluteY,
    Indirect,
    /// `(zp,X)`: pointer indexed before dereference.
    IndexedIndirect,
    /// `(zp),Y`: pointer dereferenced, then indexed.
    IndirectIndexed,
}

impl AddrMode {
    /// Operand bytes following the opcode.
    pub const fn operand_len(self) -> u16 {
        match self {
            AddrMode::Implied => 0,
            AddrMode::Immediate
            | AddrMode::ZeroPage
            | AddrMode::ZeroPageX
            | AddrMode::ZeroPageY
            | AddrMode::Relative
            | AddrMode::IndexedIndirect
            | AddrMode::IndirectIndexed => 1,
            AddrMode::Absolute | AddrMode::AbsoluteX | AddrMode::AbsoluteY | AddrMode::Indirect => 2,
        }
    }

    /// Short tag used by the disassembler.
    pub const fn tag(self) -> &'static str {
        match self {
            AddrMode::Implied => "IMP",
            AddrMode::Immediate => "IMM",
            AddrMode::ZeroPage => "ZP0",
            AddrMode::ZeroPageX => "ZPX",
            AddrMode::ZeroPageY => "ZPY",
            AddrMode::Relative => "REL",
            AddrMode::Absolute => "ABS",
            AddrMode::AbsoluteX => "ABX",
            AddrMode::AbsoluteY => "ABY",
            AddrMode::Indirect => "IND",
            AddrMode::IndexedIndirect => "IZX",
            AddrMode::IndirectIndexed => "IZY",
        }
    }
}

/// The 56 documented operations plus the illegal catch-all.
#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Adc, And, Asl, Bcc, Bcs, Beq, Bit, Bmi,
    Bne, Bpl, Brk, Bvc, Bvs, Clc, Cld, Cli,
    Clv, Cmp, Cpx, Cpy, Dec, Dex, Dey, Eor,
    Inc, Inx, Iny, Jmp, Jsr, Lda, Ldx, Ldy,
    Lsr, Nop, Ora, Pha, Php, Pla, Plp, Rol,
    Ror, Rti, Rts, Sbc, Sec, Sed, Sei, Sta,
    Stx, Sty, Tax, Tay, Tsx, Txa, Txs, Tya,
    Illegal,
}

impl Operation {
    #[rustfmt::skip]
    pub const fn mnemonic(self) -> &'static str {
        use Operation::*;
        match self {
            Adc => "ADC", And => "AND", Asl => "ASL", Bcc => "BCC",
            Bcs => "BCS", Beq => "BEQ", Bit => "BIT", Bmi => "BMI",
            Bne => "BNE", Bpl => "BPL", Brk => "BRK", Bvc => "BVC",
            Bvs => "BVS", Clc => "CLC", Cld => "CLD", Cli => "CLI",
            Clv => "CLV", Cmp => "CMP", Cpx => "CPX", Cpy => "CPY",
            Dec => "DEC", Dex => "DEX", Dey => "DEY", Eor => "EOR",
            Inc => "INC", Inx => "INX", Iny => "INY", Jmp => "JMP",
            Jsr => "JSR", Lda => "LDA", Ldx => "LDX", Ldy => "LDY",
            Lsr => "LSR", Nop => "NOP", Ora => "ORA", Pha => "PHA",
            Php => "PHP", Pla => "PLA", Plp => "PLP", Rol => "ROL",
            Ror => "ROR", Rti => "RTI", Rts => "RTS", Sbc => "SBC",
            Sec => "SEC", Sed => "SED", Sei => "SEI", Sta => "STA",
            Stx => "STX", Sty => "STY", Tax => "TAX", Tay => "TAY",
            Tsx => "TSX", Txa => "TXA", Txs => "TXS", Tya => "TYA",
            Illegal => "???",
        }
    }
}

/// One opcode table entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Opcode {
    pub op: Operation,
    pub mode: AddrMode,
    /// Base cycles, before any conditional extra cycle.
    pub cycles: u8,
}

impl Opcode {
    const fn new(op: Operation, mode: AddrMode, cycles: u8) -> Self {
        Self { op, mode, cycles }
    }

    #[inline]
    pub const fn mnemonic(&self) -> &'static str {
        self.op.mnemonic()
    }

    /// Encoded instruction length in bytes (1..=3).
    #[inline]
    pub const fn byte_len(&self) -> u16 {
        1 + self.mode.operand_len()
    }
}

/// Table entry for `opcode`.
#[inline]
pub fn lookup(opcode: u8) -> &'static Opcode {
    &OPCODES[opcode as usize]
}

use AddrMode::*;
use Operation::*;

#[rustfmt::skip]
pub static OPCODES: [Opcode; 256] = [
    /* 0x00 */ Opcode::new(Brk, Immediate, 7),
    /* 0x01 */ Opcode::new(Ora, IndexedIndirect, 6),
    /* 0x02 */ Opcode::new(Illegal, Implied, 2),
    /* 0x03 */ Opcode::new(Illegal, Implied, 8),
    /* 0x04 */ Opcode::new(Illegal, Implied, 3),
    /* 0x05 */ Opcode::new(Ora, ZeroPage, 3),
    /* 0x06 */ Opcode::new(Asl, ZeroPage, 5),
    /* 0x07 */ Opcode::new(Illegal, Implied, 5),
    /* 0x08 */ Opcode::new(Php, Implied, 3),
    /* 0x09 */ Opcode::new(Ora, Immediate, 2),
    /* 0x0A */ Opcode::new(Asl, Implied, 2),
    /* 0x0B */ Opcode::new(Illegal, Implied, 2),
    /* 0x0C */ Opcode::new(Illegal, Implied, 4),
    /* 0x0D */ Opcode::new(Ora, Absolute, 4),
    /* 0x0E */ Opcode::new(Asl, Absolute, 6),
    /* 0x0F */ Opcode::new(Illegal, Implied, 6),
    /* 0x10 */ Opcode::new(Bpl, Relative, 2),
    /* 0x11 */ Opcode::new(Ora, IndirectIndexed, 5),
    /* 0x12 */ Opcode::new(Illegal, Implied, 2),
    /* 0x13 */ Opcode::new(Illegal, Implied, 8),
    /* 0x14 */ Opcode::new(Illegal, Implied, 4),
    /* 0x15 */ Opcode::new(Ora, ZeroPageX, 4),
    /* 0x16 */ Opcode::new(Asl, ZeroPageX, 6),
    /* 0x17 */ Opcode::new(Illegal, Implied, 6),
    /* 0x18 */ Opcode::new(Clc, Implied, 2),
    /* 0x19 */ Opcode::new(Ora, AbsoluteY, 4),
    /* 0x1A */ Opcode::new(Illegal, Implied, 2),
    /* 0x1B */ Opcode::new(Illegal, Implied, 7),
    /* 0x1C */ Opcode::new(Illegal, Implied, 4),
    /* 0x1D */ Opcode::new(Ora, AbsoluteX, 4),
    /* 0x1E */ Opcode::new(Asl, AbsoluteX, 7),
    /* 0x1F */ Opcode::new(Illegal, Implied, 7),
    /* 0x20 */ Opcode::new(Jsr, Absolute, 6),
    /* 0x21 */ Opcode::new(And, IndexedIndirect, 6),
    /* 0x22 */ Opcode::new(Illegal, Implied, 2),
    /* 0x23 */ Opcode::new(Illegal, Implied, 8),
    /* 0x24 */ Opcode::new(Bit, ZeroPage, 3),
    /* 0x25 */ Opcode::new(And, ZeroPage, 3),
    /* 0x26 */ Opcode::new(Rol, ZeroPage, 5),
    /* 0x27 */ Opcode::new(Illegal, Implied, 5),
    /* 0x28 */ Opcode::new(Plp, Implied, 4),
    /* 0x29 */ Opcode::new(And, Immediate, 2),
    /* 0x2A */ Opcode::new(Rol, Implied, 2),
    /* 0x2B */ Opcode::new(Illegal, Implied, 2),
    /* 0x2C */ Opcode::new(Bit, Absolute, 4),
    /* 0x2D */ Opcode::new(And, Absolute, 4),
    /* 0x2E */ Opcode::new(Rol, Absolute, 6),
    /* 0x2F */ Opcode::new(Illegal, Implied, 6),
    /* 0x30 */ Opcode::new(Bmi, Relative, 2),
    /* 0x31 */ Opcode::new(And, IndirectIndexed, 5),
    /* 0x32 */ Opcode::new(Illegal, Implied, 2),
    /* 0x33 */ Opcode::new(Illegal, Implied, 8),
    /* 0x34 */ Opcode::new(Illegal, Implied, 4),
    /* 0x35 */ Opcode::new(And, ZeroPageX, 4),
    /* 0x36 */ Opcode::new(Rol, ZeroPageX, 6),
    /* 0x37 */ Opcode::new(Illegal, Implied, 6),
    /* 0x38 */ Opcode::new(Sec, Implied, 2),
    /* 0x39 */ Opcode::new(And, AbsoluteY, 4),
    /* 0x3A */ Opcode::new(Illegal, Implied, 2),
    /* 0x3B */ Opcode::new(Illegal, Implied, 7),
    /* 0x3C */ Opcode::new(Illegal, Implied, 4),
    /* 0x3D */ Opcode::new(And, AbsoluteX, 4),
    /* 0x3E */ Opcode::new(Rol, AbsoluteX, 7),
    /* 0x3F */ Opcode::new(Illegal, Implied, 7),
    /* 0x40 */ Opcode::new(Rti, Implied, 6),
    /* 0x41 */ Opcode::new(Eor, IndexedIndirect, 6),
    /* 0x42 */ Opcode::new(Illegal, Implied, 2),
    /* 0x43 */ Opcode::new(Illegal, Implied, 8),
    /* 0x44 */ Opcode::new(Illegal, Implied, 3),
    /* 0x45 */ Opcode::new(Eor, ZeroPage, 3),
    /* 0x46 */ Opcode::new(Lsr, ZeroPage, 5),
    /* 0x47 */ Opcode::new(Illegal, Implied, 5),
    /* 0x48 */ Opcode::new(Pha, Implied, 3),
    /* 0x49 */ Opcode::new(Eor, Immediate, 2),
    /* 0x4A */ Opcode::new(Lsr, Implied, 2),
    /* 0x4B */ Opcode::new(Illegal, Implied, 2),
    /* 0x4C */ Opcode::new(Jmp, Absolute, 3),
    /* 0x4D */ Opcode::new(Eor, Absolute, 4),
    /* 0x4E */ Opcode::new(Lsr, Absolute, 6),
    /* 0x4F */ Opcode::new(Illegal, Implied, 6),
    /* 0x50 */ Opcode::new(Bvc, Relative, 2),
    /* 0x51 */ Opcode::new(Eor, IndirectIndexed, 5),
    /* 0x52 */ Opcode::new(Illegal, Implied, 2),
    /* 0x53 */ Opcode::new(Illegal, Implied, 8),
    /* 0x54 */ Opcode::new(Illegal, Implied, 4),
    /* 0x55 */ Opcode::new(Eor, ZeroPageX, 4),
    /* 0x56 */ Opcode::new(Lsr, ZeroPageX, 6),
    /* 0x57 */ Opcode::new(Illegal, Implied, 6),
    /* 0x58 */ Opcode::new(Cli, Implied, 2),
    /* 0x59 */ Opcode::new(Eor, AbsoluteY, 4),
    /* 0x5A */ Opcode::new(Illegal, Implied, 2),
    /* 0x5B */ Opcode::new(Illegal, Implied, 7),
    /* 0x5C */ Opcode::new(Illegal, Implied, 4),
    /* 0x5D */ Opcode::new(Eor, AbsoluteX, 4),
    /* 0x5E */ Opcode::new(Lsr, AbsoluteX, 7),
    /* 0x5F */ Opcode::new(Illegal, Implied, 7),
    /* 0x60 */ Opcode::new(Rts, Implied, 6),
    /* 0x61 */ Opcode::new(Adc, IndexedIndirect, 6),
    /* 0x62 */ Opcode::new(Illegal, Implied, 2),
    /* 0x63 */ Opcode::new(Illegal, Implied, 8),
    /* 0x64 */ Opcode::new(Illegal, Implied, 3),
    /* 0x65 */ Opcode::new(Adc, ZeroPage, 3),
    /* 0x66 */ Opcode::new(Ror, ZeroPage, 5),
    /* 0x67 */ Opcode::new(Illegal, Implied, 5),
    /* 0x68 */ Opcode::new(Pla, Implied, 4),
    /* 0x69 */ Opcode::new(Adc, Immediate, 2),
    /* 0x6A */ Opcode::new(Ror, Implied, 2),
    /* 0x6B */ Opcode::new(Illegal, Implied, 2),
    /* 0x6C */ Opcode::new(Jmp, Indirect, 5),
    /* 0x6D */ Opcode::new(Adc, Absolute, 4),
    /* 0x6E */ Opcode::new(Ror, Absolute, 6),
    /* 0x6F */ Opcode::new(Illegal, Implied, 6),
    /* 0x70 */ Opcode::new(Bvs, Relative, 2),
    /* 0x71 */ Opcode::new(Adc, IndirectIndexed, 5),
    /* 0x72 */ Opcode::new(Illegal, Implied, 2),
    /* 0x73 */ Opcode::new(Illegal, Implied, 8),
    /* 0x74 */ Opcode::new(Illegal, Implied, 4),
    /* 0x75 */ Opcode::new(Adc, ZeroPageX, 4),
    /* 0x76 */ Opcode::new(Ror, ZeroPageX, 6),
    /* 0x77 */ Opcode::new(Illegal, Implied, 6),
    /* 0x78 */ Opcode::new(Sei, Implied, 2),
    /* 0x79 */ Opcode::new(Adc, AbsoluteY, 4),
    /* 0x7A */ Opcode::new(Illegal, Implied, 2),
    /* 0x7B */ Opcode::new(Illegal, Implied, 7),
    /* 0x7C */ Opcode::new(Illegal, Implied, 4),
    /* 0x7D */ Opcode::new(Adc, AbsoluteX, 4),
    /* 0x7E */ Opcode::new(Ror, AbsoluteX, 7),
    /* 0x7F */ Opcode::new(Illegal, Implied, 7),
    /* 0x80 */ Opcode::new(Illegal, Implied, 2),
    /* 0x81 */ Opcode::new(Sta, IndexedIndirect, 6),
    /* 0x82 */ Opcode::new(Illegal, Implied, 2),
    /* 0x83 */ Opcode::new(Illegal, Implied, 6),
    /* 0x84 */ Opcode::new(Sty, ZeroPage, 3),
    /* 0x85 */ Opcode::new(Sta, ZeroPage, 3),
    /* 0x86 */ Opcode::new(Stx, ZeroPage, 3),
    /* 0x87 */ Opcode::new(Illegal, Implied, 3),
    /* 0x88 */ Opcode::new(Dey, Implied, 2),
    /* 0x89 */ Opcode::new(Illegal, Implied, 2),
    /* 0x8A */ Opcode::new(Txa, Implied, 2),
    /* 0x8B */ Opcode::new(Illegal, Implied, 2),
    /* 0x8C */ Opcode::new(Sty, Absolute, 4),
    /* 0x8D */ Opcode::new(Sta, Absolute, 4),
    /* 0x8E */ Opcode::new(Stx, Absolute, 4),
    /* 0x8F */ Opcode::new(Illegal, Implied, 4),
    /* 0x90 */ Opcode::new(Bcc, Relative, 2),
    /* 0x91 */ Opcode::new(Sta, IndirectIndexed, 6),
    /* 0x92 */ Opcode::new(Illegal, Implied, 2),
    /* 0x93 */ Opcode::new(Illegal, Implied, 6),
    /* 0x94 */ Opcode::new(Sty, ZeroPageX, 4),
    /* 0x95 */ Opcode::new(Sta, ZeroPageX, 4),
    /* 0x96 */ Opcode::new(Stx, ZeroPageY, 4),
    /* 0x97 */ Opcode::new(Illegal, Implied, 4),
    /* 0x98 */ Opcode::new(Tya, Implied, 2),
    /* 0x99 */ Opcode::new(Sta, AbsoluteY, 5),
    /* 0x9A */ Opcode::new(Txs, Implied, 2),
    /* 0x9B */ Opcode::new(Illegal, Implied, 5),
    /* 0x9C */ Opcode::new(Illegal, Implied, 5),
    /* 0x9D */ Opcode::new(Sta, AbsoluteX, 5),
    /* 0x9E */ Opcode::new(Illegal, Implied, 5),
    /* 0x9F */ Opcode::new(Illegal, Implied, 5),
    /* 0xA0 */ Opcode::new(Ldy, Immediate, 2),
    /* 0xA1 */ Opcode::new(Lda, IndexedIndirect, 6),
    /* 0xA2 */ Opcode::new(Ldx, Immediate, 2),
    /* 0xA3 */ Opcode::new(Illegal, Implied, 6),
    /* 0xA4 */ Opcode::new(Ldy, ZeroPage, 3),
    /* 0xA5 */ Opcode::new(Lda, ZeroPage, 3),
    /* 0xA6 */ Opcode::new(Ldx, ZeroPage, 3),
    /* 0xA7 */ Opcode::new(Illegal, Implied, 3),
    /* 0xA8 */ Opcode::new(Tay, Implied, 2),
    /* 0xA9 */ Opcode::new(Lda, Immediate, 2),
    /* 0xAA */ Opcode::new(Tax, Implied, 2),
    /* 0xAB */ Opcode::new(Illegal, Implied, 2),
    /* 0xAC */ Opcode::new(Ldy, Absolute, 4),
    /* 0xAD */ Opcode::new(Lda, Absolute, 4),
    /* 0xAE */ Opcode::new(Ldx, Absolute, 4),
    /* 0xAF */ Opcode::new(Illegal, Implied, 4),
    /* 0xB0 */ Opcode::new(Bcs, Relative, 2),
    /* 0xB1 */ Opcode::new(Lda, IndirectIndexed, 5),
    /* 0xB2 */ Opcode::new(Illegal, Implied, 2),
    /* 0xB3 */ Opcode::new(Illegal, Implied, 5),
    /* 0xB4 */ Opcode::new(Ldy, ZeroPageX, 4),
    /* 0xB5 */ Opcode::new(Lda, ZeroPageX, 4),
    /* 0xB6 */ Opcode::new(Ldx, ZeroPageY, 4),
    /* 0xB7 */ Opcode::new(Illegal, Implied, 4),
    /* 0xB8 */ Opcode::new(Clv, Implied, 2),
    /* 0xB9 */ Opcode::new(Lda, AbsoluteY, 4),
    /* 0xBA */ Opcode::new(Tsx, Implied, 2),
    /* 0xBB */ Opcode::new(Illegal, Implied, 4),
    /* 0xBC */ Opcode::new(Ldy, AbsoluteX, 4),
    /* 0xBD */ Opcode::new(Lda, AbsoluteX, 4),
    /* 0xBE */ Opcode::new(Ldx, AbsoluteY, 4),
    /* 0xBF */ Opcode::new(Illegal, Implied, 4),
    /* 0xC0 */ Opcode::new(Cpy, Immediate, 2),
    /* 0xC1 */ Opcode::new(Cmp, IndexedIndirect, 6),
    /* 0xC2 */ Opcode::new(Illegal, Implied, 2),
    /* 0xC3 */ Opcode::new(Illegal, Implied, 8),
    /* 0xC4 */ Opcode::new(Cpy, ZeroPage, 3),
    /* 0xC5 */ Opcode::new(Cmp, ZeroPage, 3),
    /* 0xC6 */ Opcode::new(Dec, ZeroPage, 5),
    /* 0xC7 */ Opcode::new(Illegal, Implied, 5),
    /* 0xC8 */ Opcode::new(Iny, Implied, 2),
    /* 0xC9 */ Opcode::new(Cmp, Immediate, 2),
    /* 0xCA */ Opcode::new(Dex, Implied, 2),
    /* 0xCB */ Opcode::new(Illegal, Implied, 2),
    /* 0xCC */ Opcode::new(Cpy, Absolute, 4),
    /* 0xCD */ Opcode::new(Cmp, Absolute, 4),
    /* 0xCE */ Opcode::new(Dec, Absolute, 6),
    /* 0xCF */ Opcode::new(Illegal, Implied, 6),
    /* 0xD0 */ Opcode::new(Bne, Relative, 2),
    /* 0xD1 */ Opcode::new(Cmp, IndirectIndexed, 5),
    /* 0xD2 */ Opcode::new(Illegal, Implied, 2),
    /* 0xD3 */ Opcode::new(Illegal, Implied, 8),
    /* 0xD4 */ Opcode::new(Illegal, Implied, 4),
    /* 0xD5 */ Opcode::new(Cmp, ZeroPageX, 4),
    /* 0xD6 */ Opcode::new(Dec, ZeroPageX, 6),
    /* 0xD7 */ Opcode::new(Illegal, Implied, 6),
    /* 0xD8 */ Opcode::new(Cld, Implied, 2),
    /* 0xD9 */ Opcode::new(Cmp, AbsoluteY, 4),
    /* 0xDA */ Opcode::new(Nop, Implied, 2),
    /* 0xDB */ Opcode::new(Illegal, Implied, 7),
    /* 0xDC */ Opcode::new(Illegal, Implied, 4),
    /* 0xDD */ Opcode::new(Cmp, AbsoluteX, 4),
    /* 0xDE */ Opcode::new(Dec, AbsoluteX, 7),
    /* 0xDF */ Opcode::new(Illegal, Implied, 7),
    /* 0xE0 */ Opcode::new(Cpx, Immediate, 2),
    /* 0xE1 */ Opcode::new(Sbc, IndexedIndirect, 6),
    /* 0xE2 */ Opcode::new(Illegal, Implied, 2),
    /* 0xE3 */ Opcode::new(Illegal, Implied, 8),
    /* 0xE4 */ Opcode::new(Cpx, ZeroPage, 3),
    /* 0xE5 */ Opcode::new(Sbc, ZeroPage, 3),
    /* 0xE6 */ Opcode::new(Inc, ZeroPage, 5),
    /* 0xE7 */ Opcode::new(Illegal, Implied, 5),
    /* 0xE8 */ Opcode::new(Inx, Implied, 2),
    /* 0xE9 */ Opcode::new(Sbc, Immediate, 2),
    /* 0xEA */ Opcode::new(Nop, Implied, 2),
    /* 0xEB */ Opcode::new(Illegal, Implied, 2),
    /* 0xEC */ Opcode::new(Cpx, Absolute, 4),
    /* 0xED */ Opcode::new(Sbc, Absolute, 4),
    /* 0xEE */ Opcode::new(Inc, Absolute, 6),
    /* 0xEF */ Opcode::new(Illegal, Implied, 6),
    /* 0xF0 */ Opcode::new(Beq, Relative, 2),
    /* 0xF1 */ Opcode::new(Sbc, IndirectIndexed, 5),
    /* 0xF2 */ Opcode::new(Illegal, Implied, 2),
    /* 0xF3 */ Opcode::new(Illegal, Implied, 8),
    /* 0xF4 */ Opcode::new(Illegal, Implied, 4),
    /* 0xF5 */ Opcode::new(Sbc, ZeroPageX, 4),
    /* 0xF6 */ Opcode::new(Inc, ZeroPageX, 6),
    /* 0xF7 */ Opcode::new(Illegal, Implied, 6),
    /* 0xF8 */ Opcode::new(Sed, Implied, 2),
    /* 0xF9 */ Opcode::new(Sbc, AbsoluteY, 4),
    /* 0xFA */ Opcode::new(Nop, Implied, 2),
    /* 0xFB */ Opcode::new(Illegal, Implied, 7),
    /* 0xFC */ Opcode::new(Illegal, Implied, 4),
    /* 0xFD */ Opcode::new(Sbc, AbsoluteX, 4),
    /* 0xFE */ Opcode::new(Inc, AbsoluteX, 7),
    /* 0xFF */ Opcode::new(Illegal, Implied, 7),
];
