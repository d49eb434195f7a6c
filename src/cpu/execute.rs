/*!
execute.rs - 6502 operation semantics.

Purpose
=======
`apply_operation` runs after the addressing mode has filled the decode
latch. It reads its operand through `fetch` (the accumulator for implied
mode, otherwise the byte at `addr_abs`), applies the instruction's effect
and returns 1 if the operation is sensitive to the addressing mode's
page-cross signal.

Cycle-sensitive operations: ADC, SBC, AND, ORA, EOR, CMP, LDA, LDX, LDY.
Everything else returns 0.

Notes
=====
- Decimal mode is settable but never honored: ADC/SBC are always binary.
- SBC is ADC with the operand inverted.
- Shifts/rotates write to A in implied mode, otherwise back to memory.
- Branches charge their own extra cycles directly on `Cpu::cycles`.
- Pushed status copies force BREAK + UNUSED; PLP/RTI restore verbatim.
- Illegal opcodes fall through as NOP.
*/

use crate::cpu::core::Cpu;
use crate::cpu::table::{AddrMode, Operation};
use crate::cpu::{CpuBus, IRQ_VECTOR, Status};

// ---------------------------------------------------------------------------
// Operand helpers
// ---------------------------------------------------------------------------

/// Latch and return the operand for the current instruction.
#[inline]
fn fetch<B: CpuBus>(cpu: &mut Cpu, bus: &mut B) -> u8 {
    if cpu.decode.mode != AddrMode::Implied {
        cpu.decode.fetched = bus.read(cpu.decode.addr_abs);
    }
    cpu.decode.fetched
}

/// Store a shift/rotate/inc result: accumulator in implied mode, else memory.
#[inline]
fn write_back<B: CpuBus>(cpu: &mut Cpu, bus: &mut B, value: u8) {
    if cpu.decode.mode == AddrMode::Implied {
        cpu.state.a = value;
    } else {
        bus.write(cpu.decode.addr_abs, value);
    }
}

// ---------------------------------------------------------------------------
// ALU
// ---------------------------------------------------------------------------

/// Binary add with carry into A; shared by ADC and SBC.
#[inline]
fn add_with_carry(cpu: &mut Cpu, operand: u8) {
    let a = cpu.state.a;
    let p = &mut cpu.state.status;
    let sum = a as u16 + operand as u16 + p.carry() as u16;
    let result = sum as u8;
    p.set_carry(sum > 0xFF);
    p.set_overflow((!(a ^ operand) & (a ^ result)) & 0x80 != 0);
    p.set_zn(result);
    cpu.state.a = result;
}

#[inline]
fn compare(p: &mut Status, reg: u8, operand: u8) {
    p.set_carry(reg >= operand);
    p.set_zn(reg.wrapping_sub(operand));
}

/// Taken-branch handling: +1 cycle, +1 more if the target leaves the page
/// of the instruction that follows the branch.
#[inline]
fn branch_if(cpu: &mut Cpu, cond: bool) {
    if !cond {
        return;
    }
    let next = cpu.state.pc;
    let target = next.wrapping_add(cpu.decode.addr_rel);
    cpu.cycles += 1;
    if (target & 0xFF00) != (next & 0xFF00) {
        cpu.cycles += 1;
    }
    cpu.decode.addr_abs = target;
    cpu.state.pc = target;
}

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

/// Execute `op` against the already-resolved operand.
pub(crate) fn apply_operation<B: CpuBus>(op: Operation, cpu: &mut Cpu, bus: &mut B) -> u8 {
    use Operation::*;

    match op {
        // ----- Load / store -----
        Lda => {
            let v = fetch(cpu, bus);
            cpu.state.a = v;
            cpu.state.status.set_zn(v);
            1
        }
        Ldx => {
            let v = fetch(cpu, bus);
            cpu.state.x = v;
            cpu.state.status.set_zn(v);
            1
        }
        Ldy => {
            let v = fetch(cpu, bus);
            cpu.state.y = v;
            cpu.state.status.set_zn(v);
            1
        }
        Sta => {
            bus.write(cpu.decode.addr_abs, cpu.state.a);
            0
        }
        Stx => {
            bus.write(cpu.decode.addr_abs, cpu.state.x);
            0
        }
        Sty => {
            bus.write(cpu.decode.addr_abs, cpu.state.y);
            0
        }

        // ----- Transfers -----
        Tax => {
            cpu.state.x = cpu.state.a;
            cpu.state.status.set_zn(cpu.state.x);
            0
        }
        Tay => {
            cpu.state.y = cpu.state.a;
            cpu.state.status.set_zn(cpu.state.y);
            0
        }
        Txa => {
            cpu.state.a = cpu.state.x;
            cpu.state.status.set_zn(cpu.state.a);
            0
        }
        Tya => {
            cpu.state.a = cpu.state.y;
            cpu.state.status.set_zn(cpu.state.a);
            0
        }
        Tsx => {
            cpu.state.x = cpu.state.sp;
            cpu.state.status.set_zn(cpu.state.x);
            0
        }
        Txs => {
            cpu.state.sp = cpu.state.x;
            0
        }

        // ----- Arithmetic -----
        Adc => {
            let m = fetch(cpu, bus);
            add_with_carry(cpu, m);
            1
        }
        Sbc => {
            let m = fetch(cpu, bus);
            add_with_carry(cpu, m ^ 0xFF);
            1
        }

        // ----- Compare -----
        Cmp => {
            let m = fetch(cpu, bus);
            compare(&mut cpu.state.status, cpu.state.a, m);
            1
        }
        Cpx => {
            let m = fetch(cpu, bus);
            compare(&mut cpu.state.status, cpu.state.x, m);
            0
        }
        Cpy => {
            let m = fetch(cpu, bus);
            compare(&mut cpu.state.status, cpu.state.y, m);
            0
        }

        // ----- Increments / decrements -----
        Inc => {
            let v = fetch(cpu, bus).wrapping_add(1);
            bus.write(cpu.decode.addr_abs, v);
            cpu.state.status.set_zn(v);
            0
        }
        Dec => {
            let v = fetch(cpu, bus).wrapping_sub(1);
            bus.write(cpu.decode.addr_abs, v);
            cpu.state.status.set_zn(v);
            0
        }
        Inx => {
            cpu.state.x = cpu.state.x.wrapping_add(1);
            cpu.state.status.set_zn(cpu.state.x);
            0
        }
        Iny => {
            cpu.state.y = cpu.state.y.wrapping_add(1);
            cpu.state.status.set_zn(cpu.state.y);
            0
        }
        Dex => {
            cpu.state.x = cpu.state.x.wrapping_sub(1);
            cpu.state.status.set_zn(cpu.state.x);
            0
        }
        Dey => {
            cpu.state.y = cpu.state.y.wrapping_sub(1);
            cpu.state.status.set_zn(cpu.state.y);
            0
        }

        // ----- Shifts / rotates -----
        Asl => {
            let m = fetch(cpu, bus);
            let v = m << 1;
            cpu.state.status.set_carry(m & 0x80 != 0);
            cpu.state.status.set_zn(v);
            write_back(cpu, bus, v);
            0
        }
        Lsr => {
            let m = fetch(cpu, bus);
            let v = m >> 1;
            cpu.state.status.set_carry(m & 0x01 != 0);
            cpu.state.status.set_zn(v);
            write_back(cpu, bus, v);
            0
        }
        Rol => {
            let m = fetch(cpu, bus);
            let v = (m << 1) | cpu.state.status.carry() as u8;
            cpu.state.status.set_carry(m & 0x80 != 0);
            cpu.state.status.set_zn(v);
            write_back(cpu, bus, v);
            0
        }
        Ror => {
            let m = fetch(cpu, bus);
            let v = (m >> 1) | ((cpu.state.status.carry() as u8) << 7);
            cpu.state.status.set_carry(m & 0x01 != 0);
            cpu.state.status.set_zn(v);
            write_back(cpu, bus, v);
            0
        }

        // ----- Logical -----
        And => {
            let m = fetch(cpu, bus);
            cpu.state.a &= m;
            cpu.state.status.set_zn(cpu.state.a);
            1
        }
        Ora => {
            let m = fetch(cpu, bus);
            cpu.state.a |= m;
            cpu.state.status.set_zn(cpu.state.a);
            1
        }
        Eor => {
            let m = fetch(cpu, bus);
            cpu.state.a ^= m;
            cpu.state.status.set_zn(cpu.state.a);
            1
        }
        Bit => {
            let m = fetch(cpu, bus);
            let p = &mut cpu.state.status;
            p.set_zero(cpu.state.a & m == 0);
            p.set_overflow(m & 0x40 != 0);
            p.set_negative(m & 0x80 != 0);
            0
        }

        // ----- Branches -----
        Bcc => {
            branch_if(cpu, !cpu.state.status.carry());
            0
        }
        Bcs => {
            branch_if(cpu, cpu.state.status.carry());
            0
        }
        Beq => {
            branch_if(cpu, cpu.state.status.zero());
            0
        }
        Bne => {
            branch_if(cpu, !cpu.state.status.zero());
            0
        }
        Bpl => {
            branch_if(cpu, !cpu.state.status.negative());
            0
        }
        Bmi => {
            branch_if(cpu, cpu.state.status.negative());
            0
        }
        Bvc => {
            branch_if(cpu, !cpu.state.status.overflow());
            0
        }
        Bvs => {
            branch_if(cpu, cpu.state.status.overflow());
            0
        }

        // ----- Flags -----
        Clc => {
            cpu.state.status.set_carry(false);
            0
        }
        Sec => {
            cpu.state.status.set_carry(true);
            0
        }
        Cli => {
            cpu.state.status.set_irq_disable(false);
            0
        }
        Sei => {
            cpu.state.status.set_irq_disable(true);
            0
        }
        Cld => {
            cpu.state.status.set_decimal(false);
            0
        }
        Sed => {
            cpu.state.status.set_decimal(true);
            0
        }
        Clv => {
            cpu.state.status.set_overflow(false);
            0
        }

        // ----- Stack -----
        Pha => {
            let a = cpu.state.a;
            cpu.state.push_u8(bus, a);
            0
        }
        Pla => {
            let v = cpu.state.pop_u8(bus);
            cpu.state.a = v;
            cpu.state.status.set_zn(v);
            0
        }
        Php => {
            let p = cpu.state.status.pushed();
            cpu.state.push_u8(bus, p);
            0
        }
        Plp => {
            let p = cpu.state.pop_u8(bus);
            cpu.state.status = Status::from_bits(p);
            0
        }

        // ----- Control flow -----
        Jmp => {
            cpu.state.pc = cpu.decode.addr_abs;
            0
        }
        Jsr => {
            let ret = cpu.state.pc.wrapping_sub(1);
            cpu.state.push_u16(bus, ret);
            cpu.state.pc = cpu.decode.addr_abs;
            0
        }
        Rts => {
            cpu.state.pc = cpu.state.pop_u16(bus).wrapping_add(1);
            0
        }
        Brk => {
            // The padding byte was already consumed by the immediate operand.
            let pc = cpu.state.pc;
            cpu.state.push_u16(bus, pc);
            let p = cpu.state.status.pushed();
            cpu.state.push_u8(bus, p);
            cpu.state.status.set_irq_disable(true);
            cpu.state.pc = bus.read_word(IRQ_VECTOR);
            0
        }
        Rti => {
            let p = cpu.state.pop_u8(bus);
            cpu.state.status = Status::from_bits(p);
            cpu.state.pc = cpu.state.pop_u16(bus);
            0
        }

        Nop | Illegal => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bus::Bus;
    use crate::cpu::state::{BREAK, CARRY, UNUSED};
    use crate::test_utils::flat_bus;

    /// CPU with the decode latch pointing at a scratch operand at `$0040`.
    fn setup(mode: AddrMode, operand: u8) -> (Cpu, Bus) {
        let mut bus = flat_bus(&[], 0x8000);
        bus.write(0x0040, operand);
        let mut cpu = Cpu::new();
        cpu.state.pc = 0x8002;
        cpu.decode.mode = mode;
        cpu.decode.addr_abs = 0x0040;
        (cpu, bus)
    }

    #[test]
    fn adc_signed_overflow() {
        let (mut cpu, mut bus) = setup(AddrMode::Immediate, 0x50);
        cpu.state.a = 0x50;
        cpu.state.status.set_carry(false);
        let extra = apply_operation(Operation::Adc, &mut cpu, &mut bus);
        let p = cpu.state.status;
        assert_eq!(cpu.state.a, 0xA0);
        assert!(p.overflow());
        assert!(!p.carry());
        assert!(p.negative());
        assert!(!p.zero());
        assert_eq!(extra, 1);
    }

    #[test]
    fn adc_carry_out_and_zero() {
        let (mut cpu, mut bus) = setup(AddrMode::Immediate, 0x01);
        cpu.state.a = 0xFF;
        cpu.state.status.set_carry(false);
        apply_operation(Operation::Adc, &mut cpu, &mut bus);
        assert_eq!(cpu.state.a, 0x00);
        assert!(cpu.state.status.carry());
        assert!(cpu.state.status.zero());
        assert!(!cpu.state.status.overflow());
    }

    #[test]
    fn sbc_borrow() {
        let (mut cpu, mut bus) = setup(AddrMode::Immediate, 0x01);
        cpu.state.a = 0x00;
        cpu.state.status.set_carry(true);
        apply_operation(Operation::Sbc, &mut cpu, &mut bus);
        assert_eq!(cpu.state.a, 0xFF);
        assert!(!cpu.state.status.carry());
        assert!(cpu.state.status.negative());
    }

    #[test]
    fn decimal_flag_is_ignored_by_adc() {
        let (mut cpu, mut bus) = setup(AddrMode::Immediate, 0x01);
        cpu.state.a = 0x09;
        cpu.state.status.set_decimal(true);
        cpu.state.status.set_carry(false);
        apply_operation(Operation::Adc, &mut cpu, &mut bus);
        assert_eq!(cpu.state.a, 0x0A);
    }

    #[test]
    fn compare_sets_carry_zero_negative() {
        let (mut cpu, mut bus) = setup(AddrMode::Immediate, 0x10);
        cpu.state.a = 0x10;
        assert_eq!(apply_operation(Operation::Cmp, &mut cpu, &mut bus), 1);
        assert!(cpu.state.status.carry());
        assert!(cpu.state.status.zero());

        cpu.state.x = 0x0F;
        assert_eq!(apply_operation(Operation::Cpx, &mut cpu, &mut bus), 0);
        assert!(!cpu.state.status.carry());
        assert!(!cpu.state.status.zero());
        assert!(cpu.state.status.negative());
    }

    #[test]
    fn bit_copies_operand_bits() {
        let (mut cpu, mut bus) = setup(AddrMode::ZeroPage, 0xC0);
        cpu.state.a = 0x01;
        apply_operation(Operation::Bit, &mut cpu, &mut bus);
        let p = cpu.state.status;
        assert!(p.zero());
        assert!(p.overflow());
        assert!(p.negative());
        assert_eq!(cpu.state.a, 0x01);
    }

    #[test]
    fn shifts_target_accumulator_in_implied_mode() {
        let (mut cpu, mut bus) = setup(AddrMode::Implied, 0x00);
        cpu.state.a = 0x81;
        cpu.decode.fetched = 0x81;
        apply_operation(Operation::Asl, &mut cpu, &mut bus);
        assert_eq!(cpu.state.a, 0x02);
        assert!(cpu.state.status.carry());
        assert_eq!(bus.read(0x0040), 0x00);
    }

    #[test]
    fn rotate_memory_feeds_carry() {
        let (mut cpu, mut bus) = setup(AddrMode::ZeroPage, 0x01);
        cpu.state.status.set_carry(true);
        apply_operation(Operation::Ror, &mut cpu, &mut bus);
        assert_eq!(bus.read(0x0040), 0x80);
        assert!(cpu.state.status.carry());
        assert!(cpu.state.status.negative());
    }

    #[test]
    fn inc_dec_wrap() {
        let (mut cpu, mut bus) = setup(AddrMode::ZeroPage, 0xFF);
        apply_operation(Operation::Inc, &mut cpu, &mut bus);
        assert_eq!(bus.read(0x0040), 0x00);
        assert!(cpu.state.status.zero());
        apply_operation(Operation::Dec, &mut cpu, &mut bus);
        assert_eq!(bus.read(0x0040), 0xFF);
        assert!(cpu.state.status.negative());
    }

    #[test]
    fn php_plp_round_trip() {
        let (mut cpu, mut bus) = setup(AddrMode::Implied, 0);
        cpu.state.status = Status::from_bits(CARRY);
        apply_operation(Operation::Php, &mut cpu, &mut bus);
        let pushed = bus.read(0x01FD);
        assert_eq!(pushed, CARRY | BREAK | UNUSED);
        // Live status untouched by the push
        assert_eq!(cpu.state.status.bits(), CARRY);
        apply_operation(Operation::Plp, &mut cpu, &mut bus);
        assert_eq!(cpu.state.status.bits(), pushed);
        assert_eq!(cpu.state.sp, 0xFD);
    }

    #[test]
    fn beq_taken_backwards() {
        let (mut cpu, mut bus) = setup(AddrMode::Relative, 0);
        cpu.decode.addr_rel = (-2i8) as u16;
        cpu.state.status.set_zero(true);
        let before = cpu.cycles;
        apply_operation(Operation::Beq, &mut cpu, &mut bus);
        assert_eq!(cpu.state.pc, 0x8000);
        assert!(cpu.cycles > before);
    }

    #[test]
    fn beq_not_taken() {
        let (mut cpu, mut bus) = setup(AddrMode::Relative, 0);
        cpu.decode.addr_rel = (-2i8) as u16;
        cpu.state.status.set_zero(false);
        let before = cpu.cycles;
        apply_operation(Operation::Beq, &mut cpu, &mut bus);
        assert_eq!(cpu.state.pc, 0x8002);
        assert_eq!(cpu.cycles, before);
    }

    #[test]
    fn branch_across_page_costs_two() {
        let (mut cpu, mut bus) = setup(AddrMode::Relative, 0);
        cpu.state.pc = 0x80FE;
        cpu.decode.addr_rel = 0x0004;
        cpu.state.status.set_carry(false);
        apply_operation(Operation::Bcc, &mut cpu, &mut bus);
        assert_eq!(cpu.state.pc, 0x8102);
        assert_eq!(cpu.cycles, 2);
    }

    #[test]
    fn jsr_rts_pair() {
        let (mut cpu, mut bus) = setup(AddrMode::Absolute, 0);
        cpu.state.pc = 0x8003;
        cpu.decode.addr_abs = 0x9000;
        apply_operation(Operation::Jsr, &mut cpu, &mut bus);
        assert_eq!(cpu.state.pc, 0x9000);
        assert_eq!(bus.read(0x01FD), 0x80);
        assert_eq!(bus.read(0x01FC), 0x02);
        apply_operation(Operation::Rts, &mut cpu, &mut bus);
        assert_eq!(cpu.state.pc, 0x8003);
    }

    #[test]
    fn brk_pushes_and_vectors() {
        let (mut cpu, mut bus) = setup(AddrMode::Immediate, 0);
        bus.write(0xFFFE, 0x00);
        bus.write(0xFFFF, 0x90);
        cpu.state.status = Status::from_bits(UNUSED);
        apply_operation(Operation::Brk, &mut cpu, &mut bus);
        assert_eq!(cpu.state.pc, 0x9000);
        assert!(cpu.state.status.irq_disable());
        assert_eq!(bus.read(0x01FD), 0x80);
        assert_eq!(bus.read(0x01FC), 0x02);
        assert_eq!(bus.read(0x01FB), UNUSED | BREAK);

        apply_operation(Operation::Rti, &mut cpu, &mut bus);
        assert_eq!(cpu.state.pc, 0x8002);
        assert_eq!(cpu.state.status.bits(), UNUSED | BREAK);
    }

    #[test]
    fn transfers_set_zn_except_txs() {
        let (mut cpu, mut bus) = setup(AddrMode::Implied, 0);
        cpu.state.a = 0x80;
        apply_operation(Operation::Tay, &mut cpu, &mut bus);
        assert_eq!(cpu.state.y, 0x80);
        assert!(cpu.state.status.negative());

        cpu.state.y = 0x00;
        apply_operation(Operation::Tya, &mut cpu, &mut bus);
        assert_eq!(cpu.state.a, 0x00);
        assert!(cpu.state.status.zero());
        assert!(!cpu.state.status.negative());

        cpu.state.sp = 0xF0;
        apply_operation(Operation::Tsx, &mut cpu, &mut bus);
        assert_eq!(cpu.state.x, 0xF0);
        assert!(cpu.state.status.negative());
        assert!(!cpu.state.status.zero());

        // TXS with X=0 must not touch Z or N
        cpu.state.x = 0x00;
        cpu.state.status.set_zero(true);
        cpu.state.status.set_negative(true);
        let before = cpu.state.status;
        apply_operation(Operation::Txs, &mut cpu, &mut bus);
        assert_eq!(cpu.state.sp, 0x00);
        assert_eq!(cpu.state.status, before);
    }

    #[test]
    fn stores_leave_status_alone() {
        let (mut cpu, mut bus) = setup(AddrMode::ZeroPage, 0x55);
        cpu.state.a = 0x00;
        cpu.state.x = 0x80;
        cpu.state.y = 0x7F;
        cpu.state.status = Status::from_bits(UNUSED | CARRY);
        let before = cpu.state.status;

        apply_operation(Operation::Sta, &mut cpu, &mut bus);
        assert_eq!(bus.read(0x0040), 0x00);
        assert_eq!(cpu.state.status, before);

        apply_operation(Operation::Stx, &mut cpu, &mut bus);
        assert_eq!(bus.read(0x0040), 0x80);
        assert_eq!(cpu.state.status, before);

        apply_operation(Operation::Sty, &mut cpu, &mut bus);
        assert_eq!(bus.read(0x0040), 0x7F);
        assert_eq!(cpu.state.status, before);
    }

    #[test]
    fn ldy_sets_zn_and_reports_page_sensitivity() {
        let (mut cpu, mut bus) = setup(AddrMode::Immediate, 0x00);
        cpu.state.y = 0x33;
        assert_eq!(apply_operation(Operation::Ldy, &mut cpu, &mut bus), 1);
        assert_eq!(cpu.state.y, 0x00);
        assert!(cpu.state.status.zero());
    }

    #[test]
    fn pla_sets_zn_from_pulled_byte() {
        let (mut cpu, mut bus) = setup(AddrMode::Implied, 0);
        cpu.state.push_u8(&mut bus, 0x80);
        cpu.state.push_u8(&mut bus, 0x00);
        cpu.state.a = 0x11;

        apply_operation(Operation::Pla, &mut cpu, &mut bus);
        assert_eq!(cpu.state.a, 0x00);
        assert!(cpu.state.status.zero());
        assert!(!cpu.state.status.negative());

        apply_operation(Operation::Pla, &mut cpu, &mut bus);
        assert_eq!(cpu.state.a, 0x80);
        assert!(!cpu.state.status.zero());
        assert!(cpu.state.status.negative());
        assert_eq!(cpu.state.sp, 0xFD);
    }

    #[test]
    fn lsr_and_rol_on_accumulator() {
        let (mut cpu, mut bus) = setup(AddrMode::Implied, 0);
        cpu.state.a = 0x81;
        cpu.decode.fetched = 0x81;
        apply_operation(Operation::Lsr, &mut cpu, &mut bus);
        assert_eq!(cpu.state.a, 0x40);
        assert!(cpu.state.status.carry());
        assert!(!cpu.state.status.negative());

        cpu.decode.fetched = cpu.state.a;
        apply_operation(Operation::Rol, &mut cpu, &mut bus);
        assert_eq!(cpu.state.a, 0x81);
        assert!(!cpu.state.status.carry());
        assert!(cpu.state.status.negative());
    }

    #[test]
    fn lsr_memory_to_zero() {
        let (mut cpu, mut bus) = setup(AddrMode::ZeroPage, 0x01);
        cpu.state.a = 0x77;
        apply_operation(Operation::Lsr, &mut cpu, &mut bus);
        assert_eq!(bus.read(0x0040), 0x00);
        assert_eq!(cpu.state.a, 0x77);
        assert!(cpu.state.status.carry());
        assert!(cpu.state.status.zero());
    }

    #[test]
    fn and_ora_eor_against_memory() {
        let (mut cpu, mut bus) = setup(AddrMode::ZeroPage, 0x0F);
        cpu.state.a = 0x81;
        assert_eq!(apply_operation(Operation::And, &mut cpu, &mut bus), 1);
        assert_eq!(cpu.state.a, 0x01);
        assert!(!cpu.state.status.zero());

        bus.write(0x0040, 0xF0);
        assert_eq!(apply_operation(Operation::Ora, &mut cpu, &mut bus), 1);
        assert_eq!(cpu.state.a, 0xF1);
        assert!(cpu.state.status.negative());

        bus.write(0x0040, 0xF1);
        assert_eq!(apply_operation(Operation::Eor, &mut cpu, &mut bus), 1);
        assert_eq!(cpu.state.a, 0x00);
        assert!(cpu.state.status.zero());
        assert!(!cpu.state.status.negative());
    }

    #[test]
    fn jmp_absolute_loads_pc() {
        let (mut cpu, mut bus) = setup(AddrMode::Absolute, 0);
        cpu.decode.addr_abs = 0x9123;
        let sp = cpu.state.sp;
        apply_operation(Operation::Jmp, &mut cpu, &mut bus);
        assert_eq!(cpu.state.pc, 0x9123);
        assert_eq!(cpu.state.sp, sp);
    }

    #[test]
    fn decimal_and_overflow_flag_ops() {
        let (mut cpu, mut bus) = setup(AddrMode::Implied, 0);
        apply_operation(Operation::Sed, &mut cpu, &mut bus);
        assert!(cpu.state.status.decimal());
        apply_operation(Operation::Cld, &mut cpu, &mut bus);
        assert!(!cpu.state.status.decimal());

        cpu.state.status.set_overflow(true);
        apply_operation(Operation::Clv, &mut cpu, &mut bus);
        assert!(!cpu.state.status.overflow());
    }

    #[test]
    fn sign_and_overflow_branches() {
        let cases = [
            (Operation::Bpl, false, false, true),
            (Operation::Bpl, true, false, false),
            (Operation::Bmi, true, false, true),
            (Operation::Bmi, false, false, false),
            (Operation::Bvc, false, false, true),
            (Operation::Bvc, false, true, false),
            (Operation::Bvs, false, true, true),
            (Operation::Bvs, false, false, false),
        ];
        for (op, negative, overflow, taken) in cases {
            let (mut cpu, mut bus) = setup(AddrMode::Relative, 0);
            cpu.decode.addr_rel = 0x0010;
            cpu.state.status.set_negative(negative);
            cpu.state.status.set_overflow(overflow);
            apply_operation(op, &mut cpu, &mut bus);
            let expected = if taken { 0x8012 } else { 0x8002 };
            assert_eq!(cpu.state.pc, expected, "{op:?} n={negative} v={overflow}");
            assert_eq!(cpu.cycles, taken as u8, "{op:?} n={negative} v={overflow}");
        }
    }

    #[test]
    fn illegal_is_a_no_op() {
        let (mut cpu, mut bus) = setup(AddrMode::Implied, 0);
        let before = *cpu.state();
        assert_eq!(apply_operation(Operation::Illegal, &mut cpu, &mut bus), 0);
        assert_eq!(*cpu.state(), before);
    }
}
