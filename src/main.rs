use std::error::Error;

use arness_core::System;
use arness_core::rom::PRG_BANK_SIZE;

fn build_demo_prg() -> Vec<u8> {
    // PRG 16KB, mirrored at $8000 and $C000
    let mut prg = vec![0xEAu8; PRG_BANK_SIZE];

    // Program at $8000 (offset 0x0000 in PRG)
    let program: &[u8] = &[
        0xA9, 0x10, // LDA #$10
        0x69, 0x05, // ADC #$05 => A = 0x15
        0x8D, 0x00, 0x02, // STA $0200
        0xE8, // INX
        0xD0, 0xFD, // BNE -3 -> loop until X wraps to 0
        0x00, // BRK
    ];
    prg[..program.len()].copy_from_slice(program);

    // Vectors (NMI, RESET, IRQ/BRK) at the top of the bank:
    // $FFFA/$FFFB (NMI), $FFFC/$FFFD (RESET), $FFFE/$FFFF (IRQ/BRK)
    let reset: u16 = 0x8000;
    let nmi: u16 = 0x8000;
    let irq: u16 = 0x9000;
    prg[0x3FFA..0x3FFC].copy_from_slice(&nmi.to_le_bytes());
    prg[0x3FFC..0x3FFE].copy_from_slice(&reset.to_le_bytes());
    prg[0x3FFE..0x4000].copy_from_slice(&irq.to_le_bytes());
    prg
}

fn main() -> Result<(), Box<dyn Error>> {
    let mut system = System::new()?;
    system.load_program_bytes(&build_demo_prg())?;

    for (_, line) in system.disassemble(0x8000, 0x800A) {
        println!("{line}");
    }

    // Run until BRK lands in the IRQ handler (with a safety cap)
    let max_instr: usize = 10_000;
    system.run_instructions(0);
    for _ in 0..max_instr {
        system.step_instruction();
        if system.cpu().pc() == 0x9000 {
            break;
        }
    }

    let s = system.snapshot();
    println!("A: 0x{:02X}", s.a);
    println!("X: 0x{:02X}", s.x);
    println!("Y: 0x{:02X}", s.y);
    println!("SP: 0x{:02X}", s.sp);
    println!("PC: 0x{:04X}", s.pc);
    println!("P (flags): 0b{:08b} ({})", s.status, system.cpu().state().status);
    println!("cycles: {}", s.cycles);
    println!("{}", system.dump_memory(0x0200, 0x020F));
    Ok(())
}
