//! The flag-toggle opcodes and NOP. Grounded on the teacher's
//! `opcodes_jump.rs` (`clc`/`sec`/.../`nop`), which groups these with the
//! branch/jump opcodes; split out here since this crate's executor is
//! grouped by what an instruction touches rather than by addressing shape.

use crate::cpu::Cpu;
use crate::opcodes::Mnemonic;

/// Function: set or clear a single status flag; NOP does nothing.
/// Flags: exactly the one flag named by the mnemonic.
pub fn execute(cpu: &mut Cpu, mnemonic: Mnemonic) -> u8 {
    match mnemonic {
        Mnemonic::CLC => cpu.flags.carry = false,
        Mnemonic::SEC => cpu.flags.carry = true,
        Mnemonic::CLD => cpu.flags.decimal = false,
        Mnemonic::SED => cpu.flags.decimal = true,
        Mnemonic::CLI => cpu.flags.interrupt_disable = false,
        Mnemonic::SEI => cpu.flags.interrupt_disable = true,
        Mnemonic::CLV => cpu.flags.overflow = false,
        Mnemonic::NOP => {}
        _ => unreachable!(),
    }
    0
}
