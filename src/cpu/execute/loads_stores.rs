//! LDA/LDX/LDY/STA/STX/STY. Grounded on the teacher's `opcodes_move.rs`.

use super::Operand;
use crate::cpu::Cpu;
use crate::bus::Bus;
use crate::opcodes::Mnemonic;

/// Function: load a register from memory.
/// Flags: Z, N from the loaded value.
pub fn execute(cpu: &mut Cpu, bus: &mut dyn Bus, mnemonic: Mnemonic, operand: &Operand) -> u8 {
    match mnemonic {
        Mnemonic::LDA => {
            cpu.a = operand.value;
            cpu.flags.set_zero_and_negative(cpu.a);
        }
        Mnemonic::LDX => {
            cpu.x = operand.value;
            cpu.flags.set_zero_and_negative(cpu.x);
        }
        Mnemonic::LDY => {
            cpu.y = operand.value;
            cpu.flags.set_zero_and_negative(cpu.y);
        }
        // Function: store a register to memory. Flags: none.
        Mnemonic::STA => bus.write_byte(operand.address.unwrap(), cpu.a),
        Mnemonic::STX => bus.write_byte(operand.address.unwrap(), cpu.x),
        Mnemonic::STY => bus.write_byte(operand.address.unwrap(), cpu.y),
        _ => unreachable!(),
    }
    0
}
