//! ADC/SBC, with binary and BCD adjustment for decimal mode. Grounded on
//! the teacher's `opcodes_logical.rs` `adc`/`sbc`, extended with the
//! decimal-mode nibble correction the teacher's NES-only core omits (§9
//! Open Question: this crate targets the full 6502, not the 2A03, which
//! lacks decimal mode in hardware but still decodes the opcode).

use super::Operand;
use crate::bus::Bus;
use crate::cpu::Cpu;
use crate::opcodes::Mnemonic;

/// Function: ADC adds memory and the carry flag into A; SBC subtracts
/// memory and the inverted carry flag from A. Both honor the decimal flag,
/// performing BCD nibble correction on the binary result.
/// Flags: C, Z, V, N all set from the final (possibly decimal-corrected)
/// result, per the properties a real 6502 exhibits in decimal mode.
pub fn execute(cpu: &mut Cpu, _bus: &mut dyn Bus, mnemonic: Mnemonic, operand: &Operand) -> u8 {
    match mnemonic {
        Mnemonic::ADC => adc(cpu, operand.value),
        Mnemonic::SBC => sbc(cpu, operand.value),
        _ => unreachable!(),
    }
    0
}

fn adc(cpu: &mut Cpu, value: u8) {
    let carry_in = cpu.flags.carry as u16;
    let a = cpu.a;

    let binary_sum = a as u16 + value as u16 + carry_in;
    let binary_result = binary_sum as u8;

    cpu.flags.overflow = (!(a ^ value) & (a ^ binary_result) & 0b1000_0000) != 0;

    if cpu.flags.decimal {
        let mut lo = (a & 0x0f) as u16 + (value & 0x0f) as u16 + carry_in;
        if lo > 0x09 {
            lo += 0x06;
        }
        let mut hi = (a >> 4) as u16 + (value >> 4) as u16 + if lo > 0x0f { 1 } else { 0 };
        // Z and N reflect the binary result on NMOS 6502s even in decimal mode.
        cpu.flags.set_zero_and_negative(binary_result);
        if hi > 0x09 {
            hi += 0x06;
        }
        cpu.flags.carry = hi > 0x0f;
        cpu.a = (((hi & 0x0f) << 4) | (lo & 0x0f)) as u8;
    } else {
        cpu.flags.carry = binary_sum > 0xff;
        cpu.a = binary_result;
        cpu.flags.set_zero_and_negative(cpu.a);
    }
}

fn sbc(cpu: &mut Cpu, value: u8) {
    let borrow_in = !cpu.flags.carry as u16;
    let a = cpu.a;
    let inverted = !value;

    let binary_sum = a as u16 + inverted as u16 + (1 - borrow_in);
    let binary_result = binary_sum as u8;

    cpu.flags.carry = binary_sum > 0xff;
    cpu.flags.overflow = (!(a ^ inverted) & (a ^ binary_result) & 0b1000_0000) != 0;
    cpu.flags.set_zero_and_negative(binary_result);

    if cpu.flags.decimal {
        let mut lo = (a & 0x0f) as i16 - (value & 0x0f) as i16 - borrow_in as i16;
        let mut hi = (a >> 4) as i16 - (value >> 4) as i16;
        if lo < 0 {
            lo += 10;
            hi -= 1;
        }
        if hi < 0 {
            hi += 10;
        }
        cpu.a = (((hi as u8) << 4) | (lo as u8 & 0x0f)) as u8;
    } else {
        cpu.a = binary_result;
    }
}
