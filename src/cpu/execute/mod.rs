//! The executor (§4.C): one function per mnemonic group, matching the
//! teacher's file split (`opcodes_move.rs`, `opcodes_logical.rs`,
//! `opcodes_jump.rs`, plus an illegal-opcodes file the teacher didn't have
//! but the pack's other examples do) and its `/// Function:` / `/// Flags:`
//! doc-comment convention.

mod arithmetic;
mod branches_jumps;
mod flags_ops;
mod illegal;
mod loads_stores;
mod logical;
mod shifts;
mod transfers_stack;

use super::addressing::Operand;
use super::Cpu;
use crate::bus::Bus;
use crate::config::CpuConfig;
use crate::error::CpuError;
use crate::opcodes::{Mnemonic, OpcodeEntry};

/// Run one decoded instruction. Returns extra cycles beyond the table's
/// `base_cycles` (+1 for an addressing-mode page-cross, already applied by
/// the caller) — used by branches, whose extra cost depends on whether the
/// branch was taken and whether *that* jump crossed a page.
pub fn dispatch(
    cpu: &mut Cpu,
    bus: &mut dyn Bus,
    entry: OpcodeEntry,
    operand: &Operand,
    config: CpuConfig,
) -> Result<u8, CpuError> {
    use Mnemonic::*;

    if config.strict_unstable_opcodes && is_unstable(entry.mnemonic) {
        return Err(CpuError::Halted {
            opcode: entry.opcode,
            pc: cpu.pc(),
        });
    }

    let extra = match entry.mnemonic {
        LDA | LDX | LDY | STA | STX | STY => loads_stores::execute(cpu, bus, entry.mnemonic, operand),
        TAX | TXA | TAY | TYA | TSX | TXS | PHA | PLA | PHP | PLP => {
            transfers_stack::execute(cpu, bus, entry.mnemonic, operand)
        }
        AND | ORA | EOR | BIT | CMP | CPX | CPY => logical::execute(cpu, bus, entry.mnemonic, operand),
        ASL | LSR | ROL | ROR | INC | DEC | INX | INY | DEX | DEY => {
            shifts::execute(cpu, bus, entry.mnemonic, operand)
        }
        ADC | SBC => arithmetic::execute(cpu, bus, entry.mnemonic, operand),
        CLC | SEC | CLD | SED | CLI | SEI | CLV | NOP => flags_ops::execute(cpu, entry.mnemonic),
        BPL | BMI | BVC | BVS | BCC | BCS | BNE | BEQ => {
            branches_jumps::branch(cpu, entry.mnemonic, operand)
        }
        JMP | JSR | RTS | RTI | BRK => branches_jumps::jump(cpu, bus, entry.mnemonic, operand),
        SLO | RLA | SRE | RRA | SAX | LAX | DCP | ISC | ANC | ALR | ARR | XAA | AXS | AHX
        | SHY | SHX | TAS | LAS => illegal::execute(cpu, bus, entry.mnemonic, operand),
        KIL => unreachable!("KIL is intercepted in Cpu::step before dispatch"),
    };

    Ok(extra)
}

fn is_unstable(mnemonic: Mnemonic) -> bool {
    matches!(
        mnemonic,
        Mnemonic::XAA | Mnemonic::AHX | Mnemonic::SHX | Mnemonic::SHY | Mnemonic::TAS
    )
}
