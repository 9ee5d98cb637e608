//! The Interrupt Sequencer (§4.D): NMI latch/countdown, IRQ gating by the
//! I flag, and the shared push-P/jump-to-vector sequence BRK also uses.
//! Grounded on the teacher's `handle_irq` (present but never wired up, and
//! itself buggy — it loads `ResetVector` instead of the IRQ/BRK vector);
//! this version fixes that and adds NMI, which the teacher never
//! implemented at all.

use super::Cpu;
use crate::bus::Bus;
use crate::constants::InterruptVector;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterruptKind {
    Nmi,
    Irq,
    Reset,
}

/// Push PC and P (with B=0, matching hardware), set the I flag, and load PC
/// from `vector`. Shared by NMI, IRQ, and BRK (BRK pushes B=1 itself before
/// calling a variant of this, since it also increments PC past the
/// signature byte).
pub fn enter_interrupt(cpu: &mut Cpu, bus: &mut dyn Bus, vector: InterruptVector, break_flag: bool) {
    cpu.push_u16(bus, cpu.pc);
    cpu.push_byte(bus, cpu.flags.pack(break_flag));
    cpu.flags.interrupt_disable = true;
    cpu.pc = bus.read_u16(vector as u16);
}

/// Called once per `step()`, before decode. Returns the interrupt taken (if
/// any) along with its cycle cost, so `step()` can report it via
/// `StepOutcome` and skip the normal fetch/decode/execute cycle.
pub fn service(cpu: &mut Cpu, bus: &mut dyn Bus) -> Option<(InterruptKind, u8)> {
    if cpu.nmi_pending > 0 {
        cpu.nmi_pending -= 1;
        if cpu.nmi_pending == 0 {
            enter_interrupt(cpu, bus, InterruptVector::NonMaskableInterrupt, false);
            return Some((InterruptKind::Nmi, 7));
        }
        return None;
    }

    if cpu.irq_pending && !cpu.flags.interrupt_disable {
        enter_interrupt(cpu, bus, InterruptVector::IrqOrBrk, false);
        return Some((InterruptKind::Irq, 7));
    }

    None
}
