//! Runtime switches for the two spots §9's Open Questions leave to the
//! implementer: what happens when `step()` hits a halting opcode, and how
//! far to trust the least-stable undocumented opcodes.

/// What `step()` does when it fetches a `KIL`/`JAM` opcode. Global, not
/// per-call, per §7: "The choice is global configuration."
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeErrorPolicy {
    /// Return `CpuError::Halted` and leave PC pointing at the opcode.
    Halt,
    /// Stay running: consume a small fixed number of cycles and leave PC
    /// unadvanced, as if the CPU were spinning on the instruction forever.
    Stall { cycles: u8 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CpuConfig {
    pub decode_error_policy: DecodeErrorPolicy,
    /// Gates XAA, SHA/AHX, SHX, SHY, and TAS — opcodes §9 calls "observed
    /// behavior unspecified on hardware." When `false` (the default) these
    /// run the common documented interpretation; when `true` they return a
    /// `CpuError::Halted` instead of risking divergence from silicon.
    pub strict_unstable_opcodes: bool,
}

impl Default for CpuConfig {
    fn default() -> Self {
        CpuConfig {
            decode_error_policy: DecodeErrorPolicy::Halt,
            strict_unstable_opcodes: false,
        }
    }
}
