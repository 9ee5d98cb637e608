//! Error types for the two places §7 allows one: a decode error inside
//! `step()` (gated by `CpuConfig::decode_error_policy`) and a mapper
//! configuration error at cartridge-load time. Bus faults are not errors —
//! `NesBus` treats an unclaimed address as open bus and logs at `trace`.

use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CpuError {
    /// A `KIL`/`JAM` opcode was fetched and `DecodeErrorPolicy::Halt` is in
    /// effect. `pc` points at the opcode byte.
    #[error("halting opcode 0x{opcode:02x} at ${pc:04x}")]
    Halted { opcode: u8, pc: u16 },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MapperError {
    #[error("iNES header missing the \"NES\\x1A\" magic bytes")]
    InvalidHeader,
    #[error("mapper number {0} is not one of NROM/MMC1/MMC3")]
    UnsupportedMapper(u8),
    #[error("cartridge truncated: expected {expected} bytes of PRG/CHR data, found {actual}")]
    TruncatedRom { expected: usize, actual: usize },
}
