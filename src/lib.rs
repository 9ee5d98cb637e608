//! A cycle-counted interpreter for the MOS 6502, plus the minimal bus fabric
//! needed to host it inside an NES console shell.
//!
//! http://www.6502.org/
//! https://en.wikipedia.org/wiki/MOS_Technology_6502
//! http://wiki.nesdev.com/w/index.php/CPU
//!
//! Cartridge parsing beyond the iNES header, mapper implementations beyond
//! NROM/MMC1/MMC3, PPU rendering, APU sound synthesis, controller input, and
//! any host I/O or CLI are out of scope: the bus and mapper modules exist
//! only far enough to give the CPU core something real to execute against.
#![allow(clippy::new_without_default)]

pub mod bus;
pub mod cartridge;
pub mod config;
pub mod constants;
pub mod cpu;
pub mod error;
pub mod flags;
pub mod mapper;
pub mod opcodes;

pub use bus::{Bus, NesBus};
pub use cartridge::Cartridge;
pub use config::CpuConfig;
pub use cpu::{Cpu, StepOutcome};
pub use error::{CpuError, MapperError};
pub use flags::Flags;
