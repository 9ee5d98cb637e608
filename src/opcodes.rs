//! The 256-entry opcode lookup (§4.A): for every possible opcode byte, which
//! mnemonic it names, which addressing mode it uses, how many bytes it
//! occupies, its base cycle cost, and whether it reads and/or writes memory.
//!
//! Rather than transcribe a 256-row array literal by hand, the table is
//! expressed as an exhaustive `match` in [`decode`] — §9 explicitly allows
//! this ("a straight match beats a function-pointer table... either is
//! acceptable"), and a match is far harder to get subtly wrong than a flat
//! array of positional structs. [`opcode_table`] materializes the literal
//! `[OpcodeEntry; 256]` for callers (trace tools, tests) that want to
//! iterate it.

/// One of the thirteen addressing modes from §3.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressingMode {
    Implied,
    Accumulator,
    Immediate,
    ZeroPage,
    ZeroPageX,
    ZeroPageY,
    Absolute,
    AbsoluteX,
    AbsoluteY,
    Indirect,
    IndirectX,
    IndirectY,
    Relative,
}

impl AddressingMode {
    /// Instruction size in bytes, including the opcode byte itself.
    pub fn size(self) -> u8 {
        use AddressingMode::*;
        match self {
            Implied | Accumulator => 1,
            Immediate | ZeroPage | ZeroPageX | ZeroPageY | IndirectX | IndirectY | Relative => 2,
            Absolute | AbsoluteX | AbsoluteY | Indirect => 3,
        }
    }
}

#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mnemonic {
    // Logical and arithmetic.
    ORA, AND, EOR, ADC, SBC, CMP, CPX, CPY,
    DEC, DEX, DEY, INC, INX, INY,
    ASL, ROL, LSR, ROR,
    // Move.
    LDA, STA, LDX, STX, LDY, STY,
    TAX, TXA, TAY, TYA, TSX, TXS,
    PLA, PHA, PLP, PHP,
    // Jump / flag.
    BPL, BMI, BVC, BVS, BCC, BCS, BNE, BEQ,
    BRK, RTI, JSR, RTS, JMP, BIT,
    CLC, SEC, CLD, SED, CLI, SEI, CLV,
    NOP,
    // Undocumented.
    SLO, RLA, SRE, RRA, SAX, LAX, DCP, ISC,
    ANC, ALR, ARR, XAA, AXS, AHX, SHY, SHX, TAS, LAS,
    /// The halting "JAM"/"KIL" opcode. Thirteen of the 256 byte values map
    /// here; all are indistinguishable on real hardware.
    KIL,
}

impl Mnemonic {
    pub fn name(self) -> &'static str {
        use Mnemonic::*;
        match self {
            ORA => "ORA", AND => "AND", EOR => "EOR", ADC => "ADC", SBC => "SBC",
            CMP => "CMP", CPX => "CPX", CPY => "CPY", DEC => "DEC", DEX => "DEX",
            DEY => "DEY", INC => "INC", INX => "INX", INY => "INY", ASL => "ASL",
            ROL => "ROL", LSR => "LSR", ROR => "ROR", LDA => "LDA", STA => "STA",
            LDX => "LDX", STX => "STX", LDY => "LDY", STY => "STY", TAX => "TAX",
            TXA => "TXA", TAY => "TAY", TYA => "TYA", TSX => "TSX", TXS => "TXS",
            PLA => "PLA", PHA => "PHA", PLP => "PLP", PHP => "PHP", BPL => "BPL",
            BMI => "BMI", BVC => "BVC", BVS => "BVS", BCC => "BCC", BCS => "BCS",
            BNE => "BNE", BEQ => "BEQ", BRK => "BRK", RTI => "RTI", JSR => "JSR",
            RTS => "RTS", JMP => "JMP", BIT => "BIT", CLC => "CLC", SEC => "SEC",
            CLD => "CLD", SED => "SED", CLI => "CLI", SEI => "SEI", CLV => "CLV",
            NOP => "NOP", SLO => "SLO", RLA => "RLA", SRE => "SRE", RRA => "RRA",
            SAX => "SAX", LAX => "LAX", DCP => "DCP", ISC => "ISC", ANC => "ANC",
            ALR => "ALR", ARR => "ARR", XAA => "XAA", AXS => "AXS", AHX => "AHX",
            SHY => "SHY", SHX => "SHX", TAS => "TAS", LAS => "LAS", KIL => "KIL",
        }
    }

    /// True for every mnemonic not in the official 6502 instruction set.
    pub fn is_undocumented(self) -> bool {
        use Mnemonic::*;
        matches!(
            self,
            SLO | RLA | SRE | RRA | SAX | LAX | DCP | ISC | ANC | ALR | ARR | XAA | AXS | AHX
                | SHY | SHX | TAS | LAS | KIL
        )
    }
}

/// One row of the opcode table (§4.A).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeEntry {
    pub opcode: u8,
    pub mnemonic: Mnemonic,
    pub mode: AddressingMode,
    pub size: u8,
    /// Sign encodes "add one cycle if indexed addressing crosses a page
    /// boundary during the read" per §4.A. Branch page-cross/taken costs
    /// are handled separately by the executor, not through this field.
    pub base_cycles: i8,
    pub reads_memory: bool,
    pub writes_memory: bool,
}

impl OpcodeEntry {
    pub fn page_cross_penalty(self) -> bool {
        self.base_cycles < 0
    }

    pub fn cycles(self) -> u8 {
        self.base_cycles.unsigned_abs()
    }
}

const fn entry(
    opcode: u8,
    mnemonic: Mnemonic,
    mode: AddressingMode,
    base_cycles: i8,
    reads_memory: bool,
    writes_memory: bool,
) -> OpcodeEntry {
    OpcodeEntry {
        opcode,
        mnemonic,
        mode,
        size: mode.size(),
        base_cycles,
        reads_memory,
        writes_memory,
    }
}

/// Decode a fetched opcode byte into its table row. Exhaustive over `u8`.
pub fn decode(opcode: u8) -> OpcodeEntry {
    use AddressingMode::*;
    use Mnemonic::*;

    macro_rules! e {
        ($mnemonic:expr, $mode:expr, $cycles:expr, $r:expr, $w:expr) => {
            entry(opcode, $mnemonic, $mode, $cycles, $r, $w)
        };
    }

    match opcode {
        // 0x00-0x0F
        0x00 => e!(BRK, Implied, 7, false, false),
        0x01 => e!(ORA, IndirectX, 6, true, false),
        0x02 => e!(KIL, Implied, 0, false, false),
        0x03 => e!(SLO, IndirectX, 8, true, true),
        0x04 => e!(NOP, ZeroPage, 3, true, false),
        0x05 => e!(ORA, ZeroPage, 3, true, false),
        0x06 => e!(ASL, ZeroPage, 5, true, true),
        0x07 => e!(SLO, ZeroPage, 5, true, true),
        0x08 => e!(PHP, Implied, 3, false, false),
        0x09 => e!(ORA, Immediate, 2, true, false),
        0x0a => e!(ASL, Accumulator, 2, false, false),
        0x0b => e!(ANC, Immediate, 2, true, false),
        0x0c => e!(NOP, Absolute, 4, true, false),
        0x0d => e!(ORA, Absolute, 4, true, false),
        0x0e => e!(ASL, Absolute, 6, true, true),
        0x0f => e!(SLO, Absolute, 6, true, true),

        // 0x10-0x1F
        0x10 => e!(BPL, Relative, 2, false, false),
        0x11 => e!(ORA, IndirectY, -5, true, false),
        0x12 => e!(KIL, Implied, 0, false, false),
        0x13 => e!(SLO, IndirectY, 8, true, true),
        0x14 => e!(NOP, ZeroPageX, 4, true, false),
        0x15 => e!(ORA, ZeroPageX, 4, true, false),
        0x16 => e!(ASL, ZeroPageX, 6, true, true),
        0x17 => e!(SLO, ZeroPageX, 6, true, true),
        0x18 => e!(CLC, Implied, 2, false, false),
        0x19 => e!(ORA, AbsoluteY, -4, true, false),
        0x1a => e!(NOP, Implied, 2, false, false),
        0x1b => e!(SLO, AbsoluteY, 7, true, true),
        0x1c => e!(NOP, AbsoluteX, -4, true, false),
        0x1d => e!(ORA, AbsoluteX, -4, true, false),
        0x1e => e!(ASL, AbsoluteX, 7, true, true),
        0x1f => e!(SLO, AbsoluteX, 7, true, true),

        // 0x20-0x2F
        0x20 => e!(JSR, Absolute, 6, false, false),
        0x21 => e!(AND, IndirectX, 6, true, false),
        0x22 => e!(KIL, Implied, 0, false, false),
        0x23 => e!(RLA, IndirectX, 8, true, true),
        0x24 => e!(BIT, ZeroPage, 3, true, false),
        0x25 => e!(AND, ZeroPage, 3, true, false),
        0x26 => e!(ROL, ZeroPage, 5, true, true),
        0x27 => e!(RLA, ZeroPage, 5, true, true),
        0x28 => e!(PLP, Implied, 4, false, false),
        0x29 => e!(AND, Immediate, 2, true, false),
        0x2a => e!(ROL, Accumulator, 2, false, false),
        0x2b => e!(ANC, Immediate, 2, true, false),
        0x2c => e!(BIT, Absolute, 4, true, false),
        0x2d => e!(AND, Absolute, 4, true, false),
        0x2e => e!(ROL, Absolute, 6, true, true),
        0x2f => e!(RLA, Absolute, 6, true, true),

        // 0x30-0x3F
        0x30 => e!(BMI, Relative, 2, false, false),
        0x31 => e!(AND, IndirectY, -5, true, false),
        0x32 => e!(KIL, Implied, 0, false, false),
        0x33 => e!(RLA, IndirectY, 8, true, true),
        0x34 => e!(NOP, ZeroPageX, 4, true, false),
        0x35 => e!(AND, ZeroPageX, 4, true, false),
        0x36 => e!(ROL, ZeroPageX, 6, true, true),
        0x37 => e!(RLA, ZeroPageX, 6, true, true),
        0x38 => e!(SEC, Implied, 2, false, false),
        0x39 => e!(AND, AbsoluteY, -4, true, false),
        0x3a => e!(NOP, Implied, 2, false, false),
        0x3b => e!(RLA, AbsoluteY, 7, true, true),
        0x3c => e!(NOP, AbsoluteX, -4, true, false),
        0x3d => e!(AND, AbsoluteX, -4, true, false),
        0x3e => e!(ROL, AbsoluteX, 7, true, true),
        0x3f => e!(RLA, AbsoluteX, 7, true, true),

        // 0x40-0x4F
        0x40 => e!(RTI, Implied, 6, false, false),
        0x41 => e!(EOR, IndirectX, 6, true, false),
        0x42 => e!(KIL, Implied, 0, false, false),
        0x43 => e!(SRE, IndirectX, 8, true, true),
        0x44 => e!(NOP, ZeroPage, 3, true, false),
        0x45 => e!(EOR, ZeroPage, 3, true, false),
        0x46 => e!(LSR, ZeroPage, 5, true, true),
        0x47 => e!(SRE, ZeroPage, 5, true, true),
        0x48 => e!(PHA, Implied, 3, false, false),
        0x49 => e!(EOR, Immediate, 2, true, false),
        0x4a => e!(LSR, Accumulator, 2, false, false),
        0x4b => e!(ALR, Immediate, 2, true, false),
        0x4c => e!(JMP, Absolute, 3, false, false),
        0x4d => e!(EOR, Absolute, 4, true, false),
        0x4e => e!(LSR, Absolute, 6, true, true),
        0x4f => e!(SRE, Absolute, 6, true, true),

        // 0x50-0x5F
        0x50 => e!(BVC, Relative, 2, false, false),
        0x51 => e!(EOR, IndirectY, -5, true, false),
        0x52 => e!(KIL, Implied, 0, false, false),
        0x53 => e!(SRE, IndirectY, 8, true, true),
        0x54 => e!(NOP, ZeroPageX, 4, true, false),
        0x55 => e!(EOR, ZeroPageX, 4, true, false),
        0x56 => e!(LSR, ZeroPageX, 6, true, true),
        0x57 => e!(SRE, ZeroPageX, 6, true, true),
        0x58 => e!(CLI, Implied, 2, false, false),
        0x59 => e!(EOR, AbsoluteY, -4, true, false),
        0x5a => e!(NOP, Implied, 2, false, false),
        0x5b => e!(SRE, AbsoluteY, 7, true, true),
        0x5c => e!(NOP, AbsoluteX, -4, true, false),
        0x5d => e!(EOR, AbsoluteX, -4, true, false),
        0x5e => e!(LSR, AbsoluteX, 7, true, true),
        0x5f => e!(SRE, AbsoluteX, 7, true, true),

        // 0x60-0x6F
        0x60 => e!(RTS, Implied, 6, false, false),
        0x61 => e!(ADC, IndirectX, 6, true, false),
        0x62 => e!(KIL, Implied, 0, false, false),
        0x63 => e!(RRA, IndirectX, 8, true, true),
        0x64 => e!(NOP, ZeroPage, 3, true, false),
        0x65 => e!(ADC, ZeroPage, 3, true, false),
        0x66 => e!(ROR, ZeroPage, 5, true, true),
        0x67 => e!(RRA, ZeroPage, 5, true, true),
        0x68 => e!(PLA, Implied, 4, false, false),
        0x69 => e!(ADC, Immediate, 2, true, false),
        0x6a => e!(ROR, Accumulator, 2, false, false),
        0x6b => e!(ARR, Immediate, 2, true, false),
        0x6c => e!(JMP, Indirect, 5, false, false),
        0x6d => e!(ADC, Absolute, 4, true, false),
        0x6e => e!(ROR, Absolute, 6, true, true),
        0x6f => e!(RRA, Absolute, 6, true, true),

        // 0x70-0x7F
        0x70 => e!(BVS, Relative, 2, false, false),
        0x71 => e!(ADC, IndirectY, -5, true, false),
        0x72 => e!(KIL, Implied, 0, false, false),
        0x73 => e!(RRA, IndirectY, 8, true, true),
        0x74 => e!(NOP, ZeroPageX, 4, true, false),
        0x75 => e!(ADC, ZeroPageX, 4, true, false),
        0x76 => e!(ROR, ZeroPageX, 6, true, true),
        0x77 => e!(RRA, ZeroPageX, 6, true, true),
        0x78 => e!(SEI, Implied, 2, false, false),
        0x79 => e!(ADC, AbsoluteY, -4, true, false),
        0x7a => e!(NOP, Implied, 2, false, false),
        0x7b => e!(RRA, AbsoluteY, 7, true, true),
        0x7c => e!(NOP, AbsoluteX, -4, true, false),
        0x7d => e!(ADC, AbsoluteX, -4, true, false),
        0x7e => e!(ROR, AbsoluteX, 7, true, true),
        0x7f => e!(RRA, AbsoluteX, 7, true, true),

        // 0x80-0x8F
        0x80 => e!(NOP, Immediate, 2, true, false),
        0x81 => e!(STA, IndirectX, 6, false, true),
        0x82 => e!(NOP, Immediate, 2, true, false),
        0x83 => e!(SAX, IndirectX, 6, false, true),
        0x84 => e!(STY, ZeroPage, 3, false, true),
        0x85 => e!(STA, ZeroPage, 3, false, true),
        0x86 => e!(STX, ZeroPage, 3, false, true),
        0x87 => e!(SAX, ZeroPage, 3, false, true),
        0x88 => e!(DEY, Implied, 2, false, false),
        0x89 => e!(NOP, Immediate, 2, true, false),
        0x8a => e!(TXA, Implied, 2, false, false),
        0x8b => e!(XAA, Immediate, 2, true, false),
        0x8c => e!(STY, Absolute, 4, false, true),
        0x8d => e!(STA, Absolute, 4, false, true),
        0x8e => e!(STX, Absolute, 4, false, true),
        0x8f => e!(SAX, Absolute, 4, false, true),

        // 0x90-0x9F
        0x90 => e!(BCC, Relative, 2, false, false),
        0x91 => e!(STA, IndirectY, 6, false, true),
        0x92 => e!(KIL, Implied, 0, false, false),
        0x93 => e!(AHX, IndirectY, 6, false, true),
        0x94 => e!(STY, ZeroPageX, 4, false, true),
        0x95 => e!(STA, ZeroPageX, 4, false, true),
        0x96 => e!(STX, ZeroPageY, 4, false, true),
        0x97 => e!(SAX, ZeroPageY, 4, false, true),
        0x98 => e!(TYA, Implied, 2, false, false),
        0x99 => e!(STA, AbsoluteY, 5, false, true),
        0x9a => e!(TXS, Implied, 2, false, false),
        0x9b => e!(TAS, AbsoluteY, 5, false, true),
        0x9c => e!(SHY, AbsoluteX, 5, false, true),
        0x9d => e!(STA, AbsoluteX, 5, false, true),
        0x9e => e!(SHX, AbsoluteY, 5, false, true),
        0x9f => e!(AHX, AbsoluteY, 5, false, true),

        // 0xA0-0xAF
        0xa0 => e!(LDY, Immediate, 2, true, false),
        0xa1 => e!(LDA, IndirectX, 6, true, false),
        0xa2 => e!(LDX, Immediate, 2, true, false),
        0xa3 => e!(LAX, IndirectX, 6, true, false),
        0xa4 => e!(LDY, ZeroPage, 3, true, false),
        0xa5 => e!(LDA, ZeroPage, 3, true, false),
        0xa6 => e!(LDX, ZeroPage, 3, true, false),
        0xa7 => e!(LAX, ZeroPage, 3, true, false),
        0xa8 => e!(TAY, Implied, 2, false, false),
        0xa9 => e!(LDA, Immediate, 2, true, false),
        0xaa => e!(TAX, Implied, 2, false, false),
        0xab => e!(LAX, Immediate, 2, true, false),
        0xac => e!(LDY, Absolute, 4, true, false),
        0xad => e!(LDA, Absolute, 4, true, false),
        0xae => e!(LDX, Absolute, 4, true, false),
        0xaf => e!(LAX, Absolute, 4, true, false),

        // 0xB0-0xBF
        0xb0 => e!(BCS, Relative, 2, false, false),
        0xb1 => e!(LDA, IndirectY, -5, true, false),
        0xb2 => e!(KIL, Implied, 0, false, false),
        0xb3 => e!(LAX, IndirectY, -5, true, false),
        0xb4 => e!(LDY, ZeroPageX, 4, true, false),
        0xb5 => e!(LDA, ZeroPageX, 4, true, false),
        0xb6 => e!(LDX, ZeroPageY, 4, true, false),
        0xb7 => e!(LAX, ZeroPageY, 4, true, false),
        0xb8 => e!(CLV, Implied, 2, false, false),
        0xb9 => e!(LDA, AbsoluteY, -4, true, false),
        0xba => e!(TSX, Implied, 2, false, false),
        0xbb => e!(LAS, AbsoluteY, -4, true, false),
        0xbc => e!(LDY, AbsoluteX, -4, true, false),
        0xbd => e!(LDA, AbsoluteX, -4, true, false),
        0xbe => e!(LDX, AbsoluteY, -4, true, false),
        0xbf => e!(LAX, AbsoluteY, -4, true, false),

        // 0xC0-0xCF
        0xc0 => e!(CPY, Immediate, 2, true, false),
        0xc1 => e!(CMP, IndirectX, 6, true, false),
        0xc2 => e!(NOP, Immediate, 2, true, false),
        0xc3 => e!(DCP, IndirectX, 8, true, true),
        0xc4 => e!(CPY, ZeroPage, 3, true, false),
        0xc5 => e!(CMP, ZeroPage, 3, true, false),
        0xc6 => e!(DEC, ZeroPage, 5, true, true),
        0xc7 => e!(DCP, ZeroPage, 5, true, true),
        0xc8 => e!(INY, Implied, 2, false, false),
        0xc9 => e!(CMP, Immediate, 2, true, false),
        0xca => e!(DEX, Implied, 2, false, false),
        0xcb => e!(AXS, Immediate, 2, true, false),
        0xcc => e!(CPY, Absolute, 4, true, false),
        0xcd => e!(CMP, Absolute, 4, true, false),
        0xce => e!(DEC, Absolute, 6, true, true),
        0xcf => e!(DCP, Absolute, 6, true, true),

        // 0xD0-0xDF
        0xd0 => e!(BNE, Relative, 2, false, false),
        0xd1 => e!(CMP, IndirectY, -5, true, false),
        0xd2 => e!(KIL, Implied, 0, false, false),
        0xd3 => e!(DCP, IndirectY, 8, true, true),
        0xd4 => e!(NOP, ZeroPageX, 4, true, false),
        0xd5 => e!(CMP, ZeroPageX, 4, true, false),
        0xd6 => e!(DEC, ZeroPageX, 6, true, true),
        0xd7 => e!(DCP, ZeroPageX, 6, true, true),
        0xd8 => e!(CLD, Implied, 2, false, false),
        0xd9 => e!(CMP, AbsoluteY, -4, true, false),
        0xda => e!(NOP, Implied, 2, false, false),
        0xdb => e!(DCP, AbsoluteY, 7, true, true),
        0xdc => e!(NOP, AbsoluteX, -4, true, false),
        0xdd => e!(CMP, AbsoluteX, -4, true, false),
        0xde => e!(DEC, AbsoluteX, 7, true, true),
        0xdf => e!(DCP, AbsoluteX, 7, true, true),

        // 0xE0-0xEF
        0xe0 => e!(CPX, Immediate, 2, true, false),
        0xe1 => e!(SBC, IndirectX, 6, true, false),
        0xe2 => e!(NOP, Immediate, 2, true, false),
        0xe3 => e!(ISC, IndirectX, 8, true, true),
        0xe4 => e!(CPX, ZeroPage, 3, true, false),
        0xe5 => e!(SBC, ZeroPage, 3, true, false),
        0xe6 => e!(INC, ZeroPage, 5, true, true),
        0xe7 => e!(ISC, ZeroPage, 5, true, true),
        0xe8 => e!(INX, Implied, 2, false, false),
        0xe9 => e!(SBC, Immediate, 2, true, false),
        0xea => e!(NOP, Implied, 2, false, false),
        0xeb => e!(SBC, Immediate, 2, true, false),
        0xec => e!(CPX, Absolute, 4, true, false),
        0xed => e!(SBC, Absolute, 4, true, false),
        0xee => e!(INC, Absolute, 6, true, true),
        0xef => e!(ISC, Absolute, 6, true, true),

        // 0xF0-0xFF
        0xf0 => e!(BEQ, Relative, 2, false, false),
        0xf1 => e!(SBC, IndirectY, -5, true, false),
        0xf2 => e!(KIL, Implied, 0, false, false),
        0xf3 => e!(ISC, IndirectY, 8, true, true),
        0xf4 => e!(NOP, ZeroPageX, 4, true, false),
        0xf5 => e!(SBC, ZeroPageX, 4, true, false),
        0xf6 => e!(INC, ZeroPageX, 6, true, true),
        0xf7 => e!(ISC, ZeroPageX, 6, true, true),
        0xf8 => e!(SED, Implied, 2, false, false),
        0xf9 => e!(SBC, AbsoluteY, -4, true, false),
        0xfa => e!(NOP, Implied, 2, false, false),
        0xfb => e!(ISC, AbsoluteY, 7, true, true),
        0xfc => e!(NOP, AbsoluteX, -4, true, false),
        0xfd => e!(SBC, AbsoluteX, -4, true, false),
        0xfe => e!(INC, AbsoluteX, 7, true, true),
        0xff => e!(ISC, AbsoluteX, 7, true, true),

        // `match` over `u8` must be exhaustive; every byte above is covered,
        // so this arm only exists to satisfy the compiler.
        #[allow(unreachable_patterns)]
        _ => unreachable!("opcode 0x{opcode:02x} missing from the table"),
    }
}

/// Materialize the full 256-row table, e.g. for a disassembler that wants
/// to iterate it rather than decode byte-by-byte.
pub fn opcode_table() -> [OpcodeEntry; 256] {
    std::array::from_fn(|i| decode(i as u8))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn every_opcode_decodes_and_sizes_are_consistent() {
        for opcode in 0..=255u8 {
            let e = decode(opcode);
            assert_eq!(e.opcode, opcode);
            assert_eq!(e.size, e.mode.size());
        }
    }

    #[test]
    fn kil_opcodes_are_zero_cost_and_halt() {
        for opcode in [0x02, 0x12, 0x22, 0x32, 0x42, 0x52, 0x62, 0x72, 0x92, 0xb2, 0xd2, 0xf2] {
            let e = decode(opcode);
            assert_eq!(e.mnemonic, Mnemonic::KIL);
            assert_eq!(e.cycles(), 0);
        }
    }

    #[test]
    fn documented_opcode_count_matches_spec() {
        let documented = opcode_table()
            .iter()
            .filter(|e| !e.mnemonic.is_undocumented())
            .count();
        // 256 entries minus the 13 KIL slots and the undocumented families.
        assert!(documented >= 151, "expected at least 151 documented opcodes, found {documented}");
    }

    #[test]
    fn brk_and_jmp_indirect_are_as_specified() {
        let brk = decode(0x00);
        assert_eq!(brk.mnemonic, Mnemonic::BRK);
        assert_eq!(brk.cycles(), 7);

        let jmp_ind = decode(0x6c);
        assert_eq!(jmp_ind.mnemonic, Mnemonic::JMP);
        assert_eq!(jmp_ind.mode, AddressingMode::Indirect);
    }
}
