use crate::opcode::Opcode;

/// How the program counter moves after an instruction executes.
///
/// The driver applies this; instructions never touch the program counter
/// directly. Keeping the three cases distinct avoids conflating "don't
/// auto-advance because I jumped" with "advance twice because I skipped".
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Directive {
    /// Advance past this instruction (2 bytes).
    Continue,
    /// Advance past this instruction and the next one (4 bytes).
    Skip,
    /// Set the program counter to an absolute address. Also used by the
    /// blocking key read to re-issue itself while no key is down.
    Jump(u16),
}

/// ALU operations within the `8XY_` group, selected by the low nibble.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AluOp {
    /// `8XY0` Vx = Vy
    Copy,
    /// `8XY1` Vx |= Vy
    Or,
    /// `8XY2` Vx &= Vy
    And,
    /// `8XY3` Vx ^= Vy
    Xor,
    /// `8XY4` Vx += Vy; VF = carry
    Add,
    /// `8XY5` Vx -= Vy; VF = 1 on no borrow
    Sub,
    /// `8XY6` VF = Vx & 1; Vx >>= 1
    ShiftRight,
    /// `8XY7` Vx = Vy - Vx; VF = 1 on no borrow
    SubReversed,
    /// `8XYE` VF = Vx >> 7; Vx <<= 1
    ShiftLeft,
}

/// A fully decoded operation, one variant per dispatch-table entry.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Instruction {
    /// `00E0` zero the framebuffer
    ClearScreen,
    /// `00EE` pop the call stack into the program counter
    Return,
    /// `00FF` stop execution
    Halt,
    /// `1NNN` unconditional jump
    Jump(u16),
    /// `2NNN` push the return address and jump
    Call(u16),
    /// `3XNN` skip next if Vx == NN
    SkipEqImm { x: u8, nn: u8 },
    /// `4XNN` skip next if Vx != NN
    SkipNeImm { x: u8, nn: u8 },
    /// `5XY_` skip next if Vx == Vy
    SkipEqReg { x: u8, y: u8 },
    /// `6XNN` Vx = NN
    LoadImm { x: u8, nn: u8 },
    /// `7XNN` Vx += NN, wrapping, flags untouched
    AddImm { x: u8, nn: u8 },
    /// `8XY_` register-to-register arithmetic
    Alu { x: u8, y: u8, op: AluOp },
    /// `9XY_` skip next if Vx != Vy
    SkipNeReg { x: u8, y: u8 },
    /// `ANNN` I = NNN
    LoadIndex(u16),
    /// `BNNN` jump to V0 + NNN
    JumpOffset(u16),
    /// `CXNN` Vx = NN & random byte
    RandomMask { x: u8, nn: u8 },
    /// `DXYN` XOR-draw N sprite rows from I at (Vx, Vy); VF = collision
    Draw { x: u8, y: u8, n: u8 },
    /// `EX9E` skip next if key Vx is down
    SkipKeyDown { x: u8 },
    /// `EXA1` skip next if key Vx is up
    SkipKeyUp { x: u8 },
    /// `FX07` Vx = delay timer
    ReadDelay { x: u8 },
    /// `FX0A` wait for a key press, store its id in Vx
    WaitKey { x: u8 },
    /// `FX15` delay timer = Vx
    SetDelay { x: u8 },
    /// `FX18` sound timer = Vx
    SetSound { x: u8 },
    /// `FX1E` I += Vx
    AddIndex { x: u8 },
    /// `FX29` I = address of the font glyph for Vx
    GlyphIndex { x: u8 },
    /// `FX33` store the decimal digits of Vx at I..I+3
    StoreBcd { x: u8 },
    /// `FX55` store V0..=Vx at I
    StoreRegisters { x: u8 },
    /// `FX65` load V0..=Vx from I
    LoadRegisters { x: u8 },
}

impl Instruction {
    /// Dispatches on the class nibble, then on a secondary field for the
    /// four sub-dispatched classes (0, 8, E, F). Returns `None` for any
    /// pattern outside the table; the caller reports that as a fault.
    pub fn decode(op: Opcode) -> Option<Self> {
        let decoded = match op.class() {
            0x0 => match op.nnn() {
                0x0E0 => Self::ClearScreen,
                0x0EE => Self::Return,
                0x0FF => Self::Halt,
                // 0NNN machine-language calls are not supported
                _ => return None,
            },
            0x1 => Self::Jump(op.nnn()),
            0x2 => Self::Call(op.nnn()),
            0x3 => Self::SkipEqImm { x: op.x(), nn: op.nn() },
            0x4 => Self::SkipNeImm { x: op.x(), nn: op.nn() },
            0x5 => Self::SkipEqReg { x: op.x(), y: op.y() },
            0x6 => Self::LoadImm { x: op.x(), nn: op.nn() },
            0x7 => Self::AddImm { x: op.x(), nn: op.nn() },
            0x8 => {
                let alu = match op.n() {
                    0x0 => AluOp::Copy,
                    0x1 => AluOp::Or,
                    0x2 => AluOp::And,
                    0x3 => AluOp::Xor,
                    0x4 => AluOp::Add,
                    0x5 => AluOp::Sub,
                    0x6 => AluOp::ShiftRight,
                    0x7 => AluOp::SubReversed,
                    0xE => AluOp::ShiftLeft,
                    _ => return None,
                };
                Self::Alu { x: op.x(), y: op.y(), op: alu }
            }
            0x9 => Self::SkipNeReg { x: op.x(), y: op.y() },
            0xA => Self::LoadIndex(op.nnn()),
            0xB => Self::JumpOffset(op.nnn()),
            0xC => Self::RandomMask { x: op.x(), nn: op.nn() },
            0xD => Self::Draw { x: op.x(), y: op.y(), n: op.n() },
            0xE => match op.nn() {
                0x9E => Self::SkipKeyDown { x: op.x() },
                0xA1 => Self::SkipKeyUp { x: op.x() },
                _ => return None,
            },
            0xF => match op.nn() {
                0x07 => Self::ReadDelay { x: op.x() },
                0x0A => Self::WaitKey { x: op.x() },
                0x15 => Self::SetDelay { x: op.x() },
                0x18 => Self::SetSound { x: op.x() },
                0x1E => Self::AddIndex { x: op.x() },
                0x29 => Self::GlyphIndex { x: op.x() },
                0x33 => Self::StoreBcd { x: op.x() },
                0x55 => Self::StoreRegisters { x: op.x() },
                0x65 => Self::LoadRegisters { x: op.x() },
                _ => return None,
            },
            _ => unreachable!("class is a 4-bit field"),
        };
        Some(decoded)
    }
}
