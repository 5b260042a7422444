use std::fmt;
use std::time::Duration;

use crate::constants::{MEMORY_SIZE, PROGRAM_START, STACK_DEPTH};
use crate::error::Fault;
use crate::frame::{Frame, FrameBuffer};
use crate::instruction::{AluOp, Directive, Instruction};
use crate::keypad::Keypad;
use crate::memory::{glyph_address, Memory};
use crate::opcode::Opcode;
use crate::timers::Timers;

/// Whether the machine can keep executing after a step.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Step {
    Running,
    /// The program executed the halt pseudo-instruction (`00FF`).
    Halted,
}

/// # Machine
///
/// The complete execution state of one program run: the sixteen V
/// registers, the index register, program counter, bounded call stack,
/// memory, framebuffer, keypad, and timers. It is constructed once,
/// owned exclusively by its driver, and mutated one instruction at a
/// time by [`Machine::step`].
///
/// The driver loop is external. Per iteration it is expected to
/// - feed key transitions via [`Machine::press_key`] / [`Machine::release_key`],
/// - call [`Machine::step`] and stop on `Halted` or a [`Fault`],
/// - report elapsed wall-clock time via [`Machine::advance_timers`],
/// - present [`Machine::take_frame`] when it yields a snapshot, and
/// - gate a tone on [`Machine::sound_active`].
pub struct Machine {
    v: [u8; 16],
    i: u16,
    pc: u16,
    stack: [u16; STACK_DEPTH],
    sp: usize,
    memory: Memory,
    frame: FrameBuffer,
    keypad: Keypad,
    timers: Timers,
    draw_flag: bool,
    halted: bool,
}

impl Machine {
    pub fn new() -> Self {
        Machine {
            v: [0; 16],
            i: 0,
            pc: PROGRAM_START,
            stack: [0; STACK_DEPTH],
            sp: 0,
            memory: Memory::new(),
            frame: FrameBuffer::new(),
            keypad: Keypad::new(),
            timers: Timers::new(),
            draw_flag: false,
            halted: false,
        }
    }

    /// Loads a pre-assembled program image at the entry offset.
    pub fn load_program(&mut self, image: &[u8]) -> Result<(), Fault> {
        self.memory.load_program(image)
    }

    /// Executes exactly one instruction: fetch, decode, execute, then
    /// apply the resulting control directive to the program counter.
    ///
    /// A fault leaves the machine state untouched past the point of
    /// failure so it can be dumped for diagnosis; there is no recovery.
    pub fn step(&mut self) -> Result<Step, Fault> {
        if self.halted {
            return Ok(Step::Halted);
        }

        let opcode = self.fetch()?;
        let instruction = Instruction::decode(opcode).ok_or(Fault::IllegalInstruction {
            pc: self.pc,
            word: opcode.word(),
        })?;
        log::trace!("{:#05X}: {} {:?}", self.pc, opcode, instruction);

        let directive = self.execute(instruction)?;
        self.pc = match directive {
            Directive::Continue => self.pc + 2,
            Directive::Skip => self.pc + 4,
            Directive::Jump(addr) => addr,
        };

        if self.halted {
            Ok(Step::Halted)
        } else {
            Ok(Step::Running)
        }
    }

    pub fn is_halted(&self) -> bool {
        self.halted
    }

    pub fn press_key(&mut self, key: u8) {
        self.keypad.press(key);
    }

    pub fn release_key(&mut self, key: u8) {
        self.keypad.release(key);
    }

    /// Banks elapsed wall-clock time into the 60 Hz timer cadence.
    pub fn advance_timers(&mut self, elapsed: Duration) {
        self.timers.advance(elapsed);
    }

    pub fn sound_active(&self) -> bool {
        self.timers.sound_active()
    }

    /// Returns a framebuffer snapshot if it changed since the last call.
    pub fn take_frame(&mut self) -> Option<Frame> {
        if self.draw_flag {
            self.draw_flag = false;
            Some(self.frame.snapshot())
        } else {
            None
        }
    }

    /// Fetches the instruction word at the program counter, faulting if
    /// the counter has left the program region.
    fn fetch(&self) -> Result<Opcode, Fault> {
        if self.pc < PROGRAM_START || self.pc as usize > MEMORY_SIZE - 2 {
            return Err(Fault::AddressOutOfRange { addr: self.pc });
        }
        self.memory.read_word(self.pc)
    }

    /// The index register is semantically 12 bits; arithmetic on it can
    /// carry into the top nibble, which is masked off at every use.
    fn index(&self) -> u16 {
        self.i & 0x0FFF
    }

    fn push(&mut self, addr: u16) -> Result<(), Fault> {
        if self.sp == STACK_DEPTH {
            return Err(Fault::StackOverflow { pc: self.pc });
        }
        self.stack[self.sp] = addr;
        self.sp += 1;
        Ok(())
    }

    fn pop(&mut self) -> Result<u16, Fault> {
        if self.sp == 0 {
            return Err(Fault::StackUnderflow { pc: self.pc });
        }
        self.sp -= 1;
        Ok(self.stack[self.sp])
    }

    fn execute(&mut self, instruction: Instruction) -> Result<Directive, Fault> {
        use Instruction::*;

        let directive = match instruction {
            ClearScreen => {
                self.frame.clear();
                self.draw_flag = true;
                Directive::Continue
            }
            Return => Directive::Jump(self.pop()?),
            Halt => {
                self.halted = true;
                Directive::Continue
            }
            Jump(addr) => Directive::Jump(addr),
            Call(addr) => {
                self.push(self.pc + 2)?;
                Directive::Jump(addr)
            }
            SkipEqImm { x, nn } => skip_if(self.v[x as usize] == nn),
            SkipNeImm { x, nn } => skip_if(self.v[x as usize] != nn),
            SkipEqReg { x, y } => skip_if(self.v[x as usize] == self.v[y as usize]),
            SkipNeReg { x, y } => skip_if(self.v[x as usize] != self.v[y as usize]),
            LoadImm { x, nn } => {
                self.v[x as usize] = nn;
                Directive::Continue
            }
            AddImm { x, nn } => {
                self.v[x as usize] = self.v[x as usize].wrapping_add(nn);
                Directive::Continue
            }
            Alu { x, y, op } => {
                self.alu(x, y, op);
                Directive::Continue
            }
            LoadIndex(addr) => {
                self.i = addr;
                Directive::Continue
            }
            JumpOffset(addr) => Directive::Jump(u16::from(self.v[0]) + addr),
            RandomMask { x, nn } => {
                self.v[x as usize] = nn & rand::random::<u8>();
                Directive::Continue
            }
            Draw { x, y, n } => {
                let base = self.index();
                let mut rows = [0u8; 15];
                let rows = &mut rows[..n as usize];
                for (offset, row) in rows.iter_mut().enumerate() {
                    *row = self.memory.read(base + offset as u16)?;
                }
                let collision = self.frame.draw_sprite(self.v[x as usize], self.v[y as usize], rows);
                self.v[0xF] = u8::from(collision);
                self.draw_flag = true;
                Directive::Continue
            }
            SkipKeyDown { x } => skip_if(self.keypad.is_down(self.v[x as usize])),
            SkipKeyUp { x } => skip_if(!self.keypad.is_down(self.v[x as usize])),
            ReadDelay { x } => {
                self.v[x as usize] = self.timers.delay();
                Directive::Continue
            }
            WaitKey { x } => match self.keypad.first_down() {
                Some(key) => {
                    self.v[x as usize] = key;
                    Directive::Continue
                }
                // Re-issue this instruction next cycle instead of
                // stalling; the driver loop keeps running.
                None => Directive::Jump(self.pc),
            },
            SetDelay { x } => {
                self.timers.set_delay(self.v[x as usize]);
                Directive::Continue
            }
            SetSound { x } => {
                self.timers.set_sound(self.v[x as usize]);
                Directive::Continue
            }
            AddIndex { x } => {
                self.i = self.i.wrapping_add(u16::from(self.v[x as usize]));
                Directive::Continue
            }
            GlyphIndex { x } => {
                self.i = glyph_address(self.v[x as usize]);
                Directive::Continue
            }
            StoreBcd { x } => {
                let value = self.v[x as usize];
                let base = self.index();
                self.memory.write(base, value / 100)?;
                self.memory.write(base + 1, value % 100 / 10)?;
                self.memory.write(base + 2, value % 10)?;
                Directive::Continue
            }
            StoreRegisters { x } => {
                let base = self.index();
                for reg in 0..=u16::from(x) {
                    self.memory.write(base + reg, self.v[reg as usize])?;
                }
                Directive::Continue
            }
            LoadRegisters { x } => {
                let base = self.index();
                for reg in 0..=u16::from(x) {
                    self.v[reg as usize] = self.memory.read(base + reg)?;
                }
                Directive::Continue
            }
        };
        Ok(directive)
    }

    /// The `8XY_` group. Flag results land in VF after the value result
    /// lands in Vx, so VF as a destination keeps the flag.
    fn alu(&mut self, x: u8, y: u8, op: AluOp) {
        let vx = self.v[x as usize];
        let vy = self.v[y as usize];
        match op {
            AluOp::Copy => self.v[x as usize] = vy,
            AluOp::Or => self.v[x as usize] = vx | vy,
            AluOp::And => self.v[x as usize] = vx & vy,
            AluOp::Xor => self.v[x as usize] = vx ^ vy,
            AluOp::Add => {
                let (sum, carry) = vx.overflowing_add(vy);
                self.v[x as usize] = sum;
                self.v[0xF] = u8::from(carry);
            }
            AluOp::Sub => {
                let (diff, borrow) = vx.overflowing_sub(vy);
                self.v[x as usize] = diff;
                self.v[0xF] = u8::from(!borrow);
            }
            AluOp::SubReversed => {
                let (diff, borrow) = vy.overflowing_sub(vx);
                self.v[x as usize] = diff;
                self.v[0xF] = u8::from(!borrow);
            }
            AluOp::ShiftRight => {
                self.v[x as usize] = vx >> 1;
                self.v[0xF] = vx & 0x1;
            }
            AluOp::ShiftLeft => {
                self.v[x as usize] = vx << 1;
                self.v[0xF] = vx >> 7;
            }
        }
    }
}

impl Default for Machine {
    fn default() -> Self {
        Self::new()
    }
}

/// Register-file dump for fault diagnosis.
impl fmt::Display for Machine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "PC {:#06X} I {:#06X} SP {} DT {} ST {}",
            self.pc,
            self.i,
            self.sp,
            self.timers.delay(),
            u8::from(self.timers.sound_active()),
        )?;
        for (id, value) in self.v.iter().enumerate() {
            write!(f, "V{:X} {:02X}{}", id, value, if id == 7 { "\n" } else { " " })?;
        }
        Ok(())
    }
}

fn skip_if(condition: bool) -> Directive {
    if condition {
        Directive::Skip
    } else {
        Directive::Continue
    }
}
