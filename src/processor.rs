#![allow(non_snake_case)]

use crate::display::Display;
use crate::error::ErrorDetail;
use crate::font::Font;
use crate::instruction::Instruction;
use crate::keystate::KeyState;
use crate::memory::Memory;
use crate::options::Options;
use crate::program::Program;
use crate::quirks::Quirks;
use crate::stack::Stack;
use crate::variant::Variant;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

mod execute;

/// The memory address at which the small font is loaded on reset; see
/// DESIGN.md for why this differs from some other interpreters' 0x50.
const FONT_START_ADDRESS: u16 = 0x0;
/// Size in bytes of the small (CHIP-8) font.
const SMALL_FONT_SIZE: u16 = 80;
/// Size in bytes of each small-font glyph.
const SMALL_FONT_CHAR_SIZE: u16 = 5;
/// Size in bytes of each large (SUPER-CHIP 1.1) font glyph.
const LARGE_FONT_CHAR_SIZE: u16 = 10;
/// Number of RPL user flags SUPER-CHIP 1.1 exposes via FX75/FX85.
const RPL_FLAG_COUNT: usize = 8;
/// Milliseconds per 60Hz timer tick (17ms, closer to 1000/60 than 16ms).
const TIMER_TICK_MILLIS: u64 = 17;

/// Tracks processor execution status for diagnostic purposes. Pacing
/// (instructions-per-second) is entirely a host concern, so no
/// processor-speed state appears here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ProcessorStatus {
    /// Constructed and has a program loaded, but `process_instruction` has
    /// not yet been called.
    ProgramLoaded,
    /// At least one instruction has executed since the last load/reset.
    Running,
    /// Stalled in the `FX0A` release-wait protocol.
    WaitingForKeyRelease,
    /// `process_instruction` returned an `ErrorDetail`; further calls are
    /// still accepted (the core never refuses to run) but the processor
    /// will not clear this state on its own.
    Crashed,
    /// [Variant::Super] executed `00FD` (EXIT). The core takes no action on
    /// this beyond recording it — terminating the host process is a host
    /// concern — but `Processor::exit_requested` reports it.
    Completed,
}

/// Which level of detail a [StateSnapshot] should report.
pub enum StateSnapshotVerbosity {
    /// Only the frame buffer state will be reported.
    Minimal,
    /// The frame buffer, registers, stack, memory and timers will all be
    /// reported.
    Extended,
}

/// A point-in-time copy of processor state, returned by
/// [Processor::export_state_snapshot].
pub enum StateSnapshot {
    /// Minimal snapshot containing only the frame buffer state.
    MinimalSnapshot { frame_buffer: Display },
    /// Extended snapshot additionally containing registers, stack, memory,
    /// timers and the cycle count.
    ExtendedSnapshot {
        frame_buffer: Display,
        stack_depth: usize,
        program_counter: u16,
        index_register: u16,
        variable_registers: [u8; 16],
        delay_timer: u8,
        sound_timer: u8,
        cycles: usize,
    },
}

/// The CHIP-8 / SUPER-CHIP 1.1 virtual machine core.
///
/// A `Processor` owns all of its state inline — RAM, stack, registers,
/// framebuffer, timers and keypad state — tagged by a [Variant] rather than
/// holding a reference to a variant-specific wrapper, so there is no
/// back-reference cycle to manage.
///
/// A host drives a `Processor` through exactly three mutating entry points:
/// [Processor::process_instruction], [Processor::update_timer], and the
/// [Processor::set_key]/[Processor::clear_key] pair. No other method
/// mutates VM-visible state.
pub struct Processor {
    frame_buffer: Display,
    stack: Stack,
    memory: Memory,
    program_counter: u16,
    index_register: u16,
    variable_registers: [u8; 16],
    delay_timer: u8,
    sound_timer: u8,
    millis_accumulator: u64,
    keystate: KeyState,
    rpl_flags: [u8; RPL_FLAG_COUNT],
    high_resolution_mode: bool,
    exit_requested: bool,
    status: ProcessorStatus,
    cycles: usize,
    font_start_address: u16,
    large_font_start_address: u16,
    program_start_address: u16,
    variant: Variant,
    quirks: Quirks,
    rng: StdRng,
    seed: Option<u64>,
}

impl Processor {
    /// Constructor/builder that returns a freshly-initialised [Processor]
    /// with `program`'s bytes loaded into memory ready for execution.
    ///
    /// Returns [ErrorDetail::UnsupportedVariant] for [Variant::Xo], which is
    /// reserved but not implemented by this crate.
    ///
    /// # Arguments
    ///
    /// * `program` - the ROM bytes to load
    /// * `options` - start-up configuration (variant, quirks, load address,
    ///   optional RNG seed)
    pub fn initialise_and_load(program: Program, options: Options) -> Result<Self, ErrorDetail> {
        if options.variant == Variant::Xo {
            return Err(ErrorDetail::UnsupportedVariant {
                variant: Variant::Xo,
            });
        }
        let mut rng = match options.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let memory = match options.variant {
            // The reference source seeds its C RNG at reset and never
            // explicitly clears `ram` for SUPER-CHIP 1.1; see memory.rs.
            Variant::Super => Memory::new_randomized(&mut rng),
            Variant::Vip | Variant::Xo => Memory::new(),
        };
        let frame_buffer = match options.variant {
            Variant::Vip => Display::new_vip(),
            Variant::Super | Variant::Xo => Display::new_super(),
        };
        let stack_capacity = match options.variant {
            Variant::Vip => Stack::VIP_DEPTH,
            Variant::Super | Variant::Xo => Stack::SUPER_DEPTH,
        };
        let mut processor = Processor {
            frame_buffer,
            stack: Stack::new(stack_capacity),
            memory,
            program_counter: options.program_start_address,
            index_register: 0,
            variable_registers: [0; 16],
            delay_timer: 0,
            sound_timer: 0,
            millis_accumulator: 0,
            keystate: KeyState::new(),
            rpl_flags: [0; RPL_FLAG_COUNT],
            // SUPER-CHIP 1.1 starts in low-resolution mode.
            high_resolution_mode: false,
            exit_requested: false,
            status: ProcessorStatus::ProgramLoaded,
            cycles: 0,
            font_start_address: FONT_START_ADDRESS,
            large_font_start_address: FONT_START_ADDRESS + SMALL_FONT_SIZE,
            program_start_address: options.program_start_address,
            variant: options.variant,
            quirks: options.quirks,
            rng,
            seed: options.seed,
        };
        processor.load_fonts();
        processor.load_program(&program);
        Ok(processor)
    }

    /// Re-initialises the processor to its just-loaded state for `program`,
    /// without requiring a fresh [Options]: framebuffer and registers are
    /// zeroed, `PC`/`SP` reset, the RNG re-seeded (from the original seed if
    /// one was supplied, otherwise from fresh entropy), font tables
    /// reloaded, and `program`'s bytes reloaded at the configured load
    /// address.
    pub fn reset(&mut self, program: &Program) {
        self.frame_buffer.clear();
        self.stack.clear();
        self.memory = match self.variant {
            Variant::Super => Memory::new_randomized(&mut self.rng),
            Variant::Vip | Variant::Xo => Memory::new(),
        };
        self.program_counter = self.program_start_address;
        self.index_register = 0;
        self.variable_registers = [0; 16];
        self.delay_timer = 0;
        self.sound_timer = 0;
        self.millis_accumulator = 0;
        self.keystate = KeyState::new();
        self.rpl_flags = [0; RPL_FLAG_COUNT];
        self.high_resolution_mode = false;
        self.exit_requested = false;
        self.status = ProcessorStatus::ProgramLoaded;
        self.cycles = 0;
        self.rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        self.load_fonts();
        self.load_program(program);
    }

    fn load_fonts(&mut self) {
        let small = Font::default_low_resolution();
        self.memory
            .write_bytes(self.font_start_address, small.font_data());
        if self.variant == Variant::Super {
            let large = Font::default_high_resolution();
            self.memory
                .write_bytes(self.large_font_start_address, large.font_data());
        }
    }

    /// Writes `program`'s bytes at the configured load address, truncating
    /// an oversized ROM to whatever fits rather than letting it wrap back
    /// around and overwrite low memory.
    fn load_program(&mut self, program: &Program) {
        let capacity =
            (Memory::SIZE as u16).saturating_sub(self.program_start_address) as usize;
        let data = program.program_data();
        let truncated = &data[..data.len().min(capacity)];
        self.memory.write_bytes(self.program_start_address, truncated);
    }

    /// Executes exactly one fetch-decode-execute step and returns whether
    /// the frame buffer changed as a result. Never sleeps, spins, or
    /// otherwise measures wall-clock time: pacing (instructions-per-frame)
    /// is entirely the host's responsibility.
    ///
    /// If `FX0A` is pending release, this is a no-op that returns `Ok(false)`
    /// without reading memory.
    pub fn process_instruction(&mut self) -> Result<bool, ErrorDetail> {
        if self.keystate.waiting && !self.keystate.released {
            return Ok(false);
        }
        let old_pc = self.program_counter;
        let opcode = self.memory.read_two_bytes(old_pc);
        self.program_counter = old_pc.wrapping_add(2);
        let instruction = match Instruction::decode_from(opcode) {
            Ok(instruction) => instruction,
            Err(e) => {
                self.program_counter = old_pc;
                self.status = ProcessorStatus::Crashed;
                return Err(e);
            }
        };
        let display_updated = matches!(
            instruction,
            Instruction::Op00E0
                | Instruction::OpDXYN { .. }
                | Instruction::Op00CN { .. }
                | Instruction::Op00FB
                | Instruction::Op00FC
                | Instruction::Op00FE
        );
        self.cycles += 1;
        match self.execute(instruction, opcode) {
            Ok(()) => {
                self.status = if self.keystate.waiting {
                    ProcessorStatus::WaitingForKeyRelease
                } else {
                    ProcessorStatus::Running
                };
                Ok(display_updated)
            }
            Err(e) => {
                self.status = ProcessorStatus::Crashed;
                Err(e)
            }
        }
    }

    /// Adds `delta_millis` to the 60Hz accumulator, emitting exactly one
    /// timer tick (decrementing `delay_timer`/`sound_timer` by one each, if
    /// nonzero) if the accumulator now exceeds 17ms. A host that stalls for
    /// longer than a frame and calls this with a large `delta_millis` drains
    /// the backlog one tick per subsequent call rather than catching up in
    /// one call, deliberately: catching up in one call would visibly skip
    /// frames of delay-timer-gated animation instead of just running late.
    pub fn update_timer(&mut self, delta_millis: u64) {
        self.millis_accumulator += delta_millis;
        if self.millis_accumulator >= TIMER_TICK_MILLIS {
            self.millis_accumulator -= TIMER_TICK_MILLIS;
            if self.delay_timer > 0 {
                self.delay_timer -= 1;
            }
            if self.sound_timer > 0 {
                self.sound_timer -= 1;
            }
        }
    }

    /// Marks `key` (0..=15) as pressed.
    pub fn set_key(&mut self, key: u8) -> Result<(), ErrorDetail> {
        self.keystate.set_key(key)
    }

    /// Marks `key` (0..=15) as released, latching it for a pending `FX0A`.
    pub fn clear_key(&mut self, key: u8) -> Result<(), ErrorDetail> {
        self.keystate.clear_key(key)
    }

    /// Returns `true` if the sound timer is active, i.e. the host should be
    /// emitting audio this frame.
    pub fn sound_timer_active(&self) -> bool {
        self.sound_timer > 0
    }

    /// Returns the current frame buffer for presentation.
    pub fn frame_buffer(&self) -> &Display {
        &self.frame_buffer
    }

    /// Returns `true` once [Variant::Super]'s `00FD` (EXIT) has executed.
    /// The core never acts on this; a host polls it the same way it polls
    /// [Processor::sound_timer_active].
    pub fn exit_requested(&self) -> bool {
        self.exit_requested
    }

    /// Returns a copy of the processor's current state at the requested
    /// level of detail.
    pub fn export_state_snapshot(&self, verbosity: StateSnapshotVerbosity) -> StateSnapshot {
        match verbosity {
            StateSnapshotVerbosity::Minimal => StateSnapshot::MinimalSnapshot {
                frame_buffer: self.frame_buffer.clone(),
            },
            StateSnapshotVerbosity::Extended => StateSnapshot::ExtendedSnapshot {
                frame_buffer: self.frame_buffer.clone(),
                stack_depth: self.stack.depth(),
                program_counter: self.program_counter,
                index_register: self.index_register,
                variable_registers: self.variable_registers,
                delay_timer: self.delay_timer,
                sound_timer: self.sound_timer,
                cycles: self.cycles,
            },
        }
    }

    fn random_byte(&mut self) -> u8 {
        self.rng.gen()
    }
}
