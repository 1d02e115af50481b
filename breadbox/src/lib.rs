mod error;
mod program;

pub use error::Error;
pub use program::{LoadMode, Program};

use std::path::Path;
use std::time::{Duration, Instant};

use breadbox_mos6502::mos6502::{Byte, CyclesTaken, Memory, Mos6502, RESET_VECTOR_ADDRESS};

pub type Result<A> = std::result::Result<A, Error>;

const JSR_ABSOLUTE: Byte = 0x20;
const NOP: Byte = 0xEA;

/// `System` wires a `Mos6502` to a loaded program.
///
/// The reset vector bytes are replaced with a four-byte patch,
/// `JSR entry` followed by `NOP`, and execution starts on the patch itself.
/// The jump carries the CPU into the program; if the program ends with `RTS`
/// it returns onto the trailing `NOP`.
pub struct System {
    pub cpu: Mos6502,
    pub program: Program,
}

impl System {
    pub fn from_file(path: &Path, mode: LoadMode) -> Result<System> {
        let bytes = std::fs::read(path)?;
        System::from_bytes(&bytes, mode)
    }

    pub fn from_bytes(bytes: &[Byte], mode: LoadMode) -> Result<System> {
        let program = Program::parse(bytes, mode)?;

        let mut memory = Memory::new();
        memory.load(program.load_address, &program.bytes);

        let [entry_lo, entry_hi] = program.entry.to_le_bytes();
        memory.load(
            RESET_VECTOR_ADDRESS,
            &[JSR_ABSOLUTE, entry_lo, entry_hi, NOP],
        );

        let mut cpu = Mos6502::new().with_memory(memory);
        cpu.reset();
        // The patch occupies the vector bytes themselves, so execution
        // starts on it rather than through it.
        cpu.pc = RESET_VECTOR_ADDRESS;

        Ok(System { cpu, program })
    }

    /// Execute `instructions` instructions flat out.
    pub fn step(&mut self, instructions: u32) -> CyclesTaken {
        self.cpu.execute(instructions)
    }

    /// Execute `instructions` instructions paced to `clock_hz`, sleeping off
    /// the difference between simulated time and wall time.
    pub fn run_paced(&mut self, instructions: u32, clock_hz: u64) -> CyclesTaken {
        const SLICE: u32 = 1_000;

        let started = Instant::now();
        let mut total: CyclesTaken = 0;
        let mut remaining = instructions;

        while remaining > 0 {
            let batch = remaining.min(SLICE);
            total += self.cpu.execute(batch);
            remaining -= batch;

            let simulated = Duration::from_secs_f64(total as f64 / clock_hz as f64);
            let elapsed = started.elapsed();
            if simulated > elapsed {
                std::thread::sleep(simulated - elapsed);
            }
        }

        total
    }
}
