use std::path::PathBuf;
use std::process;

use log::{error, info};
use structopt::StructOpt;

use breadbox::{LoadMode, System};

#[derive(Debug, StructOpt)]
#[structopt(name = "breadbox", about = "Cycle-accurate MOS 6502 emulator.")]
struct CliOptions {
    /// Path to the program image to run
    program: PathBuf,

    /// Image layout: `functional` (raw bytes, entry at $0400) or `tmpx`
    /// (two-byte load address prefix)
    #[structopt(short, long, default_value = "functional")]
    mode: LoadMode,

    /// How many instructions to execute
    #[structopt(short, long, default_value = "1000000")]
    instructions: u32,

    /// Pace execution to a real-time 1 MHz clock instead of running flat out
    #[structopt(long)]
    pace: bool,
}

fn main() {
    env_logger::init();
    let options = CliOptions::from_args();

    let mut system = match System::from_file(&options.program, options.mode) {
        Ok(system) => system,
        Err(err) => {
            error!("unable to start: {err}");
            process::exit(1);
        }
    };

    info!(
        "loaded {} bytes at {:#06x}, entry {:#06x}",
        system.program.bytes.len(),
        system.program.load_address,
        system.program.entry
    );

    let cycles = if options.pace {
        system.run_paced(options.instructions, 1_000_000)
    } else {
        system.step(options.instructions)
    };

    let cpu = &system.cpu;
    println!("{} instructions in {} cycles", options.instructions, cycles);
    println!(
        "A={:#04x} X={:#04x} Y={:#04x} SP={:#04x} PC={:#06x} P={:#04x}",
        cpu.a, cpu.x, cpu.y, cpu.sp, cpu.pc, cpu.p.0
    );
}
