use super::super::handler::Handler;
use super::super::register::Register;
use super::super::status::Status;
use super::super::{Byte, Cpu, CyclesTaken};
use super::set_nz;

pub const PHA: Byte = 0x48;
pub const PHP: Byte = 0x08;
pub const PLA: Byte = 0x68;
pub const PLP: Byte = 0x28;

/// `PHA` pushes the accumulator; `PHP` pushes `p` with `Break` and `Unused`
/// forced on.
fn push(cpu: &mut dyn Cpu, cycles: &mut CyclesTaken, opcode: Byte) {
    let value = if opcode == PHA {
        cpu.read_register(Register::A)
    } else {
        Status(cpu.p()).for_push()
    };

    cpu.push_byte(cycles, value);
    *cycles += 1;
}

/// `PLA` pulls into the accumulator and refreshes `N`/`Z`; `PLP` pulls into
/// `p`, keeping the current `Break` and `Unused` bits.
fn pull(cpu: &mut dyn Cpu, cycles: &mut CyclesTaken, opcode: Byte) {
    let value = cpu.pull_byte(cycles);

    if opcode == PLA {
        cpu.write_register(Register::A, value);
        set_nz(cpu, value);
    } else {
        let p = Status(cpu.p()).after_pull(value);
        cpu.set_p(p.0);
    }

    *cycles += 2;
}

const HANDLERS: [Handler; 4] = [
    Handler { opcode: PHA, legal: true, name: "PHA - push accumulator [implied]", execute: push },
    Handler { opcode: PHP, legal: true, name: "PHP - push processor status [implied]", execute: push },
    Handler { opcode: PLA, legal: true, name: "PLA - pull accumulator [implied]", execute: pull },
    Handler { opcode: PLP, legal: true, name: "PLP - pull processor status [implied]", execute: pull },
];

pub fn register(table: &mut [Handler; 256]) {
    for handler in HANDLERS {
        table[handler.opcode as usize] = handler;
    }
}
