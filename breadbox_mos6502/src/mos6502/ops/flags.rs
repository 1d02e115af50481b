use super::super::handler::Handler;
use super::super::status::StatusFlag;
use super::super::{Byte, Cpu, CyclesTaken};

pub const CLC: Byte = 0x18;
pub const SEC: Byte = 0x38;
pub const CLI: Byte = 0x58;
pub const SEI: Byte = 0x78;
pub const CLV: Byte = 0xB8;
pub const CLD: Byte = 0xD8;
pub const SED: Byte = 0xF8;

fn set_or_clear(cpu: &mut dyn Cpu, cycles: &mut CyclesTaken, opcode: Byte) {
    let (flag, value) = match opcode {
        CLC => (StatusFlag::Carry, false),
        SEC => (StatusFlag::Carry, true),
        CLI => (StatusFlag::InterruptDisable, false),
        SEI => (StatusFlag::InterruptDisable, true),
        CLV => (StatusFlag::Overflow, false),
        CLD => (StatusFlag::DecimalMode, false),
        SED => (StatusFlag::DecimalMode, true),
        _ => unreachable!("opcode {opcode:#04x} is not a status flag change"),
    };

    cpu.set_flag(flag, value);
    *cycles += 1;
}

const HANDLERS: [Handler; 7] = [
    Handler { opcode: CLC, legal: true, name: "CLC - clear carry [implied]", execute: set_or_clear },
    Handler { opcode: SEC, legal: true, name: "SEC - set carry [implied]", execute: set_or_clear },
    Handler { opcode: CLI, legal: true, name: "CLI - clear interrupt disable [implied]", execute: set_or_clear },
    Handler { opcode: SEI, legal: true, name: "SEI - set interrupt disable [implied]", execute: set_or_clear },
    Handler { opcode: CLV, legal: true, name: "CLV - clear overflow [implied]", execute: set_or_clear },
    Handler { opcode: CLD, legal: true, name: "CLD - clear decimal mode [implied]", execute: set_or_clear },
    Handler { opcode: SED, legal: true, name: "SED - set decimal mode [implied]", execute: set_or_clear },
];

pub fn register(table: &mut [Handler; 256]) {
    for handler in HANDLERS {
        table[handler.opcode as usize] = handler;
    }
}
