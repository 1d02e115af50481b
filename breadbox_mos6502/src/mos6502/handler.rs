use super::ops;
use super::{Byte, Cpu, CyclesTaken};

/// A handler executes one instruction after the dispatcher has fetched its
/// opcode. The opcode fetch cycle is already in `cycles` when the handler
/// runs.
pub type HandlerFn = fn(&mut dyn Cpu, &mut CyclesTaken, Byte);

/// One entry in the 256-slot dispatch table.
#[derive(Clone, Copy)]
pub struct Handler {
    pub opcode: Byte,
    pub legal: bool,
    pub name: &'static str,
    pub execute: HandlerFn,
}

/// The one legal no-operation opcode.
pub const NOP: Byte = 0xEA;

/// Build the dispatch table for the full legal NMOS 6502 instruction set.
///
/// Every slot starts as `unsupported` and each operation family overwrites
/// its own opcodes. The table is plain data; callers own their copy and no
/// global state is involved.
pub fn handler_table() -> [Handler; 256] {
    let mut table = [Handler {
        opcode: 0x00,
        legal: false,
        name: "unsupported",
        execute: unsupported,
    }; 256];

    for (opcode, handler) in table.iter_mut().enumerate() {
        handler.opcode = opcode as Byte;
    }

    ops::load::register(&mut table);
    ops::store::register(&mut table);
    ops::transfer::register(&mut table);
    ops::stack::register(&mut table);
    ops::arithmetic::register(&mut table);
    ops::logic::register(&mut table);
    ops::shift::register(&mut table);
    ops::incdec::register(&mut table);
    ops::compare::register(&mut table);
    ops::branch::register(&mut table);
    ops::jump::register(&mut table);
    ops::flags::register(&mut table);

    table[NOP as usize] = Handler {
        opcode: NOP,
        legal: true,
        name: "NOP - no operation [implied]",
        execute: no_operation,
    };

    table
}

/// Default handler for unmapped opcodes: no effect beyond the dead cycle.
/// The dispatcher reports the opcode before invoking it.
fn unsupported(_cpu: &mut dyn Cpu, cycles: &mut CyclesTaken, _opcode: Byte) {
    *cycles += 1;
}

fn no_operation(_cpu: &mut dyn Cpu, cycles: &mut CyclesTaken, _opcode: Byte) {
    *cycles += 1;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_slot_carries_its_own_opcode() {
        let table = handler_table();
        for (opcode, handler) in table.iter().enumerate() {
            assert_eq!(handler.opcode as usize, opcode);
        }
    }

    #[test]
    fn the_official_instruction_count_is_mapped() {
        // 151 documented opcodes minus BRK and RTI, which stay unmapped
        // because interrupt sequencing is not emulated.
        let table = handler_table();
        let legal = table.iter().filter(|h| h.legal).count();
        assert_eq!(legal, 149);
    }

    #[test]
    fn undocumented_opcodes_stay_unsupported() {
        let table = handler_table();
        for opcode in [0x02, 0x3F, 0x80, 0xFF] {
            assert!(!table[opcode as usize].legal);
            assert_eq!(table[opcode as usize].name, "unsupported");
        }
    }
}
