use super::register::Register;
use super::Address;

/// A resolved operand location: either a register or a memory address.
///
/// Addressing resolution produces a `Reference` and handlers read and write
/// through it with `Cpu::read_reference` / `Cpu::write_reference`, which
/// dispatch on the tag.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Reference {
    Register(Register),
    Address(Address),
}
