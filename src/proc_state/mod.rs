/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

mod execute;
pub mod flags;
mod memory;
mod registers;

use std::fmt;

use crate::config::Config;
use crate::opcode::{self, Register};
pub use self::flags::Flags;
pub use self::memory::{LoadError, Memory, MemoryStats, MEMORY_SIZE};
pub use self::registers::Registers;
use self::registers::{join, split};

/// Interface used by `Proc8080` for `IN` and `OUT` instructions.
///
/// The 8080 communicates with external devices via the instructions `IN` (the CPU reads
/// from the databus on a given port) and `OUT` (the CPU writes to a given port). What a port
/// does depends on the hardware around the processor, so this trait is implemented by the
/// user of the library. Both methods default to an unconnected port.
pub trait DataBus {

    /// Called by `Proc8080` when it applies a `IN` instruction. `None` leaves the
    /// accumulator unchanged.
    fn read_port(&mut self, _port: u8) -> Option<u8> {
        None
    }

    /// Called by `Proc8080` when it applies a `OUT` instruction.
    fn write_port(&mut self, _port: u8, _value: u8) {}
}

/// A data bus without any device: `IN` and `OUT` have no effect.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NoPorts;

impl DataBus for NoPorts {}

/// Structure containing the processor state (flags, registers and memory) and logic.
pub struct Proc8080<Bus: DataBus = NoPorts> {
    config: Config,
    flags: Flags,
    registers: Registers,
    memory: Memory,
    instruction_register: u8,
    executed: u64,
    interrupts_enabled: bool,
    halted: bool,
    data_bus: Bus,
}

impl Proc8080<NoPorts> {

    /// Builds a processor with zeroed memory and no I/O device.
    pub fn new(config: Config) -> Proc8080<NoPorts> {
        Proc8080::with_bus(config, NoPorts)
    }

    /// Builds a processor with `program` loaded at the configured load address.
    pub fn from_program(config: Config, program: &[u8]) -> Result<Proc8080<NoPorts>, LoadError> {
        let mut proc8080 = Proc8080::new(config);
        proc8080.load(config.load_address, program)?;
        Ok(proc8080)
    }
}

impl<Bus: DataBus> Proc8080<Bus> {

    /// Builds a processor with zeroed memory. `data_bus` receives the `IN` and `OUT`
    /// instructions.
    pub fn with_bus(config: Config, data_bus: Bus) -> Proc8080<Bus> {
        Proc8080 {
            config,
            flags: Default::default(),
            registers: Self::initial_registers(&config),
            memory: Memory::new(),
            instruction_register: 0,
            executed: 0,
            interrupts_enabled: false,
            halted: false,
            data_bus,
        }
    }

    fn initial_registers(config: &Config) -> Registers {
        Registers {
            pc: config.load_address,
            sp: config.stack_pointer,
            ..Default::default()
        }
    }

    /// Copies `program` in memory at `start`.
    ///
    /// Fails without touching memory when the program goes past the end of the address space.
    pub fn load(&mut self, start: u16, program: &[u8]) -> Result<(), LoadError> {
        self.memory.load(start, program)?;
        log::debug!("loaded {} bytes at 0x{:04x}", program.len(), start);
        Ok(())
    }

    /// Puts the processor back in its start-up state: program counter and stack pointer from
    /// the configuration, registers and flags cleared, not halted. Memory content is kept.
    pub fn reset(&mut self) {
        self.registers = Self::initial_registers(&self.config);
        self.flags = Default::default();
        self.instruction_register = 0;
        self.executed = 0;
        self.interrupts_enabled = false;
        self.halted = false;
        self.memory.clear_stats();
    }

    /// Runs one instruction and returns whether the processor is still running.
    ///
    /// Nothing happens once the processor is halted.
    pub fn step(&mut self) -> bool {
        if self.halted {
            return false;
        }
        let pc = self.registers.pc;
        let opcode = self.fetch();
        self.instruction_register = opcode;
        log::trace!("{:04x} - {}", pc, opcode::mnemonic(opcode));
        self.execute(opcode::instruction(opcode));
        self.executed += 1;
        !self.halted
    }

    /// Runs instructions until `HLT`.
    pub fn run(&mut self) {
        while self.step() {}
    }

    /// Runs at most `budget` instructions, stopping early on `HLT`. Returns the number of
    /// instructions run.
    pub fn run_for(&mut self, budget: u64) -> u64 {
        let mut count = 0;
        while count < budget && !self.halted {
            self.step();
            count += 1;
        }
        count
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Borrows the procesor flags immutably.
    pub fn flags(&self) -> &Flags {
        &self.flags
    }

    pub fn flags_mut(&mut self) -> &mut Flags {
        &mut self.flags
    }

    /// Borrows the procesor registers immutably.
    pub fn registers(&self) -> &Registers {
        &self.registers
    }

    pub fn registers_mut(&mut self) -> &mut Registers {
        &mut self.registers
    }

    pub fn memory(&self) -> &Memory {
        &self.memory
    }

    pub fn memory_mut(&mut self) -> &mut Memory {
        &mut self.memory
    }

    pub fn data_bus(&self) -> &Bus {
        &self.data_bus
    }

    pub fn data_bus_mut(&mut self) -> &mut Bus {
        &mut self.data_bus
    }

    /// Last fetched opcode.
    pub fn instruction_register(&self) -> u8 {
        self.instruction_register
    }

    pub fn is_halted(&self) -> bool {
        self.halted
    }

    /// Set by `EI`, cleared by `DI`.
    pub fn interrupts_enabled(&self) -> bool {
        self.interrupts_enabled
    }

    /// Instructions run since creation or the last reset.
    pub fn executed(&self) -> u64 {
        self.executed
    }

    /// Value of the register designated by a 3-bit register field. Field 6 is `M`, the
    /// memory byte addressed by HL.
    pub fn operand(&mut self, field: u8) -> u8 {
        match Register::from_field(field) {
            Some(reg) => self.registers.reg_val(reg),
            None => {
                let addr = self.registers.hl();
                self.memory.read(addr)
            }
        }
    }

    /// Writes the register designated by a 3-bit register field, field 6 writing memory at
    /// HL.
    pub fn set_operand(&mut self, field: u8, value: u8) {
        match Register::from_field(field) {
            Some(reg) => self.registers.set_reg_val(reg, value),
            None => {
                let addr = self.registers.hl();
                self.memory.write(addr, value);
            }
        }
    }

    /// Processor status word: accumulator in the high byte, flags in the low byte.
    pub fn psw(&self) -> u16 {
        join(self.registers.a, self.flags.to_processor_status_word())
    }

    pub fn set_psw(&mut self, value: u16) {
        let (a, flags) = split(value);
        self.registers.a = a;
        self.flags = Flags::from_processor_status_word(flags);
    }

    fn fetch(&mut self) -> u8 {
        let value = self.memory.fetch(self.registers.pc);
        self.registers.pc = self.registers.pc.wrapping_add(1);
        value
    }

    fn fetch_word(&mut self) -> u16 {
        let low = self.fetch();
        let high = self.fetch();
        join(high, low)
    }

    fn push(&mut self, value: u16) {
        self.registers.sp = self.registers.sp.wrapping_sub(2);
        self.memory.write_word(self.registers.sp, value);
    }

    fn pop(&mut self) -> u16 {
        let value = self.memory.read_word(self.registers.sp);
        self.registers.sp = self.registers.sp.wrapping_add(2);
        value
    }
}

impl<Bus: DataBus> fmt::Debug for Proc8080<Bus> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{{
    flags: {:x?},
    registers: {:x?},
    interrupts_enabled: {:?},
    halted: {:?},
}}", self.flags, self.registers, self.interrupts_enabled, self.halted)
    }
}
