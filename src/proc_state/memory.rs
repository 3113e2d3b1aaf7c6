/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use std::error::Error;
use std::fmt;

use super::registers::{join, split};

/// Size of the 8080 address space.
pub const MEMORY_SIZE: usize = 0x10000;

/// Counts of memory accesses made by the processor.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MemoryStats {
    /// Opcode and immediate operand bytes read at the program counter.
    pub fetches: u64,
    pub reads: u64,
    pub writes: u64,
}

/// The 64KiB of memory seen by the processor, zeroed at creation.
///
/// Every address is valid, 16-bit accesses wrap around at the end of the address space.
pub struct Memory {
    bytes: Box<[u8]>,
    stats: MemoryStats,
}

impl Memory {

    pub fn new() -> Memory {
        Memory {
            bytes: vec![0; MEMORY_SIZE].into_boxed_slice(),
            stats: Default::default(),
        }
    }

    /// Copies `program` at `start`, replacing what was there.
    ///
    /// Nothing is written if the program does not fit between `start` and the end of memory.
    pub fn load(&mut self, start: u16, program: &[u8]) -> Result<(), LoadError> {
        let begin = start as usize;
        let end = begin + program.len();
        if end > MEMORY_SIZE {
            return Err(LoadError::OutOfBounds { start, len: program.len() });
        }
        self.bytes[begin..end].copy_from_slice(program);
        Ok(())
    }

    pub fn fetch(&mut self, addr: u16) -> u8 {
        self.stats.fetches += 1;
        self.bytes[addr as usize]
    }

    pub fn read(&mut self, addr: u16) -> u8 {
        self.stats.reads += 1;
        self.bytes[addr as usize]
    }

    pub fn write(&mut self, addr: u16, value: u8) {
        self.stats.writes += 1;
        self.bytes[addr as usize] = value;
    }

    /// Little endian word at `addr`.
    pub fn read_word(&mut self, addr: u16) -> u16 {
        let low = self.read(addr);
        let high = self.read(addr.wrapping_add(1));
        join(high, low)
    }

    pub fn write_word(&mut self, addr: u16, value: u16) {
        let (high, low) = split(value);
        self.write(addr, low);
        self.write(addr.wrapping_add(1), high);
    }

    /// Reads a byte without counting the access.
    pub fn peek(&self, addr: u16) -> u8 {
        self.bytes[addr as usize]
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }

    pub fn stats(&self) -> MemoryStats {
        self.stats
    }

    pub fn clear_stats(&mut self) {
        self.stats = Default::default();
    }
}

impl Default for Memory {
    fn default() -> Memory {
        Memory::new()
    }
}

impl fmt::Debug for Memory {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Memory {{ size: 0x{:x}, stats: {:?} }}", self.bytes.len(), self.stats)
    }
}

/// Error returned when a program cannot be loaded in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// The program would run past the end of the address space.
    OutOfBounds { start: u16, len: usize },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            LoadError::OutOfBounds { start, len } => write!(
                f,
                "program of {} bytes loaded at 0x{:04x} does not fit in memory (ends at 0x{:x})",
                len, start, start as usize + len
            ),
        }
    }
}

impl Error for LoadError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zeroed_at_creation() {
        let memory = Memory::new();
        assert_eq!(memory.as_slice().len(), MEMORY_SIZE);
        assert!(memory.as_slice().iter().all(|&b| b == 0));
    }

    #[test]
    fn load_copies_program() {
        let mut memory = Memory::new();
        memory.load(0x0100, &[0x01, 0x02, 0x03]).unwrap();
        assert_eq!(&memory.as_slice()[0x0100..0x0103], &[0x01, 0x02, 0x03]);
        assert_eq!(memory.stats(), Default::default());
    }

    #[test]
    fn load_up_to_last_byte() {
        let mut memory = Memory::new();
        assert_eq!(memory.load(0xfffe, &[0xaa, 0xbb]), Ok(()));
        assert_eq!(memory.peek(0xffff), 0xbb);
    }

    #[test]
    fn load_past_the_end_is_rejected() {
        let mut memory = Memory::new();
        let result = memory.load(0xfffe, &[0xaa, 0xbb, 0xcc]);
        assert_eq!(result, Err(LoadError::OutOfBounds { start: 0xfffe, len: 3 }));
        assert_eq!(memory.peek(0xfffe), 0);
        assert_eq!(memory.peek(0xffff), 0);
        assert_eq!(memory.peek(0x0000), 0);
    }

    #[test]
    fn words_are_little_endian_and_wrap() {
        let mut memory = Memory::new();
        memory.write_word(0x2000, 0xc1f5);
        assert_eq!(memory.peek(0x2000), 0xf5);
        assert_eq!(memory.peek(0x2001), 0xc1);

        memory.write_word(0xffff, 0x1234);
        assert_eq!(memory.peek(0xffff), 0x34);
        assert_eq!(memory.peek(0x0000), 0x12);
        assert_eq!(memory.read_word(0xffff), 0x1234);
    }

    #[test]
    fn accesses_are_counted() {
        let mut memory = Memory::new();
        memory.write(0x10, 0x42);
        memory.read(0x10);
        memory.read_word(0x10);
        memory.fetch(0x00);
        memory.peek(0x10);
        assert_eq!(memory.stats(), MemoryStats { fetches: 1, reads: 3, writes: 1 });

        memory.clear_stats();
        assert_eq!(memory.stats(), Default::default());
    }

    #[test]
    fn load_error_message() {
        let error = LoadError::OutOfBounds { start: 0xffff, len: 2 };
        assert_eq!(
            error.to_string(),
            "program of 2 bytes loaded at 0xffff does not fit in memory (ends at 0x10001)"
        );
    }
}
