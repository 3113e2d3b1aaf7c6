/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

/// Start-up values of a [`Proc8080`](../proc_state/struct.Proc8080.html), also used on
/// reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Where programs are loaded by `from_program`, and the initial program counter.
    pub load_address: u16,
    /// Initial stack pointer. The stack grows down so the default of 0 puts the first
    /// pushed word at 0xfffe.
    pub stack_pointer: u16,
}

impl Config {

    pub fn with_load_address(mut self, load_address: u16) -> Config {
        self.load_address = load_address;
        self
    }

    pub fn with_stack_pointer(mut self, stack_pointer: u16) -> Config {
        self.stack_pointer = stack_pointer;
        self
    }
}

impl Default for Config {
    fn default() -> Config {
        Config {
            load_address: 0x0000,
            stack_pointer: 0x0000,
        }
    }
}
