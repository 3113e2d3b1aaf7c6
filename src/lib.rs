/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

//! # Intel 8080 core
//!
//! The ALU and instruction execution engine of an intel 8080, meant to be embedded in an
//! emulator or used to run 8080 programs in tests.
//!
//! The main struct is [`Proc8080`](proc_state/struct.Proc8080.html) which holds the state
//! of a 8080 processor (memory, flags and registers) and executes instructions. Arithmetic
//! and flag computations live in the [`alu`](alu/index.html) module as pure functions, and
//! the [`opcode`](opcode/index.html) module maps each of the 256 opcodes to its instruction
//! family.
//!
//! Programs can be hand-assembled with the constants of [`opcode::asm`](opcode/asm/index.html):
//!
//! ```
//! use intel_8080_core::opcode::asm::*;
//! use intel_8080_core::{Config, Proc8080};
//!
//! let program = [MVI_B, 0x12, MOV_C_B, HLT];
//! let mut proc8080 = Proc8080::from_program(Config::default(), &program).unwrap();
//! proc8080.run();
//!
//! assert!(proc8080.is_halted());
//! assert_eq!(proc8080.registers().c, 0x12);
//! ```
//!
//! `IN` and `OUT` go through a [`DataBus`](proc_state/trait.DataBus.html) provided by the
//! host. Execution traces are emitted with the `log` crate at the `trace` level.

pub mod alu;
pub mod config;
pub mod opcode;
pub mod proc_state;

pub use crate::config::Config;
pub use crate::proc_state::{DataBus, Flags, LoadError, NoPorts, Proc8080, Registers};
