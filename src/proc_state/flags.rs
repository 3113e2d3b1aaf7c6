/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

const CARRY: u8 = 1;
const RESERVED: u8 = 1 << 1;
const PARITY: u8 = 1 << 2;
const AUX_CARRY: u8 = 1 << 4;
const ZERO: u8 = 1 << 6;
const SIGN: u8 = 1 << 7;

/// Packs the five status flags into the flags byte of the processor status word.
///
/// Bit 1 is always set, bits 3 and 5 are always clear.
pub fn encode(s: bool, z: bool, ac: bool, p: bool, cy: bool) -> u8 {
    RESERVED
        | (cy as u8)
        | ((p as u8) << 2)
        | ((ac as u8) << 4)
        | ((z as u8) << 6)
        | ((s as u8) << 7)
}

/// Inverse of [`encode`](fn.encode.html) for the five flag bits, returned as
/// `(sign, zero, aux_carry, parity, carry)`. The fixed bits are ignored.
pub fn decode(psw: u8) -> (bool, bool, bool, bool, bool) {
    (
        psw & SIGN != 0,
        psw & ZERO != 0,
        psw & AUX_CARRY != 0,
        psw & PARITY != 0,
        psw & CARRY != 0,
    )
}

/// Even parity of `value`: true when it has an even number of set bits.
pub fn parity(mut value: u8) -> bool {
    value ^= value >> 4;
    value ^= value >> 2;
    value ^= value >> 1;
    (value & 1) == 0
}

#[derive(Default, Debug, PartialEq, Eq, Clone, Copy)]
pub struct Flags {
   pub z: bool,
   pub s: bool,
   pub p: bool,
   pub cy: bool,
   pub ac: bool,
}

impl Flags {

    pub fn from_processor_status_word(psw: u8) -> Flags {
        let (s, z, ac, p, cy) = decode(psw);
        Flags { z, s, p, cy, ac }
    }

    pub fn to_processor_status_word(&self) -> u8 {
        encode(self.s, self.z, self.ac, self.p, self.cy)
    }

    /// Sign, zero and parity of `result`, carries cleared.
    pub fn for_result(result: u8) -> Flags {
        Flags {
            z: result == 0,
            s: (result & 0x80) != 0,
            p: parity(result),
            cy: false,
            ac: false,
        }
    }

    /// Copy of `self` where the carry is taken from `previous`.
    pub fn keep_carry_of(self, previous: Flags) -> Flags {
        Flags { cy: previous.cy, ..self }
    }
}
