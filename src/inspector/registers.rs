// Register view model
//
// Formats a DMG register snapshot for display: 8-bit registers, the 16-bit
// pairs, and the Z/N/H/C flags held in the upper nibble of F.

use super::port::EmulatorSnapshot;

/// Bits of the F register
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flag {
    Zero,
    Subtract,
    HalfCarry,
    Carry,
}

impl Flag {
    /// All flags in display order
    pub const ALL: [Flag; 4] = [Flag::Zero, Flag::Subtract, Flag::HalfCarry, Flag::Carry];

    pub const fn mask(self) -> u8 {
        match self {
            Flag::Zero => 0x80,
            Flag::Subtract => 0x40,
            Flag::HalfCarry => 0x20,
            Flag::Carry => 0x10,
        }
    }

    pub const fn letter(self) -> char {
        match self {
            Flag::Zero => 'Z',
            Flag::Subtract => 'N',
            Flag::HalfCarry => 'H',
            Flag::Carry => 'C',
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Flag::Zero => "Zero",
            Flag::Subtract => "Subtract",
            Flag::HalfCarry => "Half Carry",
            Flag::Carry => "Carry",
        }
    }
}

/// Register state as shown by the register view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegisterView {
    pub snapshot: EmulatorSnapshot,
}

impl RegisterView {
    pub fn new(snapshot: EmulatorSnapshot) -> Self {
        Self { snapshot }
    }

    pub fn pc(&self) -> u16 {
        self.snapshot.pc
    }

    pub fn sp(&self) -> u16 {
        self.snapshot.sp
    }

    pub fn af(&self) -> u16 {
        u16::from_be_bytes([self.snapshot.a, self.snapshot.f])
    }

    pub fn bc(&self) -> u16 {
        u16::from_be_bytes([self.snapshot.b, self.snapshot.c])
    }

    pub fn de(&self) -> u16 {
        u16::from_be_bytes([self.snapshot.d, self.snapshot.e])
    }

    pub fn hl(&self) -> u16 {
        u16::from_be_bytes([self.snapshot.h, self.snapshot.l])
    }

    pub fn flag(&self, flag: Flag) -> bool {
        self.snapshot.f & flag.mask() != 0
    }

    /// Flags as a string, upper case when set (e.g. "ZnHc")
    pub fn format_flags(&self) -> String {
        Flag::ALL
            .iter()
            .map(|&flag| {
                if self.flag(flag) {
                    flag.letter()
                } else {
                    flag.letter().to_ascii_lowercase()
                }
            })
            .collect()
    }

    /// Register pairs as `(name, value)` in display order
    pub fn pairs(&self) -> [(&'static str, u16); 4] {
        [
            ("AF", self.af()),
            ("BC", self.bc()),
            ("DE", self.de()),
            ("HL", self.hl()),
        ]
    }
}
