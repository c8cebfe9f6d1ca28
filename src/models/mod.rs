//! Domain models for the articulation set converter.
//!
//! This module contains the normalized form of one CSV data row:
//!
//! - [`ArticulationRecord`] - a named articulation with its trigger and outputs
//! - [`InputSwitch`] - the input condition that activates an articulation
//! - [`OutputMessage`] - a MIDI message emitted while the articulation is active
//!
//! Records are created once by the parser, held in row order, and never
//! mutated afterwards.

// =============================================================================
// Constants
// =============================================================================

/// Offset between an articulation's row ID and the ID shared with its switch.
///
/// Logic pairs an articulation with its switch through this derived ID:
/// row 1 becomes articulation 1 with switch ID 1001.
pub const ID_OFFSET: u32 = 1000;

/// Switch mode that Logic treats as the default; it is never written out.
pub const PERMANENT_MODE: &str = "Permanent";

// =============================================================================
// Output Message
// =============================================================================

/// A MIDI message emitted while an articulation is active.
#[derive(Debug, Clone, PartialEq)]
pub struct OutputMessage {
    /// MIDI status type, e.g. "Note On" or "Program".
    pub status: String,
    /// 0-based MIDI channel.
    pub channel: i64,
    /// First MIDI data byte (note number, program number, ...).
    pub selector: i64,
    /// Second MIDI data byte (velocity, controller value, ...).
    pub value: i64,
}

// =============================================================================
// Input Switch
// =============================================================================

/// The input condition that switches an articulation on.
#[derive(Debug, Clone, PartialEq)]
pub struct InputSwitch {
    /// MIDI status type of the trigger, e.g. "Note On".
    pub status: String,
    /// First MIDI data byte of the trigger.
    pub selector: i64,
    /// Lowest accepted value of the second data byte.
    pub value_start: i64,
    /// Highest accepted value of the second data byte.
    pub value_end: i64,
    /// Persistence mode, e.g. "Permanent" or "Momentary".
    pub mode: String,
}

impl InputSwitch {
    /// Whether the mode is the implicit default that is never written out.
    pub fn is_permanent(&self) -> bool {
        self.mode == PERMANENT_MODE
    }
}

// =============================================================================
// Articulation Record
// =============================================================================

/// One normalized articulation row.
///
/// Output slots 2 and 3 are kept distinct rather than flattened into a
/// sequence: the document-level multiple-outputs flag keys on slot 2
/// specifically, so a record using only slots 1 and 3 emits two output
/// blocks without setting the flag.
#[derive(Debug, Clone, PartialEq)]
pub struct ArticulationRecord {
    /// 1-based row position, dense and unique.
    pub id: u32,
    /// Display name; blank cells become "--".
    pub name: String,
    /// 0-based MIDI channel of the articulation.
    pub channel: i64,
    /// Logic symbol name, e.g. "staccato"; may be empty.
    pub symbol: String,
    /// Trigger condition; absent when the input type column is blank.
    pub input: Option<InputSwitch>,
    /// First output message, always present.
    pub output1: OutputMessage,
    /// Second output message, present when its type column is non-blank.
    pub output2: Option<OutputMessage>,
    /// Third output message, present when its type column is non-blank.
    pub output3: Option<OutputMessage>,
}

impl ArticulationRecord {
    /// The ID shared between this articulation and its switch entry.
    pub fn switch_id(&self) -> u32 {
        ID_OFFSET + self.id
    }

    /// The 1 to 3 present output messages, in slot order.
    pub fn outputs(&self) -> impl Iterator<Item = &OutputMessage> {
        std::iter::once(&self.output1)
            .chain(self.output2.iter())
            .chain(self.output3.iter())
    }

    /// Whether this record uses a second output message.
    pub fn has_multiple_outputs(&self) -> bool {
        self.output2.is_some()
    }
}
