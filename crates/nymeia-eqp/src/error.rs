//! Error types for the EQP/EQDP codec.

use thiserror::Error;

use crate::slot::{DeformationSlot, EquipmentSlot, SlotKind};

/// Errors that can occur when working with equipment parameter data.
#[derive(Debug, Error)]
pub enum Error {
    /// Common library error.
    #[error("{0}")]
    Common(#[from] nymeia_common::Error),

    /// A record buffer had the wrong size.
    #[error("invalid record size: expected {expected} bytes, got {actual}")]
    InvalidRecordSize { expected: usize, actual: usize },

    /// A slot buffer had the wrong size.
    #[error("invalid buffer for slot '{slot}': expected {expected} bytes, got {actual}")]
    InvalidSlotSize {
        slot: EquipmentSlot,
        expected: usize,
        actual: usize,
    },

    /// An abbreviation did not name a known slot.
    #[error("unknown slot identifier: '{0}'")]
    UnknownSlot(String),

    /// A slot from the wrong family was passed to a deformation set.
    #[error("slot '{slot}' is not part of the {kind} slot family")]
    SlotFamilyMismatch {
        kind: SlotKind,
        slot: DeformationSlot,
    },
}

/// Result type for EQP/EQDP operations.
pub type Result<T> = std::result::Result<T, Error>;
