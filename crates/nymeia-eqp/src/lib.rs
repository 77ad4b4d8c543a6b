//! EQP/EQDP (equipment parameter) codec for FINAL FANTASY XIV.
//!
//! Equipment parameter records store per-slot visibility and behavior flags
//! for a gear set, and equipment deformation entries store per-race model
//! deformation bits. This crate decodes both into typed flag views, lets
//! callers read and set flags by name, and re-encodes them bit-exactly.
//!
//! # Record Layout
//!
//! An equipment parameter record is exactly 8 bytes, split between the five
//! equipment slots in entry order:
//! - 2 bytes: body (`top`)
//! - 1 byte: legs (`dwn`)
//! - 1 byte: hands (`glv`)
//! - 1 byte: feet (`sho`)
//! - 3 bytes: head (`met`)
//!
//! Flags are named in one global table whose ordinals are absolute bit
//! offsets into the record, with bit 0 as the least significant bit of the
//! first byte. Bits without a named flag are reserved and survive a
//! decode/re-encode round trip unchanged.
//!
//! A deformation entry is 1 byte per slot, for either the equipment or the
//! accessory slot family. Only bits 0 and 1 of each byte are meaningful.
//!
//! # Example
//!
//! ```
//! use nymeia_eqp::{EquipmentParameterFlag, EquipmentParameterSet, EquipmentSlot};
//!
//! // One gear set's record, as stored in the EQP file.
//! let record = [0xC1, 0x1F, 0x21, 0x71, 0x09, 0x09, 0x00, 0x00];
//! let mut set = EquipmentParameterSet::from_bytes(&record)?;
//!
//! assert!(set.get_flag(EquipmentSlot::Top, EquipmentParameterFlag::EnableBodyFlags));
//! assert!(!set.get_flag(EquipmentSlot::Met, EquipmentParameterFlag::HeadShowNecklace));
//!
//! // Flip a flag and write the record back.
//! set.set_flag(EquipmentSlot::Met, EquipmentParameterFlag::HeadShowNecklace, true);
//! assert_eq!(set.to_bytes(), [0xC1, 0x1F, 0x21, 0x71, 0x09, 0x29, 0x00, 0x00]);
//! # Ok::<(), nymeia_eqp::Error>(())
//! ```

mod deformation;
mod error;
mod flags;
mod offsets;
mod parameter;
mod slot;

pub use deformation::{EquipmentDeformationParameter, EquipmentDeformationParameterSet};
pub use error::{Error, Result};
pub use flags::{EquipmentParameterFlag, FLAG_COUNT};
pub use offsets::{available_flags, flag_offsets, local_bit_index, owning_slot};
pub use parameter::{EquipmentParameter, EquipmentParameterSet};
pub use slot::{AccessorySlot, DeformationSlot, EquipmentSlot, SlotKind, RECORD_SIZE, SLOT_COUNT};
