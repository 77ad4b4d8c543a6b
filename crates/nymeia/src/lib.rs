//! Nymeia - FINAL FANTASY XIV equipment metadata library.
//!
//! This crate provides a unified interface to the Nymeia library ecosystem
//! for working with equipment metadata formats.
//!
//! # Crates
//!
//! - [`nymeia_common`] - Common utilities (binary reading, shared errors)
//! - [`nymeia_eqp`] - Equipment parameter (EQP) and equipment deformation
//!   parameter (EQDP) codecs
//!
//! # Example
//!
//! ```
//! use nymeia::prelude::*;
//!
//! // Decode one gear set's equipment parameter record.
//! let record = [0xC1, 0x1F, 0x21, 0x71, 0x09, 0x09, 0x00, 0x00];
//! let set = EquipmentParameterSet::from_bytes(&record)?;
//!
//! for (slot, param) in set.iter() {
//!     for flag in param.available_flags() {
//!         if param.get_flag(*flag) {
//!             println!("{}: {}", slot, flag);
//!         }
//!     }
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

// Re-export all sub-crates
pub use nymeia_common as common;
pub use nymeia_eqp as eqp;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use nymeia_common::BinaryReader;
    pub use nymeia_eqp::{
        AccessorySlot, DeformationSlot, EquipmentDeformationParameter,
        EquipmentDeformationParameterSet, EquipmentParameter, EquipmentParameterFlag,
        EquipmentParameterSet, EquipmentSlot, SlotKind,
    };
}

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
