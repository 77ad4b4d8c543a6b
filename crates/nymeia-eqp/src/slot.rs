//! Slot identifiers and the equipment record layout.
//!
//! Slots are identified by the game's three-letter abbreviations. Mapping
//! the abbreviations to human-facing names is the job of a naming authority
//! elsewhere in the consuming tool; this crate only guarantees that the
//! identifiers match the data files exactly.
//!
//! Two slot orders are part of the contract and must never be confused:
//!
//! - *entry order* (`top, dwn, glv, sho, met`) is the byte layout of the
//!   8-byte equipment parameter record, used for offset derivation and
//!   record concatenation;
//! - *enumeration order* (`met, top, glv, dwn, sho`, and `ear, nek, wrs,
//!   rir, ril` for accessories) is the order consumers iterate slots in.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Number of slots in either slot family.
pub const SLOT_COUNT: usize = 5;

/// Size of a full equipment parameter record in bytes.
///
/// Equal to the sum of the slot byte widths in [`EquipmentSlot::entry_order`].
pub const RECORD_SIZE: usize = 8;

/// An equipment gear slot.
///
/// Declared in enumeration order, so the discriminant doubles as the
/// position in [`EquipmentSlot::all`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum EquipmentSlot {
    /// Head gear (`met`).
    Met = 0,
    /// Body gear (`top`).
    Top = 1,
    /// Hand gear (`glv`).
    Glv = 2,
    /// Leg gear (`dwn`).
    Dwn = 3,
    /// Foot gear (`sho`).
    Sho = 4,
}

impl EquipmentSlot {
    /// All equipment slots in enumeration order.
    pub const fn all() -> [EquipmentSlot; SLOT_COUNT] {
        [
            EquipmentSlot::Met,
            EquipmentSlot::Top,
            EquipmentSlot::Glv,
            EquipmentSlot::Dwn,
            EquipmentSlot::Sho,
        ]
    }

    /// All equipment slots in record layout order.
    ///
    /// Byte offsets are strictly increasing along this order, which the
    /// flag offset resolver relies on.
    pub const fn entry_order() -> [EquipmentSlot; SLOT_COUNT] {
        [
            EquipmentSlot::Top,
            EquipmentSlot::Dwn,
            EquipmentSlot::Glv,
            EquipmentSlot::Sho,
            EquipmentSlot::Met,
        ]
    }

    /// The slot's abbreviation as used by the game data.
    pub const fn abbreviation(&self) -> &'static str {
        match self {
            EquipmentSlot::Met => "met",
            EquipmentSlot::Top => "top",
            EquipmentSlot::Glv => "glv",
            EquipmentSlot::Dwn => "dwn",
            EquipmentSlot::Sho => "sho",
        }
    }

    /// Width of the slot's sub-range within the record, in bytes.
    pub const fn byte_size(&self) -> usize {
        match self {
            EquipmentSlot::Met => 3,
            EquipmentSlot::Top => 2,
            EquipmentSlot::Glv => 1,
            EquipmentSlot::Dwn => 1,
            EquipmentSlot::Sho => 1,
        }
    }

    /// Offset of the slot's sub-range within the record, in bytes.
    pub const fn byte_offset(&self) -> usize {
        match self {
            EquipmentSlot::Met => 5,
            EquipmentSlot::Top => 0,
            EquipmentSlot::Glv => 3,
            EquipmentSlot::Dwn => 2,
            EquipmentSlot::Sho => 4,
        }
    }

    /// Width of the slot's private bit space.
    pub const fn bit_size(&self) -> usize {
        self.byte_size() * 8
    }

    /// Offset of the slot's first bit within the 64-bit record.
    pub const fn bit_offset(&self) -> usize {
        self.byte_offset() * 8
    }

    /// Position of this slot in [`EquipmentSlot::all`].
    pub const fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for EquipmentSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.abbreviation())
    }
}

impl FromStr for EquipmentSlot {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "met" => Ok(EquipmentSlot::Met),
            "top" => Ok(EquipmentSlot::Top),
            "glv" => Ok(EquipmentSlot::Glv),
            "dwn" => Ok(EquipmentSlot::Dwn),
            "sho" => Ok(EquipmentSlot::Sho),
            _ => Err(Error::UnknownSlot(s.to_string())),
        }
    }
}

/// An accessory slot, addressed by the accessory variant of deformation sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum AccessorySlot {
    /// Earrings (`ear`).
    Ear = 0,
    /// Necklace (`nek`).
    Nek = 1,
    /// Bracelets (`wrs`).
    Wrs = 2,
    /// Right ring (`rir`).
    Rir = 3,
    /// Left ring (`ril`).
    Ril = 4,
}

impl AccessorySlot {
    /// All accessory slots in enumeration order.
    pub const fn all() -> [AccessorySlot; SLOT_COUNT] {
        [
            AccessorySlot::Ear,
            AccessorySlot::Nek,
            AccessorySlot::Wrs,
            AccessorySlot::Rir,
            AccessorySlot::Ril,
        ]
    }

    /// The slot's abbreviation as used by the game data.
    pub const fn abbreviation(&self) -> &'static str {
        match self {
            AccessorySlot::Ear => "ear",
            AccessorySlot::Nek => "nek",
            AccessorySlot::Wrs => "wrs",
            AccessorySlot::Rir => "rir",
            AccessorySlot::Ril => "ril",
        }
    }

    /// Position of this slot in [`AccessorySlot::all`].
    pub const fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for AccessorySlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.abbreviation())
    }
}

impl FromStr for AccessorySlot {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ear" => Ok(AccessorySlot::Ear),
            "nek" => Ok(AccessorySlot::Nek),
            "wrs" => Ok(AccessorySlot::Wrs),
            "rir" => Ok(AccessorySlot::Rir),
            "ril" => Ok(AccessorySlot::Ril),
            _ => Err(Error::UnknownSlot(s.to_string())),
        }
    }
}

/// The slot family a deformation set addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SlotKind {
    /// The five equipment slots (`met, top, glv, dwn, sho`).
    Equipment,
    /// The five accessory slots (`ear, nek, wrs, rir, ril`).
    Accessory,
}

impl SlotKind {
    /// The family's slots in enumeration order.
    pub const fn slots(&self) -> [DeformationSlot; SLOT_COUNT] {
        match self {
            SlotKind::Equipment => [
                DeformationSlot::Equipment(EquipmentSlot::Met),
                DeformationSlot::Equipment(EquipmentSlot::Top),
                DeformationSlot::Equipment(EquipmentSlot::Glv),
                DeformationSlot::Equipment(EquipmentSlot::Dwn),
                DeformationSlot::Equipment(EquipmentSlot::Sho),
            ],
            SlotKind::Accessory => [
                DeformationSlot::Accessory(AccessorySlot::Ear),
                DeformationSlot::Accessory(AccessorySlot::Nek),
                DeformationSlot::Accessory(AccessorySlot::Wrs),
                DeformationSlot::Accessory(AccessorySlot::Rir),
                DeformationSlot::Accessory(AccessorySlot::Ril),
            ],
        }
    }

    /// The family's name.
    pub const fn name(&self) -> &'static str {
        match self {
            SlotKind::Equipment => "equipment",
            SlotKind::Accessory => "accessory",
        }
    }
}

impl fmt::Display for SlotKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A slot addressable by a deformation set, from either family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DeformationSlot {
    /// A slot from the equipment family.
    Equipment(EquipmentSlot),
    /// A slot from the accessory family.
    Accessory(AccessorySlot),
}

impl DeformationSlot {
    /// The family this slot belongs to.
    pub const fn kind(&self) -> SlotKind {
        match self {
            DeformationSlot::Equipment(_) => SlotKind::Equipment,
            DeformationSlot::Accessory(_) => SlotKind::Accessory,
        }
    }

    /// The slot's abbreviation as used by the game data.
    pub const fn abbreviation(&self) -> &'static str {
        match self {
            DeformationSlot::Equipment(slot) => slot.abbreviation(),
            DeformationSlot::Accessory(slot) => slot.abbreviation(),
        }
    }

    /// Position of this slot in its family's enumeration order.
    pub const fn index(&self) -> usize {
        match self {
            DeformationSlot::Equipment(slot) => slot.index(),
            DeformationSlot::Accessory(slot) => slot.index(),
        }
    }
}

impl From<EquipmentSlot> for DeformationSlot {
    fn from(slot: EquipmentSlot) -> Self {
        DeformationSlot::Equipment(slot)
    }
}

impl From<AccessorySlot> for DeformationSlot {
    fn from(slot: AccessorySlot) -> Self {
        DeformationSlot::Accessory(slot)
    }
}

impl fmt::Display for DeformationSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.abbreviation())
    }
}

impl FromStr for DeformationSlot {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(slot) = s.parse::<EquipmentSlot>() {
            return Ok(DeformationSlot::Equipment(slot));
        }
        if let Ok(slot) = s.parse::<AccessorySlot>() {
            return Ok(DeformationSlot::Accessory(slot));
        }
        Err(Error::UnknownSlot(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_partitions_record() {
        // Entry order must tile the record exactly: each slot starts where
        // the previous one ended, and the widths sum to RECORD_SIZE.
        let mut expected_offset = 0;
        for slot in EquipmentSlot::entry_order() {
            assert_eq!(slot.byte_offset(), expected_offset, "slot {}", slot);
            expected_offset += slot.byte_size();
        }
        assert_eq!(expected_offset, RECORD_SIZE);
    }

    #[test]
    fn test_layout_table_values() {
        assert_eq!(EquipmentSlot::Top.byte_offset(), 0);
        assert_eq!(EquipmentSlot::Dwn.byte_offset(), 2);
        assert_eq!(EquipmentSlot::Glv.byte_offset(), 3);
        assert_eq!(EquipmentSlot::Sho.byte_offset(), 4);
        assert_eq!(EquipmentSlot::Met.byte_offset(), 5);

        assert_eq!(EquipmentSlot::Met.byte_size(), 3);
        assert_eq!(EquipmentSlot::Top.byte_size(), 2);
        assert_eq!(EquipmentSlot::Glv.byte_size(), 1);
        assert_eq!(EquipmentSlot::Dwn.byte_size(), 1);
        assert_eq!(EquipmentSlot::Sho.byte_size(), 1);

        assert_eq!(EquipmentSlot::Met.bit_offset(), 40);
        assert_eq!(EquipmentSlot::Met.bit_size(), 24);
    }

    #[test]
    fn test_slot_orders() {
        let abbrs: Vec<_> = EquipmentSlot::all()
            .iter()
            .map(|s| s.abbreviation())
            .collect();
        assert_eq!(abbrs, ["met", "top", "glv", "dwn", "sho"]);

        let abbrs: Vec<_> = EquipmentSlot::entry_order()
            .iter()
            .map(|s| s.abbreviation())
            .collect();
        assert_eq!(abbrs, ["top", "dwn", "glv", "sho", "met"]);

        let abbrs: Vec<_> = AccessorySlot::all()
            .iter()
            .map(|s| s.abbreviation())
            .collect();
        assert_eq!(abbrs, ["ear", "nek", "wrs", "rir", "ril"]);
    }

    #[test]
    fn test_index_matches_enumeration_order() {
        for (i, slot) in EquipmentSlot::all().into_iter().enumerate() {
            assert_eq!(slot.index(), i);
        }
        for (i, slot) in AccessorySlot::all().into_iter().enumerate() {
            assert_eq!(slot.index(), i);
        }
    }

    #[test]
    fn test_from_str_roundtrip() {
        for slot in EquipmentSlot::all() {
            assert_eq!(slot.abbreviation().parse::<EquipmentSlot>().unwrap(), slot);
        }
        for slot in AccessorySlot::all() {
            assert_eq!(slot.abbreviation().parse::<AccessorySlot>().unwrap(), slot);
        }

        assert!(matches!(
            "hat".parse::<EquipmentSlot>(),
            Err(Error::UnknownSlot(_))
        ));
        // Family boundaries hold at the string level too.
        assert!("ear".parse::<EquipmentSlot>().is_err());
        assert!("met".parse::<AccessorySlot>().is_err());
    }

    #[test]
    fn test_deformation_slot() {
        let slot: DeformationSlot = EquipmentSlot::Met.into();
        assert_eq!(slot.kind(), SlotKind::Equipment);
        assert_eq!(slot.abbreviation(), "met");
        assert_eq!(slot.index(), 0);

        let slot: DeformationSlot = AccessorySlot::Ril.into();
        assert_eq!(slot.kind(), SlotKind::Accessory);
        assert_eq!(slot.index(), 4);

        assert_eq!(
            "ear".parse::<DeformationSlot>().unwrap(),
            DeformationSlot::Accessory(AccessorySlot::Ear)
        );
        assert_eq!(
            "top".parse::<DeformationSlot>().unwrap(),
            DeformationSlot::Equipment(EquipmentSlot::Top)
        );
        assert!("ears".parse::<DeformationSlot>().is_err());
    }

    #[test]
    fn test_kind_slots() {
        let names: Vec<_> = SlotKind::Equipment
            .slots()
            .iter()
            .map(|s| s.abbreviation())
            .collect();
        assert_eq!(names, ["met", "top", "glv", "dwn", "sho"]);

        let names: Vec<_> = SlotKind::Accessory
            .slots()
            .iter()
            .map(|s| s.abbreviation())
            .collect();
        assert_eq!(names, ["ear", "nek", "wrs", "rir", "ril"]);
    }

    #[test]
    fn test_display() {
        assert_eq!(EquipmentSlot::Met.to_string(), "met");
        assert_eq!(AccessorySlot::Wrs.to_string(), "wrs");
        assert_eq!(SlotKind::Accessory.to_string(), "accessory");
        assert_eq!(
            DeformationSlot::Equipment(EquipmentSlot::Sho).to_string(),
            "sho"
        );
    }
}
