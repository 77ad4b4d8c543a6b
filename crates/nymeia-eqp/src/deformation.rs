//! The equipment deformation entry codec.
//!
//! A deformation entry stores one byte per slot, of which only the two low
//! bits carry racial model deformation settings. Unlike the equipment
//! parameter record, the encoding is lossy: bits 2 through 7 are discarded
//! on decode and always written back as zero.

use nymeia_common::BinaryReader;

use crate::error::{Error, Result};
use crate::slot::{DeformationSlot, SlotKind, SLOT_COUNT};

/// The two deformation bits of a single slot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EquipmentDeformationParameter {
    pub bit0: bool,
    pub bit1: bool,
}

impl EquipmentDeformationParameter {
    /// Creates a parameter with the given bits.
    pub const fn new(bit0: bool, bit1: bool) -> Self {
        Self { bit0, bit1 }
    }

    /// Decodes a parameter from its byte form, keeping only bits 0 and 1.
    pub const fn from_byte(byte: u8) -> Self {
        Self {
            bit0: byte & 0b01 != 0,
            bit1: byte & 0b10 != 0,
        }
    }

    /// Encodes the parameter. Only bits 0 and 1 can be set in the result.
    pub const fn to_byte(&self) -> u8 {
        (self.bit0 as u8) | ((self.bit1 as u8) << 1)
    }
}

/// A deformation entry: one parameter per slot of a single family.
///
/// The family is fixed at construction. Slot accessors take either slot type
/// and fail with [`Error::SlotFamilyMismatch`] when the slot does not belong
/// to the set's family.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EquipmentDeformationParameterSet {
    kind: SlotKind,
    /// Parameters indexed by [`DeformationSlot::index`].
    params: [EquipmentDeformationParameter; SLOT_COUNT],
}

impl EquipmentDeformationParameterSet {
    /// Creates an all-false entry for the family.
    pub const fn new(kind: SlotKind) -> Self {
        Self {
            kind,
            params: [EquipmentDeformationParameter::new(false, false); SLOT_COUNT],
        }
    }

    /// Creates an all-false entry for the equipment slots.
    pub const fn equipment() -> Self {
        Self::new(SlotKind::Equipment)
    }

    /// Creates an all-false entry for the accessory slots.
    pub const fn accessory() -> Self {
        Self::new(SlotKind::Accessory)
    }

    /// Parses an entry from one byte per slot, in enumeration order.
    pub fn from_bytes(kind: SlotKind, data: &[u8]) -> Result<Self> {
        if data.len() != SLOT_COUNT {
            return Err(Error::InvalidRecordSize {
                expected: SLOT_COUNT,
                actual: data.len(),
            });
        }

        let mut reader = BinaryReader::new(data);
        let mut set = EquipmentDeformationParameterSet::new(kind);
        for param in &mut set.params {
            *param = EquipmentDeformationParameter::from_byte(reader.read_u8()?);
        }

        Ok(set)
    }

    /// The family this entry addresses.
    pub const fn kind(&self) -> SlotKind {
        self.kind
    }

    /// Whether this entry addresses the accessory slots.
    pub const fn is_accessory_set(&self) -> bool {
        matches!(self.kind, SlotKind::Accessory)
    }

    /// The entry's slots in enumeration order.
    pub const fn slots(&self) -> [DeformationSlot; SLOT_COUNT] {
        self.kind.slots()
    }

    /// The parameter for the slot.
    pub fn param(&self, slot: impl Into<DeformationSlot>) -> Result<&EquipmentDeformationParameter> {
        let slot = slot.into();
        self.check_family(slot)?;
        Ok(&self.params[slot.index()])
    }

    /// Mutable access to the parameter for the slot.
    pub fn param_mut(
        &mut self,
        slot: impl Into<DeformationSlot>,
    ) -> Result<&mut EquipmentDeformationParameter> {
        let slot = slot.into();
        self.check_family(slot)?;
        Ok(&mut self.params[slot.index()])
    }

    /// Replaces the parameter for the slot.
    pub fn set_param(
        &mut self,
        slot: impl Into<DeformationSlot>,
        param: EquipmentDeformationParameter,
    ) -> Result<()> {
        *self.param_mut(slot)? = param;
        Ok(())
    }

    /// Encodes the entry, one byte per slot in enumeration order.
    pub fn to_bytes(&self) -> [u8; SLOT_COUNT] {
        let mut out = [0u8; SLOT_COUNT];
        for (byte, param) in out.iter_mut().zip(&self.params) {
            *byte = param.to_byte();
        }
        out
    }

    /// Iterates the parameters in enumeration order.
    pub fn iter(&self) -> impl Iterator<Item = (DeformationSlot, &EquipmentDeformationParameter)> {
        self.slots().into_iter().zip(self.params.iter())
    }

    fn check_family(&self, slot: DeformationSlot) -> Result<()> {
        if slot.kind() != self.kind {
            return Err(Error::SlotFamilyMismatch {
                kind: self.kind,
                slot,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slot::{AccessorySlot, EquipmentSlot};

    #[test]
    fn test_byte_codec_keeps_low_bits() {
        for byte in 0..=255u8 {
            let param = EquipmentDeformationParameter::from_byte(byte);
            assert_eq!(param.to_byte(), byte & 0b11, "byte {byte:#010b}");
        }

        let param = EquipmentDeformationParameter::from_byte(0b0000_0111);
        assert!(param.bit0);
        assert!(param.bit1);
        assert_eq!(param.to_byte(), 0b0000_0011);
    }

    #[test]
    fn test_new_set_is_all_false() {
        let set = EquipmentDeformationParameterSet::equipment();
        assert_eq!(set.kind(), SlotKind::Equipment);
        assert!(!set.is_accessory_set());
        assert_eq!(set.to_bytes(), [0u8; SLOT_COUNT]);
        assert!(set.iter().all(|(_, p)| !p.bit0 && !p.bit1));

        let set = EquipmentDeformationParameterSet::accessory();
        assert_eq!(set.kind(), SlotKind::Accessory);
        assert!(set.is_accessory_set());
    }

    #[test]
    fn test_bytes_round_trip() {
        let data = [0b00, 0b01, 0b10, 0b11, 0b01];
        let set = EquipmentDeformationParameterSet::from_bytes(SlotKind::Accessory, &data).unwrap();
        assert_eq!(set.to_bytes(), data);

        // High bits do not survive a decode.
        let data = [0xF0, 0xF1, 0xF2, 0xF3, 0xFF];
        let set = EquipmentDeformationParameterSet::from_bytes(SlotKind::Equipment, &data).unwrap();
        assert_eq!(set.to_bytes(), [0b00, 0b01, 0b10, 0b11, 0b11]);
    }

    #[test]
    fn test_entry_size_is_exact() {
        for len in [0, 4, 6] {
            let data = vec![0u8; len];
            assert!(matches!(
                EquipmentDeformationParameterSet::from_bytes(SlotKind::Equipment, &data),
                Err(Error::InvalidRecordSize {
                    expected: SLOT_COUNT,
                    actual,
                }) if actual == len
            ));
        }
    }

    #[test]
    fn test_param_access() {
        let mut set = EquipmentDeformationParameterSet::equipment();
        set.set_param(EquipmentSlot::Met, EquipmentDeformationParameter::new(true, false))
            .unwrap();
        assert!(set.param(EquipmentSlot::Met).unwrap().bit0);
        assert_eq!(set.to_bytes(), [0b01, 0, 0, 0, 0]);

        set.param_mut(EquipmentSlot::Sho).unwrap().bit1 = true;
        assert_eq!(set.to_bytes(), [0b01, 0, 0, 0, 0b10]);

        let mut set = EquipmentDeformationParameterSet::accessory();
        set.param_mut(AccessorySlot::Ril).unwrap().bit0 = true;
        assert_eq!(set.to_bytes(), [0, 0, 0, 0, 0b01]);
    }

    #[test]
    fn test_family_mismatch() {
        let mut set = EquipmentDeformationParameterSet::equipment();
        assert!(matches!(
            set.param(AccessorySlot::Ear),
            Err(Error::SlotFamilyMismatch { kind: SlotKind::Equipment, .. })
        ));
        assert!(set.param_mut(AccessorySlot::Nek).is_err());

        let set = EquipmentDeformationParameterSet::accessory();
        assert!(matches!(
            set.param(EquipmentSlot::Top),
            Err(Error::SlotFamilyMismatch { kind: SlotKind::Accessory, .. })
        ));
    }

    #[test]
    fn test_iter_order() {
        let set = EquipmentDeformationParameterSet::accessory();
        let abbrs: Vec<&str> = set.iter().map(|(slot, _)| slot.abbreviation()).collect();
        assert_eq!(abbrs, ["ear", "nek", "wrs", "rir", "ril"]);
    }
}
