//! The equipment parameter record codec.
//!
//! An equipment parameter record is 8 bytes holding the visibility and
//! behavior flags of one gear set, split between the five equipment slots in
//! entry order. Bits are addressed little-first: bit 0 of a slot's span is
//! the least significant bit of its first byte.

use std::collections::HashMap;

use bitvec::prelude::{BitVec, Lsb0};
use nymeia_common::BinaryReader;

use crate::error::{Error, Result};
use crate::flags::EquipmentParameterFlag;
use crate::offsets::{available_flags, local_bit_index};
use crate::slot::{EquipmentSlot, RECORD_SIZE, SLOT_COUNT};

/// The flag bits of a single slot's span within an equipment parameter
/// record.
///
/// The bit storage has exactly `slot.byte_size() * 8` bits and never changes
/// length. Reserved bits with no named flag are carried through get/set
/// untouched, so a parameter re-encodes byte-for-byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EquipmentParameter {
    slot: EquipmentSlot,
    bits: BitVec<u8, Lsb0>,
}

impl EquipmentParameter {
    /// Creates an all-zero parameter for the slot.
    pub fn new(slot: EquipmentSlot) -> Self {
        Self {
            slot,
            bits: BitVec::repeat(false, slot.bit_size()),
        }
    }

    /// Parses a parameter from the slot's span of a record.
    ///
    /// The buffer must be exactly [`EquipmentSlot::byte_size`] bytes.
    pub fn from_bytes(slot: EquipmentSlot, data: &[u8]) -> Result<Self> {
        if data.len() != slot.byte_size() {
            return Err(Error::InvalidSlotSize {
                slot,
                expected: slot.byte_size(),
                actual: data.len(),
            });
        }

        Ok(Self {
            slot,
            bits: BitVec::from_slice(data),
        })
    }

    /// The slot this parameter belongs to.
    pub const fn slot(&self) -> EquipmentSlot {
        self.slot
    }

    /// Number of bits in the parameter.
    pub fn bit_len(&self) -> usize {
        self.bits.len()
    }

    /// Flags addressable within this parameter's slot, in global table
    /// order.
    pub fn available_flags(&self) -> &'static [EquipmentParameterFlag] {
        available_flags(self.slot)
    }

    /// Value of the flag, or `false` when the flag belongs to another slot.
    pub fn get_flag(&self, flag: EquipmentParameterFlag) -> bool {
        match local_bit_index(self.slot, flag) {
            Some(local) => self.bits[local],
            None => false,
        }
    }

    /// Sets the flag. Flags belonging to another slot are ignored, so a
    /// caller can apply one flag template across every slot.
    pub fn set_flag(&mut self, flag: EquipmentParameterFlag, value: bool) {
        if let Some(local) = local_bit_index(self.slot, flag) {
            self.bits.set(local, value);
        }
    }

    /// Snapshot of all the slot's flags. Mutating the returned map does not
    /// touch the parameter.
    pub fn flags(&self) -> HashMap<EquipmentParameterFlag, bool> {
        self.available_flags()
            .iter()
            .map(|flag| (*flag, self.get_flag(*flag)))
            .collect()
    }

    /// Applies every entry of the map via [`EquipmentParameter::set_flag`].
    pub fn set_flags(&mut self, flags: &HashMap<EquipmentParameterFlag, bool>) {
        for (flag, value) in flags {
            self.set_flag(*flag, *value);
        }
    }

    /// The parameter's span of the record, reserved bits included.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.bits.as_raw_slice().to_vec()
    }
}

/// A full 8-byte equipment parameter record, one parameter per slot.
///
/// # Example
///
/// ```
/// use nymeia_eqp::{EquipmentParameterFlag, EquipmentParameterSet, EquipmentSlot};
///
/// let record = [0x02, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x00];
/// let set = EquipmentParameterSet::from_bytes(&record)?;
///
/// assert!(set.get_flag(EquipmentSlot::Top, EquipmentParameterFlag::BodyHideWaist));
/// assert_eq!(set.to_bytes(), record);
/// # Ok::<(), nymeia_eqp::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EquipmentParameterSet {
    /// Parameters indexed by [`EquipmentSlot::index`].
    params: [EquipmentParameter; SLOT_COUNT],
}

impl EquipmentParameterSet {
    /// Creates an all-zero record.
    pub fn new() -> Self {
        Self {
            params: EquipmentSlot::all().map(EquipmentParameter::new),
        }
    }

    /// Parses a record from exactly [`RECORD_SIZE`] bytes.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        if data.len() != RECORD_SIZE {
            return Err(Error::InvalidRecordSize {
                expected: RECORD_SIZE,
                actual: data.len(),
            });
        }

        let mut reader = BinaryReader::new(data);
        let mut set = EquipmentParameterSet::new();
        for slot in EquipmentSlot::entry_order() {
            let span = reader.read_bytes(slot.byte_size())?;
            set.params[slot.index()] = EquipmentParameter::from_bytes(slot, span)?;
        }

        Ok(set)
    }

    /// Builds a record from its packed little-endian integer form, as stored
    /// by the consuming file format.
    pub fn from_u64(value: u64) -> Self {
        let bytes = value.to_le_bytes();
        let mut set = EquipmentParameterSet::new();
        for slot in EquipmentSlot::entry_order() {
            let start = slot.byte_offset();
            set.params[slot.index()].bits =
                BitVec::from_slice(&bytes[start..start + slot.byte_size()]);
        }
        set
    }

    /// The parameter for the slot.
    pub fn param(&self, slot: EquipmentSlot) -> &EquipmentParameter {
        &self.params[slot.index()]
    }

    /// Mutable access to the parameter for the slot.
    pub fn param_mut(&mut self, slot: EquipmentSlot) -> &mut EquipmentParameter {
        &mut self.params[slot.index()]
    }

    /// Value of the flag within the slot's parameter.
    pub fn get_flag(&self, slot: EquipmentSlot, flag: EquipmentParameterFlag) -> bool {
        self.param(slot).get_flag(flag)
    }

    /// Sets the flag within the slot's parameter.
    pub fn set_flag(&mut self, slot: EquipmentSlot, flag: EquipmentParameterFlag, value: bool) {
        self.param_mut(slot).set_flag(flag, value);
    }

    /// Snapshot of the slot's flags.
    pub fn flags(&self, slot: EquipmentSlot) -> HashMap<EquipmentParameterFlag, bool> {
        self.param(slot).flags()
    }

    /// Applies a flag map to the slot's parameter.
    pub fn set_flags(&mut self, slot: EquipmentSlot, flags: &HashMap<EquipmentParameterFlag, bool>) {
        self.param_mut(slot).set_flags(flags);
    }

    /// Re-encodes the record, concatenating the slot spans in entry order.
    pub fn to_bytes(&self) -> [u8; RECORD_SIZE] {
        let mut out = [0u8; RECORD_SIZE];
        for slot in EquipmentSlot::entry_order() {
            let start = slot.byte_offset();
            out[start..start + slot.byte_size()]
                .copy_from_slice(self.params[slot.index()].bits.as_raw_slice());
        }
        out
    }

    /// The record's packed little-endian integer form.
    pub fn to_u64(&self) -> u64 {
        u64::from_le_bytes(self.to_bytes())
    }

    /// Iterates the parameters in enumeration order.
    pub fn iter(&self) -> impl Iterator<Item = (EquipmentSlot, &EquipmentParameter)> {
        EquipmentSlot::all()
            .into_iter()
            .map(move |slot| (slot, &self.params[slot.index()]))
    }
}

impl Default for EquipmentParameterSet {
    fn default() -> Self {
        Self::new()
    }
}
