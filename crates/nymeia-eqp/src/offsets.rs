//! Resolution from the global flag table to per-slot bit positions.
//!
//! The 8-byte equipment parameter record is split between the five slots,
//! but the flag table addresses bits by their absolute offset into the whole
//! record. The tables here translate between the two views: each byte of the
//! record belongs to the last slot in entry order whose byte offset does not
//! exceed it, and a flag's slot-local bit index is its absolute offset minus
//! the start of the owning slot's span.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::flags::EquipmentParameterFlag;
use crate::slot::{EquipmentSlot, SLOT_COUNT};

/// The slot whose byte span contains the given record byte.
pub const fn owning_slot(byte_index: usize) -> EquipmentSlot {
    let entries = EquipmentSlot::entry_order();
    // Entry offsets ascend from zero, so a forward scan that keeps the last
    // slot starting at or before the byte finds the owner.
    let mut owner = entries[0];
    let mut i = 1;
    while i < SLOT_COUNT {
        if entries[i].byte_offset() <= byte_index {
            owner = entries[i];
        }
        i += 1;
    }
    owner
}

/// Per-slot maps from flag to slot-local bit index, indexed by
/// [`EquipmentSlot::index`].
static FLAG_OFFSETS: LazyLock<[HashMap<EquipmentParameterFlag, usize>; SLOT_COUNT]> =
    LazyLock::new(|| {
        let mut maps: [HashMap<EquipmentParameterFlag, usize>; SLOT_COUNT] =
            std::array::from_fn(|_| HashMap::new());
        for flag in EquipmentParameterFlag::all() {
            let slot = owning_slot(flag.byte_index());
            let local = flag.bit_offset() - slot.byte_offset() * 8;
            maps[slot.index()].insert(flag, local);
        }
        maps
    });

/// Per-slot flag lists in global table order, indexed by
/// [`EquipmentSlot::index`].
static AVAILABLE_FLAGS: LazyLock<[Vec<EquipmentParameterFlag>; SLOT_COUNT]> =
    LazyLock::new(|| {
        std::array::from_fn(|index| {
            EquipmentParameterFlag::all()
                .into_iter()
                .filter(|flag| owning_slot(flag.byte_index()).index() == index)
                .collect()
        })
    });

/// Map from flag to slot-local bit index for the given slot.
pub fn flag_offsets(slot: EquipmentSlot) -> &'static HashMap<EquipmentParameterFlag, usize> {
    &FLAG_OFFSETS[slot.index()]
}

/// Slot-local bit index of the flag, or `None` if the flag belongs to a
/// different slot.
pub fn local_bit_index(slot: EquipmentSlot, flag: EquipmentParameterFlag) -> Option<usize> {
    FLAG_OFFSETS[slot.index()].get(&flag).copied()
}

/// Flags addressable within the given slot, in global table order.
pub fn available_flags(slot: EquipmentSlot) -> &'static [EquipmentParameterFlag] {
    &AVAILABLE_FLAGS[slot.index()]
}
