//! The global equipment parameter flag table.
//!
//! Every flag of the 64-bit equipment parameter record lives in one flat
//! enumeration whose discriminants are the flag's absolute bit offset into
//! the 8-byte record. The values are semantically offsets, not identities:
//! they must be preserved exactly, and the gaps between them are reserved
//! bits that no flag addresses.

use std::fmt;

/// Number of named flags in the global table.
pub const FLAG_COUNT: usize = 39;

/// Bitwise flags of the 64-bit equipment parameter record.
///
/// Flag names describe what the bit does when set to 1. The record groups
/// bits by body system: body (bytes 0-1), leg (byte 2), hand (byte 3), foot
/// (byte 4), head and hair (byte 5), ears and horns (byte 6), and the
/// Shadowbringers race settings (byte 7).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum EquipmentParameterFlag {
    // --- byte 0: body ---
    /// Master enable for the body flag group.
    EnableBodyFlags = 0,
    /// Hides the character's waist.
    BodyHideWaist = 1,
    /// Keeps the arms visible even when other settings would hide them.
    BodyPreventArmHiding = 6,
    /// Keeps the neck visible even when other settings would hide it.
    BodyPreventNeckHiding = 7,

    // --- byte 1: body ---
    /// When clear, leg hiding data is resolved from this entry instead of
    /// the equipped leg piece's own entry.
    BodyShowLeg = 8,
    /// When clear, hand hiding data is resolved from this entry instead of
    /// the equipped hand piece's own entry.
    BodyShowHand = 9,
    /// When clear, head hiding data is resolved from this entry instead of
    /// the equipped head piece's own entry.
    BodyShowHead = 10,
    /// Keeps an equipped necklace visible.
    BodyShowNecklace = 11,
    /// Keeps equipped bracelets visible.
    BodyShowBracelet = 12,
    /// Hides the character's tail.
    BodyHideTail = 14,

    // --- byte 2: leg ---
    /// Master enable for the leg flag group.
    EnableLegFlags = 16,
    /// Keeps equipped footwear visible.
    LegShowFoot = 21,

    // --- byte 3: hand ---
    /// Master enable for the hand flag group.
    EnableHandFlags = 24,
    /// Hides the elbow. Only takes effect when [`HandHideForearm`] is also
    /// set.
    ///
    /// [`HandHideForearm`]: EquipmentParameterFlag::HandHideForearm
    HandHideElbow = 25,
    /// Hides the forearm.
    HandHideForearm = 26,
    /// Keeps equipped bracelets visible.
    HandShowBracelet = 28,
    /// Keeps the left ring visible.
    HandShowRingL = 29,
    /// Keeps the right ring visible.
    HandShowRingR = 30,

    // --- byte 4: foot ---
    /// Master enable for the foot flag group.
    EnableFootFlags = 32,
    /// Hides the knee. Only takes effect when [`FootHideCalf`] is also set.
    ///
    /// [`FootHideCalf`]: EquipmentParameterFlag::FootHideCalf
    FootHideKnee = 33,
    /// Hides the calf.
    FootHideCalf = 34,
    /// Set on nearly every entry; the remaining bits of the byte stay clear.
    FootUsuallyOn = 35,

    // --- byte 5: head and hair ---
    /// Master enable for the head flag group.
    EnableHeadFlags = 40,
    /// Hides the hat portion of the hair. Together with [`HeadHideHair`] it
    /// hides everything from the neck up.
    ///
    /// [`HeadHideHair`]: EquipmentParameterFlag::HeadHideHair
    HeadHideHairTop = 41,
    /// Hides all hair when set alone; see [`HeadHideHairTop`] for the
    /// combined behavior.
    ///
    /// [`HeadHideHairTop`]: EquipmentParameterFlag::HeadHideHairTop
    HeadHideHair = 42,
    /// Shows the hair, taking precedence over [`HeadHideHair`].
    ///
    /// [`HeadHideHair`]: EquipmentParameterFlag::HeadHideHair
    HeadShowHair = 43,
    /// Hides the neck.
    HeadHideNeck = 44,
    /// Keeps an equipped necklace visible.
    HeadShowNecklace = 45,
    /// Keeps equipped earrings visible. Cannot be turned off without also
    /// setting [`HeadHideHair`].
    ///
    /// [`HeadHideHair`]: EquipmentParameterFlag::HeadHideHair
    HeadShowEarrings = 47,

    // --- byte 6: ears and horns ---
    /// Keeps earrings visible on Hyur, Elezen, Lalafell and Roegadyn heads.
    HeadShowEarringsHuman = 48,
    /// Keeps earrings visible on Au Ra heads.
    HeadShowEarringsAura = 49,
    /// Shows the ears of Hyur, Elezen, Lalafell and Roegadyn heads.
    HeadShowEarHuman = 50,
    /// Shows the ears of Miqo'te heads.
    HeadShowEarMiqo = 51,
    /// Shows the horns of Au Ra heads.
    HeadShowEarAura = 52,
    /// Shows the ears of Viera heads.
    HeadShowEarViera = 53,
    /// Usually set on helmets in place of the earring bits.
    HeadUnknownHelmet1 = 54,
    /// Usually set on helmets in place of the earring bits.
    HeadUnknownHelmet2 = 55,

    // --- byte 7: Shadowbringers race settings ---
    /// Master enable for the Shadowbringers race flag group.
    EnableShbFlags = 56,
    /// Shows the head for the Shadowbringers races.
    ShbShowHead = 57,
}

impl EquipmentParameterFlag {
    /// All flags in global table order.
    pub const fn all() -> [EquipmentParameterFlag; FLAG_COUNT] {
        [
            EquipmentParameterFlag::EnableBodyFlags,
            EquipmentParameterFlag::BodyHideWaist,
            EquipmentParameterFlag::BodyPreventArmHiding,
            EquipmentParameterFlag::BodyPreventNeckHiding,
            EquipmentParameterFlag::BodyShowLeg,
            EquipmentParameterFlag::BodyShowHand,
            EquipmentParameterFlag::BodyShowHead,
            EquipmentParameterFlag::BodyShowNecklace,
            EquipmentParameterFlag::BodyShowBracelet,
            EquipmentParameterFlag::BodyHideTail,
            EquipmentParameterFlag::EnableLegFlags,
            EquipmentParameterFlag::LegShowFoot,
            EquipmentParameterFlag::EnableHandFlags,
            EquipmentParameterFlag::HandHideElbow,
            EquipmentParameterFlag::HandHideForearm,
            EquipmentParameterFlag::HandShowBracelet,
            EquipmentParameterFlag::HandShowRingL,
            EquipmentParameterFlag::HandShowRingR,
            EquipmentParameterFlag::EnableFootFlags,
            EquipmentParameterFlag::FootHideKnee,
            EquipmentParameterFlag::FootHideCalf,
            EquipmentParameterFlag::FootUsuallyOn,
            EquipmentParameterFlag::EnableHeadFlags,
            EquipmentParameterFlag::HeadHideHairTop,
            EquipmentParameterFlag::HeadHideHair,
            EquipmentParameterFlag::HeadShowHair,
            EquipmentParameterFlag::HeadHideNeck,
            EquipmentParameterFlag::HeadShowNecklace,
            EquipmentParameterFlag::HeadShowEarrings,
            EquipmentParameterFlag::HeadShowEarringsHuman,
            EquipmentParameterFlag::HeadShowEarringsAura,
            EquipmentParameterFlag::HeadShowEarHuman,
            EquipmentParameterFlag::HeadShowEarMiqo,
            EquipmentParameterFlag::HeadShowEarAura,
            EquipmentParameterFlag::HeadShowEarViera,
            EquipmentParameterFlag::HeadUnknownHelmet1,
            EquipmentParameterFlag::HeadUnknownHelmet2,
            EquipmentParameterFlag::EnableShbFlags,
            EquipmentParameterFlag::ShbShowHead,
        ]
    }

    /// The flag's name.
    pub const fn name(&self) -> &'static str {
        match self {
            EquipmentParameterFlag::EnableBodyFlags => "EnableBodyFlags",
            EquipmentParameterFlag::BodyHideWaist => "BodyHideWaist",
            EquipmentParameterFlag::BodyPreventArmHiding => "BodyPreventArmHiding",
            EquipmentParameterFlag::BodyPreventNeckHiding => "BodyPreventNeckHiding",
            EquipmentParameterFlag::BodyShowLeg => "BodyShowLeg",
            EquipmentParameterFlag::BodyShowHand => "BodyShowHand",
            EquipmentParameterFlag::BodyShowHead => "BodyShowHead",
            EquipmentParameterFlag::BodyShowNecklace => "BodyShowNecklace",
            EquipmentParameterFlag::BodyShowBracelet => "BodyShowBracelet",
            EquipmentParameterFlag::BodyHideTail => "BodyHideTail",
            EquipmentParameterFlag::EnableLegFlags => "EnableLegFlags",
            EquipmentParameterFlag::LegShowFoot => "LegShowFoot",
            EquipmentParameterFlag::EnableHandFlags => "EnableHandFlags",
            EquipmentParameterFlag::HandHideElbow => "HandHideElbow",
            EquipmentParameterFlag::HandHideForearm => "HandHideForearm",
            EquipmentParameterFlag::HandShowBracelet => "HandShowBracelet",
            EquipmentParameterFlag::HandShowRingL => "HandShowRingL",
            EquipmentParameterFlag::HandShowRingR => "HandShowRingR",
            EquipmentParameterFlag::EnableFootFlags => "EnableFootFlags",
            EquipmentParameterFlag::FootHideKnee => "FootHideKnee",
            EquipmentParameterFlag::FootHideCalf => "FootHideCalf",
            EquipmentParameterFlag::FootUsuallyOn => "FootUsuallyOn",
            EquipmentParameterFlag::EnableHeadFlags => "EnableHeadFlags",
            EquipmentParameterFlag::HeadHideHairTop => "HeadHideHairTop",
            EquipmentParameterFlag::HeadHideHair => "HeadHideHair",
            EquipmentParameterFlag::HeadShowHair => "HeadShowHair",
            EquipmentParameterFlag::HeadHideNeck => "HeadHideNeck",
            EquipmentParameterFlag::HeadShowNecklace => "HeadShowNecklace",
            EquipmentParameterFlag::HeadShowEarrings => "HeadShowEarrings",
            EquipmentParameterFlag::HeadShowEarringsHuman => "HeadShowEarringsHuman",
            EquipmentParameterFlag::HeadShowEarringsAura => "HeadShowEarringsAura",
            EquipmentParameterFlag::HeadShowEarHuman => "HeadShowEarHuman",
            EquipmentParameterFlag::HeadShowEarMiqo => "HeadShowEarMiqo",
            EquipmentParameterFlag::HeadShowEarAura => "HeadShowEarAura",
            EquipmentParameterFlag::HeadShowEarViera => "HeadShowEarViera",
            EquipmentParameterFlag::HeadUnknownHelmet1 => "HeadUnknownHelmet1",
            EquipmentParameterFlag::HeadUnknownHelmet2 => "HeadUnknownHelmet2",
            EquipmentParameterFlag::EnableShbFlags => "EnableShbFlags",
            EquipmentParameterFlag::ShbShowHead => "ShbShowHead",
        }
    }

    /// The flag's absolute bit offset into the 64-bit record.
    pub const fn bit_offset(&self) -> usize {
        *self as usize
    }

    /// Index of the record byte that holds this flag.
    pub const fn byte_index(&self) -> usize {
        self.bit_offset() / 8
    }
}

impl fmt::Display for EquipmentParameterFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_complete_and_ordered() {
        let all = EquipmentParameterFlag::all();
        assert_eq!(all.len(), FLAG_COUNT);

        // Offsets are unique and strictly increasing in table order.
        for pair in all.windows(2) {
            assert!(pair[0].bit_offset() < pair[1].bit_offset());
        }

        // Every offset fits the 64-bit record.
        assert!(all.iter().all(|f| f.bit_offset() < 64));
    }

    #[test]
    fn test_known_offsets() {
        assert_eq!(EquipmentParameterFlag::EnableBodyFlags.bit_offset(), 0);
        assert_eq!(EquipmentParameterFlag::BodyHideTail.bit_offset(), 14);
        assert_eq!(EquipmentParameterFlag::LegShowFoot.bit_offset(), 21);
        assert_eq!(EquipmentParameterFlag::HandShowRingR.bit_offset(), 30);
        assert_eq!(EquipmentParameterFlag::FootUsuallyOn.bit_offset(), 35);
        assert_eq!(EquipmentParameterFlag::HeadShowEarrings.bit_offset(), 47);
        assert_eq!(
            EquipmentParameterFlag::HeadShowEarringsHuman.bit_offset(),
            48
        );
        assert_eq!(EquipmentParameterFlag::ShbShowHead.bit_offset(), 57);
    }

    #[test]
    fn test_byte_index() {
        assert_eq!(EquipmentParameterFlag::EnableBodyFlags.byte_index(), 0);
        assert_eq!(EquipmentParameterFlag::BodyShowLeg.byte_index(), 1);
        assert_eq!(EquipmentParameterFlag::EnableLegFlags.byte_index(), 2);
        assert_eq!(EquipmentParameterFlag::HandHideElbow.byte_index(), 3);
        assert_eq!(EquipmentParameterFlag::FootHideCalf.byte_index(), 4);
        assert_eq!(EquipmentParameterFlag::HeadHideNeck.byte_index(), 5);
        assert_eq!(EquipmentParameterFlag::HeadShowEarViera.byte_index(), 6);
        assert_eq!(EquipmentParameterFlag::EnableShbFlags.byte_index(), 7);
    }

    #[test]
    fn test_display() {
        assert_eq!(
            EquipmentParameterFlag::BodyHideWaist.to_string(),
            "BodyHideWaist"
        );
    }
}
