use nymeia_eqp::{
    EquipmentDeformationParameter, EquipmentDeformationParameterSet, EquipmentParameterFlag,
    EquipmentParameterSet, EquipmentSlot, SlotKind,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Test 1: decode a record and list the flags set per slot
    println!("=== Test 1: Decode an equipment parameter record ===");
    let record = [0xC1, 0x1F, 0x21, 0x71, 0x09, 0x09, 0x00, 0x00];
    let mut set = EquipmentParameterSet::from_bytes(&record)?;

    for (slot, param) in set.iter() {
        println!(
            "\nSlot {} ({} bytes at offset {}): {:02X?}",
            slot,
            slot.byte_size(),
            slot.byte_offset(),
            param.to_bytes()
        );
        for flag in param.available_flags() {
            if param.get_flag(*flag) {
                println!("  {}", flag);
            }
        }
    }

    // Test 2: flip a flag and re-encode
    println!("\n=== Test 2: Flip a flag and re-encode ===");
    set.set_flag(
        EquipmentSlot::Met,
        EquipmentParameterFlag::HeadShowNecklace,
        true,
    );
    println!("Re-encoded: {:02X?}", set.to_bytes());
    println!("As u64:     {:#018x}", set.to_u64());

    set.set_flag(
        EquipmentSlot::Met,
        EquipmentParameterFlag::HeadShowNecklace,
        false,
    );
    assert_eq!(set.to_bytes(), record);
    println!("Round trip matches the input record");

    // Test 3: build a deformation entry from scratch
    println!("\n=== Test 3: Equipment deformation entry ===");
    let mut deform = EquipmentDeformationParameterSet::new(SlotKind::Equipment);
    deform.set_param(
        EquipmentSlot::Top,
        EquipmentDeformationParameter::new(true, false),
    )?;
    deform.param_mut(EquipmentSlot::Met)?.bit1 = true;

    for (slot, param) in deform.iter() {
        println!("{}: bit0={} bit1={}", slot, param.bit0, param.bit1);
    }
    println!("Encoded: {:02X?}", deform.to_bytes());

    println!("\n=== Done ===");
    Ok(())
}
