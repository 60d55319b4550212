//! Serialization tests
//!
//! Enumerations serialize as their stored integer ids so records written by
//! the seeder and read by the lookup site agree on the encoding.

use shard_core::*;

#[test]
fn vocation_serializes_as_stored_id() {
    let json = serde_json::to_string(&VocationClass::RoyalPaladin).unwrap();
    assert_eq!(json, "7");
    let back: VocationClass = serde_json::from_str("7").unwrap();
    assert_eq!(back, VocationClass::RoyalPaladin);
}

#[test]
fn out_of_range_vocation_fails_to_deserialize() {
    assert!(serde_json::from_str::<VocationClass>("9").is_err());
    assert!(serde_json::from_str::<Sex>("2").is_err());
    assert!(serde_json::from_str::<GroupId>("2").is_err());
}

#[test]
fn level_zero_fails_to_deserialize() {
    assert!(serde_json::from_str::<Level>("0").is_err());
    assert_eq!(serde_json::from_str::<Level>("42").unwrap().get(), 42);
}

#[test]
fn stat_block_fields() {
    let block = StatBlock::derive(Level::new(8).unwrap(), VocationClass::Sorcerer);
    let value = serde_json::to_value(block).unwrap();
    assert_eq!(value["health"], 180);
    assert_eq!(value["health_max"], 180);
    assert_eq!(value["mana"], 85);
    assert_eq!(value["carry_capacity"], 470);
    assert_eq!(value["experience"], 4200);
}
