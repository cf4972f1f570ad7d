//! Loading labware definitions from catalog JSON.
//!
//! Run with `--features serde`.
#![cfg(feature = "serde")]

use aliquot_core::NullDiagnostics;
use aliquot_labware::{wells_under_multi_channel_tip, LabwareDefinition, Quirk, WellShape};

const RESERVOIR: &str = r#"{
  "namespace": "fixture",
  "metadata": { "displayName": "12 trough reservoir" },
  "parameters": {
    "loadName": "reservoir_12",
    "quirks": ["centerMultichannelOnWells", "touchTipDisabled"]
  },
  "ordering": [["A1"], ["A2"]],
  "wells": {
    "A1": {
      "shape": "rectangular", "xDimension": 4.1, "yDimension": 35.6,
      "x": 13.94, "y": 42.74, "z": 2, "depth": 40, "totalLiquidVolume": 22000
    },
    "A2": {
      "shape": "rectangular", "xDimension": 4.1, "yDimension": 35.6,
      "x": 22.97, "y": 42.74, "z": 2, "depth": 40, "totalLiquidVolume": 22000
    }
  }
}"#;

#[test]
fn parses_reservoir_with_quirks() {
    let def: LabwareDefinition = serde_json::from_str(RESERVOIR).unwrap();
    assert_eq!(def.display_name(), "fixture/reservoir_12");
    assert_eq!(def.well_count(), 2);
    assert!(def.has_quirk(&Quirk::CenterMultichannelOnWells));
    assert!(def.has_quirk(&Quirk::Other("touchTipDisabled".into())));

    let a2 = def.well("A2").unwrap();
    assert_eq!(
        a2.shape,
        WellShape::Rectangular {
            x_dimension: 4.1,
            y_dimension: 35.6
        }
    );
    assert_eq!(a2.max_volume(), 22000.0);

    let tips = wells_under_multi_channel_tip(&def, "A2", &NullDiagnostics).unwrap();
    assert!(tips.iter().all(|w| w == "A2"));
}

#[test]
fn well_order_follows_document_order() {
    let json = r#"{
      "parameters": { "loadName": "odd_order" },
      "wells": {
        "B1": { "shape": "circular", "diameter": 5, "x": 10, "y": 10, "totalLiquidVolume": 150.9 },
        "A1": { "shape": "circular", "diameter": 5, "x": 10, "y": 19 }
      }
    }"#;
    let def: LabwareDefinition = serde_json::from_str(json).unwrap();
    let names: Vec<&str> = def.all_well_names().map(|w| w.as_str()).collect();
    assert_eq!(names, ["B1", "A1"]);
    assert_eq!(def.namespace(), "");
    assert_eq!(def.well("B1").unwrap().max_volume(), 150.0);
    assert_eq!(def.well("A1").unwrap().max_volume(), 0.0);
}

#[test]
fn rejects_invalid_definitions() {
    let no_wells = r#"{ "parameters": { "loadName": "empty" }, "wells": {} }"#;
    let err = serde_json::from_str::<LabwareDefinition>(no_wells).unwrap_err();
    assert!(err.to_string().contains("at least one well"), "{err}");

    let negative = r#"{
      "parameters": { "loadName": "bad" },
      "wells": { "A1": { "shape": "circular", "diameter": -1, "x": 0, "y": 0 } }
    }"#;
    assert!(serde_json::from_str::<LabwareDefinition>(negative).is_err());

    let unknown_shape = r#"{
      "parameters": { "loadName": "bad" },
      "wells": { "A1": { "shape": "hexagonal", "x": 0, "y": 0 } }
    }"#;
    assert!(serde_json::from_str::<LabwareDefinition>(unknown_shape).is_err());
}
