//! End-to-end conversion from files on disk

use prmap_convert::{convert_files, ConvertConfig, ConvertError, LoadManifest};
use serde_json::{json, Value};
use std::fs;
use std::path::Path;

const CATALOG: &str = r#"{
    "SpriteSheets": [
        {
            "Id": "ground",
            "File": "sheets/ground.png",
            "Width": 64,
            "Height": 64,
            "Style": "nature",
            "MixWithOwnStyle": true,
            "StyleSetByDirection": {
                "North, South, West, East": "full",
                "North, South, West": "right",
                "North, South, East": "left",
                "North, South": "middle"
            }
        },
        { "Id": "floors", "File": "sheets/floors.png", "Style": "indoor" },
        { "Id": "people", "File": "sheets/people.png", "Style": "chars" }
    ],
    "SpriteSets": [
        {
            "Id": "grass",
            "SheetId": "ground",
            "RepresentSetId": "paint",
            "TileLocations": [
                { "Id": "paint", "X": 0, "Y": 0 },
                { "Id": "full", "X": 1, "Y": 0 },
                { "Id": "left", "X": 2, "Y": 0 },
                { "Id": "right", "X": 3, "Y": 0 },
                { "Id": "middle", "X": 0, "Y": 1 }
            ]
        }
    ]
}"#;

const MAP: &str = r#"{
    "width": 4,
    "height": 1,
    "tilewidth": 16,
    "tileheight": 16,
    "tilesets": [
        { "firstgid": 1, "imagewidth": 64, "imageheight": 64, "tilecount": 16, "name": "ground" },
        { "firstgid": 17, "imagewidth": 64, "imageheight": 64, "tilecount": 16, "name": "floors" },
        { "firstgid": 33, "imagewidth": 64, "imageheight": 64, "tilecount": 16, "name": "people" }
    ],
    "layers": [
        { "name": "ground", "width": 4, "height": 1, "data": [1, 1, 1, 0] },
        { "name": "collisions", "width": 4, "height": 1, "data": [17, 20, 0, 28] },
        {
            "name": "npcs",
            "objects": [
                {
                    "gid": 2147483682,
                    "x": 32,
                    "y": 0,
                    "properties": [{ "name": "id", "type": "string", "value": "merchant" }]
                }
            ]
        }
    ]
}"#;

fn write_inputs(dir: &Path) {
    fs::write(dir.join("catalog.json"), CATALOG).unwrap();
    fs::create_dir_all(dir.join("maps")).unwrap();
    fs::write(dir.join("maps/town.json"), MAP).unwrap();
}

fn read_json(path: &Path) -> Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn test_convert_from_manifest() {
    let dir = tempfile::tempdir().unwrap();
    write_inputs(dir.path());
    fs::write(dir.path().join("load.txt"), "catalog.json\nmaps/town.json\n").unwrap();

    let manifest = LoadManifest::read(&dir.path().join("load.txt")).unwrap();
    let written = convert_files(
        &manifest.catalog,
        &manifest.map,
        None,
        &ConvertConfig::default(),
    )
    .unwrap();
    assert_eq!(written, dir.path().join("maps/town.prmap"));

    let out = read_json(&written);
    assert_eq!(out["Width"], 4);
    assert_eq!(out["TileHeight"], 16);

    // NPC and collision layers are not emitted as tile layers
    let layers = out["Layers"].as_array().unwrap();
    assert_eq!(layers.len(), 1);
    assert_eq!(layers[0]["Name"], "ground");
    assert_eq!(
        layers[0]["Tiles"],
        json!([
            {"SId": "ground", "SX": 1, "SY": 0},
            {"SId": "ground", "SX": 1, "SY": 0},
            {"SId": "ground", "SX": 3, "SY": 0},
            null
        ])
    );

    assert_eq!(
        out["Collisions"],
        json!(["North, West", "North, West, East", "None", "South, West, East"])
    );
    assert_eq!(
        out["NPCs"],
        json!([{
            "Id": "merchant",
            "SheetTile": {"SheetId": "people", "X": 1, "Y": 0},
            "Flipped": true,
            "X": 2,
            "Y": 0
        }])
    );
}

#[test]
fn test_explicit_output_and_compact_json() {
    let dir = tempfile::tempdir().unwrap();
    write_inputs(dir.path());
    let out_path = dir.path().join("out.json");
    let config = ConvertConfig {
        pretty: false,
        parallel: false,
        ..Default::default()
    };

    let written = convert_files(
        &dir.path().join("catalog.json"),
        &dir.path().join("maps/town.json"),
        Some(&out_path),
        &config,
    )
    .unwrap();
    assert_eq!(written, out_path);

    let text = fs::read_to_string(&out_path).unwrap();
    assert!(!text.contains('\n'));
    assert!(!dir.path().join("maps/town.prmap").exists());
}

#[test]
fn test_missing_manifest() {
    let dir = tempfile::tempdir().unwrap();
    let result = LoadManifest::read(&dir.path().join("load.txt"));
    assert!(matches!(result, Err(ConvertError::ManifestNotFound(_))));
}

#[test]
fn test_failed_conversion_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    write_inputs(dir.path());
    // gid 99 is outside every tileset
    let broken = MAP.replace("[1, 1, 1, 0]", "[1, 99, 1, 0]");
    fs::write(dir.path().join("maps/town.json"), broken).unwrap();

    let result = convert_files(
        &dir.path().join("catalog.json"),
        &dir.path().join("maps/town.json"),
        None,
        &ConvertConfig::default(),
    );
    assert!(matches!(result, Err(ConvertError::Resolve { .. })));
    assert!(!dir.path().join("maps/town.prmap").exists());
}
