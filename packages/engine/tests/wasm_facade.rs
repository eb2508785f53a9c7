#![cfg(target_arch = "wasm32")]

use skeleton_engine::World;
use wasm_bindgen_test::*;

const STARFISH: &str = r#"{
    "core": {
        "size": 20.0,
        "mass": 10.0,
        "connection_slots": [
            { "relative_position": { "linear": { "x": 20.0, "y": 0.0 } } },
            { "relative_position": { "linear": { "x": -20.0, "y": 0.0 } } }
        ]
    },
    "bones": [ { "length": 40.0, "thickness": 6.0 } ]
}"#;

#[wasm_bindgen_test]
fn facade_spawns_grows_and_sweeps() {
    let mut world = World::new();
    let core = world.spawn_creature(STARFISH.to_string()).unwrap();
    assert_eq!(world.creature_count(), 1);
    assert_eq!(world.body_count(), 4);

    world.grow_bone(&core, 30.0, 4.0, 2.0).unwrap();
    assert!(world.grow_bone(&core, 30.0, 4.0, 2.0).is_err());

    assert_eq!(world.sweep(), 2);
    assert!(world.graph_json().unwrap().contains("bone"));
}

#[wasm_bindgen_test]
fn facade_rejects_bad_input() {
    let mut world = World::new();
    assert!(world.spawn_creature("{}".to_string()).is_err());
    assert!(world.grow_bone("nope", 1.0, 1.0, 1.0).is_err());
    assert!(World::with_settings("not json".to_string()).is_err());
}
