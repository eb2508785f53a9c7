use std::fs;

use skeleton_engine::rigid_body::BodyKind;
use skeleton_engine::{CreatureBlueprint, PhysicsWorld, WorldCore};

#[test]
fn quadruped_blueprint_assembles_and_exports() {
    let json = fs::read_to_string(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/data/quadruped.json"))
        .expect("quadruped.json should exist");

    let blueprint = CreatureBlueprint::from_json(&json).expect("quadruped.json should parse");
    assert_eq!(blueprint.core.connection_slots.len(), 5);
    assert_eq!(blueprint.bones.len(), 3);

    let mut world = WorldCore::new();
    let handle = world.spawn_creature(blueprint).expect("three bones fit four free slots");

    // The pre-occupied slot gets no placeholder.
    assert_eq!(handle.slots.len(), 4);
    assert_eq!(handle.bones.iter().map(|b| b.slot).collect::<Vec<_>>(), vec![0, 1, 2]);

    let core = world.registry().body(handle.core).unwrap();
    let model = core.core_model().unwrap();
    assert_eq!(model.occupied_count(), 4);

    let heavy = world.registry().body(handle.bones[1].bone).unwrap();
    assert_eq!(heavy.mass, 3.0);
    assert!(matches!(heavy.kind, BodyKind::Bone(_)));

    world.sweep();
    let graph = world.graph();
    // core, one free slot, three bones
    assert_eq!(graph.bodies.len(), 5);
    assert_eq!(graph.joints.len(), 6);

    let exported: serde_json::Value = serde_json::from_str(&graph.to_json().unwrap()).unwrap();
    assert_eq!(exported["bodies"].as_array().map(|a| a.len()), Some(5));
    assert_eq!(exported["joints"][1]["type"], "angle");
}
