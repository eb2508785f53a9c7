//! Structural properties of assembled skeletons over a range of inputs.

use skeleton_engine::rigid_body::{Placement, Vec2};
use skeleton_engine::{
    as_model_body, AssemblyError, BodyRegistry, BoneModel, CoreModel, ModelId, PhysicsWorld,
    SkeletonAssembler, SlotState,
};

#[test]
fn chain_segment_and_hinge_counts() {
    let assembler = SkeletonAssembler::default();
    for (segment, spacing) in [(10.0f32, 0.0f32), (10.0, 5.0), (4.0, 1.0), (7.0, -2.0)] {
        let step = segment + spacing;
        for total in [step, step * 2.5, step * 7.0, 100.0] {
            let mut world = BodyRegistry::new();
            let ids = assembler
                .build_chain(Vec2::zero(), segment, 2.0, 1.0, spacing, total, ModelId::new(), &mut world)
                .unwrap();

            let expected = (total / step).ceil() as usize;
            assert_eq!(ids.len(), expected, "segment {segment} spacing {spacing} total {total}");
            assert_eq!(world.joint_count(), expected - 1);
        }
    }
}

#[test]
fn node_slots_cover_exactly_the_free_slots() {
    let assembler = SkeletonAssembler::default();
    for total in 0..6usize {
        for taken in 0..=total {
            let mut core = CoreModel::new(10.0, 1.0, Placement::default());
            for i in 0..total {
                let dir = Vec2::new(10.0, 0.0).rotate(i as f32);
                core = core.with_slot(Placement::new(0.0, dir));
            }
            for slot in core.connection_slots.iter_mut().take(taken) {
                slot.state = SlotState::Occupied;
            }

            let model_id = core.id;
            let body = assembler.create_core_body(core, model_id).unwrap();
            let core_id = body.id;
            let mut world = BodyRegistry::new();
            world.add_body(body);

            let slots = assembler.build_node_slots(core_id, model_id, &mut world).unwrap();
            assert_eq!(slots.len(), total - taken);
            for id in &slots {
                let slot = world.body(*id).unwrap();
                assert_eq!(slot.parent, Some(core_id));
                assert_eq!(slot.model_id, Some(model_id));
            }
        }
    }
}

#[test]
fn exhausted_core_keeps_occupancy_unchanged() {
    let assembler = SkeletonAssembler::default();
    let mut core = CoreModel::new(10.0, 1.0, Placement::default())
        .with_slot(Placement::at(10.0, 0.0))
        .with_slot(Placement::at(-10.0, 0.0));
    for slot in core.connection_slots.iter_mut() {
        slot.state = SlotState::Occupied;
    }
    let model_id = core.id;
    let body = assembler.create_core_body(core, model_id).unwrap();
    let core_id = body.id;
    let mut world = BodyRegistry::new();
    world.add_body(body);
    assert!(assembler.build_node_slots(core_id, model_id, &mut world).unwrap().is_empty());

    let err = assembler
        .add_core_bone_body(BoneModel::new(10.0, 1.0), core_id, &mut world)
        .unwrap_err();

    assert_eq!(err, AssemblyError::NoAvailableSlot { core: core_id });
    let states: Vec<SlotState> = world
        .body(core_id)
        .unwrap()
        .core_model()
        .unwrap()
        .connection_slots
        .iter()
        .map(|s| s.state)
        .collect();
    assert_eq!(states, vec![SlotState::Occupied, SlotState::Occupied]);
    assert_eq!(world.body_count(), 1);
    assert_eq!(world.joint_count(), 0);
}

#[test]
fn model_body_adapter_is_idempotent() {
    let assembler = SkeletonAssembler::default();
    let tagged = assembler.create_circle_body(3.0, 6, 1.0, ModelId::new()).unwrap();
    let (id, model) = (tagged.id, tagged.model_id);

    let again = as_model_body(as_model_body(tagged, ModelId::new()), ModelId::new());
    assert_eq!(again.id, id);
    assert_eq!(again.model_id, model);
}

#[test]
fn identical_rectangles_do_not_alias() {
    let assembler = SkeletonAssembler::default();
    let a = assembler.create_rectangle_body(10.0, 10.0, 10.0, Placement::default()).unwrap();
    let b = assembler.create_rectangle_body(10.0, 10.0, 10.0, Placement::default()).unwrap();
    assert_ne!(a.id, b.id);
    assert!(a.same_geometry(&b));

    let mut world = BodyRegistry::new();
    world.add_body(a);
    world.add_body(b);
    assert_eq!(world.body_count(), 2);
}
