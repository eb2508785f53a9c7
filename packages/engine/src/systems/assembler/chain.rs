use crate::core::{AssemblyError, AssemblyResult, BodyId, ModelId};
use crate::rigid_body::{BodyKind, Joint, Placement, Vec2};
use crate::rigid_body_system::PhysicsWorld;

use super::{as_model_body, SkeletonAssembler};

impl SkeletonAssembler {
    /// Build a chain of rectangular segments along +x and register it.
    ///
    /// Segments are placed every `segment_length + spacing` starting at
    /// `start` until `total_length` is covered; a chain shorter than one
    /// step is a single unlinked segment. Neighbours are joined by a hinge at
    /// the midpoint of their centers. Zero or negative `spacing` overlaps the
    /// segments and is accepted as long as the step stays positive.
    #[allow(clippy::too_many_arguments)]
    pub fn build_chain(
        &self,
        start: Vec2,
        segment_length: f32,
        segment_width: f32,
        segment_mass: f32,
        spacing: f32,
        total_length: f32,
        model_id: ModelId,
        world: &mut dyn PhysicsWorld,
    ) -> AssemblyResult<Vec<BodyId>> {
        let step = AssemblyError::check_positive("segment_length + spacing", segment_length + spacing)?;
        if !total_length.is_finite() {
            return Err(AssemblyError::InvalidGeometry { what: "total_length", value: total_length });
        }

        let mut bodies = Vec::new();
        let mut last: Option<(BodyId, Vec2)> = None;
        let mut position = start;
        let mut x = 0.0;

        while x < total_length {
            let segment = self.create_rectangle_body(
                segment_width,
                segment_length,
                segment_mass,
                Placement::new(0.0, position),
            )?;
            let current = as_model_body(segment, model_id).with_kind(BodyKind::ChainMember {
                beg_joint: None,
                end_joint: None,
            });
            let current_id = current.id;
            world.add_body(current);

            if let Some((last_id, last_pos)) = last {
                let anchor = (position + last_pos) * 0.5;
                let hinge = Joint::hinge(
                    last_id,
                    current_id,
                    anchor,
                    self.settings.hinge_distance_tolerance,
                    self.settings.hinge_softness,
                );
                let hinge_id = hinge.id;
                world.add_joint(hinge)?;

                if let Some(BodyKind::ChainMember { end_joint, .. }) =
                    world.body_mut(last_id).map(|b| &mut b.kind)
                {
                    *end_joint = Some(hinge_id);
                }
                if let Some(BodyKind::ChainMember { beg_joint, .. }) =
                    world.body_mut(current_id).map(|b| &mut b.kind)
                {
                    *beg_joint = Some(hinge_id);
                }
            }

            bodies.push(current_id);
            last = Some((current_id, position));

            x += step;
            position.x += step;
        }

        log::debug!("built chain of {} segments for model {}", bodies.len(), model_id);
        Ok(bodies)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rigid_body::JointKind;
    use crate::rigid_body_system::BodyRegistry;

    fn chain(total_length: f32, spacing: f32) -> (BodyRegistry, Vec<BodyId>) {
        let assembler = SkeletonAssembler::default();
        let mut world = BodyRegistry::new();
        let ids = assembler
            .build_chain(Vec2::new(5.0, 20.0), 10.0, 4.0, 1.0, spacing, total_length, ModelId::new(), &mut world)
            .unwrap();
        (world, ids)
    }

    #[test]
    fn segment_count_rounds_up_and_hinges_link_neighbours() {
        for (total, expected) in [(100.0, 9), (96.0, 8), (24.0, 2), (12.0, 1)] {
            let (world, ids) = chain(total, 2.0);
            assert_eq!(ids.len(), expected, "total {total}");
            assert_eq!(world.joint_count(), expected - 1);
        }
    }

    #[test]
    fn hinges_sit_at_segment_midpoints() {
        let (world, ids) = chain(60.0, 2.0);
        for pair in ids.windows(2) {
            let a = world.body(pair[0]).unwrap();
            let b = world.body(pair[1]).unwrap();
            let expected = (a.position.linear + b.position.linear) * 0.5;

            let BodyKind::ChainMember { end_joint: Some(joint_id), .. } = &a.kind else {
                panic!("segment without end joint");
            };
            let BodyKind::ChainMember { beg_joint, .. } = &b.kind else {
                panic!("segment is not a chain member");
            };
            assert_eq!(beg_joint, &Some(*joint_id));

            let joint = world.joint(*joint_id).unwrap();
            assert!(joint.touches(a.id) && joint.touches(b.id));
            match joint.kind {
                JointKind::Hinge { anchor, distance_tolerance, softness } => {
                    assert!((anchor.x - expected.x).abs() < 1e-4);
                    assert!((anchor.y - expected.y).abs() < 1e-4);
                    assert_eq!(distance_tolerance, 50.0);
                    assert_eq!(softness, 0.005);
                }
                other => panic!("unexpected joint {other:?}"),
            }
        }
    }

    #[test]
    fn segments_advance_by_length_plus_spacing() {
        let (world, ids) = chain(36.0, 2.0);
        let xs: Vec<f32> = ids.iter().map(|id| world.body(*id).unwrap().position.linear.x).collect();
        assert_eq!(xs, vec![5.0, 17.0, 29.0]);
    }

    #[test]
    fn short_chain_is_one_unlinked_segment() {
        let (world, ids) = chain(3.0, 2.0);
        assert_eq!(ids.len(), 1);
        assert_eq!(world.joint_count(), 0);
        let (_, none) = chain(0.0, 2.0);
        assert!(none.is_empty());
    }

    #[test]
    fn overlapping_spacing_is_accepted_but_non_advancing_step_is_not() {
        let (_, ids) = chain(30.0, -4.0);
        assert_eq!(ids.len(), 5);

        let assembler = SkeletonAssembler::default();
        let mut world = BodyRegistry::new();
        let err = assembler
            .build_chain(Vec2::zero(), 10.0, 4.0, 1.0, -10.0, 30.0, ModelId::new(), &mut world)
            .unwrap_err();
        assert!(matches!(err, AssemblyError::InvalidGeometry { .. }));
        assert_eq!(world.body_count(), 0);
    }

    #[test]
    fn infinite_total_length_is_rejected() {
        let assembler = SkeletonAssembler::default();
        let mut world = BodyRegistry::new();
        for total in [f32::INFINITY, f32::NAN] {
            let err = assembler
                .build_chain(Vec2::zero(), 10.0, 4.0, 1.0, 2.0, total, ModelId::new(), &mut world)
                .unwrap_err();
            assert!(matches!(err, AssemblyError::InvalidGeometry { what: "total_length", .. }));
        }
        let err = assembler
            .build_chain(Vec2::zero(), 10.0, 4.0, 1.0, f32::INFINITY, 30.0, ModelId::new(), &mut world)
            .unwrap_err();
        assert!(matches!(err, AssemblyError::InvalidGeometry { .. }));
        assert_eq!(world.body_count(), 0);
    }
}
