use crate::core::{AssemblyError, AssemblyResult, BodyId, ModelId};
use crate::rigid_body::{shape, Body, Placement, Shape};
use crate::rigid_body_system::PhysicsWorld;

use super::SkeletonAssembler;

impl SkeletonAssembler {
    /// Rectangular body, `width` along x and `height` along y.
    ///
    /// The outline is subdivided every `min(height, width) / divisor` so
    /// downstream collision and deformation get enough vertices.
    pub fn create_rectangle_body(
        &self,
        height: f32,
        width: f32,
        mass: f32,
        position: Placement,
    ) -> AssemblyResult<Body> {
        AssemblyError::check_positive("height", height)?;
        AssemblyError::check_positive("width", width)?;
        AssemblyError::check_positive("mass", mass)?;

        let resolution = height.min(width) / self.settings.subdivision_divisor;
        let vertices = shape::subdivide(&shape::rectangle(width, height), resolution);

        Ok(Body::new(
            position,
            Shape::Polygon { vertices },
            mass,
            self.settings.default_coefficients,
        ))
    }

    /// Circular body at the origin, tagged with `model_id`.
    pub fn create_circle_body(
        &self,
        radius: f32,
        vertex_count: u16,
        mass: f32,
        model_id: ModelId,
    ) -> AssemblyResult<Body> {
        AssemblyError::check_positive("radius", radius)?;
        AssemblyError::check_positive("mass", mass)?;
        if vertex_count < 3 {
            return Err(AssemblyError::InvalidGeometry {
                what: "vertex_count",
                value: vertex_count as f32,
            });
        }

        let shape = Shape::Circle {
            radius,
            vertices: shape::circle(radius, vertex_count),
        };
        Ok(Body::new(Placement::default(), shape, mass, self.settings.default_coefficients)
            .with_model(model_id))
    }

    /// Create a circle, move it to `position` and register it.
    pub fn add_circle_body(
        &self,
        radius: f32,
        vertex_count: u16,
        mass: f32,
        position: Placement,
        model_id: ModelId,
        world: &mut dyn PhysicsWorld,
    ) -> AssemblyResult<BodyId> {
        let mut body = self.create_circle_body(radius, vertex_count, mass, model_id)?;
        body.position = position;
        let id = body.id;
        world.add_body(body);
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rigid_body::{Coefficients, Vec2};
    use crate::rigid_body_system::BodyRegistry;

    #[test]
    fn equal_rectangles_have_distinct_identities() {
        let assembler = SkeletonAssembler::default();
        let a = assembler.create_rectangle_body(10.0, 10.0, 10.0, Placement::default()).unwrap();
        let b = assembler.create_rectangle_body(10.0, 10.0, 10.0, Placement::default()).unwrap();

        assert_ne!(a.id, b.id);
        assert!(a.same_geometry(&b));
        assert_eq!(a.shape.vertices().len(), 20);
        assert_eq!(a.coefficients, Coefficients::new(0.5, 1.0));
        assert!(a.model_id.is_none());
    }

    #[test]
    fn rectangle_extents_follow_width_and_height() {
        let assembler = SkeletonAssembler::default();
        let body = assembler.create_rectangle_body(4.0, 30.0, 1.0, Placement::at(3.0, 3.0)).unwrap();
        assert_eq!(body.shape.half_extents(), Vec2::new(15.0, 2.0));
        assert_eq!(body.position.linear, Vec2::new(3.0, 3.0));
    }

    #[test]
    fn non_positive_dimensions_are_rejected() {
        let assembler = SkeletonAssembler::default();
        assert!(matches!(
            assembler.create_rectangle_body(0.0, 10.0, 1.0, Placement::default()),
            Err(AssemblyError::InvalidGeometry { what: "height", .. })
        ));
        assert!(assembler.create_circle_body(-1.0, 8, 1.0, ModelId::new()).is_err());
        assert!(assembler.create_circle_body(1.0, 2, 1.0, ModelId::new()).is_err());
    }

    #[test]
    fn infinite_dimensions_are_rejected() {
        let assembler = SkeletonAssembler::default();
        assert!(matches!(
            assembler.create_rectangle_body(f32::INFINITY, 1.0, 1.0, Placement::default()),
            Err(AssemblyError::InvalidGeometry { what: "height", .. })
        ));
        assert!(matches!(
            assembler.create_rectangle_body(1.0, 1.0, f32::INFINITY, Placement::default()),
            Err(AssemblyError::InvalidGeometry { what: "mass", .. })
        ));
        assert!(assembler.create_circle_body(f32::INFINITY, 8, 1.0, ModelId::new()).is_err());
    }

    #[test]
    fn add_circle_registers_at_position() {
        let assembler = SkeletonAssembler::default();
        let mut world = BodyRegistry::new();
        let model = ModelId::new();
        let id = assembler
            .add_circle_body(5.0, 12, 3.0, Placement::at(7.0, -2.0), model, &mut world)
            .unwrap();

        let body = world.body(id).unwrap();
        assert_eq!(body.position.linear, Vec2::new(7.0, -2.0));
        assert_eq!(body.model_id, Some(model));
        assert_eq!(body.shape.vertices().len(), 12);
    }
}
