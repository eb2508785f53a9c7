use serde::Serialize;

use super::vec2::Vec2;

/// Collision outline of a body in local coordinates (centered at 0,0).
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Shape {
    Polygon { vertices: Vec<Vec2> },
    Circle { radius: f32, vertices: Vec<Vec2> },
}

impl Shape {
    pub fn vertices(&self) -> &[Vec2] {
        match self {
            Shape::Polygon { vertices } | Shape::Circle { vertices, .. } => vertices,
        }
    }

    /// Half extents of the axis aligned box around the outline.
    pub fn half_extents(&self) -> Vec2 {
        self.vertices().iter().fold(Vec2::zero(), |acc, v| {
            Vec2::new(acc.x.max(v.x.abs()), acc.y.max(v.y.abs()))
        })
    }
}

/// Rectangle outline, counter-clockwise, starting at the bottom-left corner.
pub fn rectangle(width: f32, height: f32) -> Vec<Vec2> {
    let hw = width * 0.5;
    let hh = height * 0.5;
    vec![
        Vec2::new(-hw, -hh),
        Vec2::new(hw, -hh),
        Vec2::new(hw, hh),
        Vec2::new(-hw, hh),
    ]
}

/// Insert vertices so that no edge of the closed outline is longer than
/// `max_edge`. Original vertices are kept in order.
pub fn subdivide(vertices: &[Vec2], max_edge: f32) -> Vec<Vec2> {
    if vertices.len() < 2 || max_edge.is_nan() || max_edge <= 0.0 {
        return vertices.to_vec();
    }

    let mut out = Vec::with_capacity(vertices.len());
    for (i, &a) in vertices.iter().enumerate() {
        let b = vertices[(i + 1) % vertices.len()];
        out.push(a);
        let parts = (a.distance(b) / max_edge).ceil();
        if !parts.is_finite() {
            continue;
        }
        let parts = parts as usize;
        for k in 1..parts {
            out.push(a.lerp(b, k as f32 / parts as f32));
        }
    }
    out
}

/// Regular polygon approximating a circle.
pub fn circle(radius: f32, vertex_count: u16) -> Vec<Vec2> {
    let n = vertex_count.max(3) as usize;
    let step = std::f32::consts::TAU / n as f32;
    (0..n)
        .map(|i| Vec2::new(radius, 0.0).rotate(step * i as f32))
        .collect()
}
