//! Math functions for working with 2D vectors, rays, and the equidistant point kernels used
//! by the offset intersection solver.
mod base_math;
mod circle_ray_intersect;
mod equidistant;
mod vector2;

pub use base_math::*;
pub use circle_ray_intersect::first_circle_ray_intersection_parameter;
pub use equidistant::{line_point_equidistant, point_point_equidistant, EquidistantPoints};
pub use vector2::{vec2, Vector2};
