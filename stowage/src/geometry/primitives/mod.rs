mod aabb;
mod dims3;
mod point3;

#[doc(inline)]
pub use aabb::Aabb;
#[doc(inline)]
pub use dims3::Dims3;
#[doc(inline)]
pub use point3::Point3;
