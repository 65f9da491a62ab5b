mod merge;
mod offset;
mod separation;
mod transform;

pub use merge::PolygonMerge;
pub use offset::PolygonSwell;
pub use separation::SeparationVector;
pub use transform::{Transformation, TransformationBuilder};
