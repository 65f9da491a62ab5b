mod line;
mod line_segment;
mod polygon;
mod rectangle;

pub use line::Line;
pub use line_segment::LineSegment;
pub use polygon::Polygon;
pub use rectangle::Rectangle;
