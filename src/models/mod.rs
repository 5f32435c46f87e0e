pub mod lesson;
pub mod ops;
/// Rectangular regions of interest
pub mod region;

pub use lesson::{Lesson, LessonReport};
pub use ops::{AdaptiveMethod, ImageInfo, Interpolation, RotateFlag, ThresholdKind};
pub use region::Region;
