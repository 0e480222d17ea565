pub mod ease;
pub mod effects;
pub mod host;
pub mod slider;

// Re-export the public vocabulary at the crate root
pub use ease::{lerp, unlerp, Easing};
pub use effects::eliminate::{EliminateEffect, ELIMINATE_DURATION};
pub use effects::fade::{FadeOut, FadeStatus};
pub use host::{EliminateHost, ObjectId, SliderHost};
pub use slider::config::{ConfigError, EndPointsSpec, PointSpec, SliderConfig};
pub use slider::endpoints::{Axis, EndPoints};
pub use slider::{DragOutcome, Slider};
