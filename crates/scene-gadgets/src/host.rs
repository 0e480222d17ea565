//! Host capability traits.
//!
//! The host engine owns the render loop, input dispatch, and object lifetime;
//! this crate only coordinates. Each component names the capabilities it needs
//! as a trait the host implements, addressing scene objects by the host's own
//! opaque id.
//!
//! Beyond the trait methods, the host is expected to:
//! - route drag coordinates for a draggable object to `Slider::on_drag` during
//!   the input phase of its update loop,
//! - route object teardown to `Slider::on_object_destroyed`,
//! - tick active `EliminateEffect`s each update with the frame `dt`.

use glam::Vec2;

/// Identifier a host engine assigns to one of its scene objects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObjectId(pub u32);

/// Capabilities a host must expose for a `Slider` to drive one of its objects.
pub trait SliderHost {
    /// Move the object. Writes to ids the host no longer knows are dropped.
    fn set_position(&mut self, id: ObjectId, pos: Vec2);

    /// One-time opt-in to the host's input dispatch for this object.
    fn register_interactive(&mut self, id: ObjectId);

    /// Toggle whether the host emits drag events for this object.
    fn set_draggable(&mut self, id: ObjectId, enabled: bool);
}

/// Capabilities a host must expose for an `EliminateEffect` batch.
pub trait EliminateHost {
    /// Whether the host still knows this object.
    fn contains(&self, id: ObjectId) -> bool;

    /// Set the object's display alpha (1 opaque, 0 transparent).
    fn set_alpha(&mut self, id: ObjectId, alpha: f32);

    /// Remove the object from the scene.
    fn remove(&mut self, id: ObjectId);
}
