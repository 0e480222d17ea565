// effects/fade.rs
//
// Single-object fade-then-remove: ramps a host object's alpha from opaque to
// transparent over a fixed duration, then removes it from the scene.

use crate::ease::Easing;
use crate::host::{EliminateHost, ObjectId};

/// Progress report from a fade tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FadeStatus {
    /// Still ramping alpha down.
    Fading,
    /// Reached zero alpha; the object has been removed from the host.
    Removed,
    /// The host no longer knows the object; nothing left to do.
    Lost,
    /// The fade was cancelled before completing.
    Cancelled,
}

/// Fades one host object to transparent, then removes it.
#[derive(Debug)]
pub struct FadeOut {
    object: ObjectId,
    duration: f32,
    elapsed: f32,
    easing: Easing,
    resolved: Option<FadeStatus>,
}

impl FadeOut {
    pub fn new(object: ObjectId, duration: f32) -> Self {
        Self {
            object,
            duration,
            elapsed: 0.0,
            easing: Easing::Linear,
            resolved: None,
        }
    }

    /// Use a non-linear fade curve.
    pub fn set_easing(&mut self, easing: Easing) {
        self.easing = easing;
    }

    pub fn object(&self) -> ObjectId {
        self.object
    }

    /// Whether the fade has resolved (removed, lost, or cancelled).
    pub fn is_done(&self) -> bool {
        self.resolved.is_some()
    }

    /// Advance the fade. Once resolved, further ticks return the terminal
    /// status without touching the host.
    pub fn tick<H: EliminateHost>(&mut self, dt: f32, host: &mut H) -> FadeStatus {
        if let Some(resolved) = self.resolved {
            return resolved;
        }
        if !host.contains(self.object) {
            log::warn!("fade target {} vanished mid-fade", self.object.0);
            self.resolved = Some(FadeStatus::Lost);
            return FadeStatus::Lost;
        }
        self.elapsed += dt;
        let t = if self.duration > 0.0 {
            (self.elapsed / self.duration).clamp(0.0, 1.0)
        } else {
            1.0
        };
        host.set_alpha(self.object, 1.0 - self.easing.apply(t));
        if self.elapsed >= self.duration {
            host.remove(self.object);
            self.resolved = Some(FadeStatus::Removed);
            return FadeStatus::Removed;
        }
        FadeStatus::Fading
    }

    /// Abandon the fade, restoring full alpha if the object still exists.
    pub fn cancel<H: EliminateHost>(&mut self, host: &mut H) {
        if self.resolved.is_some() {
            return;
        }
        if host.contains(self.object) {
            host.set_alpha(self.object, 1.0);
        }
        self.resolved = Some(FadeStatus::Cancelled);
    }
}
