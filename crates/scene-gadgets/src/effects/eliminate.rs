// effects/eliminate.rs
//
// Batch elimination: fades a set of host objects out, then signals
// completion exactly once.
//
// Usage:
//   let mut fx = EliminateEffect::new(matched_ids).with_on_complete(EVENT_CLEARED);
//   // each update:
//   if fx.tick(dt, &mut host) {
//       // emit fx.completion_event(), refill the board, etc.
//   }

use super::fade::FadeOut;
use crate::ease::Easing;
use crate::host::{EliminateHost, ObjectId};

/// Fixed fade duration, in seconds of host time.
pub const ELIMINATE_DURATION: f32 = 0.5;

/// One-shot batch fade-out with a single completion signal.
///
/// Completion is a join over the per-object fades: the effect reports done
/// only once every fade has resolved and the shared clock has run out, so the
/// signal cannot drift from the animation. An object the host destroys
/// mid-fade is counted as resolved rather than wedging the batch.
#[derive(Debug)]
pub struct EliminateEffect {
    fades: Vec<FadeOut>,
    elapsed: f32,
    on_complete: Option<u32>,
    finished: bool,
}

impl EliminateEffect {
    /// Start fading `objects`. The batch may be empty; completion still
    /// arrives after the fixed duration.
    pub fn new(objects: impl IntoIterator<Item = ObjectId>) -> Self {
        Self {
            fades: objects
                .into_iter()
                .map(|id| FadeOut::new(id, ELIMINATE_DURATION))
                .collect(),
            elapsed: 0.0,
            on_complete: None,
            finished: false,
        }
    }

    /// Use a non-linear fade curve for the whole batch.
    pub fn with_easing(mut self, easing: Easing) -> Self {
        for fade in &mut self.fades {
            fade.set_easing(easing);
        }
        self
    }

    /// Numeric event id for the host to emit when the batch completes.
    pub fn with_on_complete(mut self, event_id: u32) -> Self {
        self.on_complete = Some(event_id);
        self
    }

    pub fn completion_event(&self) -> Option<u32> {
        self.on_complete
    }

    /// Objects still fading.
    pub fn remaining(&self) -> usize {
        self.fades.iter().filter(|f| !f.is_done()).count()
    }

    /// Whether the batch has fully resolved (completed or cancelled).
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Normalized progress of the shared clock.
    pub fn progress(&self) -> f32 {
        (self.elapsed / ELIMINATE_DURATION).clamp(0.0, 1.0)
    }

    /// Advance every fade. Returns `true` exactly once, on the tick the whole
    /// batch has completed; ticking afterwards is inert.
    pub fn tick<H: EliminateHost>(&mut self, dt: f32, host: &mut H) -> bool {
        if self.finished {
            return false;
        }
        self.elapsed += dt;
        for fade in &mut self.fades {
            if !fade.is_done() {
                fade.tick(dt, host);
            }
        }
        if self.elapsed >= ELIMINATE_DURATION && self.fades.iter().all(FadeOut::is_done) {
            self.finished = true;
            return true;
        }
        false
    }

    /// Stop the effect before completion: surviving objects get full alpha
    /// back, nothing further is removed, and no completion is signalled.
    pub fn cancel<H: EliminateHost>(&mut self, host: &mut H) {
        if self.finished {
            return;
        }
        for fade in &mut self.fades {
            fade.cancel(host);
        }
        self.finished = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct FakeScene {
        alive: Vec<u32>,
        alphas: Vec<(u32, f32)>,
        removed: Vec<u32>,
    }

    impl EliminateHost for FakeScene {
        fn contains(&self, id: ObjectId) -> bool {
            self.alive.contains(&id.0)
        }
        fn set_alpha(&mut self, id: ObjectId, alpha: f32) {
            self.alphas.push((id.0, alpha));
        }
        fn remove(&mut self, id: ObjectId) {
            self.alive.retain(|&x| x != id.0);
            self.removed.push(id.0);
        }
    }

    fn scene_with(ids: &[u32]) -> FakeScene {
        FakeScene {
            alive: ids.to_vec(),
            ..FakeScene::default()
        }
    }

    fn ids(raw: &[u32]) -> Vec<ObjectId> {
        raw.iter().copied().map(ObjectId).collect()
    }

    #[test]
    fn empty_batch_completes_after_exact_duration() {
        let mut scene = scene_with(&[]);
        let mut fx = EliminateEffect::new(ids(&[]));

        assert!(!fx.tick(0.25, &mut scene));
        assert!(fx.tick(0.25, &mut scene));
        assert!(fx.is_finished());
        assert!(!fx.tick(0.25, &mut scene));
    }

    #[test]
    fn batch_removes_each_object_once_and_completes_once() {
        let mut scene = scene_with(&[1, 2, 3]);
        let mut fx = EliminateEffect::new(ids(&[1, 2, 3]));

        let mut completions = 0;
        for _ in 0..8 {
            if fx.tick(0.1, &mut scene) {
                completions += 1;
            }
        }

        assert_eq!(completions, 1);
        assert_eq!(scene.removed, vec![1, 2, 3]);
        assert!(scene.alive.is_empty());
        assert_eq!(fx.remaining(), 0);
    }

    #[test]
    fn alpha_ramps_toward_zero() {
        let mut scene = scene_with(&[5]);
        let mut fx = EliminateEffect::new(ids(&[5]));

        fx.tick(0.25, &mut scene);
        let (_, alpha) = *scene.alphas.last().unwrap();
        assert!((alpha - 0.5).abs() < 1e-6);

        fx.tick(0.25, &mut scene);
        let (_, alpha) = *scene.alphas.last().unwrap();
        assert!(alpha.abs() < 1e-6);
        assert_eq!(scene.removed, vec![5]);
    }

    #[test]
    fn vanished_object_does_not_wedge_the_batch() {
        let mut scene = scene_with(&[1, 2]);
        let mut fx = EliminateEffect::new(ids(&[1, 2]));

        fx.tick(0.1, &mut scene);
        // The host tears object 2 down behind the effect's back.
        scene.alive.retain(|&x| x != 2);

        let mut completed = false;
        for _ in 0..6 {
            completed |= fx.tick(0.1, &mut scene);
        }

        assert!(completed);
        assert_eq!(scene.removed, vec![1]);
    }

    #[test]
    fn completion_event_id_is_carried() {
        let mut scene = scene_with(&[]);
        let mut fx = EliminateEffect::new(ids(&[])).with_on_complete(7);

        assert_eq!(fx.completion_event(), Some(7));
        assert!(!fx.tick(0.25, &mut scene));
        assert!(fx.tick(0.25, &mut scene));
    }

    #[test]
    fn cancel_restores_alpha_and_suppresses_completion() {
        let mut scene = scene_with(&[4]);
        let mut fx = EliminateEffect::new(ids(&[4]));

        fx.tick(0.25, &mut scene);
        fx.cancel(&mut scene);

        let (_, alpha) = *scene.alphas.last().unwrap();
        assert_eq!(alpha, 1.0);
        assert!(scene.alive.contains(&4));
        assert!(fx.is_finished());
        assert!(!fx.tick(1.0, &mut scene));
        assert!(scene.removed.is_empty());
    }

    #[test]
    fn eased_batch_follows_curve() {
        let mut scene = scene_with(&[6]);
        let mut fx = EliminateEffect::new(ids(&[6])).with_easing(Easing::QuadOut);

        fx.tick(0.25, &mut scene);
        let (_, alpha) = *scene.alphas.last().unwrap();
        // QuadOut(0.5) = 0.75, so alpha = 0.25.
        assert!((alpha - 0.25).abs() < 1e-6);
    }

    #[test]
    fn progress_tracks_the_shared_clock() {
        let mut scene = scene_with(&[]);
        let mut fx = EliminateEffect::new(ids(&[]));

        assert_eq!(fx.progress(), 0.0);
        fx.tick(0.25, &mut scene);
        assert!((fx.progress() - 0.5).abs() < 1e-6);
        fx.tick(1.0, &mut scene);
        assert_eq!(fx.progress(), 1.0);
    }
}
