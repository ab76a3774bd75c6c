//! External animation clip clocks.
//!
//! A slot whose model shipped with animation clips is registered here at
//! load time. Its clock advances every tick, unconditionally: playback is
//! never paused by drag or inertia, and the slot itself is permanently
//! off-limits to idle rotation and inertia (the playback gate). The
//! rendering collaborator samples [`clock`](PlaybackMixer::clock) each
//! frame to evaluate its clips; drag rotation composes additively on top
//! of whatever the clips write, which can visually fight. That conflict is
//! accepted behavior, not a bug.

use rustc_hash::FxHashMap;

/// Per-slot clip clocks.
pub struct PlaybackMixer {
    clocks: FxHashMap<usize, f32>,
}

impl PlaybackMixer {
    /// Mixer with no registered slots.
    #[must_use]
    pub fn new() -> Self {
        Self {
            clocks: FxHashMap::default(),
        }
    }

    /// Register `slot` as externally animated, clock at zero.
    ///
    /// Done once at load time; there is no unregister.
    pub fn register(&mut self, slot: usize) {
        let _ = self.clocks.entry(slot).or_insert(0.0);
    }

    /// Advance every registered clock by `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        for clock in self.clocks.values_mut() {
            *clock += dt;
        }
    }

    /// Clip time for `slot`, or `None` when the slot has no clips.
    #[must_use]
    pub fn clock(&self, slot: usize) -> Option<f32> {
        self.clocks.get(&slot).copied()
    }

    /// Number of externally animated slots.
    #[must_use]
    pub fn registered_count(&self) -> usize {
        self.clocks.len()
    }
}

impl Default for PlaybackMixer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unregistered_slot_has_no_clock() {
        let mixer = PlaybackMixer::new();
        assert_eq!(mixer.clock(0), None);
        assert_eq!(mixer.registered_count(), 0);
    }

    #[test]
    fn clocks_accumulate_dt() {
        let mut mixer = PlaybackMixer::new();
        mixer.register(0);
        mixer.register(3);

        mixer.advance(0.016);
        mixer.advance(0.016);

        assert!((mixer.clock(0).unwrap() - 0.032).abs() < 1e-6);
        assert!((mixer.clock(3).unwrap() - 0.032).abs() < 1e-6);
        assert_eq!(mixer.clock(1), None);
    }

    #[test]
    fn re_register_keeps_clock() {
        let mut mixer = PlaybackMixer::new();
        mixer.register(0);
        mixer.advance(1.0);
        mixer.register(0);
        assert!((mixer.clock(0).unwrap() - 1.0).abs() < 1e-6);
    }
}
