//! Cosmetic enter transitions keyed per view.
//!
//! When the view on screen changes (loading → auth, login → register, one tab
//! to another) the content panel slides in from the right over a few frames.
//! The transition only influences where the renderer draws; the state change
//! that caused it is already committed when the first frame is drawn.

use crate::domain::Tab;

/// Columns the panel is shifted per remaining frame.
const OFFSET_STEP: usize = 4;

/// Identity of the view currently on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewKey {
    Loading,
    Login,
    Register,
    Tab(Tab),
}

/// Slide-in animation state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    key: Option<ViewKey>,
    frames: u8,
    frames_left: u8,
}

impl Transition {
    /// Creates a transition that animates over `frames` ticks.
    ///
    /// Zero frames disables the effect.
    #[must_use]
    pub const fn new(frames: u8) -> Self {
        Self {
            key: None,
            frames,
            frames_left: 0,
        }
    }

    /// Records the view about to be drawn.
    ///
    /// Returns `true` if the key changed and an animation started. The very
    /// first key observed is drawn in place.
    pub fn observe(&mut self, key: ViewKey) -> bool {
        let previous = self.key.replace(key);
        match previous {
            Some(previous) if previous != key && self.frames > 0 => {
                tracing::trace!(from = ?previous, to = ?key, "view transition started");
                self.frames_left = self.frames;
                true
            }
            _ => false,
        }
    }

    /// Records `key` as already on screen, stopping any animation in progress.
    pub fn settle(&mut self, key: ViewKey) {
        self.key = Some(key);
        self.frames_left = 0;
    }

    /// Advances one frame. Returns `true` while frames remain to be drawn.
    pub fn tick(&mut self) -> bool {
        self.frames_left = self.frames_left.saturating_sub(1);
        self.is_animating()
    }

    #[must_use]
    pub const fn is_animating(&self) -> bool {
        self.frames_left > 0
    }

    /// Current horizontal offset of the entering view, in columns.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.frames_left as usize * OFFSET_STEP
    }
}

impl Default for Transition {
    fn default() -> Self {
        Self::new(3)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_view_does_not_animate() {
        let mut transition = Transition::default();
        assert!(!transition.observe(ViewKey::Tab(Tab::Feed)));
        assert_eq!(transition.offset(), 0);
    }

    #[test]
    fn key_change_slides_in_and_settles() {
        let mut transition = Transition::new(2);
        transition.observe(ViewKey::Tab(Tab::Feed));

        assert!(transition.observe(ViewKey::Tab(Tab::Chats)));
        assert_eq!(transition.offset(), 2 * OFFSET_STEP);

        assert!(transition.tick());
        assert_eq!(transition.offset(), OFFSET_STEP);
        assert!(!transition.tick());
        assert_eq!(transition.offset(), 0);
        assert!(!transition.tick());
    }

    #[test]
    fn same_key_does_not_restart() {
        let mut transition = Transition::new(2);
        transition.observe(ViewKey::Login);
        assert!(!transition.observe(ViewKey::Login));
        assert!(!transition.is_animating());
    }

    #[test]
    fn settle_stops_animation_without_restarting() {
        let mut transition = Transition::new(2);
        transition.observe(ViewKey::Tab(Tab::Feed));
        transition.observe(ViewKey::Tab(Tab::Calls));

        transition.settle(ViewKey::Tab(Tab::Chats));
        assert!(!transition.is_animating());
        assert!(!transition.observe(ViewKey::Tab(Tab::Chats)));
    }

    #[test]
    fn zero_frames_disables_effect() {
        let mut transition = Transition::new(0);
        transition.observe(ViewKey::Login);
        assert!(!transition.observe(ViewKey::Register));
        assert_eq!(transition.offset(), 0);
    }
}
