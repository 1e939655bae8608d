//! One-shot entrance flag.
//!
//! Off on first render, switched on once the page becomes interactive so the
//! hero content can transition in. It never switches back.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EntranceFlag {
    visible: bool,
}

impl EntranceFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Mark the page visible. Returns `true` only on the call that performed
    /// the transition.
    pub fn reveal(&mut self) -> bool {
        let transitioned = !self.visible;
        self.visible = true;
        transitioned
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_hidden() {
        assert!(!EntranceFlag::new().is_visible());
    }

    #[test]
    fn test_reveal_transitions_once() {
        let mut flag = EntranceFlag::new();
        assert!(flag.reveal());
        assert!(flag.is_visible());

        assert!(!flag.reveal());
        assert!(!flag.reveal());
        assert!(flag.is_visible());
    }
}
