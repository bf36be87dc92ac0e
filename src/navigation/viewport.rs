//! Viewport classification

/// Size of the area the shell draws into, in terminal cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewportClass {
    Handset,
    Compact,
    Wide,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Classify against the handset and compact breakpoints (inclusive)
    pub fn classify(&self, handset_max: u16, compact_max: u16) -> ViewportClass {
        if self.width <= handset_max {
            ViewportClass::Handset
        } else if self.width <= compact_max {
            ViewportClass::Compact
        } else {
            ViewportClass::Wide
        }
    }

    pub fn is_handset(&self, handset_max: u16) -> bool {
        self.width <= handset_max
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        assert_eq!(Viewport::new(60, 30).classify(80, 120), ViewportClass::Handset);
        assert_eq!(Viewport::new(80, 30).classify(80, 120), ViewportClass::Handset);
        assert_eq!(Viewport::new(100, 30).classify(80, 120), ViewportClass::Compact);
        assert_eq!(Viewport::new(200, 30).classify(80, 120), ViewportClass::Wide);
    }
}
