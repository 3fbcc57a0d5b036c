//! Feature flags

use serde::{Deserialize, Serialize};

/// Toggles for optional product surfaces.
///
/// Only `milestones` and `multi_language` change behaviour in this
/// workspace: milestones gate marker rendering on the week grid, and
/// `multi_language` gates honouring a non-default [`crate::Language`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureFlags {
    pub auth: bool,
    pub milestones: bool,
    pub sharing: bool,
    pub dark_mode: bool,
    pub multi_language: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        FeatureFlags {
            auth: false,
            milestones: false,
            sharing: false,
            dark_mode: false,
            multi_language: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let flags = FeatureFlags::default();
        assert!(!flags.auth);
        assert!(!flags.milestones);
        assert!(flags.multi_language);
    }
}
