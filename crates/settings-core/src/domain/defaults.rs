//! The `Defaultable` capability.
//!
//! `Default` answers "how do I construct one of these with no setup?".
//! `Defaultable` adds "put this existing instance back to its canonical
//! values", which is what the store calls whenever it needs fresh default
//! content.  Most records leave `reset_to_default` alone and let it fall back
//! to `Default`; a record whose freshly constructed state differs from its
//! canonical defaults overrides it.

/// A settings record that can reset itself to canonical default values.
pub trait Defaultable: Default {
    /// Resets `self` in place to canonical default values.
    fn reset_to_default(&mut self) {
        *self = Self::default();
    }

    /// Constructs a fresh instance and resets it to canonical defaults.
    fn new_default() -> Self {
        let mut settings = Self::default();
        settings.reset_to_default();
        settings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default, PartialEq)]
    struct Plain {
        volume: u8,
    }

    impl Defaultable for Plain {}

    /// A record whose constructed state is blank but whose canonical
    /// defaults are not.
    #[derive(Debug, Default, PartialEq)]
    struct Tuned {
        volume: u8,
        label: String,
    }

    impl Defaultable for Tuned {
        fn reset_to_default(&mut self) {
            self.volume = 70;
            self.label = "main".to_string();
        }
    }

    #[test]
    fn test_provided_reset_falls_back_to_default() {
        // Arrange
        let mut plain = Plain { volume: 9 };

        // Act
        plain.reset_to_default();

        // Assert
        assert_eq!(plain, Plain::default());
    }

    #[test]
    fn test_new_default_applies_overridden_reset() {
        let tuned = Tuned::new_default();
        assert_eq!(tuned.volume, 70);
        assert_eq!(tuned.label, "main");
    }

    #[test]
    fn test_default_alone_does_not_apply_canonical_values() {
        // `Default` is only the blank construction step.
        let tuned = Tuned::default();
        assert_eq!(tuned.volume, 0);
        assert!(tuned.label.is_empty());
    }
}
