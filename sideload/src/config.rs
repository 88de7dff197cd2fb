/// Knobs for how an [`Injector`](crate::Injector) builds and cleans up nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InjectorConfig {
    /// Remove a node from its container when its `error` event fires.
    pub remove_on_error: bool,
    /// `media` attribute written on stylesheet links.
    pub media: String,
}

impl Default for InjectorConfig {
    fn default() -> Self {
        Self {
            remove_on_error: true,
            media: "all".to_string(),
        }
    }
}

impl InjectorConfig {
    pub fn remove_on_error(mut self, remove: bool) -> Self {
        self.remove_on_error = remove;
        self
    }

    pub fn media(mut self, media: impl Into<String>) -> Self {
        self.media = media.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = InjectorConfig::default();
        assert!(config.remove_on_error);
        assert_eq!(config.media, "all");
    }

    #[test]
    fn test_builder() {
        let config = InjectorConfig::default()
            .remove_on_error(false)
            .media("print");
        assert!(!config.remove_on_error);
        assert_eq!(config.media, "print");
    }
}
