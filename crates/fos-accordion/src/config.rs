//! Accordion configuration

use serde::{Deserialize, Serialize};

use crate::aria;
use crate::host::AccordionHost;

/// Construction-time options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AccordionConfig {
    /// Allow more than one panel open at a time
    pub multiselectable: bool,
}

impl AccordionConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_multiselectable(mut self, multiselectable: bool) -> Self {
        self.multiselectable = multiselectable;
        self
    }

    /// Read `data-multiselectable="true"` from the container element
    pub fn from_container<H: AccordionHost>(host: &H, container: H::Node) -> Self {
        Self {
            multiselectable: host.bool_attribute(container, aria::DATA_MULTISELECTABLE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_single_select() {
        assert!(!AccordionConfig::default().multiselectable);
        assert!(AccordionConfig::new().with_multiselectable(true).multiselectable);
    }

    #[test]
    fn test_deserialize() {
        let config: AccordionConfig = serde_json::from_str(r#"{"multiselectable": true}"#).unwrap();
        assert!(config.multiselectable);

        let config: AccordionConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, AccordionConfig::default());
    }
}
