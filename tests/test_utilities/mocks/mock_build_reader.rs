use std::path::Path;
use pc_configurator::prelude::*;

/// Mock BuildReader returning a fixed build document
pub struct MockBuildReader {
    pub document: BuildDocument,
    pub should_fail: bool,
}

impl MockBuildReader {
    pub fn new(selection: Selection) -> Self {
        Self {
            document: BuildDocument {
                selection,
                ..Default::default()
            },
            should_fail: false,
        }
    }

    pub fn with_peripherals(mut self, peripherals: PeripheralSelection) -> Self {
        self.document.peripherals = peripherals;
        self
    }

    pub fn with_variant(mut self, component_id: &str, key: &str, value: &str) -> Self {
        let variant = self
            .document
            .variants
            .remove(component_id)
            .unwrap_or_default()
            .with(key, value);
        self.document
            .variants
            .insert(component_id.to_string(), variant);
        self
    }

    pub fn with_failure() -> Self {
        Self {
            document: BuildDocument::default(),
            should_fail: true,
        }
    }
}

impl BuildReader for MockBuildReader {
    fn read_build(&self, _path: &Path) -> Result<BuildDocument> {
        if self.should_fail {
            anyhow::bail!("Mock build read failure");
        }
        Ok(self.document.clone())
    }
}
