use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A main build slot. Each slot holds at most one component in a selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum BuildCategory {
    #[serde(rename = "case")]
    Case,
    #[serde(rename = "motherboard")]
    Motherboard,
    #[serde(rename = "cpu")]
    Cpu,
    #[serde(rename = "ram")]
    Ram,
    #[serde(rename = "gpu")]
    Gpu,
    #[serde(rename = "storage")]
    Storage,
    #[serde(rename = "psu")]
    Psu,
    #[serde(rename = "cooling")]
    Cooling,
    #[serde(rename = "caseFans")]
    CaseFans,
}

impl BuildCategory {
    pub const ALL: [BuildCategory; 9] = [
        BuildCategory::Case,
        BuildCategory::Motherboard,
        BuildCategory::Cpu,
        BuildCategory::Ram,
        BuildCategory::Gpu,
        BuildCategory::Storage,
        BuildCategory::Psu,
        BuildCategory::Cooling,
        BuildCategory::CaseFans,
    ];

    /// Key used in catalog and build documents
    pub fn key(&self) -> &'static str {
        match self {
            BuildCategory::Case => "case",
            BuildCategory::Motherboard => "motherboard",
            BuildCategory::Cpu => "cpu",
            BuildCategory::Ram => "ram",
            BuildCategory::Gpu => "gpu",
            BuildCategory::Storage => "storage",
            BuildCategory::Psu => "psu",
            BuildCategory::Cooling => "cooling",
            BuildCategory::CaseFans => "caseFans",
        }
    }

    /// Human-readable label, used when a component has no name
    pub fn label(&self) -> &'static str {
        match self {
            BuildCategory::Case => "Case",
            BuildCategory::Motherboard => "Motherboard",
            BuildCategory::Cpu => "CPU",
            BuildCategory::Ram => "RAM",
            BuildCategory::Gpu => "GPU",
            BuildCategory::Storage => "Storage",
            BuildCategory::Psu => "Power Supply",
            BuildCategory::Cooling => "CPU Cooler",
            BuildCategory::CaseFans => "Case Fans",
        }
    }
}

impl fmt::Display for BuildCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for BuildCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BuildCategory::ALL
            .iter()
            .copied()
            .find(|c| c.key().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                format!(
                    "Invalid build category: {}. Expected one of: {}",
                    s,
                    BuildCategory::ALL
                        .iter()
                        .map(|c| c.key())
                        .collect::<Vec<_>>()
                        .join(", ")
                )
            })
    }
}

/// An accessory group. Peripherals allow any number of selected items and carry no
/// compatibility rules or variant dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PeripheralCategory {
    Keyboard,
    Mouse,
    Monitor,
    Gamepad,
    Mousepad,
    Software,
    Headset,
    Cable,
}

impl PeripheralCategory {
    pub const ALL: [PeripheralCategory; 8] = [
        PeripheralCategory::Keyboard,
        PeripheralCategory::Mouse,
        PeripheralCategory::Monitor,
        PeripheralCategory::Gamepad,
        PeripheralCategory::Mousepad,
        PeripheralCategory::Software,
        PeripheralCategory::Headset,
        PeripheralCategory::Cable,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            PeripheralCategory::Keyboard => "keyboard",
            PeripheralCategory::Mouse => "mouse",
            PeripheralCategory::Monitor => "monitor",
            PeripheralCategory::Gamepad => "gamepad",
            PeripheralCategory::Mousepad => "mousepad",
            PeripheralCategory::Software => "software",
            PeripheralCategory::Headset => "headset",
            PeripheralCategory::Cable => "cable",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PeripheralCategory::Keyboard => "Keyboard",
            PeripheralCategory::Mouse => "Mouse",
            PeripheralCategory::Monitor => "Monitor",
            PeripheralCategory::Gamepad => "Gamepad",
            PeripheralCategory::Mousepad => "Mousepad",
            PeripheralCategory::Software => "Software",
            PeripheralCategory::Headset => "Headset",
            PeripheralCategory::Cable => "Cable",
        }
    }
}

impl fmt::Display for PeripheralCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for PeripheralCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PeripheralCategory::ALL
            .iter()
            .copied()
            .find(|c| c.key().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("Invalid peripheral category: {}", s))
    }
}

/// Any catalog category, build slot or accessory group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Build(BuildCategory),
    Peripheral(PeripheralCategory),
}

impl Category {
    pub fn key(&self) -> &'static str {
        match self {
            Category::Build(c) => c.key(),
            Category::Peripheral(c) => c.key(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Build(c) => c.label(),
            Category::Peripheral(c) => c.label(),
        }
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(build) = BuildCategory::from_str(s) {
            return Ok(Category::Build(build));
        }
        PeripheralCategory::from_str(s)
            .map(Category::Peripheral)
            .map_err(|_| format!("Unknown category: {}", s))
    }
}
