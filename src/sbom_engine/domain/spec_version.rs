use std::fmt;
use std::str::FromStr;

/// CycloneDX specification versions the validator can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum SpecVersion {
    V1_4,
    V1_5,
    #[default]
    V1_6,
}

impl SpecVersion {
    pub const SUPPORTED: [SpecVersion; 3] = [SpecVersion::V1_4, SpecVersion::V1_5, SpecVersion::V1_6];

    pub fn as_str(&self) -> &'static str {
        match self {
            SpecVersion::V1_4 => "1.4",
            SpecVersion::V1_5 => "1.5",
            SpecVersion::V1_6 => "1.6",
        }
    }
}

impl FromStr for SpecVersion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::SUPPORTED
            .iter()
            .find(|v| v.as_str() == s.trim())
            .copied()
            .ok_or_else(|| {
                format!(
                    "Unsupported CycloneDX version: {}. Supported versions: 1.4, 1.5, 1.6",
                    s
                )
            })
    }
}

impl fmt::Display for SpecVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
