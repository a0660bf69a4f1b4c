use super::lenient;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

/// CycloneDX component classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentType {
    Application,
    Library,
    Framework,
    Container,
    Platform,
    OperatingSystem,
    Device,
    DeviceDriver,
    Firmware,
    File,
    MachineLearningModel,
    Data,
}

impl ComponentType {
    pub const ALL: [ComponentType; 12] = [
        ComponentType::Application,
        ComponentType::Library,
        ComponentType::Framework,
        ComponentType::Container,
        ComponentType::Platform,
        ComponentType::OperatingSystem,
        ComponentType::Device,
        ComponentType::DeviceDriver,
        ComponentType::Firmware,
        ComponentType::File,
        ComponentType::MachineLearningModel,
        ComponentType::Data,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentType::Application => "application",
            ComponentType::Library => "library",
            ComponentType::Framework => "framework",
            ComponentType::Container => "container",
            ComponentType::Platform => "platform",
            ComponentType::OperatingSystem => "operating-system",
            ComponentType::Device => "device",
            ComponentType::DeviceDriver => "device-driver",
            ComponentType::Firmware => "firmware",
            ComponentType::File => "file",
            ComponentType::MachineLearningModel => "machine-learning-model",
            ComponentType::Data => "data",
        }
    }
}

impl FromStr for ComponentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|t| t.as_str() == s)
            .copied()
            .ok_or_else(|| format!("Unknown component type: {}", s))
    }
}

impl fmt::Display for ComponentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    Required,
    Optional,
    Excluded,
}

impl Scope {
    pub fn as_str(&self) -> &'static str {
        match self {
            Scope::Required => "required",
            Scope::Optional => "optional",
            Scope::Excluded => "excluded",
        }
    }
}

impl FromStr for Scope {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "required" => Ok(Scope::Required),
            "optional" => Ok(Scope::Optional),
            "excluded" => Ok(Scope::Excluded),
            _ => Err(format!("Unknown scope: {}", s)),
        }
    }
}

/// A license entry: either a free-text SPDX expression or a structured license.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LicenseChoice {
    Expression { expression: String },
    License { license: License },
    /// Any other shape, written back unchanged.
    Other(Value),
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct License {
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExternalReference {
    #[serde(rename = "type", default, deserialize_with = "lenient::text_or_empty")]
    pub kind: String,
    #[serde(default, deserialize_with = "lenient::text_or_empty")]
    pub url: String,
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl ExternalReference {
    pub fn new(kind: &str, url: &str) -> Self {
        Self {
            kind: kind.to_string(),
            url: url.to_string(),
            comment: None,
        }
    }

    /// True for version-control references (`vcs`, or the long form `version-control`).
    pub fn is_vcs(&self) -> bool {
        matches!(self.kind.as_str(), "vcs" | "version-control")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    #[serde(default, deserialize_with = "lenient::text_or_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl Property {
    pub fn new(name: &str, value: &str) -> Self {
        Self {
            name: name.to_string(),
            value: Some(value.to_string()),
        }
    }
}

/// A node of the component forest.
///
/// Children are owned by value, so the forest is a tree by construction.
/// Parsing is lenient: `type` and `name` may be absent so that the validator,
/// not the parser, reports the problem. Fields this model does not know are
/// kept in `extra` and written back unchanged.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Component {
    #[serde(
        rename = "type",
        default,
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub component_type: Option<String>,
    #[serde(
        rename = "bom-ref",
        default,
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub bom_ref: Option<String>,
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    #[serde(default, deserialize_with = "lenient::text_or_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    #[serde(default, deserialize_with = "lenient::list", skip_serializing_if = "Vec::is_empty")]
    pub licenses: Vec<LicenseChoice>,
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub purl: Option<String>,
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub cpe: Option<String>,
    #[serde(
        rename = "externalReferences",
        default,
        deserialize_with = "lenient::list",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub external_references: Vec<ExternalReference>,
    #[serde(default, deserialize_with = "lenient::list", skip_serializing_if = "Vec::is_empty")]
    pub properties: Vec<Property>,
    #[serde(default, deserialize_with = "lenient::list", skip_serializing_if = "Vec::is_empty")]
    pub components: Vec<Component>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Component {
    pub fn new(component_type: ComponentType, name: &str) -> Self {
        Self {
            component_type: Some(component_type.as_str().to_string()),
            name: name.to_string(),
            ..Default::default()
        }
    }

    pub fn with_version(mut self, version: &str) -> Self {
        self.version = Some(version.to_string());
        self
    }

    pub fn with_ref(mut self, bom_ref: &str) -> Self {
        self.bom_ref = Some(bom_ref.to_string());
        self
    }

    pub fn with_property(mut self, name: &str, value: &str) -> Self {
        self.set_property(name, value);
        self
    }

    pub fn with_external_reference(mut self, reference: ExternalReference) -> Self {
        self.external_references.push(reference);
        self
    }

    pub fn with_child(mut self, child: Component) -> Self {
        self.components.push(child);
        self
    }

    /// Parsed component type; `None` when missing or not in the enumeration.
    pub fn kind(&self) -> Option<ComponentType> {
        self.component_type.as_deref().and_then(|t| t.parse().ok())
    }

    /// Parsed scope; `None` when missing or not one of the three CycloneDX values.
    pub fn scope(&self) -> Option<Scope> {
        self.scope.as_deref().and_then(|s| s.parse().ok())
    }

    /// The bom-ref, ignoring empty strings.
    pub fn reference(&self) -> Option<&str> {
        self.bom_ref.as_deref().filter(|r| !r.is_empty())
    }

    pub fn property(&self, name: &str) -> Option<&str> {
        self.properties
            .iter()
            .find(|p| p.name == name)
            .and_then(|p| p.value.as_deref())
    }

    pub fn has_property(&self, name: &str) -> bool {
        self.properties.iter().any(|p| p.name == name)
    }

    /// Replaces the first property with this name, or appends a new one.
    pub fn set_property(&mut self, name: &str, value: &str) {
        match self.properties.iter_mut().find(|p| p.name == name) {
            Some(existing) => existing.value = Some(value.to_string()),
            None => self.properties.push(Property::new(name, value)),
        }
    }

    pub fn vcs_references(&self) -> impl Iterator<Item = &ExternalReference> {
        self.external_references.iter().filter(|r| r.is_vcs())
    }

    /// Number of nodes in this subtree, the component itself included.
    pub fn subtree_size(&self) -> usize {
        1 + count_components(&self.components)
    }
}

/// Recursive node count of a forest.
pub fn count_components(forest: &[Component]) -> usize {
    forest.iter().map(Component::subtree_size).sum()
}
