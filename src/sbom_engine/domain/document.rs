use super::component::{count_components, Component, Property};
use super::lenient;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The only `bomFormat` value the engine accepts.
pub const BOM_FORMAT: &str = "CycloneDX";

/// A dependency edge: `bom_ref` requires every ref in `depends_on`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Dependency {
    #[serde(
        rename = "ref",
        default,
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub bom_ref: Option<String>,
    #[serde(
        rename = "dependsOn",
        default,
        deserialize_with = "lenient::text_list",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub depends_on: Vec<String>,
}

impl Dependency {
    pub fn new(bom_ref: &str, depends_on: &[&str]) -> Self {
        Self {
            bom_ref: Some(bom_ref.to_string()),
            depends_on: depends_on.iter().map(|r| r.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OrganizationalEntity {
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::text_list",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub url: Vec<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl OrganizationalEntity {
    pub fn named(name: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Metadata {
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    /// Kept as raw JSON: the shape changed between spec versions 1.4 and 1.5.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tools: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component: Option<Component>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manufacturer: Option<OrganizationalEntity>,
    #[serde(default, deserialize_with = "lenient::list", skip_serializing_if = "Vec::is_empty")]
    pub properties: Vec<Property>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// An in-memory CycloneDX Bill of Materials.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Document {
    #[serde(
        rename = "bomFormat",
        default,
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub bom_format: Option<String>,
    #[serde(
        rename = "specVersion",
        default,
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub spec_version: Option<String>,
    #[serde(
        rename = "serialNumber",
        default,
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub serial_number: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::unsigned",
        skip_serializing_if = "Option::is_none"
    )]
    pub version: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub components: Option<Vec<Component>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dependencies: Option<Vec<Dependency>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Document {
    /// A CycloneDX document with the given spec version and no content.
    pub fn cyclonedx(spec_version: &str) -> Self {
        Self {
            bom_format: Some(BOM_FORMAT.to_string()),
            spec_version: Some(spec_version.to_string()),
            ..Default::default()
        }
    }

    pub fn with_component(mut self, component: Component) -> Self {
        self.components.get_or_insert_with(Vec::new).push(component);
        self
    }

    pub fn with_dependency(mut self, dependency: Dependency) -> Self {
        self.dependencies
            .get_or_insert_with(Vec::new)
            .push(dependency);
        self
    }

    pub fn with_root_component(mut self, component: Component) -> Self {
        self.metadata.get_or_insert_with(Metadata::default).component = Some(component);
        self
    }

    pub fn components(&self) -> &[Component] {
        self.components.as_deref().unwrap_or(&[])
    }

    pub fn dependencies(&self) -> &[Dependency] {
        self.dependencies.as_deref().unwrap_or(&[])
    }

    /// The component the document describes (`metadata.component`).
    pub fn root_component(&self) -> Option<&Component> {
        self.metadata.as_ref().and_then(|m| m.component.as_ref())
    }

    /// Recursive number of components in the forest (`metadata.component` excluded).
    pub fn component_count(&self) -> usize {
        count_components(self.components())
    }

    pub fn has_vulnerabilities(&self) -> bool {
        self.extra.contains_key("vulnerabilities")
    }
}
