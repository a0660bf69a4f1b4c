use crate::sbom_engine::domain::Component;
use std::fmt;

/// Property-name prefix of the GOST/FSTEC extension.
pub const GOST_PROPERTY_PREFIX: &str = "cdx:gost:";

/// The two ordered risk attributes carried by the GOST/FSTEC extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GostAttribute {
    /// Does the component touch the attack surface
    AttackSurface,
    /// Does the component implement a security function
    SecurityFunction,
}

impl GostAttribute {
    pub const ALL: [GostAttribute; 2] = [GostAttribute::AttackSurface, GostAttribute::SecurityFunction];

    /// Full property name, e.g. `cdx:gost:attack_surface`.
    pub fn property_name(&self) -> &'static str {
        match self {
            GostAttribute::AttackSurface => "cdx:gost:attack_surface",
            GostAttribute::SecurityFunction => "cdx:gost:security_function",
        }
    }

    /// Short label used in messages, e.g. `GOST:attack_surface`.
    pub fn label(&self) -> &'static str {
        match self {
            GostAttribute::AttackSurface => "GOST:attack_surface",
            GostAttribute::SecurityFunction => "GOST:security_function",
        }
    }

    /// Reads this attribute from a component's property bag.
    pub fn read<'a>(&self, component: &'a Component) -> GostValue<'a> {
        if !component.has_property(self.property_name()) {
            return GostValue::Unset;
        }
        match component.property(self.property_name()) {
            Some(raw) => GostLevel::parse(raw)
                .map(GostValue::Level)
                .unwrap_or(GostValue::Unrecognized(raw)),
            None => GostValue::Unrecognized(""),
        }
    }

    pub fn write(&self, component: &mut Component, level: GostLevel) {
        component.set_property(self.property_name(), level.as_str());
    }
}

impl fmt::Display for GostAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Ordered attribute value: `no < indirect < yes`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum GostLevel {
    No,
    Indirect,
    Yes,
}

/// Closed lookup table from property value to level.
const LEVEL_TABLE: [(&str, GostLevel); 3] = [
    ("no", GostLevel::No),
    ("indirect", GostLevel::Indirect),
    ("yes", GostLevel::Yes),
];

impl GostLevel {
    /// Case-insensitive lookup; anything outside the table is `None`.
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        LEVEL_TABLE
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(value))
            .map(|(_, level)| *level)
    }

    pub fn ordinal(&self) -> u8 {
        match self {
            GostLevel::No => 0,
            GostLevel::Indirect => 1,
            GostLevel::Yes => 2,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GostLevel::No => "no",
            GostLevel::Indirect => "indirect",
            GostLevel::Yes => "yes",
        }
    }
}

impl fmt::Display for GostLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a component declares for one attribute.
///
/// `Unset` is not the same as `no`: it never takes part in the ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GostValue<'a> {
    Unset,
    Unrecognized(&'a str),
    Level(GostLevel),
}

impl GostValue<'_> {
    pub fn level(&self) -> Option<GostLevel> {
        match self {
            GostValue::Level(level) => Some(*level),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sbom_engine::domain::ComponentType;

    #[test]
    fn test_level_ordering() {
        assert!(GostLevel::No < GostLevel::Indirect);
        assert!(GostLevel::Indirect < GostLevel::Yes);
        assert_eq!(GostLevel::No.ordinal(), 0);
        assert_eq!(GostLevel::Indirect.ordinal(), 1);
        assert_eq!(GostLevel::Yes.ordinal(), 2);
    }

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!(GostLevel::parse("YES"), Some(GostLevel::Yes));
        assert_eq!(GostLevel::parse(" Indirect "), Some(GostLevel::Indirect));
        assert_eq!(GostLevel::parse("no"), Some(GostLevel::No));
        assert_eq!(GostLevel::parse("maybe"), None);
        assert_eq!(GostLevel::parse(""), None);
    }

    #[test]
    fn test_read_distinguishes_unset_from_no() {
        let bare = Component::new(ComponentType::Library, "lib");
        assert_eq!(GostAttribute::AttackSurface.read(&bare), GostValue::Unset);

        let no = bare
            .clone()
            .with_property("cdx:gost:attack_surface", "no");
        assert_eq!(
            GostAttribute::AttackSurface.read(&no),
            GostValue::Level(GostLevel::No)
        );
        assert_eq!(GostAttribute::SecurityFunction.read(&no), GostValue::Unset);
    }

    #[test]
    fn test_read_unrecognized_value() {
        let component = Component::new(ComponentType::Library, "lib")
            .with_property("cdx:gost:security_function", "sometimes");
        assert_eq!(
            GostAttribute::SecurityFunction.read(&component),
            GostValue::Unrecognized("sometimes")
        );
        assert_eq!(
            GostAttribute::SecurityFunction.read(&component).level(),
            None
        );
    }

    #[test]
    fn test_write_then_read() {
        let mut component = Component::new(ComponentType::Library, "lib");
        GostAttribute::SecurityFunction.write(&mut component, GostLevel::Indirect);
        assert_eq!(
            component.property("cdx:gost:security_function"),
            Some("indirect")
        );
    }

    #[test]
    fn test_property_names_share_prefix() {
        for attribute in GostAttribute::ALL {
            assert!(attribute.property_name().starts_with(GOST_PROPERTY_PREFIX));
        }
    }
}
