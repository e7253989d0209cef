//! Language version and feature settings.

use bitflags::bitflags;
use std::fmt;

bitflags! {
    /// Optional language features.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
    pub struct LanguageFeatures: u32 {
        const TYPE_ALIASES = 1 << 0;
        const BOUND_CALLABLE_REFERENCES = 1 << 1;
        const LOCAL_DELEGATED_PROPERTIES = 1 << 2;
        const INLINE_PROPERTIES = 1 << 3;
        const COROUTINES = 1 << 4;
        const DATA_OBJECTS = 1 << 5;
    }
}

impl LanguageFeatures {
    /// Name of the first flag set, e.g. `TYPE_ALIASES`.
    pub fn display_name(self) -> &'static str {
        self.iter_names().next().map_or("UNKNOWN", |(name, _)| name)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum LanguageVersion {
    V1_0,
    #[default]
    V1_1,
    V1_2,
}

impl LanguageVersion {
    /// Features enabled by default at this version.
    pub fn default_features(self) -> LanguageFeatures {
        match self {
            LanguageVersion::V1_0 => LanguageFeatures::empty(),
            LanguageVersion::V1_1 => {
                LanguageFeatures::TYPE_ALIASES
                    | LanguageFeatures::BOUND_CALLABLE_REFERENCES
                    | LanguageFeatures::LOCAL_DELEGATED_PROPERTIES
                    | LanguageFeatures::INLINE_PROPERTIES
                    | LanguageFeatures::COROUTINES
            }
            LanguageVersion::V1_2 => {
                LanguageVersion::V1_1.default_features() | LanguageFeatures::DATA_OBJECTS
            }
        }
    }
}

impl fmt::Display for LanguageVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LanguageVersion::V1_0 => "1.0",
            LanguageVersion::V1_1 => "1.1",
            LanguageVersion::V1_2 => "1.2",
        })
    }
}

/// Language level a module is compiled at.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct LanguageFeatureSettings {
    version: LanguageVersion,
    features: LanguageFeatures,
}

impl LanguageFeatureSettings {
    pub fn for_version(version: LanguageVersion) -> Self {
        LanguageFeatureSettings {
            version,
            features: version.default_features(),
        }
    }

    /// Opt in to features beyond the version's defaults.
    #[must_use]
    pub fn with_enabled(mut self, features: LanguageFeatures) -> Self {
        self.features |= features;
        self
    }

    #[must_use]
    pub fn with_disabled(mut self, features: LanguageFeatures) -> Self {
        self.features.remove(features);
        self
    }

    pub fn version(&self) -> LanguageVersion {
        self.version
    }

    pub fn features(&self) -> LanguageFeatures {
        self.features
    }

    /// All of `feature` is enabled.
    pub fn supports(&self, feature: LanguageFeatures) -> bool {
        self.features.contains(feature)
    }
}

impl Default for LanguageFeatureSettings {
    fn default() -> Self {
        Self::for_version(LanguageVersion::default())
    }
}
