//! Version Descriptor Value Object

use std::fmt;

/// Which game a supported version belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TitleFamily {
    /// Ocarina of Time, the primary title
    Oot,
    /// Majora's Mask, the secondary title
    Mm,
}

impl TitleFamily {
    /// Archive name produced when the user does not override it.
    pub fn default_archive_name(self) -> &'static str {
        match self {
            TitleFamily::Oot => "oot.o2r",
            TitleFamily::Mm => "mm.o2r",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            TitleFamily::Oot => "Ocarina of Time",
            TitleFamily::Mm => "Majora's Mask",
        }
    }
}

/// A supported ROM version and the extractor configuration that goes with it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VersionDescriptor {
    name: String,
    is_secondary_title: bool,
    config_tree_id: String,
}

impl VersionDescriptor {
    /// Descriptor whose XML tree shares the version's name.
    pub fn new(name: impl Into<String>, is_secondary_title: bool) -> Self {
        let name = name.into();
        Self {
            config_tree_id: name.clone(),
            name,
            is_secondary_title,
        }
    }

    /// Point the descriptor at a differently named XML tree.
    pub fn with_config_tree(mut self, config_tree_id: impl Into<String>) -> Self {
        self.config_tree_id = config_tree_id.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_secondary_title(&self) -> bool {
        self.is_secondary_title
    }

    /// Directory under the XML root, also used in `Config_<id>.xml`.
    pub fn config_tree_id(&self) -> &str {
        &self.config_tree_id
    }

    pub fn title(&self) -> TitleFamily {
        if self.is_secondary_title {
            TitleFamily::Mm
        } else {
            TitleFamily::Oot
        }
    }
}

impl fmt::Display for VersionDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.title().display_name())
    }
}
