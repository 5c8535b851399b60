use std::collections::HashSet;

use shared::{
    domain::{SectionDescriptor, SectionId},
    error::RegistryError,
};

const PORTFOLIO_SECTIONS: [(&str, &str); 7] = [
    ("home", "Home"),
    ("about", "About"),
    ("work", "Case Studies"),
    ("framework", "Do It Afraid"),
    ("safety", "Safety"),
    ("services", "Services"),
    ("contact", "Contact"),
];

/// Ordered, immutable list of the sections the navigation bar offers.
///
/// Order is the on-screen order of both navigation lists. The first entry
/// is where every navigation session starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionRegistry {
    sections: Vec<SectionDescriptor>,
}

impl SectionRegistry {
    /// Builds a registry from external data, rejecting empty lists, blank
    /// ids and duplicate ids.
    pub fn new(sections: Vec<SectionDescriptor>) -> Result<Self, RegistryError> {
        if sections.is_empty() {
            return Err(RegistryError::Empty);
        }

        let mut seen = HashSet::with_capacity(sections.len());
        for section in &sections {
            if section.id.as_str().trim().is_empty() {
                return Err(RegistryError::BlankId {
                    label: section.label.clone(),
                });
            }
            if !seen.insert(section.id.as_str()) {
                return Err(RegistryError::DuplicateId(section.id.clone()));
            }
        }

        Ok(Self { sections })
    }

    /// The compiled-in sections of the portfolio page.
    pub fn portfolio() -> Self {
        Self {
            sections: PORTFOLIO_SECTIONS
                .iter()
                .map(|(id, label)| SectionDescriptor::new(*id, *label))
                .collect(),
        }
    }

    pub fn list(&self) -> &[SectionDescriptor] {
        &self.sections
    }

    pub fn first(&self) -> &SectionDescriptor {
        // Both constructors guarantee at least one entry.
        &self.sections[0]
    }

    pub fn get(&self, id: &str) -> Option<&SectionDescriptor> {
        self.sections.iter().find(|section| section.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.sections.iter().position(|section| section.id == id)
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = &SectionId> {
        self.sections.iter().map(|section| &section.id)
    }
}

impl Default for SectionRegistry {
    fn default() -> Self {
        Self::portfolio()
    }
}
