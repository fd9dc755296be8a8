use crate::domain::model::{NavigationOutcome, Section};

pub const SECTION_NOT_FOUND: &str = "Section not found";

#[derive(Debug, Clone, Default)]
pub struct NavigationManager {
    current_section: Section,
}

impl NavigationManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn navigate_to_section(&mut self, section_id: &str) -> NavigationOutcome {
        match Section::parse(section_id) {
            Some(section) => {
                self.current_section = section;
                tracing::info!("🧭 Navigated to section '{}'", section);
                NavigationOutcome::Moved { section }
            }
            None => {
                tracing::debug!("Unknown section '{}', staying on '{}'", section_id, self.current_section);
                NavigationOutcome::NotFound {
                    message: SECTION_NOT_FOUND.to_string(),
                }
            }
        }
    }

    pub fn current_section(&self) -> Section {
        self.current_section
    }

    pub fn all_sections(&self) -> &'static [Section] {
        &Section::ALL
    }
}
