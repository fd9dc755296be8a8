use crate::domain::model::{Profile, Project, Skill};

/// 作品集靜態內容的來源
pub trait ContentSource {
    fn profile(&self) -> &Profile;
    fn skills(&self) -> &[Skill];
    fn projects(&self) -> &[Project];
}
