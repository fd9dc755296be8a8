use crate::config::toml_config::PortfolioContent;
use crate::domain::model::{Profile, Project, Skill};

fn skill(icon: &str, label: &str) -> Skill {
    Skill {
        icon: icon.to_string(),
        label: label.to_string(),
    }
}

fn project(icon: &str, title: &str, description: &str, tags: &[&str]) -> Project {
    Project {
        icon: icon.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        tags: tags.iter().map(|tag| tag.to_string()).collect(),
    }
}

/// 內建的作品集內容，沒有提供 --content 時使用
pub fn breana_fulton() -> PortfolioContent {
    PortfolioContent {
        profile: Profile {
            name: "Breana Fulton".to_string(),
            initials: "BF".to_string(),
            title: "Creative Developer & Designer".to_string(),
            bio: vec![
                "I build elegant digital experiences that combine beautiful design with powerful functionality. With a passion for clean code and user-centric design, I help brands tell their stories through innovative web applications.".to_string(),
                "Specialized in modern web technologies and always learning. I believe great products come from understanding both the technical and human side of development.".to_string(),
            ],
        },
        skills: vec![
            skill("⚛️", "React"),
            skill("🎨", "UI/UX Design"),
            skill("🚀", "Node.js"),
            skill("💾", "Databases"),
            skill("📱", "Responsive"),
            skill("☁️", "Cloud Services"),
            skill("🔧", "DevOps"),
            skill("🎯", "TypeScript"),
        ],
        projects: vec![
            project(
                "🏪",
                "MarketPlace Pro",
                "Built a comprehensive marketplace platform connecting buyers and sellers with real-time chat, secure payments, and advanced search features.",
                &["React", "Socket.io", "Stripe", "MongoDB"],
            ),
            project(
                "🎵",
                "SoundWave Studio",
                "Developed a music streaming platform with personalized playlists, artist profiles, and collaborative playlist features for music lovers.",
                &["Next.js", "PostgreSQL", "AWS"],
            ),
            project(
                "🏃",
                "FitTrack Pro",
                "Created a comprehensive fitness tracking app with workout plans, nutrition tracking, and progress analytics for health enthusiasts.",
                &["React Native", "Firebase", "Charts.js"],
            ),
            project(
                "📚",
                "LearnHub",
                "Educational platform featuring interactive courses, quizzes, and progress tracking with gamification elements to enhance learning.",
                &["Vue.js", "Django", "Redis"],
            ),
            project(
                "🏡",
                "RealEstate Finder",
                "Property listing platform with virtual tours, mortgage calculators, and AI-powered recommendations for home buyers.",
                &["Angular", "Python", "Google Maps API"],
            ),
            project(
                "✈️",
                "TravelBuddy",
                "Trip planning application with itinerary management, expense splitting, and local recommendations for travelers worldwide.",
                &["React", "Express", "MongoDB"],
            ),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::validation::Validate;

    #[test]
    fn test_default_content_is_valid() {
        let content = breana_fulton();
        assert!(content.validate().is_ok());
        assert_eq!(content.profile.bio.len(), 2);
        assert_eq!(content.skills.len(), 8);
        assert_eq!(content.projects.len(), 6);
    }
}
