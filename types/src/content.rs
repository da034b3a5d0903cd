//! Site content data model.
//!
//! The portfolio page is hand-authored data: a profile, an about
//! blurb, skill groups, project cards, and contact methods. Content is
//! deserialized from TOML by `folio-content`; nothing here is mutated
//! at runtime.

use serde::Deserialize;

/// The five sections of the page, in scroll order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Hero,
    About,
    Skills,
    Projects,
    Contact,
}

impl Section {
    pub const ALL: [Self; 5] = [
        Self::Hero,
        Self::About,
        Self::Skills,
        Self::Projects,
        Self::Contact,
    ];

    /// Short label used in the navigation bar.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Hero => "Home",
            Self::About => "About",
            Self::Skills => "Skills",
            Self::Projects => "Projects",
            Self::Contact => "Contact",
        }
    }

    /// Full heading rendered at the top of the section.
    #[must_use]
    pub const fn heading(self) -> &'static str {
        match self {
            Self::Hero => "",
            Self::About => "About Me",
            Self::Skills => "Skills & Expertise",
            Self::Projects => "Featured Projects",
            Self::Contact => "Let's Work Together",
        }
    }

    /// Map a `1`-based digit key to a section.
    #[must_use]
    pub fn from_digit(digit: u32) -> Option<Self> {
        let index = usize::try_from(digit).ok()?.checked_sub(1)?;
        Self::ALL.get(index).copied()
    }

    #[must_use]
    pub fn next(self) -> Self {
        let index = Self::ALL.iter().position(|s| *s == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }

    #[must_use]
    pub fn prev(self) -> Self {
        let index = Self::ALL.iter().position(|s| *s == self).unwrap_or(0);
        Self::ALL[(index + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Site owner identity shown in the hero and navigation bar.
#[derive(Debug, Clone, Deserialize)]
pub struct Profile {
    pub given_name: String,
    pub family_name: String,
    pub title: String,
    pub tagline: String,
    #[serde(default)]
    pub socials: Vec<SocialLink>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub href: String,
}

/// The about section: lead line, prose, strengths, and a mission quote.
#[derive(Debug, Clone, Deserialize)]
pub struct About {
    pub lead: String,
    pub paragraphs: Vec<String>,
    pub strengths_title: String,
    #[serde(default)]
    pub strengths: Vec<String>,
    pub mission: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SkillGroup {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Project {
    pub title: String,
    pub category: String,
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub demo: Option<String>,
    #[serde(default)]
    pub repo: Option<String>,
}

/// One card in the contact section (email, chat, meeting, location).
#[derive(Debug, Clone, Deserialize)]
pub struct ContactMethod {
    pub title: String,
    pub detail: String,
    pub action: String,
    #[serde(default)]
    pub href: Option<String>,
}

/// The whole hand-authored site.
#[derive(Debug, Clone, Deserialize)]
pub struct Site {
    pub profile: Profile,
    pub about: About,
    pub contact_lead: String,
    #[serde(default)]
    pub skills: Vec<SkillGroup>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub contact_methods: Vec<ContactMethod>,
}

#[cfg(test)]
mod tests {
    use super::Section;

    #[test]
    fn digit_keys_map_in_scroll_order() {
        assert_eq!(Section::from_digit(1), Some(Section::Hero));
        assert_eq!(Section::from_digit(5), Some(Section::Contact));
        assert_eq!(Section::from_digit(0), None);
        assert_eq!(Section::from_digit(6), None);
    }

    #[test]
    fn section_cycle_wraps() {
        assert_eq!(Section::Contact.next(), Section::Hero);
        assert_eq!(Section::Hero.prev(), Section::Contact);
        assert_eq!(Section::About.next(), Section::Skills);
    }
}
