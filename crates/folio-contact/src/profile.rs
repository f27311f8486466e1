//! Contact details shown beside the form.

use serde::Serialize;

use crate::config::ProfileConfig;

/// A labelled outbound link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SocialLink {
    /// Display label.
    pub label: String,
    /// Target URL.
    pub href: String,
}

/// Ways to reach the site owner other than the form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactProfile {
    /// Direct contact address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Availability note.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability: Option<String>,
    /// Social links, in display order.
    pub links: Vec<SocialLink>,
}

impl From<&ProfileConfig> for ContactProfile {
    fn from(config: &ProfileConfig) -> Self {
        Self {
            email: config.email.clone(),
            availability: config.availability.clone(),
            links: config
                .links
                .iter()
                .map(|link| SocialLink {
                    label: link.label.clone(),
                    href: link.href.clone(),
                })
                .collect(),
        }
    }
}

impl ContactProfile {
    /// Check whether there is anything to show.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.availability.is_none() && self.links.is_empty()
    }

    /// Render as plain text lines.
    #[must_use]
    pub fn render(&self) -> String {
        if self.is_empty() {
            return "No contact details configured.".to_string();
        }

        let mut out = String::new();
        if let Some(email) = &self.email {
            out.push_str(&format!("Email:     {email}\n"));
        }
        let width = self.links.iter().map(|l| l.label.len()).max().unwrap_or(0);
        for link in &self.links {
            out.push_str(&format!("{:<width$}  {}\n", link.label, link.href));
        }
        if let Some(availability) = &self.availability {
            out.push_str(&format!("\n{availability}\n"));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LinkConfig;

    fn config() -> ProfileConfig {
        ProfileConfig {
            email: Some("hello@example.com".to_string()),
            availability: Some("Available for new projects".to_string()),
            links: vec![
                LinkConfig {
                    label: "GitHub".to_string(),
                    href: "https://github.com/example".to_string(),
                },
                LinkConfig {
                    label: "LinkedIn".to_string(),
                    href: "https://www.linkedin.com/in/example".to_string(),
                },
            ],
        }
    }

    #[test]
    fn test_from_config() {
        let profile = ContactProfile::from(&config());
        assert_eq!(profile.email.as_deref(), Some("hello@example.com"));
        assert_eq!(profile.links.len(), 2);
        assert_eq!(profile.links[1].label, "LinkedIn");
    }

    #[test]
    fn test_render_empty() {
        let profile = ContactProfile::from(&ProfileConfig::default());
        assert!(profile.is_empty());
        assert_eq!(profile.render(), "No contact details configured.");
    }

    #[test]
    fn test_render_aligns_links() {
        let text = ContactProfile::from(&config()).render();
        assert!(text.contains("Email:     hello@example.com"));
        assert!(text.contains("GitHub    https://github.com/example"));
        assert!(text.contains("LinkedIn  https://www.linkedin.com/in/example"));
        assert!(text.trim_end().ends_with("Available for new projects"));
    }

    #[test]
    fn test_serialize_skips_missing() {
        let json = serde_json::to_value(ContactProfile::default()).unwrap();
        assert_eq!(json, serde_json::json!({ "links": [] }));
    }
}
