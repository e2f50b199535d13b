pub const AUTHOR: &str = "Hanoj Budime";
pub const FIRST_YEAR: i32 = 2025;

pub struct Tool {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub url: &'static str,
}

pub const TOOLS: [Tool; 3] = [
    Tool {
        icon: "🔐",
        title: "Encoder/Decoder",
        description: "Encode and decode text using various formats including URL, Base64, HTML entities, and more.",
        url: "https://hanoj-budime.github.io/react-encoder-decoder-editor/",
    },
    Tool {
        icon: "📋",
        title: "JSON Viewer & Editor",
        description: "View, format, validate, and edit JSON data with syntax highlighting and collapsible tree view.",
        url: "https://hanoj-budime.github.io/react-json-viewer-editor/",
    },
    Tool {
        icon: "🪪",
        title: "Cognito Hosted UI Editor ( Preview )",
        description: "Visually edit and generate AWS Cognito Hosted UI OAuth/OIDC URLs with support for response types, scopes, redirect URIs, and identity providers.",
        url: "https://hanoj-budime.github.io/react-cognito-hosted-ui-editor/",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Social {
    ReportIssue,
    LinkedIn,
    GitHub,
}

pub struct SocialLink {
    pub kind: Social,
    pub glyph: &'static str,
    pub url: &'static str,
}

pub const SOCIAL_LINKS: [SocialLink; 3] = [
    SocialLink {
        kind: Social::ReportIssue,
        glyph: "🐛",
        url: "https://github.com/hanoj-budime/react-dev-tools/issues",
    },
    SocialLink {
        kind: Social::LinkedIn,
        glyph: "in",
        url: "https://www.linkedin.com/in/hanoj-budime",
    },
    SocialLink {
        kind: Social::GitHub,
        // GitHub mark from egui's bundled icon font.
        glyph: "\u{e624}",
        url: "https://github.com/hanoj-budime",
    },
];

/// "2025-2026" style span, always open-ended from the first year.
pub fn copyright_years(current_year: i32) -> String {
    format!("{}-{}", FIRST_YEAR, current_year)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tools_link_to_https_pages() {
        for tool in &TOOLS {
            assert!(tool.url.starts_with("https://"), "{}", tool.title);
            assert!(!tool.description.is_empty());
        }
    }

    #[test]
    fn every_social_link_has_a_glyph() {
        for link in &SOCIAL_LINKS {
            assert!(!link.glyph.is_empty(), "{:?}", link.kind);
        }
    }

    #[test]
    fn copyright_spans_from_first_year() {
        assert_eq!(copyright_years(2025), "2025-2025");
        assert_eq!(copyright_years(2026), "2025-2026");
    }
}
