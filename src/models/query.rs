/// Current values of the user-facing inputs.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Controls {
    pub path: String,
    pub depth: String,
    pub show_hidden: bool,
}

impl Default for Controls {
    fn default() -> Self {
        Self {
            path: String::new(),
            depth: "3".to_owned(),
            show_hidden: false,
        }
    }
}

/// A request for one tree listing.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TreeQuery {
    pub path: String,
    pub depth: String,
    pub show_hidden: bool,
}

impl TreeQuery {
    pub const HOME: &'static str = "~";

    pub fn from_controls(controls: &Controls) -> Self {
        let trimmed = controls.path.trim();
        let path = if trimmed.is_empty() {
            Self::HOME
        } else {
            trimmed
        };

        Self {
            path: path.to_owned(),
            depth: controls.depth.clone(),
            show_hidden: controls.show_hidden,
        }
    }

    /// Full endpoint URL for this query against `base_url`.
    pub fn url(&self, base_url: &str) -> String {
        format!(
            "{}/api/tree?path={}&depth={}&hidden={}",
            base_url.trim_end_matches('/'),
            urlencoding::encode(&self.path),
            urlencoding::encode(&self.depth),
            if self.show_hidden { "true" } else { "false" },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controls(path: &str, depth: &str, show_hidden: bool) -> Controls {
        Controls {
            path: path.to_owned(),
            depth: depth.to_owned(),
            show_hidden,
        }
    }

    #[test]
    fn blank_path_defaults_to_home() {
        let query = TreeQuery::from_controls(&controls("   ", "3", false));
        assert_eq!(query.path, "~");

        let query = TreeQuery::from_controls(&Controls::default());
        assert_eq!(query.path, "~");
        assert_eq!(query.depth, "3");
    }

    #[test]
    fn path_is_trimmed_and_percent_encoded() {
        let query = TreeQuery::from_controls(&controls("  /tmp/my dir&co ", "2", true));
        assert_eq!(query.path, "/tmp/my dir&co");
        assert_eq!(
            query.url("http://localhost:5000"),
            "http://localhost:5000/api/tree?path=%2Ftmp%2Fmy%20dir%26co&depth=2&hidden=true"
        );
    }

    #[test]
    fn depth_is_passed_through_unvalidated() {
        let query = TreeQuery::from_controls(&controls("~", "lots", false));
        assert_eq!(
            query.url("http://host:1/"),
            "http://host:1/api/tree?path=~&depth=lots&hidden=false"
        );
    }
}
