//! Sprinklr deployment environments.
//!
//! Sprinklr serves every environment from one host (`api2.sprinklr.com`)
//! and distinguishes them with a leading path segment: production uses no
//! segment, the others use `prod0/`, `prod2/`, or `sandbox/`.

/// The default Sprinklr API host.
pub const DEFAULT_API_HOST: &str = "https://api2.sprinklr.com";

/// A Sprinklr deployment environment.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Environment {
    /// Production, no path segment.
    #[default]
    Production,
    /// The `prod0` deployment.
    Prod0,
    /// The `prod2` deployment.
    Prod2,
    /// The sandbox deployment.
    Sandbox,
    /// Any other deployment path segment, normalized to end with `/`.
    Custom(String),
}

impl Environment {
    /// Parse an environment from its path segment.
    ///
    /// Empty input or `None`-like input maps to production; anything else
    /// is carried through as a custom segment, trailing slash or not.
    pub fn from_path(path: &str) -> Self {
        match path.trim_matches('/') {
            "" => Environment::Production,
            "prod0" => Environment::Prod0,
            "prod2" => Environment::Prod2,
            "sandbox" => Environment::Sandbox,
            other => Environment::Custom(other.to_string()),
        }
    }

    /// The URL path segment for this environment, including the trailing
    /// slash, or the empty string for production.
    pub fn path_segment(&self) -> String {
        match self {
            Environment::Production => String::new(),
            Environment::Prod0 => "prod0/".to_string(),
            Environment::Prod2 => "prod2/".to_string(),
            Environment::Sandbox => "sandbox/".to_string(),
            Environment::Custom(seg) => {
                let trimmed = seg.trim_matches('/');
                if trimmed.is_empty() {
                    String::new()
                } else {
                    format!("{trimmed}/")
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn production_has_no_segment() {
        assert_eq!(Environment::Production.path_segment(), "");
        assert_eq!(Environment::from_path(""), Environment::Production);
        assert_eq!(Environment::from_path("/"), Environment::Production);
    }

    #[test]
    fn known_environments_round_trip() {
        assert_eq!(Environment::from_path("prod0"), Environment::Prod0);
        assert_eq!(Environment::Prod0.path_segment(), "prod0/");
        assert_eq!(Environment::from_path("prod2/"), Environment::Prod2);
        assert_eq!(Environment::Prod2.path_segment(), "prod2/");
        assert_eq!(Environment::from_path("sandbox"), Environment::Sandbox);
        assert_eq!(Environment::Sandbox.path_segment(), "sandbox/");
    }

    #[test]
    fn custom_segments_are_normalized() {
        let env = Environment::from_path("staging3");
        assert_eq!(env, Environment::Custom("staging3".to_string()));
        assert_eq!(env.path_segment(), "staging3/");

        assert_eq!(
            Environment::Custom("/qa/".to_string()).path_segment(),
            "qa/"
        );
    }
}
