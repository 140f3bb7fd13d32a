//! Deployment environment resolution

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use url::Url;

const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

/// Requested environment label is not in the closed set
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown environment {label:?} (expected one of: stage, qa, prod)")]
pub struct UnknownEnvironment {
    pub label: String,
}

/// Named deployment target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Stage,
    Qa,
    Prod,
}

impl Environment {
    pub const ALL: [Environment; 3] = [Environment::Stage, Environment::Qa, Environment::Prod];

    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Stage => "stage",
            Environment::Qa => "qa",
            Environment::Prod => "prod",
        }
    }

    /// Infer the environment a URL belongs to from its host.
    ///
    /// Host substring matching, "stage" checked before "qa". Hosts
    /// without a recognizable tag classify as prod; that fallback is a
    /// heuristic and can hide a misspelled stage/qa host, so callers
    /// must treat the result as diagnostic, not authoritative.
    pub fn from_url(url: &str) -> Self {
        let host = Url::parse(url)
            .ok()
            .and_then(|parsed| parsed.host_str().map(str::to_owned))
            .unwrap_or_default();

        if host.contains("stage") {
            Environment::Stage
        } else if host.contains("qa") {
            Environment::Qa
        } else {
            Environment::Prod
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Environment {
    type Err = UnknownEnvironment;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "stage" => Ok(Environment::Stage),
            "qa" => Ok(Environment::Qa),
            "prod" => Ok(Environment::Prod),
            other => Err(UnknownEnvironment {
                label: other.to_string(),
            }),
        }
    }
}

/// Base URL per environment, fixed at startup
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvironmentUrls {
    pub stage: String,
    pub qa: String,
    pub prod: String,
}

impl Default for EnvironmentUrls {
    fn default() -> Self {
        Self {
            stage: DEFAULT_BASE_URL.to_string(),
            qa: DEFAULT_BASE_URL.to_string(),
            prod: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl EnvironmentUrls {
    pub fn base_url(&self, env: Environment) -> &str {
        match env {
            Environment::Stage => &self.stage,
            Environment::Qa => &self.qa,
            Environment::Prod => &self.prod,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_label_in_the_closed_set() {
        for env in Environment::ALL {
            assert_eq!(env.as_str().parse::<Environment>().unwrap(), env);
        }
    }

    #[test]
    fn rejects_labels_outside_the_closed_set() {
        let err = "production".parse::<Environment>().unwrap_err();
        assert_eq!(err.label, "production");
        assert!(err.to_string().contains("unknown environment"));
    }

    #[test]
    fn base_urls_are_non_empty_for_every_environment() {
        let urls = EnvironmentUrls::default();
        for env in Environment::ALL {
            assert!(!urls.base_url(env).is_empty());
        }
    }

    #[test]
    fn infers_stage_from_host() {
        assert_eq!(
            Environment::from_url("http://stage.example.com/signup"),
            Environment::Stage
        );
    }

    #[test]
    fn infers_qa_from_host() {
        assert_eq!(
            Environment::from_url("https://qa.internal:8443/"),
            Environment::Qa
        );
    }

    #[test]
    fn stage_wins_when_host_carries_both_tags() {
        assert_eq!(
            Environment::from_url("http://qa-stage.example.com"),
            Environment::Stage
        );
    }

    #[test]
    fn unrecognized_host_falls_back_to_prod() {
        assert_eq!(
            Environment::from_url("http://app.example.com"),
            Environment::Prod
        );
    }

    #[test]
    fn unparsable_url_falls_back_to_prod() {
        assert_eq!(Environment::from_url("not a url"), Environment::Prod);
    }

    #[test]
    fn path_tags_do_not_affect_inference() {
        assert_eq!(
            Environment::from_url("http://app.example.com/stage/signup"),
            Environment::Prod
        );
    }
}
