use serde::Serialize;
use thiserror::Error;

/// The five pipeline stages, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    ListArticles,
    ExtractName,
    SearchPlace,
    GetDetails,
    Publish,
}

impl Stage {
    pub fn as_str(self) -> &'static str {
        match self {
            Stage::ListArticles => "list_articles",
            Stage::ExtractName => "extract_name",
            Stage::SearchPlace => "search_place",
            Stage::GetDetails => "get_details",
            Stage::Publish => "publish",
        }
    }

    /// Fixed message reported to the invoker when this stage fails.
    pub fn failure_message(self) -> &'static str {
        match self {
            Stage::ListArticles => "no restaurants found",
            Stage::ExtractName => "no restaurant name found",
            Stage::SearchPlace => "cannot find place on google",
            Stage::GetDetails => "cannot find restaurant details on google",
            Stage::Publish => "cannot send sns notification",
        }
    }
}

/// A stage failure. `subject` is the value the stage was working on
/// (URL, restaurant name, place id or topic).
#[derive(Debug, Error)]
pub enum StageError {
    /// The stage ran but found nothing to hand to the next one.
    #[error("{}", .stage.failure_message())]
    Missing { stage: Stage, subject: String },

    /// Transport, HTTP status, JSON or delivery error.
    #[error("{}", .stage.failure_message())]
    Failed {
        stage: Stage,
        subject: String,
        #[source]
        source: anyhow::Error,
    },
}

impl StageError {
    pub fn missing(stage: Stage, subject: impl Into<String>) -> Self {
        StageError::Missing {
            stage,
            subject: subject.into(),
        }
    }

    pub fn failed(stage: Stage, subject: impl Into<String>, source: anyhow::Error) -> Self {
        StageError::Failed {
            stage,
            subject: subject.into(),
            source,
        }
    }

    pub fn stage(&self) -> Stage {
        match self {
            StageError::Missing { stage, .. } | StageError::Failed { stage, .. } => *stage,
        }
    }

    pub fn subject(&self) -> &str {
        match self {
            StageError::Missing { subject, .. } | StageError::Failed { subject, .. } => subject,
        }
    }

    /// Log-oriented description that names the intermediate value.
    pub fn diagnostic(&self) -> String {
        let subject = self.subject();
        match self.stage() {
            Stage::ListArticles => format!("cannot parse restaurant urls from {}", subject),
            Stage::ExtractName => format!("cannot parse restaurant name from {}", subject),
            Stage::SearchPlace => format!("cannot find place \"{}\" on google", subject),
            Stage::GetDetails => format!("cannot find details for place \"{}\" on google", subject),
            Stage::Publish => format!("cannot send sns notification to {}", subject),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn display_is_stage_message() {
        let err = StageError::missing(Stage::SearchPlace, "Leonti");
        assert_eq!(err.to_string(), "cannot find place on google");
        assert_eq!(err.diagnostic(), "cannot find place \"Leonti\" on google");
        assert!(err.source().is_none());
    }

    #[test]
    fn failed_keeps_source() {
        let err = StageError::failed(
            Stage::Publish,
            "arn:aws:sns:us-east-1:123456789012:tft",
            anyhow::anyhow!("connection reset"),
        );
        assert_eq!(err.stage(), Stage::Publish);
        assert_eq!(err.to_string(), "cannot send sns notification");
        assert_eq!(err.source().unwrap().to_string(), "connection reset");
    }
}
