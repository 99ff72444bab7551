use serde::Serialize;
use tasty_core::Span;

/// Diagnostic kinds ordered by priority (highest priority first).
///
/// Structural errors on a state key come first: they usually explain the
/// semantic warnings reported on the same key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DiagnosticKind {
    // Bracket balance of a raw state key
    UnmatchedBracket,
    MismatchedBracket,
    UnclosedBracket,

    // State-key structure
    InvalidStateSyntax,
    OwnOutsideSubElement,

    // Names unknown to the project
    UnknownStateAlias,
    UnknownColorToken,
    InvalidOpacity,
    UnknownCustomProperty,
    UnknownUnit,
    UnknownPreset,
    UnknownRecipe,
    UnknownFunction,
}

impl DiagnosticKind {
    /// Default severity for this kind. Can be overridden per report.
    pub fn default_severity(&self) -> Severity {
        match self {
            Self::UnmatchedBracket
            | Self::MismatchedBracket
            | Self::UnclosedBracket
            | Self::InvalidStateSyntax => Severity::Error,
            _ => Severity::Warning,
        }
    }

    /// Stable identifier, also used as the serialized form.
    pub fn code(&self) -> &'static str {
        match self {
            Self::UnmatchedBracket => "unmatched-bracket",
            Self::MismatchedBracket => "mismatched-bracket",
            Self::UnclosedBracket => "unclosed-bracket",
            Self::InvalidStateSyntax => "invalid-state-syntax",
            Self::OwnOutsideSubElement => "own-outside-sub-element",
            Self::UnknownStateAlias => "unknown-state-alias",
            Self::UnknownColorToken => "unknown-color-token",
            Self::InvalidOpacity => "invalid-opacity",
            Self::UnknownCustomProperty => "unknown-custom-property",
            Self::UnknownUnit => "unknown-unit",
            Self::UnknownPreset => "unknown-preset",
            Self::UnknownRecipe => "unknown-recipe",
            Self::UnknownFunction => "unknown-function",
        }
    }

    /// Whether this kind suppresses `other` on the same span.
    pub fn suppresses(&self, other: &DiagnosticKind) -> bool {
        self < other
    }

    /// Base message for this diagnostic kind, used when no custom message is provided.
    pub fn fallback_message(&self) -> &'static str {
        match self {
            Self::UnmatchedBracket => "unmatched closing bracket",
            Self::MismatchedBracket => "mismatched bracket",
            Self::UnclosedBracket => "unclosed bracket",

            Self::InvalidStateSyntax => "invalid state key syntax",
            Self::OwnOutsideSubElement => "`@own` is only valid inside a sub-element",

            Self::UnknownStateAlias => "unknown state alias",
            Self::UnknownColorToken => "unknown color token",
            Self::InvalidOpacity => "invalid opacity",
            Self::UnknownCustomProperty => "unknown custom property",
            Self::UnknownUnit => "unknown unit",
            Self::UnknownPreset => "unknown preset",
            Self::UnknownRecipe => "unknown recipe",
            Self::UnknownFunction => "unknown function",
        }
    }

    /// Template for custom messages. Contains `{}` placeholder for caller-provided detail.
    pub fn custom_message(&self) -> String {
        match self {
            Self::UnmatchedBracket => "unmatched '{}'".to_string(),
            Self::UnclosedBracket => "unclosed '{}'".to_string(),
            Self::InvalidOpacity => {
                "invalid opacity `{}`: expected an integer from 0 to 100".to_string()
            }
            Self::OwnOutsideSubElement => self.fallback_message().to_string(),

            // Names: fallback + quoted name
            Self::UnknownStateAlias
            | Self::UnknownColorToken
            | Self::UnknownCustomProperty
            | Self::UnknownUnit
            | Self::UnknownPreset
            | Self::UnknownRecipe
            | Self::UnknownFunction => format!("{} `{{}}`", self.fallback_message()),

            _ => format!("{}: {{}}", self.fallback_message()),
        }
    }

    /// Render the final message.
    ///
    /// - `None` → returns `fallback_message()`
    /// - `Some(detail)` → returns `custom_message()` with `{}` replaced by detail
    pub fn message(&self, msg: Option<&str>) -> String {
        match msg {
            None => self.fallback_message().to_string(),
            Some(detail) => self.custom_message().replace("{}", detail),
        }
    }
}

impl std::fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// One finding, positioned in host-file coordinates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    #[serde(rename = "code")]
    pub kind: DiagnosticKind,
    pub severity: Severity,
    pub range: Span,
    pub message: String,
    /// Replacement names, closest first.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<String>,
}

impl Diagnostic {
    pub fn new(kind: DiagnosticKind, range: Span, message: impl Into<String>) -> Self {
        Self {
            kind,
            severity: kind.default_severity(),
            range,
            message: message.into(),
            suggestions: Vec::new(),
        }
    }

    pub fn with_default_message(kind: DiagnosticKind, range: Span) -> Self {
        Self::new(kind, range, kind.fallback_message())
    }

    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    pub fn is_warning(&self) -> bool {
        self.severity == Severity::Warning
    }

    pub fn suggestion(&self) -> Option<&str> {
        self.suggestions.first().map(String::as_str)
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at {}: {}", self.severity, self.range, self.message)?;
        for suggestion in &self.suggestions {
            write!(f, " (hint: did you mean `{}`?)", suggestion)?;
        }
        Ok(())
    }
}
