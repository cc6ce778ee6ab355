use rowan::TextRange;

/// What went wrong, declared from most to least important.
///
/// Of two overlapping diagnostics only the earlier kind survives
/// [`Diagnostics::filtered`](super::Diagnostics::filtered). Rule findings come
/// last: they are meaningless over broken syntax.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DiagnosticKind {
    // unbalanced delimiters
    UnclosedBrace,
    UnclosedParen,
    UnclosedBracket,

    // something required is absent
    ExpectedExpression,
    ExpectedStatement,
    ExpectedIdentifier,
    ExpectedType,
    ExpectedPattern,
    ExpectedMember,

    // something present doesn't belong
    UnexpectedToken,
    UnrecognizedInput,

    // findings
    NonExhaustiveSwitch,
}

impl DiagnosticKind {
    pub fn default_severity(&self) -> Severity {
        match self {
            Self::NonExhaustiveSwitch => Severity::Warning,
            _ => Severity::Error,
        }
    }

    /// Stable identifier shown in brackets after the severity.
    pub fn code(&self) -> Option<&'static str> {
        match self {
            Self::NonExhaustiveSwitch => Some(crate::rule::RULE_ID),
            _ => None,
        }
    }

    /// Declaration order decides.
    pub fn suppresses(&self, other: &DiagnosticKind) -> bool {
        self < other
    }

    /// Unbalanced delimiters. They lose to a root cause starting at the same offset.
    pub fn is_structural_error(&self) -> bool {
        matches!(
            self,
            Self::UnclosedBrace | Self::UnclosedParen | Self::UnclosedBracket
        )
    }

    pub fn is_root_cause_error(&self) -> bool {
        matches!(
            self,
            Self::ExpectedExpression
                | Self::ExpectedStatement
                | Self::ExpectedIdentifier
                | Self::ExpectedType
                | Self::ExpectedPattern
                | Self::ExpectedMember
        )
    }

    /// Message when the reporter gives no detail.
    pub fn fallback_message(&self) -> &'static str {
        match self {
            Self::UnclosedBrace => "missing closing `}`",
            Self::UnclosedParen => "missing closing `)`",
            Self::UnclosedBracket => "missing closing `]`",

            Self::ExpectedExpression => "expected an expression",
            Self::ExpectedStatement => "expected a statement",
            Self::ExpectedIdentifier => "expected an identifier",
            Self::ExpectedType => "expected a type",
            Self::ExpectedPattern => "expected a pattern",
            Self::ExpectedMember => "expected a member declaration",

            Self::UnexpectedToken => "unexpected token",
            Self::UnrecognizedInput => "unrecognized input",

            Self::NonExhaustiveSwitch => "switch does not handle every enum member",
        }
    }

    /// `{}` marks where the detail goes.
    pub fn custom_message(&self) -> String {
        match self {
            Self::UnclosedBrace | Self::UnclosedParen | Self::UnclosedBracket => {
                format!("{}; {{}}", self.fallback_message())
            }
            Self::ExpectedIdentifier => "expected {}".to_string(),
            Self::UnexpectedToken => "{}".to_string(),
            _ => format!("{}: {{}}", self.fallback_message()),
        }
    }

    pub fn message(&self, msg: Option<&str>) -> String {
        match msg {
            None => self.fallback_message().to_string(),
            Some(detail) => self.custom_message().replace("{}", detail),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize)]
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

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fix {
    pub(crate) replacement: String,
    pub(crate) description: String,
}

impl Fix {
    pub fn new(replacement: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            replacement: replacement.into(),
            description: description.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelatedInfo {
    pub(crate) range: TextRange,
    pub(crate) message: String,
}

impl RelatedInfo {
    pub fn new(range: TextRange, message: impl Into<String>) -> Self {
        Self {
            range,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticMessage {
    pub(crate) kind: DiagnosticKind,
    /// The range shown to the user (underlined in output).
    pub(crate) range: TextRange,
    /// The range used for suppression logic. Defaults to `range`; the parser
    /// widens it to the innermost open delimiter.
    pub(crate) suppression_range: TextRange,
    pub(crate) message: String,
    pub(crate) fix: Option<Fix>,
    pub(crate) related: Vec<RelatedInfo>,
}

impl DiagnosticMessage {
    pub(crate) fn new(kind: DiagnosticKind, range: TextRange, message: impl Into<String>) -> Self {
        Self {
            kind,
            range,
            suppression_range: range,
            message: message.into(),
            fix: None,
            related: Vec::new(),
        }
    }

    pub(crate) fn with_default_message(kind: DiagnosticKind, range: TextRange) -> Self {
        Self::new(kind, range, kind.fallback_message())
    }

    pub fn kind(&self) -> DiagnosticKind {
        self.kind
    }

    pub fn range(&self) -> TextRange {
        self.range
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn severity(&self) -> Severity {
        self.kind.default_severity()
    }

    pub fn is_error(&self) -> bool {
        self.severity() == Severity::Error
    }

    pub fn is_warning(&self) -> bool {
        self.severity() == Severity::Warning
    }
}

impl std::fmt::Display for DiagnosticMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} at {}..{}: {}",
            self.severity(),
            u32::from(self.range.start()),
            u32::from(self.range.end()),
            self.message
        )?;
        if let Some(fix) = &self.fix {
            write!(f, " (fix: {})", fix.description)?;
        }
        for related in &self.related {
            write!(
                f,
                " (related: {} at {}..{})",
                related.message,
                u32::from(related.range.start()),
                u32::from(related.range.end())
            )?;
        }
        Ok(())
    }
}
