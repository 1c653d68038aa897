/// Four-way classification of one block-status lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckStatus {
    Blocked,
    NotBlocked,
    InvalidResponse,
    RequestFailed,
}

impl CheckStatus {
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Blocked => "🔴",
            Self::NotBlocked => "🟢",
            Self::InvalidResponse | Self::RequestFailed => "⚠️",
        }
    }

    pub fn as_text(self) -> &'static str {
        match self {
            Self::Blocked => "Blocked",
            Self::NotBlocked => "Not Blocked",
            Self::InvalidResponse => "Invalid API response",
            Self::RequestFailed => "Request Failed",
        }
    }

    pub fn as_label(self) -> &'static str {
        match self {
            Self::Blocked => "CHECK_BLOCKED",
            Self::NotBlocked => "CHECK_NOT_BLOCKED",
            Self::InvalidResponse => "CHECK_INVALID_RESPONSE",
            Self::RequestFailed => "CHECK_REQUEST_FAILED",
        }
    }
}

/// Outcome of checking one domain: the classification plus the raw
/// diagnostic detail, when the remote call produced one. Valid only for
/// the lifetime of the report it was collected for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutcome {
    pub status: CheckStatus,
    pub detail: Option<String>,
}

impl CheckOutcome {
    pub fn clean(status: CheckStatus) -> Self {
        Self {
            status,
            detail: None,
        }
    }

    pub fn with_detail(status: CheckStatus, detail: impl Into<String>) -> Self {
        Self {
            status,
            detail: Some(detail.into()),
        }
    }
}
