use elasticsearch::params::Refresh;

/// When a write becomes visible to search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RefreshPolicy {
    /// Visible after the next scheduled refresh.
    #[default]
    None,
    /// Refresh the affected shards as part of the request.
    Immediate,
    /// Block the response until a scheduled refresh has made the write visible.
    WaitUntil,
}

impl From<RefreshPolicy> for Refresh {
    fn from(policy: RefreshPolicy) -> Self {
        match policy {
            RefreshPolicy::None => Refresh::False,
            RefreshPolicy::Immediate => Refresh::True,
            RefreshPolicy::WaitUntil => Refresh::WaitFor,
        }
    }
}

impl RefreshPolicy {
    /// Value sent in the `refresh` query parameter.
    pub fn as_param(self) -> &'static str {
        match self {
            RefreshPolicy::None => "false",
            RefreshPolicy::Immediate => "true",
            RefreshPolicy::WaitUntil => "wait_for",
        }
    }
}
