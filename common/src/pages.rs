//! Page navigation for the host.
//!
//! - [`Page::Watchface`]: The three sliding rows
//! - [`Page::Debug`]: Profiling counters and the event log

/// Pages the host can show.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum Page {
    #[default]
    Watchface,
    Debug,
}

impl Page {
    /// Toggle to the other page.
    #[inline]
    pub const fn toggle(self) -> Self {
        match self {
            Self::Watchface => Self::Debug,
            Self::Debug => Self::Watchface,
        }
    }

    /// Log label for switching to this page.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Watchface => "Page: Watchface",
            Self::Debug => "Page: Debug",
        }
    }
}
