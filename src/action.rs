use crate::error::{LinkbirdError, Result};
use crate::session::AuthMethod;
use crate::types::{Batch, Campaign, Identity, Lead};

/// Sidebar entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Overview,
    Leads,
    Campaigns,
    Messages,
    Analytics,
    Settings,
}

impl Screen {
    pub const ALL: [Screen; 6] = [
        Screen::Overview,
        Screen::Leads,
        Screen::Campaigns,
        Screen::Messages,
        Screen::Analytics,
        Screen::Settings,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Screen::Overview => "Overview",
            Screen::Leads => "Leads",
            Screen::Campaigns => "Campaigns",
            Screen::Messages => "Messages",
            Screen::Analytics => "Analytics",
            Screen::Settings => "Settings",
        }
    }

    pub fn next(&self) -> Screen {
        let i = Self::ALL.iter().position(|s| s == self).unwrap_or(0);
        Self::ALL[(i + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> Screen {
        let i = Self::ALL.iter().position(|s| s == self).unwrap_or(0);
        Self::ALL[(i + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

#[derive(Debug)]
pub enum Action {
    Start,
    Quit,
    Back,
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    GoToTop,
    GoToBottom,
    Select,

    // Navigation
    NextScreen,
    PrevScreen,
    SwitchScreen(Screen),

    // Paging, tagged with the load id they answer
    LeadsLoaded(Result<Batch<Lead>>, u64),
    CampaignsLoaded(Result<Batch<Campaign>>, u64),
    RetryLoad,

    // Search
    EnterSearchMode,
    ExitSearchMode,
    SearchInput(char),
    SearchBackspace,
    ClearSearch,

    // Lead detail
    OpenProfile,
    YankEmail,

    // Sign-in
    ShowSignIn,
    HideSignIn,
    SignInInput(char),
    SignInBackspace,
    SignInNextField,
    SignInPrevField,
    SignInToggleMode,
    SubmitSignIn,
    SignInFinished(Result<Identity>, AuthMethod),
    SignOut,

    Error(String),
    None,
}

impl From<LinkbirdError> for Action {
    fn from(err: LinkbirdError) -> Self {
        Action::Error(err.to_string())
    }
}
