//! Route guard for role-gated views.

use serde::Serialize;

use crate::roles::{Capability, CapabilityCheck, IdentitySource, RoleResolver, RoleStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GuardState {
    Loading,
    Authorized,
    Unauthorized,
}

/// Navigation target used for redirects
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route(pub String);

impl Route {
    pub fn home() -> Self {
        Route("/".to_string())
    }
}

/// What the guarded view should show for the current state
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum GuardView {
    Placeholder,
    /// Replace-navigation: the guarded view is not left in history.
    Redirect { to: Route, replace: bool },
    Render { shell: bool },
}

#[derive(Debug, Clone)]
pub struct Guard {
    capability: Capability,
    with_shell: bool,
    landing: Route,
    state: GuardState,
}

impl Guard {
    pub fn new(capability: Capability) -> Self {
        Self {
            capability,
            with_shell: false,
            landing: Route::home(),
            state: GuardState::Loading,
        }
    }

    /// Wrap authorized content in the navigation shell.
    pub fn with_shell(mut self) -> Self {
        self.with_shell = true;
        self
    }

    pub fn redirect_to(mut self, landing: Route) -> Self {
        self.landing = landing;
        self
    }

    pub fn capability(&self) -> Capability {
        self.capability
    }

    pub fn state(&self) -> GuardState {
        self.state
    }

    /// Apply a resolver result. Ignored while still loading or once settled.
    pub fn settle(&mut self, check: CapabilityCheck) -> GuardState {
        if self.state != GuardState::Loading || check.loading {
            return self.state;
        }

        self.state = if check.flag {
            GuardState::Authorized
        } else {
            GuardState::Unauthorized
        };
        tracing::debug!(capability = self.capability.as_str(), state = ?self.state, "guard settled");
        self.state
    }

    /// Back to `Loading`, as on a fresh mount or identity change.
    pub fn remount(&mut self) {
        self.state = GuardState::Loading;
    }

    pub fn view(&self) -> GuardView {
        match self.state {
            GuardState::Loading => GuardView::Placeholder,
            GuardState::Unauthorized => GuardView::Redirect {
                to: self.landing.clone(),
                replace: true,
            },
            GuardState::Authorized => GuardView::Render { shell: self.with_shell },
        }
    }

    /// Resolve the capability and settle in one step.
    pub async fn check<I, S>(&mut self, resolver: &RoleResolver<'_, I, S>) -> GuardView
    where
        I: IdentitySource + ?Sized,
        S: RoleStore + ?Sized,
    {
        let check = resolver.resolve(self.capability).await;
        self.settle(check);
        self.view()
    }
}
