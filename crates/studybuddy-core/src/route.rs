//! Screen routes and the navigation collaborator.

/// A screen the application can show.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Route {
    /// Sign-in screen at `/`.
    #[default]
    Home,
    /// Account creation at `/signup`.
    Signup,
    /// Certification dashboard at `/dashboard`.
    Dashboard,
    /// Any path without a screen; keeps the requested path for display.
    NotFound(String),
}

impl Route {
    /// Resolves a path to a route. A missing leading slash is tolerated
    /// (`"dashboard"` resolves like `"/dashboard"`), as is a trailing one.
    pub fn parse(path: &str) -> Self {
        let trimmed = path.trim();
        let normalized = trimmed.trim_start_matches('/').trim_end_matches('/');
        match normalized {
            "" => Self::Home,
            "signup" => Self::Signup,
            "dashboard" => Self::Dashboard,
            _ => Self::NotFound(trimmed.to_string()),
        }
    }

    /// The canonical path for this route.
    pub fn path(&self) -> &str {
        match self {
            Self::Home => "/",
            Self::Signup => "/signup",
            Self::Dashboard => "/dashboard",
            Self::NotFound(path) => path,
        }
    }

    /// Title shown in the screen border.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Home => "Sign in",
            Self::Signup => "Sign up",
            Self::Dashboard => "Dashboard",
            Self::NotFound(_) => "404 - Page Not Found",
        }
    }
}

/// Receives route changes requested by the account flows.
///
/// Fire-and-forget: the flows never observe anything beyond the call.
pub trait Navigator {
    fn navigate_to(&mut self, route: Route);
}

/// Records every navigation, newest last. Useful where no real view exists.
#[derive(Debug, Clone, Default)]
pub struct RecordingNavigator {
    visited: Vec<Route>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visited(&self) -> &[Route] {
        &self.visited
    }

    pub fn current(&self) -> Option<&Route> {
        self.visited.last()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate_to(&mut self, route: Route) {
        tracing::debug!("navigate_to {}", route.path());
        self.visited.push(route);
    }
}
