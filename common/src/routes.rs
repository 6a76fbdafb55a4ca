//! Route table and navigation stack.
//!
//! Two route groups mirror the app's top-level stacks:
//!
//! - **auth**: [`Route::Login`], entered with a fade
//! - **app**: [`Route::Dashboard`] and the [`Route::Logs`] viewer, entered by
//!   sliding in from the right
//!
//! The stack is bounded (`heapless::Vec`), so pushing past
//! [`STACK_DEPTH`] is rejected instead of allocating.

use heapless::Vec;

/// Maximum number of routes on the navigation stack.
pub const STACK_DEPTH: usize = 8;

/// Top-level route group.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum RouteGroup {
    Auth,
    App,
}

impl RouteGroup {
    /// Transition used when a route of this group is shown.
    pub const fn transition(self) -> Transition {
        match self {
            Self::Auth => Transition::Fade,
            Self::App => Transition::SlideFromRight,
        }
    }
}

/// Screen transition animation.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Transition {
    Fade,
    SlideFromRight,
}

/// Navigable screens.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum Route {
    Login,
    /// Fleet dashboard: header, map, speedometer, stats.
    #[default]
    Dashboard,
    /// On-screen log viewer.
    Logs,
}

impl Route {
    pub const fn group(self) -> RouteGroup {
        match self {
            Self::Login => RouteGroup::Auth,
            Self::Dashboard | Self::Logs => RouteGroup::App,
        }
    }

    pub const fn path(self) -> &'static str {
        match self {
            Self::Login => "/(auth)/login",
            Self::Dashboard => "/(app)",
            Self::Logs => "/(app)/logs",
        }
    }

    #[inline]
    pub const fn transition(self) -> Transition {
        self.group().transition()
    }
}

/// Stack rejected a push because it is full.
#[derive(Clone, Copy, PartialEq, Eq, Debug, thiserror::Error)]
#[error("navigation stack is full ({STACK_DEPTH} routes)")]
pub struct StackFull;

/// Bounded navigation stack. Never empty.
#[derive(Clone, Debug)]
pub struct NavigationStack {
    routes: Vec<Route, STACK_DEPTH>,
}

impl NavigationStack {
    /// Stack holding only `root`.
    pub fn new(root: Route) -> Self {
        let mut routes = Vec::new();
        // Capacity is at least one
        let _ = routes.push(root);
        Self { routes }
    }

    /// Route on top of the stack.
    pub fn current(&self) -> Route {
        self.routes.last().copied().unwrap_or_default()
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.routes.len()
    }

    pub fn push(
        &mut self,
        route: Route,
    ) -> Result<(), StackFull> {
        self.routes.push(route).map_err(|_| StackFull)
    }

    /// Pop the top route. The root is never popped.
    pub fn pop(&mut self) -> Option<Route> {
        if self.routes.len() > 1 { self.routes.pop() } else { None }
    }

    /// Drop all history and show `route`.
    pub fn replace(
        &mut self,
        route: Route,
    ) {
        self.routes.clear();
        let _ = self.routes.push(route);
    }
}

impl Default for NavigationStack {
    fn default() -> Self {
        Self::new(Route::default())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_groups() {
        assert_eq!(Route::Login.group(), RouteGroup::Auth);
        assert_eq!(Route::Dashboard.group(), RouteGroup::App);
        assert_eq!(Route::Logs.group(), RouteGroup::App);
    }

    #[test]
    fn test_route_transitions() {
        assert_eq!(Route::Login.transition(), Transition::Fade);
        assert_eq!(Route::Dashboard.transition(), Transition::SlideFromRight);
    }

    #[test]
    fn test_route_paths() {
        assert_eq!(Route::Login.path(), "/(auth)/login");
    }

    #[test]
    fn test_stack_push_pop() {
        let mut stack = NavigationStack::new(Route::Dashboard);
        stack.push(Route::Logs).unwrap();
        assert_eq!(stack.current(), Route::Logs);
        assert_eq!(stack.depth(), 2);

        assert_eq!(stack.pop(), Some(Route::Logs));
        assert_eq!(stack.current(), Route::Dashboard);
    }

    #[test]
    fn test_stack_never_pops_root() {
        let mut stack = NavigationStack::default();
        assert_eq!(stack.pop(), None);
        assert_eq!(stack.current(), Route::Dashboard);
        assert_eq!(stack.depth(), 1);
    }

    #[test]
    fn test_stack_replace_clears_history() {
        let mut stack = NavigationStack::new(Route::Dashboard);
        stack.push(Route::Logs).unwrap();
        stack.replace(Route::Login);
        assert_eq!(stack.current(), Route::Login);
        assert_eq!(stack.depth(), 1);
        assert_eq!(stack.pop(), None);
    }

    #[test]
    fn test_stack_full() {
        let mut stack = NavigationStack::new(Route::Dashboard);
        for _ in 1..STACK_DEPTH {
            stack.push(Route::Logs).unwrap();
        }
        assert_eq!(stack.push(Route::Logs), Err(StackFull));
        assert_eq!(stack.depth(), STACK_DEPTH);
    }
}
