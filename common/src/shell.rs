//! Root application shell.
//!
//! Owns the navigation stack and notifies the hosting environment exactly
//! once that the app is ready. The entry point calls [`RootShell::on_ready`]
//! explicitly after its first frame; there is no global flag to poll.

use crate::routes::{NavigationStack, Route, StackFull, Transition};

/// Hosting environment that wants a one-time readiness notification.
pub trait Host {
    fn framework_ready(&mut self);
}

/// Result of a navigation action, used to drive the screen transition.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Navigation {
    pub from: Route,
    pub to: Route,
    pub transition: Transition,
}

/// Top-level shell: navigation stack plus readiness tracking.
#[derive(Debug)]
pub struct RootShell {
    stack: NavigationStack,
    ready: bool,
}

impl RootShell {
    /// Shell starting on the dashboard.
    pub fn new() -> Self {
        Self {
            stack: NavigationStack::new(Route::Dashboard),
            ready: false,
        }
    }

    /// Notify `host` that the shell is up.
    ///
    /// Returns `true` the first time; later calls do nothing.
    pub fn on_ready<H>(
        &mut self,
        host: &mut H,
    ) -> bool
    where
        H: Host + ?Sized,
    {
        if self.ready {
            return false;
        }
        self.ready = true;
        host.framework_ready();
        true
    }

    #[inline]
    pub const fn is_ready(&self) -> bool {
        self.ready
    }

    #[inline]
    pub fn route(&self) -> Route {
        self.stack.current()
    }

    #[inline]
    pub const fn stack(&self) -> &NavigationStack {
        &self.stack
    }

    /// Redirect to the login screen, dropping app history.
    pub fn logout(&mut self) -> Navigation {
        self.replace(Route::Login)
    }

    /// Enter the app group from the login screen.
    pub fn sign_in(&mut self) -> Navigation {
        self.replace(Route::Dashboard)
    }

    /// Push the log viewer on top of the dashboard.
    pub fn open_logs(&mut self) -> Result<Navigation, StackFull> {
        let from = self.route();
        self.stack.push(Route::Logs)?;
        Ok(Navigation {
            from,
            to: Route::Logs,
            transition: Route::Logs.transition(),
        })
    }

    /// Go back one screen. `None` when already at the root.
    pub fn back(&mut self) -> Option<Navigation> {
        let from = self.stack.pop()?;
        let to = self.route();
        Some(Navigation {
            from,
            to,
            transition: to.transition(),
        })
    }

    fn replace(
        &mut self,
        to: Route,
    ) -> Navigation {
        let from = self.route();
        self.stack.replace(to);
        Navigation {
            from,
            to,
            transition: to.transition(),
        }
    }
}

impl Default for RootShell {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct CountingHost {
        calls: u32,
    }

    impl Host for CountingHost {
        fn framework_ready(&mut self) {
            self.calls += 1;
        }
    }

    #[test]
    fn test_shell_starts_on_dashboard() {
        let shell = RootShell::new();
        assert_eq!(shell.route(), Route::Dashboard);
        assert!(!shell.is_ready());
    }

    #[test]
    fn test_ready_fires_once() {
        let mut shell = RootShell::new();
        let mut host = CountingHost::default();

        assert!(shell.on_ready(&mut host));
        assert!(!shell.on_ready(&mut host));
        assert!(!shell.on_ready(&mut host));

        assert_eq!(host.calls, 1);
        assert!(shell.is_ready());
    }

    #[test]
    fn test_logout_redirects_to_login() {
        let mut shell = RootShell::new();
        shell.open_logs().unwrap();

        let nav = shell.logout();
        assert_eq!(nav.from, Route::Logs);
        assert_eq!(nav.to, Route::Login);
        assert_eq!(nav.transition, Transition::Fade);
        assert_eq!(shell.route(), Route::Login);
        assert_eq!(shell.stack().depth(), 1);
    }

    #[test]
    fn test_sign_in_returns_to_dashboard() {
        let mut shell = RootShell::new();
        shell.logout();

        let nav = shell.sign_in();
        assert_eq!(nav.to, Route::Dashboard);
        assert_eq!(nav.transition, Transition::SlideFromRight);
        assert_eq!(shell.route(), Route::Dashboard);
    }

    #[test]
    fn test_logs_and_back() {
        let mut shell = RootShell::new();
        let nav = shell.open_logs().unwrap();
        assert_eq!(nav.from, Route::Dashboard);
        assert_eq!(shell.route(), Route::Logs);

        let nav = shell.back().unwrap();
        assert_eq!(nav.from, Route::Logs);
        assert_eq!(nav.to, Route::Dashboard);
        assert!(shell.back().is_none());
    }
}
