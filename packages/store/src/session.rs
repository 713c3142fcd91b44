//! # Session/UI store
//!
//! A single shared state tree ([`SessionState`]) mutated only through the fixed
//! operation set in [`Action`]. Every operation is a synchronous, total
//! transition applied by [`SessionState::apply`]; there is no error outcome.
//!
//! [`SessionStore`] wraps the state with an explicit subscription mechanism:
//! observers registered with [`SessionStore::subscribe`] are invoked inside the
//! same [`dispatch`](SessionStore::dispatch) call that mutated the state, so a
//! read performed after `dispatch` returns always observes the new value. The
//! store is constructed explicitly and passed by reference (or held in a
//! reactive signal by the UI layer) -- it is never a process global.

use crate::models::{Alert, AlertKind, SessionScope, SystemInfo, UserInfo};

/// The shared UI/session state tree.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    /// Whether chrome/navigation UI is shown.
    pub nav_visible: bool,
    /// Global loading indicator.
    pub loading: bool,
    /// Generic example counter, incremented by [`Action::Increment`].
    pub counter: u64,
    pub user: UserInfo,
    pub alert: Alert,
    pub system: SystemInfo,
}

impl SessionState {
    /// State at application start: navigation hidden and the loading flag
    /// raised until the first user-info fetch completes.
    pub fn new() -> Self {
        Self {
            nav_visible: false,
            loading: true,
            ..Self::default()
        }
    }

    /// Apply one named operation. Synchronous and total.
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::BeginLoading => self.loading = true,
            Action::EndLoading => self.loading = false,
            Action::SetPureMode(pure) => self.nav_visible = !pure,
            Action::SetNavVisible(visible) => self.nav_visible = visible,
            Action::Increment => self.counter += 1,
            Action::Login(scope) => {
                // Both snapshots are replaced in one transition; no partial
                // update is observable.
                self.user = scope.user;
                self.system = scope.system;
            }
            Action::Logout => {
                self.user = UserInfo::default();
                self.system = SystemInfo::default();
            }
            Action::ShowAlert {
                target,
                message,
                kind,
            } => {
                self.alert = Alert {
                    target,
                    message,
                    kind,
                    visible: true,
                };
            }
            Action::DismissAlert => self.alert.visible = false,
        }
    }
}

/// The fixed set of named operations on [`SessionState`].
#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    BeginLoading,
    EndLoading,
    /// Pure mode hides the navigation chrome: `nav_visible = !pure`.
    SetPureMode(bool),
    SetNavVisible(bool),
    Increment,
    /// Replace `user` and `system` wholesale with fresh session data.
    Login(SessionScope),
    /// Reset `user` and `system` to their logged-out defaults.
    Logout,
    ShowAlert {
        target: String,
        message: String,
        kind: AlertKind,
    },
    DismissAlert,
}

/// Handle returned by [`SessionStore::subscribe`], used to unsubscribe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn FnMut(&SessionState)>;

/// [`SessionState`] plus synchronous observers.
pub struct SessionStore {
    state: SessionState,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_id: u64,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            state: SessionState::new(),
            subscribers: Vec::new(),
            next_id: 0,
        }
    }

    /// Read access to the current state.
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Register an observer called synchronously after every mutation.
    pub fn subscribe(&mut self, observer: impl FnMut(&SessionState) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, Box::new(observer)));
        id
    }

    /// Remove a previously registered observer. Unknown ids are ignored.
    pub fn unsubscribe(&mut self, id: SubscriptionId) {
        self.subscribers.retain(|(sid, _)| *sid != id);
    }

    /// Apply an operation and notify all subscribers before returning.
    pub fn dispatch(&mut self, action: Action) {
        tracing::trace!(?action, "session dispatch");
        self.state.apply(action);
        for (_, observer) in &mut self.subscribers {
            observer(&self.state);
        }
    }

    pub fn begin_loading(&mut self) {
        self.dispatch(Action::BeginLoading);
    }

    pub fn end_loading(&mut self) {
        self.dispatch(Action::EndLoading);
    }

    pub fn set_pure_mode(&mut self, pure: bool) {
        self.dispatch(Action::SetPureMode(pure));
    }

    pub fn set_nav_visible(&mut self, visible: bool) {
        self.dispatch(Action::SetNavVisible(visible));
    }

    pub fn increment(&mut self) {
        self.dispatch(Action::Increment);
    }

    pub fn login(&mut self, scope: SessionScope) {
        self.dispatch(Action::Login(scope));
    }

    pub fn logout(&mut self) {
        self.dispatch(Action::Logout);
    }

    pub fn show_alert(
        &mut self,
        target: impl Into<String>,
        message: impl Into<String>,
        kind: AlertKind,
    ) {
        self.dispatch(Action::ShowAlert {
            target: target.into(),
            message: message.into(),
            kind,
        });
    }

    pub fn dismiss_alert(&mut self) {
        self.dispatch(Action::DismissAlert);
    }
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("state", &self.state)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::BTreeMap;
    use std::rc::Rc;

    fn sample_scope() -> SessionScope {
        SessionScope {
            user: UserInfo {
                is_admin: false,
                is_login: true,
                nickname: "alice".into(),
                kindle_email: "alice@kindle.com".into(),
                avatar: "https://example.com/a.png".into(),
            },
            system: SystemInfo {
                socials: vec!["https://github.com/talebook".into()],
                allow: BTreeMap::from([("register".into(), true)]),
            },
        }
    }

    #[test]
    fn initial_state_hides_nav_and_raises_loading() {
        let store = SessionStore::new();
        assert!(!store.state().nav_visible);
        assert!(store.state().loading);
        assert_eq!(store.state().counter, 0);
        assert!(!store.state().user.is_login);
    }

    #[test]
    fn loading_flags() {
        let mut store = SessionStore::new();
        store.end_loading();
        assert!(!store.state().loading);
        store.begin_loading();
        assert!(store.state().loading);
    }

    #[test]
    fn pure_mode_inverts_nav_visibility() {
        let mut store = SessionStore::new();
        store.set_pure_mode(false);
        assert!(store.state().nav_visible);
        store.set_pure_mode(true);
        assert!(!store.state().nav_visible);
        store.set_nav_visible(true);
        assert!(store.state().nav_visible);
    }

    #[test]
    fn increment_n_times_adds_n() {
        let mut store = SessionStore::new();
        for _ in 0..5 {
            store.increment();
        }
        assert_eq!(store.state().counter, 5);
    }

    #[test]
    fn login_replaces_user_and_system_wholesale() {
        let mut store = SessionStore::new();
        store.login(sample_scope());
        assert!(store.state().user.is_login);
        assert_eq!(store.state().user.nickname, "alice");
        assert!(store.state().system.allows("register"));

        // A later login with an empty scope must not merge with the old one.
        store.login(SessionScope::default());
        assert!(!store.state().user.is_login);
        assert!(store.state().user.nickname.is_empty());
        assert!(store.state().system.socials.is_empty());
    }

    #[test]
    fn logout_restores_defaults() {
        let mut store = SessionStore::new();
        store.login(sample_scope());
        store.logout();
        assert_eq!(store.state().user, UserInfo::default());
        assert_eq!(store.state().system, SystemInfo::default());
    }

    #[test]
    fn dismissed_alert_keeps_its_fields() {
        let mut store = SessionStore::new();
        store.show_alert("/x", "m", AlertKind::Error);
        assert!(store.state().alert.visible);
        assert_eq!(store.state().alert.kind, AlertKind::Error);

        store.dismiss_alert();
        let alert = &store.state().alert;
        assert!(!alert.visible);
        assert_eq!(alert.target, "/x");
        assert_eq!(alert.message, "m");

        // The next alert overwrites everything.
        store.show_alert("/y", "other", AlertKind::Info);
        let alert = &store.state().alert;
        assert!(alert.visible);
        assert_eq!(alert.target, "/y");
        assert_eq!(alert.kind, AlertKind::Info);
    }

    #[test]
    fn subscribers_observe_mutations_synchronously() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);

        let mut store = SessionStore::new();
        let id = store.subscribe(move |state| sink.borrow_mut().push(state.counter));

        store.increment();
        store.increment();
        // Both notifications happened inside the dispatch calls above.
        assert_eq!(*seen.borrow(), vec![1, 2]);

        store.unsubscribe(id);
        store.increment();
        assert_eq!(*seen.borrow(), vec![1, 2]);
        assert_eq!(store.state().counter, 3);
    }

    #[test]
    fn unsubscribe_unknown_id_is_ignored() {
        let mut store = SessionStore::new();
        let id = store.subscribe(|_| {});
        store.unsubscribe(id);
        store.unsubscribe(id);
        store.increment();
    }
}
