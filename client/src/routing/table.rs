//! Static route table.
//!
//! Four entries, fixed at compile time: the root redirect, the public login
//! page, and the two authenticated views. The chat route carries a
//! `group_id` parameter that is passed through to the page as a prop.

#[cfg(test)]
#[path = "table_test.rs"]
mod tests;

/// Path of the login view.
pub const LOGIN_PATH: &str = "/login";

/// Path of the group-list view.
pub const GROUPS_PATH: &str = "/groups";

/// Path pattern of the chat view.
pub const CHAT_PATH: &str = "/chat/:group_id";

/// A single entry in the route table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteDescriptor {
    /// Path pattern the entry matches.
    pub path: &'static str,
    /// Display name of the target view.
    pub name: &'static str,
    /// Whether navigation requires a stored credential.
    pub requires_auth: bool,
    /// Whether path parameters are passed to the view as props.
    pub pass_params: bool,
    /// Static redirect target, applied before the guard runs.
    pub redirect_to: Option<&'static str>,
}

/// The route table. Never mutates at runtime.
pub const ROUTES: [RouteDescriptor; 4] = [
    RouteDescriptor {
        path: "/",
        name: "Root",
        requires_auth: false,
        pass_params: false,
        redirect_to: Some(LOGIN_PATH),
    },
    RouteDescriptor {
        path: LOGIN_PATH,
        name: "Login",
        requires_auth: false,
        pass_params: false,
        redirect_to: None,
    },
    RouteDescriptor {
        path: GROUPS_PATH,
        name: "Groups",
        requires_auth: true,
        pass_params: false,
        redirect_to: None,
    },
    RouteDescriptor {
        path: CHAT_PATH,
        name: "Chat",
        requires_auth: true,
        pass_params: true,
        redirect_to: None,
    },
];

/// Look up the route descriptor matching a concrete path.
///
/// Parameterized entries match on their static prefix, so `/chat/42` resolves
/// to the `/chat/:group_id` descriptor. Unknown paths return `None`.
#[must_use]
pub fn descriptor_for(path: &str) -> Option<&'static RouteDescriptor> {
    ROUTES.iter().find(|route| matches_path(route.path, path))
}

/// Whether navigating to `path` requires a stored credential.
/// Unknown paths are treated as public.
#[must_use]
pub fn requires_auth(path: &str) -> bool {
    descriptor_for(path).is_some_and(|route| route.requires_auth)
}

/// Static redirect target for `path`, if the table declares one.
#[must_use]
pub fn static_redirect(path: &str) -> Option<&'static str> {
    descriptor_for(path).and_then(|route| route.redirect_to)
}

fn matches_path(pattern: &str, path: &str) -> bool {
    match pattern.split_once("/:") {
        Some((prefix, _param)) => {
            path.strip_prefix(prefix)
                .and_then(|rest| rest.strip_prefix('/'))
                .is_some_and(|param| !param.is_empty() && !param.contains('/'))
        }
        None => pattern == path,
    }
}

/// Concrete chat path for a group.
#[must_use]
pub fn chat_path(group_id: &str) -> String {
    format!("/chat/{group_id}")
}
