use crate::session::interface::SessionView;
use std::fmt;

/// What a route requires of the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Public,
    Authenticated,
    ApprovedSeller,
}

/// Outcome of checking a route against the current session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allow,
    /// Start-up recovery is still running; the answer is provisional.
    Wait,
    /// No session: send the user to the login page.
    Login,
    /// Logged in, but not allowed here.
    Forbidden,
}

const AUTHENTICATED_PREFIXES: [&str; 7] = [
    "/profile",
    "/addresses",
    "/vouchers",
    "/cart",
    "/checkout",
    "/orders",
    "/seller/register",
];

const SELLER_PREFIXES: [&str; 1] = ["/seller/dashboard"];

fn matches_prefix(path: &str, prefix: &str) -> bool {
    path == prefix
        || path
            .strip_prefix(prefix)
            .is_some_and(|rest| rest.starts_with('/'))
}

/// Access level of a storefront route. Unknown paths fall back to the
/// public catalogue.
pub fn route_access(path: &str) -> Access {
    let path = path.split(['?', '#']).next().unwrap_or(path);
    if SELLER_PREFIXES.iter().any(|p| matches_prefix(path, p)) {
        Access::ApprovedSeller
    } else if AUTHENTICATED_PREFIXES.iter().any(|p| matches_prefix(path, p)) {
        Access::Authenticated
    } else {
        Access::Public
    }
}

pub fn authorize<V: SessionView + ?Sized>(view: &V, access: Access) -> Decision {
    if access == Access::Public {
        return Decision::Allow;
    }
    let Some(user) = view.user() else {
        return if view.is_loading() {
            Decision::Wait
        } else {
            Decision::Login
        };
    };
    match access {
        Access::ApprovedSeller if !user.is_approved_seller() => Decision::Forbidden,
        _ => Decision::Allow,
    }
}

/// [`route_access`] followed by [`authorize`].
pub fn authorize_path<V: SessionView + ?Sized>(view: &V, path: &str) -> Decision {
    authorize(view, route_access(path))
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Decision::Allow => write!(f, "allow"),
            Decision::Wait => write!(f, "wait"),
            Decision::Login => write!(f, "login"),
            Decision::Forbidden => write!(f, "forbidden"),
        }
    }
}
