//! Route navigation seam

/// Route shown once a user is authenticated.
pub const AUTHENTICATED_LANDING_ROUTE: &str = "/app";

/// Route of the registration page.
pub const REGISTER_ROUTE: &str = "/app/register";

/// Route of the login page.
pub const LOGIN_ROUTE: &str = "/app/login";

/// Moves the visible route.
pub trait Navigator {
    fn go_to(&self, route: &str);
}

impl<F> Navigator for F
where
    F: Fn(&str),
{
    fn go_to(&self, route: &str) {
        self(route)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn test_closure_is_a_navigator() {
        let visited = RefCell::new(Vec::new());
        let navigator = |route: &str| visited.borrow_mut().push(route.to_string());

        navigator.go_to(AUTHENTICATED_LANDING_ROUTE);

        assert_eq!(visited.into_inner(), vec!["/app".to_string()]);
    }

    #[test]
    fn test_routes_share_app_prefix() {
        assert!(REGISTER_ROUTE.starts_with(AUTHENTICATED_LANDING_ROUTE));
        assert!(LOGIN_ROUTE.starts_with(AUTHENTICATED_LANDING_ROUTE));
    }
}
