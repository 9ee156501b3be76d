use crate::error::ClientError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    Dashboard,
    Requests,
    Mechanics,
    Payments,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Login => "/login",
            Route::Dashboard => "/dashboard",
            Route::Requests => "/requests",
            Route::Mechanics => "/mechanics",
            Route::Payments => "/payments",
        }
    }
}

pub fn route_after_login() -> Route {
    Route::Dashboard
}

/// Auth failures land on the login screen; everything else stays on the
/// current page and is shown as a transient message.
pub fn route_for_error(err: &ClientError) -> Option<Route> {
    if err.is_auth_failure() {
        Some(Route::Login)
    } else {
        None
    }
}
