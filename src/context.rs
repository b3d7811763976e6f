//! Application Context
//!
//! Session, API client and the signed-in employee, provided via Leptos Context API.

use dms_api::{ApiClient, Employee, Role};
use leptos::prelude::*;

use crate::session::Session;

/// App-wide values provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    session: StoredValue<Session>,
    api: StoredValue<ApiClient>,
    /// Signed-in employee, `None` until `/employee/findById` answers - read
    pub current_user: ReadSignal<Option<Employee>>,
    /// Signed-in employee - write
    set_current_user: WriteSignal<Option<Employee>>,
}

impl AppContext {
    pub fn new(
        session: Session,
        api: ApiClient,
        current_user: (ReadSignal<Option<Employee>>, WriteSignal<Option<Employee>>),
    ) -> Self {
        Self {
            session: StoredValue::new(session),
            api: StoredValue::new(api),
            current_user: current_user.0,
            set_current_user: current_user.1,
        }
    }

    /// Cheap clone of the shared client for use inside `spawn_local`.
    pub fn api(&self) -> ApiClient {
        self.api.get_value()
    }

    pub fn user_id(&self) -> Option<String> {
        self.session.with_value(|s| s.user_id.clone())
    }

    pub fn employee_id(&self) -> Option<u64> {
        self.session.with_value(Session::employee_id)
    }

    pub fn set_current_user(&self, employee: Employee) {
        self.set_current_user.set(Some(employee));
    }

    /// Role of the signed-in employee; regular user until loaded.
    pub fn role(&self) -> Role {
        self.current_user
            .with(|u| u.as_ref().map(Employee::access))
            .unwrap_or_default()
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
