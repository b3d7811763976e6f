//! Pages
//!
//! Navigation targets and the shells composing sidebar, header and one data
//! component.

use leptos::prelude::*;

use dms_api::Role;

use crate::components::{
    BranchDepartmentList, BranchUserList, DocumentManagement, PageShell, SearchPanel,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Documents,
    Search,
    BranchDepartments,
    BranchUsers,
}

impl Page {
    pub const ALL: [Page; 4] = [
        Page::Documents,
        Page::Search,
        Page::BranchDepartments,
        Page::BranchUsers,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Page::Documents => "Documents",
            Page::Search => "Search",
            Page::BranchDepartments => "Branch Departments",
            Page::BranchUsers => "Branch Users",
        }
    }

    /// Branch pages are only listed for admins. The service still decides
    /// what each role may read.
    pub fn visible_to(self, role: Role) -> bool {
        match self {
            Page::Documents | Page::Search => true,
            Page::BranchDepartments | Page::BranchUsers => role != Role::User,
        }
    }
}

#[component]
pub fn DocumentsPage(page: RwSignal<Page>) -> impl IntoView {
    view! {
        <PageShell page=page>
            <DocumentManagement />
        </PageShell>
    }
}

#[component]
pub fn SearchPage(page: RwSignal<Page>) -> impl IntoView {
    view! {
        <PageShell page=page>
            <SearchPanel />
        </PageShell>
    }
}

#[component]
pub fn BranchDepartmentsPage(page: RwSignal<Page>) -> impl IntoView {
    view! {
        <PageShell page=page>
            <BranchDepartmentList />
        </PageShell>
    }
}

#[component]
pub fn BranchUsersPage(page: RwSignal<Page>) -> impl IntoView {
    view! {
        <PageShell page=page>
            <BranchUserList />
        </PageShell>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regular_users_only_see_document_pages() {
        let visible: Vec<Page> = Page::ALL
            .into_iter()
            .filter(|p| p.visible_to(Role::User))
            .collect();
        assert_eq!(visible, vec![Page::Documents, Page::Search]);
    }

    #[test]
    fn admins_see_every_page() {
        for role in [Role::Admin, Role::BranchAdmin] {
            assert!(Page::ALL.iter().all(|p| p.visible_to(role)));
        }
        assert_eq!(Page::default(), Page::Documents);
        assert_eq!(Page::BranchUsers.label(), "Branch Users");
    }
}
