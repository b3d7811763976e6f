//! Search Criteria and Role Scope
//!
//! Which criteria an operator may edit, and which values are pinned, follows
//! from their role. The service enforces the same rules; this only keeps the
//! form honest about them.

use dms_api::{Branch, Department, Employee, Role, SearchCriteria};

/// One editable criteria field, named after its wire key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CriteriaField {
    FileNo,
    Title,
    Subject,
    Version,
    Category,
    Branch,
    Department,
}

impl CriteriaField {
    pub fn get(self, criteria: &SearchCriteria) -> &str {
        match self {
            CriteriaField::FileNo => &criteria.file_no,
            CriteriaField::Title => &criteria.title,
            CriteriaField::Subject => &criteria.subject,
            CriteriaField::Version => &criteria.version,
            CriteriaField::Category => &criteria.category,
            CriteriaField::Branch => &criteria.branch,
            CriteriaField::Department => &criteria.department,
        }
    }

    /// Sets the field. A new branch invalidates the chosen department.
    pub fn set(self, criteria: &mut SearchCriteria, value: String) {
        match self {
            CriteriaField::FileNo => criteria.file_no = value,
            CriteriaField::Title => criteria.title = value,
            CriteriaField::Subject => criteria.subject = value,
            CriteriaField::Version => criteria.version = value,
            CriteriaField::Category => criteria.category = value,
            CriteriaField::Branch => {
                criteria.branch = value;
                criteria.department.clear();
            }
            CriteriaField::Department => criteria.department = value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchScope {
    /// Admins search any branch and department.
    All,
    /// Branch admins are pinned to their branch and pick a department.
    Branch { branch: Option<Branch> },
    /// Everyone else only sees their own branch and department.
    Own {
        branch: Option<Branch>,
        department: Option<Department>,
    },
}

impl SearchScope {
    /// Unknown users get the narrowest scope until their record loads.
    pub fn for_user(user: Option<&Employee>) -> Self {
        match user {
            Some(user) if user.access() == Role::Admin => SearchScope::All,
            Some(user) if user.access() == Role::BranchAdmin => SearchScope::Branch {
                branch: user.branch.clone(),
            },
            Some(user) => SearchScope::Own {
                branch: user.branch.clone(),
                department: user.department.clone(),
            },
            None => SearchScope::Own {
                branch: None,
                department: None,
            },
        }
    }

    pub fn branch_locked(&self) -> bool {
        !matches!(self, SearchScope::All)
    }

    /// Admins must pick a branch before a department.
    pub fn department_locked(&self, criteria: &SearchCriteria) -> bool {
        match self {
            SearchScope::All => criteria.branch.is_empty(),
            SearchScope::Branch { .. } => false,
            SearchScope::Own { .. } => true,
        }
    }

    /// Branch preselected when the form opens.
    pub fn preset_branch(&self) -> Option<u64> {
        match self {
            SearchScope::Branch { branch } => branch.as_ref().map(|b| b.id),
            _ => None,
        }
    }

    /// Branch options to list. Pinned scopes offer only their own branch,
    /// even when it is missing from the full list.
    pub fn branch_choices(&self, all: &[Branch]) -> Vec<Branch> {
        match self {
            SearchScope::All => all.to_vec(),
            SearchScope::Branch { branch } | SearchScope::Own { branch, .. } => {
                branch.iter().cloned().collect()
            }
        }
    }

    pub fn department_choices(&self, all: &[Department]) -> Vec<Department> {
        match self {
            SearchScope::Own { department, .. } => department.iter().cloned().collect(),
            _ => all.to_vec(),
        }
    }

    /// Criteria as sent to the service, with pinned values enforced.
    pub fn apply(&self, criteria: &SearchCriteria) -> SearchCriteria {
        let mut scoped = criteria.clone();
        match self {
            SearchScope::All => {}
            SearchScope::Branch { branch } => {
                if let Some(branch) = branch {
                    scoped.branch = branch.id.to_string();
                }
            }
            SearchScope::Own { branch, department } => {
                if let Some(branch) = branch {
                    scoped.branch = branch.id.to_string();
                }
                if let Some(department) = department {
                    scoped.department = department.id.to_string();
                }
            }
        }
        scoped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dms_api::NamedRef;

    fn named(id: u64, name: &str) -> NamedRef {
        NamedRef {
            id,
            name: name.to_string(),
        }
    }

    fn user(role: Role) -> Employee {
        Employee {
            id: 1,
            role: role.as_str().to_string(),
            branch: Some(named(2, "Pune")),
            department: Some(named(5, "Accounts")),
            ..Default::default()
        }
    }

    #[test]
    fn changing_branch_clears_department() {
        let mut criteria = SearchCriteria {
            branch: "2".into(),
            department: "5".into(),
            ..Default::default()
        };
        CriteriaField::Department.set(&mut criteria, "6".into());
        assert_eq!(criteria.department, "6");
        CriteriaField::Branch.set(&mut criteria, "3".into());
        assert_eq!(criteria.branch, "3");
        assert_eq!(criteria.department, "");
        CriteriaField::Title.set(&mut criteria, "policy".into());
        assert_eq!(CriteriaField::Title.get(&criteria), "policy");
    }

    #[test]
    fn admin_is_unrestricted() {
        let scope = SearchScope::for_user(Some(&user(Role::Admin)));
        assert_eq!(scope, SearchScope::All);
        assert!(!scope.branch_locked());
        assert_eq!(scope.preset_branch(), None);

        let criteria = SearchCriteria {
            branch: "9".into(),
            ..Default::default()
        };
        assert_eq!(scope.apply(&criteria), criteria);
        assert!(!scope.department_locked(&criteria));
        assert!(scope.department_locked(&SearchCriteria::default()));
    }

    #[test]
    fn branch_admin_is_pinned_to_branch() {
        let scope = SearchScope::for_user(Some(&user(Role::BranchAdmin)));
        assert!(scope.branch_locked());
        assert!(!scope.department_locked(&SearchCriteria::default()));
        assert_eq!(scope.preset_branch(), Some(2));

        let criteria = SearchCriteria {
            branch: "9".into(),
            department: "6".into(),
            ..Default::default()
        };
        let scoped = scope.apply(&criteria);
        assert_eq!(scoped.branch, "2");
        assert_eq!(scoped.department, "6");
    }

    #[test]
    fn regular_user_is_fully_pinned() {
        let scope = SearchScope::for_user(Some(&user(Role::User)));
        assert!(scope.branch_locked());
        assert!(scope.department_locked(&SearchCriteria::default()));

        let scoped = scope.apply(&SearchCriteria {
            title: "memo".into(),
            ..Default::default()
        });
        assert_eq!(scoped.branch, "2");
        assert_eq!(scoped.department, "5");
        assert_eq!(scoped.title, "memo");
    }

    #[test]
    fn pinned_scopes_offer_only_their_own_options() {
        let branches = vec![named(1, "Mumbai"), named(3, "Nagpur")];
        let departments = vec![named(6, "Legal"), named(7, "HR")];

        let admin = SearchScope::for_user(Some(&user(Role::Admin)));
        assert_eq!(admin.branch_choices(&branches), branches);
        assert_eq!(admin.department_choices(&departments), departments);

        // Pune (2) is not in the fetched list but is still offered
        let branch_admin = SearchScope::for_user(Some(&user(Role::BranchAdmin)));
        assert_eq!(branch_admin.branch_choices(&branches), vec![named(2, "Pune")]);
        assert_eq!(branch_admin.department_choices(&departments), departments);

        let own = SearchScope::for_user(Some(&user(Role::User)));
        assert_eq!(own.branch_choices(&branches), vec![named(2, "Pune")]);
        assert_eq!(own.department_choices(&departments), vec![named(5, "Accounts")]);

        let unknown = SearchScope::for_user(None);
        assert!(unknown.branch_choices(&branches).is_empty());
        assert!(unknown.department_choices(&departments).is_empty());
    }

    #[test]
    fn unknown_user_gets_locked_scope_without_pins() {
        let scope = SearchScope::for_user(None);
        assert!(scope.branch_locked());
        let criteria = SearchCriteria::default();
        assert_eq!(scope.apply(&criteria), criteria);
    }
}
