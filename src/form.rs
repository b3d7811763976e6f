//! Document Form State
//!
//! Fields of the new/edit document form, held in a `reactive_stores` store so
//! each input only re-renders on its own field.

use reactive_stores::Store;
use thiserror::Error;

use dms_api::{Category, Document, DocumentHeaderPayload, DocumentPayload, IdRef};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Please fill in all the required fields and upload a file.")]
    Incomplete,
    #[error("Please select a category.")]
    MissingCategory,
}

#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct DocumentForm {
    pub file_no: String,
    pub title: String,
    pub subject: String,
    pub version: String,
    pub category: Option<Category>,
    /// Paths returned by the upload endpoint, saved with the header.
    pub uploaded_paths: Vec<String>,
    /// Display names of the uploaded files, index-aligned with `uploaded_paths`.
    pub uploaded_names: Vec<String>,
    /// Id of the header being edited; `None` while creating.
    pub editing: Option<u64>,
}

impl DocumentForm {
    pub fn fields_filled(&self) -> bool {
        [&self.file_no, &self.title, &self.subject, &self.version]
            .iter()
            .all(|v| !v.is_empty())
            && self.category.is_some()
    }

    /// Upload needs every field plus at least one chosen file.
    pub fn can_upload(&self, selected_files: usize) -> bool {
        self.fields_filled() && selected_files > 0
    }

    pub fn validate_for_save(&self) -> Result<(), FormError> {
        if self.fields_filled() && !self.uploaded_paths.is_empty() {
            Ok(())
        } else {
            Err(FormError::Incomplete)
        }
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    /// Category name sent along with an upload.
    pub fn upload_category(&self) -> String {
        self.category
            .as_ref()
            .map(|c| c.name.clone())
            .unwrap_or_default()
    }

    pub fn record_upload(&mut self, paths: Vec<String>, names: Vec<String>) {
        self.uploaded_paths = paths;
        self.uploaded_names = names;
    }

    /// Drops the uploaded file at `index`. Returns `false` when out of range.
    pub fn discard_file(&mut self, index: usize) -> bool {
        if index >= self.uploaded_names.len() {
            return false;
        }
        self.uploaded_names.remove(index);
        if index < self.uploaded_paths.len() {
            self.uploaded_paths.remove(index);
        }
        true
    }

    pub fn discard_all(&mut self) {
        self.uploaded_names.clear();
        self.uploaded_paths.clear();
    }

    /// Loads a listed header for editing.
    pub fn load_document(&mut self, doc: &Document) {
        *self = Self {
            file_no: doc.file_no.clone(),
            title: doc.title.clone(),
            subject: doc.subject.clone(),
            version: doc.version.clone(),
            category: doc.category_master.clone(),
            uploaded_paths: doc.file_paths.clone(),
            uploaded_names: Vec::new(),
            editing: Some(doc.id),
        };
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Save payload, or update payload when a header is being edited.
    pub fn to_payload(&self, employee_id: u64) -> Result<DocumentPayload, FormError> {
        let category = self.category.as_ref().ok_or(FormError::MissingCategory)?;
        Ok(DocumentPayload {
            document_header: DocumentHeaderPayload {
                id: self.editing,
                file_no: self.file_no.clone(),
                title: self.title.clone(),
                subject: self.subject.clone(),
                version: self.version.clone(),
                category_master: IdRef { id: category.id },
                employee: IdRef { id: employee_id },
            },
            file_paths: self.uploaded_paths.clone(),
        })
    }
}

/// Resolves the `<select>` value back to a category; the empty option clears it.
pub fn find_category(categories: &[Category], value: &str) -> Option<Category> {
    let id: u64 = value.parse().ok()?;
    categories.iter().find(|c| c.id == id).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use dms_api::NamedRef;

    fn hr() -> Category {
        NamedRef {
            id: 7,
            name: "HR".to_string(),
        }
    }

    fn filled() -> DocumentForm {
        DocumentForm {
            file_no: "HR/17".into(),
            title: "Leave Policy".into(),
            subject: "Annual leave".into(),
            version: "1".into(),
            category: Some(hr()),
            ..Default::default()
        }
    }

    #[test]
    fn upload_needs_all_fields_and_a_file() {
        let form = filled();
        assert!(form.can_upload(2));
        assert!(!form.can_upload(0));

        let mut missing_version = filled();
        missing_version.version.clear();
        assert!(!missing_version.can_upload(1));

        let mut missing_category = filled();
        missing_category.category = None;
        assert!(!missing_category.can_upload(1));
    }

    #[test]
    fn save_needs_uploaded_paths() {
        let mut form = filled();
        assert_eq!(form.validate_for_save(), Err(FormError::Incomplete));
        form.record_upload(vec!["2024/03/HR/a.pdf".into()], vec!["a.pdf".into()]);
        assert_eq!(form.validate_for_save(), Ok(()));

        form.title.clear();
        assert_eq!(form.validate_for_save(), Err(FormError::Incomplete));
    }

    #[test]
    fn discard_removes_matching_name_and_path() {
        let mut form = filled();
        form.record_upload(
            vec!["p/a".into(), "p/b".into(), "p/c".into()],
            vec!["a".into(), "b".into(), "c".into()],
        );
        assert!(form.discard_file(1));
        assert_eq!(form.uploaded_names, vec!["a", "c"]);
        assert_eq!(form.uploaded_paths, vec!["p/a", "p/c"]);

        assert!(!form.discard_file(5));
        assert_eq!(form.uploaded_names.len(), 2);

        form.discard_all();
        assert!(form.uploaded_names.is_empty());
        assert!(form.uploaded_paths.is_empty());
    }

    #[test]
    fn editing_loads_row_and_builds_update_payload() {
        let doc = Document {
            id: 42,
            file_no: "HR/17".into(),
            title: "Leave Policy".into(),
            subject: "Annual leave".into(),
            version: "2".into(),
            category_master: Some(hr()),
            file_paths: vec!["2024/03/HR/a.pdf".into()],
            ..Default::default()
        };
        let mut form = DocumentForm::default();
        form.load_document(&doc);
        assert!(form.is_editing());
        assert_eq!(form.uploaded_paths, doc.file_paths);

        let payload = form.to_payload(9).unwrap();
        assert_eq!(payload.document_header.id, Some(42));
        assert_eq!(payload.document_header.category_master.id, 7);
        assert_eq!(payload.document_header.employee.id, 9);
        assert_eq!(payload.file_paths, vec!["2024/03/HR/a.pdf"]);

        form.reset();
        assert_eq!(form, DocumentForm::default());
    }

    #[test]
    fn new_document_payload_has_no_id() {
        let payload = filled().to_payload(3).unwrap();
        assert_eq!(payload.document_header.id, None);
        assert_eq!(
            DocumentForm::default().to_payload(3),
            Err(FormError::MissingCategory)
        );
    }

    #[test]
    fn upload_category_is_the_selected_name() {
        assert_eq!(filled().upload_category(), "HR");

        let none = DocumentForm::default();
        assert_eq!(none.upload_category(), "");
        assert_eq!(
            dms_api::upload_category(&none.upload_category()),
            dms_api::DEFAULT_UPLOAD_CATEGORY
        );
    }

    #[test]
    fn category_lookup_by_select_value() {
        let categories = vec![
            hr(),
            NamedRef {
                id: 8,
                name: "Finance".into(),
            },
        ];
        assert_eq!(find_category(&categories, "8").unwrap().name, "Finance");
        assert_eq!(find_category(&categories, ""), None);
        assert_eq!(find_category(&categories, "99"), None);
    }
}
