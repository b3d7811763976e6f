//! Endpoint Methods
//!
//! One method per service endpoint. Paths follow the service's controller
//! mappings verbatim, including their mixed casing.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use reqwest::multipart::{Form, Part};

use crate::client::ApiClient;
use crate::error::{ApiError, Result};
use crate::models::{
    AttachedFile, Branch, Category, Department, Document, DocumentPayload, Employee,
    SearchCriteria,
};

const DOCUMENTS: &str = "/api/documents";

/// Category sent with an upload whose category has no name.
pub const DEFAULT_UPLOAD_CATEGORY: &str = "default-category";

/// Characters escaped inside a single path segment.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'\\')
    .add(b'`')
    .add(b'{')
    .add(b'}');

fn segment(raw: &str) -> String {
    utf8_percent_encode(raw, PATH_SEGMENT).to_string()
}

/// Category field of an upload; blank names fall back to
/// [`DEFAULT_UPLOAD_CATEGORY`].
pub fn upload_category(name: &str) -> &str {
    if name.trim().is_empty() {
        DEFAULT_UPLOAD_CATEGORY
    } else {
        name
    }
}

/// Multipart body: one `category` field and one `files` part per file.
fn upload_form(category: &str, files: Vec<UploadFile>) -> Result<Form> {
    let mut form = Form::new().text("category", upload_category(category).to_string());
    for file in files {
        form = form.part("files", file.into_part()?);
    }
    Ok(form)
}

/// A file read from the browser, ready to be sent as one multipart part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFile {
    pub name: String,
    pub mime: Option<String>,
    pub bytes: Vec<u8>,
}

impl UploadFile {
    fn into_part(self) -> Result<Part> {
        let part = Part::bytes(self.bytes).file_name(self.name);
        match self.mime.filter(|m| !m.is_empty()) {
            Some(mime) => Ok(part.mime_str(&mime)?),
            None => Ok(part),
        }
    }
}

/// Binary body of a retrieved file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileContent {
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl FileContent {
    /// Stored files are mostly scanned PDFs, so that is the fallback.
    pub fn mime(&self) -> &str {
        self.content_type
            .as_deref()
            .filter(|m| !m.is_empty())
            .unwrap_or("application/pdf")
    }
}

/// Retrieval path of a stored file: `/api/documents/{yyyy}/{mm}/{category}/{name}`.
pub fn file_retrieval_path(file: &AttachedFile) -> Result<String> {
    let created = file.created_on.ok_or(ApiError::IncompleteFile("creation date"))?;
    let category = file
        .category_name()
        .ok_or(ApiError::IncompleteFile("category"))?;
    if file.doc_name.is_empty() {
        return Err(ApiError::IncompleteFile("file name"));
    }
    Ok(format!(
        "{}/{}/{:02}/{}/{}",
        DOCUMENTS,
        created.year(),
        created.month(),
        segment(category),
        segment(&file.doc_name)
    ))
}

impl ApiClient {
    // ========================
    // Reference lists
    // ========================

    /// Categories offered when creating a document.
    pub async fn active_categories(&self) -> Result<Vec<Category>> {
        self.get("/CategoryMaster/findActiveCategory").await
    }

    /// Every category, including inactive ones, for searching.
    pub async fn all_categories(&self) -> Result<Vec<Category>> {
        self.get("/CategoryMaster/findAll").await
    }

    pub async fn all_branches(&self) -> Result<Vec<Branch>> {
        self.get("/branchmaster/findAll").await
    }

    pub async fn departments_by_branch(&self, branch_id: u64) -> Result<Vec<Department>> {
        self.get(&format!("/DepartmentMaster/findByBranch/{}", branch_id))
            .await
    }

    // ========================
    // Employees
    // ========================

    pub async fn employee(&self, user_id: &str) -> Result<Employee> {
        self.get(&format!("/employee/findById/{}", segment(user_id)))
            .await
    }

    pub async fn employees_by_branch(&self, branch_id: u64) -> Result<Vec<Employee>> {
        self.get(&format!("/employee/findByBranch/{}", branch_id))
            .await
    }

    // ========================
    // Documents
    // ========================

    /// Headers uploaded by `user_id` that are still awaiting approval.
    pub async fn pending_documents(&self, user_id: &str) -> Result<Vec<Document>> {
        self.get(&format!("{}/pending/employee/{}", DOCUMENTS, segment(user_id)))
            .await
    }

    pub async fn attached_files(&self, document_id: u64) -> Result<Vec<AttachedFile>> {
        self.get(&format!("{}/byDocumentHeader/{}", DOCUMENTS, document_id))
            .await
    }

    pub async fn search_documents(&self, criteria: &SearchCriteria) -> Result<Vec<Document>> {
        self.post_json(&format!("{}/search", DOCUMENTS), criteria)
            .await
    }

    /// Stores the files under `category` and returns the server's paths for
    /// them, in upload order.
    pub async fn upload_files(&self, category: &str, files: Vec<UploadFile>) -> Result<Vec<String>> {
        self.post_multipart(&format!("{}/upload", DOCUMENTS), upload_form(category, files)?)
            .await
    }

    pub async fn save_document(&self, payload: &DocumentPayload) -> Result<()> {
        self.post_json_discard(&format!("{}/save", DOCUMENTS), payload)
            .await
    }

    pub async fn update_document(&self, payload: &DocumentPayload) -> Result<()> {
        self.post_json_discard(&format!("{}/update", DOCUMENTS), payload)
            .await
    }

    pub async fn open_attached_file(&self, file: &AttachedFile) -> Result<FileContent> {
        let path = file_retrieval_path(file)?;
        self.get_bytes(&path).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::decode_body;
    use crate::models::{CreatedOn, NamedRef};
    use chrono::NaiveDate;

    fn attached(name: &str, category: Option<&str>, created: Option<(i32, u32, u32)>) -> AttachedFile {
        AttachedFile {
            id: Some(1),
            doc_name: name.to_string(),
            created_on: created.map(|(y, m, d)| {
                CreatedOn(NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(9, 30, 0).unwrap())
            }),
            document_header: Some(Document {
                id: 42,
                category_master: category.map(|name| NamedRef {
                    id: 7,
                    name: name.to_string(),
                }),
                ..Default::default()
            }),
        }
    }

    #[test]
    fn blank_upload_category_falls_back() {
        assert_eq!(upload_category(""), DEFAULT_UPLOAD_CATEGORY);
        assert_eq!(upload_category("   "), DEFAULT_UPLOAD_CATEGORY);
        assert_eq!(upload_category("HR Policies"), "HR Policies");
    }

    #[test]
    fn upload_form_builds_with_and_without_mime() {
        let files = vec![
            UploadFile {
                name: "a.pdf".to_string(),
                mime: Some("application/pdf".to_string()),
                bytes: b"%PDF".to_vec(),
            },
            UploadFile {
                name: "b.bin".to_string(),
                mime: None,
                bytes: vec![0, 1],
            },
        ];
        assert!(upload_form("", files).is_ok());

        let bad_mime = vec![UploadFile {
            name: "c.txt".to_string(),
            mime: Some("not a mime".to_string()),
            bytes: Vec::new(),
        }];
        assert!(matches!(upload_form("HR", bad_mime), Err(ApiError::Transport(_))));
    }

    #[test]
    fn upload_response_must_be_string_array() {
        let paths: Vec<String> = decode_body(r#"["2024/03/HR/a.pdf"]"#).unwrap();
        assert_eq!(paths, vec!["2024/03/HR/a.pdf"]);

        for body in ["[1, 2]", r#"{"paths": []}"#, "uploaded"] {
            assert!(
                matches!(decode_body::<Vec<String>>(body), Err(ApiError::Decode(_))),
                "{body}"
            );
        }
    }

    #[test]
    fn retrieval_path_pads_month() {
        let file = attached("circular.pdf", Some("HR"), Some((2024, 3, 5)));
        assert_eq!(
            file_retrieval_path(&file).unwrap(),
            "/api/documents/2024/03/HR/circular.pdf"
        );
    }

    #[test]
    fn retrieval_path_escapes_segments() {
        let file = attached("leave policy #2.pdf", Some("HR Policies"), Some((2023, 11, 20)));
        assert_eq!(
            file_retrieval_path(&file).unwrap(),
            "/api/documents/2023/11/HR%20Policies/leave%20policy%20%232.pdf"
        );
    }

    #[test]
    fn retrieval_path_requires_date_category_and_name() {
        let undated = attached("a.pdf", Some("HR"), None);
        assert!(matches!(
            file_retrieval_path(&undated),
            Err(ApiError::IncompleteFile("creation date"))
        ));

        let uncategorized = attached("a.pdf", None, Some((2024, 1, 1)));
        assert!(matches!(
            file_retrieval_path(&uncategorized),
            Err(ApiError::IncompleteFile("category"))
        ));

        let unnamed = attached("", Some("HR"), Some((2024, 1, 1)));
        assert!(matches!(
            file_retrieval_path(&unnamed),
            Err(ApiError::IncompleteFile("file name"))
        ));
    }

    #[test]
    fn file_content_defaults_to_pdf() {
        let mut content = FileContent {
            content_type: None,
            bytes: vec![0x25, 0x50, 0x44, 0x46],
        };
        assert_eq!(content.mime(), "application/pdf");
        content.content_type = Some("image/png".to_string());
        assert_eq!(content.mime(), "image/png");
    }
}
