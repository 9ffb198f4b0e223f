//! Server-side rendering of the listing page.
//!
//! The template is compiled in at build time; a missing or malformed
//! template fails the build, not the process. The data it consumes is the
//! boot-time snapshot fetched once in `main`, in upstream order.

use askama::Template;
use askama_web::WebTemplate;

use crate::resource::UserRecord;
use crate::upstream::{UpstreamClient, UpstreamResult};

/// Root page listing the user snapshot with the CRUD forms.
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub users: Vec<UserRecord>,
}

/// Fetch the listing snapshot served for the rest of the process lifetime.
///
/// Failure here is fatal; the portal does not start with an empty or stale
/// page it could not populate.
pub async fn boot_snapshot(client: &UpstreamClient) -> UpstreamResult<Vec<UserRecord>> {
    let users = client.list_users().await?;
    tracing::info!(count = users.len(), "listing snapshot fetched");
    Ok(users)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_user_rows() {
        let users: Vec<UserRecord> = serde_json::from_str(
            r#"[{"id":1,"name":"Ann","email":"a@x.com","gender":"female","status":"active"}]"#,
        )
        .unwrap();
        let page = IndexTemplate { users }.render().unwrap();
        assert!(page.contains("Ann"));
        assert!(page.contains("a@x.com"));
    }

    #[test]
    fn test_renders_empty_snapshot() {
        let page = IndexTemplate { users: Vec::new() }.render().unwrap();
        assert!(page.contains("Users"));
    }

    #[test]
    fn test_escapes_html_in_values() {
        let users = vec![UserRecord {
            id: 9,
            name: "<script>".to_string(),
            email: String::new(),
            gender: String::new(),
            status: String::new(),
        }];
        let page = IndexTemplate { users }.render().unwrap();
        assert!(!page.contains("<script>"));
        assert!(page.contains("&lt;script&gt;"));
    }
}
