//! Content Store
//!
//! Reactive state for the user's generated content library, plus the
//! pure filtering helpers the pages build their views from.

use leptos::*;

use crate::api;

/// The kinds of content the dashboard manages
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum ContentKind {
    #[serde(rename = "script")]
    Script,
    #[serde(rename = "title")]
    Title,
    #[serde(rename = "thumbnailPrompt")]
    ThumbnailPrompt,
    #[serde(rename = "seo")]
    Seo,
}

impl ContentKind {
    pub const ALL: [ContentKind; 4] = [
        ContentKind::Script,
        ContentKind::Title,
        ContentKind::ThumbnailPrompt,
        ContentKind::Seo,
    ];

    /// Wire name used by the API
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentKind::Script => "script",
            ContentKind::Title => "title",
            ContentKind::ThumbnailPrompt => "thumbnailPrompt",
            ContentKind::Seo => "seo",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "script" => Some(ContentKind::Script),
            "title" => Some(ContentKind::Title),
            "thumbnailPrompt" => Some(ContentKind::ThumbnailPrompt),
            "seo" => Some(ContentKind::Seo),
            _ => None,
        }
    }

    /// Human-readable label for headings and dropdowns
    pub fn label(&self) -> &'static str {
        match self {
            ContentKind::Script => "Script",
            ContentKind::Title => "Title",
            ContentKind::ThumbnailPrompt => "Thumbnail Prompt",
            ContentKind::Seo => "SEO Tags",
        }
    }
}

/// Prompt/response pair inside a content item
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ContentBody {
    #[serde(default)]
    pub prompt: String,
    #[serde(default)]
    pub response: String,
}

/// A stored content item from the API
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ContentItem {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ContentKind,
    #[serde(default)]
    pub data: ContentBody,
    #[serde(rename = "createdAt")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// Reactive content store provided to all components
#[derive(Clone, Copy)]
pub struct ContentState {
    /// All of the user's content items
    pub contents: RwSignal<Vec<ContentItem>>,
    /// Global loading flag. Overlapping requests are not tracked; the
    /// last one to finish wins.
    pub loading: RwSignal<bool>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
}

/// Provide the content store to the component tree
pub fn provide_content_state() {
    let state = ContentState {
        contents: create_rw_signal(Vec::new()),
        loading: create_rw_signal(false),
        error: create_rw_signal(None),
        success: create_rw_signal(None),
    };

    provide_context(state);
}

/// Fetch the content store from context
pub fn use_content_state() -> ContentState {
    use_context::<ContentState>().expect("ContentState not found")
}

impl ContentState {
    /// Reload the content list from the API
    pub async fn fetch_user_content(self) {
        self.loading.set(true);
        match api::fetch_content().await {
            Ok(items) => self.contents.set(items),
            Err(e) => self.show_error(&e),
        }
        self.loading.set(false);
    }

    /// Create a content item and append it to the store
    pub async fn create_content(
        self,
        kind: ContentKind,
        prompt: &str,
        response: &str,
    ) -> Result<ContentItem, String> {
        if prompt.trim().is_empty() || response.trim().is_empty() {
            return Err("Prompt and response are both required".to_string());
        }

        self.loading.set(true);
        let result = api::create_content(kind, prompt, response).await;
        self.loading.set(false);

        match result {
            Ok(item) => {
                self.contents.update(|c| c.push(item.clone()));
                Ok(item)
            }
            Err(e) => {
                self.show_error(&e);
                Err(e)
            }
        }
    }

    /// Delete a content item by id
    pub async fn delete_content(self, id: &str) {
        self.loading.set(true);
        let result = api::delete_content(id).await;
        self.loading.set(false);

        match result {
            Ok(()) => {
                let id = id.to_string();
                self.contents.update(|c| c.retain(|item| item.id != id));
                self.show_success("Content deleted");
            }
            Err(e) => self.show_error(&e),
        }
    }

    /// Run a generation request. The result is NOT stored; the caller
    /// decides whether to save it.
    pub async fn generate_content(self, prompt: &str, kind: ContentKind) -> Result<String, String> {
        self.loading.set(true);
        let result = api::generate_content(prompt, kind).await;
        self.loading.set(false);
        result
    }

    /// Save a generated result into the library. Returns whether the
    /// save succeeded; errors surface through the toast signals.
    pub async fn save_content(self, kind: ContentKind, prompt: &str, response: &str) -> bool {
        match self.create_content(kind, prompt, response).await {
            Ok(_) => {
                self.show_success("Saved successfully!");
                true
            }
            Err(_) => false,
        }
    }

    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success_signal.set(None);
        })
        .forget();
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        })
        .forget();
    }
}

// ============ Pure helpers ============

/// Items of one kind, preserving stored order
pub fn filter_by_kind(items: &[ContentItem], kind: ContentKind) -> Vec<ContentItem> {
    items
        .iter()
        .filter(|item| item.kind == kind)
        .cloned()
        .collect()
}

/// Number of stored items of one kind
pub fn count_of_kind(items: &[ContentItem], kind: ContentKind) -> usize {
    items.iter().filter(|item| item.kind == kind).count()
}

/// Case-insensitive substring match against prompt and response.
/// A blank search term matches everything.
pub fn matches_search(item: &ContentItem, term: &str) -> bool {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return true;
    }
    item.data.prompt.to_lowercase().contains(&term)
        || item.data.response.to_lowercase().contains(&term)
}

/// The newest items first, at most `limit` of them
pub fn recent_activity(items: &[ContentItem], limit: usize) -> Vec<ContentItem> {
    let mut sorted = items.to_vec();
    sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    sorted.truncate(limit);
    sorted
}

/// Display title for an item, falling back when the prompt is blank
pub fn display_title(item: &ContentItem) -> String {
    let prompt = item.data.prompt.trim();
    if prompt.is_empty() {
        "Untitled".to_string()
    } else {
        prompt.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn item(id: &str, kind: ContentKind, prompt: &str, response: &str, ts: i64) -> ContentItem {
        ContentItem {
            id: id.to_string(),
            kind,
            data: ContentBody {
                prompt: prompt.to_string(),
                response: response.to_string(),
            },
            created_at: Utc.timestamp_opt(ts, 0).unwrap(),
        }
    }

    #[test]
    fn test_kind_wire_names() {
        assert_eq!(ContentKind::ThumbnailPrompt.as_str(), "thumbnailPrompt");
        assert_eq!(ContentKind::parse("seo"), Some(ContentKind::Seo));
        assert_eq!(ContentKind::parse("poem"), None);
        for kind in ContentKind::ALL {
            assert_eq!(ContentKind::parse(kind.as_str()), Some(kind));
        }
    }

    #[test]
    fn test_item_deserializes_wire_format() {
        let json = r#"{
            "id": "abc",
            "type": "thumbnailPrompt",
            "data": {"prompt": "P", "response": "R"},
            "createdAt": "2026-03-01T12:00:00Z"
        }"#;
        let item: ContentItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.kind, ContentKind::ThumbnailPrompt);
        assert_eq!(item.data.prompt, "P");
    }

    #[test]
    fn test_item_tolerates_missing_data() {
        let json = r#"{"id": "abc", "type": "script", "createdAt": "2026-03-01T12:00:00Z"}"#;
        let item: ContentItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.data.prompt, "");
        assert_eq!(display_title(&item), "Untitled");
    }

    #[test]
    fn test_filter_by_kind_preserves_order() {
        let items = vec![
            item("1", ContentKind::Script, "a", "x", 1),
            item("2", ContentKind::Title, "b", "y", 2),
            item("3", ContentKind::Script, "c", "z", 3),
        ];
        let scripts = filter_by_kind(&items, ContentKind::Script);
        assert_eq!(scripts.len(), 2);
        assert_eq!(scripts[0].id, "1");
        assert_eq!(scripts[1].id, "3");
        assert_eq!(count_of_kind(&items, ContentKind::Title), 1);
        assert_eq!(count_of_kind(&items, ContentKind::Seo), 0);
    }

    #[test]
    fn test_search_matches_prompt_and_response() {
        let it = item("1", ContentKind::Script, "How AI changes jobs", "INTRO: robots", 1);
        assert!(matches_search(&it, "ai"));
        assert!(matches_search(&it, "ROBOTS"));
        assert!(matches_search(&it, ""));
        assert!(matches_search(&it, "   "));
        assert!(!matches_search(&it, "gardening"));
    }

    #[test]
    fn test_recent_activity_newest_first() {
        let items = vec![
            item("old", ContentKind::Script, "a", "x", 100),
            item("new", ContentKind::Title, "b", "y", 300),
            item("mid", ContentKind::Seo, "c", "z", 200),
        ];
        let recent = recent_activity(&items, 2);
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].id, "new");
        assert_eq!(recent[1].id, "mid");
    }

    #[test]
    fn test_display_title_fallback() {
        let with_prompt = item("1", ContentKind::Script, "  My Topic  ", "x", 1);
        assert_eq!(display_title(&with_prompt), "My Topic");

        let blank = item("2", ContentKind::Script, "   ", "x", 1);
        assert_eq!(display_title(&blank), "Untitled");
    }
}
