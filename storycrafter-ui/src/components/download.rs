//! Document Export
//!
//! Saves a generated document to the user's machine as a Markdown file
//! via a Blob object URL and a synthetic anchor click.

use wasm_bindgen::JsCast;

/// Download `body` as a Markdown document titled `title`
pub fn save_markdown(title: &str, body: &str) -> Result<(), String> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or("No document available")?;

    let content = format!("# {}\n\n{}\n", title, body);
    let parts = js_sys::Array::of1(&wasm_bindgen::JsValue::from_str(&content));

    let options = web_sys::BlobPropertyBag::new();
    options.set_type("text/markdown");

    let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options)
        .map_err(|_| "Could not build document".to_string())?;
    let url = web_sys::Url::create_object_url_with_blob(&blob)
        .map_err(|_| "Could not build download link".to_string())?;

    let anchor: web_sys::HtmlAnchorElement = document
        .create_element("a")
        .map_err(|_| "Could not build download link".to_string())?
        .unchecked_into();
    anchor.set_href(&url);
    anchor.set_download(&format!("{}.md", slugify(title)));
    anchor.click();

    let _ = web_sys::Url::revoke_object_url(&url);
    Ok(())
}

/// Turn a title into a safe filename stem
fn slugify(title: &str) -> String {
    let slug: String = title
        .trim()
        .to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '-' })
        .collect();
    let slug = slug.trim_matches('-').to_string();
    if slug.is_empty() {
        "untitled".to_string()
    } else {
        slug
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("How AI Changes Jobs"), "how-ai-changes-jobs");
        assert_eq!(slugify("  !!  "), "untitled");
        assert_eq!(slugify("crypto: 2026?"), "crypto--2026");
    }
}
