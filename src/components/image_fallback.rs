//! Image With Fallback Component
//!
//! Shows a placeholder when the image URL is missing or fails to load.

use leptos::prelude::*;

/// Placeholder served with the app bundle
pub const PLACEHOLDER_IMAGE: &str = "assets/no-image.svg";

/// Image that swaps to the placeholder once on load error (no retry loop)
#[component]
pub fn ImageWithFallback(
    src: Option<String>,
    #[prop(into, default = "Product image".to_string())] alt: String,
    #[prop(into, default = "fallback-img".to_string())] css_class: String,
) -> impl IntoView {
    let initial = src
        .filter(|url| !url.trim().is_empty())
        .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string());
    let (current, set_current) = signal(initial);

    let on_error = move |_| {
        if current.get_untracked() != PLACEHOLDER_IMAGE {
            log::debug!("[ImageWithFallback] Failed to load {}", current.get_untracked());
            set_current.set(PLACEHOLDER_IMAGE.to_string());
        }
    };

    view! {
        <img
            class=css_class
            src=move || current.get()
            alt=alt
            on:error=on_error
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_placeholder_ships_with_bundle() {
        let root = Path::new(env!("CARGO_MANIFEST_DIR"));
        assert!(root.join(PLACEHOLDER_IMAGE).is_file());

        let index = std::fs::read_to_string(root.join("index.html")).unwrap();
        assert!(index.contains(r#"<link data-trunk rel="copy-dir" href="assets" />"#));
    }
}
