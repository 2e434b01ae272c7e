//! Thumbnail URL resolution.

/// Shown when an item has no thumbnail at all.
pub const PLACEHOLDER_PATH: &str = "/placeholder.jpg";

fn is_absolute_http(url: &str) -> bool {
    let lower = url.get(..8).unwrap_or(url).to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// Resolve the URL to display for an item thumbnail.
///
/// Order matters: a pre-resolved public URL always wins, then the
/// placeholder for a missing thumbnail, then absolute URLs as-is, then the
/// configured image base, then a root-relative path.
pub fn resolve_thumbnail(
    thumbnail: Option<&str>,
    public_url: Option<&str>,
    base_image_url: Option<&str>,
) -> String {
    if let Some(url) = public_url.filter(|url| !url.is_empty()) {
        return url.to_string();
    }

    let thumbnail = match thumbnail {
        Some(t) if !t.is_empty() => t,
        _ => return PLACEHOLDER_PATH.to_string(),
    };

    if is_absolute_http(thumbnail) {
        return thumbnail.to_string();
    }

    let relative = thumbnail.strip_prefix('/').unwrap_or(thumbnail);
    match base_image_url.filter(|base| !base.is_empty()) {
        Some(base) => {
            let base = base.strip_suffix('/').unwrap_or(base);
            format!("{}/{}", base, relative)
        }
        None => format!("/{}", relative),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: Option<&str> = Some("https://cdn.x.com/");

    #[test]
    fn test_relative_thumbnail_joins_base() {
        assert_eq!(
            resolve_thumbnail(Some("photo.jpg"), None, BASE),
            "https://cdn.x.com/photo.jpg"
        );
    }

    #[test]
    fn test_leading_slash_not_doubled() {
        assert_eq!(
            resolve_thumbnail(Some("/uploads/a.png"), None, Some("https://cdn.x.com")),
            "https://cdn.x.com/uploads/a.png"
        );
    }

    #[test]
    fn test_absolute_thumbnail_unchanged() {
        assert_eq!(
            resolve_thumbnail(Some("https://ext.com/a.png"), None, BASE),
            "https://ext.com/a.png"
        );
        assert_eq!(
            resolve_thumbnail(Some("HTTP://ext.com/a.png"), None, BASE),
            "HTTP://ext.com/a.png"
        );
    }

    #[test]
    fn test_missing_thumbnail_uses_placeholder() {
        assert_eq!(resolve_thumbnail(Some(""), None, BASE), PLACEHOLDER_PATH);
        assert_eq!(resolve_thumbnail(None, None, BASE), PLACEHOLDER_PATH);
    }

    #[test]
    fn test_public_url_takes_precedence() {
        assert_eq!(
            resolve_thumbnail(Some("photo.jpg"), Some("https://pub.x.com/p.jpg"), BASE),
            "https://pub.x.com/p.jpg"
        );
        assert_eq!(
            resolve_thumbnail(None, Some("https://pub.x.com/p.jpg"), None),
            "https://pub.x.com/p.jpg"
        );
    }

    #[test]
    fn test_empty_public_url_is_ignored() {
        assert_eq!(
            resolve_thumbnail(Some("photo.jpg"), Some(""), BASE),
            "https://cdn.x.com/photo.jpg"
        );
    }

    #[test]
    fn test_no_base_gives_root_relative_path() {
        assert_eq!(resolve_thumbnail(Some("photo.jpg"), None, None), "/photo.jpg");
        assert_eq!(resolve_thumbnail(Some("/photo.jpg"), None, Some("")), "/photo.jpg");
    }
}

#[cfg(test)]
mod prop_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: base and relative path are joined by exactly one slash
        #[test]
        fn prop_single_slash_join(
            base in "https://[a-z]{1,8}\\.com/?",
            path in "/?[a-z0-9]{1,8}\\.jpg",
        ) {
            let url = resolve_thumbnail(Some(&path), None, Some(&base));
            let host = base.trim_end_matches('/');
            let file = path.trim_start_matches('/');
            prop_assert_eq!(url, format!("{}/{}", host, file));
        }

        /// Property: a non-empty public URL is returned untouched
        #[test]
        fn prop_public_url_wins(
            public in "[a-z:/.]{1,20}",
            thumb in proptest::option::of("[a-z/.]{0,10}"),
        ) {
            prop_assert_eq!(resolve_thumbnail(thumb.as_deref(), Some(&public), None), public);
        }
    }
}
