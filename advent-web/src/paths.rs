//! Helpers for constructing URLs to static assets that respect the deployment base path.
use advent_core::Door;

/// Prefix `relative` with the base path.
///
/// When `PUBLIC_URL` is set at compile time (e.g., `/advent` for GitHub Pages),
/// generated URLs are prefixed accordingly. Without it the path stays relative
/// to the page, so a copy served from any sub-path still finds its images.
#[must_use]
pub fn asset_path(relative: &str) -> String {
    asset_path_with_base(relative, option_env!("PUBLIC_URL").unwrap_or(""))
}

/// URL of the picture behind `door`.
#[must_use]
pub fn door_image_url(door: Door) -> String {
    asset_path(&door.image_path())
}

fn asset_path_with_base(relative: &str, base: &str) -> String {
    let base = base.trim_end_matches('/');
    let rel = relative.trim_start_matches('/');

    if base.is_empty() {
        rel.to_string()
    } else {
        format!("{base}/{rel}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_path_relative_when_base_missing() {
        assert_eq!(
            asset_path_with_base("images/days/1.jpeg", ""),
            "images/days/1.jpeg"
        );
        assert_eq!(
            asset_path_with_base("/images/days/1.jpeg", "/"),
            "images/days/1.jpeg"
        );
    }

    #[test]
    fn builds_paths_with_public_base() {
        assert_eq!(
            asset_path_with_base("images/days/3.jpeg", "/advent"),
            "/advent/images/days/3.jpeg"
        );
        assert_eq!(
            asset_path_with_base("/images/days/3.jpeg", "/advent/"),
            "/advent/images/days/3.jpeg"
        );
    }

    #[test]
    fn door_images_follow_numbering() {
        let door = Door::new(12).unwrap();
        assert!(door_image_url(door).ends_with("images/days/12.jpeg"));
    }
}
