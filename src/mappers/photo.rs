/// Upstream payload → ImageRecord mapping

use crate::types::image::ImageRecord;
use crate::types::pixabay::PixabayHit;
use crate::types::unsplash::UnsplashPhoto;

pub const UNSPLASH_HOMEPAGE: &str = "https://unsplash.com";
pub const PIXABAY_HOMEPAGE: &str = "https://pixabay.com";

/// Unsplash requires the utm pair on every attribution link
const UNSPLASH_UTM: &str = "utm_source=travel_imagery&utm_medium=referral";

pub fn unsplash_to_record(photo: &UnsplashPhoto) -> Option<ImageRecord> {
    let url = [&photo.urls.regular, &photo.urls.full, &photo.urls.small]
        .into_iter()
        .find(|u| !u.is_empty())?
        .clone();

    let photographer = if photo.user.name.trim().is_empty() {
        "Unknown".to_string()
    } else {
        photo.user.name.trim().to_string()
    };

    let profile_url = if photo.user.links.html.is_empty() {
        UNSPLASH_HOMEPAGE.to_string()
    } else {
        with_query(&photo.user.links.html, UNSPLASH_UTM)
    };

    let description = photo
        .description
        .as_deref()
        .or(photo.alt_description.as_deref())
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .map(str::to_string);

    Some(ImageRecord {
        url,
        photographer,
        profile_url,
        description,
        provider: Some("unsplash".into()),
        download_location: Some(photo.links.download_location.clone()).filter(|d| !d.is_empty()),
    })
}

pub fn pixabay_to_record(hit: &PixabayHit) -> Option<ImageRecord> {
    let url = if hit.large_image_url.is_empty() {
        &hit.webformat_url
    } else {
        &hit.large_image_url
    };
    if url.is_empty() {
        return None;
    }

    let photographer = if hit.user.trim().is_empty() {
        "Unknown".to_string()
    } else {
        hit.user.trim().to_string()
    };

    let profile_url = if hit.user.trim().is_empty() || hit.user_id == 0 {
        PIXABAY_HOMEPAGE.to_string()
    } else {
        format!("{}/users/{}-{}/", PIXABAY_HOMEPAGE, hit.user.trim(), hit.user_id)
    };

    let description = Some(hit.tags.trim().to_string()).filter(|t| !t.is_empty());

    Some(ImageRecord {
        url: url.clone(),
        photographer,
        profile_url,
        description,
        provider: Some("pixabay".into()),
        download_location: None,
    })
}

fn with_query(url: &str, query: &str) -> String {
    let sep = if url.contains('?') { "&" } else { "?" };
    format!("{}{}{}", url, sep, query)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::unsplash::{UnsplashPhotoLinks, UnsplashUrls, UnsplashUser, UnsplashUserLinks};

    fn unsplash_photo() -> UnsplashPhoto {
        UnsplashPhoto {
            id: "abc".into(),
            description: None,
            alt_description: Some("Eiffel tower at dusk".into()),
            urls: UnsplashUrls {
                regular: "https://images.unsplash.com/photo-1?w=1080".into(),
                ..Default::default()
            },
            user: UnsplashUser {
                name: "Jane Doe".into(),
                username: "jane".into(),
                links: UnsplashUserLinks {
                    html: "https://unsplash.com/@jane".into(),
                },
            },
            links: UnsplashPhotoLinks {
                html: String::new(),
                download_location: "https://api.unsplash.com/photos/abc/download".into(),
            },
        }
    }

    #[test]
    fn unsplash_photo_maps_attribution() {
        let record = unsplash_to_record(&unsplash_photo()).unwrap();
        assert_eq!(record.url, "https://images.unsplash.com/photo-1?w=1080");
        assert_eq!(record.photographer, "Jane Doe");
        assert!(record.profile_url.starts_with("https://unsplash.com/@jane?utm_source="));
        assert_eq!(record.description.as_deref(), Some("Eiffel tower at dusk"));
        assert_eq!(record.provider.as_deref(), Some("unsplash"));
        assert!(record.download_location.is_some());
    }

    #[test]
    fn unsplash_photo_without_urls_is_skipped() {
        let mut photo = unsplash_photo();
        photo.urls = UnsplashUrls::default();
        assert!(unsplash_to_record(&photo).is_none());
    }

    #[test]
    fn pixabay_hit_defaults() {
        let hit = PixabayHit {
            webformat_url: "https://pixabay.com/get/x_640.jpg".into(),
            ..Default::default()
        };
        let record = pixabay_to_record(&hit).unwrap();
        assert_eq!(record.photographer, "Unknown");
        assert_eq!(record.profile_url, PIXABAY_HOMEPAGE);
        assert_eq!(record.description, None);
    }
}
