use async_trait::async_trait;
use lazy_static::lazy_static;
use std::path::{Path, PathBuf};
use url::Url;

use super::{ImageData, PosterError};

lazy_static! {
    static ref CLIENT: reqwest::Client = reqwest::Client::builder()
        .user_agent(concat!("movie-cards/", env!("CARGO_PKG_VERSION")))
        .build()
        .unwrap_or_else(|e| {
            log::warn!("http client builder failed, using defaults: {e}");
            reqwest::Client::new()
        });
}

#[async_trait]
pub trait PosterProvider: Send + Sync {
    async fn fetch(&self, uri: &str) -> Result<ImageData, PosterError>;
}

pub fn parse_image_uri(uri: &str) -> Result<Url, PosterError> {
    let url = Url::parse(uri).map_err(|e| PosterError::InvalidUri {
        uri: uri.to_string(),
        reason: e.to_string(),
    })?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(PosterError::InvalidUri {
            uri: uri.to_string(),
            reason: format!("unsupported scheme {other}"),
        }),
    }
}

pub struct NetworkProvider;

impl NetworkProvider {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl PosterProvider for NetworkProvider {
    async fn fetch(&self, uri: &str) -> Result<ImageData, PosterError> {
        let url = parse_image_uri(uri)?;
        log::debug!("poster: GET {url}");

        let resp = CLIENT
            .get(url)
            .header("Accept", "image/jpeg,image/png,image/webp")
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(PosterError::Status {
                status: status.as_u16(),
                uri: uri.to_string(),
            });
        }

        let bytes = resp.bytes().await?;
        log::debug!("poster: {} bytes from {}", bytes.len(), uri);

        tokio::task::spawn_blocking(move || ImageData::decode(&bytes))
            .await
            .map_err(|e| PosterError::Decode(format!("decode task failed: {e}")))?
    }
}

/// Filesystem-safe cache file name for an image URI: host and path with
/// every other character replaced by `_`, saved as PNG.
pub fn cache_file_name(uri: &str) -> Result<String, PosterError> {
    let url = parse_image_uri(uri)?;
    let raw = format!("{}{}", url.host_str().unwrap_or("local"), url.path());
    let safe: String = raw
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '.' || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect();
    Ok(format!("{safe}.png"))
}

/// Wraps another provider with a directory of decoded PNGs.
pub struct CachingProvider<P: PosterProvider> {
    inner: P,
    cache_dir: PathBuf,
}

impl<P: PosterProvider> CachingProvider<P> {
    pub fn new(inner: P, cache_dir: PathBuf) -> Self {
        Self { inner, cache_dir }
    }

    async fn load_from_cache(&self, path: &Path) -> Option<ImageData> {
        if tokio::fs::metadata(path).await.is_err() {
            return None;
        }

        let path = path.to_path_buf();
        tokio::task::spawn_blocking(move || {
            let bytes = std::fs::read(&path).ok()?;
            match ImageData::decode(&bytes) {
                Ok(data) => Some(data),
                Err(e) => {
                    log::warn!("poster cache entry unreadable {}: {}", path.display(), e);
                    None
                }
            }
        })
        .await
        .ok()
        .flatten()
    }

    async fn save_to_cache(&self, path: &Path, data: &ImageData) -> Result<(), PosterError> {
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let path = path.to_path_buf();
        let (width, height) = (data.width, data.height);
        let rgba = data.rgba.clone();

        tokio::task::spawn_blocking(move || {
            image::save_buffer(&path, &rgba, width, height, image::ColorType::Rgba8)
                .map_err(|e| std::io::Error::other(format!("{}: {}", path.display(), e)))
        })
        .await
        .map_err(std::io::Error::other)??;
        Ok(())
    }
}

#[async_trait]
impl<P: PosterProvider> PosterProvider for CachingProvider<P> {
    async fn fetch(&self, uri: &str) -> Result<ImageData, PosterError> {
        let path = self.cache_dir.join(cache_file_name(uri)?);

        if let Some(cached) = self.load_from_cache(&path).await {
            log::debug!("poster cache hit: {uri}");
            return Ok(cached);
        }

        let data = self.inner.fetch(uri).await?;
        // A poster that cannot be cached is still shown.
        if let Err(e) = self.save_to_cache(&path, &data).await {
            log::warn!("poster cache write failed for {uri}: {e}");
        }
        Ok(data)
    }
}

impl<P: PosterProvider> std::fmt::Debug for CachingProvider<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CachingProvider")
            .field("cache_dir", &self.cache_dir)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct CountingProvider {
        calls: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl PosterProvider for CountingProvider {
        async fn fetch(&self, _uri: &str) -> Result<ImageData, PosterError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(ImageData::new(2, 1, vec![255, 0, 0, 255, 0, 255, 0, 255]))
        }
    }

    #[test]
    fn cache_names_are_flat_and_safe() {
        assert_eq!(
            cache_file_name("https://image.tmdb.org/t/p/w500/abc.jpg").unwrap(),
            "image.tmdb.org_t_p_w500_abc.jpg.png"
        );
        assert_eq!(
            cache_file_name("https://placehold.co/500x750/1a1a1a/ffffff.png").unwrap(),
            "placehold.co_500x750_1a1a1a_ffffff.png.png"
        );
        let name = cache_file_name("https://image.tmdb.org/t/p/w500/../../etc/passwd").unwrap();
        assert!(!name.contains('/'));
    }

    #[test]
    fn rejects_non_http_uris() {
        assert!(matches!(
            parse_image_uri("file:///etc/passwd"),
            Err(PosterError::InvalidUri { .. })
        ));
        assert!(matches!(
            parse_image_uri("/abc.jpg"),
            Err(PosterError::InvalidUri { .. })
        ));
        assert!(parse_image_uri("https://image.tmdb.org/t/p/w500/abc.jpg").is_ok());
    }

    #[test]
    fn caching_provider_serves_second_fetch_from_disk() {
        let dir = std::env::temp_dir().join(format!("movie-cards-test-{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        let calls = Arc::new(AtomicUsize::new(0));
        let provider = CachingProvider::new(
            CountingProvider {
                calls: calls.clone(),
            },
            dir.clone(),
        );
        let uri = "https://image.tmdb.org/t/p/w500/cached.jpg";

        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        let first = rt.block_on(provider.fetch(uri)).unwrap();
        let second = rt.block_on(provider.fetch(uri)).unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!((second.width, second.height), (2, 1));
        assert_eq!(first.rgba, second.rgba);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn unwritable_cache_reports_io_and_still_serves_poster() {
        // The cache "directory" is a regular file, so nothing can be created under it.
        let blocker =
            std::env::temp_dir().join(format!("movie-cards-blocker-{}", std::process::id()));
        std::fs::write(&blocker, b"not a dir").unwrap();
        let calls = Arc::new(AtomicUsize::new(0));
        let provider = CachingProvider::new(
            CountingProvider {
                calls: calls.clone(),
            },
            blocker.join("nested"),
        );
        let uri = "https://image.tmdb.org/t/p/w500/uncached.jpg";

        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        let data = ImageData::new(1, 1, vec![0, 0, 0, 255]);
        let path = blocker.join("nested").join("x.png");
        let saved = rt.block_on(provider.save_to_cache(&path, &data));
        assert!(matches!(saved, Err(PosterError::Io(_))));

        let fetched = rt.block_on(provider.fetch(uri)).unwrap();
        assert_eq!((fetched.width, fetched.height), (2, 1));
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        let _ = std::fs::remove_file(&blocker);
    }
}
