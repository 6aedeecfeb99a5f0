/// Decoded RGBA pixels handed from the loader tasks to the UI thread.
#[derive(Debug, Clone)]
pub struct ImageData {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl ImageData {
    pub fn new(width: u32, height: u32, rgba: Vec<u8>) -> Self {
        debug_assert_eq!(
            rgba.len(),
            rgba_len(width, height),
            "RGBA buffer size mismatch"
        );
        Self {
            width,
            height,
            rgba,
        }
    }

    pub fn decode(bytes: &[u8]) -> Result<Self, super::PosterError> {
        let img = image::load_from_memory(bytes)
            .map_err(|e| super::PosterError::Decode(e.to_string()))?;
        let rgba = img.to_rgba8();
        let (w, h) = rgba.dimensions();
        Ok(Self::new(w, h, rgba.into_raw()))
    }
}

// Computed in usize: a 65536x65536 image already overflows u32.
fn rgba_len(width: u32, height: u32) -> usize {
    width as usize * height as usize * 4
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffer_length_does_not_wrap_for_large_dimensions() {
        assert_eq!(rgba_len(2, 1), 8);
        assert_eq!(rgba_len(65_536, 65_536), 1usize << 34);
        assert_eq!(rgba_len(0, u32::MAX), 0);
    }

    #[test]
    fn small_buffer_is_accepted() {
        let data = ImageData::new(2, 1, vec![0; 8]);
        assert_eq!((data.width, data.height, data.rgba.len()), (2, 1, 8));
    }
}
