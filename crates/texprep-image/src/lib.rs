#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageSize {
    pub width: u32,
    pub height: u32,
}

impl ImageSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Largest size with the same aspect ratio that fits inside `bounds`.
/// Never enlarges; each dimension is floored at one pixel.
pub fn fit_within(size: ImageSize, bounds: ImageSize) -> ImageSize {
    if size.width == 0 || size.height == 0 || bounds.width == 0 || bounds.height == 0 {
        return size;
    }
    if size.width <= bounds.width && size.height <= bounds.height {
        return size;
    }

    let scale = (bounds.width as f64 / size.width as f64)
        .min(bounds.height as f64 / size.height as f64);
    ImageSize {
        width: ((size.width as f64 * scale).round() as u32).max(1),
        height: ((size.height as f64 * scale).round() as u32).max(1),
    }
}
