/// Calculates the largest size with the same aspect ratio as `size` that fits within
/// `bounds`, without ever growing the original. This is how thumbnails are sized: an image
/// that already fits is left alone.
///
/// Both dimensions are always at least one pixel.
pub fn fit_within(size: (u32, u32), bounds: (u32, u32)) -> (u32, u32) {
    let (width, height) = size;
    let (max_width, max_height) = (bounds.0.max(1), bounds.1.max(1));

    if width <= max_width && height <= max_height {
        return (width.max(1), height.max(1));
    }

    let scale = f64::min(
        max_width as f64 / width.max(1) as f64,
        max_height as f64 / height.max(1) as f64,
    );

    let fitted_width = ((width as f64 * scale).round() as u32).clamp(1, max_width);
    let fitted_height = ((height as f64 * scale).round() as u32).clamp(1, max_height);
    (fitted_width, fitted_height)
}

/// Offset that centres a span of `inner` length within a span of `outer` length. Negative
/// when `inner` is the larger of the two.
pub fn centre_offset(outer: u32, inner: u32) -> i32 {
    (outer as i32 - inner as i32) / 2
}

/// Splits `count` items into a grid of `columns` columns and returns (columns, rows).
/// A zero column count is treated as a single column.
pub fn grid_shape(count: usize, columns: usize) -> (usize, usize) {
    let columns = columns.max(1).min(count.max(1));
    let rows = count.div_ceil(columns);
    (columns, rows)
}
