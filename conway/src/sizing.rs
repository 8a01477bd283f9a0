// sizing.rs - Grid dimensions derived from the space available to the display

/// Viewports this wide or narrower get the larger, touch-friendly cells.
pub const NARROW_VIEWPORT_PX: f32 = 768.0;
pub const NARROW_CELL_PX: f32 = 25.0;
pub const WIDE_CELL_PX: f32 = 20.0;

pub fn cell_size_for(width_px: f32) -> f32 {
    if width_px <= NARROW_VIEWPORT_PX {
        NARROW_CELL_PX
    } else {
        WIDE_CELL_PX
    }
}

/// `(rows, cols)` that fit a `width_px` x `height_px` area, never below 1x1.
pub fn fit_to_viewport(width_px: f32, height_px: f32) -> (usize, usize) {
    let cell = cell_size_for(width_px);
    let fit = |px: f32| ((px / cell).floor().max(1.0)) as usize;
    (fit(height_px), fit(width_px))
}
