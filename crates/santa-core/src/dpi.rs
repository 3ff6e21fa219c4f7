//! DPI helpers. Callers pass the platform scale factor (logical to physical)
//! as `f32`; nothing here depends on winit.

/// Scale factor clamped to something usable; non-finite or non-positive input maps to 1.0.
#[inline]
pub fn sanitize_scale_factor(scale_factor: f32) -> f32 {
    if scale_factor.is_finite() && scale_factor > 0.0 {
        scale_factor
    } else {
        1.0
    }
}
