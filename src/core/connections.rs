use glam::Vec2;

/// Opacity of the line joining two points `distance` apart.
///
/// Fades linearly from 1 at distance 0 to 0 at `threshold`; `None` means the
/// points are too far apart to be connected.
#[inline]
pub fn connection_alpha(distance: f32, threshold: f32) -> Option<f32> {
    if threshold <= 0.0 || distance.is_nan() || distance >= threshold {
        return None;
    }
    Some((1.0 - distance / threshold).clamp(0.0, 1.0))
}

/// Line opacity as a total function of distance: 0 at and beyond `threshold`.
#[inline]
pub fn line_opacity(distance: f32, threshold: f32) -> f32 {
    connection_alpha(distance, threshold).unwrap_or(0.0)
}

/// Visit every unordered pair closer than `threshold`, O(n²).
pub fn for_each_connection<F>(points: &[(Vec2, f32)], threshold: f32, mut f: F)
where
    F: FnMut(Vec2, Vec2, f32),
{
    for i in 0..points.len() {
        let a = points[i].0;
        for b in points.iter().skip(i + 1).map(|p| p.0) {
            if let Some(alpha) = connection_alpha(a.distance(b), threshold) {
                f(a, b, alpha);
            }
        }
    }
}
