use crate::world::Projection;

/// Screen height ratio of a wall one unit away (vertical FoV scale, "K").
pub const WALL_SCALE: f64 = 0.75;

/// Perpendicular distance to the hit.
///
/// Planar sampling spaces rays evenly along a flat plane, so raw distances
/// bulge towards the screen edges; projecting onto the view axis with
/// `cos(direction - angle)` flattens them back. Angular sampling is
/// already curved and is returned as-is.
#[inline]
pub fn corrected_distance(
    distance: f64,
    camera_direction: f64,
    ray_angle: f64,
    projection: Projection,
) -> f64 {
    match projection {
        Projection::Planar => distance * (camera_direction - ray_angle).cos(),
        Projection::Angular => distance,
    }
}

/// Wall height in pixels for a column.
///
/// ```text
/// h = screen_h * scale / distance
/// ```
/// Anything taller than the screen is pinned to `screen_h + 2`, so a wall
/// right in front of the eye never produces a runaway span.
#[inline]
pub fn column_height(screen_h: f64, distance: f64, scale: f64) -> f64 {
    let h = screen_h * scale / distance;
    if h > screen_h { screen_h + 2.0 } else { h }
}

/// Top and bottom row of a vertically centred wall slice.
#[inline]
pub fn column_span(screen_h: f64, height: f64) -> (f64, f64) {
    let top = (screen_h - height) * 0.5;
    (top, top + height)
}
