use crate::{
    config::EngineConfig,
    engine::{
        projection::{column_height, corrected_distance},
        types::{Column, ColumnHit, Screen},
    },
    geometry::{GeometryError, Segment, intersect_ray, nearest_hit},
    world::Camera,
};

/// Cast one ray per screen column and resolve each to its nearest wall.
///
/// Columns come back left to right, `screen.w` of them, all against the
/// same wall snapshot.
pub fn cast_frame(
    camera: &Camera,
    walls: &[Segment],
    screen: &Screen,
    cfg: &EngineConfig,
) -> Result<Vec<Column>, GeometryError> {
    let mut columns = Vec::with_capacity(screen.w);
    cast_into(camera, walls, screen, cfg, &mut columns)?;
    Ok(columns)
}

/// Same as [`cast_frame`] but reuses `columns`.
pub fn cast_into(
    camera: &Camera,
    walls: &[Segment],
    screen: &Screen,
    cfg: &EngineConfig,
    columns: &mut Vec<Column>,
) -> Result<(), GeometryError> {
    columns.clear();
    let screen_h = screen.h as f64;

    for (index, sample) in camera.rays(screen.w).enumerate() {
        let (ray, _) = sample?;
        let hits = intersect_ray(&ray, cfg.cast_range, walls)?;

        let hit = nearest_hit(hits).map(|h| {
            let corrected = corrected_distance(
                h.distance,
                camera.direction(),
                ray.angle,
                camera.projection(),
            );
            ColumnHit {
                distance: h.distance,
                corrected_distance: corrected,
                height: column_height(screen_h, corrected, cfg.wall_scale),
                point: h.point,
                wall: h.wall,
            }
        });
        columns.push(Column { index, hit });
    }
    Ok(())
}
