use crate::db::core::{DataType, DieRecord, DieValue, WaferInfo, WaferMap, WaferSpec};
use crate::error::WaferError;
use crate::geom::coord::{DieSize, GridCenter, GridCoord};
use crate::geom::point::Point;
use crate::geom::rect::Rect;
use crate::util::config::WaferConfig;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

const DIAMETERS: [f64; 4] = [100.0, 150.0, 200.0, 210.0];
const EXCLUSIONS: [f64; 4] = [0.0, 2.5, 5.0, 10.0];
const OFFSETS: [f64; 4] = [0.0, 0.5, -2.0, 0.24];

/// Picks wafer parameters the way the demo data set does: a random tabled
/// or notched diameter, exclusions, grid offsets and a 5-10mm die.
pub fn random_wafer_config(seed: u64) -> WaferConfig {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut pick = |list: &[f64]| list.choose(&mut rng).copied().unwrap_or_default();
    let diameter = pick(&DIAMETERS);
    let edge_exclusion = pick(&EXCLUSIONS);
    let flat_exclusion = pick(&EXCLUSIONS);
    let x_offset = pick(&OFFSETS);
    let y_offset = pick(&OFFSETS);
    WaferConfig {
        diameter,
        edge_exclusion,
        flat_exclusion,
        die_width: rng.gen_range(5.0..10.0),
        die_height: rng.gen_range(5.0..10.0),
        x_offset,
        y_offset,
        seed,
        ..WaferConfig::default()
    }
}

/// Fills a wafer with every die that fits inside the exclusion boundary.
///
/// `flat_length` is the wafer's SEMI flat length, `None` for notched wafers.
/// Continuous wafers get the squared die-center radius as value, discrete
/// ones a random pick from `cfg.labels`.
pub fn generate_fake_data(
    cfg: &WaferConfig,
    flat_length: Option<f64>,
) -> Result<WaferMap, WaferError> {
    let die_size = DieSize::new(cfg.die_width, cfg.die_height)?;
    let spec = WaferSpec::new(cfg.diameter, cfg.edge_exclusion, cfg.flat_exclusion)?;
    let mut rng = StdRng::seed_from_u64(cfg.seed);

    let excl_sqrd = spec.exclusion_radius().max(0.0).powi(2);
    let flat_line = spec.flat_exclusion_line(flat_length);

    // Twice the diameter in each direction leaves room to shift the center.
    let grid_max_x = 2 * (spec.diameter / die_size.width).ceil() as i32;
    let grid_max_y = 2 * (spec.diameter / die_size.height).ceil() as i32;
    let grid_center = GridCenter::new(
        f64::from(grid_max_x) / 2.0 + cfg.x_offset,
        f64::from(grid_max_y) / 2.0 + cfg.y_offset,
    )?;

    let mut dies = Vec::new();
    for x in 1..grid_max_x {
        for y in 1..grid_max_y {
            let center = Point::new(
                die_size.width * (f64::from(x) - grid_center.x),
                die_size.height * (grid_center.y - f64::from(y)),
            );
            let rect = Rect::from_origin(center - die_size.half(), die_size);
            let below_flat = flat_line.is_some_and(|y| rect.min.y < y);
            if rect.max_dist_sqrd() > excl_sqrd || below_flat {
                continue;
            }
            let value = match cfg.data_type {
                DataType::Continuous => DieValue::Number(center.x * center.x + center.y * center.y),
                DataType::Discrete => match cfg.labels.choose(&mut rng) {
                    Some(label) => DieValue::Label(label.clone()),
                    None => DieValue::Label(String::new()),
                },
            };
            dies.push(DieRecord {
                grid: GridCoord::new(x, y),
                value,
            });
        }
    }

    log::info!(
        "Generated {} die on a {}mm wafer ({}x{} grid)",
        dies.len(),
        spec.diameter,
        grid_max_x,
        grid_max_y
    );
    let info = WaferInfo::new(die_size, grid_center, spec)?;
    Ok(WaferMap::new(info, cfg.data_type, dies))
}
