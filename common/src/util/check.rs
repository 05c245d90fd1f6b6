use crate::db::core::{DataType, DieValue, WaferMap, WaferSpec};
use crate::geom::coord::{DieSize, GridCenter};
use rayon::prelude::*;
use std::collections::HashSet;

/// Validates a wafer before it is laid out.
///
/// Broken preconditions (die size, diameter, exclusions, grid center) fail
/// the check. Data-quality findings are logged as warnings only, since the
/// renderer copes with them.
pub fn run(map: &WaferMap) -> Result<(), String> {
    log::info!("Checking wafer map ({} die)", map.num_dies());
    let mut errors = Vec::new();

    let info = &map.info;
    let spec = &info.spec;
    let preconditions = [
        DieSize::new(info.die_size.width, info.die_size.height).err(),
        GridCenter::new(info.grid_center.x, info.grid_center.y).err(),
        WaferSpec::new(spec.diameter, spec.edge_exclusion, spec.flat_exclusion).err(),
    ];
    for e in preconditions.into_iter().flatten() {
        log::error!("\x1b[31mFAIL\x1b[0m: {}", e);
        errors.push(e.to_string());
    }
    if errors.is_empty() {
        log::info!("\x1b[32mPASS\x1b[0m: Wafer parameters are valid.");
    }

    if spec.exclusion_radius() <= 0.0 {
        log::warn!(
            "Edge exclusion {}mm leaves no usable area; the exclusion boundary will be empty.",
            spec.edge_exclusion
        );
    }

    let duplicates = duplicate_count(map);
    if duplicates > 0 {
        log::warn!("{} die share a grid coordinate; the last record wins.", duplicates);
    } else {
        log::info!("\x1b[32mPASS\x1b[0m: Grid coordinates are unique.");
    }

    let (mismatched, non_finite) = value_findings(map);
    if mismatched > 0 {
        log::warn!(
            "{} die values don't match the {:?} data type and will use the invalid color.",
            mismatched,
            map.data_type
        );
    }
    if non_finite > 0 {
        log::warn!("{} die values are NaN or infinite.", non_finite);
    }
    if mismatched == 0 && non_finite == 0 {
        log::info!("\x1b[32mPASS\x1b[0m: All die values are usable.");
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors.join("; "))
    }
}

fn duplicate_count(map: &WaferMap) -> usize {
    let mut seen = HashSet::with_capacity(map.num_dies());
    map.dies.iter().filter(|d| !seen.insert(d.grid)).count()
}

fn value_findings(map: &WaferMap) -> (usize, usize) {
    map.dies
        .par_iter()
        .map(|d| match (&d.value, map.data_type) {
            (DieValue::Number(v), DataType::Continuous) => (0, usize::from(!v.is_finite())),
            (DieValue::Label(_), DataType::Continuous) => (1, 0),
            (_, DataType::Discrete) => (0, 0),
        })
        .reduce(|| (0, 0), |a, b| (a.0 + b.0, a.1 + b.1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::core::{DieRecord, WaferInfo};

    fn map(dies: Vec<DieRecord>) -> WaferMap {
        let info = WaferInfo::new(
            DieSize::new(5.0, 5.0).unwrap(),
            GridCenter::new(10.0, 10.0).unwrap(),
            WaferSpec::new(100.0, 5.0, 5.0).unwrap(),
        )
        .unwrap();
        WaferMap::new(info, DataType::Continuous, dies)
    }

    #[test]
    fn data_quality_issues_pass() {
        let m = map(vec![
            DieRecord::new(1, 1, 1.0),
            DieRecord::new(1, 1, f64::NAN),
            DieRecord::new(2, 1, "x"),
        ]);
        assert_eq!(duplicate_count(&m), 1);
        assert_eq!(value_findings(&m), (1, 1));
        assert!(run(&m).is_ok());
    }

    #[test]
    fn broken_preconditions_fail() {
        let mut m = map(Vec::new());
        m.info.die_size.width = 0.0;
        m.info.spec.diameter = f64::NAN;
        let err = run(&m).unwrap_err();
        assert!(err.contains("die size"));
        assert!(err.contains("diameter"));
    }
}
