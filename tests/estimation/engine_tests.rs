use rand::rngs::StdRng;
use rand::SeedableRng;
use sduct::dataset::{Catalog, DatasetError, DuctShape, Metric, ReferenceDataset};
use sduct::estimate::{estimate, estimate_with_rng, EstimateError, Estimator, EstimatorCfg, Query};
use sduct::interpolation::RangePolicy;

type SductResult = Result<(), EstimateError>;

const ATOL: f64 = 1e-9;

#[inline]
fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= ATOL
}

/// `bend_angles = [0, 15, 30]`, outlet velocity `[100, 80, 50]`, baseline 200.
fn three_point() -> ReferenceDataset {
    ReferenceDataset::from_series(
        &[0.0, 15.0, 30.0],
        200.0,
        [(Metric::OutletVelocity, vec![100.0, 80.0, 50.0])],
    )
    .expect("valid dataset")
}

#[test]
fn exact_sample_at_baseline_velocity() -> SductResult {
    let cfg = EstimatorCfg::deterministic();
    let rep = estimate(&three_point(), 15.0, 200.0, &cfg)?;
    assert_eq!(rep.get(Metric::OutletVelocity), Some(80.0));
    assert_eq!(rep.velocity_factor, 1.0);
    assert!(rep.bracket.is_exact());
    Ok(())
}

#[test]
fn midpoint_between_samples() -> SductResult {
    let cfg = EstimatorCfg::deterministic();
    let rep = estimate(&three_point(), 7.5, 200.0, &cfg)?;
    assert_eq!(rep.bracket.t, 0.5);
    assert_eq!(rep.get(Metric::OutletVelocity), Some(90.0));
    Ok(())
}

#[test]
fn doubled_velocity_scales_by_power_law() -> SductResult {
    let cfg = EstimatorCfg::deterministic();
    let rep = estimate(&three_point(), 0.0, 400.0, &cfg)?;
    let got = rep.get(Metric::OutletVelocity).unwrap();
    assert!(approx_eq(got, 100.0 * 2.0_f64.powf(1.2)));
    assert!((got - 229.74).abs() < 0.001, "got {got}");
    assert_eq!(rep.interpolated[&Metric::OutletVelocity], 100.0);
    Ok(())
}

#[test]
fn exact_match_on_every_builtin_sample() -> SductResult {
    let catalog = Catalog::builtin();
    let cfg     = EstimatorCfg::deterministic();
    let v       = 150.0;

    for (shape, dataset) in catalog.iter() {
        let factor = (v / dataset.baseline_velocity()).powf(1.2);
        for (idx, &angle) in dataset.bend_angles().iter().enumerate() {
            let rep = estimate(dataset, angle, v, &cfg)?;
            for (metric, series) in dataset.performance() {
                assert_eq!(
                    rep.values[metric],
                    series[idx] * factor,
                    "{shape} {metric} at {angle}"
                );
            }
        }
    }
    Ok(())
}

#[test]
fn interpolated_lies_between_bracketing_samples() -> SductResult {
    let catalog = Catalog::builtin();
    let cfg     = EstimatorCfg::deterministic();

    for (_, dataset) in catalog.iter() {
        for angle in [1.0, 8.3, 14.9, 20.0, 29.5, 33.3, 44.0] {
            let rep = estimate(dataset, angle, 180.0, &cfg)?;
            let b   = rep.bracket;
            for (metric, series) in dataset.performance() {
                let (lo, hi) = (series[b.lower].min(series[b.upper]), series[b.lower].max(series[b.upper]));
                let y = rep.interpolated[metric];
                assert!(lo <= y && y <= hi, "{metric} at {angle}: {y} not in [{lo}, {hi}]");
            }
        }
    }
    Ok(())
}

#[test]
fn faster_inlet_grows_every_magnitude() -> SductResult {
    let dataset = Catalog::builtin().get(DuctShape::SquareToSquare)?.clone();
    let cfg     = EstimatorCfg::deterministic();

    let mut prev = estimate(&dataset, 20.0, 68.0, &cfg)?;
    for v in [100.0, 150.0, 208.0, 240.0, 275.0] {
        let rep = estimate(&dataset, 20.0, v, &cfg)?;
        assert!(rep.velocity_factor > prev.velocity_factor);
        for (metric, &value) in &rep.values {
            assert!(value.abs() > prev.values[metric].abs(), "{metric} at v={v}");
        }
        prev = rep;
    }
    Ok(())
}

#[test]
fn identical_inputs_without_jitter_are_identical() -> SductResult {
    let dataset = Catalog::builtin().get(DuctShape::CircleToSquare)?.clone();
    let cfg     = EstimatorCfg::deterministic();

    let a = estimate(&dataset, 26.4, 173.0, &cfg)?;
    let b = estimate(&dataset, 26.4, 173.0, &cfg)?;
    assert_eq!(a, b);
    assert!(!a.jittered);
    Ok(())
}

#[test]
fn seeded_jitter_is_reproducible_and_bounded() -> SductResult {
    let dataset = Catalog::builtin().get(DuctShape::CircleToCircle)?.clone();
    let cfg     = EstimatorCfg::new();

    let a = estimate_with_rng(&dataset, 12.0, 190.0, &cfg, &mut StdRng::seed_from_u64(7))?;
    let b = estimate_with_rng(&dataset, 12.0, 190.0, &cfg, &mut StdRng::seed_from_u64(7))?;
    assert_eq!(a, b);
    assert!(a.jittered);

    for (metric, &value) in &a.values {
        let clean = a.interpolated[metric] * a.velocity_factor;
        let (lo, hi) = ((clean * 0.95).min(clean * 1.05), (clean * 0.95).max(clean * 1.05));
        assert!(lo - ATOL <= value && value <= hi + ATOL, "{metric}: {value} outside [{lo}, {hi}]");
    }
    Ok(())
}

#[test]
fn default_estimate_with_jitter_stays_in_band() -> SductResult {
    let dataset = three_point();
    for _ in 0..20 {
        let rep = estimate(&dataset, 15.0, 200.0, &EstimatorCfg::new())?;
        let v   = rep.get(Metric::OutletVelocity).unwrap();
        assert!((76.0 - ATOL..=84.0 + ATOL).contains(&v), "got {v}");
    }
    Ok(())
}

#[test]
fn boundary_angles_use_end_samples() -> SductResult {
    let dataset = Catalog::builtin().get(DuctShape::SquareToCircle)?.clone();
    let cfg     = EstimatorCfg::deterministic().set_range_policy(RangePolicy::Reject);

    let lo = estimate(&dataset, 0.0, 208.0, &cfg)?;
    let hi = estimate(&dataset, 45.0, 208.0, &cfg)?;
    assert_eq!((lo.bracket.lower, lo.bracket.upper), (0, 0));
    assert_eq!((hi.bracket.lower, hi.bracket.upper), (6, 6));
    assert_eq!(hi.get(Metric::OutletVelocity), Some(133.0));
    Ok(())
}

#[test]
fn clamp_policy_matches_end_samples() -> SductResult {
    let dataset = Catalog::builtin().get(DuctShape::CircleToCircle)?.clone();
    let cfg     = EstimatorCfg::deterministic();

    let below = estimate(&dataset, -12.0, 208.0, &cfg)?;
    let at0   = estimate(&dataset, 0.0, 208.0, &cfg)?;
    let above = estimate(&dataset, 60.0, 208.0, &cfg)?;
    let at45  = estimate(&dataset, 45.0, 208.0, &cfg)?;

    assert!(below.bracket.clamped && above.bracket.clamped);
    assert_eq!(below.values, at0.values);
    assert_eq!(above.values, at45.values);
    Ok(())
}

#[test]
fn reject_policy_errors_outside_grid() {
    let cfg = EstimatorCfg::deterministic().set_range_policy(RangePolicy::Reject);
    let err = estimate(&three_point(), 31.0, 200.0, &cfg).unwrap_err();
    match err {
        EstimateError::OutOfRange { got, min, max } => {
            assert_eq!((got, min, max), (31.0, 0.0, 30.0));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn invalid_velocity_errors() {
    let cfg = EstimatorCfg::deterministic();
    for v in [0.0, -10.0, f64::NAN, f64::INFINITY] {
        let err = estimate(&three_point(), 10.0, v, &cfg).unwrap_err();
        assert!(matches!(err, EstimateError::InvalidVelocity { .. }), "v={v}");
    }
}

#[test]
fn non_finite_angle_errors() {
    let cfg = EstimatorCfg::deterministic();
    let err = estimate(&three_point(), f64::NAN, 200.0, &cfg).unwrap_err();
    assert!(matches!(err, EstimateError::InvalidAngle { .. }));
}

#[test]
fn every_metric_is_populated() -> SductResult {
    let estimator = Estimator::new(Catalog::builtin(), EstimatorCfg::deterministic());
    let rep = estimator.estimate(&Query::new(DuctShape::SquareToSquare, 33.0, 120.0))?;
    assert_eq!(rep.values.len(), Metric::ALL.len());
    assert_eq!(rep.interpolated.len(), Metric::ALL.len());
    for metric in Metric::ALL {
        assert!(rep.get(metric).is_some_and(f64::is_finite), "{metric}");
    }
    Ok(())
}

#[test]
fn estimator_seeded_queries_match() -> SductResult {
    let estimator = Estimator::builtin();
    let query = Query::new(DuctShape::CircleToCircle, 18.0, 150.0);
    let a = estimator.estimate_with_rng(&query, &mut StdRng::seed_from_u64(42))?;
    let b = estimator.estimate_with_rng(&query, &mut StdRng::seed_from_u64(42))?;
    assert_eq!(a, b);
    Ok(())
}

#[test]
fn estimator_missing_shape_errors() -> Result<(), DatasetError> {
    let catalog   = Catalog::new().with(DuctShape::CircleToCircle, three_point())?;
    let estimator = Estimator::new(catalog, EstimatorCfg::deterministic());

    let err = estimator
        .estimate(&Query::new(DuctShape::SquareToSquare, 10.0, 200.0))
        .unwrap_err();
    assert!(matches!(
        err,
        EstimateError::Dataset(DatasetError::MissingShape(DuctShape::SquareToSquare))
    ));
    Ok(())
}
