//! Tests for embedding generated tubes in higher-dimensional spaces.

use rand::prelude::*;

use tubegen::{EmbedParams, GenError, TubeCloud, TubeConfig};

/// A generated tube with exactly 50 points, via a supplied line.
fn small_tube<R: Rng>(rng: &mut R) -> Result<TubeCloud, GenError> {
    let line = (0..50).map(|i| f64::from(i) * 0.5 - 12.25).collect();
    let config = TubeConfig {
        line: Some(line),
        ..TubeConfig::default()
    };
    TubeCloud::generate(&config, rng)
}

#[test]
fn fifty_points_in_eight_dimensions() -> Result<(), GenError> {
    let mut rng = rand::rngs::StdRng::seed_from_u64(42);
    let tube = small_tube(&mut rng)?;
    let params = EmbedParams {
        num_dimensions: 8,
        large_noise: true,
        data_first: true,
    };

    let embedded = tube.embed(&params, &mut rng)?;
    assert_eq!(embedded.dimensionality(), 8);
    assert_eq!(embedded.cardinality(), 50);

    assert_eq!(embedded.row(0), tube.points().x());
    assert_eq!(embedded.row(1), tube.points().y());
    assert_eq!(embedded.row(2), tube.points().z());
    for i in 3..8 {
        assert!(embedded.row(i).iter().all(|v| v.is_finite()));
    }
    Ok(())
}

#[test]
fn shuffled_rows_are_findable() -> Result<(), GenError> {
    let mut rng = rand::rngs::StdRng::seed_from_u64(42);
    let tube = small_tube(&mut rng)?;
    let params = EmbedParams {
        num_dimensions: 8,
        large_noise: true,
        data_first: false,
    };

    let embedded = tube.embed(&params, &mut rng)?;
    let sources = [
        tube.points().x(),
        tube.points().y(),
        tube.points().z(),
    ];

    // Locate each data row through the recorded permutation.
    for (source_index, &source) in sources.iter().enumerate() {
        let position = embedded
            .permutation()
            .iter()
            .position(|&i| i == source_index)
            .ok_or_else(|| GenError::InvalidArgument("missing data row".to_string()))?;
        assert_eq!(embedded.row(position), source);
    }
    Ok(())
}

#[test]
fn embedding_leaves_the_dataset_alone() -> Result<(), GenError> {
    let mut rng = rand::rngs::StdRng::seed_from_u64(42);
    let tube = small_tube(&mut rng)?;
    let before = tube.clone();

    let _embedded = tube.embed(&EmbedParams::default(), &mut rng)?;
    assert_eq!(tube, before);
    Ok(())
}

#[test]
fn default_embedding_is_seven_dimensional() -> Result<(), GenError> {
    let mut rng = rand::rngs::StdRng::seed_from_u64(42);
    let tube = TubeCloud::generate(&TubeConfig::default(), &mut rng)?;

    let embedded = tube.embed(&EmbedParams::default(), &mut rng)?;
    assert_eq!(embedded.dimensionality(), 7);
    assert_eq!(embedded.cardinality(), 101);
    assert_eq!(embedded.permutation(), &[0, 1, 2, 3, 4, 5, 6]);
    Ok(())
}

#[test]
fn too_few_dimensions_is_an_error() -> Result<(), GenError> {
    let mut rng = rand::rngs::StdRng::seed_from_u64(42);
    let tube = TubeCloud::generate(&TubeConfig::default(), &mut rng)?;

    let params = EmbedParams {
        num_dimensions: 2,
        ..EmbedParams::default()
    };
    assert!(matches!(
        tube.embed(&params, &mut rng),
        Err(GenError::InvalidArgument(_))
    ));
    Ok(())
}
