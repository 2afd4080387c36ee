use hms::*;
use rand::Rng;

const TRIALS: usize = 1_000;

#[test]
fn components_sum_to_seconds() -> Result<()> {
    let mut rng = rand::rng();

    for _ in 0..TRIALS {
        let (s, m, h) = (
            rng.random_range(0..100_000i64),
            rng.random_range(0..10_000i64),
            rng.random_range(0..1_000i64),
        );
        let d = Duration::from_components(Components {
            seconds: s,
            minutes: m,
            hours: h,
        })?;
        assert_eq!((s + 60 * m + 3600 * h) as u64, d.as_seconds());
    }

    Ok(())
}

#[test]
fn parse_agrees_with_components() -> Result<()> {
    let mut rng = rand::rng();

    for _ in 0..TRIALS {
        let (h, m, s) = (
            rng.random_range(0..10_000i64),
            rng.random_range(0..60i64),
            rng.random_range(0..60i64),
        );
        let parsed = Duration::from_string(&format!("{h}:{m:02}:{s:02}"))?;
        let built = Duration::from_components(Components {
            seconds: s,
            minutes: m,
            hours: h,
        })?;
        assert_eq!(built.as_seconds(), parsed.as_seconds());
    }

    Ok(())
}

#[test]
fn display_parses_back() -> Result<()> {
    let mut rng = rand::rng();

    for _ in 0..TRIALS {
        let d = Duration::from_secs(rng.random_range(0..u32::MAX as u64));
        assert_eq!(d, Duration::from_string(&d.to_string())?);
    }

    Ok(())
}

#[test]
fn ordering_matches_seconds() {
    let mut rng = rand::rng();

    for _ in 0..TRIALS {
        let (a, b) = (rng.random_range(0..1_000u64), rng.random_range(0..1_000u64));
        let (da, db) = (Duration::from_secs(a), Duration::from_secs(b));

        assert_eq!(a.cmp(&b), da.cmp(&db));
        assert_eq!(a == b, da.equals(b));
        assert_eq!(a < b, da.less_than(b));
        assert_eq!(a < b, da < b as f64);
    }
}

#[test]
fn add_then_sub_is_identity() -> Result<()> {
    let mut rng = rand::rng();

    for _ in 0..TRIALS {
        let a = Duration::from_secs(rng.random_range(0..1_000_000));
        let b = Duration::from_secs(rng.random_range(0..1_000_000));

        assert_eq!(a, ((a + b)? - b)?);
        assert_eq!(a >= b, (a - b).is_ok());
    }

    Ok(())
}

#[test]
fn scaling_by_integers() -> Result<()> {
    let mut rng = rand::rng();

    for _ in 0..TRIALS {
        let d = Duration::from_secs(rng.random_range(1..1_000_000));
        let k = rng.random_range(-1_000..1_000i64);

        match d * k {
            Ok(scaled) => {
                assert!(k >= 0);
                assert_eq!(d.as_seconds() * k as u64, scaled.as_seconds());
                assert_eq!(scaled, (k * d)?);
            }
            Err(err) => {
                assert!(k < 0);
                assert!(matches!(err, InvalidDurationError::Negative { .. }));
            }
        }
    }

    Ok(())
}
