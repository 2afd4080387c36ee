use hms::*;

#[test]
fn from_string_valid() -> Result<()> {
    assert_eq!(Duration::new(50)?, Duration::from_string("0:00:50")?);
    assert_eq!(Duration::new(70)?, Duration::from_string("0:01:10")?);
    assert_eq!(Duration::new(3601)?, Duration::from_string("1:00:01")?);
    assert_eq!(Duration::new(360001)?, Duration::from_string("100:00:01")?);

    Ok(())
}

#[test]
fn from_string_invalid() {
    assert!(Duration::from_string("invalid").is_err());
    assert!(Duration::from_string("1:2:3:4").is_err());
    assert!(Duration::from_string("abc:def:ghi").is_err());
}

#[test]
fn digits_are_checked_before_count() {
    assert_eq!(
        Err(InvalidDurationError::Malformed {
            input: "1:x".to_string()
        }),
        Duration::from_string("1:x")
    );
    assert_eq!(
        Err(InvalidDurationError::ComponentCount { found: 4 }),
        Duration::from_string("1:2:3:4")
    );
    assert_eq!(
        Err(InvalidDurationError::ComponentCount { found: 1 }),
        Duration::from_string("3600")
    );
}

#[test]
fn signs_and_whitespace_rejected() {
    for input in ["-1:00:00", "+1:00:00", "1:-1:00", " 1:00:00", "1:00:00 ", "1: 0:00", "", "1::00"] {
        assert!(
            matches!(
                Duration::from_string(input),
                Err(InvalidDurationError::Malformed { .. })
            ),
            "{input:?} should be malformed"
        );
    }
}

#[test]
fn unpadded_and_overflowing_components() -> Result<()> {
    let d = Duration::from_string("0:1:1")?;
    assert_eq!(61, d.as_seconds());
    assert_eq!("0:01:01", d.to_string());

    assert_eq!(Duration::from_minutes(90)?, "0:90:00".parse::<Duration>()?);
    assert_eq!(Duration::from_secs(125), "0:00:125".parse::<Duration>()?);

    Ok(())
}

#[test]
fn huge_components_out_of_range() {
    assert_eq!(
        Err(InvalidDurationError::OutOfRange),
        Duration::from_string("99999999999999999999999:00:00")
    );
    assert_eq!(
        Err(InvalidDurationError::OutOfRange),
        Duration::from_string(&format!("{}:00:00", u64::MAX))
    );
    assert_eq!(
        Ok(Duration::from_secs(u64::MAX)),
        Duration::from_string(&format!("0:00:{}", u64::MAX))
    );
}

#[test]
fn agrees_with_components() -> Result<()> {
    for (h, m, s) in [(0, 0, 0), (1, 2, 3), (12, 59, 59), (0, 75, 0), (1000, 0, 7)] {
        let parsed: Duration = format!("{h}:{m:02}:{s:02}").parse()?;
        let built = Duration::from_components(Components {
            seconds: s,
            minutes: m,
            hours: h,
        })?;
        assert_eq!(built, parsed);
    }

    Ok(())
}

#[test]
fn try_from_str() -> Result<()> {
    assert_eq!(Duration::from_hours(2)?, Duration::try_from("2:00:00")?);
    assert!(Duration::try_from("2h").is_err());

    Ok(())
}

#[test]
fn display_round_trip() -> Result<()> {
    for seconds in [0, 1, 59, 60, 3599, 3600, 86_399, 86_400, 1_000_000] {
        let d = Duration::from_secs(seconds);
        assert_eq!(d, d.to_string().parse::<Duration>()?);
    }

    Ok(())
}
