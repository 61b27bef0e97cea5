use maybe::{AbsentValueError, Maybe};
use pretty_assertions::assert_eq;

#[test]
fn test_of() {
    let m = Maybe::of("test");
    assert!(m.is_just());
    assert!(!m.is_nothing());
    assert_eq!(m.just(), Ok(&"test"));
}

#[test]
fn test_of_none() {
    let m: Maybe<&str> = Maybe::of(None);
    assert!(!m.is_just());
    assert!(m.is_nothing());
}

#[test]
fn test_from_just() {
    let m = Maybe::from_just("test").unwrap();
    assert!(m.is_just());
    assert_eq!(m.just(), Ok(&"test"));
}

#[test]
fn test_from_just_on_none() {
    let result = Maybe::<&str>::from_just(None);
    assert_eq!(result.err(), Some(AbsentValueError::RequiredWasAbsent));
}

#[test]
fn test_from_nothing() {
    let m = Maybe::<String>::from_nothing();
    assert!(m.is_nothing());
}

#[test]
fn test_just() {
    let corpse = String::from("a");
    let m = Maybe::of(corpse.clone());
    assert_eq!(m.just(), Ok(&corpse));
    // repeated extraction yields the same value
    assert_eq!(m.just(), Ok(&corpse));
    assert_eq!(m.into_just(), Ok(corpse));
}

#[test]
fn test_just_on_nothing() {
    let m = Maybe::<i32>::of(None);
    assert_eq!(m.just(), Err(AbsentValueError::UnwrappedAbsent));
    assert_eq!(m.into_just(), Err(AbsentValueError::UnwrappedAbsent));
}

#[test]
fn test_just_propagates_with_question_mark() {
    fn double(m: &Maybe<i32>) -> Result<i32, AbsentValueError> {
        Ok(m.just()? * 2)
    }

    assert_eq!(double(&Maybe::of(21)), Ok(42));
    assert_eq!(double(&Maybe::from_nothing()), Err(AbsentValueError::UnwrappedAbsent));
}

#[test]
fn test_absence_converts_into_anyhow() -> anyhow::Result<()> {
    let m = Maybe::from_just(7)?;
    assert_eq!(*m.just()?, 7);

    let err = anyhow::Error::from(Maybe::<i32>::from_nothing().into_just().unwrap_err());
    assert!(err.downcast_ref::<AbsentValueError>().is_some());
    Ok(())
}

#[test]
fn test_just_continuation() {
    let mut o = Vec::new();

    Maybe::of("test").on_just(|_| o.push(1));
    Maybe::<&str>::of(None).on_just(|_| o.push(2));

    assert_eq!(o, vec![1]);
}

#[test]
fn test_just_continuation_receives_value() {
    let mut seen = None;
    Maybe::of(5).on_just(|v| seen = Some(*v));
    assert_eq!(seen, Some(5));
}

#[test]
fn test_nothing_continuation() {
    let mut o = Vec::new();

    Maybe::of("test").on_nothing(|| o.push(1));
    Maybe::<&str>::of(None).on_nothing(|| o.push(2));

    assert_eq!(o, vec![2]);
}

#[test]
fn test_continuations_return_same_wrapper() {
    let m = Maybe::of(1);
    let r = m.on_just(|_| {}).on_nothing(|| {});
    assert!(std::ptr::eq(&m, r));

    let n = Maybe::<i32>::from_nothing();
    let r = n.on_nothing(|| {}).on_just(|_| {});
    assert!(std::ptr::eq(&n, r));
}

#[test]
fn test_chained_continuations() {
    let mut just_calls = 0;
    let mut nothing_calls = 0;

    Maybe::of("x")
        .on_just(|_| just_calls += 1)
        .on_nothing(|| nothing_calls += 1)
        .on_just(|_| just_calls += 1);

    assert_eq!(just_calls, 2);
    assert_eq!(nothing_calls, 0);

    Maybe::<&str>::from_nothing()
        .on_just(|_| just_calls += 1)
        .on_nothing(|| nothing_calls += 1);

    assert_eq!(just_calls, 2);
    assert_eq!(nothing_calls, 1);
}
