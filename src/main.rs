use anyhow::bail;
use log::info;
use outcome::{AnyOutcome, NetworkError, Outcome, SomeError};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    construction();
    widening()?;
    transforms()?;
    chaining();

    Ok(())
}

fn make_int() -> anyhow::Result<i32> {
    Ok(1)
}

fn construction() {
    let from_fn = AnyOutcome::from_fn(make_int).traced("from_fn(make_int)");
    let from_closure = AnyOutcome::from_fn(|| Ok(1)).traced("from_fn(|| 1)");
    let from_failing: AnyOutcome<i32> =
        AnyOutcome::from_fn(|| bail!(SomeError)).traced("from_fn(|| bail)");
    let success: AnyOutcome<i32> = Outcome::success(1);
    let failure: AnyOutcome<i32> = Outcome::failure(SomeError.into());

    info!(
        "construction - from_fn: {}, closure: {}, failing: {}, success: {}, failure: {}",
        from_fn.is_success(),
        from_closure.is_success(),
        from_failing.is_success(),
        success.is_success(),
        failure.is_success()
    );
}

/// Consumer that only accepts the type-erased outcome.
fn consume(outcome: AnyOutcome<i32>) -> bool {
    outcome.is_success()
}

fn widening() -> anyhow::Result<()> {
    let typed: Outcome<i32, NetworkError> = Outcome::failure(NetworkError::Status(503));

    // consume(typed) does not compile, the error type has to be converted first.
    let widened = typed.map_err(anyhow::Error::from);
    info!("widening - map_err is_success: {}", consume(widened));

    let widened = typed.widen();
    match widened.error().and_then(|e| e.downcast_ref::<NetworkError>()) {
        Some(NetworkError::Status(code)) => info!("widening - original status kept: {}", code),
        other => bail!("widened error lost its type: {:?}", other),
    }

    Ok(())
}

fn transforms() -> anyhow::Result<()> {
    let incremented = AnyOutcome::success(1).map(|x| x + 1);
    let stringified = AnyOutcome::success(1_i32).map(|x| x.to_string());
    let flat = AnyOutcome::success(1_i32).flat_map(|x| Ok(x.to_string()));
    let failed: AnyOutcome<i32> = AnyOutcome::success(1).flat_map(|_| bail!(SomeError));

    fn increment(int: i32) -> anyhow::Result<i32> {
        Ok(int + 1)
    }
    let fallible = AnyOutcome::success(1).flat_map(increment);

    if incremented.value() != Some(&2) || fallible.value() != Some(&2) {
        bail!("increment went wrong");
    }
    if stringified.value().map(String::as_str) != Some("1") || flat.value() != stringified.value()
    {
        bail!("stringify went wrong");
    }

    info!(
        "transforms - map: {:?}, flat_map: {:?}, failed: {}",
        incremented.value(),
        flat.value(),
        failed.is_failure()
    );
    Ok(())
}

fn chaining() {
    fn increment_outcome(int: i32) -> AnyOutcome<i32> {
        Outcome::success(int + 1)
    }

    fn stringify_outcome(int: i32) -> AnyOutcome<String> {
        Outcome::success(int.to_string())
    }

    let chained = AnyOutcome::success(1)
        .and_then(increment_outcome)
        .and_then(stringify_outcome)
        .traced("and_then");

    info!("chaining - result: {:?}", chained.value());
}
