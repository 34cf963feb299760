use std::error::Error;

use chrono::{NaiveDate, NaiveDateTime};
use optval::{OptionalValue, ValueLike};


fn check<T>(
    name: &str,
    opt: OptionalValue<T>,
    has_value: bool,
    expected: T,
) -> Result<(), Box<dyn Error>>
where T: ValueLike + PartialEq + core::fmt::Debug
{
    let got = opt.value_or_default();
    log::info!("{name}: {:?} has_value={} value_or_default={:?}", opt, opt.has_value(), got);

    if opt.has_value() != has_value || got != expected {
        return Err(format!("{name}: expected has_value={has_value} value={expected:?}").into());
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info")
    ).init();

    check("empty i32",     OptionalValue::<i32>::empty(), false, 0)?;
    check("i32 42",        OptionalValue::new(42i32),     true,  42)?;
    check("bool true",     true.some(),                   true,  true)?;

    let epoch = NaiveDate::from_ymd_opt(1970, 1, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .ok_or("epoch out of range")?;
    check("empty datetime", OptionalValue::<NaiveDateTime>::NONE, false, epoch)?;

    let strict = OptionalValue::<u32>::empty().value();
    log::info!("strict read of empty u32: {:?}", strict);
    if strict.is_ok() {
        return Err("strict read of empty u32 succeeded".into());
    }

    log::info!("all scenarios passed");
    Ok(())
}
