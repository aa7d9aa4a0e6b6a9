use anyhow::bail;

/// One control interaction from the command line
#[derive(Debug, PartialEq, Eq)]
pub enum Step {
    Reset,
    LegacyShift,
    LegacyJump,
    LegacyStoreLoad,
    SwitchMode,
    /// Raw text, parsed by the dispatcher the same way the range input is
    CycleRate(String),
    Click,
}

pub fn parse_step(arg: &str) -> anyhow::Result<Step> {
    if let Some(rate) = arg.strip_prefix("rate=") {
        return Ok(Step::CycleRate(rate.to_string()));
    }
    Ok(match arg {
        "reset" => Step::Reset,
        "shift" => Step::LegacyShift,
        "jump" => Step::LegacyJump,
        "storeload" => Step::LegacyStoreLoad,
        "mode" => Step::SwitchMode,
        "click" => Step::Click,
        other => bail!("Unknown step {other:?} (expected reset, shift, jump, storeload, mode, click or rate=<n>)"),
    })
}
