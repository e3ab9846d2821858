//! Flag parsing for command arguments.

use std::path::PathBuf;

use spendboard_domain::PeriodSelector;

use crate::cli::error::CommandError;

/// Options accepted by the `stats` command.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct StatsArgs {
    pub dir: Option<PathBuf>,
    pub purchases: Option<PathBuf>,
    pub items: Option<PathBuf>,
    pub period: Option<PeriodSelector>,
    pub json: bool,
}

impl StatsArgs {
    pub fn parse(args: &[&str]) -> Result<Self, CommandError> {
        let mut parsed = StatsArgs::default();
        let mut tokens = args.iter().copied();

        while let Some(token) = tokens.next() {
            let (flag, inline) = match token.split_once('=') {
                Some((flag, value)) => (flag, Some(value)),
                None => (token, None),
            };
            match flag {
                "--json" => parsed.json = true,
                "--dir" | "--purchases" | "--items" | "--period" => {
                    let value = match inline {
                        Some(value) => value,
                        None => tokens.next().ok_or_else(|| {
                            CommandError::InvalidArguments(format!("`{flag}` expects a value"))
                        })?,
                    };
                    match flag {
                        "--dir" => parsed.dir = Some(PathBuf::from(value)),
                        "--purchases" => parsed.purchases = Some(PathBuf::from(value)),
                        "--items" => parsed.items = Some(PathBuf::from(value)),
                        _ => {
                            let period = value.parse::<PeriodSelector>().map_err(|err| {
                                CommandError::InvalidArguments(err.to_string())
                            })?;
                            parsed.period = Some(period);
                        }
                    }
                }
                other => {
                    return Err(CommandError::InvalidArguments(format!(
                        "unexpected argument `{other}`"
                    )))
                }
            }
        }

        if parsed.purchases.is_some() != parsed.items.is_some() {
            return Err(CommandError::InvalidArguments(
                "`--purchases` and `--items` must be given together".into(),
            ));
        }
        Ok(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_separate_and_inline_values() {
        let args = StatsArgs::parse(&["--dir", "exports", "--period=2024-03", "--json"])
            .expect("valid args");

        assert_eq!(args.dir, Some(PathBuf::from("exports")));
        assert_eq!(
            args.period,
            Some(PeriodSelector::Month {
                year: 2024,
                month: 3
            })
        );
        assert!(args.json);
    }

    #[test]
    fn file_pair_must_be_complete() {
        let err = StatsArgs::parse(&["--purchases", "p.json"]).expect_err("items missing");
        assert!(err.to_string().contains("together"));
    }

    #[test]
    fn rejects_unknown_flags_and_missing_values() {
        assert!(StatsArgs::parse(&["--verbose"]).is_err());
        assert!(StatsArgs::parse(&["--period"]).is_err());
        assert!(StatsArgs::parse(&["--period", "soon"]).is_err());
    }
}
