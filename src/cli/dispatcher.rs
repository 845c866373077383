use crate::cli::main_types::{Align, Commands, ConfigCommands, DateFormat, OutputFormat};
use crate::core::{Amount, Lexicon, NumeralLocalizer};
use crate::display::{TableDisplay, WordsRow, render_json, render_plain};
use crate::error::AppError;
use crate::storage::config::Config;
use crate::utils::data;
use crate::utils::date::{self, DayBoundary};
use crate::utils::logging::VerboseLogger;
use std::path::PathBuf;

/// Calendar and clock offsets applied by `propis date`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateShift {
    pub years: i32,
    pub months: i32,
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

pub struct Dispatcher {
    config: Config,
    config_path: Option<PathBuf>,
    logger: VerboseLogger,
}

impl Dispatcher {
    pub fn new(config: Config, config_path: Option<PathBuf>, verbose: bool) -> Self {
        Self {
            config,
            config_path,
            logger: VerboseLogger::new(verbose),
        }
    }

    /// Run a command and return what should be printed.
    pub fn dispatch(&mut self, command: Commands) -> Result<String, AppError> {
        match command {
            Commands::Words {
                amounts,
                currency,
                output,
            } => self.handle_words(&amounts, currency.as_deref(), output),
            Commands::Date {
                value,
                format,
                align,
                add_years,
                add_months,
                add_days,
                add_hours,
                add_minutes,
                add_seconds,
            } => {
                let shift = DateShift {
                    years: add_years,
                    months: add_months,
                    days: add_days,
                    hours: add_hours,
                    minutes: add_minutes,
                    seconds: add_seconds,
                };
                self.handle_date(&value, format, align, shift)
            }
            Commands::Config { command } => self.handle_config_command(command),
        }
    }

    fn handle_words(
        &self,
        amounts: &[String],
        currency: Option<&str>,
        output: OutputFormat,
    ) -> Result<String, AppError> {
        let currency = self.config.currency(currency)?;
        self.logger.log(&format!(
            "Spelling {} amount(s) in {}",
            amounts.len(),
            currency.code
        ));

        let code = currency.code.clone();
        let localizer = NumeralLocalizer::new(Lexicon::russian().with_currency(currency));

        let rows = amounts
            .iter()
            .map(|input| -> Result<WordsRow, AppError> {
                let amount: Amount = input.parse()?;
                self.logger.log(&format!("Parsed '{}' as {}", input, amount));
                Ok(WordsRow::new(
                    &amount.to_string(),
                    &code,
                    &localizer.to_words(amount),
                ))
            })
            .collect::<Result<Vec<_>, _>>()?;

        match output {
            OutputFormat::Plain => Ok(render_plain(&rows)),
            OutputFormat::Table => Ok(TableDisplay::new().render_words(&rows)),
            OutputFormat::Json => render_json(&rows),
        }
    }

    /// Intervals are applied first, then the result is aligned to its day.
    fn handle_date(
        &self,
        value: &str,
        format: DateFormat,
        align: Option<Align>,
        shift: DateShift,
    ) -> Result<String, AppError> {
        let parsed = date::parse_date_time(value)?;
        self.logger
            .log(&format!("Parsed date {} with {:?}", date::sql_date_time(&parsed), shift));

        let shifted = date::add_date_interval(&parsed, shift.years, shift.months, shift.days)?;
        let shifted = date::add_time_interval(&shifted, shift.hours, shift.minutes, shift.seconds)?;
        let result = match align {
            Some(Align::Start) => date::align_to_day(&shifted, DayBoundary::Start),
            Some(Align::End) => date::align_to_day(&shifted, DayBoundary::End),
            None => shifted,
        };

        Ok(match format {
            DateFormat::Sql => date::sql_date(&result),
            DateFormat::SqlTime => date::sql_date_time(&result),
            DateFormat::Intl => date::day_month_year(&result),
            DateFormat::Parts => {
                let parts = date::explode_date(&result);
                format!(
                    "year: {}\nmonth: {}\nday: {}\nhour: {}\nminute: {}\nsecond: {}",
                    parts.year, parts.month, parts.day, parts.hour, parts.minute, parts.second
                )
            }
        })
    }

    fn handle_config_command(&mut self, command: ConfigCommands) -> Result<String, AppError> {
        match command {
            ConfigCommands::Show => {
                self.logger.log("Attempting config show command");

                let path = match &self.config_path {
                    Some(p) => p.clone(),
                    None => Config::config_file_path()?,
                };
                let mut lines = vec![format!("# {}", path.display())];
                lines.extend(
                    data::flatten(&self.config.to_table()?)
                        .into_iter()
                        .map(|(key, value)| format!("{} = {}", key, value)),
                );
                Ok(lines.join("\n"))
            }
            ConfigCommands::Set { key, value } => {
                self.logger.log(&format!(
                    "Attempting config set - key: {}, value: {}",
                    key, value
                ));
                self.config.set(&key, &value)?;
                self.config.save(self.config_path.clone())?;
                Ok(format!(
                    "{} = {}",
                    key,
                    self.config.default_currency.as_deref().unwrap_or_default()
                ))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{AmountError, ConfigError};
    use tempfile::{TempDir, tempdir};

    fn create_test_dispatcher() -> (Dispatcher, TempDir) {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let path = temp_dir.path().join("config.toml");
        (Dispatcher::new(Config::default(), Some(path), true), temp_dir)
    }

    fn words(amounts: &[&str], output: OutputFormat) -> Commands {
        Commands::Words {
            amounts: amounts.iter().map(|a| a.to_string()).collect(),
            currency: None,
            output,
        }
    }

    #[test]
    fn test_words_plain() {
        let (mut d, _dir) = create_test_dispatcher();
        let output = d
            .dispatch(words(&["0", "21,5"], OutputFormat::Plain))
            .expect("valid amounts");
        assert_eq!(
            output,
            "рублей 00 копеек\nдвадцать один рубль пятьдесят копеек"
        );
    }

    #[test]
    fn test_words_json() {
        let (mut d, _dir) = create_test_dispatcher();
        let output = d
            .dispatch(words(&["1000"], OutputFormat::Json))
            .expect("valid amount");
        let parsed: serde_json::Value = serde_json::from_str(&output).expect("valid JSON");
        assert_eq!(parsed[0]["amount"], "1000.00");
        assert_eq!(parsed[0]["currency"], "RUB");
        assert_eq!(parsed[0]["words"], "одна тысяча рублей 00 копеек");
    }

    #[test]
    fn test_words_rejects_negative() {
        let (mut d, _dir) = create_test_dispatcher();
        let result = d.dispatch(words(&["1", "-1"], OutputFormat::Plain));
        assert!(matches!(
            result,
            Err(AppError::Amount(AmountError::Negative { .. }))
        ));
    }

    #[test]
    fn test_words_unknown_currency() {
        let (mut d, _dir) = create_test_dispatcher();
        let result = d.dispatch(Commands::Words {
            amounts: vec!["1".to_string()],
            currency: Some("EUR".to_string()),
            output: OutputFormat::Plain,
        });
        assert!(matches!(
            result,
            Err(AppError::Config(ConfigError::UnknownCurrency { .. }))
        ));
    }

    #[test]
    fn test_date_shift_and_align() {
        let (d, _dir) = create_test_dispatcher();
        let shift = DateShift {
            months: 1,
            hours: 2,
            ..DateShift::default()
        };
        let output = d
            .handle_date("2024-01-31 10:00:00", DateFormat::SqlTime, None, shift)
            .expect("valid date");
        assert_eq!(output, "2024-02-29 12:00:00");

        let output = d
            .handle_date("2024-01-31 10:00:00", DateFormat::Sql, Some(Align::End), shift)
            .expect("valid date");
        assert_eq!(output, "2024-02-29");

        let output = d
            .handle_date("2024-01-31 10:00:00", DateFormat::SqlTime, Some(Align::End), shift)
            .expect("valid date");
        assert_eq!(output, "2024-02-29 23:59:59");
    }

    #[test]
    fn test_date_formats() {
        let (d, _dir) = create_test_dispatcher();
        let shift = DateShift::default();
        assert_eq!(
            d.handle_date("2024-03-07", DateFormat::Intl, None, shift)
                .expect("valid date"),
            "07 03 2024"
        );
        let parts = d
            .handle_date("2024-03-07 01:02:03", DateFormat::Parts, None, shift)
            .expect("valid date");
        assert!(parts.starts_with("year: 2024\nmonth: 3\nday: 7"));
        assert!(parts.ends_with("second: 3"));
        assert!(d.handle_date("nope", DateFormat::Sql, None, shift).is_err());
    }

    #[test]
    fn test_config_show_flattens() {
        let (mut d, _dir) = create_test_dispatcher();
        let output = d
            .dispatch(Commands::Config {
                command: ConfigCommands::Show,
            })
            .expect("show succeeds");
        assert!(output.contains("default_currency = RUB"));
        assert!(output.contains("currencies.RUB.minor.gender = feminine"));
    }

    #[test]
    fn test_config_set_persists() {
        let (mut d, dir) = create_test_dispatcher();
        let result = d.dispatch(Commands::Config {
            command: ConfigCommands::Set {
                key: "default_currency".to_string(),
                value: "rub".to_string(),
            },
        });
        assert_eq!(result.expect("set succeeds"), "default_currency = RUB");
        assert!(dir.path().join("config.toml").exists());

        let result = d.dispatch(Commands::Config {
            command: ConfigCommands::Set {
                key: "locale".to_string(),
                value: "ru".to_string(),
            },
        });
        assert!(matches!(
            result,
            Err(AppError::Config(ConfigError::UnknownKey { .. }))
        ));
    }
}
