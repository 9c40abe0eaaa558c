#[cfg(test)]
mod tests {
    use super::super::Logger;
    use crate::clock::FixedClock;
    use crate::config::LoggerOptions;
    use crate::colors::ColorTable;
    use crate::console::{Channel, MemoryConsole};
    use crate::error::Error;
    use crate::format::Target;
    use crate::level::{LevelSpec, Severity};
    use chrono::{Local, TimeZone};
    use std::sync::Arc;

    fn fixed_clock() -> FixedClock {
        FixedClock(Local.with_ymd_and_hms(2024, 5, 23, 17, 0, 0).unwrap())
    }

    fn capture_logger(level: impl Into<LevelSpec>, target: Target) -> (Logger, Arc<MemoryConsole>) {
        let console = Arc::new(MemoryConsole::new());
        let logger = Logger::builder()
            .level(level)
            .target(target)
            .console(console.clone())
            .clock(fixed_clock())
            .build()
            .unwrap();
        (logger, console)
    }

    #[test]
    fn test_default_minimum_is_info() {
        let (logger, console) = capture_logger(LevelSpec::default(), Target::Terminal);
        assert_eq!(logger.minimum_level(), Severity::Info);

        logger.trace(&[&"Trace message"]);
        logger.debug(&[&"Debug message"]);
        assert!(console.is_empty());

        logger.info(&[&"Info message"]);
        logger.warn(&[&"Warn message"]);
        logger.error(&[&"Error message"]);

        let channels: Vec<Channel> = console.records().into_iter().map(|(c, _)| c).collect();
        assert_eq!(channels, vec![Channel::Info, Channel::Warn, Channel::Error]);
    }

    #[test]
    fn test_numeric_levels() {
        for rank in [-1i64, 5] {
            let result = Logger::builder().level(rank).console(MemoryConsole::new()).build();
            assert!(
                matches!(result, Err(Error::InvalidConfiguration(_))),
                "rank {} should be rejected",
                rank
            );
        }

        for rank in 0..5i64 {
            let logger = Logger::builder()
                .level(rank)
                .console(MemoryConsole::new())
                .build()
                .unwrap();
            assert_eq!(logger.minimum_level().rank() as i64, rank);
        }
    }

    #[test]
    fn test_named_levels() {
        for label in ["ERROR", "DEBUG", "INFO", "TRACE", "WARN"] {
            let spec: LevelSpec = label.parse().unwrap();
            let logger = Logger::builder()
                .level(spec)
                .console(MemoryConsole::new())
                .build()
                .unwrap();
            assert_eq!(logger.minimum_level().label(), label);
        }
    }

    #[test]
    fn test_each_method_logs_tag_date_message() {
        let cases = [
            (Severity::Trace, Channel::Debug),
            (Severity::Debug, Channel::Debug),
            (Severity::Info, Channel::Info),
            (Severity::Warn, Channel::Warn),
            (Severity::Error, Channel::Error),
        ];

        for (severity, channel) in cases {
            let (logger, console) = capture_logger(severity, Target::Terminal);
            let message = format!("{} message", severity);

            match severity {
                Severity::Trace => logger.trace(&[&message]),
                Severity::Debug => logger.debug(&[&message]),
                Severity::Info => logger.info(&[&message]),
                Severity::Warn => logger.warn(&[&message]),
                Severity::Error => logger.error(&[&message]),
            }

            let records = console.records();
            assert_eq!(records.len(), 1, "{} should be emitted", severity);
            let (got_channel, args) = &records[0];
            assert_eq!(*got_channel, channel);
            assert_eq!(args.len(), 3);
            assert!(args[0].contains(&format!("[{}]", severity.padded_tag())));
            assert_eq!(args[2], message);
        }
    }

    #[test]
    fn test_suppressed_below_minimum() {
        let cases = [
            (Severity::Info, Severity::Debug),
            (Severity::Warn, Severity::Info),
            (Severity::Error, Severity::Warn),
            (Severity::Debug, Severity::Trace),
        ];

        for (minimum, call) in cases {
            let (logger, console) = capture_logger(minimum, Target::Terminal);
            logger.emit(call, &[&"hidden"]);
            assert!(console.is_empty(), "{} logged at minimum {}", call, minimum);
        }
    }

    #[test]
    fn test_same_call_same_output() {
        let (logger, console) = capture_logger(Severity::Trace, Target::BrowserConsole);

        logger.warn(&[&"disk", &"#ff0", &90]);
        logger.warn(&[&"disk", &"#ff0", &90]);

        let records = console.records();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0], records[1]);
    }

    #[test]
    fn test_browser_target_end_to_end() {
        let (logger, console) = capture_logger(Severity::Trace, Target::BrowserConsole);
        assert_eq!(logger.colors(), &ColorTable::browser());

        logger.error(&[&"hi", &"#ff0000", &"there"]);

        let records = console.records();
        let (channel, args) = &records[0];
        assert_eq!(*channel, Channel::Error);
        assert!(args[0].starts_with("%c[ERROR] %c"));
        assert!(args[0].ends_with(" hi there"));
        assert_eq!(
            &args[1..],
            &["color: red", "color: inherit", "color: #ff0000"]
        );
    }

    #[test]
    fn test_color_override() {
        let console = Arc::new(MemoryConsole::new());
        let mut colors = ColorTable::terminal();
        colors.info = "\u{1b}[34m".to_string();

        let logger = Logger::builder()
            .target(Target::Terminal)
            .colors(colors)
            .console(console.clone())
            .clock(fixed_clock())
            .build()
            .unwrap();
        logger.info(&[&"blue"]);

        assert_eq!(console.records()[0].1[0], "\u{1b}[34m[INFO ]\u{1b}[0m");
    }

    #[test]
    fn test_timestamp_taken_from_clock() {
        let (logger, console) = capture_logger(Severity::Info, Target::Terminal);

        logger.info(&[&"hello"]);

        let expected = crate::format::localized_timestamp(&fixed_clock().0, chrono::Locale::ja_JP);
        assert_eq!(console.records()[0].1[1], expected);
    }

    #[test]
    fn test_unknown_locale_falls_back() {
        let console = Arc::new(MemoryConsole::new());
        let logger = Logger::builder()
            .locale("xx-YY")
            .console(console.clone())
            .clock(fixed_clock())
            .build()
            .unwrap();

        assert_eq!(logger.locale(), "xx-YY");

        logger.info(&[&"hello"]);
        let expected = crate::format::localized_timestamp(&fixed_clock().0, chrono::Locale::ja_JP);
        assert_eq!(console.records()[0].1[1], expected);
    }

    #[test]
    fn test_log_facade_bridge() {
        let (logger, console) = capture_logger(Severity::Info, Target::Terminal);

        assert!(!log::Log::enabled(
            &logger,
            &log::Metadata::builder().level(log::Level::Debug).build()
        ));

        log::Log::log(
            &logger,
            &log::Record::builder()
                .level(log::Level::Warn)
                .args(format_args!("bridged {}", 1))
                .build(),
        );
        log::Log::log(
            &logger,
            &log::Record::builder()
                .level(log::Level::Trace)
                .args(format_args!("dropped"))
                .build(),
        );

        let records = console.records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].0, Channel::Warn);
        assert_eq!(records[0].1[2], "bridged 1");
    }

    #[test]
    fn test_partial_browser_colors_from_yaml() {
        let options = LoggerOptions::from_yaml_str("target: browser\ncolors:\n  error: crimson\n").unwrap();
        let console = Arc::new(MemoryConsole::new());
        let logger = Logger::builder()
            .options(options)
            .console(console.clone())
            .clock(fixed_clock())
            .build()
            .unwrap();

        logger.error(&[&"hi"]);

        let records = console.records();
        assert_eq!(&records[0].1[1..], &["color: crimson", "color: inherit"]);
    }

    // The only test that sets the process-wide logger
    #[test]
    fn test_install_sets_max_level() {
        let (logger, console) = capture_logger(Severity::Warn, Target::Terminal);

        logger.install().unwrap();

        assert_eq!(log::max_level(), log::LevelFilter::Warn);
        log::warn!("installed warn");
        log::info!("installed info");

        let messages: Vec<String> = console
            .records()
            .into_iter()
            .filter(|(channel, _)| *channel == Channel::Warn)
            .filter_map(|(_, args)| args.last().cloned())
            .collect();
        assert!(messages.iter().any(|m| m == "installed warn"));
        assert!(!console.records().iter().any(|(_, args)| args.last().map(String::as_str) == Some("installed info")));
    }
}
