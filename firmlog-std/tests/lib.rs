#![expect(missing_docs, reason = "tests")]

use firmlog::{LogLevel, Logger};
use firmlog_std::{SystemClock, WriteTarget};
use indoc::indoc;
use pretty_assertions::assert_eq;

#[test]
fn logger_renders_through_an_io_writer() {
    let mut buffer = Vec::new();

    {
        let target = WriteTarget::new(&mut buffer);
        let mut logger: Logger<_, _> = Logger::builder(target, || 1_000_000u64)
            .name("Host")
            .level(LogLevel::Info)
            .build();
        logger.open().unwrap();

        firmlog::info!(logger, "started");
        firmlog::warning!(logger, "load at {}%", 85);
        firmlog::debug!(logger, "scheduler tick");
    }

    assert_eq!(
        String::from_utf8(buffer).unwrap(),
        indoc! {"
            [0:00:00:01.000000 Host INFO] started
            [0:00:00:01.000000 Host WARNING] load at 85%
            [0:00:00:01.000000 Host DEBUG] scheduler tick
        "}
    );
}

#[test]
fn system_clock_drives_real_timestamps() {
    let mut buffer = Vec::new();

    {
        let target = WriteTarget::new(&mut buffer);
        let mut logger: Logger<_, _> = Logger::builder(target, SystemClock::new())
            .template("%D %T")
            .build();
        logger.open().unwrap();

        firmlog::info!(logger, "fresh process");
    }

    // A clock anchored at construction cannot have accumulated a day yet.
    assert_eq!(String::from_utf8(buffer).unwrap(), "0 fresh process\n");
}
