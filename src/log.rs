use ::log::LevelFilter;
use std::{io::Write, time::Instant};

/// Installs an `env_logger` that writes to stderr; each line carries the time since the logger
/// was built. `RUST_LOG` overrides the given level. Subsequent calls have no effect.
pub fn build_logger_for_level(level: LevelFilter) {
    let start = Instant::now();

    let _ = env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format(move |buf, record| {
            writeln!(
                buf,
                "[{:>8.3}s {:<5} {}] {}",
                start.elapsed().as_secs_f64(),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .try_init();
}

/// Raises `default` by one level per occurrence of `-v`
pub fn build_logger_for_verbosity(default: LevelFilter, verbosity: usize) {
    build_logger_for_level(level_for_verbosity(default, verbosity));
}

fn level_for_verbosity(default: LevelFilter, verbosity: usize) -> LevelFilter {
    const LEVELS: [LevelFilter; 6] = [
        LevelFilter::Off,
        LevelFilter::Error,
        LevelFilter::Warn,
        LevelFilter::Info,
        LevelFilter::Debug,
        LevelFilter::Trace,
    ];

    let base = LEVELS.iter().position(|&l| l == default).unwrap_or(2);
    LEVELS[(base + verbosity).min(LEVELS.len() - 1)]
}
