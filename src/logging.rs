//! Tracing setup for the binary. Logs go to stderr so stdout only ever carries the response.

use std::io::IsTerminal;

use tracing_subscriber::EnvFilter;

fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "error",
        1 => "warn",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber. Calling this twice is harmless; the second call is ignored.
pub fn init_tracing(verbosity: u8) {
    let filter = EnvFilter::new(format!("feedly_cli={}", level_for(verbosity)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_flag_raises_the_level() {
        // failures are already reported on stderr by the binary, so warnings need -v
        assert_eq!(level_for(0), "error");
        assert_eq!(level_for(1), "warn");
        assert_eq!(level_for(2), "debug");
        assert_eq!(level_for(7), "trace");
    }

    #[test]
    fn init_twice_does_not_panic() {
        init_tracing(0);
        init_tracing(3);
    }
}
