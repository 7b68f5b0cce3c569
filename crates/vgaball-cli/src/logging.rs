use env_logger::{Builder, Env, Target};
use log::LevelFilter;

/// Log to stderr; stdout is reserved for the per-tick console lines.
/// `-v` flags take precedence over the default level, RUST_LOG over both.
pub fn setup(verbose: u8) {
    let default = match verbose {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    let mut builder = Builder::new();
    builder.filter_level(default).target(Target::Stderr);
    builder.parse_env(Env::default());
    builder.init();
}
