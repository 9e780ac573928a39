pub mod canvas;
pub mod config;
pub mod error;
pub mod frame;
pub mod palette;
pub mod tools;
pub mod www;

use crate::config::{ Config, LoggingConfig };
pub use error::{ Error, ErrorKind, Result };

fn setup_logging(config: &LoggingConfig) -> Result<()> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{}[{}][{}] {}",
                chrono::Local::now().format("[%Y-%m-%d %H:%M:%S]"),
                record.target(),
                record.level(),
                message,
            ))
        })
        .level(config.level)
        .chain(std::io::stdout())
        .chain(fern::log_file(&config.file).map_err(|err| Error::from(ErrorKind::LogFile, err))?)
        .apply().map_err(|err| Error::from(ErrorKind::Logging, err))
}

fn main() -> Result<()> {
    let config = Config::load()?;

    if std::env::args().any(|arg| arg == "--print-config") {
        return tools::print_config::run(&config);
    }

    setup_logging(&config.logging)?;
    log::info!("Starting server on {}:{}", config.www.bind_host, config.www.bind_port);

    www::start(config)
}
