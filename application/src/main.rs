use std::{io, sync::OnceLock};

use application::{Args, Config, Error};
use service::Service;
use tracing as log;
use tracing_subscriber::{
    filter::filter_fn,
    layer::{Layer as _, SubscriberExt as _},
    util::SubscriberInitExt as _,
};

const STDERR_LEVELS: &[log::Level] = &[log::Level::WARN, log::Level::ERROR];

static LOG_LEVEL: OnceLock<log::Level> = OnceLock::new();

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_ansi(true)
                .with_writer(io::stdout)
                .with_filter(filter_fn(|meta| {
                    meta.is_span()
                        || (!STDERR_LEVELS.contains(meta.level()))
                            && LOG_LEVEL
                                .get()
                                .copied()
                                .unwrap_or(log::Level::INFO)
                                >= *meta.level()
                })),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_ansi(true)
                .with_writer(io::stderr)
                .with_filter(filter_fn(|meta| {
                    meta.is_span()
                        || (STDERR_LEVELS.contains(meta.level()))
                            && LOG_LEVEL
                                .get()
                                .copied()
                                .unwrap_or(log::Level::INFO)
                                >= *meta.level()
                })),
        )
        .init();

    if let Err(e) = start() {
        log::error!("{e}");
        std::process::exit(1);
    }
}

fn start() -> Result<(), Error> {
    let Args {
        config,
        format,
        request,
    } = Args::parse()?;

    let Config { pricing, log } = Config::new(config)?;

    LOG_LEVEL
        .set(log.level.into())
        .unwrap_or_else(|_| unreachable!("first initialization"));

    let service = Service::new(pricing.try_into()?);

    let form = application::read_form(&request)?;
    log::debug!(
        path = %request.display(),
        kind = %form.request.stay.kind,
        "request loaded",
    );

    let quote = application::quote(&service, form);
    println!("{}", application::render(&quote, format)?);

    Ok(())
}
