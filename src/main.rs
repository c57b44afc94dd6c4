// SPDX-License-Identifier: MPL-2.0
use page_lens::app::{self, Flags};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("page_lens=debug,info")),
        )
        .init();

    let mut args = pico_args::Arguments::from_env();

    let zoom: Option<f64> = match args.opt_value_from_str("--zoom") {
        Ok(zoom) => zoom,
        Err(err) => {
            tracing::error!(%err, "invalid --zoom value, ignoring it");
            None
        }
    };
    let no_fit = args.contains("--no-fit");

    let flags = Flags {
        zoom,
        fit: no_fit.then_some(false),
        file_path: args.finish().into_iter().next().map(PathBuf::from),
    };

    app::run(flags)
}
