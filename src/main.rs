// SPDX-License-Identifier: MPL-2.0
use std::path::PathBuf;
use vernissage::app::{self, Flags};

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        config_path: args.opt_value_from_str::<_, PathBuf>("--config").unwrap_or(None),
        gallery_dir: args
            .finish()
            .into_iter()
            .next()
            .map(PathBuf::from),
    };

    app::run(flags)
}
