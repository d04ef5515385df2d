// SPDX-License-Identifier: MPL-2.0
use iced_toasts::app::{self, Flags};

fn parse_flags() -> Result<Flags, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    Ok(Flags {
        placement: args.opt_value_from_str("--placement")?,
        max_stack: args.opt_value_from_str("--max-stack")?,
        duration_ms: args.opt_value_from_str("--duration")?,
    })
}

fn main() -> iced::Result {
    let flags = match parse_flags() {
        Ok(flags) => flags,
        Err(error) => {
            eprintln!("iced_toasts: {error}");
            eprintln!(
                "usage: iced_toasts [--placement topLeft|topRight|bottomLeft|bottomRight] \
                 [--max-stack N] [--duration MS]"
            );
            std::process::exit(2);
        }
    };

    app::run(flags)
}
