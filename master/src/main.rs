use std::process;

use log::error;

mod modules;
mod utilities;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(e) = modules::run() {
        error!("{}", e);
        process::exit(1);
    }
}
