use log::LevelFilter;
use log4rs::{
    append::console::ConsoleAppender,
    config::{Appender, Config, Root},
    encode::pattern::PatternEncoder,
};

const CONFIG_FILE: &str = "log4rs.yaml";
const FALLBACK_PATTERN: &str = "{d(%H:%M:%S%.3f)} {h({l})} {t} - {m}{n}";

#[ctor::ctor]
fn init() {
    if log4rs::init_file(CONFIG_FILE, Default::default()).is_ok() {
        return;
    }
    if let Some(config) = fallback_config() {
        if let Err(e) = log4rs::init_config(config) {
            eprintln!("Unable to install console logger: {}", e);
        }
    }
}

fn fallback_config() -> Option<Config> {
    let stdout = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new(FALLBACK_PATTERN)))
        .build();
    Config::builder()
        .appender(Appender::builder().build("stdout", Box::new(stdout)))
        .build(Root::builder().appender("stdout").build(LevelFilter::Info))
        .ok()
}

pub fn log_pass(name: &str, width: usize, height: usize) {
    log::debug!("Applied {} to {}x{} grid", name, width, height);
}
