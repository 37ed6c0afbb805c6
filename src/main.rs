mod account;
mod app;
mod audio;
mod catalog;
mod config;
mod playback;
mod progress;
mod runtime;
mod shell;
#[cfg(test)]
mod testing;
mod tracklist;
mod ui;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    runtime::run()
}
