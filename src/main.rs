use crate::config::Config;

mod address;
mod config;
mod domain;
mod errors;
mod extract;
mod geocode;
mod output;
mod pipeline;
mod url_check;

#[cfg(test)]
mod tests;

fn main() {
    // 1️⃣ Resolve configuration from the environment
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {e}");
            std::process::exit(1);
        }
    };

    println!("Extracting listings from {}", config.input_path);

    // 2️⃣ Run the pipeline end to end
    if let Err(e) = pipeline::run(&config) {
        eprintln!("❌ {e}");
        std::process::exit(1);
    }
}
