use std::fs;
use std::path::PathBuf;

use log::info;

use dmg_background::backdrop::Backdrop;
use dmg_background::config::BackdropConfig;
use dmg_background::display::PixelBuffer;
use dmg_background::error::Result;
use dmg_background::png;

/// Default output location, relative to the crate root
const DEFAULT_OUTPUT: &str = "build/dmg-background.png";

struct Options {
    out: Option<PathBuf>,
    config: Option<PathBuf>,
    dump_config: Option<PathBuf>,
}

/// Parse command line arguments. Everything is optional; a bare invocation
/// generates the canonical background.
fn parse_args() -> Options {
    let args: Vec<String> = std::env::args().collect();
    let mut opts = Options {
        out: None,
        config: None,
        dump_config: None,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--out" | "-o" => {
                if i + 1 < args.len() {
                    opts.out = Some(PathBuf::from(&args[i + 1]));
                    i += 1;
                }
            },
            "--config" | "-c" => {
                if i + 1 < args.len() {
                    opts.config = Some(PathBuf::from(&args[i + 1]));
                    i += 1;
                }
            },
            "--dump-config" => {
                if i + 1 < args.len() {
                    opts.dump_config = Some(PathBuf::from(&args[i + 1]));
                    i += 1;
                }
            },
            "--help" => {
                println!("Usage: dmg-background [OPTIONS]");
                println!();
                println!("Options:");
                println!("  --out PATH, -o PATH      Output file (default: {})", DEFAULT_OUTPUT);
                println!("  --config PATH, -c PATH   Load backdrop parameters from a JSON file");
                println!("  --dump-config PATH       Write the default config as JSON and exit");
                println!("  --help                   Show this help message");
                std::process::exit(0);
            },
            _ => {},
        }
        i += 1;
    }

    opts
}

fn run(opts: &Options) -> Result<()> {
    if let Some(path) = &opts.dump_config {
        BackdropConfig::default().save(path)?;
        println!("Default config written to {}", path.display());
        return Ok(());
    }

    let config = match &opts.config {
        Some(path) => {
            info!("loading config from {}", path.display());
            BackdropConfig::load(path)?
        },
        None => BackdropConfig::default(),
    };

    let out_path = opts.out.clone().unwrap_or_else(|| {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(DEFAULT_OUTPUT)
    });

    let (width, height) = (config.width, config.height);
    let backdrop = Backdrop::new(config);
    let mut buffer = PixelBuffer::with_size(width, height);
    backdrop.render(&mut buffer);

    let data = png::encode(width, height, buffer.as_bytes());
    if let Some(parent) = out_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&out_path, &data)?;

    println!(
        "DMG background created: {} ({}x{})",
        out_path.display(),
        width,
        height
    );
    Ok(())
}

fn main() {
    env_logger::init();
    let opts = parse_args();
    if let Err(e) = run(&opts) {
        eprintln!("dmg-background: {}", e);
        std::process::exit(1);
    }
}
