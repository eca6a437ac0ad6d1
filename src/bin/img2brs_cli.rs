use std::path::PathBuf;

use anyhow::Context;
use tokio::runtime::Runtime;

use img2brs_lib::convert::{self, ConvertOptions};
use img2brs_lib::geometry::Direction;
use img2brs_lib::raster;
use img2brs_lib::time::SystemClock;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        print_usage();
        std::process::exit(1);
    }

    let input = PathBuf::from(&args[1]);
    let mut save_name: Option<String> = None;
    let mut options = ConvertOptions::default();

    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "--size" => {
                let (x, y, z) = match (args.get(i + 1), args.get(i + 2), args.get(i + 3)) {
                    (Some(x), Some(y), Some(z)) => (x, y, z),
                    _ => {
                        eprintln!("--size requires three values: <x> <y> <z>");
                        std::process::exit(1);
                    }
                };
                options.size.x = parse_extent(x);
                options.size.y = parse_extent(y);
                options.size.z = parse_extent(z);
                i += 4;
            }
            "--direction" => {
                match args.get(i + 1).map(|s| s.as_str()) {
                    Some("vertical") => options.direction = Direction::Vertical,
                    Some("horizontal") => options.direction = Direction::Horizontal,
                    Some(other) => {
                        eprintln!("Unknown direction '{}', expected vertical or horizontal", other);
                        std::process::exit(1);
                    }
                    None => {
                        eprintln!("--direction requires a value (vertical or horizontal)");
                        std::process::exit(1);
                    }
                }
                i += 2;
            }
            "--brick" => {
                options.asset_name = required_value(&args, i, "--brick");
                i += 2;
            }
            "--material" => {
                options.material_name = required_value(&args, i, "--material");
                i += 2;
            }
            "--description" => {
                options.description = Some(required_value(&args, i, "--description"));
                i += 2;
            }
            other if other.starts_with("--") => {
                eprintln!("Unknown option '{}'", other);
                print_usage();
                std::process::exit(1);
            }
            name => {
                if save_name.is_some() {
                    eprintln!("Unexpected argument '{}'", name);
                    print_usage();
                    std::process::exit(1);
                }
                save_name = Some(name.to_string());
                i += 1;
            }
        }
    }

    let image = raster::load_image(&input)
        .with_context(|| format!("failed to decode {}", input.display()))?;
    eprintln!(
        "Converting {} ({}x{}, {} {:?}) ...",
        input.display(),
        image.width(),
        image.height(),
        options.asset_name,
        options.direction,
    );

    let runtime = Runtime::new().context("failed to start the runtime")?;
    let buffer = runtime
        .block_on(convert::convert_image(&image, &options, &SystemClock))
        .context("conversion failed")?;

    let output = convert::save_file_name(save_name.as_deref());
    std::fs::write(&output, &buffer).with_context(|| format!("failed to write {}", output))?;
    eprintln!("Wrote {} ({} bytes)", output, buffer.len());
    Ok(())
}

fn parse_extent(value: &str) -> u32 {
    match value.parse::<u32>() {
        Ok(extent) => extent,
        Err(_) => {
            eprintln!("Brick size '{}' is not a whole number", value);
            std::process::exit(1);
        }
    }
}

fn required_value(args: &[String], i: usize, flag: &str) -> String {
    match args.get(i + 1) {
        Some(value) => value.clone(),
        None => {
            eprintln!("{} requires a value", flag);
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  img2brs <image> [save_name] [options]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --size <x> <y> <z>    brick half-extents in game units (default 5 5 2)");
    eprintln!("  --direction <mode>    vertical | horizontal (default vertical)");
    eprintln!("  --brick <name>        brick asset to build with (default PB_DefaultBrick)");
    eprintln!("  --material <name>     material to build with (default BMC_Plastic)");
    eprintln!("  --description <text>  description stored in the save");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  img2brs logo.png");
    eprintln!("  img2brs logo.png mural --size 2 2 2");
    eprintln!("  img2brs floor.png floor --direction horizontal --material BMC_Glow");
    eprintln!();
    eprintln!("Brick assets: {}", convert::BRICK_ASSETS.join(", "));
    eprintln!("Materials: {}", convert::MATERIALS.join(", "));
}
