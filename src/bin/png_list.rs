use anyhow::Context;
use png_list::{list_png, HexDumper};

fn main() -> anyhow::Result<()> {
    pretty_env_logger::formatted_builder()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let args: Vec<_> = std::env::args().collect();
    let show_ascii = args.get(1).map(|arg| arg == "-a").unwrap_or(false);
    let path = match if show_ascii { args.get(2) } else { args.get(1) } {
        Some(path) => path,
        None => {
            eprintln!("Usage: {} [-a] <png file>", args[0]);
            std::process::exit(1);
        }
    };

    let input = std::fs::read(path).with_context(|| format!("Failed to open {path}."))?;
    let dumper = HexDumper::new(show_ascii);
    let mut out = std::io::stdout().lock();
    list_png(&input, &dumper, &mut out)?;
    Ok(())
}
