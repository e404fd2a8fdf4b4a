use std::path::PathBuf;

use clap::Parser;
use log::{error, info};
use seti_core::{
    parse_freq_hz, DecodePipeline, DecodeReport, DecoderConfig, LengthPolicy, MontageSink,
    PngSink, RenderOptions, DEFAULT_MESSAGE_FILE, MAX_GAP_PX,
};
use seti_types::PhysicalScales;

#[derive(Parser, Debug)]
#[command(
    name = "seti-cli",
    version = env!("CARGO_PKG_VERSION"),
    about = "Decode a SETI message: show its pictures and print the physical scales it encodes",
    long_about = None,
)]
struct Cli {
    /// Файл сообщения (ASCII-цифры 0/1)
    #[arg(short, long, default_value = DEFAULT_MESSAGE_FILE)]
    input: PathBuf,
    /// Сохранить монтаж картинок в PNG
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Не открывать окно просмотра
    #[arg(long)]
    no_display: bool,
    /// Лишние биты после конца сообщения считать ошибкой
    #[arg(long)]
    strict: bool,
    /// Частота сигнала для пересчёта единиц (452.12919MHz, 0.45GHz, 452129190)
    #[arg(short = 'f', long)]
    frequency: Option<String>,
    /// Зазор между картинками в монтаже, пиксели (0..=256)
    #[arg(
        long,
        default_value = "8",
        value_parser = clap::value_parser!(u32).range(0..=MAX_GAP_PX as i64),
    )]
    gap: u32,
    /// Вывести отчёт в JSON
    #[arg(long)]
    json: bool,
    /// Тихий режим (только ошибки)
    #[arg(short, long)]
    quiet: bool,
}

fn build_config(cli: &Cli) -> Result<DecoderConfig, String> {
    let scales = match &cli.frequency {
        Some(f) => PhysicalScales::from_frequency(parse_freq_hz(f)?),
        None => PhysicalScales::default(),
    };

    let length_policy = if cli.strict {
        LengthPolicy::Exact
    } else {
        LengthPolicy::Truncate
    };

    Ok(DecoderConfig {
        input_path: cli.input.clone(),
        length_policy,
        scales,
        render: RenderOptions {
            gap_px: cli.gap,
            ..RenderOptions::default()
        },
    })
}

fn build_sinks(cli: &Cli) -> Vec<Box<dyn MontageSink>> {
    let mut sinks: Vec<Box<dyn MontageSink>> = Vec::new();

    if let Some(path) = &cli.output {
        sinks.push(Box::new(PngSink::new(path)));
    }

    if !cli.no_display {
        #[cfg(feature = "display")]
        sinks.push(Box::new(seti_viewer::WindowSink));

        #[cfg(not(feature = "display"))]
        log::warn!("Built without the `display` feature, pictures are not shown");
    }

    sinks
}

fn print_report(
    report: &DecodeReport,
    json: bool,
) {
    if json {
        match serde_json::to_string_pretty(report) {
            Ok(s) => println!("{s}"),
            Err(e) => {
                error!("Failed to serialize report: {e}");
                std::process::exit(1);
            }
        }
    } else {
        println!("{report}");
    }
}

fn main() {
    let cli = Cli::parse();
    let level = if cli.quiet { "error" } else { "info" };

    env_logger::Builder::new()
        .filter_level(level.parse().unwrap_or(log::LevelFilter::Info))
        .format_target(false)
        .format_timestamp_secs()
        .init();

    let config = match build_config(&cli) {
        Ok(c) => c,
        Err(e) => {
            error!("--frequency: {e}");
            std::process::exit(1);
        }
    };

    let mut sinks = build_sinks(&cli);
    let pipeline = DecodePipeline::new(config);

    match pipeline.run(&mut sinks) {
        Ok(report) => {
            if report.trailing_bits > 0 {
                info!("Use --strict to reject input with trailing bits");
            }

            print_report(&report, cli.json);
            info!("✓ Decoding complete");
        }
        // Файл не найден / файл неполный: одна строка в stderr
        Err(e) if e.is_input_gate() => {
            eprintln!("{e}");
            std::process::exit(1);
        }
        Err(e) => {
            error!("Decoding failed: {e}");
            std::process::exit(1);
        }
    }
}
