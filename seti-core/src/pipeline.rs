use std::time::Instant;

use log::{info, warn};
use serde::Serialize;
use seti_types::{PhysicalScales, SetiResult};

use crate::{
    bitstream::BitStream,
    calculator::{calculate, DerivedQuantity},
    config::DecoderConfig,
    decoder::{decode_scalars, DecodedScalars},
    grid::ImageGrid,
    render::{render_montage, MontageSink},
    VERSION,
};

/// Итог полного прогона.
#[derive(Debug, Clone, Serialize)]
pub struct DecodeReport {
    /// Отброшенных бит в хвосте файла
    pub trailing_bits: usize,
    pub scalars: DecodedScalars,
    pub scales: PhysicalScales,
    pub quantities: Vec<DerivedQuantity>,
}

/// Оркестрирует прогон: загрузка, проверка, сетка, рендер, декодирование,
/// расчёт.
pub struct DecodePipeline {
    config: DecoderConfig,
}

impl DecodePipeline {
    pub fn new(config: DecoderConfig) -> Self {
        Self { config }
    }

    /// Загрузка и обе проверки входа.
    pub fn load_grid(&self) -> SetiResult<ImageGrid> {
        let stream = BitStream::load(&self.config.input_path)?;
        ImageGrid::from_bitstream(stream, self.config.length_policy)
    }

    /// Собирает монтаж и отдаёт его во все sink'и по очереди.
    ///
    /// Ошибка отдельного sink'а не прерывает прогон: показ зависит от
    /// окружения.
    pub fn render(
        &self,
        grid: &ImageGrid,
        sinks: &mut [Box<dyn MontageSink>],
    ) -> SetiResult<()> {
        let montage = render_montage(grid, &self.config.render)?;

        for j in 0..grid.shape().pictures {
            info!("  picture {j}: {} lit pixels", grid.lit_pixels(j, 0));
        }

        for sink in sinks.iter_mut() {
            if let Err(e) = sink.present(&montage) {
                warn!("Montage sink '{}' failed: {e}", sink.name());
            }
        }

        Ok(())
    }

    /// Полный прогон. Блокируется, пока sink'и не вернут управление.
    pub fn run(
        &self,
        sinks: &mut [Box<dyn MontageSink>],
    ) -> SetiResult<DecodeReport> {
        let start = Instant::now();

        // До прохождения проверок входа в лог ничего не пишется
        let grid = self.load_grid()?;
        self.log_banner(&grid, sinks);

        self.render(&grid, sinks)?;

        let scalars = decode_scalars(&grid)?;
        let quantities = calculate(&scalars, &self.config.scales)?;

        info!("Decoded in {:.2?}", start.elapsed());

        Ok(DecodeReport {
            trailing_bits: grid.trailing_bits(),
            scalars,
            scales: self.config.scales,
            quantities,
        })
    }

    fn log_banner(
        &self,
        grid: &ImageGrid,
        sinks: &[Box<dyn MontageSink>],
    ) {
        let cfg = &self.config;
        let shape = grid.shape();
        let sink_names: Vec<&str> = sinks.iter().map(|s| s.name()).collect();

        info!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
        info!("  seti-core     : v{VERSION}");
        info!("  Input         : {:?}", cfg.input_path);
        info!(
            "  Grid          : {} x {} x {} x {}",
            shape.pictures, shape.row_groups, shape.rows, shape.cols
        );
        info!("  Length policy : {}", cfg.length_policy);
        info!("  Frequency     : {:.5} MHz", cfg.scales.frequency_hz / 1e6);
        info!("  Length unit   : {} m", cfg.scales.length_m);
        info!("  Time unit     : {:e} s", cfg.scales.time_s);
        info!("  Sinks         : {sink_names:?}");
        info!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    }
}

impl std::fmt::Display for DecodeReport {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        let mut lines = self.quantities.iter().peekable();

        while let Some(q) = lines.next() {
            if lines.peek().is_some() {
                writeln!(f, "{q}")?;
            } else {
                write!(f, "{q}")?;
            }
        }

        Ok(())
    }
}
