use std::path::PathBuf;

use image::{imageops, GrayImage, Luma};
use log::info;
use seti_types::{SetiError, SetiResult};

use crate::{
    config::{RenderOptions, MAX_GAP_PX},
    grid::ImageGrid,
};

/// Яркость пикселя для бита 0 / 1 (палитра gray: 0 - чёрный, 1 - белый).
pub const LUMA_OFF: u8 = 0;
pub const LUMA_ON: u8 = 255;

/// Куда отдаётся собранный монтаж.
// Реализации: [`PngSink`], [`MemorySink`] и окно в `seti-viewer`.
pub trait MontageSink {
    /// Короткое имя для логов
    fn name(&self) -> &str;

    /// Показывает или сохраняет монтаж. Может блокироваться (окно).
    fn present(
        &mut self,
        montage: &GrayImage,
    ) -> SetiResult<()>;
}

/// Сохраняет монтаж в PNG.
#[derive(Debug, Clone)]
pub struct PngSink {
    path: PathBuf,
}

/// Складывает монтажи в память (для тестов).
#[derive(Debug, Default)]
pub struct MemorySink {
    pub frames: Vec<GrayImage>,
}

////////////////////////////////////////////////////////////////////////////////
// Сборка изображений
////////////////////////////////////////////////////////////////////////////////

/// Одна картинка как изображение `cols x rows`.
pub fn picture_image(
    grid: &ImageGrid,
    picture: usize,
    row_group: usize,
) -> SetiResult<GrayImage> {
    let shape = grid.shape();
    let bits = grid
        .picture(picture, row_group)
        .ok_or(SetiError::RowOutOfRange { picture, row: 0 })?;

    let pixels: Vec<u8> = bits.iter().map(|&b| bit_luma(b)).collect();

    GrayImage::from_raw(shape.cols as u32, shape.rows as u32, pixels)
        .ok_or_else(|| SetiError::render(format!("picture {picture}: buffer size mismatch")))
}

/// Монтаж всех картинок в один столбец.
///
/// Сверху картинка с наибольшим индексом, снизу - картинка 0. Между
/// картинками полоса `gap_px` яркостью `gap_luma`. Зазор больше
/// [`MAX_GAP_PX`] - ошибка [`SetiError::Render`], до выделения буфера.
pub fn render_montage(
    grid: &ImageGrid,
    opts: &RenderOptions,
) -> SetiResult<GrayImage> {
    if opts.gap_px > MAX_GAP_PX {
        return Err(SetiError::render(format!(
            "gap {} px exceeds the limit of {MAX_GAP_PX} px",
            opts.gap_px
        )));
    }

    let shape = grid.shape();
    let tiles = shape.pictures * shape.row_groups;
    let (width, height) = montage_size(
        shape.cols,
        shape.rows,
        tiles,
        opts.gap_px,
    )
    .ok_or_else(|| SetiError::render("montage size overflows u32"))?;

    let mut montage = GrayImage::from_pixel(width, height, Luma([opts.gap_luma]));
    let pitch = shape.rows as i64 + i64::from(opts.gap_px);

    for j in 0..shape.pictures {
        for k in 0..shape.row_groups {
            let tile = picture_image(grid, j, k)?;
            let slot = tile_slot(j, k, shape.pictures, shape.row_groups) as i64;

            imageops::replace(&mut montage, &tile, 0, slot * pitch);
        }
    }

    Ok(montage)
}

/// Размер монтажа `(ширина, высота)`; `None` при переполнении `u32`.
fn montage_size(
    cols: usize,
    rows: usize,
    tiles: usize,
    gap_px: u32,
) -> Option<(u32, u32)> {
    let width = u32::try_from(cols).ok()?;
    let rows = u32::try_from(rows).ok()?;
    let tiles = u32::try_from(tiles).ok()?;

    let height = tiles
        .checked_mul(rows)?
        .checked_add(tiles.saturating_sub(1).checked_mul(gap_px)?)?;

    // Буфер GrayImage индексируется usize
    usize::try_from(u64::from(width) * u64::from(height)).ok()?;

    Some((width, height))
}

/// Позиция тайла сверху вниз: порядок индексов обратный.
pub fn tile_slot(
    picture: usize,
    row_group: usize,
    pictures: usize,
    row_groups: usize,
) -> usize {
    pictures * row_groups - 1 - (picture * row_groups + row_group)
}

fn bit_luma(b: u8) -> u8 {
    if b == 0 {
        LUMA_OFF
    } else {
        LUMA_ON
    }
}

////////////////////////////////////////////////////////////////////////////////
// Реализации MontageSink
////////////////////////////////////////////////////////////////////////////////

impl PngSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl MontageSink for PngSink {
    fn name(&self) -> &str {
        "png"
    }

    fn present(
        &mut self,
        montage: &GrayImage,
    ) -> SetiResult<()> {
        montage
            .save(&self.path)
            .map_err(|e| SetiError::render(format!("{:?}: {e}", self.path)))?;

        info!(
            "Montage {}x{} saved to {:?}",
            montage.width(),
            montage.height(),
            self.path
        );

        Ok(())
    }
}

impl MontageSink for MemorySink {
    fn name(&self) -> &str {
        "memory"
    }

    fn present(
        &mut self,
        montage: &GrayImage,
    ) -> SetiResult<()> {
        self.frames.push(montage.clone());
        Ok(())
    }
}
