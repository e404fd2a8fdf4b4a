//! SETI-viewer: окно просмотра декодированных картинок
//!
//! Монтаж 7x1 показывается в окне eframe; вызов блокируется, пока
//! пользователь не закроет окно.

pub mod app;
pub mod theme;

use image::GrayImage;
use log::info;
use seti_core::MontageSink;
use seti_types::{SetiError, SetiResult};

pub use app::{fit_size, MontageViewer, WINDOW_TITLE};

/// Открывает окно с монтажом и ждёт его закрытия.
pub fn show_montage(montage: &GrayImage) -> eframe::Result<()> {
    let montage = montage.clone();
    let aspect = montage.width() as f32 / montage.height().max(1) as f32;
    let height = 900.0;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([(height * aspect).max(240.0), height])
            .with_min_inner_size([160.0, 320.0])
            .with_title(WINDOW_TITLE),
        ..Default::default()
    };

    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(move |cc| Ok(Box::new(MontageViewer::new(cc, &montage)))),
    )
}

/// Sink, показывающий монтаж в интерактивном окне.
#[derive(Debug, Default, Clone, Copy)]
pub struct WindowSink;

impl MontageSink for WindowSink {
    fn name(&self) -> &str {
        "window"
    }

    fn present(
        &mut self,
        montage: &GrayImage,
    ) -> SetiResult<()> {
        info!("Opening viewer window, close it to continue");

        show_montage(montage).map_err(|e| SetiError::render(e.to_string()))
    }
}
