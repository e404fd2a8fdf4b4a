use egui::{load::SizedTexture, TextureHandle, TextureOptions, Vec2};
use image::GrayImage;

use crate::theme;

/// Заголовок над монтажом.
pub const WINDOW_TITLE: &str = "test";

/// Окно с монтажом картинок. Осей нет, только изображение.
pub struct MontageViewer {
    texture: TextureHandle,
    image_size: Vec2,
}

impl MontageViewer {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        montage: &GrayImage,
    ) -> Self {
        theme::configure_style(&cc.egui_ctx);

        let size = [montage.width() as usize, montage.height() as usize];
        let color = egui::ColorImage::from_gray(size, montage.as_raw());

        // NEAREST: пиксели сообщения остаются резкими при масштабировании
        let texture = cc
            .egui_ctx
            .load_texture("seti-montage", color, TextureOptions::NEAREST);

        Self {
            texture,
            image_size: Vec2::new(size[0] as f32, size[1] as f32),
        }
    }
}

impl eframe::App for MontageViewer {
    fn update(
        &mut self,
        ctx: &egui::Context,
        _frame: &mut eframe::Frame,
    ) {
        egui::TopBottomPanel::top("title").show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading(WINDOW_TITLE);
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let size = fit_size(self.image_size, ui.available_size());

            ui.vertical_centered(|ui| {
                ui.add(egui::Image::new(SizedTexture::new(self.texture.id(), size)));
            });
        });
    }
}

/// Масштаб изображения под доступную область с сохранением пропорций.
pub fn fit_size(
    image: Vec2,
    available: Vec2,
) -> Vec2 {
    if image.x <= 0.0 || image.y <= 0.0 {
        return Vec2::ZERO;
    }

    let scale = (available.x / image.x).min(available.y / image.y).max(0.0);

    image * scale
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_size_keeps_aspect() {
        let img = Vec2::new(359.0, 5_347.0);
        let fit = fit_size(img, Vec2::new(800.0, 900.0));

        assert!((fit.y - 900.0).abs() < 1e-3);
        assert!((fit.x / fit.y - img.x / img.y).abs() < 1e-6);
    }

    #[test]
    fn test_fit_size_width_bound() {
        let fit = fit_size(Vec2::new(400.0, 100.0), Vec2::new(200.0, 1_000.0));
        assert_eq!(fit, Vec2::new(200.0, 50.0));
    }

    #[test]
    fn test_fit_size_degenerate() {
        assert_eq!(fit_size(Vec2::ZERO, Vec2::new(10.0, 10.0)), Vec2::ZERO);
    }
}
