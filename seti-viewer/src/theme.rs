use egui::{Color32, Context, Stroke, Style, Visuals};

/// Фон окна близок к matplotlib: белое поле, картинки в палитре gray.
pub fn configure_style(ctx: &Context) {
    let mut style = Style::default();
    let mut visuals = Visuals::light();

    visuals.window_fill = Color32::WHITE;
    visuals.panel_fill = Color32::WHITE;
    visuals.extreme_bg_color = Color32::from_rgb(240, 240, 240);
    visuals.window_stroke = Stroke::new(1.0, Color32::from_rgb(200, 200, 200));
    visuals.override_text_color = Some(Color32::from_rgb(20, 20, 20));

    style.visuals = visuals;

    // Отступы
    style.spacing.item_spacing = egui::vec2(4.0, 4.0);
    style.spacing.window_margin = egui::Margin::same(8);

    ctx.set_style(style);
}
