// src/ui/helpers.rs
use egui::{Button, Color32, RichText, Sense, Ui, Vec2};

/// Botão de opção que fica "aceso" quando selecionado.
pub fn choice_button(ui: &mut Ui, label: &str, width: f32, height: f32, selected: bool) -> bool {
    ui.add(
        Button::new(label)
            .selected(selected)
            .min_size(Vec2::new(width, height)),
    )
    .clicked()
}

/// Etiqueta colorida (área, disciplina...)
pub fn tag(ui: &mut Ui, text: &str, color: Color32) {
    ui.label(
        RichText::new(text.to_uppercase())
            .small()
            .strong()
            .color(color),
    );
}

/// Linha de bolinhas: atual maior, respondidas cinza escuro.
pub fn progress_dots(ui: &mut Ui, answered: &[bool], current: usize) {
    let radius = 4.0;
    let spacing = 12.0;
    let width = (answered.len() as f32 * spacing).min(ui.available_width());
    let per_row = (width / spacing).floor().max(1.0) as usize;
    let rows = answered.len().div_ceil(per_row).max(1);
    let (rect, _) = ui.allocate_exact_size(Vec2::new(width, spacing * rows as f32), Sense::hover());
    let painter = ui.painter_at(rect);

    for (idx, done) in answered.iter().enumerate() {
        let (row, col) = (idx / per_row, idx % per_row);
        let center = rect.left_top()
            + Vec2::new(
                spacing * col as f32 + spacing / 2.0,
                spacing * row as f32 + spacing / 2.0,
            );
        let (r, color) = if idx == current {
            (radius * 1.4, Color32::from_rgb(37, 99, 235))
        } else if *done {
            (radius, Color32::GRAY)
        } else {
            (radius, Color32::from_gray(220))
        };
        painter.circle_filled(center, r, color);
    }
}
