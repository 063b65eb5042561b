use eframe::egui::{
    self,
    Color32,
    RichText,
    Ui,
};

use crate::{
    core::{
        models::STATUS_ACTIVE,
        stats::calculate_stats,
        DashboardStats,
        Distribution,
        Member,
    },
    gui::theme::Theme,
};

const BAR_HEIGHT: f32 = 18.0;
const LABEL_WIDTH: f32 = 150.0;
const CHART_WIDTH: f32 = 360.0;

/// Bar length of each entry relative to the largest one, in `[0, 1]`.
pub fn bar_fractions(distribution: &[Distribution]) -> Vec<f32> {
    let max = distribution.iter().map(|entry| entry.value).max().unwrap_or(0);
    distribution
        .iter()
        .map(|entry| if max == 0 { 0.0 } else { entry.value as f32 / max as f32 })
        .collect()
}

pub fn dashboard(ui: &mut Ui, members: &[Member], theme: &Theme) {
    let stats = calculate_stats(members);

    ui.heading(RichText::new("Panel General").strong());
    ui.add_space(10.0);

    kpi_row(ui, &stats, theme);
    ui.add_space(16.0);

    egui::ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
        ui.horizontal_wrapped(|ui| {
            bar_chart(ui, theme, "Género", &stats.gender_distribution, palette);
            bar_chart(ui, theme, "Tipo de Socio", &stats.type_distribution, palette);
            bar_chart(ui, theme, "Estado", &stats.status_distribution, |_, entry| {
                if entry.name == STATUS_ACTIVE {
                    Color32::from_rgb(0x10, 0xb9, 0x81)
                } else {
                    Color32::from_rgb(0xef, 0x44, 0x44)
                }
            });
            bar_chart(
                ui,
                theme,
                "Por Tipo de Discapacidad",
                &stats.disability_distribution,
                palette,
            );
            bar_chart(ui, theme, "Rangos de Porcentaje", &stats.percentage_ranges, palette);
            bar_chart(ui, theme, "Nivel de Instrucción", &stats.education_distribution, palette);
            bar_chart(ui, theme, "Top Provincias", &stats.province_distribution, palette);
        });
    });
}

fn palette(index: usize, _entry: &Distribution) -> Color32 {
    Theme::chart_color(index)
}

fn kpi_row(ui: &mut Ui, stats: &DashboardStats, theme: &Theme) {
    let ctx = ui.ctx().clone();
    ui.horizontal_wrapped(|ui| {
        kpi_card(ui, theme, "Total Socios", stats.total_members.to_string(), theme.accent(&ctx));
        kpi_card(
            ui,
            theme,
            "Socios Activos",
            stats.active_members.to_string(),
            theme.green(&ctx),
        );
        kpi_card(
            ui,
            theme,
            "Discapacidad Promedio",
            format!("{}%", stats.avg_disability),
            Color32::from_rgb(0xf9, 0x73, 0x16),
        );
        kpi_card(
            ui,
            theme,
            "Provincias",
            stats.total_provinces.to_string(),
            Color32::from_rgb(0x8b, 0x5c, 0xf6),
        );
    });
}

fn kpi_card(ui: &mut Ui, theme: &Theme, title: &str, value: String, stripe: Color32) {
    egui::Frame::new()
        .fill(theme.card_fill(ui.ctx()))
        .corner_radius(6.0)
        .inner_margin(egui::Margin::same(12))
        .show(ui, |ui| {
            ui.set_min_width(170.0);
            let rect = ui.max_rect();
            ui.painter().rect_filled(
                egui::Rect::from_min_size(
                    rect.left_top() - egui::vec2(12.0, 12.0),
                    egui::vec2(4.0, rect.height() + 24.0),
                ),
                0.0,
                stripe,
            );
            ui.vertical(|ui| {
                ui.label(theme.muted(ui.ctx(), title));
                ui.label(RichText::new(value).size(28.0).strong());
            });
        });
}

fn bar_chart(
    ui: &mut Ui,
    theme: &Theme,
    title: &str,
    distribution: &[Distribution],
    color_for: impl Fn(usize, &Distribution) -> Color32,
) {
    egui::Frame::new()
        .fill(theme.card_fill(ui.ctx()))
        .corner_radius(6.0)
        .inner_margin(egui::Margin::same(12))
        .show(ui, |ui| {
            ui.set_width(LABEL_WIDTH + CHART_WIDTH + 60.0);
            ui.label(RichText::new(title).size(16.0).strong());
            ui.add_space(6.0);

            if distribution.is_empty() {
                ui.label(theme.muted(ui.ctx(), "Sin datos"));
                return;
            }

            let fractions = bar_fractions(distribution);
            for (index, (entry, fraction)) in distribution.iter().zip(fractions).enumerate() {
                ui.horizontal(|ui| {
                    ui.add_sized(
                        [LABEL_WIDTH, BAR_HEIGHT],
                        egui::Label::new(&entry.name).truncate(),
                    );

                    let (rect, response) = ui.allocate_exact_size(
                        egui::vec2(CHART_WIDTH, BAR_HEIGHT),
                        egui::Sense::hover(),
                    );
                    let bar = egui::Rect::from_min_size(
                        rect.min,
                        egui::vec2((CHART_WIDTH * fraction).max(2.0), BAR_HEIGHT),
                    );
                    ui.painter().rect_filled(bar, 3.0, color_for(index, entry));
                    response.on_hover_text(format!("{}: {}", entry.name, entry.value));

                    ui.label(entry.value.to_string());
                });
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_fractions() {
        let distribution = vec![
            Distribution::new("Activo", 4),
            Distribution::new("Inactivo", 1),
            Distribution::new("Indefinido", 0),
        ];
        assert_eq!(bar_fractions(&distribution), vec![1.0, 0.25, 0.0]);
        assert!(bar_fractions(&[]).is_empty());
        assert_eq!(bar_fractions(&[Distribution::new("X", 0)]), vec![0.0]);
    }
}
