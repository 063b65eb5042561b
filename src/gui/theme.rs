use eframe::egui::{
    self,
    RichText,
};
use egui::{
    epaint::Shadow,
    style::{
        Selection,
        WidgetVisuals,
        Widgets,
    },
    Color32,
    Stroke,
    Visuals,
};

/// Bar colors for the dashboard charts, cycled by bar index.
const CHART_PALETTE: [Color32; 8] = [
    Color32::from_rgb(0x3b, 0x82, 0xf6),
    Color32::from_rgb(0x10, 0xb9, 0x81),
    Color32::from_rgb(0xf5, 0x9e, 0x0b),
    Color32::from_rgb(0x8b, 0x5c, 0xf6),
    Color32::from_rgb(0xec, 0x48, 0x99),
    Color32::from_rgb(0x06, 0xb6, 0xd4),
    Color32::from_rgb(0xf9, 0x73, 0x16),
    Color32::from_rgb(0x64, 0x74, 0x8b),
];

#[derive(Clone)]
pub struct Theme {
    dark: ThemeDetails,
    light: ThemeDetails,
}

impl Default for Theme {
    fn default() -> Self {
        Theme { dark: ThemeDetails::slate(), light: ThemeDetails::slate_light() }
    }
}

impl Theme {
    fn details(&self, ctx: &egui::Context) -> &ThemeDetails {
        if ctx.style().visuals.dark_mode {
            &self.dark
        } else {
            &self.light
        }
    }

    pub fn heading(&self, ctx: &egui::Context, content: &str) -> RichText {
        RichText::new(content).color(self.details(ctx).accent).strong()
    }

    pub fn muted(&self, ctx: &egui::Context, content: &str) -> RichText {
        RichText::new(content).color(self.details(ctx).comment)
    }

    pub fn accent(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).accent
    }

    pub fn red(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).red
    }

    pub fn green(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).green
    }

    pub fn card_fill(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).background_light
    }

    pub fn chart_color(index: usize) -> Color32 {
        CHART_PALETTE[index % CHART_PALETTE.len()]
    }
}

#[derive(Clone)]
pub struct ThemeDetails {
    background: Color32,
    foreground: Color32,
    selection: Color32,
    comment: Color32,
    accent: Color32,
    red: Color32,
    orange: Color32,
    green: Color32,
    background_darker: Color32,
    background_dark: Color32,
    background_light: Color32,
    background_lighter: Color32,
}

impl ThemeDetails {
    fn slate() -> Self {
        Self {
            background: Color32::from_rgb(0x1e, 0x29, 0x3b),
            foreground: Color32::from_rgb(0xe2, 0xe8, 0xf0),
            selection: Color32::from_rgb(0x33, 0x41, 0x55),
            comment: Color32::from_rgb(0x94, 0xa3, 0xb8),
            accent: Color32::from_rgb(0x60, 0xa5, 0xfa),
            red: Color32::from_rgb(0xf8, 0x71, 0x71),
            orange: Color32::from_rgb(0xfb, 0x92, 0x3c),
            green: Color32::from_rgb(0x34, 0xd3, 0x99),
            background_darker: Color32::from_rgb(0x0b, 0x11, 0x20),
            background_dark: Color32::from_rgb(0x0f, 0x17, 0x2a),
            background_light: Color32::from_rgb(0x27, 0x34, 0x49),
            background_lighter: Color32::from_rgb(0x33, 0x41, 0x55),
        }
    }

    fn slate_light() -> Self {
        Self {
            background: Color32::from_rgb(0xff, 0xff, 0xff),
            foreground: Color32::from_rgb(0x1e, 0x29, 0x3b),
            selection: Color32::from_rgb(0xdb, 0xea, 0xfe),
            comment: Color32::from_rgb(0x64, 0x74, 0x8b),
            accent: Color32::from_rgb(0x25, 0x63, 0xeb),
            red: Color32::from_rgb(0xdc, 0x26, 0x26),
            orange: Color32::from_rgb(0xea, 0x58, 0x0c),
            green: Color32::from_rgb(0x05, 0x96, 0x69),
            background_darker: Color32::from_rgb(0xe2, 0xe8, 0xf0),
            background_dark: Color32::from_rgb(0xf1, 0xf5, 0xf9),
            background_light: Color32::from_rgb(0xf8, 0xfa, 0xfc),
            background_lighter: Color32::from_rgb(0xff, 0xff, 0xff),
        }
    }
}

pub fn set_theme(ctx: &egui::Context, theme: &Theme, dark_mode: bool) {
    set_theme_variant(ctx, &theme.dark, true);
    set_theme_variant(ctx, &theme.light, false);
    ctx.set_theme(if dark_mode { egui::Theme::Dark } else { egui::Theme::Light });
}

fn set_theme_variant(ctx: &egui::Context, theme: &ThemeDetails, is_dark: bool) {
    let (default, variant) = match is_dark {
        true => (Visuals::dark(), egui::Theme::Dark),
        false => (Visuals::light(), egui::Theme::Light),
    };

    let widget = |base: WidgetVisuals, bg_fill: Color32, stroke: Color32| WidgetVisuals {
        bg_fill,
        weak_bg_fill: theme.background_lighter,
        bg_stroke: Stroke { color: stroke, ..base.bg_stroke },
        fg_stroke: Stroke { color: theme.foreground, ..base.fg_stroke },
        ..base
    };

    ctx.set_visuals_of(
        variant,
        Visuals {
            dark_mode: is_dark,
            widgets: Widgets {
                noninteractive: widget(
                    default.widgets.noninteractive,
                    theme.background,
                    theme.background_darker,
                ),
                inactive: widget(
                    default.widgets.inactive,
                    theme.background_light,
                    theme.background_darker,
                ),
                hovered: widget(default.widgets.hovered, theme.selection, theme.accent),
                active: widget(default.widgets.active, theme.selection, theme.accent),
                open: widget(default.widgets.open, theme.background_dark, theme.accent),
            },
            selection: Selection {
                bg_fill: theme.selection,
                stroke: Stroke { color: theme.foreground, ..default.selection.stroke },
            },
            hyperlink_color: theme.accent,
            faint_bg_color: theme.background_light,
            extreme_bg_color: theme.background_darker,
            code_bg_color: theme.background_dark,
            error_fg_color: theme.red,
            warn_fg_color: theme.orange,
            window_shadow: Shadow { color: theme.background_darker, ..default.window_shadow },
            window_fill: theme.background,
            window_stroke: Stroke { color: theme.background_light, ..default.window_stroke },
            panel_fill: theme.background_dark,
            popup_shadow: Shadow { color: theme.background_dark, ..default.popup_shadow },
            ..default
        },
    );
}
