use eframe::egui;

/// Window shown over a dimmed backdrop, owning the data it edits.
pub struct Modal<T> {
    pub open: bool,
    pub title: String,
    pub data: T,
    pub config: ModalConfig,
}

#[derive(Clone)]
pub struct ModalConfig {
    pub resizable: bool,
    pub min_size: Option<egui::Vec2>,
    pub max_height: Option<f32>,
    pub show_overlay: bool,
    /// Clicking the backdrop cancels.
    pub close_on_outside_click: bool,
}

impl Default for ModalConfig {
    fn default() -> Self {
        Self {
            resizable: false,
            min_size: Some(egui::Vec2::new(300.0, 120.0)),
            max_height: None,
            show_overlay: true,
            close_on_outside_click: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ModalResult<T> {
    Confirmed(T),
    Cancelled,
}

impl<T: Default> Modal<T> {
    pub fn new(title: impl Into<String>) -> Self {
        Self::new_with_data(title, T::default())
    }
}

impl<T> Modal<T> {
    pub fn new_with_data(title: impl Into<String>, data: T) -> Self {
        Self { open: false, title: title.into(), data, config: ModalConfig::default() }
    }

    pub fn with_config(mut self, config: ModalConfig) -> Self {
        self.config = config;
        self
    }

    pub fn open_with(&mut self, data: T) {
        self.data = data;
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn show<F>(&mut self, ctx: &egui::Context, content: F) -> Option<ModalResult<T>>
    where
        F: FnOnce(&mut egui::Ui, &mut T) -> Option<ModalResult<T>>,
    {
        if !self.open {
            return None;
        }

        let clicked_outside = self.config.show_overlay && show_overlay(ctx, &self.title);

        let mut window = egui::Window::new(&self.title)
            .collapsible(false)
            .resizable(self.config.resizable)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO);

        if let Some(min_size) = self.config.min_size {
            window = window.min_size(min_size);
        }

        let max_height = self.config.max_height;
        let mut result = window
            .show(ctx, |ui| match max_height {
                Some(height) => egui::ScrollArea::vertical()
                    .max_height(height)
                    .show(ui, |ui| content(ui, &mut self.data))
                    .inner,
                None => content(ui, &mut self.data),
            })
            .and_then(|response| response.inner)
            .flatten();

        if result.is_none() && clicked_outside && self.config.close_on_outside_click {
            result = Some(ModalResult::Cancelled);
        }

        if result.is_some() {
            self.open = false;
        }
        result
    }
}

fn show_overlay(ctx: &egui::Context, title: &str) -> bool {
    egui::Area::new(egui::Id::new(("modal_overlay", title)))
        .order(egui::Order::Middle)
        .fixed_pos(egui::Pos2::ZERO)
        .show(ctx, |ui| {
            let screen_rect = ctx.screen_rect();
            let (_rect, response) =
                ui.allocate_exact_size(screen_rect.size(), egui::Sense::click());
            ui.painter().rect_filled(screen_rect, 0.0, egui::Color32::from_black_alpha(100));
            response.clicked()
        })
        .inner
}

/// Confirm/cancel row. The confirm button is greyed out while `enabled` is false.
pub fn action_buttons<T>(
    ui: &mut egui::Ui,
    data: &T,
    confirm_text: &str,
    cancel_text: &str,
    enabled: bool,
) -> Option<ModalResult<T>>
where
    T: Clone,
{
    ui.horizontal(|ui| {
        if ui.add_enabled(enabled, egui::Button::new(confirm_text)).clicked() {
            Some(ModalResult::Confirmed(data.clone()))
        } else if ui.button(cancel_text).clicked() {
            Some(ModalResult::Cancelled)
        } else {
            None
        }
    })
    .inner
}
