use eframe::egui::{
    self,
    RichText,
};

use crate::{
    core::Member,
    gui::modal::{
        action_buttons,
        Modal,
        ModalConfig,
        ModalResult,
    },
};

/// Second step of a delete: nothing is removed until "Sí, Eliminar".
pub struct DeleteConfirmModal {
    modal: Modal<Member>,
}

pub fn confirmation_text(member: &Member) -> String {
    format!(
        "¿Está seguro que desea eliminar al socio {} con cédula {}?",
        member.full_name(),
        member.cedula
    )
}

impl DeleteConfirmModal {
    pub fn new() -> Self {
        let config = ModalConfig { min_size: Some(egui::Vec2::new(380.0, 140.0)), ..Default::default() };
        Self { modal: Modal::new("Confirmar Eliminación").with_config(config) }
    }

    pub fn open(&mut self, member: Member) {
        self.modal.open_with(member);
    }

    pub fn is_open(&self) -> bool {
        self.modal.is_open()
    }

    /// Returns the member on the frame the deletion is confirmed.
    pub fn show(&mut self, ctx: &egui::Context, busy: bool) -> Option<Member> {
        let result = self.modal.show(ctx, |ui, member| {
            ui.label(confirmation_text(member));
            ui.add_space(4.0);
            ui.label(
                RichText::new("Esta acción no se puede deshacer.")
                    .color(ui.visuals().error_fg_color)
                    .small(),
            );
            ui.separator();

            let confirm_text = if busy { "Eliminando..." } else { "Sí, Eliminar" };
            action_buttons(ui, member, confirm_text, "Cancelar", !busy)
        });

        match result {
            Some(ModalResult::Confirmed(member)) => Some(member),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confirmation_names_the_member() {
        let member = Member {
            nombres_completos: "Ana María".to_string(),
            apellidos_completos: "Pérez Soto".to_string(),
            cedula: "0912345678".to_string(),
            ..Member::default()
        };
        assert_eq!(
            confirmation_text(&member),
            "¿Está seguro que desea eliminar al socio Ana María Pérez Soto con cédula 0912345678?"
        );

        let modal = DeleteConfirmModal::new();
        assert!(!modal.is_open());
    }
}
