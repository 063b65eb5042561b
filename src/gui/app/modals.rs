use crate::gui::{
    delete_modal::DeleteConfirmModal,
    member_card::MemberCard,
    notification::NotificationModal,
    settings::SettingsModal,
};

pub struct Modals {
    pub notification: NotificationModal,
    pub settings: SettingsModal,
    pub delete: DeleteConfirmModal,
    pub member_card: MemberCard,
}

impl Default for Modals {
    fn default() -> Self {
        Self {
            notification: NotificationModal::new(),
            settings: SettingsModal::new(),
            delete: DeleteConfirmModal::new(),
            member_card: MemberCard::default(),
        }
    }
}
