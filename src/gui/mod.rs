pub mod actions;
pub mod app;
pub mod dashboard;
pub mod delete_modal;
pub mod form;
pub mod member_card;
pub mod message_overlay;
pub mod modal;
pub mod notification;
pub mod settings;
pub mod table;
pub mod theme;
pub mod top_bar;

pub use actions::{
    ActionQueue,
    UiAction,
};
pub use app::{
    AedisApp,
    View,
};
pub use settings::SettingsData;
