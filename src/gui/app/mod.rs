mod modals;

use std::mem;

use eframe::egui;
use log::{
    error,
    info,
    warn,
};
use modals::Modals;

use super::{
    actions::{
        ActionQueue,
        UiAction,
    },
    dashboard::dashboard,
    form::{
        member_form,
        FormEvent,
        FormState,
    },
    message_overlay::MessageOverlay,
    settings::SettingsData,
    table::{
        member_table,
        ListState,
    },
    theme::{
        set_theme,
        Theme,
    },
    top_bar::TopBar,
};
use crate::{
    core::{
        export::{
            export_csv,
            CSV_FILE_NAME,
        },
        service::remove_by_cedula,
        tasks::{
            TaskFailure,
            TaskManager,
            TaskResult,
        },
        Member,
    },
    store::HttpMemberStore,
};

/// The four mutually exclusive main views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Dashboard,
    List,
    Create,
    Edit,
}

pub struct AedisApp {
    // Data
    pub members: Vec<Member>,

    // Configuration
    pub settings_data: SettingsData,

    // UI State
    pub view: View,
    pub list_state: ListState,
    pub form: Option<FormState>,
    pub theme: Theme,
    pub message_overlay: MessageOverlay,

    // Modals
    pub modals: Modals,

    /// A create, update or delete is in flight.
    pub busy: bool,
    task_manager: TaskManager,
}

impl AedisApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        settings_data: SettingsData,
        store: HttpMemberStore,
    ) -> Self {
        let task_manager = TaskManager::new(store);
        task_manager.load_members();

        let app = Self {
            members: Vec::new(),
            list_state: ListState::with_page_size(settings_data.items_per_page),
            settings_data,
            view: View::default(),
            form: None,
            theme: Theme::default(),
            message_overlay: MessageOverlay::new(),
            modals: Modals::default(),
            busy: false,
            task_manager,
        };

        set_theme(&cc.egui_ctx, &app.theme, app.settings_data.dark_mode);
        app
    }

    fn save_settings(&mut self) {
        if let Err(e) = self.settings_data.save() {
            error!("Failed to save settings: {}", e);
            self.modals
                .notification
                .show_error("Error al guardar la configuración", &TaskFailure::from(e));
        }
    }

    fn reload(&mut self) {
        info!("Reloading members from {}", self.task_manager.store_url());
        self.task_manager.load_members();
    }

    fn navigate(&mut self, view: View) {
        match view {
            View::Create => self.form = Some(FormState::new_create()),
            View::Edit => {}
            View::Dashboard | View::List => self.form = None,
        }
        self.view = view;
    }

    fn edit_member(&mut self, index: usize) {
        if let Some(member) = self.members.get(index) {
            self.form = Some(FormState::new_edit(member));
            self.view = View::Edit;
        }
    }

    /// Removes the member locally, then syncs the remaining collection and
    /// reloads in the background.
    fn delete_member(&mut self, member: Member) {
        match remove_by_cedula(&self.members, &member.cedula) {
            Ok(remaining) => {
                info!("Deleting member {}", member.cedula);
                let before = mem::replace(&mut self.members, remaining);
                self.list_state.mark_dirty();
                self.busy = true;
                self.task_manager.delete_member(before, member.cedula);
            }
            Err(e) => {
                error!("Delete of {} rejected: {}", member.cedula, e);
                self.modals.notification.show_error("Error al eliminar socio", &TaskFailure::from(e));
            }
        }
    }

    fn export_members(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .set_title("Exportar CSV")
            .set_file_name(CSV_FILE_NAME)
            .add_filter("CSV", &["csv"])
            .save_file()
        else {
            return;
        };

        match export_csv(&self.members, &path) {
            Ok(()) => info!("Exported {} members to {}", self.members.len(), path.display()),
            Err(e) => {
                error!("CSV export to {} failed: {}", path.display(), e);
                self.modals.notification.show_error("Error al exportar", &TaskFailure::from(e));
            }
        }
    }

    fn apply_settings(&mut self, ctx: &egui::Context, settings: SettingsData) {
        let url_changed = settings.api_url != self.settings_data.api_url;
        self.settings_data = settings;
        self.save_settings();
        set_theme(ctx, &self.theme, self.settings_data.dark_mode);

        if !url_changed {
            return;
        }
        match HttpMemberStore::new(self.settings_data.api_url.clone()) {
            Ok(store) => {
                self.task_manager.set_store(store);
                self.reload();
            }
            Err(e) => {
                error!("Could not rebuild member store: {}", e);
                self.modals
                    .notification
                    .show_error("Error al aplicar la configuración", &TaskFailure::from(e));
            }
        }
    }

    fn handle_form_event(&mut self, event: FormEvent) {
        match event {
            FormEvent::Submit(submission) => {
                self.busy = true;
                match submission.original {
                    Some(original) => {
                        info!("Updating member {}", original.cedula);
                        self.task_manager.update_member(
                            self.members.clone(),
                            original,
                            submission.draft,
                            submission.attachment,
                        );
                    }
                    None => {
                        info!("Creating member {}", submission.draft.cedula);
                        self.task_manager.create_member(submission.draft, submission.attachment);
                    }
                }
            }
            FormEvent::Cancel => self.navigate(View::List),
            FormEvent::Notify(message) => {
                let failure = TaskFailure { message, details: String::new() };
                self.modals.notification.show_error("Atención", &failure);
            }
        }
    }

    fn set_members(&mut self, members: Vec<Member>) {
        info!("Loaded {} members", members.len());
        self.members = members;
        self.list_state.mark_dirty();
    }

    fn handle_task_result(&mut self, result: TaskResult) {
        match result {
            TaskResult::LoadingMessage(message) => {
                self.message_overlay.set_message(message);
            }

            TaskResult::MembersLoaded(result) => {
                self.message_overlay.clear_message();
                match result {
                    Ok(members) => self.set_members(members),
                    Err(failure) => {
                        error!("Loading members failed: {}", failure.details);
                        self.modals.notification.show_error("Error al cargar socios", &failure);
                    }
                }
            }

            TaskResult::MemberCreated(result) => {
                self.busy = false;
                self.mutation_finished(result, "Socio creado exitosamente.", "Error al crear socio");
            }

            TaskResult::MemberUpdated(result) => {
                self.busy = false;
                self.mutation_finished(
                    result,
                    "Socio actualizado exitosamente.",
                    "Error al actualizar socio",
                );
            }

            TaskResult::MemberDeleted { synced, reloaded } => {
                self.busy = false;
                if let Err(failure) = &synced {
                    error!("Delete failed: {}", failure.details);
                    self.modals.notification.show_error("Error al eliminar socio", failure);
                }
                match reloaded {
                    Ok(members) => self.set_members(members),
                    Err(failure) => {
                        warn!("Reload after delete failed: {}", failure.details);
                        if synced.is_ok() {
                            self.modals.notification.show_error("Error al cargar socios", &failure);
                        }
                    }
                }
            }
        }
    }

    /// Success returns to the list and reloads; failure keeps the form open.
    fn mutation_finished(&mut self, result: Result<String, TaskFailure>, ok: &str, title: &str) {
        match result {
            Ok(reply) => {
                info!("{} {}", ok, reply);
                self.modals.notification.show_success(ok);
                self.navigate(View::List);
                self.reload();
            }
            Err(failure) => {
                error!("{}: {}", title, failure.details);
                self.modals.notification.show_error(title, &failure);
            }
        }
    }

    fn execute_actions(&mut self, ctx: &egui::Context, actions: &mut ActionQueue) {
        for action in actions.drain() {
            match action {
                UiAction::ToggleSort(field) => self.list_state.toggle_sort(field),
                UiAction::SetSearch(search) => self.list_state.set_search(search),
                UiAction::SetPageSize(size) => {
                    self.list_state.set_page_size(size);
                    self.settings_data.items_per_page = self.list_state.page_size();
                    self.save_settings();
                }
                UiAction::PreviousPage => self.list_state.previous_page(),
                UiAction::NextPage => self.list_state.next_page(),
                UiAction::ShowRecord(index) => {
                    if let Some(member) = self.members.get(index) {
                        self.modals.member_card.open(member.clone());
                    }
                }
                UiAction::EditMember(index) => self.edit_member(index),
                UiAction::RequestDelete(index) => {
                    if let Some(member) = self.members.get(index) {
                        self.modals.delete.open(member.clone());
                    }
                }
                UiAction::Navigate(view) => self.navigate(view),
                UiAction::ExportCsv => self.export_members(),
                UiAction::OpenSettings => {
                    self.modals.settings.open_settings(self.settings_data.clone());
                }
                UiAction::Reload => self.reload(),
            }
            ctx.request_repaint();
        }
    }
}

impl eframe::App for AedisApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        for result in self.task_manager.poll_results() {
            self.handle_task_result(result);
        }
        if self.busy || self.message_overlay.active {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }

        let mut actions = ActionQueue::new();

        TopBar::show(ctx, self.view, self.members.len(), self.busy, &self.theme, &mut actions);

        let mut form_event = None;
        egui::CentralPanel::default().show(ctx, |ui| match self.view {
            View::Dashboard => dashboard(ui, &self.members, &self.theme),
            View::List => member_table(
                ui,
                &self.members,
                &mut self.list_state,
                &self.theme,
                self.busy,
                &mut actions,
            ),
            View::Create | View::Edit => match self.form.as_mut() {
                Some(form) => form_event = member_form(ui, form, &self.theme, self.busy),
                None => form_event = Some(FormEvent::Cancel),
            },
        });

        if let Some(event) = form_event {
            self.handle_form_event(event);
        }

        self.modals.member_card.show(ctx, &self.theme);

        if let Some(member) = self.modals.delete.show(ctx, self.busy) {
            self.delete_member(member);
        }

        if let Some(settings) = self.modals.settings.show(ctx) {
            self.apply_settings(ctx, settings);
        }

        self.message_overlay.show(ctx, &self.theme);
        self.modals.notification.show(ctx);

        self.execute_actions(ctx, &mut actions);
    }
}
