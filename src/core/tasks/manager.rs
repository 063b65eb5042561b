use std::{
    sync::{
        mpsc,
        Arc,
    },
    thread,
};

use log::debug;
use tokio::runtime::Runtime;

use super::{
    TaskFailure,
    TaskResult,
};
use crate::{
    core::{
        attachment::Attachment,
        service::MemberService,
        Member,
    },
    store::{
        ApiResponse,
        HttpMemberStore,
    },
};

type Service = MemberService<HttpMemberStore>;

pub struct TaskManager {
    runtime: Arc<Runtime>,
    service: Arc<Service>,
    receiver: mpsc::Receiver<TaskResult>,
    sender: mpsc::Sender<TaskResult>,
}

fn reply_text(reply: ApiResponse) -> String {
    reply.message.or(reply.result).unwrap_or_default()
}

impl TaskManager {
    pub fn new(store: HttpMemberStore) -> Self {
        let runtime = Arc::new(Runtime::new().expect("Failed to create TaskManager runtime"));

        let (sender, receiver) = mpsc::channel();

        Self { runtime, service: Arc::new(MemberService::new(store)), receiver, sender }
    }

    /// Points every later task at another endpoint. Tasks already running
    /// finish against the old one.
    pub fn set_store(&mut self, store: HttpMemberStore) {
        debug!("Member store now targets {}", store.url());
        self.service = Arc::new(MemberService::new(store));
    }

    pub fn store_url(&self) -> &str {
        self.service.store().url()
    }

    pub fn poll_results(&mut self) -> Vec<TaskResult> {
        let mut results = Vec::new();

        while let Ok(result) = self.receiver.try_recv() {
            results.push(result);
        }

        results
    }

    fn task_context(&self) -> (mpsc::Sender<TaskResult>, Arc<Runtime>, Arc<Service>) {
        (self.sender.clone(), self.runtime.clone(), self.service.clone())
    }

    pub fn load_members(&self) {
        let (sender, runtime, service) = self.task_context();

        thread::spawn(move || {
            let _ = sender.send(TaskResult::LoadingMessage("Cargando socios...".to_string()));

            let result = runtime.block_on(service.load()).map_err(TaskFailure::from);

            let _ = sender.send(TaskResult::MembersLoaded(result));
        });
    }

    pub fn create_member(&self, draft: Member, attachment: Option<Attachment>) {
        let (sender, runtime, service) = self.task_context();

        thread::spawn(move || {
            let result = runtime
                .block_on(service.create(draft, attachment))
                .map(reply_text)
                .map_err(TaskFailure::from);

            let _ = sender.send(TaskResult::MemberCreated(result));
        });
    }

    pub fn update_member(
        &self,
        members: Vec<Member>,
        original: Member,
        draft: Member,
        attachment: Option<Attachment>,
    ) {
        let (sender, runtime, service) = self.task_context();

        thread::spawn(move || {
            let result = runtime
                .block_on(service.update(&members, &original, draft, attachment))
                .map(reply_text)
                .map_err(TaskFailure::from);

            let _ = sender.send(TaskResult::MemberUpdated(result));
        });
    }

    /// Syncs the collection without `cedula`, then reloads whatever the sync
    /// outcome was. `members` is the collection as it was before the local
    /// removal.
    pub fn delete_member(&self, members: Vec<Member>, cedula: String) {
        let (sender, runtime, service) = self.task_context();

        thread::spawn(move || {
            let (synced, reloaded) =
                runtime.block_on(service.delete_and_reload(&members, &cedula));

            let _ = sender.send(TaskResult::MemberDeleted {
                synced: synced.map(|_| ()).map_err(TaskFailure::from),
                reloaded: reloaded.map_err(TaskFailure::from),
            });
        });
    }
}
