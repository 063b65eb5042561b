use aedis::{
    gui::{
        AedisApp,
        SettingsData,
    },
    store::HttpMemberStore,
};
use eframe::egui;
use log::info;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("aedis=info"))
        .init();

    let settings = SettingsData::load();
    info!("Member store: {}", settings.api_url);
    let store = HttpMemberStore::new(settings.api_url.clone())?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 820.0])
            .with_min_inner_size([900.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        "AEDIS - Gestión de Socios",
        options,
        Box::new(move |cc| Ok(Box::new(AedisApp::new(cc, settings, store)))),
    )?;

    Ok(())
}
