use tracing_subscriber::EnvFilter;

use window_inspector::app::InspectorApp;
use window_inspector::error::InspectorError;

fn main() -> Result<(), InspectorError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default().with_inner_size([1280.0, 800.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Window Inspector",
        options,
        Box::new(|_cc| Ok(Box::new(InspectorApp::new()))),
    )?;
    Ok(())
}
