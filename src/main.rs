#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use grammar_quiz::{AppConfig, QuizApp};

#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();

    let config = AppConfig::from_env();
    // Un banco mal formado se detecta aquí, antes de abrir la ventana
    let app = QuizApp::from_config(config)?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(app.config.window_size)
            .with_min_inner_size([480.0, 420.0]),
        ..Default::default()
    };
    let title = app.config.title.clone();
    eframe::run_native(&title, options, Box::new(move |_cc| Ok(Box::new(app))))?;
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {
    use eframe::wasm_bindgen::JsCast as _;

    eframe::WebLogger::init(log::LevelFilter::Debug).ok();
    let web_options = eframe::WebOptions::default();

    wasm_bindgen_futures::spawn_local(async {
        let Some(canvas) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("the_canvas_id"))
            .and_then(|e| e.dyn_into::<web_sys::HtmlCanvasElement>().ok())
        else {
            log::error!("no se encontró el canvas #the_canvas_id");
            return;
        };

        let start_result = eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(|_cc| {
                    let app = QuizApp::from_config(AppConfig::default())?;
                    Ok(Box::new(app))
                }),
            )
            .await;

        if let Err(e) = start_result {
            log::error!("no se pudo arrancar la app web: {e:?}");
        }
    });
}
