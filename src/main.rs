use simulador_inss::QuizApp;

const APP_TITLE: &str = "Simulador INSS - CEBRASPE";

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    let mut builder = pretty_env_logger::formatted_builder();
    match std::env::var("RUST_LOG") {
        Ok(filters) => builder.parse_filters(&filters),
        Err(_) => builder.parse_filters("simulador_inss=info"),
    };
    if let Err(e) = builder.try_init() {
        eprintln!("logger já inicializado: {e}");
    }

    log::info!("Iniciando {APP_TITLE}");
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(APP_TITLE)
            .with_inner_size([900.0, 760.0]),
        ..Default::default()
    };
    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(|_cc| Ok(Box::new(QuizApp::new()))),
    )
}

#[cfg(target_arch = "wasm32")]
fn main() {
    use wasm_bindgen::JsCast;

    eframe::WebLogger::init(log::LevelFilter::Info).ok();

    wasm_bindgen_futures::spawn_local(async {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            log::error!("Sem acesso ao documento da página");
            return;
        };
        let canvas = match document
            .get_element_by_id("the_canvas_id")
            .map(|el| el.dyn_into::<web_sys::HtmlCanvasElement>())
        {
            Some(Ok(canvas)) => canvas,
            _ => {
                log::error!("Canvas 'the_canvas_id' não encontrado");
                return;
            }
        };

        let result = eframe::WebRunner::new()
            .start(
                canvas,
                eframe::WebOptions::default(),
                Box::new(|_cc| Ok(Box::new(QuizApp::new()))),
            )
            .await;
        if let Err(e) = result {
            log::error!("Falha ao iniciar o simulador: {e:?}");
        }
    });
}
