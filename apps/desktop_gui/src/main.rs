use clap::Parser;

mod backend_bridge;
mod controller;
mod ui;

#[derive(Parser, Debug)]
struct Args {
    /// Overrides the configured enquiry endpoint.
    #[arg(long)]
    api_url: Option<String>,
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt().init();
    let args = Args::parse();

    let mut settings = enquiry_core::load_settings();
    if let Some(api_url) = args.api_url {
        settings.api_url = api_url;
    }

    let (cmd_tx, cmd_rx) = crossbeam_channel::bounded(64);
    let (ui_tx, ui_rx) = crossbeam_channel::bounded(64);
    backend_bridge::runtime::launch(settings, cmd_rx, ui_tx);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Enquiry / Booking")
            .with_inner_size([460.0, 640.0])
            .with_min_inner_size([380.0, 540.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Enquiry / Booking",
        options,
        Box::new(move |_cc| Ok(Box::new(ui::app::EnquiryApp::new(cmd_tx, ui_rx)))),
    )
}
