use anyhow::Result;
use clap::Parser;
use enquiry_core::{load_settings, EnquiryController};
use shared::domain::{phone_matches_pattern, FieldEdit, Requirement, SubmissionStatus};

#[derive(Parser, Debug)]
struct Args {
    /// Overrides the configured enquiry endpoint.
    #[arg(long)]
    api_url: Option<String>,
    #[arg(long)]
    full_name: String,
    #[arg(long)]
    phone: String,
    #[arg(long, default_value = "")]
    email: String,
    #[arg(long, default_value = "single")]
    requirement: Requirement,
    #[arg(long, default_value = "")]
    address: String,
    #[arg(long, default_value = "")]
    message: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().init();
    let args = Args::parse();

    // Input constraints live with the presentation layer; the controller
    // never sees an enquiry that fails them.
    if args.full_name.trim().is_empty() {
        anyhow::bail!("--full-name must not be empty");
    }
    if !phone_matches_pattern(&args.phone) {
        anyhow::bail!("--phone must be 8-15 characters of digits, '+', or space");
    }

    let mut settings = load_settings();
    if let Some(api_url) = args.api_url {
        settings.api_url = api_url;
    }

    let controller = EnquiryController::from_settings(&settings);
    controller
        .update_field(FieldEdit::FullName(args.full_name))
        .await;
    controller.update_field(FieldEdit::Phone(args.phone)).await;
    controller.update_field(FieldEdit::Email(args.email)).await;
    controller
        .update_field(FieldEdit::Requirement(args.requirement))
        .await;
    controller
        .update_field(FieldEdit::Address(args.address))
        .await;
    controller
        .update_field(FieldEdit::Message(args.message))
        .await;

    match controller.submit().await {
        SubmissionStatus::Done => {
            println!("Enquiry received. We'll get back to you within 24 hours.");
            Ok(())
        }
        _ => {
            eprintln!("Something went wrong. Please try again later.");
            std::process::exit(1);
        }
    }
}
