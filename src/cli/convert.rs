use super::{apply_edit, ui};
use crate::core::config::OutputFormat;
use crate::core::{Field, FormController, FormEvent};
use anyhow::Result;
use tracing::info;

/// Field texts given on the command line. `None` means the field was never touched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConvertRequest {
    pub price_eur: Option<String>,
    pub price_bgn: Option<String>,
    pub paid_eur: Option<String>,
    pub paid_bgn: Option<String>,
}

impl ConvertRequest {
    /// Edits in the order a cashier fills the form: prices first, then payments.
    fn edits(&self) -> impl Iterator<Item = (Field, &str)> {
        [
            (Field::PriceEur, &self.price_eur),
            (Field::PriceBgn, &self.price_bgn),
            (Field::PaidEur, &self.paid_eur),
            (Field::PaidBgn, &self.paid_bgn),
        ]
        .into_iter()
        .filter_map(|(field, text)| text.as_deref().map(|t| (field, t)))
    }
}

/// Replays the request as a sequence of user edits.
pub fn evaluate(request: &ConvertRequest, mixed_mode: bool) -> FormController {
    let mut controller = FormController::new(mixed_mode);
    controller.handle(FormEvent::Init);
    for (field, text) in request.edits() {
        info!(%field, text, "Applying edit");
        apply_edit(&mut controller, field, text);
    }
    controller
}

/// Evaluates the request and renders the resulting form.
pub fn render(request: &ConvertRequest, mixed_mode: bool, format: OutputFormat) -> Result<String> {
    let controller = evaluate(request, mixed_mode);
    ui::render_form(
        controller.fields(),
        controller.mixed_mode(),
        controller.change(),
        format,
    )
}

pub fn run(request: &ConvertRequest, mixed_mode: bool, format: OutputFormat) -> Result<()> {
    println!("{}", render(request, mixed_mode, format)?);
    Ok(())
}
