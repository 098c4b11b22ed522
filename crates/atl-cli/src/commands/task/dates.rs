use atl_db::updates::task::DatesUpdateBuilder;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::parse_clearable_date;
use crate::context::AppContext;
use crate::output::output;

pub struct Params {
    pub id: String,
    pub due: Option<String>,
    pub start: Option<String>,
    pub delivery: Option<String>,
}

pub async fn run(params: Params, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    validate_dates_params(&params)?;

    let mut builder = DatesUpdateBuilder::new();
    if let Some(raw) = params.due.as_deref() {
        builder = builder.due_date(parse_clearable_date(raw, "due")?);
    }
    if let Some(raw) = params.start.as_deref() {
        builder = builder.activity_start(parse_clearable_date(raw, "start")?);
    }
    if let Some(raw) = params.delivery.as_deref() {
        builder = builder.last_delivery(parse_clearable_date(raw, "delivery")?);
    }

    let task = ctx.service.set_dates(&params.id, builder.build()).await?;
    output(&task, flags.format)
}

fn validate_dates_params(params: &Params) -> anyhow::Result<()> {
    if params.due.is_none() && params.start.is_none() && params.delivery.is_none() {
        anyhow::bail!("At least one of --due, --start, or --delivery must be provided");
    }
    Ok(())
}
