//! Report command implementation

use crate::cli::{CommandContext, GlobalOptions};
use crate::error::Result;
use crate::output;

/// Run the sub-group report, streaming rows to stdout as they resolve.
pub async fn run(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let top_group = ctx.config.top_group.clone();

    log::info!(
        "Reporting sub-groups of {} (concurrency {})",
        top_group,
        ctx.config.concurrency
    );

    let mut sink = output::sink_for(ctx.format, std::io::stdout());
    let total = ctx.aggregator().run(&top_group, sink.as_mut()).await?;

    log::info!("Reported {} sub-groups", total);
    Ok(())
}
